//! One synchronization pass: load, extract, merge, and write back.
//!
//! Output is UTF-8 with non-ASCII text written as-is. Legacy navigation files
//! that escape it as `\uXXXX` get those bytes rewritten on their first run.

use crate::config::SyncOptions;
use crate::error::{NavigationError, SyncError};
use crate::navigation::{MergeReport, merge_with_report};
use crate::openapi::{SlugCollision, extract_tagged_pages, find_slug_collisions};
use anyhow::{Context, Result};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// What a run did. Serializes as the `--json` summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncOutcome {
    pub report: MergeReport,
    /// Set when the navigation subtree could not be located.
    #[serde(serialize_with = "error_message")]
    pub structure_error: Option<NavigationError>,
    pub collisions: Vec<SlugCollision>,
    /// True only when the navigation file was rewritten.
    pub written: bool,
}

fn error_message<S: Serializer>(
    err: &Option<NavigationError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match err {
        Some(err) => serializer.serialize_some(&err.to_string()),
        None => serializer.serialize_none(),
    }
}

impl SyncOutcome {
    pub fn changed(&self) -> bool {
        self.report.changed()
    }
}

/// Run one pass over the files named in `options`.
///
/// Missing inputs and unparsable JSON are errors. A missing navigation
/// subtree is not: it is returned in [`SyncOutcome::structure_error`] with
/// zero updates and the file left alone.
pub fn run(options: &SyncOptions) -> Result<SyncOutcome> {
    if !options.openapi_path.is_file() {
        return Err(SyncError::OpenApiNotFound(options.openapi_path.clone()).into());
    }
    if !options.docs_path.is_file() {
        return Err(SyncError::DocsNotFound(options.docs_path.clone()).into());
    }

    let spec = load_json(&options.openapi_path)?;
    let mut docs = load_json(&options.docs_path)?;

    let pages = extract_tagged_pages(&spec);
    let collisions = find_slug_collisions(&spec);
    for collision in &collisions {
        warn!(
            page = %collision.page_path,
            endpoints = %collision.endpoints.join(", "),
            "several endpoints share one page path"
        );
    }

    let (report, structure_error) = match merge_with_report(&mut docs, &pages) {
        Ok(report) => (report, None),
        Err(err) => (MergeReport::default(), Some(err)),
    };
    for tag in &report.unmatched {
        debug!(tag = %tag, "tag has no navigation subgroup");
    }

    let mut outcome = SyncOutcome {
        report,
        structure_error,
        collisions,
        written: false,
    };
    if !outcome.changed() {
        info!("no navigation subgroups matched");
        return Ok(outcome);
    }
    if options.dry_run {
        info!(
            groups = outcome.report.updated.len(),
            "dry run; leaving {} untouched",
            options.docs_path.display()
        );
        return Ok(outcome);
    }

    save_json(&options.docs_path, &docs)?;
    info!(
        groups = outcome.report.updated.len(),
        "wrote {}",
        options.docs_path.display()
    );
    outcome.written = true;
    Ok(outcome)
}

pub fn load_json(path: &Path) -> Result<Value> {
    let data = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))
}

/// Two-space indented JSON with a trailing newline.
pub fn render_json(value: &Value) -> Result<String> {
    let mut rendered = serde_json::to_string_pretty(value).context("serializing JSON")?;
    rendered.push('\n');
    Ok(rendered)
}

pub fn save_json(path: &Path, value: &Value) -> Result<()> {
    let rendered = render_json(value)?;
    fs::write(path, rendered).with_context(|| format!("writing {}", path.display()))
}
