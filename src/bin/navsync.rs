//! Fill the API reference subgroups of `docs/docs.json` from the OpenAPI spec.
//!
//! Usage:
//!   navsync                         # discover the project root, update in place
//!   navsync --dry-run -v            # report what would change
//!   navsync --docs nav.json --openapi api.json
//!   navsync --json                  # machine-readable run summary
//!
//! Exit status is 1 when an input is missing or unreadable and 0 otherwise,
//! including runs where no subgroup matched.

use anyhow::Result;
use clap::Parser;
use navsync::navigation::OVERVIEW_GROUP;
use navsync::{SyncOutcome, resolve_options};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "navsync")]
#[command(about = "Populate docs.json navigation groups with pages generated from OpenAPI tags")]
struct Cli {
    /// Project root containing docs/docs.json (discovered when omitted).
    #[arg(long)]
    root: Option<PathBuf>,
    /// Navigation config to update.
    #[arg(long, env = "NAVSYNC_DOCS")]
    docs: Option<PathBuf>,
    /// OpenAPI document to read.
    #[arg(long, env = "NAVSYNC_OPENAPI")]
    openapi: Option<PathBuf>,
    /// Report the subgroups that would change without writing.
    #[arg(long)]
    dry_run: bool,
    /// Print the run summary as JSON on stdout instead of a status line.
    #[arg(long)]
    json: bool,
    /// Raise log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let options =
        resolve_options(cli.root.as_deref(), cli.docs, cli.openapi)?.with_dry_run(cli.dry_run);
    let outcome = navsync::run(&options)?;
    if cli.json {
        if let Some(err) = &outcome.structure_error {
            eprintln!("{err}");
        }
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }
    report(&outcome, &options.docs_path, &options.openapi_path, options.dry_run);
    Ok(())
}

fn report(outcome: &SyncOutcome, docs: &Path, openapi: &Path, dry_run: bool) {
    if let Some(err) = &outcome.structure_error {
        eprintln!("{err}");
    }

    if !outcome.changed() {
        println!(
            "No matching groups were updated (ensure your '{OVERVIEW_GROUP}' subgroups match OpenAPI tag names)."
        );
        return;
    }

    if dry_run {
        println!(
            "Dry run: {} group(s) in {} would be updated from {}",
            outcome.report.updated.len(),
            docs.display(),
            openapi.display()
        );
        for group in &outcome.report.updated {
            println!("  {} ({} pages)", group.group, group.pages);
        }
        return;
    }

    println!(
        "Updated {} with pages generated from {}",
        docs.display(),
        openapi.display()
    );
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "navsync=warn",
        1 => "navsync=info",
        _ => "navsync=debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}
