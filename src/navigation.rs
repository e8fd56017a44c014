//! Merge generated pages into the navigation document.
//!
//! Only `navigation.tabs[tab == "Methods"].groups[group == "Methods overview"]`
//! is touched. Its `pages` list holds hand-curated subgroups; a subgroup
//! whose slugged name equals a tag's slug has its `pages` replaced wholesale.
//! Tags without a matching subgroup are skipped, and no subgroup is ever
//! created.

use crate::error::NavigationError;
use crate::openapi::TagPages;
use crate::slug::group_slug;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

pub const METHODS_TAB: &str = "Methods";
pub const OVERVIEW_GROUP: &str = "Methods overview";

/// A subgroup whose page list was replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdatedGroup {
    pub group: String,
    pub tag: String,
    pub pages: usize,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    pub updated: Vec<UpdatedGroup>,
    /// Tags with no subgroup of the same slug.
    pub unmatched: Vec<String>,
}

impl MergeReport {
    pub fn changed(&self) -> bool {
        !self.updated.is_empty()
    }
}

/// Replace matching subgroup page lists; returns whether any were updated.
pub fn merge_into_navigation(docs: &mut Value, pages: &TagPages) -> Result<bool, NavigationError> {
    merge_with_report(docs, pages).map(|report| report.changed())
}

/// Same as [`merge_into_navigation`] but records what matched.
pub fn merge_with_report(
    docs: &mut Value,
    pages: &TagPages,
) -> Result<MergeReport, NavigationError> {
    let tab = find_methods_tab(docs).ok_or(NavigationError::MissingTab { tab: METHODS_TAB })?;
    let overview = find_overview_group(tab).ok_or(NavigationError::MissingGroup {
        tab: METHODS_TAB,
        group: OVERVIEW_GROUP,
    })?;
    let Some(subgroups) = overview.get_mut("pages") else {
        debug!("'{OVERVIEW_GROUP}' has no pages; nothing to match");
        return Ok(MergeReport {
            updated: Vec::new(),
            unmatched: pages.tags().map(str::to_string).collect(),
        });
    };
    let subgroups = subgroups
        .as_array_mut()
        .ok_or(NavigationError::PagesNotList {
            group: OVERVIEW_GROUP,
        })?;

    let index = index_subgroups(subgroups);
    let mut report = MergeReport::default();
    for (tag, tag_pages) in pages.iter() {
        let Some(&position) = index.get(&group_slug(tag)) else {
            debug!(tag, "no matching subgroup; skipping");
            report.unmatched.push(tag.to_string());
            continue;
        };
        let Some(subgroup) = subgroups[position].as_object_mut() else {
            continue;
        };
        let group = subgroup
            .get("group")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let list = tag_pages.iter().cloned().map(Value::String).collect();
        subgroup.insert("pages".to_string(), Value::Array(list));
        debug!(tag, group = %group, pages = tag_pages.len(), "replaced subgroup pages");
        report.updated.push(UpdatedGroup {
            group,
            tag: tag.to_string(),
            pages: tag_pages.len(),
        });
    }
    Ok(report)
}

fn find_methods_tab(docs: &mut Value) -> Option<&mut Map<String, Value>> {
    docs.get_mut("navigation")?
        .get_mut("tabs")?
        .as_array_mut()?
        .iter_mut()
        .filter_map(Value::as_object_mut)
        .find(|tab| tab.get("tab").and_then(Value::as_str) == Some(METHODS_TAB))
}

fn find_overview_group(tab: &mut Map<String, Value>) -> Option<&mut Map<String, Value>> {
    tab.get_mut("groups")?
        .as_array_mut()?
        .iter_mut()
        .filter_map(Value::as_object_mut)
        .find(|group| group.get("group").and_then(Value::as_str) == Some(OVERVIEW_GROUP))
}

// Later subgroups with the same slug shadow earlier ones.
fn index_subgroups(subgroups: &[Value]) -> BTreeMap<String, usize> {
    let mut index = BTreeMap::new();
    for (position, subgroup) in subgroups.iter().enumerate() {
        let Some(name) = subgroup.get("group").and_then(Value::as_str) else {
            continue;
        };
        if name.is_empty() {
            continue;
        }
        index.insert(group_slug(name), position);
    }
    index
}
