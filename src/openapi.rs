//! Tag-to-pages extraction from an OpenAPI document.
//!
//! Only `paths.<path>.<method>.tags` is read. Anything that does not have the
//! expected shape (non-object path items or operations, non-list `tags`,
//! non-string tag entries) is skipped rather than reported, so partially
//! hand-edited specifications still produce pages for the parts that parse.

use crate::slug::{is_http_method, is_ignored_tag, page_path, page_slug};
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use tracing::debug;

/// Sorted, deduplicated page paths keyed by original tag name.
///
/// Tags are walked in the order they are first seen in the document, so when
/// two tags share a group slug the one that appears later wins the merge.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TagPages {
    by_tag: BTreeMap<String, BTreeSet<String>>,
    order: Vec<String>,
}

impl TagPages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `page` under `tag`. Duplicates collapse.
    pub fn insert(&mut self, tag: &str, page: String) {
        if !self.by_tag.contains_key(tag) {
            self.order.push(tag.to_string());
        }
        self.by_tag.entry(tag.to_string()).or_default().insert(page);
    }

    pub fn pages(&self, tag: &str) -> Option<&BTreeSet<String>> {
        self.by_tag.get(tag)
    }

    /// Tags in first-seen order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.order
            .iter()
            .filter_map(|tag| self.by_tag.get_key_value(tag))
            .map(|(tag, pages)| (tag.as_str(), pages))
    }

    pub fn len(&self) -> usize {
        self.by_tag.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_tag.is_empty()
    }
}

/// One (method, path) operation that carries at least one tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedOperation<'a> {
    pub method: &'a str,
    pub path: &'a str,
    pub tags: Vec<&'a str>,
}

impl TaggedOperation<'_> {
    pub fn page_slug(&self) -> String {
        page_slug(self.method, self.path)
    }

    /// Tags that are not in the ignored set.
    pub fn page_tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().copied().filter(|tag| !is_ignored_tag(tag))
    }
}

/// Walk `paths` and yield every operation with a non-empty tag list.
pub fn tagged_operations(spec: &Value) -> Vec<TaggedOperation<'_>> {
    let Some(paths) = spec.get("paths").and_then(Value::as_object) else {
        debug!("specification has no `paths` object");
        return Vec::new();
    };

    let mut operations = Vec::new();
    for (path, item) in paths {
        let Some(methods) = item.as_object() else {
            continue;
        };
        for (method, operation) in methods {
            if !is_http_method(method) {
                continue;
            }
            let Some(operation) = operation.as_object() else {
                continue;
            };
            let tags: Vec<&str> = operation
                .get("tags")
                .and_then(Value::as_array)
                .map(|tags| tags.iter().filter_map(Value::as_str).collect())
                .unwrap_or_default();
            if tags.is_empty() {
                continue;
            }
            operations.push(TaggedOperation {
                method: method.as_str(),
                path: path.as_str(),
                tags,
            });
        }
    }
    operations
}

/// Build the tag-to-pages mapping for every tagged operation in `spec`.
pub fn extract_tagged_pages(spec: &Value) -> TagPages {
    let mut pages = TagPages::new();
    for operation in tagged_operations(spec) {
        let slug = operation.page_slug();
        for tag in operation.page_tags() {
            pages.insert(tag, page_path(tag, &slug));
        }
    }
    debug!(tags = pages.len(), "extracted tagged pages");
    pages
}

/// A page path generated by more than one distinct endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlugCollision {
    pub page_path: String,
    /// `METHOD /path` labels in sorted order.
    pub endpoints: Vec<String>,
}

impl fmt::Display for SlugCollision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <- {}", self.page_path, self.endpoints.join(", "))
    }
}

/// Report page paths that several endpoints collapse into.
pub fn find_slug_collisions(spec: &Value) -> Vec<SlugCollision> {
    let mut sources: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for operation in tagged_operations(spec) {
        let slug = operation.page_slug();
        let endpoint = format!("{} {}", operation.method.to_uppercase(), operation.path);
        for tag in operation.page_tags() {
            sources
                .entry(page_path(tag, &slug))
                .or_default()
                .insert(endpoint.clone());
        }
    }

    sources
        .into_iter()
        .filter(|(_, endpoints)| endpoints.len() > 1)
        .map(|(page_path, endpoints)| SlugCollision {
            page_path,
            endpoints: endpoints.into_iter().collect(),
        })
        .collect()
}
