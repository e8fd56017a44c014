//! Populate documentation navigation groups from an OpenAPI document.
//!
//! Operations are grouped by tag into `api-reference/<group>/<page>` paths
//! ([`extract_tagged_pages`]) and written into the matching subgroups of the
//! navigation config ([`merge_into_navigation`]). [`run`] does both for a
//! pair of files.

pub mod config;
pub mod error;
pub mod navigation;
pub mod openapi;
pub mod slug;
pub mod sync;

pub use config::{
    DEFAULT_DOCS_PATH, DEFAULT_OPENAPI_PATH, SyncOptions, find_project_root, resolve_options,
};
pub use error::{NavigationError, SyncError};
pub use navigation::{MergeReport, UpdatedGroup, merge_into_navigation, merge_with_report};
pub use openapi::{SlugCollision, TagPages, extract_tagged_pages, find_slug_collisions};
pub use slug::{group_slug, is_ignored_tag, page_path, page_slug};
pub use sync::{SyncOutcome, load_json, render_json, run, save_json};
