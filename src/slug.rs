//! Slug and page-path generation.
//!
//! Tags map to navigation group slugs, and each (method, path) operation maps
//! to a page slug under `api-reference/<group-slug>/`. The path slug is lossy:
//! `/public/foo` and `/publicfoo` produce the same page. Published links depend
//! on the current shape, so collisions are detected in [`crate::openapi`]
//! rather than avoided here.

/// Root segment shared by every generated page path.
pub const PAGE_ROOT: &str = "api-reference";

/// Tags (compared trimmed and lowercased) that never produce pages.
pub const IGNORED_TAGS: [&str; 3] = ["public", "chat", "websocket only"];

/// Operation keys under an OpenAPI path item that are treated as operations.
pub const HTTP_METHODS: [&str; 7] = ["get", "post", "put", "patch", "delete", "options", "head"];

/// Normalize a tag or group name: trim, lowercase, spaces to hyphens.
pub fn group_slug(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "-")
}

pub fn is_ignored_tag(tag: &str) -> bool {
    let normalized = tag.trim().to_lowercase();
    IGNORED_TAGS.contains(&normalized.as_str())
}

pub fn is_http_method(key: &str) -> bool {
    let lowered = key.to_ascii_lowercase();
    HTTP_METHODS.contains(&lowered.as_str())
}

/// `GET` + `/private/get_positions` becomes `get-privateget_positions`.
pub fn page_slug(method: &str, path: &str) -> String {
    let path_part = path.trim_start_matches('/').replace('/', "");
    format!("{}-{}", method.to_lowercase(), path_part)
}

/// Full page path for an operation slug filed under `tag`.
pub fn page_path(tag: &str, page_slug: &str) -> String {
    format!("{PAGE_ROOT}/{}/{page_slug}", group_slug(tag))
}
