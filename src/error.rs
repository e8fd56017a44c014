use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions detected before either document is loaded.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("OpenAPI file not found: {}", .0.display())]
    OpenApiNotFound(PathBuf),
    #[error("docs.json not found: {}", .0.display())]
    DocsNotFound(PathBuf),
    #[error(
        "Unable to locate the documentation project root. Pass --root, set NAVSYNC_ROOT, or pass both --docs and --openapi."
    )]
    RootNotFound,
}

/// The navigation subtree that receives generated pages is not where it is
/// expected. The document is left untouched when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("Could not find '{tab}' tab in docs.json")]
    MissingTab { tab: &'static str },
    #[error("Could not find '{group}' group under '{tab}' in docs.json")]
    MissingGroup {
        tab: &'static str,
        group: &'static str,
    },
    #[error("'{group}'.pages is not a list")]
    PagesNotList { group: &'static str },
}
