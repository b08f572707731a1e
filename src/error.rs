//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for typedex operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()`
/// and `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Input-shape errors that abort indexing of a whole compilation unit.
///
/// Skip conditions (internal names, unresolved aliases, inert declaration
/// kinds) are not errors and never surface here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnitError {
    /// The file locator does not have the `./<package>/<version>/...` shape.
    #[error("malformed package locator {path}: expected \"./<package>/<version>/...\"")]
    BadLocator { path: PathBuf },
    /// The unit's content is a page rather than a module hierarchy.
    #[error("compilation unit '{unit}' is a page, not a module")]
    PageContent { unit: String },
}
