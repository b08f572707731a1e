//! Index entries handed to the sink.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::decompose::PathFingerprint;
use crate::locator::PackageId;

/// One indexable declaration, fully prepared for storage.
///
/// Created once per declaration during traversal; ownership transfers to the
/// index sink. `rendered_type` and `doc` are interned handles shared by
/// content equality for the lifetime of the indexing run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Fully-qualified display name, e.g. `Pkg.M.compare`.
    pub full_name: String,
    /// Static ranking cost; lower sorts closer to the top of results.
    pub cost: i64,
    /// Suffix-expanded fingerprints of the declaration's type.
    pub type_paths: Vec<PathFingerprint>,
    /// Canonical rendered type, interned.
    pub rendered_type: Arc<String>,
    /// Rendered documentation, interned, if any.
    pub doc: Option<Arc<String>>,
    /// Package identity the declaration was indexed under.
    pub package: PackageId,
}
