//! Type-shape indexing of compilation units.
//!
//! This module turns declaration trees into index entries: the decomposition
//! engine flattens types into polarity-tagged path fingerprints, the cost
//! heuristic precomputes a static ranking key, and the traversal drives both
//! over an entire module hierarchy, handing finished entries to a sink.

// Module declarations
pub mod cost;
pub mod decompose;
pub mod entry;
pub mod sink;
pub(crate) mod traverse;

// Public re-exports (used via lib.rs)
pub use cost::CostWeights;
pub use decompose::{Decomposition, PathFingerprint, decompose, paths, type_paths, type_size};
pub use entry::IndexEntry;
pub use sink::{IndexSink, MemorySink};
pub use traverse::IndexStats;

use std::path::Path;
use std::time::Instant;

use crate::decl::{Unit, UnitContent, load_unit};
use crate::error::{Result, UnitError};
use crate::intern::Caches;
use crate::locator::PackageId;
use crate::render::Renderer;

/// Indexing knobs. Defaults reproduce the reference ranking behavior exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    /// Nested modules literally carrying this name are skipped, so the
    /// language's own prelude is not re-indexed under every alias.
    pub stdlib_root: String,
    /// Entries indexed under this package name get the stdlib cost bonus.
    pub stdlib_package: String,
    pub weights: CostWeights,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            stdlib_root: "Stdlib".to_string(),
            stdlib_package: "stdlib".to_string(),
            weights: CostWeights::default(),
        }
    }
}

/// Indexes one loaded compilation unit under the given package identity.
///
/// Fails if the unit's content is a page; otherwise the whole unit is
/// traversed and every produced entry is handed to `sink`. There is no
/// partial-success mode.
pub fn index_unit<S: IndexSink>(
    unit: &Unit,
    root_name: &str,
    package: PackageId,
    config: &IndexConfig,
    renderer: &dyn Renderer,
    caches: &mut Caches,
    sink: &mut S,
) -> Result<IndexStats> {
    let content = match &unit.content {
        UnitContent::Module(content) => content,
        UnitContent::Page { .. } => {
            return Err(UnitError::PageContent {
                unit: root_name.to_string(),
            }
            .into());
        }
    };

    let start = Instant::now();
    let traversal = traverse::Traversal::new(config, renderer, caches, sink, package.clone());
    let stats = traversal.run(root_name, content);
    tracing::info!(
        "indexed unit '{}' of {}: {} entries, {} skipped in {:?}",
        root_name,
        package,
        stats.indexed,
        stats.skipped,
        start.elapsed()
    );
    Ok(stats)
}

/// Loads and indexes the compilation unit addressed by a
/// `./<package>/<version>/...` locator, resolved against `base_dir`.
pub fn index_unit_file<S: IndexSink>(
    base_dir: &Path,
    locator: &Path,
    root_name: &str,
    config: &IndexConfig,
    renderer: &dyn Renderer,
    caches: &mut Caches,
    sink: &mut S,
) -> Result<IndexStats> {
    let package = PackageId::from_locator(locator)?;
    let unit = load_unit(&base_dir.join(locator))?;
    index_unit(&unit, root_name, package, config, renderer, caches, sink)
}
