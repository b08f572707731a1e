pub mod decl;
pub mod error;
pub mod index;
pub mod intern;
pub mod locator;
pub mod render;
pub mod tracing;
pub mod typeexpr;

pub use error::{Result, UnitError};
pub use index::{
    CostWeights, IndexConfig, IndexEntry, IndexSink, IndexStats, MemorySink, PathFingerprint,
    index_unit, index_unit_file,
};
pub use intern::{Caches, Interner};
pub use locator::PackageId;
pub use render::{PlainRenderer, Renderer};
pub use typeexpr::{Sign, TypeExpr, TypeName};
