//! Declaration trees for compilation units.
//!
//! This is the shape the traversal walks: nested modules and signatures with
//! value declarations at the leaves. The grammar is a closed sum; declaration
//! kinds the indexer deliberately ignores are still present as explicit
//! variants so dispatch stays exhaustive.

use crate::error::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::typeexpr::TypeExpr;

/// A flat list of declarations inside one signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub items: Vec<Item>,
}

/// The right-hand side of a module: either a plain signature or a functor,
/// whose parameter is never indexed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignatureExpr {
    Signature(Signature),
    Functor { result: Box<SignatureExpr> },
}

/// How a nested module is declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModuleDecl {
    /// A type-annotated definition carrying its declared signature.
    Definition(SignatureExpr),
    /// An alias to another module. `expansion` is the aliased module's
    /// pre-computed signature when the alias target could be resolved.
    Alias {
        target: String,
        expansion: Option<Box<SignatureExpr>>,
    },
}

/// One declaration inside a signature.
///
/// Only `Value` produces index entries; `Module` and `Include` recurse.
/// Everything else is inert: type declarations and friends are not
/// type-searchable, and the indexer neither indexes nor walks them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Item {
    Value {
        name: String,
        ty: TypeExpr,
        doc: Option<String>,
    },
    Module {
        name: String,
        decl: ModuleDecl,
    },
    /// An `include`, carrying its pre-computed expansion content.
    Include {
        expansion: Signature,
    },
    TypeDecl {
        name: String,
    },
    TypeExtension {
        name: String,
    },
    Exception {
        name: String,
    },
    Class {
        name: String,
    },
    ClassType {
        name: String,
    },
    Comment,
    Open,
    ModuleType {
        name: String,
    },
    ModuleSubstitution {
        name: String,
    },
    ModuleTypeSubstitution {
        name: String,
    },
}

/// Root content of a compilation unit. Pages are not indexable; feeding one
/// to the indexer is a fatal input-shape error, not a skip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitContent {
    Module(SignatureExpr),
    Page { title: String },
}

/// A loaded compilation unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub content: UnitContent,
}

/// Whether a value name is internal by naming convention (hidden/private
/// identifiers): a leading underscore or a `__` segment separator.
pub fn is_internal(name: &str) -> bool {
    name.starts_with('_') || name.contains("__")
}

/// Loads a compilation unit from a JSON file. Unreadable or malformed files
/// are fatal for the unit.
pub fn load_unit(path: &Path) -> Result<Unit> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read compilation unit at {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse compilation unit at {}", path.display()))
}
