//! Type expressions and polarity.
//!
//! This is the input grammar for the decomposition engine: a small closed tree
//! produced by an external parser. Constructs the engine does not decompose
//! (objects, polymorphic variants, ...) arrive as [`TypeExpr::Other`].

use serde::{Deserialize, Serialize};

/// Whether a sub-expression is consumed (argument position) or produced
/// (result position) relative to the declaration's top-level type.
///
/// Polarity flips exactly when crossing an arrow's domain and is otherwise
/// inherited unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Pos,
    Neg,
}

impl Sign {
    pub const fn flip(self) -> Self {
        match self {
            Self::Pos => Self::Neg,
            Self::Neg => Self::Pos,
        }
    }

    /// Token used in path fingerprints.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Pos => "+",
            Self::Neg => "-",
        }
    }
}

/// A dotted, possibly-qualified type constructor name like `Stdlib.List.t`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeName(String);

impl TypeName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Every dotted suffix of the name, longest first.
    ///
    /// `a.b.c` yields `a.b.c`, `b.c`, `c`. Unqualified names yield themselves
    /// only. This is what lets a query for the short name still match a
    /// fully-qualified constructor.
    pub fn suffixes(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.0.as_str())
            .chain(self.0.match_indices('.').map(|(i, _)| &self.0[i + 1..]))
    }
}

impl std::fmt::Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A parsed type expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeExpr {
    /// A type variable (`'a`).
    Var(String),
    /// A wildcard (`_`).
    Any,
    /// A function arrow, with an optional argument label on the domain.
    Arrow {
        label: Option<String>,
        domain: Box<TypeExpr>,
        codomain: Box<TypeExpr>,
    },
    /// A type constructor application (`int`, `'a list`, `(k, v) Map.t`).
    Constr { name: TypeName, args: Vec<TypeExpr> },
    /// A tuple (`a * b`).
    Tuple(Vec<TypeExpr>),
    /// A construct outside the decomposition grammar, kept so name search
    /// still works for it. `kind` is a short description of what it was.
    Other { kind: String },
}

impl TypeExpr {
    pub fn constr(name: impl Into<String>, args: Vec<TypeExpr>) -> Self {
        Self::Constr {
            name: TypeName::new(name),
            args,
        }
    }

    pub fn arrow(domain: TypeExpr, codomain: TypeExpr) -> Self {
        Self::Arrow {
            label: None,
            domain: Box::new(domain),
            codomain: Box::new(codomain),
        }
    }

    pub fn labeled_arrow(label: impl Into<String>, domain: TypeExpr, codomain: TypeExpr) -> Self {
        Self::Arrow {
            label: Some(label.into()),
            domain: Box::new(domain),
            codomain: Box::new(codomain),
        }
    }

    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }
}
