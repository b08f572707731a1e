//! Type decomposition: path fingerprints and the structural size metric.
//!
//! A type expression is flattened into a set of root-to-leaf token paths
//! tagged with polarity, so a downstream index can answer partial type-shape
//! queries ("an `int -> string` somewhere", "a list argument in negative
//! position"). Decomposition is a pure function of the type expression alone:
//! the same input yields the same fingerprint multiset every run.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::intern::Interner;
use crate::typeexpr::{Sign, TypeExpr, TypeName};

/// Head token for type variables and wildcards.
pub const POLY: &str = "POLY";
/// Tag for descending into an arrow's domain.
pub const ARROW_DOMAIN: &str = "->0";
/// Tag for descending into an arrow's codomain.
pub const ARROW_CODOMAIN: &str = "->1";
/// Flat size penalty for constructs outside the decomposition grammar.
pub const UNMODELED_SIZE: u32 = 100;

/// An interned fingerprint token.
pub type Token = Arc<String>;

/// One root-to-leaf decomposition path of a type expression.
///
/// Tokens are stored innermost first: each contributing node reads
/// head-then-polarity, with structural tags (`"->0"`, `"->1"`, argument
/// index, `"<i>*"`) between a parent's tokens and its child's. Fingerprints
/// are never empty and always terminate at a `Var`/`Any` (`"POLY"`) or a
/// constructor head, never inside a tuple or arrow.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathFingerprint {
    tokens: Vec<Token>,
}

impl PathFingerprint {
    fn from_stack(stack: &[Token]) -> Self {
        Self {
            tokens: stack.iter().rev().cloned().collect(),
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl std::fmt::Display for PathFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

/// Structural size of a type expression.
///
/// 1 per variable, wildcard, constructor, and tuple node; an arrow counts
/// only when its argument is labeled (a label is a distinguishing, searchable
/// feature). Unmodeled constructs cost a flat [`UNMODELED_SIZE`].
pub fn type_size(ty: &TypeExpr) -> u32 {
    match ty {
        TypeExpr::Var(_) | TypeExpr::Any => 1,
        TypeExpr::Arrow {
            label,
            domain,
            codomain,
        } => u32::from(label.is_some()) + type_size(domain) + type_size(codomain),
        TypeExpr::Constr { args, .. } | TypeExpr::Tuple(args) => {
            1 + args.iter().map(type_size).sum::<u32>()
        }
        TypeExpr::Other { .. } => UNMODELED_SIZE,
    }
}

/// How constructor heads are turned into fingerprint head tokens.
///
/// The recursion is written once; the two public entry points differ only in
/// this expansion step.
trait NameExpansion {
    fn heads(&self, name: &TypeName) -> Vec<String>;
}

/// Keep the canonical full name only.
struct Exact;

impl NameExpansion for Exact {
    fn heads(&self, name: &TypeName) -> Vec<String> {
        vec![name.as_str().to_string()]
    }
}

/// Expand into every dotted suffix, so a partially-qualified or short query
/// name still matches.
struct Suffixes;

impl NameExpansion for Suffixes {
    fn heads(&self, name: &TypeName) -> Vec<String> {
        name.suffixes().map(str::to_string).collect()
    }
}

fn collect<E: NameExpansion>(
    ty: &TypeExpr,
    sgn: Sign,
    expansion: &E,
    interner: &mut Interner<String>,
    stack: &mut Vec<Token>,
    out: &mut Vec<PathFingerprint>,
) {
    match ty {
        TypeExpr::Var(_) | TypeExpr::Any => {
            stack.push(interner.memo(sgn.token().to_string()));
            stack.push(interner.memo(POLY.to_string()));
            out.push(PathFingerprint::from_stack(stack));
            stack.truncate(stack.len() - 2);
        }
        TypeExpr::Arrow {
            domain, codomain, ..
        } => {
            // Labels affect ranking cost, not reachability.
            stack.push(interner.memo(ARROW_DOMAIN.to_string()));
            collect(domain, sgn.flip(), expansion, interner, stack, out);
            stack.pop();

            stack.push(interner.memo(ARROW_CODOMAIN.to_string()));
            collect(codomain, sgn, expansion, interner, stack, out);
            stack.pop();
        }
        TypeExpr::Constr { name, args } => {
            for head in expansion.heads(name) {
                stack.push(interner.memo(sgn.token().to_string()));
                stack.push(interner.memo(head));
                if args.is_empty() {
                    out.push(PathFingerprint::from_stack(stack));
                } else {
                    for (i, arg) in args.iter().enumerate() {
                        stack.push(interner.memo(i.to_string()));
                        collect(arg, sgn, expansion, interner, stack, out);
                        stack.pop();
                    }
                }
                stack.truncate(stack.len() - 2);
            }
        }
        TypeExpr::Tuple(args) => {
            for (i, arg) in args.iter().enumerate() {
                stack.push(interner.memo(format!("{i}*")));
                collect(arg, sgn, expansion, interner, stack, out);
                stack.pop();
            }
        }
        // Invisible to type-shape search; name search still sees the entry.
        TypeExpr::Other { .. } => {}
    }
}

/// Fingerprints with exact constructor names, no suffix expansion.
///
/// This is the pre-expansion shape of [`type_paths`]; the persisted index
/// stores the suffix-expanded variant, but sinks whose query semantics work
/// on exact names can consume this one.
pub fn paths(ty: &TypeExpr, sgn: Sign, interner: &mut Interner<String>) -> Vec<PathFingerprint> {
    let mut out = Vec::new();
    collect(ty, sgn, &Exact, interner, &mut Vec::new(), &mut out);
    out
}

/// Suffix-expanded fingerprints, starting in positive polarity. This is the
/// variant persisted for type-shape search.
pub fn type_paths(ty: &TypeExpr, interner: &mut Interner<String>) -> Vec<PathFingerprint> {
    let mut out = Vec::new();
    collect(ty, Sign::Pos, &Suffixes, interner, &mut Vec::new(), &mut out);
    out
}

/// Everything the index needs from one type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition {
    pub signature_size: u32,
    pub fingerprints: Vec<PathFingerprint>,
}

/// Decomposes a declaration's type into its size metric and the
/// suffix-expanded fingerprint set.
pub fn decompose(ty: &TypeExpr, interner: &mut Interner<String>) -> Decomposition {
    Decomposition {
        signature_size: type_size(ty),
        fingerprints: type_paths(ty, interner),
    }
}
