//! The pretty-printer collaborator seam.
//!
//! Rendering type expressions, qualified names, and documentation into
//! display strings is owned by an external collaborator; the indexer consumes
//! it as an opaque string producer. [`PlainRenderer`] is a minimal built-in
//! implementation, mainly for tests and small tools.

use crate::typeexpr::TypeExpr;

/// Pure formatting collaborator. No side effects.
pub trait Renderer {
    /// Renders a type for display, given the qualification path it appears
    /// under (so a sophisticated renderer can shorten in-scope names).
    fn render_type(&self, ty: &TypeExpr, context: &[String]) -> String;

    /// Renders the fully-qualified display name of a declaration.
    fn render_qualified_name(&self, path: &[String], name: &str) -> String;

    /// Normalizes raw documentation into a display string, or `None` when
    /// there is nothing worth showing.
    fn render_doc(&self, raw: &str) -> Option<String>;
}

/// A context-insensitive renderer producing conventional surface syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl PlainRenderer {
    fn render(ty: &TypeExpr) -> String {
        match ty {
            TypeExpr::Var(name) => format!("'{name}"),
            TypeExpr::Any => "_".to_string(),
            TypeExpr::Arrow {
                label,
                domain,
                codomain,
            } => {
                let domain = Self::render_atom(domain);
                let codomain = Self::render(codomain);
                match label {
                    Some(label) => format!("{label}:{domain} -> {codomain}"),
                    None => format!("{domain} -> {codomain}"),
                }
            }
            TypeExpr::Constr { name, args } => match args.as_slice() {
                [] => name.to_string(),
                [arg] => format!("{} {name}", Self::render_atom(arg)),
                args => {
                    let args: Vec<String> = args.iter().map(Self::render).collect();
                    format!("({}) {name}", args.join(", "))
                }
            },
            TypeExpr::Tuple(args) => {
                let parts: Vec<String> = args.iter().map(Self::render_atom).collect();
                parts.join(" * ")
            }
            TypeExpr::Other { kind } => format!("<{kind}>"),
        }
    }

    /// Parenthesizes arrows and tuples when they appear in argument position.
    fn render_atom(ty: &TypeExpr) -> String {
        match ty {
            TypeExpr::Arrow { .. } | TypeExpr::Tuple(_) => format!("({})", Self::render(ty)),
            _ => Self::render(ty),
        }
    }
}

impl Renderer for PlainRenderer {
    fn render_type(&self, ty: &TypeExpr, _context: &[String]) -> String {
        Self::render(ty)
    }

    fn render_qualified_name(&self, path: &[String], name: &str) -> String {
        if path.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", path.join("."), name)
        }
    }

    fn render_doc(&self, raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}
