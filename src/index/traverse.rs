//! Depth-first signature traversal.
//!
//! Walks a module/signature tree, accumulating the qualification path, and
//! produces one index entry per indexable value declaration. Only values are
//! type-searchable; every other declaration kind is deliberately inert.

use std::sync::Arc;

use super::IndexConfig;
use super::decompose::decompose;
use super::entry::IndexEntry;
use super::sink::IndexSink;
use crate::decl::{Item, ModuleDecl, Signature, SignatureExpr, is_internal};
use crate::intern::Caches;
use crate::locator::PackageId;
use crate::render::Renderer;
use crate::typeexpr::TypeExpr;

/// Counters reported after indexing one unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Value declarations that produced entries.
    pub indexed: usize,
    /// Declarations skipped by a skip rule (not inert kinds).
    pub skipped: usize,
}

/// One depth-first walk over a compilation unit's signature tree.
pub(super) struct Traversal<'a, S: IndexSink> {
    config: &'a IndexConfig,
    renderer: &'a dyn Renderer,
    caches: &'a mut Caches,
    sink: &'a mut S,
    package: PackageId,
    qual_path: Vec<String>,
    stats: IndexStats,
}

impl<'a, S: IndexSink> Traversal<'a, S> {
    pub(super) fn new(
        config: &'a IndexConfig,
        renderer: &'a dyn Renderer,
        caches: &'a mut Caches,
        sink: &'a mut S,
        package: PackageId,
    ) -> Self {
        Self {
            config,
            renderer,
            caches,
            sink,
            package,
            qual_path: Vec::new(),
            stats: IndexStats::default(),
        }
    }

    /// Walks the unit's root signature under `root_name`.
    pub(super) fn run(mut self, root_name: &str, content: &SignatureExpr) -> IndexStats {
        self.qual_path.push(root_name.to_string());
        self.signature_expr(content);
        self.stats
    }

    fn signature_expr(&mut self, expr: &SignatureExpr) {
        match expr {
            SignatureExpr::Signature(signature) => self.signature(signature),
            // A functor's parameter is never indexed, only its result.
            SignatureExpr::Functor { result } => self.signature_expr(result),
        }
    }

    fn signature(&mut self, signature: &Signature) {
        for item in &signature.items {
            self.item(item);
        }
    }

    fn item(&mut self, item: &Item) {
        match item {
            Item::Value { name, ty, doc } => self.value(name, ty, doc.as_deref()),
            Item::Module { name, decl } => self.module(name, decl),
            // Includes splice their expansion in place, no new path segment.
            Item::Include { expansion } => self.signature(expansion),
            Item::TypeDecl { .. }
            | Item::TypeExtension { .. }
            | Item::Exception { .. }
            | Item::Class { .. }
            | Item::ClassType { .. }
            | Item::Comment
            | Item::Open
            | Item::ModuleType { .. }
            | Item::ModuleSubstitution { .. }
            | Item::ModuleTypeSubstitution { .. } => {}
        }
    }

    fn module(&mut self, name: &str, decl: &ModuleDecl) {
        // Never re-index the language's own prelude under every alias.
        if name == self.config.stdlib_root {
            tracing::debug!("skipping stdlib root module '{}'", name);
            self.stats.skipped += 1;
            return;
        }

        match decl {
            ModuleDecl::Definition(expr) => self.enter(name, expr),
            ModuleDecl::Alias {
                expansion: Some(expr),
                ..
            } => self.enter(name, expr),
            ModuleDecl::Alias {
                target,
                expansion: None,
            } => {
                tracing::debug!("skipping unresolved module alias '{}' -> '{}'", name, target);
                self.stats.skipped += 1;
            }
        }
    }

    fn enter(&mut self, name: &str, expr: &SignatureExpr) {
        self.qual_path.push(name.to_string());
        self.signature_expr(expr);
        self.qual_path.pop();
    }

    fn value(&mut self, name: &str, ty: &TypeExpr, doc: Option<&str>) {
        if is_internal(name) {
            tracing::debug!("skipping internal value '{}'", name);
            self.stats.skipped += 1;
            return;
        }

        let rendered_type = self
            .caches
            .signatures
            .memo(self.renderer.render_type(ty, &self.qual_path));
        let full_name = self.renderer.render_qualified_name(&self.qual_path, name);
        let doc: Option<Arc<String>> = doc
            .and_then(|raw| self.renderer.render_doc(raw))
            .map(|rendered| self.caches.docs.memo(rendered));

        let decomposition = decompose(ty, &mut self.caches.path_tokens);
        let is_stdlib = self.package.name == self.config.stdlib_package;
        let cost = self.config.weights.cost(
            &full_name,
            &rendered_type,
            self.qual_path.len(),
            decomposition.signature_size,
            doc.is_some(),
            is_stdlib,
        );

        let entry = IndexEntry {
            full_name,
            cost,
            type_paths: decomposition.fingerprints.clone(),
            rendered_type,
            doc,
            package: self.package.clone(),
        };

        let name_key = self.name_key(name);
        self.sink.store_by_name(&name_key, entry.clone());
        self.sink
            .store_by_type_shape(entry, &decomposition.fingerprints);
        self.stats.indexed += 1;
    }

    /// Lowercase `qualification.path.name` key for substring/name search.
    fn name_key(&self, name: &str) -> String {
        let mut key = self.qual_path.join(".");
        if !key.is_empty() {
            key.push('.');
        }
        key.push_str(name);
        key.to_lowercase()
    }
}
