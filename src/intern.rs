//! Content-equality interning caches.
//!
//! A large indexing run produces the same rendered signatures, path tokens,
//! and doc fragments over and over; interning keeps one shared copy of each.
//! Caches are explicit, per-run service objects: populate during one
//! repository run, [`Caches::clear`] between independent runs. Handles are
//! invalidated by `clear` in the sense that the sharing guarantee ends; a
//! value that must outlive a clear should be [`detach`]ed first.

use ahash::AHashSet;
use std::hash::Hash;
use std::sync::Arc;

/// Deduplicates equal values to a single shared handle.
#[derive(Debug)]
pub struct Interner<T: Eq + Hash> {
    entries: AHashSet<Arc<T>>,
}

impl<T: Eq + Hash> Default for Interner<T> {
    fn default() -> Self {
        Self {
            entries: AHashSet::new(),
        }
    }
}

impl<T: Eq + Hash> Interner<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the handle of a previously-stored equal value if present,
    /// otherwise stores `value` and returns a fresh handle.
    pub fn memo(&mut self, value: T) -> Arc<T> {
        if let Some(existing) = self.entries.get(&value) {
            return Arc::clone(existing);
        }
        let handle = Arc::new(value);
        self.entries.insert(Arc::clone(&handle));
        handle
    }

    /// Empties the cache. Callers must not rely on structural sharing of
    /// handles obtained before the clear.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Copies a value out of the cache, fully detached from structural sharing.
///
/// Required only when a cached value must outlive [`Interner::clear`].
pub fn detach<T: Clone>(handle: &Arc<T>) -> T {
    T::clone(handle)
}

/// The three independent caches used across one indexing run.
#[derive(Debug, Default)]
pub struct Caches {
    /// Canonical rendered type-signature strings.
    pub signatures: Interner<String>,
    /// Canonical name-path tokens (fingerprint tokens).
    pub path_tokens: Interner<String>,
    /// Canonical documentation fragments.
    pub docs: Interner<String>,
}

impl Caches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Between-run lifecycle method: empties all three caches.
    pub fn clear(&mut self) {
        self.signatures.clear();
        self.path_tokens.clear();
        self.docs.clear();
        tracing::debug!("cleared interning caches");
    }
}
