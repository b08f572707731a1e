//! The index sink boundary and a simple in-memory implementation.
//!
//! The traversal issues writes eagerly and fire-and-forget; the sink owns the
//! entries from then on and is responsible for persistence and query support.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use super::decompose::PathFingerprint;
use super::entry::IndexEntry;
use crate::error::Result;

/// Receives fully-built index entries, keyed two ways: a lowercase name path
/// for substring/name search and a fingerprint set for type-shape search.
pub trait IndexSink {
    fn store_by_name(&mut self, key: &str, entry: IndexEntry);
    fn store_by_type_shape(&mut self, entry: IndexEntry, fingerprints: &[PathFingerprint]);
}

/// Key maps use the same fast hasher the interner does.
type Map<K, V> = HashMap<K, V, ahash::RandomState>;

/// An append-only in-memory sink with postcard persistence.
///
/// Entries live in one arena; the two key maps hold indices into it. A
/// declaration stored under both keys back-to-back occupies a single arena
/// slot, so [`MemorySink::entries`] counts declarations, not store calls.
/// Lookups return entries sorted by cost, best first.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MemorySink {
    entries: Vec<IndexEntry>,
    by_name: Map<String, Vec<usize>>,
    by_shape: Map<String, Vec<usize>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry, reusing the newest arena slot when the traversal
    /// hands the same declaration in for its second key.
    fn push(&mut self, entry: IndexEntry) -> usize {
        if self.entries.last() == Some(&entry) {
            return self.entries.len() - 1;
        }
        let idx = self.entries.len();
        self.entries.push(entry);
        idx
    }

    fn sorted(&self, indices: &[usize]) -> Vec<&IndexEntry> {
        let mut hits: Vec<&IndexEntry> = indices.iter().map(|&i| &self.entries[i]).collect();
        hits.sort_by_key(|entry| entry.cost);
        hits
    }

    /// All stored entries, in insertion order, one per declaration.
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn name_key_count(&self) -> usize {
        self.by_name.len()
    }

    pub fn shape_key_count(&self) -> usize {
        self.by_shape.len()
    }

    /// Exact lowercase name-key lookup, best cost first.
    pub fn lookup_name(&self, key: &str) -> Vec<&IndexEntry> {
        self.by_name
            .get(&key.to_lowercase())
            .map(|indices| self.sorted(indices))
            .unwrap_or_default()
    }

    /// Substring search over name keys, best cost first.
    pub fn names_containing(&self, needle: &str) -> Vec<&IndexEntry> {
        let needle = needle.to_lowercase();
        let mut indices: Vec<usize> = self
            .by_name
            .iter()
            .filter(|(key, _)| key.contains(&needle))
            .flat_map(|(_, indices)| indices.iter().copied())
            .collect();
        indices.sort_unstable();
        indices.dedup();
        self.sorted(&indices)
    }

    /// Exact fingerprint lookup, best cost first.
    pub fn lookup_shape(&self, fingerprint: &PathFingerprint) -> Vec<&IndexEntry> {
        self.by_shape
            .get(&fingerprint.to_string())
            .map(|indices| self.sorted(indices))
            .unwrap_or_default()
    }

    /// Persists the sink compactly to disk.
    pub fn save(&self, path: &Path) -> Result<()> {
        let bytes = postcard::to_stdvec(self).context("Failed to serialize index")?;
        std::fs::write(path, bytes)
            .with_context(|| format!("Failed to write index to {}", path.display()))?;
        tracing::debug!(
            "persisted index ({} entries, {} name keys, {} shape keys) to {}",
            self.entries.len(),
            self.by_name.len(),
            self.by_shape.len(),
            path.display()
        );
        Ok(())
    }

    /// Loads a previously persisted sink.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read index at {}", path.display()))?;
        postcard::from_bytes(&bytes)
            .with_context(|| format!("Failed to deserialize index at {}", path.display()))
    }
}

impl IndexSink for MemorySink {
    fn store_by_name(&mut self, key: &str, entry: IndexEntry) {
        let idx = self.push(entry);
        self.by_name.entry(key.to_string()).or_default().push(idx);
    }

    fn store_by_type_shape(&mut self, entry: IndexEntry, fingerprints: &[PathFingerprint]) {
        let idx = self.push(entry);
        for fingerprint in fingerprints {
            self.by_shape
                .entry(fingerprint.to_string())
                .or_default()
                .push(idx);
        }
    }
}
