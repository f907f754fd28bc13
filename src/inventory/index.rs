//! Secondary index from normalized product name to the ids holding that name.

use crate::model::normalize_name;
use std::collections::{HashMap, HashSet};

/// Maps a normalized name to the set of product ids currently carrying it.
///
/// Buckets are created on first insert and pruned as soon as they become empty,
/// so every key present in the index has at least one id.
#[derive(Debug, Default, Clone)]
pub struct NameIndex {
    buckets: HashMap<String, HashSet<String>>,
}

impl NameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files `id` under the normalized form of `name`.
    pub fn insert(&mut self, name: &str, id: &str) {
        self.buckets
            .entry(normalize_name(name))
            .or_default()
            .insert(id.to_string());
    }

    /// Removes `id` from the bucket for `name`, dropping the bucket if it empties.
    pub fn remove(&mut self, name: &str, id: &str) {
        let key = normalize_name(name);
        if let Some(ids) = self.buckets.get_mut(&key) {
            ids.remove(id);
            if ids.is_empty() {
                self.buckets.remove(&key);
            }
        }
    }

    /// Ids whose name normalizes to `key`. `key` must already be normalized.
    pub fn bucket(&self, key: &str) -> Option<&HashSet<String>> {
        self.buckets.get(key)
    }

    /// All `(normalized name, ids)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HashSet<String>)> {
        self.buckets.iter().map(|(key, ids)| (key.as_str(), ids))
    }

    /// Number of distinct normalized names.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn clear(&mut self) {
        self.buckets.clear();
    }
}
