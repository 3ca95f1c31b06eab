//! Insertion-ordered map keyed by name.

use std::collections::HashMap;

/// Anything stored in a [`Catalog`] exposes its unique key.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Entries in insertion order, with a hash index for lookup by key.
pub struct Catalog<T> {
    entries: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for Catalog<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Keyed> Catalog<T> {
    /// Append an entry. A duplicate key hands the rejected entry back.
    pub fn insert(&mut self, entry: T) -> Result<(), T> {
        if self.index.contains_key(entry.key()) {
            return Err(entry);
        }
        self.index.insert(entry.key().to_string(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.index.get(key).and_then(|&i| self.entries.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
