//! Entries that share one bucket.

use std::collections::vec_deque::{self, VecDeque};
use std::mem;

/// A key/value pair stored in a chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<V> {
    pub key: String,
    pub value: V,
}

impl<V> Entry<V> {
    pub fn new(key: impl Into<String>, value: V) -> Self {
        Entry {
            key: key.into(),
            value,
        }
    }
}

/// Outcome of [`Chain::find_and_update_or_append`].
#[derive(Debug, PartialEq)]
pub enum Placement<V> {
    /// The key was already present; holds the value it replaced.
    Updated(V),
    /// The key was new and now sits at the tail.
    Appended,
}

/// Ordered entries of a single bucket. The front of the deque is the head.
#[derive(Debug, Clone)]
pub struct Chain<V> {
    entries: VecDeque<Entry<V>>,
}

impl<V> Chain<V> {
    pub fn new() -> Self {
        Chain {
            entries: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn insert_at_head(&mut self, entry: Entry<V>) {
        self.entries.push_front(entry);
    }

    /// Replaces the value of the first entry matching `key`, or appends a new
    /// entry at the tail when none matches.
    pub fn find_and_update_or_append(&mut self, key: String, value: V) -> Placement<V> {
        match self.entries.iter_mut().find(|entry| entry.key == key) {
            Some(entry) => Placement::Updated(mem::replace(&mut entry.value, value)),
            None => {
                self.entries.push_back(Entry { key, value });
                Placement::Appended
            }
        }
    }

    pub fn find(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value)
    }

    pub fn find_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries
            .iter_mut()
            .find(|entry| entry.key == key)
            .map(|entry| &mut entry.value)
    }

    /// Entries from head to tail.
    pub fn iter(&self) -> vec_deque::Iter<'_, Entry<V>> {
        self.entries.iter()
    }

    pub(crate) fn drain(&mut self) -> vec_deque::Drain<'_, Entry<V>> {
        self.entries.drain(..)
    }
}

impl<V> Default for Chain<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, V> IntoIterator for &'a Chain<V> {
    type Item = &'a Entry<V>;
    type IntoIter = vec_deque::Iter<'a, Entry<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
