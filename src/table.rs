use std::fmt;

use log::{debug, trace, warn};

use crate::chain::{Chain, Entry, Placement};
use crate::config::TableConfig;
use crate::error::{Result, TableError};

const HASH_BASE: u128 = 31;

/// Polynomial rolling hash of `key` with base 31, reduced modulo `capacity`
/// after every character so the accumulator stays below `capacity`.
///
/// Characters are taken as UTF-16 code units. `capacity` must be non-zero.
pub fn bucket_index(key: &str, capacity: usize) -> usize {
    let modulus = capacity as u128;
    let index = key
        .encode_utf16()
        .fold(0u128, |acc, unit| (acc * HASH_BASE + u128::from(unit)) % modulus);
    index as usize
}

/// A string-keyed hash table with separate chaining.
///
/// The bucket array doubles whenever an insertion pushes `len / capacity`
/// above the load factor. There is no removal.
#[derive(Debug, Clone)]
pub struct HashTable<V> {
    buckets: Vec<Chain<V>>,
    items: usize,
    load_factor: f64,
}

impl<V> HashTable<V> {
    /// Creates a table with 8 buckets and a load factor of 0.75.
    pub fn new() -> Self {
        Self::from_valid_config(TableConfig::default())
    }

    /// Creates a table with `initial_capacity` buckets that grows once
    /// `len / capacity` exceeds `load_factor`.
    pub fn create(initial_capacity: usize, load_factor: f64) -> Result<Self> {
        Self::with_config(TableConfig::new(initial_capacity, load_factor))
    }

    pub fn with_capacity(initial_capacity: usize) -> Result<Self> {
        Self::with_config(TableConfig::default().with_initial_capacity(initial_capacity))
    }

    pub fn with_config(config: TableConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: TableConfig) -> Self {
        debug!(
            "creating hash table: capacity={}, load_factor={}",
            config.initial_capacity, config.load_factor
        );
        let mut buckets = Vec::with_capacity(config.initial_capacity);
        buckets.extend((0..config.initial_capacity).map(|_| Chain::new()));
        HashTable {
            buckets,
            items: 0,
            load_factor: config.load_factor,
        }
    }

    pub fn len(&self) -> usize {
        self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items == 0
    }

    /// Number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// The threshold that triggers growth.
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// The current `len / capacity` ratio.
    pub fn current_load(&self) -> f64 {
        self.items as f64 / self.buckets.len() as f64
    }

    /// Bucket index of `key` under the current capacity.
    pub fn hash(&self, key: &str) -> usize {
        bucket_index(key, self.buckets.len())
    }

    /// Stores `value` under `key`, returning the value it replaced if the key
    /// was already present.
    ///
    /// Fails with [`TableError::InvalidArgument`] when `key` is empty. A new
    /// key may trigger one or more doublings of the bucket array.
    pub fn assign(&mut self, key: impl Into<String>, value: V) -> Result<Option<V>> {
        let key = key.into();
        if key.is_empty() {
            return Err(TableError::invalid_argument("key", "must not be empty"));
        }

        let bucket_idx = self.hash(&key);
        match self.buckets[bucket_idx].find_and_update_or_append(key, value) {
            Placement::Updated(previous) => {
                trace!("updated existing key in bucket {}", bucket_idx);
                Ok(Some(previous))
            }
            Placement::Appended => {
                trace!("appended new key to bucket {}", bucket_idx);
                self.items += 1;
                self.check_load_factor();
                Ok(None)
            }
        }
    }

    /// Like [`assign`](Self::assign), for callers holding an optional value.
    /// `None` is rejected as an absent value; any present value is accepted,
    /// including zero, `false` or an empty string.
    pub fn assign_opt(&mut self, key: impl Into<String>, value: Option<V>) -> Result<Option<V>> {
        match value {
            Some(value) => self.assign(key, value),
            None => Err(TableError::invalid_argument("value", "must not be absent")),
        }
    }

    /// Returns the value stored under `key`, or `None` when it is absent.
    pub fn retrieve(&self, key: &str) -> Option<&V> {
        self.buckets[self.hash(key)].find(key)
    }

    pub fn retrieve_mut(&mut self, key: &str) -> Option<&mut V> {
        let bucket_idx = self.hash(key);
        self.buckets[bucket_idx].find_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.retrieve(key).is_some()
    }

    /// The chain stored in bucket `index`, if the index is in range.
    pub fn chain(&self, index: usize) -> Option<&Chain<V>> {
        self.buckets.get(index)
    }

    /// Human-readable listing of every bucket, head to tail.
    pub fn dump(&self) -> Dump<'_, V> {
        Dump { table: self }
    }

    fn check_load_factor(&mut self) {
        while self.current_load() > self.load_factor {
            if !self.resize() {
                break;
            }
        }
    }

    fn resize(&mut self) -> bool {
        let old_capacity = self.buckets.len();
        let Some(target_size) = old_capacity.checked_mul(2) else {
            warn!("hash table cannot grow past {} buckets", old_capacity);
            return false;
        };

        let mut new_buckets: Vec<Chain<V>> = Vec::with_capacity(target_size);
        new_buckets.extend((0..target_size).map(|_| Chain::new()));
        for entry in self.buckets.iter_mut().flat_map(|bucket| bucket.drain()) {
            let bucket_idx = bucket_index(&entry.key, target_size);
            new_buckets[bucket_idx].insert_at_head(entry);
        }

        self.buckets = new_buckets;
        debug!(
            "resized hash table: {} -> {} buckets, {} entries",
            old_capacity, target_size, self.items
        );
        true
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Display adapter returned by [`HashTable::dump`].
#[derive(Debug)]
pub struct Dump<'a, V> {
    table: &'a HashTable<V>,
}

impl<V: fmt::Debug> fmt::Display for Dump<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "HashMap Contents:")?;
        for (index, chain) in self.table.buckets.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "Index {}:", index)?;
            writeln!(f, "<head>")?;
            for Entry { key, value } in chain {
                writeln!(f, "{{ key: {:?}, value: {:?} }},", key, value)?;
            }
            writeln!(f, "<tail>")?;
        }
        Ok(())
    }
}
