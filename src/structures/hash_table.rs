//! Hash table with separate chaining
//!
//! The table has a fixed number of buckets chosen at construction and never
//! resizes. Each bucket is a `Vec` of entries; colliding keys are appended
//! to the same chain, so a crowded bucket degrades to a linear scan.
//!
//! # Hash function
//!
//! ```text
//! hash(key) = (sum of the key's UTF-16 code units) mod bucket_count
//! ```
//!
//! Summing UTF-16 code units makes the index match the character-code sum a
//! browser would compute for the same key.

/// A key/value pair stored in a chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashEntry<V> {
    pub key: String,
    pub value: V,
}

/// Result of an insert: which bucket was used and whether an existing entry
/// was overwritten
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertResult {
    pub bucket: usize,
    pub slot: usize,
    pub updated: bool,
}

/// Fixed-size chained hash table keyed by strings
#[derive(Debug, Clone)]
pub struct HashTable<V = String> {
    buckets: Vec<Vec<HashEntry<V>>>,
}

impl<V> HashTable<V> {
    /// Create a table with `bucket_count` empty buckets.
    ///
    /// A zero count is raised to one so `hash` never divides by zero;
    /// [`EngineConfig::validate`](crate::engine::config::EngineConfig::validate)
    /// rejects zero before it gets here.
    pub fn new(bucket_count: usize) -> Self {
        let bucket_count = bucket_count.max(1);
        HashTable {
            buckets: (0..bucket_count).map(|_| Vec::new()).collect(),
        }
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Sum of the key's character codes, before the modulo
    pub fn char_code_sum(key: &str) -> u64 {
        key.encode_utf16().map(u64::from).sum()
    }

    /// Bucket index for `key`
    pub fn hash(&self, key: &str) -> usize {
        (Self::char_code_sum(key) % self.buckets.len() as u64) as usize
    }

    /// Insert or overwrite `key`
    pub fn insert(&mut self, key: &str, value: V) -> InsertResult {
        let bucket = self.hash(key);
        let chain = &mut self.buckets[bucket];
        match chain.iter().position(|entry| entry.key == key) {
            Some(slot) => {
                chain[slot].value = value;
                InsertResult {
                    bucket,
                    slot,
                    updated: true,
                }
            }
            None => {
                chain.push(HashEntry {
                    key: key.to_string(),
                    value,
                });
                InsertResult {
                    bucket,
                    slot: chain.len() - 1,
                    updated: false,
                }
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.find(key).map(|(_, entry)| &entry.value)
    }

    /// Position of `key` within its bucket's chain
    pub fn slot_of(&self, key: &str) -> Option<usize> {
        self.find(key).map(|(slot, _)| slot)
    }

    /// Remove `key`, returning whether anything was deleted
    pub fn delete(&mut self, key: &str) -> bool {
        self.remove(key).is_some()
    }

    /// Remove `key` and hand back its entry
    pub fn remove(&mut self, key: &str) -> Option<HashEntry<V>> {
        let bucket = self.hash(key);
        let chain = &mut self.buckets[bucket];
        let slot = chain.iter().position(|entry| entry.key == key)?;
        Some(chain.remove(slot))
    }

    pub fn has(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// The chain stored at `index`
    pub fn bucket(&self, index: usize) -> &[HashEntry<V>] {
        self.buckets.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every bucket in index order, empty ones included
    pub fn entries(&self) -> impl Iterator<Item = (usize, &[HashEntry<V>])> {
        self.buckets
            .iter()
            .enumerate()
            .map(|(index, chain)| (index, chain.as_slice()))
    }

    /// Total number of stored entries
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            chain.clear();
        }
    }

    fn find(&self, key: &str) -> Option<(usize, &HashEntry<V>)> {
        self.buckets[self.hash(key)]
            .iter()
            .enumerate()
            .find(|(_, entry)| entry.key == key)
    }
}
