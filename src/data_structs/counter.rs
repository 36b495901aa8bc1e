use std::hash::Hash;

use hashbrown::HashMap;

use crate::data_structs::typedef::CountType;

/// A bag of keys with occurrence counts.
///
/// Keys whose count drops to zero are dropped from the map, so
/// [`distinct_count`](Self::distinct_count) only reports keys that are
/// actually present.
#[derive(Debug, Clone)]
pub struct MultisetCounter<K: Hash + Eq> {
    counts: HashMap<K, CountType>,
}

impl<K: Hash + Eq> Default for MultisetCounter<K> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }
}

impl<K: Hash + Eq> MultisetCounter<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(
        &mut self,
        key: K,
    ) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    /// Decrements the count of `key` by one, dropping the key once it reaches
    /// zero. Returns `false` if the key was not present.
    pub fn remove(
        &mut self,
        key: &K,
    ) -> bool {
        match self.counts.get_mut(key) {
            Some(count) if *count > 1 => {
                *count -= 1;
                true
            },
            Some(_) => {
                self.counts.remove(key);
                true
            },
            None => false,
        }
    }

    /// Drops `key` entirely and returns the count it had (0 if absent).
    pub fn take(
        &mut self,
        key: &K,
    ) -> CountType {
        self.counts.remove(key).unwrap_or(0)
    }

    pub fn count_of(
        &self,
        key: &K,
    ) -> CountType {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total_count(&self) -> CountType {
        self.counts.values().sum()
    }

    /// Number of keys with a positive count.
    pub fn distinct_count(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &CountType)> {
        self.counts.iter()
    }
}

impl<K: Hash + Eq> FromIterator<K> for MultisetCounter<K> {
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut counter = Self::new();
        iter.into_iter().for_each(|key| counter.increment(key));
        counter
    }
}

impl<K: Hash + Eq> Extend<K> for MultisetCounter<K> {
    fn extend<T: IntoIterator<Item = K>>(
        &mut self,
        iter: T,
    ) {
        iter.into_iter().for_each(|key| self.increment(key));
    }
}
