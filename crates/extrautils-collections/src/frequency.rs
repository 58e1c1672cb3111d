//! Counting how often items (or keys derived from them) occur.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Frequency queries for anything iterable.
///
/// Implemented for every [`IntoIterator`], so it works on owned collections,
/// borrowed ones (yielding references) and plain iterators alike.
///
/// ```
/// use extrautils_collections::FrequencyExt;
///
/// let words = ["a", "b", "a", "c", "a", "b"];
///
/// assert!(words.iter().has_multiple());
/// assert_eq!(words.iter().occur_exactly_n_times(3).len(), 1);
/// assert!(words.iter().single_only().contains(&"c"));
/// ```
pub trait FrequencyExt: IntoIterator + Sized {
    /// Counts occurrences of each key produced by `key`.
    fn counts_by<K, F>(self, key: F) -> HashMap<K, usize>
    where
        K: Eq + Hash,
        F: FnMut(Self::Item) -> K,
    {
        let mut counts = HashMap::new();
        for k in self.into_iter().map(key) {
            *counts.entry(k).or_insert(0) += 1;
        }
        counts
    }

    /// Counts occurrences of each item.
    fn counts(self) -> HashMap<Self::Item, usize>
    where
        Self::Item: Eq + Hash,
    {
        self.counts_by(|item| item)
    }

    /// Returns `true` if any key occurs more than once.
    fn has_multiple_by<K, F>(self, key: F) -> bool
    where
        K: Eq + Hash,
        F: FnMut(Self::Item) -> K,
    {
        let mut seen = HashSet::new();
        self.into_iter().map(key).any(|k| !seen.insert(k))
    }

    /// Returns `true` if any item occurs more than once.
    fn has_multiple(self) -> bool
    where
        Self::Item: Eq + Hash,
    {
        self.has_multiple_by(|item| item)
    }

    /// Keys that occur more than once.
    fn multiple_only_by<K, F>(self, key: F) -> HashSet<K>
    where
        K: Eq + Hash,
        F: FnMut(Self::Item) -> K,
    {
        keys_where(self.counts_by(key), |count| count > 1)
    }

    /// Items that occur more than once.
    fn multiple_only(self) -> HashSet<Self::Item>
    where
        Self::Item: Eq + Hash,
    {
        self.multiple_only_by(|item| item)
    }

    /// Keys that occur exactly once.
    fn single_only_by<K, F>(self, key: F) -> HashSet<K>
    where
        K: Eq + Hash,
        F: FnMut(Self::Item) -> K,
    {
        self.occur_exactly_n_times_by(1, key)
    }

    /// Items that occur exactly once.
    fn single_only(self) -> HashSet<Self::Item>
    where
        Self::Item: Eq + Hash,
    {
        self.single_only_by(|item| item)
    }

    /// Keys that occur exactly `n` times.
    fn occur_exactly_n_times_by<K, F>(self, n: usize, key: F) -> HashSet<K>
    where
        K: Eq + Hash,
        F: FnMut(Self::Item) -> K,
    {
        keys_where(self.counts_by(key), |count| count == n)
    }

    /// Items that occur exactly `n` times.
    fn occur_exactly_n_times(self, n: usize) -> HashSet<Self::Item>
    where
        Self::Item: Eq + Hash,
    {
        self.occur_exactly_n_times_by(n, |item| item)
    }
}

impl<I: IntoIterator> FrequencyExt for I {}

fn keys_where<K, P>(counts: HashMap<K, usize>, mut predicate: P) -> HashSet<K>
where
    K: Eq + Hash,
    P: FnMut(usize) -> bool,
{
    counts
        .into_iter()
        .filter_map(|(k, count)| predicate(count).then_some(k))
        .collect()
}
