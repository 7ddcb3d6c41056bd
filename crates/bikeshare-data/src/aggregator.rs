//! Grouping-and-counting over trip fields.
//!
//! Every "most common" figure in the reports comes from [`value_counts`]:
//! values are ordered by descending count, and equal counts fall back to
//! ascending value order, so the mode of a tie is always the smallest value.

use std::collections::BTreeMap;

/// A distinct value and how many times it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueCount<K> {
    pub value: K,
    pub count: usize,
}

impl<K> ValueCount<K> {
    pub fn map<U>(self, f: impl FnOnce(K) -> U) -> ValueCount<U> {
        ValueCount {
            value: f(self.value),
            count: self.count,
        }
    }
}

/// Count occurrences of each distinct value.
///
/// Sorted by descending count, ties by ascending value.
pub fn value_counts<K, I>(values: I) -> Vec<ValueCount<K>>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    let mut counts: BTreeMap<K, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut ranked: Vec<ValueCount<K>> = counts
        .into_iter()
        .map(|(value, count)| ValueCount { value, count })
        .collect();
    // Stable sort keeps the BTreeMap's ascending key order within equal counts.
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// The most frequent value, or `None` when `values` is empty.
pub fn mode<K, I>(values: I) -> Option<ValueCount<K>>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    value_counts(values).into_iter().next()
}
