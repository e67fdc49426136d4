//! Multi-valued maps and grouping into them
//!
//! A multimap here is any standard map whose values are buckets: `Vec` or
//! `VecDeque` keep every value, `HashSet` and `BTreeSet` collapse equal ones.
//! The caller picks the semantics through the factory passed to
//! [`multimap_group_by`] and [`multimap_group_by_flat`].

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

/// Per-key value container of a multimap
pub trait Bucket<V>: Default {
    /// Add a value, returning whether the bucket changed
    fn insert_value(&mut self, value: V) -> bool;

    /// Number of values held in the bucket
    fn bucket_len(&self) -> usize;

    /// Move every value of `other` into this bucket
    fn append_bucket(&mut self, other: Self);
}

impl<V> Bucket<V> for Vec<V> {
    fn insert_value(&mut self, value: V) -> bool {
        self.push(value);
        true
    }

    fn bucket_len(&self) -> usize {
        self.len()
    }

    fn append_bucket(&mut self, mut other: Self) {
        self.append(&mut other);
    }
}

impl<V> Bucket<V> for VecDeque<V> {
    fn insert_value(&mut self, value: V) -> bool {
        self.push_back(value);
        true
    }

    fn bucket_len(&self) -> usize {
        self.len()
    }

    fn append_bucket(&mut self, mut other: Self) {
        self.append(&mut other);
    }
}

impl<V, S> Bucket<V> for HashSet<V, S>
where
    V: Eq + Hash,
    S: BuildHasher + Default,
{
    fn insert_value(&mut self, value: V) -> bool {
        self.insert(value)
    }

    fn bucket_len(&self) -> usize {
        self.len()
    }

    fn append_bucket(&mut self, other: Self) {
        self.extend(other);
    }
}

impl<V: Ord> Bucket<V> for BTreeSet<V> {
    fn insert_value(&mut self, value: V) -> bool {
        self.insert(value)
    }

    fn bucket_len(&self) -> usize {
        self.len()
    }

    fn append_bucket(&mut self, mut other: Self) {
        self.append(&mut other);
    }
}

/// A mapping from each key to possibly many values
pub trait Multimap<K, V> {
    /// Store `value` under `key`, returning whether the multimap changed
    fn put(&mut self, key: K, value: V) -> bool;

    /// Store every value under `key`
    ///
    /// An empty `values` leaves the multimap untouched; no empty bucket is
    /// created for `key`.
    fn put_all<I>(&mut self, key: K, values: I) -> bool
    where
        I: IntoIterator<Item = V>;

    /// Move every key/value pair of `other` into this multimap
    fn merge(&mut self, other: Self)
    where
        Self: Sized;

    /// Total number of key/value pairs across all buckets
    fn value_count(&self) -> usize;
}

impl<K, V, B, S> Multimap<K, V> for HashMap<K, B, S>
where
    K: Eq + Hash,
    B: Bucket<V>,
    S: BuildHasher,
{
    fn put(&mut self, key: K, value: V) -> bool {
        self.entry(key).or_default().insert_value(value)
    }

    fn put_all<I>(&mut self, key: K, values: I) -> bool
    where
        I: IntoIterator<Item = V>,
    {
        let mut values = values.into_iter().peekable();
        if values.peek().is_none() {
            return false;
        }
        let bucket = self.entry(key).or_default();
        values.fold(false, |changed, value| {
            bucket.insert_value(value) || changed
        })
    }

    fn merge(&mut self, other: Self) {
        for (key, bucket) in other {
            self.entry(key).or_default().append_bucket(bucket);
        }
    }

    fn value_count(&self) -> usize {
        self.values().map(|bucket| bucket.bucket_len()).sum()
    }
}

impl<K, V, B> Multimap<K, V> for BTreeMap<K, B>
where
    K: Ord,
    B: Bucket<V>,
{
    fn put(&mut self, key: K, value: V) -> bool {
        self.entry(key).or_default().insert_value(value)
    }

    fn put_all<I>(&mut self, key: K, values: I) -> bool
    where
        I: IntoIterator<Item = V>,
    {
        let mut values = values.into_iter().peekable();
        if values.peek().is_none() {
            return false;
        }
        let bucket = self.entry(key).or_default();
        values.fold(false, |changed, value| {
            bucket.insert_value(value) || changed
        })
    }

    fn merge(&mut self, other: Self) {
        for (key, bucket) in other {
            self.entry(key).or_default().append_bucket(bucket);
        }
    }

    fn value_count(&self) -> usize {
        self.values().map(|bucket| bucket.bucket_len()).sum()
    }
}

/// Group projected values into a multimap built by `factory`
///
/// Each element contributes `value_fn(element)` under `classifier(element)`.
/// Whether repeated values survive depends on the multimap's bucket type.
///
/// # Examples
///
/// ```
/// use common_utils::collection::multimap_group_by;
/// use std::collections::BTreeMap;
///
/// let people = vec![("alice", 18), ("bob", 19), ("carol", 18)];
/// let names = multimap_group_by(
///     &people,
///     |(_, age)| *age,
///     |(name, _)| *name,
///     BTreeMap::<u32, Vec<&str>>::new,
/// );
/// assert_eq!(names[&18], vec!["alice", "carol"]);
/// ```
pub fn multimap_group_by<I, T, K, V, M, CF, VF, SF>(
    items: I,
    mut classifier: CF,
    mut value_fn: VF,
    factory: SF,
) -> M
where
    I: IntoIterator<Item = T>,
    M: Multimap<K, V>,
    CF: FnMut(&T) -> K,
    VF: FnMut(T) -> V,
    SF: FnOnce() -> M,
{
    let mut multimap = factory();
    for item in items {
        let key = classifier(&item);
        multimap.put(key, value_fn(item));
    }

    tracing::trace!(
        values = multimap.value_count(),
        "Grouped items into multimap"
    );
    multimap
}

/// Group flattened sub-collections into a multimap built by `factory`
///
/// `value_fn` yields a collection per element; its members, not the
/// collection itself, are stored under `classifier(element)`.
pub fn multimap_group_by_flat<I, T, K, V, C, M, CF, VF, SF>(
    items: I,
    mut classifier: CF,
    mut value_fn: VF,
    factory: SF,
) -> M
where
    I: IntoIterator<Item = T>,
    C: IntoIterator<Item = V>,
    M: Multimap<K, V>,
    CF: FnMut(&T) -> K,
    VF: FnMut(T) -> C,
    SF: FnOnce() -> M,
{
    let mut multimap = factory();
    for item in items {
        let key = classifier(&item);
        multimap.put_all(key, value_fn(item));
    }

    tracing::trace!(
        values = multimap.value_count(),
        "Grouped flattened items into multimap"
    );
    multimap
}
