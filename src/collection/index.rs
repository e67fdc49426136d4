//! Indexing a collection into a lookup map
//!
//! `unique_index` keys every element by a derived key; the
//! `map_and_collect_to_map` family additionally projects each element to a
//! value. Without a merge function a repeated key is a
//! [`DuplicateKeyError`]; with one, colliding values are folded in input
//! order as `merge(existing, incoming)`.
//!
//! All operations here propagate an absent input as an absent map.

use crate::config::DuplicateKeyPolicy;
use crate::error::DuplicateKeyError;
use std::collections::HashMap;
use std::hash::Hash;

/// Index elements by `key_fn`, failing on a repeated key
///
/// # Examples
///
/// ```
/// use common_utils::collection::unique_index;
///
/// let words = vec!["apple", "banana", "cherry"];
/// let by_initial = unique_index(Some(&words), |w| w.as_bytes()[0])
///     .unwrap()
///     .unwrap();
/// assert_eq!(by_initial[&b'b'], &"banana");
///
/// let err = unique_index(Some(&words), |w| w.len()).unwrap_err();
/// assert_eq!(err.key(), &6);
/// ```
pub fn unique_index<I, T, K, KF>(
    items: Option<I>,
    key_fn: KF,
) -> Result<Option<HashMap<K, T>>, DuplicateKeyError<K>>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash,
    KF: FnMut(&T) -> K,
{
    map_and_collect_to_map(items, key_fn, |item| item)
}

/// Index elements by `key_fn`, resolving a repeated key with `merge_fn`
pub fn unique_index_with<I, T, K, KF, MF>(
    items: Option<I>,
    key_fn: KF,
    merge_fn: MF,
) -> Option<HashMap<K, T>>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash,
    KF: FnMut(&T) -> K,
    MF: FnMut(T, T) -> T,
{
    map_and_collect_to_map_with(items, key_fn, |item| item, merge_fn)
}

/// Index elements by `key_fn`, resolving a repeated key per `policy`
pub fn unique_index_with_policy<I, T, K, KF>(
    items: Option<I>,
    key_fn: KF,
    policy: DuplicateKeyPolicy,
) -> Result<Option<HashMap<K, T>>, DuplicateKeyError<K>>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash,
    KF: FnMut(&T) -> K,
{
    map_and_collect_to_map_with_policy(items, key_fn, |item| item, policy)
}

/// Map every element to a key and a value, failing on a repeated key
///
/// `key_fn` sees the element first; `value_fn` then consumes it.
pub fn map_and_collect_to_map<I, T, K, V, KF, VF>(
    items: Option<I>,
    mut key_fn: KF,
    mut value_fn: VF,
) -> Result<Option<HashMap<K, V>>, DuplicateKeyError<K>>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash,
    KF: FnMut(&T) -> K,
    VF: FnMut(T) -> V,
{
    let Some(items) = items else {
        tracing::trace!("Absent input, skipping map collection");
        return Ok(None);
    };

    let iter = items.into_iter();
    let mut map = HashMap::with_capacity(iter.size_hint().0);
    for (position, item) in iter.enumerate() {
        let key = key_fn(&item);
        if map.contains_key(&key) {
            tracing::debug!(position, "Duplicate key while collecting to map");
            return Err(DuplicateKeyError::new(key, position));
        }
        map.insert(key, value_fn(item));
    }

    tracing::trace!(entries = map.len(), "Collected map");
    Ok(Some(map))
}

/// Map every element to a key and a value, folding repeated keys with `merge_fn`
///
/// # Examples
///
/// ```
/// use common_utils::collection::map_and_collect_to_map_with;
///
/// let scores = vec![("ann", 3), ("bob", 5), ("ann", 4)];
/// let totals = map_and_collect_to_map_with(
///     Some(scores),
///     |(name, _)| *name,
///     |(_, score)| score,
///     |existing, incoming| existing + incoming,
/// )
/// .unwrap();
/// assert_eq!(totals["ann"], 7);
/// assert_eq!(totals["bob"], 5);
/// ```
pub fn map_and_collect_to_map_with<I, T, K, V, KF, VF, MF>(
    items: Option<I>,
    mut key_fn: KF,
    mut value_fn: VF,
    mut merge_fn: MF,
) -> Option<HashMap<K, V>>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash,
    KF: FnMut(&T) -> K,
    VF: FnMut(T) -> V,
    MF: FnMut(V, V) -> V,
{
    let Some(items) = items else {
        tracing::trace!("Absent input, skipping map collection");
        return None;
    };

    let iter = items.into_iter();
    let mut map: HashMap<K, V> = HashMap::with_capacity(iter.size_hint().0);
    let mut merged = 0usize;
    for item in iter {
        let key = key_fn(&item);
        let incoming = value_fn(item);
        match map.remove_entry(&key) {
            // The first key seen stays in the map; only the value is merged
            Some((stored, existing)) => {
                merged += 1;
                map.insert(stored, merge_fn(existing, incoming));
            }
            None => {
                map.insert(key, incoming);
            }
        }
    }

    tracing::trace!(entries = map.len(), merged, "Collected map");
    Some(map)
}

/// Map every element to a key and a value, handling repeated keys per `policy`
///
/// [`DuplicateKeyPolicy::Fail`] behaves like [`map_and_collect_to_map`]; the
/// other policies like [`map_and_collect_to_map_with`].
pub fn map_and_collect_to_map_with_policy<I, T, K, V, KF, VF>(
    items: Option<I>,
    key_fn: KF,
    value_fn: VF,
    policy: DuplicateKeyPolicy,
) -> Result<Option<HashMap<K, V>>, DuplicateKeyError<K>>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash,
    KF: FnMut(&T) -> K,
    VF: FnMut(T) -> V,
{
    if policy.is_fail() {
        return map_and_collect_to_map(items, key_fn, value_fn);
    }
    Ok(map_and_collect_to_map_with(
        items,
        key_fn,
        value_fn,
        |existing, incoming| policy.resolve(existing, incoming),
    ))
}
