//! Method-call form of the collection transforms
//!
//! [`CollectionExt`] is implemented for every `IntoIterator`, so the
//! transforms read as pipeline steps:
//!
//! ```
//! use common_utils::collection::CollectionExt;
//!
//! let people = vec![(1, "alice", 18), (2, "bob", 19), (3, "carol", 18)];
//! let by_age = (&people).group_by_to_list(|(_, _, age)| *age);
//! assert_eq!(by_age[&18].len(), 2);
//!
//! let by_id = (&people).unique_index(|(id, _, _)| *id).unwrap();
//! assert_eq!(by_id[&2].1, "bob");
//! ```
//!
//! The receiver is always present, so these methods return the collection
//! directly rather than wrapped in `Option`.

use super::multimap::{self, Multimap};
use super::{group, index, mapping};
use crate::error::DuplicateKeyError;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

pub trait CollectionExt: IntoIterator + Sized {
    fn unique_index<K, KF>(self, key_fn: KF) -> Result<HashMap<K, Self::Item>, DuplicateKeyError<K>>
    where
        K: Eq + Hash,
        KF: FnMut(&Self::Item) -> K,
    {
        index::unique_index(Some(self), key_fn).map(Option::unwrap_or_default)
    }

    fn unique_index_with<K, KF, MF>(self, key_fn: KF, merge_fn: MF) -> HashMap<K, Self::Item>
    where
        K: Eq + Hash,
        KF: FnMut(&Self::Item) -> K,
        MF: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        index::unique_index_with(Some(self), key_fn, merge_fn).unwrap_or_default()
    }

    fn group_by_to_list<K, F>(self, classifier: F) -> HashMap<K, Vec<Self::Item>>
    where
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        group::group_by_to_list(Some(self), classifier).unwrap_or_default()
    }

    fn group_by_to_set<K, F>(self, classifier: F) -> HashMap<K, HashSet<Self::Item>>
    where
        Self::Item: Eq + Hash,
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        group::group_by_to_set(Some(self), classifier).unwrap_or_default()
    }

    fn multimap_group_by<K, V, M, CF, VF, SF>(self, classifier: CF, value_fn: VF, factory: SF) -> M
    where
        M: Multimap<K, V>,
        CF: FnMut(&Self::Item) -> K,
        VF: FnMut(Self::Item) -> V,
        SF: FnOnce() -> M,
    {
        multimap::multimap_group_by(self, classifier, value_fn, factory)
    }

    fn multimap_group_by_flat<K, V, C, M, CF, VF, SF>(
        self,
        classifier: CF,
        value_fn: VF,
        factory: SF,
    ) -> M
    where
        C: IntoIterator<Item = V>,
        M: Multimap<K, V>,
        CF: FnMut(&Self::Item) -> K,
        VF: FnMut(Self::Item) -> C,
        SF: FnOnce() -> M,
    {
        multimap::multimap_group_by_flat(self, classifier, value_fn, factory)
    }

    fn map_and_collect_to_set<R, F>(self, map_fn: F) -> HashSet<R>
    where
        R: Eq + Hash,
        F: FnMut(Self::Item) -> R,
    {
        mapping::map_and_collect_to_set(Some(self), map_fn).unwrap_or_default()
    }

    fn map_and_collect_to_list<R, F>(self, map_fn: F) -> Vec<R>
    where
        F: FnMut(Self::Item) -> R,
    {
        mapping::map_and_collect_to_list(Some(self), map_fn).unwrap_or_default()
    }

    fn map_and_collect_to_map<K, V, KF, VF>(
        self,
        key_fn: KF,
        value_fn: VF,
    ) -> Result<HashMap<K, V>, DuplicateKeyError<K>>
    where
        K: Eq + Hash,
        KF: FnMut(&Self::Item) -> K,
        VF: FnMut(Self::Item) -> V,
    {
        index::map_and_collect_to_map(Some(self), key_fn, value_fn).map(Option::unwrap_or_default)
    }

    fn map_and_collect_to_map_with<K, V, KF, VF, MF>(
        self,
        key_fn: KF,
        value_fn: VF,
        merge_fn: MF,
    ) -> HashMap<K, V>
    where
        K: Eq + Hash,
        KF: FnMut(&Self::Item) -> K,
        VF: FnMut(Self::Item) -> V,
        MF: FnMut(V, V) -> V,
    {
        index::map_and_collect_to_map_with(Some(self), key_fn, value_fn, merge_fn)
            .unwrap_or_default()
    }
}

impl<I: IntoIterator> CollectionExt for I {}
