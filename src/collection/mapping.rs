//! Mapping elements and collecting the results

use std::collections::HashSet;
use std::hash::Hash;

/// Map every element and collect the distinct results
pub fn map_and_collect_to_set<I, T, R, F>(items: Option<I>, map_fn: F) -> Option<HashSet<R>>
where
    I: IntoIterator<Item = T>,
    R: Eq + Hash,
    F: FnMut(T) -> R,
{
    let Some(items) = items else {
        tracing::trace!("Absent input, skipping set collection");
        return None;
    };
    Some(items.into_iter().map(map_fn).collect())
}

/// Map every element, keeping order and duplicates
pub fn map_and_collect_to_list<I, T, R, F>(items: Option<I>, map_fn: F) -> Option<Vec<R>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> R,
{
    let Some(items) = items else {
        tracing::trace!("Absent input, skipping list collection");
        return None;
    };
    Some(items.into_iter().map(map_fn).collect())
}
