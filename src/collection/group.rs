//! Grouping elements by a classifier
//!
//! Both functions return `None` when the input is absent, and a present
//! (possibly empty) map otherwise.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Group elements into lists keyed by `classifier`
///
/// Within each group, elements keep their input order.
///
/// # Examples
///
/// ```
/// use common_utils::collection::group_by_to_list;
///
/// let ages = vec![("alice", 18), ("bob", 19), ("carol", 18)];
/// let groups = group_by_to_list(Some(&ages), |(_, age)| *age).unwrap();
/// assert_eq!(groups[&18], vec![&("alice", 18), &("carol", 18)]);
/// assert_eq!(groups[&19], vec![&("bob", 19)]);
/// ```
pub fn group_by_to_list<I, T, K, F>(
    items: Option<I>,
    mut classifier: F,
) -> Option<HashMap<K, Vec<T>>>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let Some(items) = items else {
        tracing::trace!("Absent input, skipping grouping");
        return None;
    };

    let mut groups: HashMap<K, Vec<T>> = HashMap::new();
    for item in items {
        groups.entry(classifier(&item)).or_default().push(item);
    }

    tracing::trace!(groups = groups.len(), "Grouped items into lists");
    Some(groups)
}

/// Group elements into sets keyed by `classifier`
///
/// Equal elements within a group collapse to one.
pub fn group_by_to_set<I, T, K, F>(
    items: Option<I>,
    mut classifier: F,
) -> Option<HashMap<K, HashSet<T>>>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let Some(items) = items else {
        tracing::trace!("Absent input, skipping grouping");
        return None;
    };

    let mut groups: HashMap<K, HashSet<T>> = HashMap::new();
    for item in items {
        groups.entry(classifier(&item)).or_default().insert(item);
    }

    tracing::trace!(groups = groups.len(), "Grouped items into sets");
    Some(groups)
}
