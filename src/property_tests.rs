//! Property-based tests for the collection transforms

#[cfg(test)]
mod tests {
    use crate::collection::{
        group_by_to_list, group_by_to_set, map_and_collect_to_list, map_and_collect_to_set,
        multimap_group_by, multimap_group_by_flat, unique_index, unique_index_with,
        unique_index_with_policy, Multimap,
    };
    use crate::config::DuplicateKeyPolicy;
    use proptest::prelude::*;
    use std::collections::{BTreeMap, HashMap, HashSet};

    // Property test: unique keys index every element under its own key
    proptest! {
        #[test]
        fn test_unique_index_covers_all_items(
            ids in prop::collection::hash_set(any::<u32>(), 0..64),
        ) {
            let items: Vec<u32> = ids.into_iter().collect();
            let index = unique_index(Some(&items), |id| **id).unwrap().unwrap();

            prop_assert_eq!(index.len(), items.len());
            for item in &items {
                prop_assert_eq!(index[item], item);
            }
        }
    }

    // Property test: a repeated key is always reported, never silently dropped
    proptest! {
        #[test]
        fn test_unique_index_reports_duplicates(
            items in prop::collection::vec(0u8..8, 9..40),
        ) {
            // More items than distinct keys guarantees a collision
            let err = unique_index(Some(&items), |n| **n).unwrap_err();
            prop_assert!(items[..err.position()].contains(err.key()));
            prop_assert_eq!(items[err.position()], *err.key());
        }
    }

    // Property test: merge folds colliding elements in input order
    proptest! {
        #[test]
        fn test_unique_index_with_folds_in_order(
            items in prop::collection::vec((0u8..5, any::<u16>()), 0..50),
        ) {
            let merged = unique_index_with(
                Some(items.iter().map(|(key, value)| (*key, vec![*value]))),
                |(key, _)| *key,
                |(key, mut existing), (_, incoming)| {
                    existing.extend(incoming);
                    (key, existing)
                },
            )
            .unwrap();

            for (key, (_, values)) in &merged {
                let expected: Vec<u16> = items
                    .iter()
                    .filter(|(k, _)| k == key)
                    .map(|(_, v)| *v)
                    .collect();
                prop_assert_eq!(values, &expected);
            }
        }
    }

    // Property test: policies keep the first or last colliding element
    proptest! {
        #[test]
        fn test_policies_keep_first_and_last(
            items in prop::collection::vec((0u8..5, any::<u16>()), 1..50),
        ) {
            let keep_first = DuplicateKeyPolicy::KeepFirst;
            let first = unique_index_with_policy(Some(&items), |(k, _)| *k, keep_first)
                .unwrap()
                .unwrap();
            let keep_last = DuplicateKeyPolicy::KeepLast;
            let last = unique_index_with_policy(Some(&items), |(k, _)| *k, keep_last)
                .unwrap()
                .unwrap();

            for (key, kept) in &first {
                let expected = items.iter().find(|(k, _)| k == key);
                prop_assert_eq!(Some(*kept), expected);
            }
            for (key, kept) in &last {
                let expected = items.iter().rev().find(|(k, _)| k == key);
                prop_assert_eq!(Some(*kept), expected);
            }
        }
    }

    // Property test: each list group is the order-preserving filter of the input
    proptest! {
        #[test]
        fn test_group_by_to_list_preserves_order(
            items in prop::collection::vec(any::<i16>(), 0..100),
        ) {
            let groups = group_by_to_list(Some(&items), |n| n.rem_euclid(4)).unwrap();

            let total: usize = groups.values().map(Vec::len).sum();
            prop_assert_eq!(total, items.len());
            for (key, group) in &groups {
                let expected: Vec<&i16> = items
                    .iter()
                    .filter(|n| n.rem_euclid(4) == *key)
                    .collect();
                prop_assert_eq!(group, &expected);
            }
        }
    }

    // Property test: each set group is the deduplicated filter of the input
    proptest! {
        #[test]
        fn test_group_by_to_set_dedupes(items in prop::collection::vec(0u8..32, 0..100)) {
            let groups = group_by_to_set(Some(items.clone()), |n| n % 3).unwrap();

            for (key, group) in &groups {
                let expected: HashSet<u8> = items
                    .iter()
                    .copied()
                    .filter(|n| n % 3 == *key)
                    .collect();
                prop_assert_eq!(group, &expected);
            }
        }
    }

    // Property test: list mapping keeps order and length, set mapping is the image
    proptest! {
        #[test]
        fn test_map_and_collect(items in prop::collection::vec(any::<i32>(), 0..100)) {
            let list = map_and_collect_to_list(Some(&items), |n| n.wrapping_mul(3)).unwrap();
            prop_assert_eq!(list.len(), items.len());
            for (mapped, original) in list.iter().zip(&items) {
                prop_assert_eq!(*mapped, original.wrapping_mul(3));
            }

            let set = map_and_collect_to_set(Some(&items), |n| n / 10).unwrap();
            let expected: HashSet<i32> = items.iter().map(|n| n / 10).collect();
            prop_assert_eq!(set, expected);
        }
    }

    // Property test: list multimaps keep every value, flattened or not
    proptest! {
        #[test]
        fn test_multimap_value_counts(
            items in prop::collection::vec(
                (0u8..6, prop::collection::vec(any::<u8>(), 0..5)),
                0..40,
            ),
        ) {
            let plain = multimap_group_by(
                &items,
                |(key, _)| *key,
                |(_, values)| values.len(),
                HashMap::<u8, Vec<usize>>::new,
            );
            prop_assert_eq!(plain.value_count(), items.len());

            let flat = multimap_group_by_flat(
                &items,
                |(key, _)| *key,
                |(_, values)| values.iter().copied(),
                BTreeMap::<u8, Vec<u8>>::new,
            );
            let expected: usize = items.iter().map(|(_, values)| values.len()).sum();
            prop_assert_eq!(flat.value_count(), expected);
            prop_assert!(flat.values().all(|bucket| !bucket.is_empty()));
        }
    }

    #[test]
    fn test_absent_inputs_never_fault() {
        let absent = None::<Vec<u8>>;
        assert!(unique_index(absent.clone(), |n| *n).unwrap().is_none());
        assert!(group_by_to_list(absent.clone(), |n| *n).is_none());
        assert!(group_by_to_set(absent.clone(), |n| *n).is_none());
        assert!(map_and_collect_to_set(absent.clone(), |n| n).is_none());
        assert!(map_and_collect_to_list(absent, |n| n).is_none());
    }
}
