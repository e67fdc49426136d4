//! Generic collection transforms
//!
//! Every function makes a single pass over its input and returns a freshly
//! allocated container. Key, classifier, and value functions run once per
//! element in input order; panics inside them propagate unchanged.

pub mod ext;
pub mod group;
pub mod index;
pub mod mapping;
pub mod multimap;

pub use ext::CollectionExt;
pub use group::{group_by_to_list, group_by_to_set};
pub use index::{
    map_and_collect_to_map, map_and_collect_to_map_with, map_and_collect_to_map_with_policy,
    unique_index, unique_index_with, unique_index_with_policy,
};
pub use mapping::{map_and_collect_to_list, map_and_collect_to_set};
pub use multimap::{multimap_group_by, multimap_group_by_flat, Bucket, Multimap};
