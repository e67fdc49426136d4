//! # common-utils
//!
//! Helpers that remove the boilerplate from common collection pipelines:
//! indexing a collection by a derived key, grouping into lists, sets or
//! multimaps, and mapping into sets, lists or maps.
//!
//! ```
//! use common_utils::collection::{group_by_to_list, unique_index};
//!
//! let people = vec![(1, 18), (2, 19), (3, 18)];
//!
//! let by_age = group_by_to_list(Some(&people), |(_, age)| *age).unwrap();
//! assert_eq!(by_age[&18], vec![&(1, 18), &(3, 18)]);
//!
//! let err = unique_index(Some(&people), |(_, age)| *age).unwrap_err();
//! assert_eq!(err.key(), &18);
//! ```
//!
//! ## Modules
//!
//! - `collection` - The transforms, as free functions and as the `CollectionExt` trait
//! - `config` - Duplicate key policy, loadable from TOML and the environment
//! - `error` - `DuplicateKeyError`, `ConfigError` and the error code registry

pub mod collection;
pub mod config;
pub mod error;

#[cfg(test)]
mod property_tests;

pub use collection::{CollectionExt, Multimap};
pub use config::{CollectConfig, DuplicateKeyPolicy};
pub use error::{ConfigError, DuplicateKeyError, ErrorCode};
