//! Configuration for the collection transforms
//!
//! The only tunable today is how map-collecting operations treat two elements
//! that derive the same key. Configuration can come from TOML and be
//! overridden from the environment.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environment variable that overrides [`CollectConfig::duplicate_keys`]
pub const DUPLICATE_KEYS_ENV: &str = "COMMON_UTILS_DUPLICATE_KEYS";

/// What to do when two elements resolve to the same key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateKeyPolicy {
    /// Report a [`DuplicateKeyError`](crate::error::DuplicateKeyError)
    #[default]
    Fail,
    /// Keep the value of the element seen first
    KeepFirst,
    /// Keep the value of the element seen last
    KeepLast,
}

impl DuplicateKeyPolicy {
    /// Pick the surviving value for a collision
    ///
    /// `Fail` is equivalent to `KeepFirst` when forced to merge: it keeps the
    /// existing value and reports nothing. To get the error, check
    /// [`is_fail`](Self::is_fail) before merging, as
    /// [`crate::collection::map_and_collect_to_map_with_policy`]
    /// does.
    pub fn resolve<V>(self, existing: V, incoming: V) -> V {
        match self {
            DuplicateKeyPolicy::Fail | DuplicateKeyPolicy::KeepFirst => existing,
            DuplicateKeyPolicy::KeepLast => incoming,
        }
    }

    pub fn is_fail(self) -> bool {
        self == DuplicateKeyPolicy::Fail
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DuplicateKeyPolicy::Fail => "fail",
            DuplicateKeyPolicy::KeepFirst => "keep_first",
            DuplicateKeyPolicy::KeepLast => "keep_last",
        }
    }
}

impl fmt::Display for DuplicateKeyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DuplicateKeyPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "fail" => Ok(DuplicateKeyPolicy::Fail),
            "keep_first" | "first" => Ok(DuplicateKeyPolicy::KeepFirst),
            "keep_last" | "last" => Ok(DuplicateKeyPolicy::KeepLast),
            _ => Err(ConfigError::invalid_value(
                "duplicate_keys",
                s,
                "expected one of: fail, keep_first, keep_last",
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectConfig {
    pub duplicate_keys: DuplicateKeyPolicy,
}

impl CollectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duplicate_keys(mut self, policy: DuplicateKeyPolicy) -> Self {
        self.duplicate_keys = policy;
        self
    }

    /// Parse a configuration from TOML; missing fields take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CollectConfig = toml::from_str(content)?;
        tracing::debug!(duplicate_keys = %config.duplicate_keys, "Loaded collect configuration");
        Ok(config)
    }

    /// Apply overrides from the process environment
    pub fn merge_env_vars(&mut self) -> Result<(), ConfigError> {
        self.merge_env_with(|name| std::env::var(name).ok())
    }

    /// Apply overrides using `lookup` in place of the process environment
    pub fn merge_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(DUPLICATE_KEYS_ENV) {
            self.duplicate_keys = value.parse()?;
            tracing::debug!(
                duplicate_keys = %self.duplicate_keys,
                "Duplicate key policy overridden from {}",
                DUPLICATE_KEYS_ENV
            );
        }
        Ok(())
    }
}
