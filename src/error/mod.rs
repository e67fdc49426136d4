use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

/// Two elements of an input collection resolved to the same key
///
/// Returned by the indexing and map-collecting operations that were not given
/// a merge function. The offending key is kept so callers can report it or
/// retry with a merge function.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "[E{code:04}] Duplicate key {key:?} at position {position}",
    code = ErrorCode::DUPLICATE_KEY
)]
pub struct DuplicateKeyError<K> {
    key: K,
    position: usize,
}

impl<K> DuplicateKeyError<K> {
    /// Create an error for `key`, detected at the zero-based input `position`
    pub fn new(key: K, position: usize) -> Self {
        Self { key, position }
    }

    /// The key shared by more than one element
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Consume the error and take ownership of the key
    pub fn into_key(self) -> K {
        self.key
    }

    /// Input position of the element whose key was already present
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn code(&self) -> u16 {
        ErrorCode::DUPLICATE_KEY
    }

    /// Convert the key, e.g. to an owned or printable form
    pub fn map_key<K2>(self, f: impl FnOnce(K) -> K2) -> DuplicateKeyError<K2> {
        DuplicateKeyError {
            key: f(self.key),
            position: self.position,
        }
    }
}

/// Errors raised while loading a [`CollectConfig`](crate::config::CollectConfig)
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("[E{code:04}] Failed to parse configuration: {source}")]
    Parse {
        code: u16,
        #[source]
        source: toml::de::Error,
    },

    #[error("[E{code:04}] Invalid value '{value}' for {field}: {message}")]
    InvalidValue {
        code: u16,
        field: String,
        value: String,
        message: String,
    },
}

impl ConfigError {
    /// Create an invalid value error with the default code
    pub fn invalid_value(
        field: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            code: ErrorCode::CONFIG_INVALID_VALUE,
            field: field.into(),
            value: value.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> u16 {
        match self {
            Self::Parse { code, .. } | Self::InvalidValue { code, .. } => *code,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(source: toml::de::Error) -> Self {
        Self::Parse {
            code: ErrorCode::CONFIG_PARSE_ERROR,
            source,
        }
    }
}
