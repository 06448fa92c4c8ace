//! Reserved control keys and parser configuration.

use serde::{Deserialize, Serialize};

/// Keys with a request-control meaning (sorting, paging) rather than a
/// filtering one.
///
/// The default set is `sort`, `limit`, `page`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservedKeys(Vec<String>);

impl ReservedKeys {
    /// Default reserved keys.
    pub const DEFAULT: [&'static str; 3] = ["sort", "limit", "page"];

    /// Creates a reserved set from the given keys.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ReservedKeys(keys.into_iter().map(Into::into).collect())
    }

    /// Returns `true` if `key` is reserved.
    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|k| k == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ReservedKeys {
    fn default() -> Self {
        ReservedKeys::new(Self::DEFAULT)
    }
}

/// Configuration for a [`FilterParser`](crate::FilterParser).
///
/// Deserializes with defaults for missing fields:
///
/// ```
/// use query_filter::ParserConfig;
///
/// let config: ParserConfig = serde_json::from_str(r#"{"strict": true}"#).unwrap();
/// assert!(config.strict);
/// assert!(config.reserved.contains("page"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Control keys excluded from [`where_parameters`](crate::FilterParser::where_parameters).
    pub reserved: ReservedKeys,
    /// Fail the whole parse on a malformed segment instead of skipping it.
    pub strict: bool,
}

impl ParserConfig {
    pub fn new() -> Self {
        ParserConfig::default()
    }

    /// Replaces the reserved key set.
    pub fn reserved(mut self, reserved: ReservedKeys) -> Self {
        self.reserved = reserved;
        self
    }

    /// Sets strict mode.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
