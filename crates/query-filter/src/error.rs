//! Error types for the query-filter crate.

use std::string::FromUtf8Error;

use thiserror::Error;

/// Why a `&`-delimited segment could not be split into a key and a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentFault {
    /// The segment has no `=` at all.
    MissingSeparator,
    /// The segment has more than one `=`.
    ExtraSeparator,
}

impl SegmentFault {
    /// Returns the display name of this fault.
    pub fn as_str(self) -> &'static str {
        match self {
            SegmentFault::MissingSeparator => "missing '=' separator",
            SegmentFault::ExtraSeparator => "more than one '=' separator",
        }
    }
}

impl std::fmt::Display for SegmentFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A segment that could not be split into a key and a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedSegment {
    /// The segment text as it appeared in the query.
    pub segment: String,
    /// Why it was rejected.
    pub reason: SegmentFault,
}

impl MalformedSegment {
    pub fn new(segment: impl Into<String>, reason: SegmentFault) -> Self {
        MalformedSegment {
            segment: segment.into(),
            reason,
        }
    }
}

/// Errors that can occur when parsing a query string or looking up conditions.
#[derive(Debug, Error)]
pub enum FilterError {
    /// No parsed condition has the requested base key.
    #[error("no query parameter with key '{0}'")]
    UnknownParameter(String),

    /// A segment is not of the form `key=value`.
    #[error("malformed query segment '{segment}': {reason}")]
    MalformedSegment {
        segment: String,
        reason: SegmentFault,
    },

    /// Percent-decoding the raw query produced invalid UTF-8.
    #[error("query string is not valid UTF-8 once decoded: {0}")]
    InvalidEncoding(#[from] FromUtf8Error),
}

impl From<MalformedSegment> for FilterError {
    fn from(m: MalformedSegment) -> Self {
        FilterError::MalformedSegment {
            segment: m.segment,
            reason: m.reason,
        }
    }
}

/// Result type for query-filter operations.
pub type Result<T> = std::result::Result<T, FilterError>;
