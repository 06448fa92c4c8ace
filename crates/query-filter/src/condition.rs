//! Filter condition records.
//!
//! A [`FilterCondition`] is one parsed query parameter: the base field name,
//! the resolved comparator and the raw value.

use serde::{Deserialize, Serialize};

use crate::error::{MalformedSegment, Result, SegmentFault};
use crate::grammar::{decompose_key, resolve_operator};
use crate::op::Operator;

/// A single `(field, comparator, value)` triple.
///
/// # Example
///
/// ```
/// use query_filter::{FilterCondition, Operator};
///
/// let condition = FilterCondition::from_segment("age-min=18").unwrap();
/// assert_eq!(condition.key, "age");
/// assert_eq!(condition.operator, Operator::Gte);
/// assert_eq!(condition.value, "18");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterCondition {
    /// Base field name, prefix and postfix stripped.
    pub key: String,
    /// Resolved comparator.
    pub operator: Operator,
    /// Raw value, never converted. `null` is kept as given.
    pub value: String,
}

impl FilterCondition {
    /// Creates a new condition.
    pub fn new(key: impl Into<String>, operator: Operator, value: impl Into<String>) -> Self {
        FilterCondition {
            key: key.into(),
            operator,
            value: value.into(),
        }
    }

    /// Parses one `key=value` segment of a query string.
    ///
    /// The segment must contain exactly one `=`.
    pub fn from_segment(segment: &str) -> Result<Self> {
        Ok(Self::parse_segment(segment)?)
    }

    pub(crate) fn parse_segment(segment: &str) -> std::result::Result<Self, MalformedSegment> {
        let (raw_key, value) = segment
            .split_once('=')
            .ok_or_else(|| MalformedSegment::new(segment, SegmentFault::MissingSeparator))?;
        if value.contains('=') {
            return Err(MalformedSegment::new(segment, SegmentFault::ExtraSeparator));
        }

        let parts = decompose_key(raw_key);
        Ok(FilterCondition {
            key: parts.base.to_string(),
            operator: resolve_operator(parts.postfix, value),
            value: value.to_string(),
        })
    }

    /// Returns `true` if this condition tests for (non-)null.
    pub fn is_null_check(&self) -> bool {
        self.operator.is_null_check()
    }
}

impl std::fmt::Display for FilterCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.key, self.operator, self.value)
    }
}
