//! Query string parser.
//!
//! [`FilterParser`] turns an already-decoded query string into an ordered
//! list of [`FilterCondition`]s and answers lookups against them.

use std::collections::HashMap;

use crate::condition::FilterCondition;
use crate::error::{FilterError, MalformedSegment, Result};
use crate::reserved::{ParserConfig, ReservedKeys};

/// Parsed filter conditions of one request.
///
/// The query string is parsed eagerly on construction; afterwards the parser
/// is read-only. Conditions keep the left-to-right order of their segments.
///
/// Key lookups go through an index built after parsing in which the **last
/// occurrence of a key wins**. Sequence views ([`conditions`](Self::conditions),
/// [`where_parameters`](Self::where_parameters)) still see every occurrence.
///
/// # Example
///
/// ```
/// use query_filter::{FilterParser, Operator};
///
/// let parser = FilterParser::new("/users", Some("age-min=18&name-lk=John&sort=name"));
///
/// assert!(parser.has_query_parameter("sort"));
/// assert_eq!(parser.query_parameter("age").unwrap().operator, Operator::Gte);
///
/// let keys: Vec<_> = parser.where_parameters().iter().map(|c| c.key.as_str()).collect();
/// assert_eq!(keys, ["age", "name"]);
/// ```
#[derive(Debug, Clone)]
pub struct FilterParser {
    path: String,
    reserved: ReservedKeys,
    conditions: Vec<FilterCondition>,
    index: HashMap<String, usize>,
    malformed: Vec<MalformedSegment>,
}

impl FilterParser {
    /// Parses `query` with the default reserved keys.
    ///
    /// Malformed segments are skipped; see [`malformed_segments`](Self::malformed_segments).
    pub fn new(path: impl Into<String>, query: Option<&str>) -> Self {
        Self::lenient(path.into(), query, ReservedKeys::default())
    }

    /// Parses `query` with the given configuration.
    ///
    /// Fails only in strict mode, on the first malformed segment.
    pub fn with_config(
        path: impl Into<String>,
        query: Option<&str>,
        config: ParserConfig,
    ) -> Result<Self> {
        if config.strict {
            Self::strict(path.into(), query, config.reserved)
        } else {
            Ok(Self::lenient(path.into(), query, config.reserved))
        }
    }

    /// Parses `query` with the default reserved keys, failing on the first
    /// malformed segment.
    pub fn try_new(path: impl Into<String>, query: Option<&str>) -> Result<Self> {
        Self::strict(path.into(), query, ReservedKeys::default())
    }

    /// Parses `query` with the given reserved keys, failing on the first
    /// malformed segment regardless of `config.strict`.
    pub fn try_with_config(
        path: impl Into<String>,
        query: Option<&str>,
        config: ParserConfig,
    ) -> Result<Self> {
        Self::strict(path.into(), query, config.reserved)
    }

    fn lenient(path: String, query: Option<&str>, reserved: ReservedKeys) -> Self {
        let mut conditions = Vec::new();
        let mut malformed = Vec::new();
        for parsed in parse_segments(query) {
            match parsed {
                Ok(condition) => conditions.push(condition),
                Err(m) => {
                    tracing::warn!(
                        segment = %m.segment,
                        reason = %m.reason,
                        "Skipping malformed query segment"
                    );
                    malformed.push(m);
                }
            }
        }
        Self::assemble(path, reserved, conditions, malformed)
    }

    fn strict(path: String, query: Option<&str>, reserved: ReservedKeys) -> Result<Self> {
        let conditions = parse_segments(query)
            .collect::<std::result::Result<Vec<_>, MalformedSegment>>()
            .map_err(FilterError::from)?;
        Ok(Self::assemble(path, reserved, conditions, Vec::new()))
    }

    fn assemble(
        path: String,
        reserved: ReservedKeys,
        conditions: Vec<FilterCondition>,
        malformed: Vec<MalformedSegment>,
    ) -> Self {
        tracing::debug!(
            path = %path,
            conditions = conditions.len(),
            skipped = malformed.len(),
            "Parsed query string"
        );

        let index = build_index(&conditions);
        FilterParser {
            path,
            reserved,
            conditions,
            index,
            malformed,
        }
    }

    /// Returns the condition with base key `key`.
    ///
    /// With repeated keys the last occurrence is returned.
    pub fn query_parameter(&self, key: &str) -> Result<&FilterCondition> {
        self.get(key).ok_or_else(|| FilterError::UnknownParameter(key.to_string()))
    }

    /// Like [`query_parameter`](Self::query_parameter), returning `None` for
    /// an absent key.
    pub fn get(&self, key: &str) -> Option<&FilterCondition> {
        self.index.get(key).map(|&idx| &self.conditions[idx])
    }

    /// Returns `true` if at least one condition has base key `key`.
    pub fn has_query_parameter(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Returns `true` if any condition was parsed.
    pub fn has_query_parameters(&self) -> bool {
        !self.conditions.is_empty()
    }

    /// Returns the reserved control keys.
    pub fn predefined_parameters(&self) -> &ReservedKeys {
        &self.reserved
    }

    /// Returns the conditions whose key is not reserved, in query order.
    pub fn where_parameters(&self) -> Vec<&FilterCondition> {
        self.conditions
            .iter()
            .filter(|c| !self.reserved.contains(&c.key))
            .collect()
    }

    /// Returns the conditions whose key is reserved, in query order.
    pub fn reserved_parameters(&self) -> Vec<&FilterCondition> {
        self.conditions
            .iter()
            .filter(|c| self.reserved.contains(&c.key))
            .collect()
    }

    /// All conditions in query order.
    pub fn conditions(&self) -> &[FilterCondition] {
        &self.conditions
    }

    /// Segments skipped by a lenient parse, in query order.
    pub fn malformed_segments(&self) -> &[MalformedSegment] {
        &self.malformed
    }

    /// The request path this query belongs to.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FilterCondition> {
        self.conditions.iter()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

impl<'a> IntoIterator for &'a FilterParser {
    type Item = &'a FilterCondition;
    type IntoIter = std::slice::Iter<'a, FilterCondition>;

    fn into_iter(self) -> Self::IntoIter {
        self.conditions.iter()
    }
}

/// Splits a decoded query at `&` and parses every non-empty segment.
///
/// An absent or empty query yields nothing.
fn parse_segments(
    query: Option<&str>,
) -> impl Iterator<Item = std::result::Result<FilterCondition, MalformedSegment>> + '_ {
    query
        .unwrap_or_default()
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let parsed = FilterCondition::parse_segment(segment);
            if let Ok(condition) = &parsed {
                tracing::trace!(
                    key = %condition.key,
                    operator = %condition.operator,
                    "Parsed filter condition"
                );
            }
            parsed
        })
}

/// Maps each key to the position of its last occurrence.
fn build_index(conditions: &[FilterCondition]) -> HashMap<String, usize> {
    let mut index = HashMap::with_capacity(conditions.len());
    for (idx, condition) in conditions.iter().enumerate() {
        index.insert(condition.key.clone(), idx);
    }
    index
}
