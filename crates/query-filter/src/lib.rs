//! Query-filter - URL query strings to filter conditions.
//!
//! Parses the query string of a collection request
//! (`?age-min=18&name-lk=John&sort=name`) into an ordered list of
//! `(field, comparator, value)` conditions ready to become a WHERE clause.
//!
//! - Key grammar `[not-]base[-postfix]` with a fixed postfix table
//! - Comparator resolution, with a literal `null` value forcing a null test
//! - Reserved control keys (`sort`, `limit`, `page`) kept apart from filters
//!
//! The crate does not decode, convert values, or build SQL. Values stay raw
//! strings for the query-building layer to interpret.
//!
//! # Quick Start
//!
//! ```rust
//! use query_filter::{FilterCondition, FilterParser, Operator};
//!
//! let parser = FilterParser::new("/users", Some("age-min=18&name-lk=John&sort=name"));
//!
//! assert_eq!(
//!     parser.where_parameters(),
//!     [
//!         &FilterCondition::new("age", Operator::Gte, "18"),
//!         &FilterCondition::new("name", Operator::Like, "John"),
//!     ]
//! );
//! assert_eq!(parser.query_parameter("sort").unwrap().value, "name");
//! ```
//!
//! # Key Grammar
//!
//! | postfix | comparator |
//! |---------|------------|
//! | `-st` | `<` |
//! | `-gt` | `>` |
//! | `-min` | `>=` |
//! | `-max` | `<=` |
//! | `-lk` | `like` |
//! | `-not-lk` | `not like` |
//! | `-in` | `IN` |
//! | `-not-in` | `NOT IN` |
//! | `-not` | `!=` |
//!
//! A key without postfix compares with `=`. The `not-` prefix is stripped
//! from the field name and leaves the comparator untouched.
//!
//! A value equal to `null` (any case, surrounding whitespace ignored)
//! overrides the comparator:
//!
//! ```text
//! status=null      -> status NULL
//! status-not=null  -> status NOT NULL
//! age-min=null     -> age NOT NULL
//! ```
//!
//! # Malformed Segments
//!
//! A segment must contain exactly one `=`. By default offending segments are
//! skipped, logged through `tracing` and listed by
//! [`FilterParser::malformed_segments`]. [`FilterParser::try_new`] and a
//! strict [`ParserConfig`] fail the whole parse instead.

mod condition;
mod error;
mod grammar;
mod op;
mod parser;
mod request;
mod reserved;

// Re-export public API
pub use condition::FilterCondition;
pub use error::{FilterError, MalformedSegment, Result, SegmentFault};
pub use grammar::{decompose_key, is_null_literal, resolve_operator, KeyParts, Postfix, Prefix};
pub use op::Operator;
pub use parser::FilterParser;
pub use request::decode_query;
pub use reserved::{ParserConfig, ReservedKeys};
