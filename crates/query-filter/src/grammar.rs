//! Key decomposition grammar.
//!
//! A filter key has the form `[prefix-]base[-postfix]`. The prefix and
//! postfix are drawn from fixed token tables; the base is whatever remains.
//!
//! Matching rules:
//!
//! - The prefix is tried first. A key starting with `not-` always loses that
//!   prefix, so `not-name` has base `name` and no postfix.
//! - The base is as short as possible: the first `-` that is directly
//!   followed by a postfix token ends it. Tokens are tried in table order and
//!   only need to start the remaining text, so `price-state` has base
//!   `price` and postfix `st`.
//! - With no such `-`, the base runs to the end of the key.

use crate::op::Operator;

/// Prefix token of a filter key.
///
/// The prefix is recognised and stripped but has no effect on the comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prefix {
    /// `not-`
    Not,
}

impl Prefix {
    /// All prefixes in match order.
    pub const ALL: [Prefix; 1] = [Prefix::Not];

    /// Returns the token text, without the `-` separator.
    pub fn token(self) -> &'static str {
        match self {
            Prefix::Not => "not",
        }
    }
}

/// Postfix token of a filter key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Postfix {
    /// `-st`, strictly smaller.
    St,
    /// `-gt`, strictly greater.
    Gt,
    /// `-min`
    Min,
    /// `-max`
    Max,
    /// `-lk`
    Lk,
    /// `-not-lk`
    NotLk,
    /// `-in`
    In,
    /// `-not-in`
    NotIn,
    /// `-not`
    Not,
}

impl Postfix {
    /// All postfixes in match order.
    ///
    /// Order matters: `not-lk` and `not-in` must be tried before `not`.
    pub const ALL: [Postfix; 9] = [
        Postfix::St,
        Postfix::Gt,
        Postfix::Min,
        Postfix::Max,
        Postfix::Lk,
        Postfix::NotLk,
        Postfix::In,
        Postfix::NotIn,
        Postfix::Not,
    ];

    /// Returns the token text, without the leading `-`.
    pub fn token(self) -> &'static str {
        match self {
            Postfix::St => "st",
            Postfix::Gt => "gt",
            Postfix::Min => "min",
            Postfix::Max => "max",
            Postfix::Lk => "lk",
            Postfix::NotLk => "not-lk",
            Postfix::In => "in",
            Postfix::NotIn => "not-in",
            Postfix::Not => "not",
        }
    }

    /// Returns the comparator this postfix maps to.
    pub fn comparator(self) -> Operator {
        match self {
            Postfix::St => Operator::Lt,
            Postfix::Gt => Operator::Gt,
            Postfix::Min => Operator::Gte,
            Postfix::Max => Operator::Lte,
            Postfix::Lk => Operator::Like,
            Postfix::NotLk => Operator::NotLike,
            Postfix::In => Operator::In,
            Postfix::NotIn => Operator::NotIn,
            Postfix::Not => Operator::Ne,
        }
    }

    /// Looks up a postfix by its exact token text.
    pub fn from_token(token: &str) -> Option<Postfix> {
        Postfix::ALL.into_iter().find(|p| p.token() == token)
    }

    /// Returns the first postfix, in table order, that `text` starts with.
    fn leading(text: &str) -> Option<Postfix> {
        Postfix::ALL.into_iter().find(|p| text.starts_with(p.token()))
    }
}

/// A filter key split into its grammar parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyParts<'a> {
    /// Matched prefix, if any.
    pub prefix: Option<Prefix>,
    /// The field name.
    pub base: &'a str,
    /// Matched postfix, if any.
    pub postfix: Option<Postfix>,
}

/// Splits a raw key into prefix, base and postfix.
///
/// # Example
///
/// ```
/// use query_filter::{decompose_key, Postfix, Prefix};
///
/// let parts = decompose_key("not-title-lk");
/// assert_eq!(parts.prefix, Some(Prefix::Not));
/// assert_eq!(parts.base, "title");
/// assert_eq!(parts.postfix, Some(Postfix::Lk));
/// ```
pub fn decompose_key(key: &str) -> KeyParts<'_> {
    let (prefix, rest) = strip_prefix(key);

    for (idx, _) in rest.match_indices('-') {
        if let Some(postfix) = Postfix::leading(&rest[idx + 1..]) {
            return KeyParts {
                prefix,
                base: &rest[..idx],
                postfix: Some(postfix),
            };
        }
    }

    KeyParts {
        prefix,
        base: rest,
        postfix: None,
    }
}

fn strip_prefix(key: &str) -> (Option<Prefix>, &str) {
    for prefix in Prefix::ALL {
        let stripped = key
            .strip_prefix(prefix.token())
            .and_then(|rest| rest.strip_prefix('-'));
        if let Some(rest) = stripped {
            return (Some(prefix), rest);
        }
    }
    (None, key)
}

/// Resolves the comparator for a key's postfix and its value.
///
/// A `null` value always wins over the postfix:
/// - no postfix: `=`, or `NULL` for a `null` value
/// - any postfix: the mapped comparator, or `NOT NULL` for a `null` value
pub fn resolve_operator(postfix: Option<Postfix>, value: &str) -> Operator {
    let null = is_null_literal(value);
    match postfix {
        None if null => Operator::Null,
        None => Operator::Eq,
        Some(_) if null => Operator::NotNull,
        Some(postfix) => postfix.comparator(),
    }
}

/// Whitespace stripped before the null test.
const NULL_TRIM: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Returns `true` if `value` is the literal `null`, ignoring ASCII case and
/// surrounding whitespace.
pub fn is_null_literal(value: &str) -> bool {
    value.trim_matches(NULL_TRIM).eq_ignore_ascii_case("null")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(key: &str) -> (Option<Prefix>, &str, Option<Postfix>) {
        let p = decompose_key(key);
        (p.prefix, p.base, p.postfix)
    }

    #[test]
    fn plain_key() {
        assert_eq!(parts("name"), (None, "name", None));
        assert_eq!(parts("first-name"), (None, "first-name", None));
        assert_eq!(parts(""), (None, "", None));
    }

    #[test]
    fn every_postfix() {
        for postfix in Postfix::ALL {
            let key = format!("age-{}", postfix.token());
            assert_eq!(parts(&key), (None, "age", Some(postfix)), "{key}");
        }
    }

    #[test]
    fn compound_postfixes_beat_not() {
        assert_eq!(parts("name-not-lk"), (None, "name", Some(Postfix::NotLk)));
        assert_eq!(parts("tag-not-in"), (None, "tag", Some(Postfix::NotIn)));
        assert_eq!(parts("name-not"), (None, "name", Some(Postfix::Not)));
        assert_eq!(parts("name-not-x"), (None, "name", Some(Postfix::Not)));
    }

    #[test]
    fn prefix_before_postfix() {
        assert_eq!(parts("not-name"), (Some(Prefix::Not), "name", None));
        assert_eq!(
            parts("not-title-lk"),
            (Some(Prefix::Not), "title", Some(Postfix::Lk))
        );
        // Prefix is consumed even when the remainder is itself a token.
        assert_eq!(parts("not-lk"), (Some(Prefix::Not), "lk", None));
        assert_eq!(parts("not-not"), (Some(Prefix::Not), "not", None));
        assert_eq!(parts("not"), (None, "not", None));
        assert_eq!(parts("nothing-min"), (None, "nothing", Some(Postfix::Min)));
    }

    #[test]
    fn earliest_postfix_wins() {
        assert_eq!(
            parts("first-name-min"),
            (None, "first-name", Some(Postfix::Min))
        );
        assert_eq!(parts("age-min-max"), (None, "age", Some(Postfix::Min)));
        // Tokens match as prefixes of the remaining text.
        assert_eq!(parts("price-state"), (None, "price", Some(Postfix::St)));
        assert_eq!(parts("user-index"), (None, "user", Some(Postfix::In)));
        assert_eq!(parts("-min"), (None, "", Some(Postfix::Min)));
    }

    #[test]
    fn postfix_lookup() {
        assert_eq!(Postfix::from_token("not-lk"), Some(Postfix::NotLk));
        assert_eq!(Postfix::from_token("min"), Some(Postfix::Min));
        assert_eq!(Postfix::from_token("minimum"), None);
    }

    #[test]
    fn operator_without_postfix() {
        assert_eq!(resolve_operator(None, "18"), Operator::Eq);
        assert_eq!(resolve_operator(None, ""), Operator::Eq);
        assert_eq!(resolve_operator(None, "null"), Operator::Null);
        assert_eq!(resolve_operator(None, " NuLL\t"), Operator::Null);
    }

    #[test]
    fn null_overrides_every_postfix() {
        for postfix in Postfix::ALL {
            assert_eq!(resolve_operator(Some(postfix), "NULL"), Operator::NotNull);
        }
        assert_eq!(resolve_operator(Some(Postfix::Min), "18"), Operator::Gte);
    }

    #[test]
    fn null_literal() {
        assert!(is_null_literal("null"));
        assert!(is_null_literal("Null"));
        assert!(is_null_literal("\0 null \x0B"));
        assert!(!is_null_literal("nullable"));
        assert!(!is_null_literal("nul"));
        assert!(!is_null_literal(""));
    }
}
