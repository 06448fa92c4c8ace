//! Comparison operators for filter conditions.
//!
//! The [`Operator`] enum is the closed set of comparators a parsed query
//! parameter can carry. Each operator renders as the exact text the
//! query-building layer expects (`>=`, `not like`, `NOT NULL`, ...).

use serde::{Deserialize, Serialize};

/// Comparator of a [`FilterCondition`](crate::FilterCondition).
///
/// Operators fall into three groups:
/// - **Comparison**: `Eq`, `Ne`, `Lt`, `Gt`, `Gte`, `Lte`
/// - **Pattern / set**: `Like`, `NotLike`, `In`, `NotIn`
/// - **Null checks**: `Null`, `NotNull`, selected by a literal `null` value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Equal. Used when a key carries no postfix.
    #[serde(rename = "=")]
    Eq,
    /// Not equal (`-not`).
    #[serde(rename = "!=")]
    Ne,
    /// Strictly less than (`-st`).
    #[serde(rename = "<")]
    Lt,
    /// Strictly greater than (`-gt`).
    #[serde(rename = ">")]
    Gt,
    /// Greater than or equal (`-min`).
    #[serde(rename = ">=")]
    Gte,
    /// Less than or equal (`-max`).
    #[serde(rename = "<=")]
    Lte,
    /// Pattern match (`-lk`).
    #[serde(rename = "like")]
    Like,
    /// Negated pattern match (`-not-lk`).
    #[serde(rename = "not like")]
    NotLike,
    /// Membership in a delimited list (`-in`).
    #[serde(rename = "IN")]
    In,
    /// Non-membership in a delimited list (`-not-in`).
    #[serde(rename = "NOT IN")]
    NotIn,
    /// Field is null: no postfix and a `null` value.
    #[serde(rename = "NULL")]
    Null,
    /// Field is not null: any postfix and a `null` value.
    #[serde(rename = "NOT NULL")]
    NotNull,
}

impl Operator {
    /// Returns `true` for the two null-test operators.
    pub fn is_null_check(self) -> bool {
        matches!(self, Operator::Null | Operator::NotNull)
    }

    /// Returns `true` if the value is expected to be a delimited list.
    pub fn is_list(self) -> bool {
        matches!(self, Operator::In | Operator::NotIn)
    }

    /// Returns the comparator text of this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Lt => "<",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Lte => "<=",
            Operator::Like => "like",
            Operator::NotLike => "not like",
            Operator::In => "IN",
            Operator::NotIn => "NOT IN",
            Operator::Null => "NULL",
            Operator::NotNull => "NOT NULL",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_groups() {
        assert!(Operator::Null.is_null_check());
        assert!(Operator::NotNull.is_null_check());
        assert!(!Operator::Eq.is_null_check());
        assert!(!Operator::Ne.is_null_check());

        assert!(Operator::In.is_list());
        assert!(Operator::NotIn.is_list());
        assert!(!Operator::Like.is_list());
    }

    #[test]
    fn operator_display() {
        assert_eq!(Operator::Gte.to_string(), ">=");
        assert_eq!(Operator::NotLike.to_string(), "not like");
        assert_eq!(Operator::NotIn.to_string(), "NOT IN");
        assert_eq!(Operator::NotNull.to_string(), "NOT NULL");
    }

    #[test]
    fn serde_uses_comparator_text() {
        assert_eq!(serde_json::to_string(&Operator::Lte).unwrap(), r#""<=""#);
        assert_eq!(serde_json::to_string(&Operator::Like).unwrap(), r#""like""#);

        let op: Operator = serde_json::from_str(r#""NOT NULL""#).unwrap();
        assert_eq!(op, Operator::NotNull);
    }
}
