//! Comparison operators for condition leaves

use serde::{Deserialize, Serialize};

/// Leaf comparison operators
///
/// The set is fixed: every leaf compares one attribute against one
/// configured value with one of these operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// Equal
    Eq,
    /// Not equal
    Neq,
    /// Greater than
    Gt,
    /// Greater than or equal
    Gteq,
    /// Less than
    Lt,
    /// Less than or equal
    Lteq,
    /// Membership (attribute value is one of the configured values)
    In,
    /// Negated membership
    NotIn,
    /// Substring (strings) or element containment (arrays)
    Contains,
}

impl Operator {
    /// Returns true if this operator compares magnitudes and therefore
    /// requires numeric operands.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Operator::Gt | Operator::Gteq | Operator::Lt | Operator::Lteq
        )
    }

    /// Returns true if this is a membership operator (`in` / `notin`).
    pub fn is_membership(&self) -> bool {
        matches!(self, Operator::In | Operator::NotIn)
    }

    /// Returns true for the operators whose result is the negation of a
    /// base operator (`neq` of `eq`, `notin` of `in`).
    pub fn is_negated(&self) -> bool {
        matches!(self, Operator::Neq | Operator::NotIn)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Operator::Eq => "eq",
            Operator::Neq => "neq",
            Operator::Gt => "gt",
            Operator::Gteq => "gteq",
            Operator::Lt => "lt",
            Operator::Lteq => "lteq",
            Operator::In => "in",
            Operator::NotIn => "notin",
            Operator::Contains => "contains",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_equality() {
        assert_eq!(Operator::Eq, Operator::Eq);
        assert_ne!(Operator::Eq, Operator::Neq);
    }

    #[test]
    fn test_operator_is_numeric() {
        assert!(Operator::Gt.is_numeric());
        assert!(Operator::Lteq.is_numeric());
        assert!(!Operator::Eq.is_numeric());
        assert!(!Operator::In.is_numeric());
    }

    #[test]
    fn test_operator_is_membership() {
        assert!(Operator::In.is_membership());
        assert!(Operator::NotIn.is_membership());
        assert!(!Operator::Contains.is_membership());
    }

    #[test]
    fn test_operator_serde_names() {
        assert_eq!(serde_json::to_string(&Operator::Gteq).unwrap(), "\"gteq\"");
        assert_eq!(serde_json::to_string(&Operator::NotIn).unwrap(), "\"notin\"");

        let op: Operator = serde_json::from_str("\"contains\"").unwrap();
        assert_eq!(op, Operator::Contains);
    }

    #[test]
    fn test_operator_display() {
        assert_eq!(Operator::Neq.to_string(), "neq");
        assert_eq!(Operator::NotIn.to_string(), "notin");
    }
}
