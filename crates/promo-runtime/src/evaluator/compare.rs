//! Leaf comparison execution

use crate::error::{Result, RuntimeError};
use promo_core::condition::Operator;
use promo_core::Value;

/// Execute a leaf comparison between a resolved attribute value and the
/// configured value.
///
/// `Null` on either side never matches: missing data means the condition
/// simply does not apply. Numeric operators coerce numeric strings, since
/// serialized configuration and attribute payloads frequently carry
/// numbers as strings.
pub(crate) fn compare(left: &Value, op: Operator, right: &Value) -> Result<bool> {
    if left.is_null() || right.is_null() {
        tracing::debug!(?left, ?op, ?right, "null comparison, returning false");
        return Ok(false);
    }

    match op {
        Operator::Eq => values_equal(left, right),
        Operator::Neq => values_equal(left, right).map(|eq| !eq),

        Operator::Gt | Operator::Gteq | Operator::Lt | Operator::Lteq => {
            let l = coerce_number(left, op)?;
            let r = coerce_number(right, op)?;
            Ok(match op {
                Operator::Gt => l > r,
                Operator::Gteq => l >= r,
                Operator::Lt => l < r,
                Operator::Lteq => l <= r,
                _ => unreachable!(),
            })
        }

        Operator::In => is_member(left, right, op),
        Operator::NotIn => is_member(left, right, op).map(|member| !member),

        Operator::Contains => contains(left, right),
    }
}

/// Equality with numeric coercion when either side is already a number
fn values_equal(left: &Value, right: &Value) -> Result<bool> {
    match (left, right) {
        (Value::Bool(l), Value::Bool(r)) => Ok(l == r),
        (Value::Number(_), _) | (_, Value::Number(_)) => {
            match (left.as_number(), right.as_number()) {
                (Some(l), Some(r)) => Ok(l == r),
                _ => Err(mismatch(Operator::Eq, left, right)),
            }
        }
        (Value::String(l), Value::String(r)) => Ok(l == r),
        (Value::Array(l), Value::Array(r)) => Ok(l == r),
        _ => Err(mismatch(Operator::Eq, left, right)),
    }
}

fn coerce_number(value: &Value, op: Operator) -> Result<f64> {
    value
        .as_number()
        .ok_or_else(|| mismatch(op, value, value))
}

/// Membership test for `in` / `notin`: the configured side must be an
/// array. An array-valued attribute matches if any of its elements is a
/// member; per-element type mismatches count as non-matches.
fn is_member(left: &Value, right: &Value, op: Operator) -> Result<bool> {
    let candidates = right.as_array().ok_or_else(|| mismatch(op, left, right))?;

    let matches_one = |needle: &Value| {
        candidates
            .iter()
            .any(|candidate| values_equal(needle, candidate).unwrap_or(false))
    };

    match left {
        Value::Array(elements) => Ok(elements.iter().any(matches_one)),
        _ => Ok(matches_one(left)),
    }
}

/// `contains`: substring on strings, element containment on arrays
fn contains(left: &Value, right: &Value) -> Result<bool> {
    match left {
        Value::String(haystack) => match right {
            Value::String(needle) => Ok(haystack.contains(needle.as_str())),
            // Numeric configured values are rendered for substring search
            // (postcodes and the like are stored as numbers more often
            // than not)
            Value::Number(n) => Ok(haystack.contains(&format_number(*n))),
            _ => Err(mismatch(Operator::Contains, left, right)),
        },
        Value::Array(elements) => Ok(elements
            .iter()
            .any(|element| values_equal(element, right).unwrap_or(false))),
        _ => Err(mismatch(Operator::Contains, left, right)),
    }
}

/// Render a number the way integers appear in attribute strings
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

fn mismatch(op: Operator, left: &Value, right: &Value) -> RuntimeError {
    RuntimeError::TypeMismatch {
        operator: op.to_string(),
        left: left.type_name(),
        right: right.type_name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> Value {
        Value::String(v.to_string())
    }

    fn n(v: f64) -> Value {
        Value::Number(v)
    }

    #[test]
    fn test_null_never_matches() {
        assert!(!compare(&Value::Null, Operator::Eq, &n(1.0)).unwrap());
        assert!(!compare(&n(1.0), Operator::Neq, &Value::Null).unwrap());
        assert!(!compare(&Value::Null, Operator::In, &Value::Array(vec![])).unwrap());
    }

    #[test]
    fn test_numeric_comparisons() {
        assert!(compare(&n(10.0), Operator::Gt, &n(5.0)).unwrap());
        assert!(compare(&n(5.0), Operator::Gteq, &n(5.0)).unwrap());
        assert!(compare(&n(3.0), Operator::Lt, &n(5.0)).unwrap());
        assert!(!compare(&n(5.0), Operator::Lteq, &n(3.0)).unwrap());
    }

    #[test]
    fn test_numeric_coercion_from_strings() {
        assert!(compare(&s("10"), Operator::Gt, &n(5.0)).unwrap());
        assert!(compare(&n(10.0), Operator::Lteq, &s("10.0")).unwrap());
        assert!(compare(&s("99.5"), Operator::Eq, &n(99.5)).unwrap());
    }

    #[test]
    fn test_non_numeric_magnitude_is_error() {
        let err = compare(&s("abc"), Operator::Gt, &n(5.0)).unwrap_err();
        assert!(matches!(err, RuntimeError::TypeMismatch { .. }));
    }

    #[test]
    fn test_string_equality() {
        assert!(compare(&s("US"), Operator::Eq, &s("US")).unwrap());
        assert!(compare(&s("US"), Operator::Neq, &s("CA")).unwrap());
    }

    #[test]
    fn test_bool_equality() {
        assert!(compare(&Value::Bool(true), Operator::Eq, &Value::Bool(true)).unwrap());
        assert!(compare(&Value::Bool(true), Operator::Neq, &Value::Bool(false)).unwrap());
    }

    #[test]
    fn test_cross_type_equality_is_error() {
        assert!(compare(&s("true"), Operator::Eq, &Value::Bool(true)).is_err());
        assert!(compare(&Value::Bool(true), Operator::Gt, &n(0.0)).is_err());
    }

    #[test]
    fn test_membership() {
        let list = Value::Array(vec![s("US"), s("CA")]);
        assert!(compare(&s("US"), Operator::In, &list).unwrap());
        assert!(!compare(&s("MX"), Operator::In, &list).unwrap());
        assert!(compare(&s("MX"), Operator::NotIn, &list).unwrap());
    }

    #[test]
    fn test_membership_with_numeric_coercion() {
        let list = Value::Array(vec![n(4.0), n(5.0)]);
        assert!(compare(&s("4"), Operator::In, &list).unwrap());
    }

    #[test]
    fn test_array_attribute_membership_intersects() {
        // category_ids [3, 4] against configured [4, 9]
        let attr = Value::Array(vec![n(3.0), n(4.0)]);
        let configured = Value::Array(vec![n(4.0), n(9.0)]);
        assert!(compare(&attr, Operator::In, &configured).unwrap());

        let disjoint = Value::Array(vec![n(7.0), n(9.0)]);
        assert!(!compare(&attr, Operator::In, &disjoint).unwrap());
    }

    #[test]
    fn test_membership_requires_array_on_right() {
        assert!(compare(&s("US"), Operator::In, &s("US")).is_err());
    }

    #[test]
    fn test_contains_substring() {
        assert!(compare(&s("90210-1234"), Operator::Contains, &s("90210")).unwrap());
        assert!(!compare(&s("10001"), Operator::Contains, &s("90210")).unwrap());
    }

    #[test]
    fn test_contains_numeric_needle() {
        assert!(compare(&s("90210"), Operator::Contains, &n(902.0)).unwrap());
    }

    #[test]
    fn test_contains_on_array_attribute() {
        let tags = Value::Array(vec![s("sale"), s("summer")]);
        assert!(compare(&tags, Operator::Contains, &s("sale")).unwrap());
        assert!(!compare(&tags, Operator::Contains, &s("winter")).unwrap());
    }

    #[test]
    fn test_contains_on_number_is_error() {
        assert!(compare(&n(90210.0), Operator::Contains, &s("902")).is_err());
    }
}
