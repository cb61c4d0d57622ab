//! Numeric addition without coercion

use crate::value::Value;

/// Sum two values. Anything other than two numbers yields `Number(NaN)`;
/// there is no string-to-number coercion here (see `to_number` for that).
pub fn add(a: &Value, b: &Value) -> Value {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => Value::Number(x + y),
        _ => Value::Number(f64::NAN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn is_nan(value: &Value) -> bool {
        matches!(value, Value::Number(n) if n.is_nan())
    }

    #[test]
    fn sums_integers_and_floats() {
        assert_eq!(add(&Value::from(4), &Value::from(2)), Value::Number(6.0));
        assert_eq!(
            add(&Value::from(4.2), &Value::from(2.4)),
            Value::Number(4.2 + 2.4)
        );
    }

    #[test]
    fn non_numbers_yield_nan() {
        let one = Value::from(1);
        for other in [
            Value::from("1"),
            Value::from("foo"),
            Value::Null,
            Value::Undefined,
            Value::Number(f64::NAN),
            Value::from(json!({})),
            Value::from(json!({"1": 1})),
            Value::from(json!([])),
            Value::from(json!([1, 2, 3, 4])),
            Value::Bool(true),
        ] {
            assert!(is_nan(&add(&other, &one)), "expected NaN for {other:?}");
        }
    }

    #[test]
    fn boundary_magnitudes_sum_exactly() {
        let max_safe = 9_007_199_254_740_991.0; // 2^53 - 1
        assert_eq!(
            add(&Value::Number(max_safe), &Value::from(1)),
            Value::Number(max_safe + 1.0)
        );
        assert_eq!(
            add(&Value::Number(-max_safe), &Value::from(-1)),
            Value::Number(-max_safe - 1.0)
        );
        assert_eq!(
            add(&Value::Number(1e-10), &Value::Number(1e-10)),
            Value::Number(2e-10)
        );
    }

    #[test]
    fn overflow_goes_to_infinity() {
        assert_eq!(
            add(&Value::Number(f64::MAX), &Value::Number(f64::MAX)),
            Value::Number(f64::INFINITY)
        );
    }
}
