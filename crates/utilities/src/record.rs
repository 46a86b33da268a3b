//! Record and value helpers.
//!
//! A record is a JSON object with no schema: a property is either present or
//! absent, and present properties may hold any JSON value.

use serde_json::{Map, Value};

/// A loosely-typed entity such as a spell, keyed by property name.
pub type Record = Map<String, Value>;

/// Compares two values for equality the way the helpers match items.
///
/// Numbers are equal when their `f64` values are equal, so `1` matches `1.0`.
/// Arrays and records compare element-wise using the same rule.
///
/// # Examples
///
/// ```
/// use nc_utilities::strict_eq;
/// use serde_json::json;
///
/// assert!(strict_eq(&json!(1), &json!(1.0)));
/// assert!(!strict_eq(&json!(1), &json!("1")));
/// ```
pub fn strict_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| strict_eq(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(key, x)| ys.get(key).is_some_and(|y| strict_eq(x, y)))
        }
        _ => a == b,
    }
}

/// Views a value as a string for ordering and substring search.
///
/// Strings are returned unchanged, integral numbers drop any fractional part,
/// `null` becomes `"null"`, arrays join their elements with `","` (nested
/// nulls render empty) and records become `"[object Object]"`.
///
/// # Examples
///
/// ```
/// use nc_utilities::coerce_to_string;
/// use serde_json::json;
///
/// assert_eq!(coerce_to_string(&json!("phb 212")), "phb 212");
/// assert_eq!(coerce_to_string(&json!(3.0)), "3");
/// assert_eq!(coerce_to_string(&json!([1, "a", true])), "1,a,true");
/// ```
pub fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => {
                format!("{f:.0}")
            }
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => coerce_to_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Short name for the JSON kind of a value, used in error messages.
pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strict_eq_numbers_ignore_representation() {
        assert!(strict_eq(&json!(2), &json!(2.0)));
        assert!(!strict_eq(&json!(2), &json!(3)));
    }

    #[test]
    fn test_strict_eq_does_not_coerce_types() {
        assert!(!strict_eq(&json!(2), &json!("2")));
        assert!(!strict_eq(&json!(null), &json!(false)));
        assert!(!strict_eq(&json!(0), &json!(false)));
    }

    #[test]
    fn test_strict_eq_nested() {
        assert!(strict_eq(
            &json!({"key": "school", "value": [1, 2.0]}),
            &json!({"value": [1.0, 2], "key": "school"})
        ));
        assert!(!strict_eq(&json!({"key": "a"}), &json!({"key": "a", "value": 1})));
    }

    #[test]
    fn test_coerce_to_string_scalars() {
        assert_eq!(coerce_to_string(&json!(null)), "null");
        assert_eq!(coerce_to_string(&json!(true)), "true");
        assert_eq!(coerce_to_string(&json!(-4)), "-4");
        assert_eq!(coerce_to_string(&json!(2.5)), "2.5");
    }

    #[test]
    fn test_coerce_to_string_containers() {
        // Nulls inside arrays render as empty strings
        assert_eq!(coerce_to_string(&json!([1, null, "b"])), "1,,b");
        assert_eq!(coerce_to_string(&json!({"name": "Aid"})), "[object Object]");
    }

    #[test]
    fn test_kind_name() {
        assert_eq!(kind_name(&json!([])), "array");
        assert_eq!(kind_name(&json!(1)), "number");
    }
}
