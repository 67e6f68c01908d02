//! Helpers for picking loosely-typed values out of provider JSON documents.

use core::num::FpCategory;
use serde_json::Value;

/// Whether a decoded document carries nothing at all.
///
/// `null`, `false`, `0`, `""`, `[]` and `{}` all count as empty.
#[must_use]
pub fn is_empty_document(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.classify() == FpCategory::Zero),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Walk a sequence of object keys, returning `None` if any step is missing or `null`.
#[must_use]
pub fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = value;
    for key in path {
        current = current.as_object()?.get(*key)?;
    }

    if current.is_null() { None } else { Some(current) }
}

/// Read a value as a float, accepting JSON numbers and numeric strings.
#[must_use]
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// Read a value as an integer, truncating floats and accepting numeric strings.
#[must_use]
#[expect(clippy::cast_possible_truncation, reason = "status codes are small integers")]
pub fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok().or_else(|| as_number(value).map(|f| f.trunc() as i64)),
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_documents() {
        for value in [json!(null), json!(false), json!(0), json!(0.0), json!(-0.0), json!(""), json!("0"), json!([]), json!({})] {
            assert!(is_empty_document(&value), "{value} should be empty");
        }
    }

    #[test]
    fn test_non_empty_documents() {
        for value in [json!(true), json!(1), json!(1e-300), json!(-1), json!("x"), json!([0]), json!({"meta": null})] {
            assert!(!is_empty_document(&value), "{value} should not be empty");
        }
    }

    #[test]
    fn test_lookup_nested() {
        let doc = json!({"commit": {"totals": {"c": 87.5}}});
        assert_eq!(lookup(&doc, &["commit", "totals", "c"]), Some(&json!(87.5)));
    }

    #[test]
    fn test_lookup_missing_segment() {
        let doc = json!({"commit": {}});
        assert_eq!(lookup(&doc, &["commit", "totals", "c"]), None);
    }

    #[test]
    fn test_lookup_through_non_object() {
        let doc = json!({"commit": "abc"});
        assert_eq!(lookup(&doc, &["commit", "totals"]), None);
    }

    #[test]
    fn test_lookup_null_is_missing() {
        let doc = json!({"repo": {"branch": null}});
        assert_eq!(lookup(&doc, &["repo", "branch"]), None);
    }

    #[test]
    fn test_lookup_key_with_dot() {
        let doc = json!({"metric_values": {"scrutinizer.quality": 0.5}});
        assert_eq!(lookup(&doc, &["metric_values", "scrutinizer.quality"]), Some(&json!(0.5)));
    }

    #[test]
    fn test_as_number() {
        assert_eq!(as_number(&json!(87.5)), Some(87.5));
        assert_eq!(as_number(&json!(90)), Some(90.0));
        assert_eq!(as_number(&json!("85.71429")), Some(85.714_29));
        assert_eq!(as_number(&json!("n/a")), None);
        assert_eq!(as_number(&json!([1])), None);
    }

    #[test]
    fn test_as_integer() {
        assert_eq!(as_integer(&json!(200)), Some(200));
        assert_eq!(as_integer(&json!("200")), Some(200));
        assert_eq!(as_integer(&json!(200.0)), Some(200));
        assert_eq!(as_integer(&json!("404")), Some(404));
        assert_eq!(as_integer(&json!("oops")), None);
        assert_eq!(as_integer(&json!({})), None);
    }
}
