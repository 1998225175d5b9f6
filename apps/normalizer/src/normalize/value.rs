//! Loose accessors over `serde_json::Value`.
//!
//! Producers disagree on types (years as numbers or strings, flags as `"true"`),
//! so every read goes through these helpers and degrades to `None` / empty.

use serde_json::{Map, Value};

pub(crate) type Object = Map<String, Value>;

/// Trimmed, non-empty text from a string or number value.
pub(crate) fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// First non-empty text among `keys`, in order.
pub(crate) fn first_text(obj: &Object, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| obj.get(*k).and_then(text))
}

/// First non-empty text among `keys`, or `fallback`.
pub(crate) fn text_or(obj: &Object, keys: &[&str], fallback: &str) -> String {
    first_text(obj, keys).unwrap_or_else(|| fallback.to_string())
}

/// True when any of `keys` holds `true`, `"true"`, `"yes"` or `1`.
pub(crate) fn flag(obj: &Object, keys: &[&str]) -> bool {
    keys.iter().any(|k| match obj.get(*k) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => matches!(s.trim().to_lowercase().as_str(), "true" | "yes"),
        Some(Value::Number(n)) => n.as_u64() == Some(1),
        _ => false,
    })
}

/// Elements of an array value; anything else is an empty slice.
pub(crate) fn list(value: Option<&Value>) -> &[Value] {
    value
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// First array among `keys`.
pub(crate) fn first_list<'a>(obj: &'a Object, keys: &[&str]) -> Option<&'a [Value]> {
    keys.iter()
        .find_map(|k| obj.get(*k).and_then(Value::as_array))
        .map(Vec::as_slice)
}

/// Non-empty strings of an array value, in order.
pub(crate) fn string_list(values: &[Value]) -> Vec<String> {
    values.iter().filter_map(text).collect()
}

/// Whether `key` holds a string (empty strings included).
pub(crate) fn has_string(obj: &Object, key: &str) -> bool {
    obj.get(key).is_some_and(Value::is_string)
}

/// Whether any of `keys` is present with a non-null value.
pub(crate) fn has_any(obj: &Object, keys: &[&str]) -> bool {
    keys.iter()
        .any(|k| obj.get(*k).is_some_and(|v| !v.is_null()))
}

/// Non-negative whole number from a number, or from the leading digits of a string ("3 years").
pub(crate) fn whole_number(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f.round() as u64))
            .and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => {
            let digits: String = s.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
            digits.parse().ok()
        }
        _ => None,
    }
}

/// Free text that may arrive as a string or a list of lines.
pub(crate) fn text_block(value: &Value) -> Option<String> {
    match value {
        Value::Array(lines) => {
            let lines = string_list(lines);
            (!lines.is_empty()).then(|| lines.join("\n"))
        }
        other => text(other),
    }
}

pub(crate) fn first_text_block(obj: &Object, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| obj.get(*k).and_then(text_block))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Object {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_text_trims_and_skips_empty() {
        assert_eq!(text(&json!("  MIT ")), Some("MIT".to_string()));
        assert_eq!(text(&json!("   ")), None);
        assert_eq!(text(&json!(2021)), Some("2021".to_string()));
        assert_eq!(text(&json!(null)), None);
        assert_eq!(text(&json!(["a"])), None);
    }

    #[test]
    fn test_first_text_cascades_past_empty() {
        let o = obj(json!({"school": "", "institution": "ETH"}));
        assert_eq!(first_text(&o, &["school", "institution"]), Some("ETH".to_string()));
        assert_eq!(text_or(&o, &["university"], "fallback"), "fallback");
    }

    #[test]
    fn test_flag_accepts_loose_truthy_values() {
        assert!(flag(&obj(json!({"isOngoing": true})), &["isOngoing"]));
        assert!(flag(&obj(json!({"current": "true"})), &["current"]));
        assert!(!flag(&obj(json!({"current": "no"})), &["current"]));
        assert!(!flag(&obj(json!({})), &["current"]));
    }

    #[test]
    fn test_list_of_non_array_is_empty() {
        assert!(list(Some(&json!("oops"))).is_empty());
        assert!(list(None).is_empty());
        assert_eq!(list(Some(&json!([1, 2]))).len(), 2);
    }

    #[test]
    fn test_whole_number_variants() {
        assert_eq!(whole_number(&json!(3)), Some(3));
        assert_eq!(whole_number(&json!(2.6)), Some(3));
        assert_eq!(whole_number(&json!("5 years")), Some(5));
        assert_eq!(whole_number(&json!("many")), None);
        assert_eq!(whole_number(&json!(-1)), None);
    }

    #[test]
    fn test_text_block_joins_lines() {
        assert_eq!(
            text_block(&json!(["Built X", "", "Led Y"])),
            Some("Built X\nLed Y".to_string())
        );
    }
}
