//! Lenient Field Decoders
//!
//! The PHP API is loose about types: counts arrive as `5` or `"5"`, flags as
//! `true`, `"true"`, `"yes"`, `1` or `"1"`, identifiers as numbers or strings.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts bools, numbers and the usual truthy strings. Anything else is `false`.
pub fn flexible_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(b)) => b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        Some(Value::String(s)) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "1"
        ),
        _ => false,
    })
}

/// Like [`flexible_bool`] but keeps "absent" distinct from `false`.
pub fn flexible_opt_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => flexible_bool(value).map(Some).map_err(serde::de::Error::custom),
    }
}

/// Accepts integers, floats and numeric strings; missing or garbage becomes 0.
pub fn flexible_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|v| v as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|v| v as i64))
                .unwrap_or(0)
        }
        Some(Value::Bool(b)) => i64::from(b),
        _ => 0,
    })
}

/// Strings pass through, scalars are stringified, null becomes "".
pub fn flexible_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(scalar_to_string(Option::<Value>::deserialize(deserializer)?).unwrap_or_default())
}

/// Like [`flexible_string`] but null and blank strings become `None`.
pub fn flexible_opt_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(scalar_to_string(Option::<Value>::deserialize(deserializer)?)
        .filter(|s| !s.trim().is_empty()))
}

fn scalar_to_string(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "flexible_bool")]
        flag: bool,
        #[serde(default, deserialize_with = "flexible_i64")]
        count: i64,
        #[serde(default, deserialize_with = "flexible_string")]
        id: String,
        #[serde(default, deserialize_with = "flexible_opt_string")]
        note: Option<String>,
    }

    fn sample(json: &str) -> Sample {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_bool_variants() {
        assert!(sample(r#"{"flag": true}"#).flag);
        assert!(sample(r#"{"flag": "yes"}"#).flag);
        assert!(sample(r#"{"flag": "TRUE"}"#).flag);
        assert!(sample(r#"{"flag": 1}"#).flag);
        assert!(sample(r#"{"flag": "1"}"#).flag);
        assert!(!sample(r#"{"flag": "no"}"#).flag);
        assert!(!sample(r#"{"flag": 0}"#).flag);
        assert!(!sample(r#"{"flag": null}"#).flag);
        assert!(!sample(r#"{}"#).flag);
    }

    #[test]
    fn test_count_variants() {
        assert_eq!(sample(r#"{"count": 7}"#).count, 7);
        assert_eq!(sample(r#"{"count": "12"}"#).count, 12);
        assert_eq!(sample(r#"{"count": " 3 "}"#).count, 3);
        assert_eq!(sample(r#"{"count": "4.0"}"#).count, 4);
        assert_eq!(sample(r#"{"count": "abc"}"#).count, 0);
        assert_eq!(sample(r#"{"count": null}"#).count, 0);
        assert_eq!(sample(r#"{}"#).count, 0);
    }

    #[test]
    fn test_string_variants() {
        assert_eq!(sample(r#"{"id": 42}"#).id, "42");
        assert_eq!(sample(r#"{"id": "p-9"}"#).id, "p-9");
        assert_eq!(sample(r#"{"id": null}"#).id, "");
        assert_eq!(sample(r#"{"note": "  "}"#).note, None);
        assert_eq!(sample(r#"{"note": "blurry photo"}"#).note.as_deref(), Some("blurry photo"));
    }
}
