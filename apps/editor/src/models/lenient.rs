//! Tolerant decoders for stored values. A leaf with an unexpected JSON type
//! degrades to its default instead of failing the record around it, and a
//! list element that cannot be read becomes a default element in place.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

/// Text form of a scalar. Numbers and booleans keep their JSON spelling.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

pub(crate) fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_text(&value).unwrap_or_default())
}

pub(crate) fn optional_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_text(&value))
}

pub(crate) fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => b,
        Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    })
}

/// Array of scalars as strings. Nested values are skipped.
pub(crate) fn strings<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.iter().filter_map(scalar_text).collect(),
        _ => Vec::new(),
    })
}

pub(crate) fn items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(elements) => list(&elements, "skill"),
        _ => Vec::new(),
    })
}

/// Decodes `elements` one by one, so a single unreadable element keeps its
/// position as a default value and its neighbours survive.
pub(crate) fn list<T: DeserializeOwned + Default>(elements: &[Value], what: &str) -> Vec<T> {
    elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            T::deserialize(element).unwrap_or_else(|e| {
                warn!("Unreadable {what} entry at {index}, using default: {e}");
                T::default()
            })
        })
        .collect()
}

/// Closed-vocabulary tag: anything unrecognized, missing, or non-textual
/// falls back to the default.
pub(crate) fn vocabulary<'de, D, T>(
    deserializer: D,
    parse: fn(&str) -> Option<T>,
) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_text(&value)
        .as_deref()
        .and_then(parse)
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    #[serde(default)]
    struct Sample {
        #[serde(deserialize_with = "string")]
        text: String,
        #[serde(deserialize_with = "flag")]
        on: bool,
        #[serde(deserialize_with = "strings")]
        tags: Vec<String>,
    }

    fn make_sample(value: Value) -> Sample {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_numbers_and_bools_become_text() {
        assert_eq!(make_sample(json!({"text": 3.8})).text, "3.8");
        assert_eq!(make_sample(json!({"text": true})).text, "true");
        assert_eq!(make_sample(json!({"text": null})).text, "");
        assert_eq!(make_sample(json!({"text": {"a": 1}})).text, "");
    }

    #[test]
    fn test_flag_accepts_textual_true() {
        assert!(make_sample(json!({"on": "true"})).on);
        assert!(!make_sample(json!({"on": 1})).on);
        assert!(!make_sample(json!({"on": null})).on);
    }

    #[test]
    fn test_strings_keep_scalars_only() {
        let sample = make_sample(json!({"tags": ["rust", 2021, ["nested"], null]}));
        assert_eq!(sample.tags, vec!["rust".to_string(), "2021".to_string()]);
        assert!(make_sample(json!({"tags": "rust"})).tags.is_empty());
    }

    #[test]
    fn test_list_defaults_only_the_unreadable_element() {
        let elements = vec![json!({"text": "a"}), json!("oops"), json!({"text": "c"})];
        let decoded: Vec<Sample> = list(&elements, "sample");
        assert_eq!(decoded.len(), 3);
        assert_eq!(decoded[0].text, "a");
        assert_eq!(decoded[1], Sample::default());
        assert_eq!(decoded[2].text, "c");
    }
}
