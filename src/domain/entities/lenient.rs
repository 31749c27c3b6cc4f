//! Field deserializers that accept whatever a client sends, casting scalars
//! the way the site's document store always has instead of rejecting the body.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Strings pass through, numbers and booleans become their text form.
/// `null`, arrays and objects are dropped.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

/// A list of text. `null` is an empty list and a lone scalar a list of one;
/// elements that are not scalars are skipped.
pub fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().filter_map(scalar_text).collect(),
        other => scalar_text(other).into_iter().collect(),
    })
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Doc {
        #[serde(default, deserialize_with = "text")]
        title: Option<String>,
        #[serde(default, deserialize_with = "text_list")]
        tags: Vec<String>,
    }

    fn doc(value: Value) -> Doc {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn casts_scalars_to_text() {
        assert_eq!(doc(json!({"title": 42})).title.as_deref(), Some("42"));
        assert_eq!(doc(json!({"title": 1.5})).title.as_deref(), Some("1.5"));
        assert_eq!(doc(json!({"title": true})).title.as_deref(), Some("true"));
        assert_eq!(doc(json!({"title": "X"})).title.as_deref(), Some("X"));
    }

    #[test]
    fn drops_structured_or_null_text() {
        assert!(doc(json!({"title": null})).title.is_none());
        assert!(doc(json!({"title": {"en": "X"}})).title.is_none());
        assert!(doc(json!({"title": ["X"]})).title.is_none());
    }

    #[test]
    fn normalizes_lists() {
        assert!(doc(json!({"tags": null})).tags.is_empty());
        assert!(doc(json!({})).tags.is_empty());
        assert_eq!(doc(json!({"tags": "React"})).tags, vec!["React"]);
        assert_eq!(doc(json!({"tags": 7})).tags, vec!["7"]);
        assert_eq!(
            doc(json!({"tags": ["B", 2, null, {"x": 1}, "A"]})).tags,
            vec!["B", "2", "A"]
        );
    }
}
