use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Untyped post object as extracted from model output.
/// Expected keys: `title`, `body`, `hashtags` — all optional.
pub type RawPostRecord = Map<String, Value>;

/// A single generated post draft.
///
/// `title` is meant to stay under ~10 words but this is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    #[serde(default)]
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
}

impl PostDraft {
    /// Builds a typed draft from an untyped record.
    ///
    /// Non-string `title`/`body` values count as missing; `hashtags` keeps only
    /// string entries. Returns `None` when the record carries no usable body.
    pub fn from_record(record: &RawPostRecord) -> Option<Self> {
        let body = string_field(record, "body");
        if body.trim().is_empty() {
            return None;
        }

        let hashtags = record
            .get("hashtags")
            .and_then(Value::as_array)
            .map(|tags| {
                tags.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Some(Self {
            title: string_field(record, "title"),
            body,
            hashtags,
        })
    }
}

fn string_field(record: &RawPostRecord, key: &str) -> String {
    record
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> RawPostRecord {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_from_record_full() {
        let draft = PostDraft::from_record(&record(json!({
            "title": "Ship small",
            "body": "Small releases beat big bangs.",
            "hashtags": ["#Shipping", "#DevOps"]
        })))
        .unwrap();
        assert_eq!(draft.title, "Ship small");
        assert_eq!(draft.body, "Small releases beat big bangs.");
        assert_eq!(draft.hashtags, vec!["#Shipping", "#DevOps"]);
    }

    #[test]
    fn test_from_record_missing_title_defaults_to_empty() {
        let draft = PostDraft::from_record(&record(json!({"body": "Body only"}))).unwrap();
        assert_eq!(draft.title, "");
        assert!(draft.hashtags.is_empty());
    }

    #[test]
    fn test_from_record_without_body_is_rejected() {
        assert!(PostDraft::from_record(&record(json!({"title": "No body"}))).is_none());
        assert!(PostDraft::from_record(&record(json!({"body": "   "}))).is_none());
    }

    #[test]
    fn test_from_record_non_string_fields_are_ignored() {
        assert!(PostDraft::from_record(&record(json!({"body": 42}))).is_none());

        let draft = PostDraft::from_record(&record(json!({
            "title": ["not", "a", "string"],
            "body": "Valid body",
            "hashtags": ["#ok", 7, null, {"tag": "#nested"}]
        })))
        .unwrap();
        assert_eq!(draft.title, "");
        assert_eq!(draft.hashtags, vec!["#ok"]);
    }

    #[test]
    fn test_hashtags_not_an_array_is_empty() {
        let draft = PostDraft::from_record(&record(json!({
            "body": "Body",
            "hashtags": "#one #two"
        })))
        .unwrap();
        assert!(draft.hashtags.is_empty());
    }

    #[test]
    fn test_post_draft_deserializes_without_hashtags() {
        let draft: PostDraft =
            serde_json::from_str(r#"{"title": "T", "body": "B"}"#).unwrap();
        assert!(draft.hashtags.is_empty());
    }

    #[test]
    fn test_post_draft_deserializes_without_title() {
        let draft: PostDraft = serde_json::from_str(r#"{"body": "Body only"}"#).unwrap();
        assert_eq!(draft.title, "");
        assert_eq!(draft.body, "Body only");
    }
}
