use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Name stored when a submission leaves `name` empty or out.
pub const DEFAULT_AUTHOR: &str = "anon";

/// A comment on the board.
///
/// Comments are **append-only**: once stored they are never edited or
/// removed, and they live only as long as the process. `author` and `body`
/// are untrusted text exactly as submitted; rendering decides how (or whether)
/// they are neutralized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Input for posting a comment, as sent by the board's form.
///
/// Both fields are optional on the wire. Use [`NewComment::author`] and
/// [`NewComment::body`] to read them with defaults applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewComment {
    pub name: Option<String>,
    pub comment: Option<String>,
}

impl NewComment {
    pub fn author(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_AUTHOR,
        }
    }

    pub fn body(&self) -> &str {
        self.comment.as_deref().unwrap_or_default()
    }

    /// Build a submission from decoded form pairs.
    ///
    /// Unknown keys are ignored. A key sent more than once keeps every value,
    /// joined with commas in the order received.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut input = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "name" => &mut input.name,
                "comment" => &mut input.comment,
                _ => continue,
            };
            *slot = Some(match slot.take() {
                Some(mut existing) => {
                    existing.push(',');
                    existing.push_str(&value);
                    existing
                }
                None => value,
            });
        }
        input
    }

    /// Build a submission from a parsed JSON body.
    ///
    /// Strings are taken as is, numbers and booleans in their JSON text form,
    /// and arrays of those joined with commas. Anything else, including a
    /// body that is not an object, leaves the field unset.
    pub fn from_json(body: &Value) -> Self {
        Self {
            name: body.get("name").and_then(json_field),
            comment: body.get("comment").and_then(json_field),
        }
    }
}

fn json_field(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(_) | Value::Bool(_) => Some(value.to_string()),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Array(_) | Value::Object(_) => None,
                Value::Null => Some(String::new()),
                other => json_field(other),
            })
            .collect::<Option<Vec<_>>>()
            .map(|parts| parts.join(",")),
        Value::Null | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let input = NewComment::default();
        assert_eq!(input.author(), "anon");
        assert_eq!(input.body(), "");
    }

    #[test]
    fn empty_name_falls_back_to_anon() {
        let input = NewComment {
            name: Some(String::new()),
            comment: Some("hi".to_string()),
        };
        assert_eq!(input.author(), "anon");
        assert_eq!(input.body(), "hi");
    }

    #[test]
    fn supplied_fields_are_kept_verbatim() {
        let input = NewComment {
            name: Some("<b>mallory</b>".to_string()),
            comment: Some("<script>x</script>".to_string()),
        };
        assert_eq!(input.author(), "<b>mallory</b>");
        assert_eq!(input.body(), "<script>x</script>");
    }

    #[test]
    fn repeated_form_keys_are_joined_in_order() {
        let input = NewComment::from_pairs([
            ("name".to_string(), "a".to_string()),
            ("comment".to_string(), "hi".to_string()),
            ("name".to_string(), "b".to_string()),
            ("extra".to_string(), "ignored".to_string()),
        ]);
        assert_eq!(input.author(), "a,b");
        assert_eq!(input.body(), "hi");
    }

    #[test]
    fn form_pairs_without_known_keys_use_defaults() {
        let input = NewComment::from_pairs([("title".to_string(), "x".to_string())]);
        assert_eq!(input.author(), "anon");
        assert_eq!(input.body(), "");
    }

    #[test]
    fn json_scalars_and_arrays_become_text() {
        let input = NewComment::from_json(&serde_json::json!({
            "name": ["a", "b"],
            "comment": 42,
        }));
        assert_eq!(input.author(), "a,b");
        assert_eq!(input.body(), "42");
    }

    #[test]
    fn json_objects_and_non_object_bodies_use_defaults() {
        let nested = NewComment::from_json(&serde_json::json!({ "name": { "x": 1 }, "comment": null }));
        assert_eq!(nested.author(), "anon");
        assert_eq!(nested.body(), "");

        let not_an_object = NewComment::from_json(&serde_json::json!(["name", "comment"]));
        assert_eq!(not_an_object.author(), "anon");
    }
}
