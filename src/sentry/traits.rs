//! Common traits and helpers for Sentry resources

use log::{debug, warn};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{DiscoveryError, Result};

/// Common trait for all Sentry resources (organizations, teams, projects)
///
/// Implementors serialize their typed fields with serde and skip `raw`;
/// `to_record` then spreads the raw payload on top.
pub trait SentryResource: Serialize {
    /// Opaque resource ID
    fn id(&self) -> &str;

    /// Slug, unique within the parent scope
    fn slug(&self) -> &str;

    /// Human-readable name
    fn name(&self) -> &str;

    /// Payload exactly as received from the API
    fn raw(&self) -> &Map<String, Value>;

    /// Check if the resource matches a slug exactly
    fn matches(&self, slug: &str) -> bool {
        self.slug() == slug
    }

    /// Flatten typed fields and raw payload into one mapping.
    ///
    /// Raw keys win on collision, so the record always carries every field
    /// the API returned.
    fn to_record(&self) -> Map<String, Value> {
        let mut record = match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        for (key, value) in self.raw() {
            record.insert(key.clone(), value.clone());
        }
        record
    }
}

/// Outcome of a request to an endpoint that should return a JSON list
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    /// The endpoint returned a list
    Items(Vec<Value>),
    /// The endpoint answered 204/404, which the client maps to `{}`
    Absent,
    /// The endpoint returned some other JSON value
    UnexpectedShape(&'static str),
}

impl From<Value> for Listing {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Listing::Items(items),
            Value::Object(map) if map.is_empty() => Listing::Absent,
            other => Listing::UnexpectedShape(json_kind(&other)),
        }
    }
}

impl Listing {
    /// Items of the list, or empty for anything else.
    ///
    /// Unexpected shapes are logged, never raised.
    pub fn into_items(self, what: &str) -> Vec<Value> {
        match self {
            Listing::Items(items) => items,
            Listing::Absent => {
                debug!("No {} returned", what);
                Vec::new()
            }
            Listing::UnexpectedShape(kind) => {
                warn!("Expected a list of {}, got {}", what, kind);
                Vec::new()
            }
        }
    }
}

/// JSON type name for diagnostics
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Unwrap a list item that must be a JSON object
pub(crate) fn into_object(value: Value, what: &str) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(DiscoveryError::Json(format!(
            "Expected {} object, got {}",
            what,
            json_kind(&other)
        ))),
    }
}

/// Read a required identifier field; numeric IDs are accepted as strings
pub(crate) fn string_field(raw: &Map<String, Value>, key: &str) -> Result<String> {
    match raw.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(DiscoveryError::Json(format!(
            "Field '{}' must be a string, got {}",
            key,
            json_kind(other)
        ))),
        None => Err(DiscoveryError::Json(format!("Missing required field '{}'", key))),
    }
}

/// Read an optional string field, falling back when absent, null or not a string
pub(crate) fn string_or(raw: &Map<String, Value>, key: &str, default: &str) -> String {
    raw.get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

/// Read an optional list of strings; non-string entries are skipped
pub(crate) fn string_list(raw: &Map<String, Value>, key: &str) -> Vec<String> {
    raw.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// Read an optional list, kept verbatim
pub(crate) fn value_list(raw: &Map<String, Value>, key: &str) -> Vec<Value> {
    raw.get(key)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

/// Read an optional object, empty when absent or not an object
pub(crate) fn object_field(raw: &Map<String, Value>, key: &str) -> Map<String, Value> {
    raw.get(key)
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct TestResource {
        id: String,
        slug: String,
        name: String,
        #[serde(skip)]
        raw: Map<String, Value>,
    }

    impl SentryResource for TestResource {
        fn id(&self) -> &str {
            &self.id
        }

        fn slug(&self) -> &str {
            &self.slug
        }

        fn name(&self) -> &str {
            &self.name
        }

        fn raw(&self) -> &Map<String, Value> {
            &self.raw
        }
    }

    fn resource(raw: Value) -> TestResource {
        TestResource {
            id: "1".to_string(),
            slug: "backend".to_string(),
            name: "Backend".to_string(),
            raw: raw.as_object().cloned().unwrap(),
        }
    }

    #[test]
    fn test_matches_by_slug_only() {
        let r = resource(json!({}));
        assert!(r.matches("backend"));
        assert!(!r.matches("Backend"));
        assert!(!r.matches("1"));
    }

    #[test]
    fn test_to_record_keeps_unknown_raw_fields() {
        let r = resource(json!({"dateCreated": "2024-01-01", "isMember": true}));
        let record = r.to_record();
        assert_eq!(record["id"], "1");
        assert_eq!(record["dateCreated"], "2024-01-01");
        assert_eq!(record["isMember"], true);
    }

    #[test]
    fn test_to_record_raw_wins_on_collision() {
        let r = resource(json!({"name": "Raw Name"}));
        let record = r.to_record();
        assert_eq!(record["name"], "Raw Name");
        assert_eq!(record["slug"], "backend");
    }

    #[test]
    fn test_to_record_keeps_typed_then_payload_key_order() {
        let r = resource(json!({"zeta": 1, "name": "Raw Name", "alpha": 2}));
        let record = r.to_record();
        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["id", "slug", "name", "zeta", "alpha"]);
    }

    #[test]
    fn test_to_record_does_not_emit_raw_key() {
        let record = resource(json!({})).to_record();
        assert!(!record.contains_key("raw"));
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn test_listing_from_array() {
        let listing = Listing::from(json!([{"id": "1"}, {"id": "2"}]));
        assert_eq!(listing.into_items("teams").len(), 2);
    }

    #[test]
    fn test_listing_from_empty_object_is_absent() {
        let listing = Listing::from(json!({}));
        assert_eq!(listing, Listing::Absent);
        assert!(listing.into_items("teams").is_empty());
    }

    #[test]
    fn test_listing_from_unexpected_shape() {
        let listing = Listing::from(json!({"detail": "weird"}));
        assert_eq!(listing, Listing::UnexpectedShape("object"));
        assert!(listing.into_items("teams").is_empty());

        assert_eq!(
            Listing::from(json!("text")),
            Listing::UnexpectedShape("string")
        );
    }

    #[test]
    fn test_string_field_accepts_numbers() {
        let raw = json!({"id": 42}).as_object().cloned().unwrap();
        assert_eq!(string_field(&raw, "id").unwrap(), "42");
    }

    #[test]
    fn test_string_field_missing() {
        let raw = Map::new();
        let err = string_field(&raw, "slug").unwrap_err();
        assert!(err.to_string().contains("slug"));
    }

    #[test]
    fn test_string_field_wrong_type() {
        let raw = json!({"name": ["a"]}).as_object().cloned().unwrap();
        let err = string_field(&raw, "name").unwrap_err();
        assert!(err.to_string().contains("array"));
    }

    #[test]
    fn test_optional_field_helpers() {
        let raw = json!({
            "platform": null,
            "features": ["a", 1, "b"],
            "teams": [{"slug": "x"}],
            "options": {"k": "v"}
        })
        .as_object()
        .cloned()
        .unwrap();

        assert_eq!(string_or(&raw, "platform", "other"), "other");
        assert_eq!(string_list(&raw, "features"), vec!["a", "b"]);
        assert_eq!(value_list(&raw, "teams").len(), 1);
        assert_eq!(object_field(&raw, "options")["k"], "v");
        assert!(object_field(&raw, "missing").is_empty());
    }

    #[test]
    fn test_into_object_rejects_non_objects() {
        assert!(into_object(json!({"id": "1"}), "team").is_ok());
        let err = into_object(json!("team"), "team").unwrap_err();
        assert!(err.to_string().contains("Expected team object"));
    }
}
