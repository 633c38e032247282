//! Project data models

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::sentry::traits::{object_field, string_field, string_list, string_or, SentryResource};

/// Platform reported when the API has none
pub const UNKNOWN_PLATFORM: &str = "other";

/// Status reported when the API has none
pub const UNKNOWN_STATUS: &str = "unknown";

/// Project data from the Sentry API, merged with its detail payload
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Project {
    pub id: String,
    pub slug: String,
    pub name: String,
    /// Slug of the owning organization
    pub organization: String,
    pub platform: String,
    pub teams: Vec<Value>,
    pub status: String,
    pub features: Vec<String>,
    pub options: Map<String, Value>,
    #[serde(skip)]
    pub raw: Map<String, Value>,
}

impl Project {
    /// Build from a project list item, its team assignments and its detail payload.
    ///
    /// The stored raw payload is the list item overlaid with the details;
    /// `options` is read from the details only.
    pub fn from_raw(
        item: Map<String, Value>,
        organization: &str,
        teams: Vec<Value>,
        details: Value,
    ) -> Result<Self> {
        let details = match details {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        let options = object_field(&details, "options");

        let mut raw = item;
        raw.extend(details);

        Ok(Self {
            id: string_field(&raw, "id")?,
            slug: string_field(&raw, "slug")?,
            name: string_field(&raw, "name")?,
            organization: organization.to_string(),
            platform: string_or(&raw, "platform", UNKNOWN_PLATFORM),
            teams,
            status: string_or(&raw, "status", UNKNOWN_STATUS),
            features: string_list(&raw, "features"),
            options,
            raw,
        })
    }
}

impl SentryResource for Project {
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
