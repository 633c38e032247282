//! Organization data models

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::sentry::traits::{object_field, string_field, string_list, SentryResource};

/// Organization data from the Sentry API
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Organization {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub features: Vec<String>,
    pub status: Map<String, Value>,
    #[serde(skip)]
    pub raw: Map<String, Value>,
}

impl Organization {
    /// Build from a raw API object; `id`, `slug` and `name` are required
    pub fn from_raw(raw: Map<String, Value>) -> Result<Self> {
        Ok(Self {
            id: string_field(&raw, "id")?,
            slug: string_field(&raw, "slug")?,
            name: string_field(&raw, "name")?,
            features: string_list(&raw, "features"),
            status: object_field(&raw, "status"),
            raw,
        })
    }
}

impl SentryResource for Organization {
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
