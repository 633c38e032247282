//! Team data models

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::sentry::traits::{string_field, value_list, SentryResource};

/// Team data from the Sentry API, with its member list attached
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Team {
    pub id: String,
    pub slug: String,
    pub name: String,
    /// Slug of the owning organization
    pub organization: String,
    pub members: Vec<Value>,
    pub projects: Vec<Value>,
    #[serde(skip)]
    pub raw: Map<String, Value>,
}

impl Team {
    /// Build from a raw team object and its separately fetched members
    pub fn from_raw(
        raw: Map<String, Value>,
        organization: &str,
        members: Vec<Value>,
    ) -> Result<Self> {
        Ok(Self {
            id: string_field(&raw, "id")?,
            slug: string_field(&raw, "slug")?,
            name: string_field(&raw, "name")?,
            organization: organization.to_string(),
            members,
            projects: value_list(&raw, "projects"),
            raw,
        })
    }
}

impl SentryResource for Team {
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_team_record_raw_slug_wins() {
        let team = Team {
            id: "t1".to_string(),
            slug: "t1".to_string(),
            name: "Team One".to_string(),
            organization: "acme".to_string(),
            members: vec![],
            projects: vec![],
            raw: json!({"slug": "t1-raw"}).as_object().cloned().unwrap(),
        };

        let record = team.to_record();
        assert_eq!(record["slug"], "t1-raw");
        assert_eq!(record["name"], "Team One");
        assert_eq!(record["organization"], "acme");
        assert_eq!(record["members"], json!([]));
    }

    #[test]
    fn test_team_from_raw_takes_projects_verbatim() {
        let raw = json!({
            "id": "10",
            "slug": "backend",
            "name": "Backend",
            "projects": [{"slug": "api", "platform": "python"}]
        });
        let team = Team::from_raw(
            raw.as_object().cloned().unwrap(),
            "acme",
            vec![json!({"email": "a@example.com"})],
        )
        .unwrap();

        assert_eq!(
            team.projects,
            vec![json!({"slug": "api", "platform": "python"})]
        );
        assert_eq!(team.members.len(), 1);
        assert_eq!(team.organization, "acme");
    }

    #[test]
    fn test_team_projects_default_empty() {
        let raw = json!({"id": "10", "slug": "backend", "name": "Backend"});
        let team = Team::from_raw(raw.as_object().cloned().unwrap(), "acme", vec![]).unwrap();
        assert!(team.projects.is_empty());
    }
}
