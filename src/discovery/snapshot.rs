//! Discovery snapshot and its summary

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Output of one discovery run
///
/// All three parts empty means discovery found nothing at all.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// Raw organization object as returned by the API
    pub organization: Map<String, Value>,
    /// Serialized team records, in API order
    pub teams: Vec<Map<String, Value>>,
    /// Serialized project records, in API order
    pub projects: Vec<Map<String, Value>>,
}

impl Snapshot {
    /// The snapshot signalling that no organization was found
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.organization.is_empty() && self.teams.is_empty() && self.projects.is_empty()
    }

    /// Counts for the human-readable discovery summary
    pub fn summary(&self) -> SnapshotSummary {
        let mut platforms: Vec<(String, usize)> = Vec::new();
        for project in &self.projects {
            let platform = project
                .get("platform")
                .and_then(Value::as_str)
                .unwrap_or(crate::sentry::projects::UNKNOWN_PLATFORM);
            match platforms.iter_mut().find(|(name, _)| name == platform) {
                Some((_, count)) => *count += 1,
                None => platforms.push((platform.to_string(), 1)),
            }
        }

        let members = self
            .teams
            .iter()
            .map(|team| team.get("members").and_then(Value::as_array).map_or(0, Vec::len))
            .sum();

        SnapshotSummary {
            organization_name: org_field(&self.organization, "name"),
            organization_slug: org_field(&self.organization, "slug"),
            teams: self.teams.len(),
            members,
            projects: self.projects.len(),
            platforms,
        }
    }
}

fn org_field(org: &Map<String, Value>, key: &str) -> String {
    org.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Aggregated counts of a snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotSummary {
    pub organization_name: String,
    pub organization_slug: String,
    pub teams: usize,
    /// Members summed over all teams (a person in two teams counts twice)
    pub members: usize,
    pub projects: usize,
    /// Project count per platform, in first-seen order
    pub platforms: Vec<(String, usize)>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = Snapshot::empty();
        assert!(snapshot.is_empty());
        assert_eq!(
            serde_json::to_value(&snapshot).unwrap(),
            json!({"organization": {}, "teams": [], "projects": []})
        );
    }

    #[test]
    fn test_snapshot_with_org_only_is_not_empty() {
        let snapshot = Snapshot {
            organization: map(json!({"slug": "acme"})),
            ..Snapshot::default()
        };
        assert!(!snapshot.is_empty());
    }

    #[test]
    fn test_summary_counts() {
        let snapshot = Snapshot {
            organization: map(json!({"slug": "acme", "name": "Acme Corp"})),
            teams: vec![
                map(json!({"slug": "a", "members": [{"id": 1}, {"id": 2}]})),
                map(json!({"slug": "b", "members": [{"id": 1}]})),
                map(json!({"slug": "c"})),
            ],
            projects: vec![
                map(json!({"slug": "p1", "platform": "python"})),
                map(json!({"slug": "p2", "platform": "javascript"})),
                map(json!({"slug": "p3", "platform": "python"})),
                map(json!({"slug": "p4"})),
            ],
        };

        let summary = snapshot.summary();
        assert_eq!(summary.organization_name, "Acme Corp");
        assert_eq!(summary.organization_slug, "acme");
        assert_eq!(summary.teams, 3);
        assert_eq!(summary.members, 3);
        assert_eq!(summary.projects, 4);
        assert_eq!(
            summary.platforms,
            vec![
                ("python".to_string(), 2),
                ("javascript".to_string(), 1),
                ("other".to_string(), 1)
            ]
        );
    }
}
