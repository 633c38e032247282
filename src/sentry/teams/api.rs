//! Team API operations

use log::{debug, info};
use serde_json::Value;
use urlencoding::encode;

use crate::config::api;
use crate::error::Result;
use crate::sentry::traits::{into_object, string_field};
use crate::sentry::SentryClient;

use super::models::Team;

impl SentryClient {
    /// Get all teams of an organization, each with its members (N+1 requests)
    pub async fn get_teams(&self, org: &str) -> Result<Vec<Team>> {
        info!("Fetching teams for organization: {}", org);
        let path = format!("/{}/{}/{}/", api::ORGANIZATIONS, encode(org), api::TEAMS);

        let items = self
            .execute_list(&path)
            .await?
            .into_items("teams")
            .into_iter()
            .map(|item| into_object(item, "team"))
            .collect::<Result<Vec<_>>>()?;

        let teams = self
            .fetch_ordered(items, |raw| async move {
                let slug = string_field(&raw, "slug")?;
                let members = self.get_team_members(org, &slug).await?;
                Team::from_raw(raw, org, members)
            })
            .await?;

        info!("Found {} teams", teams.len());
        Ok(teams)
    }

    /// Get the members of one team, in API order
    pub async fn get_team_members(&self, org: &str, team: &str) -> Result<Vec<Value>> {
        debug!("Fetching members for team: {}", team);
        let path = format!(
            "/{}/{}/{}/{}/{}/",
            api::ORGANIZATIONS,
            encode(org),
            api::TEAMS,
            encode(team),
            api::MEMBERS
        );

        Ok(self.execute_list(&path).await?.into_items("team members"))
    }
}
