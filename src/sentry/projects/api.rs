//! Project API operations

use log::{debug, info};
use serde_json::Value;
use urlencoding::encode;

use crate::config::api;
use crate::error::Result;
use crate::sentry::traits::{into_object, string_field};
use crate::sentry::SentryClient;

use super::models::Project;

/// Build the API path for a single project
fn project_path(org: &str, project: &str) -> String {
    format!(
        "/{}/{}/{}/{}/",
        api::ORGANIZATIONS,
        encode(org),
        api::PROJECTS,
        encode(project)
    )
}

impl SentryClient {
    /// Get all projects of an organization with team assignments and details
    /// (2N+1 requests)
    pub async fn get_projects(&self, org: &str) -> Result<Vec<Project>> {
        info!("Fetching projects for organization: {}", org);
        let path = format!("/{}/{}/{}/", api::ORGANIZATIONS, encode(org), api::PROJECTS);

        let items = self
            .execute_list(&path)
            .await?
            .into_items("projects")
            .into_iter()
            .map(|item| into_object(item, "project"))
            .collect::<Result<Vec<_>>>()?;

        let projects = self
            .fetch_ordered(items, |item| async move {
                let slug = string_field(&item, "slug")?;
                let teams = self.get_project_teams(org, &slug).await?;
                let details = self.get_project_details(org, &slug).await?;
                Project::from_raw(item, org, teams, details)
            })
            .await?;

        info!("Found {} projects", projects.len());
        Ok(projects)
    }

    /// Get the teams assigned to a project
    pub async fn get_project_teams(&self, org: &str, project: &str) -> Result<Vec<Value>> {
        debug!("Fetching teams for project: {}", project);
        let path = format!("{}{}/", project_path(org, project), api::TEAMS);

        Ok(self.execute_list(&path).await?.into_items("project teams"))
    }

    /// Get the detail payload of a project; `{}` when it does not exist
    pub async fn get_project_details(&self, org: &str, project: &str) -> Result<Value> {
        debug!("Fetching details for project: {}", project);
        self.execute(&project_path(org, project), &[]).await
    }
}
