//! Organization API operations

use log::{error, info};

use crate::config::api;
use crate::error::Result;
use crate::sentry::traits::into_object;
use crate::sentry::SentryClient;

use super::models::Organization;

impl SentryClient {
    /// Get all organizations visible to the token, in API order
    pub async fn get_organizations(&self) -> Result<Vec<Organization>> {
        info!("Fetching organizations");
        let path = format!("/{}/", api::ORGANIZATIONS);

        let organizations = self
            .execute_list(&path)
            .await?
            .into_items("organizations")
            .into_iter()
            .map(|item| into_object(item, "organization").and_then(Organization::from_raw))
            .collect::<Result<Vec<_>>>()?;

        info!("Found {} organizations", organizations.len());
        Ok(organizations)
    }

    /// Check that the token can list at least one organization.
    ///
    /// Failures are logged and reported as `false`.
    pub async fn test_connection(&self) -> bool {
        match self.get_organizations().await {
            Ok(orgs) => !orgs.is_empty(),
            Err(e) => {
                error!("Connection test failed: {}", e);
                false
            }
        }
    }
}
