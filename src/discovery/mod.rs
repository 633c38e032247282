//! Discovery orchestration
//!
//! Resolves the target organization, walks teams and projects as requested
//! and assembles the [`Snapshot`]. Progress is reported at coarse
//! checkpoints through an optional callback.

mod snapshot;

use log::{error, info};

use crate::error::{DiscoveryError, Result};
use crate::sentry::{Organization, SentryClient, SentryResource};

pub use snapshot::{Snapshot, SnapshotSummary};

/// Progress checkpoints, in percent
pub mod progress {
    /// Discovery started
    pub const STARTED: u8 = 10;
    /// Organization resolved
    pub const ORGANIZATION_RESOLVED: u8 = 20;
    /// Teams phase finished
    pub const TEAMS_DONE: u8 = 60;
    /// Projects phase finished
    pub const PROJECTS_DONE: u8 = 90;
    /// Snapshot assembled
    pub const COMPLETE: u8 = 100;
}

/// What a discovery run should cover
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryOptions {
    /// Organization slug; the first visible organization when `None`
    pub organization: Option<String>,
    /// Skip the teams phase
    pub projects_only: bool,
    /// Skip the projects phase
    pub teams_only: bool,
}

impl DiscoveryOptions {
    /// Setting both flags cancels them out: both phases run
    pub fn include_teams(&self) -> bool {
        !self.projects_only || self.teams_only
    }

    pub fn include_projects(&self) -> bool {
        !self.teams_only || self.projects_only
    }
}

/// Pick the organization to discover.
///
/// A blank target selects the first organization. Returns `Ok(None)` when no
/// organization is visible at all.
pub fn resolve_organization(
    organizations: Vec<Organization>,
    target: Option<&str>,
) -> Result<Option<Organization>> {
    if organizations.is_empty() {
        return Ok(None);
    }

    match target.map(str::trim).filter(|slug| !slug.is_empty()) {
        Some(slug) => organizations
            .into_iter()
            .find(|org| org.matches(slug))
            .map(Some)
            .ok_or_else(|| DiscoveryError::OrganizationNotFound(slug.to_string())),
        None => {
            let org = organizations.into_iter().next();
            if let Some(org) = &org {
                info!("Using organization: {} ({})", org.name(), org.slug());
            }
            Ok(org)
        }
    }
}

/// One discovery run against a Sentry instance
pub struct Discovery {
    client: SentryClient,
}

impl Discovery {
    pub fn new(client: SentryClient) -> Self {
        Self { client }
    }

    /// Discover the organization graph.
    ///
    /// Any hard failure aborts the run; there is no partial snapshot. An
    /// account without organizations yields [`Snapshot::empty`].
    pub async fn discover(
        &self,
        options: &DiscoveryOptions,
        on_progress: Option<&dyn Fn(u8)>,
    ) -> Result<Snapshot> {
        let report = |percent: u8| {
            if let Some(callback) = on_progress {
                callback(percent);
            }
        };

        info!("Starting discovery");
        report(progress::STARTED);

        let organizations = self.client.get_organizations().await?;
        let org = match resolve_organization(organizations, options.organization.as_deref())? {
            Some(org) => org,
            None => {
                error!("No organizations found or invalid token");
                return Ok(Snapshot::empty());
            }
        };
        report(progress::ORGANIZATION_RESOLVED);

        let mut snapshot = Snapshot {
            organization: org.raw().clone(),
            ..Snapshot::default()
        };

        if options.include_teams() {
            info!("Discovering teams");
            let teams = self.client.get_teams(org.slug()).await?;
            snapshot.teams = teams.iter().map(SentryResource::to_record).collect();
            report(progress::TEAMS_DONE);
        }

        if options.include_projects() {
            info!("Discovering projects");
            let projects = self.client.get_projects(org.slug()).await?;
            snapshot.projects = projects.iter().map(SentryResource::to_record).collect();
            report(progress::PROJECTS_DONE);
        }

        report(progress::COMPLETE);
        info!("Discovery completed successfully");
        Ok(snapshot)
    }

    /// Release the connection pool
    pub fn close(self) {
        info!("Closing Sentry client");
        drop(self.client);
    }
}
