//! Project aggregate root.

use super::{ApiClass, ParseProjectStatusError, ProjectId, ProjectName, Repository};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Maintenance status of a mined project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// The project is actively maintained.
    Active,
    /// The project is no longer maintained.
    Inactive,
    /// The project has been superseded or withdrawn.
    Deprecated,
}

impl ProjectStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Deprecated => "deprecated",
        }
    }
}

impl TryFrom<&str> for ProjectStatus {
    type Error = ParseProjectStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "deprecated" => Ok(Self::Deprecated),
            _ => Err(ParseProjectStatusError(value.to_owned())),
        }
    }
}

/// Summary statistics recorded after a mining run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStatistics {
    /// Examples returned by the extractor.
    pub extracted_examples: usize,
    /// Examples kept after near-duplicate removal.
    pub retained_examples: usize,
    /// API classes referenced by the project.
    pub api_classes: usize,
    /// Builder plugins that were run.
    pub builders_attempted: usize,
    /// Builder plugins that reported a successful build.
    pub builders_succeeded: usize,
}

/// Parameter object describing a project before it is mined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescriptor {
    /// Unique project name.
    pub name: ProjectName,
    /// Short human-readable summary.
    pub summary: String,
    /// Project website.
    pub site_url: String,
    /// Maintenance status.
    pub status: ProjectStatus,
    /// Source repository descriptor.
    pub repository: Repository,
}

/// Project aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: ProjectName,
    summary: String,
    site_url: String,
    status: ProjectStatus,
    repository: Repository,
    api_classes: BTreeSet<ApiClass>,
    statistics: Option<ProjectStatistics>,
    client_of: Option<ProjectId>,
    added_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new project stamped with the current clock time.
    #[must_use]
    pub fn new(descriptor: ProjectDescriptor, clock: &impl Clock) -> Self {
        Self {
            id: ProjectId::new(),
            name: descriptor.name,
            summary: descriptor.summary,
            site_url: descriptor.site_url,
            status: descriptor.status,
            repository: descriptor.repository,
            api_classes: BTreeSet::new(),
            statistics: None,
            client_of: None,
            added_at: clock.utc(),
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the unique project name.
    #[must_use]
    pub const fn name(&self) -> &ProjectName {
        &self.name
    }

    /// Returns the project summary.
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Returns the project website.
    #[must_use]
    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    /// Returns the maintenance status.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns the repository descriptor.
    #[must_use]
    pub const fn repository(&self) -> &Repository {
        &self.repository
    }

    /// Returns the repository descriptor for in-place updates.
    pub const fn repository_mut(&mut self) -> &mut Repository {
        &mut self.repository
    }

    /// Returns the API classes the project references.
    #[must_use]
    pub const fn api_classes(&self) -> &BTreeSet<ApiClass> {
        &self.api_classes
    }

    /// Returns the statistics of the last mining run, if any.
    #[must_use]
    pub const fn statistics(&self) -> Option<ProjectStatistics> {
        self.statistics
    }

    /// Returns the source API project this project is a client of.
    #[must_use]
    pub const fn client_of(&self) -> Option<ProjectId> {
        self.client_of
    }

    /// Returns the registration timestamp.
    #[must_use]
    pub const fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }

    /// Records the source API project this project uses.
    pub const fn set_client_of(&mut self, api_project: ProjectId) {
        self.client_of = Some(api_project);
    }

    /// Replaces the referenced API classes.
    pub fn set_api_classes(&mut self, classes: impl IntoIterator<Item = ApiClass>) {
        self.api_classes = classes.into_iter().collect();
    }

    /// Records mining statistics.
    pub const fn set_statistics(&mut self, statistics: ProjectStatistics) {
        self.statistics = Some(statistics);
    }
}
