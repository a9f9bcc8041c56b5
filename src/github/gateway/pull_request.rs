//! Octocrab implementation of the pull request gateway.

use async_trait::async_trait;
use octocrab::Octocrab;

use crate::error::ReviewError;
use crate::github::locator::{GitHubRepository, GitHubToken};
use crate::github::models::ApiPullRequest;

use super::PullRequestGateway;
use super::client::build_octocrab_client;
use super::error_mapping::map_octocrab_error;

/// Octocrab-backed gateway.
pub struct OctocrabGateway {
    client: Octocrab,
}

impl OctocrabGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an Octocrab client for the given token and repository.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Configuration`] when the API base cannot be
    /// parsed or [`ReviewError::SourceUnavailable`] when Octocrab fails to
    /// construct a client.
    pub fn for_token(
        token: &GitHubToken,
        repository: &GitHubRepository,
    ) -> Result<Self, ReviewError> {
        let octocrab = build_octocrab_client(token, repository.api_base().as_str())?;
        Ok(Self::new(octocrab))
    }
}

#[async_trait]
impl PullRequestGateway for OctocrabGateway {
    async fn list_open_pull_requests(
        &self,
        repository: &GitHubRepository,
    ) -> Result<Vec<ApiPullRequest>, ReviewError> {
        let query_params = [("state", "open")];

        tracing::debug!(repository = %repository.full_name(), "listing open pull requests");
        self.client
            .get::<Vec<ApiPullRequest>, _, _>(repository.pulls_path(), Some(&query_params))
            .await
            .map_err(|error| map_octocrab_error("list pulls", &error))
    }
}
