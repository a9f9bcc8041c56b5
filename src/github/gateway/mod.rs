//! Gateway for listing pull requests through Octocrab.
//!
//! The trait keeps the structured review source independent of HTTP so it
//! can be exercised with mocks; [`OctocrabGateway`] performs the real call.

mod client;
mod error_mapping;
mod pull_request;

pub use pull_request::OctocrabGateway;

use async_trait::async_trait;

use crate::error::ReviewError;
use crate::github::locator::GitHubRepository;
use crate::github::models::ApiPullRequest;

/// Gateway that can list open pull requests for a repository.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PullRequestGateway: Send + Sync {
    /// Fetch open pull requests in a single listing call.
    async fn list_open_pull_requests(
        &self,
        repository: &GitHubRepository,
    ) -> Result<Vec<ApiPullRequest>, ReviewError>;
}
