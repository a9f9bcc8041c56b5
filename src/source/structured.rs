//! GitHub-backed review source.

use std::sync::Arc;

use crate::error::ReviewError;
use crate::github::{self, GitHubRepository, PullRequestGateway};
use crate::process::CommandRunner;
use crate::review::{Review, ReviewNumber};

use super::run_diff_command;

/// Lists reviews from typed API records; fetches diffs with `gh pr diff`.
pub struct StructuredSource {
    gateway: Box<dyn PullRequestGateway>,
    runner: Arc<dyn CommandRunner>,
    repository: GitHubRepository,
    gh_program: String,
}

impl StructuredSource {
    /// Creates a source for `repository`.
    #[must_use]
    pub fn new(
        gateway: Box<dyn PullRequestGateway>,
        runner: Arc<dyn CommandRunner>,
        repository: GitHubRepository,
        gh_program: impl Into<String>,
    ) -> Self {
        Self {
            gateway,
            runner,
            repository,
            gh_program: gh_program.into(),
        }
    }

    /// The repository this source lists.
    #[must_use]
    pub const fn repository(&self) -> &GitHubRepository {
        &self.repository
    }

    pub(super) async fn list_reviews(&self) -> Result<Vec<Review>, ReviewError> {
        let pulls = self
            .gateway
            .list_open_pull_requests(&self.repository)
            .await?;
        Ok(pulls.into_iter().map(Review::from).collect())
    }

    pub(super) async fn fetch_diff(
        &self,
        number: ReviewNumber,
        repo_path: &str,
    ) -> Result<String, ReviewError> {
        let args = github::diff_args(number, repo_path);
        run_diff_command(self.runner.as_ref(), &self.gh_program, &args, number).await
    }
}
