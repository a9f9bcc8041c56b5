//! GitHub pull request support.
//!
//! Listings go through the REST API via Octocrab, which returns fully
//! structured records. Diffs and authentication are delegated to the `gh`
//! CLI.

pub mod gateway;
pub mod locator;
pub mod models;
pub mod token;

pub use gateway::{OctocrabGateway, PullRequestGateway};
pub use locator::{DEFAULT_API_BASE, GitHubRepository, GitHubToken};
pub use models::ApiPullRequest;
pub use token::resolve_token;

#[cfg(test)]
pub use gateway::MockPullRequestGateway;

use crate::review::ReviewNumber;

/// Default `gh` executable.
pub const DEFAULT_GH_COMMAND: &str = "gh";

/// Arguments for `gh pr diff <number> --repo <owner/repo>`.
#[must_use]
pub fn diff_args(number: ReviewNumber, repo_path: &str) -> Vec<String> {
    vec![
        "pr".to_owned(),
        "diff".to_owned(),
        number.to_string(),
        "--repo".to_owned(),
        repo_path.to_owned(),
    ]
}
