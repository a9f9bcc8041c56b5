//! Hosting platform detection and the per-run platform context.
//!
//! A run starts by reading the project's git remote, classifying it into a
//! [`RemoteClassification`], and freezing the result into a
//! [`PlatformContext`]. The context is read-only for the rest of the run and
//! decides which review source backs the aggregator.
//!
//! # Example
//!
//! ```
//! use reviewprompt::platform::{PlatformContext, PlatformKind, classify_remote};
//!
//! let classification = classify_remote("git@github.com:acme/widgets.git")
//!     .expect("remote should classify");
//! let context = PlatformContext::from_classification(classification);
//! assert_eq!(context.kind(), PlatformKind::GitHub);
//! assert_eq!(context.repo_path(), "acme/widgets");
//! ```

mod discovery;
mod remote;

use std::fmt;

pub use discovery::{RemoteDiscoveryError, read_remote_url};
pub use remote::{RemoteClassification, classify_remote, detect_platform};

/// Default remote consulted when none is configured.
pub const DEFAULT_REMOTE_NAME: &str = "origin";

/// Supported hosting platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformKind {
    /// GitHub pull requests, listed through the REST API.
    GitHub,
    /// GitLab merge requests, listed through the `glab` CLI.
    GitLab,
}

impl PlatformKind {
    /// Hostname fragment that identifies the platform in a remote URL.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::GitHub => "github.com",
            Self::GitLab => "gitlab.com",
        }
    }

    /// Short machine name (`github`, `gitlab`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::GitHub => "github",
            Self::GitLab => "gitlab",
        }
    }

    /// Human readable label used in prompts, e.g. `GitHub Pull Request`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::GitHub => "GitHub Pull Request",
            Self::GitLab => "GitLab Merge Request",
        }
    }

    /// What the platform calls a review request.
    #[must_use]
    pub const fn request_noun(self) -> &'static str {
        match self {
            Self::GitHub => "pull requests",
            Self::GitLab => "merge requests",
        }
    }
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GitHub => f.write_str("GitHub"),
            Self::GitLab => f.write_str("GitLab"),
        }
    }
}

/// Immutable description of the project being reviewed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformContext {
    classification: RemoteClassification,
    repo_path: String,
}

impl PlatformContext {
    /// Freezes a classified remote into a context.
    ///
    /// The repository path is `owner/repo` for GitHub and the full group path
    /// for GitLab.
    #[must_use]
    pub fn from_classification(classification: RemoteClassification) -> Self {
        let repo_path = if classification.repository().is_empty() {
            classification.namespace().to_owned()
        } else {
            format!(
                "{}/{}",
                classification.namespace(),
                classification.repository()
            )
        };

        Self {
            classification,
            repo_path,
        }
    }

    /// The detected platform.
    #[must_use]
    pub const fn kind(&self) -> PlatformKind {
        self.classification.platform()
    }

    /// Path passed to `--repo` arguments of the platform CLI.
    #[must_use]
    pub fn repo_path(&self) -> &str {
        &self.repo_path
    }

    /// The underlying remote classification.
    #[must_use]
    pub const fn classification(&self) -> &RemoteClassification {
        &self.classification
    }
}
