//! GitLab-backed review source parsing `glab mr list` output.

use std::sync::Arc;

use crate::error::ReviewError;
use crate::gitlab;
use crate::platform::PlatformKind;
use crate::process::CommandRunner;
use crate::review::{Review, ReviewNumber};

use super::run_diff_command;

/// Lists reviews by parsing `glab` text output; fetches diffs with
/// `glab mr diff`.
pub struct TextSource {
    runner: Arc<dyn CommandRunner>,
    repo_path: String,
    glab_program: String,
}

impl TextSource {
    /// Creates a source for the GitLab project at `repo_path`.
    #[must_use]
    pub fn new(
        runner: Arc<dyn CommandRunner>,
        repo_path: impl Into<String>,
        glab_program: impl Into<String>,
    ) -> Self {
        Self {
            runner,
            repo_path: repo_path.into(),
            glab_program: glab_program.into(),
        }
    }

    /// The GitLab project path this source lists.
    #[must_use]
    pub fn repo_path(&self) -> &str {
        &self.repo_path
    }

    pub(super) async fn list_reviews(&self) -> Result<Vec<Review>, ReviewError> {
        let args = gitlab::list_args(&self.repo_path);
        let unavailable = |message: String| ReviewError::SourceUnavailable {
            platform: PlatformKind::GitLab.to_string(),
            message,
        };

        let output = self
            .runner
            .run(&self.glab_program, &args)
            .await
            .map_err(|error| unavailable(format!("failed to run `{}`: {error}", self.glab_program)))?;

        if !output.succeeded() {
            return Err(unavailable(format!(
                "`{} {}` failed: {}",
                self.glab_program,
                args.join(" "),
                output.failure_detail()
            )));
        }

        let listing = gitlab::parse_listing(&output.stdout);
        for warning in &listing.warnings {
            tracing::warn!("{warning}");
        }
        tracing::debug!(
            parsed = listing.reviews.len(),
            skipped = listing.warnings.len(),
            "parsed merge request listing"
        );

        Ok(listing.reviews)
    }

    pub(super) async fn fetch_diff(
        &self,
        number: ReviewNumber,
        repo_path: &str,
    ) -> Result<String, ReviewError> {
        let args = gitlab::diff_args(number, repo_path);
        run_diff_command(self.runner.as_ref(), &self.glab_program, &args, number).await
    }
}
