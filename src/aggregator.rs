//! Platform-agnostic facade over the review source chosen for a run.

use crate::error::ReviewError;
use crate::platform::PlatformContext;
use crate::review::{Review, ReviewNumber};
use crate::source::ReviewSource;

/// Lists reviews and fetches diffs for the project described by a
/// [`PlatformContext`].
#[derive(Debug)]
pub struct ReviewAggregator {
    context: PlatformContext,
    source: ReviewSource,
}

impl ReviewAggregator {
    /// Creates an aggregator backed by `source`.
    #[must_use]
    pub const fn new(context: PlatformContext, source: ReviewSource) -> Self {
        Self { context, source }
    }

    /// Lists open reviews in platform order.
    ///
    /// # Errors
    ///
    /// Propagates [`ReviewError::SourceUnavailable`] from the source.
    pub async fn list_reviews(&self) -> Result<Vec<Review>, ReviewError> {
        let reviews = self.source.list_reviews().await?;
        tracing::debug!(
            platform = %self.context.kind(),
            repo = self.context.repo_path(),
            count = reviews.len(),
            "listed open reviews"
        );
        Ok(reviews)
    }

    /// Fetches the raw diff of review `number` in `repo_path`.
    ///
    /// # Errors
    ///
    /// Propagates [`ReviewError::DiffUnavailable`] from the source.
    pub async fn fetch_diff(
        &self,
        number: ReviewNumber,
        repo_path: &str,
    ) -> Result<String, ReviewError> {
        self.source.fetch_diff(number, repo_path).await
    }

    /// The frozen platform context.
    #[must_use]
    pub const fn context(&self) -> &PlatformContext {
        &self.context
    }

    /// Label embedded in prompts, e.g. `GitLab Merge Request`.
    #[must_use]
    pub const fn platform_label(&self) -> &'static str {
        self.context.kind().label()
    }

    /// Repository path passed to platform diff commands.
    #[must_use]
    pub fn repo_path(&self) -> &str {
        self.context.repo_path()
    }
}
