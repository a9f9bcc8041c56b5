//! Review sources.
//!
//! There are exactly two ways reviews reach this tool: as typed records from
//! the GitHub REST API, or as human-formatted text from `glab`. Both are
//! variants of the closed [`ReviewSource`] enum and answer the same two
//! questions: which reviews are open, and what is the diff of one of them.

mod structured;
mod text;

pub use structured::StructuredSource;
pub use text::TextSource;

use crate::error::ReviewError;
use crate::process::CommandRunner;
use crate::review::{Review, ReviewNumber};

/// The review source backing a run.
pub enum ReviewSource {
    /// Typed API listing (GitHub).
    Structured(StructuredSource),
    /// Heuristically parsed CLI listing (GitLab).
    Text(TextSource),
}

impl ReviewSource {
    /// Lists open reviews in the order the platform returned them.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::SourceUnavailable`] when the listing call or
    /// process fails.
    pub async fn list_reviews(&self) -> Result<Vec<Review>, ReviewError> {
        match self {
            Self::Structured(source) => source.list_reviews().await,
            Self::Text(source) => source.list_reviews().await,
        }
    }

    /// Fetches the raw diff for one review.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::DiffUnavailable`] when the diff command cannot
    /// be run or exits non-zero.
    pub async fn fetch_diff(
        &self,
        number: ReviewNumber,
        repo_path: &str,
    ) -> Result<String, ReviewError> {
        match self {
            Self::Structured(source) => source.fetch_diff(number, repo_path).await,
            Self::Text(source) => source.fetch_diff(number, repo_path).await,
        }
    }
}

impl std::fmt::Debug for ReviewSource {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Structured(_) => formatter.write_str("ReviewSource::Structured(..)"),
            Self::Text(_) => formatter.write_str("ReviewSource::Text(..)"),
        }
    }
}

/// Runs a platform diff command and returns its stdout verbatim.
async fn run_diff_command(
    runner: &dyn CommandRunner,
    program: &str,
    args: &[String],
    number: ReviewNumber,
) -> Result<String, ReviewError> {
    let output = runner
        .run(program, args)
        .await
        .map_err(|error| ReviewError::DiffUnavailable {
            number: number.get(),
            message: format!("failed to run `{program}`: {error}"),
        })?;

    if !output.succeeded() {
        return Err(ReviewError::DiffUnavailable {
            number: number.get(),
            message: format!("`{program} {}` failed: {}", args.join(" "), output.failure_detail()),
        });
    }

    Ok(output.stdout)
}
