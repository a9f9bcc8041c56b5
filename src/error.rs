//! Error types surfaced by review discovery, listing and prompt generation.

use thiserror::Error;

/// Errors that abort a review-prompt run.
///
/// Every variant carries enough text to be shown to the user verbatim. Line
/// level problems in text listings are not errors; they are reported as
/// [`crate::gitlab::ParseWarning`] values and the offending line is dropped.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReviewError {
    /// The remote URL has too few path segments after normalisation.
    #[error("malformed git remote URL: {url}")]
    MalformedRemote {
        /// The remote URL as supplied.
        url: String,
    },

    /// The remote URL does not point at a supported hosting platform.
    #[error("unsupported platform: remote URL does not contain 'github.com' or 'gitlab.com': {url}")]
    UnsupportedPlatform {
        /// The remote URL as supplied.
        url: String,
    },

    /// Reading the remote URL from the local repository failed.
    #[error("could not read the git remote: {message}")]
    RemoteDiscovery {
        /// Details about the discovery failure.
        message: String,
    },

    /// Listing open reviews failed.
    #[error("{platform} reviews are unavailable: {message}")]
    SourceUnavailable {
        /// Platform the listing was requested from.
        platform: String,
        /// Underlying cause, including stderr or API status where available.
        message: String,
    },

    /// Fetching the diff for a review failed.
    #[error("diff for #{number} is unavailable: {message}")]
    DiffUnavailable {
        /// Review number whose diff was requested.
        number: u64,
        /// Underlying cause, including the diff command's stderr.
        message: String,
    },

    /// No GitHub token was configured and `gh auth token` produced none.
    #[error("GitHub token is required (set --token or run `gh auth login`)")]
    MissingToken,

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The review selection step failed.
    #[error("selection failed: {message}")]
    Selection {
        /// Details about the selection failure.
        message: String,
    },

    /// The review prompt could not be rendered.
    #[error("prompt rendering failed: {message}")]
    Prompt {
        /// Error detail from the template engine.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl From<std::io::Error> for ReviewError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}
