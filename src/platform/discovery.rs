//! Reads the configured remote URL from the local Git repository.

use std::path::Path;

use git2::Repository;
use thiserror::Error;

use crate::error::ReviewError;

/// Errors that may occur while reading the remote URL.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemoteDiscoveryError {
    /// The start path is not within a Git repository.
    #[error("not inside a Git repository")]
    NotARepository,

    /// The requested remote does not exist.
    #[error("remote '{name}' not found")]
    RemoteNotFound {
        /// Name of the missing remote.
        name: String,
    },

    /// The remote exists but has no URL (or a URL that is not UTF-8).
    #[error("remote '{name}' has no usable URL")]
    RemoteHasNoUrl {
        /// Name of the remote.
        name: String,
    },

    /// Git operation failed.
    #[error("git error: {message}")]
    Git {
        /// Error detail from the git2 library.
        message: String,
    },
}

impl From<git2::Error> for RemoteDiscoveryError {
    fn from(error: git2::Error) -> Self {
        Self::Git {
            message: error.message().to_owned(),
        }
    }
}

impl From<RemoteDiscoveryError> for ReviewError {
    fn from(error: RemoteDiscoveryError) -> Self {
        Self::RemoteDiscovery {
            message: error.to_string(),
        }
    }
}

/// Reads the URL of `remote_name` from the repository containing `start_path`.
///
/// The repository is discovered by walking upward from `start_path`, the same
/// way `git config --get remote.<name>.url` resolves it.
///
/// # Errors
///
/// Returns [`RemoteDiscoveryError::NotARepository`] when no repository is
/// found, [`RemoteDiscoveryError::RemoteNotFound`] when the remote is not
/// configured and [`RemoteDiscoveryError::RemoteHasNoUrl`] when it has no URL.
pub fn read_remote_url(start_path: &Path, remote_name: &str) -> Result<String, RemoteDiscoveryError> {
    let repo = Repository::discover(start_path).map_err(|error| {
        if error.code() == git2::ErrorCode::NotFound {
            RemoteDiscoveryError::NotARepository
        } else {
            RemoteDiscoveryError::from(error)
        }
    })?;

    let remote = repo.find_remote(remote_name).map_err(|error| {
        if matches!(
            error.code(),
            git2::ErrorCode::NotFound | git2::ErrorCode::InvalidSpec
        ) {
            RemoteDiscoveryError::RemoteNotFound {
                name: remote_name.to_owned(),
            }
        } else {
            RemoteDiscoveryError::from(error)
        }
    })?;

    let url = remote
        .url()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| RemoteDiscoveryError::RemoteHasNoUrl {
            name: remote_name.to_owned(),
        })?;

    tracing::debug!(remote = remote_name, url, "read git remote");
    Ok(url.to_owned())
}
