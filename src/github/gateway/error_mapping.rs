//! Error mapping helpers for the Octocrab gateway.

use http::StatusCode;

use crate::error::ReviewError;
use crate::platform::PlatformKind;

/// Checks if a GitHub error status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Checks if an octocrab error represents a network/transport issue.
pub(super) const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

/// Maps an Octocrab failure into [`ReviewError::SourceUnavailable`].
///
/// The status code and GitHub's message are kept so the user can tell a
/// rejected token from a missing repository or a network outage.
pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> ReviewError {
    let message = if let octocrab::Error::GitHub { source, .. } = error {
        if is_auth_failure(source.status_code) {
            format!(
                "{operation} failed: GitHub rejected the credentials ({status} {message})",
                status = source.status_code,
                message = source.message
            )
        } else {
            format!(
                "{operation} failed with status {status}: {message}",
                status = source.status_code,
                message = source.message
            )
        }
    } else if is_network_error(error) {
        format!("{operation} failed: network error talking to GitHub: {error}")
    } else {
        format!("{operation} failed: {error}")
    };

    ReviewError::SourceUnavailable {
        platform: PlatformKind::GitHub.to_string(),
        message,
    }
}
