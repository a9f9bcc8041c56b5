//! Octocrab client construction.

use http::Uri;
use octocrab::Octocrab;

use crate::error::ReviewError;
use crate::github::locator::GitHubToken;

use super::error_mapping::map_octocrab_error;

/// Builds an authenticated Octocrab client for the given API base.
///
/// # Errors
///
/// Returns [`ReviewError::Configuration`] when the base URI cannot be parsed
/// and [`ReviewError::SourceUnavailable`] when Octocrab fails to construct a
/// client.
pub(super) fn build_octocrab_client(
    token: &GitHubToken,
    api_base: &str,
) -> Result<Octocrab, ReviewError> {
    let base_uri: Uri = api_base
        .parse::<Uri>()
        .map_err(|error| ReviewError::Configuration {
            message: format!("invalid GitHub API base '{api_base}': {error}"),
        })?;

    Octocrab::builder()
        .personal_token(token.as_ref())
        .base_uri(base_uri)
        .map_err(|error| ReviewError::Configuration {
            message: format!("invalid GitHub API base '{api_base}': {error}"),
        })?
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}
