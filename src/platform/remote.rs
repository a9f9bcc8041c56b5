//! Git remote URL classification.
//!
//! GitHub and GitLab disagree on path shape: GitHub repositories always live
//! at `owner/repo`, while GitLab projects may sit under any number of nested
//! groups. The classifier therefore decides the platform before it decides
//! how many path segments belong to the namespace.

use crate::error::ReviewError;

use super::PlatformKind;

/// Result of classifying a git remote URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteClassification {
    platform: PlatformKind,
    namespace: String,
    repository: String,
}

impl RemoteClassification {
    /// Creates a classification from its parts.
    #[must_use]
    pub fn new(
        platform: PlatformKind,
        namespace: impl Into<String>,
        repository: impl Into<String>,
    ) -> Self {
        Self {
            platform,
            namespace: namespace.into(),
            repository: repository.into(),
        }
    }

    /// Detected hosting platform.
    #[must_use]
    pub const fn platform(&self) -> PlatformKind {
        self.platform
    }

    /// GitHub owner, or the full GitLab project path.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// GitHub repository name; empty for GitLab.
    #[must_use]
    pub fn repository(&self) -> &str {
        &self.repository
    }
}

/// Detects the hosting platform from a raw remote URL.
///
/// The check is a case-insensitive substring test; GitHub is tried first.
///
/// # Errors
///
/// Returns [`ReviewError::UnsupportedPlatform`] when neither platform marker
/// appears in the URL.
pub fn detect_platform(url: &str) -> Result<PlatformKind, ReviewError> {
    let lowered = url.to_lowercase();
    [PlatformKind::GitHub, PlatformKind::GitLab]
        .into_iter()
        .find(|kind| lowered.contains(kind.marker()))
        .ok_or_else(|| ReviewError::UnsupportedPlatform {
            url: url.trim().to_owned(),
        })
}

/// Classifies a git remote URL into platform, namespace and repository.
///
/// Supported shapes:
/// - SCP-style SSH: `git@github.com:owner/repo.git`
/// - URL-style: `https://gitlab.com/group/sub/project.git`, `ssh://`,
///   `http://`, `git://`
///
/// # Errors
///
/// Returns [`ReviewError::UnsupportedPlatform`] when no platform marker is
/// found and [`ReviewError::MalformedRemote`] when fewer than three path
/// segments remain after normalisation.
pub fn classify_remote(url: &str) -> Result<RemoteClassification, ReviewError> {
    let platform = detect_platform(url)?;
    let normalised = normalise_remote(url);
    let segments: Vec<&str> = normalised.split('/').collect();

    let malformed = || ReviewError::MalformedRemote {
        url: url.trim().to_owned(),
    };

    let [host, rest @ ..] = segments.as_slice() else {
        return Err(malformed());
    };
    if rest.len() < 2 {
        return Err(malformed());
    }

    if host.to_lowercase().contains(PlatformKind::GitHub.marker()) {
        let (Some(owner), Some(repository)) = (rest.first(), rest.get(1)) else {
            return Err(malformed());
        };
        if owner.is_empty() || repository.is_empty() {
            return Err(malformed());
        }
        return Ok(RemoteClassification::new(platform, *owner, *repository));
    }

    let namespace = rest.join("/");
    Ok(RemoteClassification::new(platform, namespace, String::new()))
}

/// Rewrites a remote into `host/path` form without scheme, user or suffix.
fn normalise_remote(url: &str) -> String {
    let trimmed = url.trim();

    let slash_delimited = match trimmed.split_once("://") {
        Some((_scheme, rest)) => strip_user(rest, '/').to_owned(),
        None => strip_user(trimmed, ':').replacen(':', "/", 1),
    };

    let without_slash = slash_delimited.trim_end_matches('/');
    without_slash
        .strip_suffix(".git")
        .unwrap_or(without_slash)
        .to_owned()
}

/// Drops a `user@` prefix that appears before the first `host_end`.
fn strip_user(value: &str, host_end: char) -> &str {
    let host_part = value.split(host_end).next().unwrap_or(value);
    match host_part.split_once('@') {
        Some((user, _host)) => value.get(user.len().saturating_add(1)..).unwrap_or(value),
        None => value,
    }
}
