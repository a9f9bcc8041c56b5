//! Repository identity and token wrappers for the GitHub REST API.

use url::Url;

use crate::error::ReviewError;
use crate::platform::{PlatformContext, PlatformKind};

/// Public GitHub REST API base.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    fn new(value: &str) -> Result<Self, ReviewError> {
        if value.is_empty() {
            return Err(ReviewError::Configuration {
                message: "GitHub repository owner must not be empty".to_owned(),
            });
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    fn new(value: &str) -> Result<Self, ReviewError> {
        if value.is_empty() {
            return Err(ReviewError::Configuration {
                message: "GitHub repository name must not be empty".to_owned(),
            });
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// GitHub token wrapper enforcing presence.
#[derive(Clone, PartialEq, Eq)]
pub struct GitHubToken(String);

impl GitHubToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::MissingToken`] when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, ReviewError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ReviewError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for GitHubToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl std::fmt::Debug for GitHubToken {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("GitHubToken(..)")
    }
}

/// A GitHub repository together with the API base used to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubRepository {
    api_base: Url,
    owner: RepositoryOwner,
    name: RepositoryName,
}

impl GitHubRepository {
    /// Creates a repository on the given API base.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Configuration`] when owner or name is empty or
    /// the API base is not a valid URL.
    pub fn new(owner: &str, name: &str, api_base: &str) -> Result<Self, ReviewError> {
        let parsed_base = Url::parse(api_base).map_err(|error| ReviewError::Configuration {
            message: format!("invalid GitHub API base '{api_base}': {error}"),
        })?;

        Ok(Self {
            api_base: parsed_base,
            owner: RepositoryOwner::new(owner)?,
            name: RepositoryName::new(name)?,
        })
    }

    /// Builds the repository from a GitHub platform context.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Configuration`] when the context is not a
    /// GitHub context or lacks an owner or repository name.
    pub fn from_context(context: &PlatformContext, api_base: &str) -> Result<Self, ReviewError> {
        if context.kind() != PlatformKind::GitHub {
            return Err(ReviewError::Configuration {
                message: format!(
                    "cannot list GitHub pull requests for a {} project",
                    context.kind()
                ),
            });
        }

        let classification = context.classification();
        Self::new(
            classification.namespace(),
            classification.repository(),
            api_base,
        )
    }

    /// API base URL.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn name(&self) -> &RepositoryName {
        &self.name
    }

    /// `owner/repo`, as accepted by `gh --repo`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner.as_str(), self.name.as_str())
    }

    /// Returns the API path for listing pull requests.
    pub(crate) fn pulls_path(&self) -> String {
        format!("/repos/{}/{}/pulls", self.owner.as_str(), self.name.as_str())
    }
}
