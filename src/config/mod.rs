//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.reviewprompt.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `REVIEWPROMPT_REMOTE`,
//!    `REVIEWPROMPT_TOKEN`, and so on
//! 4. **Command-line arguments** – `--remote`/`-r`, `--token`/`-t`, ...
//!
//! # Configuration File
//!
//! ```toml
//! remote = "upstream"
//! github_api_base = "https://github.example.com/api/v3"
//! gh_command = "/usr/local/bin/gh"
//! glab_command = "glab"
//! ```

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ReviewError;
use crate::github::{DEFAULT_API_BASE, DEFAULT_GH_COMMAND};
use crate::gitlab::DEFAULT_GLAB_COMMAND;
use crate::platform::DEFAULT_REMOTE_NAME;
use crate::review::ReviewNumber;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use reviewprompt::ReviewPromptConfig;
///
/// let config = ReviewPromptConfig::load().expect("failed to load configuration");
/// assert_eq!(config.remote_name(), "origin");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "REVIEWPROMPT",
    discovery(
        dotfile_name = ".reviewprompt.toml",
        config_file_name = "reviewprompt.toml",
        app_name = "reviewprompt"
    )
)]
pub struct ReviewPromptConfig {
    /// Name of the git remote to classify.
    ///
    /// Can be provided via:
    /// - CLI: `--remote <NAME>` or `-r <NAME>`
    /// - Environment: `REVIEWPROMPT_REMOTE`
    /// - Config file: `remote = "..."`
    #[ortho_config(cli_short = 'r')]
    pub remote: Option<String>,

    /// Remote URL to classify instead of reading it from the repository.
    ///
    /// Can be provided via:
    /// - CLI: `--remote-url <URL>` or `-u <URL>`
    /// - Environment: `REVIEWPROMPT_REMOTE_URL`
    /// - Config file: `remote_url = "..."`
    #[ortho_config(cli_short = 'u')]
    pub remote_url: Option<String>,

    /// Personal access token for GitHub API authentication.
    ///
    /// When unset, the token `gh auth token` prints is used.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `REVIEWPROMPT_TOKEN`
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Base URL of the GitHub REST API.
    #[ortho_config()]
    pub github_api_base: Option<String>,

    /// Executable used for `gh` commands.
    #[ortho_config()]
    pub gh_command: Option<String>,

    /// Executable used for `glab` commands.
    #[ortho_config()]
    pub glab_command: Option<String>,

    /// Review number to select without showing the menu.
    ///
    /// Can be provided via:
    /// - CLI: `--number <N>` or `-n <N>`
    /// - Environment: `REVIEWPROMPT_NUMBER`
    #[ortho_config(cli_short = 'n')]
    pub number: Option<u64>,

    /// Enables debug-level logging on stderr.
    ///
    /// Note: `REVIEWPROMPT_VERBOSE` is not supported because `ortho_config`
    /// does not load boolean values from the environment.
    #[ortho_config(cli_short = 'v')]
    pub verbose: bool,
}

impl ReviewPromptConfig {
    /// Remote name, defaulting to `origin`.
    #[must_use]
    pub fn remote_name(&self) -> &str {
        non_blank(self.remote.as_deref()).unwrap_or(DEFAULT_REMOTE_NAME)
    }

    /// Explicit remote URL, if one was configured.
    #[must_use]
    pub fn remote_url(&self) -> Option<&str> {
        non_blank(self.remote_url.as_deref())
    }

    /// Configured GitHub token, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        non_blank(self.token.as_deref())
    }

    /// GitHub REST API base URL.
    #[must_use]
    pub fn github_api_base(&self) -> &str {
        non_blank(self.github_api_base.as_deref()).unwrap_or(DEFAULT_API_BASE)
    }

    /// `gh` executable.
    #[must_use]
    pub fn gh_command(&self) -> &str {
        non_blank(self.gh_command.as_deref()).unwrap_or(DEFAULT_GH_COMMAND)
    }

    /// `glab` executable.
    #[must_use]
    pub fn glab_command(&self) -> &str {
        non_blank(self.glab_command.as_deref()).unwrap_or(DEFAULT_GLAB_COMMAND)
    }

    /// Review number chosen up front, if any.
    #[must_use]
    pub fn selected_number(&self) -> Option<ReviewNumber> {
        self.number.map(ReviewNumber::new)
    }

    /// Checks the configuration for values that cannot work.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Configuration`] when the review number is zero
    /// or the API base is not an absolute URL.
    pub fn validate(&self) -> Result<(), ReviewError> {
        if self.number == Some(0) {
            return Err(ReviewError::Configuration {
                message: "review number must be positive (use --number or -n)".to_owned(),
            });
        }

        Url::parse(self.github_api_base()).map_err(|error| ReviewError::Configuration {
            message: format!("invalid github_api_base '{}': {error}", self.github_api_base()),
        })?;

        Ok(())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests;
