//! Token resolution for the GitHub REST API.
//!
//! Authentication is owned by the `gh` CLI: when no token is configured the
//! one `gh` is logged in with is reused.

use crate::error::ReviewError;
use crate::process::CommandRunner;

use super::locator::GitHubToken;

/// Resolves the GitHub token from configuration or `gh auth token`.
///
/// # Errors
///
/// Returns [`ReviewError::MissingToken`] when no token is configured and
/// `gh auth token` fails or prints nothing.
pub async fn resolve_token(
    configured: Option<&str>,
    runner: &dyn CommandRunner,
    gh_program: &str,
) -> Result<GitHubToken, ReviewError> {
    if let Some(token) = configured.filter(|token| !token.trim().is_empty()) {
        return GitHubToken::new(token);
    }

    let args = ["auth".to_owned(), "token".to_owned()];
    let output = runner.run(gh_program, &args).await.map_err(|error| {
        tracing::debug!("failed to run `{gh_program} auth token`: {error}");
        ReviewError::MissingToken
    })?;

    if !output.succeeded() {
        tracing::debug!(
            "`{gh_program} auth token` failed: {}",
            output.failure_detail()
        );
        return Err(ReviewError::MissingToken);
    }

    GitHubToken::new(output.stdout)
}

#[cfg(test)]
mod tests {
    use std::io;

    use mockall::predicate::eq;

    use super::resolve_token;
    use crate::error::ReviewError;
    use crate::process::{CommandOutput, MockCommandRunner};

    #[tokio::test]
    async fn configured_token_skips_gh() {
        let runner = MockCommandRunner::new();

        let token = resolve_token(Some("ghp_configured"), &runner, "gh")
            .await
            .expect("token should resolve");

        assert_eq!(token.value(), "ghp_configured");
    }

    #[tokio::test]
    async fn falls_back_to_gh_auth_token() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .with(eq("gh"), eq(vec!["auth".to_owned(), "token".to_owned()]))
            .times(1)
            .returning(|_, _| Ok(CommandOutput::success("gho_from_cli\n")));

        let token = resolve_token(None, &runner, "gh")
            .await
            .expect("token should resolve");

        assert_eq!(token.value(), "gho_from_cli");
    }

    #[tokio::test]
    async fn blank_configured_token_falls_back_to_gh() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .times(1)
            .returning(|_, _| Ok(CommandOutput::success("gho_from_cli")));

        let token = resolve_token(Some("   "), &runner, "gh")
            .await
            .expect("token should resolve");

        assert_eq!(token.value(), "gho_from_cli");
    }

    #[tokio::test]
    async fn logged_out_gh_reports_missing_token() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .returning(|_, _| Ok(CommandOutput::failure(1, "no oauth token found")));

        let result = resolve_token(None, &runner, "gh").await;
        assert_eq!(result, Err(ReviewError::MissingToken));
    }

    #[tokio::test]
    async fn missing_gh_binary_reports_missing_token() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .returning(|_, _| Err(io::Error::new(io::ErrorKind::NotFound, "gh not found")));

        let result = resolve_token(None, &runner, "gh").await;
        assert_eq!(result, Err(ReviewError::MissingToken));
    }
}
