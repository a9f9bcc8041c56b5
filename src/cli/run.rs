//! Review session on the process's stdio.

use std::env;
use std::io::{self, BufReader};
use std::path::Path;
use std::sync::Arc;

use reviewprompt::github::resolve_token;
use reviewprompt::platform::read_remote_url;
use reviewprompt::{
    CommandRunner, GitHubRepository, LineSelector, NumberSelector, OctocrabGateway,
    PlatformContext, PlatformKind, ReviewAggregator, ReviewError, ReviewPromptConfig,
    ReviewSource, RunOutcome, StructuredSource, SystemCommandRunner, TextSource, classify_remote,
    run_review,
};

/// Runs one review session for the repository in the current directory.
///
/// # Errors
///
/// Returns the first [`ReviewError`] raised while discovering the remote,
/// listing reviews, selecting, fetching the diff or writing the prompt.
pub async fn run(config: &ReviewPromptConfig) -> Result<RunOutcome, ReviewError> {
    config.validate()?;

    let runner: Arc<dyn CommandRunner> = Arc::new(SystemCommandRunner);
    let context = resolve_context(config, &env::current_dir()?)?;
    let source = build_source(config, &context, runner).await?;
    let aggregator = ReviewAggregator::new(context, source);

    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    if let Some(number) = config.selected_number() {
        let mut selector = NumberSelector::new(number);
        run_review(&aggregator, &mut selector, &mut stdout, &mut stderr).await
    } else {
        let mut selector = LineSelector::new(BufReader::new(io::stdin()), io::stderr());
        run_review(&aggregator, &mut selector, &mut stdout, &mut stderr).await
    }
}

/// Classifies the configured remote URL, or the URL of the configured remote
/// of the repository containing `working_dir`.
///
/// # Errors
///
/// Returns [`ReviewError::RemoteDiscovery`] when the remote cannot be read
/// and the classification errors for URLs that cannot be classified.
pub fn resolve_context(
    config: &ReviewPromptConfig,
    working_dir: &Path,
) -> Result<PlatformContext, ReviewError> {
    let url = match config.remote_url() {
        Some(url) => url.to_owned(),
        None => read_remote_url(working_dir, config.remote_name())?,
    };

    let classification = classify_remote(&url)?;
    let context = PlatformContext::from_classification(classification);
    tracing::debug!(
        platform = %context.kind(),
        repo = context.repo_path(),
        "classified remote"
    );
    Ok(context)
}

/// Builds the review source matching the detected platform.
///
/// # Errors
///
/// Returns [`ReviewError::MissingToken`] when GitHub is detected and no token
/// can be resolved, or [`ReviewError::Configuration`] when the GitHub client
/// cannot be configured.
pub async fn build_source(
    config: &ReviewPromptConfig,
    context: &PlatformContext,
    runner: Arc<dyn CommandRunner>,
) -> Result<ReviewSource, ReviewError> {
    match context.kind() {
        PlatformKind::GitHub => {
            let token = resolve_token(config.token(), runner.as_ref(), config.gh_command()).await?;
            let repository = GitHubRepository::from_context(context, config.github_api_base())?;
            let gateway = OctocrabGateway::for_token(&token, &repository)?;
            Ok(ReviewSource::Structured(StructuredSource::new(
                Box::new(gateway),
                runner,
                repository,
                config.gh_command(),
            )))
        }
        PlatformKind::GitLab => Ok(ReviewSource::Text(TextSource::new(
            runner,
            context.repo_path(),
            config.glab_command(),
        ))),
    }
}
