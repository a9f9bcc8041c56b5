//! Review-prompt CLI entrypoint.

mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use reviewprompt::{ReviewError, ReviewPromptConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ReviewError> {
    let config = load_config()?;
    cli::logging::init(config.verbose);

    let outcome = cli::run::run(&config).await?;
    tracing::debug!(?outcome, "run finished");
    Ok(())
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ReviewError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<ReviewPromptConfig, ReviewError> {
    ReviewPromptConfig::load().map_err(|error| ReviewError::Configuration {
        message: error.to_string(),
    })
}
