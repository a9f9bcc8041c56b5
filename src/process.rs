//! External command execution.
//!
//! The platform CLIs (`gh`, `glab`) are invoked through the [`CommandRunner`]
//! trait so sources can be exercised without spawning real processes.

use std::io;

use async_trait::async_trait;
use tokio::process::Command;

/// Captured result of a finished external command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, or `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    /// Standard output decoded as UTF-8 (lossily).
    pub stdout: String,
    /// Standard error decoded as UTF-8 (lossily).
    pub stderr: String,
}

impl CommandOutput {
    /// Builds a successful output with the given stdout.
    #[must_use]
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Builds a failed output with the given exit code and stderr.
    #[must_use]
    pub fn failure(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self {
            exit_code: Some(exit_code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Returns true when the command exited with status zero.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        matches!(self.exit_code, Some(0))
    }

    /// Describes a failed run for error messages.
    #[must_use]
    pub fn failure_detail(&self) -> String {
        let status = self
            .exit_code
            .map_or_else(|| "terminated by signal".to_owned(), |code| format!("exit status {code}"));
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            status
        } else {
            format!("{status}\nstderr: {stderr}")
        }
    }
}

/// Runs an external program to completion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs `program` with `args`, capturing stdout and stderr.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the process cannot be spawned.
    async fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput>;
}

/// Runs commands as child processes of the current process.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

#[async_trait]
impl CommandRunner for SystemCommandRunner {
    async fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
        tracing::debug!(program, ?args, "running external command");

        // `output()` drains both pipes and waits for exit before returning.
        let output = Command::new(program).args(args).output().await?;

        Ok(CommandOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::CommandOutput;

    #[test]
    fn failure_detail_includes_trimmed_stderr() {
        let output = CommandOutput::failure(1, "  no such merge request\n");
        assert_eq!(
            output.failure_detail(),
            "exit status 1\nstderr: no such merge request"
        );
        assert!(!output.succeeded());
    }

    #[test]
    fn failure_detail_without_stderr_reports_status_only() {
        let output = CommandOutput {
            exit_code: None,
            ..CommandOutput::default()
        };
        assert_eq!(output.failure_detail(), "terminated by signal");
    }

    #[test]
    fn success_reports_zero_exit() {
        assert!(CommandOutput::success("diff --git").succeeded());
    }
}
