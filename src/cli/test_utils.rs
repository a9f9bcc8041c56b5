//! Shared test utilities for CLI tests.

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reviewprompt::{CommandOutput, CommandRunner};

/// A command runner that records invocations and replays scripted outputs.
#[derive(Clone, Default)]
pub struct ScriptedRunner {
    /// Rendered command lines, in call order.
    pub captured: Arc<Mutex<Vec<String>>>,
    /// Outputs to return, consumed front to back.
    pub responses: Arc<Mutex<VecDeque<CommandOutput>>>,
}

impl ScriptedRunner {
    /// Creates a runner that replays `responses` in order.
    pub fn new(responses: Vec<CommandOutput>) -> Self {
        Self {
            captured: Arc::default(),
            responses: Arc::new(Mutex::new(responses.into())),
        }
    }

    /// Returns the command lines run so far.
    pub fn calls(&self) -> Vec<String> {
        self.captured
            .lock()
            .expect("captured mutex should be available")
            .clone()
    }
}

/// Successful output with `stdout`, or a failed one when `stdout` is `None`.
pub fn response(stdout: Option<&str>) -> CommandOutput {
    stdout.map_or_else(
        || CommandOutput::failure(1, "not logged in"),
        |text| CommandOutput::success(text),
    )
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
        let mut line = program.to_owned();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        self.captured
            .lock()
            .expect("captured mutex should be available")
            .push(line);

        Ok(self
            .responses
            .lock()
            .expect("response mutex should be available")
            .pop_front()
            .expect("a scripted response should remain"))
    }
}
