//! Shared test utilities.

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reviewprompt::{CommandOutput, CommandRunner};

pub mod runtime;

/// A command runner that records invocations and replays scripted outputs.
///
/// Once the script is exhausted every further call fails to spawn.
#[derive(Clone, Default)]
pub struct ScriptedRunner {
    calls: Arc<Mutex<Vec<String>>>,
    responses: Arc<Mutex<VecDeque<CommandOutput>>>,
}

impl ScriptedRunner {
    pub fn new(responses: impl IntoIterator<Item = CommandOutput>) -> Self {
        Self {
            calls: Arc::default(),
            responses: Arc::new(Mutex::new(responses.into_iter().collect())),
        }
    }

    /// Returns the command lines run so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
        let line = std::iter::once(program)
            .chain(args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ");
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(line);
        }

        self.responses
            .lock()
            .ok()
            .and_then(|mut responses| responses.pop_front())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("{program}: not scripted")))
    }
}
