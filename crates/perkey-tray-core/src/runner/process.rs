use crate::{
    CoreError,
    lighting::CommandLine,
    runner::{ExecutionResult, RunOutcome},
};

use std::{
    process::{Command, Stdio},
    time::Instant,
};

use tracing::{debug, instrument, warn};

/// Executes command lines and normalizes the outcome.
///
/// Implementations block the calling thread until the command finishes and
/// never fail: every problem is folded into the returned [`RunOutcome`].
pub trait CommandRunner: Send + Sync {
    /// Run `command` to completion and classify the result.
    fn execute(&self, command: &CommandLine) -> RunOutcome;

    /// Run `command` and return stdout on success, stderr on a non-zero
    /// exit, or the spawn error description.
    fn run(&self, command: &CommandLine) -> String {
        self.execute(command).into_report()
    }

    /// Like [`CommandRunner::run`] for a textual command line, tokenized by
    /// [`CommandLine::parse`]. A line that cannot be tokenized returns the
    /// tokenizer's description instead of running anything.
    fn run_line(&self, line: &str) -> String {
        match CommandLine::parse(line) {
            Ok(command) => self.run(&command),
            Err(CoreError::InvalidCommandLine { reason, .. }) => reason,
            Err(e) => e.to_string(),
        }
    }
}

/// Runs commands as child processes of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    #[instrument(skip(self), fields(command = %command))]
    fn execute(&self, command: &CommandLine) -> RunOutcome {
        let start = Instant::now();

        let output = Command::new(command.program())
            .args(command.arguments())
            .stdin(Stdio::null())
            .output();

        let outcome = match output {
            Ok(output) => RunOutcome::from_result(ExecutionResult::from(output)),
            Err(e) => RunOutcome::SpawnFailed {
                reason: format!("Failed to execute '{}': {}", command.program(), e),
            },
        };

        let elapsed_ms = start.elapsed().as_millis();
        match &outcome {
            RunOutcome::Succeeded(_) => debug!(elapsed_ms, "Command succeeded"),
            RunOutcome::Failed(result) => warn!(
                status = ?result.status,
                stderr = %result.stderr.trim_end(),
                elapsed_ms,
                "Command exited with failure"
            ),
            RunOutcome::SpawnFailed { reason } => warn!(%reason, "Command could not be spawned"),
        }

        outcome
    }
}
