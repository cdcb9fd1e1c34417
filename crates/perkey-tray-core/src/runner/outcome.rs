use std::process::Output;

/// Captured result of a process that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Exit code, or `None` if the process was terminated by a signal.
    pub status: Option<i32>,
    /// Standard output, decoded lossily as UTF-8.
    pub stdout: String,
    /// Standard error, decoded lossily as UTF-8.
    pub stderr: String,
}

impl ExecutionResult {
    /// Whether the process exited with status 0.
    pub fn exited_cleanly(&self) -> bool {
        self.status == Some(0)
    }
}

impl From<Output> for ExecutionResult {
    fn from(output: Output) -> Self {
        Self {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Disposition of a single command invocation.
///
/// Execution failures are values, never errors: callers that only want the
/// text use [`RunOutcome::report`], callers that care about the outcome
/// match on the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Process exited with status 0.
    Succeeded(ExecutionResult),
    /// Process ran but exited non-zero or was killed.
    Failed(ExecutionResult),
    /// Process could not be started at all.
    SpawnFailed {
        /// Description of the spawn error.
        reason: String,
    },
}

impl RunOutcome {
    /// Classify a finished process by its exit status.
    pub fn from_result(result: ExecutionResult) -> Self {
        if result.exited_cleanly() {
            RunOutcome::Succeeded(result)
        } else {
            RunOutcome::Failed(result)
        }
    }

    /// Whether the command ran and exited with status 0.
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Succeeded(_))
    }

    /// Exit status, if the process ran to completion.
    pub fn status(&self) -> Option<i32> {
        match self {
            RunOutcome::Succeeded(result) | RunOutcome::Failed(result) => result.status,
            RunOutcome::SpawnFailed { .. } => None,
        }
    }

    /// Single textual result: stdout on success, stderr on a non-zero
    /// exit, the error description when spawning failed.
    pub fn report(&self) -> &str {
        match self {
            RunOutcome::Succeeded(result) => &result.stdout,
            RunOutcome::Failed(result) => &result.stderr,
            RunOutcome::SpawnFailed { reason } => reason,
        }
    }

    /// Owned form of [`RunOutcome::report`].
    pub fn into_report(self) -> String {
        match self {
            RunOutcome::Succeeded(result) => result.stdout,
            RunOutcome::Failed(result) => result.stderr,
            RunOutcome::SpawnFailed { reason } => reason,
        }
    }
}
