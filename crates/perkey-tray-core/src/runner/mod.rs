mod outcome;
mod process;

pub use {
    outcome::{ExecutionResult, RunOutcome},
    process::{CommandRunner, ProcessRunner},
};
