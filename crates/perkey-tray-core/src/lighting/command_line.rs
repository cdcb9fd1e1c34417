use crate::{CoreError, CoreResult};

use std::{fmt, panic::Location};

use error_location::ErrorLocation;

/// A program and its argument vector, spawned directly without a shell.
///
/// Arguments are never re-parsed, so values containing spaces or shell
/// metacharacters reach the program unchanged. `Display` joins the parts
/// with single spaces for logs and tests.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    /// Start a command line for `program` with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Tokenize a textual command line with POSIX shell word rules.
    ///
    /// Single and double quotes group words and backslashes escape, but
    /// nothing is expanded: no variables, globs, pipes or redirections.
    /// Fails on unbalanced quotes and on a line with no words.
    #[track_caller]
    pub fn parse(line: &str) -> CoreResult<Self> {
        let words = shell_words::split(line).map_err(|e| CoreError::InvalidCommandLine {
            reason: format!("Cannot parse command line {:?}: {}", line, e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let mut words = words.into_iter();
        let program = words.next().ok_or_else(|| CoreError::InvalidCommandLine {
            reason: "Cannot run an empty command line".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self::new(program).args(words))
    }

    /// The program to spawn.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed to the program.
    pub fn arguments(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
