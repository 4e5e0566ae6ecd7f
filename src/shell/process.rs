//! External process requests.

use std::fmt;
use std::process::{Command, ExitStatus, Stdio};

use crate::alias::words;
use crate::error::{HubbubError, Result};

/// How a finished child process terminated.
///
/// This is independent of the host's wait-status representation: the only
/// thing kept is the real exit code, if the child produced one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionOutcome {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,
}

impl ExecutionOutcome {
    /// A child that exited with `code`.
    pub fn exited(code: i32) -> Self {
        Self {
            exit_code: Some(code),
        }
    }

    /// A child that terminated without an exit code.
    pub fn killed() -> Self {
        Self { exit_code: None }
    }

    /// Whether the child exited with code 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    fn from_status(status: ExitStatus) -> Self {
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                tracing::debug!("child terminated by signal {}", signal);
            }
        }

        Self {
            exit_code: status.code(),
        }
    }
}

/// Anything the queue executor can run.
pub trait Process: fmt::Display {
    /// Program followed by its arguments.
    fn argv(&self) -> Vec<String>;

    /// Run to completion with inherited standard streams.
    fn run(&self) -> Result<ExecutionOutcome>;
}

/// An external program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRequest {
    program: String,
    args: Vec<String>,
}

impl ProcessRequest {
    /// Create a request for `program` with no arguments.
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

    /// The program to run.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The arguments after the program.
    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    /// Run with stdout captured and stderr discarded.
    ///
    /// Returns the outcome together with the captured stdout.
    pub fn capture(&self) -> Result<(ExecutionOutcome, String)> {
        tracing::debug!("capturing: {}", self);
        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|source| HubbubError::Spawn {
                command: self.to_string(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        Ok((ExecutionOutcome::from_status(output.status), stdout))
    }
}

impl Process for ProcessRequest {
    fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }

    fn run(&self) -> Result<ExecutionOutcome> {
        tracing::debug!("running: {}", self);
        let status = Command::new(&self.program)
            .args(&self.args)
            .status()
            .map_err(|source| HubbubError::Spawn {
                command: self.to_string(),
                source,
            })?;

        Ok(ExecutionOutcome::from_status(status))
    }
}

impl fmt::Display for ProcessRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&words::join(&self.argv()))
    }
}
