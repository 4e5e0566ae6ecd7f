//! Error types for hubbub operations.
//!
//! This module defines [`HubbubError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Alias failures (`EmptyAlias`, `ShellAlias`, `MalformedAlias`,
//!   `AliasLookup`) never leave the alias expander; it logs and falls back
//! - `CommandFailed` carries the child's real exit code so the process can
//!   exit with the same status git would have

use thiserror::Error;

use crate::alias::words::SplitError;

/// Core error type for hubbub operations.
#[derive(Debug, Error)]
pub enum HubbubError {
    /// The alias is defined but has no words.
    #[error("alias '{name}' can't be empty")]
    EmptyAlias { name: String },

    /// The alias runs a shell command (`!...`) and can't be rewritten into argv.
    #[error("alias '{name}' starts with '!' and can't be split")]
    ShellAlias { name: String },

    /// The alias value is not valid shell syntax.
    #[error("malformed alias '{name}': {source}")]
    MalformedAlias {
        name: String,
        #[source]
        source: SplitError,
    },

    /// Reading the alias definition from git failed.
    #[error("failed to look up alias '{name}': {message}")]
    AliasLookup { name: String, message: String },

    /// A child process exited unsuccessfully.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// A child process could not be started.
    #[error("Failed to run '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// A builtin command was invoked with arguments it can't accept.
    #[error("{0}")]
    Usage(String),

    /// The pre-dispatch update check failed.
    #[error("Update check failed: {message}")]
    UpdateCheck { message: String },
}

impl HubbubError {
    /// The real exit code of the child process behind this error, if any.
    pub fn child_exit_code(&self) -> Option<i32> {
        match self {
            HubbubError::CommandFailed { code, .. } => *code,
            _ => None,
        }
    }

    /// Whether the failure came from a child that already reported it.
    pub fn is_child_failure(&self) -> bool {
        matches!(self, HubbubError::CommandFailed { .. })
    }
}

/// Result type alias for hubbub operations.
pub type Result<T> = std::result::Result<T, HubbubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_alias_displays_name() {
        let err = HubbubError::EmptyAlias { name: "co".into() };
        assert!(err.to_string().contains("'co'"));
    }

    #[test]
    fn malformed_alias_includes_cause() {
        let err = HubbubError::MalformedAlias {
            name: "st".into(),
            source: SplitError::UnterminatedSingleQuote,
        };
        let msg = err.to_string();
        assert!(msg.contains("st"));
        assert!(msg.contains("single quote"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = HubbubError::CommandFailed {
            command: "git push origin".into(),
            code: Some(128),
        };
        let msg = err.to_string();
        assert!(msg.contains("git push origin"));
        assert!(msg.contains("128"));
    }

    #[test]
    fn child_exit_code_only_for_command_failures() {
        let failed = HubbubError::CommandFailed {
            command: "git".into(),
            code: Some(3),
        };
        assert_eq!(failed.child_exit_code(), Some(3));
        assert!(failed.is_child_failure());

        let usage = HubbubError::Usage("bad".into());
        assert_eq!(usage.child_exit_code(), None);
        assert!(!usage.is_child_failure());
    }

    #[test]
    fn spawn_error_keeps_io_source() {
        use std::error::Error as _;

        let err = HubbubError::Spawn {
            command: "git status".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("git status"));
        assert_eq!(err.source().unwrap().to_string(), "no such file");
    }
}
