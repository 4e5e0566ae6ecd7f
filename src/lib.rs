//! Hubbub - a git wrapper with a few extra commands.
//!
//! Every invocation of `hubbub` is either handled by a builtin command or
//! passed to git unchanged. Builtins don't spawn processes themselves; they
//! rewrite the invocation and queue extra git commands, which lets `--noop`
//! show exactly what would run.
//!
//! # Modules
//!
//! - [`alias`] - Git alias expansion and shell-word splitting
//! - [`cli`] - Invocation model, builtin commands and dispatch
//! - [`config`] - Settings read from the environment
//! - [`error`] - Error types and result aliases
//! - [`shell`] - Process execution and exit-code handling
//! - [`ui`] - Terminal output
//! - [`updates`] - Version metadata and the update notice
//!
//! # Example
//!
//! ```
//! use hubbub::cli::Args;
//!
//! let args = Args::new(["-C", "repo", "--noop", "push", "origin"]);
//! assert_eq!(args.global_flags(), ["-C", "repo"]);
//! assert_eq!(args.command(), "push");
//! assert!(args.is_noop());
//! ```

pub mod alias;
pub mod cli;
pub mod config;
pub mod error;
pub mod shell;
pub mod ui;
pub mod updates;

pub use error::{HubbubError, Result};
