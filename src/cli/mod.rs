//! Command-line front end.
//!
//! # Architecture
//!
//! - [`args`] - The invocation model: global flags, command, params and the
//!   process queue builtins fill in
//! - [`registry`] - The [`Command`] trait and the name lookup table
//! - [`commands`] - Builtin command implementations
//! - [`dispatcher`] - Routes an invocation to a builtin or to git
//! - [`usage`] - Text shown when no command is given

pub mod args;
pub mod commands;
pub mod dispatcher;
pub mod registry;
pub mod usage;

pub use args::Args;
pub use commands::builtin_registry;
pub use dispatcher::Dispatcher;
pub use registry::{Command, CommandError, CommandRegistry, CommandResult};
pub use usage::usage;
