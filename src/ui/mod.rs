//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing to the real stdout/stderr
//! - [`MockUI`] capturing everything for assertions in tests
//!
//! Anything hubbub prints itself goes through this trait. Output of the child
//! processes never does: children inherit the terminal directly.
//!
//! # Example
//!
//! ```
//! use hubbub::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("hubbub version 0.3.0");
//! assert!(ui.has_message("0.3.0"));
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, HubbubTheme};

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Print a line to standard output.
    fn message(&mut self, msg: &str);

    /// Print a warning to standard error.
    fn warning(&mut self, msg: &str);

    /// Print an error to standard error.
    fn error(&mut self, msg: &str);

    /// Trace a command line about to be spawned (standard error).
    fn command(&mut self, line: &str);

    /// Check if standard output is attached to a terminal.
    fn is_interactive(&self) -> bool;
}
