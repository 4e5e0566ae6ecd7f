//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all output for
//! later assertion.

use super::UserInterface;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    interactive: bool,
    messages: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    commands: Vec<String>,
}

impl MockUI {
    /// Create a new non-interactive MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the UI reports an attached terminal.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Lines printed to standard output.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Warnings printed.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Errors printed.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Traced command lines.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Check if any message contains `msg`.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if any warning contains `msg`.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if any error contains `msg`.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check that nothing at all was printed.
    pub fn is_silent(&self) -> bool {
        self.messages.is_empty()
            && self.warnings.is_empty()
            && self.errors.is_empty()
            && self.commands.is_empty()
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn command(&mut self, line: &str) {
        self.commands.push(line.to_string());
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}
