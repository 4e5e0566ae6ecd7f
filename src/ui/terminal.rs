//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, HubbubTheme, UserInterface};

/// UI writing messages to stdout and diagnostics to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: HubbubTheme,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            HubbubTheme::new()
        } else {
            HubbubTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn command(&mut self, line: &str) {
        writeln!(self.err, "{}", self.theme.format_command(line)).ok();
    }

    fn is_interactive(&self) -> bool {
        self.out.is_term()
    }
}
