//! Visual theme and styling.

use console::Style;

/// Hubbub's visual theme.
#[derive(Debug, Clone)]
pub struct HubbubTheme {
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for traced command lines (cyan).
    pub command: Style,
}

impl Default for HubbubTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl HubbubTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            command: Style::new().cyan(),
        }
    }

    /// Create a theme without colors (for non-TTY or NO_COLOR).
    pub fn plain() -> Self {
        Self {
            warning: Style::new(),
            error: Style::new(),
            command: Style::new(),
        }
    }

    /// Format a warning message.
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(msg))
    }

    /// Format an error message.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("error: {}", msg)))
    }

    /// Format a traced command line.
    pub fn format_command(&self, line: &str) -> String {
        format!("{}", self.command.apply_to(format!("$ {}", line)))
    }
}

/// Check if colors should be enabled on standard error.
///
/// Everything hubbub styles goes to stderr, so that is the stream checked.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stderr().is_term()
}
