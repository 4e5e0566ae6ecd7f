//! `alias`: how to make `git` run hubbub.

use clap::Parser;

use crate::cli::registry::{Command, CommandResult};
use crate::cli::Args;
use crate::error::HubbubError;
use crate::shell::{detect_shell, ShellType};
use crate::ui::UserInterface;

use super::parse_params;

/// Arguments for the `alias` command.
#[derive(Debug, Parser)]
#[command(
    name = "alias",
    bin_name = "hubbub alias",
    about = "Show how to alias git to hubbub"
)]
struct AliasArgs {
    /// Print only the line to evaluate
    #[arg(short = 's')]
    script: bool,

    /// Shell to generate for (defaults to $SHELL)
    shell: Option<String>,
}

pub struct AliasCommand;

impl AliasCommand {
    fn script(shell: ShellType) -> Option<&'static str> {
        match shell {
            ShellType::Sh | ShellType::Bash | ShellType::Zsh | ShellType::Ksh | ShellType::Fish => {
                Some("alias git=hubbub")
            }
            ShellType::PowerShell => Some("Set-Alias git hubbub"),
            ShellType::Unknown => None,
        }
    }

    fn instructions(shell: ShellType) -> String {
        let profile = shell
            .profile()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "your shell profile".to_string());

        let line = match shell {
            ShellType::Fish => "hubbub alias -s | source".to_string(),
            ShellType::PowerShell => "Invoke-Expression (hubbub alias -s powershell)".to_string(),
            _ => format!("eval \"$(hubbub alias -s {})\"", shell.name()),
        };

        format!("# Wrap git with hubbub by adding this to {}:\n\n{}", profile, line)
    }
}

impl Command for AliasCommand {
    fn name(&self) -> &str {
        "alias"
    }

    fn about(&self) -> &str {
        "Show how to alias git to hubbub"
    }

    fn run(&self, args: &mut Args, ui: &mut dyn UserInterface) -> CommandResult {
        let parsed: AliasArgs = parse_params(args, ui)?;
        args.no_forward();

        let shell = match parsed.shell.as_deref() {
            Some(name) => ShellType::from_executable(name),
            None => detect_shell(),
        };
        if Self::script(shell).is_none() {
            let name = parsed.shell.unwrap_or_else(|| shell.name().to_string());
            return Err(HubbubError::Usage(format!("unsupported shell '{}'", name)).into());
        }

        if parsed.script {
            if let Some(line) = Self::script(shell) {
                ui.message(line);
            }
        } else {
            ui.message(&Self::instructions(shell));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::registry::CommandError;
    use crate::ui::MockUI;

    fn alias(argv: &[&str]) -> (Args, MockUI, CommandResult) {
        let mut args = Args::new(argv.iter().copied());
        let mut ui = MockUI::new();
        let result = AliasCommand.run(&mut args, &mut ui);
        (args, ui, result)
    }

    #[test]
    fn script_for_posix_shells() {
        for shell in ["sh", "bash", "zsh", "/usr/bin/fish"] {
            let (args, ui, result) = alias(&["alias", "-s", shell]);
            assert!(result.is_ok());
            assert_eq!(ui.messages(), ["alias git=hubbub"]);
            assert!(args.commands().is_empty());
        }
    }

    #[test]
    fn script_for_powershell() {
        let (_, ui, result) = alias(&["alias", "-s", "pwsh"]);
        assert!(result.is_ok());
        assert_eq!(ui.messages(), ["Set-Alias git hubbub"]);
    }

    #[test]
    fn instructions_name_the_eval_line() {
        let (_, ui, result) = alias(&["alias", "bash"]);
        assert!(result.is_ok());
        assert!(ui.has_message("eval \"$(hubbub alias -s bash)\""));
    }

    #[test]
    fn fish_instructions_pipe_to_source() {
        let (_, ui, _) = alias(&["alias", "fish"]);
        assert!(ui.has_message("hubbub alias -s | source"));
    }

    #[test]
    fn unknown_shell_is_a_usage_error() {
        let (args, ui, result) = alias(&["alias", "-s", "tcsh"]);
        match result {
            Err(CommandError::Failed(HubbubError::Usage(message))) => {
                assert_eq!(message, "unsupported shell 'tcsh'");
            }
            other => panic!("expected usage error, got {:?}", other),
        }
        assert!(ui.is_silent());
        assert!(args.commands().is_empty());
    }

    #[test]
    fn help_is_shown() {
        let (_, ui, result) = alias(&["alias", "--help"]);
        assert!(matches!(result, Err(CommandError::HelpRequested)));
        assert!(ui.has_message("Usage: hubbub alias"));
    }
}
