//! `version` and `--version`.

use clap::Parser;

use crate::cli::registry::{Command, CommandResult};
use crate::cli::Args;
use crate::ui::UserInterface;
use crate::updates::VERSION;

use super::parse_params;

/// Arguments for the `version` command.
#[derive(Debug, Parser)]
#[command(
    name = "version",
    bin_name = "hubbub version",
    about = "Show hubbub and git versions",
    disable_version_flag = true
)]
struct VersionArgs {
    /// Passed to `git version`
    #[arg(long)]
    build_options: bool,
}

/// Prints hubbub's version, then forwards `git version`.
pub struct VersionCommand;

impl Command for VersionCommand {
    fn name(&self) -> &str {
        "version"
    }

    fn about(&self) -> &str {
        "Show hubbub and git versions"
    }

    fn run(&self, args: &mut Args, ui: &mut dyn UserInterface) -> CommandResult {
        parse_params::<VersionArgs>(args, ui)?;

        ui.message(&format!("hubbub version {}", VERSION));
        args.set_command("version");
        Ok(())
    }
}
