//! `help`, listed for discoverability only.

use crate::cli::registry::{Command, CommandResult};
use crate::cli::Args;
use crate::ui::UserInterface;

/// Documents `help` in the usage text. Not runnable, so `hubbub help <cmd>`
/// reaches `git help <cmd>`.
pub struct HelpTopic;

impl Command for HelpTopic {
    fn name(&self) -> &str {
        "help"
    }

    fn about(&self) -> &str {
        "Show git's manual for a command"
    }

    fn runnable(&self) -> bool {
        false
    }

    fn run(&self, _args: &mut Args, _ui: &mut dyn UserInterface) -> CommandResult {
        Ok(())
    }
}
