//! `push` to several remotes at once.
//!
//! `hubbub push origin,staging main` runs `git push origin main` and then
//! `git push staging main`, stopping at the first failure.

use crate::cli::registry::{Command, CommandResult};
use crate::cli::Args;
use crate::ui::UserInterface;

/// Flags of `git push` that take a separate value.
const VALUE_FLAGS: &[&str] = &["--repo", "--receive-pack", "--exec", "-o", "--push-option"];

pub struct PushCommand;

impl Command for PushCommand {
    fn name(&self) -> &str {
        "push"
    }

    fn about(&self) -> &str {
        "Push to several comma-separated remotes in turn"
    }

    fn run(&self, args: &mut Args, _ui: &mut dyn UserInterface) -> CommandResult {
        let Some(index) = args.first_positional(VALUE_FLAGS) else {
            return Ok(());
        };

        let remotes: Vec<String> = args.params()[index]
            .split(',')
            .filter(|remote| !remote.is_empty())
            .map(String::from)
            .collect();
        if remotes.len() < 2 {
            return Ok(());
        }

        args.replace_param(index, remotes[0].clone());
        for remote in &remotes[1..] {
            let mut params = args.params().to_vec();
            params[index] = remote.clone();
            let request = args.git_request(std::iter::once("push".to_string()).chain(params));
            args.after(request);
        }

        Ok(())
    }
}
