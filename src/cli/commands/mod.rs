//! Builtin command implementations.
//!
//! Each command implements the [`Command`](super::Command) trait. Commands
//! never spawn anything themselves: they edit the [`Args`] of the invocation
//! and the dispatcher runs the resulting queue, which is what makes `--noop`
//! work for every builtin.

pub mod alias;
pub mod clone;
pub mod help;
pub mod push;
pub mod version;

use clap::error::ErrorKind;
use clap::Parser;

use crate::config::Settings;
use crate::error::HubbubError;
use crate::ui::UserInterface;

use super::registry::CommandError;
use super::{Args, CommandRegistry};

/// Build the registry of every builtin command.
pub fn builtin_registry(settings: &Settings) -> CommandRegistry {
    let mut registry = CommandRegistry::new();

    registry.register(alias::AliasCommand);
    registry.register(clone::CloneCommand::new(settings.protocol, &settings.host));
    registry.register(help::HelpTopic);
    registry.register(push::PushCommand);
    let version = registry.register(version::VersionCommand);
    registry.register_as("--version", version);

    registry
}

/// Parse the params of `args` with clap.
///
/// A help request is printed and reported as
/// [`CommandError::HelpRequested`]; any other parse error is a usage failure.
pub(crate) fn parse_params<T: Parser>(
    args: &Args,
    ui: &mut dyn UserInterface,
) -> Result<T, CommandError> {
    let argv = std::iter::once(args.command().to_string()).chain(args.params().iter().cloned());

    T::try_parse_from(argv).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            ui.message(e.render().to_string().trim_end());
            CommandError::HelpRequested
        }
        _ => {
            let rendered = e.render().to_string();
            let message = rendered.trim_end().trim_start_matches("error: ");
            CommandError::Failed(HubbubError::Usage(message.to_string()))
        }
    })
}
