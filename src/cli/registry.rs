//! Builtin command registry.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing builtin commands
//! - [`CommandError`] distinguishing a help request from a real failure
//! - [`CommandRegistry`] mapping names to commands
//!
//! The registry is built once at startup (see
//! [`builtin_registry`](super::commands::builtin_registry)) and only read
//! afterwards.

use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

use crate::error::HubbubError;
use crate::ui::UserInterface;

use super::Args;

/// Why a builtin command stopped early.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The user asked for help and it has been shown. Not a failure.
    #[error("help requested")]
    HelpRequested,

    /// The command failed.
    #[error(transparent)]
    Failed(#[from] HubbubError),
}

/// Result type for builtin commands.
pub type CommandResult = std::result::Result<(), CommandError>;

/// Trait for builtin command implementations.
pub trait Command {
    /// Primary name, as typed on the command line.
    fn name(&self) -> &str;

    /// One-line description for the usage text.
    fn about(&self) -> &str;

    /// Whether the command has its own behavior.
    ///
    /// A command that is not runnable only documents something; dispatch
    /// passes it through to git.
    fn runnable(&self) -> bool {
        true
    }

    /// Run the command.
    ///
    /// Commands describe work by mutating `args` (params, before/after
    /// chains, forwarding). The dispatcher executes the resulting queue.
    fn run(&self, args: &mut Args, ui: &mut dyn UserInterface) -> CommandResult;
}

/// Lookup table from command name to command.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Rc<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `command` under its own name, replacing any previous entry.
    pub fn register(&mut self, command: impl Command + 'static) -> Rc<dyn Command> {
        let command: Rc<dyn Command> = Rc::new(command);
        self.register_as(command.name().to_string(), Rc::clone(&command));
        command
    }

    /// Register an already registered `command` under another name.
    pub fn register_as(&mut self, name: impl Into<String>, command: Rc<dyn Command>) {
        let name = name.into();
        if self.commands.insert(name.clone(), command).is_some() {
            tracing::debug!("command '{}' re-registered", name);
        }
    }

    /// Find the command registered under `name`.
    pub fn lookup(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| &**c)
    }

    /// Distinct commands, sorted by primary name.
    pub fn commands(&self) -> Vec<&dyn Command> {
        let mut commands: Vec<&dyn Command> = Vec::new();
        for command in self.commands.values() {
            if !commands
                .iter()
                .any(|c| std::ptr::addr_eq(*c, &**command))
            {
                commands.push(&**command);
            }
        }
        commands.sort_by(|a, b| a.name().cmp(b.name()));
        commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
