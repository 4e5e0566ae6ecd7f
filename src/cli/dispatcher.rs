//! Command dispatching.
//!
//! One invocation goes through these steps:
//!
//! 1. No command: print usage and succeed.
//! 2. Run the pre-dispatch check. Its failure aborts the invocation.
//! 3. Expand the command as a git alias (once, never failing).
//! 4. A runnable builtin runs and fills the process queue, which is then
//!    executed (or only printed with `--noop`).
//! 5. Anything else is spawned as `git <global flags> <command> <params>`
//!    right away. `--noop` does not apply to passthrough.
//!
//! The result becomes the exit code via [`exit_code`].

use crate::alias::{AliasExpander, AliasSource, GitConfigAliases};
use crate::config::Settings;
use crate::error::{HubbubError, Result};
use crate::shell::{exit_code, Process, QueueExecutor};
use crate::updates::{PreDispatchCheck, UpdateNotice};
use crate::ui::UserInterface;

use super::registry::{Command, CommandError};
use super::{usage, Args, CommandRegistry};

/// Routes invocations to builtins or to git.
pub struct Dispatcher<'a> {
    registry: &'a CommandRegistry,
    settings: &'a Settings,
    aliases: Option<&'a dyn AliasSource>,
    check: Option<&'a dyn PreDispatchCheck>,
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher reading aliases from git and showing the update
    /// notice configured in `settings`.
    pub fn new(registry: &'a CommandRegistry, settings: &'a Settings) -> Self {
        Self {
            registry,
            settings,
            aliases: None,
            check: None,
        }
    }

    /// Read aliases from `aliases` instead of git's configuration.
    pub fn with_aliases(mut self, aliases: &'a dyn AliasSource) -> Self {
        self.aliases = Some(aliases);
        self
    }

    /// Run `check` before dispatch instead of the update notice.
    pub fn with_check(mut self, check: &'a dyn PreDispatchCheck) -> Self {
        self.check = Some(check);
        self
    }

    /// Parse `argv`, dispatch it and return the exit code.
    pub fn execute<I, S>(&self, argv: I, ui: &mut dyn UserInterface) -> i32
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args = Args::new(argv).with_executable(&self.settings.git);
        let result = self.dispatch(args, ui);

        match &result {
            // The child has already said what went wrong.
            Err(e) if e.is_child_failure() => tracing::debug!("{}", e),
            Err(e) => ui.error(&e.to_string()),
            Ok(()) => {}
        }

        exit_code(&result)
    }

    /// Dispatch one parsed invocation.
    pub fn dispatch(&self, mut args: Args, ui: &mut dyn UserInterface) -> Result<()> {
        if args.is_empty() {
            ui.message(usage::usage(self.registry).trim_end());
            return Ok(());
        }

        self.pre_dispatch_check(ui)?;
        self.expand_alias(&mut args);

        match self.registry.lookup(args.command()) {
            Some(command) if command.runnable() => self.call(command, &mut args, ui),
            _ => self.passthrough(&args, ui),
        }
    }

    fn pre_dispatch_check(&self, ui: &mut dyn UserInterface) -> Result<()> {
        match self.check {
            Some(check) => check.check(ui),
            None => UpdateNotice::from_settings(self.settings).check(ui),
        }
    }

    fn expand_alias(&self, args: &mut Args) {
        match self.aliases {
            Some(source) => AliasExpander::new(source).apply(args),
            None => {
                let source = GitConfigAliases::for_args(args);
                AliasExpander::new(&source).apply(args)
            }
        };
    }

    /// Run a builtin, then its queue.
    fn call(
        &self,
        command: &dyn Command,
        args: &mut Args,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        tracing::debug!("running builtin '{}'", command.name());

        match command.run(args, ui) {
            Ok(()) => {}
            Err(CommandError::HelpRequested) => return Ok(()),
            Err(CommandError::Failed(e)) => return Err(e),
        }

        QueueExecutor::new(self.settings.verbose).run(&args.commands(), args.is_noop(), ui)
    }

    /// Hand the invocation to git unchanged.
    fn passthrough(&self, args: &Args, ui: &mut dyn UserInterface) -> Result<()> {
        let request = args.forwarded();
        tracing::debug!("passing through: {}", request);
        if self.settings.verbose {
            ui.command(&request.to_string());
        }

        let outcome = request.run()?;
        if outcome.success() {
            Ok(())
        } else {
            Err(HubbubError::CommandFailed {
                command: request.to_string(),
                code: outcome.exit_code,
            })
        }
    }
}
