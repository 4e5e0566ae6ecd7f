//! Sequential execution of queued process requests.
//!
//! Requests run strictly in order: later requests may depend on repository
//! state left behind by earlier ones. The first failure stops the queue and
//! nothing after it runs. Nothing already run is undone.

use crate::error::{HubbubError, Result};
use crate::ui::UserInterface;

use super::Process;

/// Runs, or previews, a queue of processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueueExecutor {
    verbose: bool,
}

impl QueueExecutor {
    /// Create an executor. With `verbose`, each command line is traced to
    /// stderr before it runs.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Run the queue, or with `dry_run` only print it.
    ///
    /// A dry run never fails.
    pub fn run<P: Process>(
        &self,
        queue: &[P],
        dry_run: bool,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        if dry_run {
            for process in queue {
                ui.message(&process.to_string());
            }
            return Ok(());
        }

        for (index, process) in queue.iter().enumerate() {
            if self.verbose {
                ui.command(&process.to_string());
            }

            let outcome = process.run()?;
            if !outcome.success() {
                tracing::debug!(
                    "queue stopped at {} of {}: {}",
                    index + 1,
                    queue.len(),
                    process
                );
                return Err(HubbubError::CommandFailed {
                    command: process.to_string(),
                    code: outcome.exit_code,
                });
            }
        }

        Ok(())
    }
}
