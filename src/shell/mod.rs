//! Process execution and shell detection.

pub mod exit_code;
pub mod platform;
pub mod process;
pub mod queue;

pub use exit_code::{exit_code, exit_status};
pub use platform::{detect_shell, ShellType};
pub use process::{ExecutionOutcome, Process, ProcessRequest};
pub use queue::QueueExecutor;
