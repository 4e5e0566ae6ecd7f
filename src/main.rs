//! Hubbub CLI entry point.

use std::process::ExitCode;

use hubbub::cli::{builtin_registry, Dispatcher};
use hubbub::config::Settings;
use hubbub::shell::exit_status;
use hubbub::ui::TerminalUI;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `HUBBUB_DEBUG` sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so they never mix with git's output.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("hubbub=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hubbub=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    init_tracing(Settings::debug_from_env());
    let settings = Settings::from_env();

    let argv: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    tracing::debug!("hubbub starting with args: {:?}", argv);

    let registry = builtin_registry(&settings);
    let mut ui = TerminalUI::new();

    let code = Dispatcher::new(&registry, &settings).execute(argv, &mut ui);
    ExitCode::from(exit_status(code))
}
