//! Top-level usage text.

use crate::updates::VERSION;

use super::CommandRegistry;

/// Render the usage text shown when hubbub runs without a command.
pub fn usage(registry: &CommandRegistry) -> String {
    let commands = registry.commands();
    let width = commands.iter().map(|c| c.name().len()).max().unwrap_or(0);

    let mut text = format!(
        "hubbub {}\n\nUsage: hubbub [--noop] [git global flags] <command> [args...]\n",
        VERSION
    );

    text.push_str("\nhubbub commands:\n");
    for command in commands {
        text.push_str(&format!(
            "   {:width$}   {}\n",
            command.name(),
            command.about(),
            width = width
        ));
    }

    text.push_str(
        "\nEvery other command, and every git alias that is a shell command,\n\
         is passed to git unchanged. Use --noop to print what a hubbub command\n\
         would run instead of running it.\n",
    );
    text
}
