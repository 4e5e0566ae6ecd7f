//! `clone` with `owner/repo` shorthand.
//!
//! ```text
//! hubbub clone rust-lang/cargo        # git clone https://github.com/rust-lang/cargo.git
//! hubbub clone -p me/secret           # git clone git@github.com:me/secret.git
//! ```
//!
//! URLs, paths that exist and anything that isn't `owner/repo` pass through
//! untouched.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

use crate::cli::registry::{Command, CommandResult};
use crate::cli::Args;
use crate::config::Protocol;
use crate::ui::UserInterface;

/// `owner/repo`, optionally with a `.git` suffix.
static SHORTHAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9][A-Za-z0-9-]*)/([A-Za-z0-9._-]+?)(?:\.git)?$")
        .expect("SHORTHAND must compile")
});

/// Flags of `git clone` that take a separate value.
const VALUE_FLAGS: &[&str] = &[
    "-o",
    "--origin",
    "-b",
    "--branch",
    "-u",
    "--upload-pack",
    "--reference",
    "--reference-if-able",
    "--separate-git-dir",
    "--depth",
    "--shallow-since",
    "--shallow-exclude",
    "-c",
    "--config",
    "--template",
    "-j",
    "--jobs",
    "--filter",
    "--server-option",
    "--bundle-uri",
];

/// Forces the ssh protocol for the shorthand. Not a git flag.
const SSH_FLAG: &str = "-p";

/// Expands repository shorthands before forwarding to `git clone`.
pub struct CloneCommand {
    protocol: Protocol,
    host: String,
}

impl CloneCommand {
    pub fn new(protocol: Protocol, host: impl Into<String>) -> Self {
        Self {
            protocol,
            host: host.into(),
        }
    }

    /// The clone URL for `value`, if it is a shorthand.
    fn expand(&self, value: &str, protocol: Protocol) -> Option<String> {
        if Path::new(value).exists() {
            return None;
        }

        let caps = SHORTHAND.captures(value)?;
        Some(protocol.repo_url(&self.host, &caps[1], &caps[2]))
    }
}

impl Command for CloneCommand {
    fn name(&self) -> &str {
        "clone"
    }

    fn about(&self) -> &str {
        "Clone a repository, accepting owner/repo shorthand"
    }

    fn run(&self, args: &mut Args, _ui: &mut dyn UserInterface) -> CommandResult {
        let protocol = if args.take_flag(SSH_FLAG, VALUE_FLAGS) {
            Protocol::Ssh
        } else {
            self.protocol
        };

        if let Some(index) = args.first_positional(VALUE_FLAGS) {
            if let Some(url) = self.expand(&args.params()[index], protocol) {
                tracing::debug!("clone shorthand '{}' -> {}", args.params()[index], url);
                args.replace_param(index, url);
            }
        }

        Ok(())
    }
}
