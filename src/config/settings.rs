//! Settings read from the environment.

use std::path::PathBuf;
use std::str::FromStr;

/// Transport used when expanding `owner/repo` shorthands into URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Protocol {
    #[default]
    Https,
    Ssh,
}

impl FromStr for Protocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "https" => Ok(Self::Https),
            "ssh" | "git" => Ok(Self::Ssh),
            _ => Err(format!("unknown protocol: {}", s)),
        }
    }
}

impl Protocol {
    /// Clone URL for `owner/repo` on `host`.
    pub fn repo_url(&self, host: &str, owner: &str, repo: &str) -> String {
        match self {
            Protocol::Https => format!("https://{}/{}/{}.git", host, owner, repo),
            Protocol::Ssh => format!("git@{}:{}/{}.git", host, owner, repo),
        }
    }
}

/// Runtime settings.
///
/// | Variable                  | Effect                                        |
/// |---------------------------|-----------------------------------------------|
/// | `HUBBUB_GIT`              | program to wrap (default `git`)               |
/// | `HUBBUB_VERBOSE`          | trace every spawned command to stderr         |
/// | `HUBBUB_DEBUG`            | debug logging                                 |
/// | `HUBBUB_PROTOCOL`         | `https` or `ssh` for shorthand URLs           |
/// | `HUBBUB_HOST`             | host for shorthand URLs (default `github.com`) |
/// | `HUBBUB_SUPPRESS_UPDATE`  | never print the update notice                 |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Program every passthrough and forwarded command runs.
    pub git: String,
    pub verbose: bool,
    pub debug: bool,
    pub protocol: Protocol,
    pub host: String,
    pub suppress_update_notice: bool,
    /// Where the update notice cache lives. `None` disables the notice.
    pub cache_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            git: "git".to_string(),
            verbose: false,
            debug: false,
            protocol: Protocol::default(),
            host: "github.com".to_string(),
            suppress_update_notice: false,
            cache_dir: dirs::cache_dir().map(|d| d.join("hubbub")),
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Whether `HUBBUB_DEBUG` asks for debug logging.
    ///
    /// Read on its own so logging can be set up before [`Settings::from_env`]
    /// reports anything.
    pub fn debug_from_env() -> bool {
        Self::debug_from_lookup(|key| std::env::var(key).ok())
    }

    fn debug_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> bool {
        lookup("HUBBUB_DEBUG").is_some_and(|v| is_truthy(&v))
    }

    /// Read settings through `lookup`, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();
        let flag = |key: &str| lookup(key).is_some_and(|v| is_truthy(&v));

        if let Some(git) = lookup("HUBBUB_GIT").filter(|v| !v.trim().is_empty()) {
            settings.git = git;
        }
        settings.verbose = flag("HUBBUB_VERBOSE");
        settings.debug = Self::debug_from_lookup(&lookup);
        settings.suppress_update_notice = flag("HUBBUB_SUPPRESS_UPDATE");

        if let Some(value) = lookup("HUBBUB_PROTOCOL") {
            match value.parse() {
                Ok(protocol) => settings.protocol = protocol,
                Err(e) => tracing::warn!("ignoring HUBBUB_PROTOCOL: {}", e),
            }
        }
        if let Some(host) = lookup("HUBBUB_HOST").filter(|v| !v.trim().is_empty()) {
            settings.host = host;
        }

        settings
    }
}

fn is_truthy(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off"
    )
}
