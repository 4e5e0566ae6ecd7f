//! Runtime configuration.
//!
//! hubbub keeps no configuration files of its own. Everything comes from
//! environment variables (see [`Settings`]), and git aliases are read from
//! git's own configuration by [`crate::alias`].
//!
//! # Example
//!
//! ```
//! use hubbub::config::{Protocol, Settings};
//!
//! let settings = Settings::from_lookup(|key| match key {
//!     "HUBBUB_PROTOCOL" => Some("ssh".to_string()),
//!     _ => None,
//! });
//! assert_eq!(settings.git, "git");
//! assert_eq!(settings.protocol, Protocol::Ssh);
//! ```

pub mod settings;

pub use settings::{Protocol, Settings};
