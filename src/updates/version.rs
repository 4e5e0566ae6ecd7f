//! Version comparison and the cached release record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{HubbubError, Result};

/// Current version of hubbub.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// File name of the release record inside the cache directory.
pub const CACHE_FILE: &str = "update_check.json";

/// The latest known release, as recorded by the updater.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseInfo {
    /// Latest available version.
    pub latest: String,
    /// Release URL.
    #[serde(default)]
    pub release_url: Option<String>,
    /// When the release was looked up.
    pub checked_at: DateTime<Utc>,
}

impl ReleaseInfo {
    /// Whether this release is newer than the running binary.
    pub fn is_update(&self) -> bool {
        is_newer_version(self.latest.trim_start_matches('v'), VERSION)
    }
}

/// Load the cached release record.
///
/// A missing file is `Ok(None)`. A file that exists but can't be read or
/// parsed is an error.
pub fn load_cached(path: &Path) -> Result<Option<ReleaseInfo>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(HubbubError::UpdateCheck {
                message: format!("can't read {}: {}", path.display(), e),
            })
        }
    };

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| HubbubError::UpdateCheck {
            message: format!("can't parse {}: {}", path.display(), e),
        })
}

/// Compare versions to check if `latest` is newer than `current`.
pub fn is_newer_version(latest: &str, current: &str) -> bool {
    let parse_version = |v: &str| -> Vec<u32> {
        v.split('.')
            .take(3)
            .filter_map(|s| s.parse().ok())
            .collect()
    };

    let latest_parts = parse_version(latest);
    let current_parts = parse_version(current);

    for (l, c) in latest_parts.iter().zip(current_parts.iter()) {
        if l > c {
            return true;
        }
        if l < c {
            return false;
        }
    }

    // If all components equal, check if latest has more components
    latest_parts.len() > current_parts.len()
}
