//! Update notice shown before dispatch.

use std::path::PathBuf;

use crate::config::Settings;
use crate::error::Result;
use crate::ui::UserInterface;

use super::version::{load_cached, CACHE_FILE, VERSION};
use super::PreDispatchCheck;

/// Prints a one-line notice when the cached release is newer than this
/// binary.
///
/// The notice is only shown on an interactive terminal, so scripts piping
/// git output through hubbub never see it.
#[derive(Debug, Clone)]
pub struct UpdateNotice {
    cache_file: Option<PathBuf>,
    suppressed: bool,
}

impl UpdateNotice {
    /// Read the release record from `cache_file`. `None` disables the notice.
    pub fn new(cache_file: Option<PathBuf>) -> Self {
        Self {
            cache_file,
            suppressed: false,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            cache_file: settings.cache_dir.as_ref().map(|d| d.join(CACHE_FILE)),
            suppressed: settings.suppress_update_notice,
        }
    }
}

impl PreDispatchCheck for UpdateNotice {
    fn check(&self, ui: &mut dyn UserInterface) -> Result<()> {
        if self.suppressed || !ui.is_interactive() {
            return Ok(());
        }
        let Some(path) = &self.cache_file else {
            return Ok(());
        };

        if let Some(release) = load_cached(path)? {
            if release.is_update() {
                ui.warning(&format!(
                    "A new version of hubbub is available: {} -> {}",
                    VERSION,
                    release.latest.trim_start_matches('v')
                ));
                if let Some(url) = &release.release_url {
                    ui.warning(&format!("Download from: {}", url));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HubbubError;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn cache_with(content: &str) -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CACHE_FILE);
        fs::write(&path, content).unwrap();
        (temp, path)
    }

    fn interactive_ui() -> MockUI {
        let mut ui = MockUI::new();
        ui.set_interactive(true);
        ui
    }

    const NEWER: &str = r#"{
        "latest": "v999.0.0",
        "release_url": "https://example.com/hubbub/releases/999.0.0",
        "checked_at": "2026-01-01T00:00:00Z"
    }"#;

    #[test]
    fn newer_release_prints_notice() {
        let (_temp, path) = cache_with(NEWER);
        let mut ui = interactive_ui();

        UpdateNotice::new(Some(path)).check(&mut ui).unwrap();

        assert!(ui.has_warning("999.0.0"));
        assert!(ui.has_warning("Download from: https://example.com"));
    }

    #[test]
    fn current_release_is_silent() {
        let (_temp, path) = cache_with(&format!(
            r#"{{"latest": "{}", "checked_at": "2026-01-01T00:00:00Z"}}"#,
            VERSION
        ));
        let mut ui = interactive_ui();

        UpdateNotice::new(Some(path)).check(&mut ui).unwrap();

        assert!(ui.is_silent());
    }

    #[test]
    fn non_interactive_is_silent() {
        let (_temp, path) = cache_with(NEWER);
        let mut ui = MockUI::new();

        UpdateNotice::new(Some(path)).check(&mut ui).unwrap();

        assert!(ui.is_silent());
    }

    #[test]
    fn missing_cache_is_fine() {
        let temp = TempDir::new().unwrap();
        let mut ui = interactive_ui();

        UpdateNotice::new(Some(temp.path().join(CACHE_FILE)))
            .check(&mut ui)
            .unwrap();
        UpdateNotice::new(None).check(&mut ui).unwrap();

        assert!(ui.is_silent());
    }

    #[test]
    fn corrupt_cache_fails_the_check() {
        let (_temp, path) = cache_with("garbage");
        let mut ui = interactive_ui();

        let err = UpdateNotice::new(Some(path)).check(&mut ui).unwrap_err();
        assert!(matches!(err, HubbubError::UpdateCheck { .. }));
    }

    #[test]
    fn from_settings_honors_suppression() {
        let temp = TempDir::new().unwrap();
        let settings = Settings {
            cache_dir: Some(temp.path().to_path_buf()),
            suppress_update_notice: true,
            ..Settings::default()
        };
        fs::write(temp.path().join(CACHE_FILE), NEWER).unwrap();
        let mut ui = interactive_ui();

        UpdateNotice::from_settings(&settings).check(&mut ui).unwrap();

        assert!(ui.is_silent());
    }
}
