//! Update notification.
//!
//! This module provides:
//! - [`PreDispatchCheck`], the hook the dispatcher runs before every command
//! - [`UpdateNotice`], which tells the user when a newer release is known
//! - Version comparison against the cached release record
//!
//! Looking up releases and installing them is left to the updater. hubbub
//! only reads the record it leaves in the cache directory.

pub mod notice;
pub mod version;

pub use notice::UpdateNotice;
pub use version::{is_newer_version, load_cached, ReleaseInfo, VERSION};

use crate::error::Result;
use crate::ui::UserInterface;

/// A check run before every dispatched command.
///
/// Unlike alias problems, a failing check aborts the invocation.
pub trait PreDispatchCheck {
    fn check(&self, ui: &mut dyn UserInterface) -> Result<()>;
}
