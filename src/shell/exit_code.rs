//! Mapping an invocation's result to the process exit status.

use crate::error::Result;

/// Exit code for the whole invocation.
///
/// Success is 0. A failed child reports its own exit code, so hubbub exits
/// the same way git would have. Anything else, including a child killed by a
/// signal, is 1.
pub fn exit_code(result: &Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => err.child_exit_code().unwrap_or(1),
    }
}

/// Byte-sized process status for `code`.
///
/// A code that doesn't fit in `1..=255` (possible on Windows) becomes 1, so a
/// failure never turns into success by truncation.
pub fn exit_status(code: i32) -> u8 {
    match code {
        0 => 0,
        1..=255 => code as u8,
        _ => 1,
    }
}
