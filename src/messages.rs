//! Diagnostic messages
//!
//! Error/info/debug prefixes for the response stream. Responses use
//! `\r\n` line endings. Debug chatter is gated by a process-wide flag
//! and is off by default.

use core::fmt::Write;
use core::sync::atomic::{AtomicBool, Ordering};

use crate::fetch::FetchError;

static DEBUG_MSGS: AtomicBool = AtomicBool::new(false);

/// Enable or disable [`debug_msg`] output.
pub fn set_debug(enabled: bool) {
    DEBUG_MSGS.store(enabled, Ordering::Relaxed);
}

/// True if debug messages are enabled.
pub fn debug_enabled() -> bool {
    DEBUG_MSGS.load(Ordering::Relaxed)
}

/// Report a failed statement.
pub fn error_msg(out: &mut dyn Write, err: FetchError) {
    let _ = write!(out, "ERROR: {}\r\n", err);
}

/// Informational line.
pub fn info_msg(out: &mut dyn Write, msg: &str) {
    let _ = write!(out, "INFO: {}\r\n", msg);
}

/// Diagnostic chatter, silent unless enabled via [`set_debug`].
pub fn debug_msg(out: &mut dyn Write, msg: &str) {
    if debug_enabled() {
        let _ = write!(out, "DEBUG: {}\r\n", msg);
    }
}
