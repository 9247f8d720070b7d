//! Browser console logging.
//!
//! Thin wrappers over `web_sys::console` so call sites pass plain
//! `&str` messages.

/// Log a warning (recoverable problem the user does not see).
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

/// Log a debug message (hidden unless the console shows verbose output).
pub fn debug(message: &str) {
    web_sys::console::debug_1(&message.into());
}
