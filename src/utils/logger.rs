// ============================================================================
// Toxide - Logging Utilities
// ============================================================================
//
// File: src/utils/logger.rs
// Responsibility: log output and formatting
// Boundaries:
//   - ✅ Log level management
//   - ✅ Log line formatting
//   - ✅ Console output control
//   - ❌ No business logic
//   - ❌ No file logging
//   - ❌ No log content generation
//
// ============================================================================

use super::colors::Colors;
use super::constants::APP_NAME;

/// Simple logging facade
pub struct Logger;

impl Logger {
    pub fn info<S: AsRef<str>>(msg: S) {
        println!("{} {}", Self::get_prefix("INFO"), msg.as_ref());
    }

    pub fn warn<S: AsRef<str>>(msg: S) {
        println!("{} {}", Self::get_prefix("WARN"), msg.as_ref());
    }

    pub fn error<S: AsRef<str>>(msg: S) {
        eprintln!("{} {}", Self::get_prefix("ERROR"), msg.as_ref());
    }

    pub fn success<S: AsRef<str>>(msg: S) {
        println!("{} {}", Self::get_prefix("SUCCESS"), msg.as_ref());
    }

    /// Colored level prefix, reused by the runner UI for aligned lines
    pub fn get_prefix(level: &str) -> String {
        match level {
            "WARN" => Colors::warn("[WARN]"),
            "ERROR" => Colors::error("[ERROR]"),
            "SUCCESS" => Colors::success(&format!("[{}]", APP_NAME)),
            _ => Colors::info(&format!("[{}]", APP_NAME)),
        }
    }
}
