// ============================================================================
// Toxide - Color Utilities
// ============================================================================
//
// File: src/utils/colors.rs
// Responsibility: terminal color output and theme management
// Boundaries:
//   - ✅ ANSI color code definitions
//   - ✅ Color output formatting
//   - ✅ Color enable/disable handling
//   - ❌ No business logic
//   - ❌ No UI component implementation
//   - ❌ No text content processing
//
// ============================================================================

use crate::models::config::Config;

/// ANSI color codes
pub mod ansi {
    /// Reset color
    pub const RESET: &str = "\x1b[0m";

    /// Foreground colors
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
}

/// Log level color theme
pub mod log_colors {
    use super::ansi;

    /// Info log color (cyan)
    pub const INFO: &str = ansi::CYAN;

    /// Warning log color (yellow)
    pub const WARN: &str = ansi::YELLOW;

    /// Error log color (red)
    pub const ERROR: &str = ansi::RED;

    /// Success log color (green)
    pub const SUCCESS: &str = ansi::GREEN;
}

/// Color utility functions
pub struct Colors;

impl Colors {
    /// Wrap text in a color code, honoring the global color switch
    pub fn colorize(text: &str, color: &str) -> String {
        if !Config::get_colored().unwrap_or(true) {
            return text.to_string();
        }
        format!("{}{}{}", color, text, ansi::RESET)
    }

    /// Info color
    pub fn info(text: &str) -> String {
        Self::colorize(text, log_colors::INFO)
    }

    /// Warning color
    pub fn warn(text: &str) -> String {
        Self::colorize(text, log_colors::WARN)
    }

    /// Error color
    pub fn error(text: &str) -> String {
        Self::colorize(text, log_colors::ERROR)
    }

    /// Success color
    pub fn success(text: &str) -> String {
        Self::colorize(text, log_colors::SUCCESS)
    }
}
