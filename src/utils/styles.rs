// ============================================================================
// Toxide - Text Style Utilities
// ============================================================================
//
// File: src/utils/styles.rs
// Responsibility: terminal text style formatting
// Boundaries:
//   - ✅ Text style code definitions (bold, italic, underline)
//   - ✅ Text style formatting
//   - ❌ No color-related functionality
//   - ❌ No business logic
//   - ❌ No UI component implementation
//
// ============================================================================

/// ANSI text style codes
pub mod ansi_styles {
    /// Reset all styles
    pub const RESET: &str = "\x1b[0m";

    /// Bold
    pub const BOLD: &str = "\x1b[1m";

    /// Italic
    pub const ITALIC: &str = "\x1b[3m";

    /// Underline
    pub const UNDERLINE: &str = "\x1b[4m";
}

/// Text style utility functions
pub struct TextStyles;

impl TextStyles {
    /// Wrap text in a style code
    pub fn stylize(text: &str, style: &str) -> String {
        format!("{}{}{}", style, text, ansi_styles::RESET)
    }

    /// Bold text
    pub fn bold(text: &str) -> String {
        Self::stylize(text, ansi_styles::BOLD)
    }

    /// Italic text
    pub fn italic(text: &str) -> String {
        Self::stylize(text, ansi_styles::ITALIC)
    }

    /// Underlined text
    pub fn underline(text: &str) -> String {
        Self::stylize(text, ansi_styles::UNDERLINE)
    }
}
