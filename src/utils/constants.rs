// ============================================================================
// Toxide - Constants
// ============================================================================
//
// File: src/utils/constants.rs
// Responsibility: application constants and UI character definitions
// Boundaries:
//   - ✅ Application constants
//   - ✅ Pixel icon characters
//   - ✅ Progress bar / spinner characters
//   - ❌ No dynamic configuration
//   - ❌ No business logic
//   - ❌ No file path handling
//
// ============================================================================

/// Application name constant
pub const APP_NAME: &str = "TOXIDE";

/// Default configuration file name
pub const CONFIG_FILE: &str = "tox.ini";

/// Pixel style icons
pub mod icons {
    /// Success icon
    pub const SUCCESS: &str = "✓";
    /// Error icon
    pub const ERROR: &str = "✗";
    /// Environment icon
    pub const ENV: &str = "●";
    /// Phase icon
    pub const PHASE: &str = "▪";
    /// Execute icon
    pub const EXEC: &str = "▸";
    /// Group icon
    pub const GROUP: &str = "◆";
    /// Init icon
    pub const INIT: &str = "◈";
    /// Time icon
    pub const TIME: &str = "⧖";
    /// Arrow icon
    pub const ARROW: &str = "→";
    /// Skip icon
    pub const SKIP: &str = "○";
    /// Pending icon
    pub const PENDING: &str = "·";
    /// Warning icon
    pub const WARNING: &str = "!";
}

/// Progress bar characters
pub mod progress_chars {
    /// Filled block
    pub const FILLED: &str = "█";
    /// Empty block
    pub const EMPTY: &str = "░";
}

/// Spinner animation characters
pub mod spinner_chars {
    pub const BASE: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];
}
