// ============================================================================
// Toxide - Utilities Module
// ============================================================================
//
// File: src/utils/mod.rs
// Responsibility: utility module exports
// Boundaries:
//   - ✅ Utility submodule exports
//   - ❌ No business logic
//
// ============================================================================

pub mod colors;
pub mod constants;
pub mod logger;
pub mod styles;
