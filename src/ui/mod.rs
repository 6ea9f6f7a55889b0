// ============================================================================
// Toxide - UI Module
// ============================================================================
//
// File: src/ui/mod.rs
// Responsibility: UI module entry and exports
// Boundaries:
//   - ✅ UI submodule exports
//   - ❌ No execution logic
//   - ❌ No configuration handling
//
// ============================================================================

pub mod runner;
pub mod summary;
