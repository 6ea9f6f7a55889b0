// ============================================================================
// Toxide - Core Module
// ============================================================================
//
// File: src/core/mod.rs
// Responsibility: core business logic module entry and exports
// Boundaries:
//   - ✅ Core submodule exports
//   - ❌ No business logic implementations
//   - ❌ No CLI logic
//   - ❌ No UI logic
//
// ============================================================================

pub mod batcher;
pub mod executor;
pub mod ini;
pub mod scheduler;
