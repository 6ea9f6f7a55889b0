// ============================================================================
// Toxide - Data Models Module
// ============================================================================
//
// File: src/models/mod.rs
// Responsibility: data model module exports
// Boundaries:
//   - ✅ Model submodule exports
//   - ❌ No business logic
//
// ============================================================================

pub mod config;
pub mod env;
pub mod task;
