// ============================================================================
// Toxide - Application Entry
// ============================================================================
//
// File: src/main.rs
// Responsibility: module wiring and process entry point
// Boundaries:
//   - ✅ Module declarations
//   - ✅ Async runtime bootstrap
//   - ❌ No command logic
//   - ❌ No business logic
//
// ============================================================================

mod cli;
mod core;
mod i18n;
mod models;
mod ui;
mod utils;

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run_cli().await
}
