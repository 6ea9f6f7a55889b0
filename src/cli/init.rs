// ============================================================================
// Toxide - CLI Init Command
// ============================================================================
//
// File: src/cli/init.rs
// Responsibility: configuration file initialization
// Boundaries:
//   - ✅ Init argument parsing
//   - ✅ Starter configuration generation
//   - ✅ Existing file check
//   - ❌ No configuration format definitions
//   - ❌ No validation logic
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::models::config::Config;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// Initialize a configuration file
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing configuration file
    #[arg(short, long)]
    pub force: bool,
}

pub fn handle_init(args: InitArgs, config_path: &Path) -> Result<()> {
    Logger::info(t!("init.start"));

    if config_path.exists() && !args.force {
        Logger::warn(tf!("init.config_exists", config_path.display()));
        Logger::info(t!("init.use_force_hint"));
        return Ok(());
    }

    match Config::create_default_config_file(config_path) {
        Ok(_) => {
            Logger::info(tf!("init.config_created", config_path.display()));
            Logger::info(t!("init.next_steps"));
            Ok(())
        }
        Err(e) => {
            Logger::error(tf!("init.create_failed", e));
            Err(e)
        }
    }
}
