// ============================================================================
// Toxide - CLI Run Command
// ============================================================================
//
// File: src/cli/run.rs
// Responsibility: CLI layer of the run command
// Boundaries:
//   - ✅ Argument definition and parsing
//   - ✅ Environment selection and executor invocation
//   - ❌ No execution logic
//   - ❌ No data model definitions
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use crate::core::executor::EnvExecutor;
use crate::models::config::Config;
use crate::ui::summary::render_run_summary;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// Run test environments
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Environments to run (defaults to the configured envlist)
    #[arg(short, long = "env", value_name = "ENV", value_delimiter = ',')]
    pub envs: Vec<String>,

    /// Enable parallel execution even when the file does not
    #[arg(long)]
    pub mp: bool,

    /// Worker count (0 disables parallel execution)
    #[arg(long)]
    pub np: Option<i64>,
}

pub async fn run(args: RunArgs) -> Result<()> {
    let config = Config::snapshot()?;

    let requested = if args.envs.is_empty() { None } else { Some(args.envs.as_slice()) };
    let envs = config.select_envs(requested)?;

    let (use_mp, num_processes) = config.resolve_mp_options(args.mp, args.np)?;
    let workers = if use_mp { num_processes } else { 0 };

    if workers > 0 {
        Logger::info(tf!("run.parallel_mode", workers));
    } else {
        Logger::info(t!("run.serial_mode"));
    }

    let executor = EnvExecutor::new_from_config(workers)?;
    let report = executor.execute_envs(envs).await?;

    render_run_summary(&report);

    if report.is_success() {
        Logger::success(t!("run.all_passed"));
        Ok(())
    } else {
        anyhow::bail!(tf!("run.envs_failed", report.failed_envs().join(", ")))
    }
}
