// ============================================================================
// Toxide - CLI Module
// ============================================================================
//
// File: src/cli/mod.rs
// Responsibility: CLI entry point and command routing
// Boundaries:
//   - ✅ CLI structure and command enum
//   - ✅ Argument parsing configuration
//   - ✅ Command dispatch
//   - ✅ Submodule exports
//   - ❌ No command implementations
//   - ❌ No business logic
//   - ❌ No data model definitions
//
// ============================================================================

pub mod check;
pub mod init;
pub mod list;
pub mod run;
pub mod show;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::models::config::{Config, RuntimeArgs};
use crate::utils::constants::CONFIG_FILE;
use check::{handle_check, CheckArgs};
use init::{handle_init, InitArgs};
use list::{handle_list, ListArgs};
use run::{run, RunArgs};
use show::{handle_show, ShowArgs};

/// Toxide - Test environment orchestrator
#[derive(Debug, Parser)]
#[command(name = "toxide")]
#[command(about = "Parallel test environment orchestrator based on Rust")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Global verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Interface language (zh_cn, en_us)
    #[arg(short, long, global = true)]
    pub language: Option<String>,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Per-environment timeout (seconds)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Cancel pending environments after the first failure
    #[arg(long, global = true)]
    pub fail_fast: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Disable the live progress display
    #[arg(long, global = true)]
    pub no_progress: bool,

    /// Commands
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run test environments
    Run(RunArgs),
    /// List configured environments
    List(ListArgs),
    /// Show the resolved settings of one environment
    Show(ShowArgs),
    /// Check the configuration for problems
    Check(CheckArgs),
    /// Initialize a configuration file
    Init(InitArgs),
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    Config::initialize(&cli.config)?;
    Config::merge_runtime_args(build_runtime_args(&cli))?;

    match cli.command {
        Commands::Run(args) => run(args).await,
        Commands::List(args) => handle_list(args),
        Commands::Show(args) => handle_show(args),
        Commands::Check(args) => handle_check(args),
        Commands::Init(args) => handle_init(args, &cli.config),
    }
}

/// Build runtime overrides from CLI arguments
fn build_runtime_args(cli: &Cli) -> RuntimeArgs {
    RuntimeArgs {
        verbose: if cli.verbose { Some(true) } else { None },
        colored: if cli.no_color { Some(false) } else { None },
        show_progress: if cli.no_progress { Some(false) } else { None },
        timeout_seconds: cli.timeout,
        fail_fast: if cli.fail_fast { Some(true) } else { None },
        language: cli.language.clone(),
    }
}
