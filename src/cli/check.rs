// ============================================================================
// Toxide - CLI Check Command
// ============================================================================
//
// File: src/cli/check.rs
// Responsibility: CLI layer of the configuration check command
// Boundaries:
//   - ✅ Argument definition and parsing
//   - ✅ Validation invocation and reporting
//   - ❌ No validation rules (models/config)
//   - ❌ No execution logic
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use crate::core::batcher;
use crate::models::config::{Config, ConfigIssue, IssueSeverity};
use crate::ui::summary::print_config_issues;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// Check the configuration for problems
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn handle_check(args: CheckArgs) -> Result<()> {
    Logger::info(t!("check.start"));

    let config = Config::snapshot()?;
    let mut issues = config.validate();

    // Group planning errors surface here instead of at run time
    if let Ok(envs) = config.select_envs(None) {
        if let Err(e) = batcher::plan_groups(&envs) {
            issues.push(ConfigIssue { severity: IssueSeverity::Error, message: e.to_string() });
        }
    }

    match args.format.as_str() {
        "json" => {
            let errors = issues
                .iter()
                .filter(|issue| issue.severity == IssueSeverity::Error)
                .count();
            let json_output = serde_json::json!({
                "issues": issues,
                "errors": errors,
                "warnings": issues.len() - errors,
            });
            println!("{}", serde_json::to_string_pretty(&json_output)?);
            if errors > 0 {
                anyhow::bail!(tf!("check.failed", errors));
            }
        }
        _ => {
            let errors = print_config_issues(&issues);
            if errors > 0 {
                anyhow::bail!(tf!("check.failed", errors));
            }
        }
    }

    Ok(())
}
