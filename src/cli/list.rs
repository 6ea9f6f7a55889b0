// ============================================================================
// Toxide - CLI List Command
// ============================================================================
//
// File: src/cli/list.rs
// Responsibility: CLI layer of the list command
// Boundaries:
//   - ✅ Argument definition and parsing
//   - ✅ Environment listing output
//   - ❌ No execution logic
//   - ❌ No configuration parsing
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use crate::models::config::Config;
use crate::utils::colors::Colors;
use crate::utils::constants::icons;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// List configured environments
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn handle_list(args: ListArgs) -> Result<()> {
    let config = Config::snapshot()?;

    match args.format.as_str() {
        "json" => {
            let json_output = serde_json::json!({
                "envlist": config.core.envlist,
                "envs": config.envs,
                "default_env": config.default_env,
            });
            println!("{}", serde_json::to_string_pretty(&json_output)?);
        }
        _ => print_env_list(&config),
    }

    Ok(())
}

fn print_env_list(config: &Config) {
    if config.envs.is_empty() && config.default_env.is_none() {
        Logger::warn(t!("list.no_envs"));
        return;
    }

    Logger::info(tf!("list.envlist", config.core.envlist.join(", ")));
    Logger::info("");

    for env in &config.envs {
        let in_envlist = config.core.envlist.contains(&env.name);
        let marker = if in_envlist { icons::ENV } else { icons::SKIP };
        let mut line = format!("  {} {}", marker, Colors::info(&env.name));

        if let Some(group) = &env.group {
            let strategy = env
                .group_strategy
                .map(|s| s.to_string())
                .unwrap_or_else(|| "free".to_string());
            line.push_str(&format!("  {} {} ({})", icons::GROUP, group, strategy));
        }
        Logger::info(line);
        Logger::info(tf!("list.command_count", env.commands.len()));
    }

    if let Some(default_env) = &config.default_env {
        Logger::info("");
        Logger::info(tf!("list.default_env", &default_env.name));
    }
}
