// ============================================================================
// Toxide - CLI Show Command
// ============================================================================
//
// File: src/cli/show.rs
// Responsibility: CLI layer of the show command
// Boundaries:
//   - ✅ Argument definition and parsing
//   - ✅ Resolved environment display
//   - ✅ Resolved file-level settings display
//   - ❌ No execution logic
//   - ❌ No configuration parsing
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use crate::models::config::Config;
use crate::models::env::TestEnv;
use crate::utils::colors::Colors;
use crate::utils::constants::icons;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// Show the resolved settings of one environment, or the whole file
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Environment name (omit to show the whole configuration)
    #[arg(short, long = "env", value_name = "ENV")]
    pub env: Option<String>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn handle_show(args: ShowArgs) -> Result<()> {
    let config = Config::snapshot()?;

    match &args.env {
        Some(name) => {
            // Same resolution as `run -e NAME`: envlist names without their
            // own section derive from the base section
            let env =
                config.resolve_env(name).map_err(|_| anyhow::anyhow!(tf!("show.unknown_env", name)))?;
            match args.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&env)?),
                _ => print_env(&env),
            }
        }
        None => match args.format.as_str() {
            "json" => println!("{}", serde_json::to_string_pretty(&config)?),
            _ => print_config(&config),
        },
    }

    Ok(())
}

fn print_config(config: &Config) {
    Logger::info(tf!("show.toxinidir", config.toxinidir.display()));
    Logger::info(tf!("show.envlist", config.core.envlist.join(", ")));
    if let Some(distshare) = &config.core.distshare {
        Logger::info(tf!("show.distshare", distshare));
    }

    if let Some(addopts) = &config.pytest.addopts {
        Logger::info(t!("show.pytest_header"));
        Logger::info(format!("    addopts = {}", addopts));
    }

    if !config.flake8.ignore.is_empty()
        || config.flake8.max_complexity.is_some()
        || !config.flake8.exclude.is_empty()
    {
        Logger::info(t!("show.flake8_header"));
        if !config.flake8.ignore.is_empty() {
            Logger::info(format!("    ignore = {}", config.flake8.ignore.join(", ")));
        }
        if let Some(max_complexity) = config.flake8.max_complexity {
            Logger::info(format!("    max_complexity = {}", max_complexity));
        }
        if !config.flake8.exclude.is_empty() {
            Logger::info(format!("    exclude = {}", config.flake8.exclude.join(", ")));
        }
    }

    Logger::info(t!("show.envs_header"));
    for env in &config.envs {
        print_env(env);
    }
    if let Some(default_env) = &config.default_env {
        Logger::info(tf!("show.default_env", &default_env.name));
    }
}

fn print_env(env: &TestEnv) {
    Logger::info(format!("{} {}", icons::ENV, Colors::info(&env.name)));

    if let Some(basepython) = &env.basepython {
        Logger::info(tf!("show.basepython", basepython));
    }

    if let Some(group) = &env.group {
        let strategy =
            env.group_strategy.map(|s| s.to_string()).unwrap_or_else(|| "free".to_string());
        Logger::info(tf!("show.group", group, strategy));
    }

    if !env.setenv.is_empty() {
        Logger::info(t!("show.setenv_header"));
        let mut pairs: Vec<_> = env.setenv.iter().collect();
        pairs.sort_by(|a, b| a.0.cmp(b.0));
        for (key, value) in pairs {
            Logger::info(format!("    {} = {}", key, value));
        }
    }

    if !env.deps.is_empty() {
        Logger::info(t!("show.deps_header"));
        for dep in &env.deps {
            Logger::info(format!("    {}", dep));
        }
    }

    if env.commands.is_empty() {
        Logger::warn(t!("show.no_commands"));
    } else {
        Logger::info(t!("show.commands_header"));
        for command in &env.commands {
            let marker = if command.tolerate_failure { icons::WARNING } else { icons::EXEC };
            Logger::info(format!("    {} {}", marker, command.line));
        }
    }
}
