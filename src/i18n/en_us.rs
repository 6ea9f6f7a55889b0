// ============================================================================
// Toxide - English Translation Table
// ============================================================================
//
// File: src/i18n/en_us.rs
// Responsibility: English translation content definition
// Boundaries:
//   - ✅ English translation strings definition
//   - ✅ Translation key-value pairs maintenance
//   - ❌ No translation logic
//   - ❌ No business logic
//   - ❌ No other language translations
//
// ============================================================================

/// English translation table
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // Run command related
    ("run.env_count", "{} environments selected"),
    ("run.parallel_mode", "Parallel execution with {} workers"),
    ("run.serial_mode", "Parallel execution disabled, running serially"),
    ("run.all_passed", "All environments passed"),
    ("run.envs_failed", "Failed environments: {}"),
    // Executor related
    ("executor.phase_start", "Phase {}/{}"),
    ("executor.env_start", "Running environment: {}"),
    ("executor.env_success", "Environment {} passed in {}s"),
    ("executor.env_failed", "Environment {} failed after {}s"),
    ("executor.env_skipped", "Environment {} has no commands, skipping"),
    ("executor.env_stderr", "Last output: {}"),
    ("executor.env_timeout", "Environment {} timed out"),
    ("executor.no_commands", "no commands configured"),
    ("executor.cancelled", "cancelled before start"),
    ("executor.command_run", "[{}] $ {}"),
    ("executor.command_stdout", "stdout: {}"),
    ("executor.command_stderr", "stderr: {}"),
    ("executor.command_failed", "command failed: {} (exit code {})"),
    (
        "executor.command_tolerated",
        "[{}] command failed but is marked tolerant: {}",
    ),
    ("executor.command_spawn_failed", "failed to start {}: {}"),
    ("executor.group_failed", "group {} has failed environments: {}"),
    ("executor.job_failed", "Job {} failed: {}"),
    ("executor.job_cancelled", "Job {} was cancelled"),
    (
        "executor.fail_fast_stop",
        "Stopping after failed phase (fail-fast)",
    ),
    // Scheduler related
    ("scheduler.batch_start", "Dispatching {} jobs"),
    ("scheduler.batch_complete", "Batch complete: {}/{} succeeded"),
    ("scheduler.job_start", "Job {} started"),
    ("scheduler.job_success", "Job {} succeeded in {}s"),
    ("scheduler.job_failed", "Job {} failed after {}s: {}"),
    ("scheduler.job_timeout", "Job {} timed out after {}s"),
    ("scheduler.job_cancelled", "Job {} cancelled"),
    ("scheduler.job_join_error", "Job panicked: {}"),
    (
        "scheduler.fail_fast_triggered",
        "Job {} failed, cancelling pending jobs",
    ),
    ("scheduler.stopping_all_jobs", "Stopping all pending jobs"),
    // Runner UI related
    ("runner.phase_header", "Phase {}/{}"),
    ("runner.phase_complete", "Phase {}/{} complete"),
    ("runner.running_envs", "Running environments"),
    ("runner.more_envs", "... and {} more"),
    // Summary related
    ("summary.header", "Run Summary"),
    ("summary.total_envs", "Total environments: {}"),
    ("summary.passed_envs", "Passed: {}"),
    ("summary.failed_envs", "Failed: {}"),
    ("summary.skipped_envs", "Skipped: {}"),
    ("summary.duration", "Duration: {}s"),
    ("summary.env_results", "Environment results"),
    ("summary.env_duration", "({}s)"),
    ("summary.env_skipped", "(skipped)"),
    ("summary.failed_command", "    {} {} (exit code {})"),
    ("summary.failed_list", "Failed: {}"),
    // List command related
    ("list.envlist", "envlist: {}"),
    ("list.no_envs", "No environments configured"),
    ("list.command_count", "      {} commands"),
    ("list.default_env", "implicit default environment: {}"),
    // Show command related
    ("show.unknown_env", "unknown environment: {}"),
    ("show.toxinidir", "toxinidir: {}"),
    ("show.envlist", "envlist: {}"),
    ("show.distshare", "distshare: {}"),
    ("show.pytest_header", "[pytest]"),
    ("show.flake8_header", "[flake8]"),
    ("show.envs_header", "environments:"),
    ("show.default_env", "implicit default environment: {}"),
    ("show.basepython", "  basepython: {}"),
    ("show.group", "  group: {} ({})"),
    ("show.setenv_header", "  setenv:"),
    ("show.deps_header", "  deps:"),
    ("show.commands_header", "  commands:"),
    ("show.no_commands", "  no commands configured"),
    // Check command related
    ("check.start", "Checking configuration..."),
    ("check.no_issues", "Configuration looks good"),
    ("check.issue_details", "Configuration issues"),
    ("check.issue_counts", "{} errors, {} warnings"),
    ("check.failed", "configuration check failed with {} errors"),
    // Init command related
    ("init.start", "Initializing configuration file..."),
    ("init.config_exists", "Configuration file already exists: {}"),
    ("init.use_force_hint", "Use --force to overwrite it"),
    ("init.config_created", "Configuration file created: {}"),
    (
        "init.next_steps",
        "Edit the envlist and commands, then run `toxide run`",
    ),
    ("init.create_failed", "Failed to create configuration file: {}"),
];
