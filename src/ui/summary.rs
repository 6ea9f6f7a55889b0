// ============================================================================
// Toxide - Run Summary Component
// ============================================================================
//
// File: src/ui/summary.rs
// Responsibility: formatted summary output after a run or check
// Boundaries:
//   - ✅ Run result summary display
//   - ✅ Per-environment result lines
//   - ✅ Failed command detail display
//   - ✅ Configuration issue tables
//   - ❌ No execution logic
//   - ❌ No configuration parsing
//
// ============================================================================

use std::io::{self, Write};

use crate::core::executor::RunReport;
use crate::models::config::{ConfigIssue, IssueSeverity};
use crate::models::task::JobStatus;
use crate::utils::colors::Colors;
use crate::utils::constants::icons;
use crate::utils::logger::Logger;
use crate::utils::styles::TextStyles;
use crate::{t, tf};

/// Render the summary block of a finished run
pub fn render_run_summary(report: &RunReport) {
    let summary_lines = vec![
        "".to_string(),
        TextStyles::bold(&t!("summary.header")),
        "═══════════════════════════════════════".to_string(),
        format!("{} {}", icons::ENV, tf!("summary.total_envs", report.total())),
        format!("{} {}", icons::SUCCESS, tf!("summary.passed_envs", report.passed())),
        format!("{} {}", icons::ERROR, tf!("summary.failed_envs", report.failed())),
        format!("{} {}", icons::SKIP, tf!("summary.skipped_envs", report.skipped())),
        format!(
            "{} {}",
            icons::TIME,
            tf!("summary.duration", report.duration.as_secs_f64())
        ),
    ];

    for line in summary_lines {
        Logger::info(line);
    }

    render_env_results(report);

    let _ = io::stdout().flush();
}

/// One line per environment, with failed command details below
fn render_env_results(report: &RunReport) {
    Logger::info("");
    Logger::info(t!("summary.env_results"));
    Logger::info("───────────────────────────────────────");

    for job in &report.jobs {
        let duration = job
            .duration()
            .map(|d| tf!("summary.env_duration", d.as_secs_f64()))
            .unwrap_or_default();

        match job.status {
            JobStatus::Success => {
                Logger::info(format!(
                    "  {} {} {}",
                    icons::SUCCESS,
                    Colors::success(&job.env_name),
                    duration
                ));
            }
            JobStatus::Failed => {
                Logger::info(format!(
                    "  {} {} {}",
                    icons::ERROR,
                    Colors::error(&job.env_name),
                    duration
                ));
                render_failure_details(job);
            }
            JobStatus::Skipped => {
                Logger::info(format!(
                    "  {} {} {}",
                    icons::SKIP,
                    job.env_name,
                    t!("summary.env_skipped")
                ));
            }
            JobStatus::Pending | JobStatus::Running => {
                Logger::info(format!("  {} {}", icons::PENDING, job.env_name));
            }
        }
    }

    let failed = report.failed_envs();
    if !failed.is_empty() {
        Logger::info("");
        Logger::error(tf!("summary.failed_list", failed.join(", ")));
    }
}

fn render_failure_details(job: &crate::models::task::Job) {
    let failure = job.result.as_ref().and_then(|result| result.first_failure());
    if let Some(outcome) = failure {
        Logger::info(tf!("summary.failed_command", icons::ARROW, outcome.line, outcome.exit_code));
        let excerpt = if outcome.stderr.trim().is_empty() {
            outcome.stdout.trim_end()
        } else {
            outcome.stderr.trim_end()
        };
        // Last few lines are usually the ones that matter
        for line in excerpt.lines().rev().take(5).collect::<Vec<_>>().into_iter().rev() {
            Logger::info(format!("      {}", line));
        }
    }
}

/// Print configuration issues found by the check command.
/// Returns the number of errors (warnings do not count).
pub fn print_config_issues(issues: &[ConfigIssue]) -> usize {
    if issues.is_empty() {
        Logger::success(t!("check.no_issues"));
        return 0;
    }

    Logger::info("");
    Logger::info(t!("check.issue_details"));
    Logger::info("───────────────────────────────────────");

    let mut errors = 0;
    for issue in issues {
        match issue.severity {
            IssueSeverity::Error => {
                errors += 1;
                Logger::error(format!("  {} {}", icons::ERROR, issue.message));
            }
            IssueSeverity::Warning => {
                Logger::warn(format!("  {} {}", icons::WARNING, issue.message));
            }
        }
    }

    Logger::info("");
    Logger::info(tf!("check.issue_counts", errors, issues.len() - errors));
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::{ConfigIssue, IssueSeverity};

    #[test]
    fn error_count_ignores_warnings() {
        let issues = vec![
            ConfigIssue {
                severity: IssueSeverity::Warning,
                message: "envlist names an unknown section".to_string(),
            },
            ConfigIssue {
                severity: IssueSeverity::Error,
                message: "max_complexity must not be negative".to_string(),
            },
        ];
        assert_eq!(print_config_issues(&issues), 1);
    }

    #[test]
    fn no_issues_reports_zero_errors() {
        assert_eq!(print_config_issues(&[]), 0);
    }
}
