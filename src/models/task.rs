// ============================================================================
// Toxide - Job Data Model
// ============================================================================
//
// File: src/models/task.rs
// Responsibility: environment job execution data structures
// Boundaries:
//   - ✅ Job information data structures
//   - ✅ Job status enumeration
//   - ✅ Execution result data structures
//   - ✅ Execution configuration data structure
//   - ❌ No job execution logic
//   - ❌ No job scheduling logic
//   - ❌ No CLI-related logic
//
// ============================================================================

use serde::Serialize;
use std::fmt;
use std::time::{Duration, SystemTime};

/// Job status enumeration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum JobStatus {
    /// Waiting to run
    Pending,
    /// Currently running
    Running,
    /// Finished successfully
    Success,
    /// Finished with a failure
    Failed,
    /// Skipped (nothing to execute)
    Skipped,
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobStatus::Pending => write!(f, "Pending"),
            JobStatus::Running => write!(f, "Running"),
            JobStatus::Success => write!(f, "Success"),
            JobStatus::Failed => write!(f, "Failed"),
            JobStatus::Skipped => write!(f, "Skipped"),
        }
    }
}

/// Outcome of one executed command
#[derive(Debug, Clone, Serialize)]
pub struct CommandOutcome {
    /// Command line as configured
    pub line: String,
    /// Exit code (-1 when terminated by a signal)
    pub exit_code: i32,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
    /// Wall-clock duration
    pub duration: Duration,
    /// Whether the command exited zero
    pub success: bool,
    /// Whether a failure was tolerated by the `-` marker
    pub tolerated: bool,
}

/// Aggregated result of one environment job
#[derive(Debug, Clone, Serialize)]
pub struct JobResult {
    /// Whether every non-tolerated command succeeded
    pub success: bool,
    /// Total wall-clock duration
    pub duration: Duration,
    /// Per-command outcomes in execution order
    pub commands: Vec<CommandOutcome>,
}

impl JobResult {
    /// First failing non-tolerated command, if any
    pub fn first_failure(&self) -> Option<&CommandOutcome> {
        self.commands.iter().find(|outcome| !outcome.success && !outcome.tolerated)
    }
}

/// One environment execution job
#[derive(Debug, Clone, Serialize)]
pub struct Job {
    /// Job id (the environment name)
    pub id: String,
    /// Environment name
    pub env_name: String,
    /// Job status
    pub status: JobStatus,
    /// Creation time
    pub created_at: SystemTime,
    /// Start time
    pub started_at: Option<SystemTime>,
    /// Completion time
    pub completed_at: Option<SystemTime>,
    /// Execution result
    pub result: Option<JobResult>,
}

impl Job {
    /// Create a new pending job for an environment
    pub fn new(env_name: String) -> Self {
        Self {
            id: env_name.clone(),
            env_name,
            status: JobStatus::Pending,
            created_at: SystemTime::now(),
            started_at: None,
            completed_at: None,
            result: None,
        }
    }

    /// Mark the job running
    pub fn start(&mut self) {
        self.status = JobStatus::Running;
        self.started_at = Some(SystemTime::now());
    }

    /// Mark the job finished with a result
    pub fn complete(&mut self, result: JobResult) {
        self.status = if result.success { JobStatus::Success } else { JobStatus::Failed };
        self.completed_at = Some(SystemTime::now());
        self.result = Some(result);
    }

    /// Mark the job skipped
    pub fn skip(&mut self) {
        self.status = JobStatus::Skipped;
        self.completed_at = Some(SystemTime::now());
    }

    /// Execution duration, when both timestamps are known
    pub fn duration(&self) -> Option<Duration> {
        match (self.started_at, self.completed_at) {
            (Some(start), Some(end)) => end.duration_since(start).ok(),
            _ => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.status, JobStatus::Success | JobStatus::Failed | JobStatus::Skipped)
    }

    pub fn is_success(&self) -> bool {
        self.status == JobStatus::Success
    }

    pub fn is_failed(&self) -> bool {
        self.status == JobStatus::Failed
    }
}

/// Execution configuration for a run
#[derive(Debug, Clone, Serialize)]
pub struct ExecConfig {
    /// Maximum concurrent jobs (0 disables parallel execution)
    pub num_processes: usize,
    /// Per-job timeout in seconds
    pub timeout_seconds: Option<u64>,
    /// Cancel pending jobs after the first failure
    pub fail_fast: bool,
    /// Verbose log output
    pub verbose: bool,
}

impl Default for ExecConfig {
    fn default() -> Self {
        Self {
            num_processes: num_cpus::get(),
            timeout_seconds: None,
            fail_fast: false,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(success: bool, tolerated: bool) -> CommandOutcome {
        CommandOutcome {
            line: "cmd".to_string(),
            exit_code: if success { 0 } else { 1 },
            stdout: String::new(),
            stderr: String::new(),
            duration: Duration::from_millis(1),
            success,
            tolerated,
        }
    }

    #[test]
    fn job_lifecycle() {
        let mut job = Job::new("lint".to_string());
        assert_eq!(job.status, JobStatus::Pending);
        assert!(!job.is_completed());

        job.start();
        assert_eq!(job.status, JobStatus::Running);

        job.complete(JobResult {
            success: true,
            duration: Duration::from_millis(5),
            commands: vec![outcome(true, false)],
        });
        assert!(job.is_success());
        assert!(job.is_completed());
        assert!(job.duration().is_some());
    }

    #[test]
    fn failed_result_marks_job_failed() {
        let mut job = Job::new("test".to_string());
        job.start();
        job.complete(JobResult {
            success: false,
            duration: Duration::from_millis(5),
            commands: vec![outcome(false, false)],
        });
        assert!(job.is_failed());
    }

    #[test]
    fn first_failure_skips_tolerated_commands() {
        let result = JobResult {
            success: false,
            duration: Duration::from_millis(1),
            commands: vec![outcome(false, true), outcome(true, false), outcome(false, false)],
        };
        let failure = result.first_failure().unwrap();
        assert!(!failure.tolerated);
        assert_eq!(failure.exit_code, 1);
    }
}
