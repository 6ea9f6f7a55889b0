// ============================================================================
// Toxide - Environment Executor
// ============================================================================
//
// File: src/core/executor.rs
// Responsibility: environment and command execution
// Boundaries:
//   - ✅ Single environment execution
//   - ✅ Command spawning and output capture
//   - ✅ Failure-tolerance policy (`-` marker)
//   - ✅ Phase loop and parallel dispatch
//   - ❌ No group planning logic
//   - ❌ No concurrency primitives (core::scheduler)
//   - ❌ No CLI argument handling
//
// ============================================================================

use crate::core::batcher::{self, EnvGroup, Phase};
use crate::core::scheduler::{JobOutcome, JobScheduler, SchedulerConfig};
use crate::models::config::Config;
use crate::models::env::{EnvCommand, TestEnv};
use crate::models::task::{CommandOutcome, ExecConfig, Job, JobResult, JobStatus};
use crate::ui::runner::RunnerUI;
use crate::utils::logger::Logger;
use crate::{t, tf};
use anyhow::Result;
use std::collections::HashMap;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::process::Stdio;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Shared per-run job registry, updated from inside job futures
type JobRegistry = Arc<Mutex<HashMap<String, Job>>>;

/// Boxed job future handed to the scheduler
type JobFuture = Pin<Box<dyn Future<Output = Result<()>> + Send + 'static>>;

/// Aggregated outcome of one `run` invocation
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Jobs in selection order
    pub jobs: Vec<Job>,
    /// Total wall-clock duration
    pub duration: Duration,
}

impl RunReport {
    pub fn total(&self) -> usize {
        self.jobs.len()
    }

    pub fn passed(&self) -> usize {
        self.jobs.iter().filter(|job| job.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.jobs.iter().filter(|job| job.is_failed()).count()
    }

    pub fn skipped(&self) -> usize {
        self.jobs.iter().filter(|job| job.status == JobStatus::Skipped).count()
    }

    /// Names of failed environments in selection order
    pub fn failed_envs(&self) -> Vec<String> {
        self.jobs.iter().filter(|job| job.is_failed()).map(|job| job.env_name.clone()).collect()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// Run one command of an environment and capture its output.
///
/// A spawn failure (missing program, permission) is reported as a failed
/// outcome rather than a hard error, so the tolerance marker applies to
/// it like to any non-zero exit.
async fn run_command(env: &TestEnv, command: &EnvCommand, workdir: &Path) -> CommandOutcome {
    let start_time = Instant::now();

    let program = command.program().unwrap_or_default();
    let mut child = tokio::process::Command::new(program);
    child
        .args(&command.argv[1..])
        .current_dir(workdir)
        .envs(&env.setenv)
        .env("TOX_ENV_NAME", &env.name)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    if Config::get_verbose() {
        Logger::info(tf!("executor.command_run", &env.name, &command.line));
    }

    let outcome = match child.output().await {
        Ok(output) => {
            let exit_code = output.status.code().unwrap_or(-1);
            let stdout = String::from_utf8_lossy(&output.stdout).to_string();
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            CommandOutcome {
                line: command.line.clone(),
                exit_code,
                stdout,
                stderr,
                duration: start_time.elapsed(),
                success: output.status.success(),
                tolerated: command.tolerate_failure,
            }
        }
        Err(e) => CommandOutcome {
            line: command.line.clone(),
            exit_code: -1,
            stdout: String::new(),
            stderr: tf!("executor.command_spawn_failed", program, e),
            duration: start_time.elapsed(),
            success: false,
            tolerated: command.tolerate_failure,
        },
    };

    if Config::get_verbose() {
        if !outcome.stdout.is_empty() {
            Logger::info(tf!("executor.command_stdout", &outcome.stdout));
        }
        if !outcome.stderr.is_empty() {
            Logger::warn(tf!("executor.command_stderr", &outcome.stderr));
        }
    }

    outcome
}

/// Execute one environment: its commands in order, honoring the `-`
/// failure-tolerance marker. Returns Err when a non-tolerated command
/// failed, so the scheduler counts the job as failed.
async fn execute_env_job(
    env: TestEnv,
    workdir: PathBuf,
    registry: JobRegistry,
    ui: Option<Arc<Mutex<RunnerUI>>>,
) -> Result<()> {
    let job_id = env.name.clone();
    let verbose = Config::get_verbose();

    if !env.has_commands() {
        mark_skipped(&registry, &job_id);
        if let Some(ui) = &ui {
            ui.lock().unwrap().skip_env(&job_id, Some(t!("executor.no_commands")));
        } else if verbose {
            Logger::warn(tf!("executor.env_skipped", &job_id));
        }
        return Ok(());
    }

    mark_running(&registry, &job_id);
    if let Some(ui) = &ui {
        ui.lock().unwrap().start_env(&job_id);
    } else if verbose {
        Logger::info(tf!("executor.env_start", &job_id));
    }

    let start_time = Instant::now();
    let mut outcomes: Vec<CommandOutcome> = Vec::new();
    let mut failure: Option<String> = None;

    for command in &env.commands {
        if command.argv.is_empty() {
            continue;
        }
        let outcome = run_command(&env, command, &workdir).await;
        let success = outcome.success;
        let tolerated = outcome.tolerated;
        outcomes.push(outcome);

        if !success {
            if tolerated {
                if verbose {
                    Logger::warn(tf!("executor.command_tolerated", &job_id, &command.line));
                }
            } else {
                // Remaining commands of this environment are skipped
                failure = Some(tf!(
                    "executor.command_failed",
                    &command.line,
                    outcomes.last().map(|o| o.exit_code).unwrap_or(-1)
                ));
                break;
            }
        }
    }

    let result = JobResult {
        success: failure.is_none(),
        duration: start_time.elapsed(),
        commands: outcomes,
    };
    let stderr_excerpt = result
        .first_failure()
        .map(|outcome| {
            if outcome.stderr.is_empty() { outcome.stdout.clone() } else { outcome.stderr.clone() }
        })
        .unwrap_or_default();
    mark_complete(&registry, &job_id, result);

    match failure {
        None => {
            if let Some(ui) = &ui {
                ui.lock().unwrap().complete_env(&job_id);
            } else if verbose {
                Logger::success(tf!(
                    "executor.env_success",
                    &job_id,
                    start_time.elapsed().as_secs_f64()
                ));
            }
            Ok(())
        }
        Some(message) => {
            if let Some(ui) = &ui {
                ui.lock().unwrap().fail_env(&job_id, message.clone());
            } else if verbose {
                Logger::error(tf!(
                    "executor.env_failed",
                    &job_id,
                    start_time.elapsed().as_secs_f64()
                ));
                if !stderr_excerpt.is_empty() {
                    Logger::error(tf!("executor.env_stderr", stderr_excerpt.trim_end()));
                }
            }
            anyhow::bail!(message)
        }
    }
}

fn mark_running(registry: &JobRegistry, job_id: &str) {
    if let Some(job) = registry.lock().unwrap().get_mut(job_id) {
        job.start();
    }
}

fn mark_skipped(registry: &JobRegistry, job_id: &str) {
    if let Some(job) = registry.lock().unwrap().get_mut(job_id) {
        job.skip();
    }
}

fn mark_complete(registry: &JobRegistry, job_id: &str, result: JobResult) {
    if let Some(job) = registry.lock().unwrap().get_mut(job_id) {
        job.complete(result);
    }
}

fn mark_failed_without_result(registry: &JobRegistry, job_id: &str, duration: Duration) {
    if let Some(job) = registry.lock().unwrap().get_mut(job_id) {
        job.complete(JobResult { success: false, duration, commands: Vec::new() });
    }
}

/// Environment executor
pub struct EnvExecutor {
    /// Execution configuration
    config: ExecConfig,
    /// Directory commands run in (the config file's directory)
    workdir: PathBuf,
}

impl EnvExecutor {
    /// Create a new executor
    pub fn new(config: ExecConfig, workdir: PathBuf) -> Self {
        Self { config, workdir }
    }

    /// Create an executor from the global configuration and resolved
    /// parallel options
    pub fn new_from_config(num_processes: usize) -> Result<Self> {
        let snapshot = Config::snapshot()?;
        let config = ExecConfig {
            num_processes,
            timeout_seconds: snapshot.execution.timeout_seconds,
            fail_fast: snapshot.execution.fail_fast,
            verbose: snapshot.output.verbose,
        };
        Ok(Self::new(config, snapshot.toxinidir))
    }

    /// Execute the selected environments and aggregate a run report
    pub async fn execute_envs(&self, envs: Vec<TestEnv>) -> Result<RunReport> {
        let run_start = Instant::now();

        let order: Vec<String> = envs.iter().map(|env| env.name.clone()).collect();
        let groups = batcher::plan_groups(&envs)?;
        let phases = batcher::build_phases(groups);

        Logger::info(tf!("run.env_count", order.len()));

        let registry: JobRegistry = Arc::new(Mutex::new(
            order.iter().map(|name| (name.clone(), Job::new(name.clone()))).collect(),
        ));

        // Live UI only when neither verbose logging nor plain output is on
        let ui = if !self.config.verbose && Config::get_show_progress() {
            let ui = Arc::new(Mutex::new(RunnerUI::new()));

            ui.lock().unwrap().set_self_ref(Arc::downgrade(&ui));
            ui.lock().unwrap().set_total_phases(phases.len());

            for phase in &phases {
                for group in &phase.groups {
                    for env in &group.envs {
                        ui.lock().unwrap().add_env(env.name.clone(), group.name.clone());
                    }
                }
            }

            Some(ui)
        } else {
            None
        };

        for (phase_idx, phase) in phases.iter().enumerate() {
            if let Some(ui) = &ui {
                let mut ui_lock = ui.lock().unwrap();
                ui_lock.start_phase(phase_idx + 1);
                let phase_envs: Vec<String> = phase
                    .groups
                    .iter()
                    .flat_map(|group| group.envs.iter().map(|env| env.name.clone()))
                    .collect();
                ui_lock.set_phase_envs(phase_envs);
            } else if self.config.verbose {
                Logger::info(tf!("executor.phase_start", phase_idx + 1, phases.len()));
            }

            let phase_failed = if self.config.num_processes == 0 {
                self.execute_phase_serial(phase, &registry, ui.clone()).await
            } else {
                self.execute_phase_parallel(phase, &registry, ui.clone()).await
            };

            if phase_failed && self.config.fail_fast {
                if self.config.verbose {
                    Logger::warn(t!("executor.fail_fast_stop"));
                }
                break;
            }
        }

        if let Some(ui) = &ui {
            ui.lock().unwrap().finish();
        }

        let jobs_by_name = registry.lock().unwrap().clone();
        let jobs = order
            .into_iter()
            .filter_map(|name| jobs_by_name.get(&name).cloned())
            .collect();

        Ok(RunReport { jobs, duration: run_start.elapsed() })
    }

    /// Serial path: parallel execution disabled, every environment runs
    /// in rank order on the current task
    async fn execute_phase_serial(
        &self,
        phase: &Phase,
        registry: &JobRegistry,
        ui: Option<Arc<Mutex<RunnerUI>>>,
    ) -> bool {
        let mut phase_failed = false;

        for group in &phase.groups {
            for env in &group.envs {
                let job = execute_env_job(
                    env.clone(),
                    self.workdir.clone(),
                    Arc::clone(registry),
                    ui.clone(),
                );
                let result = match self.config.timeout_seconds {
                    Some(secs) => {
                        match tokio::time::timeout(Duration::from_secs(secs), job).await {
                            Ok(result) => result,
                            Err(_) => {
                                mark_failed_without_result(
                                    registry,
                                    &env.name,
                                    Duration::from_secs(secs),
                                );
                                if let Some(ui) = &ui {
                                    ui.lock()
                                        .unwrap()
                                        .fail_env(&env.name, tf!("executor.env_timeout", &env.name));
                                }
                                Err(anyhow::anyhow!(tf!("executor.env_timeout", &env.name)))
                            }
                        }
                    }
                    None => job.await,
                };
                if result.is_err() {
                    phase_failed = true;
                    if self.config.fail_fast {
                        return true;
                    }
                }
            }
        }

        phase_failed
    }

    /// Parallel path: free groups contribute one job per environment,
    /// serial groups one job for the whole group. The batch call drains
    /// the pool before returning, which is what phase isolation relies on.
    async fn execute_phase_parallel(
        &self,
        phase: &Phase,
        registry: &JobRegistry,
        ui: Option<Arc<Mutex<RunnerUI>>>,
    ) -> bool {
        let scheduler_config = SchedulerConfig {
            max_concurrency: self.config.num_processes,
            timeout: self.config.timeout_seconds.map(Duration::from_secs),
            fail_fast: self.config.fail_fast,
            verbose: self.config.verbose,
            progress_callback: None,
        };
        let scheduler = JobScheduler::new(scheduler_config);

        let mut batch: Vec<(String, JobFuture)> = Vec::new();
        let mut group_members: HashMap<String, Vec<String>> = HashMap::new();
        for group in &phase.groups {
            if group.strategy.is_serial() {
                let (job_id, future) = self.serial_group_job(group, registry, ui.clone());
                group_members
                    .insert(job_id.clone(), group.envs.iter().map(|env| env.name.clone()).collect());
                batch.push((job_id, future));
            } else {
                for env in &group.envs {
                    let future: JobFuture = Box::pin(execute_env_job(
                        env.clone(),
                        self.workdir.clone(),
                        Arc::clone(registry),
                        ui.clone(),
                    ));
                    batch.push((env.name.clone(), future));
                }
            }
        }

        let results = scheduler.execute_batch(batch).await;

        let mut phase_failed = false;
        for (job_id, outcome) in results {
            match outcome {
                JobOutcome::Success(_) => {}
                JobOutcome::Failed(err) => {
                    phase_failed = true;
                    if self.config.verbose {
                        Logger::error(tf!("executor.job_failed", &job_id, &err));
                    }
                }
                JobOutcome::Timeout => {
                    phase_failed = true;
                    // The job future was dropped mid-run; its registry entry
                    // still says Running and needs a terminal state.
                    self.reconcile_timeout(&job_id, &group_members, registry, ui.as_ref());
                    Logger::error(tf!("executor.env_timeout", &job_id));
                }
                JobOutcome::Cancelled => {
                    self.reconcile_cancelled(&job_id, &group_members, registry, ui.as_ref());
                    if self.config.verbose {
                        Logger::warn(tf!("executor.job_cancelled", &job_id));
                    }
                }
            }
        }

        phase_failed
    }

    /// One scheduler job running a whole serial group in member order.
    /// A member failure does not stop the remaining members; the job
    /// fails if any member failed.
    fn serial_group_job(
        &self,
        group: &EnvGroup,
        registry: &JobRegistry,
        ui: Option<Arc<Mutex<RunnerUI>>>,
    ) -> (String, JobFuture) {
        let group_name = group.name.clone();
        let envs = group.envs.clone();
        let workdir = self.workdir.clone();
        let registry = Arc::clone(registry);

        let future: JobFuture = Box::pin(async move {
            let mut failed: Vec<String> = Vec::new();
            for env in envs {
                let name = env.name.clone();
                if execute_env_job(env, workdir.clone(), Arc::clone(&registry), ui.clone())
                    .await
                    .is_err()
                {
                    failed.push(name);
                }
            }
            if failed.is_empty() {
                Ok(())
            } else {
                anyhow::bail!(tf!("executor.group_failed", group_name, failed.join(", ")))
            }
        });

        (format!("group:{}", group.name), future)
    }

    fn reconcile_timeout(
        &self,
        job_id: &str,
        group_members: &HashMap<String, Vec<String>>,
        registry: &JobRegistry,
        ui: Option<&Arc<Mutex<RunnerUI>>>,
    ) {
        let ids = member_ids(job_id, group_members);
        for id in ids {
            let running = registry
                .lock()
                .unwrap()
                .get(&id)
                .map(|job| job.status == JobStatus::Running || job.status == JobStatus::Pending)
                .unwrap_or(false);
            if running {
                let timeout = self.config.timeout_seconds.unwrap_or(0);
                mark_failed_without_result(registry, &id, Duration::from_secs(timeout));
                if let Some(ui) = ui {
                    ui.lock().unwrap().fail_env(&id, tf!("executor.env_timeout", &id));
                }
            }
        }
    }

    fn reconcile_cancelled(
        &self,
        job_id: &str,
        group_members: &HashMap<String, Vec<String>>,
        registry: &JobRegistry,
        ui: Option<&Arc<Mutex<RunnerUI>>>,
    ) {
        let ids = member_ids(job_id, group_members);
        for id in ids {
            let pending = registry
                .lock()
                .unwrap()
                .get(&id)
                .map(|job| job.status == JobStatus::Pending)
                .unwrap_or(false);
            if pending {
                mark_skipped(registry, &id);
                if let Some(ui) = ui {
                    ui.lock().unwrap().skip_env(&id, Some(t!("executor.cancelled")));
                }
            }
        }
    }

}

/// Environments covered by a scheduler job id. A `group:` id stands for
/// exactly the members of that group, never for environments of other
/// phases still pending in the registry.
fn member_ids(job_id: &str, group_members: &HashMap<String, Vec<String>>) -> Vec<String> {
    match group_members.get(job_id) {
        Some(members) => members.clone(),
        None => vec![job_id.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_with_commands(name: &str, lines: &[&str]) -> TestEnv {
        let mut env = TestEnv::new(name.to_string());
        env.commands = lines.iter().map(|line| EnvCommand::from_line(line)).collect();
        env
    }

    fn executor(num_processes: usize) -> EnvExecutor {
        EnvExecutor::new(
            ExecConfig { num_processes, timeout_seconds: None, fail_fast: false, verbose: false },
            std::env::temp_dir(),
        )
    }

    #[tokio::test]
    async fn passing_env_is_reported_success() {
        let report =
            executor(0).execute_envs(vec![env_with_commands("ok", &["true"])]).await.unwrap();
        assert_eq!(report.total(), 1);
        assert_eq!(report.passed(), 1);
        assert!(report.is_success());
    }

    #[tokio::test]
    async fn failing_command_fails_the_env_and_skips_the_rest() {
        let report = executor(0)
            .execute_envs(vec![env_with_commands("bad", &["false", "true"])])
            .await
            .unwrap();
        assert_eq!(report.failed(), 1);
        assert_eq!(report.failed_envs(), vec!["bad"]);

        // The second command never ran
        let job = &report.jobs[0];
        let result = job.result.as_ref().unwrap();
        assert_eq!(result.commands.len(), 1);
        assert!(!result.commands[0].success);
    }

    #[tokio::test]
    async fn tolerated_failure_continues_with_later_commands() {
        let report = executor(0)
            .execute_envs(vec![env_with_commands("tolerant", &["- false", "true"])])
            .await
            .unwrap();
        assert_eq!(report.passed(), 1);

        let result = report.jobs[0].result.as_ref().unwrap();
        assert_eq!(result.commands.len(), 2);
        assert!(!result.commands[0].success);
        assert!(result.commands[0].tolerated);
        assert!(result.commands[1].success);
    }

    #[tokio::test]
    async fn env_without_commands_is_skipped() {
        let report =
            executor(0).execute_envs(vec![TestEnv::new("empty".to_string())]).await.unwrap();
        assert_eq!(report.skipped(), 1);
        assert!(report.is_success());
    }

    #[tokio::test]
    async fn missing_program_fails_like_a_nonzero_exit() {
        let report = executor(0)
            .execute_envs(vec![env_with_commands("ghost", &["toxide-no-such-program-xyz"])])
            .await
            .unwrap();
        assert_eq!(report.failed(), 1);
        let result = report.jobs[0].result.as_ref().unwrap();
        assert_eq!(result.commands[0].exit_code, -1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn parallel_run_executes_every_env() {
        let envs = vec![
            env_with_commands("a", &["true"]),
            env_with_commands("b", &["true"]),
            env_with_commands("c", &["false"]),
        ];
        let report = executor(4).execute_envs(envs).await.unwrap();
        assert_eq!(report.total(), 3);
        assert_eq!(report.passed(), 2);
        assert_eq!(report.failed_envs(), vec!["c"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn serial_group_runs_all_members_despite_failure() {
        let mut first = env_with_commands("first", &["false"]);
        first.group = Some("suite".to_string());
        first.group_strategy = Some(crate::models::env::GroupStrategy::Serial);
        let mut second = env_with_commands("second", &["true"]);
        second.group = Some("suite".to_string());

        let report = executor(2).execute_envs(vec![first, second]).await.unwrap();
        assert_eq!(report.failed_envs(), vec!["first"]);
        assert_eq!(report.passed(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn group_timeout_leaves_later_phases_untouched() {
        let mut slow = env_with_commands("slow", &["sleep 5"]);
        slow.group = Some("suite".to_string());
        slow.group_strategy = Some(crate::models::env::GroupStrategy::Serial);
        let mut later = env_with_commands("later", &["true"]);
        later.group = Some("alone".to_string());
        later.group_strategy = Some(crate::models::env::GroupStrategy::IsolatedFree);

        let executor = EnvExecutor::new(
            ExecConfig {
                num_processes: 2,
                timeout_seconds: Some(1),
                fail_fast: true,
                verbose: false,
            },
            std::env::temp_dir(),
        );
        let report = executor.execute_envs(vec![slow, later]).await.unwrap();

        // Only the timed-out group member failed; the isolated environment
        // of the next phase never ran and keeps its pending state.
        assert_eq!(report.failed_envs(), vec!["slow"]);
        let later_job = report.jobs.iter().find(|job| job.env_name == "later").unwrap();
        assert_eq!(later_job.status, JobStatus::Pending);
    }

    #[tokio::test]
    async fn setenv_reaches_the_child_process() {
        let mut env = env_with_commands("envcheck", &["sh -c 'test \"$PROBE\" = yes'"]);
        env.setenv.insert("PROBE".to_string(), "yes".to_string());
        let report = executor(0).execute_envs(vec![env]).await.unwrap();
        assert!(report.is_success());
    }
}
