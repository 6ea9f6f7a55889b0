// ============================================================================
// Toxide - Async Job Scheduler
// ============================================================================
//
// File: src/core/scheduler.rs
// Responsibility: generic async job scheduling and concurrency control
// Boundaries:
//   - ✅ Async job scheduling and execution
//   - ✅ Worker pool size control
//   - ✅ Job timeout management
//   - ✅ Result aggregation and counters
//   - ✅ Generic future execution support
//   - ❌ No environment-specific logic
//   - ❌ No command execution details
//   - ❌ No UI display logic
//
// ============================================================================

use crate::utils::logger::Logger;
use crate::{t, tf};
use anyhow::Result;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{RwLock, Semaphore};
use tokio::task::JoinHandle;
use tokio::time::timeout;

/// Scheduler-level job outcome
#[derive(Debug, Clone)]
pub enum JobOutcome<T> {
    /// Job finished successfully
    Success(T),
    /// Job finished with an error
    Failed(String),
    /// Job exceeded its timeout
    Timeout,
    /// Job was cancelled before running
    Cancelled,
}

impl<T> JobOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, JobOutcome::Success(_))
    }
}

/// Tracked state of one scheduled job
#[derive(Debug, Clone)]
pub struct ScheduledJobStatus {
    /// Job id
    pub id: String,
    /// Start instant
    pub started_at: Instant,
    /// Completion instant
    pub completed_at: Option<Instant>,
    /// Whether the job has completed
    pub is_completed: bool,
    /// Whether the job succeeded
    pub is_success: bool,
}

/// Progress callback type (completed, total)
pub type ProgressCallback = Arc<dyn Fn(usize, usize) + Send + Sync>;

/// Scheduler configuration
#[derive(Clone)]
pub struct SchedulerConfig {
    /// Maximum concurrent jobs
    pub max_concurrency: usize,
    /// Per-job timeout (None means unlimited)
    pub timeout: Option<Duration>,
    /// Cancel jobs not yet started after the first failure
    pub fail_fast: bool,
    /// Verbose log output
    pub verbose: bool,
    /// Progress callback (completed, total)
    pub progress_callback: Option<ProgressCallback>,
}

impl std::fmt::Debug for SchedulerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchedulerConfig")
            .field("max_concurrency", &self.max_concurrency)
            .field("timeout", &self.timeout)
            .field("fail_fast", &self.fail_fast)
            .field("verbose", &self.verbose)
            .field("has_progress_callback", &self.progress_callback.is_some())
            .finish()
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_concurrency: num_cpus::get(),
            timeout: None,
            fail_fast: false,
            verbose: false,
            progress_callback: None,
        }
    }
}

/// Async job scheduler with a bounded worker pool.
///
/// `execute_batch` returns only after every spawned job has been joined,
/// so callers get a drained pool between consecutive batches.
pub struct JobScheduler {
    /// Scheduler configuration
    config: SchedulerConfig,
    /// Concurrency-limiting semaphore
    semaphore: Arc<Semaphore>,
    /// Job status tracking
    job_status: Arc<RwLock<HashMap<String, ScheduledJobStatus>>>,
    /// Stop flag for fail-fast cancellation
    should_stop: Arc<RwLock<bool>>,
    /// Completed job counter
    completed_count: Arc<RwLock<usize>>,
    /// Successful job counter
    successful_count: Arc<RwLock<usize>>,
    /// Failed job counter
    failed_count: Arc<RwLock<usize>>,
}

impl JobScheduler {
    /// Create a new scheduler
    pub fn new(config: SchedulerConfig) -> Self {
        let semaphore = Arc::new(Semaphore::new(config.max_concurrency.max(1)));

        Self {
            config,
            semaphore,
            job_status: Arc::new(RwLock::new(HashMap::new())),
            should_stop: Arc::new(RwLock::new(false)),
            completed_count: Arc::new(RwLock::new(0)),
            successful_count: Arc::new(RwLock::new(0)),
            failed_count: Arc::new(RwLock::new(0)),
        }
    }

    /// Execute a single async job under the pool limit
    pub async fn execute_job<T, F>(&self, job_id: String, job: F) -> JobOutcome<T>
    where
        T: Send + 'static,
        F: Future<Output = Result<T>> + Send + 'static,
    {
        if *self.should_stop.read().await {
            return JobOutcome::Cancelled;
        }

        let _permit = match self.semaphore.acquire().await {
            Ok(permit) => permit,
            Err(_) => return JobOutcome::Cancelled,
        };

        // Re-check after waiting for a worker slot; fail-fast may have
        // triggered while this job was queued.
        if *self.should_stop.read().await {
            return JobOutcome::Cancelled;
        }

        let start_time = Instant::now();
        self.record_job_start(&job_id, start_time).await;

        if self.config.verbose {
            Logger::info(tf!("scheduler.job_start", &job_id));
        }

        let result = match self.config.timeout {
            Some(timeout_duration) => match timeout(timeout_duration, job).await {
                Ok(job_result) => match job_result {
                    Ok(value) => JobOutcome::Success(value),
                    Err(e) => JobOutcome::Failed(e.to_string()),
                },
                Err(_) => JobOutcome::Timeout,
            },
            None => match job.await {
                Ok(value) => JobOutcome::Success(value),
                Err(e) => JobOutcome::Failed(e.to_string()),
            },
        };

        let is_success = result.is_success();
        self.record_job_completion(&job_id, is_success).await;
        self.update_counters_and_progress(is_success).await;

        if self.config.fail_fast && !is_success {
            *self.should_stop.write().await = true;
            if self.config.verbose {
                Logger::warn(tf!("scheduler.fail_fast_triggered", &job_id));
            }
        }

        if self.config.verbose {
            let duration = start_time.elapsed();
            match &result {
                JobOutcome::Success(_) => {
                    Logger::info(tf!("scheduler.job_success", &job_id, duration.as_secs_f64()));
                }
                JobOutcome::Failed(err) => {
                    Logger::error(tf!("scheduler.job_failed", &job_id, duration.as_secs_f64(), err));
                }
                JobOutcome::Timeout => {
                    Logger::warn(tf!("scheduler.job_timeout", &job_id, duration.as_secs_f64()));
                }
                JobOutcome::Cancelled => {
                    Logger::warn(tf!("scheduler.job_cancelled", &job_id));
                }
            }
        }

        result
    }

    /// Execute a batch of jobs concurrently and join them all
    pub async fn execute_batch<T, F>(&self, jobs: Vec<(String, F)>) -> Vec<(String, JobOutcome<T>)>
    where
        T: Send + 'static,
        F: Future<Output = Result<T>> + Send + 'static,
    {
        if jobs.is_empty() {
            return Vec::new();
        }

        if self.config.verbose {
            Logger::info(tf!("scheduler.batch_start", jobs.len()));
        }

        let mut handles: Vec<JoinHandle<(String, JobOutcome<T>)>> = Vec::new();

        for (job_id, job) in jobs {
            let scheduler = self.clone_for_job();
            let job_id_clone = job_id.clone();

            let handle = tokio::spawn(async move {
                let result = scheduler.execute_job(job_id_clone.clone(), job).await;
                (job_id_clone, result)
            });

            handles.push(handle);
        }

        let mut results = Vec::new();
        for handle in handles {
            match handle.await {
                Ok((job_id, result)) => results.push((job_id, result)),
                Err(e) => {
                    Logger::error(tf!("scheduler.job_join_error", e.to_string()));
                }
            }
        }

        if self.config.verbose {
            let success_count = results.iter().filter(|(_, result)| result.is_success()).count();
            Logger::info(tf!("scheduler.batch_complete", success_count, results.len()));
        }

        results
    }

    /// Snapshot of one job's tracked status
    pub async fn job_status(&self, job_id: &str) -> Option<ScheduledJobStatus> {
        self.job_status.read().await.get(job_id).cloned()
    }

    /// Stop all jobs that have not started yet
    pub async fn stop_all(&self) {
        *self.should_stop.write().await = true;
        if self.config.verbose {
            Logger::warn(t!("scheduler.stopping_all_jobs"));
        }
    }

    /// Current progress as (completed, total)
    pub async fn progress(&self) -> (usize, usize) {
        let completed = *self.completed_count.read().await;
        let total = self.job_status.read().await.len();

        (completed, total)
    }

    /// Detailed counters as (completed, total, successful, failed)
    pub async fn detailed_progress(&self) -> (usize, usize, usize, usize) {
        let completed = *self.completed_count.read().await;
        let total = self.job_status.read().await.len();
        let successful = *self.successful_count.read().await;
        let failed = *self.failed_count.read().await;

        (completed, total, successful, failed)
    }

    async fn record_job_start(&self, job_id: &str, start_time: Instant) {
        let status = ScheduledJobStatus {
            id: job_id.to_string(),
            started_at: start_time,
            completed_at: None,
            is_completed: false,
            is_success: false,
        };

        self.job_status.write().await.insert(job_id.to_string(), status);
    }

    async fn record_job_completion(&self, job_id: &str, is_success: bool) {
        if let Some(status) = self.job_status.write().await.get_mut(job_id) {
            status.completed_at = Some(Instant::now());
            status.is_completed = true;
            status.is_success = is_success;
        }
    }

    async fn update_counters_and_progress(&self, is_success: bool) {
        {
            let mut completed = self.completed_count.write().await;
            *completed += 1;
        }

        if is_success {
            let mut successful = self.successful_count.write().await;
            *successful += 1;
        } else {
            let mut failed = self.failed_count.write().await;
            *failed += 1;
        }

        if let Some(callback) = &self.config.progress_callback {
            let completed = *self.completed_count.read().await;
            let total = self.job_status.read().await.len();

            callback(completed, total);
        }
    }

    /// Shallow clone sharing pool state, for spawned job futures
    fn clone_for_job(&self) -> Self {
        Self {
            config: self.config.clone(),
            semaphore: Arc::clone(&self.semaphore),
            job_status: Arc::clone(&self.job_status),
            should_stop: Arc::clone(&self.should_stop),
            completed_count: Arc::clone(&self.completed_count),
            successful_count: Arc::clone(&self.successful_count),
            failed_count: Arc::clone(&self.failed_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn scheduler(max_concurrency: usize) -> JobScheduler {
        JobScheduler::new(SchedulerConfig { max_concurrency, ..Default::default() })
    }

    #[tokio::test]
    async fn batch_collects_all_results() {
        let scheduler = scheduler(4);
        let jobs = vec![
            ("a".to_string(), futures_val(1)),
            ("b".to_string(), futures_val(2)),
        ];
        let results = scheduler.execute_batch(jobs).await;
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|(_, outcome)| outcome.is_success()));

        let (completed, total, successful, failed) = scheduler.detailed_progress().await;
        assert_eq!((completed, total, successful, failed), (2, 2, 2, 0));
    }

    #[tokio::test]
    async fn failures_are_counted_not_propagated() {
        let scheduler = scheduler(2);
        let jobs = vec![
            ("ok".to_string(), futures_flag(true)),
            ("bad".to_string(), futures_flag(false)),
        ];
        let results = scheduler.execute_batch(jobs).await;
        let bad = results.iter().find(|(id, _)| id == "bad").unwrap();
        assert!(matches!(bad.1, JobOutcome::Failed(_)));

        let (_, _, successful, failed) = scheduler.detailed_progress().await;
        assert_eq!((successful, failed), (1, 1));
    }

    fn futures_flag(ok: bool) -> impl std::future::Future<Output = Result<()>> + Send + 'static {
        async move {
            if ok {
                Ok(())
            } else {
                anyhow::bail!("boom")
            }
        }
    }

    fn futures_val(n: i32) -> impl std::future::Future<Output = Result<i32>> + Send + 'static {
        async move { Ok(n) }
    }

    #[tokio::test]
    async fn timeout_is_reported() {
        let scheduler = JobScheduler::new(SchedulerConfig {
            max_concurrency: 1,
            timeout: Some(Duration::from_millis(20)),
            ..Default::default()
        });
        let outcome = scheduler
            .execute_job("slow".to_string(), async {
                tokio::time::sleep(Duration::from_millis(500)).await;
                Ok(())
            })
            .await;
        assert!(matches!(outcome, JobOutcome::Timeout));
    }

    #[tokio::test]
    async fn fail_fast_cancels_queued_jobs() {
        let scheduler = JobScheduler::new(SchedulerConfig {
            max_concurrency: 1,
            fail_fast: true,
            ..Default::default()
        });

        let first = scheduler.execute_job("bad".to_string(), futures_flag(false)).await;
        assert!(matches!(first, JobOutcome::Failed(_)));

        // The stop flag is set, so later jobs never start.
        let second = scheduler.execute_job("late".to_string(), futures_flag(true)).await;
        assert!(matches!(second, JobOutcome::Cancelled));
    }

    #[tokio::test]
    async fn progress_callback_sees_final_count() {
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_clone = Arc::clone(&seen);
        let scheduler = JobScheduler::new(SchedulerConfig {
            max_concurrency: 2,
            progress_callback: Some(Arc::new(move |completed, _total| {
                seen_clone.store(completed, Ordering::SeqCst);
            })),
            ..Default::default()
        });

        let jobs = vec![
            ("a".to_string(), futures_flag(true)),
            ("b".to_string(), futures_flag(true)),
            ("c".to_string(), futures_flag(true)),
        ];
        scheduler.execute_batch(jobs).await;
        assert_eq!(seen.load(Ordering::SeqCst), 3);
    }
}
