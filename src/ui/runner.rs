// ============================================================================
// Toxide - Run UI Component
// ============================================================================
//
// File: src/ui/runner.rs
// Responsibility: live display of a run in progress
// Boundaries:
//   - ✅ Phase progress bar and spinner
//   - ✅ Per-environment status indicators
//   - ✅ Terminal refresh handling
//   - ❌ No execution logic
//   - ❌ No configuration management
//
// ============================================================================

use crate::utils::constants::{icons, progress_chars, spinner_chars};
use crate::utils::logger::Logger;
use crate::{t, tf};
use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, Weak};
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

/// Display status of one environment
#[derive(Debug, Clone, PartialEq)]
pub enum EnvDisplayStatus {
    Pending,
    Running,
    Success,
    Failed,
    Skipped,
}

/// Display information for one environment
#[derive(Debug, Clone)]
pub struct EnvInfo {
    /// Environment name
    pub name: String,
    /// Group the environment belongs to
    pub group: String,
    /// Current status
    pub status: EnvDisplayStatus,
    /// Start time
    pub start_time: Option<Instant>,
    /// End time
    pub end_time: Option<Instant>,
    /// Failure or skip message
    pub message: Option<String>,
}

/// Live run display
pub struct RunnerUI {
    /// All environments being displayed
    envs: HashMap<String, EnvInfo>,
    /// Current phase (1-based)
    current_phase: usize,
    /// Total number of phases
    total_phases: usize,
    /// Lines rendered by the last refresh (for clearing)
    rendered_lines: usize,
    /// Whether the terminal supports in-place refresh
    supports_refresh: bool,
    /// Spinner animation frame
    spinner_frame: usize,
    /// Environments of the current phase, in display order
    current_phase_envs: Vec<String>,
    /// Refresh timer control flag
    refresh_timer_running: Arc<AtomicBool>,
    /// Refresh timer thread handle
    refresh_timer_handle: Option<thread::JoinHandle<()>>,
    /// Weak self reference for the timer callback
    self_ref: Option<Weak<Mutex<RunnerUI>>>,
}

impl RunnerUI {
    /// Create a new run display
    pub fn new() -> Self {
        let supports_refresh = atty::is(atty::Stream::Stdout);

        Self {
            envs: HashMap::new(),
            current_phase: 0,
            total_phases: 0,
            rendered_lines: 0,
            supports_refresh,
            spinner_frame: 0,
            current_phase_envs: Vec::new(),
            refresh_timer_running: Arc::new(AtomicBool::new(false)),
            refresh_timer_handle: None,
            self_ref: None,
        }
    }

    /// Set the weak self reference (call after wrapping in Arc<Mutex<_>>)
    pub fn set_self_ref(&mut self, self_ref: Weak<Mutex<RunnerUI>>) {
        self.self_ref = Some(self_ref);
    }

    /// Set the total number of phases
    pub fn set_total_phases(&mut self, total: usize) {
        self.total_phases = total;
    }

    /// Enter a new phase. The environment list follows separately via
    /// set_phase_envs so a refresh never runs against a stale list.
    pub fn start_phase(&mut self, phase: usize) {
        self.current_phase = phase;
    }

    /// Set the environments of the current phase
    pub fn set_phase_envs(&mut self, envs: Vec<String>) {
        self.current_phase_envs = envs;
        if self.supports_refresh {
            self.refresh_display();
        }
    }

    /// Register an environment
    pub fn add_env(&mut self, name: String, group: String) {
        let info = EnvInfo {
            name: name.clone(),
            group,
            status: EnvDisplayStatus::Pending,
            start_time: None,
            end_time: None,
            message: None,
        };
        self.envs.insert(name, info);
    }

    /// Mark an environment as running
    pub fn start_env(&mut self, name: &str) {
        if let Some(env) = self.envs.get_mut(name) {
            env.status = EnvDisplayStatus::Running;
            env.start_time = Some(Instant::now());

            self.start_refresh_timer();
            self.refresh_display();
        }
    }

    /// Mark an environment as passed
    pub fn complete_env(&mut self, name: &str) {
        if let Some(env) = self.envs.get_mut(name) {
            env.status = EnvDisplayStatus::Success;
            env.end_time = Some(Instant::now());

            self.refresh_display();
            if !self.has_running_envs() {
                self.stop_refresh_timer();
            }
        }
    }

    /// Mark an environment as failed
    pub fn fail_env(&mut self, name: &str, message: String) {
        if let Some(env) = self.envs.get_mut(name) {
            env.status = EnvDisplayStatus::Failed;
            env.end_time = Some(Instant::now());
            env.message = Some(message);

            self.refresh_display();
            if !self.has_running_envs() {
                self.stop_refresh_timer();
            }
        }
    }

    /// Mark an environment as skipped
    pub fn skip_env(&mut self, name: &str, reason: Option<String>) {
        if let Some(env) = self.envs.get_mut(name) {
            env.status = EnvDisplayStatus::Skipped;
            env.end_time = Some(Instant::now());
            if let Some(reason) = reason {
                env.message = Some(reason);
            }

            self.refresh_display();
            if !self.has_running_envs() {
                self.stop_refresh_timer();
            }
        }
    }

    /// Redraw the whole display in place
    fn refresh_display(&mut self) {
        if !self.supports_refresh {
            return;
        }

        self.clear_screen();

        // Spinner frame advances on wall-clock time
        let elapsed_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::from_secs(0))
            .as_millis();
        self.spinner_frame = ((elapsed_ms / 100) % spinner_chars::BASE.len() as u128) as usize;

        let content = self.build_display_content();
        print!("{}", content);
        let _ = io::stdout().flush();

        self.rendered_lines = content.lines().count();
    }

    fn clear_screen(&self) {
        if self.rendered_lines > 0 {
            // Move the cursor back up and wipe to the bottom of the screen
            print!("\x1B[{}A", self.rendered_lines);
            print!("\x1B[J");
        }
    }

    fn build_display_content(&self) -> String {
        let mut content = String::new();

        if self.current_phase > 0 && self.total_phases > 0 {
            let spinner_char = spinner_chars::BASE[self.spinner_frame];
            let progress_bar = self.build_progress_bar();

            content.push_str(&format!(
                "{} {} {} {}\n",
                Logger::get_prefix("INFO"),
                spinner_char,
                progress_bar,
                tf!("runner.phase_header", self.current_phase, self.total_phases)
            ));

            if !self.current_phase_envs.is_empty() {
                let (completed, total) = self.current_phase_progress();
                content.push_str(&format!(
                    "{} {} ({}/{})\n",
                    Logger::get_prefix("INFO"),
                    t!("runner.running_envs"),
                    completed,
                    total
                ));

                for (i, env_name) in self.current_phase_envs.iter().enumerate() {
                    let status_icon = self.env_status_icon(env_name);
                    content.push_str(&format!(
                        "{}   {} {}\n",
                        Logger::get_prefix("INFO"),
                        status_icon,
                        env_name
                    ));

                    // Cap the list so a large envlist does not flood the screen
                    if i >= 10 {
                        let remaining = self.current_phase_envs.len() - i - 1;
                        if remaining > 0 {
                            content.push_str(&format!(
                                "{} {}\n",
                                Logger::get_prefix("INFO"),
                                tf!("runner.more_envs", remaining)
                            ));
                        }
                        break;
                    }
                }
            }
        }

        content
    }

    fn build_progress_bar(&self) -> String {
        if self.total_phases == 0 {
            return String::new();
        }

        let width = 20;
        let progress = (self.current_phase as f64 / self.total_phases as f64).min(1.0);
        let filled_width = (progress * width as f64) as usize;
        let empty_width = width - filled_width;

        let filled_part = progress_chars::FILLED.repeat(filled_width);
        let empty_part = progress_chars::EMPTY.repeat(empty_width);

        format!("{}{}", filled_part, empty_part)
    }

    fn env_status_icon(&self, name: &str) -> &'static str {
        match self.envs.get(name).map(|env| &env.status) {
            Some(EnvDisplayStatus::Running) => icons::EXEC,
            Some(EnvDisplayStatus::Success) => icons::SUCCESS,
            Some(EnvDisplayStatus::Failed) => icons::ERROR,
            Some(EnvDisplayStatus::Skipped) => icons::SKIP,
            Some(EnvDisplayStatus::Pending) | None => icons::PENDING,
        }
    }

    /// Completed/total counts for the current phase
    fn current_phase_progress(&self) -> (usize, usize) {
        let total = self.current_phase_envs.len();
        let completed = self
            .current_phase_envs
            .iter()
            .filter(|name| {
                self.envs.get(*name).map_or(false, |env| {
                    matches!(
                        env.status,
                        EnvDisplayStatus::Success
                            | EnvDisplayStatus::Failed
                            | EnvDisplayStatus::Skipped
                    )
                })
            })
            .count();

        (completed, total)
    }

    fn has_running_envs(&self) -> bool {
        self.envs.values().any(|env| env.status == EnvDisplayStatus::Running)
    }

    /// Keep the spinner moving while environments run, even when no
    /// status change triggers a refresh
    fn start_refresh_timer(&mut self) {
        if !self.supports_refresh || self.refresh_timer_running.load(Ordering::Relaxed) {
            return;
        }

        self.refresh_timer_running.store(true, Ordering::Relaxed);

        if let Some(self_weak) = self.self_ref.clone() {
            let timer_running = Arc::clone(&self.refresh_timer_running);

            let handle = thread::spawn(move || {
                while timer_running.load(Ordering::Relaxed) {
                    thread::sleep(Duration::from_millis(100));

                    if let Some(ui_arc) = self_weak.upgrade() {
                        if let Ok(mut ui) = ui_arc.try_lock() {
                            if ui.has_running_envs() && ui.supports_refresh {
                                ui.refresh_display();
                            } else if !ui.has_running_envs() {
                                timer_running.store(false, Ordering::Relaxed);
                                break;
                            }
                        }
                    } else {
                        // The display is gone, stop the timer
                        break;
                    }
                }
            });

            self.refresh_timer_handle = Some(handle);
        }
    }

    fn stop_refresh_timer(&mut self) {
        self.refresh_timer_running.store(false, Ordering::Relaxed);

        if let Some(handle) = self.refresh_timer_handle.take() {
            let _ = handle.join();
        }
    }

    /// Tear down the live display and print the final progress line
    pub fn finish(&mut self) {
        self.stop_refresh_timer();

        if self.supports_refresh {
            self.clear_screen();
            self.render_final_progress();
            self.rendered_lines = 0;
        }
    }

    fn render_final_progress(&self) {
        let width = 20;
        let final_progress_bar = progress_chars::FILLED.repeat(width);

        println!(
            "{} {} {} {}",
            Logger::get_prefix("INFO"),
            self.final_status_icon(),
            final_progress_bar,
            tf!("runner.phase_complete", self.total_phases, self.total_phases)
        );

        let _ = io::stdout().flush();
    }

    /// Icon for the teardown line, reflecting the overall result
    fn final_status_icon(&self) -> &'static str {
        if self.envs.values().any(|env| env.status == EnvDisplayStatus::Failed) {
            icons::ERROR
        } else {
            icons::SUCCESS
        }
    }
}

impl Default for RunnerUI {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RunnerUI {
    fn drop(&mut self) {
        self.stop_refresh_timer();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_ui() -> RunnerUI {
        let mut ui = RunnerUI::new();
        ui.supports_refresh = false;
        ui
    }

    #[test]
    fn final_icon_reflects_failures() {
        let mut ui = plain_ui();
        ui.add_env("a".to_string(), "ungrouped".to_string());
        ui.add_env("b".to_string(), "ungrouped".to_string());

        ui.complete_env("a");
        assert_eq!(ui.final_status_icon(), icons::SUCCESS);

        ui.fail_env("b", "command failed".to_string());
        assert_eq!(ui.final_status_icon(), icons::ERROR);
    }

    #[test]
    fn skipped_envs_do_not_fail_the_teardown_line() {
        let mut ui = plain_ui();
        ui.add_env("empty".to_string(), "ungrouped".to_string());
        ui.skip_env("empty", None);
        assert_eq!(ui.final_status_icon(), icons::SUCCESS);
    }
}
