//! Progress display for dataset generation runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Tasks: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar tracking tasks of one run
pub struct ProgressManager {
    bar: ProgressBar,
    completed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager whose bar is hidden until initialized
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            completed: 0,
        }
    }

    /// Show a bar sized for `task_count` tasks
    pub fn initialize(&mut self, task_count: usize) {
        let bar = ProgressBar::new(task_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.bar = bar;
        self.completed = 0;
    }

    /// Advance past a finished (or skipped) task
    pub fn complete_task(&mut self, task_id: &str) {
        self.completed += 1;
        self.bar.set_message(task_id.to_string());
        self.bar.inc(1);
    }

    /// Number of tasks reported so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Close the bar after a successful run
    pub fn finish(&self) {
        self.bar.finish_with_message("All tasks generated");
    }

    /// Close the bar after an aborted run, leaving it visible
    pub fn abandon(&self) {
        self.bar.abandon_with_message("Generation aborted");
    }
}
