//! Per-stage progress bars for normalization and compositing passes

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Coordinates progress display for the sequential stages of a run
///
/// Each stage gets its own bar; completed stages stay visible with a check
/// mark until [`ProgressManager::finish`] clears the display.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    stage_bar: Option<ProgressBar>,
    stage_label: String,
    completed_stages: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix:>12}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

impl ProgressManager {
    /// Create a new progress manager with no active stage
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            stage_bar: None,
            stage_label: String::new(),
            completed_stages: 0,
        }
    }

    /// Begin a stage of `file_count` files, finishing any stage still open
    pub fn start_stage(&mut self, label: &str, file_count: usize) {
        self.finish_stage();

        let bar = ProgressBar::new(file_count as u64);
        bar.set_style(STAGE_STYLE.clone());
        bar.set_prefix(label.to_string());
        self.stage_bar = Some(self.multi_progress.add(bar));
        self.stage_label = label.to_string();
    }

    /// Show the file currently being processed
    pub fn start_file(&self, path: &Path) {
        if let Some(ref bar) = self.stage_bar {
            bar.set_message(path.file_name().unwrap_or_default().to_string_lossy().to_string());
        }
    }

    /// Advance the active stage by one file
    pub fn complete_file(&self) {
        if let Some(ref bar) = self.stage_bar {
            bar.inc(1);
        }
    }

    /// Mark the active stage as done
    pub fn finish_stage(&mut self) {
        if let Some(bar) = self.stage_bar.take() {
            bar.finish_with_message(format!("✓ {}", self.stage_label));
            self.completed_stages += 1;
        }
    }

    /// Number of stages finished so far
    pub const fn completed_stages(&self) -> usize {
        self.completed_stages
    }

    /// Close any open stage and clean up all progress displays
    pub fn finish(&mut self) {
        self.finish_stage();
        let _ = self.multi_progress.clear();
    }
}
