//! Batch progress display

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Previews: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar advancing once per rendered preview
#[derive(Debug, Default)]
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a manager with no bar shown yet
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Show a bar sized for `file_count` previews
    pub fn initialize(&mut self, file_count: usize) {
        let bar = ProgressBar::new(file_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.bar = Some(bar);
    }

    /// Number of previews the bar expects, if shown
    pub fn length(&self) -> Option<u64> {
        self.bar.as_ref().and_then(ProgressBar::length)
    }

    /// Number of previews completed so far
    pub fn position(&self) -> u64 {
        self.bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Label the bar with the file being rendered
    pub fn start_file(&self, path: &Path) {
        if let Some(bar) = &self.bar {
            bar.set_message(path.file_name().unwrap_or_default().to_string_lossy().to_string());
        }
    }

    /// Advance the bar after a preview is written
    pub fn complete_file(&self, elapsed: Duration) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
            log::debug!("preview rendered in {:.1}ms", elapsed.as_secs_f64() * 1000.0);
        }
    }

    /// Finish and clear the display
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}
