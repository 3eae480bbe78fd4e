//! Progress bar display for the write loop

use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

use crate::installer::{WriteObserver, WriteOutcome};

/// Per-file progress display for installations
pub struct ProgressDisplay {
    file_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a progress display with the total planned file count
    pub fn new(total_files: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let file_pb = ProgressBar::new(total_files);
        file_pb.set_style(style);

        Self { file_pb }
    }

    /// Finish the bar after a completed run
    pub fn finish(&self) {
        self.file_pb.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.file_pb.abandon();
    }
}

impl WriteObserver for ProgressDisplay {
    fn on_outcome(&mut self, path: &Path, outcome: &WriteOutcome) {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        match outcome {
            WriteOutcome::Written | WriteOutcome::Skipped => {
                self.file_pb.set_message(name.to_string());
                self.file_pb.inc(1);
            }
            WriteOutcome::Failed(_) => {
                self.file_pb.set_message(format!("failed: {name}"));
            }
        }
    }
}
