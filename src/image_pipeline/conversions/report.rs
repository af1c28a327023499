use std::fmt;
use std::path::PathBuf;

use crate::image_pipeline::common::error::PipelineError;

/// Outcome of a batch run, keyed by each work unit's output path.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub completed: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, PipelineError)>,
    /// Units never attempted because the batch stopped early
    pub skipped: usize,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty() && self.skipped == 0
    }

    pub fn total(&self) -> usize {
        self.completed.len() + self.failed.len() + self.skipped
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} failed, {} skipped of {} groups",
            self.failed.len(),
            self.skipped,
            self.total()
        )
    }
}
