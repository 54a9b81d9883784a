use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// A file that was listed but could not be turned into a sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileFailure {
    pub path: PathBuf,
    /// Rendered error message from the open/decode step.
    pub reason: String,
}

/// Summary of one `load_category` call that actually ran.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadReport {
    pub category: Category,
    pub directory: PathBuf,
    /// Samples appended to the dataset.
    pub loaded: usize,
    /// Files that failed; the rest of the directory was still loaded.
    pub failures: Vec<FileFailure>,
    /// Wall-clock duration of the whole directory in milliseconds.
    pub elapsed_ms: u64,
}

impl LoadReport {
    /// True when every listed file produced a sample.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn attempted(&self) -> usize {
        self.loaded + self.failures.len()
    }
}

/// What `DatasetLoader::load_category` did.
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    /// The directory was read; see the report for per-file results.
    Loaded(LoadReport),
    /// The category was already ingested by this loader; nothing was touched.
    AlreadyProcessed(Category),
}

impl LoadOutcome {
    pub fn report(&self) -> Option<&LoadReport> {
        match self {
            LoadOutcome::Loaded(r)           => Some(r),
            LoadOutcome::AlreadyProcessed(_) => None,
        }
    }

    /// Samples added by this call; zero for a skipped category.
    pub fn loaded(&self) -> usize {
        self.report().map_or(0, |r| r.loaded)
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, LoadOutcome::AlreadyProcessed(_))
    }
}
