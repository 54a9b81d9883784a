use std::collections::HashSet;
use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use crate::category::Category;
use crate::config::LoaderConfig;
use crate::dataset::dataset::Dataset;
use crate::dataset::load_report::{FileFailure, LoadOutcome, LoadReport};
use crate::dataset::progress::LoadProgress;
use crate::dataset::stream::SampleStream;
use crate::error::Result;

/// Builds a `Dataset` one category directory at a time.
///
/// The loader owns the dataset and the set of categories it has already
/// ingested; loading a category twice is a no-op.  Per-file failures never
/// abort a directory: they are collected in the category's `LoadReport` and
/// the caller decides what to do with them.
pub struct DatasetLoader {
    config: LoaderConfig,
    dataset: Dataset,
    processed: HashSet<Category>,
    reports: Vec<LoadReport>,
    progress_tx: Option<mpsc::Sender<LoadProgress>>,
}

impl DatasetLoader {
    /// Creates a loader with an empty dataset.  Fails if `config` is invalid.
    pub fn new(config: LoaderConfig) -> Result<Self> {
        config.validate()?;
        Ok(DatasetLoader {
            dataset: Dataset::new(config.channel_order),
            config,
            processed: HashSet::new(),
            reports: Vec::new(),
            progress_tx: None,
        })
    }

    /// Sends one `LoadProgress` per attempted file to `tx`.  A dropped
    /// receiver is ignored; loading continues.
    pub fn with_progress(mut self, tx: mpsc::Sender<LoadProgress>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    /// Loads every file in `dir` as a sample of `category`.
    ///
    /// Returns `AlreadyProcessed` without touching the filesystem if the
    /// category was loaded before.  An unreadable directory is an error and
    /// leaves the category unmarked, so it can be retried.
    pub fn load_category(&mut self, category: Category, dir: impl AsRef<Path>) -> Result<LoadOutcome> {
        if self.processed.contains(&category) {
            log::debug!("{} already loaded, skipping", category);
            return Ok(LoadOutcome::AlreadyProcessed(category));
        }

        let dir = dir.as_ref();
        let t_start = Instant::now();
        let stream = SampleStream::open(category, dir, &self.config)?;
        self.processed.insert(category);

        let total = stream.total();
        log::info!("Loading {} from {} ({} files)", category, dir.display(), total);

        let mut loaded = 0usize;
        let mut failures: Vec<FileFailure> = Vec::new();

        for (i, item) in stream.enumerate() {
            let (path, ok) = match item {
                Ok(sample) => {
                    log::debug!("Loaded {}", sample.source.display());
                    let path = sample.source.clone();
                    self.dataset.push(sample);
                    loaded += 1;
                    (path, true)
                }
                Err(failure) => {
                    log::warn!("Skipping {}: {}", failure.path.display(), failure.reason);
                    let path = failure.path.clone();
                    failures.push(failure);
                    (path, false)
                }
            };

            if let Some(ref tx) = self.progress_tx {
                let _ = tx.send(LoadProgress { category, processed: i + 1, total, path, ok });
            }
        }

        let report = LoadReport {
            category,
            directory: dir.to_path_buf(),
            loaded,
            failures,
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };

        if report.is_clean() {
            log::info!("{}: {} samples in {} ms", category, loaded, report.elapsed_ms);
        } else {
            log::warn!(
                "{}: {} samples, {} failed, in {} ms",
                category, loaded, report.failures.len(), report.elapsed_ms
            );
        }

        self.reports.push(report.clone());
        Ok(LoadOutcome::Loaded(report))
    }

    /// Loads all five categories from the configured layout, in the fixed
    /// category order.  Stops at the first unreadable directory.
    pub fn load_layout(&mut self) -> Result<Vec<LoadOutcome>> {
        let entries = self.config.layout.entries();
        let mut outcomes = Vec::with_capacity(entries.len());
        for (category, dir) in entries {
            outcomes.push(self.load_category(category, dir)?);
        }
        Ok(outcomes)
    }

    pub fn is_processed(&self, category: Category) -> bool {
        self.processed.contains(&category)
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Reports of every category that was actually loaded, in load order.
    pub fn reports(&self) -> &[LoadReport] {
        &self.reports
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileFailure> + '_ {
        self.reports.iter().flat_map(|r| r.failures.iter())
    }

    pub fn failure_count(&self) -> usize {
        self.reports.iter().map(|r| r.failures.len()).sum()
    }

    pub fn into_dataset(self) -> Dataset {
        self.dataset
    }

    /// Consumes the loader, returning the dataset and all load reports.
    pub fn into_parts(self) -> (Dataset, Vec<LoadReport>) {
        (self.dataset, self.reports)
    }
}
