use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;

use petalset::{Dataset, GridLayout, LoadReport, SampleGrid};

// ---------------------------------------------------------------------------
// Main state struct
// ---------------------------------------------------------------------------

/// Everything the gallery pages need.  The dataset is loaded once at startup
/// and only read afterwards.
pub struct GalleryState {
    /// Loaded samples.
    pub dataset:  Dataset,
    /// One report per category directory that was read.
    pub reports:  Vec<LoadReport>,
    /// Grid shape used for every pick.
    pub layout:   GridLayout,
    /// Sampler RNG; seeded from the command line or from entropy.
    pub rng:      StdRng,
    /// Grid shown by the most recent `GET /grid`, reused by `GET /grid.png`.
    pub current:  Option<SampleGrid>,
}

impl GalleryState {
    pub fn new(dataset: Dataset, reports: Vec<LoadReport>, rng: StdRng) -> Self {
        GalleryState {
            dataset,
            reports,
            layout:  GridLayout::default(),
            rng,
            current: None,
        }
    }

    /// Draws a fresh random grid and remembers it as the current one.
    pub fn repick(&mut self) -> petalset::Result<SampleGrid> {
        let grid = SampleGrid::pick(&self.dataset, self.layout, &mut self.rng)?;
        self.current = Some(grid.clone());
        Ok(grid)
    }

    /// The current grid, picking one first if none has been shown yet.
    pub fn current_or_pick(&mut self) -> petalset::Result<SampleGrid> {
        match &self.current {
            Some(grid) => Ok(grid.clone()),
            None       => self.repick(),
        }
    }

    pub fn failure_count(&self) -> usize {
        self.reports.iter().map(|r| r.failures.len()).sum()
    }
}

/// Shared state type: an `Arc<Mutex<GalleryState>>` passed to every handler.
pub type SharedState = Arc<Mutex<GalleryState>>;
