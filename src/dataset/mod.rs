pub mod dataset;
pub mod load_report;
pub mod loader;
pub mod progress;
pub mod sample;
pub mod stream;

pub use dataset::Dataset;
pub use load_report::{FileFailure, LoadOutcome, LoadReport};
pub use loader::DatasetLoader;
pub use progress::{should_report, spawn_progress_logger, LoadProgress, PROGRESS_EVERY};
pub use sample::{Sample, SampleRef};
pub use stream::SampleStream;
