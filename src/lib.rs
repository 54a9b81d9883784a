pub mod error;
pub mod category;
pub mod config;
pub mod preprocess;
pub mod dataset;
pub mod viewer;

// Convenience re-exports
pub use error::{Error, Result};
pub use category::Category;
pub use config::{DatasetLayout, LoaderConfig};
pub use preprocess::{ChannelOrder, ResizeFilter};
pub use dataset::{Dataset, DatasetLoader, FileFailure, LoadOutcome, LoadProgress, LoadReport, Sample, SampleStream};
pub use dataset::{spawn_progress_logger, PROGRESS_EVERY};
pub use viewer::{GridCell, GridLayout, SampleGrid};

/// Initializes `env_logger` with `info` as the default level; `RUST_LOG`
/// overrides it.
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
