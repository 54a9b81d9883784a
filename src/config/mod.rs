pub mod layout;
pub mod loader_config;

pub use layout::{DatasetLayout, DEFAULT_ROOT};
pub use loader_config::{LoaderConfig, DEFAULT_IMAGE_SIZE, MAX_IMAGE_SIZE};
