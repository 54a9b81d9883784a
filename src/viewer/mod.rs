pub mod grid;
pub mod sampler;

pub use grid::{encode_png, GridCell, GridLayout, SampleGrid};
pub use sampler::sample_indices;
