pub mod gallery;
pub mod samples;
pub mod summary;
