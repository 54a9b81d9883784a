use std::path::PathBuf;

use image::RgbImage;

use crate::category::Category;

/// One decoded, resized image with its category, as yielded by
/// `SampleStream`.  `source` is kept for reporting only; it is dropped when
/// the sample enters a `Dataset`.
#[derive(Debug, Clone)]
pub struct Sample {
    pub image: RgbImage,
    pub label: Category,
    pub source: PathBuf,
}

/// Borrowed view of the `index`-th entry of a `Dataset`.
#[derive(Debug, Clone, Copy)]
pub struct SampleRef<'a> {
    pub index: usize,
    pub image: &'a RgbImage,
    pub label: Category,
}
