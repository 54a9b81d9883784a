//! Image preprocessing for the flower loader.
//!
//! Files are decoded by content (not extension), resized to an exact square,
//! and flattened to 8-bit RGB.  The source aspect ratio is not preserved.

use std::path::Path;

use image::imageops::FilterType;
use image::io::Reader as ImageReader;
use image::{DynamicImage, RgbImage};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Interpolation used when resizing.  Mirrors `image::imageops::FilterType`
/// so it can live in a JSON config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeFilter {
    Nearest,
    /// Bilinear.
    #[default]
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(f: ResizeFilter) -> Self {
        match f {
            ResizeFilter::Nearest    => FilterType::Nearest,
            ResizeFilter::Triangle   => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian   => FilterType::Gaussian,
            ResizeFilter::Lanczos3   => FilterType::Lanczos3,
        }
    }
}

/// Decodes the file at `path` and resizes it to `size × size` RGB.
pub fn load_resized(path: &Path, size: u32, filter: ResizeFilter) -> Result<RgbImage> {
    let img = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| Error::io(path, e))?
        .decode()
        .map_err(|e| Error::Decode { path: path.to_path_buf(), source: e })?;
    Ok(resize_square(&img, size, filter))
}

/// Resizes to exactly `size × size`, ignoring the source aspect ratio.
pub fn resize_square(img: &DynamicImage, size: u32, filter: ResizeFilter) -> RgbImage {
    img.resize_exact(size, size, filter.into()).to_rgb8()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn wide_image_becomes_square() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.png");
        RgbImage::from_pixel(300, 40, Rgb([200, 10, 10])).save(&path).unwrap();

        let out = load_resized(&path, 150, ResizeFilter::Triangle).unwrap();
        assert_eq!(out.dimensions(), (150, 150));
    }

    #[test]
    fn format_is_sniffed_from_content() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("real.png");
        RgbImage::from_pixel(8, 8, Rgb([0, 0, 0])).save(&png).unwrap();
        let renamed = dir.path().join("no_extension");
        std::fs::rename(&png, &renamed).unwrap();

        let out = load_resized(&renamed, 16, ResizeFilter::Nearest).unwrap();
        assert_eq!(out.dimensions(), (16, 16));
    }

    #[test]
    fn garbage_bytes_are_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.jpg");
        std::fs::write(&path, b"definitely not a jpeg").unwrap();

        let err = load_resized(&path, 150, ResizeFilter::Triangle).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_resized(Path::new("/nonexistent/rose.jpg"), 150, ResizeFilter::Triangle)
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
