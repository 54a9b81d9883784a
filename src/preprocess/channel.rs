use image::RgbImage;
use serde::{Deserialize, Serialize};

/// Order of the three color channels inside each stored pixel.
///
/// - `Rgb`: what `image` decodes to; no conversion needed for display.
/// - `Bgr`: OpenCV-style layout for consumers that expect it.  Converted
///   back to RGB before anything is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelOrder {
    #[default]
    Rgb,
    Bgr,
}

/// Swaps the first and third channel of every pixel in place.
pub fn swap_red_blue(img: &mut RgbImage) {
    for px in img.pixels_mut() {
        px.0.swap(0, 2);
    }
}

/// Re-orders `img` from `from` to `to`.  A no-op when the orders match.
pub fn convert(mut img: RgbImage, from: ChannelOrder, to: ChannelOrder) -> RgbImage {
    if from != to {
        swap_red_blue(&mut img);
    }
    img
}
