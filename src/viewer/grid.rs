use std::io::Cursor;
use std::path::Path;

use image::{imageops, ImageOutputFormat, Rgb, RgbImage};
use rand::Rng;
use serde::Serialize;

use crate::category::Category;
use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::viewer::sampler::sample_indices;

/// Shape of the sample grid.
///
/// Fields:
/// - `rows`, `cols` : grid dimensions; 3×3 by default
/// - `padding`      : gap in pixels between tiles and around the border
/// - `background`   : RGB fill behind the tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridLayout {
    pub rows: usize,
    pub cols: usize,
    pub padding: u32,
    pub background: [u8; 3],
}

impl Default for GridLayout {
    fn default() -> Self {
        GridLayout { rows: 3, cols: 3, padding: 8, background: [255, 255, 255] }
    }
}

impl GridLayout {
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Pixel size of the composed grid for square tiles of side `tile`.
    pub fn canvas_size(&self, tile: u32) -> (u32, u32) {
        let span = |n: usize| n as u32 * tile + (n as u32 + 1) * self.padding;
        (span(self.cols), span(self.rows))
    }
}

/// One tile of the grid: which sample sits at `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
    pub index: usize,
    pub label: Category,
}

impl GridCell {
    /// Title shown above the tile, e.g. `"Flower: Rose"`.
    pub fn caption(&self) -> String {
        format!("Flower: {}", self.label)
    }
}

/// A random selection of dataset samples laid out row-major.
#[derive(Debug, Clone, Serialize)]
pub struct SampleGrid {
    layout: GridLayout,
    cells: Vec<GridCell>,
}

impl SampleGrid {
    /// Picks one random sample per cell (with replacement).
    pub fn pick<R: Rng + ?Sized>(dataset: &Dataset, layout: GridLayout, rng: &mut R) -> Result<Self> {
        let indices = sample_indices(dataset.len(), layout.cell_count(), rng)?;
        let cells = indices
            .into_iter()
            .enumerate()
            .map(|(n, index)| GridCell {
                row: n / layout.cols,
                col: n % layout.cols,
                index,
                label: dataset.labels()[index],
            })
            .collect();
        Ok(SampleGrid { layout, cells })
    }

    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn indices(&self) -> Vec<usize> {
        self.cells.iter().map(|c| c.index).collect()
    }

    /// Tiles the selected samples, converted to RGB, into one image.
    ///
    /// `dataset` must be the one the grid was picked from; a stale index is
    /// reported as `IndexOutOfRange`.
    pub fn compose(&self, dataset: &Dataset) -> Result<RgbImage> {
        let tile = dataset.images().iter().map(|img| img.width().max(img.height())).max().unwrap_or(0);
        let (w, h) = self.layout.canvas_size(tile);
        let mut canvas = RgbImage::from_pixel(w, h, Rgb(self.layout.background));

        let pad = self.layout.padding;
        for cell in &self.cells {
            let img = dataset
                .display_image(cell.index)
                .ok_or(Error::IndexOutOfRange { index: cell.index, len: dataset.len() })?;
            let x = pad + cell.col as u32 * (tile + pad);
            let y = pad + cell.row as u32 * (tile + pad);
            imageops::replace(&mut canvas, &img, x as i64, y as i64);
        }
        Ok(canvas)
    }

    /// Composes the grid and writes it as a PNG file.
    pub fn save_png(&self, dataset: &Dataset, path: &Path) -> Result<()> {
        let bytes = encode_png(&self.compose(dataset)?)?;
        std::fs::write(path, bytes).map_err(|e| Error::io(path, e))
    }
}

/// Encodes an RGB image as PNG bytes.
pub fn encode_png(img: &RgbImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageOutputFormat::Png).map_err(Error::Encode)?;
    Ok(buf.into_inner())
}
