use std::collections::BTreeMap;

use image::RgbImage;

use crate::category::Category;
use crate::dataset::sample::{Sample, SampleRef};
use crate::preprocess::channel::{self, ChannelOrder};

/// In-memory flower dataset: two order-correlated sequences.
///
/// `labels()[i]` is the category of `images()[i]`.  Both sequences only ever
/// grow together through `push`, so they always have equal length and keep
/// insertion order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    images: Vec<RgbImage>,
    labels: Vec<Category>,
    channel_order: ChannelOrder,
}

impl Dataset {
    /// Creates an empty dataset whose pixels are stored in `channel_order`.
    pub fn new(channel_order: ChannelOrder) -> Self {
        Dataset { images: Vec::new(), labels: Vec::new(), channel_order }
    }

    pub(crate) fn push(&mut self, sample: Sample) {
        self.images.push(sample.image);
        self.labels.push(sample.label);
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn images(&self) -> &[RgbImage] {
        &self.images
    }

    pub fn labels(&self) -> &[Category] {
        &self.labels
    }

    pub fn channel_order(&self) -> ChannelOrder {
        self.channel_order
    }

    pub fn get(&self, index: usize) -> Option<SampleRef<'_>> {
        let image = self.images.get(index)?;
        let label = *self.labels.get(index)?;
        Some(SampleRef { index, image, label })
    }

    pub fn iter(&self) -> impl Iterator<Item = SampleRef<'_>> + '_ {
        self.images
            .iter()
            .zip(self.labels.iter())
            .enumerate()
            .map(|(index, (image, &label))| SampleRef { index, image, label })
    }

    /// Copy of the `index`-th image in RGB order, ready to show.
    pub fn display_image(&self, index: usize) -> Option<RgbImage> {
        let img = self.images.get(index)?.clone();
        Some(channel::convert(img, self.channel_order, ChannelOrder::Rgb))
    }

    /// Number of samples per category.  Categories with no samples are absent.
    pub fn count_by_category(&self) -> BTreeMap<Category, usize> {
        let mut counts = BTreeMap::new();
        for &label in &self.labels {
            *counts.entry(label).or_insert(0) += 1;
        }
        counts
    }

    /// Splits into `(train, validation)` copies: the last `val_pct` percent
    /// (clamped to 50) becomes validation.  `self` is left as is.
    pub fn split(&self, val_pct: u8) -> (Dataset, Dataset) {
        let val_pct = val_pct.min(50) as usize;
        let total = self.len();
        let val_n = (total * val_pct) / 100;
        let train_n = total - val_n;

        let part = |range: std::ops::Range<usize>| Dataset {
            images: self.images[range.clone()].to_vec(),
            labels: self.labels[range].to_vec(),
            channel_order: self.channel_order,
        };
        (part(0..train_n), part(train_n..total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use std::path::PathBuf;

    fn sample(label: Category, shade: u8) -> Sample {
        Sample {
            image: RgbImage::from_pixel(4, 4, Rgb([shade, 0, 255 - shade])),
            label,
            source: PathBuf::from(format!("{}.png", shade)),
        }
    }

    fn filled(labels: &[Category]) -> Dataset {
        let mut ds = Dataset::new(ChannelOrder::Rgb);
        for (i, &l) in labels.iter().enumerate() {
            ds.push(sample(l, i as u8));
        }
        ds
    }

    #[test]
    fn push_keeps_sequences_aligned() {
        let ds = filled(&[Category::Daisy, Category::Rose, Category::Rose]);
        assert_eq!(ds.images().len(), ds.labels().len());
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.get(1).map(|s| s.label), Some(Category::Rose));
        assert!(ds.get(3).is_none());
    }

    #[test]
    fn iter_preserves_insertion_order() {
        let ds = filled(&[Category::Tulip, Category::Daisy]);
        let seen: Vec<(usize, Category)> = ds.iter().map(|s| (s.index, s.label)).collect();
        assert_eq!(seen, vec![(0, Category::Tulip), (1, Category::Daisy)]);
    }

    #[test]
    fn counts_per_category() {
        let ds = filled(&[Category::Daisy, Category::Rose, Category::Daisy]);
        let counts = ds.count_by_category();
        assert_eq!(counts.get(&Category::Daisy), Some(&2));
        assert_eq!(counts.get(&Category::Rose), Some(&1));
        assert!(!counts.contains_key(&Category::Tulip));
    }

    #[test]
    fn display_image_converts_bgr_storage() {
        let mut ds = Dataset::new(ChannelOrder::Bgr);
        ds.push(Sample {
            image: RgbImage::from_pixel(1, 1, Rgb([1, 2, 3])),
            label: Category::Sunflower,
            source: PathBuf::new(),
        });
        assert_eq!(ds.display_image(0).unwrap().get_pixel(0, 0).0, [3, 2, 1]);
        // Stored pixels are not modified.
        assert_eq!(ds.images()[0].get_pixel(0, 0).0, [1, 2, 3]);
    }

    #[test]
    fn split_takes_validation_from_the_tail() {
        let labels = [Category::Daisy; 8]
            .iter()
            .copied()
            .chain([Category::Tulip, Category::Tulip])
            .collect::<Vec<_>>();
        let ds = filled(&labels);

        let (train, val) = ds.split(20);
        assert_eq!(train.len(), 8);
        assert_eq!(val.labels(), &[Category::Tulip, Category::Tulip]);
        assert_eq!(ds.len(), 10);
    }

    #[test]
    fn split_clamps_to_half() {
        let ds = filled(&[Category::Rose; 10]);
        let (train, val) = ds.split(90);
        assert_eq!((train.len(), val.len()), (5, 5));
    }
}
