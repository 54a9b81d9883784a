use std::path::{Path, PathBuf};

use crate::category::Category;
use crate::config::LoaderConfig;
use crate::dataset::load_report::FileFailure;
use crate::dataset::sample::Sample;
use crate::error::{Error, Result};
use crate::preprocess::channel::{self, ChannelOrder};
use crate::preprocess::{load_resized, ResizeFilter};

/// Lazily decoded samples of one category directory.
///
/// `open` lists the directory up front (regular files only, filesystem order,
/// no recursion); each call to `next` then decodes and resizes one file.
/// Failures are yielded as `Err(FileFailure)` and iteration continues with the
/// next file.
#[derive(Debug)]
pub struct SampleStream {
    category: Category,
    files: std::vec::IntoIter<PathBuf>,
    total: usize,
    image_size: u32,
    filter: ResizeFilter,
    channel_order: ChannelOrder,
}

impl SampleStream {
    /// Lists `dir` for `category`.  Fails only if the directory itself cannot
    /// be read.
    pub fn open(category: Category, dir: &Path, config: &LoaderConfig) -> Result<SampleStream> {
        let entries = std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::io(dir, e))?;
            let path = entry.path();
            if path.is_file() {
                files.push(path);
            } else {
                log::debug!("Skipping non-file entry {}", path.display());
            }
        }

        Ok(SampleStream {
            category,
            total: files.len(),
            files: files.into_iter(),
            image_size: config.image_size,
            filter: config.filter,
            channel_order: config.channel_order,
        })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Number of files listed when the stream was opened.
    pub fn total(&self) -> usize {
        self.total
    }

    fn decode(&self, path: PathBuf) -> std::result::Result<Sample, FileFailure> {
        match load_resized(&path, self.image_size, self.filter) {
            Ok(img) => Ok(Sample {
                image: channel::convert(img, ChannelOrder::Rgb, self.channel_order),
                label: self.category,
                source: path,
            }),
            Err(e) => Err(FileFailure { reason: e.to_string(), path }),
        }
    }
}

impl Iterator for SampleStream {
    type Item = std::result::Result<Sample, FileFailure>;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.files.next()?;
        Some(self.decode(path))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.files.size_hint()
    }
}

impl ExactSizeIterator for SampleStream {}
