use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::layout::DatasetLayout;
use crate::error::{Error, Result};
use crate::preprocess::{ChannelOrder, ResizeFilter};

/// Default square side length of every loaded image.
pub const DEFAULT_IMAGE_SIZE: u32 = 150;

/// Largest accepted `image_size`; a 3×3 grid of these still fits in memory
/// comfortably.
pub const MAX_IMAGE_SIZE: u32 = 4096;

/// Configuration for a `DatasetLoader`.
///
/// # Fields
/// - `image_size`   : target width and height of every sample
/// - `filter`       : interpolation used by the resize step
/// - `channel_order`: pixel layout samples are stored in
/// - `layout`       : category → directory mapping used by `load_layout`
///
/// Every field has a default, so a partial JSON file is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub image_size: u32,
    pub filter: ResizeFilter,
    pub channel_order: ChannelOrder,
    pub layout: DatasetLayout,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        LoaderConfig {
            image_size:    DEFAULT_IMAGE_SIZE,
            filter:        ResizeFilter::default(),
            channel_order: ChannelOrder::default(),
            layout:        DatasetLayout::default(),
        }
    }
}

impl LoaderConfig {
    /// Checks value ranges the loader relies on.
    pub fn validate(&self) -> Result<()> {
        if self.image_size == 0 || self.image_size > MAX_IMAGE_SIZE {
            return Err(Error::InvalidConfig(format!(
                "image_size must be in 1..={}, got {}",
                MAX_IMAGE_SIZE, self.image_size
            )));
        }
        Ok(())
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn resolve(path: Option<&Path>) -> Result<LoaderConfig> {
        match path {
            Some(p) => LoaderConfig::load_json(p),
            None    => Ok(LoaderConfig::default()),
        }
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path).map_err(|e| Error::io(path, e))?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes and validates a `LoaderConfig` from a JSON file.
    pub fn load_json(path: &Path) -> Result<LoaderConfig> {
        let file = std::fs::File::open(path).map_err(|e| Error::io(path, e))?;
        let reader = std::io::BufReader::new(file);
        let config: LoaderConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    #[test]
    fn defaults_match_the_flower_notebook() {
        let cfg = LoaderConfig::default();
        assert_eq!(cfg.image_size, 150);
        assert_eq!(cfg.filter, ResizeFilter::Triangle);
        assert_eq!(cfg.channel_order, ChannelOrder::Rgb);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_size_is_rejected() {
        let cfg = LoaderConfig { image_size: 0, ..LoaderConfig::default() };
        assert!(matches!(cfg.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loader.json");
        std::fs::write(
            &path,
            r#"{ "image_size": 64, "layout": { "root": "/srv/flowers", "overrides": { "tulip": "/tmp/t" } } }"#,
        )
        .unwrap();

        let cfg = LoaderConfig::load_json(&path).unwrap();
        assert_eq!(cfg.image_size, 64);
        assert_eq!(cfg.filter, ResizeFilter::Triangle);
        assert_eq!(cfg.layout.dir_for(Category::Tulip), Path::new("/tmp/t"));
        assert_eq!(cfg.layout.dir_for(Category::Rose), Path::new("/srv/flowers/rose"));
    }

    #[test]
    fn invalid_size_in_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{ "image_size": 0 }"#).unwrap();
        assert!(matches!(LoaderConfig::load_json(&path), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.json");
        let cfg = LoaderConfig { channel_order: ChannelOrder::Bgr, ..LoaderConfig::default() };
        cfg.save_json(&path).unwrap();
        assert_eq!(LoaderConfig::resolve(Some(&path)).unwrap(), cfg);
    }
}
