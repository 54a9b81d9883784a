use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Default dataset root, one subdirectory per category.
pub const DEFAULT_ROOT: &str = "../input/flowers";

/// Where each category's images live on disk.
///
/// By default a category resolves to `root/<dir_name>`; `overrides` pins a
/// category to an arbitrary directory instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetLayout {
    pub root: PathBuf,
    #[serde(default)]
    pub overrides: BTreeMap<Category, PathBuf>,
}

impl DatasetLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DatasetLayout { root: root.into(), overrides: BTreeMap::new() }
    }

    /// Pins `category` to `dir`.
    pub fn with_override(mut self, category: Category, dir: impl Into<PathBuf>) -> Self {
        self.overrides.insert(category, dir.into());
        self
    }

    pub fn dir_for(&self, category: Category) -> PathBuf {
        match self.overrides.get(&category) {
            Some(dir) => dir.clone(),
            None      => self.root.join(category.dir_name()),
        }
    }

    /// Every category with its directory, in the fixed loading order.
    pub fn entries(&self) -> Vec<(Category, PathBuf)> {
        Category::ALL.iter().map(|&c| (c, self.dir_for(c))).collect()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for DatasetLayout {
    fn default() -> Self {
        DatasetLayout::new(DEFAULT_ROOT)
    }
}
