use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The five flower classes of the dataset.
///
/// The variant order is the fixed loading order; `Category::ALL` iterates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Daisy,
    Dandelion,
    Rose,
    Sunflower,
    Tulip,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Daisy,
        Category::Dandelion,
        Category::Rose,
        Category::Sunflower,
        Category::Tulip,
    ];

    /// Human-readable label, e.g. `"Daisy"`.  Used in captions and reports.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Daisy     => "Daisy",
            Category::Dandelion => "Dandelion",
            Category::Rose      => "Rose",
            Category::Sunflower => "Sunflower",
            Category::Tulip     => "Tulip",
        }
    }

    /// Directory name under the dataset root, e.g. `"daisy"`.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Daisy     => "daisy",
            Category::Dandelion => "dandelion",
            Category::Rose      => "rose",
            Category::Sunflower => "sunflower",
            Category::Tulip     => "tulip",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = Error;

    /// Accepts the label or the directory name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.dir_name() == wanted)
            .ok_or_else(|| Error::UnknownCategory(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_and_dir_names() {
        assert_eq!("Daisy".parse::<Category>().unwrap(), Category::Daisy);
        assert_eq!("dandelion".parse::<Category>().unwrap(), Category::Dandelion);
        assert_eq!(" SUNFLOWER ".parse::<Category>().unwrap(), Category::Sunflower);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "orchid".parse::<Category>().unwrap_err();
        assert!(matches!(err, Error::UnknownCategory(ref s) if s == "orchid"));
    }

    #[test]
    fn loading_order_is_fixed() {
        let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, ["Daisy", "Dandelion", "Rose", "Sunflower", "Tulip"]);
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&Category::Sunflower).unwrap();
        assert_eq!(json, "\"sunflower\"");
    }
}
