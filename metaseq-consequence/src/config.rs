use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::RankerConfigError;

///
/// Ranker settings:
///
/// ```toml
/// ranking_file = "adsp_consequence_ranking.txt"
/// save_on_add = true
/// rank_on_load = false
/// ```
///
/// A relative `ranking_file` is resolved against the config file's directory when loaded
/// from disk.
///
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RankerConfig {
    pub ranking_file: Option<PathBuf>,
    /// Write a new version of the table after every registration.
    pub save_on_add: bool,
    /// Re-derive the table as soon as it is loaded.
    pub rank_on_load: bool,
}

impl RankerConfig {
    pub fn for_file(ranking_file: &Path) -> Self {
        RankerConfig {
            ranking_file: Some(ranking_file.to_path_buf()),
            ..Default::default()
        }
    }

    /// Resolve a relative `ranking_file` against `base`.
    pub fn resolve_relative_to(mut self, base: &Path) -> Self {
        if let Some(file) = self.ranking_file.as_ref() {
            if file.is_relative() {
                self.ranking_file = Some(base.join(file));
            }
        }
        self
    }
}

impl TryFrom<&Path> for RankerConfig {
    type Error = RankerConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config: RankerConfig = toml::from_str(&toml_str)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.resolve_relative_to(base))
    }
}
