use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::IdentityConfigError;

pub const DEFAULT_GENOME_BUILD: &str = "GRCh38";
pub const DEFAULT_MAX_SEQUENCE_LENGTH: usize = 50;

///
/// Primary key settings. Every field is optional in the TOML file:
///
/// ```toml
/// genome_build = "GRCh37"
/// max_sequence_length = 50
/// normalize = false
/// ```
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct IdentityConfig {
    /// Build passed to the digest service.
    pub genome_build: String,
    /// Largest `len(ref) + len(alt)` still spelled out in the key.
    pub max_sequence_length: usize,
    /// Ask the digest service to normalize alleles before digesting.
    pub normalize: bool,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        IdentityConfig {
            genome_build: DEFAULT_GENOME_BUILD.to_string(),
            max_sequence_length: DEFAULT_MAX_SEQUENCE_LENGTH,
            normalize: false,
        }
    }
}

impl IdentityConfig {
    pub fn for_build(genome_build: &str) -> Self {
        IdentityConfig {
            genome_build: genome_build.to_string(),
            ..Default::default()
        }
    }
}

impl TryFrom<&Path> for IdentityConfig {
    type Error = IdentityConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config = toml::from_str(&toml_str)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use std::path::PathBuf;

    #[rstest]
    fn test_defaults() {
        let config = IdentityConfig::default();
        assert_eq!(config.genome_build, "GRCh38");
        assert_eq!(config.max_sequence_length, 50);
        assert_eq!(config.normalize, false);
    }

    #[rstest]
    fn test_try_from_toml() {
        let path = PathBuf::from("../tests/data/identity/identity.toml");
        let config = IdentityConfig::try_from(path.as_path()).unwrap();
        assert_eq!(config.genome_build, "GRCh37");
        assert_eq!(config.max_sequence_length, 20);
        // not in the file
        assert_eq!(config.normalize, false);
    }

    #[rstest]
    fn test_partial_toml_keeps_defaults() {
        let config: IdentityConfig = toml::from_str("normalize = true").unwrap();
        assert_eq!(config.genome_build, DEFAULT_GENOME_BUILD);
        assert_eq!(config.normalize, true);
    }

    #[rstest]
    fn test_missing_file() {
        let path = PathBuf::from("../tests/data/identity/missing.toml");
        let result = IdentityConfig::try_from(path.as_path());
        assert!(matches!(result, Err(IdentityConfigError::Io(_))));
    }
}
