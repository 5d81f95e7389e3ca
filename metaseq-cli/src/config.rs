use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use metaseq_consequence::RankerConfig;
use metaseq_core::ChromosomeMap;
use metaseq_identity::IdentityConfig;
use metaseq_vrs::{ReferenceSequences, VrsAlleleDigester};

///
/// Where the sequences of one genome build come from. `fasta` wins over `accessions` when
/// both are given; only a FASTA keeps the sequence needed for normalization.
///
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ReferenceConfig {
    pub build: String,
    pub fasta: Option<PathBuf>,
    pub accessions: Option<PathBuf>,
    pub chromosome_map: Option<PathBuf>,
}

impl ReferenceConfig {
    pub fn load(&self, keep_sequences: bool) -> Result<ReferenceSequences> {
        let chromosome_map = match &self.chromosome_map {
            Some(path) => Some(
                ChromosomeMap::from_file(path)
                    .with_context(|| format!("Failed to read chromosome map {:?}", path))?,
            ),
            None => None,
        };

        let references = match (&self.fasta, &self.accessions) {
            (Some(fasta), _) => ReferenceSequences::from_fasta(
                &self.build,
                fasta,
                chromosome_map.as_ref(),
                keep_sequences,
            )
            .with_context(|| format!("Failed to read reference FASTA {:?}", fasta))?,
            (None, Some(accessions)) => ReferenceSequences::from_accessions(&self.build, accessions)
                .with_context(|| format!("Failed to read accession table {:?}", accessions))?,
            (None, None) => anyhow::bail!(
                "Reference for build {} needs either a FASTA or an accession table",
                self.build
            ),
        };
        Ok(references)
    }

    fn resolve_relative_to(mut self, base: &Path) -> Self {
        let resolve = |path: Option<PathBuf>| {
            path.map(|p| if p.is_relative() { base.join(p) } else { p })
        };
        self.fasta = resolve(self.fasta);
        self.accessions = resolve(self.accessions);
        self.chromosome_map = resolve(self.chromosome_map);
        self
    }
}

///
/// Settings file for the `metaseq` binary:
///
/// ```toml
/// [identity]
/// genome_build = "GRCh38"
/// max_sequence_length = 50
///
/// [consequence]
/// ranking_file = "adsp_ranking.txt"
///
/// [[reference]]
/// build = "GRCh38"
/// fasta = "GRCh38.fa.gz"
/// ```
///
/// Relative paths are taken from the config file's directory.
///
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MetaseqConfig {
    pub identity: IdentityConfig,
    pub consequence: RankerConfig,
    pub reference: Vec<ReferenceConfig>,
}

impl MetaseqConfig {
    /// Read a config file, or fall back to the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => MetaseqConfig::try_from(path),
            None => Ok(MetaseqConfig::default()),
        }
    }

    /// A digest service holding every configured reference.
    pub fn digester(&self, keep_sequences: bool) -> Result<VrsAlleleDigester> {
        let mut digester = VrsAlleleDigester::new();
        for reference in &self.reference {
            digester.add_reference(reference.load(keep_sequences)?);
        }
        Ok(digester)
    }
}

impl TryFrom<&Path> for MetaseqConfig {
    type Error = anyhow::Error;

    fn try_from(path: &Path) -> Result<Self> {
        let toml_str = read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: MetaseqConfig = toml::from_str(&toml_str)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(MetaseqConfig {
            identity: config.identity,
            consequence: config.consequence.resolve_relative_to(base),
            reference: config
                .reference
                .into_iter()
                .map(|r| r.resolve_relative_to(base))
                .collect(),
        })
    }
}
