//! Refget accessions for the chromosomes of a genome build.
//!
//! VRS locations reference sequences by refget accession (`SQ.` + sha512t24u of the
//! upper-cased sequence). Accessions are either computed from a FASTA, optionally keeping
//! the sequence for normalization, or read from a precomputed `chromosome<TAB>accession`
//! table when only digests are needed.

use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use log::{debug, info};
use sha2::{Digest, Sha512};

use metaseq_core::utils::get_dynamic_reader;
use metaseq_core::{ChromosomeMap, normalize_chromosome};

use crate::algorithms::sha512t24u;
use crate::errors::VrsError;

pub const REFGET_PREFIX: &str = "SQ.";
const GA4GH_PREFIX: &str = "ga4gh:";

#[derive(Debug, Clone)]
struct ReferenceSequence {
    accession: String,
    sequence: Option<Vec<u8>>,
}

/// Per-build registry of chromosome token -> refget accession (and optionally sequence).
#[derive(Debug, Clone)]
pub struct ReferenceSequences {
    build: String,
    sequences: HashMap<String, ReferenceSequence>,
}

/// The first word of a FASTA header, without the leading `>`.
fn header_name(header: &str) -> &str {
    let header = header.trim_start_matches('>').trim();
    header
        .split_once(char::is_whitespace)
        .map_or(header, |(name, _)| name)
}

impl ReferenceSequences {
    pub fn new(build: &str) -> Self {
        ReferenceSequences {
            build: build.to_string(),
            sequences: HashMap::new(),
        }
    }

    pub fn build(&self) -> &str {
        &self.build
    }

    ///
    /// Register a sequence; the accession is computed from its upper-cased bases.
    ///
    pub fn insert_sequence(&mut self, chromosome: &str, sequence: &[u8]) -> &str {
        let sequence = sequence.to_ascii_uppercase();
        let accession = format!("{}{}", REFGET_PREFIX, sha512t24u(&sequence));
        self.insert(chromosome, accession, Some(sequence))
    }

    ///
    /// Register a precomputed accession, with or without the `ga4gh:` prefix.
    ///
    pub fn insert_accession(&mut self, chromosome: &str, accession: &str) -> &str {
        let accession = accession
            .trim()
            .strip_prefix(GA4GH_PREFIX)
            .unwrap_or(accession.trim())
            .to_string();
        self.insert(chromosome, accession, None)
    }

    fn insert(&mut self, chromosome: &str, accession: String, sequence: Option<Vec<u8>>) -> &str {
        let chromosome = normalize_chromosome(chromosome);
        debug!("{}: {} -> {}", self.build, chromosome, accession);
        let entry = self
            .sequences
            .entry(chromosome)
            .or_insert(ReferenceSequence {
                accession: String::new(),
                sequence: None,
            });
        entry.accession = accession;
        entry.sequence = sequence;
        &entry.accession
    }

    ///
    /// Compute accessions for every record of a (possibly gzipped) FASTA file.
    ///
    /// Record names are reduced to bare chromosome tokens, after translation through
    /// `chromosome_map` when given (e.g. RefSeq ids to chromosomes). Sequences are only
    /// kept in memory when `keep_sequences` is set.
    ///
    pub fn from_fasta(
        build: &str,
        path: &Path,
        chromosome_map: Option<&ChromosomeMap>,
        keep_sequences: bool,
    ) -> Result<Self, VrsError> {
        info!("Loading {} reference sequences from {:?}", build, path);
        let reader = get_dynamic_reader(path)?;
        let references = Self::from_fasta_reader(build, reader, chromosome_map, keep_sequences)?;
        if references.is_empty() {
            return Err(VrsError::EmptyReference(path.display().to_string()));
        }
        info!("Loaded {} sequences for {}", references.len(), build);
        Ok(references)
    }

    pub fn from_fasta_reader<R: BufRead>(
        build: &str,
        reader: R,
        chromosome_map: Option<&ChromosomeMap>,
        keep_sequences: bool,
    ) -> Result<Self, VrsError> {
        let mut references = ReferenceSequences::new(build);

        let mut current: Option<String> = None;
        let mut hasher = Sha512::new();
        let mut sequence: Vec<u8> = Vec::new();

        let finish = |references: &mut ReferenceSequences,
                          name: Option<String>,
                          hasher: &mut Sha512,
                          sequence: &mut Vec<u8>| {
            let Some(name) = name else {
                return;
            };
            let digest = base64_url::encode(&hasher.finalize_reset()[0..24]);
            let stored = keep_sequences.then(|| std::mem::take(sequence));
            references.insert(&name, format!("{}{}", REFGET_PREFIX, digest), stored);
        };

        for line in reader.lines() {
            let line = line?;
            let line = line.trim_end();
            if let Some(header) = line.strip_prefix('>') {
                finish(&mut references, current.take(), &mut hasher, &mut sequence);
                let name = header_name(header);
                let name = chromosome_map
                    .and_then(|map| map.get(name).ok())
                    .unwrap_or(name);
                current = Some(name.to_string());
            } else if current.is_some() {
                let bases = line.as_bytes().to_ascii_uppercase();
                hasher.update(&bases);
                if keep_sequences {
                    sequence.extend_from_slice(&bases);
                }
            }
        }
        finish(&mut references, current.take(), &mut hasher, &mut sequence);

        Ok(references)
    }

    ///
    /// Read a `chromosome<TAB>accession` table. A header line starting with `chromosome`
    /// and `#` comment lines are skipped.
    ///
    pub fn from_accessions(build: &str, path: &Path) -> Result<Self, VrsError> {
        info!("Loading {} refget accessions from {:?}", build, path);
        let reader = get_dynamic_reader(path)?;
        Self::from_accessions_reader(build, reader)
    }

    pub fn from_accessions_reader<R: BufRead>(build: &str, reader: R) -> Result<Self, VrsError> {
        let mut references = ReferenceSequences::new(build);
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || (i == 0 && line.starts_with("chromosome"))
            {
                continue;
            }
            let Some((chromosome, accession)) = line.split_once('\t') else {
                return Err(VrsError::MalformedAccessionLine {
                    line: i + 1,
                    content: line.to_string(),
                });
            };
            references.insert_accession(chromosome, accession);
        }
        Ok(references)
    }

    pub fn accession(&self, chromosome: &str) -> Option<&str> {
        self.sequences
            .get(&normalize_chromosome(chromosome))
            .map(|s| s.accession.as_str())
    }

    pub fn sequence(&self, chromosome: &str) -> Option<&[u8]> {
        self.sequences
            .get(&normalize_chromosome(chromosome))
            .and_then(|s| s.sequence.as_deref())
    }

    /// Registered chromosome tokens, sorted.
    pub fn chromosomes(&self) -> Vec<&str> {
        let mut chromosomes: Vec<&str> = self.sequences.keys().map(String::as_str).collect();
        chromosomes.sort();
        chromosomes
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}
