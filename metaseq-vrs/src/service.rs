use std::collections::HashMap;

use log::debug;

use metaseq_core::normalize_chromosome;

use crate::digest::{DigestWriter, allele_identifier};
use crate::errors::{NormalizeError, VrsError};
use crate::models::{Allele, SequenceLocation};
use crate::normalize::normalize;
use crate::reference::ReferenceSequences;

///
/// Computes VRS allele identifiers for variants on registered genome builds.
///
/// One [`ReferenceSequences`] is held per build. Identifiers are deterministic: the same
/// build, chromosome, span and sequence always give the same `ga4gh:VA.` identifier.
///
#[derive(Debug, Clone, Default)]
pub struct VrsAlleleDigester {
    references: HashMap<String, ReferenceSequences>,
}

impl VrsAlleleDigester {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the reference sequences of a build.
    pub fn add_reference(&mut self, references: ReferenceSequences) {
        self.references
            .insert(references.build().to_string(), references);
    }

    pub fn with_reference(mut self, references: ReferenceSequences) -> Self {
        self.add_reference(references);
        self
    }

    pub fn builds(&self) -> Vec<&str> {
        let mut builds: Vec<&str> = self.references.keys().map(String::as_str).collect();
        builds.sort();
        builds
    }

    pub fn reference(&self, build: &str) -> Option<&ReferenceSequences> {
        self.references.get(build)
    }

    ///
    /// Compute the VRS identifier of an allele.
    ///
    /// # Arguments
    /// * `build` - genome build the references were registered under
    /// * `chromosome` - chromosome name, bare or `chr`-prefixed
    /// * `start` - interbase start
    /// * `end` - interbase end
    /// * `sequence` - alternate sequence replacing `[start, end)`
    /// * `normalize` - apply fully-justified VRS normalization first (needs the sequence)
    ///
    pub fn allele_identifier(
        &self,
        build: &str,
        chromosome: &str,
        start: u64,
        end: u64,
        sequence: &str,
        normalize: bool,
    ) -> Result<String, VrsError> {
        if start > end {
            return Err(VrsError::InvalidRange { start, end });
        }

        let references = self
            .references
            .get(build)
            .ok_or_else(|| VrsError::UnknownBuild(build.to_string()))?;
        let accession =
            references
                .accession(chromosome)
                .ok_or_else(|| VrsError::UnknownChromosome {
                    build: build.to_string(),
                    chromosome: normalize_chromosome(chromosome),
                })?;

        let sequence = sequence.to_ascii_uppercase();
        let (start, end, sequence) = if normalize {
            self.normalized(references, chromosome, start, end, &sequence)?
        } else {
            (start, end, sequence)
        };

        debug!(
            "VRS allele {}:{}-{} {} on {}",
            accession, start, end, sequence, build
        );

        if DigestWriter::is_literal_safe(&sequence) {
            let mut writer = DigestWriter::new();
            Ok(writer.allele_identifier_literal(accession, start, end, &sequence))
        } else {
            let location = SequenceLocation::new(accession, start, end);
            Ok(allele_identifier(&Allele::literal(location, &sequence)))
        }
    }

    fn normalized(
        &self,
        references: &ReferenceSequences,
        chromosome: &str,
        start: u64,
        end: u64,
        sequence: &str,
    ) -> Result<(u64, u64, String), VrsError> {
        let reference =
            references
                .sequence(chromosome)
                .ok_or_else(|| VrsError::SequenceUnavailable {
                    build: references.build().to_string(),
                    chromosome: normalize_chromosome(chromosome),
                })?;

        let seq_len = reference.len();
        let (Ok(from), Ok(to)) = (usize::try_from(start), usize::try_from(end)) else {
            return Err(NormalizeError::StartOutOfBounds { start, seq_len }.into());
        };
        let Some(ref_allele) = reference.get(from..to) else {
            return Err(NormalizeError::RefAllelePastEnd {
                start: from,
                ref_len: to - from,
                seq_len,
            }
            .into());
        };

        let normalized = normalize(reference, start, ref_allele, sequence.as_bytes())?;
        Ok((
            normalized.start,
            normalized.end,
            String::from_utf8_lossy(&normalized.allele).into_owned(),
        ))
    }
}
