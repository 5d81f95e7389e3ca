use std::str::FromStr;

use log::debug;

use metaseq_core::Allele;
use metaseq_core::consts::METASEQ_SEPARATOR;

use crate::config::IdentityConfig;
use crate::errors::IdentityError;
use crate::service::{DigestRequest, SequenceDigestService};

/// Reduce a prefixed identifier (`ga4gh:VA.abc`) to its bare value (`abc`).
pub fn strip_digest_prefix(identifier: &str) -> &str {
    identifier
        .rfind(['.', ':'])
        .map_or(identifier, |idx| &identifier[idx + 1..])
}

///
/// Builds primary keys from metaseq identifiers.
///
/// Keys are `chrom:position:ref:alt` while `len(ref) + len(alt)` stays within
/// `max_sequence_length`, and `chrom:position:<digest>` beyond it. The digest service is
/// only consulted for the long form.
///
pub struct PrimaryKeyGenerator<D> {
    config: IdentityConfig,
    service: D,
}

impl<D: SequenceDigestService> PrimaryKeyGenerator<D> {
    pub fn new(config: IdentityConfig, service: D) -> Self {
        PrimaryKeyGenerator { config, service }
    }

    pub fn config(&self) -> &IdentityConfig {
        &self.config
    }

    pub fn service(&self) -> &D {
        &self.service
    }

    ///
    /// Generate the primary key of a variant.
    ///
    /// # Arguments
    /// * `metaseq_id` - `chrom:position:ref:alt`
    /// * `external_id` - accession appended after a `:`; empty strings count as absent
    ///
    pub fn generate_primary_key(
        &self,
        metaseq_id: &str,
        external_id: Option<&str>,
    ) -> Result<String, IdentityError> {
        let allele = Allele::from_str(metaseq_id)?;

        let mut key = if allele.allele_length() <= self.config.max_sequence_length {
            allele.metaseq_id()
        } else {
            let digest = self.allele_digest(&allele)?;
            format!(
                "{}{sep}{}{sep}{}",
                allele.chromosome,
                allele.position,
                digest,
                sep = METASEQ_SEPARATOR
            )
        };

        if let Some(external_id) = external_id.filter(|id| !id.is_empty()) {
            key.push(METASEQ_SEPARATOR);
            key.push_str(external_id);
        }

        Ok(key)
    }

    ///
    /// Bare digest of a variant, regardless of allele length.
    ///
    pub fn compute_digest(&self, metaseq_id: &str) -> Result<String, IdentityError> {
        let allele = Allele::from_str(metaseq_id)?;
        self.allele_digest(&allele)
    }

    fn allele_digest(&self, allele: &Allele) -> Result<String, IdentityError> {
        let request = self.digest_request(allele);
        debug!(
            "Requesting digest for {} ({} {}:{}-{})",
            allele, request.build, request.chromosome, request.start, request.end
        );
        let identifier = self.service.digest(&request)?;
        Ok(strip_digest_prefix(&identifier).to_string())
    }

    /// The un-trimmed allele in interbase coordinates.
    fn digest_request(&self, allele: &Allele) -> DigestRequest {
        let start = allele.position - 1;
        DigestRequest {
            build: self.config.genome_build.clone(),
            chromosome: allele.chromosome.clone(),
            start,
            end: start + allele.ref_allele.len() as u64,
            inserted_sequence: allele.alt_allele.clone(),
            normalize: self.config.normalize,
        }
    }
}
