//! [`SequenceDigestService`] backed by GA4GH VRS allele identifiers.

use metaseq_vrs::VrsAlleleDigester;

use crate::errors::SequenceLookupError;
use crate::service::{DigestRequest, SequenceDigestService};

impl SequenceDigestService for VrsAlleleDigester {
    fn digest(&self, request: &DigestRequest) -> Result<String, SequenceLookupError> {
        self.allele_identifier(
            &request.build,
            &request.chromosome,
            request.start,
            request.end,
            &request.inserted_sequence,
            request.normalize,
        )
        .map_err(|e| SequenceLookupError {
            build: request.build.clone(),
            chromosome: request.chromosome.clone(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use metaseq_vrs::ReferenceSequences;

    fn request(build: &str, chromosome: &str) -> DigestRequest {
        DigestRequest {
            build: build.to_string(),
            chromosome: chromosome.to_string(),
            start: 44908821,
            end: 44908822,
            inserted_sequence: "T".to_string(),
            normalize: false,
        }
    }

    #[rstest]
    fn test_vrs_digest() {
        let mut references = ReferenceSequences::new("GRCh38");
        references.insert_accession("19", "SQ.IIB53T8CNeJJdUqzn9V_JnRtQadwWCbl");
        let digester = VrsAlleleDigester::new().with_reference(references);

        assert_eq!(
            digester.digest(&request("GRCh38", "19")).unwrap(),
            "ga4gh:VA.0AePZIWZUNsUlQTamyLrjm2HWUw2opLt"
        );
    }

    #[rstest]
    fn test_unknown_build_is_lookup_error() {
        let digester = VrsAlleleDigester::new();
        let err = digester.digest(&request("GRCh37", "19")).unwrap_err();
        assert_eq!(err.build, "GRCh37");
        assert_eq!(err.chromosome, "19");
        assert!(err.message.contains("GRCh37"));
    }
}
