//! VRS 2.0 digest vectors and reference loading from the fixture files.
//!
//! Vectors come from the GA4GH VRS validation suite:
//! - https://github.com/ga4gh/vrs/blob/2.0/validation/models.yaml
//! - https://github.com/ga4gh/vrs-python/blob/main/tests/test_vrs.py

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rstest::*;

use metaseq_core::ChromosomeMap;
use metaseq_vrs::digest::{allele_identifier, sequence_location_digest};
use metaseq_vrs::models::{Allele, SequenceLocation};
use metaseq_vrs::{ReferenceSequences, VrsAlleleDigester};

const CHR1_ACCESSION: &str = "SQ.bYrQVirUcnykrBXfhgZbcnLFGqAn1soh";

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../tests/data/reference")
        .join(name)
}

#[fixture]
fn mini_reference() -> ReferenceSequences {
    let map = ChromosomeMap::from_file(&data_path("chromosome_map.txt")).unwrap();
    ReferenceSequences::from_fasta("mini", &data_path("mini.fa"), Some(&map), true).unwrap()
}

#[rstest]
#[case("SQ.IIB53T8CNeJJdUqzn9V_JnRtQadwWCbl", 44908821, 44908822, "wIlaGykfwHIpPY2Fcxtbx4TINbbODFVz")]
#[case("SQ.F-LrLMe1SRpfUZHkQmvkVKFEGaoDeHul", 44908821, 44908822, "4t6JnYWqHwYw9WzBT_lmWBb3tLQNalkT")]
#[case("SQ.F-LrLMe1SRpfUZHkQmvkVKFEGaoDeHul", 55181319, 55181320, "_G2K0qSioM74l_u3OaKR0mgLYdeTL7Xd")]
fn test_sequence_location_digest(
    #[case] accession: &str,
    #[case] start: u64,
    #[case] end: u64,
    #[case] expected: &str,
) {
    let location = SequenceLocation::new(accession, start, end);
    assert_eq!(sequence_location_digest(&location), expected);
}

#[rstest]
fn test_allele_identifier_rs7412() {
    let location = SequenceLocation::new("SQ.IIB53T8CNeJJdUqzn9V_JnRtQadwWCbl", 44908821, 44908822);
    assert_eq!(
        allele_identifier(&Allele::literal(location, "T")),
        "ga4gh:VA.0AePZIWZUNsUlQTamyLrjm2HWUw2opLt"
    );
}

#[rstest]
fn test_fasta_accessions(mini_reference: ReferenceSequences) {
    assert_eq!(mini_reference.chromosomes(), vec!["1", "22", "M"]);
    assert_eq!(mini_reference.accession("chr1"), Some(CHR1_ACCESSION));
    assert_eq!(
        mini_reference.accession("MT"),
        Some("SQ.4YTWqo4Qkkpue1KxY12riKLC91P8S3rn")
    );
    assert_eq!(
        mini_reference.accession("22"),
        Some("SQ.SCOOtBjGnox_fYw373WssqyyJ_Aitp--")
    );
    assert_eq!(
        mini_reference.sequence("1"),
        Some(&b"ACGTACGTTAAAAGCCACGT"[..])
    );
}

#[rstest]
fn test_gzipped_fasta_matches_plain(mini_reference: ReferenceSequences) {
    let gzipped =
        ReferenceSequences::from_fasta("mini", &data_path("mini.fa.gz"), None, false).unwrap();
    assert_eq!(gzipped.accession("1"), mini_reference.accession("1"));
    assert_eq!(gzipped.sequence("1"), None);
    // without the map the RefSeq record keeps its own name
    assert_eq!(
        gzipped.accession("NC_000022.11"),
        mini_reference.accession("22")
    );
}

#[rstest]
fn test_accession_table_file() {
    let references =
        ReferenceSequences::from_accessions("GRCh38", &data_path("accessions.txt")).unwrap();
    assert_eq!(references.len(), 2);
    assert_eq!(
        references.accession("19"),
        Some("SQ.IIB53T8CNeJJdUqzn9V_JnRtQadwWCbl")
    );
    assert_eq!(
        references.accession("chr7"),
        Some("SQ.F-LrLMe1SRpfUZHkQmvkVKFEGaoDeHul")
    );
}

#[rstest]
#[case(8, 9, "TA", false, "ga4gh:VA.ZIia1zGch5NwOEjX42dkdqhF-kowk4Y5")]
#[case(8, 9, "TA", true, "ga4gh:VA.gfgqzhlO-dwEy2fCNByVqVlPnzP97ugx")]
#[case(9, 13, "AAAAA", false, "ga4gh:VA.gfgqzhlO-dwEy2fCNByVqVlPnzP97ugx")]
#[case(0, 8, "A", false, "ga4gh:VA.y-9YhbRnCskiqRIt2fDv5nldhBjA0lNe")]
fn test_digester_on_fixture(
    mini_reference: ReferenceSequences,
    #[case] start: u64,
    #[case] end: u64,
    #[case] sequence: &str,
    #[case] normalize: bool,
    #[case] expected: &str,
) {
    let digester = VrsAlleleDigester::new().with_reference(mini_reference);
    let id = digester
        .allele_identifier("mini", "1", start, end, sequence, normalize)
        .unwrap();
    assert_eq!(id, expected);
}

#[rstest]
fn test_missing_fasta_is_io_error() {
    let result = ReferenceSequences::from_fasta("mini", &data_path("missing.fa"), None, false);
    assert!(matches!(result, Err(metaseq_vrs::VrsError::Io(_))));
}
