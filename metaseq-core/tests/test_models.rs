use std::path::PathBuf;
use std::str::FromStr;

use pretty_assertions::assert_eq;
use rstest::*;

use metaseq_core::{Allele, AlleleError, ChromosomeMap, ChromosomeMapError};

#[fixture]
fn chromosome_map() -> ChromosomeMap {
    ChromosomeMap::from_file(&PathBuf::from("../tests/data/reference/chromosome_map.txt")).unwrap()
}

#[rstest]
fn test_chromosome_map_from_file(chromosome_map: ChromosomeMap) {
    assert_eq!(chromosome_map.len(), 1);
    assert_eq!(chromosome_map.get("NC_000022.11").unwrap(), "22");
    assert_eq!(chromosome_map.sequence_id("chr22"), Some("NC_000022.11"));
    assert_eq!(chromosome_map.length("22"), Some(16));
}

#[rstest]
fn test_chromosome_map_unknown_id(chromosome_map: ChromosomeMap) {
    assert!(matches!(
        chromosome_map.get("NC_000001.11"),
        Err(ChromosomeMapError::UnknownSequenceId(id)) if id == "NC_000001.11"
    ));
}

#[rstest]
fn test_allele_display_matches_metaseq_id() {
    let allele = Allele::new("chrX", 2_781_479, "G", "GA").unwrap();
    assert_eq!(allele.to_string(), "X:2781479:G:GA");
    assert_eq!(Allele::from_str(&allele.metaseq_id()).unwrap(), allele);
    assert_eq!(allele.allele_length(), 3);
    assert!(!allele.is_snv());
}

#[rstest]
fn test_malformed_identity_keeps_input() {
    assert_eq!(
        Allele::from_str("22:abc:A:G"),
        Err(AlleleError::MalformedIdentity("22:abc:A:G".to_string()))
    );
}
