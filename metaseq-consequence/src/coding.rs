/// Consequences that alter or touch the coding sequence.
pub const CODING_CONSEQUENCES: &[&str] = &[
    "synonymous_variant",
    "missense_variant",
    "inframe_insertion",
    "inframe_deletion",
    "stop_gained",
    "stop_lost",
    "stop_retained_variant",
    "start_lost",
    "frameshift_variant",
    "coding_sequence_variant",
];

/// True when any of the terms is a coding consequence.
pub fn is_coding<S: AsRef<str>>(terms: &[S]) -> bool {
    terms
        .iter()
        .any(|term| CODING_CONSEQUENCES.contains(&term.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(&["missense_variant"], true)]
    #[case(&["intron_variant", "stop_gained"], true)]
    #[case(&["intron_variant", "splice_region_variant"], false)]
    #[case(&[], false)]
    fn test_is_coding(#[case] terms: &[&str], #[case] expected: bool) {
        assert_eq!(is_coding(terms), expected);
    }
}
