//! Left-trimming of allele pairs.
//!
//! Unlike VRS normalization this never consults the reference sequence and never rolls
//! through repeats: it only strips the shared leading bases, e.g. `CAGT/CG` -> `AGT/G`.

use metaseq_core::consts::EMPTY_ALLELE_PLACEHOLDER;

/// A reference/alternate pair with the common leading prefix removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedAlleles {
    pub ref_allele: String,
    pub alt_allele: String,
    /// Number of leading characters removed from both alleles.
    pub trimmed: usize,
}

/// Byte length of the longest common leading prefix, counted in whole characters.
fn common_prefix_len(ref_allele: &str, alt_allele: &str) -> usize {
    ref_allele
        .chars()
        .zip(alt_allele.chars())
        .take_while(|(r, a)| r == a)
        .map(|(r, _)| r.len_utf8())
        .sum()
}

fn or_placeholder(allele: &str, dash_for_empty: bool) -> String {
    if allele.is_empty() && dash_for_empty {
        EMPTY_ALLELE_PLACEHOLDER.to_string()
    } else {
        allele.to_string()
    }
}

///
/// Remove the leading bases shared by the reference and alternate alleles.
///
/// SNVs (both alleles of length 1) are returned untouched. An allele consumed entirely
/// by the trim comes back empty, or as `-` when `dash_for_empty` is set.
///
/// # Arguments
/// * `ref_allele` - reference allele as observed
/// * `alt_allele` - alternate allele as observed
/// * `dash_for_empty` - substitute `-` for a fully consumed allele
///
pub fn normalize_alleles(
    ref_allele: &str,
    alt_allele: &str,
    dash_for_empty: bool,
) -> NormalizedAlleles {
    let untouched = || NormalizedAlleles {
        ref_allele: ref_allele.to_string(),
        alt_allele: alt_allele.to_string(),
        trimmed: 0,
    };

    if ref_allele.len() == 1 && alt_allele.len() == 1 {
        return untouched();
    }

    let trimmed = common_prefix_len(ref_allele, alt_allele);
    if trimmed == 0 {
        return untouched();
    }

    NormalizedAlleles {
        ref_allele: or_placeholder(&ref_allele[trimmed..], dash_for_empty),
        alt_allele: or_placeholder(&alt_allele[trimmed..], dash_for_empty),
        trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("CAGT", "CG", "AGT", "G", 1)]
    #[case("A", "G", "A", "G", 0)]
    #[case("ATG", "ACG", "TG", "CG", 1)]
    #[case("AC", "GT", "AC", "GT", 0)]
    #[case("A", "AT", "", "T", 1)]
    #[case("CAT", "C", "AT", "", 1)]
    #[case("GATTACA", "GATT", "ACA", "", 4)]
    fn test_normalize_alleles(
        #[case] ref_allele: &str,
        #[case] alt_allele: &str,
        #[case] expected_ref: &str,
        #[case] expected_alt: &str,
        #[case] expected_trimmed: usize,
    ) {
        let result = normalize_alleles(ref_allele, alt_allele, false);
        assert_eq!(result.ref_allele, expected_ref);
        assert_eq!(result.alt_allele, expected_alt);
        assert_eq!(result.trimmed, expected_trimmed);
    }

    #[rstest]
    #[case("A", "AT", "-", "T")]
    #[case("CAT", "C", "AT", "-")]
    #[case("AT", "AT", "-", "-")]
    fn test_dash_for_empty(
        #[case] ref_allele: &str,
        #[case] alt_allele: &str,
        #[case] expected_ref: &str,
        #[case] expected_alt: &str,
    ) {
        let result = normalize_alleles(ref_allele, alt_allele, true);
        assert_eq!(result.ref_allele, expected_ref);
        assert_eq!(result.alt_allele, expected_alt);
    }

    #[rstest]
    #[case("CAGT", "CG", false)]
    #[case("CAGT", "CG", true)]
    #[case("A", "ATTT", true)]
    #[case("A", "ATTT", false)]
    #[case("TTTTA", "T", true)]
    #[case("ACGT", "TGCA", false)]
    #[case("AT", "AT", true)]
    fn test_normalization_is_idempotent(
        #[case] ref_allele: &str,
        #[case] alt_allele: &str,
        #[case] dash_for_empty: bool,
    ) {
        let once = normalize_alleles(ref_allele, alt_allele, dash_for_empty);
        let twice = normalize_alleles(&once.ref_allele, &once.alt_allele, dash_for_empty);
        assert_eq!(twice.ref_allele, once.ref_allele);
        assert_eq!(twice.alt_allele, once.alt_allele);
        assert_eq!(twice.trimmed, 0);
    }

    #[rstest]
    fn test_trimmed_alleles_never_share_leading_base() {
        let result = normalize_alleles("GGGA", "GGGC", false);
        assert_eq!(result.ref_allele, "A");
        assert_eq!(result.alt_allele, "C");
        assert_ne!(
            result.ref_allele.chars().next(),
            result.alt_allele.chars().next()
        );
    }
}
