//! VRS allele normalization.
//!
//! Fully-justified normalization: trim the shared prefix and suffix, then widen the span
//! over every position the remaining allele could be rolled to within a repeat.
//! Works on `&[u8]` so the reference is never copied.

use crate::errors::NormalizeError;

/// Normalized span and alternate sequence, in interbase coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedAllele {
    pub start: u64,
    pub end: u64,
    pub allele: Vec<u8>,
}

fn common_prefix(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

fn common_suffix(a: &[u8], b: &[u8]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

/// How far the non-empty alleles can be rotated left through `sequence`, starting from
/// boundary `ref_pos` and never passing `bound`.
fn roll_left(sequence: &[u8], alleles: &[&[u8]], ref_pos: usize, bound: usize) -> usize {
    let non_empty: Vec<&[u8]> = alleles.iter().copied().filter(|a| !a.is_empty()).collect();
    if non_empty.is_empty() || ref_pos <= bound {
        return 0;
    }

    let mut d = 0;
    while d < ref_pos - bound {
        let base = sequence[ref_pos - 1 - d];
        let mismatched = non_empty.iter().any(|allele| {
            let len = allele.len();
            // walk backwards from the last base of the allele, circularly
            let idx = (len - 1) - (d % len);
            allele[idx] != base
        });
        if mismatched {
            break;
        }
        d += 1;
    }
    d
}

/// Mirror of [`roll_left`] towards the end of the sequence.
fn roll_right(sequence: &[u8], alleles: &[&[u8]], ref_pos: usize, bound: usize) -> usize {
    let non_empty: Vec<&[u8]> = alleles.iter().copied().filter(|a| !a.is_empty()).collect();
    if non_empty.is_empty() || ref_pos >= bound {
        return 0;
    }

    let mut d = 0;
    while d < bound - ref_pos {
        let base = sequence[ref_pos + d];
        if non_empty.iter().any(|allele| allele[d % allele.len()] != base) {
            break;
        }
        d += 1;
    }
    d
}

/// Normalize an allele against a reference sequence (fully-justified mode).
///
/// # Arguments
/// * `sequence` - full reference sequence
/// * `start` - interbase start of the reference allele
/// * `ref_allele` - reference allele bytes
/// * `alt_allele` - alternate allele bytes
pub fn normalize(
    sequence: &[u8],
    start: u64,
    ref_allele: &[u8],
    alt_allele: &[u8],
) -> Result<NormalizedAllele, NormalizeError> {
    let out_of_bounds = NormalizeError::StartOutOfBounds {
        start,
        seq_len: sequence.len(),
    };
    let mut s = usize::try_from(start).map_err(|_| out_of_bounds.clone())?;
    let mut e = s.checked_add(ref_allele.len()).ok_or(out_of_bounds)?;
    if e > sequence.len() {
        return Err(NormalizeError::RefAllelePastEnd {
            start: s,
            ref_len: ref_allele.len(),
            seq_len: sequence.len(),
        });
    }

    let prefix = common_prefix(ref_allele, alt_allele);
    let (ref_trimmed, alt_trimmed) = (&ref_allele[prefix..], &alt_allele[prefix..]);
    s += prefix;

    let suffix = common_suffix(ref_trimmed, alt_trimmed);
    let ref_trimmed = &ref_trimmed[..ref_trimmed.len() - suffix];
    let alt_trimmed = &alt_trimmed[..alt_trimmed.len() - suffix];
    e -= suffix;

    let alleles = [ref_trimmed, alt_trimmed];
    let new_start = s - roll_left(sequence, &alleles, s, 0);
    let new_end = e + roll_right(sequence, &alleles, e, sequence.len());

    let mut allele = Vec::with_capacity((s - new_start) + alt_trimmed.len() + (new_end - e));
    allele.extend_from_slice(&sequence[new_start..s]);
    allele.extend_from_slice(alt_trimmed);
    allele.extend_from_slice(&sequence[e..new_end]);

    Ok(NormalizedAllele {
        start: new_start as u64,
        end: new_end as u64,
        allele,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_trim_helpers() {
        assert_eq!(common_prefix(b"ATCG", b"ATGG"), 2);
        assert_eq!(common_suffix(b"ATCG", b"AGCG"), 2);
        assert_eq!(common_prefix(b"A", b"AT"), 1);
    }

    #[rstest]
    fn test_snv_is_unchanged() {
        let result = normalize(b"ACGTACGT", 2, b"G", b"T").unwrap();
        assert_eq!(result.start, 2);
        assert_eq!(result.end, 3);
        assert_eq!(result.allele, b"T");
    }

    #[rstest]
    fn test_insertion_in_homopolymer_spans_the_run() {
        // TAAAAG, VCF pos=2 A>AA
        let result = normalize(b"TAAAAG", 1, b"A", b"AA").unwrap();
        assert_eq!(result.start, 1);
        assert_eq!(result.end, 5);
        assert_eq!(result.allele, b"AAAAA");
    }

    #[rstest]
    fn test_deletion_in_homopolymer_spans_the_run() {
        let result = normalize(b"TAAAAG", 1, b"AA", b"A").unwrap();
        assert_eq!(result.start, 1);
        assert_eq!(result.end, 5);
        assert_eq!(result.allele, b"AAA");
    }

    #[rstest]
    fn test_dinucleotide_repeat_insertion() {
        // G CA CA CA T: insert one more CA after the first one
        let seq = b"GCACACAT";
        let result = normalize(seq, 2, b"A", b"ACA").unwrap();
        assert_eq!(result.start, 1);
        assert_eq!(result.end, 7);
        assert_eq!(result.allele, b"CACACACA");
    }

    #[rstest]
    fn test_reference_identity_collapses() {
        let result = normalize(b"ACGTACGT", 2, b"GT", b"GT").unwrap();
        assert_eq!(result.start, 4);
        assert_eq!(result.end, 4);
        assert_eq!(result.allele, b"");
    }

    #[rstest]
    fn test_out_of_bounds() {
        assert_eq!(
            normalize(b"ACGT", 10, b"G", b"T"),
            Err(NormalizeError::RefAllelePastEnd {
                start: 10,
                ref_len: 1,
                seq_len: 4
            })
        );
    }
}
