//! Helpers for consequence combinations: one or more terms, stored comma-joined.

use fxhash::FxHashSet;

pub const TERM_SEPARATOR: &str = ",";

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Split a stored combination into its terms.
pub fn split_combination(combination: &str) -> Vec<&str> {
    combination
        .split(TERM_SEPARATOR)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Terms with surrounding whitespace removed; blank terms are dropped.
pub fn clean_terms<S: AsRef<str>>(terms: &[S]) -> Vec<&str> {
    terms
        .iter()
        .map(|t| t.as_ref().trim())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Canonical, order-independent key: terms sorted alphabetically and comma-joined.
pub fn alphabetize<S: AsRef<str>>(terms: &[S]) -> String {
    let mut sorted: Vec<&str> = terms.iter().map(AsRef::as_ref).collect();
    sorted.sort_unstable();
    sorted.join(TERM_SEPARATOR)
}

/// [`alphabetize`] for an already joined combination.
pub fn alphabetize_combination(combination: &str) -> String {
    alphabetize(&split_combination(combination))
}

/// Set equality of two term lists; order and repetition are ignored.
pub fn is_equivalent<A: AsRef<str>, B: AsRef<str>>(left: &[A], right: &[B]) -> bool {
    let left: FxHashSet<&str> = left.iter().map(AsRef::as_ref).collect();
    let right: FxHashSet<&str> = right.iter().map(AsRef::as_ref).collect();
    left == right
}

/// Number of letters needed so every index up to `max_index` gets a code of equal length.
pub fn encoding_width(max_index: usize) -> usize {
    let base = ALPHABET.len();
    let mut width = 1;
    let mut capacity = base;
    while capacity <= max_index {
        width += 1;
        capacity = capacity.saturating_mul(base);
    }
    width
}

///
/// Fixed-width letter code of an index (`A-Z` then `a-z`), most significant letter
/// first, so comparing codes as strings orders them like the indexes themselves.
///
pub fn int_to_alpha(index: usize, width: usize) -> String {
    let base = ALPHABET.len();
    let mut letters = vec![ALPHABET[0]; width];
    let mut rest = index;
    for slot in letters.iter_mut().rev() {
        *slot = ALPHABET[rest % base];
        rest /= base;
    }
    letters.into_iter().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_alphabetize() {
        assert_eq!(
            alphabetize(&["stop_gained", "missense_variant"]),
            "missense_variant,stop_gained"
        );
        assert_eq!(
            alphabetize_combination("stop_gained, NMD_transcript_variant"),
            "NMD_transcript_variant,stop_gained"
        );
    }

    #[rstest]
    fn test_is_equivalent() {
        assert!(is_equivalent(
            &["stop_gained", "missense_variant"],
            &["missense_variant", "stop_gained"]
        ));
        assert!(!is_equivalent(&["stop_gained"], &["stop_gained", "missense_variant"]));
    }

    #[rstest]
    #[case(0, 1)]
    #[case(30, 1)]
    #[case(51, 1)]
    #[case(52, 2)]
    #[case(2703, 2)]
    #[case(2704, 3)]
    fn test_encoding_width(#[case] max_index: usize, #[case] expected: usize) {
        assert_eq!(encoding_width(max_index), expected);
    }

    #[rstest]
    #[case(0, 1, "A")]
    #[case(25, 1, "Z")]
    #[case(26, 1, "a")]
    #[case(51, 1, "z")]
    #[case(3, 2, "AD")]
    #[case(53, 2, "BB")]
    fn test_int_to_alpha(#[case] index: usize, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(int_to_alpha(index, width), expected);
    }

    #[rstest]
    fn test_codes_sort_like_indexes() {
        let width = encoding_width(200);
        let codes: Vec<String> = (0..200).map(|i| int_to_alpha(i, width)).collect();
        let mut sorted = codes.clone();
        sorted.sort();
        assert_eq!(codes, sorted);
    }
}
