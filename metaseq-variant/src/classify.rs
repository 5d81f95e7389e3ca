//! Variant classification and display attributes.
//!
//! Dispatch is on the lengths of the *observed* alleles; the trimmed alleles only feed
//! the display strings and the span. Deletion- and insertion-family variants are anchored
//! one base after `position` (the VCF padding base), unless an externally reported
//! position (dbSNP `RSPOS`) is supplied, in which case that position is the start.

use std::fmt::{self, Display};

use serde_json::{Value, json};

use metaseq_core::Allele;

use crate::normalize::normalize_alleles;

/// Display alleles longer than this are truncated in `sequence_allele`.
const DISPLAY_ALLELE_LENGTH: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantClass {
    SingleNucleotideVariant,
    Substitution,
    Inversion,
    Deletion,
    Insertion,
    Indel,
    Duplication,
}

impl VariantClass {
    pub fn abbrev(&self) -> &'static str {
        match self {
            VariantClass::SingleNucleotideVariant => "SNV",
            VariantClass::Substitution | VariantClass::Inversion => "MNV",
            VariantClass::Deletion => "DEL",
            VariantClass::Insertion => "INS",
            VariantClass::Indel => "INDEL",
            VariantClass::Duplication => "DUP",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            VariantClass::SingleNucleotideVariant => "single nucleotide variant",
            VariantClass::Substitution => "substitution",
            VariantClass::Inversion => "inversion",
            VariantClass::Deletion => "deletion",
            VariantClass::Insertion => "insertion",
            VariantClass::Indel => "indel",
            VariantClass::Duplication => "duplication",
        }
    }
}

impl Display for VariantClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

///
/// Classification of a variant plus the strings and coordinates used to display it.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayAttributes {
    pub variant_class: VariantClass,
    /// Human readable allele, e.g. `A>G`, `delATG`, `delATGinsG`, `dupCA`.
    pub display_allele: String,
    /// Truncated `ref/alt` pair.
    pub sequence_allele: String,
    pub location_start: u64,
    pub location_end: u64,
}

impl DisplayAttributes {
    pub fn variant_class_abbrev(&self) -> &'static str {
        self.variant_class.abbrev()
    }

    pub fn to_json(&self) -> Value {
        json!({
            "variant_class": self.variant_class.description(),
            "variant_class_abbrev": self.variant_class.abbrev(),
            "display_allele": self.display_allele,
            "sequence_allele": self.sequence_allele,
            "location_start": self.location_start,
            "location_end": self.location_end,
        })
    }
}

/// Truncate an allele for display: at most five bases, then `...`.
fn truncate_allele(allele: &str) -> String {
    match allele.char_indices().nth(DISPLAY_ALLELE_LENGTH) {
        Some((idx, _)) => format!("{}...", &allele[..idx]),
        None => allele.to_string(),
    }
}

/// Drop the leading (padding) base.
fn strip_first_base(allele: &str) -> &str {
    let first = allele.chars().next().map_or(0, char::len_utf8);
    &allele[first..]
}

fn is_reversal(ref_allele: &str, alt_allele: &str) -> bool {
    ref_allele.chars().eq(alt_allele.chars().rev())
}

/// Last base covered by `length` bases starting at `start`; never before `start`.
fn span_end(start: u64, length: usize) -> u64 {
    start + (length.saturating_sub(1) as u64)
}

///
/// Classify a variant and compute its display attributes.
///
/// # Arguments
/// * `ref_allele` - reference allele as observed (non-empty)
/// * `alt_allele` - alternate allele as observed (non-empty)
/// * `position` - 1-based position of the first reference base
/// * `rs_position` - externally reported start (dbSNP `RSPOS`), if known
///
/// Empty alleles are a caller error; construct an [`Allele`] first to have them rejected.
///
pub fn classify(
    ref_allele: &str,
    alt_allele: &str,
    position: u64,
    rs_position: Option<u64>,
) -> DisplayAttributes {
    let ref_len = ref_allele.len();
    let alt_len = alt_allele.len();

    // exact lengths come from the plain trim, display strings from the dashed one
    let exact = normalize_alleles(ref_allele, alt_allele, false);
    let shown = normalize_alleles(ref_allele, alt_allele, true);
    let norm_ref_len = exact.ref_allele.len();
    let norm_alt_len = exact.alt_allele.len();

    if ref_len == alt_len {
        if ref_len == 1 {
            return DisplayAttributes {
                variant_class: VariantClass::SingleNucleotideVariant,
                display_allele: format!("{}>{}", ref_allele, alt_allele),
                sequence_allele: format!("{}/{}", ref_allele, alt_allele),
                location_start: position,
                location_end: position,
            };
        }

        if is_reversal(ref_allele, alt_allele) {
            return DisplayAttributes {
                variant_class: VariantClass::Inversion,
                display_allele: format!("inv{}", ref_allele),
                sequence_allele: format!(
                    "{}/{}",
                    truncate_allele(ref_allele),
                    truncate_allele(alt_allele)
                ),
                location_start: position,
                location_end: span_end(position, ref_len),
            };
        }

        let start = rs_position.unwrap_or(position);
        return DisplayAttributes {
            variant_class: VariantClass::Substitution,
            display_allele: format!("{}>{}", exact.ref_allele, exact.alt_allele),
            sequence_allele: format!(
                "{}/{}",
                truncate_allele(&exact.ref_allele),
                truncate_allele(&exact.alt_allele)
            ),
            location_start: start,
            location_end: span_end(start, norm_ref_len),
        };
    }

    let start = rs_position.unwrap_or(position + 1);

    if ref_len > alt_len {
        if norm_alt_len > 1 {
            return DisplayAttributes {
                variant_class: VariantClass::Indel,
                display_allele: format!("del{}ins{}", shown.ref_allele, shown.alt_allele),
                sequence_allele: format!(
                    "{}/{}",
                    truncate_allele(&shown.ref_allele),
                    truncate_allele(&shown.alt_allele)
                ),
                location_start: start,
                location_end: span_end(start, norm_ref_len),
            };
        }

        return DisplayAttributes {
            variant_class: VariantClass::Deletion,
            display_allele: format!("del{}", shown.ref_allele),
            sequence_allele: format!("{}/-", truncate_allele(&shown.ref_allele)),
            location_start: start,
            location_end: span_end(start, norm_ref_len),
        };
    }

    // insertions
    let ref_consumed = exact.ref_allele.is_empty();
    let padded_ref = strip_first_base(ref_allele);

    if ref_consumed && ref_len > 1 && padded_ref == exact.alt_allele {
        return DisplayAttributes {
            variant_class: VariantClass::Duplication,
            display_allele: format!("dup{}", shown.alt_allele),
            sequence_allele: format!("-/{}", truncate_allele(&shown.alt_allele)),
            location_start: start,
            location_end: start,
        };
    }

    if ref_len > 1 {
        let (deleted, end) = if ref_consumed {
            (padded_ref, span_end(start, ref_len - 1))
        } else {
            (shown.ref_allele.as_str(), span_end(start, norm_ref_len))
        };
        return DisplayAttributes {
            variant_class: VariantClass::Indel,
            display_allele: format!("del{}ins{}", deleted, shown.alt_allele),
            sequence_allele: format!(
                "{}/{}",
                truncate_allele(deleted),
                truncate_allele(&shown.alt_allele)
            ),
            location_start: start,
            location_end: end,
        };
    }

    // with RSPOS the insertion ends one base after the reported position
    DisplayAttributes {
        variant_class: VariantClass::Insertion,
        display_allele: format!("ins{}", shown.alt_allele),
        sequence_allele: format!("-/{}", truncate_allele(&shown.alt_allele)),
        location_start: start,
        location_end: rs_position.map_or(start, |rs| rs + 1),
    }
}

/// [`classify`] over an [`Allele`].
pub fn classify_allele(allele: &Allele, rs_position: Option<u64>) -> DisplayAttributes {
    classify(
        &allele.ref_allele,
        &allele.alt_allele,
        allele.position,
        rs_position,
    )
}

///
/// End coordinate as inferred on the dbSNP VCF loading path.
///
/// Differs from [`classify`] for deletion-family variants: indel ends are measured from
/// the full reference length rather than the trimmed one, and the start offset is the
/// reported position itself (no padding-base shift). Insertions end one base after the
/// reported position.
///
pub fn infer_end_location(
    ref_allele: &str,
    alt_allele: &str,
    position: u64,
    rs_position: Option<u64>,
) -> u64 {
    let ref_len = ref_allele.len();
    let alt_len = alt_allele.len();
    let rs_position = rs_position.unwrap_or(position);
    let norm_ref_len = normalize_alleles(ref_allele, alt_allele, false)
        .ref_allele
        .len();

    if ref_len == 1 && alt_len == 1 {
        return position;
    }

    if ref_len == alt_len {
        if is_reversal(ref_allele, alt_allele) {
            return span_end(position, ref_len);
        }
        return span_end(position, norm_ref_len);
    }

    if ref_len > alt_len {
        if alt_len > 1 {
            if norm_ref_len == 0 {
                return span_end(rs_position, ref_len.saturating_sub(1));
            }
            return span_end(rs_position, ref_len);
        }
        return span_end(rs_position, norm_ref_len);
    }

    rs_position + 1
}
