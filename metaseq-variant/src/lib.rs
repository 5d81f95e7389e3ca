//! # Allele normalization and display classification
//!
//! Turns an observed `(chromosome, position, ref, alt)` tuple into:
//!
//! - a left-trimmed allele pair ([`normalize_alleles`])
//! - a variant class (SNV, MNV substitution/inversion, deletion, insertion, indel,
//!   duplication) with display strings and genomic start/end ([`classify`])
//!
//! Everything here is a pure function of its inputs.

pub mod classify;
pub mod normalize;

pub use classify::{DisplayAttributes, VariantClass, classify, classify_allele, infer_end_location};
pub use normalize::{NormalizedAlleles, normalize_alleles};
