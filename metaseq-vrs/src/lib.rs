//! # GA4GH VRS allele digests
//!
//! Content-addressed identifiers for variants too long to spell out in a primary key:
//!
//! - VRS data models (Allele, SequenceLocation, ...)
//! - digest computation (canonical JSON + sha512t24u)
//! - fully-justified VRS normalization against a reference sequence
//! - a per-build registry of refget accessions, read from FASTA or an accession table
//! - [`VrsAlleleDigester`], tying the above together for `(build, chrom, start, end, alt)`

pub mod algorithms;
pub mod digest;
pub mod errors;
pub mod models;
pub mod normalize;
pub mod reference;
pub mod service;

pub use algorithms::{canonicalize_json, sha512t24u};
pub use digest::{DigestWriter, allele_digest, allele_identifier, sequence_location_digest};
pub use errors::{NormalizeError, VrsError};
pub use models::{Allele, AlleleState, SequenceLocation, SequenceReference};
pub use normalize::{NormalizedAllele, normalize};
pub use reference::ReferenceSequences;
pub use service::VrsAlleleDigester;
