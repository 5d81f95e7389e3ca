//! # Core models for metaseq
//!
//! Shared building blocks for the normalization, identity and ranking crates:
//!
//! - [`models::Allele`]: the immutable `(chromosome, position, ref, alt)` tuple and its
//!   `chrom:position:ref:alt` metaseq identifier form
//! - [`models::ChromosomeMap`]: third-party sequence ids (e.g. RefSeq accessions) to bare
//!   chromosome tokens
//! - [`utils`]: gzip-aware readers
pub mod consts;
pub mod errors;
pub mod models;
pub mod utils;

pub use errors::{AlleleError, ChromosomeMapError};
pub use models::{Allele, ChromosomeMap, normalize_chromosome};
