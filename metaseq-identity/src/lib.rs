//! Primary keys for variants.
//!
//! Short alleles keep their explicit `chrom:position:ref:alt` form; once the combined allele
//! length passes the configured threshold the alleles are replaced by a content-addressed
//! digest obtained from a [`SequenceDigestService`]. An external accession (e.g. a dbSNP
//! refsnp id) may be appended in both cases.
//!
//! ```no_run
//! use metaseq_identity::{IdentityConfig, PrimaryKeyGenerator};
//! use metaseq_vrs::VrsAlleleDigester;
//!
//! let generator = PrimaryKeyGenerator::new(IdentityConfig::default(), VrsAlleleDigester::new());
//! let key = generator.generate_primary_key("1:12345:A:G", Some("rs123")).unwrap();
//! assert_eq!(key, "1:12345:A:G:rs123");
//! ```

pub mod config;
pub mod errors;
pub mod generator;
pub mod service;
pub mod vrs;

pub use config::IdentityConfig;
pub use errors::{IdentityConfigError, IdentityError, SequenceLookupError};
pub use generator::{PrimaryKeyGenerator, strip_digest_prefix};
pub use service::{DigestRequest, SequenceDigestService};
