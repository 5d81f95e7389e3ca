pub mod allele;
pub mod chromosome;

// re-export for cleaner imports
pub use self::allele::Allele;
pub use self::chromosome::{ChromosomeMap, normalize_chromosome};
