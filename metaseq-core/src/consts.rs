/// Separator between the fields of a metaseq identifier and of a primary key.
pub const METASEQ_SEPARATOR: char = ':';

/// Number of fields in a metaseq identifier: chromosome, position, ref, alt.
pub const METASEQ_FIELD_COUNT: usize = 4;

pub const CHROMOSOME_PREFIX: &str = "chr";
pub const MITOCHONDRIAL_ALIAS: &str = "MT";
pub const MITOCHONDRIAL_TOKEN: &str = "M";

/// Placeholder for an allele fully consumed by normalization.
pub const EMPTY_ALLELE_PLACEHOLDER: &str = "-";
