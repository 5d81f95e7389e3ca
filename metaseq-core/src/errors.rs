use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlleleError {
    #[error("Malformed metaseq identifier `{0}`: expected chrom:position:ref:alt")]
    MalformedIdentity(String),

    #[error("Invalid position `{0}`: must be a 1-based integer")]
    InvalidPosition(String),

    #[error("Empty {0} allele")]
    EmptyAllele(&'static str),

    #[error("Empty chromosome")]
    EmptyChromosome,
}

#[derive(Error, Debug)]
pub enum ChromosomeMapError {
    #[error("Chromosome map is missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("Chromosome map line {line} has too few fields")]
    TruncatedLine { line: usize },

    #[error("Sequence id `{0}` is not in the chromosome map")]
    UnknownSequenceId(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
