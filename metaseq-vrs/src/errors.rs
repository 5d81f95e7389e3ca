use thiserror::Error;

use metaseq_core::ChromosomeMapError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("start position {start} exceeds sequence length {seq_len}")]
    StartOutOfBounds { start: u64, seq_len: usize },
    #[error("reference allele (start={start}, len={ref_len}) extends past sequence length {seq_len}")]
    RefAllelePastEnd {
        start: usize,
        ref_len: usize,
        seq_len: usize,
    },
}

#[derive(Error, Debug)]
pub enum VrsError {
    #[error("No reference sequences registered for genome build {0}")]
    UnknownBuild(String),
    #[error("Chromosome {chromosome} not found in genome build {build}")]
    UnknownChromosome { build: String, chromosome: String },
    #[error("Sequence for chromosome {chromosome} ({build}) not loaded; normalization needs a FASTA")]
    SequenceUnavailable { build: String, chromosome: String },
    #[error("Invalid interbase range: start {start} > end {end}")]
    InvalidRange { start: u64, end: u64 },
    #[error("Malformed accession table line {line}: {content}")]
    MalformedAccessionLine { line: usize, content: String },
    #[error("No sequences found in {0}")]
    EmptyReference(String),
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
    #[error(transparent)]
    ChromosomeMap(#[from] ChromosomeMapError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
