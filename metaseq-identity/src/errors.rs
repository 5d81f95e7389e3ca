use thiserror::Error;

use metaseq_core::AlleleError;

/// Failure reported by a [`crate::SequenceDigestService`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Sequence lookup failed for {chromosome} ({build}): {message}")]
pub struct SequenceLookupError {
    pub build: String,
    pub chromosome: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error(transparent)]
    MalformedIdentity(#[from] AlleleError),
    #[error(transparent)]
    SequenceLookup(#[from] SequenceLookupError),
}

#[derive(Error, Debug)]
pub enum IdentityConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}
