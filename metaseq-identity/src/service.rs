use crate::errors::SequenceLookupError;

///
/// A digest request for one allele, in interbase coordinates: the reference bases
/// `[start, end)` on `chromosome` are replaced by `inserted_sequence`.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigestRequest {
    pub build: String,
    pub chromosome: String,
    pub start: u64,
    pub end: u64,
    pub inserted_sequence: String,
    pub normalize: bool,
}

///
/// External collaborator producing content-addressed allele identifiers.
///
/// Implementations must be deterministic: identical requests give identical identifiers.
/// The returned identifier may carry a scheme prefix (`ga4gh:VA.`); callers strip it.
///
pub trait SequenceDigestService {
    fn digest(&self, request: &DigestRequest) -> Result<String, SequenceLookupError>;
}

impl<T: SequenceDigestService + ?Sized> SequenceDigestService for &T {
    fn digest(&self, request: &DigestRequest) -> Result<String, SequenceLookupError> {
        (**self).digest(request)
    }
}

impl<T: SequenceDigestService + ?Sized> SequenceDigestService for Box<T> {
    fn digest(&self, request: &DigestRequest) -> Result<String, SequenceLookupError> {
        (**self).digest(request)
    }
}
