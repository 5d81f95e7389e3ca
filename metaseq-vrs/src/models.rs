//! VRS objects, reduced to the fields that take part in digest computation.

/// A reference to a sequence by its refget accession.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceReference {
    /// e.g. "SQ.IIB53T8CNeJJdUqzn9V_JnRtQadwWCbl"
    pub refget_accession: String,
}

/// Interbase (0-based, half-open) span on a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceLocation {
    pub sequence_reference: SequenceReference,
    pub start: u64,
    pub end: u64,
}

impl SequenceLocation {
    pub fn new(refget_accession: &str, start: u64, end: u64) -> Self {
        SequenceLocation {
            sequence_reference: SequenceReference {
                refget_accession: refget_accession.to_string(),
            },
            start,
            end,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlleleState {
    /// Literal alternate sequence (SNVs, MNVs, indels).
    LiteralSequenceExpression { sequence: String },
}

/// A sequence state at a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allele {
    pub location: SequenceLocation,
    pub state: AlleleState,
}

impl Allele {
    pub fn literal(location: SequenceLocation, sequence: &str) -> Self {
        Allele {
            location,
            state: AlleleState::LiteralSequenceExpression {
                sequence: sequence.to_string(),
            },
        }
    }
}
