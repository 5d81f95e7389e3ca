//! VRS digest computation: canonical JSON serialization + sha512t24u.
//!
//! [`DigestWriter`] writes the canonical JSON of a literal-sequence allele straight into a
//! reusable buffer, skipping `serde_json::Value` construction. The generic functions build
//! the objects with `json!`; they are the reference the fast path is tested against.

use serde_json::json;

use crate::algorithms::{canonicalize_json, sha512t24u};
use crate::models::{Allele, AlleleState, SequenceLocation};

pub const ALLELE_PREFIX: &str = "ga4gh:VA.";

/// Reusable canonical-JSON buffer for literal-sequence allele identifiers.
pub struct DigestWriter {
    buf: Vec<u8>,
}

impl Default for DigestWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DigestWriter {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(512),
        }
    }

    fn push_number(&mut self, n: u64) {
        self.buf
            .extend_from_slice(itoa::Buffer::new().format(n).as_bytes());
    }

    /// `ga4gh:VA.<digest>` for an allele with a literal sequence state.
    ///
    /// The accession and sequence are written without JSON escaping, which is only sound
    /// for base64url accessions and plain nucleotide strings. Use
    /// [`DigestWriter::is_literal_safe`] to check a sequence first.
    pub fn allele_identifier_literal(
        &mut self,
        refget_accession: &str,
        start: u64,
        end: u64,
        sequence: &str,
    ) -> String {
        // {"end":N,"sequenceReference":{"refgetAccession":"..","type":"SequenceReference"},"start":N,"type":"SequenceLocation"}
        self.buf.clear();
        self.buf.extend_from_slice(b"{\"end\":");
        self.push_number(end);
        self.buf
            .extend_from_slice(b",\"sequenceReference\":{\"refgetAccession\":\"");
        self.buf.extend_from_slice(refget_accession.as_bytes());
        self.buf
            .extend_from_slice(b"\",\"type\":\"SequenceReference\"},\"start\":");
        self.push_number(start);
        self.buf.extend_from_slice(b",\"type\":\"SequenceLocation\"}");

        let location_digest = sha512t24u(&self.buf);

        // {"location":"..","state":{"sequence":"..","type":"LiteralSequenceExpression"},"type":"Allele"}
        self.buf.clear();
        self.buf.extend_from_slice(b"{\"location\":\"");
        self.buf.extend_from_slice(location_digest.as_bytes());
        self.buf.extend_from_slice(b"\",\"state\":{\"sequence\":\"");
        self.buf.extend_from_slice(sequence.as_bytes());
        self.buf.extend_from_slice(
            b"\",\"type\":\"LiteralSequenceExpression\"},\"type\":\"Allele\"}",
        );

        format!("{}{}", ALLELE_PREFIX, sha512t24u(&self.buf))
    }

    /// True when `value` needs no JSON escaping.
    pub fn is_literal_safe(value: &str) -> bool {
        value
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'.' || b == b'-' || b == b'_')
    }
}

/// Digest of a SequenceLocation.
pub fn sequence_location_digest(location: &SequenceLocation) -> String {
    let value = json!({
        "end": location.end,
        "sequenceReference": {
            "refgetAccession": location.sequence_reference.refget_accession,
            "type": "SequenceReference"
        },
        "start": location.start,
        "type": "SequenceLocation"
    });
    sha512t24u(canonicalize_json(&value))
}

/// Digest of an Allele; the location is embedded by its own digest.
pub fn allele_digest(allele: &Allele) -> String {
    let state = match &allele.state {
        AlleleState::LiteralSequenceExpression { sequence } => json!({
            "sequence": sequence,
            "type": "LiteralSequenceExpression"
        }),
    };
    let value = json!({
        "location": sequence_location_digest(&allele.location),
        "state": state,
        "type": "Allele"
    });
    sha512t24u(canonicalize_json(&value))
}

/// Full identifier, `ga4gh:VA.<digest>`.
pub fn allele_identifier(allele: &Allele) -> String {
    format!("{}{}", ALLELE_PREFIX, allele_digest(allele))
}
