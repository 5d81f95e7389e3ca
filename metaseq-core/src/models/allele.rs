use std::fmt::{self, Display};
use std::str::FromStr;

use crate::consts::{METASEQ_FIELD_COUNT, METASEQ_SEPARATOR};
use crate::errors::AlleleError;
use crate::models::chromosome::normalize_chromosome;

///
/// A variant as observed: chromosome, 1-based position, reference and alternate allele.
///
/// Alleles are kept exactly as supplied (no trimming); the chromosome is always a bare
/// token ("1".."22", "X", "Y", "M").
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Allele {
    pub chromosome: String,
    pub position: u64,
    pub ref_allele: String,
    pub alt_allele: String,
}

impl Allele {
    ///
    /// Create a new allele, rejecting empty alleles and non-positive positions.
    ///
    /// A leading `chr` prefix is stripped from the chromosome and `MT` becomes `M`.
    ///
    pub fn new(
        chromosome: &str,
        position: u64,
        ref_allele: &str,
        alt_allele: &str,
    ) -> Result<Self, AlleleError> {
        let chromosome = normalize_chromosome(chromosome);
        if chromosome.is_empty() {
            return Err(AlleleError::EmptyChromosome);
        }
        if position == 0 {
            return Err(AlleleError::InvalidPosition(position.to_string()));
        }
        if ref_allele.is_empty() {
            return Err(AlleleError::EmptyAllele("reference"));
        }
        if alt_allele.is_empty() {
            return Err(AlleleError::EmptyAllele("alternate"));
        }

        Ok(Allele {
            chromosome,
            position,
            ref_allele: ref_allele.to_string(),
            alt_allele: alt_allele.to_string(),
        })
    }

    ///
    /// The `chrom:position:ref:alt` identifier, using the un-normalized alleles.
    ///
    pub fn metaseq_id(&self) -> String {
        format!(
            "{chrom}{sep}{pos}{sep}{r}{sep}{a}",
            chrom = self.chromosome,
            pos = self.position,
            r = self.ref_allele,
            a = self.alt_allele,
            sep = METASEQ_SEPARATOR
        )
    }

    /// Combined length of the reference and alternate alleles.
    pub fn allele_length(&self) -> usize {
        self.ref_allele.len() + self.alt_allele.len()
    }

    pub fn is_snv(&self) -> bool {
        self.ref_allele.len() == 1 && self.alt_allele.len() == 1
    }
}

impl FromStr for Allele {
    type Err = AlleleError;

    ///
    /// Parse a metaseq identifier. Exactly four colon-separated fields are required.
    ///
    fn from_str(metaseq_id: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = metaseq_id.split(METASEQ_SEPARATOR).collect();
        if fields.len() != METASEQ_FIELD_COUNT {
            return Err(AlleleError::MalformedIdentity(metaseq_id.to_string()));
        }

        let position = fields[1]
            .parse::<u64>()
            .map_err(|_| AlleleError::MalformedIdentity(metaseq_id.to_string()))?;

        Allele::new(fields[0], position, fields[2], fields[3])
            .map_err(|_| AlleleError::MalformedIdentity(metaseq_id.to_string()))
    }
}

impl Display for Allele {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.metaseq_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_metaseq_id_round_trip() {
        let allele = Allele::from_str("1:12345:A:G").unwrap();
        assert_eq!(allele.chromosome, "1");
        assert_eq!(allele.position, 12345);
        assert_eq!(allele.ref_allele, "A");
        assert_eq!(allele.alt_allele, "G");
        assert_eq!(allele.metaseq_id(), "1:12345:A:G");
    }

    #[rstest]
    #[case("chr7:100:CAGT:C", "7")]
    #[case("MT:100:A:G", "M")]
    #[case("chrMT:100:A:G", "M")]
    #[case("X:100:A:G", "X")]
    fn test_chromosome_is_bare_token(#[case] metaseq_id: &str, #[case] expected: &str) {
        let allele = Allele::from_str(metaseq_id).unwrap();
        assert_eq!(allele.chromosome, expected);
    }

    #[rstest]
    #[case("1:12345:A")]
    #[case("1:12345:A:G:rs123")]
    #[case("1:pos:A:G")]
    #[case("1:0:A:G")]
    #[case("1:100::G")]
    #[case(":100:A:G")]
    #[case("")]
    fn test_malformed_identity(#[case] metaseq_id: &str) {
        let result = Allele::from_str(metaseq_id);
        assert_eq!(
            result,
            Err(AlleleError::MalformedIdentity(metaseq_id.to_string()))
        );
    }

    #[rstest]
    fn test_new_rejects_empty_alleles() {
        assert_eq!(
            Allele::new("1", 10, "", "A"),
            Err(AlleleError::EmptyAllele("reference"))
        );
        assert_eq!(
            Allele::new("1", 10, "A", ""),
            Err(AlleleError::EmptyAllele("alternate"))
        );
    }

    #[rstest]
    fn test_allele_length() {
        let allele = Allele::new("2", 5, "CAGT", "CG").unwrap();
        assert_eq!(allele.allele_length(), 6);
        assert_eq!(allele.is_snv(), false);
    }
}
