//! Consequence impact groups.
//!
//! Every VEP consequence term known to the ranker belongs to at least one group. The term
//! lists are ordered from most to least severe and that order drives ranking, so they must
//! only ever be extended deliberately.

use std::fmt::{self, Display};

use fxhash::FxHashMap;

const HIGH_IMPACT_TERMS: &[&str] = &[
    "transcript_ablation",
    "splice_acceptor_variant",
    "splice_donor_variant",
    "stop_gained",
    "frameshift_variant",
    "stop_lost",
    "start_lost",
    "inframe_insertion",
    "inframe_deletion",
    "missense_variant",
    "protein_altering_variant",
    "splice_region_variant",
    "incomplete_terminal_codon_variant",
    "stop_retained_variant",
    "start_retained_variant",
    "synonymous_variant",
    "coding_sequence_variant",
    "5_prime_UTR_variant",
    "3_prime_UTR_variant",
    "intron_variant",
];

const NMD_TERMS: &[&str] = &["NMD_transcript_variant"];

const NON_CODING_TRANSCRIPT_TERMS: &[&str] = &[
    "non_coding_transcript_exon_variant",
    "non_coding_transcript_variant",
];

// TF_binding_site_variant is listed twice; positions are taken from the first occurrence
const LOW_IMPACT_TERMS: &[&str] = &[
    "mature_miRNA_variant",
    "non_coding_transcript_variant",
    "non_coding_transcript_exon_variant",
    "upstream_gene_variant",
    "downstream_gene_variant",
    "TF_binding_site_variant",
    "TFBS_ablation",
    "TF_binding_site_variant",
    "regulatory_region_variant",
    "intergenic_variant",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsequenceGroup {
    Nmd,
    NonCodingTranscript,
    LowImpact,
    HighImpact,
}

impl ConsequenceGroup {
    /// Order in which groups are ranked; earlier groups get lower (more severe) ranks.
    pub const RANKING_ORDER: [ConsequenceGroup; 4] = [
        ConsequenceGroup::Nmd,
        ConsequenceGroup::NonCodingTranscript,
        ConsequenceGroup::LowImpact,
        ConsequenceGroup::HighImpact,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ConsequenceGroup::Nmd => "NMD",
            ConsequenceGroup::NonCodingTranscript => "NON_CODING_TRANSCRIPT",
            ConsequenceGroup::LowImpact => "LOW_IMPACT",
            ConsequenceGroup::HighImpact => "HIGH_IMPACT",
        }
    }

    pub fn terms(&self) -> &'static [&'static str] {
        match self {
            ConsequenceGroup::Nmd => NMD_TERMS,
            ConsequenceGroup::NonCodingTranscript => NON_CODING_TRANSCRIPT_TERMS,
            ConsequenceGroup::LowImpact => LOW_IMPACT_TERMS,
            ConsequenceGroup::HighImpact => HIGH_IMPACT_TERMS,
        }
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms().contains(&term)
    }

    fn overlaps<S: AsRef<str>>(&self, terms: &[S]) -> bool {
        terms.iter().any(|t| self.contains(t.as_ref()))
    }

    ///
    /// Whether a combination belongs to this group.
    ///
    /// LOW_IMPACT takes combinations made only of its own terms. The other groups take any
    /// combination sharing a term with them, except that HIGH_IMPACT leaves combinations
    /// touching NMD or NON_CODING_TRANSCRIPT to those groups.
    ///
    pub fn is_member<S: AsRef<str>>(&self, terms: &[S]) -> bool {
        match self {
            ConsequenceGroup::LowImpact => {
                !terms.is_empty() && terms.iter().all(|t| self.contains(t.as_ref()))
            }
            ConsequenceGroup::HighImpact => {
                self.overlaps(terms)
                    && !ConsequenceGroup::Nmd.overlaps(terms)
                    && !ConsequenceGroup::NonCodingTranscript.overlaps(terms)
            }
            _ => self.overlaps(terms),
        }
    }

    /// Group whose term order ranks this group's members. Only HIGH_IMPACT and LOW_IMPACT
    /// define a full severity order.
    pub fn reference_group(&self) -> ConsequenceGroup {
        match self {
            ConsequenceGroup::LowImpact => ConsequenceGroup::LowImpact,
            _ => ConsequenceGroup::HighImpact,
        }
    }
}

impl Display for ConsequenceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

///
/// Every known term, in severity order: HIGH_IMPACT, then NMD, then LOW_IMPACT.
/// NON_CODING_TRANSCRIPT is left out since its terms are all in LOW_IMPACT already.
///
pub fn all_terms() -> Vec<&'static str> {
    HIGH_IMPACT_TERMS
        .iter()
        .chain(NMD_TERMS)
        .chain(LOW_IMPACT_TERMS)
        .copied()
        .collect()
}

pub fn is_known_term(term: &str) -> bool {
    ConsequenceGroup::RANKING_ORDER
        .iter()
        .any(|group| group.contains(term))
}

/// Term -> position lookup; repeated terms keep their first position.
#[derive(Debug, Clone)]
pub struct TermIndex {
    positions: FxHashMap<&'static str, usize>,
    max_position: usize,
}

impl TermIndex {
    pub fn new(terms: &[&'static str]) -> Self {
        let mut positions = FxHashMap::default();
        for (i, term) in terms.iter().enumerate() {
            positions.entry(*term).or_insert(i);
        }
        TermIndex {
            positions,
            max_position: terms.len().saturating_sub(1),
        }
    }

    pub fn for_group(group: ConsequenceGroup) -> Self {
        Self::new(group.terms())
    }

    /// Index over [`all_terms`].
    pub fn complete() -> Self {
        Self::new(&all_terms())
    }

    pub fn get(&self, term: &str) -> Option<usize> {
        self.positions.get(term).copied()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.positions.contains_key(term)
    }

    /// Largest position in the index.
    pub fn max_position(&self) -> usize {
        self.max_position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_all_terms_excludes_non_coding_group() {
        let terms = all_terms();
        assert_eq!(terms.len(), 31);
        assert_eq!(terms[0], "transcript_ablation");
        assert_eq!(terms[20], "NMD_transcript_variant");
        assert_eq!(terms[30], "intergenic_variant");
    }

    #[rstest]
    fn test_complete_index_keeps_first_position() {
        let index = TermIndex::complete();
        assert_eq!(index.get("stop_gained"), Some(3));
        assert_eq!(index.get("TF_binding_site_variant"), Some(26));
        assert_eq!(index.get("regulatory_region_variant"), Some(29));
        assert_eq!(index.get("not_a_term"), None);
        assert_eq!(index.max_position(), 30);
    }

    #[rstest]
    #[case(&["missense_variant"], ConsequenceGroup::HighImpact, true)]
    #[case(&["missense_variant", "NMD_transcript_variant"], ConsequenceGroup::HighImpact, false)]
    #[case(&["missense_variant", "NMD_transcript_variant"], ConsequenceGroup::Nmd, true)]
    #[case(&["intron_variant", "non_coding_transcript_variant"], ConsequenceGroup::HighImpact, false)]
    #[case(&["intron_variant", "non_coding_transcript_variant"], ConsequenceGroup::NonCodingTranscript, true)]
    #[case(&["upstream_gene_variant"], ConsequenceGroup::LowImpact, true)]
    #[case(&["upstream_gene_variant", "intron_variant"], ConsequenceGroup::LowImpact, false)]
    #[case(&["upstream_gene_variant", "intron_variant"], ConsequenceGroup::HighImpact, true)]
    fn test_group_membership(
        #[case] terms: &[&str],
        #[case] group: ConsequenceGroup,
        #[case] expected: bool,
    ) {
        assert_eq!(group.is_member(terms), expected);
    }

    #[rstest]
    fn test_known_terms() {
        assert!(is_known_term("non_coding_transcript_exon_variant"));
        assert!(is_known_term("NMD_transcript_variant"));
        assert!(!is_known_term("feature_truncation"));
    }
}
