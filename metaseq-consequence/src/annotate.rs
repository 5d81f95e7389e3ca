//! Ranking the consequences attached to VEP annotation records.
//!
//! Consequence records are grouped by variant allele and each allele's list is sorted by
//! rank, so the first entry of every list is that allele's most severe consequence.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::coding::is_coding;
use crate::errors::ConsequenceError;
use crate::ranker::ConsequenceRanker;

/// Feature types whose `<type>_consequences` arrays are ranked, in lookup order for
/// [`most_severe_in_annotation`].
pub const CONSEQUENCE_TYPES: [&str; 4] = [
    "transcript",
    "regulatory_feature",
    "motif_feature",
    "intergenic",
];

/// One consequence as VEP reports it. Fields other than the allele and its terms are
/// carried through untouched.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ConsequenceRecord {
    pub variant_allele: String,
    pub consequence_terms: Vec<String>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RankedConsequence {
    #[serde(flatten)]
    pub record: ConsequenceRecord,
    pub rank: u32,
    pub consequence_is_coding: bool,
    /// Position of the record in the input list.
    pub vep_consequence_order_num: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlleleConsequences {
    pub variant_allele: String,
    /// Sorted by `(rank, vep_consequence_order_num)`.
    pub consequences: Vec<RankedConsequence>,
}

impl AlleleConsequences {
    pub fn most_severe(&self) -> Option<&RankedConsequence> {
        self.consequences.first()
    }
}

///
/// Rank and sort consequence records per variant allele.
///
/// Alleles are returned in the order they first appear. Unseen combinations are registered
/// before any rank is read, so all records are ranked against the same table.
///
pub fn rank_allele_consequences(
    ranker: &mut ConsequenceRanker,
    records: Vec<ConsequenceRecord>,
) -> Result<Vec<AlleleConsequences>, ConsequenceError> {
    for record in &records {
        ranker.rank(&record.consequence_terms, false)?;
    }

    let mut grouped: Vec<AlleleConsequences> = Vec::new();
    for (index, record) in records.into_iter().enumerate() {
        let rank = ranker.rank(&record.consequence_terms, true)?;
        let ranked = RankedConsequence {
            rank,
            consequence_is_coding: is_coding(&record.consequence_terms),
            vep_consequence_order_num: index,
            record,
        };

        match grouped
            .iter_mut()
            .find(|g| g.variant_allele == ranked.record.variant_allele)
        {
            Some(group) => group.consequences.push(ranked),
            None => grouped.push(AlleleConsequences {
                variant_allele: ranked.record.variant_allele.clone(),
                consequences: vec![ranked],
            }),
        }
    }

    for group in grouped.iter_mut() {
        group
            .consequences
            .sort_by_key(|c| (c.rank, c.vep_consequence_order_num));
    }

    Ok(grouped)
}

/// Most severe ranked consequence of `allele`, if it has any.
pub fn most_severe<'a>(
    grouped: &'a [AlleleConsequences],
    allele: &str,
) -> Option<&'a RankedConsequence> {
    grouped
        .iter()
        .find(|g| g.variant_allele == allele)
        .and_then(AlleleConsequences::most_severe)
}

///
/// Rank every consequence array of a VEP JSON record in place.
///
/// Each `<type>_consequences` array becomes an object keyed by variant allele whose values
/// are the ranked, sorted consequence lists. Missing arrays are left alone.
///
/// The annotation is only rewritten once every array has been ranked; on error it is left
/// as it was (combinations registered along the way stay in the ranker).
///
pub fn rank_vep_annotation(
    ranker: &mut ConsequenceRanker,
    annotation: &mut Value,
) -> Result<(), ConsequenceError> {
    let Some(fields) = annotation.as_object_mut() else {
        return Ok(());
    };

    let mut ranked: Vec<(String, Value)> = Vec::new();
    for ctype in CONSEQUENCE_TYPES {
        let key = format!("{}_consequences", ctype);
        let Some(raw) = fields.get(&key).filter(|v| v.is_array()) else {
            continue;
        };
        let records: Vec<ConsequenceRecord> = Vec::deserialize(raw)?;

        let mut by_allele = Map::new();
        for group in rank_allele_consequences(ranker, records)? {
            by_allele.insert(group.variant_allele, serde_json::to_value(group.consequences)?);
        }
        ranked.push((key, Value::Object(by_allele)));
    }

    fields.extend(ranked);
    Ok(())
}

/// First consequence for `allele` across [`CONSEQUENCE_TYPES`] of an annotation ranked by
/// [`rank_vep_annotation`].
pub fn most_severe_in_annotation<'a>(annotation: &'a Value, allele: &str) -> Option<&'a Value> {
    CONSEQUENCE_TYPES.iter().find_map(|ctype| {
        annotation
            .get(format!("{}_consequences", ctype))
            .and_then(|c| c.get(allele))
            .and_then(|c| c.get(0))
    })
}
