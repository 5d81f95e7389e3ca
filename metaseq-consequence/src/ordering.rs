//! Severity ordering of consequence combinations.
//!
//! Each combination is assigned to one group, then ordered inside it by a string key built
//! from the positions of its terms in the group's reference term list. The ordered groups
//! are concatenated into the master list that ranks are read from.

use std::cmp::Ordering;

use log::debug;

use crate::combination::{TERM_SEPARATOR, encoding_width, int_to_alpha, split_combination};
use crate::errors::ConsequenceError;
use crate::groups::{ConsequenceGroup, TermIndex};

/// A combination prepared for ordering within a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    /// Letter codes of the term positions, sorted and concatenated.
    pub key: String,
    /// Terms ordered by position, most severe first.
    pub terms: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SeverityOrder {
    high_impact: TermIndex,
    low_impact: TermIndex,
    complete: TermIndex,
    width: usize,
}

impl Default for SeverityOrder {
    fn default() -> Self {
        Self::new()
    }
}

impl SeverityOrder {
    pub fn new() -> Self {
        let complete = TermIndex::complete();
        let width = encoding_width(complete.max_position());
        SeverityOrder {
            high_impact: TermIndex::for_group(ConsequenceGroup::HighImpact),
            low_impact: TermIndex::for_group(ConsequenceGroup::LowImpact),
            complete,
            width,
        }
    }

    /// Letters per term position in the sort keys.
    pub fn width(&self) -> usize {
        self.width
    }

    fn reference_index(&self, group: ConsequenceGroup) -> &TermIndex {
        match group.reference_group() {
            ConsequenceGroup::LowImpact => &self.low_impact,
            _ => &self.high_impact,
        }
    }

    ///
    /// Split a combination and check every term is known.
    ///
    pub fn validate<'a>(&self, combination: &'a str) -> Result<Vec<&'a str>, ConsequenceError> {
        let terms = split_combination(combination);
        if terms.is_empty() {
            return Err(ConsequenceError::EmptyCombination);
        }
        if let Some(term) = terms.iter().find(|t| !self.complete.contains(t)) {
            return Err(ConsequenceError::InvalidConsequenceTerm {
                combination: combination.to_string(),
                term: term.to_string(),
            });
        }
        Ok(terms)
    }

    ///
    /// Sort key of a combination within `group`.
    ///
    /// Terms listed in the group's reference list take their position there; any other
    /// term takes its position in the complete index.
    ///
    pub fn sort_key(
        &self,
        group: ConsequenceGroup,
        terms: &[&str],
    ) -> Result<SortKey, ConsequenceError> {
        let reference = self.reference_index(group);

        let mut indexed: Vec<(usize, &str)> = Vec::with_capacity(terms.len());
        for term in terms {
            let position = reference
                .get(term)
                .or_else(|| self.complete.get(term))
                .ok_or_else(|| ConsequenceError::InvalidConsequenceTerm {
                    combination: terms.join(TERM_SEPARATOR),
                    term: term.to_string(),
                })?;
            if !indexed.iter().any(|(_, t)| t == term) {
                indexed.push((position, *term));
            }
        }

        let mut codes: Vec<String> = indexed
            .iter()
            .map(|(position, _)| int_to_alpha(*position, self.width))
            .collect();
        codes.sort();

        indexed.sort_by_key(|(position, _)| *position);

        Ok(SortKey {
            key: codes.concat(),
            terms: indexed.into_iter().map(|(_, t)| t.to_string()).collect(),
        })
    }

    /// Leading code first, then longer keys (more terms) first, then the whole key.
    fn compare(&self, a: &SortKey, b: &SortKey) -> Ordering {
        let lead = |k: &SortKey| k.key.get(..self.width).unwrap_or(&k.key).to_string();
        lead(a)
            .cmp(&lead(b))
            .then_with(|| b.key.len().cmp(&a.key.len()))
            .then_with(|| a.key.cmp(&b.key))
    }

    /// Order the members of one group; returns combinations in their stored form.
    pub fn order_group(
        &self,
        group: ConsequenceGroup,
        members: &[Vec<&str>],
    ) -> Result<Vec<String>, ConsequenceError> {
        let mut keyed = members
            .iter()
            .map(|terms| self.sort_key(group, terms))
            .collect::<Result<Vec<SortKey>, _>>()?;
        keyed.sort_by(|a, b| self.compare(a, b));

        Ok(keyed
            .into_iter()
            .map(|k| k.terms.join(TERM_SEPARATOR))
            .collect())
    }

    ///
    /// Derive the master order of a set of combinations.
    ///
    /// Every combination is validated before anything is ordered. Groups are visited in
    /// [`ConsequenceGroup::RANKING_ORDER`] and each combination is placed by the first group
    /// that claims it, so the result holds every input combination exactly once.
    ///
    pub fn derive<S: AsRef<str>>(&self, combinations: &[S]) -> Result<Vec<String>, ConsequenceError> {
        let parsed = combinations
            .iter()
            .map(|c| self.validate(c.as_ref()))
            .collect::<Result<Vec<Vec<&str>>, _>>()?;

        let mut claimed = vec![false; parsed.len()];
        let mut ordered = Vec::with_capacity(parsed.len());

        for group in ConsequenceGroup::RANKING_ORDER {
            let mut members: Vec<Vec<&str>> = Vec::new();
            for (i, terms) in parsed.iter().enumerate() {
                if !claimed[i] && group.is_member(terms) {
                    claimed[i] = true;
                    members.push(terms.clone());
                }
            }
            debug!("Ranking {} {} consequence combinations", members.len(), group);
            if !members.is_empty() {
                ordered.extend(self.order_group(group, &members)?);
            }
        }

        debug!("Final consequence order: {:?}", ordered);
        Ok(ordered)
    }
}
