use std::fmt::{self, Display};
use std::path::{Path, PathBuf};

use chrono::Local;
use fxhash::FxHashMap;
use log::{debug, info, warn};

use crate::combination::{
    TERM_SEPARATOR, alphabetize, clean_terms, is_equivalent, split_combination,
};
use crate::config::RankerConfig;
use crate::errors::ConsequenceError;
use crate::ordering::SeverityOrder;
use crate::table::{RankTable, versioned_path};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankerState {
    /// Table matches what was loaded or last saved.
    Loaded,
    /// Combinations were registered since the last save.
    Dirty,
}

impl Display for RankerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankerState::Loaded => write!(f, "loaded"),
            RankerState::Dirty => write!(f, "dirty"),
        }
    }
}

///
/// Severity ranks for consequence combinations, extended on demand.
///
/// Registering an unseen combination re-derives the whole table, so every rank may change
/// after a registration. Replaying the same registrations from the same table always
/// yields the same ranks.
///
/// One instance owns one table; it is not meant to be shared between writers.
///
#[derive(Debug, Clone)]
pub struct ConsequenceRanker {
    table: RankTable,
    ranking_file: Option<PathBuf>,
    save_on_add: bool,
    added: Vec<String>,
    matched: FxHashMap<String, u32>,
    order: SeverityOrder,
    state: RankerState,
}

impl Default for ConsequenceRanker {
    fn default() -> Self {
        Self::new(RankTable::default())
    }
}

impl ConsequenceRanker {
    pub fn new(table: RankTable) -> Self {
        ConsequenceRanker {
            table,
            ranking_file: None,
            save_on_add: false,
            added: Vec::new(),
            matched: FxHashMap::default(),
            order: SeverityOrder::new(),
            state: RankerState::Loaded,
        }
    }

    ///
    /// Load a ranking file.
    ///
    /// # Arguments
    /// * `path` - ranking table; also where new versions are saved next to
    /// * `save_on_add` - save a new version after every registration
    /// * `rank_on_load` - re-derive the table straight away (e.g. a hand-curated file)
    ///
    pub fn from_file(
        path: &Path,
        save_on_add: bool,
        rank_on_load: bool,
    ) -> Result<Self, ConsequenceError> {
        let table = RankTable::from_file(path)?;
        let mut ranker = ConsequenceRanker::new(table);
        ranker.ranking_file = Some(path.to_path_buf());
        ranker.save_on_add = save_on_add;

        if rank_on_load {
            info!("Re-ranking consequences on load");
            ranker.rerank()?;
        }

        Ok(ranker)
    }

    pub fn from_config(config: &RankerConfig) -> Result<Self, ConsequenceError> {
        let path = config
            .ranking_file
            .as_deref()
            .ok_or(ConsequenceError::NoRankingFile)?;
        Self::from_file(path, config.save_on_add, config.rank_on_load)
    }

    pub fn state(&self) -> RankerState {
        self.state
    }

    pub fn table(&self) -> &RankTable {
        &self.table
    }

    pub fn ranking_file(&self) -> Option<&Path> {
        self.ranking_file.as_deref()
    }

    pub fn known_combinations(&self) -> &[String] {
        self.table.combinations()
    }

    /// Combinations registered by this instance, in registration order.
    pub fn added_combinations(&self) -> &[String] {
        &self.added
    }

    pub fn new_combination_count(&self) -> usize {
        self.added.len()
    }

    pub fn new_combinations_added(&self) -> bool {
        !self.added.is_empty()
    }

    pub fn added_summary(&self) -> String {
        if self.added.is_empty() {
            "No new consequences added".to_string()
        } else {
            format!(
                "Added {} new consequences: [{}]",
                self.added.len(),
                self.added.join("; ")
            )
        }
    }

    /// Rank of a combination exactly as stored in the table.
    pub fn rank_of(&self, combination: &str) -> Option<u32> {
        self.table.rank(combination)
    }

    ///
    /// Rank of a consequence combination; term order does not matter.
    ///
    /// Terms are trimmed before lookup. An unseen combination is registered (re-deriving
    /// every rank) unless `fail_on_missing` is set, in which case `UnknownConsequence` is
    /// returned.
    ///
    pub fn rank<S: AsRef<str>>(
        &mut self,
        terms: &[S],
        fail_on_missing: bool,
    ) -> Result<u32, ConsequenceError> {
        let terms = clean_terms(terms);
        if terms.is_empty() {
            return Err(ConsequenceError::EmptyCombination);
        }

        let key = alphabetize(&terms);
        if let Some(rank) = self.matched.get(&key) {
            return Ok(*rank);
        }

        if let Some(rank) = self.find_equivalent(&terms) {
            self.matched.insert(key, rank);
            return Ok(rank);
        }

        if fail_on_missing {
            return Err(ConsequenceError::UnknownConsequence(terms.join(TERM_SEPARATOR)));
        }

        warn!("Consequence combination `{}` not found in rankings", key);
        self.register_new_combination(&terms)?;
        let rank = self
            .find_equivalent(&terms)
            .ok_or(ConsequenceError::UnknownConsequence(key.clone()))?;
        self.matched.insert(key, rank);
        Ok(rank)
    }

    /// Rank of a comma-joined combination.
    pub fn rank_combination(
        &mut self,
        combination: &str,
        fail_on_missing: bool,
    ) -> Result<u32, ConsequenceError> {
        self.rank(&split_combination(combination), fail_on_missing)
    }

    fn find_equivalent<S: AsRef<str>>(&self, terms: &[S]) -> Option<u32> {
        self.table
            .iter()
            .find(|(combination, _)| is_equivalent(terms, &split_combination(combination)))
            .map(|(_, rank)| rank)
    }

    ///
    /// Add a combination and re-derive every rank.
    ///
    /// Terms are trimmed first. Fails with `InvalidConsequenceTerm` if any term is outside
    /// the known groups; the ranker is left untouched in that case.
    ///
    /// With `save_on_add` a new version is saved afterwards. A failed save is returned as
    /// the error but does not undo the registration: the combination stays ranked and the
    /// ranker stays `Dirty`, so a later [`save`](Self::save) can retry.
    ///
    pub fn register_new_combination<S: AsRef<str>>(
        &mut self,
        terms: &[S],
    ) -> Result<(), ConsequenceError> {
        let mut unique = clean_terms(terms);
        if unique.is_empty() {
            return Err(ConsequenceError::EmptyCombination);
        }
        unique.sort_unstable();
        unique.dedup();
        let combination = alphabetize(&unique);

        if self.find_equivalent(&unique).is_some() {
            debug!("`{}` is already ranked", combination);
            return Ok(());
        }

        let mut combinations = self.table.combinations().to_vec();
        combinations.push(combination.clone());
        let ordered = self.order.derive(&combinations)?;

        info!("Registered consequence combination `{}`", combination);
        self.apply(ordered);
        self.added.push(combination);
        self.state = RankerState::Dirty;

        if self.save_on_add {
            let path = self.save(None)?;
            info!(
                "Saved version {} of the rankings to {:?}",
                self.new_combination_count(),
                path
            );
        }
        Ok(())
    }

    /// Re-derive the order of the current table without adding anything.
    pub fn rerank(&mut self) -> Result<(), ConsequenceError> {
        let ordered = self.order.derive(self.table.combinations())?;
        self.apply(ordered);
        Ok(())
    }

    fn apply(&mut self, ordered: Vec<String>) {
        self.table = RankTable::from_ordered(ordered);
        self.matched.clear();
    }

    ///
    /// Save the table and return to `Loaded`.
    ///
    /// Without an explicit path a new version is written next to the ranking file (see
    /// [`versioned_path`]); the original file is never overwritten that way.
    ///
    pub fn save(&mut self, path: Option<&Path>) -> Result<PathBuf, ConsequenceError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let original = self
                    .ranking_file
                    .as_deref()
                    .ok_or(ConsequenceError::NoRankingFile)?;
                versioned_path(
                    original,
                    self.new_combination_count(),
                    Local::now().date_naive(),
                )
            }
        };
        self.table.save(&path)?;
        self.state = RankerState::Loaded;
        Ok(path)
    }
}
