//! # Consequence ranking
//!
//! Orders VEP consequence combinations (sets of terms such as
//! `missense_variant,splice_region_variant`) from most to least severe:
//!
//! - terms are split into impact groups ([`ConsequenceGroup`]), ranked NMD first, then
//!   non-coding transcript, low impact and high impact
//! - inside a group, combinations are ordered by the severity of their terms
//! - ranks are dense, starting at 1 for the most severe combination
//!
//! A [`ConsequenceRanker`] loads a ranking table and extends it whenever it meets a
//! combination it has not seen, re-deriving every rank.
//!
//! ```no_run
//! use std::path::Path;
//! use metaseq_consequence::ConsequenceRanker;
//!
//! let mut ranker = ConsequenceRanker::from_file(Path::new("ranking.txt"), false, false).unwrap();
//! let rank = ranker.rank(&["missense_variant", "splice_region_variant"], false).unwrap();
//! println!("{}", rank);
//! ```

pub mod annotate;
pub mod coding;
pub mod combination;
pub mod config;
pub mod errors;
pub mod groups;
pub mod ordering;
pub mod ranker;
pub mod table;

pub use annotate::{
    AlleleConsequences, CONSEQUENCE_TYPES, ConsequenceRecord, RankedConsequence, most_severe,
    most_severe_in_annotation, rank_allele_consequences, rank_vep_annotation,
};
pub use coding::{CODING_CONSEQUENCES, is_coding};
pub use combination::{alphabetize, alphabetize_combination, split_combination};
pub use config::RankerConfig;
pub use errors::{ConsequenceError, RankerConfigError};
pub use groups::{ConsequenceGroup, TermIndex, all_terms, is_known_term};
pub use ordering::SeverityOrder;
pub use ranker::{ConsequenceRanker, RankerState};
pub use table::{RankTable, versioned_path};
