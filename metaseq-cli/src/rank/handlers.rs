use std::io::{Write, stdout};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use metaseq_consequence::{ConsequenceRanker, RankerConfig, RankerState, split_combination};

use crate::config::MetaseqConfig;
use crate::input::{get_many_strings, read_lines};

pub const RANK_HEADER: &str = "consequence\trank";

pub fn resolve_ranker_config(matches: &ArgMatches) -> Result<RankerConfig> {
    let path = matches.get_one::<String>("config").map(PathBuf::from);
    let mut config = MetaseqConfig::load(path.as_deref())?.consequence;

    if let Some(ranking_file) = matches.get_one::<String>("ranking-file") {
        config.ranking_file = Some(PathBuf::from(ranking_file));
    }
    if matches.get_flag("rerank") {
        config.rank_on_load = true;
    }
    if matches.get_flag("save-on-add") {
        config.save_on_add = true;
    }
    Ok(config)
}

///
/// Rank every combination against one table state.
///
/// All combinations are looked up (and registered where allowed) first, so the returned
/// ranks reflect the table after the last registration.
///
pub fn rank_combinations(
    ranker: &mut ConsequenceRanker,
    combinations: &[String],
    fail_on_missing: bool,
) -> Result<Vec<u32>> {
    for combination in combinations {
        ranker
            .rank_combination(combination, fail_on_missing)
            .with_context(|| format!("Cannot rank `{}`", combination))?;
    }

    combinations
        .iter()
        .map(|combination| {
            ranker
                .rank(&split_combination(combination), true)
                .with_context(|| format!("Cannot rank `{}`", combination))
        })
        .collect()
}

pub fn run_rank(matches: &ArgMatches) -> Result<()> {
    let config = resolve_ranker_config(matches)?;
    let mut ranker = ConsequenceRanker::from_config(&config)?;

    let mut combinations = get_many_strings(matches, "terms");
    if let Some(input) = matches.get_one::<String>("input") {
        combinations.extend(read_lines(Path::new(input))?);
    }

    let ranks = rank_combinations(&mut ranker, &combinations, matches.get_flag("fail-on-missing"))?;

    let mut out = stdout().lock();
    if !combinations.is_empty() {
        writeln!(out, "{}", RANK_HEADER)?;
    }
    for (combination, rank) in combinations.iter().zip(ranks) {
        writeln!(out, "{}\t{}", combination, rank)?;
    }
    out.flush()?;

    info!("{}", ranker.added_summary());

    if matches.get_flag("save") {
        let output = matches.get_one::<String>("output").map(PathBuf::from);
        let path = ranker.save(output.as_deref())?;
        info!("Saved consequence rankings to {:?}", path);
    } else if ranker.state() == RankerState::Dirty {
        info!("Rankings changed; pass --save to keep them");
    }

    Ok(())
}
