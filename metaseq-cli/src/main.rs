mod classify;
mod config;
mod input;
mod pk;
mod rank;

use std::env;

use anyhow::Result;
use clap::{ArgAction, ArgMatches, Command, arg};
use env_logger::Builder;
use log::{LevelFilter, debug};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "metaseq";
    pub const BIN_NAME: &str = "metaseq";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Variant identity, classification and consequence ranking for annotated variant databases.")
        .subcommand_required(true)
        .arg(
            arg!(-v --verbose "Print debug logging")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            arg!(-q --quiet "Only log errors")
                .global(true)
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose"),
        )
        .subcommand(classify::cli::create_classify_cli())
        .subcommand(pk::cli::create_pk_cli())
        .subcommand(rank::cli::create_rank_cli())
}

/// Info by default; `RUST_LOG` refines whatever the flags chose.
fn set_log_level(matches: &ArgMatches) -> Result<()> {
    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else if matches.get_flag("quiet") {
        LevelFilter::Error
    } else {
        LevelFilter::Info
    };

    let mut builder = Builder::new();
    builder.filter_level(log_level);
    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.try_init()?;
    debug!("{} version {}", consts::PKG_NAME, consts::VERSION);
    Ok(())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();
    set_log_level(&matches)?;

    match matches.subcommand() {
        //
        // CLASSIFY
        //
        Some((classify::cli::CLASSIFY_CMD, matches)) => {
            classify::handlers::run_classify(matches)?;
        }

        //
        // PRIMARY KEYS
        //
        Some((pk::cli::PK_CMD, matches)) => {
            pk::handlers::run_pk(matches)?;
        }

        //
        // CONSEQUENCE RANKING
        //
        Some((rank::cli::RANK_CMD, matches)) => {
            rank::handlers::run_rank(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    fn test_parser_is_consistent() {
        build_parser().debug_assert();
    }

    #[rstest]
    fn test_global_flags_after_subcommand() {
        let matches = build_parser()
            .try_get_matches_from(["metaseq", "classify", "1:100:A:G", "--verbose"])
            .unwrap();
        assert!(matches.get_flag("verbose"));
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, classify::cli::CLASSIFY_CMD);
        assert_eq!(
            sub.get_many::<String>("metaseq_id").unwrap().collect::<Vec<_>>(),
            vec!["1:100:A:G"]
        );
    }

    #[rstest]
    fn test_rank_terms_repeat() {
        let matches = build_parser()
            .try_get_matches_from([
                "metaseq",
                "rank",
                "--ranking-file",
                "ranking.txt",
                "--terms",
                "stop_gained",
                "--terms",
                "missense_variant,splice_region_variant",
            ])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(
            input::get_many_strings(sub, "terms"),
            vec!["stop_gained", "missense_variant,splice_region_variant"]
        );
    }
}
