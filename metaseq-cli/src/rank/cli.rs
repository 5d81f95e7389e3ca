use clap::{Arg, ArgAction, Command, arg};

pub const RANK_CMD: &str = "rank";

pub fn create_rank_cli() -> Command {
    Command::new(RANK_CMD)
        .about("Look up or register the severity rank of consequence combinations.")
        .arg(arg!(-r --"ranking-file" <file>).help("Ranking table (consequence<TAB>rank)"))
        .arg(arg!(-c --config <config>).help("metaseq TOML config; its [consequence] section is used"))
        .arg(
            Arg::new("terms")
                .long("terms")
                .action(ArgAction::Append)
                .help("Comma-joined consequence combination; repeatable"),
        )
        .arg(arg!(-i --input <input>).help("File with one comma-joined combination per line"))
        .arg(arg!(--"fail-on-missing").help("Fail on combinations the table does not contain"))
        .arg(arg!(--rerank).help("Re-derive the whole table after loading"))
        .arg(arg!(--save).help("Save the table after ranking"))
        .arg(arg!(-o --output <output>).help("Where --save writes (default: a new version next to the ranking file)"))
        .arg(arg!(--"save-on-add").help("Save a new version after every registration"))
}
