use clap::{Arg, ArgAction, Command, arg, value_parser};

pub const CLASSIFY_CMD: &str = "classify";

pub fn create_classify_cli() -> Command {
    Command::new(CLASSIFY_CMD)
        .about("Classify variants and compute their display alleles and genomic span.")
        .arg(
            Arg::new("metaseq_id")
                .action(ArgAction::Append)
                .help("Variants as chrom:position:ref:alt"),
        )
        .arg(
            arg!(--"rs-position" <position>)
                .value_parser(value_parser!(u64))
                .help("Externally reported start position (e.g. dbSNP RSPOS)"),
        )
        .arg(arg!(-i --input <input>).help("File with one metaseq id per line"))
        .arg(arg!(--json).help("Print display attributes as JSON lines"))
}
