use clap::{Arg, ArgAction, Command, arg, value_parser};

pub const PK_CMD: &str = "pk";

pub fn create_pk_cli() -> Command {
    Command::new(PK_CMD)
        .about("Generate primary keys for variants, using VRS digests for long alleles.")
        .arg(
            Arg::new("metaseq_id")
                .action(ArgAction::Append)
                .help("Variants as chrom:position:ref:alt"),
        )
        .arg(arg!(--"external-id" <id>).help("Accession appended to each key (e.g. a refsnp id)"))
        .arg(
            arg!(-i --input <input>)
                .help("File with metaseq_id[<TAB>external_id] per line; processed in parallel"),
        )
        .arg(arg!(-c --config <config>).help("metaseq TOML config"))
        .arg(arg!(--build <build>).help("Genome build of the variants"))
        .arg(
            arg!(--"max-length" <length>)
                .value_parser(value_parser!(usize))
                .help("Longest combined allele length kept explicit in the key"),
        )
        .arg(arg!(--normalize).help("VRS-normalize alleles before digesting (needs --fasta)"))
        .arg(arg!(--fasta <fasta>).help("Reference FASTA for the build (plain or gzipped)"))
        .arg(arg!(--accessions <accessions>).help("chromosome<TAB>refget accession table"))
        .arg(
            arg!(--"chromosome-map" <map>)
                .help("Maps FASTA record names (e.g. RefSeq ids) to chromosomes"),
        )
        .arg(
            arg!(-t --threads <threads>)
                .value_parser(value_parser!(usize))
                .help("Worker threads for --input (default: all cores)"),
        )
}
