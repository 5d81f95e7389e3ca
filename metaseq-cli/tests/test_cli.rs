use std::process::Command;

use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::tempdir;

fn metaseq(args: &[&str]) -> (bool, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_metaseq"))
        .args(args)
        .output()
        .unwrap();
    (
        output.status.success(),
        String::from_utf8(output.stdout).unwrap(),
    )
}

#[rstest]
fn test_classify() {
    let (ok, stdout) = metaseq(&["--quiet", "classify", "1:100:A:G", "1:100:CAGT:CG"]);
    assert!(ok);
    let rows: Vec<&str> = stdout.lines().collect();
    assert_eq!(rows.len(), 3);
    assert!(rows[0].starts_with("metaseq_id\t"));
    assert!(rows[1].contains("\tSNV\t"));
    assert!(rows[2].contains("\tDEL\tdelAGT\t"));
}

#[rstest]
fn test_classify_rejects_malformed_id() {
    let (ok, _) = metaseq(&["--quiet", "classify", "1:100:A"]);
    assert!(!ok);
}

#[rstest]
fn test_pk_from_config() {
    let (ok, stdout) = metaseq(&[
        "--quiet",
        "pk",
        "--config",
        "../tests/data/cli/metaseq.toml",
        "--input",
        "../tests/data/cli/variants.txt",
    ]);
    assert!(ok);
    assert_eq!(
        stdout,
        "metaseq_id\tprimary_key\n\
         1:9:T:TA\t1:9:T:TA:rs42\n\
         chr1:1:ACGTACGT:A\t1:1:y-9YhbRnCskiqRIt2fDv5nldhBjA0lNe\n\
         1:10:A:G\t1:10:A:G\n"
    );
}

#[rstest]
fn test_rank_and_save() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("ranking.txt");
    let output = output.to_str().unwrap();

    let (ok, stdout) = metaseq(&[
        "--quiet",
        "rank",
        "--ranking-file",
        "../tests/data/consequence/consequence_ranking.txt",
        "--terms",
        "missense_variant,splice_region_variant",
        "--save",
        "--output",
        output,
    ]);
    assert!(ok);
    assert_eq!(
        stdout,
        "consequence\trank\nmissense_variant,splice_region_variant\t3\n"
    );

    let saved = std::fs::read_to_string(output).unwrap();
    assert!(saved.starts_with("consequence\trank\n"));
    assert_eq!(saved.lines().count(), 12);
}
