use std::io::{Write, stdout};
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ArgMatches;

use metaseq_core::Allele;
use metaseq_variant::{classify_allele, normalize_alleles};

use crate::input::{get_many_strings, read_lines};

pub const CLASSIFY_HEADER: &str = "metaseq_id\tnormalized_ref\tnormalized_alt\tvariant_class\tvariant_class_abbrev\tdisplay_allele\tsequence_allele\tlocation_start\tlocation_end";

/// One output row for a variant.
pub fn classify_row(metaseq_id: &str, rs_position: Option<u64>, as_json: bool) -> Result<String> {
    let allele = Allele::from_str(metaseq_id)
        .with_context(|| format!("Cannot classify `{}`", metaseq_id))?;
    let attributes = classify_allele(&allele, rs_position);

    if as_json {
        let mut value = attributes.to_json();
        value["metaseq_id"] = metaseq_id.into();
        return Ok(value.to_string());
    }

    let normalized = normalize_alleles(&allele.ref_allele, &allele.alt_allele, true);
    Ok(format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
        metaseq_id,
        normalized.ref_allele,
        normalized.alt_allele,
        attributes.variant_class.description(),
        attributes.variant_class_abbrev(),
        attributes.display_allele,
        attributes.sequence_allele,
        attributes.location_start,
        attributes.location_end,
    ))
}

pub fn run_classify(matches: &ArgMatches) -> Result<()> {
    let rs_position = matches.get_one::<u64>("rs-position").copied();
    let as_json = matches.get_flag("json");

    let mut ids = get_many_strings(matches, "metaseq_id");
    if let Some(input) = matches.get_one::<String>("input") {
        ids.extend(read_lines(Path::new(input))?);
    }
    if ids.is_empty() {
        anyhow::bail!("No variants given; pass metaseq ids or --input");
    }

    let mut out = stdout().lock();
    if !as_json {
        writeln!(out, "{}", CLASSIFY_HEADER)?;
    }
    for id in &ids {
        writeln!(out, "{}", classify_row(id, rs_position, as_json)?)?;
    }
    out.flush()?;

    Ok(())
}
