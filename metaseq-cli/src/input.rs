use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use metaseq_core::utils::get_dynamic_reader;

///
/// Non-empty lines of a (possibly gzipped) input file; `#` lines are comments.
///
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let reader = get_dynamic_reader(path)?;
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.with_context(|| format!("Failed to read {:?}", path))?;
        let trimmed = line.trim_end();
        if trimmed.trim().is_empty() || trimmed.starts_with('#') {
            continue;
        }
        lines.push(trimmed.to_string());
    }
    Ok(lines)
}

/// Every value given for a repeatable argument.
pub fn get_many_strings(matches: &ArgMatches, id: &str) -> Vec<String> {
    matches
        .get_many::<String>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}
