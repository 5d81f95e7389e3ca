use std::io::{Write, stdout};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;

use metaseq_identity::{PrimaryKeyGenerator, SequenceDigestService};

use crate::config::{MetaseqConfig, ReferenceConfig};
use crate::input::{get_many_strings, read_lines};

pub const PK_HEADER: &str = "metaseq_id\tprimary_key";

/// A variant to key, with its optional accession.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRequest {
    pub metaseq_id: String,
    pub external_id: Option<String>,
}

impl KeyRequest {
    /// `metaseq_id[<TAB>external_id]`
    pub fn from_line(line: &str) -> Self {
        let mut fields = line.split('\t');
        let metaseq_id = fields.next().unwrap_or_default().trim().to_string();
        let external_id = fields
            .next()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string);
        KeyRequest {
            metaseq_id,
            external_id,
        }
    }
}

/// Apply command line overrides on top of the config file.
pub fn resolve_config(matches: &ArgMatches) -> Result<MetaseqConfig> {
    let path = matches.get_one::<String>("config").map(PathBuf::from);
    let mut config = MetaseqConfig::load(path.as_deref())?;

    if let Some(build) = matches.get_one::<String>("build") {
        config.identity.genome_build = build.to_string();
    }
    if let Some(max_length) = matches.get_one::<usize>("max-length") {
        config.identity.max_sequence_length = *max_length;
    }
    if matches.get_flag("normalize") {
        config.identity.normalize = true;
    }

    let fasta = matches.get_one::<String>("fasta").map(PathBuf::from);
    let accessions = matches.get_one::<String>("accessions").map(PathBuf::from);
    if fasta.is_some() || accessions.is_some() {
        config.reference.push(ReferenceConfig {
            build: config.identity.genome_build.clone(),
            fasta,
            accessions,
            chromosome_map: matches.get_one::<String>("chromosome-map").map(PathBuf::from),
        });
    }

    Ok(config)
}

pub fn generate_keys<D: SequenceDigestService + Sync>(
    generator: &PrimaryKeyGenerator<D>,
    requests: &[KeyRequest],
    progress: Option<&ProgressBar>,
) -> Result<Vec<String>> {
    requests
        .par_iter()
        .map(|request| {
            let key = generator
                .generate_primary_key(&request.metaseq_id, request.external_id.as_deref())
                .with_context(|| format!("Failed to generate a primary key for `{}`", request.metaseq_id));
            if let Some(pb) = progress {
                pb.inc(1);
            }
            key
        })
        .collect()
}

pub fn run_pk(matches: &ArgMatches) -> Result<()> {
    let config = resolve_config(matches)?;

    let external_id = matches.get_one::<String>("external-id").cloned();
    let mut requests: Vec<KeyRequest> = get_many_strings(matches, "metaseq_id")
        .into_iter()
        .map(|metaseq_id| KeyRequest {
            metaseq_id,
            external_id: external_id.clone(),
        })
        .collect();

    let input = matches.get_one::<String>("input");
    if let Some(input) = input {
        requests.extend(
            read_lines(Path::new(input))?
                .iter()
                .map(|line| KeyRequest::from_line(line)),
        );
    }
    if requests.is_empty() {
        anyhow::bail!("No variants given; pass metaseq ids or --input");
    }

    if let Some(threads) = matches.get_one::<usize>("threads") {
        rayon::ThreadPoolBuilder::new()
            .num_threads(*threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let digester = config.digester(config.identity.normalize)?;
    let generator = PrimaryKeyGenerator::new(config.identity, digester);

    let progress = match input {
        Some(_) => {
            let pb = ProgressBar::new(requests.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")?,
            );
            pb.set_message("Generating primary keys");
            Some(pb)
        }
        None => None,
    };

    let keys = generate_keys(&generator, &requests, progress.as_ref())?;
    if let Some(pb) = progress {
        pb.finish_with_message("Done");
    }
    info!("Generated {} primary keys", keys.len());

    let mut out = stdout().lock();
    writeln!(out, "{}", PK_HEADER)?;
    for (request, key) in requests.iter().zip(keys) {
        writeln!(out, "{}\t{}", request.metaseq_id, key)?;
    }
    out.flush()?;

    Ok(())
}
