use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use log::info;

use crate::consts::{CHROMOSOME_PREFIX, MITOCHONDRIAL_ALIAS, MITOCHONDRIAL_TOKEN};
use crate::errors::ChromosomeMapError;
use crate::utils::get_dynamic_reader;

const SOURCE_ID_COLUMN: &str = "source_id";
const CHROMOSOME_COLUMN: &str = "chromosome";
const LENGTH_COLUMN: &str = "length";

///
/// Reduce a chromosome name to its bare token: `chr1` -> `1`, `MT` -> `M`.
///
pub fn normalize_chromosome(chromosome: &str) -> String {
    let chromosome = chromosome.trim();
    let bare = chromosome
        .strip_prefix(CHROMOSOME_PREFIX)
        .unwrap_or(chromosome);
    if bare == MITOCHONDRIAL_ALIAS {
        MITOCHONDRIAL_TOKEN.to_string()
    } else {
        bare.to_string()
    }
}

///
/// Mapping of third-party sequence ids (e.g. RefSeq `NC_000001.11`) to bare chromosome
/// tokens, optionally with the sequence length.
///
/// The input is tab-delimited with a header naming at least the `source_id` and
/// `chromosome` columns; a `length` column is picked up when present.
///
#[derive(Debug, Clone, Default)]
pub struct ChromosomeMap {
    chromosomes: HashMap<String, String>,
    lengths: HashMap<String, u64>,
}

impl ChromosomeMap {
    pub fn from_file(path: &Path) -> Result<Self, ChromosomeMapError> {
        info!("Loading chromosome map from {:?}", path);
        let reader = get_dynamic_reader(path)?;
        Self::from_reader(reader)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ChromosomeMapError> {
        let mut lines = reader.lines();

        let header = match lines.next() {
            Some(line) => line?,
            None => return Err(ChromosomeMapError::MissingColumn(SOURCE_ID_COLUMN)),
        };
        let columns: Vec<&str> = header.trim_end().split('\t').collect();
        let column_index = |name: &'static str| {
            columns
                .iter()
                .position(|c| *c == name)
                .ok_or(ChromosomeMapError::MissingColumn(name))
        };
        let source_idx = column_index(SOURCE_ID_COLUMN)?;
        let chrom_idx = column_index(CHROMOSOME_COLUMN)?;
        let length_idx = columns.iter().position(|c| *c == LENGTH_COLUMN);

        let mut map = ChromosomeMap::default();
        for (i, line) in lines.enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.trim_end().split('\t').collect();
            let (Some(source_id), Some(chromosome)) = (fields.get(source_idx), fields.get(chrom_idx))
            else {
                return Err(ChromosomeMapError::TruncatedLine { line: i + 2 });
            };

            let chromosome = normalize_chromosome(chromosome);
            if let Some(length) = length_idx
                .and_then(|idx| fields.get(idx))
                .and_then(|l| l.parse::<u64>().ok())
            {
                map.lengths.insert(chromosome.clone(), length);
            }
            map.chromosomes.insert(source_id.to_string(), chromosome);
        }

        Ok(map)
    }

    /// Chromosome token mapped to the sequence id.
    pub fn get(&self, sequence_id: &str) -> Result<&str, ChromosomeMapError> {
        self.chromosomes
            .get(sequence_id)
            .map(String::as_str)
            .ok_or_else(|| ChromosomeMapError::UnknownSequenceId(sequence_id.to_string()))
    }

    ///
    /// Reverse lookup: the sequence id mapped to a chromosome (bare or `chr`-prefixed).
    ///
    pub fn sequence_id(&self, chromosome: &str) -> Option<&str> {
        let chromosome = normalize_chromosome(chromosome);
        self.chromosomes
            .iter()
            .find(|(_, c)| **c == chromosome)
            .map(|(id, _)| id.as_str())
    }

    pub fn length(&self, chromosome: &str) -> Option<u64> {
        self.lengths.get(&normalize_chromosome(chromosome)).copied()
    }

    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }
}
