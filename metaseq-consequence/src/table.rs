//! The rank table: ordered consequence combinations and their ranks.
//!
//! On disk it is tab-delimited text with a `consequence<TAB>rank` header and one
//! combination per line, terms comma-joined. Without a `rank` column, load order is rank
//! order.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use fxhash::FxHashMap;
use log::{info, warn};

use metaseq_core::utils::{get_dynamic_reader, get_dynamic_writer};

use crate::combination::alphabetize_combination;
use crate::errors::ConsequenceError;

pub const CONSEQUENCE_COLUMN: &str = "consequence";
pub const RANK_COLUMN: &str = "rank";
const VERSION_DATE_FORMAT: &str = "%m-%d-%Y";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankTable {
    combinations: Vec<String>,
    ranks: FxHashMap<String, u32>,
}

impl RankTable {
    /// Table ranked by position: the first combination gets rank 1.
    pub fn from_ordered(combinations: Vec<String>) -> Self {
        let ranks = combinations
            .iter()
            .enumerate()
            .map(|(i, c)| (c.clone(), i as u32 + 1))
            .collect();
        RankTable {
            combinations,
            ranks,
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConsequenceError> {
        info!("Parsing ranking file: {:?}", path);
        let reader = get_dynamic_reader(path)?;
        let table = Self::from_reader(reader)?;
        info!("Loaded {} ranked consequence combinations", table.len());
        Ok(table)
    }

    ///
    /// Parse a ranking table. Combinations are alphabetized so that keys are unique
    /// regardless of how the file lists the terms; repeated combinations keep their first
    /// row.
    ///
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ConsequenceError> {
        let mut lines = reader.lines();
        let header = match lines.next() {
            Some(line) => line?,
            None => return Err(ConsequenceError::MissingColumn(CONSEQUENCE_COLUMN)),
        };
        let columns: Vec<&str> = header.trim_end().split('\t').collect();
        let conseq_idx = columns
            .iter()
            .position(|c| *c == CONSEQUENCE_COLUMN)
            .ok_or(ConsequenceError::MissingColumn(CONSEQUENCE_COLUMN))?;
        let rank_idx = columns.iter().position(|c| *c == RANK_COLUMN);

        let mut table = RankTable::default();
        for (i, line) in lines.enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let line_number = i + 2;
            let fields: Vec<&str> = line.trim_end().split('\t').collect();
            let Some(combination) = fields.get(conseq_idx) else {
                continue;
            };
            let combination = alphabetize_combination(combination);

            let rank = match rank_idx {
                Some(idx) => {
                    let value = fields.get(idx).copied().unwrap_or_default();
                    value
                        .trim()
                        .parse::<u32>()
                        .map_err(|_| ConsequenceError::InvalidRank {
                            line: line_number,
                            value: value.to_string(),
                        })?
                }
                None => table.len() as u32 + 1,
            };

            if table.ranks.contains_key(&combination) {
                warn!(
                    "Duplicate consequence combination `{}` on line {}; keeping the first",
                    combination, line_number
                );
                continue;
            }
            table.ranks.insert(combination.clone(), rank);
            table.combinations.push(combination);
        }

        Ok(table)
    }

    /// Write the table, header included; `.gz` paths are compressed.
    pub fn save(&self, path: &Path) -> Result<(), ConsequenceError> {
        info!("Saving consequence rankings to {:?}", path);
        let mut writer = get_dynamic_writer(path)?;
        self.write(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<(), ConsequenceError> {
        writeln!(writer, "{}\t{}", CONSEQUENCE_COLUMN, RANK_COLUMN)?;
        for combination in &self.combinations {
            writeln!(writer, "{}\t{}", combination, self.ranks[combination])?;
        }
        Ok(())
    }

    pub fn rank(&self, combination: &str) -> Option<u32> {
        self.ranks.get(combination).copied()
    }

    /// Combinations in table order.
    pub fn combinations(&self) -> &[String] {
        &self.combinations
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.combinations
            .iter()
            .map(|c| (c.as_str(), self.ranks[c]))
    }

    pub fn len(&self) -> usize {
        self.combinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }
}

/// `<stem>` of a ranking file: its name up to the first `.`.
fn file_stem(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.split('.').next().unwrap_or_default().to_string()
}

///
/// Path for a new version of a ranking file, next to the original.
///
/// `<stem>_<MM-DD-YYYY>.txt` for the given date; if that file already exists,
/// `<stem>_v<N>.txt` with `N` starting at `added` and incremented until unused.
///
pub fn versioned_path(original: &Path, added: usize, today: NaiveDate) -> PathBuf {
    let parent = original.parent().unwrap_or_else(|| Path::new(""));
    let stem = file_stem(original);

    let dated = parent.join(format!("{}_{}.txt", stem, today.format(VERSION_DATE_FORMAT)));
    if !dated.exists() {
        return dated;
    }

    let mut version = added;
    loop {
        let candidate = parent.join(format!("{}_v{}.txt", stem, version));
        if !candidate.exists() {
            return candidate;
        }
        version += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::io::Cursor;
    use tempfile::tempdir;

    #[rstest]
    fn test_parse_with_rank_column() {
        let data = "consequence\trank\nstop_gained\t1\nsynonymous_variant,missense_variant\t2\n";
        let table = RankTable::from_reader(Cursor::new(data)).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rank("stop_gained"), Some(1));
        assert_eq!(table.rank("missense_variant,synonymous_variant"), Some(2));
        assert_eq!(table.rank("synonymous_variant,missense_variant"), None);
    }

    #[rstest]
    fn test_parse_without_rank_column_uses_load_order() {
        let data = "consequence\nstop_gained\nmissense_variant\n\nintron_variant\n";
        let table = RankTable::from_reader(Cursor::new(data)).unwrap();
        assert_eq!(
            table.iter().collect::<Vec<_>>(),
            vec![
                ("stop_gained", 1),
                ("missense_variant", 2),
                ("intron_variant", 3)
            ]
        );
    }

    #[rstest]
    fn test_duplicates_keep_first_row() {
        let data = "consequence\trank\na,b\t1\nb,a\t2\n";
        let table = RankTable::from_reader(Cursor::new(data)).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rank("a,b"), Some(1));
    }

    #[rstest]
    #[case("rank\n1\n")]
    #[case("")]
    fn test_missing_consequence_column(#[case] data: &str) {
        let result = RankTable::from_reader(Cursor::new(data));
        assert!(matches!(
            result,
            Err(ConsequenceError::MissingColumn("consequence"))
        ));
    }

    #[rstest]
    fn test_invalid_rank() {
        let data = "consequence\trank\nstop_gained\tfirst\n";
        let result = RankTable::from_reader(Cursor::new(data));
        assert!(matches!(
            result,
            Err(ConsequenceError::InvalidRank { line: 2, .. })
        ));
    }

    #[rstest]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rankings.txt");
        let table = RankTable::from_ordered(vec![
            "stop_gained,intron_variant".to_string(),
            "missense_variant".to_string(),
        ]);
        table.save(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "consequence\trank\nstop_gained,intron_variant\t1\nmissense_variant\t2\n"
        );

        let reloaded = RankTable::from_file(&path).unwrap();
        assert_eq!(reloaded.rank("intron_variant,stop_gained"), Some(1));
        assert_eq!(reloaded.rank("missense_variant"), Some(2));
    }

    #[rstest]
    fn test_versioned_path() {
        let dir = tempdir().unwrap();
        let original = dir.path().join("adsp_ranking.txt");
        let today = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();

        let dated = versioned_path(&original, 2, today);
        assert_eq!(dated, dir.path().join("adsp_ranking_03-07-2024.txt"));

        std::fs::write(&dated, "").unwrap();
        let v2 = versioned_path(&original, 2, today);
        assert_eq!(v2, dir.path().join("adsp_ranking_v2.txt"));

        std::fs::write(&v2, "").unwrap();
        assert_eq!(
            versioned_path(&original, 2, today),
            dir.path().join("adsp_ranking_v3.txt")
        );
    }
}
