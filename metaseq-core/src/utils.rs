use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> std::io::Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(e.kind(), format!("Failed to open file {:?}: {}", path, e))
    })?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Get a writer for a file, gzip-compressing when the path ends in `.gz`.
///
pub fn get_dynamic_writer(path: &Path) -> std::io::Result<BufWriter<Box<dyn Write>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::create(path)?;
    let file: Box<dyn Write> = match is_gzipped {
        true => Box::new(GzEncoder::new(file, Compression::default())),
        false => Box::new(file),
    };

    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::io::BufRead;

    #[rstest]
    #[case("table.txt")]
    #[case("table.txt.gz")]
    fn test_dynamic_writer_reader_agree(#[case] file_name: &str) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(file_name);

        {
            let mut writer = get_dynamic_writer(&path).unwrap();
            writeln!(writer, "consequence\trank").unwrap();
            writeln!(writer, "stop_gained\t1").unwrap();
            writer.flush().unwrap();
        }

        let lines: Vec<String> = get_dynamic_reader(&path)
            .unwrap()
            .lines()
            .map(|l| l.unwrap())
            .collect();
        assert_eq!(lines, vec!["consequence\trank", "stop_gained\t1"]);
    }

    #[rstest]
    fn test_missing_file_is_an_error() {
        let result = get_dynamic_reader(Path::new("does/not/exist.txt"));
        assert!(result.is_err());
    }
}
