//! Corpus loading and fastText training-format conversion

use langid_core::{format_label, Error, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use regex::Regex;
use serde::Deserialize;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// One row of the labelled corpus CSV: a `labels` column with the language
/// code and a `text` column with the example.
#[derive(Debug, Deserialize)]
struct CorpusRecord {
    labels: String,
    text: String,
}

/// Load a CSV corpus and convert it to fastText supervised-training lines.
///
/// Both columns are trimmed; rows where either is empty after trimming are
/// dropped. Runs of carriage returns and newlines inside the text are
/// collapsed to a single space so each example stays on one line.
pub fn load_csv(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(Error::dataset(format!(
            "corpus file not found: {}",
            path.display()
        )));
    }

    let newline_re = Regex::new(r"[\r\n]+")
        .map_err(|e| Error::dataset(format!("invalid newline pattern: {e}")))?;

    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| Error::dataset(format!("failed to open {}: {}", path.display(), e)))?;

    let mut lines = Vec::new();
    let mut dropped = 0usize;

    for record in reader.deserialize() {
        let record: CorpusRecord = record
            .map_err(|e| Error::dataset(format!("failed to parse {}: {}", path.display(), e)))?;

        let label = record.labels.trim();
        let text = record.text.trim();

        if label.is_empty() || text.is_empty() {
            dropped += 1;
            continue;
        }

        let text = newline_re.replace_all(text, " ");
        lines.push(format!("{} {}", format_label(label), text));
    }

    if lines.is_empty() {
        return Err(Error::dataset(format!(
            "corpus {} contains no usable rows",
            path.display()
        )));
    }

    if dropped > 0 {
        debug!("dropped {} empty row(s) from {}", dropped, path.display());
    }
    info!("loaded {} example(s) from {}", lines.len(), path.display());

    Ok(lines)
}

/// Deterministically shuffle and split lines into (train, test) sets.
///
/// `test_fraction` must be strictly between 0 and 1. The shuffle is seeded
/// so repeated runs over the same corpus produce the same split.
pub fn train_test_split(
    mut lines: Vec<String>,
    test_fraction: f64,
    seed: u64,
) -> Result<(Vec<String>, Vec<String>)> {
    if !(0.0..1.0).contains(&test_fraction) || test_fraction == 0.0 {
        return Err(Error::dataset(format!(
            "test fraction must be in (0, 1), got {test_fraction}"
        )));
    }
    if lines.len() < 2 {
        return Err(Error::dataset(
            "corpus must contain at least 2 examples to split",
        ));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    lines.shuffle(&mut rng);

    let test_len = ((lines.len() as f64) * test_fraction).round() as usize;
    let test_len = test_len.clamp(1, lines.len() - 1);

    let train = lines.split_off(test_len);
    let test = lines;

    Ok((train, test))
}

/// Write training-format lines to a file, one example per line.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = BufWriter::new(file);

    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;

    debug!("wrote {} line(s) to {}", lines.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_csv_formats_lines() {
        let file = write_csv("labels,text\nen,hello world\nfr, bonjour \n");
        let lines = load_csv(file.path()).unwrap();

        assert_eq!(
            lines,
            vec![
                "__label__en hello world".to_string(),
                "__label__fr bonjour".to_string(),
            ]
        );
    }

    #[test]
    fn test_load_csv_collapses_newlines_and_drops_empty_rows() {
        let file = write_csv("labels,text\nen,\"line one\nline two\"\nde,   \n");
        let lines = load_csv(file.path()).unwrap();

        assert_eq!(lines, vec!["__label__en line one line two".to_string()]);
    }

    #[test]
    fn test_load_csv_missing_file() {
        let err = load_csv(Path::new("/no/such/corpus.csv")).unwrap_err();
        assert!(matches!(err, Error::Dataset(_)));
    }

    #[test]
    fn test_split_is_deterministic() {
        let lines: Vec<String> = (0..100).map(|i| format!("__label__en text {i}")).collect();

        let (train_a, test_a) = train_test_split(lines.clone(), 0.1, 42).unwrap();
        let (train_b, test_b) = train_test_split(lines, 0.1, 42).unwrap();

        assert_eq!(train_a, train_b);
        assert_eq!(test_a, test_b);
        assert_eq!(test_a.len(), 10);
        assert_eq!(train_a.len(), 90);
    }

    #[test]
    fn test_split_rejects_bad_fraction() {
        let lines = vec!["__label__en hi".to_string(), "__label__fr salut".to_string()];
        assert!(train_test_split(lines.clone(), 0.0, 42).is_err());
        assert!(train_test_split(lines.clone(), 1.0, 42).is_err());
        assert!(train_test_split(lines, 1.5, 42).is_err());
    }

    #[test]
    fn test_split_rejects_tiny_corpus() {
        assert!(train_test_split(vec![], 0.1, 42).is_err());
        assert!(train_test_split(vec!["__label__en hi".to_string()], 0.1, 42).is_err());
    }

    #[test]
    fn test_split_keeps_every_line() {
        let lines: Vec<String> = (0..37).map(|i| format!("__label__en text {i}")).collect();
        let (train, test) = train_test_split(lines.clone(), 0.2, 7).unwrap();

        let mut recombined: Vec<String> = train.into_iter().chain(test).collect();
        recombined.sort();
        let mut original = lines;
        original.sort();
        assert_eq!(recombined, original);
    }

    #[test]
    fn test_write_lines_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("train.txt");
        let lines = vec!["__label__en hello".to_string(), "__label__fr salut".to_string()];

        write_lines(&path, &lines).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "__label__en hello\n__label__fr salut\n");
    }
}
