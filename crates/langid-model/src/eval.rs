//! Held-out evaluation at k = 1

use crate::model::LanguageModel;
use langid_core::{strip_label, Result, LABEL_PREFIX};
use serde::Serialize;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::warn;

/// Top-1 evaluation result over a held-out fastText-format file.
#[derive(Debug, Clone, Serialize)]
pub struct EvalReport {
    /// Number of evaluated examples
    pub examples: usize,

    /// Examples whose top-1 prediction matched the gold label
    pub correct: usize,

    /// Precision at 1 (correct / predicted)
    pub precision_at_1: f64,

    /// Recall at 1 (correct / labelled)
    pub recall_at_1: f64,
}

/// Replay a test file through `predict(k = 1)` and score the result.
///
/// Each line is split into its leading `__label__` token and the example
/// text; malformed lines are skipped with a warning. For one-label-per-line
/// corpora precision and recall coincide at k = 1, matching fastText's own
/// `test` output.
pub fn evaluate(model: &LanguageModel, test_file: &Path) -> Result<EvalReport> {
    let file = std::fs::File::open(test_file)?;
    let reader = BufReader::new(file);

    let mut examples = 0usize;
    let mut predicted = 0usize;
    let mut correct = 0usize;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some((gold, text)) = parse_test_line(line) else {
            warn!("skipping malformed test line: {:.60}", line);
            continue;
        };

        examples += 1;

        if let Some(prediction) = model.predict_one(text)? {
            predicted += 1;
            if prediction.lang_code == gold {
                correct += 1;
            }
        }
    }

    let precision_at_1 = ratio(correct, predicted);
    let recall_at_1 = ratio(correct, examples);

    Ok(EvalReport {
        examples,
        correct,
        precision_at_1,
        recall_at_1,
    })
}

/// Split a `__label__<code> <text>` line into (code, text).
fn parse_test_line(line: &str) -> Option<(&str, &str)> {
    let (label, text) = line.split_once(' ')?;
    if !label.starts_with(LABEL_PREFIX) {
        return None;
    }

    let code = strip_label(label);
    let text = text.trim();
    if code.is_empty() || text.is_empty() {
        return None;
    }

    Some((code, text))
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_test_line() {
        assert_eq!(
            parse_test_line("__label__en hello world"),
            Some(("en", "hello world"))
        );
        assert_eq!(parse_test_line("__label__fr bonjour"), Some(("fr", "bonjour")));
    }

    #[test]
    fn test_parse_rejects_unlabelled_lines() {
        assert_eq!(parse_test_line("no label here"), None);
        assert_eq!(parse_test_line("__label__en"), None);
        assert_eq!(parse_test_line("__label__ text without code"), None);
        assert_eq!(parse_test_line("__label__en    "), None);
    }

    #[test]
    fn test_ratio_zero_denominator() {
        assert_eq!(ratio(0, 0), 0.0);
        assert_eq!(ratio(3, 4), 0.75);
    }
}
