//! Core types and label format helpers

use serde::{Deserialize, Serialize};

/// Marker string fastText prepends to class labels in its training and
/// output format, e.g. `__label__en`.
pub const LABEL_PREFIX: &str = "__label__";

/// One entry of a top-k language prediction.
///
/// The label is the bare language code (`en`, `fr`, ...) with the marker
/// prefix already stripped, and the confidence is the softmax probability
/// rounded for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguagePrediction {
    /// Language code predicted by the model
    pub lang_code: String,

    /// Probability assigned to this label (0.0-1.0)
    pub confidence: f32,
}

impl LanguagePrediction {
    /// Create a prediction from a raw model label and probability
    pub fn from_raw(label: &str, prob: f32) -> Self {
        Self {
            lang_code: strip_label(label).to_string(),
            confidence: round_confidence(prob),
        }
    }
}

/// Prepend the label marker to a language code, producing the model's
/// native training-format label.
pub fn format_label(code: &str) -> String {
    format!("{LABEL_PREFIX}{code}")
}

/// Strip the label marker from a model output label. Labels without the
/// marker are returned unchanged.
pub fn strip_label(label: &str) -> &str {
    label.strip_prefix(LABEL_PREFIX).unwrap_or(label)
}

/// Round a probability to 4 decimal places for wire and console output.
///
/// fastText's softmax output can overshoot 1.0 by a ulp, so the value is
/// clamped before rounding.
pub fn round_confidence(p: f32) -> f32 {
    (p.clamp(0.0, 1.0) * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_label() {
        assert_eq!(format_label("en"), "__label__en");
        assert_eq!(format_label("zh-cn"), "__label__zh-cn");
    }

    #[test]
    fn test_strip_label() {
        assert_eq!(strip_label("__label__fr"), "fr");
        assert_eq!(strip_label("fr"), "fr");
        assert_eq!(strip_label("__label__"), "");
    }

    #[test]
    fn test_round_confidence() {
        assert_eq!(round_confidence(0.987654), 0.9877);
        assert_eq!(round_confidence(1.00001), 1.0);
        assert_eq!(round_confidence(-0.1), 0.0);
    }

    #[test]
    fn test_prediction_from_raw() {
        let p = LanguagePrediction::from_raw("__label__de", 0.123456);
        assert_eq!(p.lang_code, "de");
        assert_eq!(p.confidence, 0.1235);
    }
}
