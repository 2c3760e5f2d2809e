//! Loaded model wrapper around the fastText binding

use fasttext::FastText;
use langid_core::{Error, LanguagePrediction, Result};
use std::path::Path;

/// A loaded language identification model.
///
/// Wraps a `fasttext::FastText` instance and normalizes its inputs and
/// outputs: inference text is flattened to a single line, output labels are
/// stripped of the `__label__` marker, and probabilities are rounded for
/// presentation.
pub struct LanguageModel {
    name: String,
    inner: FastText,
}

impl std::fmt::Debug for LanguageModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageModel")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl LanguageModel {
    /// Load a model from a `.bin` or `.ftz` file.
    pub fn load(name: impl Into<String>, path: &Path) -> Result<Self> {
        let name = name.into();

        if !path.exists() {
            return Err(Error::config(format!(
                "model file not found: {}",
                path.display()
            )));
        }

        let path_str = path
            .to_str()
            .ok_or_else(|| Error::config(format!("model path is not UTF-8: {}", path.display())))?;

        let mut inner = FastText::new();
        inner
            .load_model(path_str)
            .map_err(|e| Error::model(format!("failed to load '{}': {}", path.display(), e)))?;

        tracing::info!(model = %name, path = %path.display(), "model loaded");

        Ok(Self { name, inner })
    }

    /// Wrap an already-trained fastText instance (used by the trainer).
    pub(crate) fn from_trained(name: impl Into<String>, inner: FastText) -> Self {
        Self {
            name: name.into(),
            inner,
        }
    }

    /// Model name as registered or assigned at load time.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Predict the top-k languages for a piece of text.
    ///
    /// fastText predicts per line, so embedded newlines are replaced with
    /// spaces before the call. Entries come back highest probability first.
    pub fn predict(&self, text: &str, k: u32) -> Result<Vec<LanguagePrediction>> {
        let line = flatten_line(text);

        let raw = self
            .inner
            .predict(&line, k as i32, 0.0)
            .map_err(Error::model)?;

        let mut predictions: Vec<LanguagePrediction> = raw
            .iter()
            .map(|p| LanguagePrediction::from_raw(&p.label, p.prob))
            .collect();
        predictions.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

        Ok(predictions)
    }

    /// Predict the single most likely language, or `None` when the model
    /// returns no label at all.
    pub fn predict_one(&self, text: &str) -> Result<Option<LanguagePrediction>> {
        Ok(self.predict(text, 1)?.into_iter().next())
    }

    /// Persist the model to disk, creating the parent directory if needed.
    pub fn save(&mut self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let path_str = path
            .to_str()
            .ok_or_else(|| Error::config(format!("model path is not UTF-8: {}", path.display())))?;

        self.inner
            .save_model(path_str)
            .map_err(|e| Error::model(format!("failed to save '{}': {}", path.display(), e)))?;

        tracing::info!(model = %self.name, path = %path.display(), "model saved");
        Ok(())
    }
}

/// Replace newlines with spaces so multi-line input predicts as one example.
fn flatten_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}
