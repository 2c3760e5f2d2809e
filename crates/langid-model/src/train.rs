//! Supervised training via the fastText library

use crate::model::LanguageModel;
use fasttext::{Args, FastText, LossName, ModelName};
use langid_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Hyperparameters for supervised training.
///
/// Defaults are the recommended settings for character-level language
/// identification: small embedding dimension, character n-grams of length
/// 3-6, softmax loss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainParams {
    /// Embedding dimension
    pub dim: i32,

    /// Number of training epochs
    pub epoch: i32,

    /// Learning rate
    pub lr: f64,

    /// Minimum character n-gram length
    pub minn: i32,

    /// Maximum character n-gram length
    pub maxn: i32,

    /// Training threads
    pub threads: i32,
}

impl Default for TrainParams {
    fn default() -> Self {
        Self {
            dim: 50,
            epoch: 25,
            lr: 0.1,
            minn: 3,
            maxn: 6,
            threads: num_cpus::get() as i32,
        }
    }
}

impl TrainParams {
    /// Set the embedding dimension
    pub fn with_dim(mut self, dim: i32) -> Self {
        self.dim = dim;
        self
    }

    /// Set the epoch count
    pub fn with_epoch(mut self, epoch: i32) -> Self {
        self.epoch = epoch;
        self
    }

    /// Set the learning rate
    pub fn with_lr(mut self, lr: f64) -> Self {
        self.lr = lr;
        self
    }

    /// Set the character n-gram range
    pub fn with_ngrams(mut self, minn: i32, maxn: i32) -> Self {
        self.minn = minn;
        self.maxn = maxn;
        self
    }
}

/// Train a supervised classifier on a fastText-format file.
///
/// The input must contain `__label__<code> <text>` lines. An empty input
/// file is rejected before the library is invoked, since fastText aborts on
/// an empty vocabulary.
pub fn train_supervised(input: &Path, params: &TrainParams) -> Result<LanguageModel> {
    let metadata = std::fs::metadata(input)
        .map_err(|e| Error::dataset(format!("training file {}: {}", input.display(), e)))?;
    if metadata.len() == 0 {
        return Err(Error::dataset(format!(
            "training file {} is empty",
            input.display()
        )));
    }

    let input_str = input
        .to_str()
        .ok_or_else(|| Error::config(format!("training path is not UTF-8: {}", input.display())))?;

    let mut args = Args::new();
    args.set_input(input_str)
        .map_err(|_| Error::config("training path contains an interior NUL byte"))?;
    args.set_model(ModelName::SUP);
    args.set_loss(LossName::SOFTMAX);
    args.set_dim(params.dim);
    args.set_epoch(params.epoch);
    args.set_lr(params.lr);
    args.set_minn(params.minn);
    args.set_maxn(params.maxn);
    args.set_thread(params.threads);

    info!(
        dim = params.dim,
        epoch = params.epoch,
        lr = params.lr,
        minn = params.minn,
        maxn = params.maxn,
        threads = params.threads,
        "training supervised model on {}",
        input.display()
    );

    let mut inner = FastText::new();
    inner.train(&args).map_err(Error::model)?;

    let name = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("supervised")
        .to_string();

    Ok(LanguageModel::from_trained(name, inner))
}
