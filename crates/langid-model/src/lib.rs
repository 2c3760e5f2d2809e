//! langid Model
//!
//! fastText marshaling for language identification: model loading, named
//! model registry, corpus preparation, supervised training, and held-out
//! evaluation.
//!
//! The classification model itself — character n-gram hashing, embedding
//! averaging, softmax — is implemented entirely inside the external fastText
//! library. This crate converts strings to and from its formats and drives
//! its training and inference calls; it contains no model mathematics.

pub mod dataset;
pub mod eval;
pub mod model;
pub mod registry;
pub mod train;

pub use dataset::{load_csv, train_test_split, write_lines};
pub use eval::{evaluate, EvalReport};
pub use model::LanguageModel;
pub use registry::ModelRegistry;
pub use train::{train_supervised, TrainParams};
