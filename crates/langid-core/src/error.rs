//! Error types for the langid workspace

/// Result type alias using the workspace Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for langid operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Model loading, training, or inference errors from the fastText library
    #[error("model error: {0}")]
    Model(String),

    /// Corpus loading and formatting errors
    #[error("dataset error: {0}")]
    Dataset(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a new model error
    pub fn model(msg: impl Into<String>) -> Self {
        Self::Model(msg.into())
    }

    /// Create a new dataset error
    pub fn dataset(msg: impl Into<String>) -> Self {
        Self::Dataset(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
