use thiserror::Error;

/// Errors raised while loading the restaurant dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("failed to read dataset file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The dataset file is not a valid JSON array of rows.
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
}
