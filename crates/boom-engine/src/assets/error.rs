use thiserror::Error;

/// Failure to produce an asset from the virtual filesystem.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    NotFound(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("asset {0} is not valid UTF-8")]
    Encoding(String),
    #[error("malformed asset: {0}")]
    Parse(#[from] serde_json::Error),
}
