//! Error types for srsgen.

use thiserror::Error;

/// Error type for srsgen operations.
///
/// Every variant is fatal: it aborts the run that raised it. A requested
/// category that is absent from the catalog is not an error at all — it is
/// reported through [`crate::compile::CompileReport`] and the run continues.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed input catalog
    #[error("catalog decode error: {0}")]
    Decode(String),

    /// Failure producing an output rule-set
    #[error("rule-set encode error: {0}")]
    Encode(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Release metadata fetch or asset download error
    #[error("fetch error: {0}")]
    Fetch(String),

    /// Required catalog asset absent from the release
    #[error("asset not found in release: {0}")]
    AssetMissing(String),
}

/// Result type alias for srsgen operations.
pub type Result<T> = std::result::Result<T, Error>;
