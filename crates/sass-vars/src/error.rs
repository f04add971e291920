//! Error types for conversions.
//!
//! Copyright (c) 2025 Posit, PBC

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while converting data to a declaration.
///
/// Malformed names or data shapes are not errors; they produce malformed
/// output text.
#[derive(Debug, Error)]
pub enum SassVarsError {
    /// Reading an input file failed
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML input could not be decoded
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON input could not be decoded, or a value could not be encoded
    #[error("Failed to process JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The configured encoding label is not a known text encoding
    #[error("Unknown text encoding: {0}")]
    UnknownEncoding(String),

    /// A classifier pattern failed to compile
    #[error("Invalid literal pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl SassVarsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
