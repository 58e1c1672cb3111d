//! Error types for the table crate.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Reasons a [`TableSpecBuilder`](crate::TableSpecBuilder) can be rejected.
///
/// Checks run in declaration order and the first failing one is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Neither dimension was given.
    #[error("either width or height must be given")]
    MissingDimensions,

    /// Width is negative.
    #[error("table width must be non-negative")]
    NegativeWidth,

    /// Height is negative.
    #[error("table height must be non-negative")]
    NegativeHeight,

    /// List size is zero, negative or unset.
    #[error("list size must be given and positive")]
    NonPositiveListSize,

    /// No fill order was chosen.
    #[error("filling type must be given")]
    MissingFillOrder,

    /// Start padding is negative.
    #[error("start padding must be non-negative")]
    NegativeStartPadding,

    /// Both dimensions were given but the grid can't hold padding plus items.
    #[error("given dimensions too small for list size")]
    DimensionsTooSmall,
}

/// A fill order name that isn't one of the four kebab-case names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown fill order: '{0}'")]
pub struct ParseFillOrderError(pub String);

/// Errors that can occur when loading a table spec from configuration.
#[derive(Debug, Error)]
pub enum TableError {
    /// The table configuration is invalid.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// JSON document could not be parsed.
    #[error("invalid JSON table config: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML document could not be parsed.
    #[error("invalid YAML table config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Config file could not be read.
    #[error("failed to read table config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Config file has an extension we don't know how to parse.
    #[error("unsupported table config format: '{0}' (expected .json, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
