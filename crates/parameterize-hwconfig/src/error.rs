//! Hardware configuration error types.

use std::path::PathBuf;

/// Errors that can occur while loading a hardware configuration.
#[derive(Debug, thiserror::Error)]
pub enum HwConfigError {
    /// The configuration file could not be read.
    #[error("reading {}", path.display())]
    Io {
        /// The file that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document root is not a mapping.
    #[error("hardware configuration must be a mapping at the top level")]
    NotAMapping,

    /// A required top-level key is absent.
    #[error("missing required key `{key}`")]
    MissingKey { key: &'static str },

    /// A stream table is present but is not a mapping.
    #[error("`{key}` must map stream names to stream records")]
    InvalidStreamTable { key: &'static str },

    /// A stream table entry is keyed by something other than a string.
    #[error("stream names in `{table}` must be strings, found {found}")]
    InvalidStreamName { table: &'static str, found: String },

    /// A stream record is not a mapping.
    #[error("stream `{table}.{stream}` must be a mapping")]
    InvalidStreamRecord { table: &'static str, stream: String },

    /// A stream record lacks a required field.
    #[error("stream `{table}.{stream}` is missing required field `{field}`")]
    MissingStreamField {
        table: &'static str,
        stream: String,
        field: &'static str,
    },
}

/// Result type alias for hardware configuration operations.
pub type Result<T> = std::result::Result<T, HwConfigError>;
