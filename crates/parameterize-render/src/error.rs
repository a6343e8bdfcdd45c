//! Rendering error types.

use std::path::PathBuf;

use parameterize_hwconfig::HwConfigError;

/// Errors that stop a generator run.
///
/// Template compile and render failures are not in this list: they are
/// reported through [`crate::RenderOutcome::Failed`].
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The `template:output` argument is malformed.
    #[error("invalid template spec `{spec}`: {reason}")]
    InvalidSpec { spec: String, reason: &'static str },

    /// The hardware configuration is missing keys or has malformed streams.
    #[error(transparent)]
    HwConfig(#[from] HwConfigError),

    /// A top-level configuration key cannot be used as a template name.
    #[error("top-level key {key} is not a string")]
    InvalidKey { key: String },

    /// A configuration value has no template representation.
    #[error("building template namespace: {0}")]
    Namespace(#[from] serde_json::Error),

    /// The template source could not be read.
    #[error("reading template {}", path.display())]
    ReadTemplate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The rendered output could not be written.
    #[error("writing {}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;
