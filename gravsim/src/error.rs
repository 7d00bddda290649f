//! Error types for gravsim.
//!
//! The physics core never fails; these errors come from loading and
//! validating a scenario before the simulation starts.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for gravsim operations.
pub type SimResult<T> = Result<T, SimError>;

#[derive(Debug, Error)]
pub enum SimError {
    /// Scenario file could not be read.
    #[error("failed to read scenario {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Position or velocity list that is not two components long.
    #[error("body {body}: `{field}` must have 2 components, got {len}")]
    InvalidVector {
        body: usize,
        field: &'static str,
        len: usize,
    },

    /// Body with a negative or non-finite attribute.
    #[error("body {body}: {reason}")]
    InvalidBody { body: usize, reason: String },

    /// Orbit primary out of range or pointing at the body itself.
    #[error("body {body}: invalid orbit primary {primary}")]
    InvalidPrimary { body: usize, primary: usize },

    /// Body and orbit primary share a position; the orbit velocity is undefined.
    #[error("body {body}: coincides with orbit primary {primary}")]
    CoincidentPrimary { body: usize, primary: usize },

    /// Invalid global parameter.
    #[error("parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}
