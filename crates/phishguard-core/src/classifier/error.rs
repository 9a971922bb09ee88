//! Errors raised while loading or applying a classifier model.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("read model {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse model {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A parameter array does not match the feature vector width.
    #[error("model {field} has {actual} values, expected {expected}")]
    Dimension {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Scaler entry that would divide by zero or produce a non-finite value.
    #[error("model scaler has an unusable scale at position {0}")]
    InvalidScale(usize),

    #[error("model parameters contain a non-finite value")]
    NonFinite,
}
