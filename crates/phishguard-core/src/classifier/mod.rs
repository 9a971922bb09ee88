//! Classifier boundary.
//!
//! The extractor hands a [`FeatureVector`] to a [`Classifier`] and gets a
//! [`Label`] back. The bundled implementation is a linear decision function
//! loaded from a JSON model file through a load-once [`ModelHandle`].

mod error;
mod handle;
mod linear;

pub use error::ModelError;
pub use handle::ModelHandle;
pub use linear::{LinearModel, Scaler};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::features::FeatureVector;

/// Binary verdict for a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Benign,
    Phishing,
}

impl Label {
    /// Maps a numeric class (`0` benign, anything else phishing).
    pub fn from_class(class: i64) -> Self {
        if class == 0 {
            Label::Benign
        } else {
            Label::Phishing
        }
    }

    pub fn is_phishing(self) -> bool {
        self == Label::Phishing
    }

    /// Human-facing verdict.
    pub fn verdict(self) -> &'static str {
        match self {
            Label::Benign => "safe site",
            Label::Phishing => "danger: likely phishing",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Benign => f.write_str("benign"),
            Label::Phishing => f.write_str("phishing"),
        }
    }
}

/// Something that turns a feature vector into a verdict.
///
/// Implementations must be stateless per call: the same vector always yields
/// the same label.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<Label, ModelError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_from_class() {
        assert_eq!(Label::from_class(0), Label::Benign);
        assert_eq!(Label::from_class(1), Label::Phishing);
        assert_eq!(Label::from_class(-1), Label::Phishing);
    }

    #[test]
    fn label_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Label::Phishing).unwrap(), "\"phishing\"");
        let l: Label = serde_json::from_str("\"benign\"").unwrap();
        assert_eq!(l, Label::Benign);
        assert_eq!(l.to_string(), "benign");
    }
}
