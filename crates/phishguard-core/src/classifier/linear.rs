//! Linear decision-function model.
//!
//! File format (JSON):
//!
//! ```json
//! { "weights": [48 numbers], "intercept": -0.4,
//!   "scaler": { "mean": [48 numbers], "scale": [48 numbers] } }
//! ```
//!
//! `scaler` is optional. The decision value is `w · ((x - mean) / scale) + b`;
//! a positive value means phishing.

use serde::{Deserialize, Serialize};

use super::{Classifier, Label, ModelError};
use crate::features::{FeatureVector, INDICATOR_COUNT};

/// Per-feature standardisation applied before the dot product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub weights: Vec<f64>,
    pub intercept: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaler: Option<Scaler>,
}

fn check_width(field: &'static str, values: &[f64]) -> Result<(), ModelError> {
    if values.len() != INDICATOR_COUNT {
        return Err(ModelError::Dimension {
            field,
            expected: INDICATOR_COUNT,
            actual: values.len(),
        });
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(ModelError::NonFinite);
    }
    Ok(())
}

impl LinearModel {
    /// Checks that every parameter array matches the vector width and that
    /// the scaler never divides by zero.
    pub fn validate(&self) -> Result<(), ModelError> {
        check_width("weights", &self.weights)?;
        if !self.intercept.is_finite() {
            return Err(ModelError::NonFinite);
        }
        if let Some(scaler) = &self.scaler {
            check_width("scaler.mean", &scaler.mean)?;
            check_width("scaler.scale", &scaler.scale)?;
            if let Some(i) = scaler.scale.iter().position(|s| *s <= 0.0) {
                return Err(ModelError::InvalidScale(i));
            }
        }
        Ok(())
    }

    /// Signed distance from the decision boundary.
    pub fn decision_value(&self, features: &FeatureVector) -> f64 {
        let x = features.as_slice();
        let dot: f64 = match &self.scaler {
            Some(scaler) => x
                .iter()
                .zip(&self.weights)
                .zip(scaler.mean.iter().zip(&scaler.scale))
                .map(|((x, w), (mean, scale))| w * (x - mean) / scale)
                .sum(),
            None => x.iter().zip(&self.weights).map(|(x, w)| w * x).sum(),
        };
        dot + self.intercept
    }
}

impl Classifier for LinearModel {
    fn predict(&self, features: &FeatureVector) -> Result<Label, ModelError> {
        let value = self.decision_value(features);
        tracing::debug!(decision_value = value, "linear model decision");
        Ok(if value > 0.0 {
            Label::Phishing
        } else {
            Label::Benign
        })
    }
}
