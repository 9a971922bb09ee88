//! URL in, verdict out.

use serde::Serialize;

use crate::classifier::{Classifier, Label, ModelError};
use crate::features::{extract_features, FeatureVector};

/// Features and verdict for one URL.
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub url: String,
    pub features: FeatureVector,
    pub label: Label,
}

/// Extracts the feature vector for `url` and hands it to `classifier`.
///
/// Extraction never fails; only the classifier can return an error.
pub fn assess<C>(classifier: &C, url: &str, html: Option<&str>) -> Result<Assessment, ModelError>
where
    C: Classifier + ?Sized,
{
    let features = extract_features(url, html);
    let label = classifier.predict(&features)?;
    tracing::info!(url, %label, "url assessed");
    Ok(Assessment {
        url: url.to_string(),
        features,
        label,
    })
}
