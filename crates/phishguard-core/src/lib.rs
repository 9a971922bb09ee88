//! Phishing URL scanner core: URL decomposition, 48-wide feature extraction,
//! and the classifier boundary.

pub mod config;
pub mod logging;

pub mod assessment;
pub mod checksum;
pub mod classifier;
pub mod features;
pub mod fetch_page;
pub mod url_model;

pub use assessment::{assess, Assessment};
pub use classifier::{Classifier, Label, LinearModel, ModelError, ModelHandle};
pub use features::{extract_features, FeatureVector, Indicator, INDICATOR_COUNT};
