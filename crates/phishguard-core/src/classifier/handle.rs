//! Load-once model handle.

use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

use super::{Classifier, Label, LinearModel, ModelError};
use crate::checksum;
use crate::features::FeatureVector;

#[derive(Debug)]
struct Loaded {
    model: LinearModel,
    fingerprint: String,
}

/// Owns the path to a model file and the model parsed from it.
///
/// The file is read on the first call to [`ModelHandle::get`] (or eagerly via
/// [`ModelHandle::preload`]) and never re-read for the lifetime of the
/// handle. A failed load is not cached, so a later call may retry.
#[derive(Debug)]
pub struct ModelHandle {
    path: PathBuf,
    loaded: OnceCell<Loaded>,
}

impl ModelHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            loaded: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.get().is_some()
    }

    /// Loads the model now rather than on first prediction.
    pub fn preload(&self) -> Result<(), ModelError> {
        self.load().map(|_| ())
    }

    pub fn get(&self) -> Result<&LinearModel, ModelError> {
        self.load().map(|l| &l.model)
    }

    /// SHA-256 of the model file, once loaded.
    pub fn fingerprint(&self) -> Option<&str> {
        self.loaded.get().map(|l| l.fingerprint.as_str())
    }

    fn load(&self) -> Result<&Loaded, ModelError> {
        self.loaded.get_or_try_init(|| {
            let bytes = std::fs::read(&self.path).map_err(|source| ModelError::Io {
                path: self.path.clone(),
                source,
            })?;
            let model: LinearModel =
                serde_json::from_slice(&bytes).map_err(|source| ModelError::Parse {
                    path: self.path.clone(),
                    source,
                })?;
            model.validate()?;
            let fingerprint = checksum::sha256_hex(&bytes);
            tracing::info!(
                path = %self.path.display(),
                sha256 = %fingerprint,
                "classifier model loaded"
            );
            Ok(Loaded { model, fingerprint })
        })
    }
}

impl Classifier for ModelHandle {
    fn predict(&self, features: &FeatureVector) -> Result<Label, ModelError> {
        self.get()?.predict(features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{extract_features, INDICATOR_COUNT};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_model(model: &LinearModel) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(serde_json::to_string(model).unwrap().as_bytes())
            .unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn loads_once_and_keeps_model_after_file_changes() {
        let model = LinearModel {
            weights: vec![0.0; INDICATOR_COUNT],
            intercept: 1.0,
            scaler: None,
        };
        let f = write_model(&model);
        let handle = ModelHandle::new(f.path());
        assert!(!handle.is_loaded());

        let v = extract_features("https://example.com", None);
        assert_eq!(handle.predict(&v).unwrap(), Label::Phishing);
        assert!(handle.is_loaded());
        assert_eq!(handle.fingerprint().map(str::len), Some(64));

        std::fs::write(f.path(), b"not json").unwrap();
        assert_eq!(handle.predict(&v).unwrap(), Label::Phishing);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let handle = ModelHandle::new(dir.path().join("absent.json"));
        assert!(matches!(handle.preload(), Err(ModelError::Io { .. })));
        assert!(!handle.is_loaded());
        assert!(handle.fingerprint().is_none());
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"{\"weights\": [1, 2").unwrap();
        f.flush().unwrap();
        let handle = ModelHandle::new(f.path());
        assert!(matches!(handle.get(), Err(ModelError::Parse { .. })));
    }

    #[test]
    fn wrong_width_is_rejected_at_load() {
        let model = LinearModel {
            weights: vec![0.0; 3],
            intercept: 0.0,
            scaler: None,
        };
        let f = write_model(&model);
        let handle = ModelHandle::new(f.path());
        assert!(matches!(handle.preload(), Err(ModelError::Dimension { .. })));
    }
}
