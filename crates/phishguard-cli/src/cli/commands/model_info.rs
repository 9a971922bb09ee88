//! `phishguard model-info` – inspect the configured model file.

use anyhow::{Context, Result};
use phishguard_core::checksum;
use phishguard_core::config::{self, PhishguardConfig};
use phishguard_core::ModelHandle;
use std::path::Path;

pub fn run_model_info(cfg: &PhishguardConfig, model: Option<&Path>) -> Result<()> {
    let path = cfg
        .resolve_model_path(model, config::model_path_from_env())
        .context("no classifier model configured")?;
    println!("path:    {}", path.display());
    println!("sha256:  {}", checksum::sha256_path(&path)?);

    let handle = ModelHandle::new(&path);
    match handle.get() {
        Ok(m) => println!(
            "status:  ok ({} weights, intercept {}, scaler {})",
            m.weights.len(),
            m.intercept,
            if m.scaler.is_some() { "yes" } else { "no" }
        ),
        Err(e) => println!("status:  invalid ({e})"),
    }
    Ok(())
}
