//! `phishguard classify <url>` – extract features and ask the model.

use anyhow::{Context, Result};
use phishguard_core::config::{self, PhishguardConfig};
use phishguard_core::{assess, ModelHandle};
use std::path::Path;

use super::page::PageSource;

pub fn run_classify(
    cfg: &PhishguardConfig,
    url: &str,
    source: &PageSource,
    model: Option<&Path>,
    json: bool,
) -> Result<()> {
    let model_path = cfg
        .resolve_model_path(model, config::model_path_from_env())
        .context("no classifier model configured; pass --model, set PHISHGUARD_MODEL, or add model_path to config.toml")?;

    // Load before fetching so a bad model fails fast.
    let handle = ModelHandle::new(model_path);
    handle.preload()?;

    let html = source.load(cfg, url)?;
    let assessment = assess(&handle, url, html.as_deref())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        println!(
            "{}: {} ({})",
            assessment.url,
            assessment.label,
            assessment.label.verdict()
        );
    }
    Ok(())
}
