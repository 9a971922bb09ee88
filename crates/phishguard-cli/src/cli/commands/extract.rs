//! `phishguard extract <url>` – print the feature vector.

use anyhow::Result;
use phishguard_core::config::PhishguardConfig;
use phishguard_core::features::NamedValue;
use phishguard_core::extract_features;

use super::page::PageSource;

/// Integers print without a fraction; ratios with two decimals.
pub(crate) fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    }
}

fn print_table(entries: &[NamedValue]) {
    println!("{:<4} {:<42} {}", "IDX", "INDICATOR", "VALUE");
    for e in entries {
        println!("{:<4} {:<42} {}", e.index, e.name, format_value(e.value));
    }
}

pub fn run_extract(cfg: &PhishguardConfig, url: &str, source: &PageSource, json: bool) -> Result<()> {
    let html = source.load(cfg, url)?;
    let features = extract_features(url, html.as_deref());
    let entries = features.entries();
    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print_table(&entries);
    }
    Ok(())
}
