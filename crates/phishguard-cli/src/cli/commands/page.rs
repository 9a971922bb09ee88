//! Where the page markup for a URL comes from.

use anyhow::{Context, Result};
use phishguard_core::config::PhishguardConfig;
use phishguard_core::fetch_page::fetch_page;
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSource {
    /// URL-only extraction; every HTML indicator is zero.
    None,
    /// Markup from a file, or stdin for `-`.
    File(PathBuf),
    /// GET the URL itself.
    Fetch,
}

impl PageSource {
    pub fn from_args(html: Option<PathBuf>, fetch: bool) -> Self {
        match (html, fetch) {
            (Some(path), _) => PageSource::File(path),
            (None, true) => PageSource::Fetch,
            (None, false) => PageSource::None,
        }
    }

    /// Reads or fetches the markup for `url`.
    pub fn load(&self, cfg: &PhishguardConfig, url: &str) -> Result<Option<String>> {
        match self {
            PageSource::None => Ok(None),
            PageSource::File(path) if path.as_os_str() == "-" => {
                let mut html = String::new();
                std::io::stdin()
                    .read_to_string(&mut html)
                    .context("read HTML from stdin")?;
                Ok(Some(html))
            }
            PageSource::File(path) => {
                let bytes = std::fs::read(path)
                    .with_context(|| format!("read HTML file: {}", path.display()))?;
                Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
            }
            PageSource::Fetch => {
                let page = fetch_page(url, &cfg.fetch_or_default())?;
                if page.truncated {
                    eprintln!("warning: page body truncated; HTML indicators use the first part only");
                }
                Ok(Some(page.html))
            }
        }
    }
}
