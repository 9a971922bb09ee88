//! Optional page fetch ahead of extraction.
//!
//! Uses the curl crate (libcurl) to GET the page markup so the HTML
//! indicators have a document to scan. This sits outside the extraction core:
//! it is the only part of the pipeline that performs I/O, and it finishes
//! before any indicator is computed.

mod body;

use anyhow::{Context, Result};
use std::time::Duration;

use crate::config::FetchConfig;

pub use body::BodyBuffer;

/// Markup retrieved for a URL.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL after redirects, when curl reports one.
    pub final_url: Option<String>,
    pub status: u32,
    /// Body decoded as UTF-8 with invalid sequences replaced.
    pub html: String,
    /// True when the body hit `max_body_bytes` and the rest was dropped.
    pub truncated: bool,
}

/// Performs a GET request and returns the (possibly truncated) body.
///
/// Follows redirects up to `cfg.max_redirects`. A non-2xx status is an error.
/// Runs in the current thread.
pub fn fetch_page(url: &str, cfg: &FetchConfig) -> Result<FetchedPage> {
    let mut body = BodyBuffer::new(cfg.max_body_bytes);

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(cfg.max_redirects)?;
    easy.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))?;
    easy.timeout(Duration::from_secs(cfg.timeout_secs))?;
    easy.useragent(&cfg.user_agent)?;
    easy.accept_encoding("")?;

    let outcome = {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| Ok(body.push(data)))?;
        transfer.perform()
    };
    match outcome {
        Ok(()) => {}
        // The write callback refused bytes past the cap; what we have is enough.
        Err(e) if e.is_write_error() && body.truncated() => {
            tracing::warn!(url, limit = cfg.max_body_bytes, "page body truncated");
        }
        Err(e) => return Err(e).with_context(|| format!("GET {url} failed")),
    }

    let status = easy.response_code().context("no response code")?;
    if !(200..300).contains(&status) {
        anyhow::bail!("GET {} returned HTTP {}", url, status);
    }
    let final_url = easy.effective_url().ok().flatten().map(str::to_string);

    tracing::debug!(
        url,
        status,
        bytes = body.len(),
        truncated = body.truncated(),
        "page fetched"
    );

    Ok(FetchedPage {
        final_url,
        status,
        truncated: body.truncated(),
        html: body.into_text(),
    })
}
