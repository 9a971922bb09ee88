//! Heuristic indicators over page markup.
//!
//! Markup is scanned textually, never parsed into a DOM. Presence checks
//! match against the lower-cased document while the ratio families match the
//! raw text case-sensitively; the trained classifier expects exactly this
//! split. An empty document yields zero for every indicator.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::url_model;

fn pattern(re: &str) -> Regex {
    Regex::new(re).expect("hardcoded regex pattern is valid")
}

static ANCHOR_ABSOLUTE: Lazy<Regex> = Lazy::new(|| pattern(r#"<a\s+href="(https?://[^"/]+)"#));
static ANCHOR_ANY: Lazy<Regex> = Lazy::new(|| pattern(r"<a\s+href="));
static ANCHOR_NULL: Lazy<Regex> =
    Lazy::new(|| pattern(r#"<a\s+href="(javascript:void\(0\)|#)""#));

static RESOURCE_ABSOLUTE: Lazy<Regex> =
    Lazy::new(|| pattern(r#"<(img|script|link)\s+.*?src\s*=\s*"(https?://[^"]+)"#));
static RESOURCE_ANY: Lazy<Regex> = Lazy::new(|| pattern(r#"<(img|script|link)\s+.*?\s*=\s*""#));

static META_ABSOLUTE: Lazy<Regex> =
    Lazy::new(|| pattern(r#"<(meta|script|link)\s+.*?src\s*=\s*"(https?://[^"]+)"#));
static META_ANY: Lazy<Regex> = Lazy::new(|| pattern(r#"<(meta|script|link)\s+.*?\s*=\s*""#));

static SRC_ABSOLUTE: Lazy<Regex> = Lazy::new(|| pattern(r#"src="(https?://[^"]+)"#));
static SRC_ANY: Lazy<Regex> = Lazy::new(|| pattern(r#"src=""#));

static FORM_ABSOLUTE_ACTION: Lazy<Regex> =
    Lazy::new(|| pattern(r#"<form.*?action="https?://[^"]+">"#));
static FORM_RELATIVE_ACTION: Lazy<Regex> = Lazy::new(|| pattern(r#"<form.*?action="/[^"]+">"#));

/// Page markup plus a lower-cased copy for case-insensitive checks.
#[derive(Debug, Clone)]
pub struct HtmlDocument<'a> {
    raw: &'a str,
    lower: String,
}

impl<'a> HtmlDocument<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            lower: raw.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn raw(&self) -> &str {
        self.raw
    }

    fn has(&self, needle: &str) -> bool {
        self.lower.contains(needle)
    }
}

/// `part / whole * 100`, zero for an empty denominator, clamped to `[0, 100]`.
fn percentage(part: f64, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part / whole as f64 * 100.0).clamp(0.0, 100.0)
}

/// A link is external when its host differs from the page's. Without a page
/// host every absolute link counts as external.
fn is_external(link: &str, page_host: Option<&str>) -> bool {
    match page_host {
        None => true,
        Some(page) => url_model::parse(link).hostname() != Some(page),
    }
}

/// Percentage of absolute captures (group `group`) pointing off-site, over all
/// matches of `all`.
fn external_ratio(
    doc: &HtmlDocument<'_>,
    absolute: &Regex,
    group: usize,
    all: &Regex,
    page_host: Option<&str>,
) -> f64 {
    let external = absolute
        .captures_iter(doc.raw)
        .filter_map(|caps| caps.get(group))
        .filter(|m| is_external(m.as_str(), page_host))
        .count();
    percentage(external as f64, all.find_iter(doc.raw).count())
}

pub fn pct_ext_hyperlinks(doc: &HtmlDocument<'_>, page_host: Option<&str>) -> f64 {
    external_ratio(doc, &ANCHOR_ABSOLUTE, 1, &ANCHOR_ANY, page_host)
}

/// Off-site `src` targets on `<img>`, `<script>` and `<link>` tags.
pub fn pct_ext_resource_urls(doc: &HtmlDocument<'_>, page_host: Option<&str>) -> f64 {
    external_ratio(doc, &RESOURCE_ABSOLUTE, 2, &RESOURCE_ANY, page_host)
}

pub fn ext_favicon(doc: &HtmlDocument<'_>) -> bool {
    doc.has(r#"<link rel="icon""#) || doc.has(r#"<link rel="shortcut icon""#)
}

pub fn insecure_forms(doc: &HtmlDocument<'_>) -> bool {
    doc.has(r#"<form action="http://"#)
}

pub fn relative_form_action(doc: &HtmlDocument<'_>) -> bool {
    doc.has(r#"<form action="/"#)
}

pub fn ext_form_action(doc: &HtmlDocument<'_>) -> bool {
    doc.has(r#"<form action="http"#)
}

/// A `<form>` exists but none starts with an `action="..."` attribute.
pub fn abnormal_form_action(doc: &HtmlDocument<'_>) -> bool {
    doc.has("<form") && !doc.has(r#"<form action=""#)
}

/// Anchors to `#` or `javascript:void(0)` over all anchors.
pub fn pct_null_self_redirect_hyperlinks(doc: &HtmlDocument<'_>) -> f64 {
    percentage(
        ANCHOR_NULL.find_iter(doc.raw).count() as f64,
        ANCHOR_ANY.find_iter(doc.raw).count(),
    )
}

/// Page links over both plain `http` and `https`.
pub fn frequent_domain_name_mismatch(doc: &HtmlDocument<'_>) -> bool {
    doc.has(r#"href="http"#) && doc.has(r#"href="https"#)
}

pub fn fake_link_in_status_bar(doc: &HtmlDocument<'_>) -> bool {
    doc.has(r#"onmouseover="window.status"#)
}

pub fn right_click_disabled(doc: &HtmlDocument<'_>) -> bool {
    doc.has(r#"oncontextmenu="return false""#)
}

pub fn pop_up_window(doc: &HtmlDocument<'_>) -> bool {
    doc.has("window.open")
}

pub fn submit_info_to_email(doc: &HtmlDocument<'_>) -> bool {
    doc.has("mailto:")
}

pub fn iframe_or_frame(doc: &HtmlDocument<'_>) -> bool {
    doc.has("<iframe") || doc.has("<frame")
}

pub fn missing_title(doc: &HtmlDocument<'_>) -> bool {
    !doc.is_empty() && !doc.has("<title>")
}

pub fn images_only_in_form(doc: &HtmlDocument<'_>) -> bool {
    doc.has("<form") && doc.has("<img") && !doc.has("<a")
}

/// Off-site `src="..."` attributes anywhere in the page, regardless of tag.
pub fn pct_ext_resource_urls_rt(doc: &HtmlDocument<'_>, page_host: Option<&str>) -> f64 {
    external_ratio(doc, &SRC_ABSOLUTE, 1, &SRC_ANY, page_host)
}

/// Share of absolute form actions not offset by relative ones.
pub fn abnormal_ext_form_action_r(doc: &HtmlDocument<'_>) -> f64 {
    let absolute = FORM_ABSOLUTE_ACTION.find_iter(doc.raw).count();
    let relative = FORM_RELATIVE_ACTION.find_iter(doc.raw).count();
    percentage(absolute as f64 - relative as f64, absolute)
}

pub fn ext_meta_script_link_rt(doc: &HtmlDocument<'_>, page_host: Option<&str>) -> f64 {
    external_ratio(doc, &META_ABSOLUTE, 2, &META_ANY, page_host)
}

pub fn pct_ext_null_self_redirect_hyperlinks_rt(doc: &HtmlDocument<'_>) -> f64 {
    pct_null_self_redirect_hyperlinks(doc)
}
