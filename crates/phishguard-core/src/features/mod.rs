//! Feature extraction: raw URL (+ optional page markup) to a fixed-order vector.
//!
//! Each indicator is an independent pure function. [`extract_features`] walks
//! the [`Indicator`] registry and stores every value at the indicator's own
//! position, so the layout never depends on evaluation or declaration order.
//!
//! Extraction is total: malformed URLs and missing markup degrade the affected
//! indicators to zero instead of failing.

pub mod html;
mod indicator;
pub mod lexical;
pub mod location;
mod vector;

pub use html::HtmlDocument;
pub use indicator::{Indicator, Source, UnknownIndicator, INDICATOR_COUNT};
pub use vector::{FeatureVector, NamedValue};

use crate::url_model::{self, ParsedUrl};

/// Inputs shared by every indicator for one extraction.
struct Page<'a> {
    url: &'a str,
    parsed: ParsedUrl,
    html: Option<HtmlDocument<'a>>,
}

impl Page<'_> {
    fn host(&self) -> Option<&str> {
        self.parsed.hostname()
    }
}

fn count(n: usize) -> f64 {
    n as f64
}

fn flag(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

/// Computes all indicators for `url` and the optional page markup.
///
/// An empty `html` is treated the same as `None`.
pub fn extract_features(url: &str, html: Option<&str>) -> FeatureVector {
    let page = Page {
        url,
        parsed: url_model::parse(url),
        html: html.filter(|doc| !doc.is_empty()).map(HtmlDocument::new),
    };
    tracing::debug!(
        url_chars = url.chars().count(),
        has_host = page.host().is_some(),
        html_bytes = page.html.as_ref().map_or(0, |doc| doc.raw().len()),
        "extracting features"
    );

    let mut vector = FeatureVector::zeroed();
    for indicator in Indicator::ALL {
        vector.set(indicator, evaluate(indicator, &page));
    }
    vector
}

fn evaluate(indicator: Indicator, page: &Page<'_>) -> f64 {
    use Indicator::*;

    let url = page.url;
    let parsed = &page.parsed;
    match indicator {
        NumDots => count(lexical::num_dots(url)),
        SubdomainLevel | SubdomainLevelRt => count(location::subdomain_level(parsed)),
        PathLevel => count(location::path_level(parsed)),
        UrlLength | UrlLengthRt => count(lexical::url_length(url)),
        NumDash => count(lexical::num_dash(url)),
        NumDashInHostname => count(location::num_dash_in_hostname(parsed)),
        AtSymbol => flag(lexical::at_symbol(url)),
        TildeSymbol => flag(lexical::tilde_symbol(url)),
        NumUnderscore => count(lexical::num_underscore(url)),
        NumPercent => count(lexical::num_percent(url)),
        NumQueryComponents => count(location::num_query_components(parsed)),
        NumAmpersand => count(lexical::num_ampersand(url)),
        NumHash => count(lexical::num_hash(url)),
        NumNumericChars => count(lexical::num_numeric_chars(url)),
        NoHttps => flag(lexical::no_https(url)),
        RandomString => count(lexical::random_string(url)),
        IpAddress => flag(location::ip_address(parsed)),
        DomainInSubdomains => count(location::domain_in_subdomains(parsed)),
        DomainInPaths => flag(location::domain_in_paths(parsed)),
        HttpsInHostname => flag(location::https_in_hostname(parsed)),
        HostnameLength => count(location::hostname_length(parsed)),
        PathLength => count(location::path_length(parsed)),
        QueryLength => count(location::query_length(parsed)),
        DoubleSlashInPath => flag(location::double_slash_in_path(parsed)),
        NumSensitiveWords => count(lexical::num_sensitive_words(url)),
        EmbeddedBrandName => flag(lexical::embedded_brand_name(url)),
        _ => match &page.html {
            Some(doc) => evaluate_html(indicator, doc, page.host()),
            None => 0.0,
        },
    }
}

fn evaluate_html(indicator: Indicator, doc: &HtmlDocument<'_>, host: Option<&str>) -> f64 {
    use Indicator::*;

    match indicator {
        PctExtHyperlinks => html::pct_ext_hyperlinks(doc, host),
        PctExtResourceUrls => html::pct_ext_resource_urls(doc, host),
        ExtFavicon => flag(html::ext_favicon(doc)),
        InsecureForms => flag(html::insecure_forms(doc)),
        RelativeFormAction => flag(html::relative_form_action(doc)),
        ExtFormAction => flag(html::ext_form_action(doc)),
        AbnormalFormAction => flag(html::abnormal_form_action(doc)),
        PctNullSelfRedirectHyperlinks => html::pct_null_self_redirect_hyperlinks(doc),
        FrequentDomainNameMismatch => flag(html::frequent_domain_name_mismatch(doc)),
        FakeLinkInStatusBar => flag(html::fake_link_in_status_bar(doc)),
        RightClickDisabled => flag(html::right_click_disabled(doc)),
        PopUpWindow => flag(html::pop_up_window(doc)),
        SubmitInfoToEmail => flag(html::submit_info_to_email(doc)),
        IframeOrFrame => flag(html::iframe_or_frame(doc)),
        MissingTitle => flag(html::missing_title(doc)),
        ImagesOnlyInForm => flag(html::images_only_in_form(doc)),
        PctExtResourceUrlsRt => html::pct_ext_resource_urls_rt(doc, host),
        AbnormalExtFormActionR => html::abnormal_ext_form_action_r(doc),
        ExtMetaScriptLinkRt => html::ext_meta_script_link_rt(doc, host),
        PctExtNullSelfRedirectHyperlinksRt => html::pct_ext_null_self_redirect_hyperlinks_rt(doc),
        _ => {
            debug_assert_ne!(indicator.source(), Source::Html);
            0.0
        }
    }
}
