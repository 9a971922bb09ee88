//! Stable registry of indicator names and their vector positions.
//!
//! The discriminant of each variant *is* its position in the feature vector.
//! The downstream classifier was trained against this exact layout, so
//! variants must never be renumbered, removed or reordered.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width of the feature vector.
pub const INDICATOR_COUNT: usize = 48;

/// What an indicator reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The raw URL string as submitted.
    Url,
    /// Parsed URL components (hostname, path, query).
    Location,
    /// The page markup; zero whenever the document is absent or empty.
    Html,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Indicator {
    NumDots = 0,
    SubdomainLevel = 1,
    PathLevel = 2,
    UrlLength = 3,
    NumDash = 4,
    NumDashInHostname = 5,
    AtSymbol = 6,
    TildeSymbol = 7,
    NumUnderscore = 8,
    NumPercent = 9,
    NumQueryComponents = 10,
    NumAmpersand = 11,
    NumHash = 12,
    NumNumericChars = 13,
    NoHttps = 14,
    RandomString = 15,
    IpAddress = 16,
    DomainInSubdomains = 17,
    DomainInPaths = 18,
    HttpsInHostname = 19,
    HostnameLength = 20,
    PathLength = 21,
    QueryLength = 22,
    DoubleSlashInPath = 23,
    NumSensitiveWords = 24,
    EmbeddedBrandName = 25,
    PctExtHyperlinks = 26,
    PctExtResourceUrls = 27,
    ExtFavicon = 28,
    InsecureForms = 29,
    RelativeFormAction = 30,
    ExtFormAction = 31,
    AbnormalFormAction = 32,
    PctNullSelfRedirectHyperlinks = 33,
    FrequentDomainNameMismatch = 34,
    FakeLinkInStatusBar = 35,
    RightClickDisabled = 36,
    PopUpWindow = 37,
    SubmitInfoToEmail = 38,
    IframeOrFrame = 39,
    MissingTitle = 40,
    ImagesOnlyInForm = 41,
    SubdomainLevelRt = 42,
    UrlLengthRt = 43,
    PctExtResourceUrlsRt = 44,
    AbnormalExtFormActionR = 45,
    ExtMetaScriptLinkRt = 46,
    PctExtNullSelfRedirectHyperlinksRt = 47,
}

impl Indicator {
    /// Every indicator, in vector order.
    pub const ALL: [Indicator; INDICATOR_COUNT] = [
        Indicator::NumDots,
        Indicator::SubdomainLevel,
        Indicator::PathLevel,
        Indicator::UrlLength,
        Indicator::NumDash,
        Indicator::NumDashInHostname,
        Indicator::AtSymbol,
        Indicator::TildeSymbol,
        Indicator::NumUnderscore,
        Indicator::NumPercent,
        Indicator::NumQueryComponents,
        Indicator::NumAmpersand,
        Indicator::NumHash,
        Indicator::NumNumericChars,
        Indicator::NoHttps,
        Indicator::RandomString,
        Indicator::IpAddress,
        Indicator::DomainInSubdomains,
        Indicator::DomainInPaths,
        Indicator::HttpsInHostname,
        Indicator::HostnameLength,
        Indicator::PathLength,
        Indicator::QueryLength,
        Indicator::DoubleSlashInPath,
        Indicator::NumSensitiveWords,
        Indicator::EmbeddedBrandName,
        Indicator::PctExtHyperlinks,
        Indicator::PctExtResourceUrls,
        Indicator::ExtFavicon,
        Indicator::InsecureForms,
        Indicator::RelativeFormAction,
        Indicator::ExtFormAction,
        Indicator::AbnormalFormAction,
        Indicator::PctNullSelfRedirectHyperlinks,
        Indicator::FrequentDomainNameMismatch,
        Indicator::FakeLinkInStatusBar,
        Indicator::RightClickDisabled,
        Indicator::PopUpWindow,
        Indicator::SubmitInfoToEmail,
        Indicator::IframeOrFrame,
        Indicator::MissingTitle,
        Indicator::ImagesOnlyInForm,
        Indicator::SubdomainLevelRt,
        Indicator::UrlLengthRt,
        Indicator::PctExtResourceUrlsRt,
        Indicator::AbnormalExtFormActionR,
        Indicator::ExtMetaScriptLinkRt,
        Indicator::PctExtNullSelfRedirectHyperlinksRt,
    ];

    /// Index of this indicator in the feature vector.
    pub fn position(self) -> usize {
        self as usize
    }

    /// Indicator at `position`, if in range.
    pub fn at(position: usize) -> Option<Indicator> {
        Self::ALL.get(position).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Indicator::NumDots => "num_dots",
            Indicator::SubdomainLevel => "subdomain_level",
            Indicator::PathLevel => "path_level",
            Indicator::UrlLength => "url_length",
            Indicator::NumDash => "num_dash",
            Indicator::NumDashInHostname => "num_dash_in_hostname",
            Indicator::AtSymbol => "at_symbol",
            Indicator::TildeSymbol => "tilde_symbol",
            Indicator::NumUnderscore => "num_underscore",
            Indicator::NumPercent => "num_percent",
            Indicator::NumQueryComponents => "num_query_components",
            Indicator::NumAmpersand => "num_ampersand",
            Indicator::NumHash => "num_hash",
            Indicator::NumNumericChars => "num_numeric_chars",
            Indicator::NoHttps => "no_https",
            Indicator::RandomString => "random_string",
            Indicator::IpAddress => "ip_address",
            Indicator::DomainInSubdomains => "domain_in_subdomains",
            Indicator::DomainInPaths => "domain_in_paths",
            Indicator::HttpsInHostname => "https_in_hostname",
            Indicator::HostnameLength => "hostname_length",
            Indicator::PathLength => "path_length",
            Indicator::QueryLength => "query_length",
            Indicator::DoubleSlashInPath => "double_slash_in_path",
            Indicator::NumSensitiveWords => "num_sensitive_words",
            Indicator::EmbeddedBrandName => "embedded_brand_name",
            Indicator::PctExtHyperlinks => "pct_ext_hyperlinks",
            Indicator::PctExtResourceUrls => "pct_ext_resource_urls",
            Indicator::ExtFavicon => "ext_favicon",
            Indicator::InsecureForms => "insecure_forms",
            Indicator::RelativeFormAction => "relative_form_action",
            Indicator::ExtFormAction => "ext_form_action",
            Indicator::AbnormalFormAction => "abnormal_form_action",
            Indicator::PctNullSelfRedirectHyperlinks => "pct_null_self_redirect_hyperlinks",
            Indicator::FrequentDomainNameMismatch => "frequent_domain_name_mismatch",
            Indicator::FakeLinkInStatusBar => "fake_link_in_status_bar",
            Indicator::RightClickDisabled => "right_click_disabled",
            Indicator::PopUpWindow => "pop_up_window",
            Indicator::SubmitInfoToEmail => "submit_info_to_email",
            Indicator::IframeOrFrame => "iframe_or_frame",
            Indicator::MissingTitle => "missing_title",
            Indicator::ImagesOnlyInForm => "images_only_in_form",
            Indicator::SubdomainLevelRt => "subdomain_level_rt",
            Indicator::UrlLengthRt => "url_length_rt",
            Indicator::PctExtResourceUrlsRt => "pct_ext_resource_urls_rt",
            Indicator::AbnormalExtFormActionR => "abnormal_ext_form_action_r",
            Indicator::ExtMetaScriptLinkRt => "ext_meta_script_link_rt",
            Indicator::PctExtNullSelfRedirectHyperlinksRt => {
                "pct_ext_null_self_redirect_hyperlinks_rt"
            }
        }
    }

    pub fn source(self) -> Source {
        use Indicator::*;
        match self {
            NumDots | UrlLength | NumDash | AtSymbol | TildeSymbol | NumUnderscore
            | NumPercent | NumAmpersand | NumHash | NumNumericChars | NoHttps | RandomString
            | NumSensitiveWords | EmbeddedBrandName | UrlLengthRt => Source::Url,

            SubdomainLevel | PathLevel | NumDashInHostname | NumQueryComponents | IpAddress
            | DomainInSubdomains | DomainInPaths | HttpsInHostname | HostnameLength
            | PathLength | QueryLength | DoubleSlashInPath | SubdomainLevelRt => Source::Location,

            PctExtHyperlinks
            | PctExtResourceUrls
            | ExtFavicon
            | InsecureForms
            | RelativeFormAction
            | ExtFormAction
            | AbnormalFormAction
            | PctNullSelfRedirectHyperlinks
            | FrequentDomainNameMismatch
            | FakeLinkInStatusBar
            | RightClickDisabled
            | PopUpWindow
            | SubmitInfoToEmail
            | IframeOrFrame
            | MissingTitle
            | ImagesOnlyInForm
            | PctExtResourceUrlsRt
            | AbnormalExtFormActionR
            | ExtMetaScriptLinkRt
            | PctExtNullSelfRedirectHyperlinksRt => Source::Html,
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognised indicator name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown indicator: {0}")]
pub struct UnknownIndicator(pub String);

impl FromStr for Indicator {
    type Err = UnknownIndicator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Indicator::ALL
            .into_iter()
            .find(|i| i.name() == s)
            .ok_or_else(|| UnknownIndicator(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_position_order() {
        for (i, indicator) in Indicator::ALL.iter().enumerate() {
            assert_eq!(indicator.position(), i, "{indicator} out of place");
        }
    }

    #[test]
    fn names_are_unique_and_round_trip() {
        let mut seen = std::collections::HashSet::new();
        for indicator in Indicator::ALL {
            assert!(seen.insert(indicator.name()), "duplicate {indicator}");
            assert_eq!(indicator.name().parse::<Indicator>().unwrap(), indicator);
        }
        assert!("num_slashes".parse::<Indicator>().is_err());
    }

    #[test]
    fn serde_name_matches_display() {
        for indicator in Indicator::ALL {
            let json = serde_json::to_string(&indicator).unwrap();
            assert_eq!(json, format!("\"{}\"", indicator.name()));
        }
    }

    #[test]
    fn at_out_of_range() {
        assert_eq!(Indicator::at(0), Some(Indicator::NumDots));
        assert_eq!(Indicator::at(47), Some(Indicator::PctExtNullSelfRedirectHyperlinksRt));
        assert_eq!(Indicator::at(INDICATOR_COUNT), None);
    }

    #[test]
    fn source_groups() {
        let count = |s: Source| Indicator::ALL.iter().filter(|i| i.source() == s).count();
        assert_eq!(count(Source::Url), 15);
        assert_eq!(count(Source::Location), 13);
        assert_eq!(count(Source::Html), 20);
    }
}
