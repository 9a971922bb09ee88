//! Tests for extract and classify argument parsing.

use super::parse;
use crate::cli::commands::PageSource;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn cli_parse_extract_url_only() {
    match parse(&["phishguard", "extract", "http://example.com/login"]) {
        CliCommand::Extract {
            url,
            html,
            fetch,
            json,
        } => {
            assert_eq!(url, "http://example.com/login");
            assert!(html.is_none());
            assert!(!fetch);
            assert!(!json);
        }
        _ => panic!("expected Extract"),
    }
}

#[test]
fn cli_parse_extract_with_html_and_json() {
    match parse(&[
        "phishguard",
        "extract",
        "http://example.com",
        "--html",
        "page.html",
        "--json",
    ]) {
        CliCommand::Extract { html, json, .. } => {
            assert_eq!(html, Some(PathBuf::from("page.html")));
            assert!(json);
        }
        _ => panic!("expected Extract"),
    }
}

#[test]
fn cli_parse_extract_fetch() {
    match parse(&["phishguard", "extract", "http://example.com", "--fetch"]) {
        CliCommand::Extract { fetch, html, .. } => {
            assert!(fetch);
            assert_eq!(PageSource::from_args(html, fetch), PageSource::Fetch);
        }
        _ => panic!("expected Extract"),
    }
}

#[test]
fn cli_rejects_html_with_fetch() {
    let res = Cli::try_parse_from([
        "phishguard",
        "extract",
        "http://example.com",
        "--fetch",
        "--html",
        "x.html",
    ]);
    assert!(res.is_err());
}

#[test]
fn cli_parse_classify_with_model() {
    match parse(&[
        "phishguard",
        "classify",
        "http://192.168.0.1/admin",
        "--model",
        "/tmp/model.json",
    ]) {
        CliCommand::Classify {
            url,
            model,
            fetch,
            json,
            ..
        } => {
            assert_eq!(url, "http://192.168.0.1/admin");
            assert_eq!(model, Some(PathBuf::from("/tmp/model.json")));
            assert!(!fetch);
            assert!(!json);
        }
        _ => panic!("expected Classify"),
    }
}

#[test]
fn cli_requires_url() {
    assert!(Cli::try_parse_from(["phishguard", "classify"]).is_err());
}

#[test]
fn page_source_from_args() {
    assert_eq!(PageSource::from_args(None, false), PageSource::None);
    assert_eq!(
        PageSource::from_args(Some("a.html".into()), false),
        PageSource::File("a.html".into())
    );
}
