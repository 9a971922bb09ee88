//! `phishguard indicators` – list the vector layout.

use phishguard_core::features::{Indicator, Source};

pub fn run_indicators() {
    println!("{:<4} {:<42} {}", "IDX", "INDICATOR", "SOURCE");
    for indicator in Indicator::ALL {
        let source = match indicator.source() {
            Source::Url => "url",
            Source::Location => "parsed-url",
            Source::Html => "html",
        };
        println!("{:<4} {:<42} {}", indicator.position(), indicator.name(), source);
    }
}
