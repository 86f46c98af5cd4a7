pub mod entry;
pub mod query;
pub mod spellcheck;

use scraper::{ElementRef, Selector};

pub const BASE_URL: &str = "https://www.ldoceonline.com";

/// Concatenated text of every node under `scope` matching `selector`, trimmed.
/// Zero matches yield an empty string, never an error.
pub(crate) fn collect_text(scope: ElementRef<'_>, selector: &Selector) -> String {
    let mut out = String::new();
    for node in scope.select(selector) {
        out.extend(node.text());
    }
    out.trim().to_string()
}

/// Prefix the site origin onto root-relative hrefs and redirect targets.
pub(crate) fn absolute_url(href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        href.to_string()
    } else {
        format!("{}{}", BASE_URL, href)
    }
}

// ── Tests ──
