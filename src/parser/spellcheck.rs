use std::sync::LazyLock;

use scraper::{Html, Selector};
use serde::Serialize;

use super::absolute_url;
use crate::error::LookupError;

static SUGGESTION_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("ul.didyoumean > li > a").unwrap());

/// A candidate corrected spelling with its direct lookup URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Suggestion {
    pub text: String,
    pub url: String,
}

/// Extract the ranked did-you-mean list from a spell-check page, in document
/// order. An anchor without an href yields an empty URL, not an error.
pub fn extract_suggestions(body: &[u8]) -> Result<Vec<Suggestion>, LookupError> {
    let markup = std::str::from_utf8(body)?;
    let doc = Html::parse_document(markup);

    let suggestions = doc
        .select(&SUGGESTION_SEL)
        .map(|anchor| Suggestion {
            text: anchor.text().collect::<String>().trim().to_string(),
            url: anchor
                .value()
                .attr("href")
                .map(absolute_url)
                .unwrap_or_default(),
        })
        .collect();

    Ok(suggestions)
}

// ── Tests ──
