use reqwest::header::LOCATION;
use reqwest::{redirect, Client, StatusCode};
use tracing::{debug, info};

use crate::error::LookupError;
use crate::parser::entry::extract_entries;
use crate::parser::query::QueryResult;
use crate::parser::spellcheck::{extract_suggestions, Suggestion};
use crate::parser::{absolute_url, BASE_URL};

// The site serves bot-suspect clients a captcha page; identify as a browser.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

fn client(follow_redirects: bool) -> Result<Client, LookupError> {
    let policy = if follow_redirects {
        redirect::Policy::default()
    } else {
        redirect::Policy::none()
    };
    Client::builder()
        .user_agent(USER_AGENT)
        .redirect(policy)
        .build()
        .map_err(LookupError::Transport)
}

/// Look a word up on the dictionary page.
///
/// A direct hit (200) yields extracted entries; a redirect (302) means the
/// site did not recognize the spelling, so the redirect target is fetched and
/// its did-you-mean list becomes the result. Requests are strictly
/// sequential: the second depends on the first response's Location.
pub async fn lookup_word(word: &str) -> Result<QueryResult, LookupError> {
    let url = format!("{}/dictionary/{}", BASE_URL, word);
    debug!("fetching {}", url);
    let resp = client(false)?.get(&url).send().await?;

    match resp.status() {
        StatusCode::OK => {
            let body = resp.bytes().await?;
            let entries = extract_entries(&body)?;
            info!("extracted {} entries for '{}'", entries.len(), word);
            Ok(QueryResult {
                spelling_is_correct: true,
                entries,
                suggested_spellings: Vec::new(),
            })
        }
        StatusCode::FOUND => {
            let location = resp
                .headers()
                .get(LOCATION)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default();
            let suggestions = fetch_suggestions(&absolute_url(location)).await?;
            info!(
                "'{}' not recognized, {} spelling suggestions",
                word,
                suggestions.len()
            );
            Ok(QueryResult {
                spelling_is_correct: false,
                entries: Vec::new(),
                suggested_spellings: suggestions.into_iter().map(|s| s.text).collect(),
            })
        }
        other => Err(LookupError::UnexpectedStatus(other.as_u16())),
    }
}

/// Query the spell-check endpoint directly and return its ranked suggestions.
pub async fn lookup_spellcheck(word: &str) -> Result<Vec<Suggestion>, LookupError> {
    let url = format!(
        "{}/spellcheck/english/?q={}",
        BASE_URL,
        word.replace(' ', "+")
    );
    fetch_suggestions(&url).await
}

async fn fetch_suggestions(url: &str) -> Result<Vec<Suggestion>, LookupError> {
    debug!("fetching {}", url);
    let resp = client(true)?.get(url).send().await?;
    if resp.status() != StatusCode::OK {
        return Err(LookupError::UnexpectedStatus(resp.status().as_u16()));
    }
    let body = resp.bytes().await?;
    extract_suggestions(&body)
}
