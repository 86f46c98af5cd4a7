#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("page markup is not a parseable document: {0}")]
    MarkupParse(#[from] std::str::Utf8Error),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response status: {0}")]
    UnexpectedStatus(u16),
}
