use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("no element with id `{id}` on the page")]
    MissingElement { id: String },

    #[error("search request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("search request to {path} returned status {status}")]
    Status { status: u16, path: String },

    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
}
