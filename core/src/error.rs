use thiserror::Error;

/// Failure to obtain the race document. Terminal for the session.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("network error fetching {url}: {message}")]
    Network { url: String, message: String },

    #[error("unexpected HTTP status {status} fetching {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("malformed race document: {0}")]
    Parse(#[from] serde_json::Error),
}
