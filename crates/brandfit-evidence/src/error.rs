use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvidenceError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}
