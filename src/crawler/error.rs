use reqwest::StatusCode;
use thiserror::Error;

/// Failures that can end a single page visit. All of them are recovered at
/// the visit boundary: the offending page is skipped and the run continues.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(StatusCode),

    #[error("could not parse document: {0}")]
    Parse(String),
}
