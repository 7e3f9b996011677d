use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VideoError {
    #[error("YOUTUBE_API_KEY is not configured")]
    MissingApiKey,

    #[error("no search keywords provided")]
    EmptyQuery,

    #[error("video search timed out after {0:?}")]
    Timeout(Duration),

    #[error("video search transport error: {0}")]
    Transport(String),

    #[error("video search returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("video search response could not be decoded: {0}")]
    Decode(String),

    #[error("HTTP client setup failed: {0}")]
    Client(String),
}

impl VideoError {
    /// Whether another attempt could succeed.
    ///
    /// 4xx responses (bad query, bad or exhausted key) and configuration
    /// problems are permanent.
    pub fn is_retryable(&self) -> bool {
        match self {
            VideoError::Timeout(_) | VideoError::Transport(_) => true,
            VideoError::Status { status, .. } => !(400..500).contains(status),
            VideoError::MissingApiKey
            | VideoError::EmptyQuery
            | VideoError::Decode(_)
            | VideoError::Client(_) => false,
        }
    }
}
