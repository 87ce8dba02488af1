use thiserror::Error;

/// Why a generation attempt produced nothing usable.
///
/// The adapter logs these and falls back; callers never see them.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("generation timed out")]
    Timeout,

    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response contained no text")]
    EmptyResponse,

    #[error("generator unavailable: {0}")]
    Unavailable(String),
}
