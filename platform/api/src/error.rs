use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failures before a response body is in hand.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

/// The body arrived but is not the expected JSON shape.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("response body is not valid employee JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl ApiError {
    /// Stable code for logs; the view never shows it.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Fetch(FetchError::Client(_)) => "CLIENT",
            ApiError::Fetch(FetchError::Transport { .. }) => "TRANSPORT",
            ApiError::Fetch(FetchError::Status { .. }) => "STATUS",
            ApiError::Decode(_) => "DECODE",
        }
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, ApiError::Decode(_))
    }
}
