use reqwest::StatusCode;

/// The request never produced a usable response body.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("URL parse error: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("HTTP status {0} for {1}")]
    HttpStatus(StatusCode, String),
}

/// The server answered, but the body could not be turned into a value.
/// The body has been consumed and cannot be read again.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("failed to decompress response body: {0}")]
    Decompress(#[from] std::io::Error),
    #[error("failed to parse response JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl ApiError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, ApiError::Decode(_))
    }
}
