use serde_json::Value;
use thiserror::Error;

/// Every failure of a panel request. Callers treat all variants the same way.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-2xx response; the body is kept as JSON when it parses.
    #[error("server rejected request with status {status}: {body}")]
    Rejected { status: u16, body: Value },

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid endpoint: {0}")]
    Endpoint(String),
}

impl ApiError {
    pub fn rejected(status: u16, raw_body: &str) -> Self {
        let body = serde_json::from_str(raw_body)
            .unwrap_or_else(|_| Value::String(raw_body.to_string()));
        ApiError::Rejected { status, body }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}
