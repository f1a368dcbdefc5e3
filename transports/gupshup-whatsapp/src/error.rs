use reqwest::header::InvalidHeaderValue;
use thiserror::Error;

pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T, E = GupshupError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum GupshupError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("{0}")]
    Request(#[from] reqwest::Error),
    #[error("API key is not a valid header value")]
    InvalidApiKey(#[from] InvalidHeaderValue),
    #[error("transport error: {0}")]
    Transport(BoxedError),
    #[error("failed to encode message: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to encode form body: {0}")]
    Form(#[from] serde_urlencoded::ser::Error),
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("Gupshup rejected the message ({status}): {message}")]
    Api { status: String, message: String },
    #[error("invalid credential format, expected \"<app_name>:<api_key>\"")]
    InvalidCredentialFormat,
}

impl GupshupError {
    /// Wraps an error raised by a custom [`HttpSender`](crate::transport::HttpSender)
    /// or [`RequestBuilder`](crate::transport::RequestBuilder).
    pub fn transport(error: impl Into<BoxedError>) -> Self {
        Self::Transport(error.into())
    }
}
