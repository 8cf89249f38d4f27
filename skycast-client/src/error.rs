use thiserror::Error;

/// Internal transport failure causes. These never cross the broker
/// boundary; the broker reduces them all to the "No Api Found" result and
/// keeps the cause for its log line.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    UnexpectedStatus(u16),

    #[error("response body did not decode: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("invalid base url: {0}")]
    Url(#[from] url::ParseError),
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;
