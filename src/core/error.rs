use crate::core::Provider;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VideoError {
    /// The URL belongs to neither Vimeo nor YouTube.
    #[error("{0} is not supported")]
    UnsupportedUrl(String),

    /// The provider was recognized but no video id could be found in the URL.
    #[error("could not extract a {provider} video id from {url}")]
    MissingId { provider: Provider, url: String },

    /// The provider's API needs a key and none was supplied.
    #[error("no API key supplied for {0}")]
    MissingCredential(Provider),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid JSON in API response: {0}")]
    Json(#[from] serde_json::Error),

    /// The API answered with JSON that lacks the expected field.
    #[error("{provider} API response has no `{field}`")]
    UnexpectedResponse {
        provider: Provider,
        field: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, VideoError>;
