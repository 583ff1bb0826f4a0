use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to build HTTP client: {source}")]
    BuildClient {
        #[source]
        source: reqwest::Error,
    },
    #[error("Request failed: {source}")]
    Request {
        #[source]
        source: reqwest::Error,
    },
    #[error("Invalid referer value '{value}': {source}")]
    InvalidReferer {
        value: String,
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },
}
