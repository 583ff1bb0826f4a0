use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Target host must not be empty.")]
    TargetHostEmpty,
    #[error("Target port must be in 1-65535.")]
    TargetPortZero,
    #[error("Invalid target URL '{url}': {source}")]
    InvalidTargetUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Worker count {value} is outside {min}-{max}.")]
    WorkerCountOutOfRange { value: usize, min: usize, max: usize },
    #[error("Authorization not confirmed. Run against targets you own or are authorized to test.")]
    AuthorizationDeclined,
}
