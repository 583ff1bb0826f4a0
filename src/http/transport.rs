use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::HeaderMap;

use crate::error::HttpError;
use crate::target::Target;

/// Wire seam between the worker loop and the network, so tests can drive
/// workers against a scripted transport.
///
/// `fetch` issues exactly one GET with the given header set and returns the
/// response status once the body has been drained; any transport-level
/// failure (connect, timeout, TLS, premature close) surfaces as an error.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, headers: HeaderMap) -> Result<u16, HttpError>;
}

/// Production transport: the shared connection pool all workers issue
/// requests through.
pub struct HttpTransport {
    client: Client,
    url: String,
}

impl HttpTransport {
    #[must_use]
    pub fn new(client: Client, target: &Target) -> Self {
        Self {
            client,
            url: target.url().to_owned(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, headers: HeaderMap) -> Result<u16, HttpError> {
        let response = self
            .client
            .get(&self.url)
            .headers(headers)
            .send()
            .await
            .map_err(|err| HttpError::Request { source: err })?;
        let status = response.status().as_u16();
        // Drain the body; a close mid-body is a transport error, not a
        // received response.
        response
            .bytes()
            .await
            .map_err(|err| HttpError::Request { source: err })?;
        Ok(status)
    }
}
