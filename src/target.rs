use url::Url;

use crate::error::{AppError, AppResult, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

/// The endpoint under test. Built once from validated input and read-only
/// for the duration of the run.
#[derive(Debug, Clone)]
pub struct Target {
    scheme: Scheme,
    host: String,
    port: u16,
    url: String,
}

impl Target {
    /// # Errors
    ///
    /// Returns a validation error when the host is empty, the port is zero,
    /// or the resulting URL does not parse.
    pub fn new(host: &str, port: u16, use_tls: bool) -> AppResult<Self> {
        let host = host.trim();
        if host.is_empty() {
            return Err(AppError::validation(ValidationError::TargetHostEmpty));
        }
        if port == 0 {
            return Err(AppError::validation(ValidationError::TargetPortZero));
        }
        let scheme = if use_tls { Scheme::Https } else { Scheme::Http };
        let rendered = format!("{}://{}:{}", scheme.as_str(), host, port);
        // Parse only to validate host syntax; the rendered form is kept
        // verbatim so explicit default ports survive.
        Url::parse(&rendered).map_err(|err| {
            AppError::validation(ValidationError::InvalidTargetUrl {
                url: rendered.clone(),
                source: err,
            })
        })?;
        Ok(Self {
            scheme,
            host: host.to_owned(),
            port,
            url: rendered,
        })
    }

    #[must_use]
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// `{scheme}://{host}:{port}`, as issued on the wire.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}
