//! # HTTP transport
//!
//! One authenticated JSON POST per call, nothing else: no retries, no
//! deadline, no cancellation. Callers that need a timeout impose it around
//! the call.

use reqwest::header::CONTENT_TYPE;
use std::fmt;
use tracing::{debug, warn};
use url::Url;

/// A username/password pair for HTTP Basic auth.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

// Keeps the password out of logs.
impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Errors raised while performing the HTTP round trip.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Failed to resolve path '{path}' against the base URL: '{source}'")]
    InvalidPath {
        path: String,
        source: url::ParseError,
    },

    #[error("Failed to perform the HTTP request: '{0}'")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status. The raw body is kept
    /// verbatim; error bodies are not valid response JSON.
    #[error("Server responded with HTTP {status}: '{body}'")]
    Status { status: u16, body: String },
}

#[derive(Debug, Clone)]
pub(crate) struct HttpTransport {
    http: reqwest::Client,
    base: Url,
    auth: Option<BasicAuth>,
}

impl HttpTransport {
    pub(crate) fn new(base: Url, auth: Option<BasicAuth>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base,
            auth,
        }
    }

    pub(crate) fn base(&self) -> &Url {
        &self.base
    }

    /// Sends exactly one POST of `body` to `path` resolved against the base
    /// URL, and returns the raw response text on success.
    pub(crate) async fn post(&self, path: &str, body: String) -> Result<String, TransportError> {
        let url = self
            .base
            .join(path)
            .map_err(|source| TransportError::InvalidPath {
                path: path.to_string(),
                source,
            })?;

        debug!(%url, "sending request");

        let mut request = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        if let Some(auth) = &self.auth {
            request = request.basic_auth(&auth.username, Some(&auth.password));
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "server returned an error status");
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}
