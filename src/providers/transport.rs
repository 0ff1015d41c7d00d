use std::time::Duration;

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("mailvet/", env!("CARGO_PKG_VERSION"));

/// One GET request: endpoint, query pairs, extra headers.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ApiRequest<'a> {
    pub url: &'a str,
    pub query: &'a [(&'a str, &'a str)],
    pub headers: &'a [(&'a str, &'a str)],
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP client initialization failed: {source}")]
    ClientInit {
        #[source]
        source: reqwest::Error,
    },
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("response from {url} is not valid JSON: {source}")]
    Json {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Issue one GET and decode the JSON body. The real implementation speaks
/// HTTP; tests substitute a stub.
pub(crate) trait FetchJson {
    fn fetch_json(&self, request: &ApiRequest<'_>) -> Result<Value, TransportError>;
}

/// Blocking reqwest-backed transport shared by the remote clients.
#[derive(Debug)]
pub(crate) struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub(crate) fn new() -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|source| TransportError::ClientInit { source })?;
        Ok(Self { client })
    }
}

impl FetchJson for HttpTransport {
    fn fetch_json(&self, request: &ApiRequest<'_>) -> Result<Value, TransportError> {
        debug!(url = request.url, "issuing provider request");

        let mut builder = self.client.get(request.url).query(request.query);
        for (name, value) in request.headers {
            builder = builder.header(*name, *value);
        }

        let response = builder.send().map_err(|source| TransportError::Request {
            url: request.url.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                url: request.url.to_string(),
                status: status.as_u16(),
            });
        }

        response.json().map_err(|source| TransportError::Json {
            url: request.url.to_string(),
            source,
        })
    }
}
