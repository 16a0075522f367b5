use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

/// What a transport hands back: the HTTP status and the raw body text.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// The single capability the request pipeline needs from an HTTP layer.
///
/// Implementations own all transport policy (TLS, pooling, timeouts);
/// the pipeline never retries. A failed exchange that still produced a
/// server response should surface as `Error::Transport` carrying the
/// status and body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        url: &str,
        content_type: &str,
        body: String,
        basic_auth: Option<&(String, String)>,
    ) -> Result<HttpResponse>;
}

/// Knobs for the built-in reqwest transport. Timeout policy lives here,
/// not in the request pipeline.
#[derive(Debug, Clone, Default)]
pub struct TransportOptions {
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
    pub accept_invalid_certs: bool,
}

/// Default transport backed by a reqwest client.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        Self::with_options(TransportOptions::default())
    }

    pub fn with_options(options: TransportOptions) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = options.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if options.accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }
        let client = builder
            .build()
            .map_err(|err| Error::Configuration(format!("failed to build HTTP client: {err}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        url: &str,
        content_type: &str,
        body: String,
        basic_auth: Option<&(String, String)>,
    ) -> Result<HttpResponse> {
        let mut request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, content_type)
            .body(body);
        if let Some((user, password)) = basic_auth {
            request = request.basic_auth(user, Some(password));
        }

        let response = request.send().await.map_err(|err| Error::Transport {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|err| Error::Transport {
            status: Some(status.as_u16()),
            message: format!("failed to read response body: {err}"),
        })?;

        if !status.is_success() {
            return Err(Error::Transport {
                status: Some(status.as_u16()),
                message: text,
            });
        }

        Ok(HttpResponse {
            status: status.as_u16(),
            body: text,
        })
    }
}
