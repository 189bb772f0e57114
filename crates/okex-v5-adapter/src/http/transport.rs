/*
[INPUT]:  Fully-formed HTTP requests (method, absolute URL, headers, body)
[OUTPUT]: Raw response bodies or transport errors
[POS]:    HTTP layer - pluggable wire transport behind the client
[UPDATE]: When adding transport backends or changing status handling
*/

use std::fmt;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use tracing::debug;

use crate::http::client::ClientConfig;
use crate::http::{OkexError, Result};

/// A request ready to put on the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub authenticated: bool,
}

impl HttpRequest {
    /// Look up a header value by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Sends requests and returns the raw body.
///
/// Rate limiting and pooling belong to implementations; the client only
/// builds, signs and decodes.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<String>;
}

/// Default transport backed by reqwest
#[derive(Clone)]
pub struct ReqwestTransport {
    http_client: Client,
}

impl fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReqwestTransport").finish_non_exhaustive()
    }
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;
        Ok(Self { http_client })
    }

    fn header_map(headers: &[(String, String)]) -> Result<HeaderMap> {
        let mut map = HeaderMap::with_capacity(headers.len());
        for (name, value) in headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| OkexError::Config(format!("invalid header name {name}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| OkexError::Config(format!("invalid header value for {name}: {e}")))?;
            map.insert(name, value);
        }
        Ok(map)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<String> {
        let headers = Self::header_map(&request.headers)?;
        let mut builder = self
            .http_client
            .request(request.method.clone(), &request.url)
            .headers(headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(status = status.as_u16(), url = %request.url, "response received");

        if !status.is_success() {
            return Err(OkexError::status_error(status, text));
        }
        Ok(text)
    }
}
