/*
[INPUT]:  HTTP configuration (base URL, API path/version, timeouts, credentials)
[OUTPUT]: Signed requests sent through a transport, envelopes decoded into typed results
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::time::{Instant, timeout_at};
use tracing::debug;

use crate::http::endpoint::Endpoint;
use crate::http::envelope::decode_response;
use crate::http::transport::{HttpRequest, ReqwestTransport, Transport};
use crate::http::{OkexError, RequestSigner, Result};

/// Base URL for the OKEx REST API
pub const DEFAULT_BASE_URL: &str = "https://www.okex.com";
const DEFAULT_API_PATH: &str = "api/";
const DEFAULT_API_VERSION: &str = "v5/";

/// Requests signed more than 30s before they reach the exchange are rejected
const REQUEST_WINDOW: Duration = Duration::from_secs(30);

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_path: String,
    pub api_version: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Deadline applied from the moment the request timestamp is issued
    pub request_window: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_path: DEFAULT_API_PATH.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            request_window: REQUEST_WINDOW,
        }
    }
}

/// Credentials for authenticated requests
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub api_key: String,
    pub secret: String,
    /// Passphrase chosen when the API key was created
    pub passphrase: String,
    /// Route orders to the demo-trading environment
    #[serde(default)]
    pub testnet: bool,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("testnet", &self.testnet)
            .finish_non_exhaustive()
    }
}

/// Main HTTP client for the OKEx v5 API
#[derive(Clone)]
pub struct OkexClient {
    config: ClientConfig,
    base_url: Url,
    credentials: Option<Credentials>,
    signer: Option<RequestSigner>,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for OkexClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OkexClient")
            .field("base_url", &self.base_url.as_str())
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

impl OkexClient {
    /// Create a public-only client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a public-only client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let transport = Arc::new(ReqwestTransport::new(&config)?);
        Self::with_transport(config, None, transport)
    }

    /// Create a client able to call authenticated endpoints
    pub fn with_credentials(config: ClientConfig, credentials: Credentials) -> Result<Self> {
        let transport = Arc::new(ReqwestTransport::new(&config)?);
        Self::with_transport(config, Some(credentials), transport)
    }

    /// Create a client over a caller-supplied transport
    pub fn with_transport(
        mut config: ClientConfig,
        credentials: Option<Credentials>,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        ensure_trailing_slash(&mut config.api_path);
        ensure_trailing_slash(&mut config.api_version);
        let signer = credentials
            .as_ref()
            .map(|creds| RequestSigner::new(creds.secret.clone()));

        Ok(Self {
            config,
            base_url,
            credentials,
            signer,
            transport,
        })
    }

    /// Get credentials if set
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Absolute URL: base + "/" + api path + version + request path
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}{}{}",
            self.base_url.as_str().trim_end_matches('/'),
            self.config.api_path,
            self.config.api_version,
            path
        )
    }

    /// Path covered by the signature: "/" + api path + version + request path
    pub fn sign_path(&self, path: &str) -> String {
        format!("/{}{}{}", self.config.api_path, self.config.api_version, path)
    }

    /// Send an endpoint request without a body
    pub(crate) async fn call<T>(&self, endpoint: Endpoint) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        self.send::<(), T>(endpoint, None).await
    }

    /// Build, sign, send and decode one request
    pub(crate) async fn send<B, T>(&self, endpoint: Endpoint, payload: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        let signing = if endpoint.authenticated {
            match (&self.credentials, &self.signer) {
                (Some(credentials), Some(signer)) => Some((credentials, signer)),
                _ => return Err(OkexError::AuthenticationRequired),
            }
        } else {
            None
        };

        let body = payload.map(serde_json::to_string).transpose()?;
        debug!(
            method = %endpoint.method,
            path = %endpoint.path,
            authenticated = endpoint.authenticated,
            payload = body.as_deref().unwrap_or(""),
            "sending request"
        );

        let timestamp = RequestSigner::timestamp();
        let deadline = Instant::now() + self.config.request_window;

        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some((credentials, signer)) = signing {
            let signature = signer.sign_request(
                &timestamp,
                &endpoint.method,
                &self.sign_path(&endpoint.path),
                body.as_deref().unwrap_or(""),
            )?;
            headers.push(("OK-ACCESS-KEY".to_string(), credentials.api_key.clone()));
            headers.push(("OK-ACCESS-SIGN".to_string(), signature));
            headers.push(("OK-ACCESS-TIMESTAMP".to_string(), timestamp));
            headers.push((
                "OK-ACCESS-PASSPHRASE".to_string(),
                credentials.passphrase.clone(),
            ));
            if credentials.testnet {
                headers.push(("x-simulated-trading".to_string(), "1".to_string()));
            }
        }

        let request = HttpRequest {
            method: endpoint.method.clone(),
            url: self.url(&endpoint.path),
            headers,
            body,
            authenticated: endpoint.authenticated,
        };

        let raw = timeout_at(deadline, self.transport.send(request))
            .await
            .map_err(|_| OkexError::Timeout {
                duration: self.config.request_window,
            })??;

        decode_response(&raw, endpoint.shape)
    }
}

/// Path prefixes are concatenated, so each must end in `/` unless empty
fn ensure_trailing_slash(segment: &mut String) {
    if !segment.is_empty() && !segment.ends_with('/') {
        segment.push('/');
    }
}
