/*
[INPUT]:  Timestamp, HTTP method, signed request path, JSON body and API secret
[OUTPUT]: Base64 HMAC-SHA256 signature for the OK-ACCESS-SIGN header
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or header format
*/

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use chrono::{SecondsFormat, Utc};
use hmac::{Hmac, Mac};
use reqwest::Method;
use sha2::Sha256;

use crate::http::{OkexError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Signs request prehash strings with the account secret
#[derive(Clone)]
pub struct RequestSigner {
    secret: String,
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner").finish_non_exhaustive()
    }
}

impl RequestSigner {
    /// Create a new request signer for the given API secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Current UTC time in RFC3339 with second precision
    pub fn timestamp() -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    /// Build the prehash string
    ///
    /// Format: "{timestamp}{METHOD}{sign_path}{body}"
    pub fn prehash(timestamp: &str, method: &Method, sign_path: &str, body: &str) -> String {
        format!(
            "{timestamp}{}{sign_path}{body}",
            method.as_str().to_ascii_uppercase()
        )
    }

    /// Sign a request according to the OKEx v5 scheme
    ///
    /// Returns base64-encoded HMAC-SHA256 of the prehash string
    pub fn sign_request(
        &self,
        timestamp: &str,
        method: &Method,
        sign_path: &str,
        body: &str,
    ) -> Result<String> {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .map_err(|e| OkexError::Config(format!("invalid API secret: {e}")))?;
        mac.update(Self::prehash(timestamp, method, sign_path, body).as_bytes());
        Ok(BASE64.encode(mac.finalize().into_bytes()))
    }
}
