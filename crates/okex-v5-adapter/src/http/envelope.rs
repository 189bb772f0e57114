/*
[INPUT]:  Raw response body and the endpoint's response shape
[OUTPUT]: Typed payload, or an API error with code and (sub-)message
[POS]:    HTTP layer - `{code, msg, data[]}` envelope unwrapping
[UPDATE]: When the exchange changes its response wrapper
*/

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::value::RawValue;
use tracing::warn;

use crate::http::endpoint::ResponseShape;
use crate::http::{OkexError, Result};
use crate::types::serde_helpers;

/// Outer wrapper of every REST response.
///
/// `data` is kept as borrowed raw JSON so the payload is decoded exactly once,
/// straight into the caller's type.
#[derive(Debug, Deserialize)]
pub struct Envelope<'a> {
    #[serde(default, deserialize_with = "serde_helpers::option_string_or_number")]
    pub code: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(borrow, default)]
    pub data: Option<&'a RawValue>,
}

/// Per-item message some endpoints report inside `data[0]`; the error keeps the
/// top-level code, so `sCode` is not read
#[derive(Debug, Default, Deserialize)]
struct ItemStatus {
    #[serde(rename = "sMsg", default)]
    s_msg: Option<String>,
}

impl<'a> Envelope<'a> {
    /// Parse only the wrapper; `data` stays undecoded
    pub fn parse(body: &'a str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Code absent, empty or "0"
    pub fn is_success(&self) -> bool {
        matches!(self.code.as_deref(), None | Some("") | Some("0"))
    }

    /// Split `data` into its elements without decoding them
    pub fn elements(&self) -> Result<Vec<&'a RawValue>> {
        match self.data {
            Some(raw) => Ok(serde_json::from_str(raw.get())?),
            None => Ok(Vec::new()),
        }
    }

    /// Build the error for a failed envelope, preferring `data[0].sMsg`
    pub fn to_error(&self) -> OkexError {
        let code = self.code.clone().unwrap_or_default();
        let mut message = self.msg.clone().unwrap_or_default();

        let item_message = self
            .elements()
            .ok()
            .and_then(|items| items.first().copied())
            .and_then(|first| serde_json::from_str::<ItemStatus>(first.get()).ok())
            .and_then(|status| status.s_msg)
            .filter(|s_msg| !s_msg.is_empty());
        if let Some(s_msg) = item_message {
            message = s_msg;
        }

        OkexError::api_error(code, message)
    }

    /// Decode the payload according to `shape`
    pub fn decode<T>(&self, shape: ResponseShape) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let items = self.elements()?;
        let Some(first) = items.first() else {
            return Ok(T::default());
        };

        let payload = match (shape, self.data) {
            (ResponseShape::Array, Some(raw)) => raw.get(),
            _ => first.get(),
        };
        Ok(serde_json::from_str(payload)?)
    }
}

/// Unwrap a response body into `T`
pub fn decode_response<T>(body: &str, shape: ResponseShape) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let envelope = Envelope::parse(body)?;
    if !envelope.is_success() {
        let err = envelope.to_error();
        warn!(error = %err, "exchange rejected request");
        return Err(err);
    }
    envelope.decode(shape)
}
