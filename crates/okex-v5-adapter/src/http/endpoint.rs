/*
[INPUT]:  HTTP method, relative request path, auth requirement
[OUTPUT]: Endpoint descriptors carrying the expected response shape
[POS]:    HTTP layer - per-endpoint request metadata
[UPDATE]: When the exchange adds array-shaped endpoints
*/

use reqwest::Method;
use serde::Serialize;

use crate::http::{OkexError, Result};

/// Path prefixes whose envelope `data` decodes as a whole array.
///
/// Every other path decodes only `data[0]`.
const ARRAY_SHAPED_PREFIXES: &[&str] = &["public/instruments", "account/positions"];

/// How the envelope `data` array maps onto the destination type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// Decode the entire `data` array
    Array,
    /// Decode only `data[0]`
    Object,
}

impl ResponseShape {
    /// Look up the shape for a request path (query string included)
    pub fn for_path(path: &str) -> Self {
        if ARRAY_SHAPED_PREFIXES
            .iter()
            .any(|prefix| path.starts_with(prefix))
        {
            ResponseShape::Array
        } else {
            ResponseShape::Object
        }
    }
}

/// Everything the envelope handler needs to know about one call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub path: String,
    pub authenticated: bool,
    pub shape: ResponseShape,
}

impl Endpoint {
    fn new(method: Method, path: impl Into<String>, authenticated: bool) -> Self {
        let path = path.into();
        let shape = ResponseShape::for_path(&path);
        Self {
            method,
            path,
            authenticated,
            shape,
        }
    }

    /// Unsigned endpoint
    pub fn public(method: Method, path: impl Into<String>) -> Self {
        Self::new(method, path, false)
    }

    /// Signed endpoint
    pub fn private(method: Method, path: impl Into<String>) -> Self {
        Self::new(method, path, true)
    }

    /// Override the looked-up response shape
    pub fn with_shape(mut self, shape: ResponseShape) -> Self {
        self.shape = shape;
        self
    }
}

/// Join path segments with `/`; a blank segment is an error, never skipped
pub(crate) fn join_path(segments: &[&str]) -> Result<String> {
    if segments.iter().any(|segment| segment.trim().is_empty()) {
        return Err(OkexError::MissingPathParameter {
            path: segments.join("/"),
        });
    }
    Ok(segments.join("/"))
}

/// Encode a request struct as `?k=v&...`, or an empty string when nothing is set
pub(crate) fn query_string<T: Serialize + ?Sized>(params: &T) -> Result<String> {
    let encoded = serde_urlencoded::to_string(params)?;
    if encoded.is_empty() {
        Ok(String::new())
    } else {
        Ok(format!("?{encoded}"))
    }
}
