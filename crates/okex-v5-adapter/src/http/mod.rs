/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod client;
pub mod endpoint;
pub mod envelope;
pub mod error;
pub mod ett;
pub mod futures;
pub mod public;
pub mod signature;
pub mod spot;
pub mod swap;
pub mod trade;
pub mod transport;

pub use error::{OkexError, Result};
pub use signature::RequestSigner;

pub use client::{ClientConfig, Credentials, DEFAULT_BASE_URL, OkexClient};
pub use endpoint::{Endpoint, ResponseShape};
pub use transport::{HttpRequest, ReqwestTransport, Transport};
