/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for okex-v5-adapter tests

#![allow(dead_code)]

use okex_v5_adapter::{ClientConfig, Credentials, OkexClient};
use serde_json::{Value, json};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn test_credentials() -> Credentials {
    Credentials {
        api_key: "test-key".to_string(),
        secret: "test-secret".to_string(),
        passphrase: "test-passphrase".to_string(),
        testnet: false,
    }
}

/// Unauthenticated client pointed at the mock server
pub fn public_client(server: &MockServer) -> OkexClient {
    OkexClient::with_config(ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    })
    .expect("client init")
}

/// Signed client pointed at the mock server
pub fn private_client(server: &MockServer) -> OkexClient {
    let config = ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    };
    OkexClient::with_credentials(config, test_credentials()).expect("client init")
}

/// Successful envelope around `data`
pub fn envelope(data: Value) -> Value {
    json!({ "code": "0", "msg": "", "data": data })
}
