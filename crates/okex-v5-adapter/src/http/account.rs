/*
[INPUT]:  Authenticated account queries and leverage changes
[OUTPUT]: Balances, positions and leverage settings
[POS]:    HTTP layer - v5 account endpoints (auth required)
[UPDATE]: When adding new account endpoints or changing response format
*/

use reqwest::Method;

use crate::http::endpoint::Endpoint;
use crate::http::{OkexClient, Result};
use crate::types::{
    AccountBalance, AccountPosition, AssetBalance, SetLeverageRequest, SetLeverageResponse,
};

impl OkexClient {
    /// Full balance record
    ///
    /// GET account/balance
    pub async fn get_account_balance(&self) -> Result<AccountBalance> {
        self.call(Endpoint::private(Method::GET, "account/balance"))
            .await
    }

    /// Per-currency balances; empty when the account reports no total equity
    pub async fn get_trading_accounts(&self) -> Result<Vec<AssetBalance>> {
        let balance = self.get_account_balance().await?;
        if balance.total_eq.is_empty() {
            Ok(Vec::new())
        } else {
            Ok(balance.details)
        }
    }

    /// Open positions
    ///
    /// GET account/positions
    pub async fn get_account_positions(&self) -> Result<Vec<AccountPosition>> {
        self.call(Endpoint::private(Method::GET, "account/positions"))
            .await
    }

    /// POST account/set-leverage
    pub async fn set_leverage(&self, request: &SetLeverageRequest) -> Result<SetLeverageResponse> {
        self.send(
            Endpoint::private(Method::POST, "account/set-leverage"),
            Some(request),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{ClientConfig, Credentials, OkexError};
    use crate::types::TradeMode;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> OkexClient {
        let config = ClientConfig {
            base_url: server.uri(),
            ..ClientConfig::default()
        };
        let credentials = Credentials {
            api_key: "key".to_string(),
            secret: "secret".to_string(),
            passphrase: "phrase".to_string(),
            testnet: false,
        };
        OkexClient::with_credentials(config, credentials).expect("client init")
    }

    #[tokio::test]
    async fn test_trading_accounts_require_total_equity() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v5/account/balance"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": "0",
                "data": [{"totalEq": "", "details": [{"ccy": "BTC", "eq": "1"}]}]
            })))
            .mount(&server)
            .await;

        let accounts = client_for(&server).get_trading_accounts().await.expect("accounts");
        assert!(accounts.is_empty());
    }

    #[tokio::test]
    async fn test_trading_accounts_details() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v5/account/balance"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": "0",
                "data": [{
                    "totalEq": "41624.32",
                    "details": [
                        {"ccy": "BTC", "eq": "1.2", "availBal": "1.1"},
                        {"ccy": "USDT", "eq": "5000", "availBal": "4000"}
                    ]
                }]
            })))
            .mount(&server)
            .await;

        let accounts = client_for(&server).get_trading_accounts().await.expect("accounts");
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].ccy, "BTC");
        assert_eq!(accounts[1].avail_bal, "4000");
    }

    #[tokio::test]
    async fn test_account_positions_decode_whole_array() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v5/account/positions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": "0",
                "data": [
                    {"instId": "BTC-USDT-SWAP", "pos": "2", "posSide": "long"},
                    {"instId": "ETH-USDT-SWAP", "pos": "-3", "posSide": "net"}
                ]
            })))
            .mount(&server)
            .await;

        let positions = client_for(&server).get_account_positions().await.expect("positions");
        assert_eq!(positions.len(), 2);
        assert_eq!(positions[1].pos, "-3");
    }

    #[tokio::test]
    async fn test_set_leverage_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v5/account/set-leverage"))
            .and(body_json(json!({"instId": "BTC-USDT-SWAP", "lever": "5", "mgnMode": "cross"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": "0",
                "data": [{"instId": "BTC-USDT-SWAP", "lever": "5", "mgnMode": "cross", "posSide": ""}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .set_leverage(&SetLeverageRequest {
                inst_id: Some("BTC-USDT-SWAP".to_string()),
                ccy: None,
                lever: "5".to_string(),
                mgn_mode: TradeMode::Cross,
                pos_side: None,
            })
            .await
            .expect("set leverage");
        assert_eq!(response.lever, "5");
    }

    #[tokio::test]
    async fn test_account_endpoints_need_credentials() {
        let client = OkexClient::new().expect("client init");
        let err = client.get_account_positions().await.unwrap_err();
        assert!(matches!(err, OkexError::AuthenticationRequired));
    }
}
