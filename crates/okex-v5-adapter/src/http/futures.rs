/*
[INPUT]:  Contract identifiers, order and leverage requests
[OUTPUT]: Futures positions, accounts, orders, fills and contract market data
[POS]:    HTTP layer - futures endpoints (account/order endpoints require auth)
[UPDATE]: When adding new futures endpoints or changing response format
*/

use reqwest::Method;

use crate::http::endpoint::{Endpoint, ResponseShape, join_path, query_string};
use crate::http::{OkexClient, OkexError, Result};
use crate::types::{
    BatchCancellation, BatchOrderRequest, BatchPlacement, CancelBatchRequest, ContractInstrument,
    ContractOrderRequest, EstimatedPrice, ExchangeRate, FillData, FilledOrdersRequest,
    FilledTrade, FuturesAccounts, FuturesContractPositions, FuturesCurrencyAccount,
    FuturesLeverage, FuturesPositions, HoldAmount, IndexPrice, LedgerEntry, LedgerRequest,
    LiquidatedOrder, LiquidatedOrdersRequest, MarkPrice, OpenInterest, OrderCancellation,
    OrderData, OrderIdRequest, OrderList, OrderListRequest, OrderPlacement, PriceLimit,
    SetFuturesLeverageRequest, SetFuturesLeverageResponse, TagPrice, TickerData,
    TransactionDetailsRequest,
};

impl OkexClient {
    /// All holding positions across futures contracts
    ///
    /// GET position
    pub async fn get_futures_positions(&self) -> Result<FuturesPositions> {
        self.call(Endpoint::private(Method::GET, "position")).await
    }

    /// Holding positions of one contract
    ///
    /// GET {instrument_id}/position
    pub async fn get_futures_positions_for_currency(
        &self,
        instrument_id: &str,
    ) -> Result<FuturesContractPositions> {
        let path = join_path(&[instrument_id, "position"])?;
        self.call(Endpoint::private(Method::GET, path)).await
    }

    /// GET accounts
    pub async fn get_futures_account_of_all_currencies(&self) -> Result<FuturesAccounts> {
        self.call(Endpoint::private(Method::GET, "accounts")).await
    }

    /// GET accounts/{currency}
    pub async fn get_futures_account_of_a_currency(
        &self,
        currency: &str,
    ) -> Result<FuturesCurrencyAccount> {
        let path = join_path(&["accounts", currency])?;
        self.call(Endpoint::private(Method::GET, path)).await
    }

    /// GET accounts/{currency}/leverage
    pub async fn get_futures_leverage(&self, currency: &str) -> Result<FuturesLeverage> {
        let path = join_path(&["accounts", currency, "leverage"])?;
        self.call(Endpoint::private(Method::GET, path)).await
    }

    /// Adjust leverage; cross mode sends only `leverage`, fixed mode adds contract and direction
    ///
    /// POST accounts/{currency}/leverage
    pub async fn set_futures_leverage(
        &self,
        request: &SetFuturesLeverageRequest,
    ) -> Result<SetFuturesLeverageResponse> {
        let path = join_path(&["accounts", &request.currency, "leverage"])?;
        self.send(Endpoint::private(Method::POST, path), Some(request))
            .await
    }

    /// Account ledger, newest first
    ///
    /// GET accounts/{currency}/ledger?after=&before=&limit=&type=
    pub async fn get_futures_bill_details(
        &self,
        request: &LedgerRequest,
    ) -> Result<Vec<LedgerEntry>> {
        let path = format!(
            "{}{}",
            join_path(&["accounts", &request.currency, "ledger"])?,
            query_string(request)?
        );
        let endpoint = Endpoint::private(Method::GET, path).with_shape(ResponseShape::Array);
        self.call(endpoint).await
    }

    /// POST order
    pub async fn place_futures_order(
        &self,
        request: &ContractOrderRequest,
    ) -> Result<OrderPlacement> {
        self.send(Endpoint::private(Method::POST, "order"), Some(request))
            .await
    }

    /// POST orders
    pub async fn place_futures_order_batch(
        &self,
        request: &BatchOrderRequest,
    ) -> Result<BatchPlacement> {
        self.send(Endpoint::private(Method::POST, "orders"), Some(request))
            .await
    }

    /// Cancel one unfilled order
    ///
    /// POST cancel_order/{instrument_id}/{order_id}
    pub async fn cancel_futures_order(&self, request: &OrderIdRequest) -> Result<OrderCancellation> {
        let path = join_path(&["cancel_order", &request.instrument_id, &request.order_id])?;
        self.send(Endpoint::private(Method::POST, path), Some(request))
            .await
    }

    /// POST cancel_batch_orders/{instrument_id}
    pub async fn cancel_futures_order_batch(
        &self,
        request: &CancelBatchRequest,
    ) -> Result<BatchCancellation> {
        let path = join_path(&["cancel_batch_orders", &request.instrument_id])?;
        self.send(Endpoint::private(Method::POST, path), Some(request))
            .await
    }

    /// GET orders/{instrument_id}?state=&after=&before=&limit=
    pub async fn get_futures_order_list(&self, request: &OrderListRequest) -> Result<OrderList> {
        let path = format!(
            "{}{}",
            join_path(&["orders", &request.instrument_id])?,
            query_string(request)?
        );
        self.call(Endpoint::private(Method::GET, path)).await
    }

    /// GET orders/{instrument_id}/{order_id}
    pub async fn get_futures_order_details(&self, request: &OrderIdRequest) -> Result<OrderData> {
        let path = join_path(&["orders", &request.instrument_id, &request.order_id])?;
        self.call(Endpoint::private(Method::GET, path)).await
    }

    /// Recent private fills
    ///
    /// GET fills?instrument_id=&order_id=&after=&before=&limit=
    pub async fn get_futures_transaction_details(
        &self,
        request: &TransactionDetailsRequest,
    ) -> Result<Vec<FillData>> {
        let path = format!("fills{}", query_string(request)?);
        let endpoint = Endpoint::private(Method::GET, path).with_shape(ResponseShape::Array);
        self.call(endpoint).await
    }

    /// GET instruments
    pub async fn get_futures_contract_information(&self) -> Result<Vec<ContractInstrument>> {
        let endpoint =
            Endpoint::public(Method::GET, "instruments").with_shape(ResponseShape::Array);
        self.call(endpoint).await
    }

    /// GET instruments/ticker
    pub async fn get_all_futures_token_info(&self) -> Result<Vec<TickerData>> {
        let endpoint =
            Endpoint::public(Method::GET, "instruments/ticker").with_shape(ResponseShape::Array);
        self.call(endpoint).await
    }

    /// GET instruments/{instrument_id}/ticker
    pub async fn get_futures_token_info_for_currency(
        &self,
        instrument_id: &str,
    ) -> Result<TickerData> {
        let path = join_path(&["instruments", instrument_id, "ticker"])?;
        self.call(Endpoint::public(Method::GET, path)).await
    }

    /// Last trades of one contract
    ///
    /// GET instruments/{instrument_id}/trades?after=&before=&limit=
    pub async fn get_futures_filled_order(
        &self,
        request: &FilledOrdersRequest,
    ) -> Result<Vec<FilledTrade>> {
        let path = format!(
            "{}{}",
            join_path(&["instruments", &request.instrument_id, "trades"])?,
            query_string(request)?
        );
        let endpoint = Endpoint::public(Method::GET, path).with_shape(ResponseShape::Array);
        self.call(endpoint).await
    }

    /// GET accounts/{instrument_id}/holds
    pub async fn get_futures_hold_amount(&self, instrument_id: &str) -> Result<HoldAmount> {
        let path = join_path(&["accounts", instrument_id, "holds"])?;
        self.call(Endpoint::private(Method::GET, path)).await
    }

    /// GET instruments/{instrument_id}/index
    pub async fn get_futures_indices(&self, instrument_id: &str) -> Result<IndexPrice> {
        let path = join_path(&["instruments", instrument_id, "index"])?;
        self.call(Endpoint::public(Method::GET, path)).await
    }

    /// Fiat exchange rate
    ///
    /// GET rate
    pub async fn get_futures_exchange_rates(&self) -> Result<ExchangeRate> {
        self.call(Endpoint::public(Method::GET, "rate")).await
    }

    /// Available three hours before delivery
    ///
    /// GET instruments/{instrument_id}/estimated_price
    pub async fn get_futures_estimated_delivery_price(
        &self,
        instrument_id: &str,
    ) -> Result<EstimatedPrice> {
        let path = join_path(&["instruments", instrument_id, "estimated_price"])?;
        self.call(Endpoint::public(Method::GET, path)).await
    }

    /// GET instruments/{instrument_id}/open_interest
    pub async fn get_futures_open_interests(&self, instrument_id: &str) -> Result<OpenInterest> {
        let path = join_path(&["instruments", instrument_id, "open_interest"])?;
        self.call(Endpoint::public(Method::GET, path)).await
    }

    /// GET instruments/{instrument_id}/price_limit
    pub async fn get_futures_current_price_limit(&self, instrument_id: &str) -> Result<PriceLimit> {
        let path = join_path(&["instruments", instrument_id, "price_limit"])?;
        self.call(Endpoint::public(Method::GET, path)).await
    }

    /// GET instruments/{instrument_id}/mark_price
    pub async fn get_futures_current_mark_price(&self, instrument_id: &str) -> Result<MarkPrice> {
        let path = join_path(&["instruments", instrument_id, "mark_price"])?;
        self.call(Endpoint::public(Method::GET, path)).await
    }

    /// GET instruments/{instrument_id}/liquidation?status=&from=&to=&limit=
    pub async fn get_futures_force_liquidated_orders(
        &self,
        request: &LiquidatedOrdersRequest,
    ) -> Result<Vec<LiquidatedOrder>> {
        let path = format!(
            "{}{}",
            join_path(&["instruments", &request.instrument_id, "liquidation"])?,
            query_string(request)?
        );
        let endpoint = Endpoint::public(Method::GET, path).with_shape(ResponseShape::Array);
        self.call(endpoint).await
    }

    /// The exchange does not document a tag price route
    pub async fn get_futures_tag_price(&self, _instrument_id: &str) -> Result<TagPrice> {
        Err(OkexError::NotYetImplemented("futures tag price"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{ClientConfig, Credentials};
    use serde_json::json;
    use wiremock::matchers::{body_json, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn signed_client(server: &MockServer) -> OkexClient {
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
    async fn test_set_futures_leverage_body_excludes_currency() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v5/accounts/btc-usd/leverage"))
            .and(header_exists("OK-ACCESS-SIGN"))
            .and(body_json(json!({
                "instrument_id": "BTC-USD-210625",
                "direction": "long",
                "leverage": "10"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": "0",
                "data": [{"result": "true", "currency": "BTC-USD", "leverage": 10, "margin_mode": "fixed"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = signed_client(&server);
        let response = client
            .set_futures_leverage(&SetFuturesLeverageRequest {
                currency: "btc-usd".to_string(),
                instrument_id: Some("BTC-USD-210625".to_string()),
                direction: Some("long".to_string()),
                leverage: "10".to_string(),
            })
            .await
            .expect("set leverage");

        assert!(response.result);
        assert_eq!(response.leverage, "10");
        assert_eq!(response.margin_mode, "fixed");
    }

    #[tokio::test]
    async fn test_cancel_futures_order_path() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v5/cancel_order/BTC-USD-210625/1234"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": "0",
                "data": [{"result": true, "order_id": "1234", "instrument_id": "BTC-USD-210625"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = signed_client(&server);
        let response = client
            .cancel_futures_order(&OrderIdRequest {
                instrument_id: "BTC-USD-210625".to_string(),
                order_id: "1234".to_string(),
            })
            .await
            .expect("cancel");

        assert!(response.result);
        assert_eq!(response.order_id, "1234");
    }

    #[tokio::test]
    async fn test_futures_tag_price_not_implemented() {
        let client = OkexClient::new().expect("client init");
        let err = client.get_futures_tag_price("BTC-USD-210625").await.unwrap_err();
        assert!(matches!(err, OkexError::NotYetImplemented(_)));
    }
}
