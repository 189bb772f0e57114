/*
[INPUT]:  Instrument identifiers and pagination parameters
[OUTPUT]: Spot markets, tickers, trades, funding rates and margin availability
[POS]:    HTTP layer - spot and margin endpoints
[UPDATE]: When adding new spot endpoints or changing response format
*/

use reqwest::Method;

use crate::http::endpoint::{Endpoint, ResponseShape, join_path, query_string};
use crate::http::{OkexClient, Result};
use crate::types::{
    ContractInstrument, FilledOrdersRequest, FilledTrade, FundingRate, MarginAvailability,
    MarginCurrencyData, MarginData, TickerData, TradingPairData,
};

const CURRENCY_KEY_PREFIX: &str = "currency:";

impl OkexClient {
    /// List spot trading pairs
    ///
    /// GET instruments
    pub async fn get_spot_markets(&self) -> Result<Vec<TradingPairData>> {
        let endpoint =
            Endpoint::public(Method::GET, "instruments").with_shape(ResponseShape::Array);
        self.call(endpoint).await
    }

    /// Tickers for every spot pair
    ///
    /// GET instruments/ticker
    pub async fn get_spot_all_token_pairs_information(&self) -> Result<Vec<TickerData>> {
        let endpoint =
            Endpoint::public(Method::GET, "instruments/ticker").with_shape(ResponseShape::Array);
        self.call(endpoint).await
    }

    /// Ticker for one spot pair
    ///
    /// GET instruments/{instrument_id}/ticker
    pub async fn get_spot_token_pair_information(&self, instrument_id: &str) -> Result<TickerData> {
        let path = join_path(&["instruments", instrument_id, "ticker"])?;
        self.call(Endpoint::public(Method::GET, path)).await
    }

    /// Recent public trades for one spot pair
    ///
    /// GET instruments/{instrument_id}/trades?after=&before=&limit=
    pub async fn get_spot_filled_orders_information(
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

    /// Perpetual swap contracts
    ///
    /// GET instruments
    pub async fn get_swap_markets(&self) -> Result<Vec<ContractInstrument>> {
        let endpoint =
            Endpoint::public(Method::GET, "instruments").with_shape(ResponseShape::Array);
        self.call(endpoint).await
    }

    /// Tickers for every perpetual swap contract
    ///
    /// GET instruments/ticker
    pub async fn get_perp_swap_markets(&self) -> Result<Vec<TickerData>> {
        let endpoint =
            Endpoint::public(Method::GET, "instruments/ticker").with_shape(ResponseShape::Array);
        self.call(endpoint).await
    }

    /// Historical funding rates of one market
    ///
    /// GET instruments/{market}/historical_funding_rate?limit=
    pub async fn get_funding_rate(&self, market: &str, limit: u32) -> Result<Vec<FundingRate>> {
        let path = format!(
            "{}?limit={limit}",
            join_path(&["instruments", market, "historical_funding_rate"])?
        );
        let endpoint = Endpoint::public(Method::GET, path).with_shape(ResponseShape::Array);
        self.call(endpoint).await
    }

    /// Borrowing availability and rates of every margin pair
    ///
    /// GET accounts/availability
    pub async fn get_all_margin_rates(&self) -> Result<Vec<MarginCurrencyData>> {
        let endpoint = Endpoint::private(Method::GET, "accounts/availability")
            .with_shape(ResponseShape::Array);
        let raw: Vec<MarginAvailability> = self.call(endpoint).await?;
        raw.into_iter().map(flatten_margin_availability).collect()
    }

    /// Borrowing availability and rates of one margin pair
    ///
    /// GET accounts/{instrument_id}/availability
    pub async fn get_margin_rates(&self, instrument_id: &str) -> Result<MarginCurrencyData> {
        let path = join_path(&["accounts", instrument_id, "availability"])?;
        let raw: MarginAvailability = self.call(Endpoint::private(Method::GET, path)).await?;
        flatten_margin_availability(raw)
    }
}

/// Turn `currency:BTC` style keys into a map keyed by `BTC`
fn flatten_margin_availability(raw: MarginAvailability) -> Result<MarginCurrencyData> {
    let mut data = std::collections::HashMap::new();
    for (key, value) in raw.currencies {
        if let Some(currency) = key.strip_prefix(CURRENCY_KEY_PREFIX) {
            let margin: MarginData = serde_json::from_value(value)?;
            data.insert(currency.to_string(), margin);
        }
    }
    Ok(MarginCurrencyData {
        instrument_id: raw.instrument_id,
        product_id: raw.product_id,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{ClientConfig, Credentials};
    use wiremock::matchers::{header_exists, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, credentials: Option<Credentials>) -> OkexClient {
        let config = ClientConfig {
            base_url: server.uri(),
            ..ClientConfig::default()
        };
        match credentials {
            Some(credentials) => OkexClient::with_credentials(config, credentials),
            None => OkexClient::with_config(config),
        }
        .expect("client init")
    }

    #[test]
    fn test_flatten_margin_availability() {
        let raw: MarginAvailability = serde_json::from_str(
            r#"{
                "instrument_id": "BTC-USDT",
                "product_id": "BTC-USDT",
                "currency:BTC": {"available":"0.5","leverage":"3","leverage_ratio":"3","rate":"0.0002"},
                "currency:USDT": {"available":"1000","leverage":"3","leverage_ratio":"3","rate":"0.0001"}
            }"#,
        )
        .expect("decode");

        let data = flatten_margin_availability(raw).expect("flatten");
        assert_eq!(data.instrument_id, "BTC-USDT");
        assert_eq!(data.data.len(), 2);
        assert_eq!(data.data["BTC"].available, "0.5");
        assert_eq!(data.data["USDT"].rate, "0.0001");
    }

    #[tokio::test]
    async fn test_get_spot_filled_orders_information() {
        let server = MockServer::start().await;
        let body = r#"{
            "code": "0",
            "msg": "",
            "data": [
                {"trade_id":"2","price":"30001","size":"0.2","side":"sell","timestamp":"2021-06-01T12:00:02.000Z"},
                {"trade_id":"1","price":"30000","size":"0.1","side":"buy","timestamp":"2021-06-01T12:00:01.000Z"}
            ]
        }"#;

        Mock::given(method("GET"))
            .and(path("/api/v5/instruments/BTC-USDT/trades"))
            .and(query_param("limit", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let trades = client
            .get_spot_filled_orders_information(&FilledOrdersRequest {
                instrument_id: "BTC-USDT".to_string(),
                limit: Some(2),
                ..FilledOrdersRequest::default()
            })
            .await
            .expect("trades");

        assert_eq!(trades.len(), 2);
        assert_eq!(trades[0].trade_id, "2");
        assert_eq!(trades[1].size, "0.1");
    }

    #[tokio::test]
    async fn test_get_margin_rates_is_signed() {
        let server = MockServer::start().await;
        let body = r#"{"code":"0","data":[{"instrument_id":"ETH-USDT","product_id":"ETH-USDT","currency:ETH":{"available":"2","rate":"0.0003"}}]}"#;

        Mock::given(method("GET"))
            .and(path("/api/v5/accounts/ETH-USDT/availability"))
            .and(header_exists("OK-ACCESS-SIGN"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let credentials = Credentials {
            api_key: "key".to_string(),
            secret: "secret".to_string(),
            passphrase: "phrase".to_string(),
            testnet: false,
        };
        let client = client_for(&server, Some(credentials));
        let rates = client.get_margin_rates("ETH-USDT").await.expect("rates");

        assert_eq!(rates.instrument_id, "ETH-USDT");
        assert_eq!(rates.data["ETH"].available, "2");
    }
}
