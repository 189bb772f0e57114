/*
[INPUT]:  Instrument type filter
[OUTPUT]: Tradable instrument definitions
[POS]:    HTTP layer - v5 public endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use reqwest::Method;

use crate::http::endpoint::{Endpoint, query_string};
use crate::http::{OkexClient, Result};
use crate::types::{Instrument, InstrumentType, InstrumentsRequest};

impl OkexClient {
    /// List instruments of one type
    ///
    /// GET public/instruments?instType={type}
    pub async fn get_instruments(&self, instrument_type: InstrumentType) -> Result<Vec<Instrument>> {
        let request = InstrumentsRequest {
            inst_type: instrument_type,
            uly: None,
            inst_id: None,
        };
        let path = format!("public/instruments{}", query_string(&request)?);
        self.call(Endpoint::public(Method::GET, path)).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, OkexClient};
    use crate::types::InstrumentType;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_instruments() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "code": "0",
            "msg": "",
            "data": [
                {"instType":"FUTURES","instId":"BTC-USD-210625","uly":"BTC-USD","ctVal":"100","alias":"this_week","state":"live"},
                {"instType":"FUTURES","instId":"BTC-USD-210924","uly":"BTC-USD","ctVal":"100","alias":"quarter","state":"live"}
            ]
        }"#;

        Mock::given(method("GET"))
            .and(path("/api/v5/public/instruments"))
            .and(query_param("instType", "FUTURES"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = OkexClient::with_config(ClientConfig {
            base_url: server.uri(),
            ..ClientConfig::default()
        })
        .expect("client init");

        let instruments = client
            .get_instruments(InstrumentType::Futures)
            .await
            .expect("get_instruments failed");

        assert_eq!(instruments.len(), 2);
        assert_eq!(instruments[0].inst_id, "BTC-USD-210625");
        assert_eq!(instruments[1].alias, "quarter");
        assert_eq!(instruments[1].ct_val, "100");
    }
}
