/*
[INPUT]:  v5 order requests
[OUTPUT]: Order details, placement and cancellation acknowledgements
[POS]:    HTTP layer - v5 trade endpoints (require auth + request signature)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use reqwest::Method;
use tracing::debug;

use crate::http::endpoint::{Endpoint, query_string};
use crate::http::{OkexClient, Result};
use crate::types::{
    CancelOrderRequest, CancelOrderResponse, OrderDetails, OrderRequest, PlaceOrderRequest,
    PlaceOrderResponse,
};

impl OkexClient {
    /// Query a single order
    ///
    /// GET trade/order?ordId={ordId}&instId={instId}
    pub async fn get_order(&self, request: &OrderRequest) -> Result<OrderDetails> {
        let path = format!("trade/order{}", query_string(request)?);
        self.call(Endpoint::private(Method::GET, path)).await
    }

    /// Place a new order
    ///
    /// POST trade/order
    pub async fn place_order(&self, request: &PlaceOrderRequest) -> Result<PlaceOrderResponse> {
        let response: PlaceOrderResponse = self
            .send(Endpoint::private(Method::POST, "trade/order"), Some(request))
            .await?;
        debug!(inst_id = %request.inst_id, ord_id = %response.ord_id, "order placed");
        Ok(response)
    }

    /// Cancel an open order by exchange or client id
    ///
    /// POST trade/cancel-order
    pub async fn cancel_order(&self, request: &CancelOrderRequest) -> Result<CancelOrderResponse> {
        self.send(
            Endpoint::private(Method::POST, "trade/cancel-order"),
            Some(request),
        )
        .await
    }
}
