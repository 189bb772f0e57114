/*
[INPUT]:  ETT identifiers, currencies and order requests
[OUTPUT]: ETT accounts, ledger, orders, constituents and settlement prices
[POS]:    HTTP layer - ETT endpoints
[UPDATE]: When adding new ETT endpoints or changing response format
*/

use reqwest::Method;

use crate::http::endpoint::{Endpoint, ResponseShape, join_path, query_string};
use crate::http::{OkexClient, Result};
use crate::types::{
    EttAccount, EttConstituents, EttOrder, EttOrderListRequest, EttOrderPlacement,
    EttOrderRequest, EttSettlementPrice, LedgerEntry,
};

impl OkexClient {
    /// Balances held in the ETT account
    ///
    /// GET accounts
    pub async fn get_ett(&self) -> Result<Vec<EttAccount>> {
        let endpoint = Endpoint::private(Method::GET, "accounts").with_shape(ResponseShape::Array);
        self.call(endpoint).await
    }

    /// GET accounts/{currency}
    pub async fn get_ett_account_information_for_currency(
        &self,
        currency: &str,
    ) -> Result<EttAccount> {
        let path = join_path(&["accounts", currency])?;
        self.call(Endpoint::private(Method::GET, path)).await
    }

    /// GET accounts/{currency}/ledger
    pub async fn get_ett_bills_details(&self, currency: &str) -> Result<Vec<LedgerEntry>> {
        let path = join_path(&["accounts", currency, "ledger"])?;
        let endpoint = Endpoint::private(Method::GET, path).with_shape(ResponseShape::Array);
        self.call(endpoint).await
    }

    /// Subscribe to or redeem an ETT
    ///
    /// POST orders
    pub async fn place_ett_order(&self, request: &EttOrderRequest) -> Result<EttOrderPlacement> {
        self.send(Endpoint::private(Method::POST, "orders"), Some(request))
            .await
    }

    /// DELETE orders/{order_id}
    pub async fn cancel_ett_order(&self, order_id: &str) -> Result<EttOrderPlacement> {
        let path = join_path(&["orders", order_id])?;
        self.call(Endpoint::private(Method::DELETE, path)).await
    }

    /// GET orders?ett=&type=&status=&after=&before=&limit=
    pub async fn get_ett_order_list(&self, request: &EttOrderListRequest) -> Result<Vec<EttOrder>> {
        let path = format!("orders{}", query_string(request)?);
        let endpoint = Endpoint::private(Method::GET, path).with_shape(ResponseShape::Array);
        self.call(endpoint).await
    }

    /// GET orders/{order_id}
    pub async fn get_ett_order_details(&self, order_id: &str) -> Result<EttOrder> {
        let path = join_path(&["orders", order_id])?;
        self.call(Endpoint::private(Method::GET, path)).await
    }

    /// GET constituents/{ett}
    pub async fn get_ett_constituents(&self, ett: &str) -> Result<EttConstituents> {
        let path = join_path(&["constituents", ett])?;
        self.call(Endpoint::public(Method::GET, path)).await
    }

    /// GET define-price/{ett}
    pub async fn get_ett_settlement_price_history(
        &self,
        ett: &str,
    ) -> Result<Vec<EttSettlementPrice>> {
        let path = join_path(&["define-price", ett])?;
        let endpoint = Endpoint::public(Method::GET, path).with_shape(ResponseShape::Array);
        self.call(endpoint).await
    }
}
