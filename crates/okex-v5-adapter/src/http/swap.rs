/*
[INPUT]:  Contract identifiers, order and leverage requests
[OUTPUT]: Perpetual swap positions, accounts, orders, fills and contract market data
[POS]:    HTTP layer - perpetual swap endpoints (account/order endpoints require auth)
[UPDATE]: When adding new swap endpoints or changing response format
*/

use reqwest::Method;

use crate::http::endpoint::{Endpoint, ResponseShape, join_path, query_string};
use crate::http::{OkexClient, Result};
use crate::types::{
    BatchCancellation, BatchOrderRequest, BatchPlacement, CancelBatchRequest, ContractInstrument,
    ContractOrderRequest, ExchangeRate, FillData, FilledOrdersRequest, FilledTrade, FundingRate,
    FundingRateHistoryRequest, HoldAmount, IndexPrice, LedgerEntry, LedgerRequest,
    LiquidatedOrder, LiquidatedOrdersRequest, MarkPrice, OpenInterest, OrderCancellation,
    OrderData, OrderIdRequest, OrderList, OrderListRequest, OrderPlacement, PriceLimit,
    SetSwapLeverageRequest, SettlementTime, SwapAccounts, SwapPositions, SwapSettings,
    TickerData, TransactionDetailsRequest,
};

fn instrument_path(instrument_id: &str, resource: &str) -> Result<String> {
    join_path(&["instruments", instrument_id, resource])
}

impl OkexClient {
    /// GET position
    pub async fn get_swap_positions(&self) -> Result<Vec<SwapPositions>> {
        let endpoint = Endpoint::private(Method::GET, "position").with_shape(ResponseShape::Array);
        self.call(endpoint).await
    }

    /// GET {instrument_id}/position
    pub async fn get_swap_positions_for_contract(
        &self,
        instrument_id: &str,
    ) -> Result<SwapPositions> {
        let path = join_path(&[instrument_id, "position"])?;
        self.call(Endpoint::private(Method::GET, path)).await
    }

    /// Margin ratio reads 10000 when no position is open
    ///
    /// GET accounts
    pub async fn get_swap_account_of_all_currency(&self) -> Result<SwapAccounts> {
        self.call(Endpoint::private(Method::GET, "accounts")).await
    }

    /// GET accounts/{instrument_id}/settings
    pub async fn get_swap_account_settings_of_a_contract(
        &self,
        instrument_id: &str,
    ) -> Result<SwapSettings> {
        let path = join_path(&["accounts", instrument_id, "settings"])?;
        self.call(Endpoint::private(Method::GET, path)).await
    }

    /// POST accounts/{instrument_id}/leverage
    pub async fn set_swap_leverage_level_of_a_contract(
        &self,
        request: &SetSwapLeverageRequest,
    ) -> Result<SwapSettings> {
        let path = join_path(&["accounts", &request.instrument_id, "leverage"])?;
        self.send(Endpoint::private(Method::POST, path), Some(request))
            .await
    }

    /// GET accounts/{currency}/ledger
    pub async fn get_swap_bill_details(&self, request: &LedgerRequest) -> Result<Vec<LedgerEntry>> {
        let path = format!(
            "{}{}",
            join_path(&["accounts", &request.currency, "ledger"])?,
            query_string(request)?
        );
        let endpoint = Endpoint::private(Method::GET, path).with_shape(ResponseShape::Array);
        self.call(endpoint).await
    }

    pub async fn place_swap_order(&self, request: &ContractOrderRequest) -> Result<OrderPlacement> {
        self.send(Endpoint::private(Method::POST, "order"), Some(request))
            .await
    }

    pub async fn place_multiple_swap_orders(
        &self,
        request: &BatchOrderRequest,
    ) -> Result<BatchPlacement> {
        self.send(Endpoint::private(Method::POST, "orders"), Some(request))
            .await
    }

    /// POST cancel_order/{instrument_id}/{order_id}, no body
    pub async fn cancel_swap_order(&self, request: &OrderIdRequest) -> Result<OrderCancellation> {
        let path = join_path(&["cancel_order", &request.instrument_id, &request.order_id])?;
        self.call(Endpoint::private(Method::POST, path)).await
    }

    /// POST cancel_batch_orders/{instrument_id}
    pub async fn cancel_multiple_swap_orders(
        &self,
        request: &CancelBatchRequest,
    ) -> Result<BatchCancellation> {
        let path = join_path(&["cancel_batch_orders", &request.instrument_id])?;
        self.send(Endpoint::private(Method::POST, path), Some(request))
            .await
    }

    pub async fn get_swap_order_list(&self, request: &OrderListRequest) -> Result<OrderList> {
        let path = format!(
            "{}{}",
            join_path(&["orders", &request.instrument_id])?,
            query_string(request)?
        );
        self.call(Endpoint::private(Method::GET, path)).await
    }

    pub async fn get_swap_order_details(&self, request: &OrderIdRequest) -> Result<OrderData> {
        let path = join_path(&["orders", &request.instrument_id, &request.order_id])?;
        self.call(Endpoint::private(Method::GET, path)).await
    }

    pub async fn get_swap_transaction_details(
        &self,
        request: &TransactionDetailsRequest,
    ) -> Result<Vec<FillData>> {
        let path = format!("fills{}", query_string(request)?);
        let endpoint = Endpoint::private(Method::GET, path).with_shape(ResponseShape::Array);
        self.call(endpoint).await
    }

    pub async fn get_swap_contract_information(&self) -> Result<Vec<ContractInstrument>> {
        let endpoint =
            Endpoint::public(Method::GET, "instruments").with_shape(ResponseShape::Array);
        self.call(endpoint).await
    }

    pub async fn get_all_swap_tokens_information(&self) -> Result<Vec<TickerData>> {
        let endpoint =
            Endpoint::public(Method::GET, "instruments/ticker").with_shape(ResponseShape::Array);
        self.call(endpoint).await
    }

    pub async fn get_swap_tokens_information_for_currency(
        &self,
        instrument_id: &str,
    ) -> Result<TickerData> {
        let path = instrument_path(instrument_id, "ticker")?;
        self.call(Endpoint::public(Method::GET, path)).await
    }

    pub async fn get_swap_filled_orders_data(
        &self,
        request: &FilledOrdersRequest,
    ) -> Result<Vec<FilledTrade>> {
        let path = format!(
            "{}{}",
            instrument_path(&request.instrument_id, "trades")?,
            query_string(request)?
        );
        let endpoint = Endpoint::public(Method::GET, path).with_shape(ResponseShape::Array);
        self.call(endpoint).await
    }

    pub async fn get_swap_indices(&self, instrument_id: &str) -> Result<IndexPrice> {
        let path = instrument_path(instrument_id, "index")?;
        self.call(Endpoint::public(Method::GET, path)).await
    }

    pub async fn get_swap_exchange_rates(&self) -> Result<ExchangeRate> {
        self.call(Endpoint::public(Method::GET, "rate")).await
    }

    pub async fn get_swap_open_interest(&self, instrument_id: &str) -> Result<OpenInterest> {
        let path = instrument_path(instrument_id, "open_interest")?;
        self.call(Endpoint::public(Method::GET, path)).await
    }

    pub async fn get_swap_current_price_limits(&self, instrument_id: &str) -> Result<PriceLimit> {
        let path = instrument_path(instrument_id, "price_limit")?;
        self.call(Endpoint::public(Method::GET, path)).await
    }

    pub async fn get_swap_force_liquidated_orders(
        &self,
        request: &LiquidatedOrdersRequest,
    ) -> Result<Vec<LiquidatedOrder>> {
        let path = format!(
            "{}{}",
            instrument_path(&request.instrument_id, "liquidation")?,
            query_string(request)?
        );
        let endpoint = Endpoint::public(Method::GET, path).with_shape(ResponseShape::Array);
        self.call(endpoint).await
    }

    /// GET accounts/{instrument_id}/holds
    pub async fn get_swap_on_hold_amount_for_open_orders(
        &self,
        instrument_id: &str,
    ) -> Result<HoldAmount> {
        let path = join_path(&["accounts", instrument_id, "holds"])?;
        self.call(Endpoint::private(Method::GET, path)).await
    }

    /// GET instruments/{instrument_id}/funding_time
    pub async fn get_swap_next_settlement_time(
        &self,
        instrument_id: &str,
    ) -> Result<SettlementTime> {
        let path = instrument_path(instrument_id, "funding_time")?;
        self.call(Endpoint::public(Method::GET, path)).await
    }

    pub async fn get_swap_mark_price(&self, instrument_id: &str) -> Result<MarkPrice> {
        let path = instrument_path(instrument_id, "mark_price")?;
        self.call(Endpoint::public(Method::GET, path)).await
    }

    /// GET instruments/{instrument_id}/historical_funding_rate?from=&to=&limit=
    pub async fn get_swap_funding_rate_history(
        &self,
        request: &FundingRateHistoryRequest,
    ) -> Result<Vec<FundingRate>> {
        let path = format!(
            "{}{}",
            instrument_path(&request.instrument_id, "historical_funding_rate")?,
            query_string(request)?
        );
        let endpoint = Endpoint::public(Method::GET, path).with_shape(ResponseShape::Array);
        self.call(endpoint).await
    }
}
