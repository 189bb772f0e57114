/*
[INPUT]:  Generic trading requests (pairs, asset types, order intents)
[OUTPUT]: Domain tickers, trades, orders and positions
[POS]:    Exchange layer - multi-venue trading interface and its OKEx binding
[UPDATE]: When the trading interface gains operations
*/

pub mod convert;
pub mod domain;
mod wrapper;

use async_trait::async_trait;

use crate::http::Result;

pub use convert::EXCHANGE_NAME;
pub use domain::{
    AssetType, CancelBatchResponse, CurrencyPair, OrderCancel, OrderDetail, OrderSide,
    OrderStatus, OrderSubmit, OrderType, Position, PositionDirection, SubmitResponse, Ticker,
    TradablePairs, TradeData,
};

/// Venue-independent trading operations
///
/// Pairs are passed in domain form; implementations own the conversion to
/// their request symbols.
#[async_trait]
pub trait TradingExchange: Send + Sync {
    fn name(&self) -> &str;

    /// Fetch a fresh ticker for `pair`
    async fn update_ticker(&self, pair: &CurrencyPair, asset: AssetType) -> Result<Ticker>;

    /// Ticker lookup entry point; rejects assets without tickers
    async fn fetch_ticker(&self, pair: &CurrencyPair, asset: AssetType) -> Result<Ticker>;

    /// Recent public trades, oldest first
    async fn get_recent_trades(
        &self,
        pair: &CurrencyPair,
        asset: AssetType,
    ) -> Result<Vec<TradeData>>;

    async fn submit_order(&self, order: &OrderSubmit) -> Result<SubmitResponse>;

    async fn get_order_info(
        &self,
        order_id: &str,
        pair: &CurrencyPair,
        asset: AssetType,
    ) -> Result<OrderDetail>;

    async fn cancel_order(&self, cancel: &OrderCancel) -> Result<()>;

    async fn cancel_batch_orders(&self, orders: &[OrderCancel]) -> Result<CancelBatchResponse>;

    /// Config-format symbols tradable for `asset`
    async fn fetch_tradable_pairs(&self, asset: AssetType) -> Result<Vec<String>>;

    /// Pairs for every supported asset, including index pairs derived from futures
    async fn update_tradable_pairs(&self) -> Result<TradablePairs>;

    async fn get_positions(&self) -> Result<Vec<Position>>;
}
