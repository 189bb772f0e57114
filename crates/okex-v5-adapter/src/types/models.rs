/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed records for market data, futures, perpetual swap, ETT and margin endpoints
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::serde_helpers;

// Numeric fields stay as the decimal strings the exchange sends. Conversion
// to numbers happens in the exchange adapter.

// ---------------------------------------------------------------------------
// Market data shared by spot, futures and perpetual swap
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradingPairData {
    pub base_currency: String,
    pub instrument_id: String,
    pub min_size: String,
    pub quote_currency: String,
    pub size_increment: String,
    pub tick_size: String,
}

/// 24h ticker snapshot; spot fills the base/quote volumes, contracts fill `volume_24h`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickerData {
    pub instrument_id: String,
    pub product_id: String,
    pub last: String,
    pub last_qty: String,
    pub best_ask: String,
    pub best_ask_size: String,
    pub best_bid: String,
    pub best_bid_size: String,
    pub open_24h: String,
    pub high_24h: String,
    pub low_24h: String,
    pub base_volume_24h: String,
    pub quote_volume_24h: String,
    pub volume_24h: String,
    pub volume_token_24h: String,
    pub timestamp: String,
}

/// Public trade print
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilledTrade {
    pub trade_id: String,
    pub price: String,
    #[serde(alias = "qty")]
    pub size: String,
    pub side: String,
    pub timestamp: String,
}

/// Futures or perpetual swap contract specification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractInstrument {
    pub instrument_id: String,
    pub underlying_index: String,
    pub underlying: String,
    pub base_currency: String,
    pub quote_currency: String,
    pub settlement_currency: String,
    pub contract_val: String,
    pub contract_val_currency: String,
    pub listing: String,
    pub delivery: String,
    pub tick_size: String,
    pub trade_increment: String,
    pub size_increment: String,
    pub alias: String,
    #[serde(deserialize_with = "serde_helpers::bool_or_string")]
    pub is_inverse: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FundingRate {
    pub instrument_id: String,
    pub funding_rate: String,
    pub realized_rate: String,
    pub interest_rate: String,
    pub funding_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexPrice {
    pub instrument_id: String,
    pub index: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExchangeRate {
    pub instrument_id: String,
    pub rate: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatedPrice {
    pub instrument_id: String,
    pub settlement_price: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenInterest {
    pub instrument_id: String,
    pub amount: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceLimit {
    pub instrument_id: String,
    pub highest: String,
    pub lowest: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkPrice {
    pub instrument_id: String,
    pub mark_price: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagPrice {
    pub instrument_id: String,
    pub tag_price: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiquidatedOrder {
    pub instrument_id: String,
    pub loss: String,
    pub size: String,
    pub price: String,
    pub created_at: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoldAmount {
    pub instrument_id: String,
    pub amount: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettlementTime {
    pub instrument_id: String,
    pub funding_time: String,
}

// ---------------------------------------------------------------------------
// Margin
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarginData {
    pub available: String,
    pub leverage: String,
    pub leverage_ratio: String,
    pub rate: String,
}

/// Borrowing availability as sent, with one `currency:XXX` key per currency
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarginAvailability {
    pub instrument_id: String,
    pub product_id: String,
    #[serde(flatten)]
    pub currencies: HashMap<String, Value>,
}

/// Borrowing availability keyed by bare currency code
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarginCurrencyData {
    pub instrument_id: String,
    pub product_id: String,
    pub data: HashMap<String, MarginData>,
}

// ---------------------------------------------------------------------------
// Orders and fills shared by futures and perpetual swap
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderData {
    pub instrument_id: String,
    pub order_id: String,
    pub client_oid: String,
    pub size: String,
    pub filled_qty: String,
    pub price: String,
    pub price_avg: String,
    pub fee: String,
    pub contract_val: String,
    pub leverage: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub order_type: String,
    pub state: String,
    pub status: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderList {
    #[serde(deserialize_with = "serde_helpers::bool_or_string")]
    pub result: bool,
    pub order_info: Vec<OrderData>,
}

/// Private fill ("transaction details")
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillData {
    pub trade_id: String,
    pub instrument_id: String,
    pub order_id: String,
    pub price: String,
    pub order_qty: String,
    pub fee: String,
    pub exec_type: String,
    pub side: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerDetails {
    pub order_id: String,
    pub instrument_id: String,
}

/// Account bill entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerEntry {
    pub ledger_id: String,
    pub currency: String,
    pub instrument_id: String,
    pub amount: String,
    pub balance: String,
    pub fee: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub timestamp: String,
    pub details: LedgerDetails,
}

// ---------------------------------------------------------------------------
// Futures accounts and positions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuturesPosition {
    pub instrument_id: String,
    pub margin_mode: String,
    pub leverage: String,
    pub liquidation_price: String,
    pub long_qty: String,
    pub long_avail_qty: String,
    pub long_avg_cost: String,
    pub long_settlement_price: String,
    pub long_margin: String,
    pub long_pnl: String,
    pub long_unrealised_pnl: String,
    pub short_qty: String,
    pub short_avail_qty: String,
    pub short_avg_cost: String,
    pub short_settlement_price: String,
    pub short_margin: String,
    pub short_pnl: String,
    pub short_unrealised_pnl: String,
    pub realised_pnl: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuturesPositions {
    #[serde(deserialize_with = "serde_helpers::bool_or_string")]
    pub result: bool,
    pub holding: Vec<Vec<FuturesPosition>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuturesContractPositions {
    #[serde(deserialize_with = "serde_helpers::bool_or_string")]
    pub result: bool,
    pub margin_mode: String,
    pub holding: Vec<FuturesPosition>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuturesCurrencyAccount {
    pub currency: String,
    pub margin_mode: String,
    pub equity: String,
    pub total_avail_balance: String,
    pub margin: String,
    pub margin_frozen: String,
    pub margin_for_unfilled: String,
    pub margin_ratio: String,
    pub maint_margin_ratio: String,
    pub realized_pnl: String,
    pub unrealized_pnl: String,
    pub liqui_mode: String,
    pub can_withdraw: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuturesAccounts {
    pub info: HashMap<String, FuturesCurrencyAccount>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractLeverage {
    #[serde(deserialize_with = "serde_helpers::string_or_number")]
    pub long_leverage: String,
    #[serde(deserialize_with = "serde_helpers::string_or_number")]
    pub short_leverage: String,
}

/// Cross mode reports one `leverage`; fixed mode reports one object per contract
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuturesLeverage {
    pub margin_mode: String,
    pub currency: String,
    #[serde(deserialize_with = "serde_helpers::string_or_number")]
    pub leverage: String,
    #[serde(flatten)]
    pub contracts: HashMap<String, Value>,
}

impl FuturesLeverage {
    /// Fixed-margin leverage for one contract, if reported
    pub fn contract(&self, instrument_id: &str) -> Option<ContractLeverage> {
        self.contracts
            .get(instrument_id)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }
}

// ---------------------------------------------------------------------------
// Perpetual swap accounts and positions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwapHolding {
    pub instrument_id: String,
    pub side: String,
    pub position: String,
    pub avail_position: String,
    pub avg_cost: String,
    pub leverage: String,
    pub liquidation_price: String,
    pub margin: String,
    pub settlement_price: String,
    pub realized_pnl: String,
    pub unrealized_pnl: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwapPositions {
    pub margin_mode: String,
    pub timestamp: String,
    pub holding: Vec<SwapHolding>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwapAccount {
    pub instrument_id: String,
    pub currency: String,
    pub equity: String,
    pub fixed_balance: String,
    pub total_avail_balance: String,
    pub margin: String,
    pub margin_frozen: String,
    pub margin_mode: String,
    pub margin_ratio: String,
    pub realized_pnl: String,
    pub unrealized_pnl: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwapAccounts {
    pub info: Vec<SwapAccount>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwapSettings {
    pub instrument_id: String,
    pub margin_mode: String,
    #[serde(deserialize_with = "serde_helpers::string_or_number")]
    pub long_leverage: String,
    #[serde(deserialize_with = "serde_helpers::string_or_number")]
    pub short_leverage: String,
}

// ---------------------------------------------------------------------------
// ETT
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EttAccount {
    pub currency: String,
    pub balance: String,
    pub holds: String,
    pub available: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EttOrder {
    pub order_id: String,
    pub client_oid: String,
    pub ett: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub quote_currency: String,
    pub price: String,
    pub size: String,
    pub amount: String,
    pub status: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EttConstituent {
    pub currency: String,
    pub amount: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EttConstituents {
    pub ett: String,
    pub net_value: String,
    pub constituents: Vec<EttConstituent>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EttSettlementPrice {
    pub date: String,
    pub price: String,
}
