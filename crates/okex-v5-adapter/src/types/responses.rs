/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::serde_helpers;

// ---------------------------------------------------------------------------
// v5 trade
// ---------------------------------------------------------------------------

/// `trade/order` record; `avgPx` and friends may be empty strings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderDetails {
    pub inst_type: String,
    pub inst_id: String,
    pub ord_id: String,
    pub cl_ord_id: String,
    pub px: String,
    pub sz: String,
    pub avg_px: String,
    pub acc_fill_sz: String,
    pub side: String,
    pub ord_type: String,
    pub state: String,
    pub fee: String,
    pub fee_ccy: String,
    /// Milliseconds since the epoch
    #[serde(deserialize_with = "serde_helpers::string_or_number")]
    pub c_time: String,
    /// Milliseconds since the epoch
    #[serde(deserialize_with = "serde_helpers::string_or_number")]
    pub u_time: String,
}

/// Result of `trade/order` (POST) and `trade/cancel-order`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderAck {
    pub ord_id: String,
    pub cl_ord_id: String,
    pub tag: String,
    #[serde(deserialize_with = "serde_helpers::string_or_number")]
    pub s_code: String,
    pub s_msg: String,
}

pub type PlaceOrderResponse = OrderAck;
pub type CancelOrderResponse = OrderAck;

// ---------------------------------------------------------------------------
// v5 public
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Instrument {
    pub inst_type: String,
    pub inst_id: String,
    pub uly: String,
    pub base_ccy: String,
    pub quote_ccy: String,
    pub settle_ccy: String,
    pub ct_val: String,
    pub ct_mult: String,
    pub ct_val_ccy: String,
    pub ct_type: String,
    pub alias: String,
    pub list_time: String,
    pub exp_time: String,
    pub lever: String,
    pub tick_sz: String,
    pub lot_sz: String,
    pub min_sz: String,
    pub state: String,
}

// ---------------------------------------------------------------------------
// v5 account
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssetBalance {
    pub ccy: String,
    pub eq: String,
    pub cash_bal: String,
    pub avail_bal: String,
    pub avail_eq: String,
    pub frozen_bal: String,
    pub ord_frozen: String,
    pub dis_eq: String,
    pub upl: String,
    pub liab: String,
    pub interest: String,
    pub max_loan: String,
    pub u_time: String,
}

/// `account/balance` record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountBalance {
    pub total_eq: String,
    pub iso_eq: String,
    pub adj_eq: String,
    pub imr: String,
    pub mmr: String,
    pub mgn_ratio: String,
    pub notional_usd: String,
    pub u_time: String,
    pub details: Vec<AssetBalance>,
}

/// `account/positions` record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountPosition {
    pub inst_type: String,
    pub inst_id: String,
    pub pos_id: String,
    pub mgn_mode: String,
    /// "long", "short" or "net"
    pub pos_side: String,
    /// Signed quantity in net mode
    pub pos: String,
    pub avail_pos: String,
    pub avg_px: String,
    pub mark_px: String,
    pub liq_px: String,
    pub last: String,
    pub lever: String,
    pub upl: String,
    pub upl_ratio: String,
    pub realized_pnl: String,
    pub imr: String,
    pub mmr: String,
    pub margin: String,
    pub mgn_ratio: String,
    pub liab: String,
    pub liab_ccy: String,
    pub interest: String,
    pub notional_usd: String,
    pub adl: String,
    pub ccy: String,
    pub trade_id: String,
    pub c_time: String,
    pub u_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SetLeverageResponse {
    pub inst_id: String,
    pub lever: String,
    pub mgn_mode: String,
    pub pos_side: String,
}

// ---------------------------------------------------------------------------
// Futures / perpetual swap / ETT order actions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderPlacement {
    #[serde(deserialize_with = "serde_helpers::bool_or_string")]
    pub result: bool,
    pub order_id: String,
    pub client_oid: String,
    #[serde(deserialize_with = "serde_helpers::string_or_number")]
    pub error_code: String,
    pub error_message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchPlacement {
    #[serde(deserialize_with = "serde_helpers::bool_or_string")]
    pub result: bool,
    pub order_info: Vec<OrderPlacement>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderCancellation {
    #[serde(deserialize_with = "serde_helpers::bool_or_string")]
    pub result: bool,
    pub order_id: String,
    pub client_oid: String,
    pub instrument_id: String,
    #[serde(deserialize_with = "serde_helpers::string_or_number")]
    pub error_code: String,
    pub error_message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchCancellation {
    #[serde(deserialize_with = "serde_helpers::bool_or_string")]
    pub result: bool,
    pub instrument_id: String,
    pub order_ids: Vec<String>,
    pub client_oids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetFuturesLeverageResponse {
    #[serde(deserialize_with = "serde_helpers::bool_or_string")]
    pub result: bool,
    pub currency: String,
    pub instrument_id: String,
    pub direction: String,
    pub margin_mode: String,
    #[serde(deserialize_with = "serde_helpers::string_or_number")]
    pub leverage: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EttOrderPlacement {
    #[serde(deserialize_with = "serde_helpers::bool_or_string")]
    pub result: bool,
    pub order_id: String,
    pub client_oid: String,
}
