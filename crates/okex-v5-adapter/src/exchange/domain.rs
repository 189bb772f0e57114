/*
[INPUT]:  Exchange-agnostic trading concepts
[OUTPUT]: Asset types, currency pairs, tickers, trades, orders and positions
[POS]:    Exchange layer - generic domain model shared by all venues
[UPDATE]: When the trading interface gains new concepts or fields
*/

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::http::{OkexError, Result};
use crate::types::InstrumentType;

/// Delimiter used by the exchange for every request symbol
pub const REQUEST_DELIMITER: &str = "-";

/// Market segment of a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    Spot,
    Futures,
    CoinMarginedFutures,
    PerpetualSwap,
    Index,
}

impl AssetType {
    pub const ALL: [AssetType; 5] = [
        AssetType::Spot,
        AssetType::Futures,
        AssetType::CoinMarginedFutures,
        AssetType::PerpetualSwap,
        AssetType::Index,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AssetType::Spot => "spot",
            AssetType::Futures => "futures",
            AssetType::CoinMarginedFutures => "coin_margined_futures",
            AssetType::PerpetualSwap => "perpetual_swap",
            AssetType::Index => "index",
        }
    }

    /// v5 `instType` for instrument discovery; index has none
    pub fn instrument_type(self) -> Option<InstrumentType> {
        match self {
            AssetType::Spot => Some(InstrumentType::Spot),
            AssetType::Futures | AssetType::CoinMarginedFutures => Some(InstrumentType::Futures),
            AssetType::PerpetualSwap => Some(InstrumentType::Swap),
            AssetType::Index => None,
        }
    }

    /// Delimiter between base and quote in stored (config) symbols
    pub fn config_delimiter(self) -> &'static str {
        match self {
            AssetType::Futures | AssetType::PerpetualSwap => "_",
            AssetType::Spot | AssetType::CoinMarginedFutures => "-",
            AssetType::Index => "",
        }
    }

    /// Dated and perpetual contracts carry a suffix after the underlying
    pub fn is_contract(self) -> bool {
        matches!(
            self,
            AssetType::Futures | AssetType::CoinMarginedFutures | AssetType::PerpetualSwap
        )
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = OkexError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        AssetType::ALL
            .into_iter()
            .find(|asset| asset.as_str() == normalized)
            .ok_or_else(|| OkexError::Config(format!("unknown asset type: {s}")))
    }
}

/// Base/quote pair; for contracts the quote holds the delivery or `SWAP` suffix
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    pub base: String,
    pub quote: String,
}

impl CurrencyPair {
    pub fn new(base: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            base: base.into().to_uppercase(),
            quote: quote.into().to_uppercase(),
        }
    }

    /// Split a symbol at the first occurrence of `delimiter`
    pub fn from_delimited(symbol: &str, delimiter: &str) -> Result<Self> {
        if delimiter.is_empty() {
            return Err(OkexError::Config(format!(
                "cannot split {symbol} without a delimiter"
            )));
        }
        symbol
            .split_once(delimiter)
            .filter(|(base, quote)| !base.is_empty() && !quote.is_empty())
            .map(|(base, quote)| Self::new(base, quote))
            .ok_or_else(|| OkexError::Config(format!("invalid pair {symbol}")))
    }

    /// Parse a stored symbol for `asset`; index symbols use the request delimiter
    pub fn from_config_symbol(symbol: &str, asset: AssetType) -> Result<Self> {
        match asset {
            AssetType::Index => Self::from_delimited(symbol, REQUEST_DELIMITER),
            _ => Self::from_delimited(symbol, asset.config_delimiter()),
        }
    }

    /// Parse an exchange instrument id
    ///
    /// Contracts keep the underlying as base: `BTC-USD-210625` → `BTC-USD` / `210625`.
    pub fn from_instrument_id(instrument_id: &str, asset: AssetType) -> Result<Self> {
        let split = if asset.is_contract() {
            instrument_id.rsplit_once(REQUEST_DELIMITER)
        } else {
            instrument_id.split_once(REQUEST_DELIMITER)
        };
        split
            .filter(|(base, quote)| !base.is_empty() && !quote.is_empty())
            .map(|(base, quote)| Self::new(base, quote))
            .ok_or_else(|| {
                OkexError::InvalidResponse(format!("unrecognised instrument id {instrument_id}"))
            })
    }

    /// Symbol sent to the exchange (`BTC-USD-210625`)
    pub fn request_symbol(&self) -> String {
        format!("{}{}{}", self.base, REQUEST_DELIMITER, self.quote)
    }

    /// Symbol as stored for `asset` (`BTC-USD_210625`)
    pub fn config_symbol(&self, asset: AssetType) -> String {
        format!("{}{}{}", self.base, asset.config_delimiter(), self.quote)
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty() || self.quote.is_empty()
    }

    pub fn eq_ignore_case(&self, other: &CurrencyPair) -> bool {
        self.base.eq_ignore_ascii_case(&other.base) && self.quote.eq_ignore_ascii_case(&other.quote)
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.base, REQUEST_DELIMITER, self.quote)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ticker {
    pub exchange: String,
    pub pair: CurrencyPair,
    pub asset: AssetType,
    pub last: f64,
    pub high: f64,
    pub low: f64,
    pub bid: f64,
    pub ask: f64,
    pub volume: f64,
    pub quote_volume: f64,
    pub open: f64,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderSide::Buy => "buy",
            OrderSide::Sell => "sell",
        }
    }
}

impl FromStr for OrderSide {
    type Err = OkexError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "buy" | "bid" => Ok(OrderSide::Buy),
            "sell" | "ask" => Ok(OrderSide::Sell),
            other => Err(OkexError::InvalidResponse(format!("unknown side {other:?}"))),
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Public trade print
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeData {
    pub exchange: String,
    pub tid: String,
    pub pair: CurrencyPair,
    pub asset: AssetType,
    pub side: OrderSide,
    pub price: f64,
    pub amount: f64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    Market,
    Limit,
    PostOnly,
    Fok,
}

impl FromStr for OrderType {
    type Err = OkexError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "market" => Ok(OrderType::Market),
            "limit" => Ok(OrderType::Limit),
            "post_only" => Ok(OrderType::PostOnly),
            "fok" => Ok(OrderType::Fok),
            other => Err(OkexError::InvalidOrder(format!("unknown order type {other:?}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    New,
    PartiallyFilled,
    Filled,
    Cancelled,
    Unknown,
}

/// Order submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSubmit {
    pub pair: CurrencyPair,
    pub asset: AssetType,
    pub side: OrderSide,
    pub order_type: OrderType,
    /// Size in base units; zero defers to `quote_amount`
    pub amount: f64,
    pub quote_amount: f64,
    pub price: f64,
    pub immediate_or_cancel: bool,
    pub reduce_only: bool,
    pub client_id: Option<String>,
}

impl OrderSubmit {
    pub fn validate(&self) -> Result<()> {
        if self.pair.is_empty() {
            return Err(OkexError::InvalidOrder("pair is empty".to_string()));
        }
        let sizes = [self.amount, self.quote_amount, self.price];
        if sizes.iter().any(|value| !value.is_finite()) {
            return Err(OkexError::InvalidOrder(
                "amount, quote amount and price must be finite".to_string(),
            ));
        }
        if self.amount < 0.0 || self.quote_amount < 0.0 {
            return Err(OkexError::InvalidOrder(
                "amount and quote amount must not be negative".to_string(),
            ));
        }
        if self.amount == 0.0 && self.quote_amount == 0.0 {
            return Err(OkexError::InvalidOrder(
                "amount or quote amount must be positive".to_string(),
            ));
        }
        if self.order_type == OrderType::Limit && self.price <= 0.0 {
            return Err(OkexError::InvalidOrder(
                "limit order requires a positive price".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubmitResponse {
    pub is_order_placed: bool,
    pub order_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderDetail {
    pub exchange: String,
    pub id: String,
    pub pair: CurrencyPair,
    pub asset: AssetType,
    /// None when the exchange reports an unrecognised side
    pub side: Option<OrderSide>,
    pub amount: f64,
    pub executed_amount: f64,
    pub price: f64,
    pub executed_price: f64,
    pub status: OrderStatus,
    pub date: DateTime<Utc>,
}

/// Cancellation by exchange id, client id, or both
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCancel {
    pub order_id: String,
    pub client_order_id: String,
    pub pair: CurrencyPair,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CancelBatchResponse {
    pub status: HashMap<String, String>,
}

/// Config-format symbols per asset type
pub type TradablePairs = BTreeMap<AssetType, Vec<String>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionDirection {
    Long,
    Short,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Position {
    pub symbol: String,
    /// Absolute size
    pub qty: f64,
    pub available_qty: f64,
    pub entry_price: f64,
    pub mark_price: f64,
    pub liquidation_price: f64,
    pub leverage: f64,
    pub side: PositionDirection,
    pub unrealised_pnl: f64,
    pub realised_pnl: f64,
}
