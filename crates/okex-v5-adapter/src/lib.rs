/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public OKEx v5 adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod exchange;
pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    Credentials,
    HttpRequest,
    OkexClient,
    OkexError,
    RequestSigner,
    ReqwestTransport,
    Result,
    Transport,
};

// Re-export all types
pub use types::*;

// Re-export the trading interface
pub use exchange::{
    AssetType,
    CurrencyPair,
    OrderCancel,
    OrderDetail,
    OrderSide,
    OrderStatus,
    OrderSubmit,
    OrderType,
    Position,
    PositionDirection,
    SubmitResponse,
    Ticker,
    TradablePairs,
    TradeData,
    TradingExchange,
};
