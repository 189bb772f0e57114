/*
[INPUT]:  Wire records with string-encoded numerics
[OUTPUT]: Domain tickers, trades, orders and positions
[POS]:    Exchange layer - boundary where decimal strings become numbers
[UPDATE]: When wire records or domain types change
*/

use chrono::{DateTime, Utc};

use crate::exchange::domain::{
    AssetType, CurrencyPair, OrderDetail, OrderSide, OrderStatus, OrderSubmit, OrderType,
    Position, PositionDirection, Ticker, TradeData,
};
use crate::http::{OkexError, Result};
use crate::types::{
    AccountPosition, FilledTrade, InstrumentType, OrderDetails, OrderKind, PlaceOrderRequest,
    Side, SizeCurrency, TickerData, TradeMode,
};

pub const EXCHANGE_NAME: &str = "OKEX";

/// Empty or malformed decimals read as zero
pub fn parse_decimal(value: &str) -> f64 {
    value.trim().parse::<f64>().unwrap_or(0.0)
}

/// Accepts RFC3339 text or epoch milliseconds
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(millis) = value.parse::<i64>() {
        return DateTime::from_timestamp_millis(millis);
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}

pub fn order_status_from_state(state: &str) -> OrderStatus {
    match state {
        "live" => OrderStatus::New,
        "partially_filled" => OrderStatus::PartiallyFilled,
        "filled" => OrderStatus::Filled,
        "canceled" => OrderStatus::Cancelled,
        _ => OrderStatus::Unknown,
    }
}

pub fn instrument_type_for(asset: AssetType) -> Result<InstrumentType> {
    asset
        .instrument_type()
        .ok_or_else(|| OkexError::UnsupportedAsset {
            asset: asset.to_string(),
            operation: "instrument lookup",
        })
}

/// Distinct underlyings of futures contracts, in first-seen order
pub fn derive_index_pairs(futures_pairs: &[String]) -> Vec<String> {
    let mut index_pairs: Vec<String> = Vec::new();
    for pair in futures_pairs {
        let underlying = pair.split('_').next().unwrap_or(pair);
        if !index_pairs.iter().any(|seen| seen == underlying) {
            index_pairs.push(underlying.to_string());
        }
    }
    index_pairs
}

fn format_number(value: f64) -> String {
    format!("{value}")
}

pub fn place_order_request_from_submit(order: &OrderSubmit) -> PlaceOrderRequest {
    let side = match order.side {
        OrderSide::Buy => Side::Buy,
        OrderSide::Sell => Side::Sell,
    };
    let ord_type = match order.order_type {
        OrderType::Limit if order.immediate_or_cancel => OrderKind::Ioc,
        OrderType::Limit => OrderKind::Limit,
        OrderType::Market => OrderKind::Market,
        OrderType::PostOnly => OrderKind::PostOnly,
        OrderType::Fok => OrderKind::Fok,
    };
    let td_mode = if order.asset == AssetType::Spot {
        TradeMode::Cash
    } else {
        TradeMode::Cross
    };
    let (sz, tgt_ccy) = if order.amount == 0.0 && order.quote_amount > 0.0 {
        (format_number(order.quote_amount), Some(SizeCurrency::QuoteCcy))
    } else {
        (format_number(order.amount), None)
    };

    PlaceOrderRequest {
        cl_ord_id: order.client_id.clone().filter(|id| !id.is_empty()),
        inst_id: order.pair.request_symbol(),
        td_mode,
        side,
        pos_side: None,
        ord_type,
        sz,
        px: (order.price > 0.0).then(|| format_number(order.price)),
        tgt_ccy,
        reduce_only: order.reduce_only,
    }
}

/// Spot tickers report base and quote volume; contracts report contract volume
pub fn ticker_from_data(data: &TickerData, asset: AssetType) -> Result<Ticker> {
    let pair = CurrencyPair::from_instrument_id(&data.instrument_id, asset)?;
    let (volume, quote_volume) = match asset {
        AssetType::Spot => (
            parse_decimal(&data.base_volume_24h),
            parse_decimal(&data.quote_volume_24h),
        ),
        _ => (parse_decimal(&data.volume_24h), 0.0),
    };
    Ok(Ticker {
        exchange: EXCHANGE_NAME.to_string(),
        pair,
        asset,
        last: parse_decimal(&data.last),
        high: parse_decimal(&data.high_24h),
        low: parse_decimal(&data.low_24h),
        bid: parse_decimal(&data.best_bid),
        ask: parse_decimal(&data.best_ask),
        volume,
        quote_volume,
        open: parse_decimal(&data.open_24h),
        last_updated: parse_timestamp(&data.timestamp).unwrap_or_default(),
    })
}

pub fn trade_from_filled(
    trade: &FilledTrade,
    pair: &CurrencyPair,
    asset: AssetType,
) -> Result<TradeData> {
    Ok(TradeData {
        exchange: EXCHANGE_NAME.to_string(),
        tid: trade.trade_id.clone(),
        pair: pair.clone(),
        asset,
        side: trade.side.parse()?,
        price: parse_decimal(&trade.price),
        amount: parse_decimal(&trade.size),
        timestamp: parse_timestamp(&trade.timestamp).unwrap_or_default(),
    })
}

pub fn order_detail_from_details(details: &OrderDetails, asset: AssetType) -> Result<OrderDetail> {
    Ok(OrderDetail {
        exchange: EXCHANGE_NAME.to_string(),
        id: details.ord_id.clone(),
        pair: CurrencyPair::from_instrument_id(&details.inst_id, asset)?,
        asset,
        side: details.side.parse().ok(),
        amount: parse_decimal(&details.sz),
        executed_amount: parse_decimal(&details.acc_fill_sz),
        price: parse_decimal(&details.px),
        executed_price: parse_decimal(&details.avg_px),
        status: order_status_from_state(&details.state),
        date: parse_timestamp(&details.u_time).unwrap_or_default(),
    })
}

pub fn position_from_account(position: &AccountPosition) -> Position {
    let signed_qty = parse_decimal(&position.pos);
    let side = match position.pos_side.as_str() {
        "long" => PositionDirection::Long,
        "short" => PositionDirection::Short,
        _ if signed_qty < 0.0 => PositionDirection::Short,
        _ => PositionDirection::Long,
    };
    Position {
        symbol: position.inst_id.clone(),
        qty: signed_qty.abs(),
        available_qty: parse_decimal(&position.avail_pos).abs(),
        entry_price: parse_decimal(&position.avg_px),
        mark_price: parse_decimal(&position.mark_px),
        liquidation_price: parse_decimal(&position.liq_px),
        leverage: parse_decimal(&position.lever),
        side,
        unrealised_pnl: parse_decimal(&position.upl),
        realised_pnl: parse_decimal(&position.realized_pnl),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn limit_order() -> OrderSubmit {
        OrderSubmit {
            pair: CurrencyPair::new("BTC", "USDT"),
            asset: AssetType::Spot,
            side: OrderSide::Buy,
            order_type: OrderType::Limit,
            amount: 0.01,
            quote_amount: 0.0,
            price: 30000.5,
            immediate_or_cancel: false,
            reduce_only: false,
            client_id: None,
        }
    }

    #[rstest]
    #[case("live", OrderStatus::New)]
    #[case("partially_filled", OrderStatus::PartiallyFilled)]
    #[case("filled", OrderStatus::Filled)]
    #[case("canceled", OrderStatus::Cancelled)]
    #[case("", OrderStatus::Unknown)]
    #[case("mmp_canceled", OrderStatus::Unknown)]
    fn test_order_status_mapping(#[case] state: &str, #[case] expected: OrderStatus) {
        assert_eq!(order_status_from_state(state), expected);
    }

    #[rstest]
    #[case("30000.5", 30000.5)]
    #[case("", 0.0)]
    #[case("n/a", 0.0)]
    #[case(" 2 ", 2.0)]
    fn test_parse_decimal(#[case] raw: &str, #[case] expected: f64) {
        assert_eq!(parse_decimal(raw), expected);
    }

    #[rstest]
    #[case(AssetType::Spot, Some(InstrumentType::Spot))]
    #[case(AssetType::Futures, Some(InstrumentType::Futures))]
    #[case(AssetType::CoinMarginedFutures, Some(InstrumentType::Futures))]
    #[case(AssetType::PerpetualSwap, Some(InstrumentType::Swap))]
    #[case(AssetType::Index, None)]
    fn test_instrument_type_for(#[case] asset: AssetType, #[case] expected: Option<InstrumentType>) {
        assert_eq!(instrument_type_for(asset).ok(), expected);
    }

    #[test]
    fn test_timestamps_accept_millis_and_rfc3339() {
        let millis = parse_timestamp("1622548800000").unwrap();
        let text = parse_timestamp("2021-06-01T12:00:00.000Z").unwrap();
        assert_eq!(millis, text);
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn test_index_pairs_keep_first_seen_order() {
        let pairs = vec![
            "BTC-USD_210625".to_string(),
            "ETH-USD_210625".to_string(),
            "BTC-USD_210924".to_string(),
        ];
        assert_eq!(derive_index_pairs(&pairs), vec!["BTC-USD", "ETH-USD"]);
    }

    #[test]
    fn test_single_underlying_yields_one_index_pair() {
        let pairs = vec!["BTC-USD_210625".to_string(), "BTC-USD_210924".to_string()];
        assert_eq!(derive_index_pairs(&pairs), vec!["BTC-USD"]);
    }

    #[test]
    fn test_limit_ioc_becomes_ioc_order() {
        let mut order = limit_order();
        order.immediate_or_cancel = true;
        let request = place_order_request_from_submit(&order);
        assert_eq!(request.ord_type, OrderKind::Ioc);
        assert_eq!(request.td_mode, TradeMode::Cash);
        assert_eq!(request.px.as_deref(), Some("30000.5"));
        assert_eq!(request.sz, "0.01");
    }

    #[test]
    fn test_quote_sized_market_order() {
        let mut order = limit_order();
        order.asset = AssetType::PerpetualSwap;
        order.pair = CurrencyPair::new("BTC-USDT", "SWAP");
        order.order_type = OrderType::Market;
        order.amount = 0.0;
        order.quote_amount = 250.0;
        order.price = 0.0;

        let request = place_order_request_from_submit(&order);
        assert_eq!(request.inst_id, "BTC-USDT-SWAP");
        assert_eq!(request.td_mode, TradeMode::Cross);
        assert_eq!(request.sz, "250");
        assert_eq!(request.tgt_ccy, Some(SizeCurrency::QuoteCcy));
        assert!(request.px.is_none());
    }

    #[test]
    fn test_futures_ticker_pair_uses_underlying_as_base() {
        let data = TickerData {
            instrument_id: "BTC-USD-210625".to_string(),
            last: "35000".to_string(),
            best_bid: "34999.5".to_string(),
            best_ask: "35000.5".to_string(),
            volume_24h: "1200".to_string(),
            base_volume_24h: "9".to_string(),
            timestamp: "2021-06-01T12:00:00.000Z".to_string(),
            ..TickerData::default()
        };
        let ticker = ticker_from_data(&data, AssetType::Futures).unwrap();
        assert_eq!(ticker.pair.config_symbol(AssetType::Futures), "BTC-USD_210625");
        assert_eq!(ticker.volume, 1200.0);
        assert_eq!(ticker.quote_volume, 0.0);
        assert_eq!(ticker.bid, 34999.5);
    }

    #[test]
    fn test_trade_with_unknown_side_is_rejected() {
        let trade = FilledTrade {
            trade_id: "1".to_string(),
            price: "1".to_string(),
            size: "1".to_string(),
            side: "unknown".to_string(),
            timestamp: String::new(),
        };
        let pair = CurrencyPair::new("BTC", "USDT");
        assert!(trade_from_filled(&trade, &pair, AssetType::Spot).is_err());
    }

    #[test]
    fn test_order_detail_parses_numbers_and_time() {
        let details = OrderDetails {
            inst_id: "BTC-USDT".to_string(),
            ord_id: "42".to_string(),
            px: "30000".to_string(),
            sz: "0.02".to_string(),
            avg_px: "".to_string(),
            acc_fill_sz: "0.01".to_string(),
            side: "sell".to_string(),
            state: "partially_filled".to_string(),
            u_time: "1622548800000".to_string(),
            ..OrderDetails::default()
        };
        let detail = order_detail_from_details(&details, AssetType::Spot).unwrap();
        assert_eq!(detail.pair, CurrencyPair::new("BTC", "USDT"));
        assert_eq!(detail.side, Some(OrderSide::Sell));
        assert_eq!(detail.executed_amount, 0.01);
        assert_eq!(detail.executed_price, 0.0);
        assert_eq!(detail.status, OrderStatus::PartiallyFilled);
        assert_eq!(detail.date.timestamp(), 1_622_548_800);
    }

    #[rstest]
    #[case("long", "3", PositionDirection::Long)]
    #[case("short", "3", PositionDirection::Short)]
    #[case("net", "-2", PositionDirection::Short)]
    #[case("net", "2", PositionDirection::Long)]
    fn test_position_direction(
        #[case] pos_side: &str,
        #[case] pos: &str,
        #[case] expected: PositionDirection,
    ) {
        let position = AccountPosition {
            inst_id: "BTC-USDT-SWAP".to_string(),
            pos_side: pos_side.to_string(),
            pos: pos.to_string(),
            lever: "5".to_string(),
            ..AccountPosition::default()
        };
        let converted = position_from_account(&position);
        assert_eq!(converted.side, expected);
        assert!(converted.qty > 0.0);
        assert_eq!(converted.leverage, 5.0);
    }
}
