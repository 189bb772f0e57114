/*
[INPUT]:  Mock catalog responses
[OUTPUT]: Test results for the trading interface binding
[POS]:    Integration tests - TradingExchange over OkexClient
[UPDATE]: When adapter conversions or endpoint selection change
*/

mod common;

use common::{envelope, private_client, public_client, setup_mock_server};
use okex_v5_adapter::{
    AssetType, CurrencyPair, OkexError, OrderCancel, OrderSide, OrderStatus, OrderSubmit,
    OrderType, PositionDirection, TradingExchange,
};
use serde_json::json;
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, body_partial_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn spot_limit(price: f64) -> OrderSubmit {
    OrderSubmit {
        pair: CurrencyPair::new("BTC", "USDT"),
        asset: AssetType::Spot,
        side: OrderSide::Buy,
        order_type: OrderType::Limit,
        amount: 0.5,
        quote_amount: 0.0,
        price,
        immediate_or_cancel: false,
        reduce_only: false,
        client_id: None,
    }
}

#[tokio::test]
async fn test_update_ticker_selects_requested_futures_contract() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/v5/instruments/ticker"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            {"instrument_id": "BTC-USD-210625", "last": "35000", "volume_24h": "10"},
            {"instrument_id": "BTC-USD-210924", "last": "36000", "volume_24h": "20",
             "high_24h": "37000", "low_24h": "34000", "best_bid": "35999", "best_ask": "36001",
             "timestamp": "2021-06-01T12:00:00.000Z"}
        ]))))
        .mount(&server)
        .await;

    let client = public_client(&server);
    let pair = assert_ok!(CurrencyPair::from_config_symbol(
        "BTC-USD_210924",
        AssetType::Futures
    ));
    let ticker = assert_ok!(client.update_ticker(&pair, AssetType::Futures).await);

    assert_eq!(ticker.last, 36000.0);
    assert_eq!(ticker.volume, 20.0);
    assert_eq!(ticker.bid, 35999.0);
    assert_eq!(ticker.ask, 36001.0);
    assert_eq!(ticker.pair.config_symbol(AssetType::Futures), "BTC-USD_210924");
}

#[tokio::test]
async fn test_spot_ticker_volumes_and_missing_pair() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/v5/instruments/ticker"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            {"instrument_id": "BTC-USDT", "last": "35000", "base_volume_24h": "12.5",
             "quote_volume_24h": "437500"}
        ]))))
        .mount(&server)
        .await;

    let client = public_client(&server);
    let ticker = assert_ok!(
        client
            .fetch_ticker(&CurrencyPair::new("btc", "usdt"), AssetType::Spot)
            .await
    );
    assert_eq!(ticker.volume, 12.5);
    assert_eq!(ticker.quote_volume, 437500.0);

    let err = client
        .update_ticker(&CurrencyPair::new("ETH", "USDT"), AssetType::Spot)
        .await
        .unwrap_err();
    assert!(matches!(err, OkexError::TickerNotFound { .. }));
}

#[tokio::test]
async fn test_recent_trades_are_sorted_oldest_first() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/v5/instruments/BTC-USD-SWAP/trades"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            {"trade_id": "3", "price": "35002", "size": "1", "side": "sell",
             "timestamp": "2021-06-01T12:00:03.000Z"},
            {"trade_id": "1", "price": "35000", "size": "2", "side": "buy",
             "timestamp": "2021-06-01T12:00:01.000Z"},
            {"trade_id": "2", "price": "35001", "size": "3", "side": "buy",
             "timestamp": "2021-06-01T12:00:02.000Z"}
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let pair = CurrencyPair::new("BTC-USD", "SWAP");
    let trades = assert_ok!(
        public_client(&server)
            .get_recent_trades(&pair, AssetType::PerpetualSwap)
            .await
    );

    let ids: Vec<&str> = trades.iter().map(|trade| trade.tid.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(trades[0].side, OrderSide::Buy);
    assert_eq!(trades[2].amount, 1.0);
}

#[tokio::test]
async fn test_recent_trades_reject_unknown_side() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/v5/instruments/BTC-USDT/trades"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            {"trade_id": "1", "price": "1", "size": "1", "side": "sideways"}
        ]))))
        .mount(&server)
        .await;

    let result = public_client(&server)
        .get_recent_trades(&CurrencyPair::new("BTC", "USDT"), AssetType::Spot)
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_submit_limit_ioc_order() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/api/v5/trade/order"))
        .and(body_json(json!({
            "instId": "BTC-USDT",
            "tdMode": "cash",
            "side": "buy",
            "ordType": "ioc",
            "sz": "0.5",
            "px": "35000.5"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            {"ordId": "312269865356374016", "clOrdId": "", "sCode": "0", "sMsg": ""}
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let mut order = spot_limit(35000.5);
    order.immediate_or_cancel = true;
    let response = assert_ok!(private_client(&server).submit_order(&order).await);

    assert!(response.is_order_placed);
    assert_eq!(response.order_id, "312269865356374016");
}

#[tokio::test]
async fn test_submit_quote_sized_swap_order() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/api/v5/trade/order"))
        .and(body_partial_json(json!({
            "instId": "BTC-USDT-SWAP",
            "tdMode": "cross",
            "ordType": "market",
            "sz": "100",
            "tgtCcy": "quote_ccy"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            {"ordId": "", "sCode": "0", "sMsg": ""}
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let order = OrderSubmit {
        pair: CurrencyPair::new("BTC-USDT", "SWAP"),
        asset: AssetType::PerpetualSwap,
        side: OrderSide::Sell,
        order_type: OrderType::Market,
        amount: 0.0,
        quote_amount: 100.0,
        price: 0.0,
        immediate_or_cancel: false,
        reduce_only: false,
        client_id: None,
    };
    let response = assert_ok!(private_client(&server).submit_order(&order).await);
    assert!(!response.is_order_placed);
}

#[tokio::test]
async fn test_invalid_order_never_reaches_exchange() {
    let server = setup_mock_server().await;
    let err = private_client(&server)
        .submit_order(&spot_limit(0.0))
        .await
        .unwrap_err();
    assert!(matches!(err, OkexError::InvalidOrder(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_order_info_maps_state_and_numbers() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/v5/trade/order"))
        .and(query_param("ordId", "42"))
        .and(query_param("instId", "BTC-USDT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([{
            "instId": "BTC-USDT",
            "ordId": "42",
            "px": "35000",
            "sz": "1",
            "avgPx": "34999.5",
            "accFillSz": "1",
            "side": "buy",
            "state": "filled",
            "uTime": "1622548800000"
        }]))))
        .expect(1)
        .mount(&server)
        .await;

    let detail = assert_ok!(
        private_client(&server)
            .get_order_info("42", &CurrencyPair::new("BTC", "USDT"), AssetType::Spot)
            .await
    );
    assert_eq!(detail.status, OrderStatus::Filled);
    assert_eq!(detail.executed_price, 34999.5);
    assert_eq!(detail.amount, 1.0);
    assert_eq!(detail.date.timestamp(), 1_622_548_800);
}

#[tokio::test]
async fn test_cancel_order_by_client_id() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/api/v5/trade/cancel-order"))
        .and(body_json(json!({"instId": "BTC-USDT", "clOrdId": "mine-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            {"ordId": "42", "clOrdId": "mine-1", "sCode": "0", "sMsg": ""}
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let cancel = OrderCancel {
        order_id: String::new(),
        client_order_id: "mine-1".to_string(),
        pair: CurrencyPair::new("BTC", "USDT"),
    };
    assert_ok!(TradingExchange::cancel_order(&private_client(&server), &cancel).await);
}

#[tokio::test]
async fn test_update_tradable_pairs_derives_index() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/v5/public/instruments"))
        .and(query_param("instType", "SPOT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            {"instId": "BTC-USDT"}, {"instId": "ETH-USDT"}
        ]))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v5/public/instruments"))
        .and(query_param("instType", "FUTURES"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            {"instId": "BTC-USD-210625"}, {"instId": "BTC-USD-210924"}
        ]))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v5/public/instruments"))
        .and(query_param("instType", "SWAP"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            {"instId": "BTC-USD-SWAP"}
        ]))))
        .mount(&server)
        .await;

    let pairs = assert_ok!(public_client(&server).update_tradable_pairs().await);

    assert_eq!(pairs[&AssetType::Spot], vec!["BTC-USDT", "ETH-USDT"]);
    assert_eq!(
        pairs[&AssetType::Futures],
        vec!["BTC-USD_210625", "BTC-USD_210924"]
    );
    assert_eq!(pairs[&AssetType::Index], vec!["BTC-USD"]);
    assert_eq!(pairs[&AssetType::PerpetualSwap], vec!["BTC-USD_SWAP"]);
}

#[tokio::test]
async fn test_positions_convert_net_mode_sign() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/v5/account/positions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            {"instId": "BTC-USDT-SWAP", "posSide": "net", "pos": "-2", "availPos": "-2",
             "avgPx": "35000", "markPx": "34900", "liqPx": "45000", "lever": "10",
             "upl": "200", "realizedPnl": "-1.5"}
        ]))))
        .mount(&server)
        .await;

    let positions = assert_ok!(private_client(&server).get_positions().await);
    assert_eq!(positions.len(), 1);

    let position = &positions[0];
    assert_eq!(position.symbol, "BTC-USDT-SWAP");
    assert_eq!(position.side, PositionDirection::Short);
    assert_eq!(position.qty, 2.0);
    assert_eq!(position.leverage, 10.0);
    assert_eq!(position.realised_pnl, -1.5);
}
