/*
[INPUT]:  API credentials from the environment and order parameters
[OUTPUT]: Order submission, status and cancellation results
[POS]:    Examples - trading operations
[UPDATE]: When trading API changes
*/

use okex_v5_adapter::*;

/// Example: Trading operations (requires API key + request signature)
///
/// Set OKEX_API_KEY, OKEX_SECRET and OKEX_PASSPHRASE; OKEX_TESTNET=1 routes
/// orders to the simulated trading environment.
#[tokio::main]
async fn main() {
    println!("=== OKEx Trading Example ===\n");

    let (Ok(api_key), Ok(secret), Ok(passphrase)) = (
        std::env::var("OKEX_API_KEY"),
        std::env::var("OKEX_SECRET"),
        std::env::var("OKEX_PASSPHRASE"),
    ) else {
        println!("Trading requires OKEX_API_KEY, OKEX_SECRET and OKEX_PASSPHRASE");
        return;
    };
    let credentials = Credentials {
        api_key,
        secret,
        passphrase,
        testnet: std::env::var("OKEX_TESTNET").is_ok_and(|value| value == "1"),
    };

    let client = match OkexClient::with_credentials(ClientConfig::default(), credentials) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created");

    // Far below market so the order rests
    let order = OrderSubmit {
        pair: CurrencyPair::new("BTC", "USDT"),
        asset: AssetType::Spot,
        side: OrderSide::Buy,
        order_type: OrderType::Limit,
        amount: 0.001,
        quote_amount: 0.0,
        price: 1000.0,
        immediate_or_cancel: false,
        reduce_only: false,
        client_id: None,
    };
    println!("\nSubmitting {:?}", order);

    let submitted = match client.submit_order(&order).await {
        Ok(response) => response,
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };
    println!("✓ Placed: {} ({})", submitted.is_order_placed, submitted.order_id);

    match client
        .get_order_info(&submitted.order_id, &order.pair, order.asset)
        .await
    {
        Ok(detail) => println!("✓ Status: {:?}", detail.status),
        Err(e) => println!("✗ Error: {}", e),
    }

    let cancel = OrderCancel {
        order_id: submitted.order_id,
        client_order_id: String::new(),
        pair: order.pair.clone(),
    };
    match TradingExchange::cancel_order(&client, &cancel).await {
        Ok(()) => println!("✓ Order cancelled"),
        Err(e) => println!("✗ Error: {}", e),
    }
}
