/*
[INPUT]:  Pair and asset type (e.g., BTC-USDT spot)
[OUTPUT]: Ticker, recent trades and tradable pairs
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use okex_v5_adapter::*;

/// Example: Query market data (no authentication required)
///
/// These endpoints are public and don't require API credentials.
#[tokio::main]
async fn main() {
    println!("=== OKEx Market Data Example ===\n");

    // Create client (no auth needed for public endpoints)
    let client = match OkexClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created (no auth required for public endpoints)\n");

    let pair = CurrencyPair::new("BTC", "USDT");

    println!("Fetching ticker for {}...", pair);
    match client.fetch_ticker(&pair, AssetType::Spot).await {
        Ok(ticker) => println!("✓ Ticker: last={} bid={} ask={}", ticker.last, ticker.bid, ticker.ask),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nFetching recent trades for {}...", pair);
    match client.get_recent_trades(&pair, AssetType::Spot).await {
        Ok(trades) => println!("✓ {} trades, newest: {:?}", trades.len(), trades.last()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nFetching tradable futures pairs...");
    match client.fetch_tradable_pairs(AssetType::Futures).await {
        Ok(pairs) => println!("✓ Futures pairs: {:?}", pairs),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
