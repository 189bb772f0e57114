/*
[INPUT]:  CLI arguments, YAML configuration file
[OUTPUT]: JSON results of one trading-interface operation on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, subcommands, or startup flow
*/

mod config;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::CliConfig;
use okex_v5_adapter::{AssetType, CurrencyPair, OkexClient, TradingExchange};

#[derive(Parser, Debug)]
#[command(name = "okex-v5", version, about = "OKEx v5 REST adapter command line")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Latest ticker for a pair
    Ticker {
        /// Pair in stored form, e.g. BTC-USDT or BTC-USD_210625
        #[arg(long)]
        pair: String,
        #[arg(long, default_value = "spot")]
        asset: AssetType,
    },
    /// Recent public trades, oldest first
    Trades {
        #[arg(long)]
        pair: String,
        #[arg(long, default_value = "spot")]
        asset: AssetType,
    },
    /// Tradable pairs for one asset type, or all of them
    Pairs {
        #[arg(long)]
        asset: Option<AssetType>,
    },
    /// Status of one order (requires credentials)
    Order {
        #[arg(long)]
        id: String,
        #[arg(long)]
        pair: String,
        #[arg(long, default_value = "spot")]
        asset: AssetType,
    },
    /// Open positions (requires credentials)
    Positions,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = match &args.config_path {
        Some(path) => load_config(path)?,
        None => CliConfig::default(),
    };
    let client = build_client(&config)?;
    info!(
        authenticated = client.credentials().is_some(),
        command = ?args.command,
        "client ready"
    );

    match args.command {
        Command::Ticker { pair, asset } => {
            let pair = parse_pair(&pair, asset)?;
            print_json(&client.fetch_ticker(&pair, asset).await.context("fetch ticker")?)
        }
        Command::Trades { pair, asset } => {
            let pair = parse_pair(&pair, asset)?;
            let trades = client
                .get_recent_trades(&pair, asset)
                .await
                .context("fetch recent trades")?;
            print_json(&trades)
        }
        Command::Pairs { asset: Some(asset) } => {
            let pairs = client
                .fetch_tradable_pairs(asset)
                .await
                .context("fetch tradable pairs")?;
            print_json(&pairs)
        }
        Command::Pairs { asset: None } => {
            let pairs = client
                .update_tradable_pairs()
                .await
                .context("update tradable pairs")?;
            print_json(&pairs)
        }
        Command::Order { id, pair, asset } => {
            let pair = parse_pair(&pair, asset)?;
            let detail = client
                .get_order_info(&id, &pair, asset)
                .await
                .context("fetch order info")?;
            print_json(&detail)
        }
        Command::Positions => {
            print_json(&client.get_positions().await.context("fetch positions")?)
        }
    }
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: &PathBuf) -> Result<CliConfig> {
    let path_str = path
        .to_str()
        .context("config path must be valid utf-8")?;
    CliConfig::from_file(path_str).context("load config")
}

fn build_client(config: &CliConfig) -> Result<OkexClient> {
    let client_config = config.client_config();
    let client = match &config.credentials {
        Some(credentials) => OkexClient::with_credentials(client_config, credentials.clone()),
        None => OkexClient::with_config(client_config),
    };
    client.context("create OKEx client")
}

fn parse_pair(symbol: &str, asset: AssetType) -> Result<CurrencyPair> {
    CurrencyPair::from_config_symbol(symbol, asset)
        .with_context(|| format!("parse {asset} pair {symbol}"))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("render output")?;
    println!("{rendered}");
    Ok(())
}
