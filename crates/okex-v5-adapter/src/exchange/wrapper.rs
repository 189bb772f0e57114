/*
[INPUT]:  TradingExchange calls against an OkexClient
[OUTPUT]: Domain records built from catalog endpoint responses
[POS]:    Exchange layer - OKEx implementation of the trading interface
[UPDATE]: When endpoint selection per asset type changes
*/

use async_trait::async_trait;
use tracing::{debug, info};

use crate::exchange::convert::{self, EXCHANGE_NAME};
use crate::exchange::domain::{
    AssetType, CancelBatchResponse, CurrencyPair, OrderCancel, OrderDetail, OrderSubmit,
    Position, SubmitResponse, Ticker, TradablePairs, TradeData,
};
use crate::exchange::TradingExchange;
use crate::http::{OkexClient, OkexError, Result};
use crate::types::{CancelOrderRequest, FilledOrdersRequest, OrderRequest};

/// Asset types refreshed by `update_tradable_pairs`; index pairs come from futures
const PAIR_DISCOVERY_ASSETS: [AssetType; 3] = [
    AssetType::Spot,
    AssetType::Futures,
    AssetType::PerpetualSwap,
];

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

#[async_trait]
impl TradingExchange for OkexClient {
    fn name(&self) -> &str {
        EXCHANGE_NAME
    }

    async fn update_ticker(&self, pair: &CurrencyPair, asset: AssetType) -> Result<Ticker> {
        let tickers = match asset {
            AssetType::Spot => self.get_spot_all_token_pairs_information().await?,
            AssetType::PerpetualSwap => self.get_all_swap_tokens_information().await?,
            AssetType::Futures => self.get_all_futures_token_info().await?,
            other => {
                return Err(OkexError::UnsupportedAsset {
                    asset: other.to_string(),
                    operation: "ticker update",
                });
            }
        };
        debug!(%asset, count = tickers.len(), "tickers received");

        tickers
            .iter()
            .filter_map(|data| convert::ticker_from_data(data, asset).ok())
            .find(|ticker| ticker.pair.eq_ignore_case(pair))
            .ok_or_else(|| OkexError::TickerNotFound {
                pair: pair.config_symbol(asset),
            })
    }

    async fn fetch_ticker(&self, pair: &CurrencyPair, asset: AssetType) -> Result<Ticker> {
        if asset == AssetType::Index {
            return Err(OkexError::UnsupportedAsset {
                asset: asset.to_string(),
                operation: "ticker fetching",
            });
        }
        self.update_ticker(pair, asset).await
    }

    async fn get_recent_trades(
        &self,
        pair: &CurrencyPair,
        asset: AssetType,
    ) -> Result<Vec<TradeData>> {
        let request = FilledOrdersRequest {
            instrument_id: pair.request_symbol(),
            ..FilledOrdersRequest::default()
        };
        let fills = match asset {
            AssetType::Spot => self.get_spot_filled_orders_information(&request).await?,
            AssetType::Futures => self.get_futures_filled_order(&request).await?,
            AssetType::PerpetualSwap => self.get_swap_filled_orders_data(&request).await?,
            other => {
                return Err(OkexError::UnsupportedAsset {
                    asset: other.to_string(),
                    operation: "recent trades",
                });
            }
        };

        let mut trades = fills
            .iter()
            .map(|fill| convert::trade_from_filled(fill, pair, asset))
            .collect::<Result<Vec<_>>>()?;
        trades.sort_by_key(|trade| trade.timestamp);
        Ok(trades)
    }

    async fn submit_order(&self, order: &OrderSubmit) -> Result<SubmitResponse> {
        order.validate()?;
        let request = convert::place_order_request_from_submit(order);
        let response = self.place_order(&request).await?;

        let mut submitted = SubmitResponse::default();
        if !response.ord_id.is_empty() {
            submitted.is_order_placed = true;
            submitted.order_id = response.ord_id;
        }
        info!(
            inst_id = %request.inst_id,
            side = %order.side,
            placed = submitted.is_order_placed,
            order_id = %submitted.order_id,
            "order submitted"
        );
        Ok(submitted)
    }

    async fn get_order_info(
        &self,
        order_id: &str,
        pair: &CurrencyPair,
        asset: AssetType,
    ) -> Result<OrderDetail> {
        let request = OrderRequest {
            order_id: order_id.to_string(),
            instrument_id: pair.request_symbol(),
        };
        let details = self.get_order(&request).await?;
        convert::order_detail_from_details(&details, asset)
    }

    async fn cancel_order(&self, cancel: &OrderCancel) -> Result<()> {
        if cancel.order_id.is_empty() && cancel.client_order_id.is_empty() {
            return Err(OkexError::InvalidOrder(
                "cancel requires an order id or client order id".to_string(),
            ));
        }
        let request = CancelOrderRequest {
            inst_id: cancel.pair.request_symbol(),
            ord_id: non_empty(&cancel.order_id),
            cl_ord_id: non_empty(&cancel.client_order_id),
        };
        let ack = OkexClient::cancel_order(self, &request).await?;
        info!(inst_id = %request.inst_id, ord_id = %ack.ord_id, "order cancelled");
        Ok(())
    }

    async fn cancel_batch_orders(&self, _orders: &[OrderCancel]) -> Result<CancelBatchResponse> {
        Err(OkexError::NotYetImplemented("batch order cancellation"))
    }

    async fn fetch_tradable_pairs(&self, asset: AssetType) -> Result<Vec<String>> {
        let instrument_type = convert::instrument_type_for(asset)?;
        let instruments = self.get_instruments(instrument_type).await?;
        instruments
            .iter()
            .map(|instrument| {
                CurrencyPair::from_instrument_id(&instrument.inst_id, asset)
                    .map(|pair| pair.config_symbol(asset))
            })
            .collect()
    }

    async fn update_tradable_pairs(&self) -> Result<TradablePairs> {
        let mut pairs = TradablePairs::new();
        for asset in PAIR_DISCOVERY_ASSETS {
            let fetched = self.fetch_tradable_pairs(asset).await?;
            if asset == AssetType::Futures {
                pairs.insert(AssetType::Index, convert::derive_index_pairs(&fetched));
            }
            debug!(%asset, count = fetched.len(), "tradable pairs updated");
            pairs.insert(asset, fetched);
        }
        Ok(pairs)
    }

    async fn get_positions(&self) -> Result<Vec<Position>> {
        let positions = self.get_account_positions().await?;
        Ok(positions.iter().map(convert::position_from_account).collect())
    }
}
