//! Market Data
//!
//! Abstractions over where asset quotes and price histories come from.

mod mock;

pub use mock::MockMarketData;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{Asset, PriceHistory};

/// Longest price history a source will produce (ten years of daily points)
pub const MAX_HISTORY_DAYS: u32 = 3650;

/// Market data source trait (Strategy pattern)
///
/// Implement this for each quote provider; the server only sees the trait object.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Get the current quote for a symbol
    async fn get_asset(&self, symbol: &str) -> Result<Asset>;

    /// Get quotes for multiple symbols, skipping the ones that are unavailable
    async fn get_assets(&self, symbols: &[&str]) -> Result<Vec<Asset>> {
        let mut assets = Vec::new();
        for symbol in symbols {
            match self.get_asset(symbol).await {
                Ok(asset) => assets.push(asset),
                Err(e) => tracing::debug!(symbol, error = %e, "skipping unavailable quote"),
            }
        }
        Ok(assets)
    }

    /// Daily price history covering the last `days` days, oldest first.
    ///
    /// Sources reject `days` above [`MAX_HISTORY_DAYS`] with
    /// [`crate::AnalyticsError::InvalidArgument`].
    async fn price_history(&self, symbol: &str, days: u32) -> Result<PriceHistory>;

    /// Check if the source is reachable
    async fn health_check(&self) -> bool;

    /// Source name
    fn name(&self) -> &str;
}
