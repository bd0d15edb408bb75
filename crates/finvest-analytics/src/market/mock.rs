//! Mock Market Data
//!
//! For demos and tests. Serves the static sample quotes and synthesises
//! daily price histories around them.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use tokio::sync::Mutex;

use super::{MAX_HISTORY_DAYS, MarketDataSource};
use crate::error::{AnalyticsError, Result};
use crate::model::{Asset, PriceHistory, PricePoint};
use crate::sample;

/// Maximum relative daily move of a synthetic price
const DAILY_VOLATILITY: f64 = 0.02;

/// Base price for symbols without a quote
const FALLBACK_BASE_PRICE: f64 = 100.0;

/// Mock market data with static quotes
pub struct MockMarketData {
    assets: Vec<Asset>,
    rng: Mutex<StdRng>,
}

impl Default for MockMarketData {
    fn default() -> Self {
        Self::new()
    }
}

impl MockMarketData {
    pub fn new() -> Self {
        Self {
            assets: sample::mock_assets(),
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic histories (for tests)
    pub fn with_seed(seed: u64) -> Self {
        Self {
            assets: sample::mock_assets(),
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn find(&self, symbol: &str) -> Option<&Asset> {
        let symbol = symbol.to_uppercase();
        self.assets.iter().find(|a| a.symbol == symbol)
    }
}

#[async_trait]
impl MarketDataSource for MockMarketData {
    async fn get_asset(&self, symbol: &str) -> Result<Asset> {
        self.find(symbol)
            .cloned()
            .ok_or_else(|| AnalyticsError::UnsupportedAsset(symbol.to_string()))
    }

    async fn price_history(&self, symbol: &str, days: u32) -> Result<PriceHistory> {
        if days > MAX_HISTORY_DAYS {
            return Err(AnalyticsError::InvalidArgument(format!(
                "history of {days} days exceeds the maximum of {MAX_HISTORY_DAYS}"
            )));
        }

        let base_price = self
            .find(symbol)
            .and_then(|a| a.price.to_f64())
            .unwrap_or(FALLBACK_BASE_PRICE);

        let now = Utc::now();
        let mut rng = self.rng.lock().await;
        let mut data = Vec::with_capacity(days as usize + 1);

        for i in (0..=days).rev() {
            let random_change = (rng.gen_range(0.0..1.0) - 0.5) * 2.0 * DAILY_VOLATILITY;
            // Drift shrinks towards today so the last point sits on the quote
            let weight = if days == 0 { 0.0 } else { f64::from(i) / f64::from(days) };
            let price = base_price * (1.0 + random_change * weight);

            let price = Decimal::from_f64(price)
                .ok_or_else(|| AnalyticsError::MarketData(format!("price {price} out of range")))?
                .round_dp(2);

            data.push(PricePoint {
                timestamp: now - Duration::days(i64::from(i)),
                price,
                volume: rng.gen_range(1_000_000..11_000_000),
            });
        }

        tracing::debug!(symbol, days, points = data.len(), "generated mock price history");

        Ok(PriceHistory {
            symbol: symbol.to_uppercase(),
            data,
        })
    }

    async fn health_check(&self) -> bool {
        true // Mock always healthy
    }

    fn name(&self) -> &str {
        "MockMarketData"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AssetType;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_mock_quote() {
        let market = MockMarketData::new();

        let btc = market.get_asset("btc").await.unwrap();
        assert_eq!(btc.symbol, "BTC");
        assert_eq!(btc.asset_type, AssetType::Crypto);
        assert_eq!(btc.price, dec!(45680.50));
    }

    #[tokio::test]
    async fn test_unsupported_asset() {
        let market = MockMarketData::new();
        let result = market.get_asset("NOTREAL").await;
        assert!(matches!(result, Err(AnalyticsError::UnsupportedAsset(_))));
    }

    #[tokio::test]
    async fn test_get_assets_skips_unknown() {
        let market = MockMarketData::new();
        let assets = market.get_assets(&["AAPL", "NOTREAL", "VTI"]).await.unwrap();
        let symbols: Vec<&str> = assets.iter().map(|a| a.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["AAPL", "VTI"]);
    }

    #[tokio::test]
    async fn test_price_history_shape() {
        let market = MockMarketData::with_seed(7);
        let history = market.price_history("AAPL", 30).await.unwrap();

        assert_eq!(history.symbol, "AAPL");
        assert_eq!(history.data.len(), 31);
        assert!(history.data.windows(2).all(|w| w[0].timestamp < w[1].timestamp));

        // Today's point carries no drift
        assert_eq!(history.data.last().unwrap().price, dec!(185.20));

        for point in &history.data {
            assert!(point.price >= dec!(181.49) && point.price <= dec!(188.91));
            assert!((1_000_000..11_000_000).contains(&point.volume));
        }
    }

    #[tokio::test]
    async fn test_price_history_length_is_capped() {
        let market = MockMarketData::with_seed(5);

        let history = market.price_history("AAPL", MAX_HISTORY_DAYS).await.unwrap();
        assert_eq!(history.data.len(), MAX_HISTORY_DAYS as usize + 1);

        for days in [MAX_HISTORY_DAYS + 1, 100_000_000, u32::MAX] {
            let result = market.price_history("AAPL", days).await;
            assert!(matches!(result, Err(AnalyticsError::InvalidArgument(_))));
        }
    }

    #[tokio::test]
    async fn test_price_history_is_seeded() {
        let a = MockMarketData::with_seed(42).price_history("MSFT", 10).await.unwrap();
        let b = MockMarketData::with_seed(42).price_history("MSFT", 10).await.unwrap();
        assert_eq!(a.closes(), b.closes());
    }

    #[tokio::test]
    async fn test_price_history_unknown_symbol_uses_fallback() {
        let market = MockMarketData::with_seed(1);
        let history = market.price_history("zzz", 0).await.unwrap();
        assert_eq!(history.symbol, "ZZZ");
        assert_eq!(history.data.len(), 1);
        assert_eq!(history.data[0].price, dec!(100));
    }
}
