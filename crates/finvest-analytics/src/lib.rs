//! # finvest-analytics
//!
//! Portfolio analytics for the finvest personal-finance mentor.
//!
//! ## Formulas
//!
//! All formulas are pure functions over borrowed snapshots:
//!
//! - **Diversification score** - inverse Herfindahl-Hirschman index over asset classes
//! - **Risk score** - allocation-weighted asset-class risk weights
//! - **Sharpe ratio** - mean excess return over population standard deviation
//! - **Moving average** - simple trailing mean
//! - **RSI** - relative strength over the oldest `period + 1` prices
//!
//! ## Example: Main Portfolio
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Main Portfolio                                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Stock  ██████████████████████████████  70.9%  weight 60    │
//! │  ETF    ████████                        19.9%  weight 40    │
//! │  Crypto ████                             9.3%  weight 90    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  HHI = 0.709² + 0.199² + 0.093² = 0.550                     │
//! │  Diversification = round((1 - 0.550) × 100) = 45            │
//! │  Risk = 42.5 + 7.9 + 8.3 = 59                               │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod advisor;
pub mod analytics;
pub mod error;
pub mod format;
pub mod market;
pub mod model;
pub mod sample;

pub use advisor::{CannedAdvisor, ChatMessage};
pub use analytics::{
    DEFAULT_RISK_FREE_RATE, DEFAULT_RSI_PERIOD, diversification_score, moving_average,
    portfolio_metrics, risk_score, rsi, sharpe_ratio,
};
pub use error::{AnalyticsError, Result};
pub use market::{MAX_HISTORY_DAYS, MarketDataSource, MockMarketData};
pub use model::{
    Asset, AssetType, EducationalContent, Holding, PerformancePoint, Portfolio, PortfolioAsset,
    PortfolioMetrics, PortfolioSummary, PriceHistory, Recommendation, RiskAssessment, RiskProfile,
    TradingSignal,
};
