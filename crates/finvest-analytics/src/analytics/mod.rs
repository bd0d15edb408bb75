//! Portfolio Analytics
//!
//! Pure, stateless formulas over holdings, return series and price series.
//! Every function takes a borrowed snapshot and returns an owned result, so
//! callers may invoke them concurrently without coordination.

mod diversification;
mod indicators;
mod performance;
mod risk;

pub use diversification::diversification_score;
pub use indicators::{DEFAULT_RSI_PERIOD, NEUTRAL_RSI, moving_average, rsi};
pub use performance::{DEFAULT_RISK_FREE_RATE, portfolio_metrics, sharpe_ratio};
pub use risk::{DEFAULT_RISK_WEIGHT, risk_score, risk_weight};
