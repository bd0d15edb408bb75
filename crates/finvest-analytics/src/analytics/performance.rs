//! Return-based performance measures

use rust_decimal::Decimal;

use crate::error::{AnalyticsError, Result};
use crate::model::{PortfolioAsset, PortfolioMetrics};

/// Risk-free rate used when the caller does not supply one
pub const DEFAULT_RISK_FREE_RATE: f64 = 0.02;

/// Simplified Sharpe ratio: `(mean - risk_free_rate) / σ`.
///
/// σ is the population standard deviation (divides by `N`). A series with
/// zero (or NaN) volatility yields `0.0` whatever its mean, rather than an
/// infinite or NaN ratio. `risk_free_rate` must use the same unit as `returns`.
///
/// # Errors
///
/// [`AnalyticsError::InvalidArgument`] when `returns` is empty.
pub fn sharpe_ratio(returns: &[f64], risk_free_rate: f64) -> Result<f64> {
    if returns.is_empty() {
        return Err(AnalyticsError::InvalidArgument(
            "sharpe ratio requires at least one return".into(),
        ));
    }

    #[allow(clippy::cast_precision_loss)]
    let n = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / n;
    let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;

    // A constant series is exactly zero volatility, even when the mean picks up rounding noise
    #[allow(clippy::float_cmp)]
    let constant = returns.iter().all(|&r| r == returns[0]);
    let std_dev = if constant { 0.0 } else { variance.sqrt() };

    if std_dev.is_nan() || std_dev <= 0.0 {
        tracing::debug!(mean, std_dev, "no usable volatility, sharpe ratio reported as 0");
        return Ok(0.0);
    }

    Ok((mean - risk_free_rate) / std_dev)
}

/// Total value, total return and return percentage over positions.
///
/// The percentage is `total_return / total_value * 100`, or zero when the
/// total value is not positive.
pub fn portfolio_metrics(assets: &[PortfolioAsset]) -> PortfolioMetrics {
    let total_value: Decimal = assets.iter().map(|a| a.value).sum();
    let total_return: Decimal = assets.iter().map(|a| a.total_return).sum();

    let total_return_percent = if total_value > Decimal::ZERO {
        (total_return / total_value) * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    PortfolioMetrics {
        total_value,
        total_return,
        total_return_percent,
    }
}
