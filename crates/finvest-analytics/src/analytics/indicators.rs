//! Price Indicators
//!
//! Simple moving average and a single-window RSI.

use crate::error::{AnalyticsError, Result};

/// Look-back used by [`rsi`] when the caller does not supply one
pub const DEFAULT_RSI_PERIOD: usize = 14;

/// RSI reported when there is not enough data to compute one
pub const NEUTRAL_RSI: f64 = 50.0;

/// Simple trailing moving average.
///
/// For every index `i` in `window - 1..len`, the unweighted mean of
/// `samples[i + 1 - window..=i]`. The output has `len - window + 1` values.
///
/// # Errors
///
/// [`AnalyticsError::InvalidArgument`] when `window` is zero or larger than
/// the number of samples.
pub fn moving_average(samples: &[f64], window: usize) -> Result<Vec<f64>> {
    if window == 0 {
        return Err(AnalyticsError::InvalidArgument(
            "moving average window must be positive".into(),
        ));
    }
    if window > samples.len() {
        return Err(AnalyticsError::InvalidArgument(format!(
            "moving average window {window} exceeds {} samples",
            samples.len()
        )));
    }

    #[allow(clippy::cast_precision_loss)]
    let divisor = window as f64;

    Ok(samples
        .windows(window)
        .map(|w| w.iter().sum::<f64>() / divisor)
        .collect())
}

/// Relative Strength Index over the oldest `period + 1` prices.
///
/// Gains and losses are accumulated over the first `period` price changes
/// only; later prices are ignored. This is not the rolling indicator found
/// in charting packages.
///
/// Returns [`NEUTRAL_RSI`] when fewer than `period + 1` prices are given (or
/// `period` is zero), and `100` when there were no losses in the window.
pub fn rsi(prices: &[f64], period: usize) -> f64 {
    if period == 0 || prices.len() <= period {
        tracing::debug!(
            len = prices.len(),
            period,
            "not enough prices for RSI, using neutral value"
        );
        return NEUTRAL_RSI;
    }

    let (gains, losses) = prices[..=period]
        .windows(2)
        .map(|w| w[1] - w[0])
        .fold((0.0_f64, 0.0_f64), |(gains, losses), change| {
            if change > 0.0 {
                (gains + change, losses)
            } else {
                (gains, losses - change)
            }
        });

    #[allow(clippy::cast_precision_loss)]
    let period = period as f64;
    let avg_gain = gains / period;
    let avg_loss = losses / period;

    if avg_loss == 0.0 {
        return 100.0;
    }

    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moving_average() {
        let result = moving_average(&[1.0, 2.0, 3.0, 4.0, 5.0], 3).unwrap();
        assert_eq!(result, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_moving_average_full_and_unit_window() {
        let samples = [2.0, 4.0, 9.0];
        assert_eq!(moving_average(&samples, 3).unwrap(), vec![5.0]);
        assert_eq!(moving_average(&samples, 1).unwrap(), samples.to_vec());
    }

    #[test]
    fn test_moving_average_invalid_window() {
        assert!(matches!(
            moving_average(&[1.0, 2.0], 0),
            Err(AnalyticsError::InvalidArgument(_))
        ));
        assert!(matches!(
            moving_average(&[1.0, 2.0], 3),
            Err(AnalyticsError::InvalidArgument(_))
        ));
        assert!(moving_average(&[], 1).is_err());
    }

    #[test]
    fn test_rsi_short_series_is_neutral() {
        let prices = [10.0, 50.0, 2.0, 80.0, 1.0];
        assert_eq!(rsi(&prices, DEFAULT_RSI_PERIOD), NEUTRAL_RSI);
        assert_eq!(rsi(&[], 3), NEUTRAL_RSI);
        assert_eq!(rsi(&prices, 0), NEUTRAL_RSI);
    }

    #[test]
    fn test_rsi_huge_period_is_neutral() {
        assert_eq!(rsi(&[1.0, 2.0, 3.0], usize::MAX), NEUTRAL_RSI);
        assert_eq!(rsi(&[], usize::MAX), NEUTRAL_RSI);
    }

    #[test]
    fn test_rsi_monotonic_increase() {
        let prices: Vec<f64> = (0..20).map(|i| 100.0 + f64::from(i)).collect();
        assert_eq!(rsi(&prices, DEFAULT_RSI_PERIOD), 100.0);
    }

    #[test]
    fn test_rsi_monotonic_decrease() {
        let prices: Vec<f64> = (0..15).map(|i| 100.0 - f64::from(i)).collect();
        assert_eq!(rsi(&prices, DEFAULT_RSI_PERIOD), 0.0);
    }

    #[test]
    fn test_rsi_mixed() {
        // changes: +2, -1, +2, -1 => gains 4, losses 2, RS 2
        let prices = [10.0, 12.0, 11.0, 13.0, 12.0];
        let value = rsi(&prices, 4);
        assert!((value - (100.0 - 100.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_rsi_only_uses_oldest_window() {
        // Everything after index `period` is ignored, including a crash
        let mut prices: Vec<f64> = (0..=4).map(|i| 10.0 + f64::from(i)).collect();
        prices.extend([1.0, 0.5, 0.1]);
        assert_eq!(rsi(&prices, 4), 100.0);
    }
}
