//! Diversification Score
//!
//! Inverse Herfindahl-Hirschman Index over asset-class allocations.

use std::collections::HashMap;

use crate::model::{AssetType, Holding};

/// Diversification score in (nominally) `[0, 100]`, higher is more diversified.
///
/// Allocations are summed per asset type, then
/// `HHI = Σ (allocation / 100)²` and the score is `round((1 - HHI) * 100)`.
///
/// A single type at 100% scores 0. An empty slice has `HHI = 0` and scores
/// 100. Allocations summing past 100 are not validated and may drive the
/// score negative.
pub fn diversification_score(holdings: &[Holding]) -> i64 {
    if holdings.is_empty() {
        tracing::debug!("diversification score of empty holdings defaults to 100");
    }

    let mut by_type: HashMap<&AssetType, f64> = HashMap::new();
    for holding in holdings {
        *by_type.entry(&holding.asset_type).or_insert(0.0) += holding.allocation_percent;
    }

    let hhi: f64 = by_type
        .values()
        .map(|allocation| (allocation / 100.0).powi(2))
        .sum();

    #[allow(clippy::cast_possible_truncation)]
    let score = ((1.0 - hhi) * 100.0).round() as i64;
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_type_is_zero() {
        let holdings = vec![Holding::new(AssetType::Crypto, 100.0)];
        assert_eq!(diversification_score(&holdings), 0);

        // Same type split across positions still counts as one group
        let holdings = vec![
            Holding::new(AssetType::Stock, 30.0),
            Holding::new(AssetType::Stock, 70.0),
        ];
        assert_eq!(diversification_score(&holdings), 0);
    }

    #[test]
    fn test_even_split() {
        let types = [
            AssetType::Stock,
            AssetType::Bond,
            AssetType::Etf,
            AssetType::Crypto,
            AssetType::Commodity,
            AssetType::RealEstate,
            AssetType::Cash,
        ];

        for k in 1..=types.len() {
            let share = 100.0 / k as f64;
            let holdings: Vec<Holding> = types[..k]
                .iter()
                .map(|t| Holding::new(t.clone(), share))
                .collect();
            let expected = ((1.0 - 1.0 / k as f64) * 100.0).round() as i64;
            assert_eq!(diversification_score(&holdings), expected, "k = {k}");
        }
    }

    #[test]
    fn test_four_equal_types() {
        let holdings = vec![
            Holding::new(AssetType::Stock, 25.0),
            Holding::new(AssetType::Bond, 25.0),
            Holding::new(AssetType::Etf, 25.0),
            Holding::new(AssetType::Cash, 25.0),
        ];
        assert_eq!(diversification_score(&holdings), 75);
    }

    #[test]
    fn test_empty_is_fully_diversified() {
        assert_eq!(diversification_score(&[]), 100);
    }

    #[test]
    fn test_unknown_types_group_by_tag() {
        let holdings = vec![
            Holding::new("wine", 50.0),
            Holding::new("art", 50.0),
        ];
        assert_eq!(diversification_score(&holdings), 50);
    }

    #[test]
    fn test_over_allocation_is_accepted() {
        let holdings = vec![
            Holding::new(AssetType::Stock, 150.0),
            Holding::new(AssetType::Bond, 50.0),
        ];
        // HHI = 2.25 + 0.25
        assert_eq!(diversification_score(&holdings), -150);
    }
}
