//! Risk Score
//!
//! Allocation-weighted average of fixed per-asset-class risk weights.

use crate::model::{AssetType, Holding, RiskProfile};

/// Weight applied to asset types without an entry in the table
pub const DEFAULT_RISK_WEIGHT: f64 = 50.0;

/// Base risk weight of an asset type (0 = riskless, 90 = crypto)
pub fn risk_weight(asset_type: &AssetType) -> f64 {
    match asset_type {
        AssetType::Cash => 0.0,
        AssetType::Bond => 20.0,
        AssetType::RealEstate => 30.0,
        AssetType::Etf => 40.0,
        AssetType::Commodity => 50.0,
        AssetType::Stock => 60.0,
        AssetType::Crypto => 90.0,
        AssetType::Other(_) => DEFAULT_RISK_WEIGHT,
    }
}

/// Weighted risk score rounded to the nearest integer.
///
/// `Σ weight(type) * allocation / 100`. The profile is accepted but does not
/// affect the result yet; it is reserved for profile-specific weighting.
pub fn risk_score(holdings: &[Holding], profile: RiskProfile) -> i64 {
    let weighted: f64 = holdings
        .iter()
        .map(|h| risk_weight(&h.asset_type) * h.allocation_percent / 100.0)
        .sum();

    tracing::debug!(profile = %profile, weighted, "computed risk score");

    #[allow(clippy::cast_possible_truncation)]
    let score = weighted.round() as i64;
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extremes() {
        let cash = vec![Holding::new(AssetType::Cash, 100.0)];
        assert_eq!(risk_score(&cash, RiskProfile::Conservative), 0);

        let crypto = vec![Holding::new(AssetType::Crypto, 100.0)];
        assert_eq!(risk_score(&crypto, RiskProfile::Aggressive), 90);
    }

    #[test]
    fn test_stock_bond_mix() {
        let holdings = vec![
            Holding::new(AssetType::Stock, 60.0),
            Holding::new(AssetType::Bond, 40.0),
        ];
        assert_eq!(risk_score(&holdings, RiskProfile::Moderate), 44);
    }

    #[test]
    fn test_unknown_type_uses_default_weight() {
        let holdings = vec![Holding::new("collectibles", 100.0)];
        assert_eq!(risk_score(&holdings, RiskProfile::Moderate), 50);
    }

    #[test]
    fn test_additive_over_disjoint_holdings() {
        let a = vec![
            Holding::new(AssetType::Stock, 20.0),
            Holding::new(AssetType::RealEstate, 10.0),
        ];
        let b = vec![
            Holding::new(AssetType::Etf, 30.0),
            Holding::new(AssetType::Crypto, 10.0),
        ];
        let union: Vec<Holding> = a.iter().chain(b.iter()).cloned().collect();

        // 12 + 3 = 15, 12 + 9 = 21
        assert_eq!(
            risk_score(&a, RiskProfile::Moderate) + risk_score(&b, RiskProfile::Moderate),
            risk_score(&union, RiskProfile::Moderate)
        );
        assert_eq!(risk_score(&union, RiskProfile::Moderate), 36);
    }

    #[test]
    fn test_profile_does_not_change_score() {
        let holdings = vec![
            Holding::new(AssetType::Stock, 50.0),
            Holding::new(AssetType::Cash, 50.0),
        ];
        let scores: Vec<i64> = [
            RiskProfile::Conservative,
            RiskProfile::Moderate,
            RiskProfile::Aggressive,
        ]
        .into_iter()
        .map(|p| risk_score(&holdings, p))
        .collect();
        assert_eq!(scores, vec![30, 30, 30]);
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(risk_score(&[], RiskProfile::Moderate), 0);
    }
}
