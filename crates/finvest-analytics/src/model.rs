//! Domain Models
//!
//! Core data types for portfolio analytics.
//! Money values use `rust_decimal`; allocation shares and analytics inputs are `f64`.

use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::analytics;
use crate::error::AnalyticsError;

/// Asset class of a holding.
///
/// Unrecognised tags are kept verbatim in [`AssetType::Other`] so that
/// analytics can fall back to defaults instead of rejecting the input.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AssetType {
    Stock,
    Bond,
    Etf,
    Crypto,
    Commodity,
    RealEstate,
    Cash,
    Other(String),
}

impl AssetType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Stock => "stock",
            Self::Bond => "bond",
            Self::Etf => "etf",
            Self::Crypto => "crypto",
            Self::Commodity => "commodity",
            Self::RealEstate => "real_estate",
            Self::Cash => "cash",
            Self::Other(tag) => tag,
        }
    }

    /// Display label (Italian, as shown in the dashboard)
    pub fn label(&self) -> &str {
        match self {
            Self::Stock => "Azioni",
            Self::Bond => "Obbligazioni",
            Self::Etf => "ETF",
            Self::Crypto => "Criptovalute",
            Self::Commodity => "Materie Prime",
            Self::RealEstate => "Immobiliare",
            Self::Cash => "Liquidità",
            Self::Other(tag) => tag,
        }
    }
}

impl From<&str> for AssetType {
    fn from(tag: &str) -> Self {
        match tag {
            "stock" => Self::Stock,
            "bond" => Self::Bond,
            "etf" => Self::Etf,
            "crypto" => Self::Crypto,
            "commodity" => Self::Commodity,
            "real_estate" => Self::RealEstate,
            "cash" => Self::Cash,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for AssetType {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<AssetType> for String {
    fn from(asset_type: AssetType) -> Self {
        match asset_type {
            AssetType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for AssetType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single allocation slice used by the analytics formulas
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Asset class
    #[serde(rename = "type")]
    pub asset_type: AssetType,

    /// Share of the portfolio in percent (0-100)
    #[serde(alias = "allocation")]
    pub allocation_percent: f64,
}

impl Holding {
    pub fn new(asset_type: impl Into<AssetType>, allocation_percent: f64) -> Self {
        Self {
            asset_type: asset_type.into(),
            allocation_percent,
        }
    }
}

/// Investor risk profile
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskProfile {
    Conservative,
    #[default]
    Moderate,
    Aggressive,
}

impl RiskProfile {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Conservative => "conservative",
            Self::Moderate => "moderate",
            Self::Aggressive => "aggressive",
        }
    }
}

impl FromStr for RiskProfile {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "conservative" => Ok(Self::Conservative),
            "moderate" => Ok(Self::Moderate),
            "aggressive" => Ok(Self::Aggressive),
            _ => Err(AnalyticsError::UnknownRiskProfile(s.to_string())),
        }
    }
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative risk level
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Basso",
            Self::Medium => "Medio",
            Self::High => "Alto",
            Self::VeryHigh => "Molto Alto",
        }
    }
}

/// Reporting period for performance figures
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1D")]
    OneDay,
    #[serde(rename = "1W")]
    OneWeek,
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "YTD")]
    YearToDate,
}

impl Timeframe {
    pub const fn code(self) -> &'static str {
        match self {
            Self::OneDay => "1D",
            Self::OneWeek => "1W",
            Self::OneMonth => "1M",
            Self::ThreeMonths => "3M",
            Self::SixMonths => "6M",
            Self::OneYear => "1Y",
            Self::YearToDate => "YTD",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::OneDay => "1 Giorno",
            Self::OneWeek => "1 Settimana",
            Self::OneMonth => "1 Mese",
            Self::ThreeMonths => "3 Mesi",
            Self::SixMonths => "6 Mesi",
            Self::OneYear => "1 Anno",
            Self::YearToDate => "Anno Corrente",
        }
    }
}

impl FromStr for Timeframe {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "1D" => Ok(Self::OneDay),
            "1W" => Ok(Self::OneWeek),
            "1M" => Ok(Self::OneMonth),
            "3M" => Ok(Self::ThreeMonths),
            "6M" => Ok(Self::SixMonths),
            "1Y" => Ok(Self::OneYear),
            "YTD" => Ok(Self::YearToDate),
            _ => Err(AnalyticsError::InvalidArgument(format!("unknown timeframe '{s}'"))),
        }
    }
}

/// A tradable asset
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,

    /// Ticker symbol (e.g., "AAPL", "BTC")
    pub symbol: String,

    pub name: String,

    #[serde(rename = "type")]
    pub asset_type: AssetType,

    /// Last price
    pub price: Decimal,

    /// Absolute daily change
    pub change: Decimal,

    /// Daily change percentage
    pub change_percent: Decimal,

    /// Daily traded volume
    pub volume: u64,

    pub market_cap: Option<Decimal>,
}

impl Asset {
    pub fn new(
        id: impl Into<String>,
        symbol: impl Into<String>,
        name: impl Into<String>,
        asset_type: AssetType,
        price: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.into().to_uppercase(),
            name: name.into(),
            asset_type,
            price,
            change: Decimal::ZERO,
            change_percent: Decimal::ZERO,
            volume: 0,
            market_cap: None,
        }
    }
}

/// An asset held in a portfolio
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PortfolioAsset {
    #[serde(flatten)]
    pub asset: Asset,

    pub quantity: Decimal,

    /// Current value (quantity * price)
    pub value: Decimal,

    /// Share of the portfolio value in percent
    pub allocation: f64,

    /// Average purchase price per unit
    pub average_price: Decimal,

    /// Unrealized return
    pub total_return: Decimal,

    /// Unrealized return percentage
    pub total_return_percent: Decimal,
}

impl PortfolioAsset {
    pub fn new(asset: Asset, quantity: Decimal, average_price: Decimal) -> Self {
        let mut position = Self {
            asset,
            quantity,
            value: Decimal::ZERO,
            allocation: 0.0,
            average_price,
            total_return: Decimal::ZERO,
            total_return_percent: Decimal::ZERO,
        };
        position.revalue();
        position
    }

    /// Total cost of position
    pub fn total_cost(&self) -> Decimal {
        self.quantity * self.average_price
    }

    /// Recompute value and return from the current asset price
    pub fn revalue(&mut self) {
        self.value = self.quantity * self.asset.price;
        let cost = self.total_cost();
        self.total_return = self.value - cost;
        self.total_return_percent = if cost > Decimal::ZERO {
            (self.total_return / cost) * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };
    }

    pub fn holding(&self) -> Holding {
        Holding::new(self.asset.asset_type.clone(), self.allocation)
    }
}

/// Aggregate value and return of a set of positions
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioMetrics {
    pub total_value: Decimal,
    pub total_return: Decimal,
    pub total_return_percent: Decimal,
}

/// Metrics plus the derived analytics scores
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PortfolioSummary {
    #[serde(flatten)]
    pub metrics: PortfolioMetrics,
    pub diversification_score: i64,
    pub risk_score: i64,
    pub risk_profile: RiskProfile,
}

/// A portfolio of positions
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Portfolio {
    pub id: String,

    pub name: String,

    /// Positions in display order
    pub assets: Vec<PortfolioAsset>,

    pub day_change: Decimal,

    pub day_change_percent: Decimal,

    pub last_updated: DateTime<Utc>,
}

impl Portfolio {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            assets: Vec::new(),
            day_change: Decimal::ZERO,
            day_change_percent: Decimal::ZERO,
            last_updated: Utc::now(),
        }
    }

    /// Add a position and recompute allocations
    pub fn add_asset(&mut self, asset: PortfolioAsset) {
        self.assets.push(asset);
        self.refresh_allocations();
    }

    /// Total portfolio value
    pub fn total_value(&self) -> Decimal {
        self.assets.iter().map(|a| a.value).sum()
    }

    /// Set each position's allocation to its share of the total value
    pub fn refresh_allocations(&mut self) {
        let total = self.total_value();
        for position in &mut self.assets {
            position.allocation = if total > Decimal::ZERO {
                ((position.value / total) * Decimal::ONE_HUNDRED)
                    .to_f64()
                    .unwrap_or(0.0)
            } else {
                0.0
            };
        }
    }

    /// Update all positions with current prices
    pub fn update_prices(&mut self, prices: &HashMap<String, Decimal>) {
        for position in &mut self.assets {
            if let Some(&price) = prices.get(&position.asset.symbol) {
                position.asset.price = price;
                position.revalue();
            }
        }
        self.refresh_allocations();
        self.last_updated = Utc::now();
    }

    pub fn holdings(&self) -> Vec<Holding> {
        self.assets.iter().map(PortfolioAsset::holding).collect()
    }

    pub fn metrics(&self) -> PortfolioMetrics {
        analytics::portfolio_metrics(&self.assets)
    }

    /// Metrics together with diversification and risk scores
    pub fn summary(&self, profile: RiskProfile) -> PortfolioSummary {
        let holdings = self.holdings();
        PortfolioSummary {
            metrics: self.metrics(),
            diversification_score: analytics::diversification_score(&holdings),
            risk_score: analytics::risk_score(&holdings, profile),
            risk_profile: profile,
        }
    }
}

/// Kind of action an advisor recommendation proposes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationType {
    Buy,
    Sell,
    Hold,
    Rebalance,
    Diversify,
}

/// Advisor recommendation shown on the dashboard
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,

    #[serde(rename = "type")]
    pub kind: RecommendationType,

    pub title: String,
    pub description: String,

    /// Confidence in percent (0-100)
    pub confidence: u8,

    /// Expected return in percent, when one was estimated
    pub expected_return: Option<f64>,

    pub risk_level: RiskLevel,

    /// Free-form horizon, e.g. "3-6 mesi"
    pub timeframe: String,

    pub reasoning: Vec<String>,
    pub action_items: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Direction and strength class of a trading signal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalType {
    Buy,
    Sell,
    StrongBuy,
    StrongSell,
}

impl SignalType {
    pub const fn is_bullish(self) -> bool {
        matches!(self, Self::Buy | Self::StrongBuy)
    }
}

/// Short-term technical signal on a single symbol
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TradingSignal {
    pub id: String,
    pub symbol: String,

    #[serde(rename = "type")]
    pub kind: SignalType,

    /// Signal strength (0-100)
    pub strength: u8,

    /// Price when the signal fired
    pub price: Decimal,

    pub target_price: Option<Decimal>,
    pub stop_loss: Option<Decimal>,
    pub timeframe: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl TradingSignal {
    /// Reward-to-risk ratio from entry, target and stop loss.
    ///
    /// `None` unless both levels are set and the stop sits on the losing side
    /// of the entry price.
    pub fn reward_to_risk(&self) -> Option<Decimal> {
        let target = self.target_price?;
        let stop = self.stop_loss?;

        let (reward, risk) = if self.kind.is_bullish() {
            (target - self.price, self.price - stop)
        } else {
            (self.price - target, stop - self.price)
        };

        (risk > Decimal::ZERO).then(|| reward / risk)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EducationCategory {
    Basics,
    Stocks,
    Bonds,
    Crypto,
    Options,
    Analysis,
    Psychology,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// A course in the education section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EducationalContent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: EducationCategory,
    pub difficulty: DifficultyLevel,

    /// Length in minutes
    pub duration_minutes: u32,

    pub content: String,
    pub video_url: Option<String>,
    pub tags: Vec<String>,
    pub completed: bool,

    /// Progress in percent (0-100)
    pub progress: u8,
}

/// Breakdown of portfolio risk by source, each component 0-100
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub overall_risk: RiskLevel,
    pub diversification_risk: u8,
    pub market_risk: u8,
    pub liquidity_risk: u8,
    pub concentration_risk: u8,
    pub volatility_risk: u8,
    pub score: u8,
    pub recommendations: Vec<String>,
}

/// Portfolio return over a reporting period, with an optional benchmark
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PerformancePoint {
    pub period: Timeframe,

    /// Return in percent
    #[serde(rename = "return")]
    pub portfolio_return: f64,

    /// Benchmark return in percent
    pub benchmark: Option<f64>,
}

impl PerformancePoint {
    /// Percentage points above (or below) the benchmark
    pub fn excess_return(&self) -> Option<f64> {
        self.benchmark.map(|b| self.portfolio_return - b)
    }
}

/// Application user
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub risk_profile: RiskProfile,
    pub total_portfolio_value: Decimal,
    pub join_date: DateTime<Utc>,
}

/// A single observation in a price history
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: Decimal,
    pub volume: u64,
}

/// Chronological price observations for a symbol
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PriceHistory {
    pub symbol: String,
    pub data: Vec<PricePoint>,
}

impl PriceHistory {
    /// Prices as `f64`, oldest first, ready for the indicator functions
    pub fn closes(&self) -> Vec<f64> {
        self.data
            .iter()
            .map(|p| p.price.to_f64().unwrap_or(0.0))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_asset_type_round_trip_tags() {
        assert_eq!(AssetType::from("real_estate"), AssetType::RealEstate);
        assert_eq!(String::from(AssetType::RealEstate), "real_estate");
        assert_eq!(AssetType::from("art"), AssetType::Other("art".into()));
        assert_eq!(AssetType::Other("art".into()).label(), "art");
        assert_eq!(AssetType::Cash.label(), "Liquidità");
    }

    #[test]
    fn test_holding_deserializes_unknown_type() {
        let holding: Holding =
            serde_json::from_str(r#"{"type":"wine","allocation_percent":12.5}"#).unwrap();
        assert_eq!(holding.asset_type, AssetType::Other("wine".into()));

        let holding: Holding = serde_json::from_str(r#"{"type":"etf","allocation":40}"#).unwrap();
        assert_eq!(holding, Holding::new(AssetType::Etf, 40.0));
    }

    #[test]
    fn test_risk_profile_parse() {
        assert_eq!("Aggressive".parse::<RiskProfile>().unwrap(), RiskProfile::Aggressive);
        assert!("reckless".parse::<RiskProfile>().is_err());
        assert_eq!(RiskProfile::default(), RiskProfile::Moderate);
    }

    #[test]
    fn test_labels() {
        assert_eq!(RiskLevel::VeryHigh.label(), "Molto Alto");
        assert_eq!("ytd".parse::<Timeframe>().unwrap().label(), "Anno Corrente");
        assert!("2Y".parse::<Timeframe>().is_err());
    }

    #[test]
    fn test_insight_wire_names() {
        let kind: SignalType = serde_json::from_str(r#""strong_sell""#).unwrap();
        assert_eq!(kind, SignalType::StrongSell);
        assert!(!kind.is_bullish());

        let point: PerformancePoint =
            serde_json::from_str(r#"{"period":"3M","return":12.45,"benchmark":8.76}"#).unwrap();
        assert_eq!(point.period, Timeframe::ThreeMonths);
        assert!((point.excess_return().unwrap() - 3.69).abs() < 1e-9);
    }

    #[test]
    fn test_signal_reward_to_risk() {
        let mut signal = TradingSignal {
            id: "1".into(),
            symbol: "AAPL".into(),
            kind: SignalType::Buy,
            strength: 85,
            price: dec!(100),
            target_price: Some(dec!(110)),
            stop_loss: Some(dec!(95)),
            timeframe: "1-2 settimane".into(),
            description: "breakout".into(),
            created_at: Utc::now(),
        };
        assert_eq!(signal.reward_to_risk(), Some(dec!(2)));

        // Sell signal: target below entry, stop above
        signal.kind = SignalType::Sell;
        signal.target_price = Some(dec!(90));
        signal.stop_loss = Some(dec!(104));
        assert_eq!(signal.reward_to_risk(), Some(dec!(2.5)));

        // Stop on the wrong side
        signal.stop_loss = Some(dec!(98));
        assert_eq!(signal.reward_to_risk(), None);

        signal.target_price = None;
        assert_eq!(signal.reward_to_risk(), None);
    }

    #[test]
    fn test_position_return() {
        let asset = Asset::new("1", "aapl", "Apple Inc.", AssetType::Stock, dec!(185.20));
        let position = PortfolioAsset::new(asset, dec!(150), dec!(175.20));
        assert_eq!(position.asset.symbol, "AAPL");
        assert_eq!(position.value, dec!(27780.00));
        assert_eq!(position.total_return, dec!(1500.00));
    }

    #[test]
    fn test_portfolio_allocations() {
        let mut portfolio = Portfolio::new("1", "Test");
        portfolio.add_asset(PortfolioAsset::new(
            Asset::new("1", "VTI", "Vanguard", AssetType::Etf, dec!(100)),
            dec!(3),
            dec!(100),
        ));
        portfolio.add_asset(PortfolioAsset::new(
            Asset::new("2", "BTC", "Bitcoin", AssetType::Crypto, dec!(100)),
            dec!(1),
            dec!(100),
        ));

        let allocations: Vec<f64> = portfolio.assets.iter().map(|a| a.allocation).collect();
        assert!((allocations[0] - 75.0).abs() < 1e-9);
        assert!((allocations[1] - 25.0).abs() < 1e-9);

        let mut prices = HashMap::new();
        prices.insert("BTC".to_string(), dec!(300));
        portfolio.update_prices(&prices);
        assert!((portfolio.assets[1].allocation - 50.0).abs() < 1e-9);
        assert_eq!(portfolio.assets[1].total_return, dec!(200));
    }
}
