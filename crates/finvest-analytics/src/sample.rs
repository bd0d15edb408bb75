//! Sample Data
//!
//! Static quotes, user and portfolio used by the demo server and tests.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::model::{
    Asset, AssetType, DifficultyLevel, EducationCategory, EducationalContent, PerformancePoint,
    Portfolio, PortfolioAsset, Recommendation, RecommendationType, RiskAssessment, RiskLevel,
    RiskProfile, SignalType, Timeframe, TradingSignal, User,
};

/// Midnight UTC on the given date
fn day(year: i32, month: u32, date: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, date, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn quote(
    id: &str,
    symbol: &str,
    name: &str,
    asset_type: AssetType,
    price: Decimal,
    change: Decimal,
    change_percent: Decimal,
    volume: u64,
    market_cap: Decimal,
) -> Asset {
    let mut asset = Asset::new(id, symbol, name, asset_type, price);
    asset.change = change;
    asset.change_percent = change_percent;
    asset.volume = volume;
    asset.market_cap = Some(market_cap);
    asset
}

/// Quotes served by [`crate::market::MockMarketData`]
#[rustfmt::skip]
pub fn mock_assets() -> Vec<Asset> {
    use AssetType::{Crypto, Etf, Stock};

    vec![
        quote("1", "AAPL",  "Apple Inc.",                      Stock,  dec!(185.20),   dec!(2.45),    dec!(1.34),  58_420_000, dec!(2900000000000)),
        quote("2", "MSFT",  "Microsoft Corporation",           Stock,  dec!(415.85),   dec!(-3.21),   dec!(-0.77), 24_680_000, dec!(3100000000000)),
        quote("3", "GOOGL", "Alphabet Inc.",                   Stock,  dec!(142.65),   dec!(1.88),    dec!(1.33),  31_250_000, dec!(1800000000000)),
        quote("4", "TSLA",  "Tesla Inc.",                      Stock,  dec!(248.50),   dec!(-8.75),   dec!(-3.40), 89_450_000, dec!(789000000000)),
        quote("5", "VTI",   "Vanguard Total Stock Market ETF", Etf,    dec!(245.30),   dec!(1.20),    dec!(0.49),  4_250_000,  dec!(1500000000000)),
        quote("6", "BTC",   "Bitcoin",                         Crypto, dec!(45680.50), dec!(1250.75), dec!(2.82),  28_450_000, dec!(892000000000)),
    ]
}

/// Demo user with a moderate profile
pub fn sample_user() -> User {
    User {
        id: "1".into(),
        name: "Marco Rossi".into(),
        email: "marco.rossi@example.com".into(),
        risk_profile: RiskProfile::Moderate,
        total_portfolio_value: dec!(125000),
        join_date: day(2023, 1, 15),
    }
}

/// Demo "Main Portfolio": three tech stocks, a total-market ETF and some bitcoin
pub fn sample_portfolio() -> Portfolio {
    // (symbol, quantity, average price)
    let positions = [
        ("AAPL", dec!(150), dec!(175.20)),
        ("MSFT", dec!(75), dec!(395.50)),
        ("GOOGL", dec!(200), dec!(138.90)),
        ("VTI", dec!(100), dec!(238.50)),
        ("BTC", dec!(0.25), dec!(42500)),
    ];

    let assets = mock_assets();
    let mut portfolio = Portfolio::new("1", "Main Portfolio");

    for (symbol, quantity, average_price) in positions {
        if let Some(asset) = assets.iter().find(|a| a.symbol == symbol) {
            portfolio.add_asset(PortfolioAsset::new(asset.clone(), quantity, average_price));
        }
    }

    portfolio.day_change = dec!(1245.50);
    portfolio.day_change_percent = dec!(1.01);
    portfolio
}

/// Advisor recommendations for the demo portfolio, newest first
pub fn sample_recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation {
            id: "1".into(),
            kind: RecommendationType::Rebalance,
            title: "Riequilibra il Portfolio".into(),
            description: "Il tuo portfolio è sbilanciato verso i titoli tecnologici. \
                          Considera di diversificare."
                .into(),
            confidence: 85,
            expected_return: Some(12.5),
            risk_level: RiskLevel::Medium,
            timeframe: "3-6 mesi".into(),
            reasoning: strings(&[
                "Concentrazione del 70% in titoli tech",
                "Bassa esposizione ai settori difensivi",
                "Opportunità di diversificazione settoriale",
            ]),
            action_items: strings(&[
                "Riduci esposizione AAPL del 5%",
                "Aggiungi ETF settore sanitario",
                "Considera bonds governativi per stabilità",
            ]),
            created_at: day(2024, 2, 10),
        },
        Recommendation {
            id: "2".into(),
            kind: RecommendationType::Buy,
            title: "Opportunità in NVDA".into(),
            description: "NVIDIA mostra segnali positivi con forte crescita nel settore AI."
                .into(),
            confidence: 92,
            expected_return: Some(18.7),
            risk_level: RiskLevel::High,
            timeframe: "6-12 mesi".into(),
            reasoning: strings(&[
                "Crescita esplosiva nel settore AI",
                "Risultati trimestrali sopra le attese",
                "Posizione dominante nel mercato GPU",
            ]),
            action_items: strings(&[
                "Alloca 3-5% del portfolio",
                "Monitora volatilità",
                "Imposta stop loss al 15%",
            ]),
            created_at: day(2024, 2, 9),
        },
        Recommendation {
            id: "3".into(),
            kind: RecommendationType::Sell,
            title: "Ridimensiona TSLA".into(),
            description: "Tesla mostra segnali di debolezza con vendite in calo in Cina.".into(),
            confidence: 78,
            expected_return: None,
            risk_level: RiskLevel::High,
            timeframe: "1-3 mesi".into(),
            reasoning: strings(&[
                "Calo vendite nel mercato cinese",
                "Aumento competizione EV",
                "Valutazione ancora elevata",
            ]),
            action_items: strings(&[
                "Riduci posizione del 30%",
                "Monitora dati vendite Q1",
                "Reinvesti in ETF diversificato",
            ]),
            created_at: day(2024, 2, 8),
        },
    ]
}

/// Technical signals on the quoted symbols
pub fn sample_trading_signals() -> Vec<TradingSignal> {
    vec![
        TradingSignal {
            id: "1".into(),
            symbol: "AAPL".into(),
            kind: SignalType::Buy,
            strength: 85,
            price: dec!(185.20),
            target_price: Some(dec!(195.00)),
            stop_loss: Some(dec!(178.00)),
            timeframe: "1-2 settimane".into(),
            description: "Breakout rialzista con volumi elevati".into(),
            created_at: day(2024, 2, 11),
        },
        TradingSignal {
            id: "2".into(),
            symbol: "TSLA".into(),
            kind: SignalType::Sell,
            strength: 75,
            price: dec!(248.50),
            target_price: Some(dec!(235.00)),
            stop_loss: Some(dec!(255.00)),
            timeframe: "3-5 giorni".into(),
            description: "Rottura supporto tecnico con RSI ipercomprato".into(),
            created_at: day(2024, 2, 11),
        },
    ]
}

/// Courses in the education section, with the demo user's progress
pub fn sample_educational_content() -> Vec<EducationalContent> {
    vec![
        EducationalContent {
            id: "1".into(),
            title: "Fondamenti dell'Investimento".into(),
            description: "Impara i principi base degli investimenti finanziari".into(),
            category: EducationCategory::Basics,
            difficulty: DifficultyLevel::Beginner,
            duration_minutes: 45,
            content: "Contenuto del corso sui fondamenti...".into(),
            video_url: None,
            tags: strings(&["investimenti", "base", "principianti"]),
            completed: true,
            progress: 100,
        },
        EducationalContent {
            id: "2".into(),
            title: "Analisi Tecnica Avanzata".into(),
            description: "Tecniche avanzate di analisi tecnica per il trading".into(),
            category: EducationCategory::Analysis,
            difficulty: DifficultyLevel::Advanced,
            duration_minutes: 120,
            content: "Contenuto del corso di analisi tecnica...".into(),
            video_url: Some("https://example.com/video".into()),
            tags: strings(&["analisi tecnica", "trading", "avanzato"]),
            completed: false,
            progress: 35,
        },
        EducationalContent {
            id: "3".into(),
            title: "Psicologia del Trading".into(),
            description: "Come gestire le emozioni negli investimenti".into(),
            category: EducationCategory::Psychology,
            difficulty: DifficultyLevel::Intermediate,
            duration_minutes: 60,
            content: "Contenuto del corso di psicologia...".into(),
            video_url: None,
            tags: strings(&["psicologia", "emozioni", "trading"]),
            completed: false,
            progress: 0,
        },
    ]
}

/// Risk breakdown for the demo portfolio
pub fn sample_risk_assessment() -> RiskAssessment {
    RiskAssessment {
        overall_risk: RiskLevel::Medium,
        diversification_risk: 35,
        market_risk: 65,
        liquidity_risk: 20,
        concentration_risk: 45,
        volatility_risk: 70,
        score: 62,
        recommendations: strings(&[
            "Aumenta la diversificazione settoriale",
            "Considera bonds per ridurre volatilità",
            "Monitora concentrazione in singoli titoli",
            "Mantieni riserva di liquidità del 10%",
        ]),
    }
}

/// Portfolio returns against the benchmark for every reporting period
#[rustfmt::skip]
pub fn sample_performance() -> Vec<PerformancePoint> {
    use Timeframe::{OneDay, OneMonth, OneWeek, OneYear, SixMonths, ThreeMonths, YearToDate};

    [
        (OneDay,      1.01,  0.85),
        (OneWeek,     2.45,  1.95),
        (OneMonth,    5.67,  4.32),
        (ThreeMonths, 12.45, 8.76),
        (SixMonths,   18.92, 14.55),
        (OneYear,     24.67, 18.45),
        (YearToDate,  7.85,  5.67),
    ]
    .into_iter()
    .map(|(period, portfolio_return, benchmark)| PerformancePoint {
        period,
        portfolio_return,
        benchmark: Some(benchmark),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_portfolio_positions() {
        let portfolio = sample_portfolio();
        assert_eq!(portfolio.assets.len(), 5);
        assert_eq!(portfolio.total_value(), dec!(123448.875));

        let allocation: f64 = portfolio.assets.iter().map(|a| a.allocation).sum();
        assert!((allocation - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_sample_portfolio_summary() {
        let portfolio = sample_portfolio();
        let summary = portfolio.summary(sample_user().risk_profile);

        // stock 70.9%, etf 19.9%, crypto 9.3%
        assert_eq!(summary.diversification_score, 45);
        assert_eq!(summary.risk_score, 59);
        assert_eq!(summary.metrics.total_value, dec!(123448.875));
        assert!(summary.metrics.total_return > Decimal::ZERO);
    }

    #[test]
    fn test_sample_recommendations() {
        let recommendations = sample_recommendations();
        assert_eq!(recommendations.len(), 3);
        assert!(recommendations.windows(2).all(|w| w[0].created_at > w[1].created_at));
        assert!(recommendations.iter().all(|r| r.confidence <= 100));

        let sell = &recommendations[2];
        assert_eq!(sell.kind, RecommendationType::Sell);
        assert_eq!(sell.expected_return, None);
        assert_eq!(sell.risk_level.label(), "Alto");
    }

    #[test]
    fn test_sample_signals_match_quotes() {
        let quotes = mock_assets();
        for signal in sample_trading_signals() {
            let quote = quotes.iter().find(|a| a.symbol == signal.symbol).unwrap();
            assert_eq!(signal.price, quote.price);
            assert!(signal.reward_to_risk().unwrap() > Decimal::ONE);
        }
    }

    #[test]
    fn test_sample_education_progress() {
        let courses = sample_educational_content();
        assert_eq!(courses.len(), 3);
        for course in &courses {
            assert_eq!(course.completed, course.progress == 100);
        }
        assert_eq!(courses[1].difficulty, DifficultyLevel::Advanced);
    }

    #[test]
    fn test_sample_risk_assessment() {
        let assessment = sample_risk_assessment();
        assert_eq!(assessment.overall_risk, RiskLevel::Medium);
        assert_eq!(assessment.score, 62);
        assert_eq!(assessment.recommendations.len(), 4);
    }

    #[test]
    fn test_sample_performance_covers_every_timeframe() {
        let periods: Vec<&str> = sample_performance().iter().map(|p| p.period.code()).collect();
        assert_eq!(periods, vec!["1D", "1W", "1M", "3M", "6M", "1Y", "YTD"]);
        assert!(sample_performance().iter().all(|p| p.excess_return().unwrap() > 0.0));
    }

    #[test]
    fn test_sample_user() {
        let user = sample_user();
        assert_eq!(user.risk_profile, RiskProfile::Moderate);
        assert_eq!(user.join_date.to_rfc3339(), "2023-01-15T00:00:00+00:00");
    }
}
