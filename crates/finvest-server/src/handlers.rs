//! HTTP Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use finvest_analytics::{
    AnalyticsError, Asset, ChatMessage, EducationalContent, Holding, PerformancePoint, Portfolio,
    PortfolioSummary, PriceHistory, Recommendation, RiskAssessment, RiskProfile, TradingSignal,
    analytics, format, sample,
};

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub market_source: String,
    pub market_available: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(err: &AnalyticsError) -> ApiError {
    let status = match err {
        AnalyticsError::UnsupportedAsset(_) => StatusCode::NOT_FOUND,
        e if e.is_client_error() => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        tracing::error!("Analytics error: {}", err);
    } else {
        tracing::debug!("Rejected request: {}", err);
    }

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
            code: err.code().into(),
        }),
    )
}

fn resolve_profile(
    requested: Option<&str>,
    fallback: RiskProfile,
) -> Result<RiskProfile, ApiError> {
    requested.map_or(Ok(fallback), |p| p.parse().map_err(|e| api_error(&e)))
}

#[derive(Debug, Deserialize)]
pub struct HoldingsRequest {
    pub holdings: Vec<Holding>,
    #[serde(default)]
    pub risk_profile: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub score: i64,
}

#[derive(Debug, Deserialize)]
pub struct SharpeRequest {
    pub returns: Vec<f64>,
    #[serde(default)]
    pub risk_free_rate: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct SharpeResponse {
    pub sharpe_ratio: f64,
    pub risk_free_rate: f64,
}

#[derive(Debug, Deserialize)]
pub struct MovingAverageRequest {
    pub samples: Vec<f64>,
    pub window: usize,
}

#[derive(Debug, Serialize)]
pub struct MovingAverageResponse {
    pub values: Vec<f64>,
}

#[derive(Debug, Deserialize)]
pub struct RsiRequest {
    pub prices: Vec<f64>,
    #[serde(default)]
    pub period: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RsiResponse {
    pub rsi: f64,
    pub period: usize,
}

#[derive(Debug, Serialize)]
pub struct FormattedTotals {
    pub total_value: String,
    pub total_return: String,
    pub total_return_percent: String,
    pub day_change: String,
    pub day_change_percent: String,
}

#[derive(Debug, Serialize)]
pub struct PortfolioResponse {
    pub portfolio: Portfolio,
    pub summary: PortfolioSummary,
    pub formatted: FormattedTotals,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    #[serde(default = "default_history_days")]
    pub days: u32,
    #[serde(default)]
    pub window: Option<usize>,
    #[serde(default)]
    pub period: Option<usize>,
}

const fn default_history_days() -> u32 {
    30
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub history: PriceHistory,
    pub moving_average: Option<Vec<f64>>,
    pub rsi: f64,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub conversation_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: ChatMessage,
    pub conversation_id: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        market_source: state.market.name().to_string(),
        market_available: state.market.health_check().await,
    })
}

/// Sample portfolio with its analytics and display strings
pub async fn get_portfolio(State(state): State<AppState>) -> Json<PortfolioResponse> {
    let portfolio = sample::sample_portfolio();
    let summary = portfolio.summary(state.config.risk_profile);
    let currency = state.config.currency.as_str();

    let percent = |value: Decimal| format::format_percentage(value.to_f64().unwrap_or(0.0), 2);

    let formatted = FormattedTotals {
        total_value: format::format_currency(summary.metrics.total_value, currency),
        total_return: format::format_currency(summary.metrics.total_return, currency),
        total_return_percent: percent(summary.metrics.total_return_percent),
        day_change: format::format_currency(portfolio.day_change, currency),
        day_change_percent: percent(portfolio.day_change_percent),
    };

    Json(PortfolioResponse {
        portfolio,
        summary,
        formatted,
    })
}

/// Advisor recommendations for the sample portfolio
pub async fn get_recommendations() -> Json<Vec<Recommendation>> {
    Json(sample::sample_recommendations())
}

pub async fn get_signals() -> Json<Vec<TradingSignal>> {
    Json(sample::sample_trading_signals())
}

pub async fn get_education() -> Json<Vec<EducationalContent>> {
    Json(sample::sample_educational_content())
}

pub async fn get_risk_assessment() -> Json<RiskAssessment> {
    Json(sample::sample_risk_assessment())
}

/// Returns against the benchmark per reporting period
pub async fn get_performance() -> Json<Vec<PerformancePoint>> {
    Json(sample::sample_performance())
}

pub async fn diversification(Json(payload): Json<HoldingsRequest>) -> Json<ScoreResponse> {
    Json(ScoreResponse {
        score: analytics::diversification_score(&payload.holdings),
    })
}

pub async fn risk(
    State(state): State<AppState>,
    Json(payload): Json<HoldingsRequest>,
) -> Result<Json<ScoreResponse>, ApiError> {
    let profile = resolve_profile(payload.risk_profile.as_deref(), state.config.risk_profile)?;

    Ok(Json(ScoreResponse {
        score: analytics::risk_score(&payload.holdings, profile),
    }))
}

pub async fn sharpe(
    State(state): State<AppState>,
    Json(payload): Json<SharpeRequest>,
) -> Result<Json<SharpeResponse>, ApiError> {
    let risk_free_rate = payload.risk_free_rate.unwrap_or(state.config.risk_free_rate);
    let sharpe_ratio =
        analytics::sharpe_ratio(&payload.returns, risk_free_rate).map_err(|e| api_error(&e))?;

    Ok(Json(SharpeResponse {
        sharpe_ratio,
        risk_free_rate,
    }))
}

pub async fn moving_average(
    Json(payload): Json<MovingAverageRequest>,
) -> Result<Json<MovingAverageResponse>, ApiError> {
    let values =
        analytics::moving_average(&payload.samples, payload.window).map_err(|e| api_error(&e))?;

    Ok(Json(MovingAverageResponse { values }))
}

pub async fn rsi(
    State(state): State<AppState>,
    Json(payload): Json<RsiRequest>,
) -> Json<RsiResponse> {
    let period = payload.period.unwrap_or(state.config.rsi_period);

    Json(RsiResponse {
        rsi: analytics::rsi(&payload.prices, period),
        period,
    })
}

/// Current quote for a symbol
pub async fn get_asset(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<Asset>, ApiError> {
    let asset = state.market.get_asset(&symbol).await.map_err(|e| api_error(&e))?;
    Ok(Json(asset))
}

/// Price history with indicators computed over it
pub async fn get_history(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let history = state
        .market
        .price_history(&symbol, query.days)
        .await
        .map_err(|e| api_error(&e))?;

    let closes = history.closes();
    let moving_average = query
        .window
        .map(|window| analytics::moving_average(&closes, window))
        .transpose()
        .map_err(|e| api_error(&e))?;
    let rsi = analytics::rsi(&closes, query.period.unwrap_or(state.config.rsi_period));

    Ok(Json(HistoryResponse {
        history,
        moving_average,
        rsi,
    }))
}

/// Chat endpoint backed by the canned advisor
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let message = state.advisor.respond(&payload.message).map_err(|e| api_error(&e))?;

    let conversation_id = payload
        .conversation_id
        .unwrap_or_else(format::generate_id);

    Ok(Json(ChatResponse {
        message,
        conversation_id,
    }))
}
