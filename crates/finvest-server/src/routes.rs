//! Router

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers::{
    chat_handler, diversification, get_asset, get_education, get_history, get_performance,
    get_portfolio, get_recommendations, get_risk_assessment, get_signals, health_check,
    moving_average, risk, rsi, sharpe,
};
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health & info
        .route("/health", get(health_check))

        // Portfolio
        .route("/api/portfolio", get(get_portfolio))
        .route("/api/performance", get(get_performance))
        .route("/api/risk-assessment", get(get_risk_assessment))

        // Insights
        .route("/api/recommendations", get(get_recommendations))
        .route("/api/signals", get(get_signals))
        .route("/api/education", get(get_education))

        // Analytics
        .route("/api/analytics/diversification", post(diversification))
        .route("/api/analytics/risk", post(risk))
        .route("/api/analytics/sharpe", post(sharpe))
        .route("/api/analytics/moving-average", post(moving_average))
        .route("/api/analytics/rsi", post(rsi))

        // Market data
        .route("/api/market/{symbol}", get(get_asset))
        .route("/api/market/{symbol}/history", get(get_history))

        // Advisor
        .route("/api/chat", post(chat_handler))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
