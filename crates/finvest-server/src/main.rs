//! finvest HTTP Server
//!
//! Axum-based server exposing the portfolio analytics, the sample
//! portfolio, mock market data and the canned advisor as JSON endpoints.

mod config;
mod handlers;
mod routes;
mod state;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use finvest_analytics::{CannedAdvisor, MarketDataSource, MockMarketData};

use crate::config::ServerConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env()?;

    // Initialize market data
    let market: Arc<dyn MarketDataSource> = Arc::new(MockMarketData::new());
    if market.health_check().await {
        tracing::info!("✓ Market data source: {}", market.name());
    } else {
        tracing::warn!("⚠ Market data source {} not available", market.name());
    }

    tracing::info!(
        risk_free_rate = config.risk_free_rate,
        rsi_period = config.rsi_period,
        risk_profile = %config.risk_profile,
        currency = %config.currency,
        "Analytics defaults"
    );

    let bind_addr = config.bind_addr.clone();

    // Build application state
    let state = AppState {
        market,
        advisor: Arc::new(CannedAdvisor::new()),
        config: Arc::new(config),
    };

    let app = routes::app(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("finvest server running on http://{}", bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health                          - Health check");
    tracing::info!("  GET  /api/portfolio                   - Sample portfolio + scores");
    tracing::info!("  GET  /api/performance                 - Returns vs benchmark");
    tracing::info!("  GET  /api/risk-assessment             - Risk breakdown");
    tracing::info!("  GET  /api/recommendations             - Advisor recommendations");
    tracing::info!("  GET  /api/signals                     - Trading signals");
    tracing::info!("  GET  /api/education                   - Courses");
    tracing::info!("  POST /api/analytics/diversification   - Diversification score");
    tracing::info!("  POST /api/analytics/risk              - Risk score");
    tracing::info!("  POST /api/analytics/sharpe            - Sharpe ratio");
    tracing::info!("  POST /api/analytics/moving-average    - Simple moving average");
    tracing::info!("  POST /api/analytics/rsi               - RSI");
    tracing::info!("  GET  /api/market/{{symbol}}             - Quote");
    tracing::info!("  GET  /api/market/{{symbol}}/history     - Price history + indicators");
    tracing::info!("  POST /api/chat                        - Canned advisor reply");

    axum::serve(listener, app).await?;

    Ok(())
}
