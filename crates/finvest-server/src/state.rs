//! Application State

use std::sync::Arc;

use finvest_analytics::{CannedAdvisor, MarketDataSource};

use crate::config::ServerConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Quote and price-history source
    pub market: Arc<dyn MarketDataSource>,

    /// Chat stand-in
    pub advisor: Arc<CannedAdvisor>,

    /// Defaults for omitted request fields
    pub config: Arc<ServerConfig>,
}
