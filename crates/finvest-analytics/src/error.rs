//! Error Types for Portfolio Analytics

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalyticsError>;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Asset not supported: {0}")]
    UnsupportedAsset(String),

    #[error("Unknown risk profile: {0}")]
    UnknownRiskProfile(String),

    #[error("Market data error: {0}")]
    MarketData(String),
}

impl AnalyticsError {
    /// Whether the caller supplied bad input (as opposed to an internal failure)
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument(_) | Self::UnsupportedAsset(_) | Self::UnknownRiskProfile(_)
        )
    }

    /// Stable machine-readable code
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::UnsupportedAsset(_) => "UNSUPPORTED_ASSET",
            Self::UnknownRiskProfile(_) => "UNKNOWN_RISK_PROFILE",
            Self::MarketData(_) => "MARKET_DATA_ERROR",
        }
    }
}
