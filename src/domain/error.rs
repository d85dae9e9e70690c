//! Domain error types.
//!
//! Every failure here is a value-level result returned to the caller; the
//! core never panics on bad market data and never retries. The transport
//! boundary maps each kind to an HTTP status via its own error type.

/// Top-level error type for the market core.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MarketError {
    #[error("no stock found for symbol {symbol}")]
    UnknownStock { symbol: String },

    // Display text is part of the external contract for the peRatio endpoint.
    #[error("Could not calculate PE Ratio since dividendYield is zero")]
    UndefinedRatio { symbol: String },

    #[error("no trades recorded for {symbol} within the trailing window")]
    NoTradeData { symbol: String },

    #[error("no trades recorded in the market")]
    InsufficientData,

    #[error("invalid trade: {reason}")]
    Validation { reason: String },
}

impl MarketError {
    /// Stable machine-readable identifier, one per kind.
    pub fn kind(&self) -> &'static str {
        match self {
            MarketError::UnknownStock { .. } => "UNKNOWN_STOCK",
            MarketError::UndefinedRatio { .. } => "UNDEFINED_RATIO",
            MarketError::NoTradeData { .. } => "NO_TRADE_DATA",
            MarketError::InsufficientData => "INSUFFICIENT_DATA",
            MarketError::Validation { .. } => "VALIDATION",
        }
    }
}
