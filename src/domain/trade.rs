//! Executed-trade representation.

use chrono::{DateTime, Utc};

/// Buy/sell indicator. Serialised as `BUY`/`SELL` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeSide {
    Buy,
    Sell,
}

/// One executed trade. Immutable once created: the ledger only ever
/// appends, never rewrites.
#[derive(Debug, Clone, PartialEq)]
pub struct Trade {
    /// Ticker of the traded security. Not required to exist in the catalog;
    /// unknown symbols simply never match dividend/P-E lookups.
    pub symbol: String,
    /// Instant of execution. Not required to be non-decreasing across
    /// inserts; the window filter sorts nothing and just compares.
    pub timestamp: DateTime<Utc>,
    pub quantity: u64,
    pub side: TradeSide,
    /// Price per share at execution.
    pub price: f64,
}

impl Trade {
    /// price × quantity, the trade's contribution to VWAP's numerator.
    pub fn notional(&self) -> f64 {
        self.price * self.quantity as f64
    }
}
