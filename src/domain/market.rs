//! Market facade: the single entry point the transport layer calls.

use std::sync::Arc;

use chrono::Duration;

use crate::ports::clock_port::ClockPort;

use super::catalog::StockCatalog;
use super::error::MarketError;
use super::ledger::TradeLedger;
use super::metrics::{self, DEFAULT_TRAILING_WINDOW_MS};
use super::trade::Trade;

/// Wraps catalog + ledger and exposes the operations the transport layer
/// needs, supplying the current instant to the metric functions and keeping
/// submission validation in one place.
///
/// Both stores are constructed eagerly before any traffic is served; there
/// is no lazy initialisation.
pub struct MarketFacade {
    catalog: StockCatalog,
    ledger: TradeLedger,
    clock: Arc<dyn ClockPort + Send + Sync>,
    trailing_window: Duration,
}

impl MarketFacade {
    pub fn new(catalog: StockCatalog, clock: Arc<dyn ClockPort + Send + Sync>) -> Self {
        MarketFacade {
            catalog,
            ledger: TradeLedger::new(),
            clock,
            trailing_window: Duration::milliseconds(DEFAULT_TRAILING_WINDOW_MS),
        }
    }

    pub fn with_trailing_window(mut self, window: Duration) -> Self {
        self.trailing_window = window;
        self
    }

    /// Record an executed trade. The symbol is not required to exist in the
    /// catalog; validation covers only the trade's own fields.
    pub fn submit_trade(&self, trade: Trade) -> Result<(), MarketError> {
        if trade.quantity == 0 {
            return Err(MarketError::Validation {
                reason: "quantity must be positive".into(),
            });
        }
        if !trade.price.is_finite() || trade.price <= 0.0 {
            return Err(MarketError::Validation {
                reason: "price must be positive".into(),
            });
        }
        self.ledger.record(trade);
        Ok(())
    }

    pub fn dividend_yield(&self, symbol: &str, price: f64) -> Result<f64, MarketError> {
        validate_price(price)?;
        metrics::dividend_yield(&self.catalog, symbol, price)
    }

    pub fn pe_ratio(&self, symbol: &str, price: f64) -> Result<f64, MarketError> {
        validate_price(price)?;
        metrics::pe_ratio(&self.catalog, symbol, price)
    }

    /// Volume-weighted price over the trailing window, ending now.
    pub fn stock_price(&self, symbol: &str) -> Result<f64, MarketError> {
        metrics::volume_weighted_price(
            &self.ledger,
            symbol,
            self.clock.now(),
            self.trailing_window,
        )
    }

    pub fn all_share_index(&self) -> Result<f64, MarketError> {
        metrics::all_share_index(&self.ledger)
    }
}

fn validate_price(price: f64) -> Result<(), MarketError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(MarketError::Validation {
            reason: "price must be positive".into(),
        });
    }
    Ok(())
}
