//! Market metric derivations.
//!
//! Pure functions over catalog/ledger state: given the same inputs and the
//! same `now`, they always produce the same result. The caller supplies
//! `now` explicitly; nothing in here reads the wall clock.

use chrono::{DateTime, Duration, Utc};

use super::catalog::StockCatalog;
use super::error::MarketError;
use super::ledger::TradeLedger;
use super::security::StockClass;

/// Default trailing window for the volume-weighted price: five minutes.
pub const DEFAULT_TRAILING_WINDOW_MS: i64 = 5 * 60 * 1000;

/// Dividend yield for `symbol` at the given price.
///
/// Common: last_dividend / price. Preferred: fixed rate × par value / price.
/// A zero yield (e.g. TEA's zero last dividend) is a valid result, not an
/// error.
pub fn dividend_yield(
    catalog: &StockCatalog,
    symbol: &str,
    price: f64,
) -> Result<f64, MarketError> {
    let security = catalog.lookup(symbol)?;
    let yield_ = match security.class {
        StockClass::Common => security.last_dividend / price,
        StockClass::Preferred => {
            security.fixed_dividend_rate.unwrap_or(0.0) * security.par_value / price
        }
    };
    Ok(yield_)
}

/// Price / dividend-yield. A yield of exactly zero makes the ratio
/// economically undefined and fails rather than dividing by zero.
pub fn pe_ratio(
    catalog: &StockCatalog,
    symbol: &str,
    price: f64,
) -> Result<f64, MarketError> {
    let yield_ = dividend_yield(catalog, symbol, price)?;
    if yield_ == 0.0 {
        return Err(MarketError::UndefinedRatio {
            symbol: symbol.to_string(),
        });
    }
    Ok(price / yield_)
}

/// Volume-weighted average price over trades with `timestamp > now - window`
/// (strict: a trade exactly at the window edge is excluded).
///
/// Fails with `NoTradeData` when the symbol has no trades at all, and also
/// when trades exist but none fall inside the window — the zero total
/// quantity would otherwise make the division undefined.
pub fn volume_weighted_price(
    ledger: &TradeLedger,
    symbol: &str,
    now: DateTime<Utc>,
    window: Duration,
) -> Result<f64, MarketError> {
    let trades = ledger.trades_for(symbol);
    if trades.is_empty() {
        return Err(MarketError::NoTradeData {
            symbol: symbol.to_string(),
        });
    }

    let cutoff = now - window;
    let mut notional = 0.0_f64;
    let mut volume = 0u64;
    for trade in trades.iter().filter(|t| t.timestamp > cutoff) {
        notional += trade.notional();
        volume += trade.quantity;
    }

    if volume == 0 {
        return Err(MarketError::NoTradeData {
            symbol: symbol.to_string(),
        });
    }
    Ok(notional / volume as f64)
}

/// Geometric mean of every recorded trade price across all symbols.
///
/// Computed as exp(Σ ln p / n) rather than (Π p)^(1/n): the running product
/// overflows for large trade counts, the log form does not.
pub fn all_share_index(ledger: &TradeLedger) -> Result<f64, MarketError> {
    let mut log_sum = 0.0_f64;
    let mut count = 0u64;
    for symbol in ledger.symbols() {
        for trade in ledger.trades_for(&symbol) {
            log_sum += trade.price.ln();
            count += 1;
        }
    }
    if count == 0 {
        return Err(MarketError::InsufficientData);
    }
    Ok((log_sum / count as f64).exp())
}
