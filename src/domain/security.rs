//! Listed-security reference data.

/// Dividend classification of a listed security.
///
/// Closed set, matched exhaustively in the metrics code: there is no
/// fallback path for an unrecognised class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockClass {
    Common,
    Preferred,
}

/// Static reference data for one security. Immutable after catalog init.
#[derive(Debug, Clone, PartialEq)]
pub struct Security {
    /// Short uppercase ticker, unique within the catalog.
    pub symbol: String,
    pub class: StockClass,
    /// Most recent dividend per share; only meaningful for Common stock.
    pub last_dividend: f64,
    /// Fraction of par value paid as dividend; only set for Preferred stock.
    pub fixed_dividend_rate: Option<f64>,
    pub par_value: f64,
}

impl Security {
    pub fn common(symbol: &str, last_dividend: f64, par_value: f64) -> Self {
        Security {
            symbol: symbol.to_string(),
            class: StockClass::Common,
            last_dividend,
            fixed_dividend_rate: None,
            par_value,
        }
    }

    pub fn preferred(
        symbol: &str,
        last_dividend: f64,
        fixed_dividend_rate: f64,
        par_value: f64,
    ) -> Self {
        Security {
            symbol: symbol.to_string(),
            class: StockClass::Preferred,
            last_dividend,
            fixed_dividend_rate: Some(fixed_dividend_rate),
            par_value,
        }
    }
}
