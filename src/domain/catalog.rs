//! Stock catalog: read-only security reference data.

use std::collections::HashMap;

use super::error::MarketError;
use super::security::Security;

/// Symbol-keyed security reference data. Constructed once at startup and
/// never mutated afterwards, so it needs no synchronisation.
#[derive(Debug, Clone)]
pub struct StockCatalog {
    securities: HashMap<String, Security>,
}

impl StockCatalog {
    pub fn new(securities: Vec<Security>) -> Self {
        StockCatalog {
            securities: securities
                .into_iter()
                .map(|s| (s.symbol.clone(), s))
                .collect(),
        }
    }

    /// The GBCE reference deployment seed set.
    pub fn gbce() -> Self {
        StockCatalog::new(vec![
            Security::common("TEA", 0.0, 100.0),
            Security::common("POP", 8.0, 100.0),
            Security::common("ALE", 23.0, 100.0),
            Security::preferred("GIN", 8.0, 0.02, 100.0),
            Security::common("JOE", 13.0, 250.0),
        ])
    }

    pub fn lookup(&self, symbol: &str) -> Result<&Security, MarketError> {
        self.securities
            .get(symbol)
            .ok_or_else(|| MarketError::UnknownStock {
                symbol: symbol.to_string(),
            })
    }

    pub fn symbols(&self) -> Vec<&str> {
        self.securities.keys().map(String::as_str).collect()
    }
}
