#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use gbce::domain::catalog::StockCatalog;
use gbce::domain::market::MarketFacade;
pub use gbce::domain::trade::{Trade, TradeSide};
use gbce::ports::clock_port::ClockPort;
use std::sync::Arc;

/// Clock that always returns the same instant, so window arithmetic in
/// tests is exact.
pub struct FixedClock(pub DateTime<Utc>);

impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

/// Facade over the GBCE seed catalog with a pinned clock.
pub fn market() -> MarketFacade {
    MarketFacade::new(StockCatalog::gbce(), Arc::new(FixedClock(fixed_now())))
}

/// A sell trade executed `secs_before_now` seconds before [`fixed_now`].
pub fn sell(symbol: &str, secs_before_now: i64, quantity: u64, price: f64) -> Trade {
    Trade {
        symbol: symbol.to_string(),
        timestamp: fixed_now() - Duration::seconds(secs_before_now),
        quantity,
        side: TradeSide::Sell,
        price,
    }
}
