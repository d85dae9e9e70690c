//! Wall-clock access port trait.
//!
//! The metric functions take `now` as an explicit argument; this port is
//! where the facade gets it from. Tests inject a fixed clock.

use chrono::{DateTime, Utc};

pub trait ClockPort {
    fn now(&self) -> DateTime<Utc>;
}
