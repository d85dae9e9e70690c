//! System wall-clock adapter.

use chrono::{DateTime, Utc};

use crate::ports::clock_port::ClockPort;

pub struct SystemClockAdapter;

impl ClockPort for SystemClockAdapter {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
