//! Port traits: seams between the domain core and the outside world.

pub mod clock_port;
pub mod config_port;
