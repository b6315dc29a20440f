//! Clock abstraction
//!
//! Every relative-time computation in report rendering goes through an
//! injected clock so output is reproducible under test. Production code
//! wires [`SystemClock`]; tests wire [`FixedClock`].

use chrono::{DateTime, Utc};

/// Source of the current instant.
pub trait Clock {
    /// Current time in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a fixed instant, for deterministic output in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
