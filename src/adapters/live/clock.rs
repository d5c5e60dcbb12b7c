//! System clock for stamping record envelopes.

use chrono::{DateTime, Utc};

use crate::ports::clock::Clock;

/// Reads the system time in UTC.
///
/// The loopback service stamps `created_at` and `updated_at` with it when
/// the CLI runs against real time.
pub struct LiveClock;

impl Clock for LiveClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
