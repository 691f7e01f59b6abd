//! Time source abstraction.

use chrono::{DateTime, Utc};

/// Supplies the current time to the registry.
///
/// Expiry and click timestamps are all taken from a `Clock`, so tests can pin
/// time instead of sleeping.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time in UTC.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
