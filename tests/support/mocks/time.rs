// tests/support/mocks/time.rs
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use quill_core::application::ports::time::Clock;

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

/// Deterministic base timestamp shared by every mock.
pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// Starts at [`fixed_now`] and moves one second forward on every read, so
/// rows written one after another get strictly increasing timestamps.
#[derive(Debug, Default)]
pub struct TickingClock {
    ticks: AtomicI64,
}

impl Clock for TickingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        fixed_now() + Duration::seconds(tick)
    }
}
