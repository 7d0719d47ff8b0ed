use crate::application::ports::time::Clock;
use chrono::{DateTime, DurationRound, TimeDelta, Utc};

/// Wall clock truncated to whole microseconds, the resolution `timestamptz`
/// stores, so a timestamp handed to an insert equals the one read back.
#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        let now = Utc::now();
        now.duration_trunc(TimeDelta::microseconds(1)).unwrap_or(now)
    }
}
