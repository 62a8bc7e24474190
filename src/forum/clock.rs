use std::sync::atomic::{AtomicI64, Ordering};

use time::OffsetDateTime;

use crate::forum::types::TimestampMs;

const MINUTE_SECS: i64 = 60;
const HOUR_SECS: i64 = 60 * MINUTE_SECS;
const DAY_SECS: i64 = 24 * HOUR_SECS;

pub trait Clock: Send + Sync {
    fn now_ms(&self) -> TimestampMs;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> TimestampMs {
        (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as TimestampMs
    }
}

/// Manually driven clock for hosts that replay input and for tests.
#[derive(Debug, Default)]
pub struct FixedClock {
    now_ms: AtomicI64,
}

impl FixedClock {
    pub fn new(now_ms: TimestampMs) -> Self {
        Self {
            now_ms: AtomicI64::new(now_ms),
        }
    }

    pub fn set(&self, now_ms: TimestampMs) {
        self.now_ms.store(now_ms, Ordering::SeqCst);
    }

    pub fn advance(&self, delta_ms: TimestampMs) {
        self.now_ms.fetch_add(delta_ms, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> TimestampMs {
        self.now_ms.load(Ordering::SeqCst)
    }
}

/// Coarse relative label for `timestamp` as seen at `now`.
pub fn time_ago(timestamp: TimestampMs, now: TimestampMs) -> String {
    let elapsed_secs = now.saturating_sub(timestamp).div_euclid(1000);
    if elapsed_secs < MINUTE_SECS {
        "just now".to_string()
    } else if elapsed_secs < HOUR_SECS {
        format!("{} min ago", elapsed_secs / MINUTE_SECS)
    } else if elapsed_secs < DAY_SECS {
        format!("{} hrs ago", elapsed_secs / HOUR_SECS)
    } else {
        format!("{} days ago", elapsed_secs / DAY_SECS)
    }
}
