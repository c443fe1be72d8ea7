use chrono::Utc;
use std::fmt::Debug;
use std::sync::OnceLock;
use std::time::Instant;

/// A source of timestamps in milliseconds.
///
/// A collection reads its clock once when it is created and once per
/// `clear()`.
pub trait Clock: Debug + Send + Sync {
    fn now(&self) -> f64;
}

/// High-resolution clock that never goes backwards.
///
/// Timestamps are milliseconds (with fractional part) since the first time
/// any `MonotonicClock` was read in this process.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> f64 {
        static ANCHOR: OnceLock<Instant> = OnceLock::new();
        let anchor = ANCHOR.get_or_init(Instant::now);
        anchor.elapsed().as_secs_f64() * 1000.0
    }
}

/// Wall-clock time in milliseconds since the Unix epoch.
///
/// Not monotonic: the system clock may be adjusted between two reads.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallClock;

impl Clock for WallClock {
    fn now(&self) -> f64 {
        Utc::now().timestamp_micros() as f64 / 1000.0
    }
}

/// Current time of the default [`MonotonicClock`].
pub fn now() -> f64 {
    MonotonicClock.now()
}
