//! Clock abstraction so outbound timestamps are injectable.
//!
//! Production code uses [`RealClock`]; tests pin the clock to a known
//! instant with [`TestClock`] so assembled records are deterministic.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

/// Source of the current UTC time.
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// Returns the current UTC timestamp.
    fn now_utc(&self) -> DateTime<Utc>;
}

/// System-time clock used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealClock;

impl RealClock {
    /// Creates a new real clock.
    pub fn new() -> Self {
        Self
    }
}

impl Clock for RealClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Controllable clock for deterministic tests.
///
/// Stores microseconds since the Unix epoch; `advance` moves time
/// forward without touching the system clock.
#[derive(Debug, Clone)]
pub struct TestClock {
    micros: Arc<AtomicI64>,
}

impl TestClock {
    /// Creates a test clock pinned to the given instant.
    pub fn at(start: DateTime<Utc>) -> Self {
        Self { micros: Arc::new(AtomicI64::new(start.timestamp_micros())) }
    }

    /// Advances the clock by the given duration.
    pub fn advance(&self, duration: Duration) {
        self.micros.fetch_add(duration.num_microseconds().unwrap_or(0), Ordering::AcqRel);
    }
}

impl Clock for TestClock {
    fn now_utc(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_micros(self.micros.load(Ordering::Acquire))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}
