//! Clock abstraction
//!
//! Valuation depends on the current calendar year (vehicle age) and claims
//! carry creation timestamps. Both read time through a [`Clock`] so tests can
//! pin "now" instead of racing the wall clock across a year boundary.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use std::sync::{Arc, RwLock};

/// Source of the current instant
pub trait Clock: Send + Sync {
    /// Returns the current instant in UTC
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current calendar year in UTC
    fn current_year(&self) -> i32 {
        self.now().year()
    }
}

/// Wall clock backed by [`Utc::now`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that returns a fixed instant until explicitly advanced
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: Arc<RwLock<DateTime<Utc>>>,
}

impl FixedClock {
    /// Creates a clock pinned to `instant`
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            instant: Arc::new(RwLock::new(instant)),
        }
    }

    /// Creates a clock pinned to midday, 1 July of `year`
    ///
    /// Returns `None` if the year is outside chrono's supported range.
    pub fn in_year(year: i32) -> Option<Self> {
        Utc.with_ymd_and_hms(year, 7, 1, 12, 0, 0)
            .single()
            .map(Self::at)
    }

    /// Moves the clock forward by `duration`
    pub fn advance(&self, duration: chrono::Duration) {
        if let Ok(mut instant) = self.instant.write() {
            *instant += duration;
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
            .read()
            .map(|instant| *instant)
            .unwrap_or_else(|poisoned| *poisoned.into_inner())
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
