//! Time sources
//!
//! Traces read two independent values when they are created: the
//! millisecond wall-clock time (which becomes the trace id) and the local
//! calendar date. Both go through [`Clock`] so capture can be replayed with
//! a [`FixedClock`].

use chrono::{Local, NaiveDate};
use std::sync::atomic::{AtomicI64, Ordering};

/// Source of wall-clock time for traces and sessions
pub trait Clock {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;

    /// Current local calendar date
    fn today(&self) -> NaiveDate;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }

    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// The local system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Local::now().timestamp_millis()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock that only moves when told to
///
/// The millisecond value can be changed through a shared reference so a
/// session borrowing the clock observes later updates.
#[derive(Debug)]
pub struct FixedClock {
    millis: AtomicI64,
    date: NaiveDate,
}

impl FixedClock {
    /// Create a clock stopped at `millis` on `date`
    pub fn new(millis: i64, date: NaiveDate) -> Self {
        FixedClock {
            millis: AtomicI64::new(millis),
            date,
        }
    }

    /// Move the clock to an absolute millisecond value
    pub fn set(&self, millis: i64) {
        self.millis.store(millis, Ordering::SeqCst);
    }

    /// Move the clock forward by `delta` milliseconds
    pub fn advance(&self, delta: i64) {
        self.millis.fetch_add(delta, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis.load(Ordering::SeqCst)
    }

    fn today(&self) -> NaiveDate {
        self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_fixed_clock_advances() {
        let clock = FixedClock::new(1000, date(2020, 1, 1));
        clock.advance(5);
        assert_eq!(clock.now_millis(), 1005);
        clock.set(42);
        assert_eq!(clock.now_millis(), 42);
        assert_eq!(clock.today(), date(2020, 1, 1));
    }

    #[test]
    fn test_clock_through_reference() {
        let clock = FixedClock::new(7, date(2021, 6, 30));
        let by_ref: &FixedClock = &clock;
        assert_eq!(Clock::now_millis(&by_ref), 7);
    }

    #[test]
    fn test_system_clock_is_after_epoch() {
        assert!(SystemClock.now_millis() > 0);
    }
}
