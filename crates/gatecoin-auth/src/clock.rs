//! Time source for request dates
//!
//! Gatecoin expects the request date as seconds since the Unix epoch with
//! millisecond precision, e.g. `1700000000.123`.

use std::fmt;

/// Milliseconds since the Unix epoch (UTC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Create a timestamp from milliseconds since the epoch
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Milliseconds since the epoch
    pub const fn as_millis(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:03}", self.0 / 1000, self.0 % 1000)
    }
}

/// Source of the current time
pub trait Clock: Send + Sync + fmt::Debug {
    /// Current time
    fn now(&self) -> Timestamp;
}

/// Wall clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        // Clock set before 1970
        let millis = chrono::Utc::now().timestamp_millis().max(0);
        Timestamp::from_millis(millis as u64)
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(Timestamp);

impl FixedClock {
    pub fn new(timestamp: Timestamp) -> Self {
        Self(timestamp)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_has_three_fractional_digits() {
        assert_eq!(Timestamp::from_millis(1_700_000_000_123).to_string(), "1700000000.123");
        assert_eq!(Timestamp::from_millis(1_700_000_000_000).to_string(), "1700000000.000");
        assert_eq!(Timestamp::from_millis(5).to_string(), "0.005");
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::new(Timestamp::from_millis(42));
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().as_millis(), 42);
    }

    #[test]
    fn test_system_clock_is_recent() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.now().as_millis() > 1_577_836_800_000);
    }
}
