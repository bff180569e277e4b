//! Signed elapsed-time representation.

/// A signed span of elapsed time, reducible to whole seconds.
///
/// Positive values lie in the past, negative values in the future. This is
/// the input type for every formatting entry point.
///
/// Unit accessors use truncating integer division toward zero, so a delta of
/// 119 seconds is 1 whole minute and a delta of -119 seconds is -1 whole
/// minute. Derived weeks, months and years use fixed ratios (1 week = 7 days,
/// 1 month = 30 days, 1 year = 365 days).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeDelta {
    seconds: i64,
}

impl TimeDelta {
    /// Zero-length delta.
    pub const ZERO: Self = TimeDelta { seconds: 0 };

    /// Creates a delta from a whole number of seconds.
    #[inline]
    pub const fn from_secs(seconds: i64) -> Self {
        Self { seconds }
    }

    /// Creates a delta from a whole number of minutes, saturating on overflow.
    #[inline]
    pub const fn from_mins(minutes: i64) -> Self {
        Self {
            seconds: minutes.saturating_mul(60),
        }
    }

    /// Creates a delta from a whole number of hours, saturating on overflow.
    #[inline]
    pub const fn from_hours(hours: i64) -> Self {
        Self {
            seconds: hours.saturating_mul(3_600),
        }
    }

    /// Creates a delta from a whole number of days, saturating on overflow.
    #[inline]
    pub const fn from_days(days: i64) -> Self {
        Self {
            seconds: days.saturating_mul(86_400),
        }
    }

    /// Returns the whole seconds in this delta.
    #[inline]
    pub const fn whole_seconds(&self) -> i64 {
        self.seconds
    }

    /// Returns the whole minutes, truncated toward zero.
    #[inline]
    pub const fn whole_minutes(&self) -> i64 {
        self.seconds / 60
    }

    /// Returns the whole hours, truncated toward zero.
    #[inline]
    pub const fn whole_hours(&self) -> i64 {
        self.seconds / 3_600
    }

    /// Returns the whole days, truncated toward zero.
    #[inline]
    pub const fn whole_days(&self) -> i64 {
        self.seconds / 86_400
    }

    /// Returns true if this delta points into the future.
    #[inline]
    pub const fn is_future(&self) -> bool {
        self.seconds < 0
    }
}

impl core::ops::Neg for TimeDelta {
    type Output = Self;

    /// Flips the direction of the delta, saturating at the i64 range.
    #[inline]
    fn neg(self) -> Self {
        Self {
            seconds: self.seconds.saturating_neg(),
        }
    }
}

/// Bridges the unsigned native duration type as a past-direction delta.
///
/// Second counts beyond `i64::MAX` clamp to `i64::MAX`.
impl From<core::time::Duration> for TimeDelta {
    #[inline]
    fn from(duration: core::time::Duration) -> Self {
        Self {
            seconds: i64::try_from(duration.as_secs()).unwrap_or(i64::MAX),
        }
    }
}
