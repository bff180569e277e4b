//! Threshold dispatch from a signed delta to a phrase.
//!
//! A single ordered chain of unit thresholds; the first matching rule wins.
//! The future branch mirrors the past branch over the negated magnitudes and
//! wraps its result in the locale's prefix and suffix.

use crate::locale::{English, Phrase, TimeAgoLocale};
use crate::time::TimeDelta;

/// Formats a delta with the built-in [`English`] locale.
///
/// ```
/// use timeago_lite::{TimeDelta, time_ago};
///
/// assert_eq!(time_ago(TimeDelta::from_secs(45)).as_str(), "just now");
/// assert_eq!(time_ago(TimeDelta::from_mins(5)).as_str(), "5 minutes ago");
/// assert_eq!(time_ago(TimeDelta::from_hours(1)).as_str(), "1 hour ago");
/// assert_eq!(time_ago(-TimeDelta::from_days(3)).as_str(), "in 3 days");
/// ```
pub fn time_ago(delta: TimeDelta) -> Phrase {
    time_ago_with(delta, &English)
}

/// Formats a delta with the given locale.
///
/// Positive deltas dispatch through the past thresholds. Strictly negative
/// deltas dispatch through the mirrored future thresholds on their absolute
/// magnitudes, and the result is wrapped in the locale's
/// [`future_prefix`](TimeAgoLocale::future_prefix) and
/// [`future_suffix`](TimeAgoLocale::future_suffix). A delta of exactly zero
/// takes the past branch.
pub fn time_ago_with<L: TimeAgoLocale + ?Sized>(delta: TimeDelta, locale: &L) -> Phrase {
    let seconds = delta.whole_seconds();
    let minutes = delta.whole_minutes();
    let hours = delta.whole_hours();
    let days = delta.whole_days();
    let weeks = days / 7;
    let months = days / 30;
    let years = days / 365;

    if seconds < 0 {
        let inner = future_phrase(
            seconds.saturating_neg(),
            minutes.saturating_neg(),
            hours.saturating_neg(),
            days.saturating_neg(),
            locale,
        );
        let mut out = Phrase::new();
        let _ = out.push_str(locale.future_prefix());
        let _ = out.push_str(inner.as_str());
        let _ = out.push_str(locale.future_suffix());
        out
    } else if seconds < 60 {
        owned(locale.just_now())
    } else if minutes == 1 {
        owned(locale.one_minute_ago())
    } else if minutes < 60 {
        locale.minutes_ago(minutes)
    } else if hours == 1 {
        owned(locale.one_hour_ago())
    } else if hours < 24 {
        locale.hours_ago(hours)
    } else if days == 1 {
        owned(locale.yesterday())
    } else if days < 7 {
        locale.days_ago(days)
    } else if weeks == 1 {
        owned(locale.one_week_ago())
    } else if weeks < 4 {
        locale.weeks_ago(weeks)
    } else if months == 1 {
        owned(locale.one_month_ago())
    } else if months < 12 {
        locale.months_ago(months)
    } else if years == 1 {
        owned(locale.one_year_ago())
    } else {
        locale.years_ago(years)
    }
}

/// Mirrored dispatch over the absolute-valued future magnitudes.
fn future_phrase<L: TimeAgoLocale + ?Sized>(
    seconds: i64,
    minutes: i64,
    hours: i64,
    days: i64,
    locale: &L,
) -> Phrase {
    let weeks = days / 7;
    let months = days / 30;
    let years = days / 365;

    if seconds < 60 {
        owned(locale.just_now_future())
    } else if minutes == 1 {
        owned(locale.in_one_minute())
    } else if minutes < 60 {
        locale.in_minutes(minutes)
    } else if hours == 1 {
        owned(locale.in_one_hour())
    } else if hours < 24 {
        locale.in_hours(hours)
    } else if days == 1 {
        owned(locale.tomorrow())
    } else if days < 7 {
        locale.in_days(days)
    } else if weeks == 1 {
        owned(locale.in_one_week())
    } else if weeks < 4 {
        locale.in_weeks(weeks)
    } else if months == 1 {
        owned(locale.in_one_month())
    } else if months < 12 {
        locale.in_months(months)
    } else if years == 1 {
        owned(locale.in_one_year())
    } else {
        locale.in_years(years)
    }
}

/// Copies a fixed locale slot into an owned phrase buffer.
fn owned(slot: &str) -> Phrase {
    let mut out = Phrase::new();
    let _ = out.push_str(slot);
    out
}

impl TimeDelta {
    /// Formats this delta with the built-in [`English`] locale.
    ///
    /// ```
    /// use timeago_lite::TimeDelta;
    ///
    /// assert_eq!(TimeDelta::from_days(1).time_ago().as_str(), "yesterday");
    /// ```
    pub fn time_ago(self) -> Phrase {
        time_ago(self)
    }

    /// Formats this delta with the given locale.
    pub fn time_ago_with<L: TimeAgoLocale + ?Sized>(self, locale: &L) -> Phrase {
        time_ago_with(self, locale)
    }
}

/// Formats a whole number of elapsed seconds with the [`English`] locale.
///
/// Positive counts lie in the past, negative counts in the future.
///
/// ```
/// use timeago_lite::from_seconds;
///
/// assert_eq!(from_seconds(30).as_str(), "just now");
/// assert_eq!(from_seconds(-3600).as_str(), "in 1 hour");
/// ```
pub fn from_seconds(seconds: i64) -> Phrase {
    time_ago(TimeDelta::from_secs(seconds))
}

/// Formats a whole number of elapsed seconds with the given locale.
pub fn from_seconds_with<L: TimeAgoLocale + ?Sized>(seconds: i64, locale: &L) -> Phrase {
    time_ago_with(TimeDelta::from_secs(seconds), locale)
}

/// Formats a whole number of elapsed minutes with the [`English`] locale.
pub fn from_minutes(minutes: i64) -> Phrase {
    time_ago(TimeDelta::from_mins(minutes))
}

/// Formats a whole number of elapsed minutes with the given locale.
pub fn from_minutes_with<L: TimeAgoLocale + ?Sized>(minutes: i64, locale: &L) -> Phrase {
    time_ago_with(TimeDelta::from_mins(minutes), locale)
}

/// Formats a whole number of elapsed hours with the [`English`] locale.
pub fn from_hours(hours: i64) -> Phrase {
    time_ago(TimeDelta::from_hours(hours))
}

/// Formats a whole number of elapsed hours with the given locale.
pub fn from_hours_with<L: TimeAgoLocale + ?Sized>(hours: i64, locale: &L) -> Phrase {
    time_ago_with(TimeDelta::from_hours(hours), locale)
}

/// Formats a whole number of elapsed days with the [`English`] locale.
pub fn from_days(days: i64) -> Phrase {
    time_ago(TimeDelta::from_days(days))
}

/// Formats a whole number of elapsed days with the given locale.
pub fn from_days_with<L: TimeAgoLocale + ?Sized>(days: i64, locale: &L) -> Phrase {
    time_ago_with(TimeDelta::from_days(days), locale)
}
