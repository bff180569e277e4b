//! Locale abstraction and the built-in English locale.

use core::fmt::{self, Write};

/// Maximum byte length of a formatted phrase.
pub const PHRASE_CAPACITY: usize = 64;

/// Fixed-capacity output string for formatted phrases.
///
/// Built without heap allocation. Content beyond [`PHRASE_CAPACITY`] bytes
/// is truncated rather than failing the format call.
pub type Phrase = heapless::String<PHRASE_CAPACITY>;

/// Builds a [`Phrase`] from format arguments, truncating at capacity.
///
/// Convenience for locale implementations:
///
/// ```
/// use timeago_lite::phrase;
///
/// let minutes = 5;
/// let p = phrase(format_args!("hace {minutes} minutos"));
/// assert_eq!(p.as_str(), "hace 5 minutos");
/// ```
pub fn phrase(args: fmt::Arguments<'_>) -> Phrase {
    let mut out = Phrase::new();
    let _ = out.write_fmt(args);
    out
}

/// Locale configuration for "time ago" phrases.
///
/// Implement this trait to provide custom translations. Fixed phrases are
/// returned as string slices; pluralizing slots receive the whole count and
/// return the complete phrase, which leaves inflection entirely to the
/// locale (grammatical cases, word order, non-suffix plural forms).
///
/// Every slot except [`future_prefix`](TimeAgoLocale::future_prefix) and
/// [`future_suffix`](TimeAgoLocale::future_suffix) is required, so an
/// incomplete locale fails to compile rather than producing blank output at
/// lookup time.
pub trait TimeAgoLocale {
    // Past

    /// Phrase for anything under one minute in the past.
    fn just_now(&self) -> &str;

    /// Phrase for exactly one whole minute in the past.
    fn one_minute_ago(&self) -> &str;

    /// Phrase for `minutes` whole minutes in the past (2..=59).
    fn minutes_ago(&self, minutes: i64) -> Phrase;

    /// Phrase for exactly one whole hour in the past.
    fn one_hour_ago(&self) -> &str;

    /// Phrase for `hours` whole hours in the past (2..=23).
    fn hours_ago(&self, hours: i64) -> Phrase;

    /// Phrase for exactly one whole day in the past.
    fn yesterday(&self) -> &str;

    /// Phrase for `days` whole days in the past (2..=6).
    fn days_ago(&self, days: i64) -> Phrase;

    /// Phrase for exactly one whole week in the past.
    fn one_week_ago(&self) -> &str;

    /// Phrase for `weeks` whole weeks in the past (2..=3).
    fn weeks_ago(&self, weeks: i64) -> Phrase;

    /// Phrase for exactly one whole month in the past.
    fn one_month_ago(&self) -> &str;

    /// Phrase for `months` whole months in the past (2..=11).
    fn months_ago(&self, months: i64) -> Phrase;

    /// Phrase for exactly one whole year in the past.
    fn one_year_ago(&self) -> &str;

    /// Phrase for `years` whole years in the past (>= 2).
    fn years_ago(&self, years: i64) -> Phrase;

    // Future

    /// Concatenated before every future phrase. Defaults to empty.
    fn future_prefix(&self) -> &str {
        ""
    }

    /// Concatenated after every future phrase. Defaults to empty.
    fn future_suffix(&self) -> &str {
        ""
    }

    /// Phrase for anything under one minute ahead.
    fn just_now_future(&self) -> &str;

    /// Phrase for exactly one whole minute ahead.
    fn in_one_minute(&self) -> &str;

    /// Phrase for `minutes` whole minutes ahead (2..=59).
    fn in_minutes(&self, minutes: i64) -> Phrase;

    /// Phrase for exactly one whole hour ahead.
    fn in_one_hour(&self) -> &str;

    /// Phrase for `hours` whole hours ahead (2..=23).
    fn in_hours(&self, hours: i64) -> Phrase;

    /// Phrase for exactly one whole day ahead.
    fn tomorrow(&self) -> &str;

    /// Phrase for `days` whole days ahead (2..=6).
    fn in_days(&self, days: i64) -> Phrase;

    /// Phrase for exactly one whole week ahead.
    fn in_one_week(&self) -> &str;

    /// Phrase for `weeks` whole weeks ahead (2..=3).
    fn in_weeks(&self, weeks: i64) -> Phrase;

    /// Phrase for exactly one whole month ahead.
    fn in_one_month(&self) -> &str;

    /// Phrase for `months` whole months ahead (2..=11).
    fn in_months(&self, months: i64) -> Phrase;

    /// Phrase for exactly one whole year ahead.
    fn in_one_year(&self) -> &str;

    /// Phrase for `years` whole years ahead (>= 2).
    fn in_years(&self, years: i64) -> Phrase;
}

/// Built-in English locale, the default for every entry point.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct English;

impl TimeAgoLocale for English {
    // Past

    fn just_now(&self) -> &str {
        "just now"
    }

    fn one_minute_ago(&self) -> &str {
        "1 minute ago"
    }

    fn minutes_ago(&self, minutes: i64) -> Phrase {
        phrase(format_args!("{minutes} minutes ago"))
    }

    fn one_hour_ago(&self) -> &str {
        "1 hour ago"
    }

    fn hours_ago(&self, hours: i64) -> Phrase {
        phrase(format_args!("{hours} hours ago"))
    }

    fn yesterday(&self) -> &str {
        "yesterday"
    }

    fn days_ago(&self, days: i64) -> Phrase {
        phrase(format_args!("{days} days ago"))
    }

    fn one_week_ago(&self) -> &str {
        "1 week ago"
    }

    fn weeks_ago(&self, weeks: i64) -> Phrase {
        phrase(format_args!("{weeks} weeks ago"))
    }

    fn one_month_ago(&self) -> &str {
        "1 month ago"
    }

    fn months_ago(&self, months: i64) -> Phrase {
        phrase(format_args!("{months} months ago"))
    }

    fn one_year_ago(&self) -> &str {
        "1 year ago"
    }

    fn years_ago(&self, years: i64) -> Phrase {
        phrase(format_args!("{years} years ago"))
    }

    // Future

    fn just_now_future(&self) -> &str {
        "in a moment"
    }

    fn in_one_minute(&self) -> &str {
        "in 1 minute"
    }

    fn in_minutes(&self, minutes: i64) -> Phrase {
        phrase(format_args!("in {minutes} minutes"))
    }

    fn in_one_hour(&self) -> &str {
        "in 1 hour"
    }

    fn in_hours(&self, hours: i64) -> Phrase {
        phrase(format_args!("in {hours} hours"))
    }

    fn tomorrow(&self) -> &str {
        "tomorrow"
    }

    fn in_days(&self, days: i64) -> Phrase {
        phrase(format_args!("in {days} days"))
    }

    fn in_one_week(&self) -> &str {
        "in 1 week"
    }

    fn in_weeks(&self, weeks: i64) -> Phrase {
        phrase(format_args!("in {weeks} weeks"))
    }

    fn in_one_month(&self) -> &str {
        "in 1 month"
    }

    fn in_months(&self, months: i64) -> Phrase {
        phrase(format_args!("in {months} months"))
    }

    fn in_one_year(&self) -> &str {
        "in 1 year"
    }

    fn in_years(&self, years: i64) -> Phrase {
        phrase(format_args!("in {years} years"))
    }
}
