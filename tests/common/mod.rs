//! Shared test infrastructure for timeago-lite integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use timeago_lite::{Phrase, TimeAgoLocale, phrase};

// ============================================================================
// Marker Locale
// ============================================================================

/// Locale that tags every slot with the branch and unit that produced it.
///
/// Phrases encode the dispatch rule (`"past:minutes:5"`), letting tests
/// assert which threshold fired without depending on English wording.
/// Future phrases are wrapped in `<` / `>` so wrapping is observable.
pub struct MarkerLocale;

impl TimeAgoLocale for MarkerLocale {
    fn just_now(&self) -> &str {
        "past:now"
    }

    fn one_minute_ago(&self) -> &str {
        "past:minute:1"
    }

    fn minutes_ago(&self, minutes: i64) -> Phrase {
        phrase(format_args!("past:minutes:{minutes}"))
    }

    fn one_hour_ago(&self) -> &str {
        "past:hour:1"
    }

    fn hours_ago(&self, hours: i64) -> Phrase {
        phrase(format_args!("past:hours:{hours}"))
    }

    fn yesterday(&self) -> &str {
        "past:day:1"
    }

    fn days_ago(&self, days: i64) -> Phrase {
        phrase(format_args!("past:days:{days}"))
    }

    fn one_week_ago(&self) -> &str {
        "past:week:1"
    }

    fn weeks_ago(&self, weeks: i64) -> Phrase {
        phrase(format_args!("past:weeks:{weeks}"))
    }

    fn one_month_ago(&self) -> &str {
        "past:month:1"
    }

    fn months_ago(&self, months: i64) -> Phrase {
        phrase(format_args!("past:months:{months}"))
    }

    fn one_year_ago(&self) -> &str {
        "past:year:1"
    }

    fn years_ago(&self, years: i64) -> Phrase {
        phrase(format_args!("past:years:{years}"))
    }

    fn future_prefix(&self) -> &str {
        "<"
    }

    fn future_suffix(&self) -> &str {
        ">"
    }

    fn just_now_future(&self) -> &str {
        "future:now"
    }

    fn in_one_minute(&self) -> &str {
        "future:minute:1"
    }

    fn in_minutes(&self, minutes: i64) -> Phrase {
        phrase(format_args!("future:minutes:{minutes}"))
    }

    fn in_one_hour(&self) -> &str {
        "future:hour:1"
    }

    fn in_hours(&self, hours: i64) -> Phrase {
        phrase(format_args!("future:hours:{hours}"))
    }

    fn tomorrow(&self) -> &str {
        "future:day:1"
    }

    fn in_days(&self, days: i64) -> Phrase {
        phrase(format_args!("future:days:{days}"))
    }

    fn in_one_week(&self) -> &str {
        "future:week:1"
    }

    fn in_weeks(&self, weeks: i64) -> Phrase {
        phrase(format_args!("future:weeks:{weeks}"))
    }

    fn in_one_month(&self) -> &str {
        "future:month:1"
    }

    fn in_months(&self, months: i64) -> Phrase {
        phrase(format_args!("future:months:{months}"))
    }

    fn in_one_year(&self) -> &str {
        "future:year:1"
    }

    fn in_years(&self, years: i64) -> Phrase {
        phrase(format_args!("future:years:{years}"))
    }
}

// ============================================================================
// Spanish Locale
// ============================================================================

/// Real-world locale exercising inflection and non-English wording.
pub struct Spanish;

impl TimeAgoLocale for Spanish {
    fn just_now(&self) -> &str {
        "justo ahora"
    }

    fn one_minute_ago(&self) -> &str {
        "hace 1 minuto"
    }

    fn minutes_ago(&self, minutes: i64) -> Phrase {
        phrase(format_args!("hace {minutes} minutos"))
    }

    fn one_hour_ago(&self) -> &str {
        "hace 1 hora"
    }

    fn hours_ago(&self, hours: i64) -> Phrase {
        phrase(format_args!("hace {hours} horas"))
    }

    fn yesterday(&self) -> &str {
        "ayer"
    }

    fn days_ago(&self, days: i64) -> Phrase {
        phrase(format_args!("hace {days} días"))
    }

    fn one_week_ago(&self) -> &str {
        "hace 1 semana"
    }

    fn weeks_ago(&self, weeks: i64) -> Phrase {
        phrase(format_args!("hace {weeks} semanas"))
    }

    fn one_month_ago(&self) -> &str {
        "hace 1 mes"
    }

    fn months_ago(&self, months: i64) -> Phrase {
        phrase(format_args!("hace {months} meses"))
    }

    fn one_year_ago(&self) -> &str {
        "hace 1 año"
    }

    fn years_ago(&self, years: i64) -> Phrase {
        phrase(format_args!("hace {years} años"))
    }

    fn just_now_future(&self) -> &str {
        "en un momento"
    }

    fn in_one_minute(&self) -> &str {
        "en 1 minuto"
    }

    fn in_minutes(&self, minutes: i64) -> Phrase {
        phrase(format_args!("en {minutes} minutos"))
    }

    fn in_one_hour(&self) -> &str {
        "en 1 hora"
    }

    fn in_hours(&self, hours: i64) -> Phrase {
        phrase(format_args!("en {hours} horas"))
    }

    fn tomorrow(&self) -> &str {
        "mañana"
    }

    fn in_days(&self, days: i64) -> Phrase {
        phrase(format_args!("en {days} días"))
    }

    fn in_one_week(&self) -> &str {
        "en 1 semana"
    }

    fn in_weeks(&self, weeks: i64) -> Phrase {
        phrase(format_args!("en {weeks} semanas"))
    }

    fn in_one_month(&self) -> &str {
        "en 1 mes"
    }

    fn in_months(&self, months: i64) -> Phrase {
        phrase(format_args!("en {months} meses"))
    }

    fn in_one_year(&self) -> &str {
        "en 1 año"
    }

    fn in_years(&self, years: i64) -> Phrase {
        phrase(format_args!("en {years} años"))
    }
}
