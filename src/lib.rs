#![no_std]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`TimeDelta`**: A signed span of elapsed time; positive lies in the past, negative in the future
//! - **`TimeAgoLocale`**: Trait to implement for custom translations
//! - **`English`**: Built-in default locale
//! - **`Phrase`**: Fixed-capacity output string, built without heap allocation
//! - **`time_ago` / `time_ago_with`**: Threshold dispatch from a delta to a phrase
//! - **`from_seconds` / `from_minutes` / `from_hours` / `from_days`**: Unit-normalizing entry points
//!
//! The formatter is pure and total: the same delta and locale always produce
//! the same phrase, and no input can make a format call fail. Locales are
//! immutable values, so any number of threads may format concurrently
//! without synchronization.

pub mod format;
pub mod locale;
pub mod time;

pub use format::{
    from_days, from_days_with, from_hours, from_hours_with, from_minutes, from_minutes_with,
    from_seconds, from_seconds_with, time_ago, time_ago_with,
};
pub use locale::{English, PHRASE_CAPACITY, Phrase, TimeAgoLocale, phrase};
pub use time::TimeDelta;
