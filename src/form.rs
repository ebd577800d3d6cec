//! Helpers for turning raw form strings into typed values.
//!
//! Browsers submit empty inputs as empty strings, so every field arrives as an
//! `Option<String>` and blank values are treated the same as missing ones.

use std::str::FromStr;

use time::{Date, Time, macros::format_description};

pub fn present(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
}

pub fn parse<T: FromStr>(value: Option<String>) -> Option<T> {
    present(value)?.parse().ok()
}

/// `YYYY-MM-DD`
pub fn date(value: Option<String>) -> Option<Date> {
    Date::parse(&present(value)?, format_description!("[year]-[month]-[day]")).ok()
}

/// `HH:MM`, with seconds tolerated.
pub fn time(value: Option<String>) -> Option<Time> {
    let value = present(value)?;
    Time::parse(&value, format_description!("[hour]:[minute]"))
        .or_else(|_| Time::parse(&value, format_description!("[hour]:[minute]:[second]")))
        .ok()
}
