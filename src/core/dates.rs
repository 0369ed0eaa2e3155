// src/core/dates.rs
//! Contract dates on the listing are free text in `DD/MM/YYYY` form.
//!
//! Anything that does not parse is ranked as [`NaiveDate::MIN`]: it sorts last
//! in a most-recent-first listing and never passes a "strictly after" cut-off.

use chrono::{Days, Local, NaiveDate};

use crate::config::consts::DATE_FORMAT;

/// Strict `DD/MM/YYYY` parse (surrounding whitespace tolerated).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// Parse or fall back to the minimum sentinel.
pub fn date_or_min(s: &str) -> NaiveDate {
    parse_date(s).unwrap_or(NaiveDate::MIN)
}

pub fn format_date(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// `today - 1 day`, the start of the rolling lookback window.
pub fn yesterday_of(today: NaiveDate) -> NaiveDate {
    today.checked_sub_days(Days::new(1)).unwrap_or(NaiveDate::MIN)
}
