//! Absolute date strings.
//!
//! [`DateFactory`](crate::factory::DateFactory) hands every string that
//! starts with four digits to a [`DateStringParser`].  The default one tries
//! a fixed list of `chrono` formats; callers with other conventions can
//! supply their own.

use chrono::{NaiveDate, NaiveDateTime};
use yc_core::errors::{Error, Result};

/// Turns an absolute date string into a calendar date.
pub trait DateStringParser: std::fmt::Debug + Send + Sync {
    /// Parse `text`.
    ///
    /// # Errors
    /// [`Error::Parse`] echoing `text` when it is not a recognized date.
    fn parse(&self, text: &str) -> Result<NaiveDate>;
}

/// Date-only formats, tried in order.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y%m%d", "%Y/%m/%d", "%Y.%m.%d"];

/// Date-time formats; only the date part is kept.
const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// ISO-style year-first dates, with or without separators or a time part.
///
/// Accepts `2020-01-15`, `20200115`, `2020/01/15`, `2020.01.15`,
/// `2020-01-15T10:30:00` and `2020-01-15 10:30:00`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDateParser;

impl DateStringParser for DefaultDateParser {
    fn parse(&self, text: &str) -> Result<NaiveDate> {
        let trimmed = text.trim();
        DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
            .or_else(|| {
                DATETIME_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
                    .map(|dt| dt.date())
            })
            .ok_or_else(|| Error::parse(text, "not a recognized date format"))
    }
}
