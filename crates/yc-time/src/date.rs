//! `SerialDate` — the integer date representation used by every component.
//!
//! A serial date counts days from the spreadsheet epoch origin: serial 0 is
//! **30 December 1899**, so serial 1 is 31 December 1899 and serial 2 is
//! 1 January 1900.
//!
//! # Valid range
//! * Minimum: serial 61 = 1 March 1900.  Spreadsheet systems count a phantom
//!   29 February 1900; serials from 1 March 1900 onward agree with them, earlier
//!   ones do not, so they are rejected.
//! * Maximum: serial 2 958 465 = 31 December 9999.

use chrono::{NaiveDate, Weekday};
use yc_core::errors::{Error, Result};

use crate::codec;

/// A calendar date represented as a day count from 30 December 1899.
///
/// Values are always within [`SerialDate::MIN`, `SerialDate::MAX`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SerialDate(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl SerialDate {
    /// Minimum valid date: 1 March 1900.
    pub const MIN: SerialDate = SerialDate(61);

    /// Maximum valid date: 31 December 9999.
    pub const MAX: SerialDate = SerialDate(2_958_465);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// # Errors
    /// [`Error::Range`] if `serial` lies outside [`MIN`](Self::MIN)..=[`MAX`](Self::MAX).
    pub fn new(serial: i32) -> Result<Self> {
        Self::checked(i64::from(serial))
    }

    pub(crate) fn checked(serial: i64) -> Result<Self> {
        if serial < i64::from(Self::MIN.0) || serial > i64::from(Self::MAX.0) {
            return Err(Error::Range {
                value: serial,
                min: Self::MIN.0,
                max: Self::MAX.0,
            });
        }
        // Bounds were checked above, the cast cannot truncate.
        Ok(SerialDate(serial as i32))
    }

    /// Create a date from year, month (1–12) and day-of-month.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            Error::InvalidArgument(format!("{year:04}-{month:02}-{day:02} is not a calendar date"))
        })?;
        codec::to_serial(date)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the calendar date.
    pub fn to_calendar(self) -> NaiveDate {
        codec::to_calendar(self)
    }

    /// Return the weekday of the calendar date.
    pub fn weekday(self) -> Weekday {
        codec::weekday(self)
    }

    /// Return `true` if this is the last calendar day of its month.
    pub fn is_end_of_month(self) -> bool {
        codec::is_end_of_month(self.to_calendar())
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` calendar days.
    ///
    /// # Errors
    /// [`Error::Range`] if the result leaves the valid range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        Self::checked(i64::from(self.0) + i64::from(n))
    }

    /// Return the number of calendar days from `self` to `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: SerialDate) -> i32 {
        other.0 - self.0
    }
}

impl std::ops::Sub<SerialDate> for SerialDate {
    type Output = i32;
    fn sub(self, rhs: SerialDate) -> i32 {
        self.0 - rhs.0
    }
}

impl TryFrom<i32> for SerialDate {
    type Error = Error;
    fn try_from(serial: i32) -> Result<Self> {
        SerialDate::new(serial)
    }
}

impl From<SerialDate> for i32 {
    fn from(date: SerialDate) -> i32 {
        date.0
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for SerialDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_calendar().format("%Y-%m-%d"))
    }
}

impl std::fmt::Debug for SerialDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SerialDate({} = {self})", self.0)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
