//! Conversion between [`SerialDate`] and calendar dates.
//!
//! This is the only place where serial numbers and `chrono::NaiveDate` meet.
//! Every other module works on `SerialDate` and calls in here when it needs
//! the year, month or day.

use chrono::{Datelike, NaiveDate, Weekday};
use yc_core::errors::Result;

use crate::date::SerialDate;

/// `NaiveDate::num_days_from_ce` of 30 December 1899, the serial epoch origin.
const EPOCH_DAYS_FROM_CE: i64 = 693_594;

/// Convert a calendar date to a serial date.
///
/// # Errors
/// [`Error::Range`](yc_core::Error::Range) for dates before 1 March 1900 or
/// after 31 December 9999.
pub fn to_serial(date: NaiveDate) -> Result<SerialDate> {
    SerialDate::checked(i64::from(date.num_days_from_ce()) - EPOCH_DAYS_FROM_CE)
}

/// Convert a serial date to its calendar date.
pub fn to_calendar(date: SerialDate) -> NaiveDate {
    // SerialDate only holds values between 1900-03-01 and 9999-12-31, all of
    // which chrono can represent.
    let days = i64::from(date.serial()) + EPOCH_DAYS_FROM_CE;
    NaiveDate::from_num_days_from_ce_opt(days as i32)
        .expect("SerialDate is always within chrono's calendar range")
}

/// Convert an unchecked serial number to its calendar date.
///
/// # Errors
/// [`Error::Range`](yc_core::Error::Range) if `serial` is below 61 or above
/// the maximum serial.
pub fn to_calendar_raw(serial: i32) -> Result<NaiveDate> {
    SerialDate::new(serial).map(to_calendar)
}

/// Weekday of a serial date.
pub fn weekday(date: SerialDate) -> Weekday {
    to_calendar(date).weekday()
}

/// Serial number of 1 January 1970, the origin of the civil-day count below.
const UNIX_EPOCH_SERIAL: i64 = 25_569;

/// Serial number of a proleptic Gregorian date, without range checks.
///
/// Works for years chrono cannot represent, so an offset that overflows the
/// calendar can still report where it would have landed.
pub(crate) fn unchecked_serial(year: i64, month: u32, day: u32) -> i64 {
    debug_assert!((1..=12).contains(&month));
    let m = i64::from(month);
    let y = if m <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let year_of_era = y - era * 400;
    let day_of_year = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + i64::from(day) - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * 146_097 + day_of_era - 719_468 + UNIX_EPOCH_SERIAL
}

/// Whether a given year is a leap year.
pub fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year, or `None` if `month` is not in 1..=12.
pub fn days_in_month(year: i64, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            if is_leap_year(year) {
                Some(29)
            } else {
                Some(28)
            }
        }
        _ => None,
    }
}

/// Last calendar day of the month containing `date`.
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    days_in_month(i64::from(date.year()), date.month())
        .and_then(|last| date.with_day(last))
        .expect("the last day of a month is always a valid date")
}

/// Return `true` if `date` is the last calendar day of its month.
pub fn is_end_of_month(date: NaiveDate) -> bool {
    end_of_month(date) == date
}
