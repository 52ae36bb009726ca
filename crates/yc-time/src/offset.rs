//! `RelativeOffset` — the calendar arithmetic behind a tenor.
//!
//! Month-based offsets keep the day of month where possible and roll down to
//! the last day of a shorter target month (31 January + 1 month = 28 or
//! 29 February).

use chrono::{Datelike, Days, Months, NaiveDate};
use yc_core::errors::{Error, Result};

use crate::codec;
use crate::date::SerialDate;
use crate::tenor::{Tenor, TenorUnit};

/// An offset to apply to a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelativeOffset {
    /// Calendar days.
    Days(i64),
    /// Calendar months.
    Months(i64),
    /// Calendar years, applied as twelve months each.
    Years(i64),
}

impl RelativeOffset {
    /// Map a magnitude and unit to an offset.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] for the `E` sentinel, which has no offset.
    pub fn from_parts(magnitude: i32, unit: TenorUnit) -> Result<Self> {
        let n = i64::from(magnitude);
        match unit {
            TenorUnit::Day => Ok(RelativeOffset::Days(n)),
            TenorUnit::Month => Ok(RelativeOffset::Months(n)),
            TenorUnit::Year => Ok(RelativeOffset::Years(n)),
            // TODO: `F` is stepped as a quarter until its own semantics are
            // documented; revisit once a curve definition relies on it.
            TenorUnit::Quarter | TenorUnit::F => Ok(RelativeOffset::Months(3 * n)),
            TenorUnit::E => Err(Error::InvalidArgument(
                "the E sentinel tenor has no calendar offset".into(),
            )),
        }
    }

    /// Offset for a tenor.
    pub fn from_tenor(tenor: &Tenor) -> Result<Self> {
        Self::from_parts(tenor.magnitude(), tenor.unit())
    }

    /// `true` if the offset moves by whole months or years.
    pub fn is_month_based(&self) -> bool {
        !matches!(self, RelativeOffset::Days(_))
    }

    /// Apply the offset to `date`.
    ///
    /// # Errors
    /// [`Error::Range`] if the result leaves chrono's calendar range.  The
    /// reported value is the serial the offset would have reached.  Results
    /// inside chrono's range are checked against the serial range when they
    /// are converted back.
    pub fn apply(&self, date: NaiveDate) -> Result<NaiveDate> {
        let shifted = match *self {
            RelativeOffset::Days(n) => {
                let days = Days::new(n.unsigned_abs());
                if n >= 0 {
                    date.checked_add_days(days)
                } else {
                    date.checked_sub_days(days)
                }
            }
            RelativeOffset::Months(n) => shift_months(date, n),
            RelativeOffset::Years(n) => shift_months(date, n.saturating_mul(12)),
        };
        shifted.ok_or_else(|| Error::Range {
            value: self.unchecked_target(date),
            min: SerialDate::MIN.serial(),
            max: SerialDate::MAX.serial(),
        })
    }

    /// Serial the offset reaches from `date`, computed without chrono so it
    /// is defined past the calendar range.
    fn unchecked_target(&self, date: NaiveDate) -> i64 {
        let months = match *self {
            RelativeOffset::Days(n) => {
                let base = codec::unchecked_serial(i64::from(date.year()), date.month(), date.day());
                return base.saturating_add(n);
            }
            RelativeOffset::Months(n) => n,
            RelativeOffset::Years(n) => n.saturating_mul(12),
        };
        // Clamped so the day count below cannot overflow.
        let total = (i64::from(date.year()) * 12 + i64::from(date.month0()))
            .saturating_add(months)
            .clamp(-MONTH_LIMIT, MONTH_LIMIT);
        let year = total.div_euclid(12);
        // rem_euclid(12) is in 0..12
        let month = total.rem_euclid(12) as u32 + 1;
        let day = codec::days_in_month(year, month).map_or(date.day(), |last| date.day().min(last));
        codec::unchecked_serial(year, month, day)
    }
}

const MONTH_LIMIT: i64 = 12_000_000_000_000;

fn shift_months(date: NaiveDate, n: i64) -> Option<NaiveDate> {
    let months = Months::new(u32::try_from(n.unsigned_abs()).ok()?);
    if n >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    }
}
