//! Day-count fractions (actual days over a fixed denominator).
//!
//! A convention only supplies the denominator; the numerator is always the
//! actual number of calendar days between two serial dates.

use yc_core::{Real, Time};

use crate::date::SerialDate;

/// A day-count convention of the form `actual_days / denominator`.
pub trait DayCountConvention: std::fmt::Debug + Send + Sync {
    /// Human-readable name of this convention (e.g. `"Actual/360"`).
    fn name(&self) -> &str;

    /// Days per year.
    fn denominator(&self) -> Real;

    /// Fraction of a year between `d0` and `d1`.  Negative if `d1 < d0`.
    fn year_fraction(&self, d0: SerialDate, d1: SerialDate) -> Time {
        Real::from(d1 - d0) / self.denominator()
    }
}

/// Actual/360 day counter.
///
/// `year_fraction = actual_days / 360`
#[derive(Debug, Clone, Copy, Default)]
pub struct Actual360;

impl DayCountConvention for Actual360 {
    fn name(&self) -> &str {
        "Actual/360"
    }

    fn denominator(&self) -> Real {
        360.0
    }
}

/// Actual/365 (Fixed) day counter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Actual365Fixed;

impl DayCountConvention for Actual365Fixed {
    fn name(&self) -> &str {
        "Actual/365 (Fixed)"
    }

    fn denominator(&self) -> Real {
        365.0
    }
}

/// Actual/365.25 day counter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Actual36525;

impl DayCountConvention for Actual36525 {
    fn name(&self) -> &str {
        "Actual/365.25"
    }

    fn denominator(&self) -> Real {
        365.25
    }
}

/// `(d1 - d0) / convention.denominator()`.
pub fn fraction(d0: SerialDate, d1: SerialDate, convention: &dyn DayCountConvention) -> Time {
    convention.year_fraction(d0, d1)
}

/// Fractions for each consecutive pair of `dates`.
///
/// The result has `dates.len() - 1` entries, or none for fewer than two dates.
pub fn fractions(dates: &[SerialDate], convention: &dyn DayCountConvention) -> Vec<Time> {
    dates
        .windows(2)
        .map(|w| convention.year_fraction(w[0], w[1]))
        .collect()
}
