//! `Calendar` trait and the built-in holiday policies.
//!
//! A calendar only answers "is this date a holiday?".  Rolling and spot-date
//! arithmetic live in [`roller`](crate::roller) and [`spot`](crate::spot) and
//! take any `&dyn Calendar`, so callers can plug in their own holiday tables.

use chrono::Weekday;

use crate::date::SerialDate;

/// A business-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Weekends Only"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a non-business day.
    fn is_holiday(&self, date: SerialDate) -> bool;

    /// Return `true` if `date` is a business day.
    fn is_business_day(&self, date: SerialDate) -> bool {
        !self.is_holiday(date)
    }
}

/// A null calendar — every day is a business day.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCalendar;

impl Calendar for NullCalendar {
    fn name(&self) -> &str {
        "Null"
    }

    fn is_holiday(&self, _date: SerialDate) -> bool {
        false
    }
}

/// Saturdays and Sundays are holidays, nothing else is.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl Calendar for WeekendCalendar {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_holiday(&self, date: SerialDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }
}
