//! # yc-time
//!
//! Serial dates, tenors, calendars, roll conventions, spot dates, day-count
//! fractions and schedule generation.
//!
//! Every component works on [`SerialDate`], a day count from 30 December
//! 1899.  Calendar dates (`chrono::NaiveDate`) only appear at the [`codec`]
//! boundary and in the inputs accepted by [`DateFactory`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait and built-in holiday policies.
pub mod calendar;

/// Serial ↔ calendar date conversion.
pub mod codec;

/// `SerialDate` type.
pub mod date;

/// Day-count conventions and fractions.
pub mod day_count;

/// `DateFactory` and the `DateLike` input type.
pub mod factory;

/// `RelativeOffset` — calendar arithmetic behind a tenor.
pub mod offset;

/// Absolute date-string parsing.
pub mod parser;

/// `RollType` — holiday roll conventions.
pub mod roll_type;

/// Rolling dates off holidays.
pub mod roller;

/// `Schedule` and `ScheduleGenerator`.
pub mod schedule;

/// Spot-date calculation.
pub mod spot;

/// Stepping a date by a tenor.
pub mod stepper;

/// `Tenor` — a signed magnitude and unit.
pub mod tenor;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, NullCalendar, WeekendCalendar};
pub use date::SerialDate;
pub use day_count::{fraction, fractions, Actual360, Actual36525, Actual365Fixed, DayCountConvention};
pub use factory::{resolve, DateFactory, DateLike};
pub use offset::RelativeOffset;
pub use parser::{DateStringParser, DefaultDateParser};
pub use roll_type::RollType;
pub use roller::roll;
pub use schedule::{generate, Schedule, ScheduleGenerator, StubPosition, StubType};
pub use spot::spot_date;
pub use stepper::step;
pub use tenor::{Tenor, TenorUnit};
