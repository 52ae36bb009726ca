//! # yieldcurve
//!
//! Date generation for yield-curve and bond-pricing code: serial dates,
//! tenors, business-day rolls, spot dates, day-count fractions and payment
//! schedules.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `yc-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! yieldcurve = "0.1"
//! ```
//!
//! ```rust
//! use yieldcurve::prelude::*;
//!
//! let trade = resolve("2024-01-05", None).unwrap();
//! let spot = spot_date(trade, 2, &WeekendCalendar).unwrap();
//! let maturity = resolve("1Y", Some(spot)).unwrap();
//! let schedule = generate(spot, maturity, &Tenor::months(3), StubType::NotAllowed).unwrap();
//! assert_eq!(schedule.len(), 5);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions, settings and primitive aliases.
pub use yc_core as core;

/// Dates, tenors, calendars, day counts and schedules.
pub use yc_time as time;

/// The types and functions most callers need.
pub mod prelude {
    pub use yc_core::{Error, Real, Result, ScopedEvaluationDate, Settings, Time};
    pub use yc_time::{
        fraction, fractions, generate, resolve, roll, spot_date, step, Actual360, Actual36525,
        Actual365Fixed, Calendar, DateFactory, DateLike, DayCountConvention, NullCalendar,
        RollType, Schedule, ScheduleGenerator, SerialDate, StubPosition, StubType, Tenor,
        TenorUnit, WeekendCalendar,
    };
}
