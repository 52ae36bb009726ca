//! Spot dates: trade date plus N business days.

use tracing::debug;
use yc_core::errors::Result;
use yc_core::{ensure, ensure_post};

use crate::calendar::Calendar;
use crate::date::SerialDate;
use crate::roll_type::RollType;
use crate::roller::roll;
use crate::stepper::step;
use crate::tenor::Tenor;

/// Settlement date `offset_days` business days after `trade_date`.
///
/// Each of the `offset_days` iterations steps one calendar day and then rolls
/// `Following`.  This walks weekends one day at a time; it is not the same as
/// adding N calendar days and rolling once.
///
/// # Errors
/// * `Error::Precondition` if `trade_date` is a holiday of `calendar`.
/// * `Error::Postcondition` if the result is a holiday (a broken calendar).
/// * `Error::Range` if the walk leaves the serial range.
pub fn spot_date(
    trade_date: SerialDate,
    offset_days: u32,
    calendar: &dyn Calendar,
) -> Result<SerialDate> {
    ensure!(
        !calendar.is_holiday(trade_date),
        "trade date {trade_date} is a holiday in calendar '{}'",
        calendar.name()
    );
    let one_day = Tenor::days(1);
    let mut date = trade_date;
    for _ in 0..offset_days {
        date = step(date, &one_day, false)?;
        date = roll(date, RollType::Following, calendar)?;
    }
    ensure_post!(
        !calendar.is_holiday(date),
        "spot date {date} is a holiday in calendar '{}'",
        calendar.name()
    );
    debug!(
        trade = %trade_date,
        offset_days,
        spot = %date,
        calendar = calendar.name(),
        "computed spot date"
    );
    Ok(date)
}
