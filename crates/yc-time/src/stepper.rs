//! Advance a serial date by a tenor.

use yc_core::errors::{Error, Result};

use crate::codec;
use crate::date::SerialDate;
use crate::offset::RelativeOffset;
use crate::tenor::Tenor;

/// Move `date` by `tenor`.
///
/// Month-based units roll the day of month down for short months.  With
/// `preserve_end_of_month`, a month-based step from the last day of a month
/// lands on the last day of the resulting month, so 31 January + 1M =
/// 29 February and 29 February + 1M = 31 March.  Day steps ignore the flag.
///
/// # Errors
/// * [`Error::InvalidArgument`] for the sentinel tenor `E`.
/// * [`Error::Range`] if the result falls outside the serial range.
///
/// # Example
/// ```
/// use yc_time::{step, SerialDate, Tenor};
/// let jan31 = SerialDate::from_ymd(2020, 1, 31).unwrap();
/// let feb = step(jan31, &Tenor::months(1), true).unwrap();
/// assert_eq!(feb, SerialDate::from_ymd(2020, 2, 29).unwrap());
/// ```
pub fn step(date: SerialDate, tenor: &Tenor, preserve_end_of_month: bool) -> Result<SerialDate> {
    if tenor.is_sentinel() {
        return Err(Error::InvalidArgument(format!(
            "cannot step {date} by sentinel tenor '{tenor}'"
        )));
    }
    let offset = RelativeOffset::from_tenor(tenor)?;
    let calendar_date = date.to_calendar();
    let mut shifted = offset.apply(calendar_date)?;
    let sticky = preserve_end_of_month && offset.is_month_based();
    if sticky && codec::is_end_of_month(calendar_date) {
        shifted = codec::end_of_month(shifted);
    }
    codec::to_serial(shifted)
}
