//! Move a date off holidays according to a [`RollType`].

use tracing::trace;
use yc_core::errors::Result;
use yc_core::fail;

use crate::calendar::Calendar;
use crate::date::SerialDate;
use crate::roll_type::RollType;

/// Roll `date` to a business day of `calendar`.
///
/// Business days are returned unchanged.  `Following` moves forward one day
/// at a time while the date is a holiday, `Preceding` moves backward.
///
/// # Errors
/// * `Error::NotImplemented` for `None`, `ModifiedFollowing` and
///   `ModifiedPreceding`, whatever the date.
/// * `Error::Range` if rolling runs past the serial range.
pub fn roll(date: SerialDate, roll_type: RollType, calendar: &dyn Calendar) -> Result<SerialDate> {
    let step = match roll_type {
        RollType::Following => 1,
        RollType::Preceding => -1,
        RollType::None | RollType::ModifiedFollowing | RollType::ModifiedPreceding => {
            fail!("roll type '{roll_type}' is not supported")
        }
    };
    let mut rolled = date;
    while calendar.is_holiday(rolled) {
        rolled = rolled.add_days(step)?;
    }
    if rolled != date {
        trace!(
            from = %date,
            to = %rolled,
            convention = %roll_type,
            calendar = calendar.name(),
            "rolled holiday"
        );
    }
    Ok(rolled)
}
