//! End-to-end use of the façade: trade date to accrual fractions.

use approx::assert_relative_eq;
use yieldcurve::prelude::*;

fn date(y: i32, m: u32, d: u32) -> SerialDate {
    SerialDate::from_ymd(y, m, d).unwrap()
}

#[test]
fn swap_leg_dates() {
    let trade = resolve("2024-01-05", None).unwrap();
    let spot = spot_date(trade, 2, &WeekendCalendar).unwrap();
    assert_eq!(spot, date(2024, 1, 9));

    let maturity = resolve("18M", Some(spot)).unwrap();
    assert_eq!(maturity, date(2025, 7, 9));

    let schedule = ScheduleGenerator::new(spot, maturity, Tenor::years(1))
        .with_stub(StubType::FrontStubShort)
        .generate()
        .unwrap();
    assert_eq!(schedule.dates(), [spot, date(2024, 7, 9), maturity]);
    assert_eq!(schedule.stub(), Some(StubPosition::Front));

    let paid: Vec<SerialDate> = schedule
        .dates()
        .iter()
        .map(|d| roll(*d, RollType::Following, &WeekendCalendar))
        .collect::<Result<_>>()
        .unwrap();
    let accruals = fractions(&paid, &Actual365Fixed);
    assert_eq!(accruals.len(), 2);
    assert_relative_eq!(accruals.iter().sum::<Real>(), f64::from(paid[2] - paid[0]) / 365.0);
}

#[test]
fn modules_are_reachable() {
    let err = yieldcurve::time::roll(date(2024, 1, 6), RollType::None, &NullCalendar).unwrap_err();
    assert!(matches!(err, yieldcurve::core::Error::NotImplemented(_)));
}
