//! `Schedule` — an ordered sequence of payment dates.
//!
//! A schedule is generated by repeatedly stepping a running date by a tenor.
//! When the span from start to end is not a whole number of steps, the
//! [`StubType`] decides where the irregular period goes and whether it is
//! shorter or longer than a regular one:
//!
//! | stub             | walk                    | irregular period |
//! |------------------|-------------------------|------------------|
//! | `NotAllowed`     | forward from start      | error            |
//! | `BackStubShort`  | forward from start      | last, short      |
//! | `BackStubLong`   | forward, one step less  | last, long       |
//! | `FrontStubShort` | backward from end       | first, short     |
//! | `FrontStubLong`  | backward, one step less | first, long      |
//!
//! Each step is taken from the previous date, not from the anchor, so
//! month-end roll-down carries forward: 31 January + 1M is 29 February and
//! the next date is 29 March.  Use
//! [`ScheduleGenerator::end_of_month`] to keep month-end dates on month end.

use tracing::debug;
use yc_core::errors::{Error, Result};
use yc_core::{ensure, ensure_post, Time};

use crate::date::SerialDate;
use crate::day_count::{fractions, DayCountConvention};
use crate::stepper::step;
use crate::tenor::Tenor;

// ── Stub policies ────────────────────────────────────────────────────────────

/// Where a schedule may place an irregular period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StubType {
    /// The dates must land exactly on the end date.
    NotAllowed,
    /// A short first period.
    FrontStubShort,
    /// A long first period.
    FrontStubLong,
    /// A short last period.
    #[default]
    BackStubShort,
    /// A long last period.
    BackStubLong,
}

impl std::fmt::Display for StubType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StubType::NotAllowed => "Not Allowed",
            StubType::FrontStubShort => "Front Stub (Short)",
            StubType::FrontStubLong => "Front Stub (Long)",
            StubType::BackStubShort => "Back Stub (Short)",
            StubType::BackStubLong => "Back Stub (Long)",
        };
        write!(f, "{s}")
    }
}

/// Which end of a generated schedule carries the irregular period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StubPosition {
    /// The first period.
    Front,
    /// The last period.
    Back,
}

// ── Schedule ─────────────────────────────────────────────────────────────────

/// A strictly increasing sequence of at least two dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    dates: Vec<SerialDate>,
    stub: Option<StubPosition>,
}

impl Schedule {
    /// Build a schedule from an explicit list of dates.
    ///
    /// # Errors
    /// `Error::Precondition` if there are fewer than two dates or they are
    /// not strictly increasing.
    pub fn try_from_dates(dates: Vec<SerialDate>) -> Result<Self> {
        ensure!(dates.len() >= 2, "a schedule needs at least two dates, got {}", dates.len());
        ensure!(
            dates.windows(2).all(|w| w[0] < w[1]),
            "schedule dates must be strictly increasing"
        );
        Ok(Self { dates, stub: None })
    }

    /// All dates, start first.
    pub fn dates(&self) -> &[SerialDate] {
        &self.dates
    }

    /// Consume the schedule, returning its dates.
    pub fn into_dates(self) -> Vec<SerialDate> {
        self.dates
    }

    /// Number of dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Return `true` if the schedule has no dates.  Never the case for a
    /// generated or validated schedule.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Return the `i`-th date.
    ///
    /// # Panics
    /// If `i >= self.len()`.
    pub fn date(&self, i: usize) -> SerialDate {
        self.dates[i]
    }

    /// First date.
    pub fn start(&self) -> SerialDate {
        self.dates[0]
    }

    /// Last date.
    pub fn end(&self) -> SerialDate {
        self.dates[self.dates.len() - 1]
    }

    /// Consecutive `(from, to)` pairs, one per period.
    pub fn periods(&self) -> impl Iterator<Item = (SerialDate, SerialDate)> + '_ {
        self.dates.windows(2).map(|w| (w[0], w[1]))
    }

    /// The end carrying an irregular period, if generation produced one.
    pub fn stub(&self) -> Option<StubPosition> {
        self.stub
    }

    /// Day-count fraction of each period.
    pub fn year_fractions(&self, convention: &dyn DayCountConvention) -> Vec<Time> {
        fractions(&self.dates, convention)
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a SerialDate;
    type IntoIter = std::slice::Iter<'a, SerialDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates.iter()
    }
}

// ── Generator ────────────────────────────────────────────────────────────────

/// Builder for [`Schedule`].
///
/// ```
/// use yc_time::{ScheduleGenerator, SerialDate, StubType, Tenor};
/// let start = SerialDate::from_ymd(2020, 1, 15).unwrap();
/// let end = SerialDate::from_ymd(2021, 1, 15).unwrap();
/// let schedule = ScheduleGenerator::new(start, end, Tenor::months(3))
///     .with_stub(StubType::NotAllowed)
///     .generate()
///     .unwrap();
/// assert_eq!(schedule.len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleGenerator {
    start: SerialDate,
    end: SerialDate,
    step: Tenor,
    stub: StubType,
    end_of_month: bool,
}

impl ScheduleGenerator {
    /// Begin building a schedule from `start` to `end` in steps of `step`.
    ///
    /// Defaults: [`StubType::BackStubShort`], no end-of-month preservation.
    pub fn new(start: SerialDate, end: SerialDate, step: Tenor) -> Self {
        Self {
            start,
            end,
            step,
            stub: StubType::default(),
            end_of_month: false,
        }
    }

    /// Set the stub policy.
    pub fn with_stub(mut self, stub: StubType) -> Self {
        self.stub = stub;
        self
    }

    /// Keep month-end dates on month end while stepping.
    pub fn end_of_month(mut self, flag: bool) -> Self {
        self.end_of_month = flag;
        self
    }

    /// Generate the schedule.
    ///
    /// # Errors
    /// * `Error::Precondition` if `start >= end`, or the step is the
    ///   sentinel tenor or not strictly positive.
    /// * `Error::StubMismatch` under [`StubType::NotAllowed`] when stepping
    ///   does not land on the end date.
    /// * `Error::Postcondition` if the result is not strictly increasing from
    ///   start to end.
    pub fn generate(&self) -> Result<Schedule> {
        ensure!(
            self.start < self.end,
            "schedule start {} must be before end {}",
            self.start,
            self.end
        );
        ensure!(
            !self.step.is_sentinel() && self.step.magnitude() > 0,
            "schedule step must be a positive tenor, got '{}'",
            self.step
        );

        let (dates, stub) = match self.stub {
            StubType::NotAllowed => (self.exact()?, None),
            StubType::BackStubShort => self.back_short()?,
            StubType::BackStubLong => self.back_long()?,
            StubType::FrontStubShort => self.front_short()?,
            StubType::FrontStubLong => self.front_long()?,
        };

        ensure_post!(
            dates.first() == Some(&self.start)
                && dates.last() == Some(&self.end)
                && dates.windows(2).all(|w| w[0] < w[1]),
            "{} schedule from {} to {} is not strictly increasing between its end points",
            self.stub,
            self.start,
            self.end
        );
        debug!(
            start = %self.start,
            end = %self.end,
            step = %self.step,
            stub = %self.stub,
            end_of_month = self.end_of_month,
            dates = dates.len(),
            irregular = ?stub,
            "generated schedule"
        );
        Ok(Schedule { dates, stub })
    }

    /// One step from `date`, or `None` if it leaves the serial range (or
    /// chrono's calendar range, which is wider).
    ///
    /// Leaving the range always means passing `end` (forward) or `start`
    /// (backward), so callers treat `None` as an overshoot.
    fn advance(&self, date: SerialDate, by: &Tenor) -> Result<Option<SerialDate>> {
        match step(date, by, self.end_of_month) {
            Ok(next) => Ok(Some(next)),
            Err(Error::Range { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn exact(&self) -> Result<Vec<SerialDate>> {
        let mut dates = Vec::new();
        let mut current = Some(self.start);
        while let Some(d) = current.filter(|d| *d <= self.end) {
            dates.push(d);
            current = self.advance(d, &self.step)?;
        }
        // start <= end, so at least one date was collected
        let landed = dates[dates.len() - 1];
        if landed != self.end {
            return Err(Error::StubMismatch {
                days: self.end - landed,
                landed: landed.serial(),
                end: self.end.serial(),
            });
        }
        Ok(dates)
    }

    fn back_short(&self) -> Result<(Vec<SerialDate>, Option<StubPosition>)> {
        let mut dates = Vec::new();
        let mut current = Some(self.start);
        while let Some(d) = current.filter(|d| *d < self.end) {
            dates.push(d);
            current = self.advance(d, &self.step)?;
        }
        let stub = (current != Some(self.end)).then_some(StubPosition::Back);
        dates.push(self.end);
        Ok((dates, stub))
    }

    fn back_long(&self) -> Result<(Vec<SerialDate>, Option<StubPosition>)> {
        let mut dates = vec![self.start];
        let mut current = self.start;
        let mut candidate = self.advance(current, &self.step)?;
        while let Some(next) = candidate {
            let after = self.advance(next, &self.step)?;
            if !after.is_some_and(|a| a <= self.end) {
                break;
            }
            dates.push(next);
            current = next;
            candidate = after;
        }
        let stub = (candidate != Some(self.end)).then_some(StubPosition::Back);
        if current != self.end {
            dates.push(self.end);
        }
        Ok((dates, stub))
    }

    fn front_short(&self) -> Result<(Vec<SerialDate>, Option<StubPosition>)> {
        let back = self.step.negate();
        let mut dates = Vec::new();
        let mut current = Some(self.end);
        while let Some(d) = current.filter(|d| *d > self.start) {
            dates.push(d);
            current = self.advance(d, &back)?;
        }
        let stub = (current != Some(self.start)).then_some(StubPosition::Front);
        dates.push(self.start);
        // Collected end-first.
        dates.reverse();
        Ok((dates, stub))
    }

    fn front_long(&self) -> Result<(Vec<SerialDate>, Option<StubPosition>)> {
        let back = self.step.negate();
        let mut dates = vec![self.end];
        let mut current = self.end;
        let mut candidate = self.advance(current, &back)?;
        while let Some(prev) = candidate {
            let before = self.advance(prev, &back)?;
            if !before.is_some_and(|b| b >= self.start) {
                break;
            }
            dates.push(prev);
            current = prev;
            candidate = before;
        }
        let stub = (candidate != Some(self.start)).then_some(StubPosition::Front);
        if current != self.start {
            dates.push(self.start);
        }
        // Collected end-first.
        dates.reverse();
        Ok((dates, stub))
    }
}

/// Generate a schedule without end-of-month preservation.
///
/// Shorthand for `ScheduleGenerator::new(start, end, step).with_stub(stub).generate()`.
pub fn generate(start: SerialDate, end: SerialDate, step: &Tenor, stub: StubType) -> Result<Schedule> {
    ScheduleGenerator::new(start, end, step.clone())
        .with_stub(stub)
        .generate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day_count::Actual360;

    fn date(y: i32, m: u32, d: u32) -> SerialDate {
        SerialDate::from_ymd(y, m, d).unwrap()
    }

    fn months(n: i32) -> Tenor {
        Tenor::months(n)
    }

    #[test]
    fn back_stub_short_month_end_rolls_down() {
        let sched = generate(date(2020, 1, 31), date(2020, 7, 31), &months(1), StubType::BackStubShort)
            .unwrap();
        let expected = [
            date(2020, 1, 31),
            date(2020, 2, 29),
            date(2020, 3, 29),
            date(2020, 4, 29),
            date(2020, 5, 29),
            date(2020, 6, 29),
            date(2020, 7, 29),
            date(2020, 7, 31),
        ];
        assert_eq!(sched.dates(), expected);
        assert_eq!(sched.stub(), Some(StubPosition::Back));
    }

    #[test]
    fn end_of_month_keeps_month_end() {
        let sched = ScheduleGenerator::new(date(2020, 1, 31), date(2020, 7, 31), months(1))
            .end_of_month(true)
            .with_stub(StubType::NotAllowed)
            .generate()
            .unwrap();
        assert_eq!(sched.len(), 7);
        assert_eq!(sched.date(1), date(2020, 2, 29));
        assert_eq!(sched.date(2), date(2020, 3, 31));
        assert_eq!(sched.date(4), date(2020, 5, 31));
        assert_eq!(sched.stub(), None);
    }

    #[test]
    fn not_allowed_exact() {
        let sched = generate(date(2020, 1, 15), date(2021, 1, 15), &months(3), StubType::NotAllowed)
            .unwrap();
        assert_eq!(sched.len(), 5);
        assert_eq!(sched.start(), date(2020, 1, 15));
        assert_eq!(sched.end(), date(2021, 1, 15));
    }

    #[test]
    fn not_allowed_reports_mismatch() {
        let err = generate(date(2020, 1, 31), date(2020, 7, 31), &months(1), StubType::NotAllowed)
            .unwrap_err();
        assert_eq!(
            err,
            Error::StubMismatch {
                days: 2,
                landed: date(2020, 7, 29).serial(),
                end: date(2020, 7, 31).serial(),
            }
        );
    }

    #[test]
    fn back_stub_long() {
        let sched = generate(date(2020, 1, 15), date(2020, 7, 31), &months(1), StubType::BackStubLong)
            .unwrap();
        assert_eq!(sched.len(), 7);
        assert_eq!(sched.date(5), date(2020, 6, 15));
        assert_eq!(sched.end(), date(2020, 7, 31));
        assert_eq!(sched.stub(), Some(StubPosition::Back));
    }

    #[test]
    fn front_stub_short() {
        let sched = generate(date(2020, 1, 15), date(2020, 7, 31), &months(1), StubType::FrontStubShort)
            .unwrap();
        let expected = [
            date(2020, 1, 15),
            date(2020, 1, 29),
            date(2020, 2, 29),
            date(2020, 3, 30),
            date(2020, 4, 30),
            date(2020, 5, 30),
            date(2020, 6, 30),
            date(2020, 7, 31),
        ];
        assert_eq!(sched.dates(), expected);
        assert_eq!(sched.stub(), Some(StubPosition::Front));
    }

    #[test]
    fn front_stub_long() {
        let sched = generate(date(2020, 1, 15), date(2020, 7, 31), &months(1), StubType::FrontStubLong)
            .unwrap();
        assert_eq!(sched.len(), 7);
        assert_eq!(sched.date(1), date(2020, 2, 29));
        assert_eq!(sched.stub(), Some(StubPosition::Front));
    }

    #[test]
    fn exact_span_has_no_stub_under_any_policy() {
        for stub in [
            StubType::FrontStubShort,
            StubType::FrontStubLong,
            StubType::BackStubShort,
            StubType::BackStubLong,
        ] {
            let sched = generate(date(2020, 1, 15), date(2020, 7, 15), &months(2), stub).unwrap();
            assert_eq!(sched.len(), 4, "{stub}");
            assert_eq!(sched.stub(), None, "{stub}");
        }
    }

    #[test]
    fn span_shorter_than_one_step() {
        for stub in [
            StubType::FrontStubShort,
            StubType::FrontStubLong,
            StubType::BackStubShort,
            StubType::BackStubLong,
        ] {
            let sched = generate(date(2020, 1, 15), date(2020, 2, 1), &months(1), stub).unwrap();
            assert_eq!(sched.dates(), [date(2020, 1, 15), date(2020, 2, 1)], "{stub}");
            assert!(sched.stub().is_some(), "{stub}");
        }
    }

    #[test]
    fn step_past_the_calendar_leaves_one_stub_period() {
        let (start, end) = (date(2020, 1, 15), date(2021, 1, 15));
        for text in ["300000Y", "100000000D"] {
            let tenor = Tenor::parse(text).unwrap();
            for stub in [
                StubType::FrontStubShort,
                StubType::FrontStubLong,
                StubType::BackStubShort,
                StubType::BackStubLong,
            ] {
                let sched = generate(start, end, &tenor, stub).unwrap();
                assert_eq!(sched.dates(), [start, end], "{text} {stub}");
                assert!(sched.stub().is_some(), "{text} {stub}");
            }
            assert_eq!(
                generate(start, end, &tenor, StubType::NotAllowed).unwrap_err(),
                Error::StubMismatch {
                    days: 366,
                    landed: start.serial(),
                    end: end.serial(),
                }
            );
        }
    }

    #[test]
    fn preconditions() {
        let d = date(2020, 1, 15);
        assert!(matches!(
            generate(d, d, &months(1), StubType::BackStubShort),
            Err(Error::Precondition(_))
        ));
        assert!(matches!(
            generate(d, date(2021, 1, 15), &months(-1), StubType::BackStubShort),
            Err(Error::Precondition(_))
        ));
        assert!(matches!(
            generate(d, date(2021, 1, 15), &Tenor::sentinel(), StubType::BackStubShort),
            Err(Error::Precondition(_))
        ));
    }

    #[test]
    fn schedule_ending_at_max_date() {
        let end = SerialDate::MAX;
        let start = date(9999, 6, 15);
        let short = generate(start, end, &months(4), StubType::BackStubShort).unwrap();
        assert_eq!(short.dates(), [start, date(9999, 10, 15), end]);
        // 9999-10-15 + 4M is past the last serial, so the long stub absorbs it
        let long = generate(start, end, &months(4), StubType::BackStubLong).unwrap();
        assert_eq!(long.dates(), [start, end]);
        assert_eq!(long.stub(), Some(StubPosition::Back));
    }

    #[test]
    fn periods_and_fractions() {
        let sched = generate(date(2020, 1, 1), date(2020, 3, 1), &months(1), StubType::NotAllowed)
            .unwrap();
        let periods: Vec<_> = sched.periods().collect();
        assert_eq!(periods, [(date(2020, 1, 1), date(2020, 2, 1)), (date(2020, 2, 1), date(2020, 3, 1))]);
        assert_eq!(sched.year_fractions(&Actual360), [31.0 / 360.0, 29.0 / 360.0]);
    }

    #[test]
    fn explicit_dates() {
        let sched = Schedule::try_from_dates(vec![date(2020, 1, 1), date(2020, 6, 1)]).unwrap();
        assert_eq!(sched.stub(), None);
        assert_eq!((&sched).into_iter().count(), 2);
        assert!(Schedule::try_from_dates(vec![date(2020, 1, 1)]).is_err());
        assert!(Schedule::try_from_dates(vec![date(2020, 6, 1), date(2020, 1, 1)]).is_err());
    }
}
