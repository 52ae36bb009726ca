//! `DateFactory` — resolve heterogeneous date inputs to a [`SerialDate`].
//!
//! Inputs arrive as serial numbers, calendar dates, strings or tenors.  A
//! string whose first four characters are ASCII digits is an absolute date
//! (`"2020-01-15"`); any other string is a tenor expression such as
//! `"1M+2D"` or `"E+3M"`, applied left to right to a reference date.

use chrono::NaiveDate;
use tracing::trace;
use yc_core::errors::{Error, Result};
use yc_core::Settings;

use crate::codec;
use crate::date::SerialDate;
use crate::parser::{DateStringParser, DefaultDateParser};
use crate::stepper::step;
use crate::tenor::Tenor;

/// Anything that can be resolved to a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateLike {
    /// Already a serial date.
    Serial(SerialDate),
    /// A calendar date.
    Calendar(NaiveDate),
    /// An absolute date string or a tenor expression.
    Text(String),
    /// A single tenor, applied to the reference date.
    Tenor(Tenor),
}

impl DateLike {
    /// `true` if this is a string the factory would treat as an absolute date.
    pub fn is_absolute_text(&self) -> bool {
        matches!(self, DateLike::Text(s) if starts_with_year(s))
    }
}

fn starts_with_year(s: &str) -> bool {
    s.len() >= 4 && s.as_bytes()[..4].iter().all(u8::is_ascii_digit)
}

impl From<SerialDate> for DateLike {
    fn from(d: SerialDate) -> Self {
        DateLike::Serial(d)
    }
}

impl From<NaiveDate> for DateLike {
    fn from(d: NaiveDate) -> Self {
        DateLike::Calendar(d)
    }
}

impl From<&str> for DateLike {
    fn from(s: &str) -> Self {
        DateLike::Text(s.to_owned())
    }
}

impl From<String> for DateLike {
    fn from(s: String) -> Self {
        DateLike::Text(s)
    }
}

impl From<Tenor> for DateLike {
    fn from(t: Tenor) -> Self {
        DateLike::Tenor(t)
    }
}

impl From<&Tenor> for DateLike {
    fn from(t: &Tenor) -> Self {
        DateLike::Tenor(t.clone())
    }
}

/// Resolves [`DateLike`] values, delegating absolute strings to `P`.
#[derive(Debug, Clone, Default)]
pub struct DateFactory<P: DateStringParser = DefaultDateParser> {
    parser: P,
}

impl DateFactory {
    /// A factory using [`DefaultDateParser`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: DateStringParser> DateFactory<P> {
    /// A factory using a custom date-string parser.
    pub fn with_parser(parser: P) -> Self {
        Self { parser }
    }

    /// Resolve `value` to a serial date.
    ///
    /// Serial dates pass through, calendar dates and absolute strings are
    /// converted.  Tenors and tenor expressions are applied to `reference`
    /// without end-of-month preservation; the token `E` leaves the running
    /// date unchanged.
    ///
    /// # Errors
    /// * `Error::Precondition` if a relative input has no reference date.
    /// * `Error::Parse` for malformed date strings or tenor tokens.
    /// * `Error::InvalidArgument` for sentinel tokens other than a bare `E`.
    /// * `Error::Range` if a date falls outside the serial range.
    pub fn resolve(
        &self,
        value: impl Into<DateLike>,
        reference: Option<SerialDate>,
    ) -> Result<SerialDate> {
        match value.into() {
            DateLike::Serial(d) => Ok(d),
            DateLike::Calendar(d) => codec::to_serial(d),
            DateLike::Text(s) if starts_with_year(&s) => codec::to_serial(self.parser.parse(&s)?),
            DateLike::Text(s) => {
                let reference = require_reference(reference, &s)?;
                apply_expression(&s, reference)
            }
            DateLike::Tenor(t) => {
                let reference = require_reference(reference, t.as_str())?;
                if t.is_sentinel() {
                    Ok(reference)
                } else {
                    step(reference, &t, false)
                }
            }
        }
    }

    /// Resolve `value` against the evaluation date held in [`Settings`].
    ///
    /// # Errors
    /// As [`resolve`](Self::resolve); a relative input fails with
    /// `Error::Precondition` when no evaluation date is set.
    pub fn resolve_at_evaluation_date(&self, value: impl Into<DateLike>) -> Result<SerialDate> {
        let reference = Settings::instance()
            .evaluation_date_serial()
            .map(SerialDate::new)
            .transpose()?;
        self.resolve(value, reference)
    }
}

/// Resolve `value` with the default parser.
///
/// # Example
/// ```
/// use yc_time::{resolve, SerialDate};
/// assert_eq!(resolve("2020-01-15", None).unwrap().serial(), 43_845);
/// let spot = SerialDate::from_ymd(2020, 1, 15).unwrap();
/// assert_eq!(resolve("1M+2D", Some(spot)).unwrap(), SerialDate::from_ymd(2020, 2, 17).unwrap());
/// ```
pub fn resolve(value: impl Into<DateLike>, reference: Option<SerialDate>) -> Result<SerialDate> {
    DateFactory::new().resolve(value, reference)
}

fn require_reference(reference: Option<SerialDate>, input: &str) -> Result<SerialDate> {
    reference.ok_or_else(|| {
        Error::Precondition(format!("relative date '{input}' needs a reference date"))
    })
}

fn apply_expression(expression: &str, reference: SerialDate) -> Result<SerialDate> {
    let mut date = reference;
    for token in expression.split('+') {
        if token == "E" {
            continue;
        }
        let tenor = Tenor::parse(token).map_err(|e| match e {
            Error::Parse { reason, .. } => {
                Error::parse(expression, format!("bad token '{token}': {reason}"))
            }
            other => other,
        })?;
        let next = step(date, &tenor, false)?;
        trace!(expression, token, from = %date, to = %next, "applied tenor token");
        date = next;
    }
    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use yc_core::ScopedEvaluationDate;

    fn date(y: i32, m: u32, d: u32) -> SerialDate {
        SerialDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn passthrough_and_conversion() {
        let d = date(2020, 1, 15);
        assert_eq!(resolve(d, None).unwrap(), d);
        let nd = NaiveDate::from_ymd_opt(2020, 1, 15).unwrap();
        assert_eq!(resolve(nd, None).unwrap().serial(), 43_845);
        assert_eq!(resolve("2020-01-15", None).unwrap().serial(), 43_845);
        assert_eq!(resolve(String::from("20200115"), None).unwrap().serial(), 43_845);
    }

    #[test]
    fn tenor_expressions() {
        let r = date(2020, 1, 15);
        assert_eq!(resolve("1M", Some(r)).unwrap(), date(2020, 2, 15));
        assert_eq!(resolve("E", Some(r)).unwrap(), r);
        assert_eq!(resolve("E+3M", Some(r)).unwrap(), date(2020, 4, 15));
        assert_eq!(resolve("1Y+-1D", Some(r)).unwrap(), date(2021, 1, 14));
        assert_eq!(resolve("1M+1M", Some(date(2020, 1, 31))).unwrap(), date(2020, 3, 29));
    }

    #[test]
    fn tenor_values() {
        let r = date(2020, 1, 15);
        assert_eq!(resolve(Tenor::months(6), Some(r)).unwrap(), date(2020, 7, 15));
        assert_eq!(resolve(Tenor::parse("5E").unwrap(), Some(r)).unwrap(), r);
        assert_eq!(resolve(&Tenor::days(-15), Some(r)).unwrap(), date(2019, 12, 31));
    }

    #[test]
    fn relative_inputs_need_a_reference() {
        for v in [DateLike::from("1M"), DateLike::from(Tenor::sentinel())] {
            assert!(matches!(resolve(v, None), Err(Error::Precondition(_))));
        }
    }

    #[test]
    fn malformed_tokens() {
        let r = Some(date(2020, 1, 15));
        match resolve("1M+3X", r) {
            Err(Error::Parse { input, reason }) => {
                assert_eq!(input, "1M+3X");
                assert!(reason.contains("'3X'"), "{reason}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
        assert!(matches!(resolve("+1M", r), Err(Error::Parse { .. })));
        assert!(matches!(resolve("1M+0E", r), Err(Error::InvalidArgument(_))));
        assert!(matches!(resolve("2020-02-30", None), Err(Error::Parse { .. })));
    }

    #[test]
    fn classification() {
        assert!(DateLike::from("2020-01-15").is_absolute_text());
        assert!(!DateLike::from("12M").is_absolute_text());
        assert!(!DateLike::from(date(2020, 1, 15)).is_absolute_text());
    }

    #[test]
    fn evaluation_date_reference() {
        let _guard = ScopedEvaluationDate::new(43_845);
        let factory = DateFactory::new();
        assert_eq!(factory.resolve_at_evaluation_date("1M").unwrap(), date(2020, 2, 15));
        assert_eq!(factory.resolve_at_evaluation_date("E").unwrap().serial(), 43_845);
    }
}
