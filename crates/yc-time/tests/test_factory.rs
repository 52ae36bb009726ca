//! Integration tests for `DateFactory`.

use chrono::NaiveDate;
use yc_core::{Error, Result, ScopedEvaluationDate, Settings};
use yc_time::codec::to_serial;
use yc_time::{resolve, DateFactory, DateLike, DateStringParser, SerialDate, Tenor};

fn date(y: i32, m: u32, d: u32) -> SerialDate {
    SerialDate::from_ymd(y, m, d).unwrap()
}

#[test]
fn absolute_string() {
    let expected = to_serial(NaiveDate::from_ymd_opt(2020, 1, 15).unwrap()).unwrap();
    assert_eq!(resolve("2020-01-15", None).unwrap(), expected);
    // The reference date is irrelevant for absolute input.
    assert_eq!(resolve("2020-01-15", Some(date(1999, 1, 1))).unwrap(), expected);
}

#[test]
fn every_input_shape() {
    let r = Some(date(2020, 1, 15));
    let inputs: Vec<(DateLike, SerialDate)> = vec![
        (date(2020, 3, 1).into(), date(2020, 3, 1)),
        (NaiveDate::from_ymd_opt(2020, 3, 1).unwrap().into(), date(2020, 3, 1)),
        ("2020/03/01".into(), date(2020, 3, 1)),
        ("3M".into(), date(2020, 4, 15)),
        ("E+1Y+2D".into(), date(2021, 1, 17)),
        (Tenor::years(2).into(), date(2022, 1, 15)),
        (Tenor::sentinel().into(), date(2020, 1, 15)),
    ];
    for (input, expected) in inputs {
        assert_eq!(resolve(input.clone(), r).unwrap(), expected, "{input:?}");
    }
}

#[test]
fn expression_without_reference_fails() {
    match resolve("1M+2D", None) {
        Err(Error::Precondition(msg)) => assert!(msg.contains("1M+2D"), "{msg}"),
        other => panic!("expected precondition failure, got {other:?}"),
    }
}

#[test]
fn malformed_absolute_string_is_echoed() {
    match resolve("2020-99-99", None) {
        Err(Error::Parse { input, .. }) => assert_eq!(input, "2020-99-99"),
        other => panic!("expected parse failure, got {other:?}"),
    }
}

#[test]
fn date_before_minimum_is_a_range_error() {
    assert!(matches!(resolve("1900-02-28", None), Err(Error::Range { .. })));
    let early = Some(date(1900, 3, 1));
    assert!(matches!(resolve("-1D", early), Err(Error::Range { .. })));
}

/// Accepts compact `yyyymmdd` dates only.
#[derive(Debug)]
struct CompactParser;

impl DateStringParser for CompactParser {
    fn parse(&self, text: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(text, "%Y%m%d").map_err(|e| Error::parse(text, e.to_string()))
    }
}

#[test]
fn custom_parser() {
    let factory = DateFactory::with_parser(CompactParser);
    assert_eq!(factory.resolve("20200115", None).unwrap().serial(), 43_845);
    assert!(matches!(factory.resolve("2020-01-15", None), Err(Error::Parse { .. })));
    // Tenor expressions never reach the parser.
    assert_eq!(
        factory.resolve("1M", Some(date(2020, 1, 15))).unwrap(),
        date(2020, 2, 15)
    );
}

#[test]
fn evaluation_date_from_settings() {
    let factory = DateFactory::new();
    {
        let _guard = ScopedEvaluationDate::new(date(2021, 3, 8).serial());
        assert_eq!(factory.resolve_at_evaluation_date("1D").unwrap(), date(2021, 3, 9));
        assert_eq!(
            factory.resolve_at_evaluation_date("2020-01-15").unwrap().serial(),
            43_845
        );
    }
    assert_eq!(Settings::instance().evaluation_date_serial(), None);
    assert!(matches!(
        factory.resolve_at_evaluation_date("1D"),
        Err(Error::Precondition(_))
    ));
}
