use chrono::{Datelike, FixedOffset, NaiveDate, NaiveTime, TimeDelta, Timelike};
use jsonld_coerce::{CoercionError, Datatype, LexicalError, NativeValue, coerce, xsd};
use bigdecimal::BigDecimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tracing_subscriber::filter;

fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter::EnvFilter::from_default_env())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn typed(datatype: &str, value: impl Into<Value>) -> Value {
    json!({"@type": datatype, "@value": value.into()})
}

fn expect_error(datatype: &str, literal: &str) -> CoercionError {
    let err = coerce(&typed(datatype, literal))
        .expect_err(&format!("{literal:?} should not coerce to {datatype}"));
    assert_eq!(err.datatype, datatype);
    assert_eq!(err.literal, json!(literal));
    err
}

#[test]
fn untyped_values_are_identity() {
    init_tracing();
    for v in [json!(1), json!("1"), json!(2.5), json!(false), json!({"@id": "urn:x"})] {
        assert_eq!(coerce(&v).unwrap(), NativeValue::Untyped(v.clone()));
    }
}

#[test]
fn boolean_truthiness() {
    init_tracing();
    for (literal, expected) in [
        (json!("true"), true),
        (json!("1"), true),
        (json!("false"), false),
        (json!("0"), false),
        (json!("???"), false),
        (json!(true), false),
        (json!(1), false),
    ] {
        assert_eq!(
            coerce(&typed(xsd::BOOLEAN, literal.clone())).unwrap(),
            NativeValue::Boolean(expected),
            "{literal}"
        );
    }
}

#[test]
fn string_rendering() {
    assert_eq!(coerce(&typed(xsd::STRING, true)).unwrap().as_str(), Some("true"));
    assert_eq!(coerce(&typed(xsd::STRING, false)).unwrap().as_str(), Some("false"));
    assert_eq!(coerce(&typed(xsd::STRING, 1)).unwrap().as_str(), Some("1"));
}

#[test]
fn decimal_is_exact_one_tenth() {
    let v = coerce(&typed(xsd::DECIMAL, "0.1")).unwrap();
    assert_eq!(v.as_decimal(), Some(&BigDecimal::from_str("0.1").unwrap()));

    let err = expect_error(xsd::DECIMAL, "xxx");
    assert!(err.to_string().contains("decimal"));
    assert!(err.to_string().contains("\"xxx\""));
}

#[test]
fn float_tolerance() {
    let v = coerce(&typed(xsd::FLOAT, "0.1")).unwrap();
    assert!((v.as_f64().unwrap() - 0.1).abs() < 1e-12);
    expect_error(xsd::FLOAT, "xxx");
    expect_error(xsd::DOUBLE, "xxx");
}

#[test]
fn duration_five_years() {
    let v = coerce(&typed(xsd::DURATION, "P5Y")).unwrap();
    let d = v.as_duration().unwrap();
    assert_eq!((d.years, d.months), (5, 0));
    assert_eq!(d.time, TimeDelta::zero());

    let err = expect_error(xsd::DURATION, "xxx");
    assert!(matches!(err.source, LexicalError::InvalidDuration(_)));
}

#[test]
fn date_time_with_offset() {
    let v = coerce(&typed(xsd::DATE_TIME, "2014-02-18T16:07:52-05:00")).unwrap();
    let dt = v.as_date_time().unwrap();
    assert_eq!(dt.datetime.year(), 2014);
    assert_eq!(dt.datetime.month(), 2);
    assert_eq!(dt.datetime.day(), 18);
    assert_eq!(dt.datetime.hour(), 16);
    assert_eq!(dt.datetime.minute(), 7);
    assert_eq!(dt.datetime.second(), 52);
    assert_eq!(dt.offset, FixedOffset::west_opt(5 * 3_600));

    expect_error(xsd::DATE_TIME, "xxx");
}

#[test]
fn time_and_date_projections() {
    let t = coerce(&typed(xsd::TIME, "16:07:52-05:00")).unwrap();
    assert_eq!(
        t.as_time().unwrap().time,
        NaiveTime::from_hms_opt(16, 7, 52).unwrap()
    );
    expect_error(xsd::TIME, "xxx");

    let d = coerce(&typed(xsd::DATE, "2014-02-18T16:07:52-05:00")).unwrap();
    assert_eq!(d.as_date(), NaiveDate::from_ymd_opt(2014, 2, 18));
    expect_error(xsd::DATE, "xxx");
}

#[test]
fn hex_binary() {
    let v = coerce(&typed(xsd::HEX_BINARY, "0FB7")).unwrap();
    assert_eq!(v.as_bytes(), Some(&[0x0f_u8, 0xb7][..]));

    let err = expect_error(xsd::HEX_BINARY, "xxx");
    assert!(matches!(err.source, LexicalError::InvalidHex(_)));
}

#[test]
fn base64_binary() {
    let v = coerce(&typed(xsd::BASE64_BINARY, "aGVsbG8=\n")).unwrap();
    assert_eq!(v.as_bytes(), Some(&b"hello"[..]));

    let err = expect_error(xsd::BASE64_BINARY, "xxx");
    assert!(matches!(err.source, LexicalError::InvalidBase64(_)));
}

#[test]
fn any_uri_components() {
    let v = coerce(&typed(xsd::ANY_URI, "http://www.google.com/")).unwrap();
    let uri = v.as_uri().unwrap();
    assert_eq!(uri.scheme, "http");
    assert_eq!(uri.host(), "www.google.com");
    assert_eq!(uri.path, "/");
    assert_eq!(uri.query, "");
    assert_eq!(uri.fragment, "");
}

/// Rendering a coerced value and coercing the text again is stable.
#[test]
fn re_coercion_is_idempotent() {
    let cases = [
        (xsd::STRING, "plain text"),
        (xsd::BOOLEAN, "1"),
        (xsd::BOOLEAN, "no"),
        (xsd::DECIMAL, "-12.500"),
        (xsd::DECIMAL, "1e-3"),
        (xsd::DECIMAL, "-98765432109876543210.012345678901234567890"),
        (xsd::FLOAT, "0.1"),
        (xsd::DOUBLE, "-INF"),
        (xsd::DOUBLE, "1.7976931348623157e308"),
        (xsd::DURATION, "P5Y"),
        (xsd::DURATION, "P1W"),
        (xsd::DURATION, "-P1DT25H0.5S"),
        (xsd::DATE_TIME, "2014-02-18T16:07:52-05:00"),
        (xsd::DATE_TIME, "2014-02-18 16:07:52.123Z"),
        (xsd::DATE_TIME, "2014-02-18"),
        (xsd::TIME, "16:07:52+01:30"),
        (xsd::DATE, "2014-02-18T16:07:52-05:00"),
    ];

    for (datatype, literal) in cases {
        let first = coerce(&typed(datatype, literal)).unwrap();
        let rendered = first.to_lexical();
        let second = coerce(&typed(datatype, rendered.as_str())).unwrap();
        assert_eq!(first, second, "{literal:?} -> {rendered:?} ({datatype})");
    }
}

#[test]
fn every_datatype_resolves_from_its_iri() {
    for dt in Datatype::ALL {
        assert_eq!(Datatype::from_iri(dt.iri()), Some(dt));
    }
}
