//! Tests for race time conversion

use crate::parser::time::parse_time;

fn assert_seconds(raw: &str, expected: f64) {
    let seconds = parse_time(raw).unwrap_or_else(|| panic!("'{}' should parse", raw));
    assert!(
        (seconds - expected).abs() < 1e-9,
        "'{}' parsed to {} instead of {}",
        raw,
        seconds,
        expected
    );
}

#[test]
fn test_minutes_and_seconds() {
    assert_seconds("1:05.32", 65.32);
    assert_seconds("0:59.99", 59.99);
    assert_seconds("12:00.01", 720.01);
    assert_seconds("2:20", 140.0);
}

#[test]
fn test_plain_seconds() {
    assert_seconds("31.45", 31.45);
    assert_seconds("30,95", 30.95);
    assert_seconds(" 28.10 ", 28.10);
    assert_seconds("45", 45.0);
}

#[test]
fn test_zero_and_negative_are_invalid() {
    assert_eq!(parse_time("0.00"), None);
    assert_eq!(parse_time("0"), None);
    assert_eq!(parse_time("0:00.00"), None);
    assert_eq!(parse_time("-12.50"), None);
}

#[test]
fn test_non_numeric_is_invalid() {
    assert_eq!(parse_time(""), None);
    assert_eq!(parse_time("   "), None);
    assert_eq!(parse_time("DSQ"), None);
    assert_eq!(parse_time("1:2:3"), None);
    assert_eq!(parse_time("a:30.00"), None);
    assert_eq!(parse_time("1:"), None);
    assert_eq!(parse_time("."), None);
}
