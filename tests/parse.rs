#![allow(clippy::float_cmp)]

use numeral::{
    parse, parse_bytes, parse_f32, parse_f64, parse_range, valid_prefix_len, FloatFormat, Notation,
};
use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

fn check(text: &str, expected: f64) {
    let value = parse_f64(text);
    assert_eq!(value.to_bits(), expected.to_bits(), "{:?} read as {:?}", text, value);
}

#[test]
fn test_numbers() {
    check("0", 0.0);
    check("-0", -0.0);
    check("12.5", 12.5);
    check("+12.5", 12.5);
    check("-12.5", -12.5);
    check("1e3", 1000.0);
    check("1E-3", 0.001);
    check("2.5e+2", 250.0);
    check(".5", 0.5);
    check("+.5", 0.5);
    check("-.5e-3", -0.0005);
    check("5.", 5.0);
    check("0.30000000000000004", 0.1 + 0.2);
    check("1.7976931348623157e308", f64::MAX);
    check("5e-324", 5e-324);
}

#[test]
fn test_trailing_garbage() {
    check("12.5xyz", 12.5);
    check("12e", 12.0);
    check("12e+", 12.0);
    check("1.5e+", 1.5);
    check("1.5e+x", 1.5);
    check("1.2.3", 1.2);
    check("1e5e6", 1e5);
    check("7-3", 7.0);
    check("3 apples", 3.0);
}

#[test]
fn test_no_number() {
    check("", 0.0);
    check("-", 0.0);
    check("+", 0.0);
    check(".", 0.0);
    check(".e5", 0.0);
    check("e5", 0.0);
    check("abc", 0.0);
    check(" 12", 0.0);
}

#[test]
fn test_out_of_range() {
    check("1e400", f64::INFINITY);
    check("-1e400", f64::NEG_INFINITY);
    check("1e-400", 0.0);
    check("-1e-400", -0.0);
    assert_eq!(parse_f32("1e39"), f32::INFINITY);
    assert_eq!(parse_f32("1e-50"), 0.0);
}

#[test]
fn test_special_words() {
    assert!(parse_f64("NaN").is_nan());
    assert!(parse_f64("nan").is_nan());
    assert!(parse_f64("-NaN").is_nan());
    assert!(parse_f64("NaN-garbage").is_nan());
    // only the first letter decides
    assert!(parse_f64("Nonsense").is_nan());
    check("Infinity", f64::INFINITY);
    check("+inf", f64::INFINITY);
    check("-Infinity", f64::NEG_INFINITY);
    check("-iceberg", f64::NEG_INFINITY);
    assert_eq!(parse_f32("-Infinity"), f32::NEG_INFINITY);
    assert!(parse_f32("NaN").is_nan());
}

#[test]
fn test_f32() {
    assert_eq!(parse_f32("0.1"), 0.1f32);
    assert_eq!(parse_f32("3.4028235e38"), f32::MAX);
    assert_eq!(parse_f32("1e-45").to_bits(), 1);
    assert_eq!(parse_f32("16777217"), 16777216.0);
    assert_eq!(parse::<f32>("0.33333334xyz"), 1.0 / 3.0);
}

#[test]
fn test_parse_range() {
    assert_eq!(parse_range::<f64>("x1.5y", 1, 4), 1.5);
    assert_eq!(parse_range::<f64>("x1.5y", 1, 2), 1.0);
    assert_eq!(parse_range::<f64>("1.5", 2, 1), 0.0);
    assert_eq!(parse_range::<f64>("1.5", 0, 10), 0.0);
    assert_eq!(parse_range::<f64>("1.5", 3, 3), 0.0);
    assert!(parse_range::<f32>("[NaN]", 1, 4).is_nan());
}

#[test]
fn test_parse_bytes() {
    assert_eq!(parse_bytes::<f64>(b"2.5\xFF"), 2.5);
    assert_eq!(parse_bytes::<f64>(b"\xFF2.5"), 0.0);
    assert_eq!(parse_bytes::<f32>(b"-8e1"), -80.0);
}

#[test]
fn test_valid_prefix_len() {
    assert_eq!(valid_prefix_len("12.5xyz"), 4);
    assert_eq!(valid_prefix_len("12e"), 2);
    assert_eq!(valid_prefix_len("12e-7"), 5);
    assert_eq!(valid_prefix_len("1e5e6"), 3);
    assert_eq!(valid_prefix_len("-"), 0);
    assert_eq!(valid_prefix_len(".5"), 2);
    assert_eq!(valid_prefix_len("NaN!"), 3);
    assert_eq!(valid_prefix_len("nah"), 1);
    assert_eq!(valid_prefix_len("-Infinity"), 9);
    assert_eq!(valid_prefix_len("+inf"), 4);
    assert_eq!(valid_prefix_len(""), 0);
}

#[test]
fn test_reads_formatted_text() {
    let formats = [
        FloatFormat::new(Notation::Decimal),
        FloatFormat::new(Notation::Scientific),
        FloatFormat::new(Notation::General),
        FloatFormat::new(Notation::Friendly).uppercase_exponent(true),
    ];
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
    for _ in 0..2000 {
        let x = f64::from_bits(rng.next_u64());
        for format in &formats {
            let text = format.format(x);
            let value = parse_f64(&text);
            if x.is_nan() {
                assert!(value.is_nan(), "{}", text);
            } else {
                assert_eq!(value.to_bits(), x.to_bits(), "{}", text);
            }
            assert_eq!(valid_prefix_len(&text), text.len(), "{}", text);
        }
    }
}
