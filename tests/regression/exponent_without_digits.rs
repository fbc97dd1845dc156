// An exponent marker that is not followed by digits is not part of the
// number, and neither is its sign.

#[test]
fn exponent_without_digits() {
    assert_eq!(numeral::valid_prefix_len("3e"), 1);
    assert_eq!(numeral::valid_prefix_len("3e-"), 1);
    assert_eq!(numeral::valid_prefix_len("3e-x"), 1);
    assert_eq!(numeral::parse_f64("3e-x"), 3.0);
    assert_eq!(numeral::parse_f64("3E+1x"), 30.0);
}
