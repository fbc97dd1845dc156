// At an exact power of two the gap to the next smaller float is half the gap
// to the next larger one, so the shortest digits come from an uneven interval.

#[test]
fn power_of_two_boundary() {
    assert_eq!(numeral::general(9007199254740992.0f64), "9.007199254740992e15");
    assert_eq!(numeral::general(2f64.powi(-1022)), "2.2250738585072014e-308");
    assert_eq!(numeral::general(2f64.powi(-1074)), "5.0e-324");
    assert_eq!(numeral::general(8388608.0f32), "8388608.0");
    assert_eq!(numeral::general(2f32.powi(-126)), "1.1754944e-38");
}
