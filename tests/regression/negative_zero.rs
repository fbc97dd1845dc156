// Negative zero keeps its sign through every text form.

use numeral::{Buffer, BASE10};

#[test]
fn negative_zero() {
    assert_eq!(numeral::general(-0.0f64), "-0.0");
    assert_eq!(numeral::scientific(-0.0f32), "-0.0e0");
    assert!(numeral::parse_f64("-0.0").is_sign_negative());

    let mut buffer = Buffer::new();
    let text = BASE10.encode_exact_signed(&mut buffer, -0.0f64);
    assert_eq!(text, "-1");
    assert!(BASE10.decode_exact::<f64>(text).is_sign_negative());
}
