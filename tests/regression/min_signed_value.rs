// The minimum of each signed width has no positive counterpart, so it must be
// written and read without ever negating it.

use numeral::{Buffer, PREDEFINED};

#[test]
fn min_signed_value() {
    let mut buffer = Buffer::new();
    for alphabet in PREDEFINED {
        let text = alphabet.encode_signed(&mut buffer, i64::MIN).to_owned();
        assert_eq!(alphabet.decode::<i64>(&text), i64::MIN, "{:?}", text);
        let text = alphabet.encode_signed(&mut buffer, i8::MIN).to_owned();
        assert_eq!(alphabet.decode::<i8>(&text), i8::MIN, "{:?}", text);
    }
}
