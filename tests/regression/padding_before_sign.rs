// Aligned text puts the padding before the sign, and reading skips the
// padding first.

use numeral::{Buffer, BASE16, BASE64};

#[test]
fn padding_before_sign() {
    let mut buffer = Buffer::new();
    assert_eq!(BASE16.encode_signed_aligned(&mut buffer, -1i8), " -1");
    assert_eq!(BASE16.decode::<i8>(" -1"), -1);
    assert_eq!(BASE64.decode::<i16>("==-B"), -1);
    // padding after the sign ends the number
    assert_eq!(BASE16.decode::<i8>("- 1"), 0);
}
