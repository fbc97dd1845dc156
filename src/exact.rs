//! Bit-exact float text.
//!
//! Floats are written as the integer holding their bits, so the text always
//! reads back to the identical bit pattern, NaN payloads and signed zero
//! included. Two integer views of the bits are offered: the raw pattern, and
//! an ordered pattern whose signed-integer comparison follows the IEEE754
//! total order.

use crate::alphabet::Alphabet;
use crate::buffer::Buffer;
use crate::num::{Float, Integer};

/// Maps `x` to a signed integer that sorts like `x`.
///
/// Non-negative values keep their bits. Negative values have every bit but
/// the sign flipped, which reverses the order of their magnitudes. The result
/// orders `-NaN < -inf < ... < -0.0 < +0.0 < ... < +inf < +NaN`.
///
/// ```
/// use numeral::to_ordered_bits;
///
/// assert!(to_ordered_bits(-1.5f64) < to_ordered_bits(-0.0f64));
/// assert!(to_ordered_bits(-0.0f64) < to_ordered_bits(0.0f64));
/// assert_eq!(to_ordered_bits(1.0f32), 1.0f32.to_bits() as i32);
/// ```
pub fn to_ordered_bits<F: Float>(x: F) -> F::Signed {
    <F::Signed as Integer>::truncate(flip_negative::<F>(x.to_bits_wide()))
}

/// Inverse of [`to_ordered_bits`].
pub fn from_ordered_bits<F: Float>(bits: F::Signed) -> F {
    F::from_bits(<F::Unsigned as Integer>::truncate(flip_negative::<F>(bits.widen())))
}

/// The raw IEEE754 bit pattern of `x`.
#[inline]
pub fn to_raw_bits<F: Float>(x: F) -> F::Unsigned {
    x.to_bits()
}

/// Inverse of [`to_raw_bits`].
#[inline]
pub fn from_raw_bits<F: Float>(bits: F::Unsigned) -> F {
    F::from_bits(bits)
}

// Applying this twice gives back the input, and the sign bit is left alone so
// the same test decides whether to flip in both directions.
#[inline]
fn flip_negative<F: Float>(bits: u64) -> u64 {
    let sign = 1u64 << (<F::Unsigned as Integer>::BITS - 1);
    if bits & sign != 0 {
        bits ^ (sign - 1)
    } else {
        bits
    }
}

impl Alphabet {
    /// Writes `x` as the minimal signed text of its ordered bits.
    ///
    /// Negative values get the negative sign, and with an alphabet whose
    /// digits are in ascending ASCII order, the texts of values of one sign
    /// compare like the values.
    ///
    /// ```
    /// let mut buffer = numeral::Buffer::new();
    /// let text = numeral::BASE36.encode_exact_signed(&mut buffer, 0.1f64).to_owned();
    /// assert_eq!(numeral::BASE36.decode_exact_signed::<f64>(&text), 0.1);
    /// ```
    pub fn encode_exact_signed<'a, F: Float>(&self, buf: &'a mut Buffer, x: F) -> &'a str {
        self.encode_signed(buf, to_ordered_bits(x))
    }

    /// Writes the positive sign as a marker followed by the fixed-width
    /// unsigned text of the raw bits of `x`.
    ///
    /// ```
    /// let mut buffer = numeral::Buffer::new();
    /// assert_eq!(numeral::BASE16.encode_exact_unsigned(&mut buffer, 1.0f32), "+3F800000");
    /// ```
    pub fn encode_exact_unsigned<'a, F: Float>(&self, buf: &'a mut Buffer, x: F) -> &'a str {
        let mut cursor = buf.cursor();
        self.write_unsigned(&mut cursor, to_raw_bits(x));
        cursor.push_front(self.positive_sign_byte());
        cursor.finish()
    }

    /// Reads text written by [`encode_exact_signed`](Self::encode_exact_signed).
    pub fn decode_exact_signed<F: Float>(&self, text: &str) -> F {
        from_ordered_bits(self.decode::<F::Signed>(text))
    }

    /// Reads text written by
    /// [`encode_exact_unsigned`](Self::encode_exact_unsigned). The marker is
    /// optional.
    pub fn decode_exact_unsigned<F: Float>(&self, text: &str) -> F {
        from_raw_bits(self.decode::<F::Unsigned>(text))
    }

    /// Reads either exact form, telling them apart by the marker.
    ///
    /// ```
    /// let mut buffer = numeral::Buffer::new();
    /// let raw = numeral::BASE64.encode_exact_unsigned(&mut buffer, -2.5f64).to_owned();
    /// let ordered = numeral::BASE64.encode_exact_signed(&mut buffer, -2.5f64).to_owned();
    /// assert_eq!(numeral::BASE64.decode_exact::<f64>(&raw), -2.5);
    /// assert_eq!(numeral::BASE64.decode_exact::<f64>(&ordered), -2.5);
    /// ```
    pub fn decode_exact<F: Float>(&self, text: &str) -> F {
        let first = text.bytes().find(|&byte| byte != self.padding_byte());
        if first == Some(self.positive_sign_byte()) {
            self.decode_exact_unsigned(text)
        } else {
            self.decode_exact_signed(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_bits_follow_total_order() {
        let ascending = [
            f64::NEG_INFINITY,
            f64::MIN,
            -1.0,
            -f64::MIN_POSITIVE,
            -5e-324,
            -0.0,
            0.0,
            5e-324,
            f64::MIN_POSITIVE,
            1.0,
            f64::MAX,
            f64::INFINITY,
        ];
        for pair in ascending.windows(2) {
            assert!(
                to_ordered_bits(pair[0]) < to_ordered_bits(pair[1]),
                "{:?} !< {:?}",
                pair[0],
                pair[1],
            );
        }
    }

    #[test]
    fn ordered_bits_are_involutive() {
        for bits in [0u32, 1, 0x7F80_0000, 0x8000_0000, 0xFFC0_0001, u32::MAX] {
            let x = f32::from_bits(bits);
            assert_eq!(from_ordered_bits::<f32>(to_ordered_bits(x)).to_bits(), bits);
        }
    }

    #[test]
    fn ordered_zero() {
        assert_eq!(to_ordered_bits(0.0f64), 0);
        assert_eq!(to_ordered_bits(-0.0f64), -1);
    }
}
