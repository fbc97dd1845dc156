//! Fixed-width integers to and from alphabet text.
//!
//! Two text forms exist. The *unsigned* form always has exactly
//! [`digit_length`](Alphabet::digit_length) digits and writes the raw
//! two's-complement bit pattern. The *signed* form has no leading zeros and a
//! leading negative sign for values below zero. A single [`decode`] reads
//! both.
//!
//! [`decode`]: Alphabet::decode

use crate::alphabet::Alphabet;
use crate::buffer::{Buffer, Cursor};
use crate::num::Integer;

impl Alphabet {
    /// Writes the two's-complement bit pattern of `value` as exactly
    /// `digit_length(T::BITS)` digits, most significant first.
    ///
    /// With an alphabet whose digits are in ascending ASCII order, the text of
    /// unsigned values sorts the same way as the values do.
    ///
    /// ```
    /// let mut buffer = numeral::Buffer::new();
    /// assert_eq!(numeral::BASE10.encode_unsigned(&mut buffer, 42u16), "00042");
    /// assert_eq!(numeral::BASE16.encode_unsigned(&mut buffer, -1i32), "FFFFFFFF");
    /// ```
    pub fn encode_unsigned<'a, T: Integer>(&self, buf: &'a mut Buffer, value: T) -> &'a str {
        let mut cursor = buf.cursor();
        self.write_unsigned(&mut cursor, value);
        cursor.finish()
    }

    /// Writes `value` with as few digits as possible and a leading negative
    /// sign when it is below zero.
    ///
    /// ```
    /// let mut buffer = numeral::Buffer::new();
    /// assert_eq!(numeral::BASE10.encode_signed(&mut buffer, i64::MIN), "-9223372036854775808");
    /// assert_eq!(numeral::BASE36.encode_signed(&mut buffer, 0u8), "0");
    /// ```
    pub fn encode_signed<'a, T: Integer>(&self, buf: &'a mut Buffer, value: T) -> &'a str {
        let mut cursor = buf.cursor();
        self.write_signed(&mut cursor, value);
        cursor.finish()
    }

    /// Same as [`encode_signed`](Self::encode_signed), left-padded with the
    /// padding character to `digit_length(T::BITS) + 1` characters so that
    /// every value of a type takes the same width.
    ///
    /// ```
    /// let mut buffer = numeral::Buffer::new();
    /// assert_eq!(numeral::BASE10.encode_signed_aligned(&mut buffer, -7i8), "  -7");
    /// ```
    pub fn encode_signed_aligned<'a, T: Integer>(&self, buf: &'a mut Buffer, value: T) -> &'a str {
        let width = self.digit_length(T::BITS) + 1;
        let mut cursor = buf.cursor();
        self.write_signed(&mut cursor, value);
        while cursor.len() < width {
            cursor.push_front(self.padding_byte());
        }
        cursor.finish()
    }

    pub(crate) fn write_unsigned<T: Integer>(&self, cursor: &mut Cursor, value: T) {
        let radix = self.radix() as u64;
        let mut n = value.widen();
        for _ in 0..self.digit_length(T::BITS) {
            cursor.push_front(self.digit(n % radix));
            n /= radix;
        }
    }

    fn write_signed<T: Integer>(&self, cursor: &mut Cursor, value: T) {
        if value.is_negative() {
            // Stay on the negative side so that the minimum value never has
            // to be negated.
            let radix = self.radix() as i64;
            let mut n = value.sign_extend();
            loop {
                cursor.push_front(self.digit(-(n % radix) as u64));
                n /= radix;
                if n == 0 {
                    break;
                }
            }
            cursor.push_front(self.negative_sign_byte());
        } else {
            let radix = self.radix() as u64;
            let mut n = value.widen();
            loop {
                cursor.push_front(self.digit(n % radix));
                n /= radix;
                if n == 0 {
                    break;
                }
            }
        }
    }

    /// Reads an integer written by [`encode_unsigned`](Self::encode_unsigned),
    /// [`encode_signed`](Self::encode_signed) or
    /// [`encode_signed_aligned`](Self::encode_signed_aligned).
    ///
    /// Leading padding is skipped, then an optional sign is read, then digits
    /// up to the first non-digit or until `digit_length(T::BITS)` digits have
    /// been consumed. The digits are taken as a `T::BITS`-wide two's-complement
    /// pattern, so the fixed-width text of a negative number decodes to that
    /// negative number.
    ///
    /// Never fails: text with no digits decodes to zero.
    ///
    /// ```
    /// assert_eq!(numeral::BASE16.decode::<i8>("FF"), -1);
    /// assert_eq!(numeral::BASE16.decode::<i8>("-1"), -1);
    /// assert_eq!(numeral::BASE16.decode::<u8>("ff"), 255);
    /// assert_eq!(numeral::BASE10.decode::<i32>("12abc"), 12);
    /// assert_eq!(numeral::BASE10.decode::<i32>("xyz"), 0);
    /// ```
    pub fn decode<T: Integer>(&self, text: &str) -> T {
        self.decode_bytes(text.as_bytes())
    }

    /// Decodes the bytes `start..end` of `text`. A range that is reversed or
    /// out of bounds decodes to zero.
    pub fn decode_range<T: Integer>(&self, text: &str, start: usize, end: usize) -> T {
        match text.as_bytes().get(start..end) {
            Some(bytes) => self.decode_bytes(bytes),
            None => T::default(),
        }
    }

    /// Byte flavor of [`decode`](Self::decode). Bytes outside of ASCII are
    /// never digits.
    pub fn decode_bytes<T: Integer>(&self, bytes: &[u8]) -> T {
        let mut rest = bytes;
        while let [first, tail @ ..] = rest {
            if *first != self.padding_byte() {
                break;
            }
            rest = tail;
        }

        let mut negative = false;
        if let [first, tail @ ..] = rest {
            if *first == self.negative_sign_byte() {
                negative = true;
                rest = tail;
            } else if *first == self.positive_sign_byte() {
                rest = tail;
            }
        }

        let max_digits = self.digit_length(T::BITS);
        let radix = self.radix() as u64;
        let mut value = 0u64;
        for (count, &byte) in rest.iter().enumerate() {
            let Some(digit) = self.digit_value(byte) else {
                break;
            };
            if count == max_digits {
                tracing::trace!(max_digits, "integer text longer than its width, rest ignored");
                break;
            }
            value = value.wrapping_mul(radix).wrapping_add(digit as u64);
        }

        if negative {
            value = value.wrapping_neg();
        }
        // Reinterpret as two's complement of the target width: fixed-width
        // text of a negative value has its top bit set and lands below zero.
        T::truncate(value)
    }
}
