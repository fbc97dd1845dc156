//! Forgiving text to float conversion.
//!
//! Reads the longest prefix of the input that forms a number and converts
//! that, ignoring whatever follows. Nothing here fails: text that does not
//! start with a number reads as zero.

use crate::num::Float;
use core::str;

/// Outcome of scanning the start of the input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Scan {
    Nan { len: usize },
    Infinity { negative: bool, len: usize },
    /// `len` bytes form a number; zero if there is none.
    Number { len: usize },
}

impl Scan {
    fn len(self) -> usize {
        match self {
            Scan::Nan { len } | Scan::Infinity { len, .. } | Scan::Number { len } => len,
        }
    }
}

fn scan(bytes: &[u8]) -> Scan {
    let mut index = 0;
    let mut negative = false;
    match bytes.first() {
        Some(b'-') => {
            negative = true;
            index = 1;
        }
        Some(b'+') => index = 1,
        _ => {}
    }

    // Only the first letter is looked at to tell these apart.
    match bytes.get(index) {
        Some(b'N' | b'n') => {
            return Scan::Nan {
                len: index + token_len(&bytes[index..], &[b"nan"]),
            };
        }
        Some(b'I' | b'i') => {
            return Scan::Infinity {
                negative,
                len: index + token_len(&bytes[index..], &[b"infinity", b"inf"]),
            };
        }
        _ => {}
    }

    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_exp = false;
    let mut mantissa_digit = false;
    let mut after_marker = false;
    while let Some(&byte) = bytes.get(index) {
        match byte {
            b'0'..=b'9' => {
                if !seen_exp {
                    mantissa_digit = true;
                }
                after_marker = false;
                index += 1;
                end = index;
            }
            b'.' if !seen_dot && !seen_exp => {
                seen_dot = true;
                index += 1;
            }
            b'e' | b'E' if !seen_exp && mantissa_digit => {
                seen_exp = true;
                after_marker = true;
                index += 1;
            }
            b'+' | b'-' if after_marker => {
                after_marker = false;
                index += 1;
            }
            _ => break,
        }
    }
    Scan::Number { len: end }
}

/// Length of the longest of `tokens` that `bytes` starts with, ignoring ASCII
/// case, or 1 if none matches.
fn token_len(bytes: &[u8], tokens: &[&[u8]]) -> usize {
    for token in tokens {
        if let Some(head) = bytes.get(..token.len()) {
            if head.eq_ignore_ascii_case(token) {
                return token.len();
            }
        }
    }
    1
}

/// Parses the longest numeric prefix of `text`.
///
/// The accepted grammar is an optional sign, digits with at most one `.`, and
/// an optional exponent: `e` or `E`, an optional sign, digits. A text whose
/// first character after the sign is `N` or `n` is NaN, and one whose first
/// character after the sign is `I` or `i` is an infinity; the rest of the
/// word is not checked.
///
/// ```
/// assert_eq!(numeral::parse::<f64>("12.5xyz"), 12.5);
/// assert_eq!(numeral::parse::<f64>("12e"), 12.0);
/// assert_eq!(numeral::parse::<f64>("-Infinity"), f64::NEG_INFINITY);
/// assert!(numeral::parse::<f32>("NaN-garbage").is_nan());
/// assert_eq!(numeral::parse::<f64>("garbage"), 0.0);
/// ```
pub fn parse<F: Float>(text: &str) -> F {
    parse_bytes(text.as_bytes())
}

pub fn parse_f64(text: &str) -> f64 {
    parse(text)
}

pub fn parse_f32(text: &str) -> f32 {
    parse(text)
}

/// Parses the bytes `start..end` of `text`. A range that is reversed or out
/// of bounds reads as zero.
pub fn parse_range<F: Float>(text: &str, start: usize, end: usize) -> F {
    match text.as_bytes().get(start..end) {
        Some(bytes) => parse_bytes(bytes),
        None => F::ZERO,
    }
}

/// Byte flavor of [`parse`].
pub fn parse_bytes<F: Float>(bytes: &[u8]) -> F {
    match scan(bytes) {
        Scan::Nan { .. } => F::NAN,
        Scan::Infinity { negative: true, .. } => F::NEG_INFINITY,
        Scan::Infinity { negative: false, .. } => F::INFINITY,
        Scan::Number { len: 0 } => F::ZERO,
        Scan::Number { len } => str::from_utf8(&bytes[..len])
            .ok()
            .and_then(|number| number.parse().ok())
            .unwrap_or(F::ZERO),
    }
}

/// Number of leading bytes of `text` that [`parse`] reads.
///
/// ```
/// assert_eq!(numeral::valid_prefix_len("1.5e+"), 3);
/// assert_eq!(numeral::valid_prefix_len("-inf!"), 4);
/// assert_eq!(numeral::valid_prefix_len("abc"), 0);
/// ```
pub fn valid_prefix_len(text: &str) -> usize {
    scan(text.as_bytes()).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_stops_at_structural_errors() {
        assert_eq!(scan(b"1.2.3"), Scan::Number { len: 3 });
        assert_eq!(scan(b"1e5e6"), Scan::Number { len: 3 });
        assert_eq!(scan(b"1-2"), Scan::Number { len: 1 });
        assert_eq!(scan(b"1e+-2"), Scan::Number { len: 1 });
        assert_eq!(scan(b".e5"), Scan::Number { len: 0 });
        assert_eq!(scan(b"-"), Scan::Number { len: 0 });
        assert_eq!(scan(b".5"), Scan::Number { len: 2 });
        assert_eq!(scan(b"5."), Scan::Number { len: 1 });
    }

    #[test]
    fn scan_special_values() {
        assert_eq!(scan(b"nan"), Scan::Nan { len: 3 });
        assert_eq!(scan(b"Nope"), Scan::Nan { len: 1 });
        assert_eq!(
            scan(b"+INFINITY"),
            Scan::Infinity {
                negative: false,
                len: 9,
            },
        );
        assert_eq!(
            scan(b"-info"),
            Scan::Infinity {
                negative: true,
                len: 4,
            },
        );
    }
}
