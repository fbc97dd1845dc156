//! Human-readable float text: plain decimal or scientific layout of the
//! shortest round-trip digits.

use crate::num::Float;
use crate::shortest::shortest;
use alloc::string::String;

/// How the digits of a float are laid out.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Notation {
    /// Plain fixed-point, `0.00125` or `1250000.0`.
    Decimal,
    /// One digit before the point and an exponent, `1.25e-3`.
    Scientific,
    /// Decimal when the scientific exponent is in `-3..=7`, else scientific.
    #[default]
    General,
    /// Decimal when the scientific exponent is in `-10..=10`, else scientific.
    Friendly,
}

impl Notation {
    /// Whether a value whose leading digit has weight `10^sci` is written in
    /// plain decimal.
    fn is_decimal(self, sci: i32) -> bool {
        match self {
            Notation::Decimal => true,
            Notation::Scientific => false,
            Notation::General => (-3..=7).contains(&sci),
            Notation::Friendly => (-10..=10).contains(&sci),
        }
    }
}

/// Options for writing floats as text.
///
/// Without limits the text is the shortest that reads back to the same
/// float. A length limit or precision only affects plain decimal layout, and
/// shortens the text by cutting characters off the end, never by rounding.
///
/// ```
/// use numeral::{FloatFormat, Notation};
///
/// let format = FloatFormat::new(Notation::Decimal).length_limit(6);
/// assert_eq!(format.format(2.0f64 / 3.0), "0.6666");
/// assert_eq!(format.format(0.5f64), "0.5000");
/// assert_eq!(format.format(-1234567.0f64), "-1234567");
///
/// let format = FloatFormat::new(Notation::Scientific).uppercase_exponent(true);
/// assert_eq!(format.format(1.5e-7f64), "1.5E-7");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct FloatFormat {
    pub notation: Notation,
    /// Write `E` instead of `e`.
    pub uppercase_exponent: bool,
    /// Most characters of decimal text, sign included. The integer part is
    /// never cut, so the text can still be longer. Shorter text is padded
    /// with zeros after the point.
    pub length_limit: Option<usize>,
    /// Most digits after the point of decimal text. Zero drops the point.
    pub precision: Option<usize>,
}

impl Default for FloatFormat {
    fn default() -> Self {
        FloatFormat::new(Notation::General)
    }
}

impl FloatFormat {
    pub const fn new(notation: Notation) -> Self {
        FloatFormat {
            notation,
            uppercase_exponent: false,
            length_limit: None,
            precision: None,
        }
    }

    pub const fn uppercase_exponent(mut self, uppercase: bool) -> Self {
        self.uppercase_exponent = uppercase;
        self
    }

    pub const fn length_limit(mut self, limit: usize) -> Self {
        self.length_limit = Some(limit);
        self
    }

    pub const fn precision(mut self, digits: usize) -> Self {
        self.precision = Some(digits);
        self
    }

    /// Formats `x` into a new string.
    pub fn format<F: Float>(&self, x: F) -> String {
        let mut out = String::new();
        self.write(x, &mut out);
        out
    }

    /// Appends the text of `x` to `out`.
    ///
    /// NaN and the infinities are written as `NaN`, `Infinity` and
    /// `-Infinity` whatever the options.
    pub fn write<F: Float>(&self, x: F, out: &mut String) {
        if x.is_nan() {
            out.push_str("NaN");
            return;
        }
        if x.is_infinite() {
            out.push_str(if x.is_sign_negative() {
                "-Infinity"
            } else {
                "Infinity"
            });
            return;
        }
        let Some(shortest) = shortest(x) else {
            return;
        };

        let start = out.len();
        if x.is_sign_negative() {
            out.push('-');
        }
        let mut buffer = itoa::Buffer::new();
        let digits = buffer.format(shortest.digits);
        let sci = shortest.exponent + digits.len() as i32 - 1;
        if self.notation.is_decimal(sci) {
            write_decimal(digits, shortest.exponent, out);
            self.apply_limits(out, start);
        } else {
            write_scientific(digits, sci, self.uppercase_exponent, out);
        }
    }

    /// Cuts or pads the decimal text that begins at `out[start..]`.
    fn apply_limits(&self, out: &mut String, start: usize) {
        let Some(offset) = out[start..].find('.') else {
            return;
        };
        let dot = start + offset;

        if let Some(precision) = self.precision {
            let end = if precision == 0 {
                dot
            } else {
                dot + 1 + precision
            };
            if out.len() > end {
                out.truncate(end);
            }
        }

        let Some(limit) = self.length_limit else {
            return;
        };
        let len = out.len() - start;
        if len > limit {
            out.truncate((start + limit).max(dot));
            if out.ends_with('.') {
                out.pop();
            }
        } else if len < limit && out.len() > dot {
            let end = match self.precision {
                Some(precision) => (start + limit).min(dot + 1 + precision),
                None => start + limit,
            };
            while out.len() < end {
                out.push('0');
            }
        }
    }
}

/// `digits × 10^exponent` in fixed-point, always with a fractional digit.
fn write_decimal(digits: &str, exponent: i32, out: &mut String) {
    let len = digits.len() as i32;
    let point = len + exponent;
    if point <= 0 {
        out.push_str("0.");
        push_zeros(out, point.unsigned_abs() as usize);
        out.push_str(digits);
    } else if point >= len {
        out.push_str(digits);
        push_zeros(out, (point - len) as usize);
        out.push_str(".0");
    } else {
        let (int, frac) = digits.split_at(point as usize);
        out.push_str(int);
        out.push('.');
        out.push_str(frac);
    }
}

/// `d.ddd` followed by the exponent marker and `sci`.
fn write_scientific(digits: &str, sci: i32, uppercase: bool, out: &mut String) {
    let (first, rest) = digits.split_at(1);
    out.push_str(first);
    out.push('.');
    out.push_str(if rest.is_empty() { "0" } else { rest });
    out.push(if uppercase { 'E' } else { 'e' });
    if sci < 0 {
        out.push('-');
    }
    let mut buffer = itoa::Buffer::new();
    out.push_str(buffer.format(sci.unsigned_abs()));
}

fn push_zeros(out: &mut String, count: usize) {
    out.extend(core::iter::repeat('0').take(count));
}

/// Plain fixed-point text of `x`, shortest that reads back exactly.
///
/// ```
/// assert_eq!(numeral::decimal(1e-7f64), "0.0000001");
/// assert_eq!(numeral::decimal(1e8f64), "100000000.0");
/// ```
pub fn decimal<F: Float>(x: F) -> String {
    FloatFormat::new(Notation::Decimal).format(x)
}

/// Scientific text of `x`, shortest that reads back exactly.
///
/// ```
/// assert_eq!(numeral::scientific(1234.5f64), "1.2345e3");
/// assert_eq!(numeral::scientific(1e21f64), "1.0e21");
/// ```
pub fn scientific<F: Float>(x: F) -> String {
    FloatFormat::new(Notation::Scientific).format(x)
}

/// Decimal or scientific text of `x`, whichever suits the magnitude.
///
/// ```
/// assert_eq!(numeral::general(12345678.0f64), "12345678.0");
/// assert_eq!(numeral::general(123456789.0f64), "1.23456789e8");
/// assert_eq!(numeral::general(0.001f64), "0.001");
/// assert_eq!(numeral::general(0.0001f64), "1.0e-4");
/// ```
pub fn general<F: Float>(x: F) -> String {
    FloatFormat::new(Notation::General).format(x)
}

/// Like [`general`], but keeps plain decimal for a wider range of
/// magnitudes.
///
/// ```
/// assert_eq!(numeral::friendly(1e10f64), "10000000000.0");
/// assert_eq!(numeral::friendly(1e11f64), "1.0e11");
/// ```
pub fn friendly<F: Float>(x: F) -> String {
    FloatFormat::new(Notation::Friendly).format(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decimal_text(digits: &str, exponent: i32) -> String {
        let mut out = String::new();
        write_decimal(digits, exponent, &mut out);
        out
    }

    #[test]
    fn decimal_layout() {
        assert_eq!(decimal_text("1", 0), "1.0");
        assert_eq!(decimal_text("1", -1), "0.1");
        assert_eq!(decimal_text("1", -3), "0.001");
        assert_eq!(decimal_text("15", 2), "1500.0");
        assert_eq!(decimal_text("12345", -2), "123.45");
        assert_eq!(decimal_text("0", 0), "0.0");
    }

    #[test]
    fn scientific_layout() {
        let mut out = String::new();
        write_scientific("12", -5, true, &mut out);
        assert_eq!(out, "1.2E-5");
        out.clear();
        write_scientific("7", 300, false, &mut out);
        assert_eq!(out, "7.0e300");
    }

    #[test]
    fn thresholds() {
        assert!(Notation::General.is_decimal(-3));
        assert!(Notation::General.is_decimal(7));
        assert!(!Notation::General.is_decimal(-4));
        assert!(!Notation::General.is_decimal(8));
        assert!(Notation::Friendly.is_decimal(-10));
        assert!(Notation::Friendly.is_decimal(10));
        assert!(!Notation::Friendly.is_decimal(11));
    }

    #[test]
    fn limits_append_after_existing_text() {
        let format = FloatFormat::new(Notation::Decimal).length_limit(4);
        let mut out = String::from("x = ");
        format.write(0.125f64, &mut out);
        assert_eq!(out, "x = 0.12");
    }
}
