//! Utilities for Rust numbers.

use core::fmt::Debug;
use core::str::FromStr;

mod private {
    pub trait Sealed {}
}

/// A fixed-width two's-complement integer that can be written with an
/// [`Alphabet`](crate::Alphabet).
///
/// This trait is sealed and implemented for `u8`, `u16`, `u32`, `u64`, `i8`,
/// `i16`, `i32` and `i64`.
pub trait Integer: private::Sealed + Copy + Default + PartialEq + Debug {
    /// Width of the type, in bits.
    const BITS: u32;

    /// Whether negative values exist.
    const SIGNED: bool;

    /// Zero-extended two's-complement bit pattern.
    fn widen(self) -> u64;

    /// Keeps the low `BITS` bits of `bits`.
    fn truncate(bits: u64) -> Self;

    /// Returns true if the value is below zero.
    #[inline]
    fn is_negative(self) -> bool {
        Self::SIGNED && (self.widen() >> (Self::BITS - 1)) & 1 == 1
    }

    /// Sign-extended value, for signed types.
    #[inline]
    fn sign_extend(self) -> i64 {
        let shift = 64 - Self::BITS;
        ((self.widen() << shift) as i64) >> shift
    }
}

macro_rules! integer_impl {
    ($($t:ty => $u:ty, $signed:expr;)*) => ($(
        impl private::Sealed for $t {}

        impl Integer for $t {
            const BITS: u32 = <$t>::BITS;
            const SIGNED: bool = $signed;

            #[inline]
            fn widen(self) -> u64 {
                self as $u as u64
            }

            #[inline]
            fn truncate(bits: u64) -> Self {
                bits as $u as $t
            }
        }
    )*)
}

integer_impl! {
    u8 => u8, false;
    u16 => u16, false;
    u32 => u32, false;
    u64 => u64, false;
    i8 => u8, true;
    i16 => u16, true;
    i32 => u32, true;
    i64 => u64, true;
}

/// An IEEE754 binary floating-point type.
///
/// This trait is sealed and implemented for `f32` and `f64`.
pub trait Float: private::Sealed + Copy + PartialEq + PartialOrd + Debug + FromStr {
    /// Unsigned integer of the same width, holding the raw bits.
    type Unsigned: Integer;
    /// Signed integer of the same width, holding the order-preserving bits.
    type Signed: Integer;

    /// Literal zero.
    const ZERO: Self;
    /// Quiet NaN.
    const NAN: Self;
    /// Positive infinity.
    const INFINITY: Self;
    /// Negative infinity.
    const NEG_INFINITY: Self;

    /// Size of the significand (mantissa) without hidden bit.
    const MANTISSA_SIZE: u32;
    /// Size of the biased exponent field.
    const EXPONENT_SIZE: u32;
    /// Bias of the exponent field.
    const EXPONENT_BIAS: i32;

    fn to_bits(self) -> Self::Unsigned;
    fn from_bits(u: Self::Unsigned) -> Self;
    fn is_nan(self) -> bool;
    fn is_infinite(self) -> bool;
    fn is_sign_negative(self) -> bool;

    /// Raw bits, zero-extended.
    #[inline]
    fn to_bits_wide(self) -> u64 {
        self.to_bits().widen()
    }

    /// Biased exponent field.
    #[inline]
    fn biased_exponent(self) -> u32 {
        ((self.to_bits_wide() >> Self::MANTISSA_SIZE) & ((1 << Self::EXPONENT_SIZE) - 1)) as u32
    }

    /// Stored mantissa field, excluding the hidden bit.
    #[inline]
    fn mantissa_field(self) -> u64 {
        self.to_bits_wide() & ((1 << Self::MANTISSA_SIZE) - 1)
    }
}

macro_rules! float_impl {
    ($($t:ident => $u:ty, $i:ty, $mantissa:expr, $exponent:expr;)*) => ($(
        impl private::Sealed for $t {}

        impl Float for $t {
            type Unsigned = $u;
            type Signed = $i;

            const ZERO: $t = 0.0;
            const NAN: $t = $t::NAN;
            const INFINITY: $t = $t::INFINITY;
            const NEG_INFINITY: $t = $t::NEG_INFINITY;
            const MANTISSA_SIZE: u32 = $mantissa;
            const EXPONENT_SIZE: u32 = $exponent;
            const EXPONENT_BIAS: i32 = (1 << ($exponent - 1)) - 1;

            #[inline]
            fn to_bits(self) -> $u {
                $t::to_bits(self)
            }

            #[inline]
            fn from_bits(u: $u) -> $t {
                $t::from_bits(u)
            }

            #[inline]
            fn is_nan(self) -> bool {
                $t::is_nan(self)
            }

            #[inline]
            fn is_infinite(self) -> bool {
                $t::is_infinite(self)
            }

            #[inline]
            fn is_sign_negative(self) -> bool {
                $t::is_sign_negative(self)
            }
        }
    )*)
}

float_impl! {
    f32 => u32, i32, 23, 8;
    f64 => u64, i64, 52, 11;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_integer<T: Integer>(x: T) {
        assert_eq!(T::truncate(x.widen()), x);
        assert_eq!(T::truncate(0), T::default());
    }

    #[test]
    fn integer_test() {
        check_integer(65u8);
        check_integer(65u16);
        check_integer(65u32);
        check_integer(65u64);
        check_integer(-65i8);
        check_integer(-65i16);
        check_integer(-65i32);
        check_integer(-65i64);
    }

    #[test]
    fn sign_test() {
        assert!((-1i8).is_negative());
        assert!(!255u8.is_negative());
        assert_eq!((-1i8).widen(), 0xFF);
        assert_eq!((-1i8).sign_extend(), -1);
        assert_eq!(i16::MIN.sign_extend(), i16::MIN as i64);
        assert_eq!(i64::MIN.sign_extend(), i64::MIN);
        assert_eq!(u32::MAX.widen(), 0xFFFF_FFFF);
    }

    #[test]
    fn float_test() {
        assert_eq!(f32::EXPONENT_BIAS, 127);
        assert_eq!(f64::EXPONENT_BIAS, 1023);
        assert_eq!(1.0f64.biased_exponent(), 1023);
        assert_eq!(1.5f64.mantissa_field(), 1 << 51);
        assert_eq!(f64::MIN_POSITIVE.biased_exponent(), 1);
        assert_eq!(1.0f32.biased_exponent(), 127);
        assert_eq!(Float::to_bits_wide(-0.0f32), 0x8000_0000);
    }
}
