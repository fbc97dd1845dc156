//! Shortest decimal digits that read back to the same float.
//!
//! This follows the digit-removal scheme of Ulf Adams' Ryu: the value and its
//! rounding interval are scaled by a power of ten, then decimal digits are
//! removed while the interval still contains a shorter number. Ryu gets the
//! scaled endpoints from 128-bit lookup tables; here they are computed with
//! exact big-integer arithmetic, which yields the same floors and the same
//! exactness flags.

use crate::bignum::Bignum;
use crate::num::Float;

/// Shortest round-trip decimal form of a finite float's magnitude.
///
/// The value is `digits × 10^exponent`. `digits` has no trailing zeros, except
/// that zero is represented as `digits == 0, exponent == 0`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Shortest {
    pub digits: u64,
    pub exponent: i32,
}

impl Shortest {
    /// Number of decimal digits in `digits`.
    pub fn len(&self) -> usize {
        let mut len = 1;
        let mut n = self.digits / 10;
        while n != 0 {
            len += 1;
            n /= 10;
        }
        len
    }

    /// Exponent of the leading digit in scientific notation, `d.ddd × 10^sci`.
    pub fn scientific_exponent(&self) -> i32 {
        self.exponent + self.len() as i32 - 1
    }
}

/// Computes the shortest decimal digits that identify `x`, ignoring its sign.
///
/// Among all digit strings of minimal length that parse back to `x` under
/// round-to-nearest-even, the one closest to `x` is chosen, ties going to an
/// even last digit. Returns `None` for NaN and infinities.
///
/// ```
/// use numeral::{shortest, Shortest};
///
/// assert_eq!(shortest(0.3f64), Some(Shortest { digits: 3, exponent: -1 }));
/// assert_eq!(shortest(-1.0e21f64), Some(Shortest { digits: 1, exponent: 21 }));
/// assert_eq!(shortest(16777216.0f32), Some(Shortest { digits: 16777216, exponent: 0 }));
/// assert_eq!(shortest(f64::NAN), None);
/// ```
pub fn shortest<F: Float>(x: F) -> Option<Shortest> {
    if x.is_nan() || x.is_infinite() {
        return None;
    }
    Some(shortest_finite(
        x.mantissa_field(),
        x.biased_exponent(),
        F::MANTISSA_SIZE,
        F::EXPONENT_BIAS,
    ))
}

/// `floor(log10(2^e))`, exact for `e <= 1650`.
#[inline]
fn log10_pow2(e: u32) -> u32 {
    (e * 78913) >> 18
}

/// `floor(log10(5^e))`, exact for `e <= 2620`.
#[inline]
fn log10_pow5(e: u32) -> u32 {
    (e * 732923) >> 20
}

fn shortest_finite(
    ieee_mantissa: u64,
    ieee_exponent: u32,
    mantissa_bits: u32,
    bias: i32,
) -> Shortest {
    if ieee_exponent == 0 && ieee_mantissa == 0 {
        return Shortest {
            digits: 0,
            exponent: 0,
        };
    }

    // Subtract 2 so that the interval bounds below are integers.
    let (m2, e2) = if ieee_exponent == 0 {
        (ieee_mantissa, 1 - bias - mantissa_bits as i32 - 2)
    } else {
        (
            ieee_mantissa | (1 << mantissa_bits),
            ieee_exponent as i32 - bias - mantissa_bits as i32 - 2,
        )
    };
    let accept_bounds = m2 & 1 == 0;

    // The interval is asymmetric just above a power of two.
    let mv = 4 * m2;
    let mm_shift = (ieee_mantissa != 0 || ieee_exponent <= 1) as u64;
    let mp = mv + 2;
    let mm = mv - 1 - mm_shift;

    let (e10, (mut vr, vr_exact), (mut vp, vp_exact), (mut vm, vm_exact)) = if e2 >= 0 {
        let e2 = e2 as u32;
        let q = log10_pow2(e2) - (e2 > 3) as u32;
        let pow5 = Bignum::pow5(q);
        let shift = (e2 - q) as usize;
        (
            q as i32,
            scale_up(mv, shift, &pow5),
            scale_up(mp, shift, &pow5),
            scale_up(mm, shift, &pow5),
        )
    } else {
        let neg_e2 = e2.unsigned_abs();
        let q = log10_pow5(neg_e2) - (neg_e2 > 1) as u32;
        let i = neg_e2 - q;
        (
            q as i32 + e2,
            scale_down(mv, i, q),
            scale_down(mp, i, q),
            scale_down(mm, i, q),
        )
    };

    let mut vr_is_trailing_zeros = vr_exact;
    let mut vm_is_trailing_zeros = accept_bounds && vm_exact;
    if !accept_bounds && vp_exact {
        // The upper bound itself is excluded.
        vp -= 1;
    }

    let mut removed = 0i32;
    let mut last_removed_digit = 0u8;
    loop {
        let vp_div10 = vp / 10;
        let vm_div10 = vm / 10;
        if vp_div10 <= vm_div10 {
            break;
        }
        vm_is_trailing_zeros &= vm % 10 == 0;
        vr_is_trailing_zeros &= last_removed_digit == 0;
        last_removed_digit = (vr % 10) as u8;
        vr /= 10;
        vp = vp_div10;
        vm = vm_div10;
        removed += 1;
    }
    if vm_is_trailing_zeros {
        while vm % 10 == 0 {
            vr_is_trailing_zeros &= last_removed_digit == 0;
            last_removed_digit = (vr % 10) as u8;
            vr /= 10;
            vm /= 10;
            removed += 1;
        }
    }
    if vr_is_trailing_zeros && last_removed_digit == 5 && vr % 2 == 0 {
        // Exactly halfway: round to even.
        last_removed_digit = 4;
    }

    let round_up =
        (vr == vm && (!accept_bounds || !vm_is_trailing_zeros)) || last_removed_digit >= 5;
    let mut digits = vr + round_up as u64;
    let mut exponent = e10 + removed;
    while digits != 0 && digits % 10 == 0 {
        digits /= 10;
        exponent += 1;
    }
    Shortest { digits, exponent }
}

/// `floor(x * 2^shift / pow5)` and whether the division was exact.
fn scale_up(x: u64, shift: usize, pow5: &Bignum) -> (u64, bool) {
    let mut n = Bignum::from_u64(x);
    n.ishl(shift);
    let quotient = n.div_rem_u64(pow5);
    (quotient, n.is_zero())
}

/// `floor(x * 5^i / 2^q)` and whether the division was exact.
fn scale_down(x: u64, i: u32, q: u32) -> (u64, bool) {
    let mut n = Bignum::from_u64(x);
    n.imul_pow5(i);
    let exact = n.low_bits_zero(q as usize);
    n.ishr(q as usize);
    (n.low_u64(), exact)
}
