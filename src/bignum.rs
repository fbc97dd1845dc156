//! Fixed-capacity arbitrary-precision unsigned integers.
//!
//! Just enough arithmetic to scale a float's interval endpoints by a power
//! of ten exactly: multiply by powers of five, shift, compare, subtract, and a
//! division whose quotient is known to fit in 64 bits.
//!
//! Limbs are stored in little-endian order, so `limbs[0]` is the least
//! significant one. Limbs at or above `len` are unspecified.

use core::cmp::Ordering;

// ALIASES
// -------

type Limb = u32;
type Wide = u64;

const LIMB_BITS: usize = 32;

// The largest value ever held is a 55-bit interval endpoint times 5^325, or
// about 810 bits, plus headroom for the shifted divisor.
const LIMBS: usize = 40;

/// 5^13, the largest power of five that fits in a limb.
const POW5_LIMB: Limb = 1_220_703_125;
const POW5_LIMB_STEP: u32 = 13;

const SMALL_POW5: [Limb; 14] = [
    1,
    5,
    25,
    125,
    625,
    3125,
    15625,
    78125,
    390625,
    1953125,
    9765625,
    48828125,
    244140625,
    1220703125,
];

/// Storage for a big integer type.
#[derive(Clone, Debug)]
pub(crate) struct Bignum {
    limbs: [Limb; LIMBS],
    len: usize,
}

impl Bignum {
    pub(crate) fn from_u64(x: u64) -> Self {
        let mut bignum = Bignum {
            limbs: [0; LIMBS],
            len: 2,
        };
        bignum.limbs[0] = x as Limb;
        bignum.limbs[1] = (x >> LIMB_BITS) as Limb;
        bignum.normalize();
        bignum
    }

    /// 5^n.
    pub(crate) fn pow5(n: u32) -> Self {
        let mut bignum = Bignum::from_u64(1);
        bignum.imul_pow5(n);
        bignum
    }

    #[inline]
    pub(crate) fn is_zero(&self) -> bool {
        self.len == 0
    }

    /// Low 64 bits.
    pub(crate) fn low_u64(&self) -> u64 {
        match self.len {
            0 => 0,
            1 => self.limbs[0] as u64,
            _ => self.limbs[0] as u64 | (self.limbs[1] as u64) << LIMB_BITS,
        }
    }

    // NORMALIZE

    /// Drop most significant limbs that are zero.
    #[inline]
    fn normalize(&mut self) {
        while self.len > 0 && self.limbs[self.len - 1] == 0 {
            self.len -= 1;
        }
    }

    // MULTIPLICATION

    /// Multiply by a single limb in place.
    pub(crate) fn imul_small(&mut self, y: Limb) {
        let mut carry: Wide = 0;
        for limb in &mut self.limbs[..self.len] {
            let wide = *limb as Wide * y as Wide + carry;
            *limb = wide as Limb;
            carry = wide >> LIMB_BITS;
        }
        if carry != 0 {
            debug_assert!(self.len < LIMBS);
            self.limbs[self.len] = carry as Limb;
            self.len += 1;
        }
        self.normalize();
    }

    /// Multiply by 5^n in place.
    pub(crate) fn imul_pow5(&mut self, mut n: u32) {
        while n >= POW5_LIMB_STEP {
            self.imul_small(POW5_LIMB);
            n -= POW5_LIMB_STEP;
        }
        self.imul_small(SMALL_POW5[n as usize]);
    }

    // SHL

    /// Shift left by `n` bits in place.
    pub(crate) fn ishl(&mut self, n: usize) {
        if self.is_zero() {
            return;
        }
        let limbs = n / LIMB_BITS;
        let bits = n % LIMB_BITS;
        if bits != 0 {
            let mut carry: Limb = 0;
            for limb in &mut self.limbs[..self.len] {
                let next = *limb >> (LIMB_BITS - bits);
                *limb = (*limb << bits) | carry;
                carry = next;
            }
            if carry != 0 {
                debug_assert!(self.len < LIMBS);
                self.limbs[self.len] = carry;
                self.len += 1;
            }
        }
        if limbs != 0 {
            debug_assert!(self.len + limbs <= LIMBS);
            self.limbs.copy_within(..self.len, limbs);
            self.limbs[..limbs].fill(0);
            self.len += limbs;
        }
    }

    // SHR

    /// Shift right by `n` bits in place, discarding the bits shifted out.
    pub(crate) fn ishr(&mut self, n: usize) {
        let limbs = n / LIMB_BITS;
        let bits = n % LIMB_BITS;
        if limbs >= self.len {
            self.len = 0;
            return;
        }
        self.limbs.copy_within(limbs..self.len, 0);
        self.len -= limbs;
        if bits != 0 {
            for i in 0..self.len {
                let hi = if i + 1 < self.len {
                    self.limbs[i + 1] << (LIMB_BITS - bits)
                } else {
                    0
                };
                self.limbs[i] = (self.limbs[i] >> bits) | hi;
            }
        }
        self.normalize();
    }

    /// Whether the `n` least significant bits are all zero, i.e. whether the
    /// value is a multiple of 2^n.
    pub(crate) fn low_bits_zero(&self, n: usize) -> bool {
        let limbs = n / LIMB_BITS;
        let bits = n % LIMB_BITS;
        if self.limbs[..limbs.min(self.len)].iter().any(|&limb| limb != 0) {
            return false;
        }
        if bits != 0 && limbs < self.len {
            self.limbs[limbs] & ((1 << bits) - 1) == 0
        } else {
            true
        }
    }

    // SUBTRACTION

    /// Subtract `y` in place. Requires `self >= y`.
    pub(crate) fn isub(&mut self, y: &Bignum) {
        debug_assert!(*self >= *y);
        let mut borrow = false;
        for i in 0..self.len {
            let rhs = if i < y.len { y.limbs[i] } else { 0 };
            let (diff, b1) = self.limbs[i].overflowing_sub(rhs);
            let (diff, b2) = diff.overflowing_sub(borrow as Limb);
            self.limbs[i] = diff;
            borrow = b1 || b2;
        }
        self.normalize();
    }

    // DIVISION

    /// Divide by `d`, returning the quotient and leaving the remainder in
    /// `self`. The quotient must be below 2^64.
    pub(crate) fn div_rem_u64(&mut self, d: &Bignum) -> u64 {
        let mut shifted = d.clone();
        shifted.ishl(63);
        let mut quotient = 0u64;
        for bit in (0..64).rev() {
            if *self >= shifted {
                self.isub(&shifted);
                quotient |= 1 << bit;
            }
            shifted.ishr(1);
        }
        debug_assert!(*self < *d);
        quotient
    }
}

impl PartialEq for Bignum {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Bignum {}

impl PartialOrd for Bignum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Bignum {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.len.cmp(&other.len) {
            Ordering::Equal => {}
            ordering => return ordering,
        }
        let lhs = self.limbs[..self.len].iter().rev();
        let rhs = other.limbs[..other.len].iter().rev();
        lhs.cmp(rhs)
    }
}
