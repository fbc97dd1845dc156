//! Digit alphabets: the radix, its digit characters and the reverse map.

use crate::error::{Error, ErrorCode, Result};
use alloc::string::String;
use core::fmt::{self, Debug};
use core::str;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro128StarStar;

/// Largest supported radix: one digit per printable ASCII character.
pub const MAX_RADIX: usize = 94;

const NOT_A_DIGIT: u8 = 0xFF;

/// Characters a scrambled alphabet draws its digits, signs and padding from.
const POOL: [u8; MAX_RADIX] = ascii_graphic();

const fn ascii_graphic() -> [u8; MAX_RADIX] {
    let mut pool = [0u8; MAX_RADIX];
    let mut i = 0;
    while i < MAX_RADIX {
        pool[i] = b'!' + i as u8;
        i += 1;
    }
    pool
}

/// Smallest `len` with `radix^len >= 2^bits`, i.e. `ceil(bits * ln 2 / ln radix)`
/// without the floating-point error that formula has for power-of-two radices.
const fn digit_length_exact(radix: u128, bits: u32) -> u8 {
    let limit = 1u128 << bits;
    let mut power = 1u128;
    let mut len = 0;
    while power < limit {
        power *= radix;
        len += 1;
    }
    len
}

/// An immutable positional numeral system.
///
/// An alphabet holds `radix` distinct digit characters, most significant
/// value last, plus a positive sign, a negative sign and a padding character
/// that are never digits. All characters are ASCII.
///
/// Alphabets are cheap to clone and safe to share between threads; the
/// scratch space used while encoding is a caller-owned [`Buffer`].
///
/// [`Buffer`]: crate::Buffer
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "AlphabetConfig", into = "AlphabetConfig")
)]
// Deserialized alphabets are validated by `Alphabet::new`.
#[cfg_attr(feature = "serde", allow(clippy::unsafe_derive_deserialize))]
pub struct Alphabet {
    digits: [u8; MAX_RADIX],
    radix: u8,
    values: [u8; 128],
    padding: u8,
    positive_sign: u8,
    negative_sign: u8,
    case_insensitive: bool,
    /// Unsigned digit counts for 8, 16, 32 and 64 bit integers.
    lengths: [u8; 4],
}

impl Alphabet {
    /// Defines a new alphabet.
    ///
    /// `digits` lists the digit characters in order of value, starting with
    /// zero. When `case_insensitive` is set, ASCII letters are matched in
    /// either case while decoding and two digits may not differ only by case.
    ///
    /// # Errors
    ///
    /// Fails when fewer than 2 or more than [`MAX_RADIX`] digits are given,
    /// when any character is not printable ASCII (the space is allowed for
    /// the signs and padding), when two digits collide, or when a sign or
    /// padding character is a digit or equal to another of the three.
    ///
    /// ```
    /// let base5 = numeral::Alphabet::new("01234", false, ' ', '+', '-').unwrap();
    /// assert_eq!(base5.radix(), 5);
    ///
    /// let bad = numeral::Alphabet::new("0123-", false, ' ', '+', '-');
    /// assert!(bad.unwrap_err().is_collision());
    /// ```
    pub fn new(
        digits: &str,
        case_insensitive: bool,
        padding: char,
        positive_sign: char,
        negative_sign: char,
    ) -> Result<Alphabet> {
        let count = digits.chars().count();
        if count < 2 {
            return Err(reject(ErrorCode::RadixTooSmall(count), None));
        }
        if count > MAX_RADIX {
            return Err(reject(ErrorCode::RadixTooLarge(count), None));
        }

        let mut seen = [false; 128];
        for (index, c) in digits.chars().enumerate() {
            if !c.is_ascii_graphic() {
                return Err(reject(ErrorCode::InvalidCharacter(c), Some(index)));
            }
            let folded = fold(c as u8, case_insensitive);
            if seen[folded] {
                return Err(reject(ErrorCode::DuplicateDigit(c), Some(index)));
            }
            seen[folded] = true;
        }

        for c in [positive_sign, negative_sign, padding] {
            if !(c.is_ascii_graphic() || c == ' ') {
                return Err(reject(ErrorCode::InvalidCharacter(c), None));
            }
            if seen[fold(c as u8, case_insensitive)] {
                return Err(reject(ErrorCode::SignOrPaddingIsDigit(c), None));
            }
        }
        if positive_sign == negative_sign || positive_sign == padding {
            return Err(reject(ErrorCode::SignOrPaddingCollision(positive_sign), None));
        }
        if negative_sign == padding {
            return Err(reject(ErrorCode::SignOrPaddingCollision(negative_sign), None));
        }

        Ok(Alphabet::build(
            digits.as_bytes(),
            case_insensitive,
            padding as u8,
            positive_sign as u8,
            negative_sign as u8,
        ))
    }

    /// Assembles an alphabet whose invariants are already known to hold.
    const fn build(
        digits: &[u8],
        case_insensitive: bool,
        padding: u8,
        positive_sign: u8,
        negative_sign: u8,
    ) -> Alphabet {
        let mut table = [0u8; MAX_RADIX];
        let mut values = [NOT_A_DIGIT; 128];
        let mut i = 0;
        while i < digits.len() {
            let c = digits[i];
            table[i] = c;
            if case_insensitive {
                values[c.to_ascii_lowercase() as usize] = i as u8;
                values[c.to_ascii_uppercase() as usize] = i as u8;
            } else {
                values[c as usize] = i as u8;
            }
            i += 1;
        }
        let radix = digits.len() as u128;
        Alphabet {
            digits: table,
            radix: digits.len() as u8,
            values,
            padding,
            positive_sign,
            negative_sign,
            case_insensitive,
            lengths: [
                digit_length_exact(radix, 8),
                digit_length_exact(radix, 16),
                digit_length_exact(radix, 32),
                digit_length_exact(radix, 64),
            ],
        }
    }

    /// Number of distinct digits.
    #[inline]
    pub fn radix(&self) -> usize {
        self.radix as usize
    }

    /// The digit characters, in order of value.
    pub fn digits(&self) -> &str {
        // SAFETY: every digit is an ASCII byte.
        unsafe { str::from_utf8_unchecked(&self.digits[..self.radix()]) }
    }

    pub fn padding(&self) -> char {
        self.padding as char
    }

    pub fn positive_sign(&self) -> char {
        self.positive_sign as char
    }

    pub fn negative_sign(&self) -> char {
        self.negative_sign as char
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// The value of digit character `c`, or `None` if it is not a digit.
    ///
    /// ```
    /// assert_eq!(numeral::BASE16.reverse_lookup('b'), Some(11));
    /// assert_eq!(numeral::BASE16.reverse_lookup('g'), None);
    /// ```
    #[inline]
    pub fn reverse_lookup(&self, c: char) -> Option<u8> {
        if c.is_ascii() {
            self.digit_value(c as u8)
        } else {
            None
        }
    }

    /// Byte flavor of [`reverse_lookup`](Self::reverse_lookup).
    #[inline]
    pub fn digit_value(&self, byte: u8) -> Option<u8> {
        match self.values.get(byte as usize) {
            Some(&value) if value != NOT_A_DIGIT => Some(value),
            _ => None,
        }
    }

    /// Number of digits in the unsigned fixed-width text of a `bits`-wide
    /// integer, which is also the most digits any decode of that width reads.
    ///
    /// Widths other than 8, 16, 32 and 64 round up to the next of those.
    #[inline]
    pub fn digit_length(&self, bits: u32) -> usize {
        let slot = match bits {
            0..=8 => 0,
            9..=16 => 1,
            17..=32 => 2,
            _ => 3,
        };
        self.lengths[slot] as usize
    }

    #[inline]
    pub(crate) fn digit(&self, value: u64) -> u8 {
        self.digits[value as usize]
    }

    #[inline]
    pub(crate) fn padding_byte(&self) -> u8 {
        self.padding
    }

    #[inline]
    pub(crate) fn positive_sign_byte(&self) -> u8 {
        self.positive_sign
    }

    #[inline]
    pub(crate) fn negative_sign_byte(&self) -> u8 {
        self.negative_sign
    }

    /// Derives an obfuscated alphabet with the same radix.
    ///
    /// The 94 printable ASCII characters are shuffled with a seeded
    /// Fisher-Yates shuffle; the first `radix` of them become the digits and
    /// the next three the positive sign, negative sign and padding. The
    /// result is case-sensitive and depends only on `self.radix()` and
    /// `seed`, so both ends of a channel can rebuild it from the seed.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorCode::RadixTooLarge`] when the radix leaves fewer
    /// than three pool characters for the signs and padding.
    ///
    /// ```
    /// let secret = numeral::BASE36.scramble(0x5EED).unwrap();
    /// let mut buffer = numeral::Buffer::new();
    /// let text = secret.encode_signed(&mut buffer, -1234i32).to_owned();
    /// assert_eq!(secret.decode::<i32>(&text), -1234);
    /// ```
    pub fn scramble(&self, seed: u64) -> Result<Alphabet> {
        let radix = self.radix();
        if radix + 3 > POOL.len() {
            return Err(reject(ErrorCode::RadixTooLarge(radix), None));
        }
        let mut pool = POOL;
        let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
        pool.shuffle(&mut rng);
        let (digits, rest) = pool.split_at(radix);
        tracing::debug!(radix, seed, "scrambled alphabet");
        Ok(Alphabet::build(digits, false, rest[2], rest[0], rest[1]))
    }
}

impl Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Alphabet")
            .field("digits", &self.digits())
            .field("case_insensitive", &self.case_insensitive)
            .field("padding", &self.padding())
            .field("positive_sign", &self.positive_sign())
            .field("negative_sign", &self.negative_sign())
            .finish_non_exhaustive()
    }
}

#[inline]
fn fold(byte: u8, case_insensitive: bool) -> usize {
    if case_insensitive {
        byte.to_ascii_uppercase() as usize
    } else {
        byte as usize
    }
}

#[cold]
fn reject(code: ErrorCode, index: Option<usize>) -> Error {
    tracing::debug!(code = %code, ?index, "rejected alphabet definition");
    Error::config(code, index)
}

/// Serializable definition of an [`Alphabet`].
///
/// With the `serde` feature, an `Alphabet` serializes as this struct and
/// deserializing one goes through [`Alphabet::new`], so invalid definitions
/// are rejected at load time.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlphabetConfig {
    pub digits: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub case_insensitive: bool,
    #[cfg_attr(feature = "serde", serde(default = "default_padding"))]
    pub padding: char,
    #[cfg_attr(feature = "serde", serde(default = "default_positive_sign"))]
    pub positive_sign: char,
    #[cfg_attr(feature = "serde", serde(default = "default_negative_sign"))]
    pub negative_sign: char,
}

#[cfg(feature = "serde")]
fn default_padding() -> char {
    ' '
}

#[cfg(feature = "serde")]
fn default_positive_sign() -> char {
    '+'
}

#[cfg(feature = "serde")]
fn default_negative_sign() -> char {
    '-'
}

impl TryFrom<AlphabetConfig> for Alphabet {
    type Error = Error;

    fn try_from(config: AlphabetConfig) -> Result<Alphabet> {
        Alphabet::new(
            &config.digits,
            config.case_insensitive,
            config.padding,
            config.positive_sign,
            config.negative_sign,
        )
    }
}

impl From<Alphabet> for AlphabetConfig {
    fn from(alphabet: Alphabet) -> Self {
        AlphabetConfig::from(&alphabet)
    }
}

impl From<&Alphabet> for AlphabetConfig {
    fn from(alphabet: &Alphabet) -> Self {
        AlphabetConfig {
            digits: String::from(alphabet.digits()),
            case_insensitive: alphabet.case_insensitive,
            padding: alphabet.padding(),
            positive_sign: alphabet.positive_sign(),
            negative_sign: alphabet.negative_sign(),
        }
    }
}

// PREDEFINED
// ----------

/// Binary.
pub static BASE2: Alphabet = Alphabet::build(b"01", false, b' ', b'+', b'-');

/// Octal.
pub static BASE8: Alphabet = Alphabet::build(b"01234567", false, b' ', b'+', b'-');

/// Decimal.
pub static BASE10: Alphabet = Alphabet::build(b"0123456789", false, b' ', b'+', b'-');

/// Hexadecimal, upper-case output, either case accepted.
pub static BASE16: Alphabet = Alphabet::build(b"0123456789ABCDEF", true, b' ', b'+', b'-');

/// `0-9A-V`, upper-case output, either case accepted.
pub static BASE32: Alphabet = Alphabet::build(
    b"0123456789ABCDEFGHIJKLMNOPQRSTUV",
    true,
    b' ',
    b'+',
    b'-',
);

/// `0-9A-Z`, upper-case output, either case accepted.
pub static BASE36: Alphabet = Alphabet::build(
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    true,
    b' ',
    b'+',
    b'-',
);

/// RFC 4648 digit order. Unlike the other predefined alphabets its text does
/// not sort in numeric order.
pub static BASE64: Alphabet = Alphabet::build(
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
    false,
    b'=',
    b'~',
    b'-',
);

/// Letters, digits and ten symbols.
pub static BASE72: Alphabet = Alphabet::build(
    b"!#$%&*0123456789:;=?ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz",
    false,
    b' ',
    b'+',
    b'-',
);

/// `BASE90` without `'`, `,`, `` ` `` and `|`.
pub static BASE86: Alphabet = Alphabet::build(
    b"!#$%&()*./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[]^_abcdefghijklmnopqrstuvwxyz{}~",
    false,
    b' ',
    b'+',
    b'-',
);

/// Every printable ASCII character except `"`, `+`, `-` and `\`.
pub static BASE90: Alphabet = Alphabet::build(
    b"!#$%&'()*,./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[]^_`abcdefghijklmnopqrstuvwxyz{|}~",
    false,
    b' ',
    b'+',
    b'-',
);

/// Every predefined alphabet, by increasing radix.
pub static PREDEFINED: [&Alphabet; 10] = [
    &BASE2, &BASE8, &BASE10, &BASE16, &BASE32, &BASE36, &BASE64, &BASE72, &BASE86, &BASE90,
];
