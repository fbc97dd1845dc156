//! # Numeral
//!
//! Numbers as text, both ways, in any radix from 2 to 94.
//!
//! ```toml
//! [dependencies]
//! numeral = "0.1"
//! ```
//!
//! The crate has three parts.
//!
//! - An [`Alphabet`] turns fixed-width integers into digits of its radix and
//!   back. Every integer type has a fixed-width *unsigned* text that sorts like
//!   the values, and a minimal *signed* text. One [`decode`](Alphabet::decode)
//!   reads both.
//!
//! - The same alphabet writes floats *exactly*: as the integer holding their
//!   bits, so the text reads back to the very same bit pattern.
//!
//! - For people, floats are written with the fewest decimal digits that read
//!   back to the same value ([`decimal`], [`scientific`], [`general`],
//!   [`friendly`], or a configured [`FloatFormat`]), and read back with a
//!   forgiving [`parse`] that takes the longest prefix that looks like a
//!   number.
//!
//! ```
//! use numeral::{Buffer, BASE36};
//!
//! let mut buffer = Buffer::new();
//! assert_eq!(BASE36.encode_signed(&mut buffer, -1295i16), "-ZZ");
//! assert_eq!(BASE36.encode_unsigned(&mut buffer, 1295u16), "00ZZ");
//! assert_eq!(BASE36.decode::<i16>("-zz"), -1295);
//!
//! assert_eq!(numeral::general(0.1f64 + 0.2), "0.30000000000000004");
//! assert_eq!(numeral::parse_f64("0.30000000000000004 apples"), 0.1 + 0.2);
//! ```
//!
//! Reading never fails. Malformed text reads as zero, or as the value of its
//! longest well-formed prefix. The only fallible operation is defining a new
//! [`Alphabet`], which reports an [`Error`].
//!
//! Encoders write into a caller-owned [`Buffer`] and borrow the result from
//! it, so they never allocate and alphabets can be shared between threads.
//!
//! # Features
//!
//! - `std` (default): `std::error::Error` for [`Error`].
//! - `serde`: `Serialize`/`Deserialize` for [`Alphabet`], [`FloatFormat`]
//!   and [`Notation`]. A deserialized alphabet is validated like one built
//!   with [`Alphabet::new`].

#![doc(html_root_url = "https://docs.rs/numeral/0.1.0")]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(clippy::all, clippy::pedantic)]
// Ignored clippy_pedantic lints
#![allow(
    // digit values and lengths are far below every type's range
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_lossless,
    clippy::unreadable_literal,
    // things are often more readable this way
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::len_without_is_empty,
    clippy::doc_markdown,
    // integer and float codecs share method names on purpose
    clippy::similar_names,
)]

extern crate alloc;

mod bignum;
mod buffer;
mod format;
mod integer;
mod parse;
mod shortest;

pub mod alphabet;
pub mod error;
pub mod exact;
pub mod num;

#[doc(inline)]
pub use crate::alphabet::{
    Alphabet, AlphabetConfig, BASE10, BASE16, BASE2, BASE32, BASE36, BASE64, BASE72, BASE8, BASE86,
    BASE90, MAX_RADIX, PREDEFINED,
};
pub use crate::buffer::Buffer;
#[doc(inline)]
pub use crate::error::{Error, Result};
#[doc(inline)]
pub use crate::exact::{from_ordered_bits, from_raw_bits, to_ordered_bits, to_raw_bits};
pub use crate::num::{Float, Integer};
pub use crate::format::{decimal, friendly, general, scientific, FloatFormat, Notation};
pub use crate::parse::{parse, parse_bytes, parse_f32, parse_f64, parse_range, valid_prefix_len};
pub use crate::shortest::{shortest, Shortest};
