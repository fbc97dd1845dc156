//! When defining a digit alphabet goes wrong.
//!
//! Encoding, decoding and parsing never fail; the only fallible operation in
//! this crate is building an [`Alphabet`](crate::Alphabet) from a digit set
//! that breaks one of its invariants.

use alloc::boxed::Box;
use alloc::string::ToString;
use core::fmt::{self, Debug, Display};
use core::result;

/// This type represents all possible errors that can occur when constructing
/// a digit alphabet.
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `numeral::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Zero-based index, within the digit string, of the character that
    /// caused the error.
    ///
    /// Errors about the sign or padding characters, or about the digit count
    /// as a whole, have no index.
    pub fn index(&self) -> Option<usize> {
        self.err.index
    }

    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Radix` - too few or too many digits
    /// - `Category::Character` - a character that cannot be used at all
    /// - `Category::Collision` - two roles claim the same character
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::RadixTooSmall(_) | ErrorCode::RadixTooLarge(_) => Category::Radix,
            ErrorCode::InvalidCharacter(_) => Category::Character,
            ErrorCode::DuplicateDigit(_)
            | ErrorCode::SignOrPaddingIsDigit(_)
            | ErrorCode::SignOrPaddingCollision(_) => Category::Collision,
        }
    }

    /// Returns true if this error was caused by the number of digits.
    pub fn is_radix(&self) -> bool {
        self.classify() == Category::Radix
    }

    /// Returns true if this error was caused by a character outside of the
    /// printable ASCII range.
    pub fn is_character(&self) -> bool {
        self.classify() == Category::Character
    }

    /// Returns true if this error was caused by one character being used for
    /// two purposes.
    pub fn is_collision(&self) -> bool {
        self.classify() == Category::Collision
    }
}

/// Categorizes the cause of a `numeral::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The alphabet has fewer than two digits, or more than can be
    /// represented.
    Radix,

    /// A digit, sign or padding character is not printable ASCII.
    Character,

    /// A character appears twice among the digits, or is used both as a
    /// digit and as a sign or padding character.
    Collision,
}

#[cfg(feature = "std")]
impl From<Error> for std::io::Error {
    /// Convert a `numeral::Error` into an `io::Error`.
    ///
    /// Every alphabet error maps to `io::ErrorKind::InvalidInput`, since it
    /// always describes a bad definition supplied by the caller.
    fn from(err: Error) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
    }
}

struct ErrorImpl {
    code: ErrorCode,
    index: Option<usize>,
}

/// This type describes all possible errors that can occur when constructing
/// a digit alphabet.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorCode {
    /// Fewer than two digits were given.
    RadixTooSmall(usize),

    /// More digits were given than the alphabet can hold.
    RadixTooLarge(usize),

    /// A character outside of printable ASCII.
    InvalidCharacter(char),

    /// Two digits compare equal under the alphabet's case rule.
    DuplicateDigit(char),

    /// A sign or padding character is also one of the digits.
    SignOrPaddingIsDigit(char),

    /// The positive sign, negative sign and padding characters are not all
    /// distinct.
    SignOrPaddingCollision(char),
}

impl Error {
    #[cold]
    pub(crate) fn config(code: ErrorCode, index: Option<usize>) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, index }),
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ErrorCode::RadixTooSmall(len) => {
                write!(f, "alphabet needs at least 2 digits, got {len}")
            }
            ErrorCode::RadixTooLarge(len) => write!(
                f,
                "alphabet has {len} digits, at most {} are supported",
                crate::alphabet::MAX_RADIX
            ),
            ErrorCode::InvalidCharacter(c) => {
                write!(f, "character {c:?} is not printable ASCII")
            }
            ErrorCode::DuplicateDigit(c) => write!(f, "digit {c:?} appears more than once"),
            ErrorCode::SignOrPaddingIsDigit(c) => {
                write!(f, "sign or padding character {c:?} is also a digit")
            }
            ErrorCode::SignOrPaddingCollision(c) => write!(
                f,
                "sign and padding characters must differ, {c:?} is used twice"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.index {
            None => Display::fmt(&self.code, f),
            Some(index) => write!(f, "{} at index {index}", self.code),
        }
    }
}

// Remove two layers of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.err.index {
            None => write!(f, "Error({:?})", self.err.code.to_string()),
            Some(index) => write!(
                f,
                "Error({:?}, index: {index})",
                self.err.code.to_string()
            ),
        }
    }
}
