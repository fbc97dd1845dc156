use core::str;

/// Longest text any encoder writes: 64 binary digits plus a sign or marker.
pub(crate) const BUFFER_LEN: usize = 65;

/// A correctly sized stack allocation for the formatted integer or exact
/// float to be written into.
///
/// Encoders fill the buffer from the back and return a string slice that
/// borrows from it, so a single buffer can be reused for any number of calls
/// without allocating.
///
/// # Example
///
/// ```
/// let mut buffer = numeral::Buffer::new();
/// let printed = numeral::BASE16.encode_unsigned(&mut buffer, 1234u16);
/// assert_eq!(printed, "04D2");
/// ```
#[derive(Copy, Clone)]
pub struct Buffer {
    bytes: [u8; BUFFER_LEN],
}

impl Default for Buffer {
    #[inline]
    fn default() -> Buffer {
        Buffer::new()
    }
}

impl Buffer {
    /// This is a cheap operation; you don't need to worry about reusing
    /// buffers for efficiency.
    #[inline]
    pub fn new() -> Buffer {
        Buffer {
            bytes: [0; BUFFER_LEN],
        }
    }

    /// Back-to-front writer over the whole buffer.
    #[inline]
    pub(crate) fn cursor(&mut self) -> Cursor<'_> {
        Cursor {
            bytes: &mut self.bytes,
            pos: BUFFER_LEN,
        }
    }
}

pub(crate) struct Cursor<'a> {
    bytes: &'a mut [u8; BUFFER_LEN],
    pos: usize,
}

impl<'a> Cursor<'a> {
    #[inline]
    pub(crate) fn push_front(&mut self, byte: u8) {
        self.pos -= 1;
        self.bytes[self.pos] = byte;
    }

    /// Number of bytes written so far.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        BUFFER_LEN - self.pos
    }

    #[inline]
    pub(crate) fn finish(self) -> &'a str {
        let Cursor { bytes, pos } = self;
        let bytes: &'a [u8; BUFFER_LEN] = bytes;
        let bytes = &bytes[pos..];
        // SAFETY: alphabets only hold ASCII characters, so every byte pushed
        // into the buffer is a complete UTF-8 sequence on its own.
        unsafe { str::from_utf8_unchecked(bytes) }
    }
}
