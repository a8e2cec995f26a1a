//! One indexable view over every kind of input a parser accepts

use crate::slice::{byte_char, write_bytes, ByteBuffer};
use crate::str::Chars;
use std::fmt::{self, Display};
use std::sync::Arc;

/// A sequence of characters a parser reads from.
///
/// Text is read character by character. Byte inputs are read byte by byte,
/// each byte standing for the character with the same unsigned value, which
/// lets a grammar describe binary formats with the same literals and classes
/// it uses for text.
///
/// Every operation is cheap to repeat at any offset, and `sub_sequence`
/// never copies the input.
#[derive(Clone, Debug)]
pub enum InputView<'input> {
    /// Text, indexed by character.
    Chars(Chars<'input>),
    /// A borrowed byte array.
    Bytes(&'input [u8]),
    /// A shared byte buffer.
    Buffer(ByteBuffer),
}

impl<'input> InputView<'input> {
    /// Number of characters in the input.
    pub fn len(&self) -> usize {
        match self {
            InputView::Chars(c) => c.len(),
            InputView::Bytes(b) => b.len(),
            InputView::Buffer(b) => b.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The character at `index`. Panics if `index >= self.len()`.
    #[inline]
    pub fn char_at(&self, index: usize) -> char {
        match self {
            InputView::Chars(c) => c.char_at(index),
            InputView::Bytes(b) => byte_char(b[index]),
            InputView::Buffer(b) => byte_char(b[index]),
        }
    }

    /// The character at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<char> {
        if index < self.len() {
            Some(self.char_at(index))
        } else {
            None
        }
    }

    /// The characters in `[lo, hi)`, sharing this view's storage.
    pub fn sub_sequence(&self, lo: usize, hi: usize) -> InputView<'input> {
        match self {
            InputView::Chars(c) => InputView::Chars(c.sub_sequence(lo, hi)),
            InputView::Bytes(b) => InputView::Bytes(&b[lo..hi]),
            InputView::Buffer(b) => InputView::Buffer(b.slice(lo, hi)),
        }
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        (0..self.len()).map(move |i| self.char_at(i))
    }

    /// The underlying text, if this is a text input.
    pub fn as_str(&self) -> Option<&'input str> {
        match self {
            InputView::Chars(c) => Some(c.as_str()),
            _ => None,
        }
    }

    /// The underlying bytes, if this is a byte input.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            InputView::Chars(_) => None,
            InputView::Bytes(b) => Some(*b),
            InputView::Buffer(b) => Some(&b[..]),
        }
    }
}

impl<'input> Display for InputView<'input> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InputView::Chars(c) => Display::fmt(c, fmt),
            InputView::Bytes(b) => write_bytes(fmt, b),
            InputView::Buffer(b) => write_bytes(fmt, b),
        }
    }
}

impl<'input> PartialEq<str> for InputView<'input> {
    fn eq(&self, other: &str) -> bool {
        match self {
            InputView::Chars(c) => c.as_str() == other,
            _ => self.chars().eq(other.chars()),
        }
    }
}

impl<'input, 'a> PartialEq<&'a str> for InputView<'input> {
    fn eq(&self, other: &&'a str) -> bool {
        self == *other
    }
}

impl<'input, 'other> PartialEq<InputView<'other>> for InputView<'input> {
    fn eq(&self, other: &InputView<'other>) -> bool {
        self.len() == other.len() && self.chars().eq(other.chars())
    }
}

impl<'input> From<&'input str> for InputView<'input> {
    fn from(text: &'input str) -> Self {
        InputView::Chars(Chars::new(text))
    }
}

impl<'input> From<&'input String> for InputView<'input> {
    fn from(text: &'input String) -> Self {
        InputView::Chars(Chars::new(text))
    }
}

impl<'input> From<&'input [u8]> for InputView<'input> {
    fn from(bytes: &'input [u8]) -> Self {
        InputView::Bytes(bytes)
    }
}

impl<'input, const N: usize> From<&'input [u8; N]> for InputView<'input> {
    fn from(bytes: &'input [u8; N]) -> Self {
        InputView::Bytes(bytes)
    }
}

impl<'input> From<&'input Vec<u8>> for InputView<'input> {
    fn from(bytes: &'input Vec<u8>) -> Self {
        InputView::Bytes(bytes)
    }
}

impl<'input> From<ByteBuffer> for InputView<'input> {
    fn from(buffer: ByteBuffer) -> Self {
        InputView::Buffer(buffer)
    }
}

impl<'input> From<Arc<[u8]>> for InputView<'input> {
    fn from(buffer: Arc<[u8]>) -> Self {
        InputView::Buffer(ByteBuffer::new(buffer))
    }
}

impl<'input> From<Vec<u8>> for InputView<'input> {
    fn from(bytes: Vec<u8>) -> Self {
        InputView::Buffer(ByteBuffer::from(bytes))
    }
}
