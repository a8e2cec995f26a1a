//! Character-sequence input backed by a `str`

use std::fmt::{self, Display};
use std::sync::Arc;

/// A `str` indexed by character rather than by byte.
///
/// ASCII text is indexed directly. Anything else gets a table of the byte
/// offset at which every character starts, built once and shared by every
/// sub-sequence, so that reading any earlier character again stays O(1).
#[derive(Clone, Debug)]
pub struct Chars<'input> {
    text: &'input str,

    /// Byte offset of each character of `text`, followed by `text.len()`.
    /// `None` when `text` is ASCII.
    starts: Option<Arc<[usize]>>,

    /// Character range of `text` this view covers.
    lo: usize,
    hi: usize,
}

impl<'input> Chars<'input> {
    pub fn new(text: &'input str) -> Self {
        if text.is_ascii() {
            return Chars {
                text,
                starts: None,
                lo: 0,
                hi: text.len(),
            };
        }

        let starts: Arc<[usize]> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        let hi = starts.len() - 1;
        Chars {
            text,
            starts: Some(starts),
            lo: 0,
            hi,
        }
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.hi - self.lo
    }

    pub fn is_empty(&self) -> bool {
        self.hi == self.lo
    }

    /// The character at `index`. Panics if `index >= self.len()`.
    pub fn char_at(&self, index: usize) -> char {
        assert!(index < self.len(), "index {} out of range for length {}", index, self.len());
        let i = self.lo + index;
        match &self.starts {
            None => self.text.as_bytes()[i] as char,
            Some(starts) => self.text[starts[i]..starts[i + 1]]
                .chars()
                .next()
                .unwrap_or(char::REPLACEMENT_CHARACTER),
        }
    }

    /// The characters in `[lo, hi)`, borrowing the same text.
    pub fn sub_sequence(&self, lo: usize, hi: usize) -> Self {
        assert!(
            lo <= hi && hi <= self.len(),
            "range {}..{} out of range for length {}",
            lo,
            hi,
            self.len()
        );
        Chars {
            text: self.text,
            starts: self.starts.clone(),
            lo: self.lo + lo,
            hi: self.lo + hi,
        }
    }

    pub fn as_str(&self) -> &'input str {
        match &self.starts {
            None => &self.text[self.lo..self.hi],
            Some(starts) => &self.text[starts[self.lo]..starts[self.hi]],
        }
    }
}

impl<'input> Display for Chars<'input> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(self.as_str())
    }
}
