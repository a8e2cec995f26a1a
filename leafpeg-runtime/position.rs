//! Cursor positions and the spans between them

use crate::input::InputView;
use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

/// A point in the input, tracked in characters.
///
/// Positions are plain values: copying one gives an independent cursor, so a
/// parser marks a backtrack point by keeping a copy and rewinds by putting the
/// copy back. There is no way to move a position backwards.
///
/// Positions compare, order and hash by `offset` only. Line and column are
/// derived from the characters consumed, so over one input they agree
/// whenever the offsets do.
#[derive(Debug, Clone, Copy)]
pub struct Position {
    /// Offset in characters from the start of the input (0-based).
    pub offset: usize,

    /// Line number (1-based). A line break is `\r\n`, `\r`, `\n`, U+2028 or U+2029.
    pub line: usize,

    /// Column number (1-based), reset to 1 after every line break.
    pub column: usize,

    /// The previous character was a line break that a following `\n` belongs to.
    seen_cr: bool,
}

impl Position {
    /// The position before the first character of any input.
    pub fn new() -> Self {
        Position {
            offset: 0,
            line: 1,
            column: 1,
            seen_cr: false,
        }
    }

    /// Step over a single character.
    pub fn advance(&mut self, ch: char) {
        self.offset += 1;
        match ch {
            '\n' => {
                // `\r` already counted this line break
                if !self.seen_cr {
                    self.line += 1;
                }
                self.column = 1;
                self.seen_cr = false;
            }
            '\r' | '\u{2028}' | '\u{2029}' => {
                self.line += 1;
                self.column = 1;
                self.seen_cr = true;
            }
            _ => {
                self.column += 1;
                self.seen_cr = false;
            }
        }
    }

    /// Step over every character of `input` from the current offset up to `to`.
    pub fn advance_to(&mut self, input: &InputView<'_>, to: usize) {
        debug_assert!(to <= input.len());
        for i in self.offset..to {
            self.advance(input.char_at(i));
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset
    }
}

impl Eq for Position {}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.offset.cmp(&other.offset)
    }
}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.offset.hash(state);
    }
}

impl Display for Position {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(
            fmt,
            "Position(offset={}; line={}; column={})",
            self.offset, self.line, self.column
        )
    }
}

/// The span of input between two positions, such as the text a rule or
/// action consumed.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub struct Location {
    start: Position,
    end: Position,
}

impl Location {
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(start.offset <= end.offset, "location ends before it starts");
        Location { start, end }
    }

    /// An empty span at `pos`.
    pub fn at(pos: Position) -> Self {
        Location { start: pos, end: pos }
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    /// The part of `input` this location covers.
    pub fn region<'input>(&self, input: &InputView<'input>) -> InputView<'input> {
        input.sub_sequence(self.start.offset, self.end.offset)
    }
}

impl Display for Location {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn walk(text: &str) -> Position {
        let mut pos = Position::new();
        for ch in text.chars() {
            pos.advance(ch);
        }
        pos
    }

    #[rstest]
    #[case("", 1, 1)]
    #[case("abc", 1, 4)]
    #[case("a\nb", 2, 2)]
    #[case("a\r\nb", 2, 2)]
    #[case("a\rb", 2, 2)]
    #[case("a\r\rb", 3, 2)]
    #[case("a\n\rb", 3, 2)]
    #[case("a\n\nb", 3, 2)]
    #[case("a\u{2028}b", 2, 2)]
    #[case("a\u{2029}\nb", 2, 2)]
    #[case("\r\n\r\n", 3, 1)]
    fn line_and_column(#[case] text: &str, #[case] line: usize, #[case] column: usize) {
        let pos = walk(text);
        assert_eq!(pos.offset, text.chars().count());
        assert_eq!((pos.line, pos.column), (line, column));
    }

    #[test]
    fn copies_are_independent() {
        let original = walk("ab");
        let mut copy = original;
        assert_eq!(copy, original);

        copy.advance('\n');
        assert_eq!(original.offset, 2);
        assert_eq!(original.line, 1);
        assert_eq!(copy.offset, 3);
        assert_eq!(copy.line, 2);
    }

    #[test]
    fn ordered_by_offset() {
        let a = walk("a\n");
        let b = walk("abc");
        assert!(a < b);

        // same offset, different lines
        let (crlf, plain) = (walk("\r\n"), walk("xy"));
        assert_ne!((crlf.line, crlf.column), (plain.line, plain.column));
        assert_eq!(crlf.cmp(&plain), Ordering::Equal);
        assert_eq!(crlf, plain);
    }

    #[test]
    fn advance_to_matches_single_steps() {
        let input = InputView::from("x\r\nyz");
        let mut bulk = Position::new();
        bulk.advance_to(&input, 4);
        assert_eq!(bulk.to_string(), walk("x\r\ny").to_string());

        // starting from the middle continues from the current offset
        let mut from_middle = walk("x\r");
        from_middle.advance_to(&input, 5);
        assert_eq!(from_middle.to_string(), walk("x\r\nyz").to_string());
    }

    #[test]
    fn region() {
        let input = InputView::from("hello world");
        let mut start = Position::new();
        start.advance_to(&input, 6);
        let mut end = start;
        end.advance_to(&input, 11);

        let loc = Location::new(start, end);
        assert_eq!(loc.region(&input), "world");
        assert_eq!(Location::at(start).region(&input), "");
    }

    #[test]
    fn display() {
        assert_eq!(walk("a\nbc").to_string(), "Position(offset=4; line=2; column=3)");
    }
}
