//! Per-parse state shared by every rule of a generated parser

use crate::error::{Abort, ErrorState, Expected, ExpectedSet, SyntaxError};
use crate::input::InputView;
use crate::position::{Location, Position};
use crate::{RuleOutcome, RuleResult};
use log::{debug, trace};

/// Everything one parse of one input works on: the input, the cursor, the
/// mark of the rule or action being evaluated, and the farthest failure.
///
/// Create one per parse and drop it, or turn it into the result with
/// [`ParseContext::finish`], when the start rule returns. Rules backtrack by
/// taking a [`checkpoint`](ParseContext::checkpoint) and handing it back to
/// [`rewind`](ParseContext::rewind).
#[derive(Debug)]
pub struct ParseContext<'input> {
    input: InputView<'input>,
    current: Position,
    mark: Position,
    errors: ErrorState,
}

impl<'input> ParseContext<'input> {
    pub fn new(input: impl Into<InputView<'input>>) -> Self {
        ParseContext {
            input: input.into(),
            current: Position::new(),
            mark: Position::new(),
            errors: ErrorState::new(),
        }
    }

    pub fn input(&self) -> &InputView<'input> {
        &self.input
    }

    /// The cursor.
    pub fn position(&self) -> Position {
        self.current
    }

    /// A copy of the cursor to [`rewind`](Self::rewind) to later.
    pub fn checkpoint(&self) -> Position {
        self.current
    }

    /// Put back a cursor taken earlier with [`checkpoint`](Self::checkpoint).
    pub fn rewind(&mut self, pos: Position) {
        self.current = pos;
    }

    pub fn is_eof(&self) -> bool {
        self.current.offset >= self.input.len()
    }

    pub fn errors(&self) -> &ErrorState {
        &self.errors
    }

    pub fn errors_mut(&mut self) -> &mut ErrorState {
        &mut self.errors
    }

    pub fn mark(&self) -> Position {
        self.mark
    }

    pub fn set_mark(&mut self, pos: Position) {
        self.mark = pos;
    }

    /// Move the mark to the cursor, returning the old mark so that a nested
    /// action can restore it.
    pub fn mark_here(&mut self) -> Position {
        std::mem::replace(&mut self.mark, self.current)
    }

    /// The span from the mark to the cursor.
    ///
    /// # Panics
    ///
    /// In debug builds, if the cursor was rewound behind the mark.
    pub fn location(&self) -> Location {
        Location::new(self.mark, self.current)
    }

    /// The input from the mark to the cursor.
    ///
    /// # Panics
    ///
    /// If the cursor was rewound behind the mark.
    pub fn text(&self) -> InputView<'input> {
        self.location().region(&self.input)
    }

    /// The input from `from` to the cursor.
    ///
    /// # Panics
    ///
    /// If `from` is ahead of the cursor.
    pub fn text_from(&self, from: Position) -> InputView<'input> {
        self.input.sub_sequence(from.offset, self.current.offset)
    }

    /// Record `expected` at the cursor and fail.
    pub fn fail<T>(&mut self, expected: &Expected) -> RuleResult<T> {
        self.errors.mark_failure(self.current, expected)
    }

    /// Match any one character.
    pub fn match_any(&mut self) -> RuleResult<char> {
        match self.input.get(self.current.offset) {
            Some(ch) => {
                trace_match!(self, "any", ch);
                self.current.advance(ch);
                RuleResult::Matched(ch)
            }
            None => self.fail(&Expected::ANY),
        }
    }

    /// Match one character for which `class` returns `true`, or `false` when
    /// `inverted`.
    pub fn match_pattern(
        &mut self,
        class: impl FnOnce(char) -> bool,
        expected: &Expected,
        inverted: bool,
    ) -> RuleResult<char> {
        if let Some(ch) = self.input.get(self.current.offset) {
            if class(ch) ^ inverted {
                trace_match!(self, expected.description, ch);
                self.current.advance(ch);
                return RuleResult::Matched(ch);
            }
        }
        trace_fail!(self, expected.description);
        self.fail(expected)
    }

    /// Match `literal`, comparing the whole run of characters at once so that
    /// a partial match never moves the cursor.
    pub fn match_literal(
        &mut self,
        literal: &str,
        expected: &Expected,
        ignore_case: bool,
    ) -> RuleResult<InputView<'input>> {
        let start = self.current.offset;
        let end = start + literal.chars().count();
        if end <= self.input.len() {
            let run = self.input.sub_sequence(start, end);
            let matched = if ignore_case {
                run.chars().zip(literal.chars()).all(|(a, b)| chars_eq_ignore_case(a, b))
            } else {
                run == literal
            };
            if matched {
                trace_match!(self, expected.description, run);
                self.current.advance_to(&self.input, end);
                return RuleResult::Matched(run);
            }
        }
        trace_fail!(self, expected.description);
        self.fail(expected)
    }

    /// Run `body` without recording any failure it hits.
    pub fn quiet<T>(&mut self, body: impl FnOnce(&mut Self) -> T) -> T {
        self.errors.suppress();
        let res = body(self);
        self.errors.unsuppress();
        res
    }

    /// Run the body of a rule that has a display name. Failures inside are
    /// not recorded; if the rule fails, `expected` is recorded where it began.
    pub fn named<T>(
        &mut self,
        expected: &Expected,
        body: impl FnOnce(&mut Self) -> RuleOutcome<T>,
    ) -> RuleOutcome<T> {
        let start = self.current;
        match self.quiet(body)? {
            RuleResult::Matched(v) => Ok(RuleResult::Matched(v)),
            RuleResult::Failed => Ok(self.errors.mark_failure(start, expected)),
        }
    }

    /// `&e`: match `body` without consuming input or recording failures.
    pub fn positive_lookahead<T>(
        &mut self,
        body: impl FnOnce(&mut Self) -> RuleOutcome<T>,
    ) -> RuleOutcome<T> {
        let start = self.checkpoint();
        let res = self.quiet(body)?;
        self.rewind(start);
        Ok(res)
    }

    /// `!e`: succeed without consuming input exactly when `body` fails.
    pub fn negative_lookahead<T>(
        &mut self,
        body: impl FnOnce(&mut Self) -> RuleOutcome<T>,
    ) -> RuleOutcome<()> {
        let start = self.checkpoint();
        let res = self.quiet(body)?;
        self.rewind(start);
        Ok(match res {
            RuleResult::Matched(_) => RuleResult::Failed,
            RuleResult::Failed => RuleResult::Matched(()),
        })
    }

    /// Stop the parse, reporting that `value` was expected over the current
    /// [`location`](Self::location).
    pub fn expected(&self, value: &str) -> Abort {
        self.expected_at(value, self.location())
    }

    /// Stop the parse, reporting that `value` was expected at `location`.
    pub fn expected_at(&self, value: &str, location: Location) -> Abort {
        let expected = ExpectedSet::singleton(Expected::custom(value.to_owned()));
        let err = SyntaxError::new(None, expected, location, self.found(&location));
        debug!("parse aborted: {}", err);
        Abort::new(err)
    }

    /// Stop the parse with `message` over the current [`location`](Self::location).
    pub fn error(&self, message: &str) -> Abort {
        self.error_at(message, self.location())
    }

    /// Stop the parse with `message` at `location`.
    pub fn error_at(&self, message: &str, location: Location) -> Abort {
        let err = SyntaxError::new(
            Some(message.to_owned()),
            ExpectedSet::default(),
            location,
            self.found(&location),
        );
        debug!("parse aborted: {}", err);
        Abort::new(err)
    }

    fn found(&self, location: &Location) -> Option<char> {
        self.input.get(location.start().offset)
    }

    /// Turn the start rule's result into the parse result.
    ///
    /// A match only counts if it consumed the whole input; otherwise the end
    /// of input is recorded as expected at the cursor. Failures are reported
    /// at the farthest position any alternative reached.
    pub fn finalize<T>(mut self, result: RuleResult<T>) -> Result<T, SyntaxError> {
        if let RuleResult::Matched(value) = result {
            if self.current.offset == self.input.len() {
                trace!("parse matched all {} characters", self.input.len());
                return Ok(value);
            }
            let _: RuleResult<()> = self.fail(&Expected::EOF);
        }
        let err = self.errors.into_syntax_error(&self.input);
        debug!("parse failed: {}", err);
        Err(err)
    }

    /// Like [`finalize`](Self::finalize), but also accepts an abort raised
    /// anywhere in the parse, which becomes the error as is.
    pub fn finish<T>(self, outcome: RuleOutcome<T>) -> Result<T, SyntaxError> {
        match outcome {
            Ok(result) => self.finalize(result),
            Err(abort) => Err(abort.into_error()),
        }
    }
}

/// Case-insensitive comparison of single characters.
fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_uppercase().eq(b.to_uppercase()) || a.to_lowercase().eq(b.to_lowercase())
}
