//! Parse error reporting

use crate::input::InputView;
use crate::position::{Location, Position};
use crate::RuleResult;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt::{self, Display};

/// What kind of grammar element was expected.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub enum ExpectedKind {
    /// Any character, but the input ended.
    Any,
    /// A character from a class.
    Pattern,
    /// A fixed run of characters.
    Literal,
    /// A named rule.
    Rule,
    /// The end of the input, but characters remain.
    Eof,
    /// Something the grammar author named from an action.
    Custom,
}

impl ExpectedKind {
    pub fn name(self) -> &'static str {
        match self {
            ExpectedKind::Any => "ANY",
            ExpectedKind::Pattern => "PATTERN",
            ExpectedKind::Literal => "LITERAL",
            ExpectedKind::Rule => "RULE",
            ExpectedKind::Eof => "EOF",
            ExpectedKind::Custom => "CUSTOM",
        }
    }
}

/// One grammar element that could have appeared where parsing failed.
///
/// Ordered by `description` first, which is the order candidates are listed
/// in error messages.
#[derive(PartialEq, Eq, Debug, Clone, Hash)]
pub struct Expected {
    pub kind: ExpectedKind,

    /// The text of a literal or the source of a pattern, if any.
    pub value: Option<Cow<'static, str>>,

    /// Human readable description used in messages.
    pub description: Cow<'static, str>,
}

impl Expected {
    pub const ANY: Expected = Expected::from_static(ExpectedKind::Any, None, "any character");
    pub const EOF: Expected = Expected::from_static(ExpectedKind::Eof, None, "end of input");

    /// Descriptor built from static strings, usable in a `static` or `const`.
    pub const fn from_static(
        kind: ExpectedKind,
        value: Option<&'static str>,
        description: &'static str,
    ) -> Self {
        let value = match value {
            Some(v) => Some(Cow::Borrowed(v)),
            None => None,
        };
        Expected {
            kind,
            value,
            description: Cow::Borrowed(description),
        }
    }

    pub fn new(
        kind: ExpectedKind,
        value: Option<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
    ) -> Self {
        Expected {
            kind,
            value,
            description: description.into(),
        }
    }

    pub fn any() -> Self {
        Self::ANY
    }

    pub fn eof() -> Self {
        Self::EOF
    }

    /// A literal, described as the quoted and escaped text. Case-insensitive
    /// literals keep their value in lower case.
    pub fn literal(text: &str, ignore_case: bool) -> Self {
        let value = if ignore_case { text.to_lowercase() } else { text.to_owned() };
        Expected {
            kind: ExpectedKind::Literal,
            value: Some(value.into()),
            description: format!("{:?}", text).into(),
        }
    }

    /// A character class: `value` is its compiled form, `raw` the text the
    /// grammar spelled it with.
    pub fn pattern(value: impl Into<Cow<'static, str>>, raw: impl Into<Cow<'static, str>>) -> Self {
        Expected {
            kind: ExpectedKind::Pattern,
            value: Some(value.into()),
            description: raw.into(),
        }
    }

    pub fn rule(name: impl Into<Cow<'static, str>>) -> Self {
        Expected {
            kind: ExpectedKind::Rule,
            value: None,
            description: name.into(),
        }
    }

    pub fn custom(text: impl Into<Cow<'static, str>>) -> Self {
        let text = text.into();
        Expected {
            kind: ExpectedKind::Custom,
            value: Some(text.clone()),
            description: text,
        }
    }
}

impl PartialOrd for Expected {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Expected {
    fn cmp(&self, other: &Self) -> Ordering {
        self.description
            .cmp(&other.description)
            .then_with(|| self.kind.cmp(&other.kind))
            .then_with(|| self.value.cmp(&other.value))
    }
}

impl Display for Expected {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Expected(type={}, value=", self.kind.name())?;
        match &self.value {
            Some(v) => write!(fmt, "{}", v)?,
            None => write!(fmt, "null")?,
        }
        write!(fmt, ", description={})", self.description)
    }
}

/// Candidates sorted by description, one per description.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct ExpectedSet {
    expected: Vec<Expected>,
}

impl ExpectedSet {
    /// Sort and de-duplicate raw candidates.
    pub fn from_candidates(candidates: impl IntoIterator<Item = Expected>) -> Self {
        let mut expected: Vec<Expected> = candidates.into_iter().collect();
        // stable, so the first one recorded survives among equal descriptions
        expected.sort_by(|a, b| a.description.cmp(&b.description));
        expected.dedup_by(|a, b| a.description == b.description);
        ExpectedSet { expected }
    }

    pub fn singleton(expected: Expected) -> Self {
        ExpectedSet { expected: vec![expected] }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Expected> {
        self.expected.iter()
    }

    /// Descriptions in message order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.expected.iter().map(|e| &*e.description)
    }

    pub fn len(&self) -> usize {
        self.expected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expected.is_empty()
    }
}

impl Display for ExpectedSet {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self.expected.split_last() {
            None => write!(fmt, "<unreported>"),
            Some((last, [])) => write!(fmt, "{}", last.description),
            Some((last, rest)) => {
                for e in rest {
                    write!(fmt, "{}, ", e.description)?;
                }
                write!(fmt, "or {}", last.description)
            }
        }
    }
}

/// A failed parse: where it failed, what could have been there, and what was.
#[derive(PartialEq, Eq, Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct SyntaxError {
    pub message: String,

    /// Sorted and de-duplicated. Empty for errors raised with a free-form message.
    pub expected: ExpectedSet,

    pub location: Location,

    /// The character at the start of `location`, or `None` at the end of input.
    pub found: Option<char>,
}

impl SyntaxError {
    /// Build an error. With no `message`, one is formatted from the rest.
    pub fn new(
        message: Option<String>,
        expected: ExpectedSet,
        location: Location,
        found: Option<char>,
    ) -> Self {
        let message = match message {
            Some(m) => m,
            None => build_message(&expected, &location, found),
        };
        SyntaxError {
            message,
            expected,
            location,
            found,
        }
    }
}

fn build_message(expected: &ExpectedSet, location: &Location, found: Option<char>) -> String {
    let start = location.start();
    let found = match found {
        Some(ch) => format!("\"{}\"", ch),
        None => "end of input".to_owned(),
    };
    if expected.is_empty() {
        format!("Line {}, column {}: Unexpected {}.", start.line, start.column, found)
    } else {
        format!(
            "Line {}, column {}: Expected {} but {} found.",
            start.line, start.column, expected, found
        )
    }
}

/// A parse stopped from an action. Rule code returns it through every
/// enclosing rule without trying any further alternatives.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Abort(Box<SyntaxError>);

impl Abort {
    pub fn new(error: SyntaxError) -> Self {
        Abort(Box::new(error))
    }

    pub fn error(&self) -> &SyntaxError {
        &self.0
    }

    pub fn into_error(self) -> SyntaxError {
        *self.0
    }
}

impl From<Abort> for SyntaxError {
    fn from(abort: Abort) -> Self {
        abort.into_error()
    }
}

impl Display for Abort {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.0, fmt)
    }
}

/// The start rule requested from a parser cannot be used.
#[derive(PartialEq, Eq, Debug, Clone, thiserror::Error)]
pub enum NoSuchRule {
    #[error("\"{0}\" is not a rule name")]
    Unknown(String),

    #[error("Can't start parsing from rule \"{0}\".")]
    NotStart(String),
}

/// Any way `Grammar::parse_from` can fail.
#[derive(PartialEq, Eq, Debug, Clone, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    NoSuchRule(#[from] NoSuchRule),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

/// Tracks the farthest point any alternative reached and what was expected
/// there.
///
/// Failures behind the farthest offset are dropped, so after any amount of
/// backtracking only the candidates from the deepest failure remain.
/// Candidates are kept in the order they were recorded and only sorted when
/// an error is built, since most parses never need one.
#[derive(Debug, Default)]
pub struct ErrorState {
    farthest: Position,

    /// Everything recorded at `farthest.offset`, duplicates included.
    expected: Vec<Expected>,

    /// Are we inside a lookahead/quiet block? If so, failures are not recorded.
    /// Non-zero => yes, to support nested blocks.
    pub suppress_fail: usize,
}

impl ErrorState {
    pub fn new() -> Self {
        ErrorState {
            farthest: Position::new(),
            expected: Vec::new(),
            suppress_fail: 0,
        }
    }

    /// Flag a failure at `pos`.
    #[inline]
    pub fn mark_failure<T>(&mut self, pos: Position, expected: &Expected) -> RuleResult<T> {
        if self.suppress_fail == 0 && pos.offset >= self.farthest.offset {
            self.record_slow_path(pos, expected);
        }
        RuleResult::Failed
    }

    #[inline(never)]
    fn record_slow_path(&mut self, pos: Position, expected: &Expected) {
        if pos.offset > self.farthest.offset {
            self.farthest = pos;
            self.expected.clear();
        }
        self.expected.push(expected.clone());
    }

    pub fn suppress(&mut self) {
        self.suppress_fail += 1;
    }

    pub fn unsuppress(&mut self) {
        debug_assert!(self.suppress_fail > 0, "unbalanced unsuppress");
        self.suppress_fail = self.suppress_fail.saturating_sub(1);
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppress_fail > 0
    }

    /// The farthest position any failure was recorded at.
    pub fn farthest(&self) -> Position {
        self.farthest
    }

    /// Raw candidates at the farthest position, in recording order.
    pub fn candidates(&self) -> &[Expected] {
        &self.expected
    }

    /// Build the error describing the farthest failure in `input`.
    pub fn into_syntax_error(self, input: &InputView<'_>) -> SyntaxError {
        let location = Location::at(self.farthest);
        let found = input.get(self.farthest.offset);
        SyntaxError::new(None, ExpectedSet::from_candidates(self.expected), location, found)
    }
}
