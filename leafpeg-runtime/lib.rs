//! Runtime support for parsers generated from parsing expression grammars.
//!
//! Generated rule functions share one [`ParseContext`] per parse. They call
//! its leaf matchers, backtrack with [`ParseContext::checkpoint`] and
//! [`ParseContext::rewind`], and hand the start rule's result to
//! [`ParseContext::finish`], which reports the farthest failure as a
//! [`SyntaxError`].

macro_rules! trace_match {
    ($ctx:expr, $what:expr, $value:expr) => {
        if cfg!(feature = "trace") {
            log::trace!("[PEG_TRACE] Matched {} at {}: {:?}", $what, $ctx.current, $value);
        }
    };
}

macro_rules! trace_fail {
    ($ctx:expr, $what:expr) => {
        if cfg!(feature = "trace") {
            log::trace!("[PEG_TRACE] Failed to match {} at {}", $what, $ctx.current);
        }
    };
}

pub mod context;
pub mod error;
pub mod input;
pub mod position;
pub mod slice;
pub mod str;

pub use context::ParseContext;
pub use error::{
    Abort, ErrorState, Expected, ExpectedKind, ExpectedSet, NoSuchRule, ParseError, SyntaxError,
};
pub use input::InputView;
pub use position::{Location, Position};
pub use slice::ByteBuffer;

/// The result of matching a rule or a leaf.
///
/// The cursor lives in the [`ParseContext`], so a match carries only its
/// value. `Failed` is distinct from every value, including `()` and `None`.
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum RuleResult<T> {
    Matched(T),
    Failed,
}

impl<T> RuleResult<T> {
    pub fn is_matched(&self) -> bool {
        matches!(self, RuleResult::Matched(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RuleResult::Failed)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RuleResult<U> {
        match self {
            RuleResult::Matched(v) => RuleResult::Matched(f(v)),
            RuleResult::Failed => RuleResult::Failed,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            RuleResult::Matched(v) => Some(v),
            RuleResult::Failed => None,
        }
    }
}

impl<T> From<Option<T>> for RuleResult<T> {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => RuleResult::Matched(v),
            None => RuleResult::Failed,
        }
    }
}

/// What a rule function returns: its result, or the abort that stops the
/// whole parse. Rules pass aborts on with `?`.
pub type RuleOutcome<T> = Result<RuleResult<T>, Abort>;

/// An entry in a grammar's rule table.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct RuleInfo {
    /// The rule's name in the grammar.
    pub name: &'static str,
    /// Whether parsing may start from this rule.
    pub is_start: bool,
}

impl RuleInfo {
    pub const fn start(name: &'static str) -> Self {
        RuleInfo { name, is_start: true }
    }

    pub const fn internal(name: &'static str) -> Self {
        RuleInfo { name, is_start: false }
    }
}

/// Look up the start rule `name` in `rules`.
pub fn find_start_rule<'r>(rules: &'r [RuleInfo], name: &str) -> Result<&'r RuleInfo, NoSuchRule> {
    match rules.iter().find(|r| r.name == name) {
        None => Err(NoSuchRule::Unknown(name.to_owned())),
        Some(r) if !r.is_start => Err(NoSuchRule::NotStart(name.to_owned())),
        Some(r) => Ok(r),
    }
}

/// A generated parser.
///
/// Implementations provide the rule table and a dispatch from start rule
/// names to rule functions; parsing any kind of input is provided.
pub trait Grammar {
    /// The value produced by the start rules.
    type Output<'input>;

    /// Every rule of the grammar.
    const RULES: &'static [RuleInfo];

    /// The rule `parse` starts from.
    const DEFAULT_RULE: &'static str;

    /// Run the start rule `rule`. Only called with start rules from `RULES`.
    fn parse_rule<'input>(
        &self,
        ctx: &mut ParseContext<'input>,
        rule: &str,
    ) -> RuleOutcome<Self::Output<'input>>;

    /// Parse `input` from the default rule.
    fn parse<'input>(
        &self,
        input: impl Into<InputView<'input>>,
    ) -> Result<Self::Output<'input>, SyntaxError> {
        let mut ctx = ParseContext::new(input);
        let outcome = self.parse_rule(&mut ctx, Self::DEFAULT_RULE);
        ctx.finish(outcome)
    }

    /// Parse `input` from the start rule `rule`.
    fn parse_from<'input>(
        &self,
        input: impl Into<InputView<'input>>,
        rule: &str,
    ) -> Result<Self::Output<'input>, ParseError> {
        let info = find_start_rule(Self::RULES, rule).inspect_err(|e| log::debug!("{}", e))?;
        log::trace!("starting parse from rule {}", info.name);
        let mut ctx = ParseContext::new(input);
        let outcome = self.parse_rule(&mut ctx, info.name);
        Ok(ctx.finish(outcome)?)
    }
}
