//! `leafpeg` is the runtime behind parsers generated from parsing
//! expression grammars (PEG).
//!
//! A generator turns each grammar rule into a function that takes the
//! [`ParseContext`] of the current parse. Rule functions are built from a
//! handful of pieces this crate provides:
//!
//!  * the leaf matchers [`ParseContext::match_any`],
//!    [`ParseContext::match_pattern`] and [`ParseContext::match_literal`];
//!  * backtracking by [`ParseContext::checkpoint`] and [`ParseContext::rewind`];
//!  * predicates and named rules, which keep their failures out of the
//!    error message: [`ParseContext::positive_lookahead`],
//!    [`ParseContext::negative_lookahead`] and [`ParseContext::named`];
//!  * the text and [`Location`] an action matched, from the mark set by
//!    [`ParseContext::mark_here`];
//!  * aborts raised from actions: [`ParseContext::expected`] and
//!    [`ParseContext::error`].
//!
//! Every rule returns a [`RuleOutcome`]: `Ok(RuleResult::Matched(v))`,
//! `Ok(RuleResult::Failed)` to let the caller try its next alternative, or
//! `Err(abort)` to stop the whole parse.
//!
//! ## Errors
//!
//! When no alternative matches, the error is reported at the farthest
//! position any alternative reached, listing everything that could have
//! appeared there:
//!
//! ```text
//! Line 3, column 7: Expected ",", "]", or whitespace but "}" found.
//! ```
//!
//! ## Input
//!
//! Parsers read text (`&str`), byte arrays (`&[u8]`) or shared byte buffers
//! ([`ByteBuffer`]) through the same [`InputView`]. Bytes are read as the
//! characters U+0000 to U+00FF.
//!
//! ## Example
//!
//! A hand-written version of what a generator emits for
//! `list = "[" digit ("," digit)* "]"`:
//!
//! ```
//! use leafpeg::{Expected, ExpectedKind, Grammar, ParseContext, RuleInfo, RuleOutcome, RuleResult};
//!
//! struct Digits;
//!
//! static OPEN: Expected = Expected::from_static(ExpectedKind::Literal, Some("["), "\"[\"");
//! static CLOSE: Expected = Expected::from_static(ExpectedKind::Literal, Some("]"), "\"]\"");
//! static COMMA: Expected = Expected::from_static(ExpectedKind::Literal, Some(","), "\",\"");
//! static DIGIT: Expected = Expected::from_static(ExpectedKind::Pattern, Some("[0-9]"), "[0-9]");
//!
//! fn list(ctx: &mut ParseContext<'_>) -> RuleOutcome<Vec<char>> {
//!     if ctx.match_literal("[", &OPEN, false).is_failed() {
//!         return Ok(RuleResult::Failed);
//!     }
//!     let mut items = Vec::new();
//!     match ctx.match_pattern(|c| c.is_ascii_digit(), &DIGIT, false) {
//!         RuleResult::Matched(c) => items.push(c),
//!         RuleResult::Failed => return Ok(RuleResult::Failed),
//!     }
//!     loop {
//!         let before = ctx.checkpoint();
//!         if ctx.match_literal(",", &COMMA, false).is_failed() {
//!             break;
//!         }
//!         match ctx.match_pattern(|c| c.is_ascii_digit(), &DIGIT, false) {
//!             RuleResult::Matched(c) => items.push(c),
//!             RuleResult::Failed => {
//!                 ctx.rewind(before);
//!                 break;
//!             }
//!         }
//!     }
//!     Ok(ctx.match_literal("]", &CLOSE, false).map(|_| items))
//! }
//!
//! impl Grammar for Digits {
//!     type Output<'input> = Vec<char>;
//!     const RULES: &'static [RuleInfo] = &[RuleInfo::start("list")];
//!     const DEFAULT_RULE: &'static str = "list";
//!
//!     fn parse_rule<'input>(
//!         &self,
//!         ctx: &mut ParseContext<'input>,
//!         _rule: &str,
//!     ) -> RuleOutcome<Vec<char>> {
//!         list(ctx)
//!     }
//! }
//!
//! assert_eq!(Digits.parse("[1,2,3]"), Ok(vec!['1', '2', '3']));
//!
//! let err = Digits.parse("[1,2;").unwrap_err();
//! assert_eq!(err.to_string(), r#"Line 1, column 5: Expected ",", or "]" but ";" found."#);
//! ```

pub use leafpeg_runtime as runtime;

pub use leafpeg_runtime::{
    find_start_rule, Abort, ByteBuffer, ErrorState, Expected, ExpectedKind, ExpectedSet, Grammar,
    InputView, Location, NoSuchRule, ParseContext, ParseError, Position, RuleInfo, RuleOutcome,
    RuleResult, SyntaxError,
};
