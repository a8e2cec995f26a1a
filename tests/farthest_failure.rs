extern crate leafpeg;

use leafpeg::{Expected, ExpectedKind, ParseContext, Position, RuleResult};
use rstest::rstest;

fn lit(s: &str) -> Expected {
    Expected::literal(s, false)
}

#[test]
fn literal_after_consumed_prefix() {
    // "a" "c" against "ab"
    let mut ctx = ParseContext::new("ab");
    assert!(ctx.match_literal("a", &lit("a"), false).is_matched());
    assert!(ctx.match_literal("c", &lit("c"), false).is_failed());
    assert_eq!(ctx.errors().farthest().offset, 1);

    let err = ctx.finalize(RuleResult::<()>::Failed).unwrap_err();
    assert_eq!(err.location.start().offset, 1);
    assert_eq!(err.location.start(), err.location.end());
    assert_eq!(err.found, Some('b'));
    assert!(err.message.ends_with(r#"but "b" found."#), "{}", err.message);
    assert_eq!(err.message, r#"Line 1, column 2: Expected "c" but "b" found."#);
}

#[test]
fn whole_literal_compared_at_once() {
    // "ac" against "ab": nothing is consumed, the failure is where the literal began
    let mut ctx = ParseContext::new("ab");
    assert!(ctx.match_literal("ac", &lit("ac"), false).is_failed());
    assert_eq!(ctx.position().offset, 0);
    let err = ctx.finalize(RuleResult::<()>::Failed).unwrap_err();
    assert_eq!(err.message, r#"Line 1, column 1: Expected "ac" but "a" found."#);
}

#[test]
fn unconsumed_input_expects_eof() {
    // an abandoned alternative fails at offset 1, the start rule matches "abc"
    let mut ctx = ParseContext::new("abcde");
    let start = ctx.checkpoint();
    assert!(ctx.match_literal("a", &lit("a"), false).is_matched());
    assert!(ctx.match_literal("x", &lit("x"), false).is_failed());
    ctx.rewind(start);
    assert!(ctx.match_literal("abc", &lit("abc"), false).is_matched());

    let err = ctx.finalize(RuleResult::Matched("abc")).unwrap_err();
    assert_eq!(err.location.start().offset, 3);
    assert_eq!(err.expected.len(), 1);
    assert_eq!(err.expected.iter().next().map(|e| e.kind), Some(ExpectedKind::Eof));
    assert_eq!(err.found, Some('d'));
    assert_eq!(err.message, r#"Line 1, column 4: Expected end of input but "d" found."#);
}

/// Two alternatives of one rule: the first fails after two characters, the
/// second after four.
fn alternatives(ctx: &mut ParseContext<'_>, order: [usize; 2]) -> RuleResult<()> {
    let start = ctx.checkpoint();
    for alt in order {
        let (prefix, next) = match alt {
            0 => ("ab", "X"),
            _ => ("abcd", "Y"),
        };
        if ctx.match_literal(prefix, &lit(prefix), false).is_matched()
            && ctx.match_literal(next, &lit(next), false).is_matched()
        {
            return RuleResult::Matched(());
        }
        ctx.rewind(start);
    }
    RuleResult::Failed
}

#[test]
fn deepest_alternative_reported_in_any_order() {
    for order in [[0, 1], [1, 0]] {
        let mut ctx = ParseContext::new("abcdef");
        assert!(alternatives(&mut ctx, order).is_failed());
        assert_eq!(ctx.position().offset, 0);

        let err = ctx.finalize(RuleResult::<()>::Failed).unwrap_err();
        assert_eq!(err.location.start().offset, 4, "order {:?}", order);
        assert_eq!(err.expected.tokens().collect::<Vec<_>>(), vec!["\"Y\""]);
        assert_eq!(err.message, r#"Line 1, column 5: Expected "Y" but "e" found."#);
    }
}

#[test]
fn candidates_always_at_farthest() {
    let input = "0123456789";
    let mut ctx = ParseContext::new(input);
    let mut last = 0;
    // cursor offsets to fail at, in the order a backtracking parser might visit them
    for (i, offset) in [2, 5, 1, 5, 7, 3, 7, 7, 0, 6].into_iter().enumerate() {
        let mut pos = Position::new();
        pos.advance_to(ctx.input(), offset);
        ctx.rewind(pos);
        let digit = Expected::pattern(format!("d{}", i), format!("digit {}", i));
        assert!(ctx.match_pattern(|c| c.is_alphabetic(), &digit, false).is_failed());

        let farthest = ctx.errors().farthest().offset;
        assert!(farthest >= last);
        last = farthest;
    }
    assert_eq!(last, 7);

    // only the failures at offset 7, in the order they were hit
    let held: Vec<_> = ctx
        .errors()
        .candidates()
        .iter()
        .map(|e| e.description.to_string())
        .collect();
    assert_eq!(held, vec!["digit 4", "digit 6", "digit 7"]);
}

#[test]
fn accessors_are_idempotent() {
    let mut ctx = ParseContext::new("key = value");
    ctx.mark_here();
    assert!(ctx.match_literal("key", &lit("key"), false).is_matched());

    let (loc1, loc2) = (ctx.location(), ctx.location());
    assert_eq!(loc1, loc2);
    assert_eq!(ctx.text(), ctx.text());
    assert_eq!(ctx.text(), "key");
}

#[rstest]
#[case("a\r\nb", 2, 2)]
#[case("a\r\rb", 3, 2)]
#[case("a\n\rb", 3, 2)]
#[case("a\nb\r", 3, 1)]
fn line_breaks(#[case] text: &str, #[case] line: usize, #[case] column: usize) {
    let mut ctx = ParseContext::new(text);
    while ctx.match_any().is_matched() {}
    assert_eq!((ctx.position().line, ctx.position().column), (line, column));

    // the same run consumed by one literal, from a byte input
    let mut ctx = ParseContext::new(text.as_bytes());
    assert!(ctx.match_literal(text, &lit(text), false).is_matched());
    assert_eq!((ctx.position().line, ctx.position().column), (line, column));
}

#[test]
fn error_position_on_later_line() {
    let mut ctx = ParseContext::new("aa\r\naaaa\r\naaab\r\naa");
    loop {
        let a = ctx.match_literal("a", &lit("a"), false);
        let nl = a.is_failed() && ctx.match_literal("\r\n", &lit("\r\n"), false).is_matched();
        if a.is_failed() && !nl {
            break;
        }
    }
    let err = ctx.finalize(RuleResult::Matched(())).unwrap_err();
    assert_eq!(err.location.start().line, 3);
    assert_eq!(err.location.start().column, 4);
    assert_eq!(
        err.message,
        r#"Line 3, column 4: Expected "\r\n", "a", or end of input but "b" found."#
    );
}

#[test]
fn first_recorded_descriptor_reported() {
    let mut ctx = ParseContext::new("z");
    let _: RuleResult<()> = ctx.fail(&Expected::custom("digit"));
    let _: RuleResult<()> = ctx.fail(&Expected::rule("digit"));

    let err = ctx.finalize(RuleResult::<()>::Failed).unwrap_err();
    let kinds: Vec<_> = err.expected.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![ExpectedKind::Custom]);
    assert_eq!(err.message, r#"Line 1, column 1: Expected digit but "z" found."#);
}
