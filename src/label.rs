use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser combinator that renames what a failing parser expected
///
/// The failure keeps its position, only the expected text changes. Handy on
/// top of `alt`, which otherwise reports only its last alternative.
#[derive(Debug, Clone)]
pub struct Label<P> {
    parser: P,
    expected: Cow<'static, str>,
}

impl<P> Label<P> {
    pub fn new(parser: P, expected: impl Into<Cow<'static, str>>) -> Self {
        Label {
            parser,
            expected: expected.into(),
        }
    }
}

impl<'code, P> Parser<'code> for Label<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        self.parser
            .parse(cursor)
            .map_err(|failure| failure.with_expected(self.expected.clone()))
    }
}

/// Extension trait to add .expecting() method support for parsers
pub trait LabelExt<'code>: Parser<'code> + Sized {
    fn expecting(self, expected: impl Into<Cow<'static, str>>) -> Label<Self> {
        Label::new(self, expected)
    }
}

/// Implement LabelExt for all parsers
impl<'code, P> LabelExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Label parser
pub fn label<'code, P>(parser: P, expected: impl Into<Cow<'static, str>>) -> Label<P>
where
    P: Parser<'code>,
{
    Label::new(parser, expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::digit;
    use crate::literal::literal;
    use crate::seq::seq;

    #[test]
    fn test_label_renames_failure() {
        let failure = digit().expecting("digit").parse(Cursor::new("x")).unwrap_err();
        assert_eq!(failure.expected(), "digit");
        assert_eq!(failure.position(), 0);
    }

    #[test]
    fn test_label_keeps_failure_position() {
        let parser = label(seq((literal("a"), literal("b"))), "ab");

        let failure = parser.parse(Cursor::new("ax")).unwrap_err();
        assert_eq!(failure.expected(), "ab");
        assert_eq!(failure.position(), 1);
    }

    #[test]
    fn test_label_leaves_success_alone() {
        let (value, cursor) = digit().expecting("digit").parse(Cursor::new("7")).unwrap();
        assert_eq!(value, "7");
        assert!(cursor.eos());
    }
}
