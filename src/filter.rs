use crate::cursor::Cursor;
use crate::error::Failure;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that applies a predicate function to filter the output of another parser
///
/// A failure of the inner parser passes through unchanged. A rejected value
/// fails with `expected` at the position the inner parser started from.
#[derive(Debug, Clone)]
pub struct FilterParser<P, F> {
    parser: P,
    predicate: F,
    expected: Cow<'static, str>,
}

impl<P, F> FilterParser<P, F> {
    pub fn new(parser: P, predicate: F, expected: Cow<'static, str>) -> Self {
        Self {
            parser,
            predicate,
            expected,
        }
    }
}

impl<'code, P, F, T> Parser<'code> for FilterParser<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(&T) -> bool,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, next) = self.parser.parse(cursor)?;

        if (self.predicate)(&value) {
            Ok((value, next))
        } else {
            Err(Failure::new(self.expected.clone(), cursor))
        }
    }
}

/// Extension trait to add filter method to all parsers
pub trait FilterExt<'code>: Parser<'code> + Sized {
    fn filter<F>(self, predicate: F, expected: impl Into<Cow<'static, str>>) -> FilterParser<Self, F>
    where
        F: Fn(&Self::Output) -> bool,
    {
        FilterParser::new(self, predicate, expected.into())
    }
}

impl<'code, P: Parser<'code>> FilterExt<'code> for P {}

/// Convenience function to create a filtered parser
pub fn filter<'code, P, F>(
    parser: P,
    predicate: F,
    expected: impl Into<Cow<'static, str>>,
) -> FilterParser<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
{
    FilterParser::new(parser, predicate, expected.into())
}
