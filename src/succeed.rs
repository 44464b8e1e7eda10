use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser that always succeeds with a fixed value without consuming input
///
/// The neutral element of `seq`: `seq((succeed(v), p))` matches exactly
/// what `p` matches.
#[derive(Debug, Clone)]
pub struct SucceedParser<T> {
    value: T,
}

impl<T> SucceedParser<T> {
    pub fn new(value: T) -> Self {
        SucceedParser { value }
    }
}

impl<'code, T> Parser<'code> for SucceedParser<T>
where
    T: Clone,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok((self.value.clone(), cursor))
    }
}

/// Convenience function to create a SucceedParser
pub fn succeed<T: Clone>(value: T) -> SucceedParser<T> {
    SucceedParser::new(value)
}
