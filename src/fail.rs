use crate::cursor::Cursor;
use crate::error::Failure;
use crate::parser::{ParseResult, Parser};
use std::marker::PhantomData;

/// Parser that always fails at the cursor with an empty expected text
///
/// The absorbing element of `seq` and the neutral element of `alt`, and a
/// placeholder for grammar rules that are not written yet.
#[derive(Debug)]
pub struct FailParser<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> FailParser<T> {
    pub fn new() -> Self {
        FailParser {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for FailParser<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for FailParser<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<'code, T> Parser<'code> for FailParser<T> {
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        Err(Failure::new("", cursor))
    }
}

/// Convenience function to create a FailParser
pub fn fail<T>() -> FailParser<T> {
    FailParser::new()
}
