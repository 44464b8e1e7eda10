use crate::cursor::Cursor;
use crate::error::Failure;
use crate::parser::{ParseResult, Parser};

/// Parser that consumes and returns a single character
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyParser;

impl AnyParser {
    pub fn new() -> Self {
        AnyParser
    }
}

/// Convenience function to create an AnyParser
pub fn any() -> AnyParser {
    AnyParser::new()
}

impl<'code> Parser<'code> for AnyParser {
    type Output = char;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match cursor.peek() {
            Some(ch) => Ok((ch, cursor.advance(ch.len_utf8()))),
            None => Err(Failure::new("anything", cursor)),
        }
    }
}
