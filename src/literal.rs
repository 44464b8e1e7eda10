use crate::cursor::Cursor;
use crate::error::Failure;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that matches an exact string at the cursor
///
/// On a mismatch nothing is consumed: the failure is reported at the
/// position the match was attempted from, with the literal itself as the
/// expected text.
#[derive(Debug, Clone)]
pub struct LiteralParser {
    expected: Cow<'static, str>,
}

impl LiteralParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }
}

impl<'code> Parser<'code> for LiteralParser {
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let rest = cursor.rest();
        if rest.starts_with(&*self.expected) {
            let len = self.expected.len();
            Ok((&rest[..len], cursor.advance(len)))
        } else {
            // Cloning is cheap for the usual `&'static str` literal
            Err(Failure::new(self.expected.clone(), cursor))
        }
    }
}

/// Convenience function to create a LiteralParser
pub fn literal(expected: impl Into<Cow<'static, str>>) -> LiteralParser {
    LiteralParser::new(expected)
}
