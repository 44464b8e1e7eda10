use super::digit::digit;
use crate::cursor::Cursor;
use crate::error::Failure;
use crate::map::MapExt;
use crate::parser::{ParseResult, Parser};
use crate::position::PositionExt;
use crate::some::some;

/// Parser that matches one or more ASCII digits and returns them as written
pub fn digits<'code>() -> impl Parser<'code, Output = &'code str> {
    some(digit())
        .with_position()
        .map(|(_, span)| span.as_str())
}

/// Parser that matches one or more ASCII digits and returns them as a u64
pub fn integer() -> IntegerParser {
    IntegerParser
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerParser;

impl<'code> Parser<'code> for IntegerParser {
    type Output = u64;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (text, next) = digits().parse(cursor)?;

        match text.parse::<u64>() {
            Ok(value) => Ok((value, next)),
            Err(_) => Err(Failure::new("integer fitting in u64", cursor)),
        }
    }
}
