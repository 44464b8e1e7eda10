use super::integer::{digits, integer};
use crate::alt::alt;
use crate::cursor::Cursor;
use crate::error::Failure;
use crate::literal::literal;
use crate::map::MapExt;
use crate::parser::{ParseResult, Parser};
use crate::position::PositionExt;
use crate::seq::seq;

/// Parser for `digits.digits` (e.g. 23.34, 1.05)
///
/// The fractional digits are taken as written, leading zeros included.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalParser;

impl<'code> Parser<'code> for DecimalParser {
    type Output = f64;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let ((_, span), next) = seq((digits(), literal("."), digits()))
            .with_position()
            .parse(cursor)?;

        match span.as_str().parse::<f64>() {
            Ok(value) => Ok((value, next)),
            Err(_) => Err(Failure::new("decimal number", cursor)),
        }
    }
}

pub fn decimal() -> DecimalParser {
    DecimalParser
}

/// Parser that matches a decimal or a plain integer, as f64
///
/// The decimal form is tried first so `1.5` is not cut short at `1`.
pub fn float<'code>() -> impl Parser<'code, Output = f64> {
    alt((decimal(), integer().map(|n| n as f64)))
}
