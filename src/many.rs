use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};
use log::debug;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// `Many` never fails. The failure that ends the repetition is dropped and the
/// cursor stays where the last successful match ended.
///
/// A match that consumes nothing also ends the repetition, and its value is
/// dropped, so a parser that can succeed without input (`succeed`, `many`,
/// `optional`, ...) does not loop forever.
#[derive(Debug, Clone)]
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

/// Push matches of `parser` onto `results` until it fails or stops advancing
pub(crate) fn repeat<'code, P>(
    parser: &P,
    mut cursor: Cursor<'code>,
    results: &mut Vec<P::Output>,
) -> Cursor<'code>
where
    P: Parser<'code>,
{
    // Many matches zero or more, so the terminating error is not propagated
    while let Ok((value, next_cursor)) = parser.parse(cursor) {
        if next_cursor.position() <= cursor.position() {
            debug!(
                "repetition stopped at {}: match consumed no input",
                cursor.position()
            );
            break;
        }
        results.push(value);
        cursor = next_cursor;
    }
    cursor
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();
        let cursor = repeat(&self.parser, cursor, &mut results);
        Ok((results, cursor))
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}
