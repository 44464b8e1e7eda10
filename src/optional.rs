use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that turns a failure into `None`
///
/// On failure the cursor is left where it was, so `optional` never fails and
/// never consumes input it did not match.
#[derive(Debug, Clone)]
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Output = Option<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Ok((value, next)) => Ok((Some(value), next)),
            Err(_) => Ok((None, cursor)),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
{
    Optional::new(parser)
}
