use crate::cursor::Cursor;
use crate::many::repeat;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that matches one or more occurrences of the given parser
///
/// The first match is required and its failure is returned as is. After that
/// it behaves like `many`, zero-advance guard included.
#[derive(Debug, Clone)]
pub struct Some<P> {
    parser: P,
}

impl<P> Some<P> {
    pub fn new(parser: P) -> Self {
        Some { parser }
    }
}

impl<'code, P> Parser<'code> for Some<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        // First parse must succeed
        let (first_value, cursor) = self.parser.parse(cursor)?;
        let mut results = vec![first_value];
        let cursor = repeat(&self.parser, cursor, &mut results);
        Ok((results, cursor))
    }
}

/// Convenience function to create a Some parser
pub fn some<'code, P>(parser: P) -> Some<P>
where
    P: Parser<'code>,
{
    Some::new(parser)
}
