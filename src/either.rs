use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};
use either::Either;

/// Alternative over two parsers with different output types
///
/// `alt` needs one shared output type. When the two sides produce different
/// values, `either` tags the result with the side that matched instead of
/// forcing both through a hand-written enum. Backtracking and failure
/// reporting are the same as `alt`: the right side starts from the original
/// cursor and its failure is the one returned.
#[derive(Debug, Clone)]
pub struct EitherParser<L, R> {
    left: L,
    right: R,
}

impl<L, R> EitherParser<L, R> {
    pub fn new(left: L, right: R) -> Self {
        EitherParser { left, right }
    }
}

impl<'code, L, R> Parser<'code> for EitherParser<L, R>
where
    L: Parser<'code>,
    R: Parser<'code>,
{
    type Output = Either<L::Output, R::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.left.parse(cursor) {
            Ok((value, cursor)) => Ok((Either::Left(value), cursor)),
            Err(_) => {
                let (value, cursor) = self.right.parse(cursor)?;
                Ok((Either::Right(value), cursor))
            }
        }
    }
}

/// Convenience function to create an EitherParser
pub fn either<'code, L, R>(left: L, right: R) -> EitherParser<L, R>
where
    L: Parser<'code>,
    R: Parser<'code>,
{
    EitherParser::new(left, right)
}
