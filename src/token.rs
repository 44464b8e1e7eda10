use crate::ascii::whitespace::{Whitespace, whitespace};
use crate::cursor::Cursor;
use crate::many::Many;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that absorbs the whitespace after a lexical unit
///
/// Runs `parser`, then skips every following match of the whitespace parser.
/// Only `parser`'s value is returned, the cursor ends after the whitespace.
/// A failure of `parser` is returned unchanged; the whitespace part cannot
/// fail.
#[derive(Debug, Clone)]
pub struct Token<P, W> {
    parser: P,
    trailing: Many<W>,
}

impl<P, W> Token<P, W> {
    pub fn new(parser: P, whitespace: W) -> Self {
        Token {
            parser,
            trailing: Many::new(whitespace),
        }
    }
}

impl<'code, P, W> Parser<'code> for Token<P, W>
where
    P: Parser<'code>,
    W: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        let (_, cursor) = self.trailing.parse(cursor)?;
        Ok((value, cursor))
    }
}

/// Token followed by ASCII whitespace (space, tab, newline, carriage return)
pub fn token<'code, P>(parser: P) -> Token<P, Whitespace>
where
    P: Parser<'code>,
{
    Token::new(parser, whitespace())
}

/// Token followed by whatever `whitespace` matches, e.g. whitespace and comments
pub fn token_with<'code, P, W>(parser: P, whitespace: W) -> Token<P, W>
where
    P: Parser<'code>,
    W: Parser<'code>,
{
    Token::new(parser, whitespace)
}

/// Extension trait to add .token() method support for parsers
pub trait TokenExt<'code>: Parser<'code> + Sized {
    fn token(self) -> Token<Self, Whitespace> {
        Token::new(self, whitespace())
    }
}

impl<'code, P> TokenExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alt::alt;
    use crate::ascii::integer;
    use crate::literal::literal;
    use crate::seq::seq;

    #[test]
    fn test_token_skips_trailing_whitespace() {
        let (value, cursor) = token(literal("let")).parse(Cursor::new("let \t\n x")).unwrap();
        assert_eq!(value, "let");
        assert_eq!(cursor.position(), 7);
        assert_eq!(cursor.peek(), Some('x'));
    }

    #[test]
    fn test_token_without_whitespace() {
        let (value, cursor) = token(literal("=")).parse(Cursor::new("=1")).unwrap();
        assert_eq!(value, "=");
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_token_at_end_of_input() {
        let (value, cursor) = token(integer()).parse(Cursor::new("12  ")).unwrap();
        assert_eq!(value, 12);
        assert!(cursor.eos());
    }

    #[test]
    fn test_token_leading_whitespace_not_skipped() {
        let failure = token(literal("x")).parse(Cursor::new(" x")).unwrap_err();
        assert_eq!(failure.expected(), "x");
        assert_eq!(failure.position(), 0);
    }

    #[test]
    fn test_token_sequence() {
        let parser = seq((literal("a").token(), literal("b").token()));

        let ((a, b), cursor) = parser.parse(Cursor::new("a  b ")).unwrap();
        assert_eq!((a, b), ("a", "b"));
        assert_eq!(cursor.position(), 5);
    }

    #[test]
    fn test_token_with_custom_whitespace() {
        let separator = alt((literal(" "), literal(",")));
        let parser = token_with(literal("x"), separator);

        let (_, cursor) = parser.parse(Cursor::new("x, ,y")).unwrap();
        assert_eq!(cursor.peek(), Some('y'));
    }
}
