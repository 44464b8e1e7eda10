use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Represents a span in the source with start and end byte offsets
/// and a reference to the source
///
/// `Span::new` orders and clamps the offsets, so a span always covers a
/// valid, possibly empty, range of its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'code> {
    source: &'code str,
    start: usize,
    end: usize,
}

impl<'code> Span<'code> {
    pub fn new(source: &'code str, start: usize, end: usize) -> Self {
        let end = end.min(source.len());
        let start = start.min(end);
        Span { source, start, end }
    }

    /// Reference to the source
    pub fn source(&self) -> &'code str {
        self.source
    }

    /// Start position (inclusive)
    pub fn start(&self) -> usize {
        self.start
    }

    /// End position (exclusive)
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The text this span covers, empty if an offset splits a character
    pub fn as_str(&self) -> &'code str {
        self.source.get(self.start..self.end).unwrap_or("")
    }
}

/// A parser combinator that captures the span of a successful parse
#[derive(Debug, Clone)]
pub struct Position<P> {
    parser: P,
}

impl<P> Position<P> {
    pub fn new(parser: P) -> Self {
        Position { parser }
    }
}

impl<'code, P> Parser<'code> for Position<P>
where
    P: Parser<'code>,
{
    type Output = (P::Output, Span<'code>);

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (output, next) = self.parser.parse(cursor)?;
        let span = Span::new(cursor.source(), cursor.position(), next.position());
        Ok(((output, span), next))
    }
}

/// Extension trait to add position tracking to any parser
pub trait PositionExt<'code>: Parser<'code> + Sized {
    /// Wrap this parser to capture its position span
    fn with_position(self) -> Position<Self> {
        Position::new(self)
    }
}

impl<'code, P> PositionExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Position combinator
pub fn position<P>(parser: P) -> Position<P> {
    Position::new(parser)
}
