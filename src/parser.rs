use crate::cursor::Cursor;
use crate::error::Failure;
use log::{debug, trace};

/// What every parser returns
///
/// `Ok` carries the value and the cursor just past the consumed input,
/// `Err` carries the mismatch.
pub type ParseResult<'code, T> = Result<(T, Cursor<'code>), Failure<'code>>;

/// Core parser trait for parser combinators
///
/// A parser is a pure function of its cursor: it holds no state between calls
/// and the same value may be invoked any number of times, at any position and
/// from several threads at once. A mismatch is always an `Err`, never a panic.
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// On success the returned cursor is never behind the one passed in.
    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output>;
}

/// Plain functions and closures are parsers
impl<'code, F, T> Parser<'code> for F
where
    F: Fn(Cursor<'code>) -> ParseResult<'code, T>,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, T> {
        self(cursor)
    }
}

/// Type-erased parser, mostly useful for recursive grammars
///
/// Closures already implement `Parser` through the blanket impl above, which
/// rules out a direct impl on `Box<dyn Parser>`; this wrapper fills that gap.
/// The boxed parser must be `Send + Sync` so grammars built from it can
/// still be shared between threads.
///
/// `'a` bounds what the boxed parser borrows. Grammars that hand out slices
/// of the input (`literal`, `identifier`, ...) mention `'code` in their type,
/// so for them `'a` can be at most `'code`: write
/// `BoxedParser<'code, 'code, T>`, not `BoxedParser<'static, 'code, T>`.
pub struct BoxedParser<'a, 'code, T> {
    inner: Box<dyn Parser<'code, Output = T> + Send + Sync + 'a>,
}

impl<'a, 'code, T> BoxedParser<'a, 'code, T> {
    pub fn new(parser: impl Parser<'code, Output = T> + Send + Sync + 'a) -> Self {
        BoxedParser {
            inner: Box::new(parser),
        }
    }
}

impl<'code, T> Parser<'code> for BoxedParser<'_, 'code, T> {
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, T> {
        self.inner.parse(cursor)
    }
}

/// Extension trait to erase a parser's concrete type
pub trait BoxedExt<'code>: Parser<'code> + Sized {
    fn boxed<'a>(self) -> BoxedParser<'a, 'code, Self::Output>
    where
        Self: Send + Sync + 'a,
    {
        BoxedParser::new(self)
    }
}

impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> {}

/// Run a parser against `input`, starting at position 0
pub fn run<'code, P>(parser: &P, input: &'code str) -> ParseResult<'code, P::Output>
where
    P: Parser<'code> + ?Sized,
{
    trace!("parsing {} bytes of input", input.len());
    let result = parser.parse(Cursor::new(input));
    if let Err(failure) = &result {
        debug!(
            "parse failed at position {}: expected {:?}",
            failure.position(),
            failure.expected()
        );
    }
    result
}
