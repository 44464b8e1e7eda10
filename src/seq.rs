use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// A fixed list of parsers that run one after the other
///
/// Implemented for tuples of 1 to 12 parsers. The output is the flat tuple of
/// every parser's output, in order, so element types stay known at compile
/// time.
pub trait Sequence<'code> {
    type Output;

    fn parse_sequence(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output>;
}

macro_rules! impl_sequence {
    ($($parser:ident),+) => {
        impl<'code, $($parser),+> Sequence<'code> for ($($parser,)+)
        where
            $($parser: Parser<'code>,)+
        {
            type Output = ($($parser::Output,)+);

            #[allow(non_snake_case)]
            fn parse_sequence(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
                let ($($parser,)+) = self;
                // Each binding shadows its parser with that parser's value
                $(let ($parser, cursor) = $parser.parse(cursor)?;)+
                Ok((($($parser,)+), cursor))
            }
        }
    };
}

impl_sequence!(P1);
impl_sequence!(P1, P2);
impl_sequence!(P1, P2, P3);
impl_sequence!(P1, P2, P3, P4);
impl_sequence!(P1, P2, P3, P4, P5);
impl_sequence!(P1, P2, P3, P4, P5, P6);
impl_sequence!(P1, P2, P3, P4, P5, P6, P7);
impl_sequence!(P1, P2, P3, P4, P5, P6, P7, P8);
impl_sequence!(P1, P2, P3, P4, P5, P6, P7, P8, P9);
impl_sequence!(P1, P2, P3, P4, P5, P6, P7, P8, P9, P10);
impl_sequence!(P1, P2, P3, P4, P5, P6, P7, P8, P9, P10, P11);
impl_sequence!(P1, P2, P3, P4, P5, P6, P7, P8, P9, P10, P11, P12);

/// Parser combinator that runs parsers in order and returns all their results
///
/// Each parser starts where the previous one stopped. The first failure is
/// returned as is, with the failing parser's own position; there is no
/// backtracking inside a sequence.
///
/// Example:
/// ```
/// use strcomb::ascii::integer;
/// use strcomb::literal::literal;
/// use strcomb::parser::run;
/// use strcomb::seq::seq;
///
/// let ((int_part, dot, frac_part), cursor) =
///     run(&seq((integer(), literal("."), integer())), "123.456").unwrap();
/// assert_eq!(int_part, 123);
/// assert_eq!(dot, ".");
/// assert_eq!(frac_part, 456);
/// assert_eq!(cursor.position(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct Seq<S> {
    parsers: S,
}

impl<S> Seq<S> {
    pub fn new(parsers: S) -> Self {
        Seq { parsers }
    }
}

impl<'code, S> Parser<'code> for Seq<S>
where
    S: Sequence<'code>,
{
    type Output = S::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        self.parsers.parse_sequence(cursor)
    }
}

/// Convenience function to create a Seq parser from a tuple of parsers
pub fn seq<'code, S>(parsers: S) -> Seq<S>
where
    S: Sequence<'code>,
{
    Seq::new(parsers)
}

/// Extension trait to add .and() method support for parsers
///
/// `a.and(b)` is `seq((a, b))`. Chaining `.and()` nests the pairs, so for
/// more than two parsers prefer `seq` and its flat tuple.
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> Seq<(Self, P)>
    where
        P: Parser<'code>,
    {
        Seq::new((self, other))
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}
