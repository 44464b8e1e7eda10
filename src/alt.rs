use crate::cursor::Cursor;
use crate::error::Failure;
use crate::parser::{ParseResult, Parser};
use log::trace;

/// A list of parsers with a shared output type, tried in order
///
/// Implemented for tuples of 1 to 12 parsers, for arrays (including the empty
/// array) and for `Vec`. Every alternative starts from the same cursor. When
/// all of them fail the last failure is returned unchanged, and an empty list
/// fails with an empty expected text.
pub trait Alternatives<'code> {
    type Output;

    fn parse_alternatives(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output>;
}

macro_rules! impl_alternatives {
    ($first:ident $(, $rest:ident)*) => {
        impl<'code, $first, $($rest),*> Alternatives<'code> for ($first, $($rest,)*)
        where
            $first: Parser<'code>,
            $($rest: Parser<'code, Output = $first::Output>,)*
        {
            type Output = $first::Output;

            #[allow(non_snake_case)]
            fn parse_alternatives(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
                let ($first, $($rest,)*) = self;
                let result = $first.parse(cursor);
                $(
                    let result = match result {
                        Ok(success) => return Ok(success),
                        Err(_) => $rest.parse(cursor),
                    };
                )*
                result
            }
        }
    };
}

impl_alternatives!(P1);
impl_alternatives!(P1, P2);
impl_alternatives!(P1, P2, P3);
impl_alternatives!(P1, P2, P3, P4);
impl_alternatives!(P1, P2, P3, P4, P5);
impl_alternatives!(P1, P2, P3, P4, P5, P6);
impl_alternatives!(P1, P2, P3, P4, P5, P6, P7);
impl_alternatives!(P1, P2, P3, P4, P5, P6, P7, P8);
impl_alternatives!(P1, P2, P3, P4, P5, P6, P7, P8, P9);
impl_alternatives!(P1, P2, P3, P4, P5, P6, P7, P8, P9, P10);
impl_alternatives!(P1, P2, P3, P4, P5, P6, P7, P8, P9, P10, P11);
impl_alternatives!(P1, P2, P3, P4, P5, P6, P7, P8, P9, P10, P11, P12);

fn first_success<'code, P>(parsers: &[P], cursor: Cursor<'code>) -> ParseResult<'code, P::Output>
where
    P: Parser<'code>,
{
    let mut result = Err(Failure::new("", cursor));
    for parser in parsers {
        result = parser.parse(cursor);
        if result.is_ok() {
            break;
        }
    }
    result
}

impl<'code, P, const N: usize> Alternatives<'code> for [P; N]
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse_alternatives(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        first_success(self, cursor)
    }
}

impl<'code, P> Alternatives<'code> for Vec<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse_alternatives(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        first_success(self, cursor)
    }
}

/// Parser combinator that returns the first alternative that succeeds
///
/// Pure backtracking: whatever a failed alternative consumed is forgotten and
/// the next one starts from the original cursor. There is no furthest-failure
/// selection, the last alternative's failure is the one reported.
#[derive(Debug, Clone)]
pub struct Alt<A> {
    alternatives: A,
}

impl<A> Alt<A> {
    pub fn new(alternatives: A) -> Self {
        Alt { alternatives }
    }
}

impl<'code, A> Parser<'code> for Alt<A>
where
    A: Alternatives<'code>,
{
    type Output = A::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let result = self.alternatives.parse_alternatives(cursor);
        if let Err(failure) = &result {
            trace!(
                "no alternative matched at {}, last expected {:?}",
                cursor.position(),
                failure.expected()
            );
        }
        result
    }
}

/// Convenience function to create an Alt parser
pub fn alt<'code, A>(alternatives: A) -> Alt<A>
where
    A: Alternatives<'code>,
{
    Alt::new(alternatives)
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Alt<(Self, P)>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Alt::new((self, other))
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::{LiteralParser, literal};
    use crate::map::MapExt;
    use crate::seq::seq;
    use crate::succeed::succeed;

    #[test]
    fn test_alt_first_succeeds() {
        let cursor = Cursor::new("abc");
        let parser = alt((literal("a"), literal("b")));

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(value, "a");
        assert_eq!(cursor.peek(), Some('b'));
    }

    #[test]
    fn test_alt_second_succeeds() {
        let cursor = Cursor::new("bcd");
        let parser = alt((literal("a"), literal("b")));

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(value, "b");
        assert_eq!(cursor.peek(), Some('c'));
    }

    #[test]
    fn test_alt_reports_last_failure() {
        let parser = alt((literal("a"), literal("b"), literal("c")));

        let failure = parser.parse(Cursor::new("d")).unwrap_err();
        assert_eq!(failure.expected(), "c");
        assert_eq!(failure.position(), 0);
    }

    #[test]
    fn test_alt_backtracks_partial_consumption() {
        // The first alternative consumes "ab" before failing on "x"
        let abx = seq((literal("a"), literal("b"), literal("x"))).map(|_| "abx");
        let ab = seq((literal("a"), literal("b"))).map(|_| "ab");
        let parser = alt((abx, ab));

        let (value, cursor) = parser.parse(Cursor::new("abc")).unwrap();
        assert_eq!(value, "ab");
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_alt_last_failure_keeps_its_position() {
        let last = seq((literal("a"), literal("z"))).map(|(a, _)| a);
        let parser = alt((literal("q"), last));

        let failure = parser.parse(Cursor::new("ab")).unwrap_err();
        // Reported where the last alternative gave up, not where alt started
        assert_eq!(failure.expected(), "z");
        assert_eq!(failure.position(), 1);
    }

    #[test]
    fn test_alt_array() {
        let parser = alt(["x", "y", "z"].map(literal));

        let (value, cursor) = parser.parse(Cursor::new("zy")).unwrap();
        assert_eq!(value, "z");
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_alt_empty_array() {
        let parser = alt::<[LiteralParser; 0]>([]);

        let failure = parser.parse(Cursor::at("abc", 1)).unwrap_err();
        assert_eq!(failure.expected(), "");
        assert_eq!(failure.position(), 1);
    }

    #[test]
    fn test_alt_vec() {
        let keywords: Vec<_> = ["let", "fn", "if"].into_iter().map(literal).collect();
        let parser = alt(keywords);

        let (value, _) = parser.parse(Cursor::new("fn main")).unwrap();
        assert_eq!(value, "fn");

        let failure = parser.parse(Cursor::new("while")).unwrap_err();
        assert_eq!(failure.expected(), "if");
    }

    #[test]
    fn test_alt_empty_vec() {
        let parser = alt(Vec::<LiteralParser>::new());
        let failure = parser.parse(Cursor::new("")).unwrap_err();
        assert_eq!(failure.expected(), "");
        assert_eq!(failure.position(), 0);
    }

    #[test]
    fn test_alt_succeed_fallback() {
        let parser = alt((literal("-"), succeed("")));

        let (sign, cursor) = parser.parse(Cursor::new("5")).unwrap();
        assert_eq!(sign, "");
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_or_method_chain() {
        let parser = literal("a").or(literal("b")).or(literal("c"));

        let (value, cursor) = parser.parse(Cursor::new("c")).unwrap();
        assert_eq!(value, "c");
        assert!(cursor.eos());

        let failure = parser.parse(Cursor::new("d")).unwrap_err();
        assert_eq!(failure.expected(), "c");
    }
}
