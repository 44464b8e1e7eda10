use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking mutual recursion between parsers.
#[derive(Debug, Clone)]
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<'code, F, P> Parser<'code> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (self.factory)().parse(cursor)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'code, F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    Lazy::new(factory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alt::alt;
    use crate::ascii::integer;
    use crate::literal::literal;
    use crate::map::MapExt;
    use crate::parser::{BoxedExt, BoxedParser};
    use crate::seq::seq;

    #[test]
    fn test_lazy_basic() {
        let parser = lazy(|| literal("a"));

        let (output, remaining) = parser.parse(Cursor::new("aaaa")).unwrap();
        assert_eq!(output, "a");
        assert_eq!(remaining.position(), 1);
    }

    // nested := integer | "(" nested ")"
    fn nested<'code>() -> BoxedParser<'code, 'code, u64> {
        alt((
            integer().boxed(),
            seq((literal("("), lazy(nested), literal(")")))
                .map(|(_, inner, _)| inner)
                .boxed(),
        ))
        .boxed()
    }

    #[test]
    fn test_lazy_recursion() {
        let (value, cursor) = nested().parse(Cursor::new("((7))")).unwrap();
        assert_eq!(value, 7);
        assert!(cursor.eos());
    }

    #[test]
    fn test_lazy_recursion_failure() {
        let failure = nested().parse(Cursor::new("((7)")).unwrap_err();
        assert_eq!(failure.expected(), ")");
        assert_eq!(failure.position(), 4);
    }
}
