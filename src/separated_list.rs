use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that matches a list of items separated by a parser
///
/// Parses zero or more items with `separator` between them and returns the
/// items. A separator that is not followed by an item is left unconsumed, so
/// the list never fails; the cursor ends after the last item.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!["a", "b", "c"]`
/// - `"1,2,"` with separator `,` → `vec![1, 2]`, cursor before the trailing `,`
#[derive(Debug, Clone)]
pub struct SeparatedList<P, S> {
    parser: P,
    separator: S,
}

impl<P, S> SeparatedList<P, S> {
    pub fn new(parser: P, separator: S) -> Self {
        SeparatedList { parser, separator }
    }
}

impl<'code, P, S> Parser<'code> for SeparatedList<P, S>
where
    P: Parser<'code>,
    S: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();

        let Ok((first_value, mut cursor)) = self.parser.parse(cursor) else {
            return Ok((results, cursor));
        };
        results.push(first_value);

        loop {
            let Ok((_, after_separator)) = self.separator.parse(cursor) else {
                break;
            };
            let Ok((value, next)) = self.parser.parse(after_separator) else {
                break;
            };
            if next.position() <= cursor.position() {
                break;
            }
            results.push(value);
            cursor = next;
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a SeparatedList parser
pub fn separated_list<'code, P, S>(parser: P, separator: S) -> SeparatedList<P, S>
where
    P: Parser<'code>,
    S: Parser<'code>,
{
    SeparatedList::new(parser, separator)
}
