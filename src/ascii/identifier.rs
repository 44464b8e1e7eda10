use crate::any::any;
use crate::filter::FilterExt;
use crate::many::many;
use crate::map::MapExt;
use crate::parser::Parser;
use crate::position::PositionExt;
use crate::seq::seq;

/// Parser for an ASCII identifier: a letter or `_`, then letters, digits or `_`
pub fn identifier<'code>() -> impl Parser<'code, Output = &'code str> {
    let head = any().filter(|c| c.is_ascii_alphabetic() || *c == '_', "identifier");
    let tail = many(any().filter(|c| c.is_ascii_alphanumeric() || *c == '_', "identifier"));

    seq((head, tail))
        .with_position()
        .map(|(_, span)| span.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;

    #[test]
    fn test_identifier_simple() {
        let (name, cursor) = identifier().parse(Cursor::new("x = 1")).unwrap();
        assert_eq!(name, "x");
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_identifier_mixed() {
        let (name, cursor) = identifier().parse(Cursor::new("_tmp42+")).unwrap();
        assert_eq!(name, "_tmp42");
        assert_eq!(cursor.peek(), Some('+'));
    }

    #[test]
    fn test_identifier_cannot_start_with_digit() {
        let failure = identifier().parse(Cursor::new("9lives")).unwrap_err();
        assert_eq!(failure.expected(), "identifier");
        assert_eq!(failure.position(), 0);
    }

    #[test]
    fn test_identifier_empty_input() {
        let failure = identifier().parse(Cursor::new("")).unwrap_err();
        assert_eq!(failure.expected(), "anything");
    }
}
