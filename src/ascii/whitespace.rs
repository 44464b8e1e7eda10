use crate::alt::Alt;
use crate::literal::{LiteralParser, literal};
use crate::many::{Many, many};

/// The whitespace characters skipped by `token` and the word scanner
pub const WHITESPACE: [&str; 4] = [" ", "\t", "\n", "\r"];

pub type Whitespace = Alt<[LiteralParser; 4]>;

/// Check a character against `WHITESPACE`
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Parser that matches a single ASCII whitespace character (space, tab, newline, carriage return)
pub fn whitespace() -> Whitespace {
    Alt::new(WHITESPACE.map(literal))
}

/// Parser that matches a possibly empty run of whitespace
pub fn whitespace_run() -> Many<Whitespace> {
    many(whitespace())
}
