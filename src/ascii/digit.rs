use crate::alt::Alt;
use crate::literal::{LiteralParser, literal};

pub const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

pub type Digit = Alt<[LiteralParser; 10]>;

/// Parser that matches a single ASCII digit (0-9)
///
/// An alternative over the ten digit literals, so a mismatch reports `"9"`.
pub fn digit() -> Digit {
    Alt::new(DIGITS.map(literal))
}
