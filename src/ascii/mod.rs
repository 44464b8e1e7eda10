//! Parsers for common ASCII lexical units, built only from the public combinators

use crate::alt::alt;
use crate::map::MapExt;
use crate::parser::Parser;

pub mod digit;
pub mod float;
pub mod identifier;
pub mod integer;
pub mod whitespace;

pub use digit::digit;
pub use float::{decimal, float};
pub use identifier::identifier;
pub use integer::{digits, integer};
pub use whitespace::{WHITESPACE, whitespace, whitespace_run};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(u64),
    Float(f64),
}

/// Parser that matches either a decimal or an integer and returns a Number enum
pub fn number<'code>() -> impl Parser<'code, Output = Number> {
    alt((decimal().map(Number::Float), integer().map(Number::Integer)))
}
