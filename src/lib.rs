//! # strcomb - Parser Combinators over Strings
//!
//! A small parser combinator library for building recursive-descent parsers
//! out of composable pieces instead of hand-writing one function per grammar
//! rule.
//!
//! Every parser follows the same contract: given a [`Cursor`] into borrowed
//! input it returns a [`ParseResult`], either the value and the cursor just
//! past what it consumed, or a [`Failure`] saying what it expected and where.
//! The library emphasizes:
//!
//! - **Failures are values**: a mismatch is an `Err`, never a panic
//! - **Explicit backtracking**: `alt` retries every alternative from the same
//!   cursor, `seq` never rewinds
//! - **Stateless parsers**: build once, run any number of times, from any
//!   number of threads
//!
//! ```
//! use strcomb::ascii::float;
//! use strcomb::{literal, run, seq, token};
//!
//! let statement = seq((
//!     token(literal("let")),
//!     token(literal("x")),
//!     token(literal("=")),
//!     token(float()),
//! ));
//!
//! let ((_, name, _, value), cursor) = run(&statement, "let x = 23.34").unwrap();
//! assert_eq!(name, "x");
//! assert_eq!(value, 23.34);
//! assert!(cursor.eos());
//! ```

pub mod alt;
pub mod any;
pub mod ascii;
pub mod cursor;
pub mod either;
pub mod error;
pub mod fail;
pub mod filter;
pub mod label;
pub mod lazy;
pub mod literal;
pub mod many;
pub mod map;
pub mod optional;
pub mod parser;
pub mod position;
pub mod scan;
pub mod separated_list;
pub mod seq;
pub mod some;
pub mod succeed;
pub mod token;

pub use alt::{Alt, Alternatives, OrExt, alt};
pub use any::any;
pub use cursor::Cursor;
pub use self::either::either;
pub use error::{CodeLoc, Failure};
pub use fail::fail;
pub use filter::{FilterExt, filter};
pub use label::{LabelExt, label};
pub use lazy::lazy;
pub use literal::literal;
pub use many::many;
pub use map::{MapExt, map};
pub use optional::optional;
pub use parser::{BoxedExt, BoxedParser, ParseResult, Parser, run};
pub use position::{PositionExt, Span, position};
pub use scan::{keyword, until_whitespace};
pub use separated_list::separated_list;
pub use seq::{AndExt, Seq, Sequence, seq};
pub use some::some;
pub use succeed::succeed;
pub use token::{TokenExt, token, token_with};
