use crate::ascii::whitespace::is_whitespace;
use crate::cursor::Cursor;
use crate::error::Failure;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that reads a word up to the next whitespace and skips that whitespace
///
/// The word is everything from the cursor up to the first ASCII whitespace
/// character or the end of input, and is returned without the whitespace.
/// The end of input ends a word just like whitespace does. The cursor ends
/// after the whole whitespace run, including whitespace at the end of input.
///
/// An empty word (the cursor already at whitespace or at the end of input)
/// fails with `" "` as the expected text, at the cursor.
#[derive(Debug, Clone, Copy, Default)]
pub struct UntilWhitespace;

impl UntilWhitespace {
    pub fn new() -> Self {
        UntilWhitespace
    }
}

impl<'code> Parser<'code> for UntilWhitespace {
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let rest = cursor.rest();
        let word_len = rest.find(is_whitespace).unwrap_or(rest.len());
        if word_len == 0 {
            return Err(Failure::new(" ", cursor));
        }

        let after_word = &rest[word_len..];
        let space_len = after_word
            .find(|c| !is_whitespace(c))
            .unwrap_or(after_word.len());

        Ok((&rest[..word_len], cursor.advance(word_len + space_len)))
    }
}

/// Convenience function to create an UntilWhitespace parser
pub fn until_whitespace() -> UntilWhitespace {
    UntilWhitespace::new()
}

/// Parser that matches a whole whitespace-delimited word exactly
///
/// Unlike `literal`, `keyword("let")` does not match the start of `letter`.
/// On a match the cursor moves past the word and its trailing whitespace; on
/// a mismatch the failure names the keyword and points at the original
/// cursor, wherever the scan stopped.
#[derive(Debug, Clone)]
pub struct KeywordParser {
    expected: Cow<'static, str>,
}

impl KeywordParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        KeywordParser {
            expected: expected.into(),
        }
    }
}

impl<'code> Parser<'code> for KeywordParser {
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match UntilWhitespace.parse(cursor) {
            Ok((word, next)) if word == self.expected => Ok((word, next)),
            _ => Err(Failure::new(self.expected.clone(), cursor)),
        }
    }
}

/// Convenience function to create a KeywordParser
pub fn keyword(expected: impl Into<Cow<'static, str>>) -> KeywordParser {
    KeywordParser::new(expected)
}
