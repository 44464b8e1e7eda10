use crate::cursor::Cursor;
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadablePosition {
    pub line: usize,
    pub byte_offset: usize,
}

/// A location in the input where a parser gave up
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CodeLoc<'code> {
    code: &'code str,
    /// The byte offset in `code` where the failure is reported
    loc: usize,
}

impl<'code> CodeLoc<'code> {
    pub fn new(code: &'code str, loc: usize) -> Self {
        Self { code, loc }
    }

    pub fn position(&self) -> usize {
        self.loc
    }

    pub fn code(&self) -> &'code str {
        self.code
    }

    /// Calculate line number and byte offset within that line
    ///
    /// Byte offset instead of column: columns depend on tab width, wide
    /// characters and the terminal, the byte offset does not.
    pub fn readable_position(&self) -> ReadablePosition {
        let before = &self.code.as_bytes()[..self.loc.min(self.code.len())];
        let line = 1 + before.iter().filter(|&&b| b == b'\n').count();
        let line_start = before
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |i| i + 1);

        ReadablePosition {
            line,
            byte_offset: self.loc - line_start,
        }
    }

    /// Up to 2 lines before and after the failing line, with a pointer
    /// under the failing offset
    fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let first = pos.line.saturating_sub(2).max(1);
        let last = pos.line + 2;
        let mut lines = Vec::new();

        // `split` keeps the empty segment after a trailing newline, which is
        // where an end-of-input failure after a newline points
        for (index, content) in self.code.split('\n').enumerate() {
            let current_line = index + 1;
            if current_line < first {
                continue;
            }
            if current_line > last {
                break;
            }

            let prefix = if current_line == pos.line {
                format!("  > {} | ", current_line)
            } else {
                format!("    {} | ", current_line)
            };
            lines.push(format!("{}{}", prefix, content));

            if current_line == pos.line {
                let pointer_offset = prefix.len() + pos.byte_offset;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }
}

impl fmt::Display for CodeLoc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.readable_position();
        writeln!(
            f,
            "line {}, byte offset {} (absolute position: {})",
            pos.line, pos.byte_offset, self.loc
        )?;
        writeln!(f)?;
        for line in self.context_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// The one kind of parse error: the input did not match
///
/// `expected` describes what the failing parser was looking for and the
/// location says where it stopped. Where exactly that is depends on the
/// combinator that produced the failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected:?} at {loc}")]
pub struct Failure<'code> {
    expected: Cow<'static, str>,
    loc: CodeLoc<'code>,
}

impl<'code> Failure<'code> {
    /// Failure reported at the cursor's position
    pub fn new(expected: impl Into<Cow<'static, str>>, cursor: Cursor<'code>) -> Self {
        let (code, loc) = cursor.inner();
        Failure {
            expected: expected.into(),
            loc: CodeLoc::new(code, loc),
        }
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }

    pub fn position(&self) -> usize {
        self.loc.position()
    }

    pub fn loc(&self) -> CodeLoc<'code> {
        self.loc
    }

    /// Cursor at the reported failure position
    pub fn cursor(&self) -> Cursor<'code> {
        Cursor::at(self.loc.code(), self.loc.position())
    }

    /// Same location, different description
    pub fn with_expected(self, expected: impl Into<Cow<'static, str>>) -> Self {
        Failure {
            expected: expected.into(),
            loc: self.loc,
        }
    }
}
