/// A position in a borrowed input string
///
/// The cursor pairs the whole input with a byte offset into it. The offset
/// always sits on a `char` boundary, so slicing at it never panics. Cursors
/// are `Copy`: saving one before a parse attempt and reusing it afterwards is
/// how every combinator backtracks.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cursor<'code> {
    source: &'code str,
    position: usize,
}

impl<'code> Cursor<'code> {
    /// Cursor at the start of `source`
    pub fn new(source: &'code str) -> Self {
        Cursor {
            source,
            position: 0,
        }
    }

    /// Cursor at byte offset `position` of `source`
    ///
    /// Offsets past the end are clamped to `source.len()`, offsets inside a
    /// multi-byte character are moved back to the start of that character.
    pub fn at(source: &'code str, position: usize) -> Self {
        let mut position = position.min(source.len());
        while !source.is_char_boundary(position) {
            position -= 1;
        }
        Cursor { source, position }
    }

    /// Byte offset into the source
    pub fn position(&self) -> usize {
        self.position
    }

    /// The whole input, independent of the current position
    pub fn source(&self) -> &'code str {
        self.source
    }

    /// The not yet consumed part of the input
    pub fn rest(&self) -> &'code str {
        &self.source[self.position..]
    }

    /// The character at the current position, `None` at end of input
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Move forward by `len` bytes, stopping at the end of input
    pub fn advance(self, len: usize) -> Self {
        Cursor::at(self.source, self.position.saturating_add(len))
    }

    /// Check if the cursor is at the end of the input
    pub fn eos(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consume the cursor and return the source and current position
    pub fn inner(self) -> (&'code str, usize) {
        (self.source, self.position)
    }
}
