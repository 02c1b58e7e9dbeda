//! Character cursor over the source text.
//!
//! Positions are byte offsets; the cursor always rests on a character
//! boundary, so slicing between two positions it reported is valid.

#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Cursor { source, pos: 0 }
    }

    /// Character at the current position, `None` at end of input.
    #[inline]
    pub(crate) fn current(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Character after the current one.
    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        let mut chars = self.source[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Step past the current character. No-op at end of input.
    #[inline]
    pub(crate) fn advance(&mut self) {
        if let Some(c) = self.current() {
            self.pos += c.len_utf8();
        }
    }

    /// Advance while `pred` holds for the current character.
    pub(crate) fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// Jump to the end of input.
    pub(crate) fn skip_to_end(&mut self) {
        self.pos = self.source.len();
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Source text from `start` to the current position.
    #[inline]
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.pos]
    }

    /// Byte offset of the next `needle` at or after the current position.
    pub(crate) fn find(&self, needle: char) -> Option<usize> {
        self.source[self.pos..].find(needle).map(|i| self.pos + i)
    }

    /// Move to an absolute offset previously obtained from this cursor.
    pub(crate) fn set_pos(&mut self, pos: usize) {
        debug_assert!(self.source.is_char_boundary(pos));
        self.pos = pos;
    }
}
