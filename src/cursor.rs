use crate::error::CodeLoc;

/// Immutable view over the input plus the current offset
///
/// A cursor is `Copy`: every successful match produces a new cursor and the
/// one it started from stays valid, so callers can retry alternatives from the
/// same starting point. `offset` is a byte index into `source` that always sits
/// on a character boundary and never exceeds `source.len()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'code> {
    source: &'code str,
    offset: usize,
}

impl<'code> Cursor<'code> {
    /// Create a cursor positioned at the start of `source`
    pub fn new(source: &'code str) -> Self {
        Cursor { source, offset: 0 }
    }

    /// Return up to `n` characters starting at the cursor without advancing
    ///
    /// Fewer than `n` characters (or none) are returned near the end of input.
    pub fn peek(&self, n: usize) -> &'code str {
        let rest = self.remaining();
        match rest.char_indices().nth(n) {
            Some((end, _)) => &rest[..end],
            None => rest,
        }
    }

    /// Return a new cursor `n` characters further on, stopping at the end of input
    pub fn advance(self, n: usize) -> Self {
        let step = self.peek(n).len();
        Cursor {
            source: self.source,
            offset: self.offset + step,
        }
    }

    /// The character under the cursor, if any input remains
    pub fn value(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Everything from the cursor to the end of input
    pub fn remaining(&self) -> &'code str {
        self.source.get(self.offset..).unwrap_or("")
    }

    /// Byte offset of the cursor into `source`
    pub fn position(&self) -> usize {
        self.offset
    }

    pub fn source(&self) -> &'code str {
        self.source
    }

    /// Check if the cursor is at the end of the input
    pub fn eos(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// The input consumed between `start` and this cursor
    pub fn consumed_since(&self, start: &Cursor<'code>) -> &'code str {
        self.source.get(start.offset..self.offset).unwrap_or("")
    }

    /// Location of the cursor for error reporting
    pub fn loc(&self) -> CodeLoc<'code> {
        CodeLoc::new(self.source, self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let cursor = Cursor::new("hello\nworld");

        assert_eq!(cursor.value(), Some('h'));

        let cursor = cursor.advance(1);
        assert_eq!(cursor.value(), Some('e'));
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_peek_does_not_advance() {
        let cursor = Cursor::new("abcdef");

        assert_eq!(cursor.peek(3), "abc");
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.peek(0), "");
    }

    #[test]
    fn test_peek_short_at_end() {
        let cursor = Cursor::new("ab").advance(1);

        assert_eq!(cursor.peek(5), "b");
        assert_eq!(cursor.advance(1).peek(5), "");
    }

    #[test]
    fn test_advance_clamps_to_end() {
        let cursor = Cursor::new("abc").advance(10);

        assert!(cursor.eos());
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.value(), None);

        let cursor = cursor.advance(1);
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_empty_data() {
        let cursor = Cursor::new("");

        assert!(cursor.eos());
        assert_eq!(cursor.value(), None);
        assert_eq!(cursor.peek(1), "");
    }

    #[test]
    fn test_multibyte_characters() {
        let cursor = Cursor::new("café🦀!");

        assert_eq!(cursor.peek(4), "café");

        let cursor = cursor.advance(4);
        assert_eq!(cursor.position(), 5);
        assert_eq!(cursor.value(), Some('🦀'));

        let cursor = cursor.advance(1);
        assert_eq!(cursor.value(), Some('!'));
        assert_eq!(cursor.position(), 9);
    }

    #[test]
    fn test_copy_independence() {
        let cursor = Cursor::new("abcd");

        let saved_at_a = cursor;
        let cursor = cursor.advance(1);
        assert_eq!(cursor.value(), Some('b'));

        // Saved copies are unaffected
        assert_eq!(saved_at_a.value(), Some('a'));

        let saved_at_b = cursor;
        let cursor = cursor.advance(1);
        assert_eq!(cursor.value(), Some('c'));

        // Saved copies can start new paths
        assert_eq!(saved_at_a.advance(1).value(), Some('b'));
        assert_eq!(saved_at_b.advance(1).value(), Some('c'));
    }

    #[test]
    fn test_consumed_since() {
        let start = Cursor::new("10.5 rest");
        let end = start.advance(4);

        assert_eq!(end.consumed_since(&start), "10.5");
        assert_eq!(start.consumed_since(&start), "");
    }

    #[test]
    fn test_loc_tracks_position() {
        let cursor = Cursor::new("ab\ncd").advance(3);
        let pos = cursor.loc().readable_position();

        assert_eq!(pos.line, 2);
        assert_eq!(pos.byte_offset, 0);
    }
}
