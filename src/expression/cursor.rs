//! Character cursor with a two-slot lookahead window
//!
//! The grammar needs no tokenizer: every token is a single character, so the
//! parser reads straight from this cursor. `current` is the character being
//! examined and `next` the one after it; both become `None` past the end.

#[derive(Debug, Clone)]
pub(crate) struct Cursor {
    input: Vec<char>,
    /// Index of `current` in `input` (equals `input.len()` once exhausted)
    position: usize,
    current: Option<char>,
    next: Option<char>,
}

impl Cursor {
    pub(crate) fn new(input: &str) -> Self {
        let input: Vec<char> = input.chars().collect();
        let current = input.first().copied();
        let next = input.get(1).copied();
        Cursor {
            input,
            position: 0,
            current,
            next,
        }
    }

    pub(crate) fn current(&self) -> Option<char> {
        self.current
    }

    pub(crate) fn next(&self) -> Option<char> {
        self.next
    }

    /// Position of `current` in the input
    pub(crate) fn position(&self) -> usize {
        self.position
    }

    /// Shift `next` into `current` and load the following character into `next`
    pub(crate) fn advance(&mut self) {
        if self.position < self.input.len() {
            self.position += 1;
        }
        self.current = self.next;
        self.next = self.input.get(self.position + 1).copied();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_window() {
        let cursor = Cursor::new("a&b");
        assert_eq!(cursor.current(), Some('a'));
        assert_eq!(cursor.next(), Some('&'));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_advance_to_end() {
        let mut cursor = Cursor::new("ab");
        cursor.advance();
        assert_eq!(cursor.current(), Some('b'));
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.position(), 1);

        cursor.advance();
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.position(), 2);

        // Advancing past the end is idempotent
        cursor.advance();
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_empty_input() {
        let cursor = Cursor::new("");
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_single_character() {
        let cursor = Cursor::new("x");
        assert_eq!(cursor.current(), Some('x'));
        assert_eq!(cursor.next(), None);
    }
}
