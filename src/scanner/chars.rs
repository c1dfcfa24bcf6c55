//! Forward-only character cursor over a text snapshot

use ropey::iter::Chars;
use ropey::Rope;

/// Cursor over the characters of a rope with one character of lookahead
/// and one of look-behind.
pub struct TextChars<'a> {
    text: &'a Rope,
    chars: Chars<'a>,
    current: Option<char>,
    lookahead: Option<char>,
    previous: Option<char>,
    position: usize,
}

impl<'a> TextChars<'a> {
    /// Cursor positioned at the first character
    pub fn new(text: &'a Rope) -> Self {
        Self::at(text, 0)
    }

    /// Cursor positioned at `offset` (clamped to the end of the text)
    pub fn at(text: &'a Rope, offset: usize) -> Self {
        let position = offset.min(text.len_chars());
        let mut chars = text.chars_at(position);
        let current = chars.next();
        let lookahead = chars.next();
        let previous = position.checked_sub(1).and_then(|p| text.get_char(p));
        Self {
            text,
            chars,
            current,
            lookahead,
            previous,
            position,
        }
    }

    /// Character under the cursor
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Character after the one under the cursor
    pub fn peek(&self) -> Option<char> {
        self.lookahead
    }

    /// Character `n` positions ahead (`peek_nth(1) == peek()`)
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        match n {
            0 => self.current,
            1 => self.lookahead,
            _ => self.text.get_char(self.position + n),
        }
    }

    /// Character just before the cursor
    pub fn previous(&self) -> Option<char> {
        self.previous
    }

    /// Absolute character offset of the cursor
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn at_end(&self) -> bool {
        self.current.is_none()
    }

    /// Move one character forward; no-op at the end
    pub fn advance(&mut self) {
        if self.current.is_none() {
            return;
        }
        self.previous = self.current;
        self.current = self.lookahead;
        self.lookahead = self.chars.next();
        self.position += 1;
    }

    /// Move `n` characters forward, stopping at the end
    pub fn skip(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Advance up to (not past) the next newline. Returns false when the
    /// text ended first.
    pub fn skip_to_line_end(&mut self) -> bool {
        while let Some(ch) = self.current {
            if ch == '\n' {
                return true;
            }
            self.advance();
        }
        false
    }
}
