use std::str::Chars;

/// Single-lookahead reader over the source text.
///
/// `current` is always the character not yet consumed; once the input is
/// exhausted it stays `None` and `advance` becomes a no-op. Lines are
/// 1-based; columns are 0-based and reset when a newline is consumed, so
/// before consuming the character at index `i` of a line, `column == i`.
pub struct CharacterStream<'a> {
    chars: Chars<'a>,
    current: Option<char>,
    line: usize,
    column: usize,
    offset: usize,
}

impl<'a> CharacterStream<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut chars = source.chars();
        let current = chars.next();
        Self {
            chars,
            current,
            line: 1,
            column: 0,
            offset: 0,
        }
    }

    /// The current character, without consuming it. `None` at end of input.
    pub fn peek(&self) -> Option<char> {
        self.current
    }

    /// Consume the current character and return the one after it.
    pub fn advance(&mut self) -> Option<char> {
        if let Some(c) = self.current {
            if c == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
            self.offset += c.len_utf8();
            self.current = self.chars.next();
        }
        self.current
    }

    pub fn eof(&self) -> bool {
        self.current.is_none()
    }

    /// `(line, column)` of the stream at the moment of the call.
    pub fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    /// Byte offset of the not-yet-consumed character.
    pub fn offset(&self) -> usize {
        self.offset
    }
}
