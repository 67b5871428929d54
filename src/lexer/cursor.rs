//! Read position over the source buffer and the character classifier.
//!
//! The cursor walks the source one `char` at a time. `index` is a byte
//! offset so lexemes can be sliced straight out of the source; `row` and
//! `column` count characters and are 1-based.

use crate::Position;

#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    source: &'src str,
    index: usize,
    row: usize,
    column: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Cursor {
            source,
            index: 0,
            row: 1,
            column: 1,
        }
    }

    /// Character under the cursor, or `None` past the end.
    pub fn current(&self) -> Option<char> {
        self.source[self.index..].chars().next()
    }

    /// Character `k` positions ahead of the cursor. `peek(0)` is `current()`.
    pub fn peek(&self, k: usize) -> Option<char> {
        self.source[self.index..].chars().nth(k)
    }

    pub fn advance(&mut self) {
        let Some(c) = self.current() else {
            return;
        };

        if c == '\n' {
            self.row += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.index += c.len_utf8();
    }

    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Advances while `predicate` holds for the current character.
    pub fn eat_while(&mut self, predicate: impl Fn(Option<char>) -> bool) {
        while !self.at_eof() && predicate(self.current()) {
            self.advance();
        }
    }

    pub fn at_eof(&self) -> bool {
        self.index >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position {
            offset: self.index,
            row: self.row,
            column: self.column,
        }
    }

    /// Source text from byte `start` up to the cursor.
    pub fn slice_from(&self, start: usize) -> &'src str {
        &self.source[start..self.index]
    }
}

pub fn is_letter_or_underscore(c: Option<char>) -> bool {
    matches!(c, Some('a'..='z' | 'A'..='Z' | '_'))
}

pub fn is_digit(c: Option<char>) -> bool {
    matches!(c, Some('0'..='9'))
}

pub fn is_whitespace(c: Option<char>) -> bool {
    matches!(c, Some(' ' | '\t' | '\n' | '\r'))
}

pub fn is_name_continue(c: Option<char>) -> bool {
    is_letter_or_underscore(c) || is_digit(c)
}
