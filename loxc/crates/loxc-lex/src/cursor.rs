//! Character cursor for traversing source code.
//!
//! The cursor owns the three pieces of scanning state: `start` (first byte
//! of the lexeme being scanned), `current` (next unread byte) and `line`.
//! It also keeps the column, and the line/column at which the current
//! lexeme started, so every token and diagnostic can be given a [`Span`].
//!
//! Invariant: `0 <= start <= current <= source.len()`, both on UTF-8
//! character boundaries; `line` grows by exactly one per `\n` consumed.

use loxc_util::Span;

/// A cursor over Lox source text.
///
/// # Example
///
/// ```
/// use loxc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("var x;");
/// cursor.mark_start();
/// assert_eq!(cursor.advance(), 'v');
/// assert_eq!(cursor.peek(), 'a');
/// assert_eq!(cursor.lexeme(), "v");
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Byte offset of the first character of the current lexeme.
    start: usize,

    /// Byte offset of the next unread character.
    current: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,

    /// Line on which the current lexeme starts.
    start_line: u32,

    /// Column at which the current lexeme starts.
    start_column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned before the first character.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
            column: 1,
            start_line: 1,
            start_column: 1,
        }
    }

    /// Begins a new lexeme at the current position.
    #[inline]
    pub fn mark_start(&mut self) {
        self.start = self.current;
        self.start_line = self.line;
        self.start_column = self.column;
    }

    /// Returns the next unread character without consuming it.
    ///
    /// Returns `'\0'` at the end of the source.
    #[inline]
    pub fn peek(&self) -> char {
        self.remaining().chars().next().unwrap_or('\0')
    }

    /// Returns the character after [`peek`](Self::peek), or `'\0'`.
    #[inline]
    pub fn peek_next(&self) -> char {
        let mut chars = self.remaining().chars();
        chars.next();
        chars.next().unwrap_or('\0')
    }

    /// Consumes and returns the next character.
    ///
    /// Updates line and column tracking. Returns `'\0'` without moving when
    /// already at the end.
    pub fn advance(&mut self) -> char {
        let Some(c) = self.remaining().chars().next() else {
            return '\0';
        };

        self.current += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    /// Consumes the next character if it is `expected`.
    ///
    /// ```
    /// use loxc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("==");
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('!'));
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// ```
    #[inline]
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.peek() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `predicate` holds for the next one.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.peek()) {
            self.advance();
        }
    }

    /// Returns true if every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Byte offset of the next unread character.
    #[inline]
    pub fn position(&self) -> usize {
        self.current
    }

    /// Byte offset at which the current lexeme starts.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Line on which the current lexeme starts.
    #[inline]
    pub fn start_line(&self) -> u32 {
        self.start_line
    }

    /// Text of the current lexeme, `source[start..current]`.
    #[inline]
    pub fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    /// Span of the current lexeme.
    #[inline]
    pub fn span(&self) -> Span {
        Span::new(self.start, self.current, self.start_line, self.start_column)
    }

    /// Empty span at the current position.
    #[inline]
    pub fn here(&self) -> Span {
        Span::new(self.current, self.current, self.line, self.column)
    }

    /// Unread part of the source.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.current..]
    }

    /// The full source text.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }
}
