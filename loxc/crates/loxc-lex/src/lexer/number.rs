//! Number literal lexing.
//!
//! A number is a run of ASCII digits, optionally followed by `.` and at
//! least one more digit. There are no signs, exponents or radix prefixes.

use super::Scanner;
use crate::chars::is_digit;
use crate::token::{Literal, Token, TokenKind};

impl<'a> Scanner<'a> {
    /// Lexes a number literal. The first digit has been consumed.
    ///
    /// A trailing `.` with no digit after it is not part of the number, so
    /// `123.` scans as a number followed by a dot.
    pub(crate) fn lex_number(&mut self) -> Token {
        self.cursor.eat_while(is_digit);

        if self.cursor.peek() == '.' && is_digit(self.cursor.peek_next()) {
            self.cursor.advance();
            self.cursor.eat_while(is_digit);
        }

        // Digits with at most one inner dot always parse.
        let value = self.cursor.lexeme().parse::<f64>().unwrap_or_default();
        self.make_literal_token(TokenKind::Number, Some(Literal::Number(value)))
    }
}
