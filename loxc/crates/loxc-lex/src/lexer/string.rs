//! String literal lexing.
//!
//! Strings are delimited by `"`, may span lines and have no escape
//! sequences. The literal value is the text between the quotes.

use super::Scanner;
use crate::error::ScanError;
use crate::token::{Literal, Token, TokenKind};

impl<'a> Scanner<'a> {
    /// Lexes a string literal. The opening quote has been consumed.
    ///
    /// Reports [`ScanError::UnterminatedString`] and returns `None` when the
    /// source ends before the closing quote. The error carries the line on
    /// which the string started.
    pub(crate) fn lex_string(&mut self) -> Option<Token> {
        self.cursor.eat_while(|c| c != '"');

        if self.cursor.is_at_end() {
            self.report_error(ScanError::UnterminatedString);
            return None;
        }

        // Closing quote.
        self.cursor.advance();

        let lexeme = self.cursor.lexeme();
        let value = &lexeme[1..lexeme.len() - 1];
        Some(self.make_literal_token(TokenKind::String, Some(Literal::String(value.to_string()))))
    }
}
