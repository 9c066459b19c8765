//! Operator lexing.
//!
//! Handles the operators that may be followed by `=`: `!`, `=`, `<`, `>`.
//! Each takes the two-character form when it can (maximal munch).

use super::Scanner;
use crate::token::{Token, TokenKind};

impl<'a> Scanner<'a> {
    /// Lexes `!` or `!=`.
    pub(crate) fn lex_bang(&mut self) -> Token {
        self.lex_with_equal(TokenKind::BangEqual, TokenKind::Bang)
    }

    /// Lexes `=` or `==`.
    pub(crate) fn lex_equal(&mut self) -> Token {
        self.lex_with_equal(TokenKind::EqualEqual, TokenKind::Equal)
    }

    /// Lexes `<` or `<=`.
    pub(crate) fn lex_less(&mut self) -> Token {
        self.lex_with_equal(TokenKind::LessEqual, TokenKind::Less)
    }

    /// Lexes `>` or `>=`.
    pub(crate) fn lex_greater(&mut self) -> Token {
        self.lex_with_equal(TokenKind::GreaterEqual, TokenKind::Greater)
    }

    fn lex_with_equal(&mut self, with_equal: TokenKind, single: TokenKind) -> Token {
        let kind = if self.cursor.match_char('=') {
            with_equal
        } else {
            single
        };
        self.make_token(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loxc_util::Handler;

    fn lex_op(source: &str) -> (TokenKind, String) {
        let handler = Handler::new();
        let mut scanner = Scanner::new(source, &handler);
        scanner.cursor.mark_start();
        let token = match scanner.cursor.advance() {
            '!' => scanner.lex_bang(),
            '=' => scanner.lex_equal(),
            '<' => scanner.lex_less(),
            '>' => scanner.lex_greater(),
            c => panic!("not an operator: {c:?}"),
        };
        (token.kind, token.lexeme)
    }

    #[test]
    fn test_single_forms() {
        assert_eq!(lex_op("!"), (TokenKind::Bang, "!".to_string()));
        assert_eq!(lex_op("="), (TokenKind::Equal, "=".to_string()));
        assert_eq!(lex_op("<"), (TokenKind::Less, "<".to_string()));
        assert_eq!(lex_op(">"), (TokenKind::Greater, ">".to_string()));
    }

    #[test]
    fn test_two_character_forms() {
        assert_eq!(lex_op("!="), (TokenKind::BangEqual, "!=".to_string()));
        assert_eq!(lex_op("=="), (TokenKind::EqualEqual, "==".to_string()));
        assert_eq!(lex_op("<="), (TokenKind::LessEqual, "<=".to_string()));
        assert_eq!(lex_op(">="), (TokenKind::GreaterEqual, ">=".to_string()));
    }

    #[test]
    fn test_only_one_equal_is_taken() {
        assert_eq!(lex_op("==="), (TokenKind::EqualEqual, "==".to_string()));
        assert_eq!(lex_op("<=="), (TokenKind::LessEqual, "<=".to_string()));
    }

    #[test]
    fn test_equal_must_be_adjacent() {
        assert_eq!(lex_op("< ="), (TokenKind::Less, "<".to_string()));
        assert_eq!(lex_op("!\n="), (TokenKind::Bang, "!".to_string()));
    }
}
