//! Comment lexing.
//!
//! Lox has line comments only: `//` up to the end of the line.

use super::Scanner;
use crate::token::{Token, TokenKind};

impl<'a> Scanner<'a> {
    /// Lexes `/`, or skips a line comment when a second `/` follows.
    ///
    /// Returns `None` for a comment.
    pub(crate) fn lex_slash(&mut self) -> Option<Token> {
        if self.cursor.match_char('/') {
            self.skip_line_comment();
            None
        } else {
            Some(self.make_token(TokenKind::Slash))
        }
    }

    /// Skips to the end of the line.
    ///
    /// The newline itself is left for the main loop so that line counting
    /// happens in one place.
    pub(crate) fn skip_line_comment(&mut self) {
        self.cursor.eat_while(|c| c != '\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loxc_util::Handler;

    #[test]
    fn test_lone_slash() {
        let handler = Handler::new();
        let mut scanner = Scanner::new("/ 2", &handler);
        scanner.cursor.mark_start();
        scanner.cursor.advance();

        let token = scanner.lex_slash().unwrap();
        assert_eq!(token.kind, TokenKind::Slash);
        assert_eq!(token.lexeme, "/");
        assert_eq!(scanner.cursor.remaining(), " 2");
    }

    #[test]
    fn test_comment_stops_before_newline() {
        let handler = Handler::new();
        let mut scanner = Scanner::new("// note (with) \"stuff\"\nx", &handler);
        scanner.cursor.mark_start();
        scanner.cursor.advance();

        assert!(scanner.lex_slash().is_none());
        assert_eq!(scanner.cursor.remaining(), "\nx");
        assert_eq!(scanner.cursor.line(), 1);
    }

    #[test]
    fn test_comment_runs_to_end_of_source() {
        let handler = Handler::new();
        let mut scanner = Scanner::new("//é ünïcode", &handler);
        scanner.cursor.mark_start();
        scanner.cursor.advance();

        assert!(scanner.lex_slash().is_none());
        assert!(scanner.cursor.is_at_end());
        assert!(!handler.has_errors());
    }
}
