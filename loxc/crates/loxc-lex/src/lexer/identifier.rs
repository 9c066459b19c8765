//! Identifier and keyword lexing.

use super::Scanner;
use crate::chars::is_ident_continue;
use crate::token::{keyword_from_ident, Token, TokenKind};

impl<'a> Scanner<'a> {
    /// Lexes an identifier or keyword. The first character has been
    /// consumed.
    ///
    /// Takes the longest run of identifier characters, then looks the text
    /// up in the keyword table. Keywords carry no literal.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        self.cursor.eat_while(is_ident_continue);

        let kind = keyword_from_ident(self.cursor.lexeme()).unwrap_or(TokenKind::Identifier);
        self.make_token(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loxc_util::Handler;

    fn lex_ident(source: &str) -> Token {
        let handler = Handler::new();
        let mut scanner = Scanner::new(source, &handler);
        scanner.cursor.mark_start();
        scanner.cursor.advance();
        scanner.lex_identifier()
    }

    #[test]
    fn test_identifier() {
        let token = lex_ident("foo_bar42 rest");
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.lexeme, "foo_bar42");
        assert_eq!(token.literal, None);
    }

    #[test]
    fn test_underscore_start() {
        assert_eq!(lex_ident("_").kind, TokenKind::Identifier);
        assert_eq!(lex_ident("__init").lexeme, "__init");
    }

    #[test]
    fn test_keywords() {
        assert_eq!(lex_ident("and").kind, TokenKind::And);
        assert_eq!(lex_ident("class").kind, TokenKind::Class);
        assert_eq!(lex_ident("nil").kind, TokenKind::Nil);
        assert_eq!(lex_ident("while").kind, TokenKind::While);
        assert_eq!(lex_ident("and").literal, None);
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(lex_ident("andy").kind, TokenKind::Identifier);
        assert_eq!(lex_ident("orchid").kind, TokenKind::Identifier);
        assert_eq!(lex_ident("classy").lexeme, "classy");
    }

    #[test]
    fn test_keywords_case_sensitive() {
        assert_eq!(lex_ident("And").kind, TokenKind::Identifier);
        assert_eq!(lex_ident("NIL").kind, TokenKind::Identifier);
    }

    #[test]
    fn test_stops_at_non_ascii() {
        assert_eq!(lex_ident("caféx").lexeme, "caf");
    }
}
