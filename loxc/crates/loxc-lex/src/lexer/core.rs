//! Core scanner implementation.
//!
//! This module contains the `Scanner` struct, the scanning loop and the
//! dispatch on the first character of each lexeme.

use loxc_util::{DiagnosticBuilder, Handler};
use tracing::{debug, trace};

use crate::chars::{is_digit, is_ident_start, is_whitespace};
use crate::cursor::Cursor;
use crate::error::ScanError;
use crate::token::{Literal, Token, TokenKind};

/// Scanner for Lox source code.
///
/// Built once per source string and consumed by
/// [`scan_tokens`](Scanner::scan_tokens). Lexical errors go to the
/// [`Handler`]; they never stop the scan.
///
/// # Example
///
/// ```
/// use loxc_lex::{Scanner, TokenKind};
/// use loxc_util::Handler;
///
/// let handler = Handler::new();
/// let tokens = Scanner::new("print 1 <= 2;", &handler).scan_tokens();
///
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Print,
///         TokenKind::Number,
///         TokenKind::LessEqual,
///         TokenKind::Number,
///         TokenKind::Semicolon,
///         TokenKind::Eof,
///     ]
/// );
/// assert!(!handler.has_errors());
/// ```
pub struct Scanner<'a> {
    /// Position state over the source.
    pub(crate) cursor: Cursor<'a>,

    /// Receives lexical errors.
    handler: &'a Handler,

    /// Tokens scanned so far, in source order.
    tokens: Vec<Token>,

    /// Number of errors reported by this scan.
    errors: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over `source` reporting into `handler`.
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            tokens: Vec::new(),
            errors: 0,
        }
    }

    /// Scans the whole source.
    ///
    /// The returned vector always ends with exactly one
    /// [`TokenKind::Eof`] token, whether or not errors were reported.
    pub fn scan_tokens(mut self) -> Vec<Token> {
        debug!(bytes = self.cursor.source().len(), "scan started");

        while !self.cursor.is_at_end() {
            self.cursor.mark_start();
            if let Some(token) = self.scan_token() {
                trace!(line = token.line, token = %token, "token");
                self.tokens.push(token);
            }
        }

        self.tokens.push(Token::eof(self.cursor.here()));

        debug!(
            tokens = self.tokens.len(),
            errors = self.errors,
            lines = self.cursor.line(),
            "scan finished"
        );
        self.tokens
    }

    /// Consumes one lexeme starting at the cursor.
    ///
    /// Returns `None` for whitespace, comments and lexemes that were
    /// reported as errors.
    pub(crate) fn scan_token(&mut self) -> Option<Token> {
        let c = self.cursor.advance();
        match c {
            '(' => Some(self.make_token(TokenKind::LeftParen)),
            ')' => Some(self.make_token(TokenKind::RightParen)),
            '{' => Some(self.make_token(TokenKind::LeftBrace)),
            '}' => Some(self.make_token(TokenKind::RightBrace)),
            ',' => Some(self.make_token(TokenKind::Comma)),
            '.' => Some(self.make_token(TokenKind::Dot)),
            '-' => Some(self.make_token(TokenKind::Minus)),
            '+' => Some(self.make_token(TokenKind::Plus)),
            ';' => Some(self.make_token(TokenKind::Semicolon)),
            '*' => Some(self.make_token(TokenKind::Star)),
            '!' => Some(self.lex_bang()),
            '=' => Some(self.lex_equal()),
            '<' => Some(self.lex_less()),
            '>' => Some(self.lex_greater()),
            '/' => self.lex_slash(),
            '"' => self.lex_string(),
            c if is_whitespace(c) => None,
            c if is_digit(c) => Some(self.lex_number()),
            c if is_ident_start(c) => Some(self.lex_identifier()),
            c => {
                self.report_error(ScanError::UnexpectedCharacter(c));
                None
            },
        }
    }

    /// Builds a non-literal token from the current lexeme.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token {
        self.make_literal_token(kind, None)
    }

    /// Builds a token from the current lexeme.
    pub(crate) fn make_literal_token(&self, kind: TokenKind, literal: Option<Literal>) -> Token {
        Token::new(
            kind,
            self.cursor.lexeme(),
            literal,
            self.cursor.start_line(),
            self.cursor.span(),
        )
    }

    /// Reports a lexical error covering the current lexeme.
    pub(crate) fn report_error(&mut self, error: ScanError) {
        let span = self.cursor.span();
        debug!(line = span.line, column = span.column, %error, "lexical error");

        let mut builder = DiagnosticBuilder::error(error.to_string())
            .code(error.code())
            .span(span);
        if let Some(note) = error.note() {
            builder = builder.note(note);
        }
        if let Some(help) = error.help() {
            builder = builder.help(help);
        }
        builder.emit(self.handler);
        self.errors += 1;
    }
}
