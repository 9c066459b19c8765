//! loxc-lex - Lexical Scanner for the Lox Language
//!
//! This crate turns Lox source text into the token vector consumed by the
//! parser. The whole source is scanned in one pass; lexical errors are
//! reported to a [`Handler`](loxc_util::Handler) and scanning carries on, so
//! a single run reports every bad character in the file.
//!
//! # Example Usage
//!
//! ```
//! use loxc_lex::{scan, Literal, TokenKind};
//! use loxc_util::Handler;
//!
//! let handler = Handler::new();
//! let tokens = scan("var greeting = \"hi\";", &handler);
//!
//! assert_eq!(tokens[0].kind, TokenKind::Var);
//! assert_eq!(tokens[1].lexeme, "greeting");
//! assert_eq!(tokens[3].literal, Some(Literal::String("hi".into())));
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - `Token`, `TokenKind`, `Literal` and the keyword table
//! - [`lexer`] - the `Scanner` and its per-lexeme submodules
//! - [`cursor`] - position tracking over the source
//! - [`chars`] - character classes
//! - [`error`] - lexical errors
//!
//! # Lexical Grammar
//!
//! - **Punctuation**: `(` `)` `{` `}` `,` `.` `-` `+` `;` `/` `*`
//! - **Operators**: `!` `!=` `=` `==` `<` `<=` `>` `>=` (longest match wins)
//! - **Strings**: `"..."`, may span lines, no escapes
//! - **Numbers**: `123`, `123.45`; a trailing `.` is a separate token
//! - **Identifiers**: `[A-Za-z_][A-Za-z0-9_]*`
//! - **Keywords**: `and class else false fun for if nil or print return
//!   super this true var while`
//! - **Comments**: `//` to end of line
//!
//! Every scan ends with exactly one `Eof` token.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::ScanError;
pub use lexer::Scanner;
pub use token::{keyword_from_ident, Literal, Token, TokenKind};

use loxc_util::Handler;

/// Scans `source` into tokens, reporting lexical errors to `handler`.
///
/// Shorthand for `Scanner::new(source, handler).scan_tokens()`.
pub fn scan(source: &str, handler: &Handler) -> Vec<Token> {
    Scanner::new(source, handler).scan_tokens()
}
