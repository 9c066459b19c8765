//! Lexer module.
//!
//! The scanner is split by lexeme family:
//! - `core` - `Scanner` struct, main loop and first-character dispatch
//! - `operator` - one- and two-character operators
//! - `comment` - line comments
//! - `string` - string literals
//! - `number` - number literals
//! - `identifier` - identifiers and keywords

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Scanner;
