//! Lexical errors.
//!
//! Neither error stops the scan. Each one is turned into a diagnostic with
//! a code and the span of the offending lexeme, handed to the
//! [`Handler`](loxc_util::Handler), and scanning resumes.

use loxc_util::DiagnosticCode;
use thiserror::Error;

/// A lexical error found while scanning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// A `"` was opened and the source ended before it was closed.
    #[error("Unterminated string.")]
    UnterminatedString,

    /// A character that starts no lexeme.
    #[error("Unexpected character {0:?}.")]
    UnexpectedCharacter(char),
}

impl ScanError {
    /// Diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            ScanError::UnterminatedString => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            ScanError::UnexpectedCharacter(_) => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
        }
    }

    /// Suggestion attached to the diagnostic.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ScanError::UnterminatedString => Some("add a closing '\"' before the end of the file"),
            ScanError::UnexpectedCharacter(_) => None,
        }
    }

    /// Names the code point of a character that does not print as itself.
    pub fn note(&self) -> Option<String> {
        match self {
            ScanError::UnexpectedCharacter(c) if !c.is_ascii_graphic() => {
                Some(format!("the character is U+{:04X}", u32::from(*c)))
            },
            _ => None,
        }
    }
}
