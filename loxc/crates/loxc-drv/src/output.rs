//! Rendering of tokens and diagnostics.
//!
//! Tokens go to stdout, diagnostics to stderr. Both writers are passed in so
//! the session can be driven from tests.

use std::io::Write;

use loxc_lex::{Literal, Token};
use loxc_util::{Diagnostic, SourceFile};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::Result;

/// JSON view of a token.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    lexeme: &'a str,
    literal: Option<LiteralValue<'a>>,
    line: u32,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum LiteralValue<'a> {
    Number(f64),
    String(&'a str),
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        let literal = token.literal.as_ref().map(|literal| match literal {
            Literal::Number(n) => LiteralValue::Number(*n),
            Literal::String(s) => LiteralValue::String(s),
        });
        Self {
            kind: token.kind.as_str(),
            lexeme: &token.lexeme,
            literal,
            line: token.line,
        }
    }
}

/// Writes the token stream in the requested format.
pub fn write_tokens(out: &mut impl Write, tokens: &[Token], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for token in tokens {
                writeln!(out, "{}", token)?;
            }
        },
        OutputFormat::Json => {
            let records: Vec<TokenRecord<'_>> = tokens.iter().map(TokenRecord::from).collect();
            serde_json::to_writer_pretty(&mut *out, &records)?;
            writeln!(out)?;
        },
    }
    Ok(())
}

/// Writes diagnostics as `[line N] Error: message`.
///
/// With `show_snippets`, each one is followed by the offending source line
/// with the lexeme underlined, then any notes and help text.
pub fn write_diagnostics(
    err: &mut impl Write,
    file: &SourceFile,
    diagnostics: &[Diagnostic],
    show_snippets: bool,
) -> Result<()> {
    for diagnostic in diagnostics {
        writeln!(err, "{}", diagnostic)?;
        if !show_snippets {
            continue;
        }

        // Diagnostics without a usable span still get their headline.
        if let Ok(snippet) = file.snippet(diagnostic.span) {
            writeln!(err, "{}", snippet.format())?;
        }
        for note in &diagnostic.notes {
            writeln!(err, "    = note: {}", note)?;
        }
        for help in &diagnostic.helps {
            writeln!(err, "    = help: {}", help)?;
        }
    }
    Ok(())
}
