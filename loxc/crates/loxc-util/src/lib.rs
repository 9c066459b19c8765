//! loxc-util - Core Utilities and Foundation Types
//!
//! This crate holds the types every loxc phase agrees on:
//!
//! - [`span`] - byte ranges with line/column information and the
//!   [`SourceFile`] line table used to render them
//! - [`diagnostic`] - error/warning records, diagnostic codes, the fluent
//!   [`DiagnosticBuilder`] and the [`Handler`] that collects everything a
//!   phase reports
//! - [`error`] - `thiserror` error enums for the utilities themselves
//!
//! # Example
//!
//! ```
//! use loxc_util::{DiagnosticBuilder, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("Unexpected character '@'.")
//!     .span(Span::new(4, 5, 1, 5))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.diagnostics()[0].line(), 1);
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet,
    E_LEXER_UNEXPECTED_CHAR, E_LEXER_UNTERMINATED_STRING,
};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{SourceFile, Span};
