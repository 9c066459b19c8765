//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! A phase never prints or aborts on bad input. It emits a [`Diagnostic`]
//! into a [`Handler`] and keeps going; the caller inspects the handler
//! afterwards and decides what to show and which exit status to use.
//!
//! # Examples
//!
//! ```
//! use loxc_util::diagnostic::Handler;
//!
//! let handler = Handler::new();
//! handler.report(3, "Unexpected character '#'.");
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.diagnostics()[0].to_string(), "[line 3] Error: Unexpected character '#'.");
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::{DiagnosticCode, E_LEXER_UNEXPECTED_CHAR, E_LEXER_UNTERMINATED_STRING};

use crate::Span;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;

/// Diagnostic severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// An error; the input is rejected
    Error,
    /// A warning that doesn't reject the input
    Warning,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl Level {
    /// Capitalized name used in the `[line N] Error: ...` report format
    pub fn title(&self) -> &'static str {
        match self {
            Level::Error => "Error",
            Level::Warning => "Warning",
            Level::Note => "Note",
            Level::Help => "Help",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Line the diagnostic points at (1-based, 0 when unknown)
    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// Returns true for [`Level::Error`]
    #[inline]
    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }
}

/// `[line N] Error: message`
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[line {}] {}: {}",
            self.span.line,
            self.level.title(),
            self.message
        )
    }
}

/// Handler for collecting diagnostics
///
/// Emitting only needs `&self`, so a phase can hold a shared borrow of the
/// handler for as long as it runs. The handler is deliberately not `Sync`.
///
/// # Examples
///
/// ```
/// use loxc_util::diagnostic::{Diagnostic, DiagnosticBuilder, Handler, Level};
/// use loxc_util::Span;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("bad", Span::point(2, 1)));
/// DiagnosticBuilder::new(Level::Warning, "odd")
///     .span(Span::point(5, 1))
///     .emit(&handler);
///
/// assert_eq!(handler.error_count(), 1);
/// assert_eq!(handler.warning_count(), 1);
/// ```
pub struct Handler {
    /// Collected diagnostics, in emission order
    diagnostics: RefCell<Vec<Diagnostic>>,
    /// Whether to panic on errors (for testing)
    panic_on_error: bool,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: false,
        }
    }

    /// Create a handler that panics on the first error, for tests that
    /// must see clean input
    pub fn new_panicking() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: true,
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        if self.panic_on_error && diagnostic.is_error() {
            panic!("Diagnostic error: {}", diagnostic);
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Report an error that only knows its line.
    pub fn report(&self, line: u32, message: impl Into<String>) {
        self.emit_diagnostic(Diagnostic::error(message, Span::point(line, 0)));
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(Diagnostic::is_error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.count(Level::Error)
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.count(Level::Warning)
    }

    fn count(&self, level: Level) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    /// Get a copy of all diagnostics, in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Messages grouped by line, each line's messages in emission order.
    pub fn messages_by_line(&self) -> BTreeMap<u32, Vec<String>> {
        let mut by_line: BTreeMap<u32, Vec<String>> = BTreeMap::new();
        for diag in self.diagnostics.borrow().iter() {
            by_line
                .entry(diag.line())
                .or_default()
                .push(diag.message.clone());
        }
        by_line
    }

    /// Remove and return all diagnostics
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }

    /// Clear all diagnostics
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("diagnostics", &self.diagnostics.borrow().len())
            .field("panic_on_error", &self.panic_on_error)
            .finish()
    }
}
