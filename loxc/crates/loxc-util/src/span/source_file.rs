//! A source file with a precomputed line table.
//!
//! Used by the driver to print the offending line under a diagnostic.

use std::sync::Arc;

use super::Span;
use crate::diagnostic::SourceSnippet;
use crate::error::{SourceMapError, SourceMapResult};

/// A source file with its content and line start offsets
///
/// # Examples
///
/// ```
/// use loxc_util::span::SourceFile;
///
/// let file = SourceFile::new("hello.lox", "print 1;\nprint 2;\n");
/// assert_eq!(file.name(), "hello.lox");
/// assert_eq!(file.line_at(2), Some("print 2;"));
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// File name (path or display name such as `<stdin>`)
    name: String,
    /// File content
    content: Arc<str>,
    /// Byte offset at which every line begins
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::compute_line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn compute_line_starts(content: &str) -> Arc<[usize]> {
        std::iter::once(0)
            .chain(content.match_indices('\n').map(|(i, _)| i + 1))
            .collect::<Vec<_>>()
            .into()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    ///
    /// A trailing newline opens one more (empty) line, matching how the
    /// scanner counts.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the text of a 1-based line without its line terminator.
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = *self.line_starts.get(line - 1)?;
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(self.content.len());

        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Extract the text between two byte offsets.
    pub fn extract_range(&self, start: usize, end: usize) -> SourceMapResult<&str> {
        if start > end {
            return Err(SourceMapError::InvalidSpan { start, end });
        }
        if end > self.content.len() {
            return Err(SourceMapError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: start,
                span_end: end,
            });
        }
        self.content
            .get(start..end)
            .ok_or(SourceMapError::NotCharBoundary { start, end })
    }

    /// Build a caret snippet for `span`.
    ///
    /// Spans running over several lines are underlined up to the end of
    /// their first line.
    pub fn snippet(&self, span: Span) -> SourceMapResult<SourceSnippet> {
        let line_number = span.line as usize;
        let line = self
            .line_at(line_number)
            .ok_or(SourceMapError::InvalidLineNumber {
                line: line_number,
                max_lines: self.line_count(),
            })?;

        let text = self.extract_range(span.start, span.end)?;
        let first_line = text.split('\n').next().unwrap_or_default();
        let start_column = span.column.max(1) as usize;
        let end_column = start_column + first_line.trim_end_matches('\r').chars().count();

        Ok(SourceSnippet::new(
            line,
            line_number,
            start_column,
            end_column,
        ))
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}
