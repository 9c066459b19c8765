//! Error types for loxc-util.

use thiserror::Error;

/// Error type for source file lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceMapError {
    /// Span whose start lies after its end
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan { start: usize, end: usize },

    /// Span reaching past the end of the file
    #[error("Span out of bounds: file has {file_len} bytes, span is {span_start}..{span_end}")]
    SpanOutOfBounds {
        file_len: usize,
        span_start: usize,
        span_end: usize,
    },

    /// Span boundary that splits a UTF-8 sequence
    #[error("Span {start}..{end} is not on character boundaries")]
    NotCharBoundary { start: usize, end: usize },

    /// Line number outside `1..=max_lines`
    #[error("Invalid line number: {line} (file has {max_lines} lines)")]
    InvalidLineNumber { line: usize, max_lines: usize },
}

/// Result type alias for source file operations
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SourceMapError::InvalidSpan { start: 5, end: 2 };
        assert_eq!(err.to_string(), "Invalid span: start 5 > end 2");

        let err = SourceMapError::InvalidLineNumber { line: 9, max_lines: 3 };
        assert_eq!(err.to_string(), "Invalid line number: 9 (file has 3 lines)");
    }
}
