//! Span module - Source location tracking.
//!
//! A [`Span`] names a byte range of the source together with the line and
//! column of its first character. The scanner stamps one on every token and
//! every diagnostic; [`SourceFile`] turns it back into a printable line.
//!
//! # Examples
//!
//! ```
//! use loxc_util::span::Span;
//!
//! let span = Span::new(4, 7, 2, 1);
//! assert_eq!(span.len(), 3);
//! assert_eq!(span.text("var\nfun"), Some("fun"));
//! ```

mod source_file;

pub use source_file::SourceFile;

/// Source location span
///
/// - `start`/`end`: byte offsets, half-open `[start, end)`
/// - `line`/`column`: 1-based position of `start`, column counted in
///   characters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing and for diagnostics without a location
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create a span that only knows its line and column.
    ///
    /// ```
    /// use loxc_util::span::Span;
    ///
    /// let point = Span::point(3, 1);
    /// assert!(point.is_empty());
    /// assert_eq!(point.line, 3);
    /// ```
    #[inline]
    pub const fn point(line: u32, column: u32) -> Self {
        Self {
            start: 0,
            end: 0,
            line,
            column,
        }
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Slice the text this span covers out of `source`.
    ///
    /// Returns `None` when the span is out of bounds or does not fall on
    /// character boundaries.
    #[inline]
    pub fn text<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.start..self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_new() {
        let span = Span::new(10, 20, 1, 5);
        assert_eq!(span.start, 10);
        assert_eq!(span.end, 20);
        assert_eq!(span.line, 1);
        assert_eq!(span.column, 5);
    }

    #[test]
    fn test_span_point() {
        let span = Span::point(4, 2);
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
        assert_eq!(span.line, 4);
    }

    #[test]
    fn test_span_text() {
        let source = "print \"héllo\";";
        assert_eq!(Span::new(0, 5, 1, 1).text(source), Some("print"));
        assert_eq!(Span::new(6, 14, 1, 7).text(source), Some("\"héllo\""));
        // splits the two-byte 'é'
        assert_eq!(Span::new(6, 9, 1, 7).text(source), None);
        assert_eq!(Span::new(6, 99, 1, 7).text(source), None);
    }

    #[test]
    fn test_span_dummy_is_default() {
        assert_eq!(Span::default(), Span::DUMMY);
    }
}
