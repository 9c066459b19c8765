//! Character classes of the Lox lexical grammar.
//!
//! Lox identifiers and numbers are ASCII-only. Any other character outside
//! a string literal or comment is an unexpected character.

/// `[0-9]`
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// `[A-Za-z_]`
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// `[A-Za-z0-9_]`
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Whitespace the scanner skips: space, tab, carriage return, newline.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ident_classes() {
        assert!(is_ident_start('a'));
        assert!(is_ident_start('Z'));
        assert!(is_ident_start('_'));
        assert!(!is_ident_start('1'));
        assert!(!is_ident_start('é'));
        assert!(is_ident_continue('9'));
        assert!(!is_ident_continue('-'));
    }

    #[test]
    fn test_digit_is_ascii_only() {
        assert!(is_digit('0'));
        assert!(!is_digit('٣'));
    }

    #[test]
    fn test_whitespace_excludes_unicode_spaces() {
        assert!(is_whitespace('\r'));
        assert!(!is_whitespace('\u{a0}'));
        assert!(!is_whitespace('\u{c}'));
    }
}
