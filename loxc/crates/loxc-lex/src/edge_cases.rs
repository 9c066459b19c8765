//! Edge case tests for loxc-lex

#[cfg(test)]
mod tests {
    use crate::{scan, Token, TokenKind};
    use loxc_util::Handler;

    fn scan_all(source: &str) -> (Vec<Token>, Handler) {
        let handler = Handler::new();
        let tokens = scan(source, &handler);
        (tokens, handler)
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        scan_all(source).0.iter().map(|t| t.kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_edge_single_char_ident() {
        let (t, _) = scan_all("x");
        assert_eq!(t[0].kind, TokenKind::Identifier);
        assert_eq!(t[0].lexeme, "x");
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let (t, _) = scan_all(&format!("var {} = 1;", name));
        assert_eq!(t[1].lexeme, name);
    }

    #[test]
    fn test_edge_all_keywords() {
        let source =
            "and class else false fun for if nil or print return super this true var while";
        let (t, handler) = scan_all(source);
        assert!(!handler.has_errors());
        assert_eq!(t.len(), 17);
        assert!(t[..16].iter().all(|t| t.kind.is_keyword() && t.literal.is_none()));
    }

    #[test]
    fn test_edge_case_sensitivity() {
        assert_eq!(
            kinds("Var VAR var")[..3],
            [TokenKind::Identifier, TokenKind::Identifier, TokenKind::Var]
        );
    }

    #[test]
    fn test_edge_operators_without_spaces() {
        assert_eq!(
            kinds("!!====<<=>>="),
            vec![
                TokenKind::Bang,
                TokenKind::BangEqual,
                TokenKind::EqualEqual,
                TokenKind::Equal,
                TokenKind::Less,
                TokenKind::LessEqual,
                TokenKind::Greater,
                TokenKind::GreaterEqual,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_edge_slash_before_comment() {
        assert_eq!(kinds("a / b // c / d"), vec![
            TokenKind::Identifier,
            TokenKind::Slash,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]);
    }

    #[test]
    fn test_edge_comment_at_end_without_newline() {
        let (t, _) = scan_all("x // trailing");
        assert_eq!(t.len(), 2);
        assert_eq!(t[1].line, 1);
    }

    #[test]
    fn test_edge_leading_dot_number() {
        assert_eq!(kinds(".5"), vec![TokenKind::Dot, TokenKind::Number, TokenKind::Eof]);
    }

    #[test]
    fn test_edge_negative_number_is_two_tokens() {
        let (t, _) = scan_all("-12");
        assert_eq!(t[0].kind, TokenKind::Minus);
        assert_eq!(t[1].number(), Some(12.0));
    }

    #[test]
    fn test_edge_number_touching_identifier() {
        let (t, _) = scan_all("123abc");
        assert_eq!(t[0].number(), Some(123.0));
        assert_eq!(t[1].lexeme, "abc");
    }

    #[test]
    fn test_edge_huge_number_is_infinite() {
        let (t, handler) = scan_all(&"9".repeat(400));
        assert_eq!(t[0].number(), Some(f64::INFINITY));
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_edge_empty_string() {
        let (t, _) = scan_all("\"\"");
        assert_eq!(t[0].string(), Some(""));
        assert_eq!(t[0].lexeme, "\"\"");
    }

    #[test]
    fn test_edge_string_with_comment_marker() {
        let (t, _) = scan_all("\"// not a comment\"");
        assert_eq!(t[0].string(), Some("// not a comment"));
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let (t, _) = scan_all("a\r\nb\r\nc");
        let lines: Vec<_> = t.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 2, 3, 3]);
    }

    #[test]
    fn test_edge_tabs_and_carriage_returns() {
        assert_eq!(kinds("\t\r \t"), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_edge_underscore_only() {
        assert_eq!(kinds("_ __")[..2], [TokenKind::Identifier, TokenKind::Identifier]);
    }

    #[test]
    fn test_edge_unicode_outside_string_is_error() {
        let (t, handler) = scan_all("π");
        assert_eq!(t.len(), 1);
        assert_eq!(handler.diagnostics()[0].message, "Unexpected character 'π'.");
    }

    #[test]
    fn test_edge_nul_byte_is_error() {
        let (t, handler) = scan_all("1\u{0}2");
        assert_eq!(t.len(), 3);
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_edge_eof_span_at_end() {
        let source = "print 1;\n";
        let (t, _) = scan_all(source);
        let eof = t.last().unwrap();
        assert_eq!(eof.span.start, source.len());
        assert!(eof.span.is_empty());
        assert_eq!(eof.lexeme, "");
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn test_err_unterminated_string() {
        let (t, handler) = scan_all("\"abc");
        assert_eq!(t.len(), 1);
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.diagnostics()[0].line(), 1);
    }

    #[test]
    fn test_err_unterminated_string_after_newlines() {
        let (t, handler) = scan_all("1\n2\n\"open\nstill open");
        assert_eq!(t.len(), 3);
        assert_eq!(t[2].line, 4);
        assert_eq!(handler.diagnostics()[0].line(), 3);
    }

    #[test]
    fn test_err_lone_quote() {
        let (t, handler) = scan_all("\"");
        assert_eq!(t.len(), 1);
        assert_eq!(handler.diagnostics()[0].message, "Unterminated string.");
    }

    #[test]
    fn test_err_invalid_chars() {
        let (_, handler) = scan_all("@ $ ~ ` ^ & | ? : [ ] %");
        assert_eq!(handler.error_count(), 12);
    }

    #[test]
    fn test_err_mixed_valid_invalid() {
        let (t, handler) = scan_all("var a = 1 @ 2;");
        assert_eq!(handler.error_count(), 1);
        assert_eq!(t.len(), 7);
    }

    #[test]
    fn test_err_lines_of_errors() {
        let (_, handler) = scan_all("@\n\n#\n");
        let lines: Vec<_> = handler.messages_by_line().into_keys().collect();
        assert_eq!(lines, vec![1, 3]);
    }

    #[test]
    fn test_err_unterminated_string_swallows_rest() {
        let (t, handler) = scan_all("\"abc @ # var");
        assert_eq!(t.len(), 1);
        assert_eq!(handler.error_count(), 1);
    }
}
