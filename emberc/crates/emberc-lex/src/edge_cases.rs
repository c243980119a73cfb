//! Edge case tests for emberc-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, Scanner, Tag};
    use emberc_util::Span;

    fn lex_all(source: &str) -> Vec<Tag> {
        Scanner::new(source).map(|t| t.tag).collect()
    }

    fn lexemes(source: &str) -> Vec<(Tag, String)> {
        let mut scanner = Scanner::new(source);
        let mut out = Vec::new();
        loop {
            let token = scanner.next_token();
            if token.is_eof() {
                return out;
            }
            out.push((token.tag, scanner.lexeme(&token).unwrap()));
        }
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
        assert!(lex_all(" \t\r\n").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        assert_eq!(lex_all("x"), [Tag::Identifier]);
        assert_eq!(lex_all("_"), [Tag::Identifier]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let tokens = tokenize(&format!("let {} = 1", name));
        assert_eq!(tokens[1].tag, Tag::Identifier);
        assert_eq!(tokens[1].span, Span::new(4, 10003));
    }

    #[test]
    fn test_edge_keyword_prefix_is_identifier() {
        assert_eq!(lex_all("iff fn_ lets _if"), [Tag::Identifier; 4]);
    }

    #[test]
    fn test_edge_keywords_case_sensitive() {
        assert_eq!(lex_all("If TRUE Nil"), [Tag::Identifier; 3]);
    }

    #[test]
    fn test_edge_unicode_letter_not_identifier() {
        assert_eq!(
            lexemes("aé"),
            [(Tag::Identifier, "a".to_string()), (Tag::Invalid, "é".to_string())]
        );
    }

    // ==================== OPERATORS ====================

    #[test]
    fn test_edge_longest_operator_wins() {
        assert_eq!(
            lex_all("<<= >>= << >> <= >= => -> ++ --"),
            [
                Tag::ShiftLeftEqual,
                Tag::ShiftRightEqual,
                Tag::ShiftLeft,
                Tag::ShiftRight,
                Tag::AngleLeftEqual,
                Tag::AngleRightEqual,
                Tag::FatArrow,
                Tag::Arrow,
                Tag::PlusPlus,
                Tag::MinusMinus,
            ]
        );
    }

    #[test]
    fn test_edge_operators_without_spaces() {
        assert_eq!(
            lex_all("a+++b"),
            [Tag::Identifier, Tag::PlusPlus, Tag::Plus, Tag::Identifier]
        );
        assert_eq!(
            lex_all("x<<<y"),
            [Tag::Identifier, Tag::ShiftLeft, Tag::AngleLeft, Tag::Identifier]
        );
        assert_eq!(lex_all("&&"), [Tag::Ampersand, Tag::Ampersand]);
    }

    #[test]
    fn test_edge_division_is_not_comment() {
        assert_eq!(
            lex_all("a / b /= c"),
            [
                Tag::Identifier,
                Tag::Slash,
                Tag::Identifier,
                Tag::SlashEqual,
                Tag::Identifier,
            ]
        );
    }

    #[test]
    fn test_edge_lone_percent() {
        assert_eq!(
            lexemes("%x"),
            [(Tag::Invalid, "%".to_string()), (Tag::Identifier, "x".to_string())]
        );
    }

    #[test]
    fn test_edge_at_without_name() {
        assert_eq!(
            lexemes("@(1"),
            [
                (Tag::Invalid, "@".to_string()),
                (Tag::LParen, "(".to_string()),
                (Tag::IntegerLiteral, "1".to_string()),
            ]
        );
        assert_eq!(lex_all("@"), [Tag::Invalid]);
    }

    // ==================== NUMBERS ====================

    #[test]
    fn test_edge_hex_with_separator() {
        let tokens = tokenize("a = 0x8_57F3");
        assert_eq!(tokens[2].tag, Tag::IntegerLiteral);
        assert_eq!(tokens[2].span, Span::new(4, 11));
    }

    #[test]
    fn test_edge_radix_literals() {
        assert_eq!(
            lex_all("0b0 0b1010 0o777 0xdead_BEEF"),
            [Tag::IntegerLiteral; 4]
        );
    }

    #[test]
    fn test_edge_leading_zeros() {
        assert_eq!(lexemes("007"), [(Tag::IntegerLiteral, "007".to_string())]);
        assert_eq!(lexemes("0_1"), [(Tag::IntegerLiteral, "0_1".to_string())]);
        assert_eq!(lexemes("0.5"), [(Tag::FloatLiteral, "0.5".to_string())]);
        assert_eq!(lexemes("0e3"), [(Tag::FloatLiteral, "0e3".to_string())]);
    }

    #[test]
    fn test_edge_range_is_not_float() {
        assert_eq!(
            lex_all("1..2"),
            [Tag::IntegerLiteral, Tag::Period, Tag::Period, Tag::IntegerLiteral]
        );
        assert_eq!(lex_all("1.x"), [Tag::IntegerLiteral, Tag::Period, Tag::Identifier]);
        assert_eq!(lex_all("1."), [Tag::IntegerLiteral, Tag::Period]);
    }

    #[test]
    fn test_edge_float_forms() {
        assert_eq!(
            lex_all("3.14 2.5e-3 1e10 1E+2 1_0.0_1e1_0"),
            [Tag::FloatLiteral; 5]
        );
    }

    #[test]
    fn test_edge_misplaced_separators() {
        assert_eq!(
            lexemes("1__0"),
            [
                (Tag::Invalid, "1__".to_string()),
                (Tag::IntegerLiteral, "0".to_string()),
            ]
        );
        assert_eq!(lexemes("1_ "), [(Tag::Invalid, "1_".to_string())]);
        assert_eq!(
            lexemes("0x_1"),
            [
                (Tag::Invalid, "0x_".to_string()),
                (Tag::IntegerLiteral, "1".to_string()),
            ]
        );
        assert_eq!(
            lexemes("1_.5"),
            [
                (Tag::Invalid, "1_".to_string()),
                (Tag::Period, ".".to_string()),
                (Tag::IntegerLiteral, "5".to_string()),
            ]
        );
    }

    #[test]
    fn test_edge_missing_digits() {
        assert_eq!(lexemes("0x"), [(Tag::Invalid, "0x".to_string())]);
        assert_eq!(
            lexemes("0b)"),
            [
                (Tag::Invalid, "0b".to_string()),
                (Tag::RParen, ")".to_string()),
            ]
        );
        assert_eq!(lexemes("1e"), [(Tag::Invalid, "1e".to_string())]);
        assert_eq!(
            lexemes("1e+;"),
            [
                (Tag::Invalid, "1e+".to_string()),
                (Tag::Invalid, ";".to_string()),
            ]
        );
    }

    #[test]
    fn test_edge_invalid_digits_and_suffixes() {
        assert_eq!(lexemes("0b102"), [(Tag::Invalid, "0b102".to_string())]);
        assert_eq!(lexemes("0o8"), [(Tag::Invalid, "0o8".to_string())]);
        assert_eq!(
            lexemes("12abc"),
            [
                (Tag::Invalid, "12a".to_string()),
                (Tag::Identifier, "bc".to_string()),
            ]
        );
        assert_eq!(
            lexemes("0X1"),
            [
                (Tag::Invalid, "0X".to_string()),
                (Tag::IntegerLiteral, "1".to_string()),
            ]
        );
    }

    // ==================== LITERALS ====================

    #[test]
    fn test_edge_string_escapes() {
        assert_eq!(
            lexemes(r#""a\"b\\" x"#),
            [
                (Tag::StringLiteral, r#""a\"b\\""#.to_string()),
                (Tag::Identifier, "x".to_string()),
            ]
        );
    }

    #[test]
    fn test_edge_string_stops_at_newline() {
        let tokens = tokenize("\"abc\nx");
        assert_eq!(tokens[0].tag, Tag::Invalid);
        assert_eq!(tokens[0].span, Span::new(0, 3));
        assert_eq!(tokens[1].tag, Tag::Identifier);
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn test_edge_char_literals() {
        assert_eq!(
            lex_all(r"'c' '\n' '\'' '\x41' '\u{1F600}' 'é'"),
            [Tag::CharLiteral; 6]
        );
    }

    #[test]
    fn test_edge_bad_char_literals() {
        assert_eq!(lexemes("''"), [(Tag::Invalid, "''".to_string())]);
        assert_eq!(lexemes("'ab'"), [(Tag::Invalid, "'ab'".to_string())]);
        assert_eq!(lexemes(r"'\x4'"), [(Tag::Invalid, r"'\x4'".to_string())]);
        assert_eq!(lexemes(r"'\u{}'"), [(Tag::Invalid, r"'\u{}'".to_string())]);
        assert_eq!(
            lexemes(r"'\u{1234567}'"),
            [(Tag::Invalid, r"'\u{1234567}'".to_string())]
        );
        assert_eq!(lexemes("'"), [(Tag::Invalid, "'".to_string())]);
    }

    #[test]
    fn test_edge_multiline_string() {
        let tokens = tokenize("%%line one \"quoted\"\nx");
        assert_eq!(tokens[0].tag, Tag::MultilineStringLiteral);
        assert_eq!(tokens[0].span, Span::new(0, 19));
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].tag, Tag::Identifier);
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn test_edge_multiline_crlf_and_eof() {
        assert_eq!(lex_all("%%a\r\n"), [Tag::MultilineStringLiteral]);
        assert_eq!(lexemes("%%a\rb\n"), [(Tag::Invalid, "%%a\rb\n".to_string())]);
        assert_eq!(lex_all("%%a\rb\nx"), [Tag::Invalid, Tag::Identifier]);
        assert_eq!(lex_all("%%no newline"), [Tag::Invalid]);
    }

    #[test]
    fn test_edge_tab_allowed_in_literals() {
        assert_eq!(lex_all("\"a\tb\""), [Tag::StringLiteral]);
        assert_eq!(lex_all("'\t'"), [Tag::CharLiteral]);
        assert_eq!(lex_all("%%\t\n"), [Tag::MultilineStringLiteral]);
    }

    // ==================== RECOVERY ====================

    #[test]
    fn test_edge_recovery_continues() {
        assert_eq!(
            lex_all("a # b $ c"),
            [
                Tag::Identifier,
                Tag::Invalid,
                Tag::Identifier,
                Tag::Invalid,
                Tag::Identifier,
            ]
        );
    }

    #[test]
    fn test_edge_rejected_literal_runs_to_closing_quote() {
        assert_eq!(
            lexemes("'ab' then x"),
            [
                (Tag::Invalid, "'ab'".to_string()),
                (Tag::Then, "then".to_string()),
                (Tag::Identifier, "x".to_string()),
            ]
        );
        assert_eq!(
            lexemes("\"a\u{7}b\" then"),
            [
                (Tag::Invalid, "\"a\u{7}b\"".to_string()),
                (Tag::Then, "then".to_string()),
            ]
        );
        assert_eq!(
            lexemes(r"'\u{}' then"),
            [
                (Tag::Invalid, r"'\u{}'".to_string()),
                (Tag::Then, "then".to_string()),
            ]
        );
    }

    #[test]
    fn test_edge_rejected_literal_skips_escaped_quotes() {
        assert_eq!(
            lexemes(r"'ab\'c' x"),
            [
                (Tag::Invalid, r"'ab\'c'".to_string()),
                (Tag::Identifier, "x".to_string()),
            ]
        );
        assert_eq!(
            lexemes("\"\u{1}\\\"\" x"),
            [
                (Tag::Invalid, "\"\u{1}\\\"\"".to_string()),
                (Tag::Identifier, "x".to_string()),
            ]
        );
    }

    #[test]
    fn test_edge_rejected_literal_stops_at_line_end() {
        let tokens = tokenize("'abc\nx");
        assert_eq!(tokens[0].tag, Tag::Invalid);
        assert_eq!(tokens[0].span, Span::new(0, 3));
        assert_eq!(tokens[1].tag, Tag::Identifier);
        assert_eq!(tokens[1].line, 2);
        assert_eq!(lex_all("'ab"), [Tag::Invalid]);
    }

    #[test]
    fn test_edge_every_invalid_has_diagnostic() {
        let mut scanner = Scanner::new("# @ 0x ''");
        let invalid = scanner.by_ref().filter(|t| t.is_invalid()).count();
        assert_eq!(invalid, 4);
        assert_eq!(scanner.handler().error_count(), 4);
    }
}
