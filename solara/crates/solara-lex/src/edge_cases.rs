//! Edge case and property tests for solara-lex

#[cfg(test)]
mod tests {
    use crate::{Lexer, Token, TokenKind};
    use proptest::prelude::*;
    use solara_util::CompilerContext;

    fn lex(source: &str) -> (Vec<Token>, CompilerContext, usize) {
        let mut ctx = CompilerContext::default();
        let mut lexer = Lexer::with_source(&mut ctx, source);
        let tokens: Vec<_> = lexer.by_ref().collect();
        let errors = lexer.error_count();
        drop(lexer);
        (tokens, ctx, errors)
    }

    fn kinds_and_texts(source: &str) -> Vec<(TokenKind, String)> {
        let (tokens, ctx, _) = lex(source);
        tokens
            .iter()
            .map(|t| (t.kind, t.text(ctx.interner()).to_owned()))
            .collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_whitespace_is_insignificant() {
        assert_eq!(kinds_and_texts("a+b"), kinds_and_texts("  a  +  b  "));
    }

    #[test]
    fn test_edge_shift_assign_vs_less_equal() {
        let (tokens, _, _) = lex("<<=");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::ShlAssign);

        let (tokens, _, _) = lex("<=");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::LessEqual);
    }

    #[test]
    fn test_edge_comment_between_lines() {
        let (tokens, ctx, _) = lex("a // comment\nb");
        assert_eq!(tokens.len(), 2);
        assert_eq!(ctx.resolve(tokens[0].symbol.unwrap()), "a");
        assert_eq!(ctx.resolve(tokens[1].symbol.unwrap()), "b");
        assert_eq!(tokens[1].span.line, tokens[0].span.line + 1);
    }

    #[test]
    fn test_edge_number_classes() {
        for (source, kind) in [
            ("123", TokenKind::IntLiteral),
            ("0x1F", TokenKind::IntLiteral),
            ("0", TokenKind::IntLiteral),
            ("3.14", TokenKind::FloatLiteral),
        ] {
            let (tokens, _, errors) = lex(source);
            assert_eq!(errors, 0, "{}", source);
            assert_eq!(tokens.len(), 1, "{}", source);
            assert_eq!(tokens[0].kind, kind, "{}", source);
        }
    }

    #[test]
    fn test_edge_octal_eight_is_error() {
        let (tokens, ctx, errors) = lex("08");
        assert!(tokens.is_empty());
        assert_eq!(errors, 1);
        assert!(ctx.has_errors());
    }

    #[test]
    fn test_edge_end_repeats() {
        let mut ctx = CompilerContext::default();
        let mut lexer = Lexer::with_source(&mut ctx, "x");
        let _ = lexer.next_token();
        let end = lexer.next_token();
        assert_eq!(end.kind, TokenKind::End);
        assert_eq!(lexer.next_token(), end);
        assert_eq!(lexer.next_token(), end);
    }

    #[test]
    fn test_edge_keyword_concatenation() {
        let (tokens, ctx, _) = lex("forfor");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(ctx.resolve(tokens[0].symbol.unwrap()), "forfor");
    }

    #[test]
    fn test_edge_lone_period() {
        let kinds: Vec<_> = lex("a.b").0.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [TokenKind::Identifier, TokenKind::Period, TokenKind::Identifier]
        );
    }

    #[test]
    fn test_edge_leading_point_float() {
        let (tokens, ctx, _) = lex(".25");
        assert_eq!(tokens[0].kind, TokenKind::FloatLiteral);
        assert_eq!(ctx.resolve(tokens[0].symbol.unwrap()), ".25");
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10_000);
        let (tokens, ctx, _) = lex(&format!("const {} = 1;", name));
        assert_eq!(ctx.resolve(tokens[1].symbol.unwrap()), name);
    }

    #[test]
    fn test_edge_nul_is_whitespace() {
        let (tokens, _, errors) = lex("a\0b");
        assert_eq!(tokens.len(), 2);
        assert_eq!(errors, 0);
    }

    #[test]
    fn test_edge_crlf_lines() {
        let (tokens, _, _) = lex("a\r\nb");
        assert_eq!(tokens[1].span.line, 1);
        assert_eq!(tokens[1].span.column, 0);
    }

    #[test]
    fn test_edge_payload_iff_has_payload() {
        let (tokens, _, _) = lex("pub x = \"s\" + 1.0 * 2; // done");
        for token in tokens {
            assert_eq!(token.symbol.is_some(), token.kind.has_payload(), "{:?}", token);
        }
    }

    // ==================== PROPERTIES ====================

    proptest! {
        #[test]
        fn prop_identifiers_scan_whole(input in "[a-zA-Z_][a-zA-Z0-9_]{0,40}") {
            let (tokens, ctx, errors) = lex(&input);
            prop_assert_eq!(errors, 0);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].kind, TokenKind::from_keyword(&input));
            if tokens[0].kind == TokenKind::Identifier {
                prop_assert_eq!(ctx.resolve(tokens[0].symbol.unwrap()), input.as_str());
            }
        }

        #[test]
        fn prop_decimal_integers(input in "[1-9][0-9]{0,18}") {
            let (tokens, _, errors) = lex(&input);
            prop_assert_eq!(errors, 0);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].kind, TokenKind::IntLiteral);
        }

        #[test]
        fn prop_hex_integers(digits in "[0-9a-fA-F]{1,16}") {
            let (tokens, _, errors) = lex(&format!("0x{}", digits));
            prop_assert_eq!(errors, 0);
            prop_assert_eq!(tokens[0].kind, TokenKind::IntLiteral);
        }

        #[test]
        fn prop_floats(int in "[1-9][0-9]{0,6}", frac in "[0-9]{1,6}") {
            let (tokens, _, errors) = lex(&format!("{}.{}", int, frac));
            prop_assert_eq!(errors, 0);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].kind, TokenKind::FloatLiteral);
        }

        #[test]
        fn prop_plain_strings(body in "[^\"\\\\\n]{0,60}") {
            let (tokens, ctx, errors) = lex(&format!("\"{}\"", body));
            prop_assert_eq!(errors, 0);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(ctx.resolve(tokens[0].symbol.unwrap()), body.as_str());
        }

        #[test]
        fn prop_never_panics_and_terminates(input in "\\PC{0,200}") {
            let mut ctx = CompilerContext::default();
            let mut lexer = Lexer::with_source(&mut ctx, input.as_str());
            let mut last = 0;
            for _ in 0..=input.chars().count() + 1 {
                let token = lexer.next_token();
                prop_assert!(lexer.position() >= last);
                last = lexer.position();
                if token.is_end() {
                    break;
                }
            }
            prop_assert!(lexer.next_token().is_end());
        }

        #[test]
        fn prop_spans_are_in_order(input in "[a-z0-9+*/<>=;(){} \n.\"]{0,120}") {
            let (tokens, _, _) = lex(&input);
            for pair in tokens.windows(2) {
                prop_assert!(pair[0].span.end <= pair[1].span.start);
                prop_assert!(
                    (pair[0].span.line, pair[0].span.column)
                        < (pair[1].span.line, pair[1].span.column)
                );
            }
        }
    }
}
