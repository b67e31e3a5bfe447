//! Unit tests for the SGR tokenizer

use logtint::{strip_sgr, tokenize, Token};

#[cfg(test)]
mod tokenizer_tests {
    use super::*;

    fn styled(text: &str, classes: &[&str]) -> Token {
        Token::new(text, classes.iter().map(|c| c.to_string()).collect())
    }

    #[test]
    fn test_plain_text_is_one_unstyled_token() {
        let tokens = tokenize("Hello, World!");
        assert_eq!(tokens, vec![Token::plain("Hello, World!")]);
    }

    #[test]
    fn test_empty_input_is_one_empty_token() {
        let tokens = tokenize("");
        assert_eq!(tokens, vec![Token::plain("")]);
    }

    #[test]
    fn test_color_application() {
        let tokens = tokenize("\x1b[31mHello\x1b[0m World");
        assert_eq!(
            tokens,
            vec![
                styled("Hello", &["text-red-400"]),
                Token::plain(" World"),
            ]
        );
    }

    #[test]
    fn test_bold_and_color_ordering() {
        let tokens = tokenize("\x1b[1;32mOK\x1b[0m");
        assert_eq!(tokens, vec![styled("OK", &["text-green-400", "font-bold"])]);
    }

    #[test]
    fn test_reset_short_circuit() {
        // The 1 after the 0 in the same sequence is discarded.
        let tokens = tokenize("\x1b[0;1mX");
        assert_eq!(tokens, vec![Token::plain("X")]);
    }

    #[test]
    fn test_unknown_code_is_a_no_op() {
        let tokens = tokenize("\x1b[99mFoo");
        assert_eq!(tokens, vec![Token::plain("Foo")]);
    }

    #[test]
    fn test_background_codes_are_ignored() {
        let tokens = tokenize("\x1b[41mwarning\x1b[0m");
        assert_eq!(tokens, vec![Token::plain("warning")]);
    }

    #[test]
    fn test_default_foreground_keeps_bold() {
        let tokens = tokenize("\x1b[1;31mA\x1b[39mB");
        assert_eq!(
            tokens,
            vec![
                styled("A", &["text-red-400", "font-bold"]),
                styled("B", &["font-bold"]),
            ]
        );
    }

    #[test]
    fn test_bright_colors() {
        let tokens = tokenize("\x1b[92mpassed\x1b[0m");
        assert_eq!(tokens, vec![styled("passed", &["text-green-300"])]);
    }

    #[test]
    fn test_empty_parameter_group_means_reset() {
        let tokens = tokenize("\x1b[31mred\x1b[mplain");
        assert_eq!(
            tokens,
            vec![styled("red", &["text-red-400"]), Token::plain("plain")]
        );
    }

    #[test]
    fn test_style_persists_across_sequences() {
        let tokens = tokenize("\x1b[31mred\x1b[1m also bold");
        assert_eq!(
            tokens,
            vec![
                styled("red", &["text-red-400"]),
                styled(" also bold", &["text-red-400", "font-bold"]),
            ]
        );
    }

    #[test]
    fn test_adjacent_sequences_combine() {
        let tokens = tokenize("\x1b[1m\x1b[31mX");
        assert_eq!(tokens, vec![styled("X", &["text-red-400", "font-bold"])]);
    }

    #[test]
    fn test_only_escape_sequences_yield_no_tokens() {
        assert!(tokenize("\x1b[31m\x1b[0m").is_empty());
    }

    #[test]
    fn test_unterminated_sequence_is_plain_text() {
        // No trailing `m`: not a match, passes through untouched.
        let input = "\x1b[31Hello";
        let tokens = tokenize(input);
        assert_eq!(tokens, vec![Token::plain(input)]);
    }

    #[test]
    fn test_non_numeric_parameters_are_plain_text() {
        let input = "\x1b[redmtext";
        let tokens = tokenize(input);
        assert_eq!(tokens, vec![Token::plain(input)]);
    }

    #[test]
    fn test_non_sgr_sequences_are_plain_text() {
        // Cursor movement ends in G, not m; the tokenizer does not touch it.
        let input = "\x1b[10GText at column 10";
        let tokens = tokenize(input);
        assert_eq!(tokens, vec![Token::plain(input)]);
    }

    #[test]
    fn test_oversized_parameter_does_not_panic() {
        let tokens = tokenize("\x1b[99999999999999mX");
        assert_eq!(tokens, vec![Token::plain("X")]);
    }

    #[test]
    fn test_text_conservation() {
        let input = "On branch \x1b[32mmain\x1b[0m\n\x1b[31mdeleted:\x1b[0m  old.rs\n";
        let concatenated: String = tokenize(input).iter().map(|t| t.text.as_str()).collect();
        assert_eq!(concatenated, strip_sgr(input));
        assert_eq!(concatenated, "On branch main\ndeleted:  old.rs\n");
    }

    #[test]
    fn test_tokens_never_contain_escape_bytes() {
        let input = "\x1b[1;33mwarn\x1b[0m mid\x1b[36mcyan";
        for token in tokenize(input) {
            assert!(!token.text.contains('\x1b'));
        }
    }

    #[test]
    fn test_multiline_task_log() {
        let input = "step 1 \x1b[32mok\x1b[0m\nstep 2 \x1b[31mfailed\x1b[0m\n";
        let tokens = tokenize(input);
        assert_eq!(
            tokens,
            vec![
                Token::plain("step 1 "),
                styled("ok", &["text-green-400"]),
                Token::plain("\nstep 2 "),
                styled("failed", &["text-red-400"]),
                Token::plain("\n"),
            ]
        );
    }

    #[test]
    fn test_strip_sgr_on_plain_text() {
        assert_eq!(strip_sgr("no codes here"), "no codes here");
        assert_eq!(strip_sgr(""), "");
    }
}
