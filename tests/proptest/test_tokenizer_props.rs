//! Property-based tests for the SGR tokenizer and renderer
//!
//! These tests use proptest to generate random inputs and verify the
//! conversion's total-function and text-conservation guarantees.

use logtint::{escape_html, strip_sgr, to_html, tokenize};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_tokenize_doesnt_panic_on_random_input(s in "\\PC*") {
        let _ = tokenize(&s);
        let _ = to_html(&s);
        let _ = strip_sgr(&s);
    }

    #[test]
    fn test_text_conservation(s in "\\PC*") {
        let concatenated: String = tokenize(&s).iter().map(|t| t.text.as_str()).collect();
        prop_assert_eq!(concatenated, strip_sgr(&s));
    }

    #[test]
    fn test_plain_text_is_single_unstyled_token(s in "[a-zA-Z0-9 .,!-]{0,500}") {
        let tokens = tokenize(&s);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].text, &s);
        prop_assert!(tokens[0].classes.is_empty());
    }

    #[test]
    fn test_plain_text_html_equals_escaped_input(s in "[a-zA-Z0-9<>& ]{0,200}") {
        prop_assert_eq!(to_html(&s), escape_html(&s));
    }

    #[test]
    fn test_tokens_never_contain_escape_bytes(s in "\\PC*") {
        for token in tokenize(&s) {
            prop_assert!(!token.text.contains('\x1b'));
        }
    }

    #[test]
    fn test_single_code_wrapping(
        text in "[a-zA-Z ]{1,100}",
        code in 0u16..=120u16,
    ) {
        let input = format!("\x1b[{}m{}\x1b[0m", code, text);
        let tokens = tokenize(&input);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].text, &text);
        // At most one color label plus the bold label.
        prop_assert!(tokens[0].classes.len() <= 2);
    }

    #[test]
    fn test_color_label_precedes_bold(color in 30u16..38u16, text in "[a-z]{1,50}") {
        let input = format!("\x1b[{};1m{}", color, text);
        let tokens = tokenize(&input);
        prop_assert_eq!(tokens[0].classes.len(), 2);
        prop_assert!(tokens[0].classes[0].starts_with("text-"));
        prop_assert_eq!(&tokens[0].classes[1], "font-bold");
    }

    #[test]
    fn test_reset_sequences_leave_no_style(count in 1usize..20, text in "[a-z]{1,30}") {
        let input = format!("{}{}", "\x1b[0m".repeat(count), text);
        let tokens = tokenize(&input);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert!(tokens[0].classes.is_empty());
    }

    #[test]
    fn test_rendered_fragment_has_no_escape_bytes(s in "\\PC*") {
        prop_assert!(!to_html(&s).contains('\x1b'));
    }

    #[test]
    fn test_conversion_is_deterministic(s in "\\PC{0,300}") {
        prop_assert_eq!(tokenize(&s), tokenize(&s));
        prop_assert_eq!(to_html(&s), to_html(&s));
    }
}
