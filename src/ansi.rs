//! ANSI escape code processing
//!
//! Scans a string of captured process output for SGR escape sequences and
//! converts it into styled text tokens. The scan is pure and synchronous:
//! each call starts from an empty style and shares no state with any other
//! call.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Token;
use crate::render;
use crate::style::StyleState;

/// Matches one SGR sequence: ESC `[`, semicolon-separated decimal parameter
/// groups (each possibly empty), and the final `m`. Anything that does not
/// match exactly is plain text to the tokenizer.
static SGR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("valid pattern"));

/// Tokenize captured output into styled text runs.
///
/// Each token carries the style active at the start of its run. A string
/// with no escape sequences yields exactly one unstyled token, even when
/// the string is empty; a string consisting only of escape sequences yields
/// no tokens at all.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut style = StyleState::default();
    let mut last_end = 0;

    for mat in SGR_RE.find_iter(input) {
        if mat.start() > last_end {
            tokens.push(make_token(&input[last_end..mat.start()], &style));
        }
        style = style.apply(&parse_params(mat.as_str()));
        last_end = mat.end();
    }

    if last_end < input.len() {
        tokens.push(make_token(&input[last_end..], &style));
    }

    if tokens.is_empty() && last_end == 0 {
        // No matches at all: the whole input is one unstyled run.
        tokens.push(Token::plain(input));
    }

    trace!("tokenized {} bytes into {} runs", input.len(), tokens.len());
    tokens
}

/// Remove every SGR sequence, keeping the visible characters untouched.
pub fn strip_sgr(input: &str) -> String {
    SGR_RE.replace_all(input, "").into_owned()
}

/// Convert a raw string straight to an HTML fragment.
pub fn to_html(input: &str) -> String {
    render::render_fragment(&tokenize(input))
}

fn make_token(text: &str, style: &StyleState) -> Token {
    let classes = style.classes().into_iter().map(String::from).collect();
    Token::new(text, classes)
}

/// Parse the parameter groups of a matched sequence. An empty group denotes
/// parameter value 0; a run of digits too large for u16 acts like any other
/// unknown code.
fn parse_params(seq: &str) -> Vec<u16> {
    let body = &seq[2..seq.len() - 1];
    body.split(';')
        .map(|group| {
            if group.is_empty() {
                0
            } else {
                group.parse().unwrap_or(u16::MAX)
            }
        })
        .collect()
}
