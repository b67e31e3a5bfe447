//! HTML rendering of styled tokens
//!
//! Serializes token sequences into markup a browser container can take
//! directly. Escaping is explicit character substitution; nothing here
//! depends on a live document.

use crate::config::PageConfig;
use crate::models::Token;

/// HTML-escape literal text.
///
/// Escapes `&`, `<`, `>`, and `"`. Apostrophes pass through; token text is
/// never placed inside an attribute value.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Serialize tokens to an HTML fragment.
///
/// Styled runs become `<span class="...">` elements with the classes
/// space-joined in state-machine order; unstyled runs are appended bare.
/// Tokens concatenate in order with no separators.
pub fn render_fragment(tokens: &[Token]) -> String {
    let mut html = String::new();
    for token in tokens {
        if token.is_styled() {
            html.push_str("<span class=\"");
            html.push_str(&token.classes.join(" "));
            html.push_str("\">");
            html.push_str(&escape_html(&token.text));
            html.push_str("</span>");
        } else {
            html.push_str(&escape_html(&token.text));
        }
    }
    html
}

/// Wrap a token sequence in a minimal standalone page.
///
/// The fragment lands inside a `<pre>` block so whitespace and line breaks
/// of the captured output survive.
pub fn render_document(tokens: &[Token], page: &PageConfig) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n<head>\n\
         <meta charset=\"utf-8\"/>\n\
         <title>{}</title>\n\
         </head>\n<body>\n\
         <pre style=\"font-family: {}, monospace; font-size: {}pt\">{}</pre>\n\
         </body>\n</html>\n",
        escape_html(&page.title),
        escape_html(&page.font_family),
        page.font_size,
        render_fragment(tokens),
    )
}
