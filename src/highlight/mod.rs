//! Syntax Highlighting
//!
//! Turns canonical pretty text into HTML-safe highlighted markup.
//! Escaping happens once, up front; the lexer then classifies tokens and a
//! separate rendering pass maps each token to a styled span.

pub mod lexer;

pub use lexer::{tokenize, Token, TokenKind};

use regex::Regex;

/// Highlight pretty-printed JSON text as HTML markup.
///
/// This is the main entry point for highlighting. HTML metacharacters are
/// escaped globally before tokenization, so token texts are already safe to
/// embed and are never escaped a second time.
pub fn highlight(pretty: &str) -> String {
    let escaped = escape_html(pretty);
    let tokens = lexer::tokenize(&escaped);
    render_tokens(&tokens)
}

/// Escape the HTML metacharacters `&`, `<` and `>`.
///
/// Applied exactly once per document, before tokenization. `&` must be
/// replaced first so the entities introduced for `<` and `>` survive.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Map classified tokens to markup.
///
/// Key, string, number, boolean and null tokens are wrapped in spans
/// carrying their category class; plain text passes through verbatim.
/// String values shaped like an http(s) URL become hyperlinks that open in
/// a new browsing context, with the quotes kept outside the link. Keys are
/// never linkified, even when URL-shaped.
pub fn render_tokens(tokens: &[Token]) -> String {
    let url_re = Regex::new(r"^https?://[^\s]+$").expect("valid URL pattern");

    let mut html = String::new();
    for token in tokens {
        match token.kind {
            TokenKind::Text => html.push_str(&token.text),
            TokenKind::Key => push_span(&mut html, "json-key", &token.text),
            TokenKind::Str => {
                let unquoted = token
                    .text
                    .strip_prefix('"')
                    .and_then(|s| s.strip_suffix('"'))
                    .unwrap_or("");
                if url_re.is_match(unquoted) {
                    html.push_str(&format!(
                        "<span class=\"json-string\">\"<a href=\"{unquoted}\" target=\"_blank\">{unquoted}</a>\"</span>"
                    ));
                } else {
                    push_span(&mut html, "json-string", &token.text);
                }
            }
            TokenKind::Number => push_span(&mut html, "json-number", &token.text),
            TokenKind::Bool => push_span(&mut html, "json-boolean", &token.text),
            TokenKind::Null => push_span(&mut html, "json-null", &token.text),
        }
    }
    html
}

fn push_span(html: &mut String, class: &str, text: &str) {
    html.push_str(&format!("<span class=\"{class}\">{text}</span>"));
}
