//! Highlight Lexer
//!
//! Single-pass tokenization of pretty-printed JSON text into classified
//! highlight tokens. Classification lives here; turning tokens into markup
//! is a separate pass, so each can be tested on its own.

/// Token categories for highlighting
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// Quoted string followed by a colon, e.g. `"name":`
    Key,
    /// Quoted string value
    Str,
    /// Numeric literal (integer, decimal or exponential)
    Number,
    /// `true` or `false`
    Bool,
    /// `null`
    Null,
    /// Anything else: punctuation, whitespace, stray text
    Text,
}

/// A token with its text content
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

/// Tokenize pretty-printed JSON text into highlight tokens.
///
/// A quoted string immediately followed by optional whitespace and a colon
/// is a key, never a string value; the colon is part of the key token.
/// Unmatched text comes through as `Text` tokens so that concatenating all
/// token texts reproduces the input exactly.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut plain = String::new();
    let mut chars = text.char_indices().peekable();

    while let Some((start_idx, ch)) = chars.next() {
        match ch {
            // Quoted string: key or string value
            '"' => {
                let end_idx = scan_string(text, &mut chars);

                // Lookahead for optional whitespace then a colon
                if let Some(colon_end) = colon_after(text, end_idx) {
                    for _ in text[end_idx..colon_end].chars() {
                        chars.next();
                    }
                    flush_plain(&mut plain, &mut tokens);
                    tokens.push(Token {
                        kind: TokenKind::Key,
                        text: text[start_idx..colon_end].to_string(),
                    });
                } else {
                    flush_plain(&mut plain, &mut tokens);
                    tokens.push(Token {
                        kind: TokenKind::Str,
                        text: text[start_idx..end_idx].to_string(),
                    });
                }
            }

            // Word: only whole-word literals classify
            c if c.is_ascii_alphabetic() => {
                let mut end_idx = start_idx + 1;
                while let Some(&(idx, next_ch)) = chars.peek() {
                    if next_ch.is_ascii_alphanumeric() || next_ch == '_' {
                        end_idx = idx + next_ch.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }

                let word = &text[start_idx..end_idx];
                match word {
                    "true" | "false" => {
                        flush_plain(&mut plain, &mut tokens);
                        tokens.push(Token {
                            kind: TokenKind::Bool,
                            text: word.to_string(),
                        });
                    }
                    "null" => {
                        flush_plain(&mut plain, &mut tokens);
                        tokens.push(Token {
                            kind: TokenKind::Null,
                            text: word.to_string(),
                        });
                    }
                    _ => plain.push_str(word),
                }
            }

            // Numeric literal, with optional leading minus
            c if c.is_ascii_digit() || (c == '-' && next_is_digit(&mut chars)) => {
                let mut end_idx = start_idx + 1;
                let mut prev = c;
                while let Some(&(idx, next_ch)) = chars.peek() {
                    let continues = next_ch.is_ascii_digit()
                        || next_ch == '.'
                        || next_ch == 'e'
                        || next_ch == 'E'
                        || ((next_ch == '+' || next_ch == '-') && matches!(prev, 'e' | 'E'));
                    if continues {
                        end_idx = idx + 1;
                        prev = next_ch;
                        chars.next();
                    } else {
                        break;
                    }
                }

                flush_plain(&mut plain, &mut tokens);
                tokens.push(Token {
                    kind: TokenKind::Number,
                    text: text[start_idx..end_idx].to_string(),
                });
            }

            // Punctuation, whitespace, anything else
            other => plain.push(other),
        }
    }

    flush_plain(&mut plain, &mut tokens);
    tokens
}

/// Scan a quoted string whose opening quote was already consumed.
/// Returns the byte index just past the closing quote, or the end of the
/// text if the string is unterminated.
fn scan_string(
    text: &str,
    chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
) -> usize {
    let mut escaped = false;
    for (idx, ch) in chars.by_ref() {
        if escaped {
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == '"' {
            return idx + 1;
        }
    }
    text.len()
}

/// If `text[from..]` starts with optional whitespace followed by a colon,
/// return the byte index just past the colon.
fn colon_after(text: &str, from: usize) -> Option<usize> {
    let rest = &text[from..];
    let ws = rest.len() - rest.trim_start().len();
    if rest[ws..].starts_with(':') {
        Some(from + ws + 1)
    } else {
        None
    }
}

fn next_is_digit(chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>) -> bool {
    matches!(chars.peek(), Some(&(_, c)) if c.is_ascii_digit())
}

fn flush_plain(plain: &mut String, tokens: &mut Vec<Token>) {
    if !plain.is_empty() {
        tokens.push(Token {
            kind: TokenKind::Text,
            text: std::mem::take(plain),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_tokenize_key_value_pair() {
        let tokens = tokenize("{\n  \"a\": 1\n}");

        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Text,
                TokenKind::Key,
                TokenKind::Text,
                TokenKind::Number,
                TokenKind::Text,
            ]
        );
        assert_eq!(tokens[1].text, "\"a\":");
        assert_eq!(tokens[3].text, "1");
    }

    #[test]
    fn test_key_includes_colon() {
        let tokens = tokenize("\"key\": \"value\"");

        assert_eq!(tokens[0].kind, TokenKind::Key);
        assert_eq!(tokens[0].text, "\"key\":");
        assert_eq!(tokens[2].kind, TokenKind::Str);
        assert_eq!(tokens[2].text, "\"value\"");
    }

    #[test]
    fn test_key_with_whitespace_before_colon() {
        let tokens = tokenize("\"key\" : 1");

        assert_eq!(tokens[0].kind, TokenKind::Key);
        assert_eq!(tokens[0].text, "\"key\" :");
    }

    #[test]
    fn test_url_string_is_key_when_followed_by_colon() {
        let tokens = tokenize("\"https://x.com\": \"https://y.com\"");

        assert_eq!(tokens[0].kind, TokenKind::Key);
        assert_eq!(tokens[0].text, "\"https://x.com\":");
        assert_eq!(tokens[2].kind, TokenKind::Str);
        assert_eq!(tokens[2].text, "\"https://y.com\"");
    }

    #[test]
    fn test_literals_only_match_whole_words() {
        let tokens = tokenize("true false null truex nullable");

        let classified: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind != TokenKind::Text)
            .collect();
        assert_eq!(classified.len(), 3);
        assert_eq!(classified[0].kind, TokenKind::Bool);
        assert_eq!(classified[1].kind, TokenKind::Bool);
        assert_eq!(classified[2].kind, TokenKind::Null);
    }

    #[test]
    fn test_number_forms() {
        for input in ["0", "42", "-7", "3.25", "1e10", "2.5E-3", "-1.2e+4"] {
            let tokens = tokenize(input);
            assert_eq!(tokens.len(), 1, "input: {input}");
            assert_eq!(tokens[0].kind, TokenKind::Number, "input: {input}");
            assert_eq!(tokens[0].text, input);
        }
    }

    #[test]
    fn test_string_with_escaped_quote() {
        let tokens = tokenize("\"he said \\\"hi\\\"\"");

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Str);
        assert_eq!(tokens[0].text, "\"he said \\\"hi\\\"\"");
    }

    #[test]
    fn test_concatenation_reproduces_input() {
        let input = "{\n  \"a\": [true, null, -1.5e3],\n  \"b\": \"x\"\n}";
        let tokens = tokenize(input);
        let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(rebuilt, input);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }
}
