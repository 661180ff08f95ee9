//! logos-based markup tokenizer.
//!
//! Lexing runs in two modes. [`Token`] covers content between tags. When a start tag is
//! seen the reader morphs the lexer into [`TagToken`] to read attributes, then morphs back.
//!
//! Token priority follows logos rules (longest match, then definition order), so:
//! - `<!--` is a [`Token::Comment`], never a [`Token::Declaration`]
//! - `<div` is a [`Token::StartTag`], while a `<` not followed by a letter is [`Token::LessThan`]

use logos::{Lexer, Logos};

/// Content-mode token.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `<!-- ... -->`. The callback consumes through the terminator (or to end of input).
    #[token("<!--", comment)]
    Comment,

    /// `<!DOCTYPE html>`, `<![CDATA[...]]>` and other declarations.
    #[regex(r"<![a-zA-Z\[][^>]*>")]
    Declaration,

    /// `<?xml ...?>`.
    #[regex(r"<\?[^>]*>")]
    ProcessingInstruction,

    /// `</name>`, including anything up to the `>`.
    #[regex(r"</[a-zA-Z][^>]*>")]
    EndTag,

    /// `<name`. Attributes follow in tag mode.
    #[regex(r"<[a-zA-Z][^\s/>]*")]
    StartTag,

    /// A run of character data.
    #[regex(r"[^<]+")]
    Text,

    /// A `<` that starts nothing; treated as text.
    #[token("<")]
    LessThan,
}

fn comment(lex: &mut Lexer<Token>) {
    let rest = lex.remainder();
    let end = rest.find("-->").map_or(rest.len(), |i| i + 3);
    lex.bump(end);
}

/// Tag-mode token, used between `<name` and the closing `>` or `/>`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum TagToken {
    /// `>`
    #[token(">")]
    End,

    /// `/>`
    #[token("/>")]
    SelfClosingEnd,

    /// `=`
    #[token("=")]
    Equals,

    /// A double-quoted string not preceded by `=`.
    #[regex(r#""[^"]*""#)]
    DoubleQuoted,

    /// A single-quoted string not preceded by `=`.
    #[regex(r"'[^']*'")]
    SingleQuoted,

    /// An attribute name.
    #[regex(r#"[^\s"'=<>/]+"#)]
    Name,

    /// A `/` not followed by `>`.
    #[token("/")]
    Slash,
}

/// Lower-cased element name of a [`Token::StartTag`] slice (`<Div` -> `div`).
pub fn start_tag_name(slice: &str) -> String {
    slice.trim_start_matches('<').to_lowercase()
}

/// Lower-cased element name of a [`Token::EndTag`] slice (`</Div >` -> `div`).
pub fn end_tag_name(slice: &str) -> String {
    let inner = slice.trim_start_matches("</").trim_end_matches('>');
    let end = inner
        .find(|c: char| c.is_whitespace() || c == '/')
        .unwrap_or(inner.len());
    inner[..end].to_lowercase()
}

/// Read an attribute value right after `=`, advancing the lexer past it.
///
/// Quoted values run to the matching quote. Unquoted values run up to whitespace or `>`.
/// Returns `None` when input ends before the value does.
pub fn attribute_value<'s>(lex: &mut Lexer<'s, TagToken>) -> Option<&'s str> {
    let rest = lex.remainder();
    let trimmed = rest.trim_start();
    let skipped = rest.len() - trimmed.len();

    match trimmed.chars().next() {
        None => None,
        Some(quote @ ('"' | '\'')) => match trimmed[1..].find(quote) {
            Some(end) => {
                lex.bump(skipped + end + 2);
                Some(&trimmed[1..1 + end])
            }
            None => {
                lex.bump(rest.len());
                None
            }
        },
        Some('>') => Some(""),
        Some(_) => {
            let end = trimmed
                .find(|c: char| c.is_whitespace() || c == '>')
                .unwrap_or(trimmed.len());
            lex.bump(skipped + end);
            Some(&trimmed[..end])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: lex content mode and return (token, slice) pairs.
    fn tokens(input: &str) -> Vec<(Token, String)> {
        Token::lexer(input)
            .spanned()
            .filter_map(|(result, span)| result.ok().map(|t| (t, input[span].to_string())))
            .collect()
    }

    // ── Content mode ─────────────────────────────────────────────────

    #[test]
    fn test_start_end_and_text() {
        assert_eq!(
            tokens("<p>Hi</p>"),
            vec![
                (Token::StartTag, "<p".into()),
                (Token::Text, ">Hi".into()),
                (Token::EndTag, "</p>".into()),
            ]
        );
    }

    #[test]
    fn test_comment_consumes_through_terminator() {
        assert_eq!(
            tokens("a<!-- <b> -->c"),
            vec![
                (Token::Text, "a".into()),
                (Token::Comment, "<!-- <b> -->".into()),
                (Token::Text, "c".into()),
            ]
        );
    }

    #[test]
    fn test_unterminated_comment_runs_to_end() {
        assert_eq!(tokens("<!-- open"), vec![(Token::Comment, "<!-- open".into())]);
    }

    #[test]
    fn test_declarations() {
        let result = tokens("<!DOCTYPE html><?xml version=\"1.0\"?>");
        assert_eq!(result[0].0, Token::Declaration);
        assert_eq!(result[1].0, Token::ProcessingInstruction);
    }

    #[test]
    fn test_bare_less_than() {
        assert_eq!(
            tokens("1 < 2"),
            vec![
                (Token::Text, "1 ".into()),
                (Token::LessThan, "<".into()),
                (Token::Text, " 2".into()),
            ]
        );
    }

    // ── Tag mode ─────────────────────────────────────────────────────

    #[test]
    fn test_tag_mode_tokens() {
        let result: Vec<_> = TagToken::lexer(r#" disabled class = "x" />"#)
            .filter_map(Result::ok)
            .collect();
        assert_eq!(
            result,
            vec![
                TagToken::Name,
                TagToken::Name,
                TagToken::Equals,
                TagToken::DoubleQuoted,
                TagToken::SelfClosingEnd,
            ]
        );
    }

    #[test]
    fn test_attribute_value_forms() {
        let mut lex = TagToken::lexer(r#" "a b" 'c' d/e>"#);
        assert_eq!(attribute_value(&mut lex), Some("a b"));
        assert_eq!(attribute_value(&mut lex), Some("c"));
        assert_eq!(attribute_value(&mut lex), Some("d/e"));
        assert_eq!(lex.next(), Some(Ok(TagToken::End)));
    }

    #[test]
    fn test_attribute_value_missing_before_end() {
        let mut lex = TagToken::lexer(">");
        assert_eq!(attribute_value(&mut lex), Some(""));
        assert_eq!(lex.next(), Some(Ok(TagToken::End)));
    }

    #[test]
    fn test_unterminated_quote() {
        let mut lex = TagToken::lexer(r#""abc"#);
        assert_eq!(attribute_value(&mut lex), None);
        assert_eq!(lex.next(), None);
    }

    // ── Names ────────────────────────────────────────────────────────

    #[test]
    fn test_tag_names_are_lowercased() {
        assert_eq!(start_tag_name("<DiV"), "div");
        assert_eq!(end_tag_name("</DiV >"), "div");
        assert_eq!(end_tag_name("</my-el/>"), "my-el");
    }
}
