//! Streaming markup reader.
//!
//! Turns markup text into a balanced sequence of [`MarkupSink`] calls. The reader is lenient:
//! it never fails on its own, it recovers from mismatched or missing end tags the way browsers
//! do, and it closes everything still open when input ends.

use std::borrow::Cow;

use html_escape::decode_html_entities;
use logos::{Lexer, Logos};
use tracing::trace;

use crate::markup::elements::{implies_close, is_void, raw_text, RawText};
use crate::markup::tokenizer::{attribute_value, end_tag_name, start_tag_name, TagToken, Token};
use crate::markup::{Attributes, MarkupSink};

/// Read `markup` and report it to `sink`.
///
/// The only errors are the ones `sink` returns; the first one aborts the read.
pub fn read<S: MarkupSink>(markup: &str, sink: &mut S) -> Result<(), S::Error> {
    Reader {
        sink,
        open: Vec::new(),
        text: String::new(),
    }
    .run(markup)
}

struct Reader<'a, S> {
    sink: &'a mut S,
    /// Names of the elements currently open, innermost last.
    open: Vec<String>,
    /// Raw text not yet delivered.
    text: String,
}

impl<S: MarkupSink> Reader<'_, S> {
    fn run(mut self, markup: &str) -> Result<(), S::Error> {
        let mut lexer = Token::lexer(markup);

        while let Some(result) = lexer.next() {
            match result {
                Ok(Token::Text) | Ok(Token::LessThan) | Err(()) => {
                    self.text.push_str(lexer.slice());
                }
                Ok(Token::Comment) | Ok(Token::Declaration) | Ok(Token::ProcessingInstruction) => {
                    self.flush_text()?;
                }
                Ok(Token::EndTag) => {
                    self.flush_text()?;
                    self.end_tag(&end_tag_name(lexer.slice()))?;
                }
                Ok(Token::StartTag) => {
                    self.flush_text()?;
                    let name = start_tag_name(lexer.slice());
                    let mut tag_lexer = lexer.morph::<TagToken>();
                    let tag = read_tag(&mut tag_lexer);
                    lexer = tag_lexer.morph();
                    match tag {
                        Some((attributes, self_closing)) => {
                            self.start_tag(name, &attributes, self_closing, &mut lexer)?;
                        }
                        None => trace!(tag = %name, "discarding unterminated start tag"),
                    }
                }
            }
        }

        self.flush_text()?;
        while let Some(name) = self.open.pop() {
            trace!(tag = %name, "closing element left open at end of input");
            self.sink.close_element()?;
        }
        Ok(())
    }

    fn flush_text(&mut self) -> Result<(), S::Error> {
        if self.text.is_empty() {
            return Ok(());
        }
        let text = std::mem::take(&mut self.text);
        self.sink.text(&decode_html_entities(&text))
    }

    fn start_tag(
        &mut self,
        name: String,
        attributes: &Attributes,
        self_closing: bool,
        lexer: &mut Lexer<'_, Token>,
    ) -> Result<(), S::Error> {
        while let Some(open) = self.open.last() {
            if !implies_close(&name, open) {
                break;
            }
            trace!(closed = %open, by = %name, "implied end tag");
            self.open.pop();
            self.sink.close_element()?;
        }

        self.sink.open_element(&name, attributes)?;

        if self_closing || is_void(&name) {
            return self.sink.close_element();
        }

        if let Some(kind) = raw_text(&name) {
            let content = take_raw_text(lexer, &name);
            let content = match kind {
                RawText::Verbatim => Cow::Borrowed(content),
                RawText::Escapable => decode_html_entities(content),
            };
            if !content.is_empty() {
                self.sink.text(&content)?;
            }
            return self.sink.close_element();
        }

        self.open.push(name);
        Ok(())
    }

    fn end_tag(&mut self, name: &str) -> Result<(), S::Error> {
        match self.open.iter().rposition(|open| open == name) {
            Some(index) => {
                while self.open.len() > index {
                    self.open.pop();
                    self.sink.close_element()?;
                }
            }
            None => trace!(tag = %name, "ignoring end tag with no open element"),
        }
        Ok(())
    }
}

/// Read attributes up to the end of a start tag.
///
/// Returns the attributes and whether the tag ended with `/>`, or `None` if input ran out
/// first.
fn read_tag(lexer: &mut Lexer<'_, TagToken>) -> Option<(Attributes, bool)> {
    let mut attributes = Attributes::new();
    let mut pending: Option<String> = None;

    loop {
        match lexer.next()? {
            Ok(TagToken::End) => {
                if let Some(name) = pending.take() {
                    attributes.insert(name, "");
                }
                return Some((attributes, false));
            }
            Ok(TagToken::SelfClosingEnd) => {
                if let Some(name) = pending.take() {
                    attributes.insert(name, "");
                }
                return Some((attributes, true));
            }
            Ok(TagToken::Name) => {
                if let Some(name) = pending.replace(lexer.slice().to_lowercase()) {
                    attributes.insert(name, "");
                }
            }
            Ok(TagToken::Equals) => {
                let value = attribute_value(lexer)?;
                if let Some(name) = pending.take() {
                    attributes.insert(name, decode_html_entities(value));
                }
            }
            Ok(TagToken::DoubleQuoted) | Ok(TagToken::SingleQuoted) | Ok(TagToken::Slash) | Err(()) => {}
        }
    }
}

/// Take the content of a raw-text element and move the lexer past its end tag.
fn take_raw_text<'s>(lexer: &mut Lexer<'s, Token>, name: &str) -> &'s str {
    let rest = lexer.remainder();
    match raw_text_end(rest, name) {
        Some((content_end, tag_end)) => {
            lexer.bump(tag_end);
            &rest[..content_end]
        }
        None => {
            lexer.bump(rest.len());
            rest
        }
    }
}

/// Locate `</name` (ASCII case-insensitive) followed by a delimiter.
///
/// Returns the offset where the end tag starts and the offset just past its `>`.
fn raw_text_end(rest: &str, name: &str) -> Option<(usize, usize)> {
    let lower = rest.to_ascii_lowercase();
    let needle = format!("</{name}");
    let mut from = 0;

    while let Some(found) = lower[from..].find(&needle) {
        let start = from + found;
        let after = start + needle.len();
        match lower[after..].chars().next() {
            None => return Some((start, lower.len())),
            Some(c) if c == '>' || c == '/' || c.is_ascii_whitespace() => {
                let end = lower[after..]
                    .find('>')
                    .map_or(lower.len(), |i| after + i + 1);
                return Some((start, end));
            }
            Some(_) => from = after,
        }
    }
    None
}
