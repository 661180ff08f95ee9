//! Tree-to-text emitter.
//!
//! [`Emitter`] consumes open/text/close events and appends Seed macro code to a buffer as it
//! goes. Each open element has a [`Frame`] on a stack; the frame's `empty` flag decides
//! whether the element's call closes flush (`div![]`) or on its own line.
//!
//! Nesting depth is the stack height minus one: `-1` before any element opens, `0` inside a
//! top-level element. Indentation is always computed from the current depth at the moment of
//! emission.
//!
//! More than one top-level item makes the result *multi-root*: items are comma-joined, and
//! [`Emitter::finish`] indents the whole buffer one more level and wraps it in `vec![...]`.

use tracing::trace;

use crate::config::{IdValue, IndentConfig};
use crate::error::MalformedStreamError;
use crate::markup::{Attributes, MarkupSink};
use crate::seed::classify::AttributeMacros;
use crate::seed::string_literal;

/// Emission state of one open element.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Frame {
    /// Tag name followed by its depth, e.g. `div0`.
    label: String,
    /// No attribute macro, child element, or text has been emitted inside yet.
    empty: bool,
}

/// Streaming Seed code emitter. Reusable across conversions via [`Emitter::reset`].
#[derive(Debug, Clone, Default)]
pub struct Emitter {
    indent: IndentConfig,
    id_value: IdValue,
    buffer: String,
    stack: Vec<Frame>,
    multi_root: bool,
}

impl Emitter {
    pub fn new(indent: IndentConfig, id_value: IdValue) -> Self {
        Self {
            indent,
            id_value,
            ..Self::default()
        }
    }

    /// Clear all per-conversion state and adopt new settings.
    pub fn reset(&mut self, indent: IndentConfig, id_value: IdValue) {
        self.indent = indent;
        self.id_value = id_value;
        self.buffer.clear();
        self.stack.clear();
        self.multi_root = false;
    }

    /// Current nesting depth; `-1` when no element is open.
    pub fn depth(&self) -> isize {
        self.stack.len() as isize - 1
    }

    /// Number of elements currently open.
    pub fn open_elements(&self) -> usize {
        self.stack.len()
    }

    pub fn is_multi_root(&self) -> bool {
        self.multi_root
    }

    /// Code emitted so far, before multi-root wrapping.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Finish the conversion and return the code.
    ///
    /// Fails if an element is still open. The buffer is left empty either way.
    pub fn finish(&mut self) -> Result<String, MalformedStreamError> {
        let code = std::mem::take(&mut self.buffer);
        if let Some(frame) = self.stack.last() {
            return Err(MalformedStreamError::UnclosedElement {
                label: frame.label.clone(),
            });
        }
        if !self.multi_root {
            return Ok(code);
        }
        Ok(format!("vec![\n{}\n]", indent_lines(&code, &self.indent.unit())))
    }

    /// Append `text` indented for nesting `level`.
    fn push_indented(&mut self, level: usize, text: &str) {
        self.buffer.push_str(&self.indent.indent(level));
        self.buffer.push_str(text);
    }

    /// Separate a new top-level item from what precedes it.
    fn begin_root(&mut self) {
        if !self.buffer.is_empty() && !self.multi_root {
            trace!("second top-level item, switching to multi-root output");
            self.multi_root = true;
        }
        if self.multi_root {
            self.buffer.push_str(",\n");
        }
    }

    /// Mark the innermost element as having content, emitting the separator it needs.
    ///
    /// Returns the nesting level the new content is indented at.
    fn begin_child(&mut self) -> usize {
        let level = self.stack.len();
        if let Some(frame) = self.stack.last_mut() {
            if !frame.empty {
                self.buffer.push(',');
            }
            frame.empty = false;
            self.buffer.push('\n');
        } else {
            self.begin_root();
        }
        level
    }
}

impl MarkupSink for Emitter {
    type Error = MalformedStreamError;

    fn open_element(&mut self, name: &str, attributes: &Attributes) -> Result<(), Self::Error> {
        let macros = AttributeMacros::classify(attributes, self.id_value);

        let level = self.begin_child();
        self.push_indented(level, name);
        self.buffer.push_str("![");

        let mut frame = Frame {
            label: format!("{name}{level}"),
            empty: true,
        };
        for fragment in macros.fragments() {
            if !frame.empty {
                self.buffer.push(',');
            }
            frame.empty = false;
            self.buffer.push('\n');
            self.push_indented(level + 1, fragment);
        }
        self.stack.push(frame);
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<(), Self::Error> {
        let text = text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
        if text.is_empty() {
            return Ok(());
        }
        let level = self.begin_child();
        self.push_indented(level, &string_literal(text));
        Ok(())
    }

    fn close_element(&mut self) -> Result<(), Self::Error> {
        let frame = self
            .stack
            .pop()
            .ok_or(MalformedStreamError::UnbalancedClose)?;
        if frame.empty {
            self.buffer.push(']');
        } else {
            self.buffer.push('\n');
            self.push_indented(self.stack.len(), "]");
        }
        Ok(())
    }
}

/// Prefix every line of `code`, blank ones included, with `unit`.
fn indent_lines(code: &str, unit: &str) -> String {
    code.split('\n')
        .map(|line| format!("{unit}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
