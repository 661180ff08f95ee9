//! Seed macro code generation: attribute classification, inline style parsing, and the
//! tree-to-text emitter.

pub mod classify;
pub mod emitter;
pub mod style;

pub use classify::AttributeMacros;
pub use emitter::Emitter;
pub use style::{parse_style, render_style, Declaration};

/// Render `value` as a Rust string literal, escaping `\` and `"`.
pub(crate) fn string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            literal.push('\\');
        }
        literal.push(c);
    }
    literal.push('"');
    literal
}
