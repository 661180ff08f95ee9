//! Inline `style` attribute parsing.
//!
//! A declaration list like `color: red; margin: 0` is split on semicolons, then each
//! declaration on its first colon, so values that contain colons (`url(http://...)`) stay
//! whole. Property names and values are trimmed of surrounding whitespace.

use crate::seed::string_literal;

/// One `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// Parse a declaration list. Empty segments are dropped; a segment without a colon becomes a
/// declaration with an empty value.
pub fn parse_style(input: &str) -> Vec<Declaration> {
    input
        .split(';')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once(':') {
            Some((property, value)) => Declaration::new(property.trim(), value.trim()),
            None => Declaration::new(segment, ""),
        })
        .collect()
}

/// Render declarations as the body of a `style!` call: `"color"=>"red";"margin"=>"0"`.
pub fn render_style(declarations: &[Declaration]) -> String {
    declarations
        .iter()
        .map(|d| format!("{}=>{}", string_literal(&d.property), string_literal(&d.value)))
        .collect::<Vec<_>>()
        .join(";")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_declarations() {
        assert_eq!(
            parse_style("color: red; margin:0"),
            vec![Declaration::new("color", "red"), Declaration::new("margin", "0")]
        );
    }

    #[test]
    fn repeated_and_trailing_semicolons() {
        assert_eq!(
            parse_style(" ;;color:red ;; ; "),
            vec![Declaration::new("color", "red")]
        );
    }

    #[test]
    fn value_keeps_later_colons() {
        assert_eq!(
            parse_style("background: url(http://x.test/a.png)"),
            vec![Declaration::new("background", "url(http://x.test/a.png)")]
        );
    }

    #[test]
    fn missing_colon_gives_empty_value() {
        assert_eq!(parse_style("bold"), vec![Declaration::new("bold", "")]);
    }

    #[test]
    fn empty_input() {
        assert!(parse_style("").is_empty());
        assert_eq!(render_style(&parse_style("  ")), "");
    }

    #[test]
    fn rendering() {
        let declarations = parse_style("color: red; margin:0");
        assert_eq!(render_style(&declarations), r#""color"=>"red";"margin"=>"0""#);
    }
}
