//! Attribute classification.
//!
//! An element's attributes map onto up to four macro calls, always emitted in this order:
//!
//! | Attribute   | Macro                              |
//! |-------------|------------------------------------|
//! | `id`        | `id!("...")`                       |
//! | `class`     | `class!["a", "b"]`                 |
//! | `style`     | `style! {"color"=>"red"}`          |
//! | anything else | `attrs!["href"=>"/"; "rel"=>"x"]` |

use crate::config::IdValue;
use crate::markup::Attributes;
use crate::seed::string_literal;
use crate::seed::style::{parse_style, render_style};

/// Macro calls derived from one element's attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMacros {
    pub id: Option<String>,
    pub class: Option<String>,
    pub style: Option<String>,
    pub attrs: Option<String>,
}

impl AttributeMacros {
    /// Classify `attributes`.
    ///
    /// `class` is split on whitespace and omitted when it holds no names. Generic attributes
    /// keep document order.
    pub fn classify(attributes: &Attributes, id_value: IdValue) -> Self {
        let mut macros = AttributeMacros::default();
        let mut generic = Vec::new();

        for (name, value) in attributes.iter() {
            match name {
                "id" => {
                    let id = match id_value {
                        IdValue::Placeholder => "",
                        IdValue::Attribute => value,
                    };
                    macros.id = Some(format!("id!({})", string_literal(id)));
                }
                "class" => {
                    let classes: Vec<String> =
                        value.split_whitespace().map(string_literal).collect();
                    if !classes.is_empty() {
                        macros.class = Some(format!("class![{}]", classes.join(", ")));
                    }
                }
                "style" => {
                    macros.style = Some(format!("style! {{{}}}", render_style(&parse_style(value))));
                }
                _ => generic.push(format!("{}=>{}", string_literal(name), string_literal(value))),
            }
        }

        if !generic.is_empty() {
            macros.attrs = Some(format!("attrs![{}]", generic.join("; ")));
        }
        macros
    }

    /// The present macro calls in emission order: id, class, style, attrs.
    pub fn fragments(&self) -> impl Iterator<Item = &str> {
        [&self.id, &self.class, &self.style, &self.attrs]
            .into_iter()
            .filter_map(|fragment| fragment.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.fragments().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn classify(pairs: &[(&str, &str)]) -> AttributeMacros {
        let attributes: Attributes = pairs.iter().copied().collect();
        AttributeMacros::classify(&attributes, IdValue::Placeholder)
    }

    #[test]
    fn no_attributes() {
        assert!(classify(&[]).is_empty());
    }

    #[test]
    fn fixed_order_regardless_of_input_order() {
        let macros = classify(&[
            ("href", "/"),
            ("style", "color: red"),
            ("class", "a"),
            ("id", "main"),
        ]);
        let fragments: Vec<_> = macros.fragments().collect();
        assert_eq!(
            fragments,
            vec![
                r#"id!("")"#,
                r#"class!["a"]"#,
                r#"style! {"color"=>"red"}"#,
                r#"attrs!["href"=>"/"]"#,
            ]
        );
    }

    #[test]
    fn id_placeholder_and_value() {
        let attributes: Attributes = [("id", "main")].into_iter().collect();
        assert_eq!(
            AttributeMacros::classify(&attributes, IdValue::Placeholder).id.as_deref(),
            Some(r#"id!("")"#)
        );
        assert_eq!(
            AttributeMacros::classify(&attributes, IdValue::Attribute).id.as_deref(),
            Some(r#"id!("main")"#)
        );
    }

    #[test]
    fn class_split_on_whitespace_runs() {
        assert_eq!(
            classify(&[("class", "a  b\tc ")]).class.as_deref(),
            Some(r#"class!["a", "b", "c"]"#)
        );
    }

    #[test]
    fn blank_class_is_omitted() {
        assert!(classify(&[("class", "   ")]).is_empty());
    }

    #[test]
    fn empty_style_still_emits_macro() {
        assert_eq!(classify(&[("style", "")]).style.as_deref(), Some("style! {}"));
    }

    #[test]
    fn generic_attributes_joined_in_document_order() {
        assert_eq!(
            classify(&[("type", "text"), ("disabled", ""), ("name", "q")]).attrs.as_deref(),
            Some(r#"attrs!["type"=>"text"; "disabled"=>""; "name"=>"q"]"#)
        );
    }

    #[test]
    fn values_are_escaped() {
        assert_eq!(
            classify(&[("title", r#"say "hi""#)]).attrs.as_deref(),
            Some(r#"attrs!["title"=>"say \"hi\""]"#)
        );
    }
}
