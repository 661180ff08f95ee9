//! Element classification tables used by the reader.

/// Elements that never have content and close as soon as they open.
pub fn is_void(name: &str) -> bool {
    matches!(
        name,
        "area"
            | "base"
            | "basefont"
            | "br"
            | "col"
            | "command"
            | "embed"
            | "frame"
            | "hr"
            | "img"
            | "input"
            | "isindex"
            | "keygen"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

/// How the content of a raw-text element is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawText {
    /// Taken verbatim up to the end tag.
    Verbatim,
    /// Taken up to the end tag, with entity references decoded.
    Escapable,
}

/// Elements whose content is text only, up to the matching end tag.
pub fn raw_text(name: &str) -> Option<RawText> {
    match name {
        "script" | "style" => Some(RawText::Verbatim),
        "textarea" | "title" => Some(RawText::Escapable),
        _ => None,
    }
}

const P: &[&str] = &["p"];
const FORM_CONTROLS: &[&str] = &[
    "input", "option", "optgroup", "select", "button", "datalist", "textarea",
];
const TABLE_SECTIONS: &[&str] = &["thead", "tbody"];
const DEFINITION_TERMS: &[&str] = &["dd", "dt"];
const RUBY_TEXT: &[&str] = &["rt", "rp"];

/// Elements implicitly closed when `opening` starts while one of them is the innermost open
/// element.
fn closed_by(opening: &str) -> &'static [&'static str] {
    match opening {
        "tr" => &["tr", "th", "td"],
        "th" => &["th"],
        "td" => &["thead", "th", "td"],
        "body" => &["head", "link", "script"],
        "li" => &["li"],
        "option" => &["option"],
        "optgroup" => &["optgroup", "option"],
        "select" | "input" | "output" | "button" | "datalist" | "textarea" => FORM_CONTROLS,
        "dd" | "dt" => DEFINITION_TERMS,
        "rt" | "rp" => RUBY_TEXT,
        "tbody" | "tfoot" => TABLE_SECTIONS,
        "p" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "address" | "article" | "aside"
        | "blockquote" | "details" | "div" | "dl" | "fieldset" | "figcaption" | "figure"
        | "footer" | "form" | "header" | "hr" | "main" | "nav" | "ol" | "pre" | "section"
        | "table" | "ul" => P,
        _ => &[],
    }
}

/// Whether opening `opening` implicitly closes the open element `open`.
pub fn implies_close(opening: &str, open: &str) -> bool {
    closed_by(opening).contains(&open)
}
