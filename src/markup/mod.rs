//! Markup event source: tokenizer, element tables, and the streaming reader.
//!
//! [`read`] walks markup text once and reports it to a [`MarkupSink`] as three kinds of
//! notification: element open, text, and element close. The stream it produces is always
//! balanced.

pub mod elements;
pub mod reader;
pub mod tokenizer;

pub use reader::read;

// ---------------------------------------------------------------------------
// MarkupSink
// ---------------------------------------------------------------------------

/// Consumer of markup events, invoked synchronously in document order.
pub trait MarkupSink {
    /// Error that aborts the read.
    type Error;

    /// An element was opened. `name` is lower-cased.
    fn open_element(&mut self, name: &str, attributes: &Attributes) -> Result<(), Self::Error>;

    /// A run of text. Entity references are already decoded; whitespace is untouched.
    fn text(&mut self, text: &str) -> Result<(), Self::Error>;

    /// The most recently opened element was closed.
    fn close_element(&mut self) -> Result<(), Self::Error>;
}

// ---------------------------------------------------------------------------
// Attributes
// ---------------------------------------------------------------------------

/// Attributes of one element, in document order, with unique names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute. The first value wins for a repeated name.
    ///
    /// Returns `false` if `name` was already present.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
        let name = name.into();
        if self.get(&name).is_some() {
            return false;
        }
        self.entries.push((name, value.into()));
        true
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (name, value) in iter {
            attributes.insert(name, value);
        }
        attributes
    }
}
