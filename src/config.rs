//! Conversion configuration: indentation and id handling.
//!
//! [`ConverterConfig`] is long-lived caller state. It is copied into the emitter at the start
//! of every conversion and never mutated by it.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// IndentStyle
// ---------------------------------------------------------------------------

/// The character an indent block is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndentStyle {
    Tab,
    #[default]
    Space,
}

impl IndentStyle {
    pub fn as_char(self) -> char {
        match self {
            IndentStyle::Tab => '\t',
            IndentStyle::Space => ' ',
        }
    }
}

impl FromStr for IndentStyle {
    type Err = ConfigError;

    /// Accepts the literal character (`"\t"`, `" "`) or its name (`"tab"`, `"space"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "\t" | "tab" => Ok(IndentStyle::Tab),
            " " | "space" => Ok(IndentStyle::Space),
            other => Err(ConfigError::InvalidIndentStyle(other.to_owned())),
        }
    }
}

impl fmt::Display for IndentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndentStyle::Tab => f.write_str("tab"),
            IndentStyle::Space => f.write_str("space"),
        }
    }
}

// ---------------------------------------------------------------------------
// IndentConfig
// ---------------------------------------------------------------------------

/// Indentation used for one conversion: `size` copies of `style` per nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentConfig {
    style: IndentStyle,
    size: usize,
}

impl Default for IndentConfig {
    fn default() -> Self {
        Self {
            style: IndentStyle::Space,
            size: 2,
        }
    }
}

impl IndentConfig {
    /// Create a config, rejecting a zero size.
    pub fn new(style: IndentStyle, size: usize) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::ZeroIndentSize);
        }
        Ok(Self { style, size })
    }

    /// `size` spaces per level.
    pub fn spaces(size: usize) -> Result<Self, ConfigError> {
        Self::new(IndentStyle::Space, size)
    }

    /// One tab per level.
    pub fn tabs() -> Self {
        Self {
            style: IndentStyle::Tab,
            size: 1,
        }
    }

    /// Derive the config from an editor's "insert spaces" flag and tab width.
    ///
    /// Tab indentation always uses one tab per level regardless of `tab_size`.
    pub fn from_editor(insert_spaces: bool, tab_size: usize) -> Result<Self, ConfigError> {
        if insert_spaces {
            Self::spaces(tab_size)
        } else {
            Ok(Self::tabs())
        }
    }

    pub fn style(&self) -> IndentStyle {
        self.style
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// One indent block (a single nesting level).
    pub fn unit(&self) -> String {
        self.indent(1)
    }

    /// Indentation for nesting `level`.
    pub fn indent(&self, level: usize) -> String {
        self.style.as_char().to_string().repeat(level * self.size)
    }
}

// ---------------------------------------------------------------------------
// IdValue
// ---------------------------------------------------------------------------

/// What goes inside the generated `id!(...)` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdValue {
    /// Always `id!("")`. Matches the output existing consumers of this tool have seen.
    #[default]
    Placeholder,
    /// The element's actual `id` attribute value.
    Attribute,
}

// ---------------------------------------------------------------------------
// ConverterConfig
// ---------------------------------------------------------------------------

/// Configuration for a [`Converter`](crate::converter::Converter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConverterConfig {
    pub indent: IndentConfig,
    pub id_value: IdValue,
}

impl ConverterConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation (builder).
    pub fn with_indent(mut self, indent: IndentConfig) -> Self {
        self.indent = indent;
        self
    }

    /// Set the id handling (builder).
    pub fn with_id_value(mut self, id_value: IdValue) -> Self {
        self.id_value = id_value;
        self
    }
}
