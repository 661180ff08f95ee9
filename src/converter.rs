//! Conversion entry points.
//!
//! [`Converter`] holds the long-lived configuration and a reusable [`Emitter`]. Every call to
//! [`Converter::convert`] resets the emitter, so identical input and configuration always
//! produce identical output.

use tracing::debug;

use crate::config::{ConverterConfig, IndentConfig};
use crate::error::{ConfigError, MalformedStreamError};
use crate::markup;
use crate::seed::Emitter;

/// Markup to Seed code converter.
///
/// One instance serves one conversion at a time; `convert` takes `&mut self`.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConverterConfig,
    emitter: Emitter,
}

impl Converter {
    pub fn new(config: ConverterConfig) -> Self {
        Self {
            config,
            emitter: Emitter::new(config.indent, config.id_value),
        }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Set the indentation for subsequent conversions from a one-character style
    /// (`"\t"` or `" "`) and a repeat count.
    pub fn set_indent(&mut self, style: &str, size: usize) -> Result<(), ConfigError> {
        self.config.indent = IndentConfig::new(style.parse()?, size)?;
        Ok(())
    }

    /// Set the indentation for subsequent conversions.
    pub fn set_indent_config(&mut self, indent: IndentConfig) {
        self.config.indent = indent;
    }

    /// Convert `markup` to Seed macro code.
    ///
    /// Empty input yields an empty string.
    pub fn convert(&mut self, markup: &str) -> Result<String, MalformedStreamError> {
        self.emitter.reset(self.config.indent, self.config.id_value);
        markup::read(markup, &mut self.emitter)?;
        let multi_root = self.emitter.is_multi_root();
        let code = self.emitter.finish()?;
        debug!(
            input_len = markup.len(),
            output_len = code.len(),
            multi_root,
            "converted markup"
        );
        Ok(code)
    }
}

/// Convert `markup` with a one-off [`Converter`].
pub fn convert(markup: &str, config: &ConverterConfig) -> Result<String, MalformedStreamError> {
    Converter::new(*config).convert(markup)
}
