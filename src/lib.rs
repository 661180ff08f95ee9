//! # html2seed
//!
//! Convert HTML fragments into [Seed](https://seed-rs.org) element macro code.
//!
//! ```ignore
//! use html2seed::Converter;
//!
//! let mut converter = Converter::default();
//! let code = converter.convert(r#"<div class="a"><p>Hi</p></div>"#)?;
//! assert_eq!(code, "div![\n  class![\"a\"],\n  p![\n    \"Hi\"\n  ]\n]");
//! ```
//!
//! ## Modules
//!
//! - **[`markup`]** — logos-based markup reader producing open/text/close events
//! - **[`seed`]** — attribute classification, style parsing, and the code emitter
//! - **[`converter`]** — the [`Converter`] tying reader and emitter together
//! - **[`config`]** — indentation and id settings
//! - **[`testing`]** — event recording and replay

// Configuration and errors
pub mod config;
pub mod error;

// Event source
pub mod markup;

// Code generation
pub mod seed;

// Entry points
pub mod converter;

// Test support
pub mod testing;

pub use config::{ConverterConfig, IdValue, IndentConfig, IndentStyle};
pub use converter::{convert, Converter};
pub use error::{ConfigError, MalformedStreamError};
