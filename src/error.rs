//! Error types for configuration and event-stream handling.

/// Errors from building an [`IndentConfig`](crate::config::IndentConfig).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("indent size must be at least 1")]
    ZeroIndentSize,
    #[error("unsupported indent style {0:?}: expected a tab or a space")]
    InvalidIndentStyle(String),
}

/// Errors raised by the emitter when the event stream is not balanced.
///
/// The bundled [`markup`](crate::markup) reader always produces balanced streams, so these
/// only surface when a custom event source drives the [`Emitter`](crate::seed::Emitter).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedStreamError {
    #[error("close-element notification with no open element")]
    UnbalancedClose,
    #[error("stream ended while element `{label}` was still open")]
    UnclosedElement { label: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(
            ConfigError::InvalidIndentStyle("x".into()).to_string(),
            "unsupported indent style \"x\": expected a tab or a space"
        );
        assert_eq!(
            MalformedStreamError::UnclosedElement { label: "div0".into() }.to_string(),
            "stream ended while element `div0` was still open"
        );
    }
}
