//! Cross-cutting error types for exitready.
//!
//! Domain-specific errors (e.g., `CodecError`, `ConfigError`) are defined in
//! their respective crates. The CLI converges them through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any exitready crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (range, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A JSON document could not be parsed.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_document_surfaces_as_parse_error() {
        let err = crate::QuestionnaireSpec::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CoreError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error:"));
    }

    #[test]
    fn validation_message_is_prefixed() {
        let err = "sideways".parse::<crate::enums::GrowthTrend>().unwrap_err();
        assert_eq!(err.to_string(), "Validation error: unknown growth trend 'sideways'");
    }
}
