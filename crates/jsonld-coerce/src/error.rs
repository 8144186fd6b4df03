use std::fmt;

use serde_json::Value;

/// Failure of a single lexical parser.
///
/// Parsers never surface this directly to callers of [`crate::coerce`]; the
/// dispatcher lifts it into a [`CoercionError`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexicalError {
    #[error("invalid decimal: {0}")]
    InvalidDecimal(String),

    #[error("invalid floating-point number: {0}")]
    InvalidFloat(String),

    #[error("invalid duration: {0}")]
    InvalidDuration(String),

    #[error("invalid date/time: {0}")]
    InvalidDateTime(String),

    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    #[error("invalid base64 string: {0}")]
    InvalidBase64(String),

    #[error("literal has no lexical form: {0}")]
    NotALiteral(String),

    #[error("unsupported datatype: {0}")]
    UnsupportedDatatype(String),
}

impl LexicalError {
    pub fn decimal(msg: impl fmt::Display) -> Self {
        Self::InvalidDecimal(msg.to_string())
    }

    pub fn float(msg: impl fmt::Display) -> Self {
        Self::InvalidFloat(msg.to_string())
    }

    pub fn duration(msg: impl fmt::Display) -> Self {
        Self::InvalidDuration(msg.to_string())
    }

    pub fn date_time(msg: impl fmt::Display) -> Self {
        Self::InvalidDateTime(msg.to_string())
    }

    pub fn hex(msg: impl fmt::Display) -> Self {
        Self::InvalidHex(msg.to_string())
    }

    pub fn base64(msg: impl fmt::Display) -> Self {
        Self::InvalidBase64(msg.to_string())
    }
}

/// The single error produced by coercion.
///
/// Carries the literal exactly as it appeared in the document, the datatype IRI
/// that was requested, and the parser failure that caused it.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("Could not coerce {literal} to <{datatype}>: {source}")]
pub struct CoercionError {
    pub literal: Value,
    pub datatype: String,
    #[source]
    pub source: LexicalError,
}

impl CoercionError {
    pub fn new(literal: &Value, datatype: impl Into<String>, source: LexicalError) -> Self {
        Self {
            literal: literal.clone(),
            datatype: datatype.into(),
            source,
        }
    }

    /// Human-readable description of the underlying parse failure.
    pub fn description(&self) -> String {
        self.source.to_string()
    }
}

/// Errors raised at the boundary with an external JSON-LD processor.
#[derive(Debug, thiserror::Error)]
pub enum CompactionError {
    #[error("Invalid context document: {0}")]
    InvalidContext(String),

    #[error("JSON-LD processor error: {0}")]
    Processor(String),
}

impl CompactionError {
    pub fn context(msg: impl fmt::Display) -> Self {
        Self::InvalidContext(msg.to_string())
    }

    pub fn processor(msg: impl fmt::Display) -> Self {
        Self::Processor(msg.to_string())
    }
}

/// Result type alias for coercion.
pub type Result<T> = std::result::Result<T, CoercionError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coercion_error_display() {
        let err = CoercionError::new(
            &json!("xxx"),
            "http://www.w3.org/2001/XMLSchema#decimal",
            LexicalError::decimal("unknown character"),
        );
        assert_eq!(
            err.to_string(),
            "Could not coerce \"xxx\" to <http://www.w3.org/2001/XMLSchema#decimal>: invalid decimal: unknown character"
        );
        assert_eq!(err.description(), "invalid decimal: unknown character");
    }

    #[test]
    fn coercion_error_keeps_source() {
        use std::error::Error;

        let err = CoercionError::new(&json!(1), "urn:x", LexicalError::hex("Odd number of digits"));
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "invalid hex string: Odd number of digits");
    }
}
