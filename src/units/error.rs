use thiserror::Error;

/// Fixed response text for an unbalanced expression
pub const MALFORMED_PARENTHESES_MESSAGE: &str = "Bad Request: Malformed Parentheses";
/// Fixed response text for an unknown or garbled unit token
pub const MALFORMED_UNIT_MESSAGE: &str = "Bad Request: Malformed units query param";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("malformed parentheses at byte {position}")]
    MalformedParentheses { position: usize },
    #[error("malformed unit '{token}'")]
    MalformedUnit { token: String },
    #[error("multiplication factor for '{units}' is not finite")]
    NonFiniteFactor { units: String },
}

impl ConversionError {
    pub fn malformed_unit(token: impl Into<String>) -> Self {
        ConversionError::MalformedUnit {
            token: token.into(),
        }
    }

    /// Text shown to the caller of the conversion boundary.
    /// `None` marks a generic failure that carries no message.
    pub fn bad_request_message(&self) -> Option<&'static str> {
        match self {
            ConversionError::MalformedParentheses { .. } => Some(MALFORMED_PARENTHESES_MESSAGE),
            ConversionError::MalformedUnit { .. } => Some(MALFORMED_UNIT_MESSAGE),
            ConversionError::NonFiniteFactor { .. } => None,
        }
    }
}
