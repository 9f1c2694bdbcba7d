//! CSS parsing errors.

use cssparser::{BasicParseErrorKind, ParseErrorKind};

/// Result type alias for stylesheet parsing.
pub type Result<T> = std::result::Result<T, ParseError>;

/// CSS parse error with location information.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("CSS parse error at {line}:{column}: {message}")]
pub struct ParseError {
    /// The error message describing what went wrong.
    pub message: String,
    /// Line number where the error occurred (1-indexed).
    pub line: u32,
    /// Column number where the error occurred (1-indexed).
    pub column: u32,
}

impl ParseError {
    /// Create a new parse error with the given message and location.
    pub fn new(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            message: message.into(),
            line,
            column,
        }
    }

    /// Convert a tokenizer-level error, prefixing it with what was being parsed.
    pub(crate) fn from_css(context: &str, err: &cssparser::ParseError<'_, ()>) -> Self {
        let detail = match &err.kind {
            ParseErrorKind::Basic(BasicParseErrorKind::UnexpectedToken(token)) => {
                format!("unexpected token {token:?}")
            }
            ParseErrorKind::Basic(BasicParseErrorKind::EndOfInput) => {
                "unexpected end of input".to_string()
            }
            ParseErrorKind::Basic(BasicParseErrorKind::AtRuleInvalid(name)) => {
                format!("invalid at-rule @{name}")
            }
            ParseErrorKind::Basic(BasicParseErrorKind::AtRuleBodyInvalid) => {
                "invalid at-rule body".to_string()
            }
            ParseErrorKind::Basic(BasicParseErrorKind::QualifiedRuleInvalid) => {
                "invalid qualified rule".to_string()
            }
            ParseErrorKind::Custom(()) => "invalid value".to_string(),
        };

        Self::new(
            format!("{context}: {detail}"),
            err.location.line + 1,
            err.location.column,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_location() {
        let err = ParseError::new("Expected '{' after selector", 3, 7);
        assert_eq!(
            err.to_string(),
            "CSS parse error at 3:7: Expected '{' after selector"
        );
    }
}
