//! Error types for the compiler.

/// Result type alias for compile operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while compiling a stylesheet.
///
/// Unsupported properties, values and selectors are not errors: they are left
/// out of the output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The stylesheet could not be parsed.
    #[error(transparent)]
    Parse(#[from] native_css_parser::ParseError),

    /// The source is not valid UTF-8.
    #[error("Stylesheet is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// A grouping pattern is not a valid regular expression.
    #[error("Invalid grouping pattern '{pattern}': {source}")]
    InvalidGrouping {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The output could not be rendered as JSON.
    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Create a grouping pattern error.
    pub fn invalid_grouping(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidGrouping {
            pattern: pattern.into(),
            source,
        }
    }
}
