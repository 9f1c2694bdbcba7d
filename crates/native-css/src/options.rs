//! Compile options.

use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Deserializer};

/// Default pixel size of one `rem`.
pub const DEFAULT_INLINE_REM: f64 = 14.0;

/// Options for [`compile`](crate::compile).
///
/// Deserializes from the camelCase JSON a host passes in:
///
/// ```
/// use native_css::CompileOptions;
///
/// let options: CompileOptions =
///     serde_json::from_str(r#"{ "inlineRem": false, "grouping": ["^group"] }"#).unwrap();
/// assert_eq!(options.inline_rem, None);
/// assert_eq!(options.grouping, vec!["^group".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompileOptions {
    /// Pixels per `rem`. `None` keeps `rem` values for the runtime to resolve.
    #[serde(deserialize_with = "deserialize_inline_rem")]
    pub inline_rem: Option<f64>,
    /// Patterns an ancestor class must match to act as a container condition.
    pub grouping: Vec<String>,
    /// Skip malformed rules instead of failing the compile.
    pub error_recovery: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            inline_rem: Some(DEFAULT_INLINE_REM),
            grouping: Vec::new(),
            error_recovery: false,
        }
    }
}

impl CompileOptions {
    /// Compile the grouping patterns.
    pub fn grouping_patterns(&self) -> Result<Vec<Regex>> {
        self.grouping
            .iter()
            .map(|pattern| Regex::new(pattern).map_err(|e| Error::invalid_grouping(pattern, e)))
            .collect()
    }
}

/// `inlineRem` is either a number or `false`.
fn deserialize_inline_rem<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum InlineRem {
        Pixels(f64),
        Flag(bool),
    }

    match Option::<InlineRem>::deserialize(deserializer)? {
        Some(InlineRem::Pixels(pixels)) => Ok(Some(pixels)),
        Some(InlineRem::Flag(true)) | None => Ok(Some(DEFAULT_INLINE_REM)),
        Some(InlineRem::Flag(false)) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options: CompileOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, CompileOptions::default());
        assert_eq!(options.inline_rem, Some(14.0));
    }

    #[test]
    fn inline_rem_forms() {
        let options: CompileOptions = serde_json::from_str(r#"{ "inlineRem": 16 }"#).unwrap();
        assert_eq!(options.inline_rem, Some(16.0));

        let options: CompileOptions = serde_json::from_str(r#"{ "inlineRem": false }"#).unwrap();
        assert_eq!(options.inline_rem, None);
    }

    #[test]
    fn invalid_grouping_pattern() {
        let options = CompileOptions {
            grouping: vec!["^ok".to_string(), "(".to_string()],
            ..Default::default()
        };
        match options.grouping_patterns() {
            Err(Error::InvalidGrouping { pattern, .. }) => assert_eq!(pattern, "("),
            other => panic!("expected grouping error, got {other:?}"),
        }
    }
}
