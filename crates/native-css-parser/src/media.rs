//! Media and container query types.

use serde::Serialize;

/// A comma-separated media query list. An empty list matches everything.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MediaList {
    pub queries: Vec<MediaQuery>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<Qualifier>,
    pub media_type: MediaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<QueryCondition>,
}

impl MediaQuery {
    /// Whether this query can apply on a screen.
    pub fn matches_screen(&self) -> bool {
        let matches = !matches!(self.media_type, MediaType::Print);
        match self.qualifier {
            Some(Qualifier::Not) => !matches,
            _ => matches,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Qualifier {
    Only,
    Not,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    All,
    Print,
    Screen,
    Custom(String),
}

impl MediaType {
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "all" => MediaType::All,
            "print" => MediaType::Print,
            "screen" => MediaType::Screen,
            other => MediaType::Custom(other.to_string()),
        }
    }
}

/// A boolean tree of query features, shared by `@media` and `@container`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QueryCondition {
    Feature(QueryFeature),
    Not { condition: Box<QueryCondition> },
    Operation {
        operator: Operator,
        conditions: Vec<QueryCondition>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    And,
    Or,
}

/// `(name)`, `(name: value)` or `(name <op> value)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryFeature {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Comparison>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<FeatureValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Comparison {
    #[serde(rename = "=")]
    Equal,
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = ">=")]
    GreaterThanEqual,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = "<=")]
    LessThanEqual,
}

impl Comparison {
    /// The comparison seen from the other side (`a < b` is `b > a`).
    pub fn flip(self) -> Self {
        match self {
            Comparison::Equal => Comparison::Equal,
            Comparison::GreaterThan => Comparison::LessThan,
            Comparison::GreaterThanEqual => Comparison::LessThanEqual,
            Comparison::LessThan => Comparison::GreaterThan,
            Comparison::LessThanEqual => Comparison::GreaterThanEqual,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum FeatureValue {
    /// A length, kept as value and unit (`768px`).
    Length { value: f32, unit: String },
    Number(f32),
    Ident(String),
    Ratio(f32, f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(qualifier: Option<Qualifier>, media_type: MediaType) -> MediaQuery {
        MediaQuery {
            qualifier,
            media_type,
            condition: None,
        }
    }

    #[test]
    fn screen_applicability() {
        assert!(query(None, MediaType::Screen).matches_screen());
        assert!(query(None, MediaType::All).matches_screen());
        assert!(!query(None, MediaType::Print).matches_screen());
        assert!(query(Some(Qualifier::Not), MediaType::Print).matches_screen());
        assert!(!query(Some(Qualifier::Not), MediaType::Screen).matches_screen());
    }

    #[test]
    fn comparison_flip() {
        assert_eq!(Comparison::LessThan.flip(), Comparison::GreaterThan);
        assert_eq!(Comparison::Equal.flip(), Comparison::Equal);
    }
}
