//! Stylesheet and rule definitions.

use crate::media::{MediaList, QueryCondition};
use crate::properties::Property;
use crate::selector::Selector;

/// Location of a rule in its source (1-indexed line, 1-indexed column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub line: u32,
    pub column: u32,
}

/// A parsed stylesheet: top-level rules in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleSheet {
    pub rules: Vec<CssRule>,
}

impl StyleSheet {
    /// Walk the top-level rules in order. Rules the visitor removes are
    /// dropped from the stylesheet.
    pub fn visit_rules<V: RuleVisitor>(&mut self, visitor: &mut V) {
        self.rules
            .retain_mut(|rule| visitor.visit_rule(rule) == VisitAction::Keep);
    }
}

/// What to do with a rule after a visitor has seen it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitAction {
    Keep,
    Remove,
}

/// Hook for traversing a [`StyleSheet`].
pub trait RuleVisitor {
    fn visit_rule(&mut self, rule: &mut CssRule) -> VisitAction;
}

#[derive(Debug, Clone, PartialEq)]
pub enum CssRule {
    Style(StyleRule),
    Media(MediaRule),
    Container(ContainerRule),
    Keyframes(KeyframesRule),
    /// An at-rule that is recognized syntactically but carries nothing we
    /// compile (`@font-face`, `@supports`, `@import`, ...).
    Ignored(IgnoredRule),
}

/// A style rule mapping selectors to declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    /// The comma-separated selector list.
    pub selectors: Vec<Selector>,
    pub declarations: DeclarationBlock,
    pub location: SourceLocation,
}

/// Declarations of one block, split by importance, each in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeclarationBlock {
    pub declarations: Vec<Property>,
    pub important_declarations: Vec<Property>,
}

impl DeclarationBlock {
    /// Normal declarations followed by `!important` ones.
    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.declarations
            .iter()
            .chain(self.important_declarations.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty() && self.important_declarations.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MediaRule {
    pub query: MediaList,
    pub rules: Vec<CssRule>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContainerRule {
    pub name: Option<String>,
    pub condition: Option<QueryCondition>,
    pub rules: Vec<CssRule>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyframesRule {
    pub name: String,
    pub keyframes: Vec<Keyframe>,
    pub location: SourceLocation,
}

/// One frame block: `from, 50% { ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframe {
    pub selectors: Vec<KeyframeSelector>,
    pub declarations: DeclarationBlock,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyframeSelector {
    From,
    To,
    /// A percentage as a fraction (`50%` is `0.5`).
    Percentage(f32),
}

impl KeyframeSelector {
    /// The frame offset in `0..=1`.
    pub fn offset(&self) -> f32 {
        match self {
            KeyframeSelector::From => 0.0,
            KeyframeSelector::To => 1.0,
            KeyframeSelector::Percentage(value) => *value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredRule {
    pub name: String,
    pub location: SourceLocation,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DropIgnored {
        seen: usize,
    }

    impl RuleVisitor for DropIgnored {
        fn visit_rule(&mut self, rule: &mut CssRule) -> VisitAction {
            self.seen += 1;
            match rule {
                CssRule::Ignored(_) => VisitAction::Remove,
                _ => VisitAction::Keep,
            }
        }
    }

    fn ignored(name: &str) -> CssRule {
        CssRule::Ignored(IgnoredRule {
            name: name.to_string(),
            location: SourceLocation::default(),
        })
    }

    #[test]
    fn visitor_removes_rules() {
        let mut sheet = StyleSheet {
            rules: vec![
                ignored("font-face"),
                CssRule::Keyframes(KeyframesRule {
                    name: "spin".to_string(),
                    keyframes: vec![],
                    location: SourceLocation::default(),
                }),
                ignored("supports"),
            ],
        };
        let mut visitor = DropIgnored { seen: 0 };
        sheet.visit_rules(&mut visitor);
        assert_eq!(visitor.seen, 3);
        assert_eq!(sheet.rules.len(), 1);
        assert!(matches!(sheet.rules[0], CssRule::Keyframes(_)));
    }

    #[test]
    fn keyframe_offsets() {
        assert_eq!(KeyframeSelector::From.offset(), 0.0);
        assert_eq!(KeyframeSelector::To.offset(), 1.0);
        assert_eq!(KeyframeSelector::Percentage(0.25).offset(), 0.25);
    }
}
