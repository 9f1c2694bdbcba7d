//! Splits selectors into a target class and the ancestor classes it is scoped by.
//!
//! Combinators are not matched against any tree. They only separate the
//! conditions: `.card:hover .title` styles `title` while an ancestor
//! container registered as `card` is hovered.

use crate::style::PseudoClasses;
use native_css_parser::{Component, PseudoClass, Selector};
use regex::Regex;
use tracing::debug;

/// One class in a selector, with the interaction states it requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub class_name: String,
    pub pseudo_classes: PseudoClasses,
}

impl Condition {
    fn new(class_name: &str) -> Self {
        Self {
            class_name: class_name.to_string(),
            pseudo_classes: PseudoClasses::default(),
        }
    }
}

/// A selector this compiler can attach a style to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedSelector {
    /// Outermost first.
    pub ancestors: Vec<Condition>,
    pub target: Condition,
}

/// Split `selector` into conditions, in source order.
///
/// Returns an empty list for compound class selectors (`.a.b`).
pub fn group_conditions(selector: &Selector) -> Vec<Condition> {
    let mut conditions: Vec<Condition> = Vec::new();
    let mut open = false;

    for component in &selector.components {
        match component {
            Component::Class(name) => {
                if open {
                    return Vec::new();
                }
                conditions.push(Condition::new(name));
                open = true;
            }
            Component::PseudoClass(pseudo) => {
                let Some(current) = conditions.last_mut().filter(|_| open) else {
                    continue;
                };
                match pseudo {
                    PseudoClass::Hover => current.pseudo_classes.hover = true,
                    PseudoClass::Active => current.pseudo_classes.active = true,
                    PseudoClass::Focus => current.pseudo_classes.focus = true,
                    PseudoClass::Other(_) => {}
                }
            }
            Component::Id(_)
            | Component::Type(_)
            | Component::Universal
            | Component::Attribute(_)
            | Component::PseudoElement(_)
            | Component::Combinator(_)
            | Component::Nesting => open = false,
        }
    }

    // The last compound has to be a class for the style to attach to
    if !open {
        conditions.clear();
    }
    conditions
}

/// Group `selector`, requiring every ancestor class to match one of `grouping`.
pub fn group_selector(selector: &Selector, grouping: &[Regex]) -> Option<GroupedSelector> {
    let mut conditions = group_conditions(selector);
    let Some(target) = conditions.pop() else {
        debug!(selector = %selector, "Skipping unsupported selector");
        return None;
    };

    if let Some(ungrouped) = conditions
        .iter()
        .find(|condition| !grouping.iter().any(|re| re.is_match(&condition.class_name)))
    {
        debug!(
            selector = %selector,
            class = %ungrouped.class_name,
            "Skipping selector with an ancestor outside the grouping patterns"
        );
        return None;
    }

    Some(GroupedSelector {
        ancestors: conditions,
        target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use native_css_parser::Combinator;

    fn class(name: &str) -> Component {
        Component::Class(name.to_string())
    }

    fn descendant() -> Component {
        Component::Combinator(Combinator::Descendant)
    }

    fn selector(components: Vec<Component>) -> Selector {
        Selector::new(components)
    }

    fn grouping(patterns: &[&str]) -> Vec<Regex> {
        patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
    }

    #[test]
    fn single_class() {
        let grouped = group_selector(&selector(vec![class("title")]), &[]).unwrap();
        assert!(grouped.ancestors.is_empty());
        assert_eq!(grouped.target.class_name, "title");
    }

    #[test]
    fn compound_classes_are_rejected() {
        let compound = selector(vec![class("a"), class("b")]);
        assert!(group_conditions(&compound).is_empty());
        assert!(group_selector(&compound, &grouping(&[".*"])).is_none());

        let with_pseudo = selector(vec![
            class("a"),
            Component::PseudoClass(PseudoClass::Hover),
            class("b"),
        ]);
        assert!(group_conditions(&with_pseudo).is_empty());
    }

    #[test]
    fn interaction_pseudo_classes_attach_to_their_class() {
        let grouped = group_selector(
            &selector(vec![
                class("button"),
                Component::PseudoClass(PseudoClass::Hover),
                Component::PseudoClass(PseudoClass::Other("first-child".to_string())),
                Component::PseudoClass(PseudoClass::Focus),
            ]),
            &[],
        )
        .unwrap();
        assert_eq!(
            grouped.target.pseudo_classes,
            PseudoClasses {
                hover: true,
                active: false,
                focus: true,
            }
        );
    }

    #[test]
    fn ancestors_must_match_a_grouping_pattern() {
        let nested = selector(vec![
            class("cond1"),
            Component::PseudoClass(PseudoClass::Active),
            descendant(),
            class("cond2"),
            descendant(),
            class("target"),
        ]);

        let grouped = group_selector(&nested, &grouping(&["^cond"])).unwrap();
        let ancestors: Vec<_> = grouped.ancestors.iter().map(|c| c.class_name.as_str()).collect();
        assert_eq!(ancestors, vec!["cond1", "cond2"]);
        assert!(grouped.ancestors[0].pseudo_classes.active);
        assert_eq!(grouped.target.class_name, "target");

        assert!(group_selector(&nested, &[]).is_none());
        assert!(group_selector(&nested, &grouping(&["^other"])).is_none());
    }

    #[test]
    fn trailing_structure_is_rejected() {
        let element = selector(vec![class("a"), descendant(), Component::Type("span".to_string())]);
        assert!(group_selector(&element, &grouping(&[".*"])).is_none());

        let pseudo_element = selector(vec![class("a"), Component::PseudoElement("before".to_string())]);
        assert!(group_selector(&pseudo_element, &[]).is_none());
    }

    #[test]
    fn structure_before_the_target_is_a_boundary() {
        let grouped = group_selector(
            &selector(vec![Component::Type("div".to_string()), class("a")]),
            &[],
        )
        .unwrap();
        assert_eq!(grouped.target.class_name, "a");
    }
}
