//! Walks the rules of a stylesheet and fills a [`StyleSheetRegistration`].

use crate::accumulator::StyleAccumulator;
use crate::declaration::parse_declaration;
use crate::keyframes::extract_keyframes;
use crate::options::CompileOptions;
use crate::selector::group_selector;
use crate::style::{ContainerCondition, ExtractedStyle, StyleSheetRegistration};
use native_css_parser::media::MediaQuery;
use native_css_parser::{
    ContainerRule, CssRule, MediaRule, RuleVisitor, StyleRule, VisitAction,
};
use regex::Regex;
use tracing::debug;

/// Conditions inherited from the at-rules enclosing a style rule.
#[derive(Debug, Clone, Default)]
struct Scope {
    media: Vec<MediaQuery>,
    container_query: Vec<ContainerCondition>,
}

/// Consumes every top-level rule it visits.
pub struct RuleExtractor<'a> {
    options: &'a CompileOptions,
    grouping: &'a [Regex],
    output: &'a mut StyleSheetRegistration,
}

impl<'a> RuleExtractor<'a> {
    pub fn new(
        options: &'a CompileOptions,
        grouping: &'a [Regex],
        output: &'a mut StyleSheetRegistration,
    ) -> Self {
        Self {
            options,
            grouping,
            output,
        }
    }

    fn extract_rule(&mut self, rule: &CssRule, scope: &Scope) {
        match rule {
            CssRule::Style(style) => self.extract_style(style, scope),
            CssRule::Media(media) => self.extract_media(media, scope),
            CssRule::Container(container) => self.extract_container(container, scope),
            CssRule::Keyframes(keyframes) => {
                let animation = extract_keyframes(keyframes, self.options);
                self.output.add_keyframes(&keyframes.name, animation);
            }
            CssRule::Ignored(ignored) => {
                debug!(rule = %ignored.name, line = ignored.location.line, "Dropping unsupported at-rule");
            }
        }
    }

    fn extract_media(&mut self, rule: &MediaRule, scope: &Scope) {
        let mut scope = scope.clone();

        // An empty query list applies everywhere
        if !rule.query.queries.is_empty() {
            let applicable: Vec<_> = rule
                .query
                .queries
                .iter()
                .filter(|query| query.matches_screen())
                .cloned()
                .collect();
            if applicable.is_empty() {
                debug!(line = rule.location.line, "Dropping @media rule that never applies on screen");
                return;
            }
            scope.media.extend(applicable);
        }

        for child in &rule.rules {
            self.extract_rule(child, &scope);
        }
    }

    fn extract_container(&mut self, rule: &ContainerRule, scope: &Scope) {
        let mut scope = scope.clone();
        scope.container_query.push(ContainerCondition {
            name: rule.name.clone(),
            condition: rule.condition.clone(),
            ..Default::default()
        });

        for child in &rule.rules {
            self.extract_rule(child, &scope);
        }
    }

    fn extract_style(&mut self, rule: &StyleRule, scope: &Scope) {
        let mut accumulator = StyleAccumulator::new();
        for declaration in rule.declarations.iter() {
            parse_declaration(declaration, self.options, &mut accumulator);
        }
        let base = accumulator.finish();

        for selector in &rule.selectors {
            let Some(grouped) = group_selector(selector, self.grouping) else {
                continue;
            };

            let mut container_query = scope.container_query.clone();
            for ancestor in &grouped.ancestors {
                self.output.add_declaration(
                    &ancestor.class_name,
                    ExtractedStyle::container_registration(&ancestor.class_name),
                );
                container_query.push(ContainerCondition {
                    name: Some(ancestor.class_name.clone()),
                    condition: None,
                    pseudo_classes: ancestor.pseudo_classes,
                });
            }

            let style = ExtractedStyle {
                pseudo_classes: grouped.target.pseudo_classes,
                container_query,
                media: scope.media.clone(),
                ..base.clone()
            };
            self.output.add_declaration(&grouped.target.class_name, style);
        }
    }
}

impl RuleVisitor for RuleExtractor<'_> {
    fn visit_rule(&mut self, rule: &mut CssRule) -> VisitAction {
        self.extract_rule(rule, &Scope::default());
        VisitAction::Remove
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleDeclaration;
    use native_css_parser::{ParserOptions, StyleSheet};

    fn extract(css: &str, grouping: &[&str]) -> StyleSheetRegistration {
        let options = CompileOptions::default();
        let grouping: Vec<Regex> = grouping.iter().map(|p| Regex::new(p).unwrap()).collect();
        let mut sheet = StyleSheet::parse(css, ParserOptions::default()).unwrap();
        let mut output = StyleSheetRegistration::default();
        sheet.visit_rules(&mut RuleExtractor::new(&options, &grouping, &mut output));
        assert!(sheet.rules.is_empty());
        output
    }

    #[test]
    fn every_selector_in_a_list_is_registered() {
        let output = extract(".a, .b, .c.d { color: red }", &[]);
        let names: Vec<_> = output.declarations.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn print_media_is_dropped() {
        let output = extract("@media print { .a { color: red } }", &[]);
        assert!(output.declarations.is_empty());

        let output = extract("@media not print { .a { color: red } }", &[]);
        assert_eq!(output.declarations.len(), 1);
    }

    #[test]
    fn nested_media_queries_concatenate() {
        let output = extract(
            "@media screen { @media (min-width: 100px) { .a { color: red } } }",
            &[],
        );
        let StyleDeclaration::Single(style) = &output.declarations["a"] else {
            panic!("expected a single style");
        };
        assert_eq!(style.media.len(), 2);
    }

    #[test]
    fn container_rules_come_before_ancestor_conditions() {
        let output = extract(
            "@container card (min-width: 200px) { .group .title { color: red } }",
            &["^group"],
        );
        let StyleDeclaration::Single(style) = &output.declarations["title"] else {
            panic!("expected a single style");
        };
        let names: Vec<_> = style
            .container_query
            .iter()
            .map(|c| c.name.as_deref())
            .collect();
        assert_eq!(names, vec![Some("card"), Some("group")]);
        assert!(style.container_query[0].condition.is_some());
        assert!(style.container_query[1].condition.is_none());
    }

    #[test]
    fn unsupported_at_rules_are_consumed() {
        let output = extract("@font-face { font-family: X } .a { color: red }", &[]);
        assert_eq!(output.declarations.len(), 1);
        assert!(output.keyframes.is_empty());
    }
}
