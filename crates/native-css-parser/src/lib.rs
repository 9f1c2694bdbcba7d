//! Typed CSS parser for native-css.
//!
//! Parses CSS text into a closed-world rule and declaration tree:
//!
//! - **Rules**: style rules, `@media`, `@container` and `@keyframes`; every
//!   other at-rule is kept as an ignored marker
//! - **Selectors**: flat component lists with explicit combinators
//! - **Declarations**: one [`Property`] variant per known CSS property, with
//!   values that could not be typed (e.g. because they use `var()`) kept as
//!   token lists
//!
//! # Example
//!
//! ```
//! use native_css_parser::{CssRule, ParserOptions, Property, StyleSheet};
//!
//! let sheet = StyleSheet::parse(".title { color: red; }", ParserOptions::default())?;
//! let CssRule::Style(rule) = &sheet.rules[0] else { unreachable!() };
//! assert!(matches!(rule.declarations.declarations[0], Property::Color(_)));
//! # Ok::<(), native_css_parser::ParseError>(())
//! ```

pub mod media;
pub mod properties;
pub mod rules;
pub mod selector;
pub mod tokens;
pub mod values;

mod error;
mod parser;

pub use error::{ParseError, Result};
pub use parser::ParserOptions;
pub use properties::{CustomProperty, Property, PropertyId, UnparsedProperty};
pub use rules::{
    ContainerRule, CssRule, DeclarationBlock, IgnoredRule, Keyframe, KeyframeSelector,
    KeyframesRule, MediaRule, RuleVisitor, SourceLocation, StyleRule, StyleSheet, VisitAction,
};
pub use selector::{Combinator, Component, PseudoClass, Selector};
pub use tokens::{TokenList, TokenOrValue};
