//! Output model of a compile pass.
//!
//! Everything here serializes to the JSON shape a styling runtime consumes:
//! camelCase keys, empty optional fields omitted, maps in source order.

use crate::error::Result;
use indexmap::IndexMap;
use native_css_parser::media::{MediaQuery, QueryCondition};
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// A compiled style value.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Number(f64),
    String(String),
    Array(Vec<StyleValue>),
    Object(IndexMap<String, StyleValue>),
    /// A value the runtime resolves once it knows the viewport, the
    /// variables in scope or the layout.
    Runtime(RuntimeValue),
    /// A function call kept for the runtime, e.g. `translateX(var(--x))`.
    Function(RuntimeValue),
}

/// Name and arguments of a [`StyleValue::Runtime`] or [`StyleValue::Function`].
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeValue {
    pub name: String,
    pub arguments: Vec<StyleValue>,
}

impl StyleValue {
    pub fn runtime(name: impl Into<String>, arguments: Vec<StyleValue>) -> Self {
        StyleValue::Runtime(RuntimeValue {
            name: name.into(),
            arguments,
        })
    }

    pub fn function(name: impl Into<String>, arguments: Vec<StyleValue>) -> Self {
        StyleValue::Function(RuntimeValue {
            name: name.into(),
            arguments,
        })
    }

    /// A number from a parsed `f32`, using the shortest decimal that reads
    /// back as the same `f32` (`0.1` stays `0.1`).
    pub fn from_f32(value: f32) -> Self {
        StyleValue::Number(f32_to_f64(value))
    }

    /// A single-entry object such as `{ "translateX": 10 }`.
    pub fn entry(key: impl Into<String>, value: StyleValue) -> Self {
        let mut map = IndexMap::new();
        map.insert(key.into(), value);
        StyleValue::Object(map)
    }

    /// Whether every number in this value is finite. Overflowing literals
    /// parse as infinity, which has no JSON form.
    pub fn is_finite(&self) -> bool {
        match self {
            StyleValue::Number(number) => number.is_finite(),
            StyleValue::String(_) => true,
            StyleValue::Runtime(runtime) | StyleValue::Function(runtime) => {
                runtime.arguments.iter().all(StyleValue::is_finite)
            }
            StyleValue::Array(items) => items.iter().all(StyleValue::is_finite),
            StyleValue::Object(map) => map.values().all(StyleValue::is_finite),
        }
    }

    /// Whether this value, or anything nested in it, needs the runtime.
    pub fn is_dynamic(&self) -> bool {
        match self {
            StyleValue::Number(_) | StyleValue::String(_) => false,
            StyleValue::Runtime(_) => true,
            StyleValue::Function(function) => function.arguments.iter().any(StyleValue::is_dynamic),
            StyleValue::Array(items) => items.iter().any(StyleValue::is_dynamic),
            StyleValue::Object(map) => map.values().any(StyleValue::is_dynamic),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::String(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::String(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl Serialize for StyleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            StyleValue::Number(number) => serialize_number(*number, serializer),
            StyleValue::String(string) => serializer.serialize_str(string),
            StyleValue::Array(items) => items.serialize(serializer),
            StyleValue::Object(map) => map.serialize(serializer),
            StyleValue::Runtime(runtime) => runtime.serialize_tagged("runtime", serializer),
            StyleValue::Function(function) => function.serialize_tagged("function", serializer),
        }
    }
}

impl RuntimeValue {
    fn serialize_tagged<S: Serializer>(
        &self,
        tag: &str,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("type", tag)?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("arguments", &self.arguments)?;
        map.end()
    }
}

/// Integral numbers serialize as integers (`10`, not `10.0`).
fn serialize_number<S: Serializer>(number: f64, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    if is_integral(number) {
        serializer.serialize_i64(number as i64)
    } else {
        serializer.serialize_f64(number)
    }
}

fn serialize_offset<S: Serializer>(offset: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serialize_number(*offset, serializer)
}

fn is_integral(number: f64) -> bool {
    number.fract() == 0.0 && number.abs() < 1e15
}

pub(crate) fn f32_to_f64(value: f32) -> f64 {
    value
        .to_string()
        .parse::<f64>()
        .unwrap_or_else(|_| f64::from(value))
}

/// [`f32_to_f64`] for finite values only.
pub(crate) fn finite(value: f32) -> Option<f64> {
    value.is_finite().then(|| f32_to_f64(value))
}

/// Format a number the way it appears inside CSS strings: `1`, `0.5`, `33.33`.
pub(crate) fn format_number(number: f64) -> String {
    if is_integral(number) {
        format!("{}", number as i64)
    } else {
        format!("{}", number)
    }
}

/// Which of the runtime-tracked pseudo-classes a style applies under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PseudoClasses {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub hover: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub active: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub focus: bool,
}

impl PseudoClasses {
    pub fn is_empty(&self) -> bool {
        !(self.hover || self.active || self.focus)
    }
}

/// A style's own container registration (`container`, `container-name`,
/// `container-type`).
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ContainerDescriptor {
    /// Container names; `container-name: none` leaves an empty list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub names: Option<Vec<String>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub container_type: Option<String>,
}

/// One condition a style needs an ancestor container to satisfy.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerCondition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<QueryCondition>,
    #[serde(skip_serializing_if = "PseudoClasses::is_empty")]
    pub pseudo_classes: PseudoClasses,
}

/// Parallel transition arrays. A `Some` field has been set and is not
/// overwritten by later transition declarations.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<Vec<String>>,
    /// Milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Vec<StyleValue>>,
    /// Milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<Vec<StyleValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing_function: Option<Vec<String>>,
}

/// Per-aspect animation lists, one entry per simultaneous animation.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Vec<String>>,
    /// Milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Vec<StyleValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing_function: Option<Vec<String>>,
    /// Numbers, or `"infinite"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iteration_count: Option<Vec<StyleValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub play_state: Option<Vec<String>>,
    /// Milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<Vec<StyleValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_mode: Option<Vec<String>>,
}

/// The compiled payload of one selector (or one keyframe).
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedStyle {
    /// camelCased property name to value.
    pub style: IndexMap<String, StyleValue>,
    /// `--custom` properties, keyed by their full name.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub variables: IndexMap<String, StyleValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerDescriptor>,
    /// Outermost condition first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub container_query: Vec<ContainerCondition>,
    #[serde(skip_serializing_if = "PseudoClasses::is_empty")]
    pub pseudo_classes: PseudoClasses,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<TransitionDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animations: Option<AnimationDescriptor>,
    /// Media queries of every enclosing `@media` rule, outermost first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub media: Vec<MediaQuery>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_dynamic: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub requires_layout: bool,
}

impl ExtractedStyle {
    /// A style that only registers its class as a named container.
    pub fn container_registration(name: &str) -> Self {
        ExtractedStyle {
            container: Some(ContainerDescriptor {
                names: Some(vec![name.to_string()]),
                container_type: None,
            }),
            ..Default::default()
        }
    }
}

/// One frame of a compiled animation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedKeyframe {
    /// Offset in `0..=1`.
    #[serde(serialize_with = "serialize_offset")]
    pub selector: f64,
    pub style: IndexMap<String, StyleValue>,
}

/// The frames of one `@keyframes` rule, sorted by offset.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedAnimation {
    pub frames: Vec<ExtractedKeyframe>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub requires_layout: bool,
}

/// What one class name compiles to: a single style, or every conditional
/// variant in source order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleDeclaration {
    Single(ExtractedStyle),
    Multiple(Vec<ExtractedStyle>),
}

impl StyleDeclaration {
    /// All variants, in source order.
    pub fn styles(&self) -> &[ExtractedStyle] {
        match self {
            StyleDeclaration::Single(style) => std::slice::from_ref(style),
            StyleDeclaration::Multiple(styles) => styles,
        }
    }
}

/// The result of compiling one stylesheet.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StyleSheetRegistration {
    pub declarations: IndexMap<String, StyleDeclaration>,
    pub keyframes: IndexMap<String, ExtractedAnimation>,
}

impl StyleSheetRegistration {
    /// Add a style for `class_name`. A second style for the same name turns
    /// the entry into a list; nothing is overwritten.
    pub fn add_declaration(&mut self, class_name: &str, style: ExtractedStyle) {
        let Some(entry) = self.declarations.get_mut(class_name) else {
            self.declarations
                .insert(class_name.to_string(), StyleDeclaration::Single(style));
            return;
        };
        match entry {
            StyleDeclaration::Multiple(styles) => styles.push(style),
            StyleDeclaration::Single(first) => {
                let first = std::mem::take(first);
                *entry = StyleDeclaration::Multiple(vec![first, style]);
            }
        }
    }

    /// Add a compiled animation. A later `@keyframes` with the same name wins.
    pub fn add_keyframes(&mut self, name: &str, animation: ExtractedAnimation) {
        self.keyframes.insert(name.to_string(), animation);
    }

    /// Render both maps as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn numbers_keep_their_shortest_form() {
        assert_eq!(StyleValue::from_f32(0.1), StyleValue::Number(0.1));
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(
            serde_json::to_value(StyleValue::Number(10.0)).unwrap(),
            json!(10)
        );
    }

    #[test]
    fn overflowing_numbers_are_not_finite() {
        assert!(!StyleValue::from_f32(f32::INFINITY).is_finite());
        assert!(!StyleValue::runtime("em", vec![StyleValue::Number(f64::NAN)]).is_finite());
        assert!(StyleValue::entry("translateX", StyleValue::Number(10.0)).is_finite());
        assert_eq!(finite(f32::NEG_INFINITY), None);
        assert_eq!(finite(0.5), Some(0.5));
    }

    #[test]
    fn keyframe_offsets_use_integral_numbers() {
        let frame = ExtractedKeyframe {
            selector: 1.0,
            style: IndexMap::new(),
        };
        assert_eq!(
            serde_json::to_string(&frame).unwrap(),
            r#"{"selector":1,"style":{}}"#
        );
    }

    #[test]
    fn runtime_values_serialize_tagged() {
        let value = StyleValue::runtime("vw", vec![StyleValue::Number(50.0)]);
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            json!({ "type": "runtime", "name": "vw", "arguments": [50] })
        );
        assert!(value.is_dynamic());
        assert!(StyleValue::Array(vec![value]).is_dynamic());
        assert!(!StyleValue::from("red").is_dynamic());
    }

    #[test]
    fn empty_fields_are_omitted() {
        let mut style = ExtractedStyle::default();
        style.style.insert("color".to_string(), "red".into());
        style.pseudo_classes.hover = true;
        assert_eq!(
            serde_json::to_value(&style).unwrap(),
            json!({ "style": { "color": "red" }, "pseudoClasses": { "hover": true } })
        );
    }

    #[test]
    fn second_declaration_collapses_into_a_list() {
        let mut registration = StyleSheetRegistration::default();
        let mut first = ExtractedStyle::default();
        first.style.insert("color".to_string(), "red".into());
        let mut second = ExtractedStyle::default();
        second.style.insert("color".to_string(), "blue".into());
        let third = ExtractedStyle::default();

        registration.add_declaration("a", first.clone());
        assert!(matches!(registration.declarations["a"], StyleDeclaration::Single(_)));

        registration.add_declaration("a", second.clone());
        registration.add_declaration("a", third.clone());
        assert_eq!(
            registration.declarations["a"],
            StyleDeclaration::Multiple(vec![first, second, third])
        );
    }
}
