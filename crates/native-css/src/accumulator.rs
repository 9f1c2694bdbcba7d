//! Collects compiled declarations into an [`ExtractedStyle`].

use crate::declaration::values::{parse_easing, parse_time};
use crate::style::{
    AnimationDescriptor, ContainerDescriptor, ExtractedStyle, StyleValue, TransitionDescriptor,
    finite,
};
use inflector::Inflector;
use native_css_parser::values::animation::{
    Animation, AnimationDirection, AnimationFillMode, AnimationIterationCount, AnimationName,
    AnimationPlayState, EasingFunction, PropertyName, Transition,
};
use native_css_parser::values::container::{Container, ContainerName, ContainerType};
use native_css_parser::values::length::Time;
use tracing::debug;

/// How a style property write interacts with an existing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PropOptions {
    /// Written by a shorthand: an existing value wins.
    pub short_hand: bool,
    /// Concatenate onto an existing array instead of replacing it.
    pub append: bool,
}

impl PropOptions {
    pub const SHORTHAND: PropOptions = PropOptions {
        short_hand: true,
        append: false,
    };

    pub const APPEND: PropOptions = PropOptions {
        short_hand: false,
        append: true,
    };
}

/// A `transition` family declaration.
#[derive(Debug, Clone, Copy)]
pub enum TransitionDeclaration<'a> {
    Property(&'a [PropertyName]),
    Duration(&'a [Time]),
    Delay(&'a [Time]),
    TimingFunction(&'a [EasingFunction]),
    Shorthand(&'a [Transition]),
}

/// An `animation` family declaration.
#[derive(Debug, Clone, Copy)]
pub enum AnimationDeclaration<'a> {
    Name(&'a [AnimationName]),
    Duration(&'a [Time]),
    TimingFunction(&'a [EasingFunction]),
    IterationCount(&'a [AnimationIterationCount]),
    Direction(&'a [AnimationDirection]),
    PlayState(&'a [AnimationPlayState]),
    Delay(&'a [Time]),
    FillMode(&'a [AnimationFillMode]),
    Shorthand(&'a [Animation]),
}

/// A `container` family declaration.
#[derive(Debug, Clone, Copy)]
pub enum ContainerDeclaration<'a> {
    Name(&'a ContainerName),
    Type(ContainerType),
    Shorthand(&'a Container),
}

/// Receiver of compiled declarations.
pub trait DeclarationSink {
    /// Store a style property. `None` values are unsupported and ignored.
    fn add_style_prop(&mut self, property: &str, value: Option<StyleValue>, options: PropOptions);

    fn add_animation_prop(&mut self, declaration: AnimationDeclaration<'_>);

    fn add_container_prop(&mut self, declaration: ContainerDeclaration<'_>);

    fn add_transition_prop(&mut self, declaration: TransitionDeclaration<'_>);

    /// Mark the style as needing layout measurements.
    fn requires_layout(&mut self);

    fn add_longhand(&mut self, property: &str, value: Option<StyleValue>) {
        self.add_style_prop(property, value, PropOptions::default());
    }

    fn add_shorthand(&mut self, property: &str, value: Option<StyleValue>) {
        self.add_style_prop(property, value, PropOptions::SHORTHAND);
    }
}

/// Builds one [`ExtractedStyle`]. Create one per rule or keyframe.
#[derive(Debug, Default)]
pub struct StyleAccumulator {
    style: ExtractedStyle,
}

impl StyleAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing record, e.g. one carrying scoping context.
    pub fn with_style(style: ExtractedStyle) -> Self {
        Self { style }
    }

    pub fn finish(self) -> ExtractedStyle {
        self.style
    }
}

impl DeclarationSink for StyleAccumulator {
    fn add_style_prop(&mut self, property: &str, value: Option<StyleValue>, options: PropOptions) {
        let Some(value) = value else {
            return;
        };
        if !value.is_finite() {
            debug!(property, "Dropping value with a non-finite number");
            return;
        }

        if value.is_dynamic() {
            self.style.is_dynamic = true;
        }

        if property.starts_with("--") {
            self.style.variables.insert(property.to_string(), value);
            return;
        }

        let property = property.to_camel_case();
        let style = &mut self.style.style;

        if options.append {
            let items = match value {
                StyleValue::Array(items) => items,
                other => vec![other],
            };
            match style.get_mut(&property) {
                Some(StyleValue::Array(existing)) => existing.extend(items),
                _ => {
                    style.insert(property, StyleValue::Array(items));
                }
            }
        } else if options.short_hand {
            style.entry(property).or_insert(value);
        } else {
            style.insert(property, value);
        }
    }

    fn add_animation_prop(&mut self, declaration: AnimationDeclaration<'_>) {
        let animations = self
            .style
            .animations
            .get_or_insert_with(AnimationDescriptor::default);

        match declaration {
            AnimationDeclaration::Name(names) => {
                animations.name = Some(names.iter().map(animation_name).collect());
            }
            AnimationDeclaration::Duration(times) => {
                animations.duration = times.iter().map(parse_time).collect();
            }
            AnimationDeclaration::TimingFunction(easings) => {
                animations.timing_function = easings.iter().map(parse_easing).collect();
            }
            AnimationDeclaration::IterationCount(counts) => {
                animations.iteration_count = counts.iter().map(iteration_count).collect();
            }
            AnimationDeclaration::Direction(directions) => {
                animations.direction = Some(strings(directions.iter().map(|d| d.as_str())));
            }
            AnimationDeclaration::PlayState(states) => {
                animations.play_state = Some(strings(states.iter().map(|s| s.as_str())));
            }
            AnimationDeclaration::Delay(times) => {
                animations.delay = times.iter().map(parse_time).collect();
            }
            AnimationDeclaration::FillMode(modes) => {
                animations.fill_mode = Some(strings(modes.iter().map(|m| m.as_str())));
            }
            AnimationDeclaration::Shorthand(list) => {
                animations.name = Some(list.iter().map(|a| animation_name(&a.name)).collect());
                animations.duration = list.iter().map(|a| parse_time(&a.duration)).collect();
                animations.timing_function =
                    list.iter().map(|a| parse_easing(&a.timing_function)).collect();
                animations.iteration_count =
                    list.iter().map(|a| iteration_count(&a.iteration_count)).collect();
                animations.direction = Some(strings(list.iter().map(|a| a.direction.as_str())));
                animations.play_state = Some(strings(list.iter().map(|a| a.play_state.as_str())));
                animations.delay = list.iter().map(|a| parse_time(&a.delay)).collect();
                animations.fill_mode = Some(strings(list.iter().map(|a| a.fill_mode.as_str())));
            }
        }
    }

    fn add_container_prop(&mut self, declaration: ContainerDeclaration<'_>) {
        let container = self
            .style
            .container
            .get_or_insert_with(ContainerDescriptor::default);

        match declaration {
            ContainerDeclaration::Name(name) => container.names = Some(container_names(name)),
            ContainerDeclaration::Type(container_type) => {
                container.container_type = Some(container_type.as_str().to_string());
            }
            ContainerDeclaration::Shorthand(shorthand) => {
                container.names = Some(container_names(&shorthand.name));
                container.container_type = Some(shorthand.container_type.as_str().to_string());
            }
        }
    }

    fn add_transition_prop(&mut self, declaration: TransitionDeclaration<'_>) {
        let transition = self
            .style
            .transition
            .get_or_insert_with(TransitionDescriptor::default);

        // Each aspect keeps whichever declaration set it first. A list holding
        // a non-finite time or easing leaves the aspect unset.
        match declaration {
            TransitionDeclaration::Property(names) => {
                transition
                    .property
                    .get_or_insert_with(|| names.iter().map(|n| n.0.to_camel_case()).collect());
            }
            TransitionDeclaration::Duration(times) => {
                if transition.duration.is_none() {
                    transition.duration = times.iter().map(parse_time).collect();
                }
            }
            TransitionDeclaration::Delay(times) => {
                if transition.delay.is_none() {
                    transition.delay = times.iter().map(parse_time).collect();
                }
            }
            TransitionDeclaration::TimingFunction(easings) => {
                if transition.timing_function.is_none() {
                    transition.timing_function = easings.iter().map(parse_easing).collect();
                }
            }
            TransitionDeclaration::Shorthand(list) => {
                transition
                    .property
                    .get_or_insert_with(|| list.iter().map(|t| t.property.to_camel_case()).collect());
                if transition.duration.is_none() {
                    transition.duration = list.iter().map(|t| parse_time(&t.duration)).collect();
                }
                if transition.delay.is_none() {
                    transition.delay = list.iter().map(|t| parse_time(&t.delay)).collect();
                }
                if transition.timing_function.is_none() {
                    transition.timing_function =
                        list.iter().map(|t| parse_easing(&t.timing_function)).collect();
                }
            }
        }
    }

    fn requires_layout(&mut self) {
        self.style.requires_layout = true;
    }
}

fn animation_name(name: &AnimationName) -> String {
    match name {
        AnimationName::None => "none".to_string(),
        AnimationName::Ident(name) | AnimationName::String(name) => name.clone(),
    }
}

fn iteration_count(count: &AnimationIterationCount) -> Option<StyleValue> {
    match count {
        AnimationIterationCount::Number(count) => finite(*count).map(StyleValue::Number),
        AnimationIterationCount::Infinite => Some("infinite".into()),
    }
}

fn container_names(name: &ContainerName) -> Vec<String> {
    match name {
        ContainerName::None => Vec::new(),
        ContainerName::Names(names) => names.clone(),
    }
}

fn strings<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values.map(str::to_string).collect()
}
