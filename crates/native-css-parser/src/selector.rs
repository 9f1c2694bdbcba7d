//! Selector type definitions.

use std::fmt;

/// One complex selector (e.g. `.card:hover > .title`), as a flat component
/// sequence in source order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Selector {
    pub components: Vec<Component>,
}

impl Selector {
    pub fn new(components: Vec<Component>) -> Self {
        Self { components }
    }

    /// Class names in source order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.components.iter().filter_map(|component| match component {
            Component::Class(name) => Some(name.as_str()),
            _ => None,
        })
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for component in &self.components {
            write!(f, "{}", component)?;
        }
        Ok(())
    }
}

/// A simple selector or combinator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Component {
    Class(String),
    Id(String),
    Type(String),
    Universal,
    /// `[name]`, `[name=value]`, ...; kept as its source text.
    Attribute(String),
    PseudoClass(PseudoClass),
    PseudoElement(String),
    Combinator(Combinator),
    /// `&`
    Nesting,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Class(name) => write!(f, ".{}", name),
            Component::Id(id) => write!(f, "#{}", id),
            Component::Type(name) => write!(f, "{}", name),
            Component::Universal => write!(f, "*"),
            Component::Attribute(attr) => write!(f, "[{}]", attr),
            Component::PseudoClass(pseudo) => write!(f, ":{}", pseudo),
            Component::PseudoElement(name) => write!(f, "::{}", name),
            Component::Combinator(combinator) => write!(f, "{}", combinator),
            Component::Nesting => write!(f, "&"),
        }
    }
}

/// Pseudo-classes. Only the interaction states get their own variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PseudoClass {
    Hover,
    Active,
    Focus,
    /// Any other pseudo-class, including functional ones (`nth-child(2)`).
    Other(String),
}

impl PseudoClass {
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "hover" => PseudoClass::Hover,
            "active" => PseudoClass::Active,
            "focus" => PseudoClass::Focus,
            _ => PseudoClass::Other(name.to_string()),
        }
    }
}

impl fmt::Display for PseudoClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PseudoClass::Hover => write!(f, "hover"),
            PseudoClass::Active => write!(f, "active"),
            PseudoClass::Focus => write!(f, "focus"),
            PseudoClass::Other(name) => write!(f, "{}", name),
        }
    }
}

/// Selector combinators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// Descendant combinator (space).
    Descendant,
    /// Child combinator (>).
    Child,
    /// Adjacent sibling combinator (+).
    NextSibling,
    /// General sibling combinator (~).
    LaterSibling,
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Combinator::Descendant => write!(f, " "),
            Combinator::Child => write!(f, " > "),
            Combinator::NextSibling => write!(f, " + "),
            Combinator::LaterSibling => write!(f, " ~ "),
        }
    }
}
