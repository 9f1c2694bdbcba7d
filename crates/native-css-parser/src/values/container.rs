//! Container query declarations: `container`, `container-name`, `container-type`.

use super::{Parse, ParseResult, parse_keyword};
use cssparser::{Parser, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContainerType {
    #[default]
    Normal,
    InlineSize,
    Size,
}

impl ContainerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerType::Normal => "normal",
            ContainerType::InlineSize => "inline-size",
            ContainerType::Size => "size",
        }
    }
}

impl Parse for ContainerType {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        parse_keyword(
            input,
            &[
                ("normal", ContainerType::Normal),
                ("inline-size", ContainerType::InlineSize),
                ("size", ContainerType::Size),
            ],
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContainerName {
    #[default]
    None,
    Names(Vec<String>),
}

impl Parse for ContainerName {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        if input.try_parse(|p| p.expect_ident_matching("none")).is_ok() {
            return Ok(ContainerName::None);
        }
        let mut names = Vec::new();
        loop {
            let state = input.state();
            match input.next() {
                Ok(Token::Ident(name)) if !is_reserved_name(name) => names.push(name.to_string()),
                _ => {
                    input.reset(&state);
                    break;
                }
            }
        }
        if names.is_empty() {
            return Err(input.new_custom_error(()));
        }
        Ok(ContainerName::Names(names))
    }
}

fn is_reserved_name(name: &str) -> bool {
    ["none", "and", "or", "not", "initial", "inherit", "unset", "default"]
        .iter()
        .any(|reserved| name.eq_ignore_ascii_case(reserved))
}

/// The `container` shorthand: `<name> [/ <type>]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub name: ContainerName,
    pub container_type: ContainerType,
}

impl Parse for Container {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        let name = ContainerName::parse(input)?;
        let container_type = if input.try_parse(|p| p.expect_delim('/')).is_ok() {
            ContainerType::parse(input)?
        } else {
            ContainerType::default()
        };
        Ok(Container {
            name,
            container_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_util::parse_str;
    use super::*;

    #[test]
    fn container_shorthand() {
        let container: Container = parse_str("sidebar card / inline-size").unwrap();
        assert_eq!(
            container.name,
            ContainerName::Names(vec!["sidebar".to_string(), "card".to_string()])
        );
        assert_eq!(container.container_type, ContainerType::InlineSize);
    }

    #[test]
    fn container_name_none() {
        assert_eq!(parse_str::<ContainerName>("none"), Some(ContainerName::None));
        assert!(parse_str::<ContainerName>("and").is_none());
    }
}
