//! `display` and `overflow`.

use super::{Parse, ParseResult, parse_keyword};
use cssparser::{Parser, Token};

/// Outer display type of a two-keyword `display` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayOutside {
    Block,
    Inline,
    RunIn,
}

/// Inner display type of a two-keyword `display` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayInside {
    Flow,
    FlowRoot,
    Flex,
    Grid,
    Table,
    Ruby,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Display {
    /// A single keyword such as `none`, `contents` or `list-item`.
    Keyword(String),
    /// An outer/inner pair; single keywords like `flex` and `inline-grid` normalize here.
    Pair {
        outside: DisplayOutside,
        inside: DisplayInside,
    },
}

const DISPLAY_KEYWORDS: &[&str] = &[
    "none",
    "contents",
    "list-item",
    "table-row-group",
    "table-header-group",
    "table-footer-group",
    "table-row",
    "table-cell",
    "table-column-group",
    "table-column",
    "table-caption",
    "ruby-base",
    "ruby-text",
    "ruby-base-container",
    "ruby-text-container",
];

impl Parse for Display {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        if let Ok(keyword) = input.try_parse(|p| super::parse_ident_in(p, DISPLAY_KEYWORDS)) {
            return Ok(Display::Keyword(keyword));
        }

        let location = input.current_source_location();
        let ident = input.expect_ident()?.clone();
        let pair = |outside, inside| Ok(Display::Pair { outside, inside });
        match ident.to_ascii_lowercase().as_str() {
            "block" => pair(DisplayOutside::Block, parse_inside(input, DisplayInside::Flow)),
            "inline" => pair(DisplayOutside::Inline, parse_inside(input, DisplayInside::Flow)),
            "run-in" => pair(DisplayOutside::RunIn, parse_inside(input, DisplayInside::Flow)),
            "flow-root" => pair(DisplayOutside::Block, DisplayInside::FlowRoot),
            "inline-block" => pair(DisplayOutside::Inline, DisplayInside::FlowRoot),
            "flex" => pair(DisplayOutside::Block, DisplayInside::Flex),
            "inline-flex" | "-webkit-inline-flex" => {
                pair(DisplayOutside::Inline, DisplayInside::Flex)
            }
            "-webkit-flex" => pair(DisplayOutside::Block, DisplayInside::Flex),
            "grid" => pair(DisplayOutside::Block, DisplayInside::Grid),
            "inline-grid" => pair(DisplayOutside::Inline, DisplayInside::Grid),
            "table" => pair(DisplayOutside::Block, DisplayInside::Table),
            "inline-table" => pair(DisplayOutside::Inline, DisplayInside::Table),
            "ruby" => pair(DisplayOutside::Inline, DisplayInside::Ruby),
            _ => Err(location.new_unexpected_token_error(Token::Ident(ident))),
        }
    }
}

/// Parse an optional inner display keyword following an outer one.
fn parse_inside(input: &mut Parser<'_, '_>, default: DisplayInside) -> DisplayInside {
    input
        .try_parse(|p| {
            parse_keyword(
                p,
                &[
                    ("flow", DisplayInside::Flow),
                    ("flow-root", DisplayInside::FlowRoot),
                    ("flex", DisplayInside::Flex),
                    ("grid", DisplayInside::Grid),
                    ("table", DisplayInside::Table),
                    ("ruby", DisplayInside::Ruby),
                ],
            )
        })
        .unwrap_or(default)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowKeyword {
    Visible,
    Hidden,
    Clip,
    Scroll,
    Auto,
}

impl OverflowKeyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverflowKeyword::Visible => "visible",
            OverflowKeyword::Hidden => "hidden",
            OverflowKeyword::Clip => "clip",
            OverflowKeyword::Scroll => "scroll",
            OverflowKeyword::Auto => "auto",
        }
    }
}

impl Parse for OverflowKeyword {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        parse_keyword(
            input,
            &[
                ("visible", OverflowKeyword::Visible),
                ("hidden", OverflowKeyword::Hidden),
                ("clip", OverflowKeyword::Clip),
                ("scroll", OverflowKeyword::Scroll),
                ("auto", OverflowKeyword::Auto),
            ],
        )
    }
}

/// The `overflow` shorthand: `x [y]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overflow {
    pub x: OverflowKeyword,
    pub y: OverflowKeyword,
}

impl Parse for Overflow {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        let x = OverflowKeyword::parse(input)?;
        let y = input.try_parse(OverflowKeyword::parse).unwrap_or(x);
        Ok(Overflow { x, y })
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_util::parse_str;
    use super::*;

    #[test]
    fn display_normalizes_to_pairs() {
        assert_eq!(
            parse_str::<Display>("flex"),
            Some(Display::Pair {
                outside: DisplayOutside::Block,
                inside: DisplayInside::Flex,
            })
        );
        assert_eq!(
            parse_str::<Display>("inline flex"),
            Some(Display::Pair {
                outside: DisplayOutside::Inline,
                inside: DisplayInside::Flex,
            })
        );
        assert_eq!(
            parse_str::<Display>("none"),
            Some(Display::Keyword("none".to_string()))
        );
    }

    #[test]
    fn overflow_two_values() {
        let overflow: Overflow = parse_str("hidden scroll").unwrap();
        assert_eq!(overflow.x, OverflowKeyword::Hidden);
        assert_eq!(overflow.y, OverflowKeyword::Scroll);
    }
}
