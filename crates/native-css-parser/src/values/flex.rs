//! Flexbox and gap values.

use super::length::{LengthPercentage, LengthPercentageOrAuto};
use super::{Parse, ParseResult, parse_keyword};
use cssparser::Parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexDirection {
    #[default]
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

impl FlexDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlexDirection::Row => "row",
            FlexDirection::RowReverse => "row-reverse",
            FlexDirection::Column => "column",
            FlexDirection::ColumnReverse => "column-reverse",
        }
    }
}

impl Parse for FlexDirection {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        parse_keyword(
            input,
            &[
                ("row", FlexDirection::Row),
                ("row-reverse", FlexDirection::RowReverse),
                ("column", FlexDirection::Column),
                ("column-reverse", FlexDirection::ColumnReverse),
            ],
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexWrap {
    #[default]
    NoWrap,
    Wrap,
    WrapReverse,
}

impl FlexWrap {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlexWrap::NoWrap => "nowrap",
            FlexWrap::Wrap => "wrap",
            FlexWrap::WrapReverse => "wrap-reverse",
        }
    }
}

impl Parse for FlexWrap {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        parse_keyword(
            input,
            &[
                ("nowrap", FlexWrap::NoWrap),
                ("wrap", FlexWrap::Wrap),
                ("wrap-reverse", FlexWrap::WrapReverse),
            ],
        )
    }
}

/// The `flex-flow` shorthand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlexFlow {
    pub direction: FlexDirection,
    pub wrap: FlexWrap,
}

impl Parse for FlexFlow {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        let mut direction = None;
        let mut wrap = None;
        for _ in 0..2 {
            if direction.is_none()
                && let Ok(value) = input.try_parse(FlexDirection::parse)
            {
                direction = Some(value);
                continue;
            }
            if wrap.is_none()
                && let Ok(value) = input.try_parse(FlexWrap::parse)
            {
                wrap = Some(value);
                continue;
            }
            break;
        }
        if direction.is_none() && wrap.is_none() {
            return Err(input.new_custom_error(()));
        }
        Ok(FlexFlow {
            direction: direction.unwrap_or_default(),
            wrap: wrap.unwrap_or_default(),
        })
    }
}

/// The `flex` shorthand.
#[derive(Debug, Clone, PartialEq)]
pub struct Flex {
    pub grow: f32,
    pub shrink: f32,
    pub basis: LengthPercentageOrAuto,
}

impl Parse for Flex {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        if input.try_parse(|p| p.expect_ident_matching("none")).is_ok() {
            return Ok(Flex {
                grow: 0.0,
                shrink: 0.0,
                basis: LengthPercentageOrAuto::Auto,
            });
        }

        let mut grow = None;
        let mut shrink = None;
        let mut basis = None;
        loop {
            if grow.is_none()
                && let Ok(value) = input.try_parse(|p| p.expect_number())
            {
                grow = Some(value);
                shrink = input.try_parse(|p| p.expect_number()).ok();
                continue;
            }
            if basis.is_none()
                && let Ok(value) = input.try_parse(LengthPercentageOrAuto::parse)
            {
                basis = Some(value);
                continue;
            }
            break;
        }

        // `flex: auto` is the only form where a lone keyword sets grow and shrink
        if grow.is_none() && basis == Some(LengthPercentageOrAuto::Auto) {
            return Ok(Flex {
                grow: 1.0,
                shrink: 1.0,
                basis: LengthPercentageOrAuto::Auto,
            });
        }
        if grow.is_none() && basis.is_none() {
            return Err(input.new_custom_error(()));
        }

        Ok(Flex {
            grow: grow.unwrap_or(1.0),
            shrink: shrink.unwrap_or(1.0),
            basis: basis.unwrap_or(LengthPercentageOrAuto::LengthPercentage(
                LengthPercentage::Percentage(0.0),
            )),
        })
    }
}

/// A single `row-gap`/`column-gap` value.
#[derive(Debug, Clone, PartialEq)]
pub enum GapValue {
    Normal,
    LengthPercentage(LengthPercentage),
}

impl Parse for GapValue {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        if input.try_parse(|p| p.expect_ident_matching("normal")).is_ok() {
            return Ok(GapValue::Normal);
        }
        LengthPercentage::parse(input).map(GapValue::LengthPercentage)
    }
}

/// The `gap` shorthand.
#[derive(Debug, Clone, PartialEq)]
pub struct Gap {
    pub row: GapValue,
    pub column: GapValue,
}

impl Parse for Gap {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        let row = GapValue::parse(input)?;
        let column = input.try_parse(GapValue::parse).unwrap_or_else(|_| row.clone());
        Ok(Gap { row, column })
    }
}
