//! Border values.

use super::color::CssColor;
use super::length::{Length, LengthPercentage};
use super::{Parse, ParseResult, Size2D, parse_ident_in, parse_keyword};
use cssparser::Parser;

#[derive(Debug, Clone, PartialEq)]
pub enum BorderSideWidth {
    Thin,
    Medium,
    Thick,
    Length(Length),
}

impl Parse for BorderSideWidth {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        if let Ok(keyword) = input.try_parse(|p| parse_ident_in(p, &["thin", "medium", "thick"])) {
            return Ok(match keyword.as_str() {
                "thin" => BorderSideWidth::Thin,
                "medium" => BorderSideWidth::Medium,
                _ => BorderSideWidth::Thick,
            });
        }
        Length::parse(input).map(BorderSideWidth::Length)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    None,
    Hidden,
    Inset,
    Groove,
    Outset,
    Ridge,
    Dotted,
    Dashed,
    Solid,
    Double,
}

impl LineStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineStyle::None => "none",
            LineStyle::Hidden => "hidden",
            LineStyle::Inset => "inset",
            LineStyle::Groove => "groove",
            LineStyle::Outset => "outset",
            LineStyle::Ridge => "ridge",
            LineStyle::Dotted => "dotted",
            LineStyle::Dashed => "dashed",
            LineStyle::Solid => "solid",
            LineStyle::Double => "double",
        }
    }
}

impl Parse for LineStyle {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        parse_keyword(
            input,
            &[
                ("none", LineStyle::None),
                ("hidden", LineStyle::Hidden),
                ("inset", LineStyle::Inset),
                ("groove", LineStyle::Groove),
                ("outset", LineStyle::Outset),
                ("ridge", LineStyle::Ridge),
                ("dotted", LineStyle::Dotted),
                ("dashed", LineStyle::Dashed),
                ("solid", LineStyle::Solid),
                ("double", LineStyle::Double),
            ],
        )
    }
}

/// A `border`-style shorthand: width, style and color in any order.
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    pub width: BorderSideWidth,
    pub style: LineStyle,
    pub color: CssColor,
}

impl Parse for Border {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        let mut width = None;
        let mut style = None;
        let mut color = None;
        for _ in 0..3 {
            if width.is_none()
                && let Ok(value) = input.try_parse(BorderSideWidth::parse)
            {
                width = Some(value);
                continue;
            }
            if style.is_none()
                && let Ok(value) = input.try_parse(LineStyle::parse)
            {
                style = Some(value);
                continue;
            }
            if color.is_none()
                && let Ok(value) = input.try_parse(CssColor::parse)
            {
                color = Some(value);
                continue;
            }
            break;
        }
        if width.is_none() && style.is_none() && color.is_none() {
            return Err(input.new_custom_error(()));
        }
        Ok(Border {
            width: width.unwrap_or(BorderSideWidth::Medium),
            style: style.unwrap_or(LineStyle::None),
            color: color.unwrap_or(CssColor::CurrentColor),
        })
    }
}

/// The `border-radius` shorthand, resolved to its four corners.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderRadius {
    pub top_left: Size2D<LengthPercentage>,
    pub top_right: Size2D<LengthPercentage>,
    pub bottom_right: Size2D<LengthPercentage>,
    pub bottom_left: Size2D<LengthPercentage>,
}

impl Parse for BorderRadius {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        let horizontal = parse_radii(input)?;
        let vertical = if input.try_parse(|p| p.expect_delim('/')).is_ok() {
            parse_radii(input)?
        } else {
            horizontal.clone()
        };
        let corner = |index: usize| Size2D(horizontal[index].clone(), vertical[index].clone());
        Ok(BorderRadius {
            top_left: corner(0),
            top_right: corner(1),
            bottom_right: corner(2),
            bottom_left: corner(3),
        })
    }
}

/// Parse 1-4 radii and expand them clockwise from the top-left corner.
fn parse_radii<'i>(input: &mut Parser<'i, '_>) -> ParseResult<'i, [LengthPercentage; 4]> {
    let first = LengthPercentage::parse(input)?;
    let mut rest = Vec::with_capacity(3);
    while rest.len() < 3 {
        match input.try_parse(LengthPercentage::parse) {
            Ok(value) => rest.push(value),
            Err(_) => break,
        }
    }
    Ok(match rest.as_slice() {
        [] => [first.clone(), first.clone(), first.clone(), first],
        [second] => [first.clone(), second.clone(), first, second.clone()],
        [second, third] => [first, second.clone(), third.clone(), second.clone()],
        [second, third, fourth, ..] => [first, second.clone(), third.clone(), fourth.clone()],
    })
}

#[cfg(test)]
mod tests {
    use super::super::color::Rgba;
    use super::super::length::{LengthUnit, LengthValue};
    use super::super::test_util::parse_str;
    use super::*;

    fn px(value: f32) -> LengthPercentage {
        LengthPercentage::Dimension(LengthValue::new(value, LengthUnit::Px))
    }

    #[test]
    fn border_any_order() {
        let border: Border = parse_str("red solid 2px").unwrap();
        assert_eq!(
            border.width,
            BorderSideWidth::Length(Length::Value(LengthValue::new(2.0, LengthUnit::Px)))
        );
        assert_eq!(border.style, LineStyle::Solid);
        assert_eq!(border.color, CssColor::Rgba(Rgba::new(255, 0, 0, 1.0)));
    }

    #[test]
    fn border_radius_expansion() {
        let radius: BorderRadius = parse_str("1px 2px").unwrap();
        assert_eq!(radius.top_left, Size2D(px(1.0), px(1.0)));
        assert_eq!(radius.top_right, Size2D(px(2.0), px(2.0)));
        assert_eq!(radius.bottom_right, Size2D(px(1.0), px(1.0)));
        assert_eq!(radius.bottom_left, Size2D(px(2.0), px(2.0)));
    }

    #[test]
    fn border_radius_elliptical() {
        let radius: BorderRadius = parse_str("10px / 20px").unwrap();
        assert_eq!(radius.top_left, Size2D(px(10.0), px(20.0)));
    }
}
