//! Text values: transform, alignment, spacing, decoration and shadows.

use super::color::CssColor;
use super::length::{Length, LengthPercentage, LengthUnit, LengthValue};
use super::{Parse, ParseResult, parse_keyword};
use cssparser::Parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTransformCase {
    None,
    Uppercase,
    Lowercase,
    Capitalize,
}

impl TextTransformCase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextTransformCase::None => "none",
            TextTransformCase::Uppercase => "uppercase",
            TextTransformCase::Lowercase => "lowercase",
            TextTransformCase::Capitalize => "capitalize",
        }
    }
}

/// `text-transform`: a case keyword plus the independent `full-width`/`full-size-kana` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextTransform {
    pub case: TextTransformCase,
    pub full_width: bool,
    pub full_size_kana: bool,
}

impl Parse for TextTransform {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        let mut case = None;
        let mut full_width = false;
        let mut full_size_kana = false;
        loop {
            if case.is_none()
                && let Ok(value) = input.try_parse(|p| {
                    parse_keyword(
                        p,
                        &[
                            ("none", TextTransformCase::None),
                            ("uppercase", TextTransformCase::Uppercase),
                            ("lowercase", TextTransformCase::Lowercase),
                            ("capitalize", TextTransformCase::Capitalize),
                        ],
                    )
                })
            {
                case = Some(value);
                continue;
            }
            if !full_width && input.try_parse(|p| p.expect_ident_matching("full-width")).is_ok() {
                full_width = true;
                continue;
            }
            if !full_size_kana
                && input
                    .try_parse(|p| p.expect_ident_matching("full-size-kana"))
                    .is_ok()
            {
                full_size_kana = true;
                continue;
            }
            break;
        }
        if case.is_none() && !full_width && !full_size_kana {
            return Err(input.new_custom_error(()));
        }
        Ok(TextTransform {
            case: case.unwrap_or(TextTransformCase::None),
            full_width,
            full_size_kana,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Start,
    End,
    Left,
    Right,
    Center,
    Justify,
    MatchParent,
    JustifyAll,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Start => "start",
            TextAlign::End => "end",
            TextAlign::Left => "left",
            TextAlign::Right => "right",
            TextAlign::Center => "center",
            TextAlign::Justify => "justify",
            TextAlign::MatchParent => "match-parent",
            TextAlign::JustifyAll => "justify-all",
        }
    }
}

impl Parse for TextAlign {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        parse_keyword(
            input,
            &[
                ("start", TextAlign::Start),
                ("end", TextAlign::End),
                ("left", TextAlign::Left),
                ("right", TextAlign::Right),
                ("center", TextAlign::Center),
                ("justify", TextAlign::Justify),
                ("match-parent", TextAlign::MatchParent),
                ("justify-all", TextAlign::JustifyAll),
            ],
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LetterSpacing {
    Normal,
    Length(Length),
}

impl Parse for LetterSpacing {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        if input.try_parse(|p| p.expect_ident_matching("normal")).is_ok() {
            return Ok(LetterSpacing::Normal);
        }
        Length::parse(input).map(LetterSpacing::Length)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDecorationLineKind {
    Underline,
    Overline,
    LineThrough,
    Blink,
    SpellingError,
    GrammarError,
}

/// `text-decoration-line`: `none` or a set of line kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextDecorationLine {
    None,
    Lines(Vec<TextDecorationLineKind>),
}

impl TextDecorationLine {
    pub fn contains(&self, kind: TextDecorationLineKind) -> bool {
        match self {
            TextDecorationLine::None => false,
            TextDecorationLine::Lines(lines) => lines.contains(&kind),
        }
    }
}

impl Parse for TextDecorationLine {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        if input.try_parse(|p| p.expect_ident_matching("none")).is_ok() {
            return Ok(TextDecorationLine::None);
        }
        let mut lines = Vec::new();
        while let Ok(kind) = input.try_parse(|p| {
            parse_keyword(
                p,
                &[
                    ("underline", TextDecorationLineKind::Underline),
                    ("overline", TextDecorationLineKind::Overline),
                    ("line-through", TextDecorationLineKind::LineThrough),
                    ("blink", TextDecorationLineKind::Blink),
                    ("spelling-error", TextDecorationLineKind::SpellingError),
                    ("grammar-error", TextDecorationLineKind::GrammarError),
                ],
            )
        }) {
            if lines.contains(&kind) {
                return Err(input.new_custom_error(()));
            }
            lines.push(kind);
        }
        if lines.is_empty() {
            return Err(input.new_custom_error(()));
        }
        Ok(TextDecorationLine::Lines(lines))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDecorationStyle {
    Solid,
    Double,
    Dotted,
    Dashed,
    Wavy,
}

impl Parse for TextDecorationStyle {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        parse_keyword(
            input,
            &[
                ("solid", TextDecorationStyle::Solid),
                ("double", TextDecorationStyle::Double),
                ("dotted", TextDecorationStyle::Dotted),
                ("dashed", TextDecorationStyle::Dashed),
                ("wavy", TextDecorationStyle::Wavy),
            ],
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TextDecorationThickness {
    Auto,
    FromFont,
    LengthPercentage(LengthPercentage),
}

impl Parse for TextDecorationThickness {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        if input.try_parse(|p| p.expect_ident_matching("auto")).is_ok() {
            return Ok(TextDecorationThickness::Auto);
        }
        if input.try_parse(|p| p.expect_ident_matching("from-font")).is_ok() {
            return Ok(TextDecorationThickness::FromFont);
        }
        LengthPercentage::parse(input).map(TextDecorationThickness::LengthPercentage)
    }
}

/// The `text-decoration` shorthand.
#[derive(Debug, Clone, PartialEq)]
pub struct TextDecoration {
    pub line: TextDecorationLine,
    pub thickness: TextDecorationThickness,
    pub style: TextDecorationStyle,
    pub color: CssColor,
}

impl Parse for TextDecoration {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        let mut line = None;
        let mut thickness = None;
        let mut style = None;
        let mut color = None;
        for _ in 0..4 {
            if line.is_none()
                && let Ok(value) = input.try_parse(TextDecorationLine::parse)
            {
                line = Some(value);
                continue;
            }
            if thickness.is_none()
                && let Ok(value) = input.try_parse(TextDecorationThickness::parse)
            {
                thickness = Some(value);
                continue;
            }
            if style.is_none()
                && let Ok(value) = input.try_parse(TextDecorationStyle::parse)
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
        if line.is_none() && thickness.is_none() && style.is_none() && color.is_none() {
            return Err(input.new_custom_error(()));
        }
        Ok(TextDecoration {
            line: line.unwrap_or(TextDecorationLine::None),
            thickness: thickness.unwrap_or(TextDecorationThickness::Auto),
            style: style.unwrap_or(TextDecorationStyle::Solid),
            color: color.unwrap_or(CssColor::CurrentColor),
        })
    }
}

/// One `text-shadow` layer.
#[derive(Debug, Clone, PartialEq)]
pub struct TextShadow {
    pub color: CssColor,
    pub x_offset: Length,
    pub y_offset: Length,
    pub blur: Length,
}

impl Parse for TextShadow {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        let mut color = input.try_parse(CssColor::parse).ok();
        let x_offset = Length::parse(input)?;
        let y_offset = Length::parse(input)?;
        let blur = input
            .try_parse(Length::parse)
            .unwrap_or(Length::Value(LengthValue::new(0.0, LengthUnit::Px)));
        if color.is_none() {
            color = input.try_parse(CssColor::parse).ok();
        }
        Ok(TextShadow {
            color: color.unwrap_or(CssColor::CurrentColor),
            x_offset,
            y_offset,
            blur,
        })
    }
}

/// `text-shadow`: `none` parses to an empty list.
#[derive(Debug, Clone, PartialEq)]
pub struct TextShadowList(pub Vec<TextShadow>);

impl Parse for TextShadowList {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        if input.try_parse(|p| p.expect_ident_matching("none")).is_ok() {
            return Ok(TextShadowList(Vec::new()));
        }
        Vec::<TextShadow>::parse(input).map(TextShadowList)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZIndex {
    Auto,
    Integer(i32),
}

impl Parse for ZIndex {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        if input.try_parse(|p| p.expect_ident_matching("auto")).is_ok() {
            return Ok(ZIndex::Auto);
        }
        Ok(ZIndex::Integer(input.expect_integer()?))
    }
}

#[cfg(test)]
mod tests {
    use super::super::color::Rgba;
    use super::super::test_util::parse_str;
    use super::*;

    #[test]
    fn decoration_line_set() {
        let line: TextDecorationLine = parse_str("line-through underline").unwrap();
        assert!(line.contains(TextDecorationLineKind::Underline));
        assert!(line.contains(TextDecorationLineKind::LineThrough));
        assert!(parse_str::<TextDecorationLine>("underline underline").is_none());
    }

    #[test]
    fn decoration_shorthand() {
        let decoration: TextDecoration = parse_str("underline dotted red").unwrap();
        assert_eq!(decoration.style, TextDecorationStyle::Dotted);
        assert_eq!(decoration.color, CssColor::Rgba(Rgba::new(255, 0, 0, 1.0)));
    }

    #[test]
    fn text_shadow_color_last() {
        let shadows: TextShadowList = parse_str("1px 2px 3px black, 0 0 red").unwrap();
        assert_eq!(shadows.0.len(), 2);
        assert_eq!(shadows.0[0].color, CssColor::Rgba(Rgba::new(0, 0, 0, 1.0)));
        assert_eq!(
            shadows.0[0].blur,
            Length::Value(LengthValue::new(3.0, LengthUnit::Px))
        );
    }

    #[test]
    fn text_transform_flags() {
        let transform: TextTransform = parse_str("uppercase full-width").unwrap();
        assert_eq!(transform.case, TextTransformCase::Uppercase);
        assert!(transform.full_width);
    }

    #[test]
    fn z_index_integers_only() {
        assert_eq!(parse_str::<ZIndex>("10"), Some(ZIndex::Integer(10)));
        assert!(parse_str::<ZIndex>("1.5").is_none());
    }
}
