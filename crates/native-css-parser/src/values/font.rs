//! Font values and the `font` shorthand.

use super::length::{Angle, LengthPercentage};
use super::{Parse, ParseResult, parse_ident_in, parse_keyword};
use cssparser::{Parser, Token};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AbsoluteFontWeight {
    /// A numeric weight in `1..=1000`.
    Weight(f32),
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FontWeight {
    Absolute(AbsoluteFontWeight),
    Bolder,
    Lighter,
}

impl Parse for FontWeight {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        if let Ok(weight) = input.try_parse(|p| {
            parse_keyword(
                p,
                &[
                    ("normal", FontWeight::Absolute(AbsoluteFontWeight::Normal)),
                    ("bold", FontWeight::Absolute(AbsoluteFontWeight::Bold)),
                    ("bolder", FontWeight::Bolder),
                    ("lighter", FontWeight::Lighter),
                ],
            )
        }) {
            return Ok(weight);
        }
        let location = input.current_source_location();
        let weight = input.expect_number()?;
        if !(1.0..=1000.0).contains(&weight) {
            return Err(location.new_custom_error(()));
        }
        Ok(FontWeight::Absolute(AbsoluteFontWeight::Weight(weight)))
    }
}

const ABSOLUTE_FONT_SIZES: &[&str] = &[
    "xx-small",
    "x-small",
    "small",
    "medium",
    "large",
    "x-large",
    "xx-large",
    "xxx-large",
];

#[derive(Debug, Clone, PartialEq)]
pub enum FontSize {
    Length(LengthPercentage),
    /// An absolute keyword such as `large`.
    Absolute(String),
    /// `larger` or `smaller`.
    Relative(String),
}

impl Parse for FontSize {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        if let Ok(keyword) = input.try_parse(|p| parse_ident_in(p, ABSOLUTE_FONT_SIZES)) {
            return Ok(FontSize::Absolute(keyword));
        }
        if let Ok(keyword) = input.try_parse(|p| parse_ident_in(p, &["larger", "smaller"])) {
            return Ok(FontSize::Relative(keyword));
        }
        LengthPercentage::parse(input).map(FontSize::Length)
    }
}

/// A `font-family` list, in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFamily(pub Vec<String>);

impl Parse for FontFamily {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        input
            .parse_comma_separated(parse_family_name)
            .map(FontFamily)
    }
}

/// A quoted family name, or a run of identifiers joined by single spaces.
fn parse_family_name<'i>(input: &mut Parser<'i, '_>) -> ParseResult<'i, String> {
    if let Ok(name) = input.try_parse(|p| p.expect_string().map(|s| s.to_string())) {
        return Ok(name);
    }
    let mut name = input.expect_ident()?.to_string();
    while let Ok(part) = input.try_parse(|p| p.expect_ident().map(|s| s.to_string())) {
        name.push(' ');
        name.push_str(&part);
    }
    Ok(name)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FontStyle {
    Normal,
    Italic,
    Oblique(Option<Angle>),
}

impl Parse for FontStyle {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        let location = input.current_source_location();
        let ident = input.expect_ident()?.clone();
        match ident.to_ascii_lowercase().as_str() {
            "normal" => Ok(FontStyle::Normal),
            "italic" => Ok(FontStyle::Italic),
            "oblique" => Ok(FontStyle::Oblique(input.try_parse(Angle::parse).ok())),
            _ => Err(location.new_unexpected_token_error(Token::Ident(ident))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontVariantCaps {
    Normal,
    SmallCaps,
    AllSmallCaps,
    PetiteCaps,
    AllPetiteCaps,
    Unicase,
    TitlingCaps,
}

impl FontVariantCaps {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontVariantCaps::Normal => "normal",
            FontVariantCaps::SmallCaps => "small-caps",
            FontVariantCaps::AllSmallCaps => "all-small-caps",
            FontVariantCaps::PetiteCaps => "petite-caps",
            FontVariantCaps::AllPetiteCaps => "all-petite-caps",
            FontVariantCaps::Unicase => "unicase",
            FontVariantCaps::TitlingCaps => "titling-caps",
        }
    }
}

impl Parse for FontVariantCaps {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        parse_keyword(
            input,
            &[
                ("normal", FontVariantCaps::Normal),
                ("small-caps", FontVariantCaps::SmallCaps),
                ("all-small-caps", FontVariantCaps::AllSmallCaps),
                ("petite-caps", FontVariantCaps::PetiteCaps),
                ("all-petite-caps", FontVariantCaps::AllPetiteCaps),
                ("unicase", FontVariantCaps::Unicase),
                ("titling-caps", FontVariantCaps::TitlingCaps),
            ],
        )
    }
}

const FONT_STRETCH_KEYWORDS: &[&str] = &[
    "ultra-condensed",
    "extra-condensed",
    "condensed",
    "semi-condensed",
    "semi-expanded",
    "expanded",
    "extra-expanded",
    "ultra-expanded",
];

#[derive(Debug, Clone, PartialEq)]
pub enum LineHeight {
    Normal,
    Number(f32),
    Length(LengthPercentage),
}

impl Parse for LineHeight {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        if input.try_parse(|p| p.expect_ident_matching("normal")).is_ok() {
            return Ok(LineHeight::Normal);
        }
        if let Ok(number) = input.try_parse(|p| p.expect_number()) {
            return Ok(LineHeight::Number(number));
        }
        LengthPercentage::parse(input).map(LineHeight::Length)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlignKeyword {
    Baseline,
    Sub,
    Super,
    TextTop,
    TextBottom,
    Middle,
    Top,
    Bottom,
}

impl VerticalAlignKeyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerticalAlignKeyword::Baseline => "baseline",
            VerticalAlignKeyword::Sub => "sub",
            VerticalAlignKeyword::Super => "super",
            VerticalAlignKeyword::TextTop => "text-top",
            VerticalAlignKeyword::TextBottom => "text-bottom",
            VerticalAlignKeyword::Middle => "middle",
            VerticalAlignKeyword::Top => "top",
            VerticalAlignKeyword::Bottom => "bottom",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum VerticalAlign {
    Keyword(VerticalAlignKeyword),
    Length(LengthPercentage),
}

impl Parse for VerticalAlign {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        if let Ok(keyword) = input.try_parse(|p| {
            parse_keyword(
                p,
                &[
                    ("baseline", VerticalAlignKeyword::Baseline),
                    ("sub", VerticalAlignKeyword::Sub),
                    ("super", VerticalAlignKeyword::Super),
                    ("text-top", VerticalAlignKeyword::TextTop),
                    ("text-bottom", VerticalAlignKeyword::TextBottom),
                    ("middle", VerticalAlignKeyword::Middle),
                    ("top", VerticalAlignKeyword::Top),
                    ("bottom", VerticalAlignKeyword::Bottom),
                ],
            )
        }) {
            return Ok(VerticalAlign::Keyword(keyword));
        }
        LengthPercentage::parse(input).map(VerticalAlign::Length)
    }
}

/// The `font` shorthand.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: FontFamily,
    pub size: FontSize,
    pub style: FontStyle,
    pub weight: FontWeight,
    pub stretch: String,
    pub line_height: LineHeight,
    pub variant_caps: FontVariantCaps,
}

impl Parse for Font {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        let mut style = None;
        let mut weight = None;
        let mut stretch = None;
        let mut variant_caps = None;

        // Up to four optional prefixes in any order. `normal` just keeps a default.
        for _ in 0..4 {
            if input.try_parse(|p| p.expect_ident_matching("normal")).is_ok() {
                continue;
            }
            if style.is_none()
                && let Ok(value) = input.try_parse(FontStyle::parse)
            {
                style = Some(value);
                continue;
            }
            if weight.is_none()
                && let Ok(value) = input.try_parse(FontWeight::parse)
            {
                weight = Some(value);
                continue;
            }
            if variant_caps.is_none()
                && let Ok(value) = input.try_parse(|p| {
                    parse_keyword(p, &[("small-caps", FontVariantCaps::SmallCaps)])
                })
            {
                variant_caps = Some(value);
                continue;
            }
            if stretch.is_none()
                && let Ok(value) = input.try_parse(|p| parse_ident_in(p, FONT_STRETCH_KEYWORDS))
            {
                stretch = Some(value);
                continue;
            }
            break;
        }

        let size = FontSize::parse(input)?;
        let line_height = if input.try_parse(|p| p.expect_delim('/')).is_ok() {
            LineHeight::parse(input)?
        } else {
            LineHeight::Normal
        };
        let family = FontFamily::parse(input)?;

        Ok(Font {
            family,
            size,
            style: style.unwrap_or(FontStyle::Normal),
            weight: weight.unwrap_or(FontWeight::Absolute(AbsoluteFontWeight::Normal)),
            stretch: stretch.unwrap_or_else(|| "normal".to_string()),
            line_height,
            variant_caps: variant_caps.unwrap_or(FontVariantCaps::Normal),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::length::{LengthUnit, LengthValue};
    use super::super::test_util::parse_str;
    use super::*;

    #[test]
    fn font_family_list() {
        let family: FontFamily = parse_str("\"Open Sans\", Helvetica Neue, sans-serif").unwrap();
        assert_eq!(
            family.0,
            vec!["Open Sans", "Helvetica Neue", "sans-serif"]
        );
    }

    #[test]
    fn font_weight_range() {
        assert_eq!(
            parse_str::<FontWeight>("600"),
            Some(FontWeight::Absolute(AbsoluteFontWeight::Weight(600.0)))
        );
        assert!(parse_str::<FontWeight>("1200").is_none());
    }

    #[test]
    fn font_shorthand() {
        let font: Font = parse_str("italic bold 12px/1.5 \"Inter\", sans-serif").unwrap();
        assert_eq!(font.style, FontStyle::Italic);
        assert_eq!(font.weight, FontWeight::Absolute(AbsoluteFontWeight::Bold));
        assert_eq!(
            font.size,
            FontSize::Length(LengthPercentage::Dimension(LengthValue::new(
                12.0,
                LengthUnit::Px
            )))
        );
        assert_eq!(font.line_height, LineHeight::Number(1.5));
        assert_eq!(font.family.0, vec!["Inter", "sans-serif"]);
    }

    #[test]
    fn font_shorthand_requires_family() {
        assert!(parse_str::<Font>("12px").is_none());
    }
}
