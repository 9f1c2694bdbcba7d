//! Color values.

use super::length::{AlphaValue, Angle, NumberOrPercentage};
use super::{Parse, ParseResult};
use cssparser::{Parser, Token};

/// A parsed CSS color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CssColor {
    CurrentColor,
    Rgba(Rgba),
    Hsla(Hsla),
    /// A color in a space other than sRGB `rgb()`/`hsl()`; its components are not retained.
    Other(ColorSpace),
}

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);

    pub const fn new(red: u8, green: u8, blue: u8, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

/// An `hsl()` color. Hue is in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub alpha: f32,
}

/// Color spaces that parse but are not representable as `rgb()`/`hsl()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    Lab,
    Lch,
    Oklab,
    Oklch,
    Hwb,
    Srgb,
    SrgbLinear,
    DisplayP3,
    A98Rgb,
    ProphotoRgb,
    Rec2020,
    XyzD50,
    XyzD65,
}

impl ColorSpace {
    /// Resolve the color space named by a color function or `color()` argument.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "lab" => Some(ColorSpace::Lab),
            "lch" => Some(ColorSpace::Lch),
            "oklab" => Some(ColorSpace::Oklab),
            "oklch" => Some(ColorSpace::Oklch),
            "hwb" => Some(ColorSpace::Hwb),
            "srgb" => Some(ColorSpace::Srgb),
            "srgb-linear" => Some(ColorSpace::SrgbLinear),
            "display-p3" => Some(ColorSpace::DisplayP3),
            "a98-rgb" => Some(ColorSpace::A98Rgb),
            "prophoto-rgb" => Some(ColorSpace::ProphotoRgb),
            "rec2020" => Some(ColorSpace::Rec2020),
            "xyz-d50" => Some(ColorSpace::XyzD50),
            "xyz" | "xyz-d65" => Some(ColorSpace::XyzD65),
            _ => None,
        }
    }
}

impl Parse for CssColor {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        let location = input.current_source_location();
        let token = input.next()?.clone();
        match &token {
            Token::Hash(hash) | Token::IDHash(hash) => parse_hex(hash)
                .map(CssColor::Rgba)
                .ok_or_else(|| location.new_unexpected_token_error(token.clone())),
            Token::Ident(name) => named_color(name)
                .ok_or_else(|| location.new_unexpected_token_error(token.clone())),
            Token::Function(name) => {
                let name = name.clone();
                input.parse_nested_block(|p| parse_color_function(&name, p))
            }
            _ => Err(location.new_unexpected_token_error(token.clone())),
        }
    }
}

/// Parse the arguments of a color function whose name has already been consumed.
pub fn parse_color_function<'i>(name: &str, input: &mut Parser<'i, '_>) -> ParseResult<'i, CssColor> {
    match name.to_ascii_lowercase().as_str() {
        "rgb" | "rgba" => {
            let (red, green, blue, legacy) = parse_rgb_channels(input)?;
            let alpha = parse_alpha(input, legacy)?;
            Ok(CssColor::Rgba(Rgba::new(
                to_channel(red),
                to_channel(green),
                to_channel(blue),
                alpha,
            )))
        }
        "hsl" | "hsla" => {
            let (hue, saturation, lightness, legacy) = parse_hsl_channels(input)?;
            let alpha = parse_alpha(input, legacy)?;
            Ok(CssColor::Hsla(Hsla {
                hue,
                saturation,
                lightness,
                alpha,
            }))
        }
        "color" => {
            let location = input.current_source_location();
            let space = input.expect_ident()?.clone();
            let space = ColorSpace::from_name(&space)
                .ok_or_else(|| location.new_unexpected_token_error(Token::Ident(space.clone())))?;
            skip_remaining(input);
            Ok(CssColor::Other(space))
        }
        other => {
            let location = input.current_source_location();
            let space =
                ColorSpace::from_name(other).ok_or_else(|| location.new_custom_error(()))?;
            // These spaces only need to be recognized, not evaluated, but a var() inside
            // still makes the whole color unresolvable.
            let start = input.position();
            skip_remaining(input);
            if input.slice_from(start).to_ascii_lowercase().contains("var(") {
                return Err(location.new_custom_error(()));
            }
            Ok(CssColor::Other(space))
        }
    }
}

/// Parse the three `rgb()` channels as 0-255 numbers, returning whether the
/// legacy comma syntax was used.
pub(crate) fn parse_rgb_channels<'i>(
    input: &mut Parser<'i, '_>,
) -> ParseResult<'i, (f32, f32, f32, bool)> {
    let red = parse_rgb_channel(input)?;
    let legacy = input.try_parse(|p| p.expect_comma()).is_ok();
    let green = parse_rgb_channel(input)?;
    if legacy {
        input.expect_comma()?;
    }
    let blue = parse_rgb_channel(input)?;
    Ok((red, green, blue, legacy))
}

/// Parse the three `hsl()` channels, returning whether the legacy comma syntax was used.
pub(crate) fn parse_hsl_channels<'i>(
    input: &mut Parser<'i, '_>,
) -> ParseResult<'i, (f32, f32, f32, bool)> {
    let hue = parse_hue(input)?;
    let legacy = input.try_parse(|p| p.expect_comma()).is_ok();
    let saturation = parse_percent_channel(input)?;
    if legacy {
        input.expect_comma()?;
    }
    let lightness = parse_percent_channel(input)?;
    Ok((hue, saturation, lightness, legacy))
}

/// Consume the alpha separator (`,` or `/`) if present.
pub(crate) fn parse_alpha_separator(input: &mut Parser<'_, '_>, legacy: bool) -> bool {
    if legacy {
        input.try_parse(|p| p.expect_comma()).is_ok()
    } else {
        input.try_parse(|p| p.expect_delim('/')).is_ok()
    }
}

fn parse_alpha<'i>(input: &mut Parser<'i, '_>, legacy: bool) -> ParseResult<'i, f32> {
    if !parse_alpha_separator(input, legacy) {
        return Ok(1.0);
    }
    Ok(AlphaValue::parse(input)?.0.clamp(0.0, 1.0))
}

fn parse_rgb_channel<'i>(input: &mut Parser<'i, '_>) -> ParseResult<'i, f32> {
    Ok(match NumberOrPercentage::parse(input)? {
        NumberOrPercentage::Number(value) => value,
        NumberOrPercentage::Percentage(value) => value * 255.0,
    })
}

fn parse_percent_channel<'i>(input: &mut Parser<'i, '_>) -> ParseResult<'i, f32> {
    Ok(match NumberOrPercentage::parse(input)? {
        NumberOrPercentage::Number(value) => value,
        NumberOrPercentage::Percentage(value) => value * 100.0,
    })
}

fn parse_hue<'i>(input: &mut Parser<'i, '_>) -> ParseResult<'i, f32> {
    if let Ok(value) = input.try_parse(|p| p.expect_number()) {
        return Ok(value);
    }
    Ok(match Angle::parse(input)? {
        Angle::Deg(value) => value,
        Angle::Rad(value) => value.to_degrees(),
        Angle::Grad(value) => value * 0.9,
        Angle::Turn(value) => value * 360.0,
    })
}

fn to_channel(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

fn skip_remaining(input: &mut Parser<'_, '_>) {
    while input.next().is_ok() {}
}

/// Parse a hex color body (without the `#`).
pub fn parse_hex(hex: &str) -> Option<Rgba> {
    let digits: Vec<u8> = hex
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<_>>()?;
    let (red, green, blue, alpha) = match digits.as_slice() {
        [r, g, b] => (r * 17, g * 17, b * 17, 255),
        [r, g, b, a] => (r * 17, g * 17, b * 17, a * 17),
        [r1, r2, g1, g2, b1, b2] => (r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2, 255),
        [r1, r2, g1, g2, b1, b2, a1, a2] => {
            (r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2, a1 * 16 + a2)
        }
        _ => return None,
    };
    Some(Rgba::new(red, green, blue, f32::from(alpha) / 255.0))
}

/// Resolve a color keyword (`transparent`, `currentcolor` or a named color).
pub fn named_color(name: &str) -> Option<CssColor> {
    let lower = name.to_ascii_lowercase();
    match lower.as_str() {
        "currentcolor" => return Some(CssColor::CurrentColor),
        "transparent" => return Some(CssColor::Rgba(Rgba::TRANSPARENT)),
        _ => {}
    }
    NAMED_COLORS
        .binary_search_by(|(candidate, _)| candidate.cmp(&lower.as_str()))
        .ok()
        .map(|index| {
            let (red, green, blue) = NAMED_COLORS[index].1;
            CssColor::Rgba(Rgba::new(red, green, blue, 1.0))
        })
}

/// CSS named colors, sorted by name.
const NAMED_COLORS: &[(&str, (u8, u8, u8))] = &[
    ("aliceblue", (240, 248, 255)),
    ("antiquewhite", (250, 235, 215)),
    ("aqua", (0, 255, 255)),
    ("aquamarine", (127, 255, 212)),
    ("azure", (240, 255, 255)),
    ("beige", (245, 245, 220)),
    ("bisque", (255, 228, 196)),
    ("black", (0, 0, 0)),
    ("blanchedalmond", (255, 235, 205)),
    ("blue", (0, 0, 255)),
    ("blueviolet", (138, 43, 226)),
    ("brown", (165, 42, 42)),
    ("burlywood", (222, 184, 135)),
    ("cadetblue", (95, 158, 160)),
    ("chartreuse", (127, 255, 0)),
    ("chocolate", (210, 105, 30)),
    ("coral", (255, 127, 80)),
    ("cornflowerblue", (100, 149, 237)),
    ("cornsilk", (255, 248, 220)),
    ("crimson", (220, 20, 60)),
    ("cyan", (0, 255, 255)),
    ("darkblue", (0, 0, 139)),
    ("darkcyan", (0, 139, 139)),
    ("darkgoldenrod", (184, 134, 11)),
    ("darkgray", (169, 169, 169)),
    ("darkgreen", (0, 100, 0)),
    ("darkgrey", (169, 169, 169)),
    ("darkkhaki", (189, 183, 107)),
    ("darkmagenta", (139, 0, 139)),
    ("darkolivegreen", (85, 107, 47)),
    ("darkorange", (255, 140, 0)),
    ("darkorchid", (153, 50, 204)),
    ("darkred", (139, 0, 0)),
    ("darksalmon", (233, 150, 122)),
    ("darkseagreen", (143, 188, 143)),
    ("darkslateblue", (72, 61, 139)),
    ("darkslategray", (47, 79, 79)),
    ("darkslategrey", (47, 79, 79)),
    ("darkturquoise", (0, 206, 209)),
    ("darkviolet", (148, 0, 211)),
    ("deeppink", (255, 20, 147)),
    ("deepskyblue", (0, 191, 255)),
    ("dimgray", (105, 105, 105)),
    ("dimgrey", (105, 105, 105)),
    ("dodgerblue", (30, 144, 255)),
    ("firebrick", (178, 34, 34)),
    ("floralwhite", (255, 250, 240)),
    ("forestgreen", (34, 139, 34)),
    ("fuchsia", (255, 0, 255)),
    ("gainsboro", (220, 220, 220)),
    ("ghostwhite", (248, 248, 255)),
    ("gold", (255, 215, 0)),
    ("goldenrod", (218, 165, 32)),
    ("gray", (128, 128, 128)),
    ("green", (0, 128, 0)),
    ("greenyellow", (173, 255, 47)),
    ("grey", (128, 128, 128)),
    ("honeydew", (240, 255, 240)),
    ("hotpink", (255, 105, 180)),
    ("indianred", (205, 92, 92)),
    ("indigo", (75, 0, 130)),
    ("ivory", (255, 255, 240)),
    ("khaki", (240, 230, 140)),
    ("lavender", (230, 230, 250)),
    ("lavenderblush", (255, 240, 245)),
    ("lawngreen", (124, 252, 0)),
    ("lemonchiffon", (255, 250, 205)),
    ("lightblue", (173, 216, 230)),
    ("lightcoral", (240, 128, 128)),
    ("lightcyan", (224, 255, 255)),
    ("lightgoldenrodyellow", (250, 250, 210)),
    ("lightgray", (211, 211, 211)),
    ("lightgreen", (144, 238, 144)),
    ("lightgrey", (211, 211, 211)),
    ("lightpink", (255, 182, 193)),
    ("lightsalmon", (255, 160, 122)),
    ("lightseagreen", (32, 178, 170)),
    ("lightskyblue", (135, 206, 250)),
    ("lightslategray", (119, 136, 153)),
    ("lightslategrey", (119, 136, 153)),
    ("lightsteelblue", (176, 196, 222)),
    ("lightyellow", (255, 255, 224)),
    ("lime", (0, 255, 0)),
    ("limegreen", (50, 205, 50)),
    ("linen", (250, 240, 230)),
    ("magenta", (255, 0, 255)),
    ("maroon", (128, 0, 0)),
    ("mediumaquamarine", (102, 205, 170)),
    ("mediumblue", (0, 0, 205)),
    ("mediumorchid", (186, 85, 211)),
    ("mediumpurple", (147, 112, 219)),
    ("mediumseagreen", (60, 179, 113)),
    ("mediumslateblue", (123, 104, 238)),
    ("mediumspringgreen", (0, 250, 154)),
    ("mediumturquoise", (72, 209, 204)),
    ("mediumvioletred", (199, 21, 133)),
    ("midnightblue", (25, 25, 112)),
    ("mintcream", (245, 255, 250)),
    ("mistyrose", (255, 228, 225)),
    ("moccasin", (255, 228, 181)),
    ("navajowhite", (255, 222, 173)),
    ("navy", (0, 0, 128)),
    ("oldlace", (253, 245, 230)),
    ("olive", (128, 128, 0)),
    ("olivedrab", (107, 142, 35)),
    ("orange", (255, 165, 0)),
    ("orangered", (255, 69, 0)),
    ("orchid", (218, 112, 214)),
    ("palegoldenrod", (238, 232, 170)),
    ("palegreen", (152, 251, 152)),
    ("paleturquoise", (175, 238, 238)),
    ("palevioletred", (219, 112, 147)),
    ("papayawhip", (255, 239, 213)),
    ("peachpuff", (255, 218, 185)),
    ("peru", (205, 133, 63)),
    ("pink", (255, 192, 203)),
    ("plum", (221, 160, 221)),
    ("powderblue", (176, 224, 230)),
    ("purple", (128, 0, 128)),
    ("rebeccapurple", (102, 51, 153)),
    ("red", (255, 0, 0)),
    ("rosybrown", (188, 143, 143)),
    ("royalblue", (65, 105, 225)),
    ("saddlebrown", (139, 69, 19)),
    ("salmon", (250, 128, 114)),
    ("sandybrown", (244, 164, 96)),
    ("seagreen", (46, 139, 87)),
    ("seashell", (255, 245, 238)),
    ("sienna", (160, 82, 45)),
    ("silver", (192, 192, 192)),
    ("skyblue", (135, 206, 235)),
    ("slateblue", (106, 90, 205)),
    ("slategray", (112, 128, 144)),
    ("slategrey", (112, 128, 144)),
    ("snow", (255, 250, 250)),
    ("springgreen", (0, 255, 127)),
    ("steelblue", (70, 130, 180)),
    ("tan", (210, 180, 140)),
    ("teal", (0, 128, 128)),
    ("thistle", (216, 191, 216)),
    ("tomato", (255, 99, 71)),
    ("turquoise", (64, 224, 208)),
    ("violet", (238, 130, 238)),
    ("wheat", (245, 222, 179)),
    ("white", (255, 255, 255)),
    ("whitesmoke", (245, 245, 245)),
    ("yellow", (255, 255, 0)),
    ("yellowgreen", (154, 205, 50)),
];

#[cfg(test)]
mod tests {
    use super::super::test_util::parse_str;
    use super::*;

    #[test]
    fn named_colors_are_sorted() {
        assert!(NAMED_COLORS.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }

    #[test]
    fn parse_named_and_hex() {
        assert_eq!(
            parse_str::<CssColor>("Red"),
            Some(CssColor::Rgba(Rgba::new(255, 0, 0, 1.0)))
        );
        assert_eq!(
            parse_str::<CssColor>("#0f08"),
            Some(CssColor::Rgba(Rgba::new(0, 255, 0, 136.0 / 255.0)))
        );
        assert_eq!(
            parse_str::<CssColor>("#336699"),
            Some(CssColor::Rgba(Rgba::new(0x33, 0x66, 0x99, 1.0)))
        );
        assert_eq!(parse_str::<CssColor>("currentColor"), Some(CssColor::CurrentColor));
        assert!(parse_str::<CssColor>("#12345").is_none());
        assert!(parse_str::<CssColor>("notacolor").is_none());
    }

    #[test]
    fn parse_rgb_forms() {
        let expected = Some(CssColor::Rgba(Rgba::new(10, 20, 30, 0.5)));
        assert_eq!(parse_str::<CssColor>("rgb(10,20,30,0.5)"), expected);
        assert_eq!(parse_str::<CssColor>("rgba(10, 20, 30, 50%)"), expected);
        assert_eq!(parse_str::<CssColor>("rgb(10 20 30 / 0.5)"), expected);
        assert!(parse_str::<CssColor>("rgb(var(--r), 20, 30)").is_none());
    }

    #[test]
    fn parse_hsl() {
        assert_eq!(
            parse_str::<CssColor>("hsl(120deg 50% 25%)"),
            Some(CssColor::Hsla(Hsla {
                hue: 120.0,
                saturation: 50.0,
                lightness: 25.0,
                alpha: 1.0,
            }))
        );
    }

    #[test]
    fn other_color_spaces() {
        assert_eq!(
            parse_str::<CssColor>("oklch(70% 0.1 200)"),
            Some(CssColor::Other(ColorSpace::Oklch))
        );
        assert_eq!(
            parse_str::<CssColor>("color(display-p3 1 0 0)"),
            Some(CssColor::Other(ColorSpace::DisplayP3))
        );
    }
}
