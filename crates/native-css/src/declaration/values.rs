//! Conversions from typed CSS values to [`StyleValue`]s.
//!
//! Every function returns `None` for a value the target cannot represent.

use crate::options::CompileOptions;
use crate::style::{StyleValue, f32_to_f64, finite, format_number};
use native_css_parser::values::align::{AlignContent, AlignItems, AlignSelf, JustifyContent};
use native_css_parser::values::animation::EasingFunction;
use native_css_parser::values::border::{BorderSideWidth, LineStyle};
use native_css_parser::values::color::{ColorSpace, CssColor};
use native_css_parser::values::display::OverflowKeyword;
use native_css_parser::values::flex::GapValue;
use native_css_parser::values::font::{
    AbsoluteFontWeight, FontFamily, FontSize, FontStyle, FontVariantCaps, FontWeight, LineHeight,
    VerticalAlign, VerticalAlignKeyword,
};
use native_css_parser::values::length::{
    Angle, Length, LengthPercentage, LengthPercentageOrAuto, LengthUnit, LengthValue, Size, Time,
};
use native_css_parser::values::text::{
    TextAlign, TextDecorationLine, TextDecorationLineKind, TextDecorationThickness,
};
use native_css_parser::values::Rect;

/// Prefix marking a font family as a native font name.
const NATIVE_FONT_PREFIX: &str = "react-native";

pub fn parse_length_value(length: &LengthValue, options: &CompileOptions) -> Option<StyleValue> {
    let value = finite(length.value)?;
    match length.unit {
        LengthUnit::Px => Some(StyleValue::Number(value)),
        LengthUnit::Rem => Some(match options.inline_rem {
            Some(rem) => StyleValue::Number(value * rem),
            None => StyleValue::runtime("rem", vec![StyleValue::Number(value)]),
        }),
        LengthUnit::Vw | LengthUnit::Vh => Some(StyleValue::runtime(
            length.unit.as_str(),
            vec![StyleValue::Number(value)],
        )),
        LengthUnit::In
        | LengthUnit::Cm
        | LengthUnit::Mm
        | LengthUnit::Q
        | LengthUnit::Pt
        | LengthUnit::Pc
        | LengthUnit::Em
        | LengthUnit::Ex
        | LengthUnit::Rex
        | LengthUnit::Ch
        | LengthUnit::Rch
        | LengthUnit::Cap
        | LengthUnit::Rcap
        | LengthUnit::Ic
        | LengthUnit::Ric
        | LengthUnit::Lh
        | LengthUnit::Rlh
        | LengthUnit::Lvw
        | LengthUnit::Svw
        | LengthUnit::Dvw
        | LengthUnit::Cqw
        | LengthUnit::Lvh
        | LengthUnit::Svh
        | LengthUnit::Dvh
        | LengthUnit::Cqh
        | LengthUnit::Vi
        | LengthUnit::Svi
        | LengthUnit::Lvi
        | LengthUnit::Dvi
        | LengthUnit::Cqi
        | LengthUnit::Vb
        | LengthUnit::Svb
        | LengthUnit::Lvb
        | LengthUnit::Dvb
        | LengthUnit::Cqb
        | LengthUnit::Vmin
        | LengthUnit::Svmin
        | LengthUnit::Lvmin
        | LengthUnit::Dvmin
        | LengthUnit::Cqmin
        | LengthUnit::Vmax
        | LengthUnit::Svmax
        | LengthUnit::Lvmax
        | LengthUnit::Dvmax
        | LengthUnit::Cqmax => None,
    }
}

pub fn parse_length(length: &Length, options: &CompileOptions) -> Option<StyleValue> {
    match length {
        Length::Value(value) => parse_length_value(value, options),
        Length::Calc(_) => None,
    }
}

pub fn parse_length_percentage(
    value: &LengthPercentage,
    options: &CompileOptions,
) -> Option<StyleValue> {
    match value {
        LengthPercentage::Dimension(length) => parse_length_value(length, options),
        LengthPercentage::Percentage(fraction) => {
            fraction.is_finite().then(|| format_percentage(*fraction).into())
        }
        LengthPercentage::Calc(_) => None,
    }
}

/// `auto` has no value of its own here.
pub fn parse_length_percentage_or_auto(
    value: &LengthPercentageOrAuto,
    options: &CompileOptions,
) -> Option<StyleValue> {
    match value {
        LengthPercentageOrAuto::Auto => None,
        LengthPercentageOrAuto::LengthPercentage(value) => parse_length_percentage(value, options),
    }
}

/// Offsets (`top`, `margin-left`, ...) keep `auto`.
pub fn parse_offset(value: &LengthPercentageOrAuto, options: &CompileOptions) -> Option<StyleValue> {
    match value {
        LengthPercentageOrAuto::Auto => Some("auto".into()),
        LengthPercentageOrAuto::LengthPercentage(value) => parse_length_percentage(value, options),
    }
}

pub fn parse_size(size: &Size, options: &CompileOptions) -> Option<StyleValue> {
    match size {
        Size::LengthPercentage(value) => parse_length_percentage(value, options),
        Size::Auto => Some("auto".into()),
        Size::None => Some("none".into()),
        Size::MinContent
        | Size::MaxContent
        | Size::FitContent
        | Size::FitContentFunction(_)
        | Size::Stretch
        | Size::Contain => None,
    }
}

/// `0.5` renders as `"50%"`, rounded to two decimals.
pub fn format_percentage(fraction: f32) -> String {
    format!("{}%", format_number(round(f32_to_f64(fraction) * 100.0)))
}

fn round(number: f64) -> f64 {
    ((number + f64::EPSILON) * 100.0).round() / 100.0
}

pub fn parse_color(color: &CssColor) -> Option<StyleValue> {
    match color {
        CssColor::Rgba(rgba) => Some(
            format!(
                "rgba({}, {}, {}, {})",
                rgba.red,
                rgba.green,
                rgba.blue,
                format_number(finite(rgba.alpha)?)
            )
            .into(),
        ),
        CssColor::Hsla(hsla) => Some(
            format!(
                "hsla({}, {}%, {}%, {})",
                format_number(finite(hsla.hue)?),
                format_number(finite(hsla.saturation)?),
                format_number(finite(hsla.lightness)?),
                format_number(finite(hsla.alpha)?)
            )
            .into(),
        ),
        CssColor::CurrentColor => None,
        CssColor::Other(space) => match space {
            ColorSpace::Lab
            | ColorSpace::Lch
            | ColorSpace::Oklab
            | ColorSpace::Oklch
            | ColorSpace::Hwb
            | ColorSpace::Srgb
            | ColorSpace::SrgbLinear
            | ColorSpace::DisplayP3
            | ColorSpace::A98Rgb
            | ColorSpace::ProphotoRgb
            | ColorSpace::Rec2020
            | ColorSpace::XyzD50
            | ColorSpace::XyzD65 => None,
        },
    }
}

/// Only `deg` and `rad` pass through.
pub fn parse_angle(angle: &Angle) -> Option<StyleValue> {
    match angle {
        Angle::Deg(value) => Some(format!("{}deg", format_number(finite(*value)?)).into()),
        Angle::Rad(value) => Some(format!("{}rad", format_number(finite(*value)?)).into()),
        Angle::Grad(_) | Angle::Turn(_) => None,
    }
}

/// Durations are emitted in milliseconds.
pub fn parse_time(time: &Time) -> Option<StyleValue> {
    finite(time.to_ms()).map(StyleValue::Number)
}

pub fn parse_easing(easing: &EasingFunction) -> Option<String> {
    Some(match easing {
        EasingFunction::Linear => "linear".to_string(),
        EasingFunction::Ease => "ease".to_string(),
        EasingFunction::EaseIn => "ease-in".to_string(),
        EasingFunction::EaseOut => "ease-out".to_string(),
        EasingFunction::EaseInOut => "ease-in-out".to_string(),
        EasingFunction::CubicBezier { x1, y1, x2, y2 } => format!(
            "cubic-bezier({}, {}, {}, {})",
            format_number(finite(*x1)?),
            format_number(finite(*y1)?),
            format_number(finite(*x2)?),
            format_number(finite(*y2)?)
        ),
        EasingFunction::Steps { count, position } => {
            format!("steps({}, {})", count, position.as_str())
        }
    })
}

fn allowed(value: &str, allowed: &[&str]) -> Option<StyleValue> {
    allowed.contains(&value).then(|| value.into())
}

pub fn parse_align_content(value: &AlignContent) -> Option<StyleValue> {
    let value = match value {
        AlignContent::Normal | AlignContent::BaselinePosition(_) => return None,
        AlignContent::ContentDistribution(distribution) => distribution.as_str(),
        AlignContent::ContentPosition(position) => position.as_str(),
    };
    allowed(
        value,
        &["flex-start", "flex-end", "center", "stretch", "space-between", "space-around"],
    )
}

pub fn parse_justify_content(value: &JustifyContent) -> Option<StyleValue> {
    let value = match value {
        JustifyContent::Normal | JustifyContent::Left | JustifyContent::Right => return None,
        JustifyContent::ContentDistribution(distribution) => distribution.as_str(),
        JustifyContent::ContentPosition(position) => position.as_str(),
    };
    allowed(
        value,
        &["flex-start", "flex-end", "center", "space-between", "space-around", "space-evenly"],
    )
}

pub fn parse_align_self(value: &AlignSelf) -> Option<StyleValue> {
    let value = match value {
        AlignSelf::Normal | AlignSelf::Auto => return Some("auto".into()),
        AlignSelf::Stretch => "stretch",
        AlignSelf::BaselinePosition(_) => "baseline",
        AlignSelf::SelfPosition(position) => position.as_str(),
    };
    allowed(
        value,
        &["auto", "flex-start", "flex-end", "center", "stretch", "baseline"],
    )
}

pub fn parse_align_items(value: &AlignItems) -> Option<StyleValue> {
    let value = match value {
        AlignItems::Normal => return Some("auto".into()),
        AlignItems::Stretch => "stretch",
        AlignItems::BaselinePosition(_) => "baseline",
        AlignItems::SelfPosition(position) => position.as_str(),
    };
    allowed(
        value,
        &["flex-start", "flex-end", "center", "stretch", "baseline"],
    )
}

pub fn parse_gap(value: &GapValue, options: &CompileOptions) -> Option<StyleValue> {
    match value {
        GapValue::Normal => None,
        GapValue::LengthPercentage(value) => parse_length_percentage(value, options),
    }
}

pub fn parse_overflow(value: OverflowKeyword) -> Option<StyleValue> {
    allowed(value.as_str(), &["visible", "hidden", "scroll"])
}

pub fn parse_font_weight(weight: &FontWeight) -> Option<StyleValue> {
    match weight {
        FontWeight::Absolute(AbsoluteFontWeight::Weight(weight)) => {
            Some(StyleValue::from_f32(*weight))
        }
        FontWeight::Absolute(AbsoluteFontWeight::Normal) => Some("normal".into()),
        FontWeight::Absolute(AbsoluteFontWeight::Bold) => Some("bold".into()),
        FontWeight::Bolder | FontWeight::Lighter => None,
    }
}

pub fn parse_font_size(size: &FontSize, options: &CompileOptions) -> Option<StyleValue> {
    match size {
        FontSize::Length(value) => parse_length_percentage(value, options),
        FontSize::Absolute(_) | FontSize::Relative(_) => None,
    }
}

/// The first native font in the list (prefix stripped), else the first family.
pub fn parse_font_family(family: &FontFamily) -> Option<StyleValue> {
    family
        .0
        .iter()
        .find_map(|name| name.strip_prefix(NATIVE_FONT_PREFIX))
        .or_else(|| family.0.first().map(String::as_str))
        .map(StyleValue::from)
}

pub fn parse_font_style(style: &FontStyle) -> Option<StyleValue> {
    match style {
        FontStyle::Normal => Some("normal".into()),
        FontStyle::Italic => Some("italic".into()),
        FontStyle::Oblique(_) => None,
    }
}

pub fn parse_font_variant_caps(caps: FontVariantCaps) -> Option<StyleValue> {
    allowed(caps.as_str(), &["small-caps"])
}

/// Unitless line heights scale with the font size, which only the runtime knows.
pub fn parse_line_height(line_height: &LineHeight, options: &CompileOptions) -> Option<StyleValue> {
    match line_height {
        LineHeight::Number(value) => Some(StyleValue::runtime(
            "em",
            vec![StyleValue::from_f32(*value)],
        )),
        LineHeight::Length(LengthPercentage::Dimension(length)) => {
            parse_length_value(length, options)
        }
        LineHeight::Length(_) | LineHeight::Normal => None,
    }
}

pub fn parse_vertical_align(value: &VerticalAlign) -> Option<StyleValue> {
    match value {
        VerticalAlign::Keyword(
            keyword @ (VerticalAlignKeyword::Top
            | VerticalAlignKeyword::Bottom
            | VerticalAlignKeyword::Middle),
        ) => Some(keyword.as_str().into()),
        VerticalAlign::Keyword(_) | VerticalAlign::Length(_) => None,
    }
}

pub fn parse_border_side_width(
    width: &BorderSideWidth,
    options: &CompileOptions,
) -> Option<StyleValue> {
    match width {
        BorderSideWidth::Length(length) => parse_length(length, options),
        BorderSideWidth::Thin | BorderSideWidth::Medium | BorderSideWidth::Thick => None,
    }
}

pub fn parse_line_style(style: LineStyle) -> Option<StyleValue> {
    allowed(style.as_str(), &["solid", "dotted", "dashed"])
}

/// A per-side style only has a value when all four sides agree.
pub fn parse_border_style(styles: &Rect<LineStyle>) -> Option<StyleValue> {
    let uniform = styles.top == styles.right
        && styles.top == styles.bottom
        && styles.top == styles.left;
    if uniform {
        parse_line_style(styles.top)
    } else {
        None
    }
}

pub fn parse_text_align(align: TextAlign) -> Option<StyleValue> {
    allowed(align.as_str(), &["left", "right", "center", "justify"])
}

pub fn parse_text_decoration_line(line: &TextDecorationLine) -> Option<StyleValue> {
    let underline = line.contains(TextDecorationLineKind::Underline);
    let line_through = line.contains(TextDecorationLineKind::LineThrough);
    match (line, underline, line_through) {
        (TextDecorationLine::None, _, _) => Some("none".into()),
        (_, true, true) => Some("underline line-through".into()),
        (_, true, false) => Some("underline".into()),
        (_, false, true) => Some("line-through".into()),
        (_, false, false) => None,
    }
}

pub fn parse_text_decoration_thickness(
    thickness: &TextDecorationThickness,
    options: &CompileOptions,
) -> Option<StyleValue> {
    match thickness {
        TextDecorationThickness::LengthPercentage(value) => parse_length_percentage(value, options),
        TextDecorationThickness::Auto | TextDecorationThickness::FromFont => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use native_css_parser::values::color::{Hsla, Rgba};
    use pretty_assertions::assert_eq;

    fn length(value: f32, unit: LengthUnit) -> LengthValue {
        LengthValue::new(value, unit)
    }

    #[test]
    fn lengths_by_unit() {
        let options = CompileOptions::default();
        assert_eq!(
            parse_length_value(&length(12.0, LengthUnit::Px), &options),
            Some(StyleValue::Number(12.0))
        );
        assert_eq!(
            parse_length_value(&length(2.0, LengthUnit::Rem), &options),
            Some(StyleValue::Number(28.0))
        );
        assert_eq!(
            parse_length_value(&length(50.0, LengthUnit::Vw), &options),
            Some(StyleValue::runtime("vw", vec![StyleValue::Number(50.0)]))
        );
        assert_eq!(parse_length_value(&length(1.0, LengthUnit::Em), &options), None);
        assert_eq!(parse_length_value(&length(1.0, LengthUnit::Cqmax), &options), None);
    }

    #[test]
    fn rem_without_inline_size_is_deferred() {
        let options = CompileOptions {
            inline_rem: None,
            ..Default::default()
        };
        assert_eq!(
            parse_length_value(&length(1.5, LengthUnit::Rem), &options),
            Some(StyleValue::runtime("rem", vec![StyleValue::Number(1.5)]))
        );
    }

    #[test]
    fn percentages_round_to_two_decimals() {
        assert_eq!(format_percentage(0.5), "50%");
        assert_eq!(format_percentage(1.0 / 3.0), "33.33%");
        assert_eq!(format_percentage(0.125), "12.5%");
    }

    #[test]
    fn colors() {
        let rgba = CssColor::Rgba(Rgba::new(10, 20, 30, 0.5));
        assert_eq!(parse_color(&rgba), Some("rgba(10, 20, 30, 0.5)".into()));
        let hsla = CssColor::Hsla(Hsla {
            hue: 120.0,
            saturation: 50.0,
            lightness: 25.0,
            alpha: 1.0,
        });
        assert_eq!(parse_color(&hsla), Some("hsla(120, 50%, 25%, 1)".into()));
        assert_eq!(parse_color(&CssColor::Other(ColorSpace::Oklch)), None);
        assert_eq!(parse_color(&CssColor::CurrentColor), None);
    }

    #[test]
    fn angles() {
        assert_eq!(parse_angle(&Angle::Deg(45.0)), Some("45deg".into()));
        assert_eq!(parse_angle(&Angle::Rad(1.5)), Some("1.5rad".into()));
        assert_eq!(parse_angle(&Angle::Turn(0.5)), None);
    }

    #[test]
    fn sizes() {
        let options = CompileOptions::default();
        assert_eq!(parse_size(&Size::Auto, &options), Some("auto".into()));
        assert_eq!(parse_size(&Size::MaxContent, &options), None);
        assert_eq!(
            parse_size(&Size::LengthPercentage(LengthPercentage::Percentage(0.25)), &options),
            Some("25%".into())
        );
    }

    #[test]
    fn font_family_prefers_native_fonts() {
        let family = FontFamily(vec!["Inter".to_string(), "react-nativeSystem".to_string()]);
        assert_eq!(parse_font_family(&family), Some("System".into()));
        let family = FontFamily(vec!["Inter".to_string(), "sans-serif".to_string()]);
        assert_eq!(parse_font_family(&family), Some("Inter".into()));
    }

    #[test]
    fn easing_functions() {
        assert_eq!(
            parse_easing(&EasingFunction::EaseInOut).as_deref(),
            Some("ease-in-out")
        );
        assert_eq!(
            parse_easing(&EasingFunction::CubicBezier {
                x1: 0.25,
                y1: 0.1,
                x2: 0.25,
                y2: 1.0
            })
            .as_deref(),
            Some("cubic-bezier(0.25, 0.1, 0.25, 1)")
        );
    }

    #[test]
    fn times_are_milliseconds() {
        assert_eq!(parse_time(&Time::Seconds(1.5)), Some(StyleValue::Number(1500.0)));
        assert_eq!(
            parse_time(&Time::Milliseconds(200.0)),
            Some(StyleValue::Number(200.0))
        );
    }

    #[test]
    fn overflowing_values_are_dropped() {
        let options = CompileOptions::default();
        assert_eq!(parse_length_value(&length(f32::INFINITY, LengthUnit::Px), &options), None);
        assert_eq!(parse_length_value(&length(f32::NAN, LengthUnit::Rem), &options), None);
        assert_eq!(parse_time(&Time::Seconds(f32::INFINITY)), None);
        assert_eq!(parse_angle(&Angle::Deg(f32::INFINITY)), None);
        assert_eq!(
            parse_length_percentage(&LengthPercentage::Percentage(f32::INFINITY), &options),
            None
        );
    }

    #[test]
    fn text_decoration_lines() {
        use TextDecorationLineKind::*;
        let both = TextDecorationLine::Lines(vec![LineThrough, Underline]);
        assert_eq!(parse_text_decoration_line(&both), Some("underline line-through".into()));
        let overline = TextDecorationLine::Lines(vec![Overline]);
        assert_eq!(parse_text_decoration_line(&overline), None);
        assert_eq!(parse_text_decoration_line(&TextDecorationLine::None), Some("none".into()));
    }
}
