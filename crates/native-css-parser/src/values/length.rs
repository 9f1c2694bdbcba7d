//! Lengths, percentages, angles and times.

use super::{Parse, ParseResult};
use cssparser::{Parser, Token};

/// Every length unit the tokenizer can classify.
///
/// The list is closed: an unrecognized unit makes the containing value fail to
/// parse, so downstream consumers can match on it without a fallback arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Px,
    In,
    Cm,
    Mm,
    Q,
    Pt,
    Pc,
    Em,
    Rem,
    Ex,
    Rex,
    Ch,
    Rch,
    Cap,
    Rcap,
    Ic,
    Ric,
    Lh,
    Rlh,
    Vw,
    Lvw,
    Svw,
    Dvw,
    Cqw,
    Vh,
    Lvh,
    Svh,
    Dvh,
    Cqh,
    Vi,
    Svi,
    Lvi,
    Dvi,
    Cqi,
    Vb,
    Svb,
    Lvb,
    Dvb,
    Cqb,
    Vmin,
    Svmin,
    Lvmin,
    Dvmin,
    Cqmin,
    Vmax,
    Svmax,
    Lvmax,
    Dvmax,
    Cqmax,
}

const LENGTH_UNITS: &[(&str, LengthUnit)] = &[
    ("px", LengthUnit::Px),
    ("in", LengthUnit::In),
    ("cm", LengthUnit::Cm),
    ("mm", LengthUnit::Mm),
    ("q", LengthUnit::Q),
    ("pt", LengthUnit::Pt),
    ("pc", LengthUnit::Pc),
    ("em", LengthUnit::Em),
    ("rem", LengthUnit::Rem),
    ("ex", LengthUnit::Ex),
    ("rex", LengthUnit::Rex),
    ("ch", LengthUnit::Ch),
    ("rch", LengthUnit::Rch),
    ("cap", LengthUnit::Cap),
    ("rcap", LengthUnit::Rcap),
    ("ic", LengthUnit::Ic),
    ("ric", LengthUnit::Ric),
    ("lh", LengthUnit::Lh),
    ("rlh", LengthUnit::Rlh),
    ("vw", LengthUnit::Vw),
    ("lvw", LengthUnit::Lvw),
    ("svw", LengthUnit::Svw),
    ("dvw", LengthUnit::Dvw),
    ("cqw", LengthUnit::Cqw),
    ("vh", LengthUnit::Vh),
    ("lvh", LengthUnit::Lvh),
    ("svh", LengthUnit::Svh),
    ("dvh", LengthUnit::Dvh),
    ("cqh", LengthUnit::Cqh),
    ("vi", LengthUnit::Vi),
    ("svi", LengthUnit::Svi),
    ("lvi", LengthUnit::Lvi),
    ("dvi", LengthUnit::Dvi),
    ("cqi", LengthUnit::Cqi),
    ("vb", LengthUnit::Vb),
    ("svb", LengthUnit::Svb),
    ("lvb", LengthUnit::Lvb),
    ("dvb", LengthUnit::Dvb),
    ("cqb", LengthUnit::Cqb),
    ("vmin", LengthUnit::Vmin),
    ("svmin", LengthUnit::Svmin),
    ("lvmin", LengthUnit::Lvmin),
    ("dvmin", LengthUnit::Dvmin),
    ("cqmin", LengthUnit::Cqmin),
    ("vmax", LengthUnit::Vmax),
    ("svmax", LengthUnit::Svmax),
    ("lvmax", LengthUnit::Lvmax),
    ("dvmax", LengthUnit::Dvmax),
    ("cqmax", LengthUnit::Cqmax),
];

impl LengthUnit {
    /// Look up a unit by its CSS name, case-insensitively.
    pub fn from_unit(unit: &str) -> Option<Self> {
        LENGTH_UNITS
            .iter()
            .find(|(name, _)| unit.eq_ignore_ascii_case(name))
            .map(|(_, unit)| *unit)
    }

    /// The CSS spelling of this unit.
    pub fn as_str(&self) -> &'static str {
        LENGTH_UNITS
            .iter()
            .find(|(_, unit)| unit == self)
            .map(|(name, _)| *name)
            .unwrap_or("px")
    }
}

/// A number with a length unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthValue {
    pub value: f32,
    pub unit: LengthUnit,
}

impl LengthValue {
    pub fn new(value: f32, unit: LengthUnit) -> Self {
        Self { value, unit }
    }
}

impl Parse for LengthValue {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        let location = input.current_source_location();
        let token = input.next()?.clone();
        match &token {
            Token::Dimension { value, unit, .. } => LengthUnit::from_unit(unit)
                .map(|unit| LengthValue::new(*value, unit))
                .ok_or_else(|| location.new_unexpected_token_error(token.clone())),
            // Unitless zero is a valid length
            Token::Number { value, .. } if *value == 0.0 => {
                Ok(LengthValue::new(0.0, LengthUnit::Px))
            }
            _ => Err(location.new_unexpected_token_error(token.clone())),
        }
    }
}

/// A length, or a `calc()` expression kept as source text.
#[derive(Debug, Clone, PartialEq)]
pub enum Length {
    Value(LengthValue),
    Calc(String),
}

impl Parse for Length {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        if let Ok(calc) = input.try_parse(parse_calc) {
            return Ok(Length::Calc(calc));
        }
        LengthValue::parse(input).map(Length::Value)
    }
}

/// Parse `calc(...)` into its inner source text.
///
/// A calc containing `var()` is rejected so the declaration keeps its raw tokens.
pub(crate) fn parse_calc<'i>(input: &mut Parser<'i, '_>) -> ParseResult<'i, String> {
    input.expect_function_matching("calc")?;
    let location = input.current_source_location();
    let body = input.parse_nested_block(|p| -> ParseResult<'i, String> {
        let start = p.position();
        while p.next().is_ok() {}
        Ok(p.slice_from(start).trim().to_string())
    })?;
    if body.to_ascii_lowercase().contains("var(") {
        return Err(location.new_custom_error(()));
    }
    Ok(body)
}

/// A length or a percentage.
#[derive(Debug, Clone, PartialEq)]
pub enum LengthPercentage {
    Dimension(LengthValue),
    /// Fraction of the reference size (`50%` is `0.5`).
    Percentage(f32),
    Calc(String),
}

impl Parse for LengthPercentage {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        if let Ok(unit_value) = input.try_parse(|p| p.expect_percentage()) {
            return Ok(LengthPercentage::Percentage(unit_value));
        }
        match Length::parse(input)? {
            Length::Value(value) => Ok(LengthPercentage::Dimension(value)),
            Length::Calc(calc) => Ok(LengthPercentage::Calc(calc)),
        }
    }
}

/// `auto` or a length-percentage.
#[derive(Debug, Clone, PartialEq)]
pub enum LengthPercentageOrAuto {
    Auto,
    LengthPercentage(LengthPercentage),
}

impl Parse for LengthPercentageOrAuto {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        if input.try_parse(|p| p.expect_ident_matching("auto")).is_ok() {
            return Ok(LengthPercentageOrAuto::Auto);
        }
        LengthPercentage::parse(input).map(LengthPercentageOrAuto::LengthPercentage)
    }
}

/// Values accepted by the sizing properties (`width`, `max-height`, margins, ...).
#[derive(Debug, Clone, PartialEq)]
pub enum Size {
    Auto,
    None,
    MinContent,
    MaxContent,
    FitContent,
    FitContentFunction(LengthPercentage),
    Stretch,
    Contain,
    LengthPercentage(LengthPercentage),
}

impl Parse for Size {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        let keyword = input.try_parse(|p| {
            super::parse_ident_in(
                p,
                &[
                    "auto",
                    "none",
                    "min-content",
                    "max-content",
                    "fit-content",
                    "stretch",
                    "contain",
                ],
            )
        });
        if let Ok(keyword) = keyword {
            return Ok(match keyword.as_str() {
                "auto" => Size::Auto,
                "none" => Size::None,
                "min-content" => Size::MinContent,
                "max-content" => Size::MaxContent,
                "fit-content" => Size::FitContent,
                "stretch" => Size::Stretch,
                _ => Size::Contain,
            });
        }

        if input
            .try_parse(|p| p.expect_function_matching("fit-content"))
            .is_ok()
        {
            let value = input.parse_nested_block(LengthPercentage::parse)?;
            return Ok(Size::FitContentFunction(value));
        }

        LengthPercentage::parse(input).map(Size::LengthPercentage)
    }
}

/// A plain number or a percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberOrPercentage {
    Number(f32),
    Percentage(f32),
}

impl NumberOrPercentage {
    /// The numeric value, with percentages as fractions.
    pub fn value(&self) -> f32 {
        match self {
            NumberOrPercentage::Number(value) | NumberOrPercentage::Percentage(value) => *value,
        }
    }
}

impl Parse for NumberOrPercentage {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        if let Ok(unit_value) = input.try_parse(|p| p.expect_percentage()) {
            return Ok(NumberOrPercentage::Percentage(unit_value));
        }
        Ok(NumberOrPercentage::Number(input.expect_number()?))
    }
}

/// An opacity-like value; percentages are stored as fractions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlphaValue(pub f32);

impl Parse for AlphaValue {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        NumberOrPercentage::parse(input).map(|value| AlphaValue(value.value()))
    }
}

/// An angle with its unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Angle {
    Deg(f32),
    Rad(f32),
    Grad(f32),
    Turn(f32),
}

impl Angle {
    /// Build an angle from a dimension token's value and unit.
    pub fn from_dimension(value: f32, unit: &str) -> Option<Self> {
        match unit.to_ascii_lowercase().as_str() {
            "deg" => Some(Angle::Deg(value)),
            "rad" => Some(Angle::Rad(value)),
            "grad" => Some(Angle::Grad(value)),
            "turn" => Some(Angle::Turn(value)),
            _ => None,
        }
    }
}

impl Parse for Angle {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        let location = input.current_source_location();
        let token = input.next()?.clone();
        match &token {
            Token::Dimension { value, unit, .. } => Angle::from_dimension(*value, unit)
                .ok_or_else(|| location.new_unexpected_token_error(token.clone())),
            Token::Number { value, .. } if *value == 0.0 => Ok(Angle::Deg(0.0)),
            _ => Err(location.new_unexpected_token_error(token.clone())),
        }
    }
}

/// A duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Time {
    Seconds(f32),
    Milliseconds(f32),
}

impl Time {
    pub fn from_dimension(value: f32, unit: &str) -> Option<Self> {
        match unit.to_ascii_lowercase().as_str() {
            "s" => Some(Time::Seconds(value)),
            "ms" => Some(Time::Milliseconds(value)),
            _ => None,
        }
    }

    /// The duration in milliseconds.
    pub fn to_ms(&self) -> f32 {
        match self {
            Time::Seconds(value) => value * 1000.0,
            Time::Milliseconds(value) => *value,
        }
    }
}

impl Default for Time {
    fn default() -> Self {
        Time::Seconds(0.0)
    }
}

impl Parse for Time {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        let location = input.current_source_location();
        let token = input.next()?.clone();
        match &token {
            Token::Dimension { value, unit, .. } => Time::from_dimension(*value, unit)
                .ok_or_else(|| location.new_unexpected_token_error(token.clone())),
            _ => Err(location.new_unexpected_token_error(token.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_util::parse_str;
    use super::*;

    #[test]
    fn unit_lookup_is_case_insensitive() {
        assert_eq!(LengthUnit::from_unit("PX"), Some(LengthUnit::Px));
        assert_eq!(LengthUnit::from_unit("cqmax"), Some(LengthUnit::Cqmax));
        assert_eq!(LengthUnit::from_unit("furlong"), None);
        assert_eq!(LengthUnit::Rem.as_str(), "rem");
    }

    #[test]
    fn length_percentage_variants() {
        assert_eq!(
            parse_str::<LengthPercentage>("12px"),
            Some(LengthPercentage::Dimension(LengthValue::new(12.0, LengthUnit::Px)))
        );
        assert_eq!(
            parse_str::<LengthPercentage>("50%"),
            Some(LengthPercentage::Percentage(0.5))
        );
        assert_eq!(
            parse_str::<LengthPercentage>("0"),
            Some(LengthPercentage::Dimension(LengthValue::new(0.0, LengthUnit::Px)))
        );
        assert!(parse_str::<LengthPercentage>("12").is_none());
        assert!(parse_str::<LengthPercentage>("12parsecs").is_none());
    }

    #[test]
    fn calc_is_kept_as_text() {
        assert_eq!(
            parse_str::<Length>("calc(100% - 10px)"),
            Some(Length::Calc("100% - 10px".to_string()))
        );
        assert!(parse_str::<Length>("calc(var(--gap) * 2)").is_none());
    }

    #[test]
    fn size_keywords() {
        assert_eq!(parse_str::<Size>("auto"), Some(Size::Auto));
        assert_eq!(parse_str::<Size>("max-content"), Some(Size::MaxContent));
        assert_eq!(
            parse_str::<Size>("fit-content(20px)"),
            Some(Size::FitContentFunction(LengthPercentage::Dimension(
                LengthValue::new(20.0, LengthUnit::Px)
            )))
        );
    }

    #[test]
    fn angles_and_times() {
        assert_eq!(parse_str::<Angle>("45deg"), Some(Angle::Deg(45.0)));
        assert_eq!(parse_str::<Angle>("0.5turn"), Some(Angle::Turn(0.5)));
        assert_eq!(parse_str::<Time>("1.5s").map(|t| t.to_ms()), Some(1500.0));
        assert_eq!(parse_str::<Time>("200ms"), Some(Time::Milliseconds(200.0)));
        assert!(parse_str::<Time>("200").is_none());
    }
}
