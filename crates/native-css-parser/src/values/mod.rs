//! Typed CSS values.
//!
//! Every value type implements [`Parse`], which consumes tokens from a
//! `cssparser::Parser` and fails without side effects when the input does not
//! match. Declaration parsing relies on that: a failed or partial typed parse
//! falls back to an unparsed token list.

pub mod align;
pub mod animation;
pub mod border;
pub mod color;
pub mod container;
pub mod display;
pub mod flex;
pub mod font;
pub mod length;
pub mod text;
pub mod transform;

use cssparser::{ParseError as CssParseError, Parser, Token};

/// Result of parsing a single value.
pub type ParseResult<'i, T> = std::result::Result<T, CssParseError<'i, ()>>;

/// A value that can be parsed from CSS tokens.
pub trait Parse: Sized {
    /// Parse a value, consuming only the tokens that belong to it.
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self>;
}

impl Parse for f32 {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        Ok(input.expect_number()?)
    }
}

impl Parse for i32 {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        Ok(input.expect_integer()?)
    }
}

impl<T: Parse> Parse for Vec<T> {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        input.parse_comma_separated(T::parse)
    }
}

/// Parse one of a fixed set of keywords, case-insensitively.
pub(crate) fn parse_keyword<'i, T: Copy>(
    input: &mut Parser<'i, '_>,
    keywords: &[(&str, T)],
) -> ParseResult<'i, T> {
    let location = input.current_source_location();
    let ident = input.expect_ident()?.clone();
    keywords
        .iter()
        .find(|(name, _)| ident.eq_ignore_ascii_case(name))
        .map(|(_, value)| *value)
        .ok_or_else(|| location.new_unexpected_token_error(Token::Ident(ident)))
}

/// Parse a single identifier that must be one of `allowed`, returning it lowercased.
pub(crate) fn parse_ident_in<'i>(
    input: &mut Parser<'i, '_>,
    allowed: &[&str],
) -> ParseResult<'i, String> {
    let location = input.current_source_location();
    let ident = input.expect_ident()?.clone();
    let lower = ident.to_ascii_lowercase();
    if allowed.contains(&lower.as_str()) {
        Ok(lower)
    } else {
        Err(location.new_unexpected_token_error(Token::Ident(ident)))
    }
}

/// Four edge values (`top right bottom left`) expanded from 1-4 components.
#[derive(Debug, Clone, PartialEq)]
pub struct Rect<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T: Parse + Clone> Parse for Rect<T> {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        let top = T::parse(input)?;
        let Ok(right) = input.try_parse(T::parse) else {
            return Ok(Self {
                right: top.clone(),
                bottom: top.clone(),
                left: top.clone(),
                top,
            });
        };
        let Ok(bottom) = input.try_parse(T::parse) else {
            return Ok(Self {
                bottom: top.clone(),
                left: right.clone(),
                top,
                right,
            });
        };
        let left = input.try_parse(T::parse).unwrap_or_else(|_| right.clone());
        Ok(Self {
            top,
            right,
            bottom,
            left,
        })
    }
}

/// A `start [end]` pair used by the logical `*-block` and `*-inline` shorthands.
#[derive(Debug, Clone, PartialEq)]
pub struct StartEnd<T> {
    pub start: T,
    pub end: T,
}

impl<T: Parse + Clone> Parse for StartEnd<T> {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        let start = T::parse(input)?;
        let end = input.try_parse(T::parse).unwrap_or_else(|_| start.clone());
        Ok(Self { start, end })
    }
}

/// A two-component value where the second defaults to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Size2D<T>(pub T, pub T);

impl<T: Parse + Clone> Parse for Size2D<T> {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        let first = T::parse(input)?;
        let second = input.try_parse(T::parse).unwrap_or_else(|_| first.clone());
        Ok(Self(first, second))
    }
}

#[cfg(test)]
pub(crate) mod test_util {
    use super::{Parse, ParseResult};
    use cssparser::{Parser, ParserInput};

    /// Parse `css` as a complete `T`, failing if tokens remain.
    pub fn parse_str<T: Parse>(css: &str) -> Option<T> {
        let mut input = ParserInput::new(css);
        let mut parser = Parser::new(&mut input);
        let result: ParseResult<'_, T> = parser.parse_entirely(T::parse);
        result.ok()
    }
}

#[cfg(test)]
mod tests {
    use super::length::{LengthPercentage, LengthUnit, LengthValue};
    use super::test_util::parse_str;
    use super::*;

    fn px(value: f32) -> LengthPercentage {
        LengthPercentage::Dimension(LengthValue::new(value, LengthUnit::Px))
    }

    #[test]
    fn rect_expands_like_margin() {
        let rect: Rect<LengthPercentage> = parse_str("1px 2px").unwrap();
        assert_eq!(rect.top, px(1.0));
        assert_eq!(rect.right, px(2.0));
        assert_eq!(rect.bottom, px(1.0));
        assert_eq!(rect.left, px(2.0));

        let rect: Rect<LengthPercentage> = parse_str("1px 2px 3px").unwrap();
        assert_eq!(rect.bottom, px(3.0));
        assert_eq!(rect.left, px(2.0));

        let rect: Rect<LengthPercentage> = parse_str("1px 2px 3px 4px").unwrap();
        assert_eq!(rect.left, px(4.0));
    }

    #[test]
    fn rect_rejects_trailing_garbage() {
        assert!(parse_str::<Rect<LengthPercentage>>("1px 2px 3px 4px 5px").is_none());
    }

    #[test]
    fn start_end_defaults_end_to_start() {
        let pair: StartEnd<LengthPercentage> = parse_str("5px").unwrap();
        assert_eq!(pair.start, px(5.0));
        assert_eq!(pair.end, px(5.0));
    }

    #[test]
    fn comma_separated_numbers() {
        let values: Vec<f32> = parse_str("1, 2.5, 3").unwrap();
        assert_eq!(values, vec![1.0, 2.5, 3.0]);
    }
}
