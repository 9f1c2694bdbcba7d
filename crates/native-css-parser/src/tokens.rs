//! Raw token streams for values that could not be classified statically.
//!
//! A [`TokenList`] keeps the structure that matters to later resolution
//! (`var()` references, nested functions, colors with unresolved channels)
//! and stores everything else as owned tokens.

use crate::values::color::{
    self, CssColor, parse_alpha_separator, parse_color_function, parse_hsl_channels,
    parse_rgb_channels,
};
use crate::values::length::{Angle, LengthUnit, LengthValue, Time};
use crate::values::{Parse, ParseResult};
use cssparser::Parser;

/// An owned tokenizer token.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Ident(String),
    AtKeyword(String),
    Hash(String),
    IdHash(String),
    String(String),
    UnquotedUrl(String),
    Delim(char),
    Number { value: f32, int_value: Option<i32> },
    Percentage { unit_value: f32 },
    Dimension { value: f32, unit: String },
    WhiteSpace,
    Comment,
    Colon,
    Semicolon,
    Comma,
    IncludeMatch,
    DashMatch,
    PrefixMatch,
    SuffixMatch,
    SubstringMatch,
    Cdo,
    Cdc,
    Function(String),
    ParenthesisBlock,
    SquareBracketBlock,
    CurlyBracketBlock,
    BadUrl(String),
    BadString(String),
    CloseParenthesis,
    CloseSquareBracket,
    CloseCurlyBracket,
}

impl From<&cssparser::Token<'_>> for Token {
    fn from(token: &cssparser::Token<'_>) -> Self {
        use cssparser::Token as T;
        match token {
            T::Ident(value) => Token::Ident(value.to_string()),
            T::AtKeyword(value) => Token::AtKeyword(value.to_string()),
            T::Hash(value) => Token::Hash(value.to_string()),
            T::IDHash(value) => Token::IdHash(value.to_string()),
            T::QuotedString(value) => Token::String(value.to_string()),
            T::UnquotedUrl(value) => Token::UnquotedUrl(value.to_string()),
            T::Delim(value) => Token::Delim(*value),
            T::Number {
                value, int_value, ..
            } => Token::Number {
                value: *value,
                int_value: *int_value,
            },
            T::Percentage { unit_value, .. } => Token::Percentage {
                unit_value: *unit_value,
            },
            T::Dimension { value, unit, .. } => Token::Dimension {
                value: *value,
                unit: unit.to_string(),
            },
            T::WhiteSpace(_) => Token::WhiteSpace,
            T::Comment(_) => Token::Comment,
            T::Colon => Token::Colon,
            T::Semicolon => Token::Semicolon,
            T::Comma => Token::Comma,
            T::IncludeMatch => Token::IncludeMatch,
            T::DashMatch => Token::DashMatch,
            T::PrefixMatch => Token::PrefixMatch,
            T::SuffixMatch => Token::SuffixMatch,
            T::SubstringMatch => Token::SubstringMatch,
            T::CDO => Token::Cdo,
            T::CDC => Token::Cdc,
            T::Function(name) => Token::Function(name.to_string()),
            T::ParenthesisBlock => Token::ParenthesisBlock,
            T::SquareBracketBlock => Token::SquareBracketBlock,
            T::CurlyBracketBlock => Token::CurlyBracketBlock,
            T::BadUrl(value) => Token::BadUrl(value.to_string()),
            T::BadString(value) => Token::BadString(value.to_string()),
            T::CloseParenthesis => Token::CloseParenthesis,
            T::CloseSquareBracket => Token::CloseSquareBracket,
            T::CloseCurlyBracket => Token::CloseCurlyBracket,
        }
    }
}

/// A `var(--name[, fallback])` reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub fallback: Option<TokenList>,
}

/// An `env(name[, fallback])` reference.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentVariable {
    pub name: String,
    pub fallback: Option<TokenList>,
}

/// Any other function call, with its arguments kept as tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub arguments: TokenList,
}

/// A color function whose alpha channel could not be resolved (usually a `var()`).
#[derive(Debug, Clone, PartialEq)]
pub enum UnresolvedColor {
    Rgb {
        red: f32,
        green: f32,
        blue: f32,
        alpha: TokenList,
    },
    Hsl {
        hue: f32,
        saturation: f32,
        lightness: f32,
        alpha: TokenList,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    Dpi(f32),
    Dpcm(f32),
    Dppx(f32),
}

impl Resolution {
    fn from_dimension(value: f32, unit: &str) -> Option<Self> {
        match unit.to_ascii_lowercase().as_str() {
            "dpi" => Some(Resolution::Dpi(value)),
            "dpcm" => Some(Resolution::Dpcm(value)),
            "dppx" | "x" => Some(Resolution::Dppx(value)),
            _ => None,
        }
    }
}

/// A token, or a value recognized inside a token stream.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenOrValue {
    Token(Token),
    Color(CssColor),
    UnresolvedColor(UnresolvedColor),
    Url(String),
    Var(Variable),
    Env(EnvironmentVariable),
    Function(Function),
    Length(LengthValue),
    Angle(Angle),
    Time(Time),
    Resolution(Resolution),
    DashedIdent(String),
}

/// A sequence of tokens and recognized values, whitespace included.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TokenList(pub Vec<TokenOrValue>);

impl TokenList {
    /// Whether the list holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.0
            .iter()
            .all(|item| matches!(item, TokenOrValue::Token(Token::WhiteSpace)))
    }

    /// The single identifier this list consists of, ignoring whitespace.
    pub fn as_single_ident(&self) -> Option<&str> {
        let mut items = self
            .0
            .iter()
            .filter(|item| !matches!(item, TokenOrValue::Token(Token::WhiteSpace)));
        match (items.next(), items.next()) {
            (Some(TokenOrValue::Token(Token::Ident(ident))), None) => Some(ident),
            _ => None,
        }
    }
}

impl Parse for TokenList {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        let mut tokens = Vec::new();
        parse_into(input, &mut tokens)?;
        trim_whitespace(&mut tokens);
        Ok(TokenList(tokens))
    }
}

fn trim_whitespace(tokens: &mut Vec<TokenOrValue>) {
    let is_space = |item: &TokenOrValue| matches!(item, TokenOrValue::Token(Token::WhiteSpace));
    while tokens.last().is_some_and(is_space) {
        tokens.pop();
    }
    let leading = tokens.iter().take_while(|item| is_space(item)).count();
    tokens.drain(..leading);
}

fn parse_into<'i>(input: &mut Parser<'i, '_>, tokens: &mut Vec<TokenOrValue>) -> ParseResult<'i, ()> {
    use cssparser::Token as T;

    loop {
        let token = match input.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };

        match &token {
            T::Function(name) => {
                let name = name.to_string();
                let item = input.parse_nested_block(|p| parse_function(&name, p))?;
                tokens.push(item);
            }
            T::ParenthesisBlock | T::SquareBracketBlock | T::CurlyBracketBlock => {
                let close = match &token {
                    T::ParenthesisBlock => Token::CloseParenthesis,
                    T::SquareBracketBlock => Token::CloseSquareBracket,
                    _ => Token::CloseCurlyBracket,
                };
                tokens.push(TokenOrValue::Token(Token::from(&token)));
                input.parse_nested_block(|p| parse_into(p, tokens))?;
                tokens.push(TokenOrValue::Token(close));
            }
            T::Hash(value) | T::IDHash(value) => match color::parse_hex(value) {
                Some(rgba) => tokens.push(TokenOrValue::Color(CssColor::Rgba(rgba))),
                None => tokens.push(TokenOrValue::Token(Token::from(&token))),
            },
            T::Ident(value) if value.starts_with("--") => {
                tokens.push(TokenOrValue::DashedIdent(value.to_string()));
            }
            T::Ident(value) => match color::named_color(value) {
                Some(color) => tokens.push(TokenOrValue::Color(color)),
                None => tokens.push(TokenOrValue::Token(Token::from(&token))),
            },
            T::UnquotedUrl(url) => tokens.push(TokenOrValue::Url(url.to_string())),
            T::Dimension { value, unit, .. } => {
                let item = if let Some(unit) = LengthUnit::from_unit(unit) {
                    TokenOrValue::Length(LengthValue::new(*value, unit))
                } else if let Some(angle) = Angle::from_dimension(*value, unit) {
                    TokenOrValue::Angle(angle)
                } else if let Some(time) = Time::from_dimension(*value, unit) {
                    TokenOrValue::Time(time)
                } else if let Some(resolution) = Resolution::from_dimension(*value, unit) {
                    TokenOrValue::Resolution(resolution)
                } else {
                    TokenOrValue::Token(Token::from(&token))
                };
                tokens.push(item);
            }
            // Comments carry no value
            T::Comment(_) => {}
            _ => tokens.push(TokenOrValue::Token(Token::from(&token))),
        }
    }

    Ok(())
}

/// Parse the body of a function token into the most specific item available.
fn parse_function<'i>(name: &str, input: &mut Parser<'i, '_>) -> ParseResult<'i, TokenOrValue> {
    let lower = name.to_ascii_lowercase();
    match lower.as_str() {
        "var" => {
            let (name, fallback) = parse_reference(input)?;
            return Ok(TokenOrValue::Var(Variable { name, fallback }));
        }
        "env" => {
            let (name, fallback) = parse_reference(input)?;
            return Ok(TokenOrValue::Env(EnvironmentVariable { name, fallback }));
        }
        "url" => {
            if let Ok(url) = input.try_parse(|p| p.expect_string().map(|s| s.to_string())) {
                return Ok(TokenOrValue::Url(url));
            }
        }
        _ => {}
    }

    if let Ok(color) = input.try_parse(|p| -> ParseResult<'i, CssColor> {
        let color = parse_color_function(&lower, p)?;
        p.expect_exhausted()?;
        Ok(color)
    }) {
        return Ok(TokenOrValue::Color(color));
    }

    if matches!(lower.as_str(), "rgb" | "rgba" | "hsl" | "hsla")
        && let Ok(color) = input.try_parse(|p| parse_unresolved_color(&lower, p))
    {
        return Ok(TokenOrValue::UnresolvedColor(color));
    }

    let arguments = TokenList::parse(input)?;
    Ok(TokenOrValue::Function(Function {
        name: name.to_string(),
        arguments,
    }))
}

/// Parse `name[, fallback]` inside `var()` or `env()`.
fn parse_reference<'i>(input: &mut Parser<'i, '_>) -> ParseResult<'i, (String, Option<TokenList>)> {
    let name = input.expect_ident()?.to_string();
    let fallback = if input.try_parse(|p| p.expect_comma()).is_ok() {
        Some(TokenList::parse(input)?)
    } else {
        None
    };
    Ok((name, fallback))
}

fn parse_unresolved_color<'i>(name: &str, input: &mut Parser<'i, '_>) -> ParseResult<'i, UnresolvedColor> {
    let is_rgb = name.starts_with("rgb");
    let (first, second, third, legacy) = if is_rgb {
        parse_rgb_channels(input)?
    } else {
        parse_hsl_channels(input)?
    };
    if !parse_alpha_separator(input, legacy) {
        return Err(input.new_custom_error(()));
    }
    let alpha = TokenList::parse(input)?;
    if alpha.is_blank() {
        return Err(input.new_custom_error(()));
    }
    Ok(if is_rgb {
        UnresolvedColor::Rgb {
            red: first,
            green: second,
            blue: third,
            alpha,
        }
    } else {
        UnresolvedColor::Hsl {
            hue: first,
            saturation: second,
            lightness: third,
            alpha,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::color::Rgba;
    use crate::values::test_util::parse_str;
    use pretty_assertions::assert_eq;

    #[test]
    fn var_with_fallback() {
        let list: TokenList = parse_str("var(--main-color, #fff)").unwrap();
        assert_eq!(
            list.0,
            vec![TokenOrValue::Var(Variable {
                name: "--main-color".to_string(),
                fallback: Some(TokenList(vec![TokenOrValue::Color(CssColor::Rgba(
                    Rgba::new(255, 255, 255, 1.0)
                ))])),
            })]
        );
    }

    #[test]
    fn color_functions_resolve() {
        let list: TokenList = parse_str("rgb(10, 20, 30) hsl(0, 100%, 50%)").unwrap();
        assert_eq!(
            list.0[0],
            TokenOrValue::Color(CssColor::Rgba(Rgba::new(10, 20, 30, 1.0)))
        );
        assert!(matches!(list.0[2], TokenOrValue::Color(_)));
    }

    #[test]
    fn dimensions_are_classified() {
        let list: TokenList = parse_str("10px 45deg 2s 2x 3furlongs").unwrap();
        let values: Vec<_> = list
            .0
            .into_iter()
            .filter(|item| !matches!(item, TokenOrValue::Token(Token::WhiteSpace)))
            .collect();
        assert_eq!(
            values,
            vec![
                TokenOrValue::Length(LengthValue::new(10.0, LengthUnit::Px)),
                TokenOrValue::Angle(Angle::Deg(45.0)),
                TokenOrValue::Time(Time::Seconds(2.0)),
                TokenOrValue::Resolution(Resolution::Dppx(2.0)),
                TokenOrValue::Token(Token::Dimension {
                    value: 3.0,
                    unit: "furlongs".to_string(),
                }),
            ]
        );
    }

    #[test]
    fn unresolved_alpha() {
        let list: TokenList = parse_str("rgb(255 0 0 / var(--opacity))").unwrap();
        match &list.0[0] {
            TokenOrValue::UnresolvedColor(UnresolvedColor::Rgb {
                red, green, alpha, ..
            }) => {
                assert_eq!((*red, *green), (255.0, 0.0));
                assert!(matches!(alpha.0[0], TokenOrValue::Var(_)));
            }
            other => panic!("expected unresolved color, got {other:?}"),
        }
    }

    #[test]
    fn unknown_function_keeps_arguments() {
        let list: TokenList = parse_str("translate(var(--x), 10px)").unwrap();
        match &list.0[0] {
            TokenOrValue::Function(function) => {
                assert_eq!(function.name, "translate");
                assert!(matches!(function.arguments.0[0], TokenOrValue::Var(_)));
                assert!(function.arguments.0.contains(&TokenOrValue::Token(Token::Comma)));
            }
            other => panic!("expected function, got {other:?}"),
        }
    }

    #[test]
    fn single_ident() {
        let list: TokenList = parse_str(" inherit ").unwrap();
        assert_eq!(list.as_single_ident(), Some("inherit"));
    }
}
