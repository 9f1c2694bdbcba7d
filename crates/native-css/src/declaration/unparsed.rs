//! Best-effort resolution of token lists the parser could not type.
//!
//! Values built from `var()` and friends cannot be computed ahead of time, so
//! they are kept as runtime and function records instead of being dropped.

use super::values::{parse_angle, parse_color, parse_length_value};
use crate::options::CompileOptions;
use crate::style::StyleValue;
use native_css_parser::tokens::{Token, TokenList, TokenOrValue, UnresolvedColor};

/// Resolve a whole value. A single resolved item is returned on its own.
pub fn parse_unparsed(tokens: &TokenList, options: &CompileOptions) -> Option<StyleValue> {
    let mut values = reduce(tokens, options);
    match values.len() {
        0 => None,
        1 => values.pop(),
        _ => Some(StyleValue::Array(values)),
    }
}

/// Resolve every item, dropping the ones without a value and splicing in
/// expanded items.
fn reduce(tokens: &TokenList, options: &CompileOptions) -> Vec<StyleValue> {
    let mut values = Vec::new();
    for item in &tokens.0 {
        match parse_item(item, options) {
            Some(Resolved::One(value)) => values.push(value),
            Some(Resolved::Many(items)) => values.extend(items),
            None => {}
        }
    }
    values
}

enum Resolved {
    One(StyleValue),
    Many(Vec<StyleValue>),
}

fn parse_item(item: &TokenOrValue, options: &CompileOptions) -> Option<Resolved> {
    let value = match item {
        TokenOrValue::Token(token) => parse_token(token)?,
        TokenOrValue::Color(color) => parse_color(color)?,
        TokenOrValue::UnresolvedColor(color) => parse_unresolved_color(color, options),
        TokenOrValue::Var(variable) => {
            let mut arguments = vec![StyleValue::from(variable.name.as_str())];
            if let Some(fallback) = variable
                .fallback
                .as_ref()
                .and_then(|fallback| parse_unparsed(fallback, options))
            {
                arguments.push(fallback);
            }
            StyleValue::runtime("var", arguments)
        }
        TokenOrValue::Function(function) if function.name.eq_ignore_ascii_case("translate") => {
            return Some(Resolved::Many(split_translate(&function.arguments, options)));
        }
        TokenOrValue::Function(function) => {
            StyleValue::function(function.name.as_str(), reduce(&function.arguments, options))
        }
        TokenOrValue::Length(length) => parse_length_value(length, options)?,
        TokenOrValue::Angle(angle) => parse_angle(angle)?,
        TokenOrValue::Url(_)
        | TokenOrValue::Env(_)
        | TokenOrValue::Time(_)
        | TokenOrValue::Resolution(_)
        | TokenOrValue::DashedIdent(_) => return None,
    };
    Some(Resolved::One(value))
}

fn parse_token(token: &Token) -> Option<StyleValue> {
    match token {
        Token::String(value) | Token::Ident(value) => Some(value.as_str().into()),
        Token::Number { value, .. } => Some(StyleValue::from_f32(*value)),
        Token::AtKeyword(_)
        | Token::Hash(_)
        | Token::IdHash(_)
        | Token::UnquotedUrl(_)
        | Token::Delim(_)
        | Token::Percentage { .. }
        | Token::Dimension { .. }
        | Token::WhiteSpace
        | Token::Comment
        | Token::Colon
        | Token::Semicolon
        | Token::Comma
        | Token::IncludeMatch
        | Token::DashMatch
        | Token::PrefixMatch
        | Token::SuffixMatch
        | Token::SubstringMatch
        | Token::Cdo
        | Token::Cdc
        | Token::Function(_)
        | Token::ParenthesisBlock
        | Token::SquareBracketBlock
        | Token::CurlyBracketBlock
        | Token::BadUrl(_)
        | Token::BadString(_)
        | Token::CloseParenthesis
        | Token::CloseSquareBracket
        | Token::CloseCurlyBracket => None,
    }
}

fn parse_unresolved_color(color: &UnresolvedColor, options: &CompileOptions) -> StyleValue {
    let (name, channels, alpha) = match color {
        UnresolvedColor::Rgb {
            red,
            green,
            blue,
            alpha,
        } => ("rgba", [*red, *green, *blue], alpha),
        UnresolvedColor::Hsl {
            hue,
            saturation,
            lightness,
            alpha,
        } => ("hsla", [*hue, *saturation, *lightness], alpha),
    };
    let mut arguments: Vec<StyleValue> = channels.into_iter().map(StyleValue::from_f32).collect();
    arguments.extend(parse_unparsed(alpha, options));
    StyleValue::runtime(name, arguments)
}

/// `translate(x, y)` becomes `translateX(x)` and `translateY(y)`.
fn split_translate(arguments: &TokenList, options: &CompileOptions) -> Vec<StyleValue> {
    arguments
        .0
        .split(|item| matches!(item, TokenOrValue::Token(Token::Comma)))
        .zip(["translateX", "translateY"])
        .filter_map(|(argument, name)| {
            let argument = parse_unparsed(&TokenList(argument.to_vec()), options)?;
            Some(StyleValue::function(name, vec![argument]))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use native_css_parser::tokens::{Function, Variable};
    use native_css_parser::values::length::{LengthUnit, LengthValue};
    use pretty_assertions::assert_eq;

    fn tokens(items: Vec<TokenOrValue>) -> TokenList {
        TokenList(items)
    }

    fn var(name: &str, fallback: Option<TokenList>) -> TokenOrValue {
        TokenOrValue::Var(Variable {
            name: name.to_string(),
            fallback,
        })
    }

    fn px(value: f32) -> TokenOrValue {
        TokenOrValue::Length(LengthValue::new(value, LengthUnit::Px))
    }

    #[test]
    fn single_var_unwraps() {
        let options = CompileOptions::default();
        let value = parse_unparsed(&tokens(vec![var("--gap", None)]), &options);
        assert_eq!(
            value,
            Some(StyleValue::runtime("var", vec!["--gap".into()]))
        );
    }

    #[test]
    fn var_fallback_is_resolved() {
        let options = CompileOptions::default();
        let fallback = tokens(vec![TokenOrValue::Token(Token::WhiteSpace), px(4.0)]);
        let value = parse_unparsed(&tokens(vec![var("--gap", Some(fallback))]), &options);
        assert_eq!(
            value,
            Some(StyleValue::runtime(
                "var",
                vec!["--gap".into(), StyleValue::Number(4.0)]
            ))
        );
    }

    #[test]
    fn whitespace_and_unsupported_items_are_dropped() {
        let options = CompileOptions::default();
        let value = parse_unparsed(
            &tokens(vec![
                TokenOrValue::Token(Token::WhiteSpace),
                TokenOrValue::Url("a.png".to_string()),
                TokenOrValue::Token(Token::Comma),
            ]),
            &options,
        );
        assert_eq!(value, None);
    }

    #[test]
    fn several_items_stay_a_list() {
        let options = CompileOptions::default();
        let value = parse_unparsed(
            &tokens(vec![
                px(1.0),
                TokenOrValue::Token(Token::WhiteSpace),
                var("--x", None),
            ]),
            &options,
        );
        assert_eq!(
            value,
            Some(StyleValue::Array(vec![
                StyleValue::Number(1.0),
                StyleValue::runtime("var", vec!["--x".into()]),
            ]))
        );
    }

    #[test]
    fn translate_splits_into_axes() {
        let options = CompileOptions::default();
        let translate = TokenOrValue::Function(Function {
            name: "translate".to_string(),
            arguments: tokens(vec![
                var("--x", None),
                TokenOrValue::Token(Token::Comma),
                TokenOrValue::Token(Token::WhiteSpace),
                px(10.0),
            ]),
        });
        let value = parse_unparsed(&tokens(vec![translate]), &options);
        assert_eq!(
            value,
            Some(StyleValue::Array(vec![
                StyleValue::function(
                    "translateX",
                    vec![StyleValue::runtime("var", vec!["--x".into()])]
                ),
                StyleValue::function("translateY", vec![StyleValue::Number(10.0)]),
            ]))
        );
    }

    #[test]
    fn unresolved_rgb_keeps_channels() {
        let options = CompileOptions::default();
        let color = TokenOrValue::UnresolvedColor(UnresolvedColor::Rgb {
            red: 255.0,
            green: 0.0,
            blue: 0.0,
            alpha: tokens(vec![var("--alpha", None)]),
        });
        let value = parse_unparsed(&tokens(vec![color]), &options).unwrap();
        assert!(value.is_dynamic());
        assert_eq!(
            value,
            StyleValue::runtime(
                "rgba",
                vec![
                    StyleValue::Number(255.0),
                    StyleValue::Number(0.0),
                    StyleValue::Number(0.0),
                    StyleValue::runtime("var", vec!["--alpha".into()]),
                ]
            )
        );
    }
}
