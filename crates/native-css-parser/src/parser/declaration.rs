//! Declaration block parsing.

use super::ParserOptions;
use crate::error::{ParseError, Result};
use crate::properties::{CustomProperty, Property, PropertyId, UnparsedProperty};
use crate::rules::DeclarationBlock;
use crate::tokens::TokenList;
use crate::values::{Parse, ParseResult};
use cssparser::{Delimiter, ParseError as CssParseError, Parser, Token};

/// Parse the contents of a `{ ... }` declaration block.
///
/// Nested rules are not supported; they are skipped with a debug log.
pub(crate) fn parse_declaration_block<'i>(
    parser: &mut Parser<'i, '_>,
    options: &ParserOptions,
) -> Result<DeclarationBlock> {
    let mut block = DeclarationBlock::default();

    loop {
        parser.skip_whitespace();

        if parser.is_exhausted() {
            break;
        }

        let start = parser.state();
        let name = match parser.next() {
            Ok(Token::Semicolon) => continue,
            Ok(Token::Ident(name)) => name.clone(),
            _ => {
                parser.reset(&start);
                skip_nested_rule(parser);
                continue;
            }
        };

        if parser.try_parse(|p| p.expect_colon()).is_err() {
            parser.reset(&start);
            skip_nested_rule(parser);
            continue;
        }

        match parse_declaration(&name, parser) {
            Ok((property, false)) => block.declarations.push(property),
            Ok((property, true)) => block.important_declarations.push(property),
            Err(e) => {
                let e = ParseError::from_css(&format!("Invalid value for '{}'", name), &e);
                if !options.error_recovery {
                    return Err(e);
                }
                tracing::warn!("CSS parse error: {}", e);
                skip_to_semicolon(parser);
            }
        }
    }

    Ok(block)
}

/// Parse `<value> [!important]` up to the end of the declaration. The colon has
/// already been consumed.
fn parse_declaration<'i>(
    name: &str,
    parser: &mut Parser<'i, '_>,
) -> ParseResult<'i, (Property, bool)> {
    let property = parser.parse_until_before(Delimiter::Bang | Delimiter::Semicolon, |p| {
        parse_property_value(name, p)
    })?;

    let important = parser
        .try_parse(|p| {
            p.expect_delim('!')?;
            p.expect_ident_matching("important")
        })
        .is_ok();

    let location = parser.current_source_location();
    match parser.next() {
        Ok(Token::Semicolon) | Err(_) => Ok((property, important)),
        Ok(token) => {
            let token = token.clone();
            Err(location.new_unexpected_token_error(token))
        }
    }
}

fn parse_property_value<'i>(name: &str, parser: &mut Parser<'i, '_>) -> ParseResult<'i, Property> {
    if parser.is_exhausted() {
        return Err(parser.new_custom_error(()));
    }

    if name.starts_with("--") {
        return Ok(Property::Custom(CustomProperty {
            name: name.to_string(),
            value: TokenList::parse(parser)?,
        }));
    }

    let Some(property_id) = PropertyId::from_name(name) else {
        tracing::debug!(property = name, "unknown property");
        return Ok(Property::Custom(CustomProperty {
            name: name.to_ascii_lowercase(),
            value: TokenList::parse(parser)?,
        }));
    };

    // Substitution functions can only be resolved later
    if !has_substitution(parser)
        && let Ok(property) = parser.try_parse(|p| {
            p.parse_entirely(|p| Property::parse_value(property_id, p))
        })
    {
        return Ok(property);
    }

    Ok(Property::Unparsed(UnparsedProperty {
        property_id,
        value: TokenList::parse(parser)?,
    }))
}

/// Whether the rest of the value references `var()` or `env()`, at any depth.
fn has_substitution(parser: &mut Parser<'_, '_>) -> bool {
    let start = parser.state();
    let found = contains_substitution(parser);
    parser.reset(&start);
    found
}

fn contains_substitution<'i>(parser: &mut Parser<'i, '_>) -> bool {
    while let Ok(token) = parser.next() {
        let nested = match token {
            Token::Function(name)
                if name.eq_ignore_ascii_case("var") || name.eq_ignore_ascii_case("env") =>
            {
                return true;
            }
            Token::Function(_)
            | Token::ParenthesisBlock
            | Token::SquareBracketBlock
            | Token::CurlyBracketBlock => true,
            _ => false,
        };
        if nested
            && parser
                .parse_nested_block(|p| Ok::<_, CssParseError<'i, ()>>(contains_substitution(p)))
                .unwrap_or(false)
        {
            return true;
        }
    }
    false
}

fn skip_to_semicolon(parser: &mut Parser<'_, '_>) {
    while let Ok(token) = parser.next() {
        if matches!(token, Token::Semicolon) {
            break;
        }
    }
}

/// Skip a nested rule (or stray tokens) up to and including its block.
fn skip_nested_rule(parser: &mut Parser<'_, '_>) {
    let location = parser.current_source_location();
    tracing::debug!(
        line = location.line + 1,
        column = location.column,
        "skipping nested rule"
    );
    while let Ok(token) = parser.next() {
        if matches!(token, Token::Semicolon | Token::CurlyBracketBlock) {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenOrValue;
    use crate::values::color::{CssColor, Rgba};
    use crate::values::length::{LengthPercentage, LengthUnit, LengthValue, Size};
    use cssparser::ParserInput;

    fn parse_block(css: &str, error_recovery: bool) -> Result<DeclarationBlock> {
        let mut input = ParserInput::new(css);
        let mut parser = Parser::new(&mut input);
        parse_declaration_block(&mut parser, &ParserOptions { error_recovery })
    }

    fn parse(css: &str) -> DeclarationBlock {
        parse_block(css, false).unwrap()
    }

    #[test]
    fn typed_declarations() {
        let block = parse("color: red; width: 10px");
        assert_eq!(
            block.declarations,
            vec![
                Property::Color(CssColor::Rgba(Rgba::new(255, 0, 0, 1.0))),
                Property::Width(Size::LengthPercentage(LengthPercentage::Dimension(
                    LengthValue::new(10.0, LengthUnit::Px)
                ))),
            ]
        );
    }

    #[test]
    fn important_declarations_are_separate() {
        let block = parse("color: red !important; opacity: 1");
        assert_eq!(block.declarations.len(), 1);
        assert_eq!(block.important_declarations.len(), 1);
        assert!(matches!(
            block.important_declarations[0],
            Property::Color(_)
        ));
    }

    #[test]
    fn var_values_are_unparsed() {
        let block = parse("color: var(--brand)");
        match &block.declarations[0] {
            Property::Unparsed(unparsed) => {
                assert_eq!(unparsed.property_id, PropertyId::Color);
                assert!(matches!(unparsed.value.0[0], TokenOrValue::Var(_)));
            }
            other => panic!("expected unparsed, got {other:?}"),
        }
    }

    #[test]
    fn nested_var_values_are_unparsed() {
        let block = parse("width: calc(var(--gap) * 2)");
        assert!(matches!(
            &block.declarations[0],
            Property::Unparsed(unparsed) if unparsed.property_id == PropertyId::Width
        ));
    }

    #[test]
    fn var_inside_a_string_is_not_a_reference() {
        let block = parse("font-family: \"var(x)\"");
        assert!(matches!(block.declarations[0], Property::FontFamily(_)));
    }

    #[test]
    fn invalid_typed_value_falls_back_to_tokens() {
        let block = parse("width: inherit");
        assert!(matches!(
            &block.declarations[0],
            Property::Unparsed(unparsed) if unparsed.value.as_single_ident() == Some("inherit")
        ));
    }

    #[test]
    fn custom_and_unknown_properties() {
        let block = parse("--Brand-Color: #fff; -webkit-tap-highlight-color: red");
        assert!(matches!(
            &block.declarations[0],
            Property::Custom(custom) if custom.name == "--Brand-Color"
        ));
        assert!(matches!(
            &block.declarations[1],
            Property::Custom(custom) if custom.name == "-webkit-tap-highlight-color"
        ));
    }

    #[test]
    fn nested_rules_are_skipped() {
        let block = parse("color: red; & .child { color: blue; } opacity: 0.5");
        assert_eq!(block.declarations.len(), 2);
        assert!(matches!(block.declarations[1], Property::Opacity(_)));
    }

    #[test]
    fn empty_value_is_an_error() {
        assert!(parse_block("color: ; width: 1px", false).is_err());
        let block = parse_block("color: ; width: 1px", true).unwrap();
        assert_eq!(block.declarations.len(), 1);
    }
}
