//! Preludes of `@media`, `@container` and `@keyframes`.

use crate::media::{
    Comparison, FeatureValue, MediaList, MediaQuery, MediaType, Operator, Qualifier,
    QueryCondition, QueryFeature,
};
use crate::rules::KeyframeSelector;
use crate::values::ParseResult;
use cssparser::{Parser, Token};

pub(super) fn parse_media_list<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, MediaList> {
    if parser.is_exhausted() {
        return Ok(MediaList::default());
    }
    let queries = parser.parse_comma_separated(parse_media_query)?;
    Ok(MediaList { queries })
}

fn parse_media_query<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, MediaQuery> {
    if let Ok(condition) = parser.try_parse(parse_query_condition) {
        return Ok(MediaQuery {
            qualifier: None,
            media_type: MediaType::All,
            condition: Some(condition),
        });
    }

    let qualifier = parser
        .try_parse(|p| -> ParseResult<'i, Qualifier> {
            let location = p.current_source_location();
            let ident = p.expect_ident()?.clone();
            match ident.to_ascii_lowercase().as_str() {
                "only" => Ok(Qualifier::Only),
                "not" => Ok(Qualifier::Not),
                _ => Err(location.new_unexpected_token_error(Token::Ident(ident))),
            }
        })
        .ok();

    let media_type = MediaType::from_name(&parser.expect_ident()?.clone());

    let condition = if parser.try_parse(|p| p.expect_ident_matching("and")).is_ok() {
        Some(parse_query_condition(parser)?)
    } else {
        None
    };

    Ok(MediaQuery {
        qualifier,
        media_type,
        condition,
    })
}

/// `not <in-parens>` or `<in-parens> [and|or <in-parens>]*`. Mixing `and` and
/// `or` at one level needs parentheses.
fn parse_query_condition<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, QueryCondition> {
    if parser.try_parse(|p| p.expect_ident_matching("not")).is_ok() {
        let condition = parse_in_parens(parser)?;
        return Ok(QueryCondition::Not {
            condition: Box::new(condition),
        });
    }

    let first = parse_in_parens(parser)?;
    let mut operator = None;
    let mut conditions = vec![first];

    loop {
        let location = parser.current_source_location();
        let Ok(next) = parser.try_parse(|p| -> ParseResult<'i, Operator> {
            let location = p.current_source_location();
            let ident = p.expect_ident()?.clone();
            match ident.to_ascii_lowercase().as_str() {
                "and" => Ok(Operator::And),
                "or" => Ok(Operator::Or),
                _ => Err(location.new_unexpected_token_error(Token::Ident(ident))),
            }
        }) else {
            break;
        };

        if operator.is_some_and(|op| op != next) {
            return Err(location.new_custom_error(()));
        }
        operator = Some(next);
        conditions.push(parse_in_parens(parser)?);
    }

    match operator {
        Some(operator) => Ok(QueryCondition::Operation {
            operator,
            conditions,
        }),
        None => Ok(conditions.remove(0)),
    }
}

fn parse_in_parens<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, QueryCondition> {
    parser.expect_parenthesis_block()?;
    parser.parse_nested_block(|p| {
        if let Ok(condition) = p.try_parse(|p| p.parse_entirely(parse_query_condition)) {
            return Ok(condition);
        }
        Ok(QueryCondition::Feature(parse_feature(p)?))
    })
}

fn parse_feature<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, QueryFeature> {
    // `(value <op> name)`
    if let Ok(feature) = parser.try_parse(|p| {
        let value = parse_feature_value(p)?;
        let comparison = parse_comparison(p)?;
        let name = p.expect_ident()?.to_string();
        Ok::<_, cssparser::ParseError<'i, ()>>(QueryFeature {
            name,
            comparison: Some(comparison.flip()),
            value: Some(value),
        })
    }) {
        return Ok(feature);
    }

    let name = parser.expect_ident()?.to_string();

    if parser.is_exhausted() {
        return Ok(QueryFeature {
            name,
            comparison: None,
            value: None,
        });
    }

    let comparison = if parser.try_parse(|p| p.expect_colon()).is_ok() {
        None
    } else {
        Some(parse_comparison(parser)?)
    };
    let value = parse_feature_value(parser)?;

    Ok(QueryFeature {
        name,
        comparison,
        value: Some(value),
    })
}

fn parse_comparison<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, Comparison> {
    let location = parser.current_source_location();
    let token = parser.next()?.clone();
    match &token {
        Token::Delim('=') => Ok(Comparison::Equal),
        Token::Delim(op @ ('<' | '>')) => {
            let or_equal = parser.try_parse(|p| p.expect_delim('=')).is_ok();
            Ok(match (*op, or_equal) {
                ('<', true) => Comparison::LessThanEqual,
                ('<', false) => Comparison::LessThan,
                (_, true) => Comparison::GreaterThanEqual,
                (_, false) => Comparison::GreaterThan,
            })
        }
        _ => Err(location.new_unexpected_token_error(token.clone())),
    }
}

fn parse_feature_value<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, FeatureValue> {
    let location = parser.current_source_location();
    let token = parser.next()?.clone();
    match &token {
        Token::Dimension { value, unit, .. } => Ok(FeatureValue::Length {
            value: *value,
            unit: unit.to_ascii_lowercase(),
        }),
        Token::Number { value, .. } => {
            if parser.try_parse(|p| p.expect_delim('/')).is_ok() {
                let denominator = parser.expect_number()?;
                Ok(FeatureValue::Ratio(*value, denominator))
            } else {
                Ok(FeatureValue::Number(*value))
            }
        }
        Token::Ident(ident) => Ok(FeatureValue::Ident(ident.to_string())),
        _ => Err(location.new_unexpected_token_error(token.clone())),
    }
}

/// `@container [<name>] [<condition>]`
pub(super) fn parse_container_prelude<'i>(
    parser: &mut Parser<'i, '_>,
) -> ParseResult<'i, (Option<String>, Option<QueryCondition>)> {
    let name = parser
        .try_parse(|p| -> ParseResult<'i, String> {
            let location = p.current_source_location();
            let ident = p.expect_ident()?.clone();
            if ["not", "and", "or", "none"]
                .iter()
                .any(|reserved| ident.eq_ignore_ascii_case(reserved))
            {
                return Err(location.new_unexpected_token_error(Token::Ident(ident)));
            }
            Ok(ident.to_string())
        })
        .ok();

    let condition = if parser.is_exhausted() {
        None
    } else {
        Some(parse_query_condition(parser)?)
    };

    if name.is_none() && condition.is_none() {
        return Err(parser.new_custom_error(()));
    }

    Ok((name, condition))
}

pub(super) fn parse_keyframes_name<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, String> {
    let location = parser.current_source_location();
    let token = parser.next()?.clone();
    match &token {
        Token::Ident(name) | Token::QuotedString(name) => Ok(name.to_string()),
        _ => Err(location.new_unexpected_token_error(token.clone())),
    }
}

pub(super) fn parse_keyframe_selector<'i>(
    parser: &mut Parser<'i, '_>,
) -> ParseResult<'i, KeyframeSelector> {
    let location = parser.current_source_location();
    let token = parser.next()?.clone();
    match &token {
        Token::Ident(ident) if ident.eq_ignore_ascii_case("from") => Ok(KeyframeSelector::From),
        Token::Ident(ident) if ident.eq_ignore_ascii_case("to") => Ok(KeyframeSelector::To),
        Token::Percentage { unit_value, .. } => Ok(KeyframeSelector::Percentage(*unit_value)),
        _ => Err(location.new_unexpected_token_error(token.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssparser::ParserInput;

    fn media(css: &str) -> Option<MediaList> {
        let mut input = ParserInput::new(css);
        let mut parser = Parser::new(&mut input);
        parser.parse_entirely(parse_media_list).ok()
    }

    #[test]
    fn media_type_with_condition() {
        let list = media("only screen and (min-width: 600px)").unwrap();
        let query = &list.queries[0];
        assert_eq!(query.qualifier, Some(Qualifier::Only));
        assert_eq!(query.media_type, MediaType::Screen);
        assert_eq!(
            query.condition,
            Some(QueryCondition::Feature(QueryFeature {
                name: "min-width".to_string(),
                comparison: None,
                value: Some(FeatureValue::Length {
                    value: 600.0,
                    unit: "px".to_string()
                }),
            }))
        );
    }

    #[test]
    fn condition_only_and_lists() {
        let list = media("(orientation: landscape), print").unwrap();
        assert_eq!(list.queries.len(), 2);
        assert_eq!(list.queries[0].media_type, MediaType::All);
        assert_eq!(list.queries[1].media_type, MediaType::Print);
    }

    #[test]
    fn range_syntax() {
        let list = media("(width >= 600px) and (400px < height)").unwrap();
        match &list.queries[0].condition {
            Some(QueryCondition::Operation {
                operator: Operator::And,
                conditions,
            }) => {
                assert_eq!(conditions.len(), 2);
                match &conditions[1] {
                    QueryCondition::Feature(feature) => {
                        assert_eq!(feature.name, "height");
                        assert_eq!(feature.comparison, Some(Comparison::GreaterThan));
                    }
                    other => panic!("expected feature, got {other:?}"),
                }
            }
            other => panic!("expected and operation, got {other:?}"),
        }
    }

    #[test]
    fn mixed_operators_are_rejected() {
        assert!(media("(a) and (b) or (c)").is_none());
    }

    #[test]
    fn not_media_type() {
        let list = media("not print").unwrap();
        assert_eq!(list.queries[0].qualifier, Some(Qualifier::Not));
        assert!(list.queries[0].matches_screen());
    }

    #[test]
    fn container_prelude_forms() {
        let parse = |css: &str| {
            let mut input = ParserInput::new(css);
            let mut parser = Parser::new(&mut input);
            parser.parse_entirely(parse_container_prelude).ok()
        };
        let (name, condition) = parse("card (min-width: 300px)").unwrap();
        assert_eq!(name.as_deref(), Some("card"));
        assert!(condition.is_some());

        let (name, condition) = parse("(min-width: 300px)").unwrap();
        assert!(name.is_none());
        assert!(condition.is_some());

        let (name, condition) = parse("not (min-width: 300px)").unwrap();
        assert!(name.is_none());
        assert!(matches!(condition, Some(QueryCondition::Not { .. })));
    }
}
