//! Selector list parsing.

use crate::selector::{Combinator, Component, PseudoClass, Selector};
use crate::values::ParseResult;
use cssparser::{Parser, Token};

/// Parse a comma-separated selector list.
pub(super) fn parse_selector_list<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, Vec<Selector>> {
    parser.parse_comma_separated(parse_selector)
}

/// Parse one complex selector. Whitespace is significant here: it separates
/// compounds with a descendant combinator.
fn parse_selector<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, Selector> {
    let mut components: Vec<Component> = vec![];
    let mut pending_whitespace = false;

    parser.skip_whitespace();

    loop {
        let location = parser.current_source_location();
        let token = match parser.next_including_whitespace() {
            Ok(t) => t.clone(),
            Err(_) => break,
        };

        let combinator = match &token {
            Token::WhiteSpace(_) => {
                pending_whitespace = true;
                continue;
            }
            Token::Delim('>') => Some(Combinator::Child),
            Token::Delim('+') => Some(Combinator::NextSibling),
            Token::Delim('~') => Some(Combinator::LaterSibling),
            _ => None,
        };

        let after_combinator = matches!(components.last(), Some(Component::Combinator(_)));

        if let Some(combinator) = combinator {
            if components.is_empty() || after_combinator {
                return Err(location.new_unexpected_token_error(token.clone()));
            }
            components.push(Component::Combinator(combinator));
            pending_whitespace = false;
            continue;
        }

        if pending_whitespace && !components.is_empty() && !after_combinator {
            components.push(Component::Combinator(Combinator::Descendant));
        }
        pending_whitespace = false;

        match &token {
            Token::Delim('.') => {
                // Class selector
                let class = parser.expect_ident()?;
                components.push(Component::Class(class.to_string()));
            }

            Token::IDHash(id) => components.push(Component::Id(id.to_string())),

            Token::Ident(name) => components.push(Component::Type(name.to_string())),

            Token::Delim('*') => components.push(Component::Universal),

            Token::Delim('&') => components.push(Component::Nesting),

            Token::SquareBracketBlock => {
                let attribute = parser.parse_nested_block(|p| {
                    let start = p.position();
                    while p.next().is_ok() {}
                    Ok(p.slice_from(start).trim().to_string())
                })?;
                components.push(Component::Attribute(attribute));
            }

            Token::Colon => components.push(parse_pseudo(parser)?),

            _ => return Err(location.new_unexpected_token_error(token.clone())),
        }
    }

    if components.is_empty() || matches!(components.last(), Some(Component::Combinator(_))) {
        return Err(parser.new_custom_error(()));
    }

    Ok(Selector::new(components))
}

/// Parse what follows a `:`.
fn parse_pseudo<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, Component> {
    let location = parser.current_source_location();
    let token = parser.next_including_whitespace()?.clone();

    match &token {
        Token::Colon => {
            let location = parser.current_source_location();
            let token = parser.next_including_whitespace()?.clone();
            match &token {
                Token::Ident(name) => Ok(Component::PseudoElement(name.to_ascii_lowercase())),
                Token::Function(name) => {
                    let arguments = function_arguments(parser)?;
                    Ok(Component::PseudoElement(format!("{}({})", name, arguments)))
                }
                _ => Err(location.new_unexpected_token_error(token.clone())),
            }
        }
        Token::Ident(name) => {
            let lower = name.to_ascii_lowercase();
            // Legacy single-colon pseudo-elements
            if matches!(
                lower.as_str(),
                "before" | "after" | "first-line" | "first-letter"
            ) {
                Ok(Component::PseudoElement(lower))
            } else {
                Ok(Component::PseudoClass(PseudoClass::from_name(name)))
            }
        }
        Token::Function(name) => {
            let arguments = function_arguments(parser)?;
            Ok(Component::PseudoClass(PseudoClass::Other(format!(
                "{}({})",
                name, arguments
            ))))
        }
        _ => Err(location.new_unexpected_token_error(token.clone())),
    }
}

/// Source text of the function arguments that follow.
fn function_arguments<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, String> {
    parser.parse_nested_block(|p| {
        let start = p.position();
        while p.next().is_ok() {}
        Ok(p.slice_from(start).trim().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssparser::ParserInput;

    fn parse(css: &str) -> Option<Vec<Selector>> {
        let mut input = ParserInput::new(css);
        let mut parser = Parser::new(&mut input);
        parser.parse_entirely(parse_selector_list).ok()
    }

    fn single(css: &str) -> Vec<Component> {
        let mut selectors = parse(css).unwrap();
        assert_eq!(selectors.len(), 1);
        selectors.remove(0).components
    }

    #[test]
    fn compound_classes() {
        assert_eq!(
            single(".a.b"),
            vec![
                Component::Class("a".to_string()),
                Component::Class("b".to_string())
            ]
        );
    }

    #[test]
    fn whitespace_around_combinators() {
        assert_eq!(single(".a>.b"), single(".a > .b"));
        assert_eq!(
            single(".a   .b"),
            vec![
                Component::Class("a".to_string()),
                Component::Combinator(Combinator::Descendant),
                Component::Class("b".to_string()),
            ]
        );
    }

    #[test]
    fn pseudo_classes_and_elements() {
        assert_eq!(
            single("a:focus::before"),
            vec![
                Component::Type("a".to_string()),
                Component::PseudoClass(PseudoClass::Focus),
                Component::PseudoElement("before".to_string()),
            ]
        );
        assert_eq!(
            single("li:nth-child(2n + 1)"),
            vec![
                Component::Type("li".to_string()),
                Component::PseudoClass(PseudoClass::Other("nth-child(2n + 1)".to_string())),
            ]
        );
    }

    #[test]
    fn attributes_ids_and_nesting() {
        assert_eq!(
            single("& #main[data-x=\"1\"]"),
            vec![
                Component::Nesting,
                Component::Combinator(Combinator::Descendant),
                Component::Id("main".to_string()),
                Component::Attribute("data-x=\"1\"".to_string()),
            ]
        );
    }

    #[test]
    fn invalid_selectors() {
        assert!(parse("> .a").is_none());
        assert!(parse(".a >").is_none());
        assert!(parse(".a, ").is_none());
        assert!(parse("..a").is_none());
    }
}
