//! CSS syntax parser using the `cssparser` crate.
//!
//! The parser walks the token stream rule by rule. Style rules become
//! [`StyleRule`]s, `@media`/`@container`/`@keyframes` become their own rule
//! kinds and every other at-rule is recorded as [`CssRule::Ignored`].

mod declaration;
mod media;
mod selector;

use crate::error::{ParseError, Result};
use crate::rules::{
    ContainerRule, CssRule, IgnoredRule, Keyframe, KeyframesRule, MediaRule, SourceLocation,
    StyleRule, StyleSheet,
};
use cssparser::{
    BasicParseError, Delimiter, ParseError as CssParseError, Parser, ParserInput, Token,
};

use declaration::parse_declaration_block;

/// Options for [`StyleSheet::parse`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ParserOptions {
    /// Skip malformed rules and declarations (logging a warning) instead of
    /// failing the whole parse.
    pub error_recovery: bool,
}

impl StyleSheet {
    /// Parse a CSS stylesheet.
    ///
    /// Unknown properties, pseudo-classes and at-rules are not errors. With
    /// `error_recovery` unset, the first malformed rule or declaration fails
    /// the parse with its location.
    ///
    /// # Example
    ///
    /// ```
    /// use native_css_parser::{ParserOptions, StyleSheet};
    ///
    /// let sheet = StyleSheet::parse(".a { color: red } .b { color: blue }", ParserOptions::default())?;
    /// assert_eq!(sheet.rules.len(), 2);
    /// # Ok::<(), native_css_parser::ParseError>(())
    /// ```
    pub fn parse(css: &str, options: ParserOptions) -> Result<StyleSheet> {
        let mut input = ParserInput::new(css);
        let mut parser = Parser::new(&mut input);
        let rules = parse_rule_list(&mut parser, &options, true)?;
        Ok(StyleSheet { rules })
    }
}

/// Parse rules until the input is exhausted.
fn parse_rule_list<'i>(
    parser: &mut Parser<'i, '_>,
    options: &ParserOptions,
    top_level: bool,
) -> Result<Vec<CssRule>> {
    let mut rules = vec![];

    loop {
        parser.skip_whitespace();

        if parser.is_exhausted() {
            break;
        }

        // `<!--` and `-->` are allowed around top-level rules
        if top_level
            && parser
                .try_parse(|p| match p.next() {
                    Ok(Token::CDO | Token::CDC) => Ok(()),
                    _ => Err(()),
                })
                .is_ok()
        {
            continue;
        }

        let start = parser.state();
        match parse_rule(parser, options) {
            Ok(rule) => rules.push(rule),
            Err(e) if options.error_recovery => {
                tracing::warn!("CSS parse error: {}", e);
                parser.reset(&start);
                skip_to_next_rule(parser);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(rules)
}

/// Skip past the next `;` or `{ ... }` block.
fn skip_to_next_rule(parser: &mut Parser<'_, '_>) {
    while let Ok(token) = parser.next() {
        if matches!(token, Token::Semicolon | Token::CurlyBracketBlock) {
            break;
        }
    }
}

fn parse_rule<'i>(parser: &mut Parser<'i, '_>, options: &ParserOptions) -> Result<CssRule> {
    let location = source_location(parser);

    if let Ok(name) = parser.try_parse(|p| -> std::result::Result<String, BasicParseError<'i>> {
        let start = p.current_source_location();
        match p.next()? {
            Token::AtKeyword(name) => Ok(name.to_string()),
            token => Err(start.new_basic_unexpected_token_error(token.clone())),
        }
    }) {
        return parse_at_rule(parser, &name, location, options);
    }

    let selectors = parser
        .parse_until_before(Delimiter::CurlyBracketBlock, selector::parse_selector_list)
        .map_err(|e| ParseError::from_css("Failed to parse selector", &e))?;

    expect_block(parser, "Expected '{' after selector")?;
    let declarations = parse_block(parser, "Failed to parse declaration block", |p| {
        parse_declaration_block(p, options)
    })?;

    Ok(CssRule::Style(StyleRule {
        selectors,
        declarations,
        location,
    }))
}

fn parse_at_rule<'i>(
    parser: &mut Parser<'i, '_>,
    name: &str,
    location: SourceLocation,
    options: &ParserOptions,
) -> Result<CssRule> {
    match name.to_ascii_lowercase().as_str() {
        "media" => {
            let query = parser
                .parse_until_before(Delimiter::CurlyBracketBlock, media::parse_media_list)
                .map_err(|e| ParseError::from_css("Failed to parse @media query", &e))?;
            expect_block(parser, "Expected '{' after @media query")?;
            let rules = parse_block(parser, "Failed to parse @media block", |p| {
                parse_rule_list(p, options, false)
            })?;
            Ok(CssRule::Media(MediaRule {
                query,
                rules,
                location,
            }))
        }
        "container" => {
            let (name, condition) = parser
                .parse_until_before(Delimiter::CurlyBracketBlock, media::parse_container_prelude)
                .map_err(|e| ParseError::from_css("Failed to parse @container prelude", &e))?;
            expect_block(parser, "Expected '{' after @container prelude")?;
            let rules = parse_block(parser, "Failed to parse @container block", |p| {
                parse_rule_list(p, options, false)
            })?;
            Ok(CssRule::Container(ContainerRule {
                name,
                condition,
                rules,
                location,
            }))
        }
        "keyframes" | "-webkit-keyframes" | "-moz-keyframes" | "-o-keyframes" => {
            let name = parser
                .parse_until_before(Delimiter::CurlyBracketBlock, media::parse_keyframes_name)
                .map_err(|e| ParseError::from_css("Failed to parse @keyframes name", &e))?;
            expect_block(parser, "Expected '{' after @keyframes name")?;
            let keyframes = parse_block(parser, "Failed to parse @keyframes block", |p| {
                parse_keyframe_list(p, options)
            })?;
            Ok(CssRule::Keyframes(KeyframesRule {
                name,
                keyframes,
                location,
            }))
        }
        _ => {
            tracing::debug!(at_rule = name, "ignoring unsupported at-rule");
            skip_to_next_rule(parser);
            Ok(CssRule::Ignored(IgnoredRule {
                name: name.to_string(),
                location,
            }))
        }
    }
}

fn parse_keyframe_list<'i>(
    parser: &mut Parser<'i, '_>,
    options: &ParserOptions,
) -> Result<Vec<Keyframe>> {
    let mut keyframes = vec![];

    loop {
        parser.skip_whitespace();

        if parser.is_exhausted() {
            break;
        }

        let start = parser.state();
        match parse_keyframe(parser, options) {
            Ok(keyframe) => keyframes.push(keyframe),
            Err(e) if options.error_recovery => {
                tracing::warn!("CSS parse error: {}", e);
                parser.reset(&start);
                skip_to_next_rule(parser);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(keyframes)
}

fn parse_keyframe<'i>(parser: &mut Parser<'i, '_>, options: &ParserOptions) -> Result<Keyframe> {
    let selectors = parser
        .parse_until_before(Delimiter::CurlyBracketBlock, |p| {
            p.parse_comma_separated(media::parse_keyframe_selector)
        })
        .map_err(|e| ParseError::from_css("Failed to parse keyframe selector", &e))?;
    expect_block(parser, "Expected '{' after keyframe selector")?;
    let declarations = parse_block(parser, "Failed to parse keyframe block", |p| {
        parse_declaration_block(p, options)
    })?;
    Ok(Keyframe {
        selectors,
        declarations,
    })
}

fn expect_block(parser: &mut Parser<'_, '_>, message: &str) -> Result<()> {
    let location = parser.current_source_location();
    match parser.next() {
        Ok(Token::CurlyBracketBlock) => Ok(()),
        _ => Err(ParseError::new(message, location.line + 1, location.column)),
    }
}

/// Run `parse` over the contents of the block that was just consumed. Tokens
/// `parse` leaves behind are skipped.
fn parse_block<'i, T>(
    parser: &mut Parser<'i, '_>,
    context: &str,
    parse: impl FnOnce(&mut Parser<'i, '_>) -> Result<T>,
) -> Result<T> {
    parser
        .parse_nested_block(|p| {
            let result = parse(p);
            while p.next().is_ok() {}
            Ok::<_, CssParseError<'i, ()>>(result)
        })
        .map_err(|e| ParseError::from_css(context, &e))?
}

pub(crate) fn source_location(parser: &Parser<'_, '_>) -> SourceLocation {
    let location = parser.current_source_location();
    SourceLocation {
        line: location.line + 1,
        column: location.column,
    }
}
