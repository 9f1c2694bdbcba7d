//! Box alignment values (`align-*`, `justify-content`).

use super::{Parse, ParseResult, parse_keyword};
use cssparser::Parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentDistribution {
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
    Stretch,
}

impl ContentDistribution {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentDistribution::SpaceBetween => "space-between",
            ContentDistribution::SpaceAround => "space-around",
            ContentDistribution::SpaceEvenly => "space-evenly",
            ContentDistribution::Stretch => "stretch",
        }
    }
}

impl Parse for ContentDistribution {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        parse_keyword(
            input,
            &[
                ("space-between", ContentDistribution::SpaceBetween),
                ("space-around", ContentDistribution::SpaceAround),
                ("space-evenly", ContentDistribution::SpaceEvenly),
                ("stretch", ContentDistribution::Stretch),
            ],
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentPosition {
    Center,
    Start,
    End,
    FlexStart,
    FlexEnd,
}

impl ContentPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentPosition::Center => "center",
            ContentPosition::Start => "start",
            ContentPosition::End => "end",
            ContentPosition::FlexStart => "flex-start",
            ContentPosition::FlexEnd => "flex-end",
        }
    }
}

impl Parse for ContentPosition {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        skip_overflow_position(input);
        parse_keyword(
            input,
            &[
                ("center", ContentPosition::Center),
                ("start", ContentPosition::Start),
                ("end", ContentPosition::End),
                ("flex-start", ContentPosition::FlexStart),
                ("flex-end", ContentPosition::FlexEnd),
            ],
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelfPosition {
    Center,
    Start,
    End,
    SelfStart,
    SelfEnd,
    FlexStart,
    FlexEnd,
}

impl SelfPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelfPosition::Center => "center",
            SelfPosition::Start => "start",
            SelfPosition::End => "end",
            SelfPosition::SelfStart => "self-start",
            SelfPosition::SelfEnd => "self-end",
            SelfPosition::FlexStart => "flex-start",
            SelfPosition::FlexEnd => "flex-end",
        }
    }
}

impl Parse for SelfPosition {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        skip_overflow_position(input);
        parse_keyword(
            input,
            &[
                ("center", SelfPosition::Center),
                ("start", SelfPosition::Start),
                ("end", SelfPosition::End),
                ("self-start", SelfPosition::SelfStart),
                ("self-end", SelfPosition::SelfEnd),
                ("flex-start", SelfPosition::FlexStart),
                ("flex-end", SelfPosition::FlexEnd),
            ],
        )
    }
}

/// `baseline`, `first baseline` or `last baseline`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaselinePosition {
    First,
    Last,
}

impl Parse for BaselinePosition {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        let position = input
            .try_parse(|p| {
                parse_keyword(
                    p,
                    &[
                        ("first", BaselinePosition::First),
                        ("last", BaselinePosition::Last),
                    ],
                )
            })
            .unwrap_or(BaselinePosition::First);
        input.expect_ident_matching("baseline")?;
        Ok(position)
    }
}

/// Drop a leading `safe`/`unsafe` overflow keyword; it has no native counterpart.
fn skip_overflow_position(input: &mut Parser<'_, '_>) {
    let _ = input.try_parse(|p| parse_keyword(p, &[("safe", ()), ("unsafe", ())]));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignContent {
    Normal,
    BaselinePosition(BaselinePosition),
    ContentDistribution(ContentDistribution),
    ContentPosition(ContentPosition),
}

impl Parse for AlignContent {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        if input.try_parse(|p| p.expect_ident_matching("normal")).is_ok() {
            return Ok(AlignContent::Normal);
        }
        if let Ok(baseline) = input.try_parse(BaselinePosition::parse) {
            return Ok(AlignContent::BaselinePosition(baseline));
        }
        if let Ok(distribution) = input.try_parse(ContentDistribution::parse) {
            return Ok(AlignContent::ContentDistribution(distribution));
        }
        ContentPosition::parse(input).map(AlignContent::ContentPosition)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JustifyContent {
    Normal,
    ContentDistribution(ContentDistribution),
    ContentPosition(ContentPosition),
    Left,
    Right,
}

impl Parse for JustifyContent {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        if input.try_parse(|p| p.expect_ident_matching("normal")).is_ok() {
            return Ok(JustifyContent::Normal);
        }
        if let Ok(distribution) = input.try_parse(ContentDistribution::parse) {
            return Ok(JustifyContent::ContentDistribution(distribution));
        }
        if let Ok(position) = input.try_parse(ContentPosition::parse) {
            return Ok(JustifyContent::ContentPosition(position));
        }
        skip_overflow_position(input);
        parse_keyword(
            input,
            &[("left", JustifyContent::Left), ("right", JustifyContent::Right)],
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignSelf {
    Auto,
    Normal,
    Stretch,
    BaselinePosition(BaselinePosition),
    SelfPosition(SelfPosition),
}

impl Parse for AlignSelf {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        if let Ok(keyword) = input.try_parse(|p| {
            parse_keyword(
                p,
                &[
                    ("auto", AlignSelf::Auto),
                    ("normal", AlignSelf::Normal),
                    ("stretch", AlignSelf::Stretch),
                ],
            )
        }) {
            return Ok(keyword);
        }
        if let Ok(baseline) = input.try_parse(BaselinePosition::parse) {
            return Ok(AlignSelf::BaselinePosition(baseline));
        }
        SelfPosition::parse(input).map(AlignSelf::SelfPosition)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignItems {
    Normal,
    Stretch,
    BaselinePosition(BaselinePosition),
    SelfPosition(SelfPosition),
}

impl Parse for AlignItems {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        if let Ok(keyword) = input.try_parse(|p| {
            parse_keyword(
                p,
                &[("normal", AlignItems::Normal), ("stretch", AlignItems::Stretch)],
            )
        }) {
            return Ok(keyword);
        }
        if let Ok(baseline) = input.try_parse(BaselinePosition::parse) {
            return Ok(AlignItems::BaselinePosition(baseline));
        }
        SelfPosition::parse(input).map(AlignItems::SelfPosition)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_util::parse_str;
    use super::*;

    #[test]
    fn justify_content_keywords() {
        assert_eq!(
            parse_str::<JustifyContent>("space-between"),
            Some(JustifyContent::ContentDistribution(
                ContentDistribution::SpaceBetween
            ))
        );
        assert_eq!(
            parse_str::<JustifyContent>("safe center"),
            Some(JustifyContent::ContentPosition(ContentPosition::Center))
        );
        assert_eq!(parse_str::<JustifyContent>("left"), Some(JustifyContent::Left));
    }

    #[test]
    fn align_items_baseline() {
        assert_eq!(
            parse_str::<AlignItems>("last baseline"),
            Some(AlignItems::BaselinePosition(BaselinePosition::Last))
        );
        assert_eq!(
            parse_str::<AlignItems>("flex-end"),
            Some(AlignItems::SelfPosition(SelfPosition::FlexEnd))
        );
    }

    #[test]
    fn align_self_auto() {
        assert_eq!(parse_str::<AlignSelf>("auto"), Some(AlignSelf::Auto));
        assert!(parse_str::<AlignSelf>("space-between").is_none());
    }
}
