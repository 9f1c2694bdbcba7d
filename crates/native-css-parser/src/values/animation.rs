//! Easing functions, transitions and animations.

use super::length::Time;
use super::{Parse, ParseResult, parse_keyword};
use cssparser::{Parser, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepPosition {
    JumpStart,
    JumpEnd,
    JumpNone,
    JumpBoth,
}

impl StepPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepPosition::JumpStart => "jump-start",
            StepPosition::JumpEnd => "jump-end",
            StepPosition::JumpNone => "jump-none",
            StepPosition::JumpBoth => "jump-both",
        }
    }
}

impl Parse for StepPosition {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        parse_keyword(
            input,
            &[
                ("start", StepPosition::JumpStart),
                ("end", StepPosition::JumpEnd),
                ("jump-start", StepPosition::JumpStart),
                ("jump-end", StepPosition::JumpEnd),
                ("jump-none", StepPosition::JumpNone),
                ("jump-both", StepPosition::JumpBoth),
            ],
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
    Steps { count: i32, position: StepPosition },
}

impl Parse for EasingFunction {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        let location = input.current_source_location();
        let token = input.next()?.clone();
        match &token {
            Token::Ident(ident) => match ident.to_ascii_lowercase().as_str() {
                "linear" => Ok(EasingFunction::Linear),
                "ease" => Ok(EasingFunction::Ease),
                "ease-in" => Ok(EasingFunction::EaseIn),
                "ease-out" => Ok(EasingFunction::EaseOut),
                "ease-in-out" => Ok(EasingFunction::EaseInOut),
                "step-start" => Ok(EasingFunction::Steps {
                    count: 1,
                    position: StepPosition::JumpStart,
                }),
                "step-end" => Ok(EasingFunction::Steps {
                    count: 1,
                    position: StepPosition::JumpEnd,
                }),
                _ => Err(location.new_unexpected_token_error(token.clone())),
            },
            Token::Function(name) if name.eq_ignore_ascii_case("cubic-bezier") => {
                input.parse_nested_block(|p| {
                    let x1 = p.expect_number()?;
                    p.expect_comma()?;
                    let y1 = p.expect_number()?;
                    p.expect_comma()?;
                    let x2 = p.expect_number()?;
                    p.expect_comma()?;
                    let y2 = p.expect_number()?;
                    Ok(EasingFunction::CubicBezier { x1, y1, x2, y2 })
                })
            }
            Token::Function(name) if name.eq_ignore_ascii_case("steps") => {
                input.parse_nested_block(|p| {
                    let count = p.expect_integer()?;
                    let position = if p.try_parse(|p| p.expect_comma()).is_ok() {
                        StepPosition::parse(p)?
                    } else {
                        StepPosition::JumpEnd
                    };
                    Ok(EasingFunction::Steps { count, position })
                })
            }
            _ => Err(location.new_unexpected_token_error(token.clone())),
        }
    }
}

/// One entry of the `transition` shorthand.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub property: String,
    pub duration: Time,
    pub delay: Time,
    pub timing_function: EasingFunction,
}

impl Parse for Transition {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        let mut property = None;
        let mut duration = None;
        let mut delay = None;
        let mut timing_function = None;
        loop {
            if duration.is_none()
                && let Ok(value) = input.try_parse(Time::parse)
            {
                duration = Some(value);
                continue;
            }
            if delay.is_none()
                && duration.is_some()
                && let Ok(value) = input.try_parse(Time::parse)
            {
                delay = Some(value);
                continue;
            }
            if timing_function.is_none()
                && let Ok(value) = input.try_parse(EasingFunction::parse)
            {
                timing_function = Some(value);
                continue;
            }
            if property.is_none()
                && let Ok(value) = input.try_parse(|p| p.expect_ident().map(|s| s.to_string()))
            {
                property = Some(value);
                continue;
            }
            break;
        }
        if property.is_none() && duration.is_none() && timing_function.is_none() {
            return Err(input.new_custom_error(()));
        }
        Ok(Transition {
            property: property.unwrap_or_else(|| "all".to_string()),
            duration: duration.unwrap_or_default(),
            delay: delay.unwrap_or_default(),
            timing_function: timing_function.unwrap_or(EasingFunction::Ease),
        })
    }
}

/// A `transition-property` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyName(pub String);

impl Parse for PropertyName {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        Ok(PropertyName(input.expect_ident()?.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationName {
    None,
    Ident(String),
    String(String),
}

impl Parse for AnimationName {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        if input.try_parse(|p| p.expect_ident_matching("none")).is_ok() {
            return Ok(AnimationName::None);
        }
        if let Ok(name) = input.try_parse(|p| p.expect_string().map(|s| s.to_string())) {
            return Ok(AnimationName::String(name));
        }
        Ok(AnimationName::Ident(input.expect_ident()?.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationIterationCount {
    Number(f32),
    Infinite,
}

impl Parse for AnimationIterationCount {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        if input.try_parse(|p| p.expect_ident_matching("infinite")).is_ok() {
            return Ok(AnimationIterationCount::Infinite);
        }
        Ok(AnimationIterationCount::Number(input.expect_number()?))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationDirection {
    Normal,
    Reverse,
    Alternate,
    AlternateReverse,
}

impl AnimationDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationDirection::Normal => "normal",
            AnimationDirection::Reverse => "reverse",
            AnimationDirection::Alternate => "alternate",
            AnimationDirection::AlternateReverse => "alternate-reverse",
        }
    }
}

impl Parse for AnimationDirection {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        parse_keyword(
            input,
            &[
                ("normal", AnimationDirection::Normal),
                ("reverse", AnimationDirection::Reverse),
                ("alternate", AnimationDirection::Alternate),
                ("alternate-reverse", AnimationDirection::AlternateReverse),
            ],
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPlayState {
    Running,
    Paused,
}

impl AnimationPlayState {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationPlayState::Running => "running",
            AnimationPlayState::Paused => "paused",
        }
    }
}

impl Parse for AnimationPlayState {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        parse_keyword(
            input,
            &[
                ("running", AnimationPlayState::Running),
                ("paused", AnimationPlayState::Paused),
            ],
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationFillMode {
    None,
    Forwards,
    Backwards,
    Both,
}

impl AnimationFillMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationFillMode::None => "none",
            AnimationFillMode::Forwards => "forwards",
            AnimationFillMode::Backwards => "backwards",
            AnimationFillMode::Both => "both",
        }
    }
}

impl Parse for AnimationFillMode {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        parse_keyword(
            input,
            &[
                ("none", AnimationFillMode::None),
                ("forwards", AnimationFillMode::Forwards),
                ("backwards", AnimationFillMode::Backwards),
                ("both", AnimationFillMode::Both),
            ],
        )
    }
}

/// One entry of the `animation` shorthand.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    pub name: AnimationName,
    pub duration: Time,
    pub timing_function: EasingFunction,
    pub iteration_count: AnimationIterationCount,
    pub direction: AnimationDirection,
    pub play_state: AnimationPlayState,
    pub delay: Time,
    pub fill_mode: AnimationFillMode,
}

impl Parse for Animation {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        let mut name = None;
        let mut duration = None;
        let mut timing_function = None;
        let mut iteration_count = None;
        let mut direction = None;
        let mut play_state = None;
        let mut delay = None;
        let mut fill_mode = None;
        let mut consumed = false;

        loop {
            if duration.is_none()
                && let Ok(value) = input.try_parse(Time::parse)
            {
                duration = Some(value);
            } else if delay.is_none()
                && let Ok(value) = input.try_parse(Time::parse)
            {
                delay = Some(value);
            } else if timing_function.is_none()
                && let Ok(value) = input.try_parse(EasingFunction::parse)
            {
                timing_function = Some(value);
            } else if iteration_count.is_none()
                && let Ok(value) = input.try_parse(AnimationIterationCount::parse)
            {
                iteration_count = Some(value);
            } else if direction.is_none()
                && let Ok(value) = input.try_parse(AnimationDirection::parse)
            {
                direction = Some(value);
            } else if fill_mode.is_none()
                && let Ok(value) = input.try_parse(AnimationFillMode::parse)
            {
                fill_mode = Some(value);
            } else if play_state.is_none()
                && let Ok(value) = input.try_parse(AnimationPlayState::parse)
            {
                play_state = Some(value);
            } else if name.is_none()
                && let Ok(value) = input.try_parse(AnimationName::parse)
            {
                name = Some(value);
            } else {
                break;
            }
            consumed = true;
        }

        if !consumed {
            return Err(input.new_custom_error(()));
        }
        Ok(Animation {
            name: name.unwrap_or(AnimationName::None),
            duration: duration.unwrap_or_default(),
            timing_function: timing_function.unwrap_or(EasingFunction::Ease),
            iteration_count: iteration_count.unwrap_or(AnimationIterationCount::Number(1.0)),
            direction: direction.unwrap_or(AnimationDirection::Normal),
            play_state: play_state.unwrap_or(AnimationPlayState::Running),
            delay: delay.unwrap_or_default(),
            fill_mode: fill_mode.unwrap_or(AnimationFillMode::None),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_util::parse_str;
    use super::*;

    #[test]
    fn easing_functions() {
        assert_eq!(
            parse_str::<EasingFunction>("cubic-bezier(0.1, 0.7, 1.0, 0.1)"),
            Some(EasingFunction::CubicBezier {
                x1: 0.1,
                y1: 0.7,
                x2: 1.0,
                y2: 0.1,
            })
        );
        assert_eq!(
            parse_str::<EasingFunction>("steps(4, jump-start)"),
            Some(EasingFunction::Steps {
                count: 4,
                position: StepPosition::JumpStart,
            })
        );
        assert_eq!(
            parse_str::<EasingFunction>("step-end"),
            Some(EasingFunction::Steps {
                count: 1,
                position: StepPosition::JumpEnd,
            })
        );
    }

    #[test]
    fn transition_list() {
        let transitions: Vec<Transition> =
            parse_str("opacity 200ms ease-in 50ms, transform 1s").unwrap();
        assert_eq!(transitions.len(), 2);
        assert_eq!(transitions[0].property, "opacity");
        assert_eq!(transitions[0].duration, Time::Milliseconds(200.0));
        assert_eq!(transitions[0].delay, Time::Milliseconds(50.0));
        assert_eq!(transitions[0].timing_function, EasingFunction::EaseIn);
        assert_eq!(transitions[1].property, "transform");
        assert_eq!(transitions[1].timing_function, EasingFunction::Ease);
    }

    #[test]
    fn animation_shorthand() {
        let animation: Animation = parse_str("spin 2s linear infinite alternate").unwrap();
        assert_eq!(animation.name, AnimationName::Ident("spin".to_string()));
        assert_eq!(animation.duration, Time::Seconds(2.0));
        assert_eq!(animation.timing_function, EasingFunction::Linear);
        assert_eq!(animation.iteration_count, AnimationIterationCount::Infinite);
        assert_eq!(animation.direction, AnimationDirection::Alternate);
        assert_eq!(animation.fill_mode, AnimationFillMode::None);
    }
}
