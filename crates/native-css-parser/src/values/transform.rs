//! `transform` functions and the individual `translate`/`rotate`/`scale` properties.

use super::length::{Angle, Length, LengthPercentage, LengthUnit, LengthValue, NumberOrPercentage};
use super::{Parse, ParseResult};
use cssparser::{Parser, Token};

#[derive(Debug, Clone, PartialEq)]
pub enum Transform {
    Translate(LengthPercentage, LengthPercentage),
    TranslateX(LengthPercentage),
    TranslateY(LengthPercentage),
    TranslateZ(Length),
    Translate3d(LengthPercentage, LengthPercentage, Length),
    Scale(NumberOrPercentage, NumberOrPercentage),
    ScaleX(NumberOrPercentage),
    ScaleY(NumberOrPercentage),
    ScaleZ(NumberOrPercentage),
    Scale3d(NumberOrPercentage, NumberOrPercentage, NumberOrPercentage),
    Rotate(Angle),
    RotateX(Angle),
    RotateY(Angle),
    RotateZ(Angle),
    Rotate3d(f32, f32, f32, Angle),
    Skew(Angle, Angle),
    SkewX(Angle),
    SkewY(Angle),
    Perspective(Length),
    Matrix([f32; 6]),
    Matrix3d([f32; 16]),
}

impl Parse for Transform {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        let location = input.current_source_location();
        let name = input.expect_function()?.clone();
        let function = name.to_ascii_lowercase();
        input.parse_nested_block(|p| match function.as_str() {
            "translate" => {
                let x = LengthPercentage::parse(p)?;
                let y = if p.try_parse(|p| p.expect_comma()).is_ok() {
                    LengthPercentage::parse(p)?
                } else {
                    LengthPercentage::Dimension(LengthValue::new(0.0, LengthUnit::Px))
                };
                Ok(Transform::Translate(x, y))
            }
            "translatex" => Ok(Transform::TranslateX(LengthPercentage::parse(p)?)),
            "translatey" => Ok(Transform::TranslateY(LengthPercentage::parse(p)?)),
            "translatez" => Ok(Transform::TranslateZ(Length::parse(p)?)),
            "translate3d" => {
                let x = LengthPercentage::parse(p)?;
                p.expect_comma()?;
                let y = LengthPercentage::parse(p)?;
                p.expect_comma()?;
                let z = Length::parse(p)?;
                Ok(Transform::Translate3d(x, y, z))
            }
            "scale" => {
                let x = NumberOrPercentage::parse(p)?;
                let y = if p.try_parse(|p| p.expect_comma()).is_ok() {
                    NumberOrPercentage::parse(p)?
                } else {
                    x
                };
                Ok(Transform::Scale(x, y))
            }
            "scalex" => Ok(Transform::ScaleX(NumberOrPercentage::parse(p)?)),
            "scaley" => Ok(Transform::ScaleY(NumberOrPercentage::parse(p)?)),
            "scalez" => Ok(Transform::ScaleZ(NumberOrPercentage::parse(p)?)),
            "scale3d" => {
                let x = NumberOrPercentage::parse(p)?;
                p.expect_comma()?;
                let y = NumberOrPercentage::parse(p)?;
                p.expect_comma()?;
                let z = NumberOrPercentage::parse(p)?;
                Ok(Transform::Scale3d(x, y, z))
            }
            "rotate" => Ok(Transform::Rotate(Angle::parse(p)?)),
            "rotatex" => Ok(Transform::RotateX(Angle::parse(p)?)),
            "rotatey" => Ok(Transform::RotateY(Angle::parse(p)?)),
            "rotatez" => Ok(Transform::RotateZ(Angle::parse(p)?)),
            "rotate3d" => {
                let x = p.expect_number()?;
                p.expect_comma()?;
                let y = p.expect_number()?;
                p.expect_comma()?;
                let z = p.expect_number()?;
                p.expect_comma()?;
                let angle = Angle::parse(p)?;
                Ok(Transform::Rotate3d(x, y, z, angle))
            }
            "skew" => {
                let x = Angle::parse(p)?;
                let y = if p.try_parse(|p| p.expect_comma()).is_ok() {
                    Angle::parse(p)?
                } else {
                    Angle::Deg(0.0)
                };
                Ok(Transform::Skew(x, y))
            }
            "skewx" => Ok(Transform::SkewX(Angle::parse(p)?)),
            "skewy" => Ok(Transform::SkewY(Angle::parse(p)?)),
            "perspective" => Ok(Transform::Perspective(Length::parse(p)?)),
            "matrix" => {
                let values = Vec::<f32>::parse(p)?;
                let matrix: [f32; 6] = values
                    .try_into()
                    .map_err(|_| location.new_custom_error(()))?;
                Ok(Transform::Matrix(matrix))
            }
            "matrix3d" => {
                let values = Vec::<f32>::parse(p)?;
                let matrix: [f32; 16] = values
                    .try_into()
                    .map_err(|_| location.new_custom_error(()))?;
                Ok(Transform::Matrix3d(matrix))
            }
            _ => Err(location.new_unexpected_token_error(Token::Function(name.clone()))),
        })
    }
}

/// `transform`: `none` parses to an empty list.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformList(pub Vec<Transform>);

impl Parse for TransformList {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        if input.try_parse(|p| p.expect_ident_matching("none")).is_ok() {
            return Ok(TransformList(Vec::new()));
        }
        let mut transforms = vec![Transform::parse(input)?];
        while let Ok(transform) = input.try_parse(Transform::parse) {
            transforms.push(transform);
        }
        Ok(TransformList(transforms))
    }
}

/// The `translate` property.
#[derive(Debug, Clone, PartialEq)]
pub enum Translate {
    None,
    Xyz {
        x: LengthPercentage,
        y: LengthPercentage,
        z: Length,
    },
}

impl Parse for Translate {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        if input.try_parse(|p| p.expect_ident_matching("none")).is_ok() {
            return Ok(Translate::None);
        }
        let zero = LengthValue::new(0.0, LengthUnit::Px);
        let x = LengthPercentage::parse(input)?;
        let y = input
            .try_parse(LengthPercentage::parse)
            .unwrap_or(LengthPercentage::Dimension(zero));
        let z = input.try_parse(Length::parse).unwrap_or(Length::Value(zero));
        Ok(Translate::Xyz { x, y, z })
    }
}

/// The `rotate` property: an angle around an axis (the z axis unless given).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotate {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub angle: Angle,
}

impl Parse for Rotate {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        if input.try_parse(|p| p.expect_ident_matching("none")).is_ok() {
            return Ok(Rotate {
                x: 0.0,
                y: 0.0,
                z: 1.0,
                angle: Angle::Deg(0.0),
            });
        }
        let angle = input.try_parse(Angle::parse).ok();
        let axis = input.try_parse(parse_rotate_axis).ok();
        let angle = match angle {
            Some(angle) => angle,
            None => Angle::parse(input)?,
        };
        let (x, y, z) = axis.unwrap_or((0.0, 0.0, 1.0));
        Ok(Rotate { x, y, z, angle })
    }
}

fn parse_rotate_axis<'i>(input: &mut Parser<'i, '_>) -> ParseResult<'i, (f32, f32, f32)> {
    let location = input.current_source_location();
    if let Ok(ident) = input.try_parse(|p| p.expect_ident().map(|s| s.to_ascii_lowercase())) {
        return match ident.as_str() {
            "x" => Ok((1.0, 0.0, 0.0)),
            "y" => Ok((0.0, 1.0, 0.0)),
            "z" => Ok((0.0, 0.0, 1.0)),
            _ => Err(location.new_custom_error(())),
        };
    }
    let x = input.expect_number()?;
    let y = input.expect_number()?;
    let z = input.expect_number()?;
    Ok((x, y, z))
}

/// The `scale` property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    None,
    Xyz {
        x: NumberOrPercentage,
        y: NumberOrPercentage,
        z: NumberOrPercentage,
    },
}

impl Parse for Scale {
    fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Self> {
        if input.try_parse(|p| p.expect_ident_matching("none")).is_ok() {
            return Ok(Scale::None);
        }
        let x = NumberOrPercentage::parse(input)?;
        let y = input.try_parse(NumberOrPercentage::parse).unwrap_or(x);
        let z = input
            .try_parse(NumberOrPercentage::parse)
            .unwrap_or(NumberOrPercentage::Number(1.0));
        Ok(Scale::Xyz { x, y, z })
    }
}
