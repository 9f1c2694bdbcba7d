//! The closed set of CSS properties this parser recognizes.
//!
//! Every known property has a [`PropertyId`] and a typed [`Property`] variant.
//! Properties that the compiler never emits still get a variant (typed as a
//! [`TokenList`]) so that the set stays closed and every identifier is
//! dispatched explicitly.

use crate::tokens::TokenList;
use crate::values::align::{AlignContent, AlignItems, AlignSelf, JustifyContent};
use crate::values::animation::{
    Animation, AnimationDirection, AnimationFillMode, AnimationIterationCount, AnimationName,
    AnimationPlayState, EasingFunction, PropertyName, Transition,
};
use crate::values::border::{Border, BorderRadius, BorderSideWidth, LineStyle};
use crate::values::color::CssColor;
use crate::values::container::{Container, ContainerName, ContainerType};
use crate::values::display::{Display, Overflow, OverflowKeyword};
use crate::values::flex::{Flex, FlexDirection, FlexFlow, FlexWrap, Gap, GapValue};
use crate::values::font::{
    Font, FontFamily, FontSize, FontStyle, FontVariantCaps, FontWeight, LineHeight, VerticalAlign,
};
use crate::values::length::{AlphaValue, LengthPercentage, LengthPercentageOrAuto, Size, Time};
use crate::values::text::{
    LetterSpacing, TextAlign, TextDecoration, TextDecorationLine, TextDecorationStyle,
    TextDecorationThickness, TextShadowList, TextTransform, ZIndex,
};
use crate::values::transform::{Rotate, Scale, TransformList, Translate};
use crate::values::{Parse, ParseResult, Rect, Size2D, StartEnd};
use cssparser::Parser;

/// A known property whose value could not be classified, kept as tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct UnparsedProperty {
    pub property_id: PropertyId,
    pub value: TokenList,
}

/// A `--custom` property, or a property name outside the known set.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomProperty {
    pub name: String,
    pub value: TokenList,
}

macro_rules! define_properties {
    ($($name:literal => $variant:ident($ty:ty),)+) => {
        /// Identifier of a known CSS property.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum PropertyId {
            $($variant,)+
        }

        impl PropertyId {
            /// Look up a property by its (case-insensitive) CSS name.
            pub fn from_name(name: &str) -> Option<Self> {
                let lower = name.to_ascii_lowercase();
                match lower.as_str() {
                    $($name => Some(PropertyId::$variant),)+
                    _ => None,
                }
            }

            /// The CSS name of this property.
            pub fn name(&self) -> &'static str {
                match self {
                    $(PropertyId::$variant => $name,)+
                }
            }
        }

        /// A parsed declaration value.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Property {
            $($variant($ty),)+
            Unparsed(UnparsedProperty),
            Custom(CustomProperty),
        }

        impl Property {
            /// Parse the typed value of `id`. The caller decides whether the
            /// input has to be exhausted.
            pub fn parse_value<'i>(id: PropertyId, input: &mut Parser<'i, '_>) -> ParseResult<'i, Self> {
                match id {
                    $(PropertyId::$variant => Ok(Property::$variant(<$ty as Parse>::parse(input)?)),)+
                }
            }

            /// The identifier of a known property, `None` for custom properties.
            pub fn property_id(&self) -> Option<PropertyId> {
                match self {
                    $(Property::$variant(_) => Some(PropertyId::$variant),)+
                    Property::Unparsed(unparsed) => Some(unparsed.property_id),
                    Property::Custom(_) => None,
                }
            }
        }
    };
}

define_properties! {
    "background-color" => BackgroundColor(CssColor),
    "background-image" => BackgroundImage(TokenList),
    "background-position-x" => BackgroundPositionX(TokenList),
    "background-position-y" => BackgroundPositionY(TokenList),
    "background-position" => BackgroundPosition(TokenList),
    "background-size" => BackgroundSize(TokenList),
    "background-repeat" => BackgroundRepeat(TokenList),
    "background-attachment" => BackgroundAttachment(TokenList),
    "background-clip" => BackgroundClip(TokenList),
    "background-origin" => BackgroundOrigin(TokenList),
    "background" => Background(TokenList),
    "box-shadow" => BoxShadow(TokenList),
    "opacity" => Opacity(AlphaValue),
    "color" => Color(CssColor),
    "display" => Display(Display),
    "visibility" => Visibility(TokenList),

    "width" => Width(Size),
    "height" => Height(Size),
    "min-width" => MinWidth(Size),
    "min-height" => MinHeight(Size),
    "max-width" => MaxWidth(Size),
    "max-height" => MaxHeight(Size),
    "block-size" => BlockSize(Size),
    "inline-size" => InlineSize(Size),
    "min-block-size" => MinBlockSize(Size),
    "min-inline-size" => MinInlineSize(Size),
    "max-block-size" => MaxBlockSize(Size),
    "max-inline-size" => MaxInlineSize(Size),
    "box-sizing" => BoxSizing(TokenList),

    "overflow" => Overflow(Overflow),
    "overflow-x" => OverflowX(OverflowKeyword),
    "overflow-y" => OverflowY(OverflowKeyword),
    "text-overflow" => TextOverflow(TokenList),
    "position" => Position(TokenList),
    "top" => Top(LengthPercentageOrAuto),
    "bottom" => Bottom(LengthPercentageOrAuto),
    "left" => Left(LengthPercentageOrAuto),
    "right" => Right(LengthPercentageOrAuto),
    "inset-block-start" => InsetBlockStart(LengthPercentageOrAuto),
    "inset-block-end" => InsetBlockEnd(LengthPercentageOrAuto),
    "inset-inline-start" => InsetInlineStart(LengthPercentageOrAuto),
    "inset-inline-end" => InsetInlineEnd(LengthPercentageOrAuto),
    "inset-block" => InsetBlock(StartEnd<LengthPercentageOrAuto>),
    "inset-inline" => InsetInline(StartEnd<LengthPercentageOrAuto>),
    "inset" => Inset(Rect<LengthPercentageOrAuto>),

    "border-spacing" => BorderSpacing(TokenList),
    "border-top-color" => BorderTopColor(CssColor),
    "border-bottom-color" => BorderBottomColor(CssColor),
    "border-left-color" => BorderLeftColor(CssColor),
    "border-right-color" => BorderRightColor(CssColor),
    "border-block-start-color" => BorderBlockStartColor(CssColor),
    "border-block-end-color" => BorderBlockEndColor(CssColor),
    "border-inline-start-color" => BorderInlineStartColor(CssColor),
    "border-inline-end-color" => BorderInlineEndColor(CssColor),
    "border-top-style" => BorderTopStyle(LineStyle),
    "border-bottom-style" => BorderBottomStyle(LineStyle),
    "border-left-style" => BorderLeftStyle(LineStyle),
    "border-right-style" => BorderRightStyle(LineStyle),
    "border-block-start-style" => BorderBlockStartStyle(LineStyle),
    "border-block-end-style" => BorderBlockEndStyle(LineStyle),
    "border-inline-start-style" => BorderInlineStartStyle(LineStyle),
    "border-inline-end-style" => BorderInlineEndStyle(LineStyle),
    "border-top-width" => BorderTopWidth(BorderSideWidth),
    "border-bottom-width" => BorderBottomWidth(BorderSideWidth),
    "border-left-width" => BorderLeftWidth(BorderSideWidth),
    "border-right-width" => BorderRightWidth(BorderSideWidth),
    "border-block-start-width" => BorderBlockStartWidth(BorderSideWidth),
    "border-block-end-width" => BorderBlockEndWidth(BorderSideWidth),
    "border-inline-start-width" => BorderInlineStartWidth(BorderSideWidth),
    "border-inline-end-width" => BorderInlineEndWidth(BorderSideWidth),
    "border-top-left-radius" => BorderTopLeftRadius(Size2D<LengthPercentage>),
    "border-top-right-radius" => BorderTopRightRadius(Size2D<LengthPercentage>),
    "border-bottom-left-radius" => BorderBottomLeftRadius(Size2D<LengthPercentage>),
    "border-bottom-right-radius" => BorderBottomRightRadius(Size2D<LengthPercentage>),
    "border-start-start-radius" => BorderStartStartRadius(Size2D<LengthPercentage>),
    "border-start-end-radius" => BorderStartEndRadius(Size2D<LengthPercentage>),
    "border-end-start-radius" => BorderEndStartRadius(Size2D<LengthPercentage>),
    "border-end-end-radius" => BorderEndEndRadius(Size2D<LengthPercentage>),
    "border-radius" => BorderRadius(BorderRadius),
    "border-image-source" => BorderImageSource(TokenList),
    "border-image-outset" => BorderImageOutset(TokenList),
    "border-image-repeat" => BorderImageRepeat(TokenList),
    "border-image-width" => BorderImageWidth(TokenList),
    "border-image-slice" => BorderImageSlice(TokenList),
    "border-image" => BorderImage(TokenList),
    "border-color" => BorderColor(Rect<CssColor>),
    "border-style" => BorderStyle(Rect<LineStyle>),
    "border-width" => BorderWidth(Rect<BorderSideWidth>),
    "border-block-color" => BorderBlockColor(StartEnd<CssColor>),
    "border-block-style" => BorderBlockStyle(StartEnd<LineStyle>),
    "border-block-width" => BorderBlockWidth(StartEnd<BorderSideWidth>),
    "border-inline-color" => BorderInlineColor(StartEnd<CssColor>),
    "border-inline-style" => BorderInlineStyle(StartEnd<LineStyle>),
    "border-inline-width" => BorderInlineWidth(StartEnd<BorderSideWidth>),
    "border" => Border(Border),
    "border-top" => BorderTop(Border),
    "border-bottom" => BorderBottom(Border),
    "border-left" => BorderLeft(Border),
    "border-right" => BorderRight(Border),
    "border-block" => BorderBlock(Border),
    "border-block-start" => BorderBlockStart(Border),
    "border-block-end" => BorderBlockEnd(Border),
    "border-inline" => BorderInline(Border),
    "border-inline-start" => BorderInlineStart(Border),
    "border-inline-end" => BorderInlineEnd(Border),
    "outline" => Outline(TokenList),
    "outline-color" => OutlineColor(TokenList),
    "outline-style" => OutlineStyle(TokenList),
    "outline-width" => OutlineWidth(TokenList),

    "flex-direction" => FlexDirection(FlexDirection),
    "flex-wrap" => FlexWrap(FlexWrap),
    "flex-flow" => FlexFlow(FlexFlow),
    "flex-grow" => FlexGrow(f32),
    "flex-shrink" => FlexShrink(f32),
    "flex-basis" => FlexBasis(LengthPercentageOrAuto),
    "flex" => Flex(Flex),
    "order" => Order(i32),
    "align-content" => AlignContent(AlignContent),
    "justify-content" => JustifyContent(JustifyContent),
    "place-content" => PlaceContent(TokenList),
    "align-self" => AlignSelf(AlignSelf),
    "justify-self" => JustifySelf(TokenList),
    "place-self" => PlaceSelf(TokenList),
    "align-items" => AlignItems(AlignItems),
    "justify-items" => JustifyItems(TokenList),
    "place-items" => PlaceItems(TokenList),
    "row-gap" => RowGap(GapValue),
    "column-gap" => ColumnGap(GapValue),
    "gap" => Gap(Gap),
    "box-orient" => BoxOrient(TokenList),
    "box-direction" => BoxDirection(TokenList),
    "box-ordinal-group" => BoxOrdinalGroup(TokenList),
    "box-align" => BoxAlign(TokenList),
    "box-flex" => BoxFlex(TokenList),
    "box-flex-group" => BoxFlexGroup(TokenList),
    "box-pack" => BoxPack(TokenList),
    "box-lines" => BoxLines(TokenList),
    "flex-pack" => FlexPack(TokenList),
    "flex-order" => FlexOrder(TokenList),
    "flex-align" => FlexAlign(TokenList),
    "flex-item-align" => FlexItemAlign(TokenList),
    "flex-line-pack" => FlexLinePack(TokenList),
    "flex-positive" => FlexPositive(TokenList),
    "flex-negative" => FlexNegative(TokenList),
    "flex-preferred-size" => FlexPreferredSize(TokenList),

    "grid-template-columns" => GridTemplateColumns(TokenList),
    "grid-template-rows" => GridTemplateRows(TokenList),
    "grid-auto-columns" => GridAutoColumns(TokenList),
    "grid-auto-rows" => GridAutoRows(TokenList),
    "grid-auto-flow" => GridAutoFlow(TokenList),
    "grid-template-areas" => GridTemplateAreas(TokenList),
    "grid-template" => GridTemplate(TokenList),
    "grid" => Grid(TokenList),
    "grid-row-start" => GridRowStart(TokenList),
    "grid-row-end" => GridRowEnd(TokenList),
    "grid-column-start" => GridColumnStart(TokenList),
    "grid-column-end" => GridColumnEnd(TokenList),
    "grid-row" => GridRow(TokenList),
    "grid-column" => GridColumn(TokenList),
    "grid-area" => GridArea(TokenList),

    "margin-top" => MarginTop(LengthPercentageOrAuto),
    "margin-bottom" => MarginBottom(LengthPercentageOrAuto),
    "margin-left" => MarginLeft(LengthPercentageOrAuto),
    "margin-right" => MarginRight(LengthPercentageOrAuto),
    "margin-block-start" => MarginBlockStart(LengthPercentageOrAuto),
    "margin-block-end" => MarginBlockEnd(LengthPercentageOrAuto),
    "margin-inline-start" => MarginInlineStart(LengthPercentageOrAuto),
    "margin-inline-end" => MarginInlineEnd(LengthPercentageOrAuto),
    "margin-block" => MarginBlock(StartEnd<LengthPercentageOrAuto>),
    "margin-inline" => MarginInline(StartEnd<LengthPercentageOrAuto>),
    "margin" => Margin(Rect<LengthPercentageOrAuto>),
    "padding-top" => PaddingTop(LengthPercentage),
    "padding-bottom" => PaddingBottom(LengthPercentage),
    "padding-left" => PaddingLeft(LengthPercentage),
    "padding-right" => PaddingRight(LengthPercentage),
    "padding-block-start" => PaddingBlockStart(LengthPercentageOrAuto),
    "padding-block-end" => PaddingBlockEnd(LengthPercentageOrAuto),
    "padding-inline-start" => PaddingInlineStart(LengthPercentageOrAuto),
    "padding-inline-end" => PaddingInlineEnd(LengthPercentageOrAuto),
    "padding-block" => PaddingBlock(StartEnd<LengthPercentageOrAuto>),
    "padding-inline" => PaddingInline(StartEnd<LengthPercentageOrAuto>),
    "padding" => Padding(Rect<LengthPercentage>),
    "scroll-margin-top" => ScrollMarginTop(TokenList),
    "scroll-margin-bottom" => ScrollMarginBottom(TokenList),
    "scroll-margin-left" => ScrollMarginLeft(TokenList),
    "scroll-margin-right" => ScrollMarginRight(TokenList),
    "scroll-margin-block-start" => ScrollMarginBlockStart(TokenList),
    "scroll-margin-block-end" => ScrollMarginBlockEnd(TokenList),
    "scroll-margin-inline-start" => ScrollMarginInlineStart(TokenList),
    "scroll-margin-inline-end" => ScrollMarginInlineEnd(TokenList),
    "scroll-margin-block" => ScrollMarginBlock(TokenList),
    "scroll-margin-inline" => ScrollMarginInline(TokenList),
    "scroll-margin" => ScrollMargin(TokenList),
    "scroll-padding-top" => ScrollPaddingTop(TokenList),
    "scroll-padding-bottom" => ScrollPaddingBottom(TokenList),
    "scroll-padding-left" => ScrollPaddingLeft(TokenList),
    "scroll-padding-right" => ScrollPaddingRight(TokenList),
    "scroll-padding-block-start" => ScrollPaddingBlockStart(TokenList),
    "scroll-padding-block-end" => ScrollPaddingBlockEnd(TokenList),
    "scroll-padding-inline-start" => ScrollPaddingInlineStart(TokenList),
    "scroll-padding-inline-end" => ScrollPaddingInlineEnd(TokenList),
    "scroll-padding-block" => ScrollPaddingBlock(TokenList),
    "scroll-padding-inline" => ScrollPaddingInline(TokenList),
    "scroll-padding" => ScrollPadding(TokenList),

    "font-weight" => FontWeight(FontWeight),
    "font-size" => FontSize(FontSize),
    "font-stretch" => FontStretch(TokenList),
    "font-family" => FontFamily(FontFamily),
    "font-style" => FontStyle(FontStyle),
    "font-variant-caps" => FontVariantCaps(FontVariantCaps),
    "line-height" => LineHeight(LineHeight),
    "font" => Font(Font),
    "vertical-align" => VerticalAlign(VerticalAlign),
    "font-palette" => FontPalette(TokenList),

    "transition-property" => TransitionProperty(Vec<PropertyName>),
    "transition-duration" => TransitionDuration(Vec<Time>),
    "transition-delay" => TransitionDelay(Vec<Time>),
    "transition-timing-function" => TransitionTimingFunction(Vec<EasingFunction>),
    "transition" => Transition(Vec<Transition>),
    "animation-name" => AnimationName(Vec<AnimationName>),
    "animation-duration" => AnimationDuration(Vec<Time>),
    "animation-timing-function" => AnimationTimingFunction(Vec<EasingFunction>),
    "animation-iteration-count" => AnimationIterationCount(Vec<AnimationIterationCount>),
    "animation-direction" => AnimationDirection(Vec<AnimationDirection>),
    "animation-play-state" => AnimationPlayState(Vec<AnimationPlayState>),
    "animation-delay" => AnimationDelay(Vec<Time>),
    "animation-fill-mode" => AnimationFillMode(Vec<AnimationFillMode>),
    "animation" => Animation(Vec<Animation>),

    "transform" => Transform(TransformList),
    "transform-origin" => TransformOrigin(TokenList),
    "transform-style" => TransformStyle(TokenList),
    "transform-box" => TransformBox(TokenList),
    "backface-visibility" => BackfaceVisibility(TokenList),
    "perspective" => Perspective(TokenList),
    "perspective-origin" => PerspectiveOrigin(TokenList),
    "translate" => Translate(Translate),
    "rotate" => Rotate(Rotate),
    "scale" => Scale(Scale),

    "text-transform" => TextTransform(TextTransform),
    "white-space" => WhiteSpace(TokenList),
    "tab-size" => TabSize(TokenList),
    "word-break" => WordBreak(TokenList),
    "line-break" => LineBreak(TokenList),
    "hyphens" => Hyphens(TokenList),
    "overflow-wrap" => OverflowWrap(TokenList),
    "word-wrap" => WordWrap(TokenList),
    "text-align" => TextAlign(TextAlign),
    "text-align-last" => TextAlignLast(TokenList),
    "text-justify" => TextJustify(TokenList),
    "word-spacing" => WordSpacing(TokenList),
    "letter-spacing" => LetterSpacing(LetterSpacing),
    "text-indent" => TextIndent(TokenList),
    "text-decoration-line" => TextDecorationLine(TextDecorationLine),
    "text-decoration-style" => TextDecorationStyle(TextDecorationStyle),
    "text-decoration-color" => TextDecorationColor(CssColor),
    "text-decoration-thickness" => TextDecorationThickness(TextDecorationThickness),
    "text-decoration" => TextDecoration(TextDecoration),
    "text-decoration-skip-ink" => TextDecorationSkipInk(TokenList),
    "text-emphasis-style" => TextEmphasisStyle(TokenList),
    "text-emphasis-color" => TextEmphasisColor(TokenList),
    "text-emphasis" => TextEmphasis(TokenList),
    "text-emphasis-position" => TextEmphasisPosition(TokenList),
    "text-shadow" => TextShadow(TextShadowList),

    "box-decoration-break" => BoxDecorationBreak(TokenList),
    "resize" => Resize(TokenList),
    "cursor" => Cursor(TokenList),
    "caret-color" => CaretColor(TokenList),
    "caret-shape" => CaretShape(TokenList),
    "caret" => Caret(TokenList),
    "user-select" => UserSelect(TokenList),
    "accent-color" => AccentColor(TokenList),
    "appearance" => Appearance(TokenList),
    "list-style-type" => ListStyleType(TokenList),
    "list-style-image" => ListStyleImage(TokenList),
    "list-style-position" => ListStylePosition(TokenList),
    "list-style" => ListStyle(TokenList),
    "marker-side" => MarkerSide(TokenList),
    "composes" => Composes(TokenList),
    "fill" => Fill(TokenList),
    "fill-rule" => FillRule(TokenList),
    "fill-opacity" => FillOpacity(TokenList),
    "stroke" => Stroke(TokenList),
    "stroke-opacity" => StrokeOpacity(TokenList),
    "stroke-width" => StrokeWidth(TokenList),
    "stroke-linecap" => StrokeLinecap(TokenList),
    "stroke-linejoin" => StrokeLinejoin(TokenList),
    "stroke-miterlimit" => StrokeMiterlimit(TokenList),
    "stroke-dasharray" => StrokeDasharray(TokenList),
    "stroke-dashoffset" => StrokeDashoffset(TokenList),
    "marker-start" => MarkerStart(TokenList),
    "marker-mid" => MarkerMid(TokenList),
    "marker-end" => MarkerEnd(TokenList),
    "marker" => Marker(TokenList),
    "color-interpolation" => ColorInterpolation(TokenList),
    "color-interpolation-filters" => ColorInterpolationFilters(TokenList),
    "color-rendering" => ColorRendering(TokenList),
    "shape-rendering" => ShapeRendering(TokenList),
    "text-rendering" => TextRendering(TokenList),
    "image-rendering" => ImageRendering(TokenList),
    "clip-path" => ClipPath(TokenList),
    "clip-rule" => ClipRule(TokenList),
    "mask-image" => MaskImage(TokenList),
    "mask-mode" => MaskMode(TokenList),
    "mask-repeat" => MaskRepeat(TokenList),
    "mask-position-x" => MaskPositionX(TokenList),
    "mask-position-y" => MaskPositionY(TokenList),
    "mask-position" => MaskPosition(TokenList),
    "mask-clip" => MaskClip(TokenList),
    "mask-origin" => MaskOrigin(TokenList),
    "mask-size" => MaskSize(TokenList),
    "mask-composite" => MaskComposite(TokenList),
    "mask-type" => MaskType(TokenList),
    "mask" => Mask(TokenList),
    "mask-border-source" => MaskBorderSource(TokenList),
    "mask-border-mode" => MaskBorderMode(TokenList),
    "mask-border-slice" => MaskBorderSlice(TokenList),
    "mask-border-width" => MaskBorderWidth(TokenList),
    "mask-border-outset" => MaskBorderOutset(TokenList),
    "mask-border-repeat" => MaskBorderRepeat(TokenList),
    "mask-border" => MaskBorder(TokenList),
    "-webkit-mask-composite" => WebkitMaskComposite(TokenList),
    "mask-source-type" => MaskSourceType(TokenList),
    "mask-box-image" => MaskBoxImage(TokenList),
    "mask-box-image-source" => MaskBoxImageSource(TokenList),
    "mask-box-image-slice" => MaskBoxImageSlice(TokenList),
    "mask-box-image-width" => MaskBoxImageWidth(TokenList),
    "mask-box-image-outset" => MaskBoxImageOutset(TokenList),
    "mask-box-image-repeat" => MaskBoxImageRepeat(TokenList),
    "filter" => Filter(TokenList),
    "backdrop-filter" => BackdropFilter(TokenList),
    "z-index" => ZIndex(ZIndex),
    "container-type" => ContainerType(ContainerType),
    "container-name" => ContainerName(ContainerName),
    "container" => Container(Container),
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssparser::ParserInput;

    fn parse(id: PropertyId, css: &str) -> Option<Property> {
        let mut input = ParserInput::new(css);
        let mut parser = Parser::new(&mut input);
        parser.parse_entirely(|p| Property::parse_value(id, p)).ok()
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(
            PropertyId::from_name("Background-Color"),
            Some(PropertyId::BackgroundColor)
        );
        assert_eq!(
            PropertyId::from_name("-webkit-mask-composite").map(|id| id.name()),
            Some("-webkit-mask-composite")
        );
        assert_eq!(PropertyId::from_name("not-a-property"), None);
    }

    #[test]
    fn names_round_trip_through_lookup() {
        for name in ["margin", "border-inline-end-width", "animation-fill-mode", "z-index"] {
            let id = PropertyId::from_name(name).unwrap();
            assert_eq!(id.name(), name);
        }
    }

    #[test]
    fn typed_values() {
        assert!(matches!(
            parse(PropertyId::Margin, "1px 2px"),
            Some(Property::Margin(_))
        ));
        assert!(matches!(
            parse(PropertyId::ZIndex, "3"),
            Some(Property::ZIndex(ZIndex::Integer(3)))
        ));
        assert!(parse(PropertyId::Width, "red").is_none());
    }

    #[test]
    fn property_id_of_parsed_value() {
        let property = parse(PropertyId::Color, "red").unwrap();
        assert_eq!(property.property_id(), Some(PropertyId::Color));
        let custom = Property::Custom(CustomProperty {
            name: "--x".to_string(),
            value: TokenList::default(),
        });
        assert_eq!(custom.property_id(), None);
    }
}
