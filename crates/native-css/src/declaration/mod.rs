//! Compiles one declaration into accumulator calls.
//!
//! Every [`Property`] variant is dispatched explicitly. A property the target
//! cannot render is a deliberate no-op; adding a variant to the parser without
//! deciding what it compiles to fails to build.

pub mod unparsed;
pub mod values;

use crate::accumulator::{
    AnimationDeclaration, ContainerDeclaration, DeclarationSink, PropOptions,
    TransitionDeclaration,
};
use crate::options::CompileOptions;
use crate::style::StyleValue;
use native_css_parser::values::border::Border;
use native_css_parser::values::display::{Display, DisplayInside};
use native_css_parser::values::length::{LengthPercentage, NumberOrPercentage};
use native_css_parser::values::text::{LetterSpacing, TextShadowList, ZIndex};
use native_css_parser::values::transform::{Rotate, Scale, Transform, TransformList, Translate};
use native_css_parser::{Property, TokenList};
use tracing::debug;
use unparsed::parse_unparsed;
use values::*;

/// Keywords that defer to the cascade, which the runtime does not have.
const CSS_WIDE_KEYWORDS: &[&str] = &["inherit", "initial", "unset", "revert", "revert-layer"];

/// Compile `declaration` into `sink`.
pub fn parse_declaration<S>(declaration: &Property, options: &CompileOptions, sink: &mut S)
where
    S: DeclarationSink + ?Sized,
{
    let o = options;
    match declaration {
        Property::Unparsed(unparsed) => {
            let name = unparsed.property_id.name();
            add_unparsed(sink, name, &unparsed.value, o);
        }
        Property::Custom(custom) => {
            if custom.name.starts_with("--") {
                add_unparsed(sink, &custom.name, &custom.value, o);
            } else {
                debug!(property = %custom.name, "Dropping unknown property");
            }
        }

        Property::BackgroundColor(color) => sink.add_longhand("background-color", parse_color(color)),
        Property::Opacity(alpha) => sink.add_longhand("opacity", Some(StyleValue::from_f32(alpha.0))),
        Property::Color(color) => sink.add_longhand("color", parse_color(color)),
        Property::Display(display) => sink.add_longhand("display", parse_display(display)),

        Property::Width(size) => sink.add_longhand("width", parse_size(size, o)),
        Property::Height(size) => sink.add_longhand("height", parse_size(size, o)),
        Property::MinWidth(size) => sink.add_longhand("min-width", parse_size(size, o)),
        Property::MinHeight(size) => sink.add_longhand("min-height", parse_size(size, o)),
        Property::MaxWidth(size) => sink.add_longhand("max-width", parse_size(size, o)),
        Property::MaxHeight(size) => sink.add_longhand("max-height", parse_size(size, o)),
        Property::BlockSize(size) => sink.add_longhand("height", parse_size(size, o)),
        Property::InlineSize(size) => sink.add_longhand("width", parse_size(size, o)),
        Property::MinBlockSize(size) => sink.add_longhand("min-height", parse_size(size, o)),
        Property::MinInlineSize(size) => sink.add_longhand("min-width", parse_size(size, o)),
        Property::MaxBlockSize(size) => sink.add_longhand("max-height", parse_size(size, o)),
        Property::MaxInlineSize(size) => sink.add_longhand("max-width", parse_size(size, o)),

        Property::Overflow(overflow) => sink.add_longhand("overflow", parse_overflow(overflow.x)),
        Property::Top(value) => sink.add_longhand("top", parse_offset(value, o)),
        Property::Bottom(value) => sink.add_longhand("bottom", parse_offset(value, o)),
        Property::Left(value) => sink.add_longhand("left", parse_offset(value, o)),
        Property::Right(value) => sink.add_longhand("right", parse_offset(value, o)),
        Property::InsetBlockStart(value) => {
            sink.add_longhand("inset-block-start", parse_length_percentage_or_auto(value, o))
        }
        Property::InsetBlockEnd(value) => {
            sink.add_longhand("inset-block-end", parse_length_percentage_or_auto(value, o))
        }
        Property::InsetInlineStart(value) => {
            sink.add_longhand("inset-inline-start", parse_length_percentage_or_auto(value, o))
        }
        Property::InsetInlineEnd(value) => {
            sink.add_longhand("inset-inline-end", parse_length_percentage_or_auto(value, o))
        }
        Property::InsetBlock(value) => {
            sink.add_shorthand("inset-block-start", parse_length_percentage_or_auto(&value.start, o));
            sink.add_shorthand("inset-block-end", parse_length_percentage_or_auto(&value.end, o));
        }
        Property::InsetInline(value) => {
            sink.add_shorthand("inset-inline-start", parse_length_percentage_or_auto(&value.start, o));
            sink.add_shorthand("inset-inline-end", parse_length_percentage_or_auto(&value.end, o));
        }
        Property::Inset(rect) => {
            sink.add_shorthand("top", parse_length_percentage_or_auto(&rect.top, o));
            sink.add_shorthand("bottom", parse_length_percentage_or_auto(&rect.bottom, o));
            sink.add_shorthand("left", parse_length_percentage_or_auto(&rect.left, o));
            sink.add_shorthand("right", parse_length_percentage_or_auto(&rect.right, o));
        }

        Property::BorderTopColor(color) | Property::BorderBlockStartColor(color) => {
            sink.add_longhand("border-top-color", parse_color(color))
        }
        Property::BorderBottomColor(color) | Property::BorderBlockEndColor(color) => {
            sink.add_longhand("border-bottom-color", parse_color(color))
        }
        Property::BorderLeftColor(color) | Property::BorderInlineStartColor(color) => {
            sink.add_longhand("border-left-color", parse_color(color))
        }
        Property::BorderRightColor(color) | Property::BorderInlineEndColor(color) => {
            sink.add_longhand("border-right-color", parse_color(color))
        }
        Property::BorderTopWidth(width) | Property::BorderBlockStartWidth(width) => {
            sink.add_longhand("border-top-width", parse_border_side_width(width, o))
        }
        Property::BorderBottomWidth(width) | Property::BorderBlockEndWidth(width) => {
            sink.add_longhand("border-bottom-width", parse_border_side_width(width, o))
        }
        Property::BorderLeftWidth(width) | Property::BorderInlineStartWidth(width) => {
            sink.add_longhand("border-left-width", parse_border_side_width(width, o))
        }
        Property::BorderRightWidth(width) | Property::BorderInlineEndWidth(width) => {
            sink.add_longhand("border-right-width", parse_border_side_width(width, o))
        }
        Property::BorderTopLeftRadius(radius) => {
            sink.add_longhand("border-top-left-radius", parse_length_percentage(&radius.0, o))
        }
        Property::BorderTopRightRadius(radius) => {
            sink.add_longhand("border-top-right-radius", parse_length_percentage(&radius.0, o))
        }
        Property::BorderBottomLeftRadius(radius) => {
            sink.add_longhand("border-bottom-left-radius", parse_length_percentage(&radius.0, o))
        }
        Property::BorderBottomRightRadius(radius) => {
            sink.add_longhand("border-bottom-right-radius", parse_length_percentage(&radius.0, o))
        }
        Property::BorderStartStartRadius(radius) => {
            sink.add_longhand("border-start-start-radius", parse_length_percentage(&radius.0, o))
        }
        Property::BorderStartEndRadius(radius) => {
            sink.add_longhand("border-start-end-radius", parse_length_percentage(&radius.0, o))
        }
        Property::BorderEndStartRadius(radius) => {
            sink.add_longhand("border-end-start-radius", parse_length_percentage(&radius.0, o))
        }
        Property::BorderEndEndRadius(radius) => {
            sink.add_longhand("border-end-end-radius", parse_length_percentage(&radius.0, o))
        }
        Property::BorderRadius(radius) => {
            sink.add_shorthand("border-bottom-left-radius", parse_length_percentage(&radius.bottom_left.0, o));
            sink.add_shorthand("border-bottom-right-radius", parse_length_percentage(&radius.bottom_right.0, o));
            sink.add_shorthand("border-top-left-radius", parse_length_percentage(&radius.top_left.0, o));
            sink.add_shorthand("border-top-right-radius", parse_length_percentage(&radius.top_right.0, o));
        }
        Property::BorderColor(rect) => {
            sink.add_shorthand("border-top-color", parse_color(&rect.top));
            sink.add_shorthand("border-bottom-color", parse_color(&rect.bottom));
            sink.add_shorthand("border-left-color", parse_color(&rect.left));
            sink.add_shorthand("border-right-color", parse_color(&rect.right));
        }
        Property::BorderStyle(rect) => sink.add_longhand("border-style", parse_border_style(rect)),
        Property::BorderWidth(rect) => {
            sink.add_shorthand("border-top-width", parse_border_side_width(&rect.top, o));
            sink.add_shorthand("border-bottom-width", parse_border_side_width(&rect.bottom, o));
            sink.add_shorthand("border-left-width", parse_border_side_width(&rect.left, o));
            sink.add_shorthand("border-right-width", parse_border_side_width(&rect.right, o));
        }
        Property::BorderBlockColor(colors) => {
            sink.add_longhand("border-top-color", parse_color(&colors.start));
            sink.add_longhand("border-bottom-color", parse_color(&colors.end));
        }
        Property::BorderBlockWidth(widths) => {
            sink.add_longhand("border-top-width", parse_border_side_width(&widths.start, o));
            sink.add_longhand("border-bottom-width", parse_border_side_width(&widths.end, o));
        }
        Property::BorderInlineColor(colors) => {
            sink.add_longhand("border-left-color", parse_color(&colors.start));
            sink.add_longhand("border-right-color", parse_color(&colors.end));
        }
        Property::BorderInlineWidth(widths) => {
            sink.add_longhand("border-left-width", parse_border_side_width(&widths.start, o));
            sink.add_longhand("border-right-width", parse_border_side_width(&widths.end, o));
        }
        Property::Border(border) => {
            sink.add_shorthand("border-width", parse_border_side_width(&border.width, o));
            sink.add_shorthand("border-style", parse_line_style(border.style));
            sink.add_shorthand("border-color", parse_color(&border.color));
        }
        Property::BorderTop(border) | Property::BorderBlockStart(border) => {
            add_border_sides(sink, &["top"], border, o)
        }
        Property::BorderBottom(border) | Property::BorderBlockEnd(border) => {
            add_border_sides(sink, &["bottom"], border, o)
        }
        Property::BorderLeft(border) | Property::BorderInlineStart(border) => {
            add_border_sides(sink, &["left"], border, o)
        }
        Property::BorderRight(border) | Property::BorderInlineEnd(border) => {
            add_border_sides(sink, &["right"], border, o)
        }
        Property::BorderBlock(border) => add_border_sides(sink, &["top", "bottom"], border, o),
        Property::BorderInline(border) => add_border_sides(sink, &["left", "right"], border, o),

        Property::FlexDirection(direction) => {
            sink.add_longhand("flex-direction", Some(direction.as_str().into()))
        }
        Property::FlexWrap(wrap) => sink.add_longhand("flex-wrap", Some(wrap.as_str().into())),
        Property::FlexFlow(flow) => {
            sink.add_longhand("flex-wrap", Some(flow.wrap.as_str().into()));
            sink.add_longhand("flex-direction", Some(flow.direction.as_str().into()));
        }
        Property::FlexGrow(grow) => sink.add_longhand("flex-grow", Some(StyleValue::from_f32(*grow))),
        Property::FlexShrink(shrink) => {
            sink.add_longhand("flex-shrink", Some(StyleValue::from_f32(*shrink)))
        }
        Property::FlexBasis(basis) => {
            sink.add_longhand("flex-basis", parse_length_percentage_or_auto(basis, o))
        }
        Property::Flex(flex) => {
            sink.add_longhand("flex-grow", Some(StyleValue::from_f32(flex.grow)));
            sink.add_longhand("flex-shrink", Some(StyleValue::from_f32(flex.shrink)));
            sink.add_longhand("flex-basis", parse_length_percentage_or_auto(&flex.basis, o));
        }
        Property::AlignContent(value) => sink.add_longhand("align-content", parse_align_content(value)),
        Property::JustifyContent(value) => {
            sink.add_longhand("justify-content", parse_justify_content(value))
        }
        Property::AlignSelf(value) => sink.add_longhand("align-self", parse_align_self(value)),
        Property::AlignItems(value) => sink.add_longhand("align-items", parse_align_items(value)),
        Property::RowGap(gap) => sink.add_longhand("row-gap", parse_gap(gap, o)),
        Property::ColumnGap(gap) => sink.add_longhand("column-gap", parse_gap(gap, o)),
        Property::Gap(gap) => {
            sink.add_longhand("row-gap", parse_gap(&gap.row, o));
            sink.add_longhand("column-gap", parse_gap(&gap.column, o));
        }

        Property::MarginTop(value) => sink.add_longhand("margin-top", parse_offset(value, o)),
        Property::MarginBottom(value) => sink.add_longhand("margin-bottom", parse_offset(value, o)),
        Property::MarginLeft(value) => sink.add_longhand("margin-left", parse_offset(value, o)),
        Property::MarginRight(value) => sink.add_longhand("margin-right", parse_offset(value, o)),
        Property::MarginBlockStart(value) => {
            sink.add_longhand("margin-block-start", parse_length_percentage_or_auto(value, o))
        }
        Property::MarginBlockEnd(value) => {
            sink.add_longhand("margin-block-end", parse_length_percentage_or_auto(value, o))
        }
        Property::MarginInlineStart(value) => {
            sink.add_longhand("margin-inline-start", parse_length_percentage_or_auto(value, o))
        }
        Property::MarginInlineEnd(value) => {
            sink.add_longhand("margin-inline-end", parse_length_percentage_or_auto(value, o))
        }
        Property::MarginBlock(value) => {
            sink.add_shorthand("margin-block-start", parse_length_percentage_or_auto(&value.start, o));
            sink.add_shorthand("margin-block-end", parse_length_percentage_or_auto(&value.end, o));
        }
        Property::MarginInline(value) => {
            sink.add_shorthand("margin-inline-start", parse_length_percentage_or_auto(&value.start, o));
            sink.add_shorthand("margin-inline-end", parse_length_percentage_or_auto(&value.end, o));
        }
        Property::Margin(rect) => {
            sink.add_longhand("margin-top", parse_offset(&rect.top, o));
            sink.add_longhand("margin-left", parse_offset(&rect.left, o));
            sink.add_longhand("margin-right", parse_offset(&rect.right, o));
            sink.add_longhand("margin-bottom", parse_offset(&rect.bottom, o));
        }
        Property::PaddingTop(value) => sink.add_longhand("padding-top", parse_length_percentage(value, o)),
        Property::PaddingBottom(value) => {
            sink.add_longhand("padding-bottom", parse_length_percentage(value, o))
        }
        Property::PaddingLeft(value) => sink.add_longhand("padding-left", parse_length_percentage(value, o)),
        Property::PaddingRight(value) => {
            sink.add_longhand("padding-right", parse_length_percentage(value, o))
        }
        Property::PaddingBlockStart(value) => {
            sink.add_longhand("padding-block-start", parse_length_percentage_or_auto(value, o))
        }
        Property::PaddingBlockEnd(value) => {
            sink.add_longhand("padding-block-end", parse_length_percentage_or_auto(value, o))
        }
        Property::PaddingInlineStart(value) => {
            sink.add_longhand("padding-inline-start", parse_length_percentage_or_auto(value, o))
        }
        Property::PaddingInlineEnd(value) => {
            sink.add_longhand("padding-inline-end", parse_length_percentage_or_auto(value, o))
        }
        Property::PaddingBlock(value) => {
            sink.add_shorthand("padding-block-start", parse_length_percentage_or_auto(&value.start, o));
            sink.add_shorthand("padding-block-end", parse_length_percentage_or_auto(&value.end, o));
        }
        Property::PaddingInline(value) => {
            sink.add_shorthand("padding-inline-start", parse_length_percentage_or_auto(&value.start, o));
            sink.add_shorthand("padding-inline-end", parse_length_percentage_or_auto(&value.end, o));
        }
        Property::Padding(rect) => {
            sink.add_longhand("padding-top", parse_length_percentage(&rect.top, o));
            sink.add_longhand("padding-left", parse_length_percentage(&rect.left, o));
            sink.add_longhand("padding-right", parse_length_percentage(&rect.right, o));
            sink.add_longhand("padding-bottom", parse_length_percentage(&rect.bottom, o));
        }

        Property::FontWeight(weight) => sink.add_longhand("font-weight", parse_font_weight(weight)),
        Property::FontSize(size) => sink.add_longhand("font-size", parse_font_size(size, o)),
        Property::FontFamily(family) => sink.add_longhand("font-family", parse_font_family(family)),
        Property::FontStyle(style) => sink.add_longhand("font-style", parse_font_style(style)),
        Property::FontVariantCaps(caps) => {
            sink.add_longhand("font-variant-caps", parse_font_variant_caps(*caps))
        }
        Property::LineHeight(line_height) => {
            sink.add_longhand("line-height", parse_line_height(line_height, o))
        }
        Property::Font(font) => {
            sink.add_shorthand("font-family", parse_font_family(&font.family));
            sink.add_shorthand("line-height", parse_line_height(&font.line_height, o));
            sink.add_shorthand("font-size", parse_font_size(&font.size, o));
            sink.add_shorthand("font-style", parse_font_style(&font.style));
            sink.add_shorthand("font-variant", parse_font_variant_caps(font.variant_caps));
            sink.add_shorthand("font-weight", parse_font_weight(&font.weight));
        }
        Property::VerticalAlign(value) => {
            sink.add_longhand("vertical-align", parse_vertical_align(value))
        }

        Property::TransitionProperty(names) => {
            sink.add_transition_prop(TransitionDeclaration::Property(names))
        }
        Property::TransitionDuration(times) => {
            sink.add_transition_prop(TransitionDeclaration::Duration(times))
        }
        Property::TransitionDelay(times) => sink.add_transition_prop(TransitionDeclaration::Delay(times)),
        Property::TransitionTimingFunction(easings) => {
            sink.add_transition_prop(TransitionDeclaration::TimingFunction(easings))
        }
        Property::Transition(transitions) => {
            sink.add_transition_prop(TransitionDeclaration::Shorthand(transitions))
        }
        Property::AnimationName(names) => sink.add_animation_prop(AnimationDeclaration::Name(names)),
        Property::AnimationDuration(times) => {
            sink.add_animation_prop(AnimationDeclaration::Duration(times))
        }
        Property::AnimationTimingFunction(easings) => {
            sink.add_animation_prop(AnimationDeclaration::TimingFunction(easings))
        }
        Property::AnimationIterationCount(counts) => {
            sink.add_animation_prop(AnimationDeclaration::IterationCount(counts))
        }
        Property::AnimationDirection(directions) => {
            sink.add_animation_prop(AnimationDeclaration::Direction(directions))
        }
        Property::AnimationPlayState(states) => {
            sink.add_animation_prop(AnimationDeclaration::PlayState(states))
        }
        Property::AnimationDelay(times) => sink.add_animation_prop(AnimationDeclaration::Delay(times)),
        Property::AnimationFillMode(modes) => {
            sink.add_animation_prop(AnimationDeclaration::FillMode(modes))
        }
        Property::Animation(animations) => {
            sink.add_animation_prop(AnimationDeclaration::Shorthand(animations))
        }

        Property::Transform(list) => {
            let transforms = parse_transform_list(list, o, sink);
            sink.add_longhand("transform", Some(StyleValue::Array(transforms)));
        }
        Property::Translate(translate) => {
            let transforms = parse_translate(translate, o, sink);
            append_transforms(sink, transforms);
        }
        Property::Rotate(rotate) => append_transforms(sink, parse_rotate(rotate).into_iter().collect()),
        Property::Scale(scale) => {
            let transforms = parse_scale(scale, sink);
            append_transforms(sink, transforms);
        }

        Property::TextTransform(transform) => {
            sink.add_longhand("text-transform", Some(transform.case.as_str().into()))
        }
        Property::TextAlign(align) => sink.add_longhand("text-align", parse_text_align(*align)),
        Property::LetterSpacing(spacing) => match spacing {
            LetterSpacing::Length(length) => sink.add_longhand("letter-spacing", parse_length(length, o)),
            LetterSpacing::Normal => {}
        },
        Property::TextDecorationLine(line) => {
            sink.add_longhand("text-decoration-line", parse_text_decoration_line(line))
        }
        Property::TextDecorationColor(color) => {
            sink.add_longhand("text-decoration-color", parse_color(color))
        }
        Property::TextDecorationThickness(thickness) => sink.add_longhand(
            "text-decoration-thickness",
            parse_text_decoration_thickness(thickness, o),
        ),
        Property::TextDecoration(decoration) => {
            sink.add_longhand("text-decoration-color", parse_color(&decoration.color));
            sink.add_longhand("text-decoration-line", parse_text_decoration_line(&decoration.line));
            sink.add_longhand(
                "text-decoration-thickness",
                parse_text_decoration_thickness(&decoration.thickness, o),
            );
        }
        Property::TextShadow(shadows) => add_text_shadow(sink, shadows, o),

        Property::ZIndex(z_index) => match z_index {
            ZIndex::Integer(value) => sink.add_longhand("z-index", Some(f64::from(*value).into())),
            ZIndex::Auto => {}
        },
        Property::ContainerType(container_type) => {
            sink.add_container_prop(ContainerDeclaration::Type(*container_type))
        }
        Property::ContainerName(name) => sink.add_container_prop(ContainerDeclaration::Name(name)),
        Property::Container(container) => {
            sink.add_container_prop(ContainerDeclaration::Shorthand(container))
        }

        // Typed properties with no equivalent on the target
        Property::OverflowX(_)
        | Property::OverflowY(_)
        | Property::BorderTopStyle(_)
        | Property::BorderBottomStyle(_)
        | Property::BorderLeftStyle(_)
        | Property::BorderRightStyle(_)
        | Property::BorderBlockStartStyle(_)
        | Property::BorderBlockEndStyle(_)
        | Property::BorderInlineStartStyle(_)
        | Property::BorderInlineEndStyle(_)
        | Property::BorderBlockStyle(_)
        | Property::BorderInlineStyle(_)
        | Property::Order(_)
        | Property::TextDecorationStyle(_) => {}

        Property::BackgroundImage(_)
        | Property::BackgroundPositionX(_)
        | Property::BackgroundPositionY(_)
        | Property::BackgroundPosition(_)
        | Property::BackgroundSize(_)
        | Property::BackgroundRepeat(_)
        | Property::BackgroundAttachment(_)
        | Property::BackgroundClip(_)
        | Property::BackgroundOrigin(_)
        | Property::Background(_)
        | Property::BoxShadow(_)
        | Property::Visibility(_)
        | Property::BoxSizing(_)
        | Property::TextOverflow(_)
        | Property::Position(_)
        | Property::BorderSpacing(_)
        | Property::BorderImageSource(_)
        | Property::BorderImageOutset(_)
        | Property::BorderImageRepeat(_)
        | Property::BorderImageWidth(_)
        | Property::BorderImageSlice(_)
        | Property::BorderImage(_)
        | Property::Outline(_)
        | Property::OutlineColor(_)
        | Property::OutlineStyle(_)
        | Property::OutlineWidth(_)
        | Property::PlaceContent(_)
        | Property::JustifySelf(_)
        | Property::PlaceSelf(_)
        | Property::JustifyItems(_)
        | Property::PlaceItems(_)
        | Property::BoxOrient(_)
        | Property::BoxDirection(_)
        | Property::BoxOrdinalGroup(_)
        | Property::BoxAlign(_)
        | Property::BoxFlex(_)
        | Property::BoxFlexGroup(_)
        | Property::BoxPack(_)
        | Property::BoxLines(_)
        | Property::FlexPack(_)
        | Property::FlexOrder(_)
        | Property::FlexAlign(_)
        | Property::FlexItemAlign(_)
        | Property::FlexLinePack(_)
        | Property::FlexPositive(_)
        | Property::FlexNegative(_)
        | Property::FlexPreferredSize(_)
        | Property::GridTemplateColumns(_)
        | Property::GridTemplateRows(_)
        | Property::GridAutoColumns(_)
        | Property::GridAutoRows(_)
        | Property::GridAutoFlow(_)
        | Property::GridTemplateAreas(_)
        | Property::GridTemplate(_)
        | Property::Grid(_)
        | Property::GridRowStart(_)
        | Property::GridRowEnd(_)
        | Property::GridColumnStart(_)
        | Property::GridColumnEnd(_)
        | Property::GridRow(_)
        | Property::GridColumn(_)
        | Property::GridArea(_)
        | Property::ScrollMarginTop(_)
        | Property::ScrollMarginBottom(_)
        | Property::ScrollMarginLeft(_)
        | Property::ScrollMarginRight(_)
        | Property::ScrollMarginBlockStart(_)
        | Property::ScrollMarginBlockEnd(_)
        | Property::ScrollMarginInlineStart(_)
        | Property::ScrollMarginInlineEnd(_)
        | Property::ScrollMarginBlock(_)
        | Property::ScrollMarginInline(_)
        | Property::ScrollMargin(_)
        | Property::ScrollPaddingTop(_)
        | Property::ScrollPaddingBottom(_)
        | Property::ScrollPaddingLeft(_)
        | Property::ScrollPaddingRight(_)
        | Property::ScrollPaddingBlockStart(_)
        | Property::ScrollPaddingBlockEnd(_)
        | Property::ScrollPaddingInlineStart(_)
        | Property::ScrollPaddingInlineEnd(_)
        | Property::ScrollPaddingBlock(_)
        | Property::ScrollPaddingInline(_)
        | Property::ScrollPadding(_)
        | Property::FontStretch(_)
        | Property::FontPalette(_)
        | Property::TransformOrigin(_)
        | Property::TransformStyle(_)
        | Property::TransformBox(_)
        | Property::BackfaceVisibility(_)
        | Property::Perspective(_)
        | Property::PerspectiveOrigin(_)
        | Property::WhiteSpace(_)
        | Property::TabSize(_)
        | Property::WordBreak(_)
        | Property::LineBreak(_)
        | Property::Hyphens(_)
        | Property::OverflowWrap(_)
        | Property::WordWrap(_)
        | Property::TextAlignLast(_)
        | Property::TextJustify(_)
        | Property::WordSpacing(_)
        | Property::TextIndent(_)
        | Property::TextDecorationSkipInk(_)
        | Property::TextEmphasisStyle(_)
        | Property::TextEmphasisColor(_)
        | Property::TextEmphasis(_)
        | Property::TextEmphasisPosition(_)
        | Property::BoxDecorationBreak(_)
        | Property::Resize(_)
        | Property::Cursor(_)
        | Property::CaretColor(_)
        | Property::CaretShape(_)
        | Property::Caret(_)
        | Property::UserSelect(_)
        | Property::AccentColor(_)
        | Property::Appearance(_)
        | Property::ListStyleType(_)
        | Property::ListStyleImage(_)
        | Property::ListStylePosition(_)
        | Property::ListStyle(_)
        | Property::MarkerSide(_)
        | Property::Composes(_)
        | Property::Fill(_)
        | Property::FillRule(_)
        | Property::FillOpacity(_)
        | Property::Stroke(_)
        | Property::StrokeOpacity(_)
        | Property::StrokeWidth(_)
        | Property::StrokeLinecap(_)
        | Property::StrokeLinejoin(_)
        | Property::StrokeMiterlimit(_)
        | Property::StrokeDasharray(_)
        | Property::StrokeDashoffset(_)
        | Property::MarkerStart(_)
        | Property::MarkerMid(_)
        | Property::MarkerEnd(_)
        | Property::Marker(_)
        | Property::ColorInterpolation(_)
        | Property::ColorInterpolationFilters(_)
        | Property::ColorRendering(_)
        | Property::ShapeRendering(_)
        | Property::TextRendering(_)
        | Property::ImageRendering(_)
        | Property::ClipPath(_)
        | Property::ClipRule(_)
        | Property::MaskImage(_)
        | Property::MaskMode(_)
        | Property::MaskRepeat(_)
        | Property::MaskPositionX(_)
        | Property::MaskPositionY(_)
        | Property::MaskPosition(_)
        | Property::MaskClip(_)
        | Property::MaskOrigin(_)
        | Property::MaskSize(_)
        | Property::MaskComposite(_)
        | Property::MaskType(_)
        | Property::Mask(_)
        | Property::MaskBorderSource(_)
        | Property::MaskBorderMode(_)
        | Property::MaskBorderSlice(_)
        | Property::MaskBorderWidth(_)
        | Property::MaskBorderOutset(_)
        | Property::MaskBorderRepeat(_)
        | Property::MaskBorder(_)
        | Property::WebkitMaskComposite(_)
        | Property::MaskSourceType(_)
        | Property::MaskBoxImage(_)
        | Property::MaskBoxImageSource(_)
        | Property::MaskBoxImageSlice(_)
        | Property::MaskBoxImageWidth(_)
        | Property::MaskBoxImageOutset(_)
        | Property::MaskBoxImageRepeat(_)
        | Property::Filter(_)
        | Property::BackdropFilter(_) => {}
    }
}

fn add_unparsed<S>(sink: &mut S, name: &str, value: &TokenList, options: &CompileOptions)
where
    S: DeclarationSink + ?Sized,
{
    if let Some(keyword) = value.as_single_ident()
        && CSS_WIDE_KEYWORDS
            .iter()
            .any(|wide| keyword.eq_ignore_ascii_case(wide))
    {
        debug!(property = name, keyword, "Skipping CSS-wide keyword");
        return;
    }
    sink.add_longhand(name, parse_unparsed(value, options));
}

fn parse_display(display: &Display) -> Option<StyleValue> {
    match display {
        Display::Keyword(keyword) if keyword == "none" => Some("none".into()),
        Display::Pair {
            inside: DisplayInside::Flex,
            ..
        } => Some("flex".into()),
        Display::Keyword(_) | Display::Pair { .. } => None,
    }
}

fn add_border_sides<S>(sink: &mut S, sides: &[&str], border: &Border, options: &CompileOptions)
where
    S: DeclarationSink + ?Sized,
{
    for side in sides {
        sink.add_longhand(&format!("border-{side}-color"), parse_color(&border.color));
        sink.add_longhand(
            &format!("border-{side}-width"),
            parse_border_side_width(&border.width, options),
        );
    }
}

/// Only the first shadow is representable.
fn add_text_shadow<S>(sink: &mut S, shadows: &TextShadowList, options: &CompileOptions)
where
    S: DeclarationSink + ?Sized,
{
    let Some(shadow) = shadows.0.first() else {
        return;
    };
    sink.add_longhand("text-shadow-color", parse_color(&shadow.color));

    let mut offset = indexmap::IndexMap::new();
    if let Some(width) = parse_length(&shadow.x_offset, options) {
        offset.insert("width".to_string(), width);
    }
    if let Some(height) = parse_length(&shadow.y_offset, options) {
        offset.insert("height".to_string(), height);
    }
    if !offset.is_empty() {
        sink.add_longhand("text-shadow-offset", Some(StyleValue::Object(offset)));
    }
    sink.add_longhand("text-shadow-radius", parse_length(&shadow.blur, options));
}

fn append_transforms<S>(sink: &mut S, transforms: Vec<StyleValue>)
where
    S: DeclarationSink + ?Sized,
{
    if !transforms.is_empty() {
        sink.add_style_prop(
            "transform",
            Some(StyleValue::Array(transforms)),
            PropOptions::APPEND,
        );
    }
}

/// Each transform function becomes a single-key object. Functions without
/// a 2D equivalent are dropped.
fn parse_transform_list<S>(list: &TransformList, options: &CompileOptions, sink: &mut S) -> Vec<StyleValue>
where
    S: DeclarationSink + ?Sized,
{
    let mut transforms = Vec::new();
    let mut push = |name: &str, value: Option<StyleValue>| {
        if let Some(value) = value {
            transforms.push(StyleValue::entry(name, value));
        }
    };

    for transform in &list.0 {
        match transform {
            Transform::Perspective(length) => push("perspective", parse_length(length, options)),
            Transform::TranslateX(x) => push("translateX", layout_length(x, "cw", options, sink)),
            Transform::TranslateY(y) => push("translateY", layout_length(y, "ch", options, sink)),
            Transform::ScaleX(x) => push("scaleX", layout_number(x, "cw", sink)),
            Transform::ScaleY(y) => push("scaleY", layout_number(y, "ch", sink)),
            Transform::Rotate(angle) => push("rotate", parse_angle(angle)),
            Transform::RotateX(angle) => push("rotateX", parse_angle(angle)),
            Transform::RotateY(angle) => push("rotateY", parse_angle(angle)),
            Transform::RotateZ(angle) => push("rotateZ", parse_angle(angle)),
            Transform::SkewX(angle) => push("skewX", parse_angle(angle)),
            Transform::SkewY(angle) => push("skewY", parse_angle(angle)),
            Transform::Translate(x, y) => {
                push("translateX", parse_length_percentage(x, options));
                push("translateY", parse_length_percentage(y, options));
            }
            Transform::Scale(x, y) => {
                push("scaleX", Some(StyleValue::from_f32(x.value())));
                push("scaleY", Some(StyleValue::from_f32(y.value())));
            }
            Transform::Skew(x, y) => {
                push("skewX", parse_angle(x));
                push("skewY", parse_angle(y));
            }
            Transform::TranslateZ(_)
            | Transform::Translate3d(..)
            | Transform::ScaleZ(_)
            | Transform::Scale3d(..)
            | Transform::Rotate3d(..)
            | Transform::Matrix(_)
            | Transform::Matrix3d(_) => {}
        }
    }
    transforms
}

fn parse_translate<S>(translate: &Translate, options: &CompileOptions, sink: &mut S) -> Vec<StyleValue>
where
    S: DeclarationSink + ?Sized,
{
    let Translate::Xyz { x, y, .. } = translate else {
        return Vec::new();
    };
    [
        ("translateX", layout_length(x, "cw", options, sink)),
        ("translateY", layout_length(y, "ch", options, sink)),
    ]
    .into_iter()
    .filter_map(|(name, value)| Some(StyleValue::entry(name, value?)))
    .collect()
}

/// Rotation about one of the three axes; any other axis has no 2D form.
fn parse_rotate(rotate: &Rotate) -> Option<StyleValue> {
    let name = match (rotate.x, rotate.y, rotate.z) {
        (x, y, z) if x == 0.0 && y == 0.0 && z != 0.0 => "rotate",
        (x, y, z) if x != 0.0 && y == 0.0 && z == 0.0 => "rotateX",
        (x, y, z) if x == 0.0 && y != 0.0 && z == 0.0 => "rotateY",
        _ => return None,
    };
    Some(StyleValue::entry(name, parse_angle(&rotate.angle)?))
}

fn parse_scale<S>(scale: &Scale, sink: &mut S) -> Vec<StyleValue>
where
    S: DeclarationSink + ?Sized,
{
    let Scale::Xyz { x, y, .. } = scale else {
        return Vec::new();
    };
    [
        ("scaleX", layout_number(x, "cw", sink)),
        ("scaleY", layout_number(y, "ch", sink)),
    ]
    .into_iter()
    .filter_map(|(name, value)| Some(StyleValue::entry(name, value?)))
    .collect()
}

/// A percentage along an axis is relative to the element's own size.
fn layout_length<S>(
    value: &LengthPercentage,
    axis: &str,
    options: &CompileOptions,
    sink: &mut S,
) -> Option<StyleValue>
where
    S: DeclarationSink + ?Sized,
{
    match value {
        LengthPercentage::Percentage(fraction) => {
            sink.requires_layout();
            Some(StyleValue::runtime(axis, vec![StyleValue::from_f32(*fraction)]))
        }
        other => parse_length_percentage(other, options),
    }
}

fn layout_number<S>(value: &NumberOrPercentage, axis: &str, sink: &mut S) -> Option<StyleValue>
where
    S: DeclarationSink + ?Sized,
{
    match value {
        NumberOrPercentage::Percentage(fraction) => {
            sink.requires_layout();
            Some(StyleValue::runtime(axis, vec![StyleValue::from_f32(*fraction)]))
        }
        NumberOrPercentage::Number(number) => Some(StyleValue::from_f32(*number)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accumulator::StyleAccumulator;
    use crate::style::ExtractedStyle;
    use native_css_parser::{CssRule, ParserOptions, StyleSheet};
    use pretty_assertions::assert_eq;

    fn compile_block(css: &str, options: &CompileOptions) -> ExtractedStyle {
        let sheet = StyleSheet::parse(&format!(".a {{ {css} }}"), ParserOptions::default()).unwrap();
        let CssRule::Style(rule) = &sheet.rules[0] else {
            panic!("expected a style rule");
        };
        let mut accumulator = StyleAccumulator::new();
        for declaration in rule.declarations.iter() {
            parse_declaration(declaration, options, &mut accumulator);
        }
        accumulator.finish()
    }

    fn style(css: &str) -> serde_json::Value {
        serde_json::to_value(&compile_block(css, &CompileOptions::default()).style).unwrap()
    }

    #[test]
    fn colors_and_numbers() {
        assert_eq!(
            style("color: rgb(10,20,30,0.5); opacity: 0.25"),
            serde_json::json!({ "color": "rgba(10, 20, 30, 0.5)", "opacity": 0.25 })
        );
    }

    #[test]
    fn logical_sizes_map_to_physical() {
        assert_eq!(
            style("block-size: 10px; inline-size: 20px; min-inline-size: 5px"),
            serde_json::json!({ "height": 10, "width": 20, "minWidth": 5 })
        );
    }

    #[test]
    fn shorthand_does_not_clobber_an_earlier_longhand() {
        assert_eq!(
            style("border-top-color: red; border-color: blue"),
            serde_json::json!({
                "borderTopColor": "rgba(255, 0, 0, 1)",
                "borderBottomColor": "rgba(0, 0, 255, 1)",
                "borderLeftColor": "rgba(0, 0, 255, 1)",
                "borderRightColor": "rgba(0, 0, 255, 1)",
            })
        );
    }

    #[test]
    fn longhand_after_shorthand_wins() {
        assert_eq!(
            style("inset-block: 4px; inset-block-start: 8px"),
            serde_json::json!({ "insetBlockStart": 8, "insetBlockEnd": 4 })
        );
    }

    #[test]
    fn margin_keeps_auto() {
        assert_eq!(
            style("margin: 0 auto"),
            serde_json::json!({
                "marginTop": 0,
                "marginLeft": "auto",
                "marginRight": "auto",
                "marginBottom": 0,
            })
        );
    }

    #[test]
    fn unsupported_values_are_omitted() {
        assert_eq!(
            style("width: 3em; display: grid; color: currentcolor; position: absolute"),
            serde_json::json!({})
        );
    }

    #[test]
    fn display_flex_and_none() {
        assert_eq!(style("display: flex"), serde_json::json!({ "display": "flex" }));
        assert_eq!(style("display: none"), serde_json::json!({ "display": "none" }));
    }

    #[test]
    fn alignment_keywords() {
        assert_eq!(
            style("justify-content: space-between; align-items: center; align-self: auto"),
            serde_json::json!({
                "justifyContent": "space-between",
                "alignItems": "center",
                "alignSelf": "auto",
            })
        );
    }

    #[test]
    fn gap_fills_both_axes() {
        assert_eq!(
            style("gap: 4px 8px"),
            serde_json::json!({ "rowGap": 4, "columnGap": 8 })
        );
    }

    #[test]
    fn font_shorthand_expands() {
        assert_eq!(
            style("font: italic bold 16px/2 Inter"),
            serde_json::json!({
                "fontFamily": "Inter",
                "lineHeight": { "type": "runtime", "name": "em", "arguments": [2] },
                "fontSize": 16,
                "fontStyle": "italic",
                "fontWeight": "bold",
            })
        );
    }

    #[test]
    fn transform_functions() {
        let compiled = compile_block(
            "transform: translateX(50%) rotate(45deg) scale(2) matrix3d(1,0,0,0,0,1,0,0,0,0,1,0,0,0,0,1)",
            &CompileOptions::default(),
        );
        assert!(compiled.requires_layout);
        assert!(compiled.is_dynamic);
        assert_eq!(
            serde_json::to_value(&compiled.style).unwrap(),
            serde_json::json!({
                "transform": [
                    { "translateX": { "type": "runtime", "name": "cw", "arguments": [0.5] } },
                    { "rotate": "45deg" },
                    { "scaleX": 2 },
                    { "scaleY": 2 },
                ]
            })
        );
    }

    #[test]
    fn individual_transform_properties_append() {
        assert_eq!(
            style("transform: rotate(10deg); translate: 5px 6px"),
            serde_json::json!({
                "transform": [
                    { "rotate": "10deg" },
                    { "translateX": 5 },
                    { "translateY": 6 },
                ]
            })
        );
    }

    #[test]
    fn text_shadow_uses_the_first_shadow() {
        assert_eq!(
            style("text-shadow: 1px 2px 3px red, 4px 4px blue"),
            serde_json::json!({
                "textShadowColor": "rgba(255, 0, 0, 1)",
                "textShadowOffset": { "width": 1, "height": 2 },
                "textShadowRadius": 3,
            })
        );
    }

    #[test]
    fn custom_properties_become_variables() {
        let compiled = compile_block("--brand: 10px; width: var(--brand)", &CompileOptions::default());
        assert_eq!(compiled.variables["--brand"], StyleValue::Number(10.0));
        assert_eq!(
            compiled.style["width"],
            StyleValue::runtime("var", vec!["--brand".into()])
        );
        assert!(compiled.is_dynamic);
    }

    #[test]
    fn css_wide_keywords_are_skipped() {
        assert_eq!(style("color: inherit; width: initial"), serde_json::json!({}));
    }

    #[test]
    fn z_index_and_text_align() {
        assert_eq!(
            style("z-index: 3; text-align: center"),
            serde_json::json!({ "zIndex": 3, "textAlign": "center" })
        );
    }
}
