//! `@keyframes` compilation.

use crate::accumulator::StyleAccumulator;
use crate::declaration::parse_declaration;
use crate::options::CompileOptions;
use crate::style::{ExtractedAnimation, ExtractedKeyframe, finite};
use indexmap::IndexMap;
use native_css_parser::KeyframesRule;
use tracing::debug;

/// Compile the frames of `rule`, sorted by offset.
///
/// An animation with a single frame gets an empty frame at offset 0 so it
/// always has a start and an end.
pub fn extract_keyframes(rule: &KeyframesRule, options: &CompileOptions) -> ExtractedAnimation {
    let mut animation = ExtractedAnimation::default();

    for keyframe in &rule.keyframes {
        let mut accumulator = StyleAccumulator::new();
        for declaration in keyframe.declarations.iter() {
            parse_declaration(declaration, options, &mut accumulator);
        }
        let extracted = accumulator.finish();
        animation.requires_layout |= extracted.requires_layout;

        for selector in &keyframe.selectors {
            let Some(offset) = finite(selector.offset()) else {
                debug!(animation = %rule.name, "Dropping keyframe with a non-finite offset");
                continue;
            };
            animation.frames.push(ExtractedKeyframe {
                selector: offset,
                style: extracted.style.clone(),
            });
        }
    }

    if animation.frames.len() == 1 {
        animation.frames.push(ExtractedKeyframe {
            selector: 0.0,
            style: IndexMap::new(),
        });
    }

    // Stable, so frames sharing an offset keep source order
    animation
        .frames
        .sort_by(|a, b| a.selector.total_cmp(&b.selector));

    animation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleValue;
    use native_css_parser::{CssRule, ParserOptions, StyleSheet};
    use pretty_assertions::assert_eq;

    fn keyframes(css: &str) -> ExtractedAnimation {
        let sheet = StyleSheet::parse(css, ParserOptions::default()).unwrap();
        let CssRule::Keyframes(rule) = &sheet.rules[0] else {
            panic!("expected a keyframes rule");
        };
        extract_keyframes(rule, &CompileOptions::default())
    }

    fn offsets(animation: &ExtractedAnimation) -> Vec<f64> {
        animation.frames.iter().map(|frame| frame.selector).collect()
    }

    #[test]
    fn frames_are_sorted() {
        let animation = keyframes(
            "@keyframes fade { to { opacity: 1 } from { opacity: 0 } 50% { opacity: 0.5 } }",
        );
        assert_eq!(offsets(&animation), vec![0.0, 0.5, 1.0]);
        assert_eq!(animation.frames[1].style["opacity"], StyleValue::Number(0.5));
    }

    #[test]
    fn single_frame_gets_an_empty_start() {
        let animation = keyframes("@keyframes grow { to { width: 100px } }");
        assert_eq!(offsets(&animation), vec![0.0, 1.0]);
        assert!(animation.frames[0].style.is_empty());
        assert_eq!(animation.frames[1].style["width"], StyleValue::Number(100.0));
    }

    #[test]
    fn shared_declarations_fan_out_to_each_selector() {
        let animation = keyframes(
            "@keyframes pulse { 0%, 100% { opacity: 1 } 50% { opacity: 0.2 } }",
        );
        assert_eq!(offsets(&animation), vec![0.0, 0.5, 1.0]);
        assert_eq!(animation.frames[0].style, animation.frames[2].style);
    }

    #[test]
    fn overflowing_offsets_are_dropped() {
        let animation = keyframes("@keyframes odd { 1e45% { opacity: 1 } to { opacity: 0 } }");
        assert_eq!(offsets(&animation), vec![0.0, 1.0]);
        assert!(animation.frames[0].style.is_empty());
    }

    #[test]
    fn percentage_transforms_need_layout() {
        let animation = keyframes(
            "@keyframes slide { from { transform: translateX(-100%) } to { transform: translateX(0) } }",
        );
        assert!(animation.requires_layout);
    }
}
