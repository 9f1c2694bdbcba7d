//! End-to-end tests for stylesheet compilation.

use native_css::style::{StyleDeclaration, StyleSheetRegistration, StyleValue};
use native_css::{CompileOptions, Error, compile};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn compile_str(css: &str) -> StyleSheetRegistration {
    compile_with(css, &CompileOptions::default())
}

fn compile_with(css: &str, options: &CompileOptions) -> StyleSheetRegistration {
    init_tracing();
    compile(css.as_bytes(), options).unwrap()
}

fn declaration(output: &StyleSheetRegistration, class_name: &str) -> Value {
    serde_json::to_value(&output.declarations[class_name]).unwrap()
}

#[test]
fn test_single_class() {
    let output = compile_str(".title { color: red; opacity: 0.5 }");
    assert_eq!(
        declaration(&output, "title"),
        json!({ "style": { "color": "rgba(255, 0, 0, 1)", "opacity": 0.5 } })
    );
    assert!(output.keyframes.is_empty());
}

#[test]
fn test_rgb_with_alpha() {
    let output = compile_str(".a { color: rgb(10,20,30,0.5) }");
    assert_eq!(
        declaration(&output, "a"),
        json!({ "style": { "color": "rgba(10, 20, 30, 0.5)" } })
    );
}

#[test]
fn test_longhand_after_shorthand_overrides() {
    let output = compile_str(".a { border-color: blue; border-top-color: red }");
    assert_eq!(
        declaration(&output, "a"),
        json!({
            "style": {
                "borderTopColor": "rgba(255, 0, 0, 1)",
                "borderBottomColor": "rgba(0, 0, 255, 1)",
                "borderLeftColor": "rgba(0, 0, 255, 1)",
                "borderRightColor": "rgba(0, 0, 255, 1)",
            }
        })
    );
}

#[test]
fn test_rem_units() {
    let output = compile_str(".a { width: 2rem }");
    assert_eq!(declaration(&output, "a"), json!({ "style": { "width": 28 } }));

    let options = CompileOptions {
        inline_rem: Some(16.0),
        ..Default::default()
    };
    let output = compile_with(".a { width: 2rem }", &options);
    assert_eq!(declaration(&output, "a"), json!({ "style": { "width": 32 } }));

    let options = CompileOptions {
        inline_rem: None,
        ..Default::default()
    };
    let output = compile_with(".a { width: 2rem }", &options);
    assert_eq!(
        declaration(&output, "a"),
        json!({
            "style": { "width": { "type": "runtime", "name": "rem", "arguments": [2] } },
            "isDynamic": true,
        })
    );
}

#[test]
fn test_viewport_units_are_dynamic() {
    let output = compile_str(".a { height: 50vh }");
    assert_eq!(
        declaration(&output, "a"),
        json!({
            "style": { "height": { "type": "runtime", "name": "vh", "arguments": [50] } },
            "isDynamic": true,
        })
    );
}

#[test]
fn test_variables() {
    let output = compile_str(".a { --gap: 4px; margin-top: var(--gap) }");
    assert_eq!(
        declaration(&output, "a"),
        json!({
            "style": {
                "marginTop": { "type": "runtime", "name": "var", "arguments": ["--gap"] }
            },
            "variables": { "--gap": 4 },
            "isDynamic": true,
        })
    );
}

#[test]
fn test_hover_adds_a_second_style() {
    let output = compile_str(".button { color: red } .button:hover { color: blue }");
    let StyleDeclaration::Multiple(styles) = &output.declarations["button"] else {
        panic!("expected two styles for button");
    };
    assert_eq!(styles.len(), 2);
    assert!(styles[0].pseudo_classes.is_empty());
    assert!(styles[1].pseudo_classes.hover);
    assert_eq!(styles[1].style["color"], StyleValue::from("rgba(0, 0, 255, 1)"));
}

#[test]
fn test_compound_selectors_are_skipped() {
    let output = compile_str(".a.b { color: red }");
    assert!(output.declarations.is_empty());
}

#[test]
fn test_element_selectors_are_skipped() {
    let output = compile_str("div { color: red } #main { color: red } .a > span { color: red }");
    assert!(output.declarations.is_empty());
}

#[test]
fn test_grouped_ancestors_become_containers() {
    let options = CompileOptions {
        grouping: vec!["^cond".to_string()],
        ..Default::default()
    };
    let output = compile_with(".cond1 .cond2:hover .target { color: red }", &options);

    let names: Vec<_> = output.declarations.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["cond1", "cond2", "target"]);
    assert_eq!(
        declaration(&output, "cond1"),
        json!({ "style": {}, "container": { "names": ["cond1"] } })
    );
    assert_eq!(
        declaration(&output, "target"),
        json!({
            "style": { "color": "rgba(255, 0, 0, 1)" },
            "containerQuery": [
                { "name": "cond1" },
                { "name": "cond2", "pseudoClasses": { "hover": true } },
            ],
        })
    );
}

#[test]
fn test_ungrouped_ancestors_are_skipped() {
    let output = compile_str(".cond1 .target { color: red }");
    assert!(output.declarations.is_empty());
}

#[test]
fn test_transition_keeps_first_value_per_aspect() {
    let output = compile_str(
        ".a { transition-duration: 300ms; transition: opacity 1s ease-in 0.5s }",
    );
    assert_eq!(
        declaration(&output, "a"),
        json!({
            "style": {},
            "transition": {
                "property": ["opacity"],
                "duration": [300],
                "delay": [500],
                "timingFunction": ["ease-in"],
            }
        })
    );
}

#[test]
fn test_keyframes_are_sorted_and_padded() {
    let output = compile_str(
        "@keyframes fade { to { opacity: 1 } 50% { opacity: 0.5 } } @keyframes grow { to { width: 10px } }",
    );

    let fade: Vec<f64> = output.keyframes["fade"]
        .frames
        .iter()
        .map(|frame| frame.selector)
        .collect();
    assert_eq!(fade, vec![0.5, 1.0]);

    assert_eq!(
        serde_json::to_value(&output.keyframes["grow"]).unwrap(),
        json!({
            "frames": [
                { "selector": 0, "style": {} },
                { "selector": 1, "style": { "width": 10 } },
            ]
        })
    );
}

#[test]
fn test_later_keyframes_replace_earlier() {
    let output = compile_str(
        "@keyframes spin { from { opacity: 0 } to { opacity: 1 } } @keyframes spin { to { opacity: 0.5 } }",
    );
    assert_eq!(output.keyframes.len(), 1);
    assert_eq!(output.keyframes["spin"].frames.len(), 2);
}

#[test]
fn test_percentage_translate_requires_layout() {
    let output = compile_str(".a { transform: translateX(50%) }");
    assert_eq!(
        declaration(&output, "a"),
        json!({
            "style": {
                "transform": [
                    { "translateX": { "type": "runtime", "name": "cw", "arguments": [0.5] } }
                ]
            },
            "isDynamic": true,
            "requiresLayout": true,
        })
    );
}

#[test]
fn test_media_rules() {
    let output = compile_str(
        "@media print { .a { color: red } } @media (min-width: 600px) { .b { color: red } }",
    );
    assert!(!output.declarations.contains_key("a"));
    let StyleDeclaration::Single(style) = &output.declarations["b"] else {
        panic!("expected a single style for b");
    };
    assert_eq!(style.media.len(), 1);
}

#[test]
fn test_invalid_utf8() {
    let err = compile(&[b'.', b'a', 0xff, 0xfe], &CompileOptions::default()).unwrap_err();
    assert!(matches!(err, Error::Encoding(_)));
}

#[test]
fn test_invalid_grouping_pattern() {
    let options = CompileOptions {
        grouping: vec!["(".to_string()],
        ..Default::default()
    };
    let err = compile(b".a { color: red }", &options).unwrap_err();
    assert!(matches!(err, Error::InvalidGrouping { ref pattern, .. } if pattern == "("));
}

#[test]
fn test_error_recovery() {
    let css = b".a { color: red } .b color: red } .c { color: blue }";
    let err = compile(css, &CompileOptions::default()).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));

    let options = CompileOptions {
        error_recovery: true,
        ..Default::default()
    };
    let output = compile(css, &options).unwrap();
    assert!(output.declarations.contains_key("a"));
    assert!(!output.declarations.contains_key("b"));
}

#[test]
fn test_to_json() {
    let output = compile_str(".a { width: 10px } @keyframes k { to { opacity: 1 } }");
    let rendered: Value = serde_json::from_str(&output.to_json().unwrap()).unwrap();
    assert_eq!(
        rendered,
        json!({
            "declarations": { "a": { "style": { "width": 10 } } },
            "keyframes": {
                "k": {
                    "frames": [
                        { "selector": 0, "style": {} },
                        { "selector": 1, "style": { "opacity": 1 } },
                    ]
                }
            },
        })
    );
}

#[test]
fn test_empty_stylesheet() {
    let output = compile_str("");
    assert_eq!(output, StyleSheetRegistration::default());
}

#[test]
fn test_overflowing_numbers_are_left_out() {
    let output = compile_str(".a { width: 1e39px; opacity: 1e39; transition-duration: 1e38s }");
    let json = output.to_json().unwrap();
    assert!(!json.contains("null"), "{json}");

    let style = &output.declarations["a"].styles()[0];
    assert!(!style.style.contains_key("width"));
    assert_eq!(style.transition.as_ref().and_then(|t| t.duration.as_ref()), None);
}
