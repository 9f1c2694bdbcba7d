//! CSS to style declaration compiler.
//!
//! Compiles a stylesheet into the flat, JSON-ready style records a native
//! styling runtime applies to components:
//!
//! - **Declarations**: class name to the style it carries, plus the
//!   pseudo-classes, container queries and media queries it applies under
//! - **Keyframes**: animation name to frames sorted by offset
//!
//! Values that depend on the viewport, on CSS variables or on layout are kept
//! as runtime records for the consumer to resolve. Properties, units and
//! selectors the target cannot express are left out.
//!
//! # Example
//!
//! ```
//! use native_css::style::StyleValue;
//! use native_css::{compile, CompileOptions};
//!
//! let output = compile(b".title { color: red; margin: 2rem }", &CompileOptions::default())?;
//! let title = &output.declarations["title"].styles()[0];
//! assert_eq!(title.style["marginTop"], StyleValue::Number(28.0));
//! # Ok::<(), native_css::Error>(())
//! ```

pub mod accumulator;
pub mod declaration;
pub mod selector;
pub mod style;

mod error;
mod extract;
mod keyframes;
mod options;

pub use error::{Error, Result};
pub use extract::RuleExtractor;
pub use keyframes::extract_keyframes;
pub use options::{CompileOptions, DEFAULT_INLINE_REM};

use native_css_parser::{ParserOptions, StyleSheet};
use style::StyleSheetRegistration;

/// Compile a stylesheet.
pub fn compile(code: &[u8], options: &CompileOptions) -> Result<StyleSheetRegistration> {
    let _span = tracing::debug_span!("compile", bytes = code.len()).entered();

    let source = std::str::from_utf8(code)?;
    let grouping = options.grouping_patterns()?;
    let mut sheet = StyleSheet::parse(
        source,
        ParserOptions {
            error_recovery: options.error_recovery,
        },
    )?;

    let mut output = StyleSheetRegistration::default();
    sheet.visit_rules(&mut RuleExtractor::new(options, &grouping, &mut output));

    tracing::debug!(
        declarations = output.declarations.len(),
        keyframes = output.keyframes.len(),
        "Compiled stylesheet"
    );
    Ok(output)
}

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::accumulator::{DeclarationSink, PropOptions, StyleAccumulator};
    pub use crate::declaration::parse_declaration;
    pub use crate::selector::{Condition, GroupedSelector, group_selector};
    pub use crate::style::{
        ExtractedAnimation, ExtractedKeyframe, ExtractedStyle, RuntimeValue, StyleDeclaration,
        StyleSheetRegistration, StyleValue,
    };
    pub use crate::{CompileOptions, Error, Result, compile};
}
