//! Declaration assembly for the text strategy.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! JSON text becomes a Sass map or list by swapping its brackets for
//! parentheses, after which it is wrapped as a variable declaration and
//! passed through the enabled literal classifiers:
//!
//! ```text
//! {"color":"#fff","size":"10px"}
//!   -> $theme: ("color":"#fff","size":"10px");
//!   -> $theme: ("color":#fff,"size":10px);
//! ```

use crate::colors::ColorClassifier;
use crate::dimensions::DimensionClassifier;
use crate::options::ConversionOptions;

/// Replace `{`/`[` with `(` and `}`/`]` with `)`.
///
/// Every bracket is translated, including brackets inside string values.
pub fn translate_brackets(json: &str) -> String {
    json.chars()
        .map(|c| match c {
            '{' | '[' => '(',
            '}' | ']' => ')',
            other => other,
        })
        .collect()
}

/// Wrap `body` as `$name: body;` or `$name: body !default;`.
///
/// A missing name renders as `undefined`. One trailing newline on the body
/// is dropped.
pub fn format_declaration(name: Option<&str>, body: &str, default: bool) -> String {
    let name = name.unwrap_or("undefined");
    let body = body.strip_suffix('\n').unwrap_or(body);
    let terminator = if default { " !default;" } else { ";" };

    let mut declaration = String::with_capacity(name.len() + body.len() + terminator.len() + 3);
    declaration.push('$');
    declaration.push_str(name);
    declaration.push_str(": ");
    declaration.push_str(body);
    declaration.push_str(terminator);
    declaration
}

/// Turn JSON text into a complete declaration.
///
/// The JSON is not validated; whatever text is given is translated and
/// classified as-is.
pub fn render_declaration(json: &str, options: &ConversionOptions) -> String {
    let body = translate_brackets(json);
    let mut declaration = format_declaration(options.name.as_deref(), &body, options.default);

    if options.unquote_colors {
        declaration = ColorClassifier::standard().unquote(&declaration);
    }
    if options.unquote_numbers() {
        declaration = DimensionClassifier::standard().unquote(&declaration);
    }

    tracing::debug!(
        name = options.declared_name(),
        bytes = declaration.len(),
        "rendered declaration"
    );
    declaration
}
