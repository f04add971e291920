//! Input dispatch: decode data and render it as a declaration.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! Data arrives as an in-memory value, JSON text, YAML text, a byte buffer, or
//! a path to one of those. Everything is normalized to JSON before rendering:
//!
//! - `yaml`/`yml`: decode YAML, re-serialize as JSON
//! - `json`: use the text as-is
//! - anything else: serialize the value as JSON

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::declaration::{format_declaration, render_declaration};
use crate::error::SassVarsError;
use crate::options::{ConversionOptions, InputType, Strategy};
use crate::tree::{LeafRules, write_value};

/// Input data for a conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum Data {
    /// An already-decoded value.
    Value(Value),
    /// JSON or YAML text, or a path when `is_file` is set.
    Text(String),
    /// Raw bytes, decoded with the configured encoding.
    Buffer(Vec<u8>),
}

impl Data {
    fn into_text(self, encoding: &str) -> Result<String, SassVarsError> {
        match self {
            Self::Text(text) => Ok(text),
            Self::Buffer(bytes) => decode_bytes(&bytes, encoding),
            Self::Value(value) => Ok(serde_json::to_string(&value)?),
        }
    }
}

impl From<Value> for Data {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<String> for Data {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Data {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<u8>> for Data {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Buffer(bytes)
    }
}

impl From<&[u8]> for Data {
    fn from(bytes: &[u8]) -> Self {
        Self::Buffer(bytes.to_vec())
    }
}

/// Convert `data` into a Sass variable declaration.
///
/// When `options.is_file` is set and `data` is text, it is read as a path:
/// the type and name default to the file's extension and stem.
///
/// # Errors
///
/// Returns the underlying error when the file cannot be read, the encoding
/// label is unknown, or YAML (or JSON under [`Strategy::Tree`]) fails to decode.
///
/// # Example
///
/// ```
/// use sass_vars::{ConversionOptions, convert};
/// use serde_json::json;
///
/// let scss = convert(
///     json!({"color": "#fff", "size": "10px"}),
///     &ConversionOptions::new("theme"),
/// )
/// .unwrap();
/// assert_eq!(scss, r##"$theme: ("color":#fff,"size":10px);"##);
/// ```
pub fn convert(
    data: impl Into<Data>,
    options: &ConversionOptions,
) -> Result<String, SassVarsError> {
    let mut options = options.clone();
    let mut data = data.into();

    let file_path = match &data {
        Data::Text(path) if options.is_file => Some(PathBuf::from(path)),
        _ => None,
    };
    if let Some(path) = file_path {
        if options.input_type.is_none() {
            let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
            options.input_type = Some(InputType::from(extension));
        }
        if options.name.is_none() {
            options.name = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .map(String::from);
        }
        tracing::debug!(path = %path.display(), "reading input file");
        data = Data::Buffer(read_file(&path)?);
    }

    let input_type = options.input_type();
    options.input_type = Some(input_type);
    tracing::debug!(%input_type, name = options.declared_name(), "converting");

    match input_type {
        InputType::Yaml => parse_yaml(data, &options),
        InputType::Json => parse_json(data, &options),
        InputType::Js => parse_js(data, &options),
    }
}

/// Read the file at `path` and convert it. Shorthand for [`convert()`] with
/// `is_file` set.
pub fn convert_file(
    path: impl AsRef<Path>,
    options: &ConversionOptions,
) -> Result<String, SassVarsError> {
    let path = path.as_ref().to_string_lossy().into_owned();
    convert(path, &options.clone().with_file(true))
}

/// Decode YAML and render it. Values are rendered directly.
///
/// The decoder only builds plain data; YAML tags never run code.
pub fn parse_yaml(
    data: impl Into<Data>,
    options: &ConversionOptions,
) -> Result<String, SassVarsError> {
    let value = match data.into() {
        Data::Value(value) => value,
        other => {
            let text = other.into_text(&options.encoding)?;
            serde_yaml::from_str::<Value>(&text)?
        }
    };
    render_value(&value, options)
}

/// Serialize a value and render it.
///
/// Text and decoded buffers are treated as a single string value, as
/// `JSON.stringify` would treat them.
pub fn parse_js(
    data: impl Into<Data>,
    options: &ConversionOptions,
) -> Result<String, SassVarsError> {
    let value = match data.into() {
        Data::Value(value) => value,
        other => Value::String(other.into_text(&options.encoding)?),
    };
    render_value(&value, options)
}

/// Render JSON text.
///
/// Under [`Strategy::Text`] the JSON is not parsed; it is translated exactly
/// as given. Under [`Strategy::Tree`] it is decoded first.
pub fn parse_json(
    data: impl Into<Data>,
    options: &ConversionOptions,
) -> Result<String, SassVarsError> {
    let data = data.into();
    match options.strategy {
        Strategy::Text => {
            let json = data.into_text(&options.encoding)?;
            Ok(render_declaration(&json, options))
        }
        Strategy::Tree => {
            let value = match data {
                Data::Value(value) => value,
                other => serde_json::from_str(&other.into_text(&options.encoding)?)?,
            };
            render_value(&value, options)
        }
    }
}

fn render_value(value: &Value, options: &ConversionOptions) -> Result<String, SassVarsError> {
    match options.strategy {
        Strategy::Text => Ok(render_declaration(&serde_json::to_string(value)?, options)),
        Strategy::Tree => {
            let body = write_value(value, &LeafRules::from_options(options));
            Ok(format_declaration(options.name.as_deref(), &body, options.default))
        }
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, SassVarsError> {
    std::fs::read(path).map_err(|e| SassVarsError::io(path, e))
}

/// Decode `bytes` with the WHATWG encoding named by `label` (`utf8`,
/// `utf-16le`, `latin1`, ...). A leading byte order mark is honoured.
fn decode_bytes(bytes: &[u8], label: &str) -> Result<String, SassVarsError> {
    let encoding = encoding_rs::Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| SassVarsError::UnknownEncoding(label.to_string()))?;
    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::warn!(
            encoding = used.name(),
            "input contained malformed byte sequences; replaced with U+FFFD"
        );
    }
    Ok(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_js_value() {
        let options = ConversionOptions::new("theme");
        let result = convert(json!({"color": "#fff", "size": "10px"}), &options).unwrap();
        assert_eq!(result, r##"$theme: ("color":#fff,"size":10px);"##);
    }

    #[test]
    fn test_js_text_is_a_string_value() {
        let options = ConversionOptions::new("s");
        assert_eq!(convert("hello", &options).unwrap(), r#"$s: "hello";"#);
        assert_eq!(convert("red", &options).unwrap(), "$s: red;");
    }

    #[test]
    fn test_json_text_passes_through() {
        let options = ConversionOptions::new("x").with_type(InputType::Json);
        assert_eq!(
            convert("{\"a\": [1, 2]}\n", &options).unwrap(),
            "$x: (\"a\": (1, 2));"
        );
    }

    #[test]
    fn test_json_text_is_not_validated() {
        let options = ConversionOptions::new("x").with_type(InputType::Json);
        assert_eq!(convert("{oops", &options).unwrap(), "$x: (oops;");
    }

    #[test]
    fn test_yaml_text() {
        let options = ConversionOptions::new("y").with_type(InputType::Yaml);
        let yaml = "primary: '#336699'\nspacing:\n  - 4px\n  - 8px\n";
        assert_eq!(
            convert(yaml, &options).unwrap(),
            r##"$y: ("primary":#336699,"spacing":(4px,8px));"##
        );
    }

    #[test]
    fn test_yaml_error_propagates() {
        let options = ConversionOptions::new("y").with_type(InputType::Yaml);
        let err = convert("a: [1, 2", &options).unwrap_err();
        assert!(matches!(err, SassVarsError::Yaml(_)));
    }

    #[test]
    fn test_buffer_decoding() {
        let options = ConversionOptions::new("b").with_type(InputType::Json);
        let bytes = br#"{"c":"blue"}"#.to_vec();
        assert_eq!(convert(bytes, &options).unwrap(), r#"$b: ("c":blue);"#);
    }

    #[test]
    fn test_latin1_buffer() {
        let options = ConversionOptions::new("b")
            .with_type(InputType::Json)
            .with_encoding("latin1");
        let bytes = vec![b'"', 0xe9, b'"'];
        assert_eq!(convert(bytes, &options).unwrap(), "$b: \"\u{e9}\";");
    }

    #[test]
    fn test_unknown_encoding() {
        let options = ConversionOptions::new("b").with_encoding("klingon");
        let err = convert(vec![b'1'], &options).unwrap_err();
        assert!(matches!(err, SassVarsError::UnknownEncoding(label) if label == "klingon"));
    }

    #[test]
    fn test_missing_file() {
        let options = ConversionOptions::default().with_file(true);
        let err = convert("/definitely/not/here.json", &options).unwrap_err();
        match err {
            SassVarsError::Io { path, source } => {
                assert_eq!(path, Path::new("/definitely/not/here.json"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_is_file_ignored_for_values() {
        let options = ConversionOptions::new("v").with_file(true);
        assert_eq!(convert(json!([1]), &options).unwrap(), "$v: (1);");
    }

    #[test]
    fn test_tree_strategy_json_errors() {
        let options = ConversionOptions::new("x")
            .with_type(InputType::Json)
            .with_strategy(Strategy::Tree);
        let err = convert("{oops", &options).unwrap_err();
        assert!(matches!(err, SassVarsError::Json(_)));
    }

    #[test]
    fn test_tree_strategy_keeps_string_content() {
        let options = ConversionOptions::new("x").with_strategy(Strategy::Tree);
        let value = json!({"red": "{not a map}", "c": "red", "n": 2});
        assert_eq!(
            convert(value, &options).unwrap(),
            r#"$x: ("red":"{not a map}","c":red,"n":2);"#
        );
    }

    #[test]
    fn test_text_strategy_quirks() {
        let options = ConversionOptions::new("x");
        let value = json!({"red": "{not a map}", "c": "red", "n": 2});
        assert_eq!(
            convert(value, &options).unwrap(),
            r#"$x: (red:"(not a map)","c":red,"n":2);"#
        );
    }
}
