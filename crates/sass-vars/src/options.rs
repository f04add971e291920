//! Conversion options.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! Options deserialize from the same camelCase keys the JavaScript
//! `sass-vars` tool accepted, so existing option files keep working:
//!
//! ```yaml
//! name: theme
//! type: yaml
//! isFile: true
//! default: true
//! unquoteColors: true
//! unquoteNumbers: false
//! ```

use serde::{Deserialize, Serialize};

/// Default text encoding for file and buffer inputs.
pub const DEFAULT_ENCODING: &str = "utf8";

/// How the input data should be decoded.
///
/// Parsed leniently: `json`, `yaml` and `yml` select their decoders and any
/// other value (including `js` and file extensions such as `txt`) selects
/// [`InputType::Js`], where the data is serialized as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InputType {
    Json,
    Yaml,
    /// An in-memory value.
    #[default]
    Js,
}

impl InputType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Js => "js",
        }
    }
}

impl From<&str> for InputType {
    fn from(value: &str) -> Self {
        match value {
            "json" => Self::Json,
            "yaml" | "yml" => Self::Yaml,
            _ => Self::Js,
        }
    }
}

impl From<String> for InputType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<InputType> for String {
    fn from(value: InputType) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for InputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target syntax. Only SCSS variable declarations are produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Scss,
}

/// How recognised literals are unquoted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Serialize to JSON, translate brackets and unquote by pattern over the
    /// whole text. Keys and string contents that look like colors or
    /// dimensions are unquoted too.
    #[default]
    Text,
    /// Walk the decoded value and write recognised string leaves unquoted.
    /// Keys and other strings are never altered.
    Tree,
}

/// Options for [`convert()`](crate::convert).
///
/// Every field has a default, so option files only need the keys they
/// change. Caller-supplied values always win over the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConversionOptions {
    pub format: OutputFormat,

    /// Variable name. Rendered as `undefined` when missing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Decoder selection; inferred from the file extension for file inputs
    /// and [`InputType::Js`] otherwise.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub input_type: Option<InputType>,

    /// Treat text data as a path to read.
    pub is_file: bool,

    /// Append `!default` to the declaration.
    pub default: bool,

    pub unquote_colors: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unquote_numbers: Option<bool>,

    /// Older spelling of `unquote_numbers`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unquote_lengths: Option<bool>,

    /// WHATWG encoding label used to decode files and byte buffers.
    pub encoding: String,

    pub strategy: Strategy,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Scss,
            name: None,
            input_type: None,
            is_file: false,
            default: false,
            unquote_colors: true,
            unquote_numbers: None,
            unquote_lengths: None,
            encoding: DEFAULT_ENCODING.to_string(),
            strategy: Strategy::Text,
        }
    }
}

impl ConversionOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self::default().with_name(name)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_type(mut self, input_type: InputType) -> Self {
        self.input_type = Some(input_type);
        self
    }

    pub fn with_file(mut self, is_file: bool) -> Self {
        self.is_file = is_file;
        self
    }

    pub fn with_default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }

    pub fn with_unquote_colors(mut self, unquote: bool) -> Self {
        self.unquote_colors = unquote;
        self
    }

    pub fn with_unquote_numbers(mut self, unquote: bool) -> Self {
        self.unquote_numbers = Some(unquote);
        self
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Whether dimensioned numbers are unquoted.
    ///
    /// `unquote_numbers` takes precedence over the legacy `unquote_lengths`;
    /// when neither is set numbers are unquoted.
    pub fn unquote_numbers(&self) -> bool {
        self.unquote_numbers.or(self.unquote_lengths).unwrap_or(true)
    }

    /// The input type, falling back to [`InputType::Js`].
    pub fn input_type(&self) -> InputType {
        self.input_type.unwrap_or_default()
    }

    /// The name rendered into the declaration.
    pub fn declared_name(&self) -> &str {
        self.name.as_deref().unwrap_or("undefined")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ConversionOptions::default();
        assert_eq!(options.format, OutputFormat::Scss);
        assert!(options.unquote_colors);
        assert!(options.unquote_numbers());
        assert!(!options.default);
        assert!(!options.is_file);
        assert_eq!(options.encoding, "utf8");
        assert_eq!(options.input_type(), InputType::Js);
        assert_eq!(options.declared_name(), "undefined");
        assert_eq!(options.strategy, Strategy::Text);
    }

    #[test]
    fn test_input_type_parsing() {
        assert_eq!(InputType::from("json"), InputType::Json);
        assert_eq!(InputType::from("yaml"), InputType::Yaml);
        assert_eq!(InputType::from("yml"), InputType::Yaml);
        assert_eq!(InputType::from("js"), InputType::Js);
        assert_eq!(InputType::from("txt"), InputType::Js);
        assert_eq!(InputType::from(""), InputType::Js);
    }

    #[test]
    fn test_unquote_numbers_alias() {
        let mut options = ConversionOptions::default();
        options.unquote_lengths = Some(false);
        assert!(!options.unquote_numbers());

        options.unquote_numbers = Some(true);
        assert!(options.unquote_numbers());

        options.unquote_lengths = None;
        options.unquote_numbers = Some(false);
        assert!(!options.unquote_numbers());
    }

    #[test]
    fn test_deserialize_camel_case_keys() {
        let options: ConversionOptions = serde_json::from_str(
            r#"{"name":"theme","type":"yml","isFile":true,"default":true,
                "unquoteColors":false,"unquoteLengths":false,"encoding":"latin1"}"#,
        )
        .unwrap();

        assert_eq!(options.name.as_deref(), Some("theme"));
        assert_eq!(options.input_type, Some(InputType::Yaml));
        assert!(options.is_file);
        assert!(options.default);
        assert!(!options.unquote_colors);
        assert!(!options.unquote_numbers());
        assert_eq!(options.encoding, "latin1");
    }

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let options: ConversionOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ConversionOptions::default());
    }

    #[test]
    fn test_deserialize_strategy() {
        let options: ConversionOptions =
            serde_json::from_str(r#"{"strategy":"tree","format":"scss"}"#).unwrap();
        assert_eq!(options.strategy, Strategy::Tree);
    }

    #[test]
    fn test_builder() {
        let options = ConversionOptions::new("vars")
            .with_type(InputType::Json)
            .with_default(true)
            .with_unquote_colors(false)
            .with_unquote_numbers(false);
        assert_eq!(options.declared_name(), "vars");
        assert_eq!(options.input_type(), InputType::Json);
        assert!(options.default);
        assert!(!options.unquote_colors);
        assert!(!options.unquote_numbers());
    }
}
