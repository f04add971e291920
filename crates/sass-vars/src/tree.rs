//! Value-walking writer for the tree strategy.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! Instead of pattern-matching over serialized JSON, the tree writer decides
//! per string leaf whether it is a color or dimension and emits it bare.
//! Map keys and all other strings are written as JSON strings, so content such
//! as `"a{b}"` or a key named `"red"` passes through unchanged.

use serde_json::Value;

use crate::colors::ColorClassifier;
use crate::dimensions::DimensionClassifier;
use crate::options::ConversionOptions;

/// The classifiers consulted for each string leaf. `None` disables a family.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeafRules<'a> {
    pub colors: Option<&'a ColorClassifier>,
    pub dimensions: Option<&'a DimensionClassifier>,
}

impl LeafRules<'static> {
    /// The standard classifiers, enabled as `options` requests.
    pub fn from_options(options: &ConversionOptions) -> Self {
        Self {
            colors: options.unquote_colors.then(ColorClassifier::standard),
            dimensions: options.unquote_numbers().then(DimensionClassifier::standard),
        }
    }
}

impl LeafRules<'_> {
    fn is_bare(&self, leaf: &str) -> bool {
        self.colors.is_some_and(|c| c.is_color(leaf))
            || self.dimensions.is_some_and(|d| d.is_dimension(leaf))
    }
}

/// Write `value` as a Sass literal.
///
/// Objects and arrays become parenthesized maps and lists with the same
/// compact layout as `serde_json::to_string`.
pub fn write_value(value: &Value, rules: &LeafRules<'_>) -> String {
    let mut out = String::new();
    write_into(&mut out, value, rules);
    out
}

fn write_into(out: &mut String, value: &Value, rules: &LeafRules<'_>) {
    match value {
        Value::Object(map) => {
            out.push('(');
            for (index, (key, item)) in map.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                push_json_string(out, key);
                out.push(':');
                write_into(out, item, rules);
            }
            out.push(')');
        }
        Value::Array(items) => {
            out.push('(');
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                write_into(out, item, rules);
            }
            out.push(')');
        }
        Value::String(s) if rules.is_bare(s) => out.push_str(s),
        Value::String(s) => push_json_string(out, s),
        // Null, bool and number render identically in JSON and Sass.
        scalar => out.push_str(&scalar.to_string()),
    }
}

fn push_json_string(out: &mut String, s: &str) {
    out.push_str(&Value::String(s.to_string()).to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn standard() -> LeafRules<'static> {
        LeafRules::from_options(&ConversionOptions::default())
    }

    #[test]
    fn test_nested_structure() {
        let value = json!({"a": [1, 2], "b": {"c": null, "d": true}});
        assert_eq!(
            write_value(&value, &standard()),
            r#"("a":(1,2),"b":("c":null,"d":true))"#
        );
    }

    #[test]
    fn test_recognised_leaves_are_bare() {
        let value = json!({"bg": "#fff", "fg": "navy", "gap": "1.5rem", "fade": "2s"});
        assert_eq!(
            write_value(&value, &standard()),
            r#"("bg":#fff,"fg":navy,"gap":1.5rem,"fade":2s)"#
        );
    }

    #[test]
    fn test_keys_and_brackets_in_strings_are_preserved() {
        let value = json!({"red": "a{b}[c]", "x": "say \"hi\""});
        assert_eq!(
            write_value(&value, &standard()),
            r#"("red":"a{b}[c]","x":"say \"hi\"")"#
        );
    }

    #[test]
    fn test_disabled_rules_keep_quotes() {
        let value = json!(["#fff", "10px"]);
        assert_eq!(
            write_value(&value, &LeafRules::default()),
            r##"("#fff","10px")"##
        );
    }

    #[test]
    fn test_partial_matches_stay_quoted() {
        let value = json!(["1px solid red", "#fffff"]);
        assert_eq!(
            write_value(&value, &standard()),
            r##"("1px solid red","#fffff")"##
        );
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(write_value(&json!({}), &standard()), "()");
        assert_eq!(write_value(&json!([]), &standard()), "()");
    }

    #[test]
    fn test_scalar_root() {
        assert_eq!(write_value(&json!("#abc"), &standard()), "#abc");
        assert_eq!(write_value(&json!(1.5), &standard()), "1.5");
    }
}
