//! Dimensioned number recognition.
//!
//! Copyright (c) 2025 Posit, PBC

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::SassVarsError;
use crate::units::{UnitCategory, UnitTable};

static STANDARD_CLASSIFIER: Lazy<DimensionClassifier> = Lazy::new(|| {
    DimensionClassifier::new(UnitTable::standard()).expect("built-in unit patterns are valid")
});

#[derive(Debug, Clone)]
struct CategoryPattern {
    category: UnitCategory,
    /// `"<number><unit>"`, group 1 is the literal without quotes.
    quoted: Regex,
    exact: Regex,
}

/// Recognises numbers suffixed with a known unit and strips their quotes.
///
/// One pattern is compiled per [`UnitCategory`]. A number is a run of digits
/// and dots; it must be followed directly by a unit from the table and then the
/// closing quote, so `"5xyz"` and `"10"` stay quoted.
#[derive(Debug, Clone)]
pub struct DimensionClassifier {
    patterns: Vec<CategoryPattern>,
}

impl DimensionClassifier {
    pub fn new(units: &UnitTable) -> Result<Self, SassVarsError> {
        let mut patterns = Vec::new();
        for (category, suffixes) in units.iter() {
            if suffixes.is_empty() {
                continue;
            }
            // Longest suffix first so `vmin` is tried before `vh`-style prefixes.
            let mut suffixes: Vec<&str> = suffixes.iter().map(String::as_str).collect();
            suffixes.sort_by_key(|s| std::cmp::Reverse(s.len()));
            let alternation = suffixes
                .iter()
                .map(|s| regex::escape(s))
                .collect::<Vec<_>>()
                .join("|");

            patterns.push(CategoryPattern {
                category,
                quoted: Regex::new(&format!(r#""([0-9.]+(?:{alternation}))""#))?,
                exact: Regex::new(&format!(r"^[0-9.]+(?:{alternation})$"))?,
            });
        }
        Ok(Self { patterns })
    }

    /// The shared classifier built from [`UnitTable::standard()`].
    pub fn standard() -> &'static DimensionClassifier {
        &STANDARD_CLASSIFIER
    }

    /// The category of `token` (without quotes) if it is a dimensioned number.
    pub fn classify(&self, token: &str) -> Option<UnitCategory> {
        self.patterns
            .iter()
            .find(|p| p.exact.is_match(token))
            .map(|p| p.category)
    }

    pub fn is_dimension(&self, token: &str) -> bool {
        self.classify(token).is_some()
    }

    /// Strip the quotes from every quoted dimension in `text`.
    pub fn unquote(&self, text: &str) -> String {
        let mut result = text.to_string();
        for pattern in &self.patterns {
            result = pattern
                .quoted
                .replace_all(&result, |caps: &regex::Captures<'_>| {
                    tracing::trace!(
                        category = %pattern.category,
                        value = &caps[1],
                        "unquoting dimension"
                    );
                    caps[1].to_string()
                })
                .into_owned();
        }
        result
    }
}

/// Strip the quotes from every length, angle or time literal in `text`.
///
/// ```
/// use sass_vars::unquote_numbers;
///
/// assert_eq!(unquote_numbers(r#""10px""#), "10px");
/// assert_eq!(unquote_numbers(r#""5xyz""#), r#""5xyz""#);
/// ```
pub fn unquote_numbers(text: &str) -> String {
    DimensionClassifier::standard().unquote(text)
}
