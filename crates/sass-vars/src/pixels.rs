//! Pixel-to-number normalization.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! Some consumers of the generated declarations want plain numbers rather than
//! Sass lengths. [`float_pixels()`] is not part of the conversion pipeline and
//! is applied separately by callers that need it.

use once_cell::sync::Lazy;
use regex::Regex;

/// A quoted pixel length; group 1 is the number.
static QUOTED_PIXELS: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([0-9.]+)px""#).unwrap());

/// A bare pixel length; group 1 is the number.
static BARE_PIXELS: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9.]+)px").unwrap());

/// Replace every pixel length in `text` with its bare number.
///
/// Quoted lengths lose both quotes and unit (`"10px"` becomes `10`), then any
/// remaining unquoted lengths lose their unit (`10px` becomes `10`). The
/// second pass also applies inside unrelated strings, so `"1px solid"`
/// becomes `"1 solid"`.
///
/// ```
/// use sass_vars::float_pixels;
///
/// assert_eq!(float_pixels(r#""10px""#), "10");
/// assert_eq!(float_pixels("10px"), "10");
/// ```
pub fn float_pixels(text: &str) -> String {
    let quoted = QUOTED_PIXELS.replace_all(text, "$1");
    BARE_PIXELS.replace_all(&quoted, "$1").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_pixels() {
        assert_eq!(float_pixels(r#""10px""#), "10");
        assert_eq!(float_pixels(r#""0.5px""#), "0.5");
    }

    #[test]
    fn test_bare_pixels() {
        assert_eq!(float_pixels("10px"), "10");
        assert_eq!(float_pixels("$w: 12.5px;"), "$w: 12.5;");
    }

    #[test]
    fn test_mixed_declaration() {
        let text = r#"$grid: ("gutter":"30px","width":960px,"unit":"1em");"#;
        assert_eq!(
            float_pixels(text),
            r#"$grid: ("gutter":30,"width":960,"unit":"1em");"#
        );
    }

    #[test]
    fn test_pixels_inside_other_strings() {
        assert_eq!(float_pixels(r#""1px solid""#), r#""1 solid""#);
    }

    #[test]
    fn test_duplicates() {
        assert_eq!(float_pixels(r#"("a":"4px","b":"4px",4px)"#), "(\"a\":4,\"b\":4,4)");
    }

    #[test]
    fn test_other_units_untouched() {
        assert_eq!(float_pixels(r#"("a":"4em","b":4pt)"#), r#"("a":"4em","b":4pt)"#);
    }
}
