//! Convert JSON, YAML and in-memory values into SCSS variable declarations.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! This crate provides:
//! - Conversion of structured data into `$name: (...);` declarations
//! - Recognition of color and dimension literals, emitted unquoted so Sass
//!   treats them as colors and numbers rather than strings
//! - A pixel normalizer for consumers that want plain numbers
//!
//! ```
//! use sass_vars::{ConversionOptions, InputType, convert};
//!
//! let options = ConversionOptions::new("palette").with_type(InputType::Yaml);
//! let scss = convert("accent: tomato\nradius: 4px\n", &options).unwrap();
//! assert_eq!(scss, r#"$palette: ("accent":tomato,"radius":4px);"#);
//! ```

mod colors;
mod convert;
mod declaration;
mod dimensions;
mod error;
mod options;
mod pixels;
mod tree;
mod units;

pub use colors::{ColorClassifier, color_hex, color_names, unquote_colors};
pub use convert::{Data, convert, convert_file, parse_js, parse_json, parse_yaml};
pub use declaration::{format_declaration, render_declaration, translate_brackets};
pub use dimensions::{DimensionClassifier, unquote_numbers};
pub use error::SassVarsError;
pub use options::{ConversionOptions, DEFAULT_ENCODING, InputType, OutputFormat, Strategy};
pub use pixels::float_pixels;
pub use tree::{LeafRules, write_value};
pub use units::{UnitCategory, UnitTable};
