//! CSS dimension units recognised when unquoting numbers.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! The table groups unit suffixes into the three dimension categories Sass
//! understands natively: lengths, angles and times. A quoted JSON string such
//! as `"1.5rem"` is only emitted bare when its suffix appears here.

use once_cell::sync::Lazy;

/// Relative lengths first, then absolute ones.
const LENGTH_UNITS: &[&str] = &[
    "%", "em", "ex", "ch", "rem", "vh", "vw", "vmin", "vmax", "px", "q", "mm", "cm", "in", "pt",
    "pc",
];

const ANGLE_UNITS: &[&str] = &["deg", "grad", "rad", "turn"];

const TIME_UNITS: &[&str] = &["ms", "s"];

static STANDARD_UNITS: Lazy<UnitTable> =
    Lazy::new(|| UnitTable::new(LENGTH_UNITS, ANGLE_UNITS, TIME_UNITS));

/// The dimension category a unit suffix belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UnitCategory {
    Length,
    Angle,
    Time,
}

impl UnitCategory {
    /// All categories, in the order the classifier scans them.
    pub const ALL: [UnitCategory; 3] = [Self::Length, Self::Angle, Self::Time];

    pub fn name(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Angle => "angle",
            Self::Time => "time",
        }
    }
}

impl std::fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Unit suffixes per dimension category.
///
/// Tables are immutable once built. [`UnitTable::standard()`] returns the
/// shared table covering CSS Values Level 3 units; custom tables can be built
/// with [`UnitTable::new()`] and handed to a
/// [`DimensionClassifier`](crate::DimensionClassifier).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitTable {
    length: Vec<String>,
    angle: Vec<String>,
    time: Vec<String>,
}

impl UnitTable {
    pub fn new(length: &[&str], angle: &[&str], time: &[&str]) -> Self {
        let owned = |units: &[&str]| units.iter().map(|u| u.to_string()).collect();
        Self {
            length: owned(length),
            angle: owned(angle),
            time: owned(time),
        }
    }

    /// The process-wide table of standard CSS units.
    pub fn standard() -> &'static UnitTable {
        &STANDARD_UNITS
    }

    /// Unit suffixes registered for `category`, in declaration order.
    pub fn units(&self, category: UnitCategory) -> &[String] {
        match category {
            UnitCategory::Length => &self.length,
            UnitCategory::Angle => &self.angle,
            UnitCategory::Time => &self.time,
        }
    }

    /// Iterate over `(category, suffixes)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (UnitCategory, &[String])> {
        UnitCategory::ALL
            .into_iter()
            .map(move |category| (category, self.units(category)))
    }

    /// Find the category a suffix is registered under.
    ///
    /// Suffixes are matched exactly and case-sensitively.
    pub fn category_of(&self, suffix: &str) -> Option<UnitCategory> {
        self.iter()
            .find(|(_, units)| units.iter().any(|u| u == suffix))
            .map(|(category, _)| category)
    }
}

impl Default for UnitTable {
    fn default() -> Self {
        Self::standard().clone()
    }
}
