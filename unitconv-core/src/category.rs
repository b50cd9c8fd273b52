//! Measurement categories
//!
//! The set is closed: every category is known at compile time and owns its
//! own units. The 1-based menu code doubles as the shell selector.

use std::fmt;
use serde::{Deserialize, Serialize};

/// A measurement domain with its own closed set of units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mass,
    Length,
    Area,
    Volume,
    Speed,
    Pressure,
    Angle,
    Temperature,
}

impl Category {
    /// All categories in menu order
    pub const ALL: [Category; 8] = [
        Category::Mass,
        Category::Length,
        Category::Area,
        Category::Volume,
        Category::Speed,
        Category::Pressure,
        Category::Angle,
        Category::Temperature,
    ];

    /// Menu code shown next to the category (1..=8)
    pub fn menu_code(self) -> u8 {
        match self {
            Category::Mass => 1,
            Category::Length => 2,
            Category::Area => 3,
            Category::Volume => 4,
            Category::Speed => 5,
            Category::Pressure => 6,
            Category::Angle => 7,
            Category::Temperature => 8,
        }
    }

    /// Resolve a menu selector such as `"3"`.
    ///
    /// Surrounding whitespace is ignored. `"0"` is not a category (it is the
    /// shell's exit code) and resolves to `None` like any other unknown input.
    pub fn from_menu_code(selector: &str) -> Option<Category> {
        let code: u8 = selector.trim().parse().ok()?;
        Category::ALL.into_iter().find(|c| c.menu_code() == code)
    }

    /// Human-readable label used in menus
    pub fn label(self) -> &'static str {
        match self {
            Category::Mass => "Mass",
            Category::Length => "Length",
            Category::Area => "Area",
            Category::Volume => "Volume",
            Category::Speed => "Speed",
            Category::Pressure => "Pressure",
            Category::Angle => "Angle",
            Category::Temperature => "Temperature",
        }
    }

    /// Temperature is the only category converted by formula instead of factor table
    pub fn is_temperature(self) -> bool {
        matches!(self, Category::Temperature)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_codes_follow_menu_order() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.menu_code() as usize, i + 1);
        }
    }

    #[test]
    fn test_from_menu_code() {
        assert_eq!(Category::from_menu_code("1"), Some(Category::Mass));
        assert_eq!(Category::from_menu_code("8"), Some(Category::Temperature));
        assert_eq!(Category::from_menu_code(" 6\r"), Some(Category::Pressure));
    }

    #[test]
    fn test_from_menu_code_rejects_unknown() {
        assert_eq!(Category::from_menu_code("0"), None);
        assert_eq!(Category::from_menu_code("9"), None);
        assert_eq!(Category::from_menu_code("-1"), None);
        assert_eq!(Category::from_menu_code("mass"), None);
        assert_eq!(Category::from_menu_code(""), None);
    }

    #[test]
    fn test_from_menu_code_accepts_numeric_spellings() {
        // selectors are parsed as numbers, not matched as exact strings
        assert_eq!(Category::from_menu_code("01"), Some(Category::Mass));
        assert_eq!(Category::from_menu_code("+1"), Some(Category::Mass));
        assert_eq!(Category::from_menu_code("007"), Some(Category::Angle));
        assert_eq!(Category::from_menu_code("1 1"), None);
    }

    #[test]
    fn test_only_temperature_uses_formulas() {
        let formula_based: Vec<_> = Category::ALL.iter().filter(|c| c.is_temperature()).collect();
        assert_eq!(formula_based, vec![&Category::Temperature]);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Category::Speed).unwrap(), "\"speed\"");
        let parsed: Category = serde_json::from_str("\"temperature\"").unwrap();
        assert_eq!(parsed, Category::Temperature);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(Category::Angle.to_string(), "Angle");
    }
}
