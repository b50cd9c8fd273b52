//! Category Registry
//!
//! Maps each category to its converter and the ordered list of unit names the
//! shell offers. The order is user-visible: the shell numbers units from 1 in
//! exactly this order.

use std::sync::LazyLock;
use unitconv_core::{Category, Conversion, ConversionError, ConversionRequest};
use crate::converter::{Converter, UnitConverter};
use crate::temperature::TEMPERATURE_UNITS;

/// Global category registry
pub static REGISTRY: LazyLock<CategoryRegistry> = LazyLock::new(CategoryRegistry::new);

/// Ordered unit names for a category
pub fn units_for(category: Category) -> &'static [&'static str] {
    match category {
        Category::Mass => &["kilogram", "gram", "pound", "tonne", "milligram"],
        Category::Length => &["meter", "kilometer", "centimeter", "decimeter", "millimeter"],
        Category::Area => &[
            "square_meter",
            "square_kilometer",
            "square_centimeter",
            "square_decimeter",
            "square_millimeter",
        ],
        Category::Volume => &[
            "volume_meter",
            "volume_kilometer",
            "volume_centimeter",
            "volume_decimeter",
            "volume_millimeter",
            "liter",
        ],
        Category::Speed => &[
            "meter_per_second",
            "kilometer_per_second",
            "kilometer_per_hour",
            "sea_speed",
            "Mach_number",
        ],
        Category::Pressure => &[
            "pascal",
            "atmosphere",
            "bar",
            "metres_of_the_water_column",
            "millimetres_of_the_mercury_column",
        ],
        Category::Angle => &["degrees", "radians", "grads", "turnovers", "sec", "min", "hour"],
        Category::Temperature => TEMPERATURE_UNITS,
    }
}

/// Converter and unit list for one category
#[derive(Debug, Clone, Copy)]
pub struct CategoryEntry {
    pub category: Category,
    pub converter: Converter,
    pub units: &'static [&'static str],
}

impl CategoryEntry {
    pub fn for_category(category: Category) -> Self {
        CategoryEntry {
            category,
            converter: Converter::for_category(category),
            units: units_for(category),
        }
    }

    /// Unit name for a 1-based menu index
    pub fn unit_at(&self, index: usize) -> Option<&'static str> {
        index.checked_sub(1).and_then(|i| self.units.get(i)).copied()
    }
}

/// Central category registry
pub struct CategoryRegistry {
    entries: [CategoryEntry; 8],
}

impl CategoryRegistry {
    pub fn new() -> Self {
        CategoryRegistry {
            entries: Category::ALL.map(CategoryEntry::for_category),
        }
    }

    /// Entries in menu order
    pub fn entries(&self) -> &[CategoryEntry] {
        &self.entries
    }

    pub fn entry(&self, category: Category) -> &CategoryEntry {
        &self.entries[usize::from(category.menu_code()) - 1]
    }

    /// Resolve a main-menu selector ("1".."8")
    pub fn select(&self, selector: &str) -> Option<&CategoryEntry> {
        Category::from_menu_code(selector).map(|c| self.entry(c))
    }

    /// Execute a request against its category's converter
    pub fn convert(&self, request: ConversionRequest) -> Result<Conversion, ConversionError> {
        let entry = self.entry(request.category);
        match entry.converter.convert_to(&request.from, &request.to, request.value) {
            Ok(result) => {
                tracing::debug!(
                    category = %request.category,
                    from = %request.from,
                    to = %request.to,
                    value = request.value,
                    result,
                    "converted"
                );
                Ok(Conversion::new(request, result))
            }
            Err(e) => {
                tracing::debug!(code = e.code(), "{}", e);
                Err(e)
            }
        }
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(category: Category, from: &str, to: &str, value: f64) -> Result<f64, ConversionError> {
        REGISTRY
            .convert(ConversionRequest::new(category, from, to, value))
            .map(|c| c.result)
    }

    #[test]
    fn test_entries_follow_menu_order() {
        let categories: Vec<_> = REGISTRY.entries().iter().map(|e| e.category).collect();
        assert_eq!(categories, Category::ALL.to_vec());
    }

    #[test]
    fn test_unit_lists_are_unique() {
        for entry in REGISTRY.entries() {
            let mut units = entry.units.to_vec();
            units.sort();
            units.dedup();
            assert_eq!(units.len(), entry.units.len(), "{} repeats a unit", entry.category);
        }
    }

    #[test]
    fn test_units_are_not_shared_across_categories() {
        let entries = REGISTRY.entries();
        for (i, a) in entries.iter().enumerate() {
            for b in &entries[i + 1..] {
                for unit in a.units {
                    assert!(!b.units.contains(unit), "{} is in {} and {}", unit, a.category, b.category);
                }
            }
        }
    }

    #[test]
    fn test_unit_at_is_one_based() {
        let mass = REGISTRY.entry(Category::Mass);
        assert_eq!(mass.unit_at(1), Some("kilogram"));
        assert_eq!(mass.unit_at(5), Some("milligram"));
        assert_eq!(mass.unit_at(0), None);
        assert_eq!(mass.unit_at(6), None);
        assert_eq!(mass.unit_at(99), None);
    }

    #[test]
    fn test_select() {
        assert_eq!(REGISTRY.select("8").map(|e| e.category), Some(Category::Temperature));
        assert!(REGISTRY.select("0").is_none());
        assert!(REGISTRY.select("abc").is_none());
    }

    #[test]
    fn test_menu_scenarios() {
        assert!((run(Category::Mass, "kilogram", "gram", 2.0).unwrap() - 2000.0).abs() < 1e-9);
        assert!((run(Category::Temperature, "Celsius", "Fahrenheit", 0.0).unwrap() - 32.0).abs() < 1e-9);
        assert!(run(Category::Temperature, "Kelvin", "Celsius", 273.15).unwrap().abs() < 1e-9);
        assert!((run(Category::Angle, "degrees", "radians", 180.0).unwrap() - 3.141594).abs() < 1e-9);
    }

    #[test]
    fn test_identity_is_unsupported_everywhere() {
        for entry in REGISTRY.entries() {
            for unit in entry.units {
                let err = run(entry.category, unit, unit, 1.0).unwrap_err();
                assert_eq!(err, ConversionError::unsupported(entry.category, unit, unit));
            }
        }
    }

    #[test]
    fn test_units_of_other_categories_are_unsupported() {
        for entry in REGISTRY.entries() {
            let own = entry.units[0];
            for other in REGISTRY.entries().iter().filter(|o| o.category != entry.category) {
                for foreign in other.units {
                    assert!(run(entry.category, own, foreign, 1.0).is_err());
                    assert!(run(entry.category, foreign, own, 1.0).is_err());
                }
            }
        }
    }

    #[test]
    fn test_every_listed_pair_converts() {
        for entry in REGISTRY.entries() {
            for from in entry.units {
                for to in entry.units.iter().filter(|u| *u != from) {
                    assert!(run(entry.category, from, to, 1.0).is_ok(), "{}: {} -> {}", entry.category, from, to);
                }
            }
        }
    }

    #[test]
    fn test_conversion_keeps_request() {
        let request = ConversionRequest::new(Category::Length, "meter", "centimeter", 3.0);
        let conversion = REGISTRY.convert(request.clone()).unwrap();
        assert_eq!(conversion.request, request);
        assert!((conversion.result - 300.0).abs() < 1e-9);
    }
}
