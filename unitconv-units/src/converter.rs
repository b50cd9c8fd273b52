//! Converters
//!
//! Every category converts through the same `UnitConverter` capability. The set
//! of implementations is closed: a factor-table converter for most categories
//! and the formula-based temperature converter.

use unitconv_core::{Category, ConversionError};
use crate::tables::TABLES;
use crate::temperature::TemperatureConverter;

/// Common conversion capability
pub trait UnitConverter {
    fn category(&self) -> Category;

    /// Convert `value` expressed in `from` into `to`
    fn convert_to(&self, from: &str, to: &str, value: f64) -> Result<f64, ConversionError>;
}

/// `value * factor`, factor taken from the category's table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactorConverter {
    category: Category,
}

impl FactorConverter {
    pub fn new(category: Category) -> Self {
        FactorConverter { category }
    }
}

impl UnitConverter for FactorConverter {
    fn category(&self) -> Category {
        self.category
    }

    fn convert_to(&self, from: &str, to: &str, value: f64) -> Result<f64, ConversionError> {
        TABLES
            .lookup(self.category, from, to)
            .map(|factor| value * factor)
            .ok_or_else(|| ConversionError::unsupported(self.category, from, to))
    }
}

/// Closed dispatch over the converter kinds
#[derive(Debug, Clone, Copy)]
pub enum Converter {
    Factor(FactorConverter),
    Temperature(TemperatureConverter),
}

impl Converter {
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Temperature => Converter::Temperature(TemperatureConverter),
            Category::Mass
            | Category::Length
            | Category::Area
            | Category::Volume
            | Category::Speed
            | Category::Pressure
            | Category::Angle => Converter::Factor(FactorConverter::new(category)),
        }
    }
}

impl UnitConverter for Converter {
    fn category(&self) -> Category {
        match self {
            Converter::Factor(c) => c.category(),
            Converter::Temperature(c) => c.category(),
        }
    }

    fn convert_to(&self, from: &str, to: &str, value: f64) -> Result<f64, ConversionError> {
        match self {
            Converter::Factor(c) => c.convert_to(from, to, value),
            Converter::Temperature(c) => c.convert_to(from, to, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn test_kilograms_to_grams() {
        let mass = Converter::for_category(Category::Mass);
        let grams = mass.convert_to("kilogram", "gram", 2.0).unwrap();
        assert!(approx(grams, 2000.0, 1e-9));
    }

    #[test]
    fn test_degrees_to_radians_uses_table_factor() {
        let angle = Converter::for_category(Category::Angle);
        let radians = angle.convert_to("degrees", "radians", 180.0).unwrap();
        assert!(approx(radians, 3.141594, 1e-9));
        assert!(!approx(radians, std::f64::consts::PI, 1e-6));
    }

    #[test]
    fn test_kilometers_to_meters() {
        let length = Converter::for_category(Category::Length);
        assert!(approx(length.convert_to("kilometer", "meter", 1.5).unwrap(), 1500.0, 1e-9));
        assert!(approx(length.convert_to("millimeter", "centimeter", 25.0).unwrap(), 2.5, 1e-12));
    }

    #[test]
    fn test_square_meters_to_square_millimeters() {
        let area = Converter::for_category(Category::Area);
        assert!(approx(area.convert_to("square_meter", "square_millimeter", 2.0).unwrap(), 2e6, 1e-6));
    }

    #[test]
    fn test_atmospheres_to_millimetres_of_mercury() {
        let pressure = Converter::for_category(Category::Pressure);
        let mmhg = pressure.convert_to("atmosphere", "millimetres_of_the_mercury_column", 1.0).unwrap();
        assert!(approx(mmhg, 760.0, 1e-9));
    }

    #[test]
    fn test_zero_and_negative_values_pass_through() {
        let speed = Converter::for_category(Category::Speed);
        assert_eq!(speed.convert_to("meter_per_second", "kilometer_per_hour", 0.0).unwrap(), 0.0);
        assert!(approx(speed.convert_to("meter_per_second", "kilometer_per_hour", -10.0).unwrap(), -36.0, 1e-9));
    }

    #[test]
    fn test_self_conversion_is_unsupported() {
        let volume = Converter::for_category(Category::Volume);
        let err = volume.convert_to("liter", "liter", 1.0).unwrap_err();
        assert_eq!(err, ConversionError::unsupported(Category::Volume, "liter", "liter"));
    }

    #[test]
    fn test_foreign_units_are_unsupported() {
        let mass = Converter::for_category(Category::Mass);
        assert!(mass.convert_to("kilogram", "meter", 1.0).is_err());
        assert!(mass.convert_to("meter", "kilogram", 1.0).is_err());
        assert!(mass.convert_to("Kilogram", "gram", 1.0).is_err());
    }

    #[test]
    fn test_dispatch_matches_category() {
        for category in Category::ALL {
            let converter = Converter::for_category(category);
            assert_eq!(converter.category(), category);
            assert_eq!(
                matches!(converter, Converter::Temperature(_)),
                category.is_temperature()
            );
        }
    }
}
