//! Temperature conversions
//!
//! Temperature scales are offset from each other, so they are converted with
//! affine formulas instead of a factor table.

use std::fmt;
use serde::{Deserialize, Serialize};
use unitconv_core::{Category, ConversionError};
use crate::converter::UnitConverter;

/// Menu order for the temperature units
pub const TEMPERATURE_UNITS: &[&str] = &["Celsius", "Fahrenheit", "Kelvin"];

const ABSOLUTE_ZERO_CELSIUS: f64 = 273.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureScale {
    /// Parse a unit name. Names are case-sensitive.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Celsius" => Some(TemperatureScale::Celsius),
            "Fahrenheit" => Some(TemperatureScale::Fahrenheit),
            "Kelvin" => Some(TemperatureScale::Kelvin),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "Celsius",
            TemperatureScale::Fahrenheit => "Fahrenheit",
            TemperatureScale::Kelvin => "Kelvin",
        }
    }
}

impl fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Formula for a directed pair of distinct scales.
///
/// Same-scale pairs have no formula.
pub fn formula(from: TemperatureScale, to: TemperatureScale) -> Option<fn(f64) -> f64> {
    use TemperatureScale::*;

    let f: fn(f64) -> f64 = match (from, to) {
        (Celsius, Fahrenheit) => |v| v * 9.0 / 5.0 + 32.0,
        (Fahrenheit, Celsius) => |v| (v - 32.0) * 5.0 / 9.0,
        (Celsius, Kelvin) => |v| v + ABSOLUTE_ZERO_CELSIUS,
        (Kelvin, Celsius) => |v| v - ABSOLUTE_ZERO_CELSIUS,
        (Fahrenheit, Kelvin) => |v| (v - 32.0) * 5.0 / 9.0 + ABSOLUTE_ZERO_CELSIUS,
        (Kelvin, Fahrenheit) => |v| (v - ABSOLUTE_ZERO_CELSIUS) * 9.0 / 5.0 + 32.0,
        (Celsius, Celsius) | (Fahrenheit, Fahrenheit) | (Kelvin, Kelvin) => return None,
    };
    Some(f)
}

/// Converter for the temperature category
#[derive(Debug, Clone, Copy, Default)]
pub struct TemperatureConverter;

impl UnitConverter for TemperatureConverter {
    fn category(&self) -> Category {
        Category::Temperature
    }

    fn convert_to(&self, from: &str, to: &str, value: f64) -> Result<f64, ConversionError> {
        TemperatureScale::parse(from)
            .zip(TemperatureScale::parse(to))
            .and_then(|(a, b)| formula(a, b))
            .map(|f| f(value))
            .ok_or_else(|| ConversionError::unsupported(Category::Temperature, from, to))
    }
}
