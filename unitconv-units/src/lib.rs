//! Unitconv Units - Conversion engine
//!
//! Fixed unit tables and converters for the eight measurement categories.
//! Every category except temperature converts by table lookup and
//! multiplication; temperature uses affine formulas.
//!
//! Categories:
//! - Mass (kilogram, gram, pound, tonne, milligram)
//! - Length (meter, kilometer, centimeter, decimeter, millimeter)
//! - Area (square_meter, square_kilometer, ...)
//! - Volume (volume_meter, ..., liter)
//! - Speed (meter_per_second, ..., Mach_number)
//! - Pressure (pascal, atmosphere, bar, ...)
//! - Angle (degrees, radians, grads, turnovers, sec, min, hour)
//! - Temperature (Celsius, Fahrenheit, Kelvin)

mod table;
mod tables;
mod temperature;
mod converter;
mod registry;

pub use table::{FactorTable, Row};
pub use tables::{TableStore, TABLES};
pub use temperature::{formula, TemperatureConverter, TemperatureScale, TEMPERATURE_UNITS};
pub use converter::{Converter, FactorConverter, UnitConverter};
pub use registry::{units_for, CategoryEntry, CategoryRegistry, REGISTRY};

/// Re-export core types alongside the engine
pub mod prelude {
    pub use crate::{CategoryEntry, CategoryRegistry, Converter, UnitConverter, REGISTRY};
    pub use unitconv_core::prelude::*;
}
