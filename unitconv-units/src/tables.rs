//! Factor tables for every factor-based category
//!
//! Values are kept exactly as the converter has always shipped them, including
//! the rounded and non-reciprocal constants. The reciprocity tests below pin
//! the known outliers.

use std::collections::HashMap;
use std::sync::LazyLock;
use unitconv_core::Category;
use crate::table::{FactorTable, Row};

/// Global table store, built on first use
pub static TABLES: LazyLock<TableStore> = LazyLock::new(TableStore::new);

const MASS: &[Row] = &[
    ("kilogram", &[("gram", 1000.0), ("pound", 2.20462), ("tonne", 0.001), ("milligram", 1e6)]),
    ("gram", &[("kilogram", 0.001), ("pound", 0.00220462), ("tonne", 1e-6), ("milligram", 1000.0)]),
    ("pound", &[("kilogram", 0.453592), ("gram", 453.592), ("tonne", 0.01638), ("milligram", 16380000.0)]),
    ("tonne", &[("gram", 1e6), ("pound", 61.05), ("kilogram", 1000.0), ("milligram", 1e9)]),
    ("milligram", &[("gram", 1e-3), ("pound", 6.11e-8), ("tonne", 1e-9), ("kilogram", 1e-6)]),
];

const LENGTH: &[Row] = &[
    ("meter", &[("kilometer", 1e-3), ("centimeter", 100.0), ("decimeter", 10.0), ("millimeter", 1000.0)]),
    ("kilometer", &[("meter", 1000.0), ("centimeter", 1e5), ("decimeter", 1e4), ("millimeter", 1e6)]),
    ("centimeter", &[("meter", 1e-2), ("kilometer", 1e-5), ("decimeter", 0.1), ("millimeter", 10.0)]),
    ("decimeter", &[("meter", 0.1), ("kilometer", 1e-4), ("centimeter", 10.0), ("millimeter", 100.0)]),
    ("millimeter", &[("meter", 1e-3), ("kilometer", 1e-6), ("centimeter", 0.1), ("decimeter", 0.01)]),
];

const AREA: &[Row] = &[
    ("square_meter", &[("square_kilometer", 1e-6), ("square_centimeter", 1e4), ("square_decimeter", 1e2), ("square_millimeter", 1e6)]),
    ("square_kilometer", &[("square_meter", 1e6), ("square_centimeter", 1e10), ("square_decimeter", 1e8), ("square_millimeter", 1e12)]),
    ("square_centimeter", &[("square_meter", 1e-4), ("square_kilometer", 1e-10), ("square_decimeter", 1e-2), ("square_millimeter", 1e2)]),
    ("square_decimeter", &[("square_meter", 1e-2), ("square_kilometer", 1e-8), ("square_centimeter", 1e2), ("square_millimeter", 1e4)]),
    ("square_millimeter", &[("square_meter", 1e-6), ("square_kilometer", 1e-12), ("square_centimeter", 1e-2), ("square_decimeter", 1e-4)]),
];

const VOLUME: &[Row] = &[
    ("volume_meter", &[("volume_decimeter", 1000.0), ("volume_centimeter", 1e6), ("volume_millimeter", 1e9), ("volume_kilometer", 0.000001), ("liter", 1000.0)]),
    ("volume_decimeter", &[("volume_meter", 0.001), ("volume_centimeter", 1000.0), ("volume_millimeter", 1e6), ("volume_kilometer", 1e-12), ("liter", 1.0)]),
    ("volume_centimeter", &[("volume_meter", 1e-6), ("volume_decimeter", 1e-3), ("volume_millimeter", 1e3), ("volume_kilometer", 1e-15), ("liter", 1e-3)]),
    ("volume_millimeter", &[("volume_meter", 1e-9), ("volume_decimeter", 1e-6), ("volume_centimeter", 1e-3), ("volume_kilometer", 1e-18), ("liter", 1e-6)]),
    ("volume_kilometer", &[("volume_meter", 1e9), ("volume_decimeter", 1e12), ("volume_centimeter", 1e15), ("volume_millimeter", 1e18), ("liter", 1e12)]),
    ("liter", &[("volume_meter", 1e-3), ("volume_decimeter", 1.0), ("volume_centimeter", 1e3), ("volume_millimeter", 1e6), ("volume_kilometer", 1e-12)]),
];

const SPEED: &[Row] = &[
    ("meter_per_second", &[("kilometer_per_hour", 3.6), ("kilometer_per_second", 1e-3), ("sea_speed", 1.94384), ("Mach_number", 0.002931)]),
    ("kilometer_per_second", &[("kilometer_per_hour", 3600.0), ("meter_per_second", 1e3), ("sea_speed", 1943.84), ("Mach_number", 2.94)]),
    ("kilometer_per_hour", &[("meter_per_second", 0.277778), ("kilometer_per_second", 0.000278), ("sea_speed", 0.53996), ("Mach_number", 0.00081)]),
    ("sea_speed", &[("meter_per_second", 0.514444), ("kilometer_per_second", 0.000514), ("kilometer_per_hour", 1.852), ("Mach_number", 0.0015)]),
    ("Mach_number", &[("meter_per_second", 343.0), ("kilometer_per_second", 0.343), ("kilometer_per_hour", 1235.52), ("sea_speed", 666.739)]),
];

const PRESSURE: &[Row] = &[
    ("pascal", &[("millimetres_of_the_mercury_column", 0.007501), ("metres_of_the_water_column", 0.101972), ("atmosphere", 1e-5), ("bar", 1e-5)]),
    ("millimetres_of_the_mercury_column", &[("pascal", 133.32), ("metres_of_the_water_column", 13.6), ("atmosphere", 0.001316), ("bar", 0.001333)]),
    ("metres_of_the_water_column", &[("pascal", 9.81), ("millimetres_of_the_mercury_column", 0.073556), ("atmosphere", 0.000097), ("bar", 0.000098)]),
    ("atmosphere", &[("pascal", 101325.0), ("metres_of_the_water_column", 10332.27), ("millimetres_of_the_mercury_column", 760.0), ("bar", 1.01)]),
    ("bar", &[("pascal", 100000.0), ("metres_of_the_water_column", 10197.16), ("millimetres_of_the_mercury_column", 750.06), ("atmosphere", 0.986923)]),
];

const ANGLE: &[Row] = &[
    ("degrees", &[("radians", 0.0174533), ("grads", 1.11111), ("turnovers", 0.00277778), ("sec", 3600.0), ("min", 60.0), ("hour", 0.0666667)]),
    ("radians", &[("degrees", 57.2958), ("grads", 63.662), ("turnovers", 0.159155), ("sec", 206265.0), ("min", 3437.85), ("hour", 3.81972)]),
    ("grads", &[("degrees", 0.9), ("radians", 0.015708), ("turnovers", 0.0025), ("sec", 3240.0), ("min", 54.0), ("hour", 0.06)]),
    ("turnovers", &[("degrees", 360.0), ("radians", 6.28319), ("grads", 400.0), ("sec", 1296000.0), ("min", 21600.0), ("hour", 24.0)]),
    ("sec", &[("degrees", 0.000277778), ("radians", 4.84814e-6), ("grads", 0.000308642), ("turnovers", 1.2861e-6), ("min", 0.0166667), ("hour", 0.0000185185)]),
    ("min", &[("degrees", 0.0166667), ("radians", 0.000290888), ("grads", 0.0185185), ("turnovers", 0.0000463), ("sec", 60.0), ("hour", 0.00111111)]),
    ("hour", &[("degrees", 15.0), ("radians", 0.261799), ("grads", 16.6667), ("turnovers", 0.0416667), ("sec", 54000.0), ("min", 900.0)]),
];

/// Factor tables keyed by category. Temperature has none.
pub struct TableStore {
    tables: HashMap<Category, FactorTable>,
}

impl TableStore {
    pub fn new() -> Self {
        let tables: HashMap<_, _> = [
            (Category::Mass, MASS),
            (Category::Length, LENGTH),
            (Category::Area, AREA),
            (Category::Volume, VOLUME),
            (Category::Speed, SPEED),
            (Category::Pressure, PRESSURE),
            (Category::Angle, ANGLE),
        ]
        .into_iter()
        .map(|(category, rows)| (category, FactorTable::from_rows(category, rows)))
        .collect();

        tracing::debug!(tables = tables.len(), "factor tables built");
        TableStore { tables }
    }

    /// Table for a category, `None` for temperature
    pub fn get(&self, category: Category) -> Option<&FactorTable> {
        self.tables.get(&category)
    }

    pub fn lookup(&self, category: Category, from: &str, to: &str) -> Option<f64> {
        self.get(category)?.lookup(from, to)
    }
}

impl Default for TableStore {
    fn default() -> Self {
        Self::new()
    }
}
