//! Factor table for one category

use std::collections::HashMap;
use unitconv_core::Category;

/// One source unit and its outbound factors
pub type Row = (&'static str, &'static [(&'static str, f64)]);

/// Maps source unit -> target unit -> multiplicative factor.
///
/// There is never an entry for a unit to itself.
#[derive(Debug, Clone)]
pub struct FactorTable {
    category: Category,
    rows: HashMap<&'static str, HashMap<&'static str, f64>>,
}

impl FactorTable {
    pub fn from_rows(category: Category, rows: &[Row]) -> Self {
        let rows = rows
            .iter()
            .map(|(from, targets)| (*from, targets.iter().copied().collect()))
            .collect();
        FactorTable { category, rows }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Factor for `from -> to`, or `None` when either side is unknown
    pub fn lookup(&self, from: &str, to: &str) -> Option<f64> {
        self.rows.get(from)?.get(to).copied()
    }

    /// Every (from, to, factor) entry, in no particular order
    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, &'static str, f64)> + '_ {
        self.rows
            .iter()
            .flat_map(|(from, targets)| targets.iter().map(move |(to, factor)| (*from, *to, *factor)))
    }

    /// Number of source units with an outbound row
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `|f(from -> to) * f(to -> from) - 1|`, when both directions exist.
    ///
    /// Zero for a perfectly reciprocal pair.
    pub fn round_trip_deviation(&self, from: &str, to: &str) -> Option<f64> {
        let forward = self.lookup(from, to)?;
        let backward = self.lookup(to, from)?;
        Some((forward * backward - 1.0).abs())
    }
}
