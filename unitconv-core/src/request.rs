//! Conversion requests and their results

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::Category;

/// Decimal places used when rendering a conversion
pub const DEFAULT_PRECISION: usize = 15;

/// A single conversion asked for by the user.
///
/// Built per interaction and consumed immediately; nothing keeps it around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub category: Category,
    pub from: String,
    pub to: String,
    pub value: f64,
}

impl ConversionRequest {
    pub fn new(category: Category, from: &str, to: &str, value: f64) -> Self {
        Self {
            category,
            from: from.to_string(),
            to: to.to_string(),
            value,
        }
    }
}

/// A successfully executed request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub request: ConversionRequest,
    pub result: f64,
}

impl Conversion {
    pub fn new(request: ConversionRequest, result: f64) -> Self {
        Self { request, result }
    }

    /// Render as `<value> <from> = <result> <to>` with `precision` decimals
    pub fn render(&self, precision: usize) -> String {
        format!(
            "{:.prec$} {} = {:.prec$} {}",
            self.request.value,
            self.request.from,
            self.result,
            self.request.to,
            prec = precision,
        )
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_PRECISION))
    }
}
