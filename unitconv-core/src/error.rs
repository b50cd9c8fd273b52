//! Structured conversion errors
//!
//! Errors never crash the shell. They are values returned by the engine and
//! reported to the user before control goes back to the main menu.

use thiserror::Error;
use crate::Category;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNSUPPORTED_CONVERSION: &str = "UNSUPPORTED_CONVERSION";
}

/// Error returned by a converter
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// No factor or formula exists for the requested unit pair.
    ///
    /// Covers unknown units, units from another category, and converting a
    /// unit to itself.
    #[error("conversion from '{from}' to '{to}' is not supported ({category})")]
    UnsupportedConversion {
        category: Category,
        from: String,
        to: String,
    },
}

impl ConversionError {
    pub fn unsupported(category: Category, from: &str, to: &str) -> Self {
        ConversionError::UnsupportedConversion {
            category,
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            ConversionError::UnsupportedConversion { .. } => codes::UNSUPPORTED_CONVERSION,
        }
    }
}
