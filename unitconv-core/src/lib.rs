//! Unitconv Core - Fundamental types
//!
//! This crate provides the core types shared by the conversion engine and the shell:
//! - `Category`: The closed set of measurement domains
//! - `ConversionRequest` / `Conversion`: One conversion and its outcome
//! - `ConversionError`: Structured engine errors

mod category;
mod request;
mod error;

pub use category::Category;
pub use request::{Conversion, ConversionRequest, DEFAULT_PRECISION};
pub use error::{ConversionError, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Category, Conversion, ConversionRequest, ConversionError};
    pub use crate::error::codes;
}
