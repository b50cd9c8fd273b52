//! Menu rendering and input parsing
//!
//! Every parser takes one raw input line. Trailing newlines and surrounding
//! whitespace are ignored.

use std::io::{self, Write};
use thiserror::Error;
use unitconv_core::Category;
use unitconv_units::{CategoryEntry, CategoryRegistry};

pub const MAIN_MENU_HEADER: &str = "Select conversion type:";
pub const MAIN_MENU_PROMPT: &str = "Enter option number: ";
pub const UNIT_PROMPT: &str = "Select a unit (enter number): ";
pub const VALUE_PROMPT: &str = "Enter value: ";
pub const EXIT_CODE: &str = "0";
pub const FAREWELL: &str = "Exiting the program.";

/// Rejected user input.
///
/// The display text is exactly what the shell prints.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// Non-numeric or out-of-range main-menu selection
    #[error("Invalid choice. Try again.")]
    InvalidMenuSelection(String),

    /// Non-numeric or out-of-range unit index
    #[error("Error: invalid selection.")]
    InvalidUnitSelection(String),

    /// Value that does not parse as a floating-point number
    #[error("Error: invalid value.")]
    InvalidNumericValue(String),
}

impl InputError {
    /// The offending input, trimmed
    pub fn input(&self) -> &str {
        match self {
            InputError::InvalidMenuSelection(s)
            | InputError::InvalidUnitSelection(s)
            | InputError::InvalidNumericValue(s) => s,
        }
    }
}

/// What the user picked at the main menu
#[derive(Debug, Clone, Copy)]
pub enum MenuChoice<'r> {
    Exit,
    Convert(&'r CategoryEntry),
}

pub fn parse_menu_choice<'r>(line: &str, registry: &'r CategoryRegistry) -> Result<MenuChoice<'r>, InputError> {
    let line = line.trim();
    if line == EXIT_CODE {
        return Ok(MenuChoice::Exit);
    }
    registry
        .select(line)
        .map(MenuChoice::Convert)
        .ok_or_else(|| InputError::InvalidMenuSelection(line.to_string()))
}

/// Resolve a 1-based unit index against the entry's unit list
pub fn parse_unit_choice(line: &str, entry: &CategoryEntry) -> Result<&'static str, InputError> {
    let line = line.trim();
    line.parse::<usize>()
        .ok()
        .and_then(|index| entry.unit_at(index))
        .ok_or_else(|| InputError::InvalidUnitSelection(line.to_string()))
}

pub fn parse_value(line: &str) -> Result<f64, InputError> {
    let line = line.trim();
    line.parse::<f64>()
        .map_err(|_| InputError::InvalidNumericValue(line.to_string()))
}

pub fn write_main_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", MAIN_MENU_HEADER)?;
    for category in Category::ALL {
        writeln!(out, "{}. {}", category.menu_code(), category.label())?;
    }
    writeln!(out, "{}. Exit", EXIT_CODE)?;
    writeln!(out)
}

pub fn write_unit_menu<W: Write>(out: &mut W, units: &[&str]) -> io::Result<()> {
    for (i, unit) in units.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, unit)?;
    }
    writeln!(out)
}
