//! Shell options

use unitconv_core::DEFAULT_PRECISION;

/// Presentation options for an interactive session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellOptions {
    /// Decimal places for the value and result in the output line
    pub precision: usize,
    /// Print the farewell line when the user exits
    pub farewell: bool,
}

impl ShellOptions {
    pub fn new() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            farewell: true,
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_farewell(mut self, enabled: bool) -> Self {
        self.farewell = enabled;
        self
    }
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ShellOptions::default();
        assert_eq!(options.precision, 15);
        assert!(options.farewell);
    }

    #[test]
    fn test_builder() {
        let options = ShellOptions::new().with_precision(3).with_farewell(false);
        assert_eq!(options, ShellOptions { precision: 3, farewell: false });
    }
}
