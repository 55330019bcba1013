use std::fmt;

/// Formats a float for inline CSS: shortest round-trip digits, and negative
/// zero printed as `0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CssNumber(pub f64);

impl fmt::Display for CssNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // -0.0 + 0.0 == +0.0
        write!(f, "{}", self.0 + 0.0)
    }
}
