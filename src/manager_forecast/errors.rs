use std::fmt;
use std::fmt::Formatter;

/// Error while summarizing a forecast that made it past the provider checks
#[derive(Debug, PartialEq)]
pub struct ForecastError(pub String);

impl fmt::Display for ForecastError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ForecastError: {}", self.0)
    }
}
