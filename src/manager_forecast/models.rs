use chrono::NaiveTime;
use serde::Serialize;
use crate::errors::ValidationError;

/// Hours of day the user wants a forecast for, in the form "HH:MM:SS".
/// Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct HourSelection(Vec<String>);

impl HourSelection {
    /// Creates a new hour selection
    ///
    /// # Arguments
    ///
    /// * 'hours' - selected hours in the order they were given
    pub fn new(hours: Vec<String>) -> Result<Self, ValidationError> {
        if hours.is_empty() {
            return Err(ValidationError::from("at least one hour must be selected"));
        }

        Ok(HourSelection(hours))
    }

    /// Whether the time of day of a forecast sample is among the selected hours
    pub fn contains(&self, time: NaiveTime) -> bool {
        let time = time.format("%H:%M:%S").to_string();
        self.0.iter().any(|h| *h == time)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Clear,
    Reconsider,
    /// Blank cell used to align a short first day
    #[serde(rename = " ")]
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayResult {
    pub location_name: String,
    pub display_days: Vec<String>,
    pub display_hours: Vec<String>,
    pub day_one: Vec<Verdict>,
    pub day_two: Vec<Verdict>,
    pub day_three: Vec<Verdict>,
}
