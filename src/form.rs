use url::form_urlencoded;
use crate::errors::ValidationError;
use crate::manager_forecast::models::HourSelection;

/// A submitted search form
#[derive(Debug)]
pub struct SearchForm {
    pub location: String,
    pub hours: HourSelection,
    pub format: String,
}

impl SearchForm {
    /// Parses an url encoded form body. Hours are checkboxes and may arrive any number
    /// of times, the format is a single choice and must arrive exactly once.
    ///
    /// # Arguments
    ///
    /// * 'body' - raw request body
    pub fn from_body(body: &[u8]) -> Result<SearchForm, ValidationError> {
        let mut location = String::new();
        let mut hours: Vec<String> = Vec::new();
        let mut formats: Vec<String> = Vec::new();

        for (key, value) in form_urlencoded::parse(body) {
            match &*key {
                "weatherSearch" => location = value.into_owned(),
                "weatherHours" => hours.push(value.into_owned()),
                "weatherFormat" => formats.push(value.into_owned()),
                _ => {}
            }
        }

        let hours = HourSelection::new(hours)?;

        let format = match formats.len() {
            0 => return Err(ValidationError::from("a search format must be selected")),
            1 => formats.remove(0),
            _ => return Err(ValidationError::from("only one search format may be selected")),
        };

        Ok(SearchForm { location, hours, format })
    }
}
