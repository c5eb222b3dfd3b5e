use std::fmt;
use std::fmt::Formatter;
use log4rs::config::runtime::ConfigErrors;
use log::SetLoggerError;
use serde::Serialize;
use crate::manager_forecast::errors::ForecastError;
use crate::manager_openweather::errors::OpenWeatherError;

/// Error representing an unrecoverable error that will halt the application
///
#[derive(Debug)]
pub struct UnrecoverableError(pub String);
impl fmt::Display for UnrecoverableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "UnrecoverableError: {}", self.0)
    }
}
impl From<std::io::Error> for UnrecoverableError {
    fn from(e: std::io::Error) -> Self { UnrecoverableError(e.to_string()) }
}
impl From<ConfigError> for UnrecoverableError {
    fn from(e: ConfigError) -> Self {
        UnrecoverableError(e.to_string())
    }
}
impl From<OpenWeatherError> for UnrecoverableError {
    fn from(e: OpenWeatherError) -> Self { UnrecoverableError(e.to_string()) }
}

/// Errors while managing configuration
///
#[derive(Debug)]
pub struct ConfigError(pub String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ConfigError: {}", self.0)
    }
}
impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self { ConfigError(e.to_string()) }
}
impl From<SetLoggerError> for ConfigError {
    fn from(e: SetLoggerError) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<ConfigErrors> for ConfigError {
    fn from(e: ConfigErrors) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<&str> for ConfigError {
    fn from(e: &str) -> Self { ConfigError(e.to_string()) }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<log::ParseLevelError> for ConfigError {
    fn from(e: log::ParseLevelError) -> Self { ConfigError(e.to_string()) }
}

/// Errors from a search form that is missing required fields
///
#[derive(Debug, PartialEq)]
pub struct ValidationError(pub String);
impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { write!(f, "ValidationError: {}", self.0) }
}
impl From<&str> for ValidationError {
    fn from(e: &str) -> Self { ValidationError(e.to_string()) }
}

/// User facing error, the only failure form that is handed over for rendering
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayError {
    pub code: String,
    pub message: String,
}

impl DisplayError {
    /// Maps a provider status code to a code and message fit for display.
    /// Unknown or absent codes all end up as a generic server problem.
    ///
    /// # Arguments
    ///
    /// * 'code' - status code as reported by the forecast provider, if any
    pub fn from_code(code: Option<&str>) -> Self {
        let (code, message) = match code {
            Some("401") => ("401", "Invalid or missing API key."),
            Some("404") => ("404", "The weather of the location you searched for could not be found."),
            Some("429") => ("429", "The API call limit has been met, try again later."),
            Some("400") => ("400", "Bad request sent. Make sure your search query is correct and try again."),
            _ => ("500", "A problem occurred on the server, ensure your submission was valid and try again later."),
        };

        DisplayError { code: code.to_string(), message: message.to_string() }
    }

    pub fn bad_request() -> Self {
        DisplayError::from_code(Some("400"))
    }
}

impl From<&ValidationError> for DisplayError {
    fn from(_: &ValidationError) -> Self { DisplayError::bad_request() }
}

impl From<&OpenWeatherError> for DisplayError {
    fn from(e: &OpenWeatherError) -> Self {
        match e {
            OpenWeatherError::UnknownFormat(_) => DisplayError::bad_request(),
            OpenWeatherError::Provider(code) => DisplayError::from_code(code.as_deref()),
            OpenWeatherError::Transport(_) | OpenWeatherError::Document(_) => DisplayError::from_code(None),
        }
    }
}

impl From<&ForecastError> for DisplayError {
    fn from(_: &ForecastError) -> Self { DisplayError::from_code(None) }
}
