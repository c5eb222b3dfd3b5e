use std::fmt;

#[derive(Debug)]
pub enum OpenWeatherError {
    UnknownFormat(String),
    Transport(String),
    Document(String),
    Provider(Option<String>),
}

impl fmt::Display for OpenWeatherError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OpenWeatherError::UnknownFormat(e) => write!(f, "OpenWeatherError::UnknownFormat: {}", e),
            OpenWeatherError::Transport(e) => write!(f, "OpenWeatherError::Transport: {}", e),
            OpenWeatherError::Document(e) => write!(f, "OpenWeatherError::Document: {}", e),
            OpenWeatherError::Provider(Some(code)) => write!(f, "OpenWeatherError::Provider: status code {}", code),
            OpenWeatherError::Provider(None) => write!(f, "OpenWeatherError::Provider: no status code"),
        }
    }
}
impl From<reqwest::Error> for OpenWeatherError {
    fn from(e: reqwest::Error) -> Self {
        OpenWeatherError::Transport(e.to_string())
    }
}
impl From<serde_json::Error> for OpenWeatherError {
    fn from(e: serde_json::Error) -> Self {
        OpenWeatherError::Document(e.to_string())
    }
}
