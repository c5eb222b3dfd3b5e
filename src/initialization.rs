use std::{env, fs};
use serde::Deserialize;
use crate::errors::ConfigError;
use crate::logging::setup_logger;

const API_KEY_VAR: &str = "OPENWEATHER_API_KEY";

#[derive(Deserialize)]
pub struct General {
    pub log_path: Option<String>,
    pub log_level: String,
    pub log_to_stdout: bool,
}

#[derive(Deserialize)]
pub struct WebServer {
    pub bind_address: String,
    pub bind_port: u16,
}

#[derive(Deserialize)]
pub struct OpenWeatherParameters {
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
}

#[derive(Deserialize)]
pub struct Config {
    pub general: General,
    pub web_server: WebServer,
    pub open_weather: OpenWeatherParameters,
}

/// Returns a configuration struct for the application and starts logging
///
/// The config file is given as '--config=<path>' and defaults to 'config.toml'.
/// An API key in the environment variable OPENWEATHER_API_KEY wins over the one in the file.
pub fn config() -> Result<Config, ConfigError> {
    let args: Vec<String> = env::args().collect();
    let config_path = args
        .iter()
        .find_map(|a| a.strip_prefix("--config="))
        .unwrap_or("config.toml");

    let toml = fs::read_to_string(config_path)?;
    let config = parse_config(&toml, env::var(API_KEY_VAR).ok())?;

    setup_logger(config.general.log_path.as_deref(), &config.general.log_level, config.general.log_to_stdout)?;

    Ok(config)
}

/// Parses the toml configuration
///
/// # Arguments
///
/// * 'toml' - content of the config file
/// * 'api_key' - API key overriding whatever is in the file
fn parse_config(toml: &str, api_key: Option<String>) -> Result<Config, ConfigError> {
    let mut config: Config = toml::from_str(toml)?;

    if let Some(key) = api_key {
        config.open_weather.api_key = key;
    }
    if config.open_weather.api_key.is_empty() {
        return Err(ConfigError::from("no OpenWeather API key configured"));
    }

    Ok(config)
}
