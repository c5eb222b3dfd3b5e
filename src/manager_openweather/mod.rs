pub mod errors;
pub mod models;

use log::info;
use reqwest::Client;
use url::form_urlencoded;
use crate::manager_openweather::errors::OpenWeatherError;
use crate::manager_openweather::models::ForecastResponse;

/// Struct for fetching 5 day / 3 hour forecasts from OpenWeather
pub struct OpenWeather {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenWeather {
    /// Returns an OpenWeather struct ready for fetching forecasts
    ///
    /// # Arguments
    ///
    /// * 'base_url' - url to the forecast endpoint, without query
    /// * 'api_key' - OpenWeather API key
    pub fn new(base_url: &str, api_key: &str) -> Result<OpenWeather, OpenWeatherError> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Builds the forecast url from the user search and the chosen search format.
    /// Every part of the search is percent encoded, the comma between city and state is not.
    ///
    /// # Arguments
    ///
    /// * 'input' - free text location from the search form
    /// * 'choice' - search format, one of 'cs' (city, state), 'z' (zip code) or 'll' (lat, long)
    pub fn format_url(&self, input: &str, choice: &str) -> Result<String, OpenWeatherError> {
        match choice {
            "cs" => {
                let query: Vec<String> = parse_input(input).into_iter().map(encode).collect();
                Ok(format!("{}?q={}&appid={}", self.base_url, query.join(","), self.api_key))
            }
            "z" => Ok(format!("{}?zip={}&appid={}", self.base_url, encode(input.trim()), self.api_key)),
            "ll" => {
                let query = parse_input(input);
                let lat = encode(query.first().copied().unwrap_or_default());
                let lon = encode(query.get(1).copied().unwrap_or_default());
                Ok(format!("{}?lat={}&lon={}&appid={}", self.base_url, lat, lon, self.api_key))
            }
            _ => Err(OpenWeatherError::UnknownFormat(choice.to_string())),
        }
    }

    /// Retrieves the forecast for the searched location.
    /// The provider reports failures in the document itself, so anything but a "200" status
    /// code in the returned document is an error regardless of the http status.
    ///
    /// # Arguments
    ///
    /// * 'input' - free text location from the search form
    /// * 'choice' - search format
    pub async fn get_forecast(&self, input: &str, choice: &str) -> Result<ForecastResponse, OpenWeatherError> {
        let url = self.format_url(input, choice)?;
        info!("requesting forecast for '{}' ({})", input, choice);

        let json = self.client
            .get(url)
            .send().await?
            .text().await?;

        let forecast: ForecastResponse = serde_json::from_str(&json)?;

        if !forecast.is_success() {
            return Err(OpenWeatherError::Provider(forecast.cod.map(|c| c.to_string())));
        }
        if !forecast.has_valid_offset() {
            return Err(OpenWeatherError::Document(format!("utc offset {} out of range", forecast.city.timezone)));
        }

        Ok(forecast)
    }
}

/// Splits a comma separated search into at most two trimmed parts, anything after
/// a second comma is dropped
///
/// # Arguments
///
/// * 'input' - free text location from the search form
pub fn parse_input(input: &str) -> Vec<&str> {
    input.split(',').take(2).map(str::trim).collect()
}

fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
