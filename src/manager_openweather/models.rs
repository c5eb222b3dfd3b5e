use std::fmt;
use std::str::FromStr;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr};

const SAMPLE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const MAX_UTC_OFFSET: i64 = 18 * 3600;

/// Local date and time of a forecast sample as given in `dt_txt`, i.e. "YYYY-MM-DD HH:MM:SS"
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SampleTime(pub NaiveDateTime);

impl FromStr for SampleTime {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDateTime::parse_from_str(s, SAMPLE_TIME_FORMAT).map(SampleTime)
    }
}

impl fmt::Display for SampleTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format(SAMPLE_TIME_FORMAT))
    }
}

/// The provider is not consistent, `cod` comes as "200" on success but as 401 on some failures
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StatusCode {
    Text(String),
    Number(i64),
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StatusCode::Text(code) => write!(f, "{}", code),
            StatusCode::Number(code) => write!(f, "{}", code),
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct Condition {
    pub id: i64,
}

#[serde_as]
#[derive(Deserialize, Debug)]
pub struct ForecastSample {
    #[serde_as(as = "DisplayFromStr")]
    pub dt_txt: SampleTime,
    #[serde(default)]
    pub weather: Vec<Condition>,
}

impl ForecastSample {
    pub fn date(&self) -> NaiveDate {
        self.dt_txt.0.date()
    }

    pub fn time_of_day(&self) -> NaiveTime {
        self.dt_txt.0.time()
    }

    /// Weather code of the primary condition
    pub fn condition_code(&self) -> Option<i64> {
        self.weather.first().map(|c| c.id)
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct City {
    pub name: Option<String>,
    /// Offset from UTC in seconds
    #[serde(default)]
    pub timezone: i64,
}

#[derive(Deserialize, Debug)]
pub struct ForecastResponse {
    pub cod: Option<StatusCode>,
    #[serde(default)]
    pub list: Vec<ForecastSample>,
    #[serde(default)]
    pub city: City,
}

impl ForecastResponse {
    pub fn is_success(&self) -> bool {
        matches!(&self.cod, Some(code) if code.to_string() == "200")
    }

    /// Whether the location's UTC offset is within what any real time zone uses, +/- 18 hours
    pub fn has_valid_offset(&self) -> bool {
        (-MAX_UTC_OFFSET..=MAX_UTC_OFFSET).contains(&self.city.timezone)
    }
}
