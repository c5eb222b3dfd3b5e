pub mod display;
pub mod errors;
pub mod models;

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use crate::manager_forecast::errors::ForecastError;
use crate::manager_forecast::models::{DisplayResult, HourSelection, Verdict};
use crate::manager_openweather::models::ForecastResponse;

const UNKNOWN_CITY: &str = "Unknown City Name";

/// Summarizes a forecast into three days of verdicts for the selected hours.
///
/// The first day is today at the location unless none of the selected hours are left
/// in today's part of the forecast, in which case the summary starts tomorrow.
///
/// # Arguments
///
/// * 'hours' - hours of day to summarize
/// * 'forecast' - forecast as returned from the provider, samples in chronological order
/// * 'now' - current time
pub fn gather_results(hours: &HourSelection, forecast: &ForecastResponse, now: DateTime<Utc>) -> Result<DisplayResult, ForecastError> {
    let days = day_window(start_date(hours, forecast, now)?)?;

    let mut verdicts: [Vec<Verdict>; 3] = days.map(|day| {
        forecast.list
            .iter()
            .filter(|s| s.date() == day && hours.contains(s.time_of_day()))
            .map(|s| s.condition_code().map_or(Verdict::Reconsider, classify))
            .collect()
    });
    display::pad_first_day(&mut verdicts);

    let [day_one, day_two, day_three] = verdicts;

    Ok(DisplayResult {
        location_name: forecast.city.name.clone().unwrap_or_else(|| UNKNOWN_CITY.to_string()),
        display_days: days.iter().map(|d| display::day_label(*d)).collect(),
        display_hours: hours.iter().map(|h| display::hour_label(h).to_string()).collect(),
        day_one,
        day_two,
        day_three,
    })
}

/// Returns today's date at the location if the forecast has any of the selected hours
/// left for today, otherwise tomorrow's date
///
/// # Arguments
///
/// * 'hours' - hours of day to summarize
/// * 'forecast' - forecast as returned from the provider
/// * 'now' - current time
pub fn start_date(hours: &HourSelection, forecast: &ForecastResponse, now: DateTime<Utc>) -> Result<NaiveDate, ForecastError> {
    let today = TimeDelta::try_seconds(forecast.city.timezone)
        .and_then(|offset| now.checked_add_signed(offset))
        .ok_or_else(|| ForecastError(format!("utc offset {} out of range", forecast.city.timezone)))?
        .date_naive();

    if forecast.list.iter().any(|s| s.date() == today && hours.contains(s.time_of_day())) {
        Ok(today)
    } else {
        next_day(today)
    }
}

/// Three consecutive calendar days starting with the given date
pub fn day_window(start: NaiveDate) -> Result<[NaiveDate; 3], ForecastError> {
    let second = next_day(start)?;
    let third = next_day(second)?;

    Ok([start, second, third])
}

fn next_day(date: NaiveDate) -> Result<NaiveDate, ForecastError> {
    date.succ_opt().ok_or_else(|| ForecastError(format!("no day after {}", date)))
}

/// Clear skies and clouds (800 and up) as well as mist, haze and the like (700 - 749)
/// are fine, everything else is worth reconsidering
pub fn classify(code: i64) -> Verdict {
    if code >= 800 || (700..750).contains(&code) {
        Verdict::Clear
    } else {
        Verdict::Reconsider
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;
    use Verdict::*;

    fn forecast(samples: &[(&str, i64)], name: Option<&str>, timezone: i64) -> ForecastResponse {
        let list: Vec<_> = samples
            .iter()
            .map(|(time, id)| json!({"dt_txt": time, "weather": [{"id": id}]}))
            .collect();

        serde_json::from_value(json!({
            "cod": "200",
            "list": list,
            "city": {"name": name, "timezone": timezone}
        }))
        .unwrap()
    }

    fn hours(hours: &[&str]) -> HourSelection {
        HourSelection::new(hours.iter().map(|h| h.to_string()).collect()).unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 7, 12, 0, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn starts_today_when_selected_hours_remain() {
        let f = forecast(&[("2024-01-07 15:00:00", 800), ("2024-01-07 18:00:00", 800)], None, 0);

        assert_eq!(start_date(&hours(&["18:00:00"]), &f, now()), Ok(date(2024, 1, 7)));
    }

    #[test]
    fn starts_tomorrow_when_selected_hours_have_passed() {
        let f = forecast(&[("2024-01-07 15:00:00", 800), ("2024-01-08 09:00:00", 800)], None, 0);

        assert_eq!(start_date(&hours(&["09:00:00"]), &f, now()), Ok(date(2024, 1, 8)));
    }

    #[test]
    fn starts_tomorrow_without_samples() {
        let f = forecast(&[], None, 0);

        assert_eq!(start_date(&hours(&["09:00:00"]), &f, now()), Ok(date(2024, 1, 8)));
    }

    #[test]
    fn today_follows_location_offset() {
        let late = Utc.with_ymd_and_hms(2024, 1, 7, 23, 30, 0).unwrap();
        let f = forecast(&[("2024-01-08 03:00:00", 800)], None, 3600);

        assert_eq!(start_date(&hours(&["03:00:00"]), &f, late), Ok(date(2024, 1, 8)));
    }

    #[test]
    fn today_follows_negative_location_offset() {
        let early = Utc.with_ymd_and_hms(2024, 1, 8, 2, 0, 0).unwrap();
        let f = forecast(&[("2024-01-07 21:00:00", 800)], None, -18000);

        assert_eq!(start_date(&hours(&["21:00:00"]), &f, early), Ok(date(2024, 1, 7)));
    }

    #[test]
    fn absurd_offset_is_an_error() {
        let f = forecast(&[("2024-01-07 15:00:00", 800)], Some("London"), 10_000_000_000_000);

        assert!(start_date(&hours(&["15:00:00"]), &f, now()).is_err());
        assert!(gather_results(&hours(&["15:00:00"]), &f, now()).is_err());
    }

    #[test]
    fn window_at_end_of_calendar_is_an_error() {
        assert!(day_window(NaiveDate::MAX).is_err());
    }

    #[test]
    fn window_crosses_month_and_year() {
        assert_eq!(day_window(date(2000, 1, 31)), Ok([date(2000, 1, 31), date(2000, 2, 1), date(2000, 2, 2)]));
        assert_eq!(day_window(date(1999, 12, 31)), Ok([date(1999, 12, 31), date(2000, 1, 1), date(2000, 1, 2)]));
        assert_eq!(day_window(date(2024, 2, 28)), Ok([date(2024, 2, 28), date(2024, 2, 29), date(2024, 3, 1)]));
    }

    #[test]
    fn classification_boundaries() {
        assert_eq!(classify(804), Clear);
        assert_eq!(classify(800), Clear);
        assert_eq!(classify(711), Clear);
        assert_eq!(classify(700), Clear);
        assert_eq!(classify(749), Clear);
        assert_eq!(classify(750), Reconsider);
        assert_eq!(classify(699), Reconsider);
        assert_eq!(classify(500), Reconsider);
    }

    #[test]
    fn summarizes_three_full_days() {
        let f = forecast(
            &[
                ("2024-01-07 15:00:00", 804),
                ("2024-01-07 18:00:00", 804),
                ("2024-01-08 15:00:00", 804),
                ("2024-01-08 18:00:00", 804),
                ("2024-01-09 15:00:00", 804),
                ("2024-01-09 18:00:00", 804),
            ],
            Some("London"),
            0,
        );

        let result = gather_results(&hours(&["15:00:00", "18:00:00"]), &f, now()).unwrap();

        assert_eq!(
            result,
            DisplayResult {
                location_name: "London".to_string(),
                display_days: vec!["01/07".to_string(), "01/08".to_string(), "01/09".to_string()],
                display_hours: vec!["3:00 PM".to_string(), "6:00 PM".to_string()],
                day_one: vec![Clear, Clear],
                day_two: vec![Clear, Clear],
                day_three: vec![Clear, Clear],
            }
        );
    }

    #[test]
    fn short_today_is_padded_and_other_samples_ignored() {
        let f = forecast(
            &[
                ("2024-01-07 18:00:00", 500),
                ("2024-01-07 21:00:00", 800),
                ("2024-01-08 15:00:00", 701),
                ("2024-01-08 18:00:00", 200),
                ("2024-01-09 18:00:00", 800),
                ("2024-01-10 15:00:00", 800),
            ],
            Some("Springfield"),
            0,
        );

        let result = gather_results(&hours(&["15:00:00", "18:00:00"]), &f, now()).unwrap();

        assert_eq!(result.day_one, vec![Placeholder, Reconsider]);
        assert_eq!(result.day_two, vec![Clear, Reconsider]);
        assert_eq!(result.day_three, vec![Clear]);
    }

    #[test]
    fn rolls_forward_when_today_is_over() {
        let f = forecast(
            &[
                ("2024-01-07 21:00:00", 800),
                ("2024-01-08 06:00:00", 800),
                ("2024-01-09 06:00:00", 601),
                ("2024-01-10 06:00:00", 741),
            ],
            Some("Oslo"),
            0,
        );

        let result = gather_results(&hours(&["06:00:00"]), &f, now()).unwrap();

        assert_eq!(result.display_days, vec!["01/08", "01/09", "01/10"]);
        assert_eq!(result.day_one, vec![Clear]);
        assert_eq!(result.day_two, vec![Reconsider]);
        assert_eq!(result.day_three, vec![Clear]);
    }

    #[test]
    fn sample_without_condition_is_reconsidered() {
        let f: ForecastResponse = serde_json::from_value(json!({
            "cod": "200",
            "list": [{"dt_txt": "2024-01-07 15:00:00", "weather": []}],
            "city": {"name": "Nowhere", "timezone": 0}
        }))
        .unwrap();

        let result = gather_results(&hours(&["15:00:00"]), &f, now()).unwrap();

        assert_eq!(result.day_one, vec![Reconsider]);
    }

    #[test]
    fn missing_city_name_falls_back() {
        let f = forecast(&[("2024-01-07 15:00:00", 800)], None, 0);

        let result = gather_results(&hours(&["15:00:00", "16:00:00"]), &f, now()).unwrap();

        assert_eq!(result.location_name, "Unknown City Name");
        assert_eq!(result.display_hours, vec!["3:00 PM", "Error"]);
    }
}
