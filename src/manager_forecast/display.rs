use chrono::NaiveDate;
use crate::manager_forecast::models::Verdict;

/// Converts one of the three hour slots to a 12 hour clock label, anything outside
/// the known slots becomes "Error"
///
/// # Arguments
///
/// * 'hour' - hour of day in the form "HH:MM:SS"
pub fn hour_label(hour: &str) -> &'static str {
    match hour {
        "00:00:00" => "12:00 AM",
        "03:00:00" => "3:00 AM",
        "06:00:00" => "6:00 AM",
        "09:00:00" => "9:00 AM",
        "12:00:00" => "12:00 PM",
        "15:00:00" => "3:00 PM",
        "18:00:00" => "6:00 PM",
        "21:00:00" => "9:00 PM",
        _ => "Error",
    }
}

/// Month and day, "MM/DD"
pub fn day_label(date: NaiveDate) -> String {
    date.format("%m/%d").to_string()
}

/// Pads the first day with leading blanks when it is shorter than the second day.
/// Typically today has fewer hours left than a full day. The third day is left as is.
///
/// # Arguments
///
/// * 'days' - verdicts for the three days
pub fn pad_first_day(days: &mut [Vec<Verdict>; 3]) {
    while days[0].len() < days[1].len() {
        days[0].insert(0, Verdict::Placeholder);
    }
}
