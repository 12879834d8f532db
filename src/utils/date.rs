use chrono::{Datelike, Duration, NaiveDate};

const DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Monday of the ISO week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Convert a weekday index (0 = Monday .. 6 = Sunday) to its English name,
/// or to its first three letters when abbreviated. Indices outside 0..=6
/// give "N/A" in both forms.
pub fn weekday_name(weekday: u32, abbreviate: bool) -> &'static str {
    match DAYS.get(weekday as usize) {
        Some(&name) => {
            if abbreviate {
                &name[..3]
            } else {
                name
            }
        }
        None => "N/A",
    }
}
