//! Job date normalization and display.
//!
//! Dates are stored as `YYYY-MM-DD`. Inputs may be plain dates, timestamps
//! or slash-separated dates; timestamps keep the date as written.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use thiserror::Error;

use super::Locale;

/// Storage representation, fixed width and zero padded.
pub const STORAGE_FORMAT: &str = "%Y-%m-%d";

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const THAI_MONTHS: [&str; 12] = [
    "มกราคม",
    "กุมภาพันธ์",
    "มีนาคม",
    "เมษายน",
    "พฤษภาคม",
    "มิถุนายน",
    "กรกฎาคม",
    "สิงหาคม",
    "กันยายน",
    "ตุลาคม",
    "พฤศจิกายน",
    "ธันวาคม",
];

/// Offset between the Gregorian and Thai Buddhist calendars.
const BUDDHIST_ERA_OFFSET: i32 = 543;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("date is empty")]
    Empty,

    #[error("'{0}' is not a recognizable date")]
    Unrecognized(String),
}

/// Normalize any accepted date input to a calendar date.
pub fn normalize_job_date(input: &str) -> Result<NaiveDate, DateError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(DateError::Empty);
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, STORAGE_FORMAT) {
        return Ok(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.date_naive());
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(dt.date());
        }
    }

    NaiveDate::parse_from_str(input, "%Y/%m/%d").map_err(|_| DateError::Unrecognized(input.to_string()))
}

pub fn to_storage(date: NaiveDate) -> String {
    date.format(STORAGE_FORMAT).to_string()
}

/// Long-form date for display, e.g. `September 21, 2024` or `21 กันยายน 2567`.
pub fn format_display(date: NaiveDate, locale: Locale) -> String {
    match locale {
        Locale::En => date.format("%B %-d, %Y").to_string(),
        Locale::Th => format!(
            "{} {} {}",
            date.day(),
            THAI_MONTHS[date.month0() as usize],
            date.year() + BUDDHIST_ERA_OFFSET
        ),
    }
}
