use chrono::{DateTime, NaiveDate, TimeDelta};

use crate::error::{ScError, ScResult};

const EPOCH: NaiveDate = NaiveDate::from_ymd_opt(1970, 1, 1).expect("valid epoch");

pub fn date_from_days_after_epoch(days: i32) -> Option<NaiveDate> {
    EPOCH.checked_add_signed(TimeDelta::days(days.into()))
}

/// Parses the date part of `s`, dropping any time of day or offset.
pub fn date_from_str(s: &str) -> ScResult<NaiveDate> {
    const DATE_FORMATS: &[&str] = &[
        "%Y%m%d",
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%m/%d/%Y",
        "%Y%m%dT%H%M%S",        // ISO 8601 Basic
        "%Y-%m-%dT%H:%M:%S%.f", // ISO 8601 Extended
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];
    const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M:%S%.f%:z"];

    let s = s.trim();

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Ok(date);
        }
    }

    for format in OFFSET_FORMATS {
        if let Ok(datetime) = DateTime::parse_from_str(s, format) {
            return Ok(datetime.date_naive());
        }
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(s) {
        // RFC 3339
        return Ok(datetime.date_naive());
    }

    Err(ScError::Invalid {
        code: "INVALID_DATE",
        message: format!("Unable to parse date '{s}'"),
    })
}

pub fn date_to_str(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn days_after_epoch(date: &NaiveDate) -> Option<i32> {
    i32::try_from((*date - EPOCH).num_days()).ok()
}
