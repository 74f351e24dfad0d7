//! Normalisation of text read from report pages.

use chrono::NaiveDateTime;
use lazy_regex::regex;

use crate::ReportError;

const REPORT_TIME_FORMAT: &str = "%d.%m.%Y %H:%M";
const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Removes line breaks and collapses runs of whitespace into single spaces.
pub fn clean_text(raw: &str) -> String {
    let unbroken = regex!(r"[\r\n]+").replace_all(raw, "");
    regex!(r"\s+")
        .replace_all(unbroken.trim(), " ")
        .into_owned()
}

/// Converts a `dd.mm.yyyy HH:MM` report time to an ISO-8601 local date-time.
pub fn convert_time(value: &str) -> Result<String, ReportError> {
    NaiveDateTime::parse_from_str(&clean_text(value), REPORT_TIME_FORMAT)
        .map(|time| time.format(ISO_FORMAT).to_string())
        .map_err(|source| ReportError::BadTime {
            value: value.to_owned(),
            source,
        })
}
